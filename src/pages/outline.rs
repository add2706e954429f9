//! Gated topic outline page.

use leptos::prelude::*;

use crate::components::top_bar::TopBar;
use crate::components::topic_section::TopicSection;
use crate::state::session::{GateOutcome, LOGIN_URL, SessionGate};
use crate::util::navigate;
use crate::util::storage::BrowserStore;

/// Every element id this page renders for the outline. The declared section
/// table is bound against this set, so a binding whose ids are dropped from
/// the markup is skipped without breaking the rest of the page.
pub const OUTLINE_ELEMENT_IDS: [&str; 12] = [
    "clicktopics",
    "topics",
    "clickalgo",
    "algorithmtopics",
    "clickds",
    "DStopics",
    "clickprobability",
    "probabilitytopics",
    "greedyapproach",
    "greedytopic",
    "dynamicprogramming",
    "dynamictopic",
];

/// Topic outline page — the gated view.
/// Redirects to the login view unless the session flag is set.
#[component]
pub fn OutlinePage() -> impl IntoView {
    // Session check on load; runs client-side only, like all effects.
    Effect::new(move || {
        let gate = SessionGate::new(BrowserStore);
        if gate.check() == GateOutcome::RedirectToLogin {
            leptos::logging::log!("no session, redirecting to {LOGIN_URL}");
            navigate::redirect(LOGIN_URL);
        }
    });

    view! {
        <div class="outline-page">
            <TopBar/>
            <main class="outline-page__content">
                <TopicSection trigger_id="clicktopics" target_id="topics" label="Topics">
                    <TopicSection trigger_id="clickalgo" target_id="algorithmtopics" label="Algorithms">
                        <ul class="topic-list">
                            <li>"Sorting and searching"</li>
                            <li>"Recursion and backtracking"</li>
                            <li>"Graph traversal"</li>
                        </ul>
                        <TopicSection
                            trigger_id="greedyapproach"
                            target_id="greedytopic"
                            label="Greedy Approach"
                        >
                            <ul class="topic-list">
                                <li>"Activity selection"</li>
                                <li>"Fractional knapsack"</li>
                                <li>"Huffman coding"</li>
                            </ul>
                        </TopicSection>
                        <TopicSection
                            trigger_id="dynamicprogramming"
                            target_id="dynamictopic"
                            label="Dynamic Programming"
                        >
                            <ul class="topic-list">
                                <li>"Memoization and tabulation"</li>
                                <li>"Longest common subsequence"</li>
                                <li>"0/1 knapsack"</li>
                            </ul>
                        </TopicSection>
                    </TopicSection>
                    <TopicSection trigger_id="clickds" target_id="DStopics" label="Data Structures">
                        <ul class="topic-list">
                            <li>"Arrays and strings"</li>
                            <li>"Linked lists"</li>
                            <li>"Trees and heaps"</li>
                            <li>"Hash tables"</li>
                        </ul>
                    </TopicSection>
                    <TopicSection
                        trigger_id="clickprobability"
                        target_id="probabilitytopics"
                        label="Probability"
                    >
                        <ul class="topic-list">
                            <li>"Conditional probability"</li>
                            <li>"Expected value"</li>
                            <li>"Common distributions"</li>
                        </ul>
                    </TopicSection>
                </TopicSection>
            </main>
        </div>
    }
}
