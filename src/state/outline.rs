//! Collapsible-outline state: the declared section table and per-section
//! visibility.
//!
//! DESIGN
//! ======
//! Visibility lives in a map owned by [`OutlineState`], keyed by target id;
//! the rendering layer is a collaborator that reads [`OutlineState::is_visible`]
//! and reports activations via [`OutlineState::activate`]. Element presence is
//! an explicit [`ElementLookup`] query rather than a fallible DOM call, so a
//! partially-rendered page skips bindings silently without error paths.

#[cfg(test)]
#[path = "outline_test.rs"]
mod outline_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Visibility of one bound section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Collapsed; the section body is not shown.
    #[default]
    Hidden,
    /// Expanded; the section body is shown.
    Visible,
}

impl Visibility {
    /// The opposite state.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Hidden => Self::Visible,
            Self::Visible => Self::Hidden,
        }
    }
}

/// One row of the declared section table: which trigger toggles which target,
/// and which section contains the target.
#[derive(Clone, Copy, Debug)]
pub struct SectionBinding {
    /// Id of the button element that toggles the section.
    pub trigger: &'static str,
    /// Id of the section container whose visibility flips.
    pub target: &'static str,
    /// Target id of the enclosing section, or `None` for the outline root.
    pub parent: Option<&'static str>,
}

/// The fixed outline hierarchy: the topics root, its three subject sections,
/// and the two panels nested under Algorithms.
pub const SECTION_BINDINGS: [SectionBinding; 6] = [
    SectionBinding { trigger: "clicktopics", target: "topics", parent: None },
    SectionBinding { trigger: "clickalgo", target: "algorithmtopics", parent: Some("topics") },
    SectionBinding { trigger: "clickds", target: "DStopics", parent: Some("topics") },
    SectionBinding { trigger: "clickprobability", target: "probabilitytopics", parent: Some("topics") },
    SectionBinding { trigger: "greedyapproach", target: "greedytopic", parent: Some("algorithmtopics") },
    SectionBinding { trigger: "dynamicprogramming", target: "dynamictopic", parent: Some("algorithmtopics") },
];

/// Present/absent query for element ids, standing in for DOM id resolution.
pub trait ElementLookup {
    /// True iff an element with this id exists.
    fn contains(&self, id: &str) -> bool;
}

impl<S: AsRef<str>> ElementLookup for [S] {
    fn contains(&self, id: &str) -> bool {
        self.iter().any(|el| el.as_ref() == id)
    }
}

/// Runtime store of bound trigger/target pairs and target visibility.
#[derive(Clone, Debug, Default)]
pub struct OutlineState {
    bindings: Vec<BoundPair>,
    visibility: HashMap<String, Visibility>,
}

#[derive(Clone, Debug)]
struct BoundPair {
    trigger: String,
    target: String,
}

impl OutlineState {
    /// Create a store with nothing bound.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind one trigger/target pair.
    ///
    /// If either id is absent from `lookup` the call is a silent no-op and
    /// other bindings are unaffected. On success the target starts `Hidden`
    /// regardless of any previous state.
    ///
    /// Binding the same pair twice records two entries, so each activation
    /// inverts the target twice; callers are expected not to do that.
    pub fn bind<L: ElementLookup + ?Sized>(&mut self, lookup: &L, trigger_id: &str, target_id: &str) {
        if !lookup.contains(trigger_id) || !lookup.contains(target_id) {
            return;
        }
        self.bindings.push(BoundPair {
            trigger: trigger_id.to_owned(),
            target: target_id.to_owned(),
        });
        self.visibility
            .insert(target_id.to_owned(), Visibility::Hidden);
    }

    /// Bind every row of [`SECTION_BINDINGS`] in declaration order.
    pub fn bind_declared<L: ElementLookup + ?Sized>(&mut self, lookup: &L) {
        for binding in &SECTION_BINDINGS {
            self.bind(lookup, binding.trigger, binding.target);
        }
    }

    /// Invert the visibility of every target bound to `trigger_id`.
    /// Unknown triggers are a no-op.
    pub fn activate(&mut self, trigger_id: &str) {
        for pair in &self.bindings {
            if pair.trigger == trigger_id {
                if let Some(v) = self.visibility.get_mut(&pair.target) {
                    *v = v.toggled();
                }
            }
        }
    }

    /// Visibility of a target, or `None` if it was never bound.
    #[must_use]
    pub fn visibility(&self, target_id: &str) -> Option<Visibility> {
        self.visibility.get(target_id).copied()
    }

    /// True iff the target is bound and currently visible. Unbound targets
    /// read as not visible.
    #[must_use]
    pub fn is_visible(&self, target_id: &str) -> bool {
        self.visibility(target_id) == Some(Visibility::Visible)
    }

    /// True iff `bind` succeeded for this target at least once.
    #[must_use]
    pub fn is_bound(&self, target_id: &str) -> bool {
        self.visibility.contains_key(target_id)
    }

    /// Number of recorded bindings, duplicates included.
    #[must_use]
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }
}
