use super::*;

/// Ids for a fully rendered outline page, triggers and targets both.
const FULL_DOM: [&str; 12] = [
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

// =============================================================
// Visibility
// =============================================================

#[test]
fn visibility_default_is_hidden() {
    assert_eq!(Visibility::default(), Visibility::Hidden);
}

#[test]
fn visibility_toggled_inverts() {
    assert_eq!(Visibility::Hidden.toggled(), Visibility::Visible);
    assert_eq!(Visibility::Visible.toggled(), Visibility::Hidden);
}

#[test]
fn visibility_serde_roundtrip() {
    let json = serde_json::to_string(&Visibility::Hidden).unwrap();
    assert_eq!(json, "\"hidden\"");
    let back: Visibility = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Visibility::Hidden);
}

// =============================================================
// Declared table
// =============================================================

#[test]
fn declared_table_has_six_rows() {
    assert_eq!(SECTION_BINDINGS.len(), 6);
}

#[test]
fn declared_parents_resolve_to_declared_targets() {
    for binding in &SECTION_BINDINGS {
        if let Some(parent) = binding.parent {
            assert!(
                SECTION_BINDINGS.iter().any(|b| b.target == parent),
                "parent {parent} of {} is not a declared target",
                binding.target
            );
        }
    }
}

#[test]
fn declared_table_root_is_topics() {
    let roots: Vec<_> = SECTION_BINDINGS
        .iter()
        .filter(|b| b.parent.is_none())
        .collect();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].target, "topics");
}

#[test]
fn outline_page_renders_every_declared_id() {
    use crate::pages::outline::OUTLINE_ELEMENT_IDS;

    for binding in &SECTION_BINDINGS {
        assert!(OUTLINE_ELEMENT_IDS.contains(&binding.trigger));
        assert!(OUTLINE_ELEMENT_IDS.contains(&binding.target));
    }
}

// =============================================================
// Binding
// =============================================================

#[test]
fn bind_starts_target_hidden() {
    let mut outline = OutlineState::new();
    outline.bind(&FULL_DOM[..], "clickalgo", "algorithmtopics");

    assert!(outline.is_bound("algorithmtopics"));
    assert_eq!(
        outline.visibility("algorithmtopics"),
        Some(Visibility::Hidden)
    );
    assert!(!outline.is_visible("algorithmtopics"));
}

#[test]
fn bind_declared_binds_all_six_hidden() {
    let mut outline = OutlineState::new();
    outline.bind_declared(&FULL_DOM[..]);

    assert_eq!(outline.binding_count(), 6);
    for binding in &SECTION_BINDINGS {
        assert_eq!(outline.visibility(binding.target), Some(Visibility::Hidden));
    }
}

#[test]
fn missing_trigger_skips_binding_silently() {
    let mut outline = OutlineState::new();
    outline.bind(&FULL_DOM[..], "missingBtn", "algorithmtopics");

    assert_eq!(outline.binding_count(), 0);
    assert!(!outline.is_bound("algorithmtopics"));
    assert_eq!(outline.visibility("algorithmtopics"), None);
}

#[test]
fn missing_target_skips_binding_silently() {
    let mut outline = OutlineState::new();
    outline.bind(&FULL_DOM[..], "clickalgo", "missingSection");

    assert_eq!(outline.binding_count(), 0);
    assert!(!outline.is_bound("missingSection"));
}

#[test]
fn missing_id_leaves_other_bindings_unaffected() {
    let partial: Vec<&str> = FULL_DOM
        .iter()
        .copied()
        .filter(|id| *id != "greedytopic")
        .collect();

    let mut outline = OutlineState::new();
    outline.bind_declared(&partial[..]);

    assert_eq!(outline.binding_count(), 5);
    assert!(!outline.is_bound("greedytopic"));
    assert!(outline.is_bound("dynamictopic"));
    assert!(outline.is_bound("topics"));
}

// =============================================================
// Activation
// =============================================================

#[test]
fn activation_alternates_visibility() {
    let mut outline = OutlineState::new();
    outline.bind(&FULL_DOM[..], "clickalgo", "algorithmtopics");

    outline.activate("clickalgo");
    assert!(outline.is_visible("algorithmtopics"));

    outline.activate("clickalgo");
    assert!(!outline.is_visible("algorithmtopics"));

    outline.activate("clickalgo");
    assert!(outline.is_visible("algorithmtopics"));
}

#[test]
fn activation_of_unknown_trigger_is_noop() {
    let mut outline = OutlineState::new();
    outline.bind_declared(&FULL_DOM[..]);

    outline.activate("missingBtn");
    for binding in &SECTION_BINDINGS {
        assert!(!outline.is_visible(binding.target));
    }
}

#[test]
fn activation_only_touches_its_own_target() {
    let mut outline = OutlineState::new();
    outline.bind_declared(&FULL_DOM[..]);

    outline.activate("clickds");
    assert!(outline.is_visible("DStopics"));
    assert!(!outline.is_visible("topics"));
    assert!(!outline.is_visible("algorithmtopics"));
}

#[test]
fn rebinding_resets_target_to_hidden() {
    let mut outline = OutlineState::new();
    outline.bind(&FULL_DOM[..], "clickalgo", "algorithmtopics");
    outline.activate("clickalgo");
    assert!(outline.is_visible("algorithmtopics"));

    outline.bind(&FULL_DOM[..], "clickalgo", "algorithmtopics");
    assert!(!outline.is_visible("algorithmtopics"));
}

#[test]
fn duplicate_binding_inverts_twice_per_activation() {
    // Duplicate registration is a caller error, not guarded internally:
    // two entries for the same pair cancel out on every activation.
    let mut outline = OutlineState::new();
    outline.bind(&FULL_DOM[..], "clickalgo", "algorithmtopics");
    outline.bind(&FULL_DOM[..], "clickalgo", "algorithmtopics");

    assert_eq!(outline.binding_count(), 2);
    outline.activate("clickalgo");
    assert!(!outline.is_visible("algorithmtopics"));
}
