//! Reusable UI components.

pub mod top_bar;
pub mod topic_section;
