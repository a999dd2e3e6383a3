//! Enumerations for the task board.
//!
//! This module defines the priority tag attached to each task and the
//! read-only filter the board view applies on top of the list.

use serde::{Deserialize, Serialize};

/// Priority tag for a task, chosen at creation and fixed thereafter.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    /// Next selector option, wrapping at the end.
    pub fn next(self) -> Self {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }

    /// Previous selector option, wrapping at the start.
    pub fn prev(self) -> Self {
        match self {
            Priority::Low => Priority::High,
            Priority::Medium => Priority::Low,
            Priority::High => Priority::Medium,
        }
    }
}

/// Projection of the task list by priority. `All` is the identity.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PriorityFilter {
    #[default]
    All,
    Low,
    Medium,
    High,
}

impl PriorityFilter {
    /// Cycle the filter selector: all -> baixa -> média -> alta -> all.
    pub fn cycle(self) -> Self {
        match self {
            PriorityFilter::All => PriorityFilter::Low,
            PriorityFilter::Low => PriorityFilter::Medium,
            PriorityFilter::Medium => PriorityFilter::High,
            PriorityFilter::High => PriorityFilter::All,
        }
    }

    /// Whether a task with the given priority passes this filter.
    pub fn matches(self, priority: Priority) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Low => priority == Priority::Low,
            PriorityFilter::Medium => priority == Priority::Medium,
            PriorityFilter::High => priority == Priority::High,
        }
    }
}
