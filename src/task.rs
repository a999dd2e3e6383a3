//! Task data structure for the board.

use serde::{Deserialize, Serialize};

use crate::fields::Priority;

/// A single to-do entry on the task board.
///
/// The id is generated by the owning list and stays stable for the whole
/// session, so the UI can address a task across inserts and deletes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub text: String,
    pub completed: bool,
    pub priority: Priority,
    pub created_at_utc: i64,
}
