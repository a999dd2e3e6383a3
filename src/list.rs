//! In-memory task board and display helpers.
//!
//! This module provides the `TaskList` container holding the session's
//! tasks, along with formatting helpers shared by the TUI and the CLI.

use chrono::Utc;

use crate::fields::{Priority, PriorityFilter};
use crate::task::Task;

/// Ordered, process-lifetime store for tasks.
///
/// Newest tasks sit at the head of the list. All mutation goes through the
/// named operations; ids are monotonic and never reused within a session,
/// so a stale id from the UI resolves to a no-op instead of landing on a
/// shifted position.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskList {
    /// Create an empty board.
    pub fn new() -> Self {
        TaskList::default()
    }

    /// Create a board pre-seeded with the demo entries used by `--sample`.
    pub fn with_sample_tasks() -> Self {
        let mut list = TaskList::new();
        list.add("Leitura: basquete e cidadania", Priority::Low);
        list.add("Confirmar sessão de mentoria", Priority::Medium);
        list.add("Treino de fundamentos", Priority::High);
        list
    }

    /// Add a task at the head of the list and return its id.
    ///
    /// Text is trimmed first; a blank submission is a silent no-op, matching
    /// the programme client's observed behaviour.
    pub fn add(&mut self, text: &str, priority: Priority) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.insert(
            0,
            Task {
                id,
                text: text.to_string(),
                completed: false,
                priority,
                created_at_utc: Utc::now().timestamp(),
            },
        );
        Some(id)
    }

    /// Remove the task with the given id. Unknown ids are a no-op.
    pub fn remove(&mut self, id: u64) -> bool {
        match self.tasks.iter().position(|t| t.id == id) {
            Some(idx) => {
                self.tasks.remove(idx);
                true
            }
            None => {
                tracing::warn!(id, "remove requested for unknown task");
                false
            }
        }
    }

    /// Flip the completion flag of the task with the given id.
    ///
    /// Ordering is untouched. Unknown ids are a no-op.
    pub fn toggle(&mut self, id: u64) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => {
                tracing::warn!(id, "toggle requested for unknown task");
                false
            }
        }
    }

    /// Replace the label of the task with the given id (edit save).
    pub fn set_text(&mut self, id: u64, text: &str) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.text = text.to_string();
                true
            }
            None => {
                tracing::warn!(id, "edit requested for unknown task");
                false
            }
        }
    }

    /// Empty the board unconditionally and return how many tasks went.
    pub fn clear(&mut self) -> usize {
        let removed = self.tasks.len();
        self.tasks.clear();
        removed
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Read-only projection of the list through a priority filter.
    ///
    /// Relative order is preserved and the underlying list is untouched.
    pub fn filtered(&self, filter: PriorityFilter) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| filter.matches(t.priority))
            .collect()
    }

    /// Number of tasks still open. Recomputed on every call.
    pub fn pending_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    /// Number of tasks marked done. Recomputed on every call.
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }
}

/// Format a priority with the programme's labels.
pub fn format_priority(p: Priority) -> &'static str {
    match p {
        Priority::Low => "baixa",
        Priority::Medium => "média",
        Priority::High => "alta",
    }
}

/// Format a filter selection for the board chrome.
pub fn format_filter(f: PriorityFilter) -> &'static str {
    match f {
        PriorityFilter::All => "todas",
        PriorityFilter::Low => "baixa",
        PriorityFilter::Medium => "média",
        PriorityFilter::High => "alta",
    }
}

/// Format a creation timestamp relative to now ("agora", "5min", "2h", "3d").
pub fn format_age(created_at_utc: i64, now_utc: i64) -> String {
    let secs = now_utc.saturating_sub(created_at_utc).max(0);
    if secs < 60 {
        "agora".into()
    } else if secs < 3600 {
        format!("{}min", secs / 60)
    } else if secs < 86_400 {
        format!("{}h", secs / 3600)
    } else {
        format!("{}d", secs / 86_400)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn blank_submissions_are_ignored() {
        let mut list = TaskList::new();
        assert_eq!(list.add("", Priority::Low), None);
        assert_eq!(list.add("   ", Priority::High), None);
        assert!(list.add("Treino", Priority::High).is_some());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn new_tasks_rank_first_and_start_open() {
        let mut list = TaskList::new();
        list.add("Treino", Priority::High);
        list.add("Leitura", Priority::Low);

        assert_eq!(list.tasks()[0].text, "Leitura");
        assert_eq!(list.tasks()[0].priority, Priority::Low);
        assert!(!list.tasks()[0].completed);
        assert_eq!(list.tasks()[1].text, "Treino");
        assert_eq!(list.tasks()[1].priority, Priority::High);
        assert_eq!(list.pending_count(), 2);
        assert_eq!(list.completed_count(), 0);
    }

    #[test]
    fn add_trims_surrounding_whitespace() {
        let mut list = TaskList::new();
        let id = list.add("  Alongamento  ", Priority::Low).unwrap();
        assert_eq!(list.get(id).unwrap().text, "Alongamento");
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut list = TaskList::new();
        let id = list.add("Treino", Priority::High).unwrap();

        assert!(list.toggle(id));
        assert!(list.get(id).unwrap().completed);
        assert!(list.toggle(id));
        assert!(!list.get(id).unwrap().completed);
    }

    #[test]
    fn toggling_updates_counters() {
        let mut list = TaskList::new();
        let treino = list.add("Treino", Priority::High).unwrap();
        list.add("Leitura", Priority::Low);

        list.toggle(treino);
        assert_eq!(list.pending_count(), 1);
        assert_eq!(list.completed_count(), 1);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(3, 1)]
    #[case(5, 5)]
    fn counters_always_partition_the_list(#[case] total: usize, #[case] done: usize) {
        let mut list = TaskList::new();
        let mut ids = Vec::new();
        for i in 0..total {
            ids.push(list.add(&format!("tarefa {i}"), Priority::Medium).unwrap());
        }
        for &id in ids.iter().take(done) {
            list.toggle(id);
        }

        assert_eq!(list.pending_count() + list.completed_count(), list.len());
        assert_eq!(list.completed_count(), done.min(total));
    }

    #[test]
    fn all_filter_is_the_identity_projection() {
        let mut list = TaskList::new();
        list.add("Treino", Priority::High);
        list.add("Leitura", Priority::Low);
        list.add("Mentoria", Priority::Medium);

        let all: Vec<&str> = list
            .filtered(PriorityFilter::All)
            .iter()
            .map(|t| t.text.as_str())
            .collect();
        let raw: Vec<&str> = list.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(all, raw);
    }

    #[test]
    fn priority_filter_is_stable_and_pure() {
        let mut list = TaskList::new();
        list.add("Treino", Priority::High);
        list.add("Leitura", Priority::Low);
        list.add("Tático", Priority::High);

        let high: Vec<&str> = list
            .filtered(PriorityFilter::High)
            .iter()
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(high, vec!["Tático", "Treino"]);
        // The projection must not disturb the underlying list.
        assert_eq!(list.len(), 3);
        assert_eq!(list.tasks()[0].text, "Tático");
    }

    #[test]
    fn delete_addresses_a_stable_id() {
        let mut list = TaskList::new();
        let treino = list.add("Treino", Priority::High).unwrap();
        list.add("Leitura", Priority::Low);

        assert!(list.remove(treino));
        assert_eq!(list.len(), 1);
        assert_eq!(list.tasks()[0].text, "Leitura");
        // Same id again: gone, so a no-op.
        assert!(!list.remove(treino));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn stale_id_operations_are_no_ops() {
        let mut list = TaskList::new();
        list.add("Treino", Priority::High);

        assert!(!list.toggle(999));
        assert!(!list.set_text(999, "x"));
        assert!(!list.remove(999));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn ids_are_never_reused_after_deletes() {
        let mut list = TaskList::new();
        let first = list.add("a", Priority::Low).unwrap();
        list.remove(first);
        let second = list.add("b", Priority::Low).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn clear_empties_everything() {
        let mut list = TaskList::with_sample_tasks();
        let toggled = list.tasks()[0].id;
        list.toggle(toggled);

        assert_eq!(list.clear(), 3);
        assert!(list.is_empty());
        assert_eq!(list.pending_count(), 0);
        assert_eq!(list.completed_count(), 0);
    }

    #[test]
    fn edit_replaces_only_the_label() {
        let mut list = TaskList::new();
        let id = list.add("Treino", Priority::High).unwrap();
        list.toggle(id);

        assert!(list.set_text(id, "Treino tático"));
        let task = list.get(id).unwrap();
        assert_eq!(task.text, "Treino tático");
        assert_eq!(task.priority, Priority::High);
        assert!(task.completed);
    }

    #[rstest]
    #[case(0, "agora")]
    #[case(59, "agora")]
    #[case(120, "2min")]
    #[case(7200, "2h")]
    #[case(259_200, "3d")]
    fn age_formatting(#[case] elapsed: i64, #[case] expected: &str) {
        assert_eq!(format_age(1000, 1000 + elapsed), expected);
    }
}
