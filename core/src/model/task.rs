use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single task. `id` is assigned at creation and never changes; ids are
/// never reused for a different logical task within one store lifetime.
///
/// The wire/file shape is camelCase (`createdAt` as an ISO-8601 string).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(title: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            completed: false,
            created_at: Utc::now(),
        }
    }

    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_starts_pending_with_fresh_id() {
        let a = Task::new("a".to_string());
        let b = Task::new("b".to_string());
        assert!(!a.completed);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn serializes_camel_case_with_iso_timestamp() {
        let task = Task::new("buy milk".to_string());
        let json = serde_json::to_value(&task).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
        assert_eq!(json["title"], "buy milk");
        assert_eq!(json["completed"], false);
        // round-trips through the wire shape
        let back: Task = serde_json::from_value(json).unwrap();
        assert_eq!(back, task);
    }
}
