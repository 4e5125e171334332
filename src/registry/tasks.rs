use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::RwLock;

use crate::error::AppError;
use crate::models::{Task, TaskInput};

/// Owns task records scoped to their owner.
///
/// Every read and write is filtered by the owner id; a task belonging to
/// someone else behaves exactly like a task that does not exist. Ids come
/// from a strictly increasing counter starting at 1 and are never reused,
/// including after deletion. Listing order is not defined.
pub struct TaskRegistry {
    tasks: RwLock<HashMap<i32, Task>>,
    next_id: AtomicI32,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self {
            tasks: RwLock::new(HashMap::new()),
            next_id: AtomicI32::new(1),
        }
    }

    /// Stores a new task for the given owner.
    ///
    /// A blank title is rejected before an id is assigned.
    pub fn create(&self, user_id: i32, input: TaskInput) -> Result<Task, AppError> {
        if input.title.trim().is_empty() {
            return Err(AppError::ValidationError("Title is required".into()));
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let task = Task {
            id,
            title: input.title,
            description: input.description,
            completed: input.completed,
            user_id,
        };

        self.tasks.write().unwrap().insert(id, task.clone());
        Ok(task)
    }

    pub fn list(&self, user_id: i32) -> Vec<Task> {
        self.tasks
            .read()
            .unwrap()
            .values()
            .filter(|task| task.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn list_by_completion(&self, user_id: i32, completed: bool) -> Vec<Task> {
        self.tasks
            .read()
            .unwrap()
            .values()
            .filter(|task| task.user_id == user_id && task.completed == completed)
            .cloned()
            .collect()
    }

    /// Case-insensitive substring search over title and description.
    ///
    /// The empty query matches every task the owner has.
    pub fn search(&self, user_id: i32, query: &str) -> Vec<Task> {
        let query = query.to_lowercase();
        self.tasks
            .read()
            .unwrap()
            .values()
            .filter(|task| {
                task.user_id == user_id
                    && (task.title.to_lowercase().contains(&query)
                        || task.description.to_lowercase().contains(&query))
            })
            .cloned()
            .collect()
    }

    /// Fetches a task by id, owner-blind: `None` both when the id is absent
    /// and when the task belongs to a different user.
    pub fn get(&self, user_id: i32, id: i32) -> Option<Task> {
        self.tasks
            .read()
            .unwrap()
            .get(&id)
            .filter(|task| task.user_id == user_id)
            .cloned()
    }

    /// Replaces title, description and completed. Id and owner are
    /// immutable. Misses follow the same owner-blind rule as `get`.
    pub fn update(&self, user_id: i32, id: i32, input: TaskInput) -> Result<Task, AppError> {
        if input.title.trim().is_empty() {
            return Err(AppError::ValidationError("Title is required".into()));
        }

        let mut tasks = self.tasks.write().unwrap();
        match tasks.get_mut(&id) {
            Some(task) if task.user_id == user_id => {
                task.title = input.title;
                task.description = input.description;
                task.completed = input.completed;
                Ok(task.clone())
            }
            _ => Err(AppError::NotFound("Task not found".into())),
        }
    }

    /// Removes a task. Returns false both for an absent id and for a task
    /// owned by someone else.
    pub fn delete(&self, user_id: i32, id: i32) -> bool {
        let mut tasks = self.tasks.write().unwrap();
        match tasks.get(&id) {
            Some(task) if task.user_id == user_id => tasks.remove(&id).is_some(),
            _ => false,
        }
    }
}

impl Default for TaskRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    fn input(title: &str, description: &str, completed: bool) -> TaskInput {
        TaskInput {
            title: title.to_string(),
            description: description.to_string(),
            completed,
        }
    }

    #[test]
    fn test_create_assigns_increasing_ids() {
        let registry = TaskRegistry::new();

        let first = registry.create(1, input("Buy milk", "", false)).unwrap();
        let second = registry.create(1, input("Walk dog", "", false)).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.user_id, 1);
        assert!(!first.completed);
    }

    #[test]
    fn test_create_rejects_blank_title() {
        let registry = TaskRegistry::new();

        for title in ["", "   ", "\t\n"] {
            match registry.create(1, input(title, "desc", false)) {
                Err(AppError::ValidationError(_)) => {}
                other => panic!("expected ValidationError for {:?}, got {:?}", title, other),
            }
        }
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let registry = TaskRegistry::new();

        let first = registry.create(1, input("One", "", false)).unwrap();
        assert!(registry.delete(1, first.id));

        let second = registry.create(1, input("Two", "", false)).unwrap();
        assert_eq!(second.id, first.id + 1);
    }

    #[test]
    fn test_list_is_scoped_to_owner() {
        let registry = TaskRegistry::new();
        registry.create(1, input("Mine", "", false)).unwrap();
        registry.create(2, input("Theirs", "", false)).unwrap();

        let mine = registry.list(1);
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].title, "Mine");
    }

    #[test]
    fn test_list_by_completion() {
        let registry = TaskRegistry::new();
        registry.create(1, input("Open", "", false)).unwrap();
        let done = registry.create(1, input("Done", "", true)).unwrap();

        let completed = registry.list_by_completion(1, true);
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, done.id);

        assert_eq!(registry.list_by_completion(1, false).len(), 1);
        assert!(registry.list_by_completion(2, true).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_description() {
        let registry = TaskRegistry::new();
        registry.create(1, input("Buy Milk", "", false)).unwrap();
        registry
            .create(1, input("Chores", "pick up MILK and eggs", false))
            .unwrap();
        registry.create(1, input("Unrelated", "", false)).unwrap();

        let hits = registry.search(1, "milk");
        assert_eq!(hits.len(), 2);

        assert!(registry.search(2, "milk").is_empty());
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let registry = TaskRegistry::new();
        registry.create(1, input("One", "", false)).unwrap();
        registry.create(1, input("Two", "", true)).unwrap();

        let mut all: Vec<i32> = registry.list(1).iter().map(|t| t.id).collect();
        let mut searched: Vec<i32> = registry.search(1, "").iter().map(|t| t.id).collect();
        all.sort_unstable();
        searched.sort_unstable();

        assert_eq!(all, searched);
    }

    #[test]
    fn test_get_is_owner_blind() {
        let registry = TaskRegistry::new();
        let task = registry.create(1, input("Mine", "", false)).unwrap();

        assert!(registry.get(1, task.id).is_some());
        assert!(registry.get(2, task.id).is_none());
        assert!(registry.get(1, 999).is_none());
    }

    #[test]
    fn test_update_replaces_fields_and_keeps_identity() {
        let registry = TaskRegistry::new();
        let task = registry.create(1, input("Before", "old", false)).unwrap();

        let updated = registry
            .update(1, task.id, input("After", "new", true))
            .unwrap();

        assert_eq!(updated.id, task.id);
        assert_eq!(updated.user_id, 1);
        assert_eq!(updated.title, "After");
        assert_eq!(updated.description, "new");
        assert!(updated.completed);
    }

    #[test]
    fn test_update_misses_are_owner_blind() {
        let registry = TaskRegistry::new();
        let task = registry.create(1, input("Mine", "", false)).unwrap();

        let wrong_owner = registry.update(2, task.id, input("Stolen", "", false));
        let absent = registry.update(1, 999, input("Ghost", "", false));

        assert!(matches!(wrong_owner, Err(AppError::NotFound(_))));
        assert!(matches!(absent, Err(AppError::NotFound(_))));

        // The record is untouched after the failed cross-owner update.
        assert_eq!(registry.get(1, task.id).unwrap().title, "Mine");
    }

    #[test]
    fn test_update_rejects_blank_title() {
        let registry = TaskRegistry::new();
        let task = registry.create(1, input("Mine", "", false)).unwrap();

        let result = registry.update(1, task.id, input("  ", "", false));
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_delete_is_owner_blind() {
        let registry = TaskRegistry::new();
        let task = registry.create(1, input("Mine", "", false)).unwrap();

        assert!(!registry.delete(2, task.id));
        assert!(registry.get(1, task.id).is_some());

        assert!(registry.delete(1, task.id));
        assert!(!registry.delete(1, task.id));
        assert!(registry.get(1, task.id).is_none());
    }
}
