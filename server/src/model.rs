//! Wire types for the todo API.
//!
//! `Todo` is both the stored record and the JSON response shape. The two
//! payload types describe what clients may send: `CreateTodo` requires a
//! title, `UpdateTodo` treats every field as optional.

use serde::{Deserialize, Serialize};

/// A single todo record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

/// Body of `POST /api/todos`.
#[derive(Clone, Debug, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Body of `PUT /api/todos/{id}`. A missing or `null` field leaves the stored
/// value untouched.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

/// Body of `GET /`.
#[derive(Clone, Debug, Serialize)]
pub struct Welcome {
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_to_json() {
        let todo = Todo {
            id: 7,
            title: "Test".to_string(),
            completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json, serde_json::json!({"id": 7, "title": "Test", "completed": false}));
    }

    #[test]
    fn create_todo_defaults_completed_to_false() {
        let input: CreateTodo = serde_json::from_str(r#"{"title":"No completed field"}"#).unwrap();
        assert_eq!(input.title, "No completed field");
        assert!(!input.completed);
    }

    #[test]
    fn create_todo_rejects_missing_title() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{"completed":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn create_todo_rejects_non_string_title() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{"title":42}"#);
        assert!(result.is_err());
    }

    #[test]
    fn create_todo_accepts_empty_title() {
        let input: CreateTodo = serde_json::from_str(r#"{"title":""}"#).unwrap();
        assert!(input.title.is_empty());
    }

    #[test]
    fn update_todo_all_fields_optional() {
        let input: UpdateTodo = serde_json::from_str(r#"{}"#).unwrap();
        assert!(input.title.is_none());
        assert!(input.completed.is_none());
    }

    #[test]
    fn update_todo_null_means_absent() {
        let input: UpdateTodo = serde_json::from_str(r#"{"title":null,"completed":true}"#).unwrap();
        assert!(input.title.is_none());
        assert_eq!(input.completed, Some(true));
    }
}
