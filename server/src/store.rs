//! In-memory todo store.
//!
//! # Design
//! `TodoStore` is a plain owned value with no interior locking. The HTTP layer
//! puts it behind a `RwLock` so every operation runs under a single lock
//! acquisition. Records live in a `Vec` so `list` returns them in insertion
//! order; update and delete find their target by linear scan.
//!
//! Ids come from a counter that only ever moves forward, so an id freed by
//! `delete` is never handed out again.

use crate::error::StoreError;
use crate::model::{CreateTodo, Todo, UpdateTodo};

const SEED: [(&str, bool); 3] = [
    ("Learn Vue 3", true),
    ("Learn FastAPI", false),
    ("Integrate Element Plus and TailwindCSS", false),
];

/// Owner of all todo records and the id allocator.
#[derive(Clone, Debug)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: i64,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    /// An empty store whose first id will be 1.
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    /// The startup state: three records with ids 1 to 3, next id 4.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for (title, completed) in SEED {
            store.create(CreateTodo {
                title: title.to_string(),
                completed,
            });
        }
        store
    }

    pub fn list(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn create(&mut self, input: CreateTodo) -> Todo {
        let todo = Todo {
            id: self.next_id,
            title: input.title,
            completed: input.completed,
        };
        self.next_id += 1;
        self.todos.push(todo.clone());
        tracing::debug!(id = todo.id, "created todo");
        todo
    }

    /// Overwrite only the fields present in `input`.
    pub fn update(&mut self, id: i64, input: UpdateTodo) -> Result<Todo, StoreError> {
        let todo = self
            .todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or(StoreError::NotFound(id))?;
        if let Some(title) = input.title {
            todo.title = title;
        }
        if let Some(completed) = input.completed {
            todo.completed = completed;
        }
        tracing::debug!(id, "updated todo");
        Ok(todo.clone())
    }

    pub fn delete(&mut self, id: i64) -> Result<(), StoreError> {
        let index = self
            .todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or(StoreError::NotFound(id))?;
        self.todos.remove(index);
        tracing::debug!(id, "deleted todo");
        Ok(())
    }
}
