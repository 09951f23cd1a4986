use std::sync::RwLock;

use uuid::Uuid;

use crate::models::User;

/// In-memory user collection behind a reader-writer lock.
///
/// Lookups take the shared side, mutations the exclusive side. Guards are
/// held only around the `Vec` access itself, never across decoding, encoding
/// or logging. Constructed once in `main` and shared with every handler via
/// `web::Data`.
pub struct UserStore {
    users: RwLock<Vec<User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
        }
    }

    /// Linear scan by id, cloning the record out of the critical section.
    /// Fine at this scale; switch the `Vec` to a map keyed by id if the
    /// collection ever outgrows toy size.
    pub fn find_by_id(&self, id: &str) -> Option<User> {
        let users = self.users.read().unwrap_or_else(|e| e.into_inner());
        users.iter().find(|user| user.id == id).cloned()
    }

    /// Appends a new user under a freshly generated id and returns the id.
    pub fn insert(&self, name: String, password: String) -> String {
        let id = Uuid::new_v4().to_string();
        let mut users = self.users.write().unwrap_or_else(|e| e.into_inner());
        users.push(User {
            id: id.clone(),
            name,
            password,
        });
        id
    }

    /// Replaces the password of the matching user in place. Returns `false`
    /// when no record carries the id.
    pub fn update_password(&self, id: &str, new_password: String) -> bool {
        let mut users = self.users.write().unwrap_or_else(|e| e.into_inner());
        match users.iter_mut().find(|user| user.id == id) {
            Some(user) => {
                user.password = new_password;
                true
            }
            None => false,
        }
    }

    /// Removes the matching user. Scan and removal happen under one
    /// exclusive-lock critical section.
    pub fn delete(&self, id: &str) -> bool {
        let mut users = self.users.write().unwrap_or_else(|e| e.into_inner());
        match users.iter().position(|user| user.id == id) {
            Some(index) => {
                users.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.users.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
