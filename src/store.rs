// In-memory credential store
// Thread-safe username -> password map with last-write-wins registration

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory credential store.
///
/// Passwords are kept in plaintext, exactly as submitted. There is no
/// persistence: every entry is lost when the process exits.
#[derive(Clone, Default)]
pub struct CredentialStore {
    users: Arc<Mutex<HashMap<String, String>>>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Set the stored password for `username`, creating the entry if absent
    /// or overwriting it if present. Empty values are accepted as-is.
    pub fn register(&self, username: &str, password: &str) {
        let mut users = self.users.lock().unwrap();
        users.insert(username.to_string(), password.to_string());
    }

    /// Returns true iff an entry exists for `username` and its stored
    /// password is byte-equal to `password`. Unknown users and wrong
    /// passwords are not distinguished.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let users = self.users.lock().unwrap();
        users
            .get(username)
            .map(|stored| stored == password)
            .unwrap_or(false)
    }
}
