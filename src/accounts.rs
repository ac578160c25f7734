//! Username/password store backed by a whitespace-delimited flat file.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::constants::USERS_FILE;

pub struct AccountStore {
    path: PathBuf,
    users: HashMap<String, String>,
    current_user: Option<String>,
}

impl AccountStore {
    /// Loads the user file from `data_dir`. A missing or unreadable file
    /// starts an empty store.
    pub fn open(data_dir: &Path) -> Self {
        let path = data_dir.join(USERS_FILE);
        let mut users = HashMap::new();
        if let Ok(text) = fs::read_to_string(&path) {
            for line in text.lines() {
                let mut parts = line.split_whitespace();
                if let (Some(name), Some(password)) = (parts.next(), parts.next()) {
                    // Last occurrence wins on duplicates
                    users.insert(name.to_string(), password.to_string());
                }
            }
        }
        Self {
            path,
            users,
            current_user: None,
        }
    }

    /// Registers a new account. Fails on a taken username; the store is
    /// persisted immediately on success (a failed write is skipped silently).
    pub fn register(&mut self, username: &str, password: &str) -> bool {
        if self.users.contains_key(username) {
            return false;
        }
        self.users
            .insert(username.to_string(), password.to_string());
        let _ = self.save();
        true
    }

    /// Checks credentials and records the current user on success.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        match self.users.get(username) {
            Some(stored) if stored == password => {
                self.current_user = Some(username.to_string());
                true
            }
            _ => false,
        }
    }

    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    fn save(&self) -> io::Result<()> {
        // Sorted output keeps the file diffable across saves
        let mut names: Vec<&String> = self.users.keys().collect();
        names.sort();
        let mut text = String::new();
        for name in names {
            text.push_str(name);
            text.push(' ');
            text.push_str(&self.users[name]);
            text.push('\n');
        }
        fs::write(&self.path, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("serpent-accounts-{}-{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_register_then_login() {
        let dir = scratch_dir("login");
        let mut store = AccountStore::open(&dir);
        assert!(store.register("alice", "pw1"));
        assert!(store.login("alice", "pw1"));
        assert_eq!(store.current_user(), Some("alice"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_duplicate_registration_keeps_first_password() {
        let dir = scratch_dir("dup");
        let mut store = AccountStore::open(&dir);
        assert!(store.register("alice", "pw1"));
        assert!(!store.register("alice", "pw2"));

        // Reload from disk: the file must still map alice -> pw1
        let mut reloaded = AccountStore::open(&dir);
        assert!(reloaded.login("alice", "pw1"));
        assert!(!reloaded.login("alice", "pw2"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_wrong_password_rejected() {
        let dir = scratch_dir("wrong");
        let mut store = AccountStore::open(&dir);
        store.register("bob", "secret");
        assert!(!store.login("bob", "guess"));
        assert_eq!(store.current_user(), None);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_last_occurrence_wins_on_load() {
        let dir = scratch_dir("lastwins");
        fs::write(dir.join(USERS_FILE), "carol old\ncarol new\n").unwrap();
        let mut store = AccountStore::open(&dir);
        assert!(store.login("carol", "new"));
        assert!(!store.login("carol", "old"));
        let _ = fs::remove_dir_all(&dir);
    }
}
