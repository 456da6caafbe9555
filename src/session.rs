//! Accounts and login sessions over a [`KeyValueStore`].
//!
//! Storage layout (one key per field, matching the original data kept
//! by the dashboard):
//! - `user_<username>`  — password
//! - `email_<username>` — email address
//! - `name_<username>`  — display name
//! - `photo_<username>` — profile photo as a data URI (optional)
//! - `currentUser`      — username of the logged-in user
//!
//! Passwords are stored as cleartext, a known limitation of the
//! original storage scheme. The `KeyValueStore` seam is where a
//! hashing store would plug in.

use thiserror::Error;

use crate::storage::{KeyValueStore, StoreError};

const CURRENT_USER_KEY: &str = "currentUser";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Username already exists.")]
    DuplicateUser,
    #[error("Invalid username or password.")]
    InvalidCredentials,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A stored user profile. The password never leaves the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    pub username: String,
    pub email: Option<String>,
    pub name: Option<String>,
    /// Profile photo as a `data:` URI.
    pub photo: Option<String>,
}

/// Account and session operations over an injected store.
#[derive(Clone, Copy)]
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create a new account. Fails with [`AuthError::DuplicateUser`]
    /// before any write when the username is taken.
    pub fn create_account(
        &self,
        username: &str,
        password: &str,
        email: &str,
        name: &str,
        photo: Option<&str>,
    ) -> Result<(), AuthError> {
        if self.store.get(&format!("user_{username}")).is_some() {
            return Err(AuthError::DuplicateUser);
        }

        self.store.set(&format!("user_{username}"), password)?;
        self.store.set(&format!("email_{username}"), email)?;
        self.store.set(&format!("name_{username}"), name)?;
        if let Some(photo) = photo {
            self.store.set(&format!("photo_{username}"), photo)?;
        }
        Ok(())
    }

    /// Check credentials and return the stored profile. Unknown users
    /// and wrong passwords are indistinguishable to the caller.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<UserAccount, AuthError> {
        match self.store.get(&format!("user_{username}")) {
            Some(stored) if stored == password => Ok(self.profile(username)),
            _ => Err(AuthError::InvalidCredentials),
        }
    }

    /// Load the profile fields for a username. Missing fields stay
    /// `None`; the account itself is not validated here.
    pub fn profile(&self, username: &str) -> UserAccount {
        UserAccount {
            username: username.to_string(),
            email: self.store.get(&format!("email_{username}")),
            name: self.store.get(&format!("name_{username}")),
            photo: self.store.get(&format!("photo_{username}")),
        }
    }

    pub fn set_current_user(&self, username: &str) -> Result<(), StoreError> {
        self.store.set(CURRENT_USER_KEY, username)
    }

    pub fn current_user(&self) -> Option<String> {
        self.store.get(CURRENT_USER_KEY)
    }

    pub fn clear_current_user(&self) {
        self.store.remove(CURRENT_USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn session() -> SessionStore<MemoryStore> {
        SessionStore::new(MemoryStore::new())
    }

    #[test]
    fn signup_then_login_round_trip() {
        let session = session();
        session
            .create_account("alice", "hunter2", "alice@example.com", "Alice", None)
            .unwrap();

        let account = session.authenticate("alice", "hunter2").unwrap();
        assert_eq!(account.username, "alice");
        assert_eq!(account.email.as_deref(), Some("alice@example.com"));
        assert_eq!(account.name.as_deref(), Some("Alice"));
        assert_eq!(account.photo, None);
    }

    #[test]
    fn duplicate_username_fails_without_mutation() {
        let session = session();
        session
            .create_account("alice", "hunter2", "alice@example.com", "Alice", None)
            .unwrap();
        let keys_before = session.store.len();

        let err = session
            .create_account("alice", "other", "other@example.com", "Imposter", None)
            .unwrap_err();
        assert_eq!(err, AuthError::DuplicateUser);
        assert_eq!(session.store.len(), keys_before, "Store must be unchanged");
        // Original password still wins.
        assert!(session.authenticate("alice", "hunter2").is_ok());
        assert_eq!(
            session.authenticate("alice", "other").unwrap_err(),
            AuthError::InvalidCredentials
        );
    }

    #[test]
    fn wrong_password_is_invalid_credentials() {
        let session = session();
        session
            .create_account("bob", "secret", "bob@example.com", "Bob", None)
            .unwrap();
        let keys_before = session.store.len();

        let err = session.authenticate("bob", "wrong").unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        assert_eq!(session.store.len(), keys_before, "Store must be unchanged");
    }

    #[test]
    fn unknown_user_is_invalid_credentials() {
        let session = session();
        assert_eq!(
            session.authenticate("ghost", "anything").unwrap_err(),
            AuthError::InvalidCredentials
        );
    }

    #[test]
    fn photo_is_stored_and_returned_when_given() {
        let session = session();
        session
            .create_account(
                "carol",
                "pw",
                "carol@example.com",
                "Carol",
                Some("data:image/png;base64,AAAA"),
            )
            .unwrap();

        let account = session.authenticate("carol", "pw").unwrap();
        assert_eq!(account.photo.as_deref(), Some("data:image/png;base64,AAAA"));
    }

    #[test]
    fn current_user_marker_lifecycle() {
        let session = session();
        assert_eq!(session.current_user(), None);

        session.set_current_user("alice").unwrap();
        assert_eq!(session.current_user().as_deref(), Some("alice"));

        session.clear_current_user();
        assert_eq!(session.current_user(), None);
    }
}
