//! The current-user store.

use std::collections::HashMap;
use std::sync::{Arc, Weak};

use chrono::Utc;
use skillsync_core::{AuthUser, UserPatch};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::error::{AuthError, StorageError};
use crate::identity::{avatar_url, display_name_from_email};
use crate::storage::{MemoryStorage, SessionStorage, AUTH_USER_KEY, SESSION_KEY};

type Listener = Arc<dyn Fn(Option<&AuthUser>) + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: HashMap<u64, Listener>,
}

/// Tracks the single signed-in user and notifies listeners on every change.
///
/// The store is an ordinary value: construct one per session and share it
/// behind an `Arc`.
///
/// Changes are serialized: a change's storage write and listener calls finish
/// before the next change starts, so storage and listeners always end on the
/// same user as memory.
pub struct AuthStore {
    user: RwLock<Option<AuthUser>>,
    /// Held across mutate, persist and notify.
    mutation: Mutex<()>,
    listeners: Arc<Mutex<Listeners>>,
    storage: Arc<dyn SessionStorage>,
}

impl AuthStore {
    /// Create a store with no user, backed by `storage`.
    ///
    /// Anything already in `storage` is ignored; use [`AuthStore::load`] to
    /// restore a previous session.
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            user: RwLock::new(None),
            mutation: Mutex::new(()),
            listeners: Arc::new(Mutex::new(Listeners::default())),
            storage,
        }
    }

    /// Create a store with no user and throwaway in-memory storage.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Create a store and restore the session saved in `storage`.
    ///
    /// A missing or unreadable session means nobody is signed in; the failure
    /// is logged and never returned.
    pub async fn load(storage: Arc<dyn SessionStorage>) -> Self {
        let user = match storage.get(AUTH_USER_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<AuthUser>(&raw) {
                Ok(user) => {
                    info!("Restored session for {}", user.email);
                    Some(user)
                }
                Err(e) => {
                    warn!("Failed to load user from storage: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("Failed to load user from storage: {}", e);
                None
            }
        };

        let store = Self::new(storage);
        *store.user.write().await = user;
        store
    }

    /// Sign in with any non-empty email and password.
    ///
    /// The display name is derived from the email.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        validate_credentials(email, password)?;

        let user = synthesize_user(email, None);
        info!("Signed in {}", user.email);
        self.replace_user(Some(user.clone())).await;
        Ok(user)
    }

    /// Register with any non-empty email and password.
    ///
    /// A non-empty `name` is used as the display name; otherwise it is
    /// derived from the email.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> Result<AuthUser, AuthError> {
        validate_credentials(email, password)?;

        let user = synthesize_user(email, name);
        info!("Signed up {}", user.email);
        self.replace_user(Some(user.clone())).await;
        Ok(user)
    }

    /// Forget the current user and clear the stored session.
    pub async fn sign_out(&self) {
        info!("Signed out");
        self.replace_user(None).await;
    }

    /// The signed-in user, if any.
    pub async fn current_user(&self) -> Option<AuthUser> {
        self.user.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.user.read().await.is_some()
    }

    /// Merge `patch` into the current user.
    ///
    /// Does nothing (and returns `None`) when nobody is signed in.
    pub async fn update_user(&self, patch: &UserPatch) -> Option<AuthUser> {
        let _guard = self.mutation.lock().await;
        let updated = {
            let mut guard = self.user.write().await;
            let user = guard.as_mut()?;
            patch.apply(user);
            user.clone()
        };

        debug!("Updated user {}", updated.id);
        self.persist(Some(&updated)).await;
        self.notify(Some(&updated)).await;
        Some(updated)
    }

    /// Register `callback` to run after every sign-in, sign-up, sign-out and
    /// update. It receives the new current user.
    pub async fn on_auth_change<F>(&self, callback: F) -> AuthSubscription
    where
        F: Fn(Option<&AuthUser>) + Send + Sync + 'static,
    {
        let mut listeners = self.listeners.lock().await;
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.insert(id, Arc::new(callback));

        AuthSubscription {
            listeners: Arc::downgrade(&self.listeners),
            id,
        }
    }

    async fn replace_user(&self, user: Option<AuthUser>) {
        let _guard = self.mutation.lock().await;
        *self.user.write().await = user.clone();
        self.persist(user.as_ref()).await;
        self.notify(user.as_ref()).await;
    }

    async fn persist(&self, user: Option<&AuthUser>) {
        if let Err(e) = self.try_persist(user).await {
            warn!("Failed to save user to storage: {}", e);
        }
    }

    async fn try_persist(&self, user: Option<&AuthUser>) -> Result<(), StorageError> {
        match user {
            Some(user) => {
                let raw = serde_json::to_string(user)?;
                self.storage.set(AUTH_USER_KEY, &raw).await?;
                self.storage
                    .set(SESSION_KEY, &Utc::now().timestamp_millis().to_string())
                    .await?;
            }
            None => {
                self.storage.remove(AUTH_USER_KEY).await?;
                self.storage.remove(SESSION_KEY).await?;
            }
        }
        Ok(())
    }

    async fn notify(&self, user: Option<&AuthUser>) {
        // Snapshot so a callback may register or drop listeners.
        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .await
            .entries
            .values()
            .cloned()
            .collect();

        for listener in listeners {
            listener(user);
        }
    }
}

/// Handle returned by [`AuthStore::on_auth_change`].
///
/// Dropping the handle keeps the listener registered; call
/// [`AuthSubscription::unsubscribe`] to remove it.
#[derive(Debug)]
pub struct AuthSubscription {
    listeners: Weak<Mutex<Listeners>>,
    id: u64,
}

impl AuthSubscription {
    /// Remove the listener. A no-op if the store is gone.
    pub async fn unsubscribe(self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.lock().await.entries.remove(&self.id);
        }
    }
}

/// Check that both credentials are present.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), AuthError> {
    if email.is_empty() || password.is_empty() {
        return Err(AuthError::MissingCredentials);
    }
    Ok(())
}

fn synthesize_user(email: &str, name: Option<&str>) -> AuthUser {
    let name = match name {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => display_name_from_email(email),
    };

    AuthUser {
        id: format!("user_{}", Utc::now().timestamp_millis()),
        email: email.to_string(),
        name,
        avatar: Some(avatar_url(email)),
        is_onboarded: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;

    /// Memory storage whose writes take a while to land.
    #[derive(Default)]
    struct SlowStorage {
        inner: MemoryStorage,
    }

    #[async_trait]
    impl SessionStorage for SlowStorage {
        async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            tokio::time::sleep(Duration::from_millis(20)).await;
            self.inner.set(key, value).await
        }

        async fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.inner.remove(key).await
        }
    }

    #[tokio::test]
    async fn test_sign_in_sets_current_user() {
        let auth = AuthStore::in_memory();

        let user = auth.sign_in("alex@example.com", "secret").await.unwrap();
        assert_eq!(user.email, "alex@example.com");
        assert_eq!(user.name, "Alex");
        assert!(user.id.starts_with("user_"));
        assert!(!user.is_onboarded);

        assert_eq!(auth.current_user().await, Some(user));
        assert!(auth.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_missing_credentials_leave_state_unchanged() {
        let auth = AuthStore::in_memory();

        for (email, password) in [("", ""), ("a@b.c", ""), ("", "pw")] {
            assert_eq!(
                auth.sign_in(email, password).await,
                Err(AuthError::MissingCredentials)
            );
            assert_eq!(
                auth.sign_up(email, password, Some("Name")).await,
                Err(AuthError::MissingCredentials)
            );
        }
        assert!(auth.current_user().await.is_none());

        let user = auth.sign_in("a@b.c", "pw").await.unwrap();
        assert!(auth.sign_in("", "pw").await.is_err());
        assert_eq!(auth.current_user().await, Some(user));
    }

    #[tokio::test]
    async fn test_sign_up_name_scenarios() {
        let auth = AuthStore::in_memory();

        let derived = auth.sign_up("jane.doe@x.com", "abc123", None).await.unwrap();
        assert_eq!(derived.name, "Jane Doe");

        let given = auth
            .sign_up("jane.doe@x.com", "abc123", Some("J. Doe"))
            .await
            .unwrap();
        assert_eq!(given.name, "J. Doe");

        let empty = auth.sign_up("jane.doe@x.com", "abc123", Some("")).await.unwrap();
        assert_eq!(empty.name, "Jane Doe");
    }

    #[tokio::test]
    async fn test_sign_out_always_clears() {
        let auth = AuthStore::in_memory();
        auth.sign_out().await;
        assert!(!auth.is_authenticated().await);

        auth.sign_in("a@b.c", "pw").await.unwrap();
        auth.sign_out().await;
        assert!(auth.current_user().await.is_none());
        assert!(!auth.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_update_user() {
        let auth = AuthStore::in_memory();
        assert!(auth.update_user(&UserPatch::onboarded()).await.is_none());
        assert!(auth.current_user().await.is_none());

        auth.sign_in("a@b.c", "pw").await.unwrap();
        let updated = auth.update_user(&UserPatch::onboarded()).await.unwrap();
        assert!(updated.is_onboarded);
        assert_eq!(updated.email, "a@b.c");
        assert_eq!(auth.current_user().await, Some(updated));
    }

    #[tokio::test]
    async fn test_session_persisted_and_restored() {
        let storage: Arc<dyn SessionStorage> = Arc::new(MemoryStorage::new());
        let auth = AuthStore::new(storage.clone());
        let user = auth.sign_in("a@b.c", "pw").await.unwrap();

        assert!(storage.get(SESSION_KEY).await.unwrap().is_some());

        let restored = AuthStore::load(storage.clone()).await;
        assert_eq!(restored.current_user().await, Some(user));

        restored.sign_out().await;
        assert!(storage.get(AUTH_USER_KEY).await.unwrap().is_none());
        assert!(storage.get(SESSION_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_corrupt_session_means_no_user() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(AUTH_USER_KEY, "{not json").await.unwrap();

        let auth = AuthStore::load(storage).await;
        assert!(auth.current_user().await.is_none());
    }

    #[tokio::test]
    async fn test_listeners_notified_until_unsubscribed() {
        let auth = AuthStore::in_memory();
        let calls = Arc::new(AtomicUsize::new(0));
        let signed_in = Arc::new(AtomicUsize::new(0));

        let first = {
            let calls = calls.clone();
            auth.on_auth_change(move |_| {
                calls.fetch_add(1, Ordering::SeqCst);
            })
            .await
        };
        let _second = {
            let signed_in = signed_in.clone();
            auth.on_auth_change(move |user| {
                if user.is_some() {
                    signed_in.fetch_add(1, Ordering::SeqCst);
                }
            })
            .await
        };
        auth.sign_in("a@b.c", "pw").await.unwrap();
        auth.update_user(&UserPatch::onboarded()).await;
        auth.sign_out().await;
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(signed_in.load(Ordering::SeqCst), 2);

        first.unsubscribe().await;

        auth.sign_in("a@b.c", "pw").await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(signed_in.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_failed_validation_does_not_notify() {
        let auth = AuthStore::in_memory();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let _sub = auth
            .on_auth_change(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .await;

        let _ = auth.sign_in("", "").await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_sign_out_during_slow_sign_in_stays_consistent() {
        let storage = Arc::new(SlowStorage::default());
        let auth = Arc::new(AuthStore::new(storage.clone()));
        let events = Arc::new(std::sync::Mutex::new(Vec::new()));
        let _sub = {
            let events = events.clone();
            auth.on_auth_change(move |user| events.lock().unwrap().push(user.is_some()))
                .await
        };

        let signing_in = {
            let auth = auth.clone();
            tokio::spawn(async move { auth.sign_in("a@b.c", "pw").await })
        };
        tokio::task::yield_now().await;
        auth.sign_out().await;
        signing_in.await.unwrap().unwrap();

        let in_memory = auth.current_user().await.is_some();
        let stored = storage.get(AUTH_USER_KEY).await.unwrap().is_some();
        assert_eq!(stored, in_memory);
        assert!(!in_memory);

        let events = events.lock().unwrap().clone();
        assert_eq!(events, vec![true, false]);

        let restarted = AuthStore::load(storage).await;
        assert!(restarted.current_user().await.is_none());
    }
}
