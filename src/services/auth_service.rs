use crate::db::RecordStore;
use crate::error::{AppError, AppResult};

/// Caller identity threaded through admin-gated operations. Valid for
/// the lifetime of the interactive process; there are no tokens and no
/// expiry.
#[derive(Clone, Debug)]
pub struct Session {
    pub username: String,
    pub is_admin: bool,
}

impl Session {
    /// The logged-out state the presentation layer starts from.
    pub fn anonymous() -> Self {
        Self {
            username: String::new(),
            is_admin: false,
        }
    }
}

pub struct AuthService {
    store: RecordStore,
}

impl AuthService {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// Exact plaintext comparison against the stored record. No hashing,
    /// no rate limiting, no lockout; the credential scheme is a known
    /// security gap.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<Session> {
        let credential = self.store.get_credential().await?;

        if credential.username == username && credential.password == password {
            tracing::info!("Admin '{}' logged in", username);
            Ok(Session {
                username: username.to_string(),
                is_admin: true,
            })
        } else {
            tracing::warn!("Failed login attempt for '{}'", username);
            Err(AppError::Unauthorized("invalid username or password".to_string()))
        }
    }

    /// Replaces the stored credential and returns the refreshed session.
    /// Only an active admin session may call this.
    pub async fn change_credentials(
        &self,
        session: &Session,
        new_username: &str,
        new_password: &str,
    ) -> AppResult<Session> {
        if !session.is_admin {
            return Err(AppError::Unauthorized("admin session required".to_string()));
        }
        if new_username.is_empty() {
            return Err(AppError::Validation("username is required".to_string()));
        }
        if new_password.is_empty() {
            return Err(AppError::Validation("password is required".to_string()));
        }

        self.store.set_credential(new_username, new_password).await?;
        tracing::info!("Admin credentials updated, username is now '{}'", new_username);

        Ok(Session {
            username: new_username.to_string(),
            is_admin: true,
        })
    }
}
