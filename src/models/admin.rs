use sqlx::FromRow;

/// The single administrator login record. The password is an opaque
/// comparison string; it is stored and compared as-is (no hashing).
#[derive(Debug, Clone, FromRow)]
pub struct AdminCredential {
    pub username: String,
    pub password: String,
}
