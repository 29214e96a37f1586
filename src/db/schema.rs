use sqlx::SqlitePool;

/// Bootstrap admin login, seeded on first startup. Known-insecure
/// default; the admin is expected to change it after logging in.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";

/// Creates the `items` and `admin` tables if absent and seeds the
/// default admin credential when none exists. Safe to run on every
/// startup.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            item_name TEXT NOT NULL,
            category TEXT NOT NULL,
            description TEXT NOT NULL,
            date_found TEXT NOT NULL,
            status TEXT NOT NULL,
            photo_path TEXT
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS admin (
            username TEXT NOT NULL,
            password TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    let rows_affected = sqlx::query(
        "INSERT INTO admin (username, password)
         SELECT ?, ?
         WHERE NOT EXISTS (SELECT 1 FROM admin)",
    )
    .bind(DEFAULT_ADMIN_USERNAME)
    .bind(DEFAULT_ADMIN_PASSWORD)
    .execute(pool)
    .await?
    .rows_affected();

    if rows_affected > 0 {
        tracing::info!("Seeded default admin credential");
    }

    Ok(())
}
