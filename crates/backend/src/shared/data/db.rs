use once_cell::sync::OnceCell;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement,
};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Open the SQLite database and make sure the schema exists.
///
/// `db_path` falls back to the configured path; `":memory:"` opens an
/// in-memory database (used by the integration tests).
pub async fn initialize_database(db_path: Option<&str>) -> anyhow::Result<()> {
    let configured = crate::shared::config::get().database.path.clone();
    let db_file = db_path.unwrap_or(&configured);

    let in_memory = db_file == ":memory:";
    let db_url = if in_memory {
        "sqlite::memory:".to_string()
    } else {
        if let Some(parent) = std::path::Path::new(db_file).parent() {
            std::fs::create_dir_all(parent)?;
        }
        let absolute_path = if std::path::Path::new(db_file).is_absolute() {
            std::path::PathBuf::from(db_file)
        } else {
            std::env::current_dir()?.join(db_file)
        };
        // Normalize path separators and ensure proper URL form on Windows
        let normalized = absolute_path.to_string_lossy().replace('\\', "/");
        let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
        let prefix = if needs_leading_slash { "/" } else { "" };
        format!("sqlite://{}{}?mode=rwc", prefix, normalized)
    };

    let mut options = ConnectOptions::new(db_url);
    if in_memory {
        // Every pooled connection would otherwise get its own empty
        // in-memory database; pin the pool to a single connection.
        options.max_connections(1).min_connections(1);
    }
    let conn = Database::connect(options).await?;

    create_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

/// Minimal schema bootstrap; every statement is idempotent.
async fn create_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    let statements = [
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            contact_name TEXT NOT NULL,
            company_name TEXT NOT NULL
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS suppliers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            email TEXT NOT NULL,
            company_name TEXT NOT NULL,
            phone_number TEXT NOT NULL,
            contact_name TEXT NOT NULL,
            deleted INTEGER NOT NULL DEFAULT 0
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            supplier_id INTEGER NOT NULL,
            name TEXT NOT NULL,
            unit TEXT NOT NULL,
            deleted INTEGER NOT NULL DEFAULT 0
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS orders (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            date TEXT NOT NULL,
            confirmed INTEGER NOT NULL DEFAULT 0,
            favourite INTEGER NOT NULL DEFAULT 0,
            favourite_label TEXT
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS order_products (
            order_id INTEGER NOT NULL,
            product_id INTEGER NOT NULL,
            user_id INTEGER NOT NULL,
            qty INTEGER NOT NULL,
            PRIMARY KEY (order_id, product_id)
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS order_suppliers (
            order_id INTEGER NOT NULL,
            supplier_id INTEGER NOT NULL,
            user_id INTEGER NOT NULL,
            email_sent TEXT,
            PRIMARY KEY (order_id, supplier_id)
        );
        "#,
    ];

    for sql in statements {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            sql.to_string(),
        ))
        .await?;
    }

    Ok(())
}
