use sqlx::{ConnectOptions, MySqlConnection};

use crate::config::DatabaseConfig;
use crate::error::Result;

/// Schema statement executed on every startup. `IF NOT EXISTS` keeps the
/// statement a no-op once the table is in place.
pub const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INT AUTO_INCREMENT PRIMARY KEY,
    name VARCHAR(100) NOT NULL,
    email VARCHAR(100) NOT NULL UNIQUE,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)
"#;

/// Open a single connection to the configured server.
pub async fn connect(config: &DatabaseConfig) -> Result<MySqlConnection> {
    let options = config.connect_options()?;
    let conn = options.connect().await?;
    Ok(conn)
}

/// Ensure the `users` table exists. Safe to run on every startup.
pub async fn ensure_schema(conn: &mut MySqlConnection) -> Result<()> {
    sqlx::query(CREATE_USERS_TABLE).execute(&mut *conn).await?;
    Ok(())
}

/// Connect and ensure the schema, returning the open connection handle.
/// The caller decides how long the handle lives; nothing here closes it.
pub async fn bootstrap(config: &DatabaseConfig) -> Result<MySqlConnection> {
    let mut conn = connect(config).await?;
    tracing::info!("database connection established");

    ensure_schema(&mut conn).await?;
    tracing::info!("users table ready");

    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_statement_targets_users_idempotently() {
        assert!(CREATE_USERS_TABLE.contains("CREATE TABLE IF NOT EXISTS users"));
    }

    #[test]
    fn schema_statement_defines_the_four_columns() {
        for definition in [
            "id INT AUTO_INCREMENT PRIMARY KEY",
            "name VARCHAR(100) NOT NULL",
            "email VARCHAR(100) NOT NULL UNIQUE",
            "created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP",
        ] {
            assert!(
                CREATE_USERS_TABLE.contains(definition),
                "missing column definition: {}",
                definition
            );
        }
    }
}
