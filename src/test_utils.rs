pub mod test_helpers {
    use std::env;

    use sqlx::{mysql::MySqlConnectOptions, ConnectOptions, MySqlConnection};

    /// Connect to the MySQL server named by `TEST_DATABASE_URL`.
    ///
    /// Returns `None` when the variable is unset so live-database tests can
    /// skip on machines without a server.
    pub async fn connect_test_db() -> Option<MySqlConnection> {
        let url = env::var("TEST_DATABASE_URL").ok()?;
        let options = url
            .parse::<MySqlConnectOptions>()
            .expect("TEST_DATABASE_URL is not a valid MySQL URL");

        let conn = options
            .connect()
            .await
            .expect("failed to connect to TEST_DATABASE_URL");

        Some(conn)
    }

    /// Drop the users table so a test starts from an empty schema.
    pub async fn reset_schema(conn: &mut MySqlConnection) {
        sqlx::query("DROP TABLE IF EXISTS users")
            .execute(&mut *conn)
            .await
            .expect("failed to drop users table");
    }
}
