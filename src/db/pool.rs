use crate::error::LarderError;
use crate::secrets::DbConfig;
use sqlx::MySqlPool;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions, MySqlSslMode};
use std::time::Duration;
use tracing::{error, info};

const MAX_CONNECTIONS: u32 = 10;

// Bounded wait for a free connection under sustained overload; callers
// queue until this elapses rather than failing immediately.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the process-wide MySQL pool from the loaded credentials.
///
/// TLS is mandatory: `VerifyIdentity` validates the server certificate
/// against trusted roots and checks the hostname; there is no insecure
/// fallback. The initial handshake failure maps to `PoolInit`.
pub async fn open_pool(db: &DbConfig) -> Result<MySqlPool, LarderError> {
    let connect_opts = MySqlConnectOptions::new()
        .host(&db.host)
        .username(&db.user)
        .password(&db.password)
        .database(&db.database)
        .ssl_mode(MySqlSslMode::VerifyIdentity);

    let pool = MySqlPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_with(connect_opts)
        .await
        .map_err(|e| {
            error!(host = %db.host, database = %db.database, error = %e, "database handshake failed");
            LarderError::PoolInit(e)
        })?;

    info!(
        host = %db.host,
        database = %db.database,
        max_connections = MAX_CONNECTIONS,
        "database connection pool ready"
    );
    Ok(pool)
}
