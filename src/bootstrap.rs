use tracing::info;

use crate::config::Config;
use crate::db::{ItemStore, open_pool};
use crate::error::LarderError;
use crate::router::LarderState;
use crate::secrets::{KeyVaultClient, azure};

/// Sequence the startup phases: secret fetch, then pool construction, then
/// schema init. Each phase awaits the previous one's output, so the caller
/// can only bind a listener once the returned state exists. Any phase error
/// is fatal.
pub async fn init(cfg: &Config) -> Result<LarderState, LarderError> {
    let http = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .map_err(|e| LarderError::SecretUnavailable(format!("http client init: {e}")))?;

    let token = azure::acquire_token(cfg, &http).await?;
    let vault = KeyVaultClient::new(&cfg.vault_url(), http)?;
    let db_config = vault.fetch_db_config(&token, &cfg.secret_name).await?;

    let pool = open_pool(&db_config).await?;

    let store = ItemStore::new(pool);
    store.init_schema().await?;
    info!("database initialized");

    Ok(LarderState::new(store))
}
