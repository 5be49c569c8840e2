use crate::error::LarderError;
use serde::Deserialize;
use tracing::info;
use url::Url;

const KEY_VAULT_API_VERSION: &str = "7.4";

/// Database connection parameters carried in the Key Vault secret value.
/// Held by pool construction only; the password is never logged.
#[derive(Debug, Clone, Deserialize)]
pub struct DbConfig {
    #[serde(rename = "DB_HOST")]
    pub host: String,
    #[serde(rename = "DB_USER")]
    pub user: String,
    #[serde(rename = "DB_PASSWORD")]
    pub password: String,
    #[serde(rename = "DB_NAME")]
    pub database: String,
}

/// Secret envelope returned by the Key Vault REST API.
#[derive(Debug, Deserialize)]
struct KeyVaultSecret {
    value: String,
}

pub struct KeyVaultClient {
    http: reqwest::Client,
    vault_url: Url,
}

impl KeyVaultClient {
    pub fn new(vault_url: &str, http: reqwest::Client) -> Result<Self, LarderError> {
        let vault_url = Url::parse(vault_url)
            .map_err(|e| LarderError::SecretUnavailable(format!("invalid vault url: {e}")))?;
        Ok(Self { http, vault_url })
    }

    /// Fetch the named secret and parse its value as `DbConfig` JSON.
    /// Unreachable store, missing secret and malformed payloads all map to
    /// `SecretUnavailable`; the secret value itself never appears in errors.
    pub async fn fetch_db_config(
        &self,
        token: &str,
        secret_name: &str,
    ) -> Result<DbConfig, LarderError> {
        let url = self
            .vault_url
            .join(&format!("secrets/{secret_name}"))
            .map_err(|e| LarderError::SecretUnavailable(format!("invalid secret name: {e}")))?;

        let resp = self
            .http
            .get(url)
            .query(&[("api-version", KEY_VAULT_API_VERSION)])
            .bearer_auth(token)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                LarderError::SecretUnavailable(format!("fetching secret {secret_name}: {e}"))
            })?;

        let secret: KeyVaultSecret = resp.json().await.map_err(|e| {
            LarderError::SecretUnavailable(format!("malformed vault response: {e}"))
        })?;

        let db_config: DbConfig = serde_json::from_str(&secret.value).map_err(|_| {
            LarderError::SecretUnavailable(format!(
                "secret {secret_name} is not a valid connection parameter object"
            ))
        })?;

        info!(host = %db_config.host, database = %db_config.database, "database credentials loaded");
        Ok(db_config)
    }
}
