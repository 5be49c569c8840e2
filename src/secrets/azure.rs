use crate::config::{Config, ServicePrincipal};
use crate::error::LarderError;
use oauth2::basic::BasicClient;
use oauth2::{ClientId, ClientSecret, Scope, TokenResponse, TokenUrl};
use serde::Deserialize;
use tracing::info;

const KEY_VAULT_SCOPE: &str = "https://vault.azure.net/.default";
const KEY_VAULT_RESOURCE: &str = "https://vault.azure.net";
const IMDS_TOKEN_URL: &str = "http://169.254.169.254/metadata/identity/oauth2/token";
const IMDS_API_VERSION: &str = "2018-02-01";

/// Acquire an access token for Key Vault. Prefers the service-principal
/// client-credentials flow when `AZURE_*` variables are configured, and
/// falls back to the managed-identity endpoint otherwise. One attempt,
/// no retry; failures abort startup.
pub async fn acquire_token(cfg: &Config, http: &reqwest::Client) -> Result<String, LarderError> {
    match cfg.service_principal() {
        Some(sp) => {
            info!(client_id = %sp.client_id, "acquiring vault token via service principal");
            client_credentials_token(&sp, http).await
        }
        None => {
            info!("acquiring vault token via managed identity");
            imds_token(http).await
        }
    }
}

async fn client_credentials_token(
    sp: &ServicePrincipal,
    http: &reqwest::Client,
) -> Result<String, LarderError> {
    let token_url = TokenUrl::new(format!(
        "https://login.microsoftonline.com/{}/oauth2/v2.0/token",
        sp.tenant_id
    ))
    .map_err(|e| LarderError::SecretUnavailable(format!("invalid token endpoint: {e}")))?;

    let client = BasicClient::new(ClientId::new(sp.client_id.clone()))
        .set_client_secret(ClientSecret::new(sp.client_secret.clone()))
        .set_token_uri(token_url);

    let token = client
        .exchange_client_credentials()
        .add_scope(Scope::new(KEY_VAULT_SCOPE.to_string()))
        .request_async(http)
        .await
        .map_err(|e| LarderError::SecretUnavailable(format!("token request failed: {e}")))?;

    Ok(token.access_token().secret().clone())
}

#[derive(Debug, Deserialize)]
struct ImdsTokenResponse {
    access_token: String,
}

async fn imds_token(http: &reqwest::Client) -> Result<String, LarderError> {
    let resp = http
        .get(IMDS_TOKEN_URL)
        .query(&[
            ("api-version", IMDS_API_VERSION),
            ("resource", KEY_VAULT_RESOURCE),
        ])
        .header("Metadata", "true")
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| LarderError::SecretUnavailable(format!("managed identity endpoint: {e}")))?;

    let token: ImdsTokenResponse = resp.json().await.map_err(|e| {
        LarderError::SecretUnavailable(format!("malformed managed identity response: {e}"))
    })?;
    Ok(token.access_token)
}
