use figment::{Figment, providers::Env};
use serde::Deserialize;

/// Process configuration, extracted once from the environment in `main`
/// and passed down explicitly. No global config state.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub key_vault_name: String,
    pub secret_name: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_loglevel")]
    pub loglevel: String,
    #[serde(default)]
    pub azure_tenant_id: Option<String>,
    #[serde(default)]
    pub azure_client_id: Option<String>,
    #[serde(default)]
    pub azure_client_secret: Option<String>,
}

/// Azure AD service-principal credentials for the client-credentials flow.
#[derive(Debug, Clone)]
pub struct ServicePrincipal {
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: String,
}

fn default_port() -> u16 {
    3000
}

fn default_loglevel() -> String {
    "info".to_string()
}

impl Config {
    /// Read `KEY_VAULT_NAME`, `SECRET_NAME`, `PORT`, `LOGLEVEL` and the
    /// optional `AZURE_*` variables. Missing required variables fail here,
    /// before any network activity.
    pub fn from_env() -> Result<Self, figment::Error> {
        Figment::from(Env::raw()).extract()
    }

    pub fn vault_url(&self) -> String {
        format!("https://{}.vault.azure.net", self.key_vault_name)
    }

    /// `Some` only when tenant id, client id and client secret are all set.
    pub fn service_principal(&self) -> Option<ServicePrincipal> {
        match (
            self.azure_tenant_id.as_deref(),
            self.azure_client_id.as_deref(),
            self.azure_client_secret.as_deref(),
        ) {
            (Some(tenant_id), Some(client_id), Some(client_secret)) => Some(ServicePrincipal {
                tenant_id: tenant_id.to_string(),
                client_id: client_id.to_string(),
                client_secret: client_secret.to_string(),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_required_and_defaulted_fields() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("KEY_VAULT_NAME", "larder-vault");
            jail.set_env("SECRET_NAME", "db-credentials");

            let cfg: Config = Figment::from(Env::raw()).extract()?;
            assert_eq!(cfg.key_vault_name, "larder-vault");
            assert_eq!(cfg.secret_name, "db-credentials");
            assert_eq!(cfg.port, 3000);
            assert_eq!(cfg.loglevel, "info");
            assert_eq!(cfg.vault_url(), "https://larder-vault.vault.azure.net");
            assert!(cfg.service_principal().is_none());
            Ok(())
        });
    }

    #[test]
    fn service_principal_requires_all_three_variables() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("KEY_VAULT_NAME", "larder-vault");
            jail.set_env("SECRET_NAME", "db-credentials");
            jail.set_env("AZURE_TENANT_ID", "tenant");
            jail.set_env("AZURE_CLIENT_ID", "client");

            let cfg: Config = Figment::from(Env::raw()).extract()?;
            assert!(cfg.service_principal().is_none());

            jail.set_env("AZURE_CLIENT_SECRET", "s3cret");
            let cfg: Config = Figment::from(Env::raw()).extract()?;
            let sp = cfg.service_principal().expect("all three variables set");
            assert_eq!(sp.tenant_id, "tenant");
            Ok(())
        });
    }
}
