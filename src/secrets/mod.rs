//! Startup secret retrieval: Azure AD token acquisition and the Key Vault
//! secret fetch that yields the database credentials.
//!
//! Layout:
//! - `azure.rs`: access-token acquisition (service principal or IMDS)
//! - `keyvault.rs`: Key Vault REST client and the secret payload shape

pub mod azure;
pub mod keyvault;

pub use keyvault::{DbConfig, KeyVaultClient};
