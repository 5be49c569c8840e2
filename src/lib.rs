pub mod config;
pub mod error;
pub mod secrets;
pub mod bootstrap;
pub mod router;
pub mod middleware;
pub mod handlers;
pub mod db;

pub use error::LarderError;
pub use router::{LarderState, larder_router};
pub use secrets::DbConfig;
