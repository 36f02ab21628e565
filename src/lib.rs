//! Resolve Azure Storage service parameters from account configuration.
//!
//! Given named account settings, a connection string, or the storage
//! emulator flag, this crate derives the primary and secondary endpoints
//! and the authentication material for one of the blob, queue, table or
//! file services. It performs no I/O: the resolved parameters feed the
//! request builders that actually talk to the service.
//!
//! # Example
//!
//! ```rust
//! use azure_storage_params::{Config, Service, ServiceParameters};
//!
//! # fn main() -> azure_storage_params::Result<()> {
//! let config = Config {
//!     account_name: Some("mystorageaccount".to_string()),
//!     account_key: Some("bXlzdG9yYWdlYWNjb3VudGtleQ==".to_string()),
//!     ..Default::default()
//! };
//!
//! let params = ServiceParameters::resolve(Service::Blob, &config)?;
//! assert_eq!(
//!     params.primary_endpoint,
//!     "mystorageaccount.blob.core.windows.net"
//! );
//! assert_eq!(params.protocol.as_str(), "https");
//! # Ok(())
//! # }
//! ```

mod constants;

mod config;
pub use config::{Config, Protocol};

mod connection_string;

mod error;
pub use error::{Error, ErrorKind, Result};

mod params;
pub use params::ServiceParameters;

mod service;
pub use service::Service;
