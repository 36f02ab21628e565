use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::{connection_string, Service};

/// Scheme used to reach the service endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Protocol {
    /// Plain HTTP. The emulator only speaks this.
    Http,
    /// HTTPS, the default for cloud endpoints.
    #[default]
    Https,
}

impl Protocol {
    /// The scheme as it appears in a URL.
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "http" => Ok(Protocol::Http),
            "https" => Ok(Protocol::Https),
            _ => Err(Error::config_invalid(format!(
                "invalid endpoints protocol: {s}"
            ))),
        }
    }
}

/// Config carries all the configuration for resolving service parameters.
#[derive(Clone, Default)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Config {
    /// Storage account name.
    pub account_name: Option<String>,
    /// Storage account shared key. Surrounding whitespace is stripped
    /// during resolution.
    pub account_key: Option<String>,
    /// SAS (Shared Access Signature) token.
    pub sas_token: Option<String>,
    /// Target the local storage emulator instead of the cloud.
    pub is_emulated: bool,
    /// Scheme for the endpoints. Defaults to [`Protocol::Https`].
    pub protocol: Option<Protocol>,
    /// DNS suffix for endpoint hostnames. Defaults to `core.windows.net`.
    pub endpoint_suffix: Option<String>,
    /// Full endpoint replacing the `{account}.{service}.{suffix}` naming,
    /// e.g. `https://cdn.example.com/blobs`.
    pub custom_domain: Option<String>,
    /// Raw connection string. When set, it wins over every other field.
    pub connection_string: Option<String>,
}

impl Config {
    /// Parses an [Azure connection string][1] into a configuration object.
    ///
    /// The connection string doesn't have to specify all required parameters
    /// because the user is still allowed to set them later directly on the
    /// object.
    ///
    /// The function takes a [`Service`] parameter because it determines the
    /// key used to parse a service endpoint
    /// (`BlobEndpoint`, `QueueEndpoint`, ...).
    ///
    /// An example of a connection string looks like:
    ///
    /// ```txt
    /// AccountName=mystorageaccount;
    /// AccountKey=Eby8vdM02xNOcqFlqUwJPLlmEtlCDXJ1OUzFT50uSRZ6IFsuFq2UVErCz4I6tq/K1SZFPTOtr/KBHBeksoGMGw==;
    /// BlobEndpoint=https://mystorageaccount.blob.core.windows.net
    /// ```
    ///
    /// [1]: https://learn.microsoft.com/en-us/azure/storage/common/storage-configure-connection-string
    pub fn try_from_connection_string(conn_str: &str, service: Service) -> Result<Self> {
        connection_string::parse(conn_str, service)
    }
}
