use std::fmt::{self, Debug, Formatter};

use log::debug;

use crate::constants::{DEV_ACCOUNT_KEY, DEV_ACCOUNT_NAME, SERVICE_HOST_BASE};
use crate::error::{Error, Result};
use crate::{connection_string, Config, Protocol, Service};

const MISSING_INFO: &str = "missing required connection parameters";

/// Fully resolved parameters for one storage service.
///
/// Downstream request builders combine these into base URLs of the form
/// `{protocol}://{primary_endpoint}/...` and pick authentication material
/// from the shared key or the SAS token. Both may be present; which one
/// wins is the caller's decision (shared key takes precedence when set).
#[derive(Clone, PartialEq, Eq)]
pub struct ServiceParameters {
    /// Storage account name, when known. Custom-domain-only configurations
    /// don't carry one.
    pub account_name: Option<String>,
    /// Storage account shared key.
    pub account_key: Option<String>,
    /// SAS (Shared Access Signature) token.
    pub sas_token: Option<String>,
    /// Scheme for the endpoints.
    pub protocol: Protocol,
    /// Read-write endpoint, host plus path without the scheme.
    pub primary_endpoint: String,
    /// Read-only geo-replica endpoint. Present only when the account name
    /// is known.
    pub secondary_endpoint: Option<String>,
}

impl Debug for ServiceParameters {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceParameters")
            .field("account_name", &self.account_name)
            .field("account_key", &self.account_key.as_ref().map(|_| "***"))
            .field("sas_token", &self.sas_token.as_ref().map(|_| "***"))
            .field("protocol", &self.protocol)
            .field("primary_endpoint", &self.primary_endpoint)
            .field("secondary_endpoint", &self.secondary_endpoint)
            .finish()
    }
}

impl ServiceParameters {
    /// Resolve service parameters from a configuration.
    ///
    /// Precedence: a connection string wins over everything; then the
    /// emulator flag; then direct account settings. A configuration with
    /// none of the three cannot identify an account and resolution fails
    /// with [`ErrorKind::ConfigInvalid`](crate::ErrorKind::ConfigInvalid).
    pub fn resolve(service: Service, config: &Config) -> Result<Self> {
        if let Some(conn_str) = &config.connection_string {
            debug!("resolving {service} parameters from a connection string");
            // The parsed config never carries another connection string,
            // so this cannot recurse further.
            let parsed = connection_string::parse(conn_str, service)?;
            Self::from_config(service, &parsed)
        } else if config.is_emulated || config.account_name.is_some() {
            Self::from_config(service, config)
        } else {
            Err(Error::config_invalid(MISSING_INFO))
        }
    }

    fn from_config(service: Service, config: &Config) -> Result<Self> {
        if config.is_emulated {
            return Ok(Self::emulated(service, config.sas_token.clone()));
        }

        // Strip whitespace from the key.
        let account_key = config.account_key.as_ref().map(|k| k.trim().to_string());
        let endpoint_suffix = config
            .endpoint_suffix
            .as_deref()
            .unwrap_or(SERVICE_HOST_BASE);

        let mut protocol = config.protocol.unwrap_or_default();
        let primary_endpoint = if let Some(domain) = &config.custom_domain {
            let (scheme, endpoint) = split_scheme(domain);
            if let Some(scheme) = scheme {
                protocol = scheme.parse()?;
            }
            debug!("using custom domain {endpoint} as the {service} primary endpoint");
            endpoint.to_string()
        } else {
            let Some(account_name) = &config.account_name else {
                return Err(Error::config_invalid(MISSING_INFO));
            };
            format!("{account_name}.{service}.{endpoint_suffix}")
        };

        // Custom-domain-only configurations have no secondary endpoint.
        let secondary_endpoint = config
            .account_name
            .as_ref()
            .map(|account_name| format!("{account_name}-secondary.{service}.{endpoint_suffix}"));

        Ok(ServiceParameters {
            account_name: config.account_name.clone(),
            account_key,
            sas_token: config.sas_token.clone(),
            protocol,
            primary_endpoint,
            secondary_endpoint,
        })
    }

    fn emulated(service: Service, sas_token: Option<String>) -> Self {
        let host = service.emulator_host();
        debug!("resolving {service} parameters against the storage emulator at {host:?}");

        // Keep the development key only when no SAS token is supplied, so
        // that SAS can be exercised against the emulator.
        let account_key = sas_token.is_none().then(|| DEV_ACCOUNT_KEY.to_string());

        ServiceParameters {
            account_name: Some(DEV_ACCOUNT_NAME.to_string()),
            account_key,
            sas_token,
            protocol: Protocol::Http,
            primary_endpoint: format!("{host}/{DEV_ACCOUNT_NAME}"),
            secondary_endpoint: Some(format!("{host}/{DEV_ACCOUNT_NAME}-secondary")),
        }
    }
}

/// Splits an optional `scheme://` prefix off a custom domain and drops any
/// query or fragment, leaving host plus path.
fn split_scheme(domain: &str) -> (Option<&str>, &str) {
    let (scheme, rest) = match domain.split_once("://") {
        Some((scheme, rest)) => (Some(scheme), rest),
        None => (None, domain),
    };
    let endpoint = match rest.split_once(['?', '#']) {
        Some((endpoint, _)) => endpoint,
        None => rest,
    };
    (scheme, endpoint)
}
