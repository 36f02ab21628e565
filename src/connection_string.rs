use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::{Config, Service};

/// Parses an [Azure connection string][1] into a [`Config`].
///
/// Recognized keys are `AccountName`, `AccountKey`, `SharedAccessSignature`,
/// `UseDevelopmentStorage`, `DefaultEndpointsProtocol`, `EndpointSuffix` and
/// the endpoint key of the given service. Unrecognized keys are ignored.
///
/// [1]: https://learn.microsoft.com/en-us/azure/storage/common/storage-configure-connection-string
pub(crate) fn parse(conn_str: &str, service: Service) -> Result<Config> {
    let key_values = parse_into_key_values(conn_str)?;

    let protocol = match key_values.get("DefaultEndpointsProtocol") {
        Some(value) => Some(value.parse()?),
        None => None,
    };

    Ok(Config {
        account_name: key_values.get("AccountName").cloned(),
        account_key: key_values.get("AccountKey").cloned(),
        sas_token: key_values.get("SharedAccessSignature").cloned(),
        is_emulated: key_values.get("UseDevelopmentStorage").map(String::as_str) == Some("true"),
        protocol,
        endpoint_suffix: key_values.get("EndpointSuffix").cloned(),
        custom_domain: key_values.get(service.connection_string_key()).cloned(),
        connection_string: None,
    })
}

fn parse_into_key_values(conn_str: &str) -> Result<HashMap<String, String>> {
    conn_str
        .trim()
        .replace('\n', "")
        .split(';')
        .filter(|&field| !field.is_empty())
        .map(|field| {
            let (key, value) = field.trim().split_once('=').ok_or_else(|| {
                Error::config_invalid(format!(
                    "invalid connection string, expected '=' in field: {field}"
                ))
            })?;
            Ok((key.to_string(), value.to_string()))
        })
        .collect()
}
