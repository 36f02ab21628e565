//! Well-known Azure Storage values.

/// Account name used by the local storage emulator.
pub const DEV_ACCOUNT_NAME: &str = "devstoreaccount1";

/// Well-known emulator account key, published by Microsoft.
pub const DEV_ACCOUNT_KEY: &str =
    "Eby8vdM02xNOcqFlqUwJPLlmEtlCDXJ1OUzFT50uSRZ6IFsuFq2UVErCz4I6tq/K1SZFPTOtr/KBHBeksoGMGw==";

/// Hosts the storage emulator listens on, one port per service.
pub const DEV_BLOB_HOST: &str = "127.0.0.1:10000";
pub const DEV_QUEUE_HOST: &str = "127.0.0.1:10001";
pub const DEV_TABLE_HOST: &str = "127.0.0.1:10002";

/// DNS suffix of the public cloud, used when no endpoint suffix is given.
pub const SERVICE_HOST_BASE: &str = "core.windows.net";
