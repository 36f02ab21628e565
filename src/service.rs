use std::fmt;

use crate::constants::{DEV_BLOB_HOST, DEV_QUEUE_HOST, DEV_TABLE_HOST};

/// The Azure Storage service to resolve parameters for.
///
/// Each service has its own endpoint naming conventions:
/// `{account}.blob.core.windows.net` for blob, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// Blob storage.
    Blob,
    /// Queue storage.
    Queue,
    /// Table storage.
    Table,
    /// File shares.
    File,
}

impl Service {
    /// DNS label for this service in endpoint hostnames.
    pub fn endpoint_name(&self) -> &'static str {
        match self {
            Service::Blob => "blob",
            Service::Queue => "queue",
            Service::Table => "table",
            Service::File => "file",
        }
    }

    /// Connection string key carrying a full endpoint for this service.
    pub(crate) fn connection_string_key(&self) -> &'static str {
        match self {
            Service::Blob => "BlobEndpoint",
            Service::Queue => "QueueEndpoint",
            Service::Table => "TableEndpoint",
            Service::File => "FileEndpoint",
        }
    }

    /// Host the storage emulator serves this service on.
    ///
    /// The emulator doesn't support file shares; their host is empty.
    pub(crate) fn emulator_host(&self) -> &'static str {
        match self {
            Service::Blob => DEV_BLOB_HOST,
            Service::Queue => DEV_QUEUE_HOST,
            Service::Table => DEV_TABLE_HOST,
            Service::File => "",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint_name())
    }
}
