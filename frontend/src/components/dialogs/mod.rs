mod cloud_storage;
mod data_connector;

pub use cloud_storage::CloudStorageDialog;
pub use data_connector::DataConnectorDialog;
