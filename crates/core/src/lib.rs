pub mod config;
pub mod domain;
pub mod draft;
pub mod errors;
pub mod store;

pub use config::{AppConfig, ConfigError, DatabaseConfig, LoadOptions, LogFormat, LoggingConfig};
pub use domain::request::{
    MaterialCategory, MaterialRequest, RequestId, RequestStatus, UrgencyLevel,
};
pub use draft::{RequestDraft, DEFAULT_UNIT, DEPARTMENTS, UNITS};
pub use errors::{StoreError, SubmitError};
pub use store::RequestStore;
