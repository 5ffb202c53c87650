mod error;
mod http_mapping;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use http_mapping::{classify_repository_error, repository_error_to_status_code, ApiErrorKind};
pub use traits::KeyValueStore;
pub use types::{KeyRange, ObservedRange, StoredRecord, Transaction};
