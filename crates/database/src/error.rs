use thiserror::Error;

/// Failures while establishing the store connection at startup.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Invalid database connection settings: {0}")]
    ConnectionConfigError(String),

    #[error("Failed to connect to the database: {0}")]
    ConnectionError(#[from] mongodb::error::Error),
}

/// Failures of a single store operation while serving a request.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to query the question collection: {0}")]
    QueryFailed(#[source] mongodb::error::Error),

    #[error("Failed to decode a stored question: {0}")]
    DecodeFailed(#[source] mongodb::error::Error),

    #[error("Failed to write a question: {0}")]
    WriteFailed(#[source] mongodb::error::Error),
}

impl StoreError {
    /// Classifies an error raised while reading from a cursor.
    pub fn from_read(err: mongodb::error::Error) -> Self {
        if is_decode_error(&err) {
            StoreError::DecodeFailed(err)
        } else {
            StoreError::QueryFailed(err)
        }
    }
}

fn is_decode_error(err: &mongodb::error::Error) -> bool {
    matches!(
        *err.kind,
        mongodb::error::ErrorKind::BsonDeserialization(_)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    #[test]
    fn bson_deserialization_errors_are_decode_failures() {
        let bson_err = bson::from_document::<String>(doc! { "a": 1 }).unwrap_err();
        let err = mongodb::error::Error::from(bson_err);
        assert!(matches!(StoreError::from_read(err), StoreError::DecodeFailed(_)));
    }

    #[test]
    fn other_read_errors_are_query_failures() {
        let err = mongodb::error::Error::custom("cursor killed");
        assert!(matches!(StoreError::from_read(err), StoreError::QueryFailed(_)));
    }
}
