use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// Message of the underlying store failure, without the variant prefix.
    pub fn store_message(&self) -> String {
        match self {
            StorageError::Database(e) => e.to_string(),
            StorageError::NotFound => self.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StorageError::NotFound | StorageError::Database(sqlx::Error::RowNotFound)
        )
    }
}
