use thiserror::Error;
use tonic::Status;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A text column that must hold a base-10 integer held something else.
    #[error("Invalid {column} value {value:?}: not an integer")]
    DataShape { column: &'static str, value: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<AppError> for Status {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Database(e) => Status::internal(format!("Database error: {}", e)),
            e @ AppError::DataShape { .. } => Status::data_loss(e.to_string()),
            AppError::Config(msg) => Status::internal(format!("Configuration error: {}", msg)),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
