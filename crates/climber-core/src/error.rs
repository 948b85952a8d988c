pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid catalog JSON: {message}")]
    InvalidCatalog { message: String },

    #[error("catalog contains no positions")]
    EmptyCatalog,
}
