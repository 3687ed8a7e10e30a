use crate::client::model::error::ApiError;

/// Load state of data fetched from the backend.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Cache<T> {
    #[default]
    NotFetched,
    Fetched(T),
    Error(ApiError),
}

impl<T> Cache<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            Cache::Fetched(data) => Some(data),
            _ => None,
        }
    }
}

impl<T> From<Result<T, ApiError>> for Cache<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Cache::Fetched(data),
            Err(err) => Cache::Error(err),
        }
    }
}
