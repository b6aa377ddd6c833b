use std::error::Error;

pub mod client;
pub mod database;
pub mod session;

#[derive(Debug)]
pub enum RequestError {
    NotFound,
    IdMissing,
    Other(Box<dyn Error + Send>),
}

impl RequestError {
    pub fn other<T: Error + Send + 'static>(why: T) -> Self {
        Self::Other(Box::new(why))
    }
}

impl From<Box<dyn Error + Send>> for RequestError {
    fn from(value: Box<dyn Error + Send>) -> Self {
        RequestError::Other(value)
    }
}

impl From<database::DatabaseError> for RequestError {
    fn from(value: database::DatabaseError) -> Self {
        match value {
            database::DatabaseError::NotFound => Self::NotFound,
            database::DatabaseError::IdMissing => Self::IdMissing,
            database::DatabaseError::Other(why) => Self::Other(why),
        }
    }
}

pub type RequestResult<O> = Result<O, RequestError>;

pub fn not_found_to_none<O>(result: RequestResult<O>) -> RequestResult<Option<O>> {
    if let Err(RequestError::NotFound) = result {
        Ok(None)
    } else {
        result.map(Some)
    }
}
