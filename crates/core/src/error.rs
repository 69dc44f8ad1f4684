use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
	#[error("date attribute {0:?} does not start with YYYY-MM-DD")]
	DatePattern(String),

	#[error("date attribute {0:?} is not a calendar day")]
	InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, Error>;
