use thiserror::Error;

pub type Result<T> = std::result::Result<T, LivemaskError>;

#[derive(Error, Debug)]
pub enum LivemaskError {
	#[error("Invalid input: {0}")]
	InvalidInput(String),

	#[error("Truncated bitstream: {0}")]
	TruncatedInput(String),
}
