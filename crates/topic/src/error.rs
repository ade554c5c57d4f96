use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopicError {
    #[error("invalid topic name: {0}")]
    InvalidFormat(String),
}
