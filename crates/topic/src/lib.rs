mod config;
mod error;
mod name;

pub use config::PulsarConfig;
pub use error::TopicError;
pub use name::{TopicName, create_topic_name, parse_topic_name, pulsar_connection_url};
