use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::TopicError;

const PERSISTENT_SCHEME: &str = "persistent://";
const PULSAR_SCHEME: &str = "pulsar://";

/// Greedy captures, anchored at the start only. With more than two slashes
/// after the scheme the extra ones land in the tenant.
static TOPIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^persistent://(?P<tenant>.+)/(?P<namespace>.+)/(?P<topic>.+)")
        .expect("topic name pattern is valid")
});

/// Fully qualified Pulsar topic: `persistent://{tenant}/{namespace}/{topic}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TopicName {
    tenant: String,
    namespace: String,
    topic: String,
}

impl TopicName {
    /// Build a topic name from its parts. Segments are not validated.
    pub fn new(
        tenant: impl Into<String>,
        namespace: impl Into<String>,
        topic: impl Into<String>,
    ) -> Self {
        Self {
            tenant: tenant.into(),
            namespace: namespace.into(),
            topic: topic.into(),
        }
    }

    /// Parse a `persistent://` topic name.
    ///
    /// # Errors
    /// Returns `TopicError::InvalidFormat` carrying the input when it does not
    /// start with `persistent://` followed by three non-empty segments.
    pub fn parse(raw: &str) -> Result<Self, TopicError> {
        let Some(caps) = TOPIC_RE.captures(raw) else {
            tracing::debug!(topic = %raw, "rejected topic name");
            return Err(TopicError::InvalidFormat(raw.to_string()));
        };
        Ok(Self::new(&caps["tenant"], &caps["namespace"], &caps["topic"]))
    }

    pub fn tenant(&self) -> &str {
        &self.tenant
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Consume into `(tenant, namespace, topic)`.
    pub fn into_parts(self) -> (String, String, String) {
        (self.tenant, self.namespace, self.topic)
    }
}

impl FromStr for TopicName {
    type Err = TopicError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TopicName {
    type Error = TopicError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<TopicName> for String {
    fn from(name: TopicName) -> String {
        name.to_string()
    }
}

impl std::fmt::Display for TopicName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{PERSISTENT_SCHEME}{}/{}/{}",
            self.tenant, self.namespace, self.topic
        )
    }
}

/// Split a topic name into `(tenant, namespace, topic)`.
///
/// `persistent://a/b/c/d` → `("a/b", "c", "d")`
///
/// # Errors
/// Returns `TopicError::InvalidFormat` when the name does not match.
pub fn parse_topic_name(topic_name: &str) -> Result<(String, String, String), TopicError> {
    TopicName::parse(topic_name).map(TopicName::into_parts)
}

/// `persistent://{tenant}/{namespace}/{topic}`
///
/// Segments containing `/` produce a name that parses back differently.
#[must_use]
pub fn create_topic_name(tenant: &str, namespace: &str, topic: &str) -> String {
    format!("{PERSISTENT_SCHEME}{tenant}/{namespace}/{topic}")
}

/// `pulsar://{host}:{port}`
#[must_use]
pub fn pulsar_connection_url(host: &str, port: &str) -> String {
    format!("{PULSAR_SCHEME}{host}:{port}")
}
