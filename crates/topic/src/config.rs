use crate::name::{TopicName, pulsar_connection_url};

/// Broker location and addressing scope for ingest topics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PulsarConfig {
    /// Broker host (e.g. `localhost`).
    pub host: String,
    /// Broker port. Kept as a string, it is only ever formatted.
    pub port: String,
    /// Tenant every topic is created under.
    pub tenant: String,
    /// Namespace within the tenant.
    pub namespace: String,
}

impl Default for PulsarConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: "6650".to_string(),
            tenant: "default".to_string(),
            namespace: "default".to_string(),
        }
    }
}

impl PulsarConfig {
    /// `pulsar://{host}:{port}`
    #[must_use]
    pub fn connection_url(&self) -> String {
        pulsar_connection_url(&self.host, &self.port)
    }

    /// Topic under the configured tenant and namespace.
    #[must_use]
    pub fn topic(&self, name: &str) -> TopicName {
        TopicName::new(&self.tenant, &self.namespace, name)
    }
}
