use cdb_topic::{PulsarConfig, TopicError, TopicName, create_topic_name, parse_topic_name};

fn assignment_topics(config: &PulsarConfig, count: usize) -> Vec<TopicName> {
    (0..count)
        .map(|i| config.topic(&format!("chroma_log_{i}")))
        .collect()
}

#[test]
fn configured_topics_parse_back() {
    let config = PulsarConfig {
        tenant: "acme".into(),
        namespace: "prod".into(),
        ..PulsarConfig::default()
    };

    for topic in assignment_topics(&config, 16) {
        let raw = topic.to_string();
        assert!(raw.starts_with("persistent://acme/prod/chroma_log_"));
        let (tenant, namespace, name) = parse_topic_name(&raw).unwrap();
        assert_eq!(tenant, "acme");
        assert_eq!(namespace, "prod");
        assert_eq!(name, topic.topic());
    }
}

#[test]
fn from_str_and_display_agree() {
    let raw = create_topic_name("t", "n", "topic");
    let name: TopicName = raw.parse().unwrap();
    assert_eq!(name, TopicName::new("t", "n", "topic"));
    assert_eq!(name.to_string(), raw);
}

#[test]
fn connection_url_is_not_a_topic() {
    let url = PulsarConfig::default().connection_url();
    assert_eq!(
        parse_topic_name(&url),
        Err(TopicError::InvalidFormat(url.clone()))
    );
}

#[test]
fn topic_names_in_json_documents() {
    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct Assignment {
        collection: String,
        topic: TopicName,
    }

    let ok: Assignment = serde_json::from_str(
        r#"{"collection":"docs","topic":"persistent://default/default/chroma_log_3"}"#,
    )
    .unwrap();
    assert_eq!(ok.topic.topic(), "chroma_log_3");

    let bad: Result<Assignment, _> =
        serde_json::from_str(r#"{"collection":"docs","topic":"default/default/chroma_log_3"}"#);
    assert!(bad.is_err());
}
