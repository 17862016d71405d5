use resolvr_domain::config::{
    CliOverrides, Config, ConfigError, EmptyQuestionPolicy, Environment, LogFormat,
    NameserverConfig, StaticRecordConfig, ZoneConfig,
};

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.server.dns_port, 53);
    assert_eq!(config.zone.hostname, "resolvr.io.");
    assert_eq!(config.zone.address.as_deref(), Some("127.0.0.1"));
    assert_eq!(
        config.zone.nameservers,
        vec![
            NameserverConfig::new("ns1.resolvr.io.", "127.0.0.1"),
            NameserverConfig::new("ns2.resolvr.io.", "127.0.0.1"),
        ]
    );
    assert_eq!(config.upstream.server, "8.8.8.8:53");
    assert_eq!(config.upstream.timeout_ms, 300);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Text);
    assert!(config.metrics.enabled);
    assert_eq!(config.metrics.port, 9153);
    assert_eq!(config.compat.empty_question, EmptyQuestionPolicy::Soa);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_from_toml() {
    let toml_str = r#"
        [server]
        bind_address = "127.0.0.1"
        dns_port = 5353

        [zone]
        hostname = "example.org."
        a_records = [{ name = "host.example.org.", value = "192.0.2.5" }]
        cname_records = [{ name = "www.example.org.", value = "example.net." }]
        nameservers = [{ hostname = "ns1.example.org.", address = "192.0.2.1" }]

        [upstream]
        server = "1.1.1.1:53"
        timeout_ms = 150

        [logging]
        format = "json"

        [compat]
        empty_question = "formerr"
    "#;

    let config = Config::from_toml(toml_str).unwrap();

    assert_eq!(config.server.dns_addr(), "127.0.0.1:5353");
    assert_eq!(config.zone.hostname, "example.org.");
    assert_eq!(
        config.zone.a_records,
        vec![StaticRecordConfig::new("host.example.org.", "192.0.2.5")]
    );
    assert_eq!(config.zone.cname_records.len(), 1);
    assert!(config.zone.aaaa_records.is_empty());
    assert_eq!(config.zone.nameservers.len(), 1);
    assert_eq!(config.upstream.timeout().as_millis(), 150);
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.compat.empty_question, EmptyQuestionPolicy::FormErr);
}

#[test]
fn test_missing_sections_use_defaults() {
    let config = Config::from_toml("[zone]\nhostname = \"example.org.\"\n").unwrap();

    assert_eq!(config.server.dns_port, 53);
    assert_eq!(config.zone.nameservers.len(), 2);
    assert_eq!(config.upstream.server, "8.8.8.8:53");
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let result = Config::from_toml("[server\ndns_port = 53");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_load_missing_file_is_read_error() {
    let result = Config::load(
        Some("/nonexistent/resolvr-test.toml"),
        CliOverrides::default(),
    );
    assert!(matches!(result, Err(ConfigError::FileRead(_, _))));
}

#[test]
fn test_validate_rejects_zero_port() {
    let mut config = Config::default();
    config.server.dns_port = 0;
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_rejects_zone_without_nameservers() {
    let config = Config {
        zone: ZoneConfig::empty("example.org."),
        ..Config::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_rejects_bad_upstream() {
    let mut config = Config::default();
    config.upstream.server = "dns.google".to_string();
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

    let mut config = Config::default();
    config.upstream.timeout_ms = 0;
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_ipv6_bind_address() {
    let mut config = Config::default();
    config.server.bind_address = "::".to_string();
    assert_eq!(config.server.dns_addr(), "[::]:53");
}

#[test]
fn test_environment_parsing() {
    assert_eq!("prod".parse::<Environment>(), Ok(Environment::Prod));
    assert_eq!("DEV".parse::<Environment>(), Ok(Environment::Dev));
    assert!("staging".parse::<Environment>().is_err());
    assert_eq!(Environment::Prod.log_format(), LogFormat::Json);
}

#[test]
fn test_cli_overrides_apply_over_defaults() {
    let overrides = CliOverrides {
        dns_port: Some(5300),
        hostname: Some("example.org.".to_string()),
        upstream: Some("9.9.9.9:53".to_string()),
        environment: Some(Environment::Prod),
        ..CliOverrides::default()
    };

    let config = Config::load(None, overrides).unwrap();

    assert_eq!(config.server.dns_port, 5300);
    assert_eq!(config.zone.hostname, "example.org.");
    assert_eq!(config.upstream.server, "9.9.9.9:53");
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn test_explicit_log_format_beats_environment() {
    let overrides = CliOverrides {
        environment: Some(Environment::Prod),
        log_format: Some(LogFormat::Text),
        ..CliOverrides::default()
    };

    let config = Config::load(None, overrides).unwrap();
    assert_eq!(config.logging.format, LogFormat::Text);
}

#[test]
fn test_validate_rejects_bad_metrics_bind_address() {
    let mut config = Config::default();
    config.metrics.bind_address = "localhost".to_string();
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

    config.metrics.enabled = false;
    assert!(config.validate().is_ok());
}

#[test]
fn test_metrics_socket_addr() {
    let config = Config::default();
    let addr = config.metrics.socket_addr().unwrap();
    assert_eq!(addr.to_string(), "127.0.0.1:9153");
}
