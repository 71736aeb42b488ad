use super::*;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.bind_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_lookup_reads_overrides() {
    let config =
        ServerConfig::from_lookup(lookup(&[("HOST", "127.0.0.1"), ("PORT", "8080"), ("SITE_ROOT", "dist/site")]))
            .unwrap();
    assert_eq!(config.bind_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(config.site_root.as_deref(), Some("dist/site"));
}

#[test]
fn from_lookup_treats_blank_as_unset() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("SITE_ROOT", "")])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.site_root, None);
}

#[test]
fn from_lookup_rejects_bad_port() {
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("PORT", "70000")])),
        Err(ConfigError::InvalidPort { var: "PORT", value: "70000".to_owned() })
    );
}

#[test]
fn from_lookup_rejects_bad_host() {
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("HOST", "localhost")])),
        Err(ConfigError::InvalidHost { var: "HOST", value: "localhost".to_owned() })
    );
}

#[test]
fn from_env_reads_process_environment() {
    // No other test in this crate touches these variables.
    unsafe {
        std::env::remove_var("HOST");
        std::env::set_var("PORT", "4321");
        std::env::remove_var("SITE_ROOT");
    }
    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.port, 4321);
    unsafe {
        std::env::remove_var("PORT");
    }
}
