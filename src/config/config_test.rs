use std::io::Write;

use serial_test::serial;

use super::*;
use crate::Error;

#[test]
#[serial]
fn defaults_are_valid() {
    let settings = Settings::default();

    assert_eq!(settings.cluster.node_id, 1);
    assert_eq!(settings.cluster.listen_address.port(), 9081);
    assert_eq!(settings.benchmark.threads, 1);
    assert_eq!(settings.benchmark.warmup_in_secs, 30);
    assert_eq!(settings.benchmark.duration_in_secs, 60);

    settings.validate().expect("defaults must validate");
}

#[test]
#[serial]
fn load_without_sources_yields_defaults() {
    let settings = Settings::load(None).expect("load should succeed");

    assert_eq!(settings.cluster.node_id, 1);
    assert_eq!(settings.benchmark.threads, 1);
}

#[test]
fn zero_node_id_is_rejected() {
    let mut config = ClusterConfig::default();
    config.node_id = 0;

    assert!(matches!(config.validate().unwrap_err(), Error::InvalidConfig(_)));
}

#[test]
fn zero_port_is_rejected() {
    let mut config = ClusterConfig::default();
    config.listen_address = "127.0.0.1:0".parse().unwrap();

    assert!(matches!(config.validate().unwrap_err(), Error::InvalidConfig(_)));
}

#[test]
fn empty_log_dir_is_rejected() {
    let mut config = ClusterConfig::default();
    config.log_dir = std::path::PathBuf::new();

    assert!(matches!(config.validate().unwrap_err(), Error::InvalidConfig(_)));
}

#[test]
fn zero_threads_is_rejected() {
    let mut config = BenchmarkConfig::default();
    config.threads = 0;

    assert!(matches!(config.validate().unwrap_err(), Error::InvalidConfig(_)));
}

#[test]
fn zero_duration_is_rejected() {
    let mut config = BenchmarkConfig::default();
    config.duration_in_secs = 0;

    assert!(matches!(config.validate().unwrap_err(), Error::InvalidConfig(_)));
}

#[test]
#[serial]
fn file_source_overrides_defaults() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("bench.toml");
    let mut file = std::fs::File::create(&path).expect("create config file");
    writeln!(
        file,
        r#"
[cluster]
node_id = 7
listen_address = "127.0.0.1:9099"

[benchmark]
threads = 4
"#
    )
    .expect("write config file");

    let settings = Settings::load(path.to_str()).expect("load should succeed");

    assert_eq!(settings.cluster.node_id, 7);
    assert_eq!(settings.cluster.listen_address.port(), 9099);
    assert_eq!(settings.benchmark.threads, 4);
    // Untouched sections keep their defaults.
    assert_eq!(settings.benchmark.duration_in_secs, 60);
}

#[test]
#[serial]
fn environment_overrides_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("bench.toml");
    let mut file = std::fs::File::create(&path).expect("create config file");
    writeln!(file, "[cluster]\nnode_id = 7").expect("write config file");

    temp_env::with_var("BENCH_CLUSTER__NODE_ID", Some("9"), || {
        let settings = Settings::load(path.to_str()).expect("load should succeed");
        assert_eq!(settings.cluster.node_id, 9);
    });
}

#[test]
#[serial]
fn missing_required_file_fails() {
    let result = Settings::load(Some("/nonexistent/bench.toml"));
    assert!(matches!(result.unwrap_err(), Error::Config(_)));
}
