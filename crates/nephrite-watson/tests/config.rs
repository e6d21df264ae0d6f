use nephrite_watson::config::{DEFAULT_IAM_URL, WatsonConfig};

fn write_config(name: &str, contents: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join("nephrite-watson-config-tests");
    std::fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write config");
    path
}

#[test]
fn loads_a_config_file_and_defaults_the_iam_url() {
    let path = write_config(
        "complete.json",
        r#"{"api_key": "k", "deployment_url": "https://example.test/score"}"#,
    );
    let config = WatsonConfig::from_file(&path).unwrap();
    assert_eq!(config.api_key, "k");
    assert_eq!(config.deployment_url, "https://example.test/score");
    assert_eq!(config.iam_url, DEFAULT_IAM_URL);
}

#[test]
fn a_missing_required_key_is_named() {
    let path = write_config("missing.json", r#"{"api_key": "k"}"#);
    let err = WatsonConfig::from_file(&path).unwrap_err();
    assert!(
        err.to_string()
            .contains("missing required configuration key: deployment_url"),
        "got: {err}"
    );
}

#[test]
fn an_empty_required_key_is_named() {
    let path = write_config(
        "empty.json",
        r#"{"api_key": "  ", "deployment_url": "https://example.test/score"}"#,
    );
    let err = WatsonConfig::from_file(&path).unwrap_err();
    assert!(
        err.to_string().contains("missing required configuration key: api_key"),
        "got: {err}"
    );
}

#[test]
fn an_unreadable_file_is_a_config_error() {
    let err = WatsonConfig::from_file("/definitely/not/here/config.json").unwrap_err();
    assert!(err.to_string().contains("failed to read"), "got: {err}");
}
