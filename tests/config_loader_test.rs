//! Layered configuration loading: defaults, YAML files, environment.

use std::fs;

use sentinel::domain::models::Language;
use sentinel::infrastructure::config::ConfigLoader;

const CLEAR: [(&str, Option<&str>); 4] = [
    ("GEMINI_API_KEY", None),
    ("SENTINEL_API_KEY", None),
    ("SENTINEL_LANGUAGE", None),
    ("SENTINEL_GEMINI__TIMEOUT_SECS", None),
];

fn with_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
    let mut all: Vec<(&str, Option<&str>)> = CLEAR.to_vec();
    for (name, value) in vars {
        all.retain(|(existing, _)| existing != name);
        all.push((*name, *value));
    }
    temp_env::with_vars(all, f);
}

#[test]
fn test_defaults_without_files() {
    let dir = tempfile::tempdir().unwrap();

    with_env(&[], || {
        let config = ConfigLoader::load_from_dir(dir.path()).unwrap();
        assert!(config.api_key.is_none());
        assert_eq!(config.language, Language::Es);
        assert_eq!(config.gemini.model_chain.len(), 3);
    });
}

#[test]
fn test_local_yaml_overrides_config_yaml() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("config.yaml"),
        "language: en\ngemini:\n  timeout_secs: 30\n  model_chain:\n    - model-a\n    - model-b\n",
    )
    .unwrap();
    fs::write(dir.path().join("local.yaml"), "gemini:\n  timeout_secs: 10\n").unwrap();

    with_env(&[], || {
        let config = ConfigLoader::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.language, Language::En);
        assert_eq!(config.gemini.timeout_secs, 10);
        assert_eq!(config.gemini.model_chain, vec!["model-a", "model-b"]);
    });
}

#[test]
fn test_environment_overrides_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("config.yaml"), "gemini:\n  timeout_secs: 30\n").unwrap();

    with_env(
        &[
            ("SENTINEL_GEMINI__TIMEOUT_SECS", Some("45")),
            ("SENTINEL_LANGUAGE", Some("en")),
        ],
        || {
            let config = ConfigLoader::load_from_dir(dir.path()).unwrap();
            assert_eq!(config.gemini.timeout_secs, 45);
            assert_eq!(config.language, Language::En);
        },
    );
}

#[test]
fn test_gemini_api_key_populates_credential() {
    let dir = tempfile::tempdir().unwrap();

    with_env(&[("GEMINI_API_KEY", Some("from-gemini-env"))], || {
        let config = ConfigLoader::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.default_credential(), Some("from-gemini-env"));
    });
}

#[test]
fn test_prefixed_key_wins_over_gemini_api_key() {
    let dir = tempfile::tempdir().unwrap();

    with_env(
        &[
            ("GEMINI_API_KEY", Some("generic")),
            ("SENTINEL_API_KEY", Some("specific")),
        ],
        || {
            let config = ConfigLoader::load_from_dir(dir.path()).unwrap();
            assert_eq!(config.default_credential(), Some("specific"));
        },
    );
}

#[test]
fn test_unknown_language_uses_default() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("config.yaml"), "language: fr\n").unwrap();

    with_env(&[], || {
        let config = ConfigLoader::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.language, Language::Es);
    });

    with_env(&[("SENTINEL_LANGUAGE", Some("de"))], || {
        let config = ConfigLoader::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.language, Language::Es);
    });
}

#[test]
fn test_invalid_file_values_fail_validation() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("config.yaml"), "gemini:\n  model_chain: []\n").unwrap();

    with_env(&[], || {
        let err = ConfigLoader::load_from_dir(dir.path()).unwrap_err();
        assert!(err.to_string().contains("Model chain cannot be empty"));
    });
}

#[test]
fn test_load_from_explicit_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sentinel.yaml");
    fs::write(&path, "api_key: from-file\nlogging:\n  level: debug\n").unwrap();

    with_env(&[], || {
        let config = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(config.default_credential(), Some("from-file"));
        assert_eq!(config.logging.level, "debug");
    });

    assert!(ConfigLoader::load_from_file(dir.path().join("missing.yaml")).is_err());
}
