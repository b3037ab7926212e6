//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed cwd and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use press_config::{ConfigError, PressConfig};

#[test]
fn loads_store_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[store]
data_dir = "/var/lib/pressroom"
slot = "submissions_v2"
trail = false
"#,
        )?;

        let config: PressConfig = Figment::from(Serialized::defaults(PressConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.store.data_dir, "/var/lib/pressroom");
        assert_eq!(config.store.slot, "submissions_v2");
        assert!(!config.store.trail);
        assert_eq!(config.general.default_limit, 20);
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_limit = 5
"#,
        )?;

        let config: PressConfig = Figment::from(Serialized::defaults(PressConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.default_limit, 5);
        assert_eq!(config.store.slot, "blog_aggregator_submissions_v1");
        Ok(())
    });
}

#[test]
fn env_beats_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[store]
slot = "from_toml"
"#,
        )?;
        jail.set_env("PRESS_STORE__SLOT", "from_env");

        let config: PressConfig = Figment::from(Serialized::defaults(PressConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("PRESS_").split("__"))
            .extract()?;

        assert_eq!(config.store.slot, "from_env");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(jail.directory().join(".pressroom"))
            .map_err(|e| e.to_string())?;
        jail.create_file(
            ".pressroom/config.toml",
            r#"
[store]
slot = "project_slot"
"#,
        )?;

        let config = PressConfig::load().expect("config loads");
        assert_eq!(config.store.slot, "project_slot");
        Ok(())
    });
}

#[test]
fn load_rejects_invalid_slot() {
    Jail::expect_with(|jail| {
        jail.set_env("PRESS_STORE__SLOT", "nested/slot");

        let result = PressConfig::load();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}
