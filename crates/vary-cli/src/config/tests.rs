#[cfg(test)]
mod tests {
    use crate::cli::ProjectArgs;
    use crate::config::*;
    use crate::error::CliError;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn project(dir: &TempDir) -> ProjectArgs {
        ProjectArgs {
            cwd: Some(dir.path().to_path_buf()),
            ..ProjectArgs::default()
        }
    }

    #[test]
    #[serial]
    fn test_defaults_without_file() {
        let dir = TempDir::new().unwrap();
        let (config, root) = VaryConfig::load(&project(&dir), CliOverrides::default()).unwrap();
        assert_eq!(config, VaryConfig::default());
        assert_eq!(root, dir.path());
        assert_eq!(config.out_dir_in(&root), dir.path().join("build"));
    }

    #[test]
    #[serial]
    fn test_file_then_cli_priority() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{ "outDir": "dist", "publicPath": "/static/" }"#,
        )
        .unwrap();

        let overrides = CliOverrides {
            out_dir: Some("public".into()),
            ..CliOverrides::default()
        };
        let (config, _) = VaryConfig::load(&project(&dir), overrides).unwrap();
        assert_eq!(config.out_dir, std::path::PathBuf::from("public"));
        assert_eq!(config.public_path, "/static/");
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), r#"{ "outDir": "dist" }"#).unwrap();

        unsafe {
            std::env::set_var("VARY_OUT_DIR", "from-env");
        }
        let result = VaryConfig::load(&project(&dir), CliOverrides::default());
        unsafe {
            std::env::remove_var("VARY_OUT_DIR");
        }

        let (config, _) = result.unwrap();
        assert_eq!(config.out_dir, std::path::PathBuf::from("from-env"));
    }

    #[test]
    fn test_env_keys_map_to_camel_case_fields() {
        use crate::config::loading::env_key_to_field;

        assert_eq!(env_key_to_field("OUT_DIR"), "outDir");
        assert_eq!(env_key_to_field("variants_file"), "variantsFile");
        assert_eq!(env_key_to_field("PUBLIC_PATH"), "publicPath");
    }

    #[test]
    #[serial]
    fn test_unknown_key_is_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), r#"{ "out_dir": "dist" }"#).unwrap();

        let err = VaryConfig::load(&project(&dir), CliOverrides::default()).unwrap_err();
        match err {
            CliError::Settings(msg) => assert!(msg.contains("out_dir"), "{msg}"),
            other => panic!("expected Settings error, got {other:?}"),
        }
    }

    #[test]
    #[serial]
    fn test_env_variants_file_maps_to_camel_case() {
        let dir = TempDir::new().unwrap();

        unsafe {
            std::env::set_var("VARY_VARIANTS_FILE", "config/variants.json");
        }
        let result = VaryConfig::load(&project(&dir), CliOverrides::default());
        unsafe {
            std::env::remove_var("VARY_VARIANTS_FILE");
        }

        let (config, _) = result.unwrap();
        assert_eq!(
            config.variants_file,
            Some(std::path::PathBuf::from("config/variants.json"))
        );
    }

    #[test]
    #[serial]
    fn test_explicit_missing_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let args = ProjectArgs {
            config: Some("nope.json".into()),
            ..project(&dir)
        };
        let err = VaryConfig::load(&args, CliOverrides::default()).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(p) if p.ends_with("nope.json")));
    }

    #[test]
    #[serial]
    fn test_variants_flag_is_used() {
        let dir = TempDir::new().unwrap();
        let args = ProjectArgs {
            variants_file: Some("config/variants.toml".into()),
            ..project(&dir)
        };
        let (config, _) = VaryConfig::load(&args, CliOverrides::default()).unwrap();
        assert_eq!(
            config.variants_file,
            Some(std::path::PathBuf::from("config/variants.toml"))
        );
    }

    #[test]
    fn test_resolver_falls_back_to_builtin() {
        let dir = TempDir::new().unwrap();
        let resolver = VaryConfig::default().resolver(dir.path()).unwrap();
        assert_eq!(resolver.registry().len(), 4);
    }

    #[test]
    fn test_resolver_missing_variants_file() {
        let dir = TempDir::new().unwrap();
        let config = VaryConfig {
            variants_file: Some("missing.toml".into()),
            ..VaryConfig::default()
        };
        let err = config.resolver(dir.path()).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_schema_has_settings_fields() {
        let schema = VaryConfig::json_schema();
        let props = &schema["properties"];
        assert!(props.get("outDir").is_some());
        assert!(props.get("publicPath").is_some());
    }
}
