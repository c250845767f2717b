use tempfile::TempDir;

use super::*;
use crate::Config;
use crate::cli::InitArgs;

#[test]
fn template_parses_to_default_config() {
    let config: Config = toml::from_str(&generate_config_template()).unwrap();
    assert_eq!(
        config,
        Config {
            version: Some("1".to_string()),
            ..Config::default()
        }
    );
}

#[test]
fn init_writes_template() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join(".site-audit.toml");
    let args = InitArgs {
        output: output.clone(),
        force: false,
    };

    run_init_impl(&args).unwrap();
    assert_eq!(
        std::fs::read_to_string(output).unwrap(),
        generate_config_template()
    );
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join(".site-audit.toml");
    std::fs::write(&output, "# mine").unwrap();

    let args = InitArgs {
        output: output.clone(),
        force: false,
    };
    let err = run_init_impl(&args).unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "# mine");
    assert_eq!(run_init(&args), EXIT_CONFIG_ERROR);
}

#[test]
fn init_overwrites_with_force() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join(".site-audit.toml");
    std::fs::write(&output, "# mine").unwrap();

    let args = InitArgs {
        output: output.clone(),
        force: true,
    };
    assert_eq!(run_init(&args), EXIT_SUCCESS);
    assert!(std::fs::read_to_string(output).unwrap().contains("[scanner]"));
}
