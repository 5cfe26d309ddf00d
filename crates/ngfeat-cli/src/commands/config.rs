//! `ngfeat config`: inspect configuration values.

use serde::Serialize;

use crate::{
    cli::ConfigCommands,
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            if output.is_json() {
                output.json(&KeyValue { key, value })?;
            } else {
                output.print(&value)?;
            }
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
            } else {
                let serialised =
                    toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                        message: format!("Failed to serialise config: {e}"),
                        source: Some(Box::new(e)),
                    })?;
                output.header("Current Configuration:")?;
                output.print(serialised.trim_end())?;
            }
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
            output.print(LOCAL_CONFIG_FILE)?;
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct KeyValue {
    key: String,
    value: String,
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "scaffold.app_root" => Ok(config.scaffold.app_root.display().to_string()),
        "scaffold.layout" => Ok(config.scaffold.layout.to_string()),
        "templates.dir" => Ok(config
            .templates
            .dir
            .as_ref()
            .map(|d| d.display().to_string())
            .unwrap_or_default()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        _ => Err(CliError::InvalidInput {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use ngfeat_core::domain::ChildLayout;

    #[test]
    fn get_known_keys() {
        let mut cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "scaffold.app_root").unwrap(), "src/app");
        assert_eq!(get_config_value(&cfg, "scaffold.layout").unwrap(), "flat");
        assert_eq!(get_config_value(&cfg, "templates.dir").unwrap(), "");

        cfg.scaffold.layout = ChildLayout::UnderFeature;
        assert_eq!(
            get_config_value(&cfg, "scaffold.layout").unwrap(),
            "under-feature"
        );
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::InvalidInput { .. })
        ));
    }

    #[test]
    fn get_no_color_default() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }
}
