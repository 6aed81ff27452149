//! Generation settings: built-in defaults, the optional project config
//! file, and CLI overrides.

use crate::cli::Args;
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use std::fs;

/// The project config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "dxvue.config.json";

/// Values loadable from `dxvue.config.json`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenConfig {
    /// Path to the integration metadata JSON file.
    pub metadata: Option<Utf8PathBuf>,

    /// Directory generated component modules are written to.
    pub out_dir: Option<Utf8PathBuf>,

    /// Path of the generated index (re-export) file.
    pub index_file: Option<Utf8PathBuf>,

    /// Module path components import the base component factories from.
    pub base_component_path: Option<String>,

    /// Module path components import the configuration component factory from.
    pub config_component_path: Option<String>,

    /// Package the widget modules are imported from.
    pub widgets_package: Option<String>,

    /// Target Vue major version.
    pub vue_version: Option<u32>,

    /// Emit widget-module re-exports and common re-export modules.
    pub generate_reexports: Option<bool>,
}

impl GenConfig {
    /// Loads the config file.
    ///
    /// An absent file yields defaults. An unreadable or unparsable file is
    /// a warning on stderr, then defaults.
    pub fn load(explicit: Option<&Utf8Path>) -> Self {
        let path = match explicit {
            Some(path) => path.to_owned(),
            None => Utf8PathBuf::from(CONFIG_FILE_NAME),
        };

        if !path.exists() {
            return Self::default();
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Warning: failed to read {}: {}", path, e);
                return Self::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: failed to parse {}: {}", path, e);
                Self::default()
            }
        }
    }
}

/// Fully resolved generation settings.
///
/// CLI values win over config-file values, config-file values over
/// built-in defaults.
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    /// Path to the integration metadata JSON file.
    pub metadata: Utf8PathBuf,
    /// Directory generated component modules are written to.
    pub out_dir: Utf8PathBuf,
    /// Path of the generated index (re-export) file.
    pub index_file: Utf8PathBuf,
    /// Module path components import the base component factories from.
    pub base_component_path: String,
    /// Module path components import the configuration component factory from.
    pub config_component_path: String,
    /// Package the widget modules are imported from.
    pub widgets_package: String,
    /// Target Vue major version.
    pub vue_version: u32,
    /// Emit widget-module re-exports and common re-export modules.
    pub generate_reexports: bool,
}

impl GenerationSettings {
    /// Resolves the effective settings.
    ///
    /// Returns `None` when neither the CLI nor the config file provides a
    /// metadata path.
    pub fn resolve(args: &Args, config: GenConfig) -> Option<Self> {
        let metadata = args.metadata.clone().or(config.metadata)?;

        Some(Self {
            metadata,
            out_dir: args
                .out_dir
                .clone()
                .or(config.out_dir)
                .unwrap_or_else(|| Utf8PathBuf::from("src/components")),
            index_file: args
                .index_file
                .clone()
                .or(config.index_file)
                .unwrap_or_else(|| Utf8PathBuf::from("src/index.ts")),
            base_component_path: args
                .base_component_path
                .clone()
                .or(config.base_component_path)
                .unwrap_or_else(|| "./core/index".to_string()),
            config_component_path: args
                .config_component_path
                .clone()
                .or(config.config_component_path)
                .unwrap_or_else(|| "./core/index".to_string()),
            widgets_package: args
                .widgets_package
                .clone()
                .or(config.widgets_package)
                .unwrap_or_else(|| "devextreme".to_string()),
            vue_version: args.vue_version.or(config.vue_version).unwrap_or(3),
            generate_reexports: args.generate_reexports
                || config.generate_reexports.unwrap_or(false),
        })
    }
}
