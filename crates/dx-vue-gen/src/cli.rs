//! CLI argument parsing.

use camino::Utf8PathBuf;
use clap::Parser;

/// Vue component binding generator for widget integration metadata.
#[derive(Debug, Parser)]
#[command(name = "dx-vue-gen")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the integration metadata JSON file
    #[arg(long)]
    pub metadata: Option<Utf8PathBuf>,

    /// Directory generated component modules are written to
    #[arg(long = "out-dir")]
    pub out_dir: Option<Utf8PathBuf>,

    /// Path of the generated index (re-export) file
    #[arg(long = "index-file")]
    pub index_file: Option<Utf8PathBuf>,

    /// Module path components import the base component factories from
    #[arg(long = "base-component-path")]
    pub base_component_path: Option<String>,

    /// Module path components import the configuration component factory from
    #[arg(long = "config-component-path")]
    pub config_component_path: Option<String>,

    /// Package the widget modules are imported from
    #[arg(long = "widgets-package")]
    pub widgets_package: Option<String>,

    /// Target Vue major version
    #[arg(long = "vue-version")]
    pub vue_version: Option<u32>,

    /// Emit widget-module re-exports and common re-export modules
    #[arg(long = "generate-reexports")]
    pub generate_reexports: bool,

    /// Path to a dxvue.config.json file
    #[arg(long)]
    pub config: Option<Utf8PathBuf>,

    /// Print timing breakdowns
    #[arg(long)]
    pub timings: bool,
}
