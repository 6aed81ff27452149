//! Main orchestration logic: load the model, map each widget, emit and
//! persist the generated modules.

use crate::cli::Args;
use crate::config::{GenConfig, GenerationSettings};
use crate::output::GenerationSummary;
use camino::{Utf8Path, Utf8PathBuf};
use component_emitter::{generate_common_reexports, generate_component, generate_index, ReExport};
use std::fs;
use std::time::Instant;
use thiserror::Error;
use widget_mapper::{map_widget, CustomTypeRegistry, DefaultTypeResolver, COMPONENT_FILE_EXTENSION};
use widget_metadata::{MetadataError, Model};

/// Folder (and grouping key) common re-export modules are written under.
const COMMON_TARGET_FOLDER: &str = "common";

/// Orchestration errors.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// No metadata file was given.
    #[error("no metadata file specified (pass --metadata or set it in dxvue.config.json)")]
    MissingMetadataPath,

    /// The metadata document failed to load.
    #[error(transparent)]
    Metadata(#[from] MetadataError),

    /// A target directory could not be created.
    #[error("failed to create directory {path}: {source}")]
    CreateDirFailed {
        /// The directory that could not be created.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A generated file could not be written.
    #[error("failed to write {path}: {source}")]
    WriteFailed {
        /// The file that could not be written.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Runs one generation pass.
pub fn run(args: Args) -> Result<GenerationSummary, OrchestratorError> {
    let total_start = Instant::now();

    let config = GenConfig::load(args.config.as_deref());
    let settings =
        GenerationSettings::resolve(&args, config).ok_or(OrchestratorError::MissingMetadataPath)?;

    let load_start = Instant::now();
    let model = Model::from_path(&settings.metadata)?;
    let load_time = load_start.elapsed();

    let registry = CustomTypeRegistry::build(&model.custom_types);
    let resolver = DefaultTypeResolver;

    create_dir_all(&settings.out_dir)?;
    let index_dir = settings.index_file.parent().unwrap_or(Utf8Path::new(""));
    if !index_dir.as_str().is_empty() {
        create_dir_all(index_dir)?;
    }

    let emit_start = Instant::now();
    let mut module_paths: Vec<ReExport> = Vec::with_capacity(model.widgets.len());
    let mut files_written = 0usize;

    // Widgets are processed eagerly, in model order; the first write
    // failure aborts the run with no rollback.
    for widget in &model.widgets {
        let mapped = map_widget(
            widget,
            &settings.base_component_path,
            &settings.config_component_path,
            &registry,
            &resolver,
        );
        let component_path = settings.out_dir.join(&mapped.file_name);
        let source = generate_component(
            &mapped.component,
            &settings.widgets_package,
            settings.vue_version,
            settings.generate_reexports,
        );
        write_file(&component_path, &source)?;
        files_written += 1;

        module_paths.push(ReExport {
            name: mapped.component.name,
            path: index_module_path(index_dir, &component_path),
        });
    }

    write_file(&settings.index_file, &generate_index(&module_paths))?;
    files_written += 1;

    let mut common_module_count = 0usize;
    if settings.generate_reexports {
        if let Some(common_reexports) = &model.common_reexports {
            let common_dir = settings.out_dir.join(COMMON_TARGET_FOLDER);
            create_dir_all(&common_dir)?;

            for (key, names) in common_reexports {
                let target_file_name = if key == COMMON_TARGET_FOLDER {
                    "index.ts".to_string()
                } else {
                    let stripped = key
                        .strip_prefix(&format!("{}/", COMMON_TARGET_FOLDER))
                        .unwrap_or(key);
                    format!("{}.ts", stripped)
                };

                let target_path = common_dir.join(target_file_name);
                write_file(
                    &target_path,
                    &generate_common_reexports(key, names, &settings.widgets_package),
                )?;
                files_written += 1;
                common_module_count += 1;
            }
        }
    }
    let emit_time = emit_start.elapsed();

    if args.timings {
        eprintln!("=== dx-vue-gen timings ===");
        eprintln!("metadata load: {:?}", load_time);
        eprintln!(
            "map + emit: {:?} ({} widgets)",
            emit_time,
            model.widgets.len()
        );
        eprintln!("total: {:?}", total_start.elapsed());
    }

    let summary = GenerationSummary {
        widget_count: model.widgets.len(),
        file_count: files_written,
        common_module_count,
    };
    println!("{}", summary.format());

    Ok(summary)
}

/// Computes the index entry path for an emitted component file: relative
/// to the index file's directory, forward slashes regardless of host
/// conventions, a leading `./`, and the extension removed.
fn index_module_path(index_dir: &Utf8Path, component_path: &Utf8Path) -> String {
    let mut joined = relative_components(index_dir, component_path).join("/");
    if let Some(stripped) = joined.strip_suffix(COMPONENT_FILE_EXTENSION) {
        joined = stripped.to_string();
    }
    format!("./{}", joined)
}

/// Splits the path from `from` to `to` into components, ascending out of
/// `from` where the two diverge.
fn relative_components(from: &Utf8Path, to: &Utf8Path) -> Vec<String> {
    let from_parts: Vec<&str> = from.components().map(|c| c.as_str()).collect();
    let to_parts: Vec<&str> = to.components().map(|c| c.as_str()).collect();

    let common = from_parts
        .iter()
        .zip(to_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = Vec::new();
    for _ in common..from_parts.len() {
        parts.push("..".to_string());
    }
    for part in &to_parts[common..] {
        parts.push((*part).to_string());
    }
    parts
}

fn create_dir_all(path: &Utf8Path) -> Result<(), OrchestratorError> {
    fs::create_dir_all(path).map_err(|source| OrchestratorError::CreateDirFailed {
        path: path.to_owned(),
        source,
    })
}

fn write_file(path: &Utf8Path, content: &str) -> Result<(), OrchestratorError> {
    fs::write(path, content).map_err(|source| OrchestratorError::WriteFailed {
        path: path.to_owned(),
        source,
    })
}
