//! End-to-end generation tests driving the compiled binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const METADATA: &str = r#"{
    "widgets": [
        {
            "name": "dxButton",
            "exportPath": "ui/button",
            "options": [
                { "name": "text", "types": [{ "type": "String" }] },
                { "name": "key", "types": [{ "type": "String" }] },
                {
                    "name": "type",
                    "types": [
                        { "type": "String", "acceptableValues": ["back", "danger"] }
                    ]
                }
            ],
            "reexports": ["default"]
        },
        {
            "name": "dxDataGrid",
            "exportPath": "ui/data_grid",
            "isEditor": true,
            "options": [
                { "name": "dataSource", "types": [{ "type": "Array" }] }
            ],
            "complexOptions": [
                {
                    "name": "column",
                    "optionName": "columns",
                    "isCollectionItem": true,
                    "props": [
                        { "name": "caption", "types": [{ "type": "String" }] }
                    ],
                    "nesteds": []
                }
            ],
            "nesteds": [
                {
                    "componentName": "dxColumn",
                    "isCollectionItem": true,
                    "optionName": "columns"
                }
            ],
            "reexports": ["default", "Column"]
        }
    ],
    "customTypes": [],
    "commonReexports": {
        "common": ["Foo"],
        "common/data": ["Bar"]
    }
}"#;

fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_dx-vue-gen"))
}

fn run_generation(dir: &Path, extra_args: &[&str]) -> Output {
    let metadata_path = dir.join("metadata.json");
    fs::write(&metadata_path, METADATA).unwrap();

    let mut command = Command::new(binary_path());
    command
        .current_dir(dir)
        .arg("--metadata")
        .arg(&metadata_path)
        .arg("--out-dir")
        .arg(dir.join("src/components"))
        .arg("--index-file")
        .arg(dir.join("src/index.ts"));
    for arg in extra_args {
        command.arg(arg);
    }

    command.output().expect("failed to run dx-vue-gen")
}

#[test]
fn test_generates_component_and_index_files() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_generation(dir.path(), &[]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    assert!(dir.path().join("src/components/button.ts").exists());
    assert!(dir.path().join("src/components/data-grid.ts").exists());

    let index = fs::read_to_string(dir.path().join("src/index.ts")).unwrap();
    assert!(index.contains("export { default as DxButton } from \"./components/button\";"));
    assert!(index.contains("export { default as DxDataGrid } from \"./components/data-grid\";"));
}

#[test]
fn test_component_module_content() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_generation(dir.path(), &[]);
    assert!(output.status.success());

    let button = fs::read_to_string(dir.path().join("src/components/button.ts")).unwrap();
    assert!(button.contains("import Button, { Properties } from \"devextreme/ui/button\";"));
    assert!(button.contains("const DxButton = createComponent({"));
    assert!(button.contains("    text: String,"));
    // The reserved "key" option never becomes a prop.
    assert!(!button.contains("    key:"));
    // A string restriction carries no validator.
    assert!(!button.contains("validator"));

    let grid = fs::read_to_string(dir.path().join("src/components/data-grid.ts")).unwrap();
    assert!(grid.contains("const DxDataGrid = createComponent({"));
    assert!(grid.contains("model: { prop: \"value\", event: \"update:value\" },"));
    assert!(grid.contains("const DxColumn = createConfigurationComponent({"));
    assert!(grid.contains("(DxColumn as any).$_optionName = \"columns\";"));
    assert!(grid.contains("(DxDataGrid as any).$_expectedChildren = {"));
}

#[test]
fn test_common_reexports_require_the_flag() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_generation(dir.path(), &[]);
    assert!(output.status.success());
    assert!(!dir.path().join("src/components/common").exists());

    let dir = tempfile::tempdir().unwrap();
    let output = run_generation(dir.path(), &["--generate-reexports"]);
    assert!(output.status.success());

    let common_index =
        fs::read_to_string(dir.path().join("src/components/common/index.ts")).unwrap();
    assert!(common_index.contains("Foo,"));
    assert!(common_index.contains("} from \"devextreme/common\";"));

    let data = fs::read_to_string(dir.path().join("src/components/common/data.ts")).unwrap();
    assert!(data.contains("Bar,"));
    assert!(data.contains("} from \"devextreme/common/data\";"));

    // The re-export flag also enables widget-module re-exports for widgets
    // that export more than "default".
    let grid = fs::read_to_string(dir.path().join("src/components/data-grid.ts")).unwrap();
    assert!(grid.contains("export * from \"devextreme/ui/data_grid\";"));
}

#[test]
fn test_generation_is_deterministic() {
    let first_dir = tempfile::tempdir().unwrap();
    let second_dir = tempfile::tempdir().unwrap();
    assert!(run_generation(first_dir.path(), &[]).status.success());
    assert!(run_generation(second_dir.path(), &[]).status.success());

    for file in ["src/components/button.ts", "src/components/data-grid.ts", "src/index.ts"] {
        let first = fs::read_to_string(first_dir.path().join(file)).unwrap();
        let second = fs::read_to_string(second_dir.path().join(file)).unwrap();
        assert_eq!(first, second, "{} differs between runs", file);
    }
}

#[test]
fn test_missing_metadata_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(binary_path())
        .current_dir(dir.path())
        .arg("--metadata")
        .arg(dir.path().join("missing.json"))
        .output()
        .expect("failed to run dx-vue-gen");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read metadata file"));
}
