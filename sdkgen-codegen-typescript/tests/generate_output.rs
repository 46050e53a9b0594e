//! Tests for writing generated SDKs to disk.

use std::str::FromStr;

use sdkgen_codegen_typescript::{Generator, LanguageCodegen, SOURCE_PATH};
use sdkgen_core::Overwrite;
use sdkgen_plan::PlanFile;
use tempfile::TempDir;

const PLAN: &str = r#"
    [sdk]
    name = "weather-sdk"
    client = "WeatherClient"

    [[methods]]
    name = "forecast"
    returns = "string"

    [[methods.params]]
    name = "city"
    type = "string"
"#;

#[test]
fn test_generate_writes_every_file() {
    let plan = PlanFile::from_str(PLAN).expect("Failed to parse plan");
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let result = Generator::new(&plan)
        .generate(temp_dir.path())
        .expect("Failed to generate");

    assert!(result.written.contains(&SOURCE_PATH.to_string()));
    assert!(result.written.contains(&"README.md".to_string()));
    assert!(result.unchanged.is_empty());
    assert!(result.warnings.is_empty());

    let source = std::fs::read_to_string(temp_dir.path().join(SOURCE_PATH))
        .expect("Failed to read source");
    assert!(source.contains("forecast(city: string): string {"));
}

#[test]
fn test_second_run_is_unchanged() {
    let plan = PlanFile::from_str(PLAN).expect("Failed to parse plan");
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let generator = Generator::new(&plan);

    let first = generator.generate(temp_dir.path()).expect("Failed to generate");
    let second = generator.generate(temp_dir.path()).expect("Failed to generate");

    assert!(second.written.is_empty());
    assert_eq!(second.unchanged.len(), first.total());
}

/// Hand-edited files survive when generation is told to keep existing files.
#[test]
fn test_keep_existing_files() {
    let plan = PlanFile::from_str(PLAN).expect("Failed to parse plan");
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let readme = temp_dir.path().join("README.md");
    std::fs::write(&readme, "# My weather SDK\n").expect("Failed to write README");

    let result = Generator::new(&plan)
        .overwrite(Overwrite::IfMissing)
        .generate(temp_dir.path())
        .expect("Failed to generate");

    assert_eq!(result.skipped, vec!["README.md".to_string()]);
    assert_eq!(
        std::fs::read_to_string(&readme).expect("Failed to read README"),
        "# My weather SDK\n"
    );
    assert!(temp_dir.path().join(SOURCE_PATH).exists());
}

#[test]
fn test_docs_only_language_warns() {
    let plan = PlanFile::from_str(
        r#"
        [sdk]
        name = "weather-sdk"

        [config]
        language = "go"
        "#,
    )
    .expect("Failed to parse plan");
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let result = Generator::new(&plan)
        .generate(temp_dir.path())
        .expect("Failed to generate");

    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("'go'"));
    assert!(!temp_dir.path().join(SOURCE_PATH).exists());
}
