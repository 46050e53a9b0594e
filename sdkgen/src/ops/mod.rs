//! Core operations.
//!
//! This module contains the business logic for sdkgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;

use std::path::Path;

use clap::ValueEnum;
use sdkgen_core::to_kebab_case;
use sdkgen_plan::{DesignPlan, Error, PlanFile};
use tracing::debug;

pub use check::check;
pub use generate::{GenerateOptions, generate};

/// Format of the plan file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PlanFormat {
    /// Pick by file extension (`.json` is JSON, anything else TOML)
    #[default]
    Auto,
    /// `sdkgen.toml` with package metadata
    Toml,
    /// A bare JSON design plan
    Json,
}

impl PlanFormat {
    fn resolve(self, path: &Path) -> PlanFormat {
        match self {
            PlanFormat::Auto => match path.extension().and_then(|e| e.to_str()) {
                Some(ext) if ext.eq_ignore_ascii_case("json") => PlanFormat::Json,
                _ => PlanFormat::Toml,
            },
            format => format,
        }
    }
}

/// Load a plan file, wrapping bare JSON plans with default package metadata.
pub fn load_plan(path: &Path, format: PlanFormat) -> sdkgen_plan::Result<PlanFile> {
    let format = format.resolve(path);
    debug!(path = %path.display(), ?format, "loading plan");
    match format {
        PlanFormat::Json => {
            let content = std::fs::read_to_string(path).map_err(|source| {
                Box::new(Error::Io {
                    path: path.to_path_buf(),
                    source,
                })
            })?;
            let plan =
                DesignPlan::from_json_with_filename(&content, &path.display().to_string())?;
            let name = to_kebab_case(&plan.client_name);
            Ok(PlanFile::from_plan(name, plan))
        }
        _ => PlanFile::from_file(path),
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_auto_format_by_extension() {
        assert_eq!(PlanFormat::Auto.resolve(Path::new("plan.json")), PlanFormat::Json);
        assert_eq!(PlanFormat::Auto.resolve(Path::new("sdkgen.toml")), PlanFormat::Toml);
        assert_eq!(PlanFormat::Json.resolve(Path::new("sdkgen.toml")), PlanFormat::Json);
    }

    #[test]
    fn test_load_json_plan() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plan.json");
        std::fs::write(
            &path,
            r#"{ "clientName": "ChainClient", "methods": [{ "name": "getBalance" }] }"#,
        )
        .unwrap();

        let file = load_plan(&path, PlanFormat::Auto).unwrap();
        assert_eq!(file.sdk.name, "chain-client");
        assert_eq!(file.plan.client_name, "ChainClient");
        assert_eq!(file.plan.methods.len(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = load_plan(&dir.path().join("plan.json"), PlanFormat::Auto).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
