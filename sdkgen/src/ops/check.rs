//! Check operation - plan validation.
//!
//! Parsing already validated the plan; this runs the builders and the
//! emitter in memory so anything that would fail at generation time shows
//! up here too.

use std::path::Path;

use sdkgen_codegen_typescript::Generator;
use sdkgen_docs::{DocContext, snippets};
use sdkgen_plan::PlanFile;

use crate::reports::CheckReport;

/// Execute the check operation.
pub fn check(plan: &PlanFile, config_path: &Path) -> CheckReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let language = plan.plan.config.language;
    if language.is_emittable() {
        if let Err(e) = Generator::new(plan).emit_source() {
            errors.push(e.to_string());
        }
    } else {
        warnings.push(format!(
            "no source emitter for target language '{}', only documentation will be generated",
            language.as_str()
        ));
    }
    warnings.extend(DocContext::from_plan_file(plan).warnings().iter().cloned());

    CheckReport {
        config_path: config_path.to_path_buf(),
        sdk_name: plan.sdk.name.clone(),
        sdk_version: plan.sdk.version.to_string(),
        client_name: plan.plan.client_name.clone(),
        signatures: plan.plan.methods.iter().map(snippets::signature).collect(),
        types: plan.plan.types.iter().map(|t| t.name.clone()).collect(),
        error_codes: plan.plan.errors.iter().map(|e| e.code.clone()).collect(),
        errors,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_valid_plan() {
        let plan = PlanFile::from_str(
            r#"
            [sdk]
            name = "chain-sdk"

            [[methods]]
            name = "getBalance"
            returns = "number"

            [[methods.params]]
            name = "address"
            type = "string"
            "#,
        )
        .unwrap();

        let report = check(&plan, Path::new("sdkgen.toml"));
        assert!(report.is_valid());
        assert_eq!(report.signatures, vec!["getBalance(address: string): number"]);
    }

    #[test]
    fn test_docs_only_language_warns() {
        let plan = PlanFile::from_str(
            r#"
            [sdk]
            name = "chain-sdk"

            [config]
            language = "rust"
            "#,
        )
        .unwrap();

        let report = check(&plan, Path::new("sdkgen.toml"));
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
    }
}
