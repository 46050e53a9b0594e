//! Generate operation - SDK source and docs from a plan.

use std::path::Path;

use eyre::{Context, Result};
use sdkgen_codegen::LanguageCodegen;
use sdkgen_codegen_typescript::Generator;
use sdkgen_core::Overwrite;
use sdkgen_plan::PlanFile;

use crate::reports::{
    GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult,
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output directory for the SDK.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Leave files that already exist untouched.
    pub keep_existing: bool,
}

/// Execute the generate operation.
pub fn generate(plan: &PlanFile, opts: GenerateOptions) -> Result<GenerateReport> {
    let overwrite = if opts.keep_existing {
        Overwrite::IfMissing
    } else {
        Overwrite::Always
    };
    let generator = Generator::new(plan).overwrite(overwrite);

    let (warnings, result) = if opts.dry_run {
        let preview = generator.preview().wrap_err("Failed to generate code")?;
        let files = preview
            .files
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        (preview.warnings, GenerationResult::Preview(PreviewResult { files }))
    } else {
        let result = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate code")?;
        let written = WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: result.written,
            unchanged: result.unchanged,
            skipped: result.skipped,
        };
        (result.warnings, GenerationResult::Written(written))
    };

    Ok(GenerateReport {
        sdk_name: plan.sdk.name.clone(),
        sdk_version: plan.sdk.version.to_string(),
        sdk_description: plan.sdk.description.clone(),
        client_name: plan.plan.client_name.clone(),
        language: plan.plan.config.language.as_str().to_string(),
        method_count: plan.plan.methods.len(),
        type_count: plan.plan.types.len(),
        error_count: plan.plan.errors.len(),
        warnings,
        result,
    })
}
