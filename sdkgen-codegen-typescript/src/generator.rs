//! TypeScript SDK generator.

use std::path::Path;

use eyre::{Result, WrapErr};
use sdkgen_codegen::language::{GenerateResult, LanguageCodegen, Preview, PreviewFile};
use sdkgen_core::{File, Overwrite, WriteResult};
use sdkgen_docs::{DocContext, DocsGenerator};
use sdkgen_plan::PlanFile;
use tracing::{debug, info, warn};

use crate::{EmitOptions, Emitter, GenerateError, builders::build_program};

/// Path of the emitted source, relative to the output directory.
pub const SOURCE_PATH: &str = "src/index.ts";

/// Generates the TypeScript client source and its documentation from a plan file.
pub struct Generator<'a> {
    plan_file: &'a PlanFile,
    emitter: Emitter,
    overwrite: Overwrite,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn preview(&self) -> Result<Preview> {
        let (files, warnings) = self.render()?;
        Ok(Preview { files, warnings })
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let (files, warnings) = self.render()?;
        let mut result = GenerateResult {
            warnings,
            ..Default::default()
        };

        for file in files {
            let written = File::new(output_dir.join(&file.path), file.content)
                .overwrite(self.overwrite)
                .write()?;
            debug!(path = %file.path, ?written, "wrote file");
            match written {
                WriteResult::Written => result.written.push(file.path),
                WriteResult::Unchanged => result.unchanged.push(file.path),
                WriteResult::Skipped => result.skipped.push(file.path),
            }
        }

        info!(
            written = result.written.len(),
            unchanged = result.unchanged.len(),
            skipped = result.skipped.len(),
            "generation finished"
        );
        Ok(result)
    }
}

impl<'a> Generator<'a> {
    pub fn new(plan_file: &'a PlanFile) -> Self {
        Self {
            plan_file,
            emitter: Emitter::new(EmitOptions::from(&plan_file.format)),
            overwrite: Overwrite::Always,
        }
    }

    /// Set how existing files are treated.
    pub fn overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Build and emit the client source.
    pub fn emit_source(&self) -> std::result::Result<String, GenerateError> {
        let program = build_program(&self.plan_file.plan)?;
        Ok(self.emitter.emit_program(&program)?)
    }

    /// Every output file plus the warnings collected on the way.
    fn render(&self) -> Result<(Vec<PreviewFile>, Vec<String>)> {
        let mut files = Vec::new();
        let mut warnings = Vec::new();

        let language = self.plan_file.plan.config.language;
        if language.is_emittable() {
            let source = self
                .emit_source()
                .wrap_err("failed to generate TypeScript source")?;
            files.push(PreviewFile::new(SOURCE_PATH, source));
        } else {
            let message = format!(
                "no source emitter for target language '{}', generating documentation only",
                language.as_str()
            );
            warn!("{}", message);
            warnings.push(message);
        }

        let ctx = DocContext::from_plan_file(self.plan_file);
        warnings.extend(ctx.warnings().iter().cloned());
        let docs = DocsGenerator::new().generate(&ctx);
        for section in docs.sections() {
            if section.is_empty() {
                debug!(section = ?section.kind, "skipping empty section");
                continue;
            }
            files.push(PreviewFile::new(section.kind.file_path(), &section.content));
        }

        Ok((files, warnings))
    }
}
