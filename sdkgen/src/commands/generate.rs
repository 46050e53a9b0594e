use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use sdkgen_plan::PLAN_FILE_NAME;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions, PlanFormat},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the plan file (defaults to ./sdkgen.toml)
    #[arg(short, long, default_value = PLAN_FILE_NAME)]
    pub config: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Plan file format
    #[arg(long, value_enum, default_value_t = PlanFormat::Auto)]
    pub plan_format: PlanFormat,

    /// Do not overwrite files that already exist
    #[arg(long)]
    pub keep_existing: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let plan = ops::load_plan(&self.config, self.plan_format).unwrap_or_exit();

        let report = ops::generate(
            &plan,
            GenerateOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
                keep_existing: self.keep_existing,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
