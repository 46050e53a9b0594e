use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use sdkgen_plan::PLAN_FILE_NAME;

use super::UnwrapOrExit;
use crate::{
    ops::{self, PlanFormat},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the plan file (defaults to ./sdkgen.toml)
    #[arg(short, long, default_value = PLAN_FILE_NAME)]
    pub config: PathBuf,

    /// Plan file format
    #[arg(long, value_enum, default_value_t = PlanFormat::Auto)]
    pub plan_format: PlanFormat,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let plan = ops::load_plan(&self.config, self.plan_format).unwrap_or_exit();

        let report = ops::check(&plan, &self.config);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
