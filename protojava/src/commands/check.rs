use clap::Args;
use eyre::{Context, Result};

use super::{InvocationArgs, UnwrapOrExit};
use crate::{
    ops::check::check,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub invocation: InvocationArgs,

    /// Print the resolved plan as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = self.invocation.load()?;
        let report = check(&file, &self.invocation.params, self.invocation.settings())
            .unwrap_or_exit();

        if self.json {
            let json =
                serde_json::to_string_pretty(&report.plan).wrap_err("Failed to serialize plan")?;
            println!("{json}");
        } else {
            report.render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}
