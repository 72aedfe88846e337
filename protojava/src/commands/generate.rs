use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{InvocationArgs, UnwrapOrExit};
use crate::{
    ops::generate::{EmitOptions, emit, generate},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub invocation: InvocationArgs,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let file = self.invocation.load()?;
        let generated = generate(
            &file,
            &self.invocation.params,
            self.invocation.settings(),
        )
        .unwrap_or_exit();

        let report = emit(
            &file,
            generated,
            EmitOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
