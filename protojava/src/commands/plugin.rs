use std::io;

use clap::Args;
use eyre::{Context, Result};

#[derive(Args)]
pub struct PluginCommand {}

impl PluginCommand {
    /// Run the plugin command
    pub fn run(&self) -> Result<()> {
        protojava_java::plugin::serve(io::stdin().lock(), io::stdout().lock())
            .wrap_err("Failed to handle plugin request")
    }
}
