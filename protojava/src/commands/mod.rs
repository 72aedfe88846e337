mod check;
mod completions;
mod generate;
mod plugin;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::{Context, Result};
use generate::GenerateCommand;
use plugin::PluginCommand;
use protojava_codegen::GeneratorSettings;
use protojava_ir::FileDescriptor;

/// Extension trait for exiting on generator errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for protojava_codegen::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "protojava")]
#[command(version)]
#[command(about = "Generate Java sources from protocol buffer descriptors")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Plugin(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Java sources from a descriptor file
    Generate(GenerateCommand),

    /// Resolve options and validate a descriptor without writing anything
    Check(CheckCommand),

    /// Act as a protoc plugin (request on stdin, response on stdout)
    Plugin(PluginCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Descriptor and generator parameter shared by `generate` and `check`.
#[derive(Args)]
pub(crate) struct InvocationArgs {
    /// Descriptor file (.toml or .json)
    #[arg(short, long)]
    pub descriptor: PathBuf,

    /// Generator parameter, e.g. "immutable,annotate_code"
    #[arg(short, long, default_value = "")]
    pub params: String,

    /// Target the internal runtime (prefixes default packages)
    #[arg(long)]
    pub internal_runtime: bool,
}

impl InvocationArgs {
    pub fn load(&self) -> Result<FileDescriptor> {
        FileDescriptor::load(&self.descriptor)
            .wrap_err_with(|| format!("Failed to load {}", self.descriptor.display()))
    }

    pub fn settings(&self) -> GeneratorSettings {
        GeneratorSettings {
            opensource_runtime: !self.internal_runtime,
        }
    }
}
