//! protoc plugin entry point.
//!
//! protoc runs `protoc-gen-protojava` for `--protojava_out`, writing an encoded
//! `CodeGeneratorRequest` to stdin and reading the response from stdout.

use std::io;

use eyre::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_env("PROTOJAVA_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    protojava_java::plugin::serve(io::stdin().lock(), io::stdout().lock())
        .wrap_err("Failed to handle plugin request")
}
