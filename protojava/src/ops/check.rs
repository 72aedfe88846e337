//! Check operation - resolve and validate without writing.

use protojava_codegen::GeneratorSettings;
use protojava_ir::FileDescriptor;
use protojava_java::java_generator;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Resolves the parameter, plans variants and validates every emitter.
pub fn check(
    file: &FileDescriptor,
    params: &str,
    settings: GeneratorSettings,
) -> protojava_codegen::Result<CheckReport> {
    let plan = java_generator(settings).plan(file, params)?;

    Ok(CheckReport {
        source: file.name.clone(),
        plan,
    })
}
