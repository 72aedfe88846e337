//! Generate operation - Java sources from a descriptor.

use std::path::Path;

use eyre::{Context, Result};
use protojava_codegen::{Artifacts, GeneratorSettings};
use protojava_core::{ANNOTATION_SUFFIX, DirSink, MemorySink};
use protojava_ir::FileDescriptor;
use protojava_java::java_generator;

use crate::reports::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};

/// Output of a successful invocation, held in memory.
pub struct Generated {
    pub artifacts: Artifacts,
    pub files: MemorySink,
}

/// Run one invocation into memory.
///
/// Nothing touches the filesystem here, so a failure leaves the output
/// directory untouched.
pub fn generate(
    file: &FileDescriptor,
    params: &str,
    settings: GeneratorSettings,
) -> protojava_codegen::Result<Generated> {
    let mut files = MemorySink::new();
    let artifacts = java_generator(settings).generate(file, params, &mut files)?;
    Ok(Generated { artifacts, files })
}

/// Options for emitting a generation result.
pub struct EmitOptions<'a> {
    /// Output directory for generated files.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Write (or preview) a generation result and build its report.
pub fn emit(
    file: &FileDescriptor,
    generated: Generated,
    opts: EmitOptions,
) -> Result<GenerateReport> {
    let Generated { artifacts, files } = generated;

    let result = if opts.dry_run {
        let files = files
            .iter()
            .map(|(path, content)| PreviewFile {
                path: path.to_string(),
                content: preview_content(path, content),
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        files
            .flush_to(&mut DirSink::new(opts.output_dir))
            .wrap_err_with(|| format!("Failed to write to {}", opts.output_dir.display()))?;

        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            files: artifacts.files,
            annotations: artifacts.annotations,
            manifests: artifacts.manifests,
        })
    };

    Ok(GenerateReport {
        source: file.name.clone(),
        variants: artifacts.variants,
        result,
    })
}

fn preview_content(path: &str, content: &[u8]) -> String {
    if path.ends_with(ANNOTATION_SUFFIX) {
        return format!("<{} bytes of GeneratedCodeInfo>", content.len());
    }
    String::from_utf8_lossy(content).into_owned()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use protojava_codegen::Error;

    use super::*;

    fn foo() -> FileDescriptor {
        FileDescriptor::new("Foo.proto", "com.example")
    }

    #[test]
    fn test_emit_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let parameter = "immutable,output_list_file=srcs.txt";
        let generated = generate(&foo(), parameter, GeneratorSettings::default()).unwrap();

        let report = emit(
            &foo(),
            generated,
            EmitOptions {
                output_dir: dir.path(),
                dry_run: false,
            },
        )
        .unwrap();

        assert!(dir.path().join("com/example/Foo.java").exists());
        assert_eq!(
            fs::read_to_string(dir.path().join("srcs.txt")).unwrap(),
            "com/example/Foo.java\n"
        );
        assert!(matches!(report.result, GenerationResult::Written(_)));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let generated =
            generate(&foo(), "immutable,annotate_code", GeneratorSettings::default()).unwrap();

        let report = emit(
            &foo(),
            generated,
            EmitOptions {
                output_dir: dir.path(),
                dry_run: true,
            },
        )
        .unwrap();

        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
        let GenerationResult::Preview(preview) = report.result else {
            panic!("expected preview");
        };
        assert_eq!(preview.files.len(), 2);
        assert!(preview.files[1].content.starts_with('<'));
    }

    #[test]
    fn test_emit_refuses_paths_outside_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("out");
        let generated = generate(
            &foo(),
            "immutable,output_list_file=../srcs.txt",
            GeneratorSettings::default(),
        )
        .unwrap();

        let result = emit(
            &foo(),
            generated,
            EmitOptions {
                output_dir: &output_dir,
                dry_run: false,
            },
        );

        assert!(result.is_err());
        assert!(!dir.path().join("srcs.txt").exists());
    }

    #[test]
    fn test_failed_generation_returns_error() {
        let result = generate(&foo(), "mutable,lite", GeneratorSettings::default());
        assert!(matches!(result, Err(Error::IncompatibleOptions { .. })));
    }
}
