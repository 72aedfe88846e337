//! protoc plugin adapter.
//!
//! Translates a `CodeGeneratorRequest` into one [`Generator`](crate::Generator)
//! invocation per requested file and collects the results into a
//! `CodeGeneratorResponse`.
//!
//! Response file contents are strings, so binary annotation files are not
//! returned as files. Their `GeneratedCodeInfo` is attached to the generated
//! file they describe instead.

use std::io::{self, Read, Write};

use prost::Message;
use prost_types::{
    GeneratedCodeInfo,
    compiler::{CodeGeneratorRequest, CodeGeneratorResponse, code_generator_response::File},
};
use protojava_codegen::GeneratorSettings;
use protojava_core::{ANNOTATION_SUFFIX, MemorySink};
use protojava_ir::FileDescriptor;

use crate::{JavaGenerator, java_generator};

/// `CodeGeneratorResponse.Feature.FEATURE_PROTO3_OPTIONAL`.
pub const FEATURE_PROTO3_OPTIONAL: u64 = 1;

/// Handle a request with default settings.
pub fn run(request: CodeGeneratorRequest) -> CodeGeneratorResponse {
    run_with(&java_generator(GeneratorSettings::default()), request)
}

/// Handle a request with an explicit generator.
///
/// Files are only returned when every requested file succeeds; otherwise the
/// response carries the first error and nothing else.
pub fn run_with(
    generator: &JavaGenerator,
    request: CodeGeneratorRequest,
) -> CodeGeneratorResponse {
    let result = generate_all(generator, &request)
        .and_then(|(sink, annotations)| into_response_files(sink, &annotations));

    let response = match result {
        Ok(file) => CodeGeneratorResponse {
            file,
            ..Default::default()
        },
        Err(message) => {
            tracing::debug!(%message, "plugin request failed");
            CodeGeneratorResponse {
                error: Some(message),
                ..Default::default()
            }
        }
    };

    CodeGeneratorResponse {
        supported_features: Some(FEATURE_PROTO3_OPTIONAL),
        ..response
    }
}

/// Read one encoded request from `input` and write the encoded response to `output`.
///
/// Generation failures are reported inside the response; only malformed input
/// and I/O failures are returned as errors.
pub fn serve(mut input: impl Read, mut output: impl Write) -> io::Result<()> {
    let mut buf = Vec::new();
    input.read_to_end(&mut buf)?;

    let request = CodeGeneratorRequest::decode(buf.as_slice())
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    tracing::debug!(
        files = request.file_to_generate.len(),
        parameter = request.parameter(),
        "received plugin request"
    );

    output.write_all(&run(request).encode_to_vec())?;
    output.flush()
}

/// Run every requested file into one sink, returning it with the paths that
/// hold encoded `GeneratedCodeInfo`.
fn generate_all(
    generator: &JavaGenerator,
    request: &CodeGeneratorRequest,
) -> Result<(MemorySink, Vec<String>), String> {
    let mut sink = MemorySink::new();
    let mut annotations = Vec::new();

    for name in &request.file_to_generate {
        let proto = request
            .proto_file
            .iter()
            .find(|proto| proto.name() == name)
            .ok_or_else(|| format!("{name}: not found in request"))?;

        let file = FileDescriptor::from(proto);
        let artifacts = generator
            .generate(&file, request.parameter(), &mut sink)
            .map_err(|err| format!("{name}: {err}"))?;

        tracing::debug!(
            file = %name,
            files = artifacts.files.len(),
            annotations = artifacts.annotations.len(),
            "generated"
        );
        annotations.extend(artifacts.annotations);
    }

    Ok((sink, annotations))
}

fn into_response_files(sink: MemorySink, annotations: &[String]) -> Result<Vec<File>, String> {
    let mut files: Vec<File> = Vec::with_capacity(sink.len());

    for (name, content) in sink.into_files() {
        if annotations.contains(&name) {
            let source = name.strip_suffix(ANNOTATION_SUFFIX).unwrap_or(&name);
            let target = files
                .iter_mut()
                .find(|f| f.name() == source)
                .ok_or_else(|| format!("{name}: no generated file named {source}"))?;
            let info = GeneratedCodeInfo::decode(content.as_slice())
                .map_err(|err| format!("{name}: {err}"))?;
            target.generated_code_info = Some(info);
            continue;
        }

        let content = String::from_utf8(content).map_err(|err| format!("{name}: {err}"))?;
        files.push(File {
            name: Some(name),
            content: Some(content),
            ..Default::default()
        });
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use prost_types::{DescriptorProto, FileDescriptorProto, FileOptions};

    use super::*;

    fn request(parameter: &str, files: Vec<FileDescriptorProto>) -> CodeGeneratorRequest {
        CodeGeneratorRequest {
            file_to_generate: files.iter().map(|f| f.name().to_string()).collect(),
            parameter: Some(parameter.to_string()),
            proto_file: files,
            ..Default::default()
        }
    }

    fn foo_proto() -> FileDescriptorProto {
        FileDescriptorProto {
            name: Some("Foo.proto".to_string()),
            package: Some("com.example".to_string()),
            message_type: vec![DescriptorProto {
                name: Some("Bar".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_run_returns_generated_files() {
        let response = run(request("immutable", vec![foo_proto()]));

        assert_eq!(response.error, None);
        assert_eq!(response.supported_features, Some(FEATURE_PROTO3_OPTIONAL));
        let names: Vec<_> = response.file.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["com/example/Foo.java"]);
    }

    #[test]
    fn test_error_response_has_no_files() {
        let response = run(request("mutable,lite", vec![foo_proto()]));

        assert!(response.file.is_empty());
        assert_eq!(
            response.error.as_deref(),
            Some("Foo.proto: lite runtime generator option cannot be used with mutable API.")
        );
        assert_eq!(response.supported_features, Some(FEATURE_PROTO3_OPTIONAL));
    }

    #[test]
    fn test_one_failing_file_drops_all_output() {
        let mut conflicting = foo_proto();
        conflicting.name = Some("Bar.proto".to_string());
        conflicting.options = Some(FileOptions {
            java_outer_classname: Some("Bar".to_string()),
            ..Default::default()
        });

        let response = run(request("", vec![foo_proto(), conflicting]));

        assert!(response.file.is_empty());
        assert!(response.error.unwrap().starts_with("Bar.proto: "));
    }

    #[test]
    fn test_annotations_attach_to_their_file() {
        let response = run(request(
            "immutable,annotate_code,annotation_list_file=ann.txt",
            vec![foo_proto()],
        ));

        let names: Vec<_> = response.file.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["com/example/Foo.java", "ann.txt"]);

        let java = &response.file[0];
        let info = java.generated_code_info.as_ref().unwrap();
        assert_eq!(info.annotation[0].path, vec![4, 0]);
        assert_eq!(info.annotation[0].source_file(), "Foo.proto");
        assert_eq!(response.file[1].content(), "com/example/Foo.java.pb.meta\n");
    }

    #[test]
    fn test_listing_with_annotation_suffix_stays_a_text_file() {
        let response = run(request(
            "immutable,output_list_file=com/example/Foo.java.pb.meta",
            vec![foo_proto()],
        ));

        assert_eq!(response.error, None);
        let names: Vec<_> = response.file.iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            vec!["com/example/Foo.java", "com/example/Foo.java.pb.meta"]
        );
        assert_eq!(response.file[0].generated_code_info, None);
        assert_eq!(response.file[1].content(), "com/example/Foo.java\n");
    }

    #[test]
    fn test_orphan_listing_with_annotation_suffix_is_returned() {
        let response = run(request(
            "immutable,output_list_file=srcs.pb.meta",
            vec![foo_proto()],
        ));

        assert_eq!(response.error, None);
        assert_eq!(response.file[1].name(), "srcs.pb.meta");
        assert_eq!(response.file[1].content(), "com/example/Foo.java\n");
    }

    #[test]
    fn test_serve_round_trips_encoded_messages() {
        let input = request("immutable", vec![foo_proto()]).encode_to_vec();
        let mut output = Vec::new();

        serve(input.as_slice(), &mut output).unwrap();

        let response = CodeGeneratorResponse::decode(output.as_slice()).unwrap();
        assert_eq!(response.file.len(), 1);
        assert!(response.file[0].content().contains("public final class Foo {"));
    }

    #[test]
    fn test_serve_rejects_garbage() {
        let err = serve(&[0xff, 0xff, 0xff][..], &mut Vec::new()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_missing_file_is_reported() {
        let mut request = request("", vec![foo_proto()]);
        request.file_to_generate.push("missing.proto".to_string());

        let response = run(request);

        assert_eq!(
            response.error.as_deref(),
            Some("missing.proto: not found in request")
        );
    }
}
