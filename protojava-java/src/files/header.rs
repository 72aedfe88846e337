use protojava_core::CodeWriter;

/// First line of every generated Java file.
pub const GENERATED_HEADER: &str = "// Generated by the protocol buffer compiler.  DO NOT EDIT!";

/// Header comment and package clause.
pub struct FileHeader<'a> {
    /// Schema file name, as given to the compiler.
    pub source: &'a str,
    /// Java package, empty for the default package.
    pub package: &'a str,
}

impl FileHeader<'_> {
    pub fn render(&self, writer: &mut CodeWriter) {
        writer
            .line(GENERATED_HEADER)
            .line(&format!("// source: {}", self.source))
            .blank();

        if !self.package.is_empty() {
            writer.line(&format!("package {};", self.package)).blank();
        }
    }
}
