//! Indenting code writer with optional span annotation.

use crate::AnnotationCollector;

/// One level of indentation, as protoc's Java output uses.
const INDENT: &str = "  ";

/// Line-oriented writer for generated source.
///
/// When created with an [`AnnotationCollector`], [`CodeWriter::annotated_line`]
/// records the byte span of a highlighted identifier so the generated file can
/// be mapped back to the descriptor. Without a collector the same calls only
/// write text.
///
/// ```
/// use protojava_core::{AnnotationCollector, CodeWriter};
///
/// let mut writer = CodeWriter::new(Some(AnnotationCollector::new("foo.proto")));
/// writer
///     .line("public final class Foo {")
///     .indent()
///     .annotated_line("public static final class Bar {}", "Bar", &[4, 0])
///     .dedent()
///     .line("}");
///
/// let (code, annotations) = writer.finish();
/// assert!(code.contains("  public static final class Bar {}"));
/// let annotations = annotations.unwrap();
/// let ann = &annotations.annotations()[0];
/// assert_eq!(&code[ann.begin..ann.end], "Bar");
/// ```
#[derive(Debug, Clone)]
pub struct CodeWriter {
    indent_level: usize,
    buffer: String,
    annotations: Option<AnnotationCollector>,
}

impl CodeWriter {
    /// Create a writer, optionally recording annotations.
    pub fn new(annotations: Option<AnnotationCollector>) -> Self {
        Self {
            indent_level: 0,
            buffer: String::new(),
            annotations,
        }
    }

    /// Create a writer that never records annotations.
    pub fn plain() -> Self {
        Self::new(None)
    }

    /// Add a line of code with current indentation.
    pub fn line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a line and annotate the first occurrence of `highlight` in it.
    ///
    /// If `highlight` does not occur in `s`, the line is written unannotated.
    pub fn annotated_line(&mut self, s: &str, highlight: &str, path: &[i32]) -> &mut Self {
        self.write_indent();
        let start = self.buffer.len();
        self.buffer.push_str(s);
        self.buffer.push('\n');

        if let (Some(collector), Some(offset)) = (self.annotations.as_mut(), s.find(highlight)) {
            let begin = start + offset;
            collector.record(path, begin, begin + highlight.len());
        }
        self
    }

    /// Add `prefix`, `name` and `suffix` as one line, annotating exactly `name`.
    pub fn declaration(
        &mut self,
        prefix: &str,
        name: &str,
        suffix: &str,
        path: &[i32],
    ) -> &mut Self {
        self.write_indent();
        let begin = self.buffer.len() + prefix.len();
        self.buffer.push_str(prefix);
        self.buffer.push_str(name);
        self.buffer.push_str(suffix);
        self.buffer.push('\n');

        if let Some(collector) = self.annotations.as_mut() {
            collector.record(path, begin, begin + name.len());
        }
        self
    }

    /// Add a blank line.
    pub fn blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Get the current content without consuming the writer.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the writer, returning the code and any recorded annotations.
    pub fn finish(self) -> (String, Option<AnnotationCollector>) {
        (self.buffer, self.annotations)
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::plain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_indentation() {
        let mut writer = CodeWriter::plain();
        writer
            .line("class A {")
            .indent()
            .line("class B {")
            .indent()
            .line("int x;")
            .dedent()
            .line("}")
            .dedent()
            .line("}");

        assert_eq!(
            writer.as_str(),
            "class A {\n  class B {\n    int x;\n  }\n}\n"
        );
    }

    #[test]
    fn test_dedent_saturates() {
        let mut writer = CodeWriter::plain();
        writer.dedent().line("x");
        assert_eq!(writer.as_str(), "x\n");
    }

    #[test]
    fn test_annotated_line_records_span() {
        let mut writer = CodeWriter::new(Some(AnnotationCollector::new("a.proto")));
        writer.line("package a;").indent();
        writer.annotated_line("enum Color {", "Color", &[5, 0]);

        let (code, collector) = writer.finish();
        let collector = collector.unwrap();
        let ann = &collector.annotations()[0];
        assert_eq!(&code[ann.begin..ann.end], "Color");
        assert_eq!(ann.path, vec![5, 0]);
    }

    #[test]
    fn test_declaration_annotates_name_only() {
        let mut writer = CodeWriter::new(Some(AnnotationCollector::new("a.proto")));
        writer
            .line("class Outer {")
            .indent()
            .declaration("public static final class ", "c", " {", &[4, 0, 3, 1]);

        let (code, collector) = writer.finish();
        let collector = collector.unwrap();
        let ann = &collector.annotations()[0];
        assert_eq!(&code[ann.begin..ann.end], "c");
        assert_eq!(ann.begin, code.find("class c").unwrap() + "class ".len());
    }

    #[test]
    fn test_annotated_line_without_collector() {
        let mut writer = CodeWriter::plain();
        writer.annotated_line("enum Color {", "Color", &[5, 0]);

        let (code, collector) = writer.finish();
        assert_eq!(code, "enum Color {\n");
        assert!(collector.is_none());
    }

    #[test]
    fn test_missing_highlight_is_not_recorded() {
        let mut writer = CodeWriter::new(Some(AnnotationCollector::new("a.proto")));
        writer.annotated_line("enum Color {", "Shade", &[5, 0]);

        let (_, collector) = writer.finish();
        assert!(collector.unwrap().is_empty());
    }
}
