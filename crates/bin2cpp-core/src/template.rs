//! Boilerplate around the embedded payload.
//!
//! [`Template`] writes everything in the generated files except the literal
//! itself: the comment block, includes, namespace, the class implementing
//! the shared contract, its accessors, the optional `save()` method, and the
//! getter returning the function-local singleton. The header file is written
//! entirely from here.

use crate::fs::{basename, display_name};
use crate::pipeline::LiteralStyle;
use crate::request::GenerationRequest;
use crate::{encoder, VERSION};
use std::io::{self, Write};
use std::path::Path;

/// Suffix appended to the capitalized identifier to form class names
pub const CLASS_SUFFIX: &str = "File";

/// Upper-cases the first character of `s`
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Name of the generated class: `hello` becomes `HelloFile`
pub fn class_name(identifier: &str) -> String {
    format!("{}{}", capitalize_first(identifier), CLASS_SUFFIX)
}

/// Name of the generated getter: `hello` becomes `getHelloFile`
pub fn getter_name(identifier: &str) -> String {
    format!("get{}", class_name(identifier))
}

/// Macro name made of upper-cased alphanumerics, everything else as `_`
fn macro_name(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .map(|p| {
            p.chars()
                .map(|c| {
                    if c.is_ascii_alphanumeric() {
                        c.to_ascii_uppercase()
                    } else {
                        '_'
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("_")
}

/// Include guard for a header: namespace plus header file name
pub fn include_guard(namespace: &str, header_filename: &str) -> String {
    macro_name(&[namespace, header_filename])
}

/// Guard around the shared contract so several headers can declare it
pub fn contract_guard(namespace: &str, base_class: &str) -> String {
    macro_name(&[namespace, base_class, "EMBEDDEDFILE_CLASS"])
}

/// Boilerplate emitter for one request
#[derive(Debug, Clone)]
pub struct Template<'a> {
    request: &'a GenerationRequest,
    class_name: String,
    getter_name: String,
    filename_literal: String,
    filename_display: String,
}

impl<'a> Template<'a> {
    /// Creates the emitter, deriving every name from the request
    pub fn new(request: &'a GenerationRequest) -> Self {
        Self {
            request,
            class_name: class_name(&request.function_identifier),
            getter_name: getter_name(&request.function_identifier),
            filename_literal: encoder::to_cpp_string(basename(&request.input_path)),
            filename_display: display_name(&request.input_path),
        }
    }

    /// Generated class name
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Generated getter function name
    pub fn getter_name(&self) -> &str {
        &self.getter_name
    }

    /// Basename of the input, for display
    pub fn filename(&self) -> &str {
        &self.filename_display
    }

    fn write_comment(&self, out: &mut dyn Write) -> io::Result<()> {
        if !self.request.header_comment {
            return Ok(());
        }
        // keep a "*/" in the file name from closing the comment early
        let name = self.filename_display.replace("*/", "* /");
        writeln!(out, "/**")?;
        writeln!(out, " * This file was generated by bin2cpp v{}", VERSION)?;
        writeln!(out, " * Source code for file '{}'.", name)?;
        writeln!(out, " * Do not modify this file.")?;
        writeln!(out, " */")
    }

    /// Writes the source file up to the opening of the buffer accessor body
    ///
    /// `size` is the number of embedded bytes and is what `getSize()`
    /// returns. It can be smaller than the literal: the array style pads an
    /// empty input with one `0x00` element, since C++ has no empty array of
    /// unknown bound.
    pub fn write_source_prologue(
        &self,
        out: &mut dyn Write,
        header_filename: &str,
        size: u64,
    ) -> io::Result<()> {
        let ns = &self.request.namespace;
        let class = &self.class_name;

        self.write_comment(out)?;
        writeln!(out, "#include \"{}\"", header_filename)?;
        writeln!(out, "#include <stdio.h> //for FILE")?;
        writeln!(out, "#include <string> //for memcpy")?;
        writeln!(out, "namespace {}", ns)?;
        writeln!(out, "{{")?;
        writeln!(
            out,
            "  class {} : public virtual {}::{}",
            class, ns, self.request.base_class
        )?;
        writeln!(out, "  {{")?;
        writeln!(out, "  public:")?;
        writeln!(out, "    {}() {{}}", class)?;
        writeln!(out, "    virtual ~{}() {{}}", class)?;
        // byte count of the input, never the literal's length (padding excluded)
        writeln!(out, "    virtual size_t getSize() const {{ return {}; }}", size)?;
        writeln!(
            out,
            "    virtual const char * getFilename() const {{ return \"{}\"; }}",
            self.filename_literal
        )?;
        writeln!(out, "    virtual const char * getBuffer() const")?;
        writeln!(out, "    {{")
    }

    /// Writes the rest of the source file after the literal
    pub fn write_source_epilogue(
        &self,
        out: &mut dyn Write,
        style: &dyn LiteralStyle,
    ) -> io::Result<()> {
        out.write_all(style.buffer_return().as_bytes())?;
        writeln!(out, "    }}")?;
        if self.request.save_method {
            self.write_save_method(out)?;
        }
        writeln!(out, "  }};")?;
        writeln!(
            out,
            "  const {} & {}() {{ static {} _instance; return _instance; }}",
            self.request.base_class, self.getter_name, self.class_name
        )?;
        writeln!(out, "}}; //{}", self.request.namespace)
    }

    fn write_save_method(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "    virtual bool save(const char * iFilename) const")?;
        writeln!(out, "    {{")?;
        writeln!(out, "      FILE * f = fopen(iFilename, \"wb\");")?;
        writeln!(out, "      if (!f) return false;")?;
        writeln!(out, "      size_t fileSize = getSize();")?;
        writeln!(out, "      const char * buffer = getBuffer();")?;
        writeln!(out, "      fwrite(buffer, 1, fileSize, f);")?;
        writeln!(out, "      fclose(f);")?;
        writeln!(out, "      return true;")?;
        writeln!(out, "    }}")
    }

    /// Writes the complete header file declaring the contract and the getter
    pub fn write_header(&self, out: &mut dyn Write, header_path: &Path) -> io::Result<()> {
        let ns = &self.request.namespace;
        let base = &self.request.base_class;
        let guard = include_guard(ns, &display_name(header_path));
        let class_guard = contract_guard(ns, base);

        self.write_comment(out)?;
        writeln!(out, "#ifndef {}", guard)?;
        writeln!(out, "#define {}", guard)?;
        writeln!(out)?;
        writeln!(out, "#include <stddef.h>")?;
        writeln!(out)?;
        writeln!(out, "namespace {}", ns)?;
        writeln!(out, "{{")?;
        writeln!(out, "  #ifndef {}", class_guard)?;
        writeln!(out, "  #define {}", class_guard)?;
        writeln!(out, "  class {}", base)?;
        writeln!(out, "  {{")?;
        writeln!(out, "  public:")?;
        writeln!(out, "    virtual size_t getSize() const = 0;")?;
        writeln!(out, "    virtual const char * getFilename() const = 0;")?;
        writeln!(out, "    virtual const char * getBuffer() const = 0;")?;
        if self.request.save_method {
            writeln!(out, "    virtual bool save(const char * iFilename) const = 0;")?;
        }
        writeln!(out, "  }};")?;
        writeln!(out, "  #endif //{}", class_guard)?;
        writeln!(out, "  const {} & {}();", base, self.getter_name)?;
        writeln!(out, "}}; //{}", ns)?;
        writeln!(out)?;
        writeln!(out, "#endif //{}", guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render_header(request: &GenerationRequest, header: &str) -> String {
        let mut out = Vec::new();
        Template::new(request)
            .write_header(&mut out, Path::new(header))
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_names() {
        assert_eq!(capitalize_first("hello"), "Hello");
        assert_eq!(capitalize_first("Hello"), "Hello");
        assert_eq!(capitalize_first("_x"), "_x");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(class_name("hello"), "HelloFile");
        assert_eq!(getter_name("hello"), "getHelloFile");
    }

    #[test]
    fn test_guards() {
        assert_eq!(include_guard("ns", "hello.h"), "NS_HELLO_H");
        assert_eq!(include_guard("res", "my-logo.h"), "RES_MY_LOGO_H");
        assert_eq!(contract_guard("ns", "IFile"), "NS_IFILE_EMBEDDEDFILE_CLASS");
    }

    #[test]
    fn test_template_metadata() {
        let request = GenerationRequest::new("assets/dir/hello.bin", "out/hello.cpp", "hello");
        let template = Template::new(&request);
        assert_eq!(template.class_name(), "HelloFile");
        assert_eq!(template.getter_name(), "getHelloFile");
        assert_eq!(template.filename(), "hello.bin");
    }

    #[test]
    fn test_header_file() {
        let request = GenerationRequest::new("hello.bin", "hello.cpp", "hello")
            .namespace("ns")
            .base_class("IFile")
            .header_comment(false);

        let expected = "\
#ifndef NS_HELLO_H
#define NS_HELLO_H

#include <stddef.h>

namespace ns
{
  #ifndef NS_IFILE_EMBEDDEDFILE_CLASS
  #define NS_IFILE_EMBEDDEDFILE_CLASS
  class IFile
  {
  public:
    virtual size_t getSize() const = 0;
    virtual const char * getFilename() const = 0;
    virtual const char * getBuffer() const = 0;
    virtual bool save(const char * iFilename) const = 0;
  };
  #endif //NS_IFILE_EMBEDDEDFILE_CLASS
  const IFile & getHelloFile();
}; //ns

#endif //NS_HELLO_H
";
        assert_eq!(render_header(&request, "out/hello.h"), expected);
    }

    #[test]
    fn test_header_without_save() {
        let request = GenerationRequest::new("hello.bin", "hello.cpp", "hello").save_method(false);
        let header = render_header(&request, "hello.h");
        assert!(!header.contains("save("));
    }

    #[test]
    fn test_comment_block() {
        let request = GenerationRequest::new("dir/hello.bin", "hello.cpp", "hello");
        let header = render_header(&request, "hello.h");
        assert!(header.starts_with("/**\n * This file was generated by bin2cpp v"));
        assert!(header.contains(" * Source code for file 'hello.bin'.\n"));
    }

    #[test]
    fn test_prologue_escapes_filename() {
        let request =
            GenerationRequest::new("dir/we\"ird.bin", "out.cpp", "weird").header_comment(false);
        let mut out = Vec::new();
        Template::new(&request)
            .write_source_prologue(&mut out, "out.h", 7)
            .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("virtual size_t getSize() const { return 7; }"));
        assert!(text.contains("return \"we\\\"ird.bin\"; }"));
        assert!(text.contains("class WeirdFile : public virtual bin2cpp::File"));
    }
}
