//! Generation requests.
//!
//! A [`GenerationRequest`] carries everything a generator needs to turn one
//! input file into a header/source pair. Requests are validated up front so
//! a bad configuration never touches the filesystem.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Default number of input bytes encoded per emitted fragment
pub const DEFAULT_CHUNK_SIZE: usize = 200;

/// Default namespace wrapping the generated classes
pub const DEFAULT_NAMESPACE: &str = "bin2cpp";

/// Default name of the shared base contract
pub const DEFAULT_BASE_CLASS: &str = "File";

/// Parameters of a single generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// File whose bytes are embedded
    pub input_path: PathBuf,
    /// Path of the generated source file; the header path is derived from it
    pub output_path: PathBuf,
    /// Identifier used to build the class and getter names
    pub function_identifier: String,
    /// Namespace wrapping the generated code
    pub namespace: String,
    /// Name of the base contract, declared in the same namespace
    pub base_class: String,
    /// Input bytes per emitted fragment (must be at least 1)
    pub chunk_size: usize,
    /// Emit the "generated file" comment block at the top of each output
    pub header_comment: bool,
    /// Emit the `save()` method and its declaration in the contract
    pub save_method: bool,
}

impl GenerationRequest {
    /// Creates a request with default namespace, base class and chunk size
    pub fn new(
        input_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        function_identifier: impl Into<String>,
    ) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            function_identifier: function_identifier.into(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            base_class: DEFAULT_BASE_CLASS.to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            header_comment: true,
            save_method: true,
        }
    }

    /// Sets the namespace
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Sets the base contract name
    pub fn base_class(mut self, base_class: impl Into<String>) -> Self {
        self.base_class = base_class.into();
        self
    }

    /// Sets the chunk size
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Sets whether the comment block is emitted
    pub fn header_comment(mut self, enabled: bool) -> Self {
        self.header_comment = enabled;
        self
    }

    /// Sets whether the save method is emitted
    pub fn save_method(mut self, enabled: bool) -> Self {
        self.save_method = enabled;
        self
    }

    /// Checks the request invariants without any filesystem access
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size < 1 {
            return Err(Error::invalid_configuration(
                "chunk size must be at least 1 byte",
            ));
        }

        check_identifier("function identifier", &self.function_identifier)?;
        check_identifier("namespace", &self.namespace)?;
        check_identifier("base class", &self.base_class)?;

        if path_is_empty(&self.input_path) {
            return Err(Error::invalid_configuration("input path is empty"));
        }
        if path_is_empty(&self.output_path) {
            return Err(Error::invalid_configuration("output path is empty"));
        }

        Ok(())
    }
}

fn path_is_empty(path: &Path) -> bool {
    path.as_os_str().is_empty()
}

/// Returns true if `s` is usable as a C++ identifier
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn check_identifier(what: &str, value: &str) -> Result<()> {
    if is_valid_identifier(value) {
        Ok(())
    } else {
        Err(Error::invalid_configuration(format!(
            "{} '{}' is not a valid C++ identifier",
            what, value
        )))
    }
}
