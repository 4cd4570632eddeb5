//! Generator variants.
//!
//! A [`Generator`] turns a [`GenerationRequest`] into a header/source pair.
//! All variants share one control flow, implemented by the provided
//! [`Generator::generate`] method; they differ only in the [`LiteralStyle`]
//! used to spell the payload.
//!
//! ## Variants
//!
//! - [`ArrayGenerator`] (`array`): `static const unsigned char` initializer
//!   of hex literals
//! - [`StringGenerator`] (`string`): adjacent escaped string literals
//! - [`SegmentGenerator`] (`segment`): a `std::string` filled by one
//!   `append` call per chunk
//!
//! Variants are looked up by name through the [`GeneratorRegistry`].

mod array;
mod registry;
mod segment;
mod string;

use crate::error::{Error, Result};
use crate::fs::{display_name, file_size};
use crate::output::OutputFile;
use crate::pipeline::{stream_literal, LiteralStyle, PipelineError};
use crate::request::GenerationRequest;
use crate::template::Template;
use std::fs::File;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tracing::debug;

pub use array::ArrayGenerator;
pub use registry::{GeneratorRegistry, DEFAULT_GENERATOR};
pub use segment::SegmentGenerator;
pub use string::StringGenerator;

/// Description of a successfully written module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModule {
    /// Name of the generator that produced the module
    pub generator: String,
    /// Path of the generated source file
    pub source_path: PathBuf,
    /// Path of the generated header file
    pub header_path: PathBuf,
    /// Name of the generated class
    pub class_name: String,
    /// Name of the getter function
    pub getter_name: String,
    /// Basename of the embedded file
    pub filename: String,
    /// Number of bytes embedded
    pub size: u64,
    /// Number of literal fragments written
    pub fragments: usize,
}

/// Shared contract of all generator variants
pub trait Generator: Send + Sync {
    /// Stable name used to select the variant
    fn name(&self) -> &str;

    /// Literal syntax used for the payload
    fn style(&self) -> &dyn LiteralStyle;

    /// Companion header path for a source path, by extension substitution
    fn header_path(&self, source_path: &Path) -> PathBuf {
        source_path.with_extension("h")
    }

    /// Writes the source and header files described by `request`
    ///
    /// The request is validated before anything is opened. If the input
    /// cannot be opened, or is not a regular file, nothing is created; if
    /// the source cannot be created the input is closed first and the error
    /// returned.
    fn generate(&self, request: &GenerationRequest) -> Result<GeneratedModule> {
        request.validate()?;
        let chunk_size = NonZeroUsize::new(request.chunk_size)
            .ok_or_else(|| Error::invalid_configuration("chunk size must be at least 1 byte"))?;

        let header_path = self.header_path(&request.output_path);
        if header_path == request.output_path {
            return Err(Error::invalid_configuration(format!(
                "header path derived from '{}' is the source path itself",
                request.output_path.display()
            )));
        }

        let input = File::open(&request.input_path)
            .map_err(|e| Error::input_unavailable(&request.input_path, e))?;
        let size =
            file_size(&input).map_err(|e| Error::input_unavailable(&request.input_path, e))?;

        let template = Template::new(request);

        debug!(
            "Generating {} from {} ({} bytes) with the '{}' generator",
            request.output_path.display(),
            request.input_path.display(),
            size,
            self.name()
        );

        let mut source = match OutputFile::create(&request.output_path) {
            Ok(source) => source,
            Err(e) => {
                drop(input);
                return Err(e);
            }
        };

        template
            .write_source_prologue(&mut source, &display_name(&header_path), size)
            .map_err(|e| source.write_error(e))?;

        let stats = stream_literal(&input, &mut source, chunk_size, self.style())
            .map_err(|e| match e {
                PipelineError::Read(e) => Error::file_read(&request.input_path, e),
                PipelineError::Write(e) => source.write_error(e),
            })?;
        drop(input);

        if stats.bytes != size {
            return Err(Error::SizeChanged {
                path: request.input_path.clone(),
                expected: size,
                actual: stats.bytes,
            });
        }

        template
            .write_source_epilogue(&mut source, self.style())
            .map_err(|e| source.write_error(e))?;
        source.finish()?;

        let mut header = OutputFile::create(&header_path)?;
        template
            .write_header(&mut header, &header_path)
            .map_err(|e| header.write_error(e))?;
        header.finish()?;

        debug!(
            "Wrote {} and {} ({} fragments)",
            request.output_path.display(),
            header_path.display(),
            stats.fragments
        );

        Ok(GeneratedModule {
            generator: self.name().to_string(),
            source_path: request.output_path.clone(),
            header_path,
            class_name: template.class_name().to_string(),
            getter_name: template.getter_name().to_string(),
            filename: template.filename().to_string(),
            size,
            fragments: stats.fragments,
        })
    }
}
