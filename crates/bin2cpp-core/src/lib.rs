//! # bin2cpp-core
//!
//! A library for embedding arbitrary binary files into generated C++ source.
//!
//! Each generation turns one input file into a header/source pair. The
//! source defines a class implementing a shared contract (`getSize`,
//! `getFilename`, `getBuffer`, optionally `save`) whose buffer accessor holds
//! the file bytes as a compile-time literal, plus a getter returning a
//! function-local singleton of that class.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`encoder`]: Byte-to-literal encoding (hex arrays, escaped strings)
//! - [`pipeline`]: Chunked streaming of the input through a [`LiteralStyle`]
//! - [`template`]: Boilerplate around the payload and the header file
//! - [`generator`]: The [`Generator`] contract, its variants and the registry
//! - [`request`]: Generation parameters and their validation
//! - [`error`]: Error types and handling
//!
//! ## Example
//!
//! ```no_run
//! use bin2cpp_core::{GenerationRequest, GeneratorRegistry};
//!
//! let request = GenerationRequest::new("assets/logo.png", "generated/logo.cpp", "logo")
//!     .namespace("resources")
//!     .chunk_size(64);
//!
//! let registry = GeneratorRegistry::with_defaults();
//! let module = registry.generate("array", &request)?;
//! println!("{} -> {}", module.class_name, module.header_path.display());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Extensibility
//!
//! New embedding syntaxes are added by implementing [`LiteralStyle`] and
//! [`Generator`] and registering the variant with [`GeneratorRegistry`].

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unreachable_pub)]

pub mod encoder;
pub mod error;
pub mod fs;
pub mod generator;
pub mod output;
pub mod pipeline;
pub mod request;
pub mod template;

// Re-export primary types for convenience
pub use error::{Error, Result};
pub use generator::{
    ArrayGenerator, GeneratedModule, Generator, GeneratorRegistry, SegmentGenerator,
    StringGenerator, DEFAULT_GENERATOR,
};
pub use pipeline::{Chunk, ChunkReader, LiteralStyle, PayloadStats};
pub use request::{GenerationRequest, DEFAULT_BASE_CLASS, DEFAULT_CHUNK_SIZE, DEFAULT_NAMESPACE};

/// Crate version for programmatic access
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
