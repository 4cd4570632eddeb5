//! Chunked streaming of the input into literal text.
//!
//! ## Algorithm Overview
//!
//! 1. Read up to `chunk_size` bytes into a buffer owned by the [`ChunkReader`]
//! 2. A read that comes back short (including empty) is the final chunk
//! 3. Every non-empty chunk is encoded by the [`LiteralStyle`] and written,
//!    preceded by the style's separator unless it is the first fragment
//! 4. After the final chunk the style's terminator is written; an input with
//!    no bytes at all gets the style's empty body first
//!
//! Only one chunk of raw bytes and one encoded fragment are alive at any
//! time, so memory use does not grow with the input size.

use std::io::{self, Read, Write};
use std::num::NonZeroUsize;
use tracing::trace;

/// Literal syntax used to embed the payload
///
/// Implementations supply the fixed framing around the fragments and the
/// encoding of a single chunk. The pipeline owns the control flow.
pub trait LiteralStyle {
    /// Text written before the first fragment (declaration and opener)
    fn open(&self) -> &str;

    /// Encodes one non-empty chunk as a complete fragment
    fn encode(&self, chunk: &[u8]) -> String;

    /// Text written between two consecutive fragments
    fn separator(&self) -> &str;

    /// Body written when the input holds no bytes at all
    fn empty(&self) -> &str {
        ""
    }

    /// Terminator written after the last fragment
    fn close(&self) -> &str;

    /// Statement returning the buffer from the accessor
    fn buffer_return(&self) -> &str;
}

/// A contiguous run of input bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    /// Position of the chunk in the input, starting at zero
    pub index: usize,
    /// Bytes read, at most the configured chunk size
    pub data: &'a [u8],
    /// True when the read came back short, i.e. the input is exhausted
    pub is_final: bool,
}

/// Reads an input in fixed-size chunks through a single reusable buffer
#[derive(Debug)]
pub struct ChunkReader<R> {
    reader: R,
    buffer: Vec<u8>,
    index: usize,
    done: bool,
}

impl<R: Read> ChunkReader<R> {
    /// Creates a chunk reader
    pub fn new(reader: R, chunk_size: NonZeroUsize) -> Self {
        Self {
            reader,
            buffer: vec![0; chunk_size.get()],
            index: 0,
            done: false,
        }
    }

    /// Reads the next chunk, or returns `None` once the final chunk was returned
    ///
    /// When the input length is an exact multiple of the chunk size the final
    /// chunk is empty.
    pub fn next_chunk(&mut self) -> io::Result<Option<Chunk<'_>>> {
        if self.done {
            return Ok(None);
        }

        let len = read_full(&mut self.reader, &mut self.buffer)?;
        let is_final = len < self.buffer.len();
        self.done = is_final;

        let chunk = Chunk {
            index: self.index,
            data: &self.buffer[..len],
            is_final,
        };
        self.index += 1;
        Ok(Some(chunk))
    }
}

/// Fills `buf` as far as the input allows, retrying interrupted reads
fn read_full(reader: &mut impl Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Totals of one streamed payload
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PayloadStats {
    /// Number of input bytes embedded
    pub bytes: u64,
    /// Number of fragments written
    pub fragments: usize,
}

/// Failure while streaming, split by side so callers can attach the right path
#[derive(Debug)]
pub enum PipelineError {
    /// Reading the input failed
    Read(io::Error),
    /// Writing the output failed
    Write(io::Error),
}

/// Streams `input` into `out` as a literal in the given style
pub fn stream_literal(
    input: impl Read,
    out: &mut dyn Write,
    chunk_size: NonZeroUsize,
    style: &dyn LiteralStyle,
) -> Result<PayloadStats, PipelineError> {
    let mut reader = ChunkReader::new(input, chunk_size);
    let mut stats = PayloadStats::default();

    out.write_all(style.open().as_bytes())
        .map_err(PipelineError::Write)?;

    while let Some(chunk) = reader.next_chunk().map_err(PipelineError::Read)? {
        trace!(
            "chunk {}: {} bytes{}",
            chunk.index,
            chunk.data.len(),
            if chunk.is_final { " (final)" } else { "" }
        );

        if chunk.data.is_empty() {
            continue;
        }

        if stats.fragments > 0 {
            out.write_all(style.separator().as_bytes())
                .map_err(PipelineError::Write)?;
        }
        out.write_all(style.encode(chunk.data).as_bytes())
            .map_err(PipelineError::Write)?;

        stats.fragments += 1;
        stats.bytes += chunk.data.len() as u64;
    }

    if stats.fragments == 0 {
        out.write_all(style.empty().as_bytes())
            .map_err(PipelineError::Write)?;
    }
    out.write_all(style.close().as_bytes())
        .map_err(PipelineError::Write)?;

    Ok(stats)
}
