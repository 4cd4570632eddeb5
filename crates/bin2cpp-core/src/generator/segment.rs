//! Segment-style generator: a `std::string` assembled chunk by chunk.

use super::Generator;
use crate::encoder::to_cpp_string;
use crate::pipeline::LiteralStyle;

/// Embeds the payload as one `buffer.append("...", n);` statement per chunk
///
/// The string is built on the first call to `getBuffer()`. Passing the
/// length explicitly keeps embedded NUL bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentGenerator;

impl LiteralStyle for SegmentGenerator {
    fn open(&self) -> &str {
        "      static std::string buffer;\n      if (buffer.empty())\n      {\n        buffer.reserve(getSize());\n"
    }

    fn encode(&self, chunk: &[u8]) -> String {
        format!(
            "        buffer.append(\"{}\", {});",
            to_cpp_string(chunk),
            chunk.len()
        )
    }

    fn separator(&self) -> &str {
        "\n"
    }

    fn close(&self) -> &str {
        "\n      }\n"
    }

    fn buffer_return(&self) -> &str {
        "      return buffer.c_str();\n"
    }
}

impl Generator for SegmentGenerator {
    fn name(&self) -> &str {
        "segment"
    }

    fn style(&self) -> &dyn LiteralStyle {
        self
    }
}
