//! String-style generator: adjacent escaped string literals.

use super::Generator;
use crate::encoder::to_cpp_string;
use crate::pipeline::LiteralStyle;

/// Embeds the payload as `static const char buffer[] = "..." "...";`
///
/// Each chunk becomes its own literal on its own line; the compiler joins
/// adjacent literals, so escapes never run across chunk boundaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringGenerator;

impl LiteralStyle for StringGenerator {
    fn open(&self) -> &str {
        "      static const char buffer[] =\n"
    }

    fn encode(&self, chunk: &[u8]) -> String {
        format!("        \"{}\"", to_cpp_string(chunk))
    }

    fn separator(&self) -> &str {
        "\n"
    }

    fn empty(&self) -> &str {
        "        \"\""
    }

    fn close(&self) -> &str {
        ";\n"
    }

    fn buffer_return(&self) -> &str {
        "      return buffer;\n"
    }
}

impl Generator for StringGenerator {
    fn name(&self) -> &str {
        "string"
    }

    fn style(&self) -> &dyn LiteralStyle {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::tests::unescape_cpp_string;
    use crate::generator::tests::{between, generate_bytes, sample_inputs, size_accessor, CHUNK_SIZES};
    use pretty_assertions::assert_eq;

    fn literal_lines(source: &str) -> Vec<&str> {
        between(source, "buffer[] =\n", ";\n      return buffer;")
            .lines()
            .map(|line| {
                line.trim()
                    .strip_prefix('"')
                    .and_then(|l| l.strip_suffix('"'))
                    .expect("quoted literal")
            })
            .collect()
    }

    fn embedded_bytes(source: &str) -> Vec<u8> {
        literal_lines(source)
            .into_iter()
            .flat_map(unescape_cpp_string)
            .collect()
    }

    #[test]
    fn test_round_trip() {
        for input in sample_inputs() {
            for &chunk_size in CHUNK_SIZES {
                let generated = generate_bytes(&StringGenerator, &input, chunk_size);
                assert_eq!(size_accessor(&generated.source), input.len() as u64);
                assert_eq!(embedded_bytes(&generated.source), input);
            }
        }
    }

    #[test]
    fn test_empty_input() {
        let generated = generate_bytes(&StringGenerator, &[], 8);
        assert!(generated
            .source
            .contains("static const char buffer[] =\n        \"\";\n      return buffer;\n"));
        assert_eq!(size_accessor(&generated.source), 0);
    }

    #[test]
    fn test_one_literal_per_chunk() {
        let generated = generate_bytes(&StringGenerator, b"Hello", 3);
        assert_eq!(literal_lines(&generated.source), vec!["Hel", "lo"]);

        let generated = generate_bytes(&StringGenerator, &[b'x'; 1024], 512);
        assert_eq!(literal_lines(&generated.source).len(), 2);
    }
}
