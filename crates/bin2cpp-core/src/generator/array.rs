//! Array-style generator: hex integer literals in an `unsigned char` array.

use super::Generator;
use crate::encoder::to_cpp_char_array;
use crate::pipeline::LiteralStyle;

/// Embeds the payload as `static const unsigned char buffer[] = { 0x.., .. };`
///
/// An empty input still needs one initializer element to form a valid array,
/// so a single `0x00` is emitted; `getSize()` reports 0 in that case.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayGenerator;

impl LiteralStyle for ArrayGenerator {
    fn open(&self) -> &str {
        "      static const unsigned char buffer[] = {\n"
    }

    fn encode(&self, chunk: &[u8]) -> String {
        format!("        {}", to_cpp_char_array(chunk))
    }

    fn separator(&self) -> &str {
        ",\n"
    }

    fn empty(&self) -> &str {
        "        0x00"
    }

    fn close(&self) -> &str {
        "\n      };\n"
    }

    fn buffer_return(&self) -> &str {
        "      return (const char *)buffer;\n"
    }
}

impl Generator for ArrayGenerator {
    fn name(&self) -> &str {
        "array"
    }

    fn style(&self) -> &dyn LiteralStyle {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::tests::parse_char_array;
    use crate::generator::tests::{between, generate_bytes, sample_inputs, size_accessor, CHUNK_SIZES};
    use pretty_assertions::assert_eq;

    /// Evaluates `getBuffer()`/`getSize()` of a generated array module
    fn embedded_bytes(source: &str) -> Vec<u8> {
        let literal = between(source, "buffer[] = {\n", "\n      };");
        let mut bytes = parse_char_array(literal);
        bytes.truncate(size_accessor(source) as usize);
        bytes
    }

    #[test]
    fn test_round_trip() {
        for input in sample_inputs() {
            for &chunk_size in CHUNK_SIZES {
                let generated = generate_bytes(&ArrayGenerator, &input, chunk_size);
                assert_eq!(size_accessor(&generated.source), input.len() as u64);
                assert_eq!(embedded_bytes(&generated.source), input);
            }
        }
    }

    #[test]
    fn test_empty_input() {
        let generated = generate_bytes(&ArrayGenerator, &[], 16);
        assert_eq!(generated.module.size, 0);
        assert_eq!(size_accessor(&generated.source), 0);
        assert!(embedded_bytes(&generated.source).is_empty());
        assert_eq!(generated.module.fragments, 0);
        assert!(generated
            .source
            .contains("buffer[] = {\n        0x00\n      };\n"));
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_fragment() {
        let input = vec![0xAB; 1024];
        let generated = generate_bytes(&ArrayGenerator, &input, 512);
        assert_eq!(generated.module.fragments, 2);

        let literal = between(&generated.source, "buffer[] = {\n", "\n      };");
        assert_eq!(literal.lines().count(), 2);
        assert!(!literal.ends_with(','));
    }

    #[test]
    fn test_fragment_per_chunk() {
        let generated = generate_bytes(&ArrayGenerator, b"Hello", 3);
        let literal = between(&generated.source, "buffer[] = {\n", "\n      };");
        assert_eq!(literal, "        0x48,0x65,0x6C,\n        0x6C,0x6F");
    }
}
