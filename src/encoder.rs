use log::{debug, trace};

use crate::charset::{Charset, Code, ESCAPE};
use crate::error::{Gsm7Error, Result};
use crate::septet;

/// Stateless text-to-GSM encoder bound to one table set and packing mode.
#[derive(Debug, Clone, Copy)]
pub struct Encoder {
    charset: &'static Charset,
    packed: bool,
}

impl Encoder {
    pub fn new(charset: &'static Charset, packed: bool) -> Self {
        Self { charset, packed }
    }

    /// Resolve every character of `content` into septets.
    ///
    /// Either the whole text maps or the first unsupported character is reported.
    fn septets(&self, content: &str) -> Result<Vec<u8>> {
        let mut septets = Vec::with_capacity(content.len());

        for (position, ch) in content.chars().enumerate() {
            match self.charset.lookup_char(ch) {
                Some(Code::Single(b)) => septets.push(b),
                Some(Code::Escape(b)) => {
                    septets.push(ESCAPE);
                    septets.push(b);
                }
                None => {
                    debug!(
                        "unsupported character U+{:04X} at {} for {} alphabet",
                        ch as u32,
                        position,
                        self.charset.language()
                    );
                    return Err(Gsm7Error::unsupported(ch, position));
                }
            }
        }

        Ok(septets)
    }

    /// Number of septets `content` occupies, counting escape pairs as two.
    pub fn septet_count(&self, content: &str) -> Result<usize> {
        let mut count = 0;
        for (position, ch) in content.chars().enumerate() {
            match self.charset.lookup_char(ch) {
                Some(code) => count += code.septets(),
                None => return Err(Gsm7Error::unsupported(ch, position)),
            }
        }
        Ok(count)
    }

    /// Bytes required to encode `content` in this encoder's mode.
    pub fn encoded_len(&self, content: &str) -> Result<usize> {
        let septets = self.septet_count(content)?;
        Ok(self.output_len(septets))
    }

    fn output_len(&self, septets: usize) -> usize {
        if self.packed {
            septet::packed_len(septets)
        } else {
            septets
        }
    }

    /// Encode `content` into `dst`, returning the number of bytes written.
    ///
    /// Nothing is written to `dst` unless the whole text is representable and fits.
    /// A failed call keeps no state; retry with the full input.
    ///
    /// # Errors
    ///
    /// * [`Gsm7Error::UnsupportedCharacter`] for the first character without a mapping.
    /// * [`Gsm7Error::InsufficientCapacity`] if `dst` is too small.
    pub fn encode_to_slice(&self, content: &str, dst: &mut [u8]) -> Result<usize> {
        let septets = self.septets(content)?;
        let required = self.output_len(septets.len());
        trace!(
            "encoding {} chars into {} septets, {} bytes",
            content.chars().count(),
            septets.len(),
            required
        );

        if dst.len() < required {
            return Err(Gsm7Error::InsufficientCapacity {
                required,
                available: dst.len(),
            });
        }

        if self.packed {
            septet::pack_into(&septets, dst)
        } else {
            dst[..required].copy_from_slice(&septets);
            Ok(required)
        }
    }

    /// Encode `content` into a new buffer.
    pub fn encode(&self, content: &str) -> Result<Vec<u8>> {
        let septets = self.septets(content)?;
        if self.packed {
            Ok(septet::pack(&septets))
        } else {
            Ok(septets)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;

    fn basic(packed: bool) -> Encoder {
        Encoder::new(Language::Basic.charset(), packed)
    }

    #[test]
    fn test_encode_hello() {
        assert_eq!(basic(false).encode("Hello").unwrap(), b"Hello");
        assert_eq!(
            basic(true).encode("hello").unwrap(),
            [0xE8, 0x32, 0x9B, 0xFD, 0x06]
        );
    }

    #[test]
    fn test_escape_pairs() {
        let encoded = basic(false).encode("{€}").unwrap();
        assert_eq!(encoded, [0x1B, 0x28, 0x1B, 0x65, 0x1B, 0x29]);
        assert_eq!(basic(false).septet_count("{€}").unwrap(), 6);
        assert_eq!(basic(true).encoded_len("{€}").unwrap(), 6);
        assert_eq!(basic(true).encoded_len("[{€}]").unwrap(), 9);
    }

    #[test]
    fn test_unsupported_character() {
        let err = basic(false).encode("Hello 🦀 World").unwrap_err();
        assert_eq!(
            err,
            Gsm7Error::UnsupportedCharacter {
                character: '🦀',
                code: 0x1F980,
                position: 6
            }
        );
        assert_eq!(basic(false).encoded_len("Hello 🦀").unwrap_err(), err);
    }

    #[test]
    fn test_unsupported_writes_nothing() {
        let mut dst = [0xAAu8; 16];
        assert!(basic(false).encode_to_slice("ab🦀", &mut dst).is_err());
        assert_eq!(dst, [0xAA; 16]);
    }

    #[test]
    fn test_insufficient_capacity() {
        for packed in [false, true] {
            let encoder = basic(packed);
            let required = encoder.encoded_len("Hello world").unwrap();
            let mut dst = vec![0xAAu8; required - 1];
            let err = encoder.encode_to_slice("Hello world", &mut dst).unwrap_err();
            assert_eq!(
                err,
                Gsm7Error::InsufficientCapacity {
                    required,
                    available: required - 1
                }
            );
            assert!(dst.iter().all(|&b| b == 0xAA));

            let mut dst = vec![0u8; required + 3];
            let written = encoder.encode_to_slice("Hello world", &mut dst).unwrap();
            assert_eq!(written, required);
            assert_eq!(&dst[..written], encoder.encode("Hello world").unwrap());
        }
    }

    #[test]
    fn test_empty_string() {
        assert!(basic(false).encode("").unwrap().is_empty());
        assert!(basic(true).encode("").unwrap().is_empty());
        assert_eq!(basic(true).encode_to_slice("", &mut []).unwrap(), 0);
    }
}
