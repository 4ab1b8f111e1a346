use log::{debug, trace};

use crate::charset::{Charset, ESCAPE};
use crate::error::{Gsm7Error, Result};
use crate::septet;

/// Stateless GSM-to-text decoder bound to one table set and packing mode.
///
/// Decoding is strict: the first septet that cannot be resolved aborts the call.
#[derive(Debug, Clone, Copy)]
pub struct Decoder {
    charset: &'static Charset,
    packed: bool,
}

impl Decoder {
    pub fn new(charset: &'static Charset, packed: bool) -> Self {
        Self { charset, packed }
    }

    /// Decode `data` into a new string.
    ///
    /// # Errors
    ///
    /// [`Gsm7Error::InvalidByte`] for an unmapped septet, an escape followed by an
    /// unmapped extension value, or an escape marker at the very end of the input.
    pub fn decode(&self, data: &[u8]) -> Result<String> {
        if self.packed {
            let septets = septet::unpack(data);
            trace!("unpacked {} octets into {} septets", data.len(), septets.len());
            self.decode_septets(&septets)
        } else {
            self.decode_septets(data)
        }
    }

    /// Decode `data` as UTF-8 into `dst`, returning the number of bytes written.
    ///
    /// Fails with [`Gsm7Error::InsufficientCapacity`] without writing when the text
    /// does not fit.
    pub fn decode_to_slice(&self, data: &[u8], dst: &mut [u8]) -> Result<usize> {
        let text = self.decode(data)?;
        let required = text.len();
        if dst.len() < required {
            return Err(Gsm7Error::InsufficientCapacity {
                required,
                available: dst.len(),
            });
        }
        dst[..required].copy_from_slice(text.as_bytes());
        Ok(required)
    }

    fn decode_septets(&self, septets: &[u8]) -> Result<String> {
        let mut result = String::with_capacity(septets.len());

        let mut i = 0;
        while i < septets.len() {
            let code = septets[i];

            let ch = if code == ESCAPE {
                i += 1;
                let Some(&next) = septets.get(i) else {
                    debug!("escape marker at end of input");
                    return Err(Gsm7Error::InvalidByte {
                        byte: ESCAPE,
                        position: i - 1,
                    });
                };
                self.charset.escaped(next).ok_or(Gsm7Error::InvalidByte {
                    byte: next,
                    position: i,
                })
            } else {
                self.charset.septet(code).ok_or(Gsm7Error::InvalidByte {
                    byte: code,
                    position: i,
                })
            };

            match ch {
                Ok(ch) => result.push(ch),
                Err(err) => {
                    debug!("{} for {} alphabet", err, self.charset.language());
                    return Err(err);
                }
            }
            i += 1;
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;

    fn basic(packed: bool) -> Decoder {
        Decoder::new(Language::Basic.charset(), packed)
    }

    #[test]
    fn test_decode_hello() {
        assert_eq!(
            basic(false).decode(&[0x48, 0x65, 0x6C, 0x6C, 0x6F]).unwrap(),
            "Hello"
        );
        assert_eq!(
            basic(true)
                .decode(&[0xE8, 0x32, 0x9B, 0xFD, 0x06])
                .unwrap(),
            "hello"
        );
    }

    #[test]
    fn test_escape_pairs() {
        let decoded = basic(false)
            .decode(&[0x1B, 0x28, 0x41, 0x1B, 0x65, 0x1B, 0x29])
            .unwrap();
        assert_eq!(decoded, "{A€}");
    }

    #[test]
    fn test_invalid_byte() {
        let err = basic(false).decode(&[0x48, 0x81, 0x65]).unwrap_err();
        assert_eq!(
            err,
            Gsm7Error::InvalidByte {
                byte: 0x81,
                position: 1
            }
        );
    }

    #[test]
    fn test_invalid_escape_sequence() {
        let err = basic(false).decode(&[0x41, 0x1B, 0x41]).unwrap_err();
        assert_eq!(
            err,
            Gsm7Error::InvalidByte {
                byte: 0x41,
                position: 2
            }
        );

        // Two escapes in a row are not a valid pair.
        assert!(basic(false).decode(&[0x1B, 0x1B, 0x28]).is_err());
    }

    #[test]
    fn test_truncated_escape() {
        let err = basic(false)
            .decode(&[0x48, 0x65, 0x6C, 0x6C, 0x6F, 0x1B])
            .unwrap_err();
        assert_eq!(
            err,
            Gsm7Error::InvalidByte {
                byte: 0x1B,
                position: 5
            }
        );
    }

    #[test]
    fn test_decode_to_slice() {
        let decoder = basic(false);
        let data = [0x1B, 0x65, 0x31];

        let mut small = [0u8; 3];
        let err = decoder.decode_to_slice(&data, &mut small).unwrap_err();
        assert_eq!(
            err,
            Gsm7Error::InsufficientCapacity {
                required: 4,
                available: 3
            }
        );
        assert_eq!(small, [0; 3]);

        let mut dst = [0u8; 8];
        let written = decoder.decode_to_slice(&data, &mut dst).unwrap();
        assert_eq!(std::str::from_utf8(&dst[..written]).unwrap(), "€1");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(basic(false).decode(&[]).unwrap(), "");
        assert_eq!(basic(true).decode(&[]).unwrap(), "");
    }
}
