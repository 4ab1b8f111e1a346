//! GSM 7-bit character encoding and decoding library.
//!
//! This library encodes and decodes text using the GSM 7-bit alphabet defined in
//! GSM 03.38 / 3GPP TS 23.038, the default character set of SMS. Output is either
//! one septet per byte (unpacked) or septets packed eight-to-seven into octets.
//! National language tables for Spanish, Portuguese and Turkish are included.
//!
//! # Example
//!
//! ```rust
//! use gsm7::{decode, encode};
//!
//! let text = "Hello {world} €!";
//! let encoded = encode(text)?;
//! let decoded = decode(&encoded)?;
//! assert_eq!(decoded, text);
//! # Ok::<(), gsm7::Gsm7Error>(())
//! ```
//!
//! With an explicit configuration:
//!
//! ```rust
//! use gsm7::{Codec, Language};
//!
//! let codec = Codec::new(true, Language::Basic);
//! let packed = codec.encode("hellohello")?;
//! assert_eq!(packed, [0xE8, 0x32, 0x9B, 0xFD, 0x46, 0x97, 0xD9, 0xEC, 0x37]);
//! assert_eq!(codec.decode(&packed)?, "hellohello");
//! # Ok::<(), gsm7::Gsm7Error>(())
//! ```

pub mod charset;
pub mod codec;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod language;
pub mod septet;
pub mod validate;

pub use charset::{Charset, Code, ESCAPE};
pub use codec::{Codec, Gsm7Config};
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::{Gsm7Error, Result};
pub use language::Language;
pub use validate::{is_gsm7_compatible, validate_text, validate_wire_bytes};

/// Encode a string as unpacked septets using the basic alphabet.
///
/// # Errors
///
/// Returns `Gsm7Error::UnsupportedCharacter` if the input contains characters
/// not supported by the GSM 7-bit character set.
///
/// # Example
///
/// ```rust
/// use gsm7::encode;
///
/// let encoded = encode("Hello")?;
/// assert_eq!(encoded, [0x48, 0x65, 0x6C, 0x6C, 0x6F]);
/// # Ok::<(), gsm7::Gsm7Error>(())
/// ```
pub fn encode(content: &str) -> Result<Vec<u8>> {
    Codec::default().encode(content)
}

/// Decode unpacked septets using the basic alphabet.
///
/// # Errors
///
/// Returns `Gsm7Error::InvalidByte` on the first byte or escape pair without a
/// mapping. No replacement characters are substituted.
///
/// # Example
///
/// ```rust
/// use gsm7::{decode, Gsm7Error};
///
/// assert_eq!(decode(&[0x48, 0x65, 0x6C, 0x6C, 0x6F])?, "Hello");
/// assert!(matches!(
///     decode(&[0x48, 0x1B]),
///     Err(Gsm7Error::InvalidByte { byte: 0x1B, position: 1 })
/// ));
/// # Ok::<(), gsm7::Gsm7Error>(())
/// ```
pub fn decode(data: &[u8]) -> Result<String> {
    Codec::default().decode(data)
}

/// Calculate the number of unpacked septets required to encode a string.
///
/// This is useful for SMS length calculations: escape-table characters count twice.
pub fn encoded_len(content: &str) -> Result<usize> {
    Codec::default().encoded_len(content)
}
