use std::borrow::Cow;
use std::fmt;

use log::debug;

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::Result;
use crate::language::Language;
use crate::septet;
use crate::validate::{validate_text, validate_wire_bytes};

/// Configuration options for GSM 7-bit encoding/decoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gsm7Config {
    /// Pack septets into octets (8 characters per 7 bytes). Most SMPP peers expect
    /// unpacked septets.
    pub packed: bool,
    /// Table set used for both directions.
    pub language: Language,
}

impl Gsm7Config {
    pub fn new(packed: bool, language: Language) -> Self {
        Self { packed, language }
    }

    /// Create a packed config for the basic alphabet.
    pub fn packed() -> Self {
        Self {
            packed: true,
            language: Language::Basic,
        }
    }

    pub fn with_language(self, language: Language) -> Self {
        Self { language, ..self }
    }
}

/// A GSM 7-bit codec with a fixed configuration.
///
/// The table set is resolved once here; every encode and decode call afterwards
/// only reads it, so a `Codec` can be copied freely and shared across threads.
///
/// # Example
///
/// ```rust
/// use gsm7::{Codec, Language};
///
/// let codec = Codec::new(false, Language::Spanish);
/// let encoded = codec.encode("¿Qué tal? á")?;
/// assert_eq!(&encoded[encoded.len() - 2..], [0x1B, 0x61]);
/// assert_eq!(codec.decode(&encoded)?, "¿Qué tal? á");
/// # Ok::<(), gsm7::Gsm7Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Codec {
    config: Gsm7Config,
    encoder: Encoder,
    decoder: Decoder,
}

impl Codec {
    pub fn new(packed: bool, language: Language) -> Self {
        Self::from_config(Gsm7Config::new(packed, language))
    }

    pub fn from_config(config: Gsm7Config) -> Self {
        let charset = config.language.charset();
        Self {
            config,
            encoder: Encoder::new(charset, config.packed),
            decoder: Decoder::new(charset, config.packed),
        }
    }

    pub fn config(&self) -> Gsm7Config {
        self.config
    }

    pub fn encoder(&self) -> Encoder {
        self.encoder
    }

    pub fn decoder(&self) -> Decoder {
        self.decoder
    }

    pub fn encode(&self, content: &str) -> Result<Vec<u8>> {
        self.encoder.encode(content)
    }

    pub fn encode_to_slice(&self, content: &str, dst: &mut [u8]) -> Result<usize> {
        self.encoder.encode_to_slice(content, dst)
    }

    pub fn encoded_len(&self, content: &str) -> Result<usize> {
        self.encoder.encoded_len(content)
    }

    pub fn decode(&self, data: &[u8]) -> Result<String> {
        self.decoder.decode(data)
    }

    pub fn decode_to_slice(&self, data: &[u8], dst: &mut [u8]) -> Result<usize> {
        self.decoder.decode_to_slice(data, dst)
    }

    /// Encode, handing back the original UTF-8 bytes if the text cannot be encoded.
    ///
    /// This mirrors what message-layer callers have historically relied on. The
    /// error is only logged; use [`Codec::encode`] to see it.
    pub fn encode_or_passthrough<'a>(&self, content: &'a str) -> Cow<'a, [u8]> {
        match self.encode(content) {
            Ok(encoded) => Cow::Owned(encoded),
            Err(err) => {
                debug!("{self}: passing input through unchanged: {err}");
                Cow::Borrowed(content.as_bytes())
            }
        }
    }

    /// Decode to UTF-8, handing back the original bytes if they cannot be decoded.
    pub fn decode_or_passthrough<'a>(&self, data: &'a [u8]) -> Cow<'a, [u8]> {
        match self.decode(data) {
            Ok(text) => Cow::Owned(text.into_bytes()),
            Err(err) => {
                debug!("{self}: passing input through unchanged: {err}");
                Cow::Borrowed(data)
            }
        }
    }

    /// Characters of `text` this codec cannot encode.
    pub fn invalid_text(&self, text: &str) -> Vec<char> {
        validate_text(text, self.config.language)
    }

    /// Septet bytes in `data` this codec cannot decode. Packed input is unpacked first.
    pub fn invalid_bytes(&self, data: &[u8]) -> Vec<u8> {
        if self.config.packed {
            validate_wire_bytes(&septet::unpack(data), self.config.language)
        } else {
            validate_wire_bytes(data, self.config.language)
        }
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::from_config(Gsm7Config::default())
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.config.packed {
            f.write_str("GSM 7-bit (Packed)")
        } else {
            f.write_str("GSM 7-bit (Unpacked)")
        }
    }
}
