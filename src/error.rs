use thiserror::Error;

/// Errors that can occur during GSM 7-bit encoding/decoding operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Gsm7Error {
    /// Character has no mapping in the basic or extension table of the active language.
    #[error(
        "Character not supported in GSM 7-bit: '{character}' (U+{code:04X}) at position {position}"
    )]
    UnsupportedCharacter {
        character: char,
        code: u32,
        position: usize,
    },

    /// Septet (or escape pair) that the active language cannot resolve.
    ///
    /// For an escape pair `byte` is the value following `0x1B`; a lone trailing
    /// escape reports `0x1B` itself.
    #[error("Invalid GSM 7-bit byte: 0x{byte:02X} at position {position}")]
    InvalidByte { byte: u8, position: usize },

    /// Caller-provided output buffer is too small. Nothing was written.
    #[error("Output buffer too small: need {required} bytes, have {available}")]
    InsufficientCapacity { required: usize, available: usize },

    /// Language name not recognised.
    #[error("Unknown GSM 7-bit language: {name}")]
    UnknownLanguage { name: String },
}

impl Gsm7Error {
    pub(crate) fn unsupported(character: char, position: usize) -> Self {
        Self::UnsupportedCharacter {
            character,
            code: character as u32,
            position,
        }
    }
}

/// Result type for GSM 7-bit operations.
pub type Result<T> = std::result::Result<T, Gsm7Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = Gsm7Error::unsupported('€', 3);
        assert_eq!(
            err.to_string(),
            "Character not supported in GSM 7-bit: '€' (U+20AC) at position 3"
        );

        let err = Gsm7Error::InvalidByte {
            byte: 0x1B,
            position: 5,
        };
        assert_eq!(err.to_string(), "Invalid GSM 7-bit byte: 0x1B at position 5");

        let err = Gsm7Error::InsufficientCapacity {
            required: 7,
            available: 2,
        };
        assert_eq!(
            err.to_string(),
            "Output buffer too small: need 7 bytes, have 2"
        );
    }
}
