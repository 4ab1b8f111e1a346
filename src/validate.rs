//! Diagnostic scans that report what the active alphabet cannot represent.
//!
//! Nothing here fails: an empty result means the input is fully supported. The
//! scans resolve through the same [`Charset`](crate::charset::Charset) lookups as
//! the encoder and decoder, so for unpacked data `validate_wire_bytes(b, lang)` is
//! empty exactly when decoding `b` succeeds.

use crate::charset::ESCAPE;
use crate::language::Language;

/// Characters in `text` that have no GSM 7-bit mapping for `language`, in input order.
///
/// ```rust
/// use gsm7::{validate_text, Language};
///
/// assert_eq!(validate_text("Olá ✓", Language::Basic), vec!['á', '✓']);
/// assert!(validate_text("Olá", Language::Spanish).is_empty());
/// ```
pub fn validate_text(text: &str, language: Language) -> Vec<char> {
    let charset = language.charset();
    text.chars().filter(|&ch| !charset.contains(ch)).collect()
}

/// Bytes in an unpacked septet buffer that `language` cannot decode.
///
/// An escape marker and the byte after it are checked as a pair and reported
/// together. A lone escape marker at the end of the buffer is reported by itself.
pub fn validate_wire_bytes(data: &[u8], language: Language) -> Vec<u8> {
    let charset = language.charset();
    let mut invalid = Vec::new();

    let mut i = 0;
    while i < data.len() {
        let b = data[i];
        if b == ESCAPE {
            i += 1;
            match data.get(i) {
                None => invalid.push(b),
                Some(&e) if charset.escaped(e).is_none() => {
                    invalid.push(b);
                    invalid.push(e);
                }
                Some(_) => {}
            }
        } else if charset.septet(b).is_none() {
            invalid.push(b);
        }
        i += 1;
    }

    invalid
}

/// Check if a string can be encoded in GSM 7-bit for `language`.
pub fn is_gsm7_compatible(text: &str, language: Language) -> bool {
    let charset = language.charset();
    text.chars().all(|ch| charset.contains(ch))
}
