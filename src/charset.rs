//! Per-language GSM 7-bit character tables.
//!
//! Each [`Charset`] carries four read-only mappings:
//!
//! * reverse: septet to character (the basic or national alphabet)
//! * reverse-escape: extension septet (after `0x1B`) to character
//! * forward: character to septet, derived from reverse
//! * forward-escape: character to extension septet, derived from reverse-escape
//!
//! Forward-escape never contains a character that forward already maps, so an
//! encoder always emits the single-septet form when one exists.
//!
//! Tables are built once on first use and shared by every encoder and decoder.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::language::Language;

/// Escape marker introducing an extension-table septet.
pub const ESCAPE: u8 = 0x1B;

/// Result of a forward lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Code {
    /// Single septet.
    Single(u8),
    /// Escape sequence (0x1B followed by this septet).
    Escape(u8),
}

impl Code {
    /// Number of septets this code occupies.
    pub fn septets(self) -> usize {
        match self {
            Code::Single(_) => 1,
            Code::Escape(_) => 2,
        }
    }
}

/// Immutable table set for one language.
#[derive(Debug)]
pub struct Charset {
    language: Language,
    reverse: [Option<char>; 128],
    reverse_escape: [Option<char>; 128],
    forward: HashMap<char, u8>,
    forward_escape: HashMap<char, u8>,
}

static BASIC: Lazy<Charset> =
    Lazy::new(|| Charset::build(Language::Basic, &[], DEFAULT_EXTENSION));
static SPANISH: Lazy<Charset> =
    Lazy::new(|| Charset::build(Language::Spanish, &[], SPANISH_SINGLE_SHIFT));
static PORTUGUESE: Lazy<Charset> = Lazy::new(|| {
    Charset::build(
        Language::Portuguese,
        PORTUGUESE_ALPHABET,
        PORTUGUESE_SINGLE_SHIFT,
    )
});
static TURKISH: Lazy<Charset> =
    Lazy::new(|| Charset::build(Language::Turkish, TURKISH_ALPHABET, TURKISH_SINGLE_SHIFT));

impl Charset {
    pub fn for_language(language: Language) -> &'static Charset {
        match language {
            Language::Basic => &*BASIC,
            Language::Spanish => &*SPANISH,
            Language::Portuguese => &*PORTUGUESE,
            Language::Turkish => &*TURKISH,
        }
    }

    /// Build a table set from the default alphabet with `overrides` applied on top,
    /// plus the given extension table.
    fn build(language: Language, overrides: &[(u8, char)], extension: &[(u8, char)]) -> Self {
        let mut reverse = [None; 128];
        for &(code, ch) in DEFAULT_ALPHABET.iter().chain(overrides) {
            reverse[code as usize] = Some(ch);
        }

        let mut reverse_escape = [None; 128];
        for &(code, ch) in extension {
            reverse_escape[code as usize] = Some(ch);
        }

        let mut forward = HashMap::with_capacity(128);
        for (code, ch) in reverse.iter().enumerate() {
            if let Some(ch) = ch {
                forward.entry(*ch).or_insert(code as u8);
            }
        }

        let mut forward_escape = HashMap::with_capacity(extension.len());
        for (code, ch) in reverse_escape.iter().enumerate() {
            if let Some(ch) = ch {
                if !forward.contains_key(ch) {
                    forward_escape.entry(*ch).or_insert(code as u8);
                }
            }
        }

        Self {
            language,
            reverse,
            reverse_escape,
            forward,
            forward_escape,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Resolve a character for encoding: basic table first, then the extension table.
    pub fn lookup_char(&self, ch: char) -> Option<Code> {
        if let Some(&code) = self.forward.get(&ch) {
            Some(Code::Single(code))
        } else {
            self.forward_escape.get(&ch).map(|&code| Code::Escape(code))
        }
    }

    pub fn contains(&self, ch: char) -> bool {
        self.lookup_char(ch).is_some()
    }

    /// Character for a plain septet. `None` for the escape marker, unmapped values and
    /// anything above 0x7F.
    pub fn septet(&self, septet: u8) -> Option<char> {
        self.reverse.get(septet as usize).copied().flatten()
    }

    /// Character for the septet following an escape marker.
    pub fn escaped(&self, septet: u8) -> Option<char> {
        self.reverse_escape.get(septet as usize).copied().flatten()
    }

    /// Every character this language can encode, basic table first, in septet order.
    pub fn characters(&self) -> impl Iterator<Item = char> + '_ {
        let escaped = self
            .reverse_escape
            .iter()
            .flatten()
            .filter(|ch| !self.forward.contains_key(*ch));
        self.reverse.iter().flatten().chain(escaped).copied()
    }
}

/// GSM 03.38 default alphabet. 0x1B is the escape marker and has no character.
const DEFAULT_ALPHABET: &[(u8, char)] = &[
    (0x00, '@'),
    (0x01, '£'),
    (0x02, '$'),
    (0x03, '¥'),
    (0x04, 'è'),
    (0x05, 'é'),
    (0x06, 'ù'),
    (0x07, 'ì'),
    (0x08, 'ò'),
    (0x09, 'Ç'),
    (0x0A, '\n'),
    (0x0B, 'Ø'),
    (0x0C, 'ø'),
    (0x0D, '\r'),
    (0x0E, 'Å'),
    (0x0F, 'å'),
    (0x10, 'Δ'),
    (0x11, '_'),
    (0x12, 'Φ'),
    (0x13, 'Γ'),
    (0x14, 'Λ'),
    (0x15, 'Ω'),
    (0x16, 'Π'),
    (0x17, 'Ψ'),
    (0x18, 'Σ'),
    (0x19, 'Θ'),
    (0x1A, 'Ξ'),
    (0x1C, 'Æ'),
    (0x1D, 'æ'),
    (0x1E, 'ß'),
    (0x1F, 'É'),
    (0x20, ' '),
    (0x21, '!'),
    (0x22, '"'),
    (0x23, '#'),
    (0x24, '¤'),
    (0x25, '%'),
    (0x26, '&'),
    (0x27, '\''),
    (0x28, '('),
    (0x29, ')'),
    (0x2A, '*'),
    (0x2B, '+'),
    (0x2C, ','),
    (0x2D, '-'),
    (0x2E, '.'),
    (0x2F, '/'),
    (0x30, '0'),
    (0x31, '1'),
    (0x32, '2'),
    (0x33, '3'),
    (0x34, '4'),
    (0x35, '5'),
    (0x36, '6'),
    (0x37, '7'),
    (0x38, '8'),
    (0x39, '9'),
    (0x3A, ':'),
    (0x3B, ';'),
    (0x3C, '<'),
    (0x3D, '='),
    (0x3E, '>'),
    (0x3F, '?'),
    (0x40, '¡'),
    (0x41, 'A'),
    (0x42, 'B'),
    (0x43, 'C'),
    (0x44, 'D'),
    (0x45, 'E'),
    (0x46, 'F'),
    (0x47, 'G'),
    (0x48, 'H'),
    (0x49, 'I'),
    (0x4A, 'J'),
    (0x4B, 'K'),
    (0x4C, 'L'),
    (0x4D, 'M'),
    (0x4E, 'N'),
    (0x4F, 'O'),
    (0x50, 'P'),
    (0x51, 'Q'),
    (0x52, 'R'),
    (0x53, 'S'),
    (0x54, 'T'),
    (0x55, 'U'),
    (0x56, 'V'),
    (0x57, 'W'),
    (0x58, 'X'),
    (0x59, 'Y'),
    (0x5A, 'Z'),
    (0x5B, 'Ä'),
    (0x5C, 'Ö'),
    (0x5D, 'Ñ'),
    (0x5E, 'Ü'),
    (0x5F, '§'),
    (0x60, '¿'),
    (0x61, 'a'),
    (0x62, 'b'),
    (0x63, 'c'),
    (0x64, 'd'),
    (0x65, 'e'),
    (0x66, 'f'),
    (0x67, 'g'),
    (0x68, 'h'),
    (0x69, 'i'),
    (0x6A, 'j'),
    (0x6B, 'k'),
    (0x6C, 'l'),
    (0x6D, 'm'),
    (0x6E, 'n'),
    (0x6F, 'o'),
    (0x70, 'p'),
    (0x71, 'q'),
    (0x72, 'r'),
    (0x73, 's'),
    (0x74, 't'),
    (0x75, 'u'),
    (0x76, 'v'),
    (0x77, 'w'),
    (0x78, 'x'),
    (0x79, 'y'),
    (0x7A, 'z'),
    (0x7B, 'ä'),
    (0x7C, 'ö'),
    (0x7D, 'ñ'),
    (0x7E, 'ü'),
    (0x7F, 'à'),
];

/// Default extension table (characters prefixed with 0x1B).
const DEFAULT_EXTENSION: &[(u8, char)] = &[
    (0x0A, '\x0C'), // Form feed
    (0x14, '^'),
    (0x28, '{'),
    (0x29, '}'),
    (0x2F, '\\'),
    (0x3C, '['),
    (0x3D, '~'),
    (0x3E, ']'),
    (0x40, '|'),
    (0x65, '€'),
];

const SPANISH_SINGLE_SHIFT: &[(u8, char)] = &[
    (0x09, 'ç'),
    (0x0A, '\x0C'),
    (0x14, '^'),
    (0x28, '{'),
    (0x29, '}'),
    (0x2F, '\\'),
    (0x3C, '['),
    (0x3D, '~'),
    (0x3E, ']'),
    (0x40, '|'),
    (0x41, 'Á'),
    (0x49, 'Í'),
    (0x4F, 'Ó'),
    (0x55, 'Ú'),
    (0x61, 'á'),
    (0x65, '€'),
    (0x69, 'í'),
    (0x6F, 'ó'),
    (0x75, 'ú'),
];

/// Portuguese national alphabet, as differences from the default alphabet.
///
/// 0x04-0x08 and 0x5B-0x5C keep their default characters; ê ú í ó Ã Õ are only
/// reachable through the single shift table.
const PORTUGUESE_ALPHABET: &[(u8, char)] = &[
    (0x09, 'ç'),
    (0x0B, 'Ô'),
    (0x0C, 'ô'),
    (0x0E, 'Á'),
    (0x0F, 'á'),
    (0x12, 'ª'),
    (0x13, 'Ç'),
    (0x14, 'À'),
    (0x15, '∞'),
    (0x16, '^'),
    (0x17, '\\'),
    (0x18, '€'),
    (0x19, 'Ó'),
    (0x1A, '|'),
    (0x1C, 'Â'),
    (0x1D, 'â'),
    (0x1E, 'Ê'),
    (0x40, 'Í'),
    (0x5D, 'Ú'),
    (0x60, '~'),
    (0x7B, 'ã'),
    (0x7C, 'õ'),
    (0x7D, '`'),
];

const PORTUGUESE_SINGLE_SHIFT: &[(u8, char)] = &[
    (0x05, 'ê'),
    (0x09, 'ç'),
    (0x0A, '\x0C'),
    (0x0B, 'Ô'),
    (0x0C, 'ô'),
    (0x0E, 'Á'),
    (0x0F, 'á'),
    (0x12, 'Φ'),
    (0x13, 'Γ'),
    (0x14, '^'),
    (0x15, 'Ω'),
    (0x16, 'Π'),
    (0x17, 'Ψ'),
    (0x18, 'Σ'),
    (0x19, 'Θ'),
    (0x1F, 'Ê'),
    (0x28, '{'),
    (0x29, '}'),
    (0x2F, '\\'),
    (0x3C, '['),
    (0x3D, '~'),
    (0x3E, ']'),
    (0x40, '|'),
    (0x41, 'À'),
    (0x49, 'Í'),
    (0x4F, 'Ó'),
    (0x55, 'Ú'),
    (0x5B, 'Ã'),
    (0x5C, 'Õ'),
    (0x61, 'Â'),
    (0x65, '€'),
    (0x69, 'í'),
    (0x6F, 'ó'),
    (0x75, 'ú'),
    (0x7B, 'ã'),
    (0x7C, 'õ'),
    (0x7F, 'â'),
];

/// Turkish national alphabet, as differences from the default alphabet.
const TURKISH_ALPHABET: &[(u8, char)] = &[
    (0x04, '€'),
    (0x07, 'ı'),
    (0x0B, 'Ğ'),
    (0x0C, 'ğ'),
    (0x1C, 'Ş'),
    (0x1D, 'ş'),
    (0x40, 'İ'),
    (0x60, 'ç'),
];

const TURKISH_SINGLE_SHIFT: &[(u8, char)] = &[
    (0x0A, '\x0C'),
    (0x14, '^'),
    (0x28, '{'),
    (0x29, '}'),
    (0x2F, '\\'),
    (0x3C, '['),
    (0x3D, '~'),
    (0x3E, ']'),
    (0x40, '|'),
    (0x47, 'Ğ'),
    (0x49, 'İ'),
    (0x53, 'Ş'),
    (0x63, 'ç'),
    (0x65, '€'),
    (0x67, 'ğ'),
    (0x69, 'ı'),
    (0x73, 'ş'),
];
