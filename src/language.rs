use std::fmt;
use std::str::FromStr;

use crate::charset::Charset;
use crate::error::Gsm7Error;

/// National language variant selecting the active table set.
///
/// `Basic` is the GSM 03.38 default alphabet with the default extension table.
/// The other variants swap in the national tables of 3GPP TS 23.038.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    Basic,
    Spanish,
    Portuguese,
    Turkish,
}

impl Language {
    /// Every supported variant.
    pub const ALL: [Language; 4] = [
        Language::Basic,
        Language::Spanish,
        Language::Portuguese,
        Language::Turkish,
    ];

    /// The immutable table set for this language.
    pub fn charset(self) -> &'static Charset {
        Charset::for_language(self)
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::Basic => "basic",
            Language::Spanish => "spanish",
            Language::Portuguese => "portuguese",
            Language::Turkish => "turkish",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = Gsm7Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "basic" | "default" | "gsm" => Ok(Language::Basic),
            "spanish" | "es" => Ok(Language::Spanish),
            "portuguese" | "pt" => Ok(Language::Portuguese),
            "turkish" | "tr" => Ok(Language::Turkish),
            _ => Err(Gsm7Error::UnknownLanguage {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        for lang in Language::ALL {
            assert_eq!(lang.to_string().parse::<Language>().unwrap(), lang);
        }
        assert_eq!("ES".parse::<Language>().unwrap(), Language::Spanish);
        assert_eq!("default".parse::<Language>().unwrap(), Language::Basic);
    }

    #[test]
    fn test_unknown_language() {
        let err = "klingon".parse::<Language>().unwrap_err();
        assert_eq!(
            err,
            Gsm7Error::UnknownLanguage {
                name: "klingon".to_string()
            }
        );
    }

    #[test]
    fn test_default_is_basic() {
        assert_eq!(Language::default(), Language::Basic);
    }
}
