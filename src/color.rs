//! Parsing of the free-form colour strings carried by players and entities.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;

/// A colour string in one of the two shapes the game understands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorSpec {
    /// CSS-style name, stored lowercased.
    Named(String),
    /// Hex code; an alpha channel, if present, is dropped.
    Rgb { r: u8, g: u8, b: u8 },
}

impl FromStr for ColorSpec {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ColorError::Empty);
        }
        // the stored string is used verbatim, padding included
        if s.trim() != s {
            return Err(ColorError::SurroundingWhitespace(s.to_string()));
        }
        if let Some(digits) = s.strip_prefix('#') {
            return parse_hex(digits).ok_or_else(|| ColorError::MalformedHex(s.to_string()));
        }
        if s.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(ColorSpec::Named(s.to_ascii_lowercase()))
        } else {
            Err(ColorError::MalformedName(s.to_string()))
        }
    }
}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorSpec::Named(name) => write!(f, "{name}"),
            ColorSpec::Rgb { r, g, b } => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

fn parse_hex(digits: &str) -> Option<ColorSpec> {
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).ok();
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    match digits.len() {
        // #rgb / #rgba: each nibble doubles up (f -> ff)
        3 | 4 => Some(ColorSpec::Rgb {
            r: nibble(0)? * 17,
            g: nibble(1)? * 17,
            b: nibble(2)? * 17,
        }),
        6 | 8 => Some(ColorSpec::Rgb {
            r: byte(0)?,
            g: byte(2)?,
            b: byte(4)?,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_is_lowercased() {
        assert_eq!("Blue".parse::<ColorSpec>(), Ok(ColorSpec::Named("blue".to_string())));
        assert_eq!(
            "RebeccaPurple".parse::<ColorSpec>(),
            Ok(ColorSpec::Named("rebeccapurple".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_padding() {
        assert_eq!(
            " blue ".parse::<ColorSpec>(),
            Err(ColorError::SurroundingWhitespace(" blue ".to_string()))
        );
        assert_eq!(
            "#abc\n".parse::<ColorSpec>(),
            Err(ColorError::SurroundingWhitespace("#abc\n".to_string()))
        );
    }

    #[test]
    fn test_parse_short_hex_expands() {
        assert_eq!("#f80".parse::<ColorSpec>(), Ok(ColorSpec::Rgb { r: 255, g: 136, b: 0 }));
        assert_eq!("#f80c".parse::<ColorSpec>(), Ok(ColorSpec::Rgb { r: 255, g: 136, b: 0 }));
    }

    #[test]
    fn test_parse_long_hex_drops_alpha() {
        assert_eq!("#1a2B3c".parse::<ColorSpec>(), Ok(ColorSpec::Rgb { r: 0x1a, g: 0x2b, b: 0x3c }));
        assert_eq!("#1a2b3c80".parse::<ColorSpec>(), Ok(ColorSpec::Rgb { r: 0x1a, g: 0x2b, b: 0x3c }));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!("".parse::<ColorSpec>(), Err(ColorError::Empty));
        assert_eq!("   ".parse::<ColorSpec>(), Err(ColorError::Empty));
        assert_eq!(
            "#12345".parse::<ColorSpec>(),
            Err(ColorError::MalformedHex("#12345".to_string()))
        );
        assert_eq!(
            "#ggg".parse::<ColorSpec>(),
            Err(ColorError::MalformedHex("#ggg".to_string()))
        );
        assert_eq!(
            "dark blue".parse::<ColorSpec>(),
            Err(ColorError::MalformedName("dark blue".to_string()))
        );
        assert_eq!(
            "rgb(1,2,3)".parse::<ColorSpec>(),
            Err(ColorError::MalformedName("rgb(1,2,3)".to_string()))
        );
    }

    #[test]
    fn test_display_normalises_hex() {
        let spec: ColorSpec = "#ABC".parse().unwrap();
        assert_eq!(spec.to_string(), "#aabbcc");
    }
}
