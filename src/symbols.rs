//! Two-letter alphabet used for printing symbol sequences.
//!
//! 'b' (blue) is the low symbol and codes as bit 0, 'g' (green) is the high
//! symbol and codes as bit 1.

use crate::error::{Error, Result};

pub const LOW: char = 'b';
pub const HIGH: char = 'g';

/// Mostly-blue sample with a few greens up front
pub const SAMPLE: &str = "ggggbbgbbbbbbgbbbgbbbbbbbbbbbbgbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";

pub fn to_char(bit: u8) -> char {
    match bit {
        0 => LOW,
        _ => HIGH,
    }
}

pub fn parse(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .map(|c| match c {
            LOW => Ok(0),
            HIGH => Ok(1),
            _ => Err(Error::InvalidSymbol(c)),
        })
        .collect()
}

pub fn render(bits: &[u8]) -> String {
    bits.iter().map(|&bit| to_char(bit)).collect()
}

#[cfg(test)]
mod tests {
    use super::{parse, render, SAMPLE};
    use crate::error::Error;

    #[test]
    fn parse_and_render() {
        assert_eq!(parse("bbgb").unwrap(), [0, 0, 1, 0]);
        assert_eq!(render(&[1, 0, 1]), "gbg");
        assert_eq!(render(&parse(SAMPLE).unwrap()), SAMPLE);
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn sample_shape() {
        let bits = parse(SAMPLE).unwrap();
        assert_eq!(bits.len(), 64);
        assert_eq!(bits.iter().filter(|&&bit| bit == 1).count(), 8);
    }

    #[test]
    fn rejects_other_letters() {
        assert!(matches!(parse("bgx"), Err(Error::InvalidSymbol('x'))));
    }
}
