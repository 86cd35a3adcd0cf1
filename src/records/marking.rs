//! Entity marking text

use std::fmt;

use crate::dis_record;

/// Number of characters in a marking
pub const MARKING_LEN: usize = 11;

/// ASCII character set code
pub const CHARACTER_SET_ASCII: u8 = 1;

dis_record! {
    /// Character set plus 11 zero-padded characters
    pub struct Marking {
        /// Character set code
        character_set: u8,
        /// Characters, zero-padded on the right
        characters: [u8; 11],
    }
}

impl Marking {
    /// Build an ASCII marking, truncating `text` to 11 bytes
    ///
    /// Non-ASCII characters are replaced by `?`.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut characters = [0u8; MARKING_LEN];
        for (slot, c) in characters.iter_mut().zip(text.chars()) {
            *slot = if c.is_ascii() { c as u8 } else { b'?' };
        }
        Self {
            character_set: CHARACTER_SET_ASCII,
            characters,
        }
    }

    /// Characters up to the first NUL, lossily decoded
    #[must_use]
    pub fn text(&self) -> String {
        let end = self
            .characters
            .iter()
            .position(|&c| c == 0)
            .unwrap_or(MARKING_LEN);
        String::from_utf8_lossy(&self.characters[..end]).into_owned()
    }
}

impl From<&str> for Marking {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Marking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::encode;

    #[test]
    fn test_marking_truncates_and_pads() {
        let marking = Marking::new("ALPHA-COMPANY-1");
        assert_eq!(marking.text(), "ALPHA-COMPA");

        let short = Marking::from("T72");
        let bytes = encode(&short).unwrap();
        assert_eq!(bytes.len(), 12);
        assert_eq!(&bytes[..5], &[1, b'T', b'7', b'2', 0]);
        assert_eq!(short.to_string(), "T72");
    }

    #[test]
    fn test_non_ascii_replaced() {
        assert_eq!(Marking::new("Zürich").text(), "Z?rich");
    }
}
