use serde::{Deserialize, Serialize};

use crate::core::errors::{Error, Result};
use crate::models::color::Color;

/// An ordered collection of reference colors with index-aligned names,
/// used as a picker reference when building themes. Immutable after
/// decode except by wholesale replacement.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Palette {
    pub colors: Vec<Color>,
    pub names: Vec<String>,
}

impl Palette {
    /// Checks the two parallel sequences line up. Codec calls this after
    /// decode; anything building a palette by hand can call it too.
    pub fn validate(&self) -> Result<()> {
        if self.colors.len() != self.names.len() {
            return Err(Error::MalformedPalette(format!(
                "colors has {} entries but names has {}",
                self.colors.len(),
                self.names.len()
            )));
        }
        Ok(())
    }

    /// First color whose paired name matches. Lookup is by name, not
    /// position, so palettes tolerate reordering.
    pub fn lookup(&self, name: &str) -> Option<&Color> {
        self.names
            .iter()
            .zip(self.colors.iter())
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, color)| color)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// `(name, color)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Color)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.colors.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_first_match() {
        let palette = Palette {
            colors: vec![Color::new(1.0, 0.0, 0.0), Color::new(0.0, 1.0, 0.0)],
            names: vec!["Red".to_string(), "Red".to_string()],
        };
        assert_eq!(palette.lookup("Red"), Some(&Color::new(1.0, 0.0, 0.0)));
        assert_eq!(palette.lookup("Blue"), None);
    }

    #[test]
    fn validate_rejects_length_mismatch() {
        let palette = Palette {
            colors: vec![Color::new(1.0, 0.0, 0.0)],
            names: vec![],
        };
        assert!(matches!(
            palette.validate(),
            Err(Error::MalformedPalette(_))
        ));
    }
}
