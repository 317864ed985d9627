//! Colours and the session palette.
//!
//! A `Colour` is a plain RGB triple. The `Palette` is the ordered set of
//! colours available to a game session; it is passed explicitly wherever
//! random colours are drawn or colour names are rendered.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An RGB colour of a leaf block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Colour(pub u8, pub u8, pub u8);

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.0, self.1, self.2)
    }
}

pub const PACIFIC_POINT: Colour = Colour(1, 128, 181);
pub const REAL_RED: Colour = Colour(199, 44, 58);
pub const OLD_OLIVE: Colour = Colour(138, 151, 71);
pub const DAFFODIL_DELIGHT: Colour = Colour(255, 211, 92);

/// A palette entry: a colour together with its human-readable name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedColour {
    pub name: String,
    pub rgb: Colour,
}

/// The ordered set of colours used by one game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    entries: Vec<NamedColour>,
}

impl Palette {
    pub fn new(entries: Vec<NamedColour>) -> Self {
        Palette { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the colours in palette order.
    pub fn colours(&self) -> Vec<Colour> {
        self.entries.iter().map(|e| e.rgb).collect()
    }

    pub fn entries(&self) -> &[NamedColour] {
        &self.entries
    }

    /// Looks up the palette name of a colour.
    pub fn name_of(&self, colour: Colour) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.rgb == colour)
            .map(|e| e.name.as_str())
    }

    /// Returns the palette name of a colour, or its `rgb(..)` form if the
    /// colour is not in the palette.
    pub fn colour_name(&self, colour: Colour) -> String {
        match self.name_of(colour) {
            Some(name) => name.to_string(),
            None => colour.to_string(),
        }
    }

    /// Returns the first colour that appears more than once, if any.
    pub fn first_duplicate(&self) -> Option<Colour> {
        self.entries.iter().enumerate().find_map(|(i, e)| {
            self.entries[..i]
                .iter()
                .any(|prev| prev.rgb == e.rgb)
                .then_some(e.rgb)
        })
    }
}

impl Default for Palette {
    fn default() -> Self {
        let named = |name: &str, rgb| NamedColour { name: name.to_string(), rgb };
        Palette::new(vec![
            named("Pacific Point", PACIFIC_POINT),
            named("Real Red", REAL_RED),
            named("Old Olive", OLD_OLIVE),
            named("Daffodil Delight", DAFFODIL_DELIGHT),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_has_four_distinct_colours() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 4);
        assert_eq!(palette.first_duplicate(), None);
    }

    #[test]
    fn colour_name_falls_back_to_rgb() {
        let palette = Palette::default();
        assert_eq!(palette.colour_name(REAL_RED), "Real Red");
        assert_eq!(palette.colour_name(Colour(1, 2, 3)), "rgb(1, 2, 3)");
    }

    #[test]
    fn first_duplicate_finds_repeated_colour() {
        let palette = Palette::new(vec![
            NamedColour { name: "a".into(), rgb: REAL_RED },
            NamedColour { name: "b".into(), rgb: OLD_OLIVE },
            NamedColour { name: "c".into(), rgb: REAL_RED },
        ]);
        assert_eq!(palette.first_duplicate(), Some(REAL_RED));
    }

    #[test]
    fn palette_deserializes_from_json_list() {
        let json = r#"[{"name": "Ink", "rgb": [0, 0, 0]}]"#;
        let palette: Palette = serde_json::from_str(json).unwrap();
        assert_eq!(palette.name_of(Colour(0, 0, 0)), Some("Ink"));
    }
}
