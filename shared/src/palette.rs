//! 线路颜色调色板
//!
//! The closed set of colors a line may take. Values travel over the wire as
//! their `HUE_SHADE` names; anything outside the set is rejected with
//! [`UnknownColor`] instead of being passed through.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown palette color: {0:?}")]
pub struct UnknownColor(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Palette {
    Red400,
    Red600,
    Orange400,
    Orange600,
    Yellow400,
    Yellow600,
    Green400,
    Green600,
    Teal400,
    Teal600,
    Blue400,
    Blue600,
    Indigo400,
    Indigo600,
    Purple400,
    Purple600,
}

impl Palette {
    pub const ALL: [Palette; 16] = [
        Palette::Red400,
        Palette::Red600,
        Palette::Orange400,
        Palette::Orange600,
        Palette::Yellow400,
        Palette::Yellow600,
        Palette::Green400,
        Palette::Green600,
        Palette::Teal400,
        Palette::Teal600,
        Palette::Blue400,
        Palette::Blue600,
        Palette::Indigo400,
        Palette::Indigo600,
        Palette::Purple400,
        Palette::Purple600,
    ];

    /// Wire name, e.g. `RED_400`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Palette::Red400 => "RED_400",
            Palette::Red600 => "RED_600",
            Palette::Orange400 => "ORANGE_400",
            Palette::Orange600 => "ORANGE_600",
            Palette::Yellow400 => "YELLOW_400",
            Palette::Yellow600 => "YELLOW_600",
            Palette::Green400 => "GREEN_400",
            Palette::Green600 => "GREEN_600",
            Palette::Teal400 => "TEAL_400",
            Palette::Teal600 => "TEAL_600",
            Palette::Blue400 => "BLUE_400",
            Palette::Blue600 => "BLUE_600",
            Palette::Indigo400 => "INDIGO_400",
            Palette::Indigo600 => "INDIGO_600",
            Palette::Purple400 => "PURPLE_400",
            Palette::Purple600 => "PURPLE_600",
        }
    }

    /// CSS color used when rendering the line.
    pub const fn hex(&self) -> &'static str {
        match self {
            Palette::Red400 => "#f87171",
            Palette::Red600 => "#dc2626",
            Palette::Orange400 => "#fb923c",
            Palette::Orange600 => "#ea580c",
            Palette::Yellow400 => "#facc15",
            Palette::Yellow600 => "#ca8a04",
            Palette::Green400 => "#4ade80",
            Palette::Green600 => "#16a34a",
            Palette::Teal400 => "#2dd4bf",
            Palette::Teal600 => "#0d9488",
            Palette::Blue400 => "#60a5fa",
            Palette::Blue600 => "#2563eb",
            Palette::Indigo400 => "#818cf8",
            Palette::Indigo600 => "#4f46e5",
            Palette::Purple400 => "#c084fc",
            Palette::Purple600 => "#9333ea",
        }
    }
}

impl FromStr for Palette {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Palette::ALL
            .iter()
            .copied()
            .find(|color| color.as_str() == s)
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}

impl TryFrom<&str> for Palette {
    type Error = UnknownColor;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Palette {
    type Error = UnknownColor;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Palette> for String {
    fn from(color: Palette) -> Self {
        color.as_str().to_string()
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_color_parses_back_from_its_name() {
        for color in Palette::ALL {
            assert_eq!(color.as_str().parse::<Palette>(), Ok(color));
        }
    }

    #[test]
    fn out_of_range_value_is_an_explicit_error() {
        assert_eq!(
            Palette::try_from("#ff0000"),
            Err(UnknownColor("#ff0000".to_string()))
        );
        assert!(Palette::try_from("").is_err());
        assert!(Palette::try_from("red_400").is_err());
    }

    #[test]
    fn serde_rejects_unknown_color() {
        assert_eq!(
            serde_json::to_string(&Palette::Teal600).unwrap(),
            "\"TEAL_600\""
        );
        assert!(serde_json::from_str::<Palette>("\"MAGENTA_500\"").is_err());
    }
}
