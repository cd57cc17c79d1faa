use std::fmt;

use serde::{Deserialize, Serialize};

/// Conductor material.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    #[default]
    Copper,
    /// Aluminum or copper-clad aluminum.
    Aluminum,
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copper => f.write_str("copper"),
            Self::Aluminum => f.write_str("aluminum"),
        }
    }
}

/// Insulation temperature rating column of NEC Table 310.16.
///
/// 60 °C covers types such as TW and UF, 75 °C covers THW, THWN, XHHW and
/// USE, and 90 °C covers THHN, THWN-2, XHHW-2 and similar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TemperatureRating {
    #[serde(rename = "60")]
    C60,
    #[default]
    #[serde(rename = "75")]
    C75,
    #[serde(rename = "90")]
    C90,
}

impl TemperatureRating {
    /// Rated conductor temperature in degrees Celsius.
    #[must_use]
    pub fn celsius(self) -> u16 {
        match self {
            Self::C60 => 60,
            Self::C75 => 75,
            Self::C90 => 90,
        }
    }
}

impl fmt::Display for TemperatureRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°C", self.celsius())
    }
}
