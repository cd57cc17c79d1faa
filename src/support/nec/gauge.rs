use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Conductor size designation.
///
/// Variants are declared smallest to largest, so the derived [`Ord`] follows
/// conductor cross-section: `Gauge::Awg14 < Gauge::Awg1_0 < Gauge::Kcmil250`.
///
/// Gauges display and parse as their trade designation.
///
/// ```
/// use electrical_models::support::nec::Gauge;
///
/// let g: Gauge = "2/0".parse().unwrap();
/// assert_eq!(g, Gauge::Awg2_0);
/// assert_eq!(g.to_string(), "2/0");
/// assert_eq!(g.label(), "2/0 AWG");
///
/// assert_eq!("350 kcmil".parse::<Gauge>().unwrap(), Gauge::Kcmil350);
/// assert!("7".parse::<Gauge>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Gauge {
    Awg14,
    Awg12,
    Awg10,
    Awg8,
    Awg6,
    Awg4,
    Awg3,
    Awg2,
    Awg1,
    Awg1_0,
    Awg2_0,
    Awg3_0,
    Awg4_0,
    Kcmil250,
    Kcmil300,
    Kcmil350,
    Kcmil400,
    Kcmil500,
    Kcmil600,
    Kcmil700,
    Kcmil750,
    Kcmil800,
    Kcmil900,
    Kcmil1000,
    Kcmil1250,
    Kcmil1500,
    Kcmil1750,
    Kcmil2000,
}

/// Error returned when a string does not name a tabulated conductor size.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid wire size: {0:?}")]
pub struct UnknownGauge(pub String);

impl Gauge {
    /// Every gauge, smallest to largest.
    pub const ALL: [Gauge; 28] = [
        Gauge::Awg14,
        Gauge::Awg12,
        Gauge::Awg10,
        Gauge::Awg8,
        Gauge::Awg6,
        Gauge::Awg4,
        Gauge::Awg3,
        Gauge::Awg2,
        Gauge::Awg1,
        Gauge::Awg1_0,
        Gauge::Awg2_0,
        Gauge::Awg3_0,
        Gauge::Awg4_0,
        Gauge::Kcmil250,
        Gauge::Kcmil300,
        Gauge::Kcmil350,
        Gauge::Kcmil400,
        Gauge::Kcmil500,
        Gauge::Kcmil600,
        Gauge::Kcmil700,
        Gauge::Kcmil750,
        Gauge::Kcmil800,
        Gauge::Kcmil900,
        Gauge::Kcmil1000,
        Gauge::Kcmil1250,
        Gauge::Kcmil1500,
        Gauge::Kcmil1750,
        Gauge::Kcmil2000,
    ];

    /// Position of this gauge in [`Gauge::ALL`] and in every gauge-ordered table.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The next larger gauge, or `None` for 2000 kcmil.
    #[must_use]
    pub fn next_larger(self) -> Option<Gauge> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// Trade designation without units, e.g. `"12"`, `"1/0"`, `"500"`.
    #[must_use]
    pub fn designation(self) -> &'static str {
        match self {
            Self::Awg14 => "14",
            Self::Awg12 => "12",
            Self::Awg10 => "10",
            Self::Awg8 => "8",
            Self::Awg6 => "6",
            Self::Awg4 => "4",
            Self::Awg3 => "3",
            Self::Awg2 => "2",
            Self::Awg1 => "1",
            Self::Awg1_0 => "1/0",
            Self::Awg2_0 => "2/0",
            Self::Awg3_0 => "3/0",
            Self::Awg4_0 => "4/0",
            Self::Kcmil250 => "250",
            Self::Kcmil300 => "300",
            Self::Kcmil350 => "350",
            Self::Kcmil400 => "400",
            Self::Kcmil500 => "500",
            Self::Kcmil600 => "600",
            Self::Kcmil700 => "700",
            Self::Kcmil750 => "750",
            Self::Kcmil800 => "800",
            Self::Kcmil900 => "900",
            Self::Kcmil1000 => "1000",
            Self::Kcmil1250 => "1250",
            Self::Kcmil1500 => "1500",
            Self::Kcmil1750 => "1750",
            Self::Kcmil2000 => "2000",
        }
    }

    /// Whether this size is designated in kcmil rather than AWG.
    #[must_use]
    pub fn is_kcmil(self) -> bool {
        self >= Self::Kcmil250
    }

    /// Designation with its unit, e.g. `"12 AWG"` or `"500 kcmil"`.
    #[must_use]
    pub fn label(self) -> String {
        let unit = if self.is_kcmil() { "kcmil" } else { "AWG" };
        format!("{} {unit}", self.designation())
    }
}

impl fmt::Display for Gauge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.designation())
    }
}

impl FromStr for Gauge {
    type Err = UnknownGauge;

    /// Accepts bare designations (`"6"`, `"3/0"`, `"250"`), an optional
    /// `AWG`/`kcmil`/`MCM` suffix, `#` prefixes and `"0"`-style aliases for
    /// aught sizes (`"00"` for 2/0).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();
        let bare = lower.trim_start_matches('#');
        let bare = ["awg", "kcmil", "mcm"]
            .iter()
            .find_map(|suffix| bare.strip_suffix(suffix))
            .unwrap_or(bare)
            .trim();

        let aliased = match bare {
            "0" => "1/0",
            "00" => "2/0",
            "000" => "3/0",
            "0000" => "4/0",
            other => other,
        };

        Self::ALL
            .iter()
            .copied()
            .find(|gauge| gauge.designation() == aliased)
            .ok_or_else(|| UnknownGauge(trimmed.to_owned()))
    }
}

impl From<Gauge> for String {
    fn from(gauge: Gauge) -> Self {
        gauge.designation().to_owned()
    }
}

impl TryFrom<String> for Gauge {
    type Error = UnknownGauge;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
