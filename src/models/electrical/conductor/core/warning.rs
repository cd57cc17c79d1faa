use std::fmt;

use serde::Serialize;
use uom::si::{
    electric_current::ampere,
    f64::{ElectricCurrent, Ratio},
    ratio,
};

use crate::support::nec::{Gauge, Material};

/// Smallest aluminum conductor considered practical for building wiring.
pub const MIN_PRACTICAL_ALUMINUM: Gauge = Gauge::Awg8;

/// Advisory conditions attached to a conductor selection.
///
/// Warnings never prevent a result. They flag conditions an installer
/// should review.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// The run length was zero, so voltage drop was not evaluated.
    AmpacityOnly,

    /// Upsizing stopped before voltage drop came within the limit.
    VoltageDropLimitNotMet { achieved: Ratio, max: Ratio },

    /// Aluminum smaller than [`MIN_PRACTICAL_ALUMINUM`] was selected.
    AluminumBelowMinimum { gauge: Gauge },

    /// Voltage drop above the 3% branch circuit recommendation.
    ExceedsBranchRecommendation { percent: Ratio },

    /// Voltage drop above the 5% combined feeder and branch recommendation.
    ExceedsCombinedRecommendation { percent: Ratio },

    /// The selected conductor's 240.4(D) overcurrent limit is below the load.
    SmallConductorLimit {
        gauge: Gauge,
        material: Material,
        limit: ElectricCurrent,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AmpacityOnly => f.write_str(
                "distance is zero: conductor sized for ampacity only, voltage drop not evaluated",
            ),
            Self::VoltageDropLimitNotMet { achieved, max } => write!(
                f,
                "voltage drop of {:.2}% still exceeds the {:.2}% limit after upsizing; \
                 consider a higher voltage, parallel conductors, or a shorter run",
                achieved.get::<ratio::percent>(),
                max.get::<ratio::percent>()
            ),
            Self::AluminumBelowMinimum { gauge } => write!(
                f,
                "{} aluminum is smaller than the practical minimum of {}; \
                 consider copper or a larger aluminum conductor",
                gauge.label(),
                MIN_PRACTICAL_ALUMINUM.label()
            ),
            Self::ExceedsBranchRecommendation { percent: pct } => write!(
                f,
                "voltage drop of {:.2}% exceeds the 3% recommended for branch circuits",
                pct.get::<ratio::percent>()
            ),
            Self::ExceedsCombinedRecommendation { percent: pct } => write!(
                f,
                "voltage drop of {:.2}% exceeds the 5% recommended for feeders and \
                 branch circuits combined",
                pct.get::<ratio::percent>()
            ),
            Self::SmallConductorLimit {
                gauge,
                material,
                limit,
            } => write!(
                f,
                "{} {material} is limited to {} A overcurrent protection (NEC 240.4(D))",
                gauge.label(),
                limit.get::<ampere>()
            ),
        }
    }
}
