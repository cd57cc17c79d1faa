use uom::si::{electric_current::ampere, f64::ElectricCurrent};

use super::{Gauge, Material};

/// One row of NEC Table 250.122.
///
/// Circuits protected at or below `max_amps` need at least these equipment
/// grounding conductors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroundingEntry {
    pub max_amps: u16,
    pub copper: Gauge,
    pub aluminum: Gauge,
}

impl GroundingEntry {
    const fn new(max_amps: u16, copper: Gauge, aluminum: Gauge) -> Self {
        Self {
            max_amps,
            copper,
            aluminum,
        }
    }

    /// Grounding conductor for the given material.
    #[must_use]
    pub fn for_material(&self, material: Material) -> Gauge {
        match material {
            Material::Copper => self.copper,
            Material::Aluminum => self.aluminum,
        }
    }
}

/// NEC Table 250.122: minimum size equipment grounding conductors, by rating
/// of the overcurrent device ahead of the circuit.
///
/// The table calls for 1200 kcmil aluminum at 5000 A and 6000 A. That is not
/// a Table 310.16 size, so the next larger tabulated size, 1250 kcmil, is used.
pub static GROUNDING_TABLE: [GroundingEntry; 19] = [
    GroundingEntry::new(15, Gauge::Awg14, Gauge::Awg12),
    GroundingEntry::new(20, Gauge::Awg12, Gauge::Awg10),
    GroundingEntry::new(60, Gauge::Awg10, Gauge::Awg8),
    GroundingEntry::new(100, Gauge::Awg8, Gauge::Awg6),
    GroundingEntry::new(200, Gauge::Awg6, Gauge::Awg4),
    GroundingEntry::new(300, Gauge::Awg4, Gauge::Awg2),
    GroundingEntry::new(400, Gauge::Awg3, Gauge::Awg1),
    GroundingEntry::new(500, Gauge::Awg2, Gauge::Awg1_0),
    GroundingEntry::new(600, Gauge::Awg1, Gauge::Awg2_0),
    GroundingEntry::new(800, Gauge::Awg1_0, Gauge::Awg3_0),
    GroundingEntry::new(1000, Gauge::Awg2_0, Gauge::Awg4_0),
    GroundingEntry::new(1200, Gauge::Awg3_0, Gauge::Kcmil250),
    GroundingEntry::new(1600, Gauge::Awg4_0, Gauge::Kcmil350),
    GroundingEntry::new(2000, Gauge::Kcmil250, Gauge::Kcmil400),
    GroundingEntry::new(2500, Gauge::Kcmil350, Gauge::Kcmil600),
    GroundingEntry::new(3000, Gauge::Kcmil400, Gauge::Kcmil600),
    GroundingEntry::new(4000, Gauge::Kcmil500, Gauge::Kcmil750),
    GroundingEntry::new(5000, Gauge::Kcmil700, Gauge::Kcmil1250),
    GroundingEntry::new(6000, Gauge::Kcmil800, Gauge::Kcmil1250),
];

/// Minimum equipment grounding conductor for a circuit rating.
///
/// Picks the first row whose threshold is at or above `amps`. Ratings beyond
/// the last row fall back to the largest tabulated conductor.
#[must_use]
pub fn grounding_conductor(amps: ElectricCurrent, material: Material) -> Gauge {
    let amps = amps.get::<ampere>();
    let entry = GROUNDING_TABLE
        .iter()
        .find(|entry| amps <= f64::from(entry.max_amps))
        .unwrap_or_else(|| {
            let largest = &GROUNDING_TABLE[GROUNDING_TABLE.len() - 1];
            tracing::warn!(
                amps,
                max_amps = largest.max_amps,
                "circuit rating exceeds grounding table, using largest entry"
            );
            largest
        });
    entry.for_material(material)
}
