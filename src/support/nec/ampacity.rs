use uom::si::{electric_current::ampere, f64::ElectricCurrent};

use super::{Gauge, Material, TemperatureRating};

/// Allowable ampacities at the three insulation temperature ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ampacities {
    pub c60: u16,
    pub c75: u16,
    pub c90: u16,
}

impl Ampacities {
    const fn new(c60: u16, c75: u16, c90: u16) -> Self {
        Self { c60, c75, c90 }
    }

    /// Ampacity in amperes for the given rating column.
    #[must_use]
    pub fn at(&self, rating: TemperatureRating) -> u16 {
        match rating {
            TemperatureRating::C60 => self.c60,
            TemperatureRating::C75 => self.c75,
            TemperatureRating::C90 => self.c90,
        }
    }
}

/// One row of NEC Table 310.16.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmpacityEntry {
    pub gauge: Gauge,
    pub copper: Ampacities,
    /// `None` where the table lists no aluminum rating (14 AWG).
    pub aluminum: Option<Ampacities>,
}

impl AmpacityEntry {
    const fn new(gauge: Gauge, copper: Ampacities, aluminum: Option<Ampacities>) -> Self {
        Self {
            gauge,
            copper,
            aluminum,
        }
    }

    /// Ampacities for the given material, if tabulated.
    #[must_use]
    pub fn for_material(&self, material: Material) -> Option<Ampacities> {
        match material {
            Material::Copper => Some(self.copper),
            Material::Aluminum => self.aluminum,
        }
    }
}

const fn row(gauge: Gauge, cu: [u16; 3], al: [u16; 3]) -> AmpacityEntry {
    AmpacityEntry::new(
        gauge,
        Ampacities::new(cu[0], cu[1], cu[2]),
        Some(Ampacities::new(al[0], al[1], al[2])),
    )
}

/// NEC Table 310.16: allowable ampacities of insulated conductors rated up to
/// 2000 volts, not more than three current-carrying conductors in raceway,
/// cable, or earth, based on 30 °C ambient.
///
/// Columns are `[60 °C, 75 °C, 90 °C]` for copper, then aluminum.
/// Rows are in [`Gauge::ALL`] order.
pub static AMPACITY_TABLE: [AmpacityEntry; 28] = [
    AmpacityEntry::new(Gauge::Awg14, Ampacities::new(15, 20, 25), None),
    row(Gauge::Awg12, [20, 25, 30], [15, 20, 25]),
    row(Gauge::Awg10, [30, 35, 40], [25, 30, 35]),
    row(Gauge::Awg8, [40, 50, 55], [35, 40, 45]),
    row(Gauge::Awg6, [55, 65, 75], [40, 50, 55]),
    row(Gauge::Awg4, [70, 85, 95], [55, 65, 75]),
    row(Gauge::Awg3, [85, 100, 115], [65, 75, 85]),
    row(Gauge::Awg2, [95, 115, 130], [75, 90, 100]),
    row(Gauge::Awg1, [110, 130, 145], [85, 100, 115]),
    row(Gauge::Awg1_0, [125, 150, 170], [100, 120, 135]),
    row(Gauge::Awg2_0, [145, 175, 195], [115, 135, 150]),
    row(Gauge::Awg3_0, [165, 200, 225], [130, 155, 175]),
    row(Gauge::Awg4_0, [195, 230, 260], [150, 180, 205]),
    row(Gauge::Kcmil250, [215, 255, 290], [170, 205, 230]),
    row(Gauge::Kcmil300, [240, 285, 320], [195, 230, 260]),
    row(Gauge::Kcmil350, [260, 310, 350], [210, 250, 280]),
    row(Gauge::Kcmil400, [280, 335, 380], [225, 270, 305]),
    row(Gauge::Kcmil500, [320, 380, 430], [260, 310, 350]),
    row(Gauge::Kcmil600, [350, 420, 475], [285, 340, 385]),
    row(Gauge::Kcmil700, [385, 460, 520], [310, 375, 420]),
    row(Gauge::Kcmil750, [400, 475, 535], [320, 385, 435]),
    row(Gauge::Kcmil800, [410, 490, 555], [330, 395, 445]),
    row(Gauge::Kcmil900, [435, 520, 585], [355, 425, 480]),
    row(Gauge::Kcmil1000, [455, 545, 615], [375, 445, 500]),
    row(Gauge::Kcmil1250, [495, 590, 665], [405, 485, 545]),
    row(Gauge::Kcmil1500, [525, 625, 705], [435, 520, 585]),
    row(Gauge::Kcmil1750, [545, 650, 735], [455, 545, 615]),
    row(Gauge::Kcmil2000, [555, 665, 750], [470, 560, 630]),
];

/// Allowable ampacity for a conductor, or `None` if the table has no rating
/// for that gauge and material.
#[must_use]
pub fn ampacity(
    gauge: Gauge,
    material: Material,
    rating: TemperatureRating,
) -> Option<ElectricCurrent> {
    AMPACITY_TABLE[gauge.index()]
        .for_material(material)
        .map(|amps| ElectricCurrent::new::<ampere>(f64::from(amps.at(rating))))
}

/// Every rated conductor for a material and temperature column, smallest first.
pub fn rated_conductors(
    material: Material,
    rating: TemperatureRating,
) -> impl Iterator<Item = (Gauge, ElectricCurrent)> {
    Gauge::ALL
        .into_iter()
        .filter_map(move |gauge| ampacity(gauge, material, rating).map(|amps| (gauge, amps)))
}
