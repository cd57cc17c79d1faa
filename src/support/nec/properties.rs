use uom::si::{f64::Length, length::inch};

use crate::support::units::{ResistancePerLength, per_thousand_feet};

use super::{Gauge, Material};

/// One row of NEC Chapter 9 Table 8 (conductor properties).
///
/// Resistances are DC values at 75 °C for stranded, uncoated copper and for
/// aluminum, in Ω per 1000 ft. Weights are bare conductor, lb per 1000 ft.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireProperty {
    pub gauge: Gauge,
    pub area_cmil: u32,
    /// Overall diameter of the stranded conductor, in inches.
    pub diameter_in: f64,
    pub copper_ohms_per_kft: f64,
    pub aluminum_ohms_per_kft: f64,
    pub copper_lb_per_kft: f64,
    pub aluminum_lb_per_kft: f64,
}

impl WireProperty {
    /// DC resistance per length for the given material.
    #[must_use]
    pub fn resistance(&self, material: Material) -> ResistancePerLength {
        per_thousand_feet(self.ohms_per_kft(material))
    }

    /// DC resistance in Ω per 1000 ft for the given material.
    #[must_use]
    pub fn ohms_per_kft(&self, material: Material) -> f64 {
        match material {
            Material::Copper => self.copper_ohms_per_kft,
            Material::Aluminum => self.aluminum_ohms_per_kft,
        }
    }

    /// Bare conductor weight in lb per 1000 ft for the given material.
    #[must_use]
    pub fn weight_lb_per_kft(&self, material: Material) -> f64 {
        match material {
            Material::Copper => self.copper_lb_per_kft,
            Material::Aluminum => self.aluminum_lb_per_kft,
        }
    }

    /// Overall conductor diameter.
    #[must_use]
    pub fn diameter(&self) -> Length {
        Length::new::<inch>(self.diameter_in)
    }
}

const fn row(
    gauge: Gauge,
    area_cmil: u32,
    diameter_in: f64,
    copper_ohms_per_kft: f64,
    aluminum_ohms_per_kft: f64,
    copper_lb_per_kft: f64,
    aluminum_lb_per_kft: f64,
) -> WireProperty {
    WireProperty {
        gauge,
        area_cmil,
        diameter_in,
        copper_ohms_per_kft,
        aluminum_ohms_per_kft,
        copper_lb_per_kft,
        aluminum_lb_per_kft,
    }
}

/// NEC Chapter 9 Table 8 conductor properties, in [`Gauge::ALL`] order.
#[rustfmt::skip]
pub static WIRE_PROPERTIES: [WireProperty; 28] = [
    //   gauge             cmil       dia    Cu Ω/kft  Al Ω/kft  Cu lb   Al lb
    row(Gauge::Awg14,       4_110, 0.073, 3.14,    5.17,     12.4,   3.8),
    row(Gauge::Awg12,       6_530, 0.092, 1.98,    3.25,     19.8,   6.0),
    row(Gauge::Awg10,      10_380, 0.116, 1.24,    2.04,     31.4,   9.5),
    row(Gauge::Awg8,       16_510, 0.146, 0.778,   1.28,     50.0,   15.2),
    row(Gauge::Awg6,       26_240, 0.184, 0.491,   0.808,    79.5,   24.2),
    row(Gauge::Awg4,       41_740, 0.232, 0.308,   0.508,    126.0,  38.4),
    row(Gauge::Awg3,       52_620, 0.260, 0.245,   0.403,    159.0,  48.4),
    row(Gauge::Awg2,       66_360, 0.292, 0.194,   0.319,    201.0,  61.0),
    row(Gauge::Awg1,       83_690, 0.332, 0.154,   0.253,    253.0,  77.0),
    row(Gauge::Awg1_0,    105_600, 0.372, 0.122,   0.201,    319.0,  97.1),
    row(Gauge::Awg2_0,    133_100, 0.418, 0.0967,  0.159,    403.0,  122.0),
    row(Gauge::Awg3_0,    167_800, 0.470, 0.0766,  0.126,    508.0,  154.0),
    row(Gauge::Awg4_0,    211_600, 0.528, 0.0608,  0.100,    641.0,  195.0),
    row(Gauge::Kcmil250,  250_000, 0.575, 0.0515,  0.0847,   772.0,  230.0),
    row(Gauge::Kcmil300,  300_000, 0.630, 0.0429,  0.0707,   926.0,  276.0),
    row(Gauge::Kcmil350,  350_000, 0.681, 0.0367,  0.0605,   1081.0, 322.0),
    row(Gauge::Kcmil400,  400_000, 0.728, 0.0321,  0.0529,   1235.0, 368.0),
    row(Gauge::Kcmil500,  500_000, 0.813, 0.0258,  0.0424,   1544.0, 460.0),
    row(Gauge::Kcmil600,  600_000, 0.893, 0.0214,  0.0353,   1853.0, 552.0),
    row(Gauge::Kcmil700,  700_000, 0.964, 0.0184,  0.0303,   2162.0, 644.0),
    row(Gauge::Kcmil750,  750_000, 0.998, 0.0171,  0.0282,   2316.0, 690.0),
    row(Gauge::Kcmil800,  800_000, 1.031, 0.0161,  0.0265,   2470.0, 736.0),
    row(Gauge::Kcmil900,  900_000, 1.094, 0.0143,  0.0235,   2779.0, 828.0),
    row(Gauge::Kcmil1000, 1_000_000, 1.152, 0.0129, 0.0212,  3088.0, 920.0),
    row(Gauge::Kcmil1250, 1_250_000, 1.289, 0.0103, 0.0169,  3860.0, 1150.0),
    row(Gauge::Kcmil1500, 1_500_000, 1.412, 0.00858, 0.0141, 4632.0, 1380.0),
    row(Gauge::Kcmil1750, 1_750_000, 1.526, 0.00735, 0.0121, 5404.0, 1610.0),
    row(Gauge::Kcmil2000, 2_000_000, 1.632, 0.00643, 0.0106, 6176.0, 1840.0),
];

/// Conductor properties for a gauge.
#[must_use]
pub fn wire_property(gauge: Gauge) -> &'static WireProperty {
    &WIRE_PROPERTIES[gauge.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{electrical_resistance::ohm, f64::ElectricalResistance, length::foot};

    #[test]
    fn rows_follow_gauge_order() {
        for (entry, gauge) in WIRE_PROPERTIES.iter().zip(Gauge::ALL) {
            assert_eq!(entry.gauge, gauge);
        }
    }

    #[test]
    fn monotonic_in_gauge_order() {
        for pair in WIRE_PROPERTIES.windows(2) {
            let [small, large] = pair else { unreachable!() };
            assert!(large.area_cmil > small.area_cmil);
            assert!(large.diameter_in > small.diameter_in);
            assert!(large.copper_ohms_per_kft < small.copper_ohms_per_kft);
            assert!(large.aluminum_ohms_per_kft < small.aluminum_ohms_per_kft);
            assert!(large.copper_lb_per_kft > small.copper_lb_per_kft);
            assert!(large.aluminum_lb_per_kft > small.aluminum_lb_per_kft);
        }
    }

    #[test]
    fn aluminum_has_higher_resistance() {
        for entry in WIRE_PROPERTIES {
            assert!(entry.aluminum_ohms_per_kft > entry.copper_ohms_per_kft);
        }
    }

    #[test]
    fn tabulated_values() {
        let p = wire_property(Gauge::Awg8);
        assert_eq!(p.area_cmil, 16_510);
        assert_relative_eq!(p.ohms_per_kft(Material::Copper), 0.778);
        assert_relative_eq!(p.ohms_per_kft(Material::Aluminum), 1.28);

        let p = wire_property(Gauge::Awg4_0);
        assert_relative_eq!(p.ohms_per_kft(Material::Copper), 0.0608);
        assert_relative_eq!(p.diameter().get::<inch>(), 0.528);

        let p = wire_property(Gauge::Kcmil500);
        assert_relative_eq!(p.ohms_per_kft(Material::Aluminum), 0.0424);
        assert_relative_eq!(p.weight_lb_per_kft(Material::Copper), 1544.0);

        let p = wire_property(Gauge::Kcmil2000);
        assert_eq!(p.area_cmil, 2_000_000);
        assert_relative_eq!(p.ohms_per_kft(Material::Copper), 0.00643);
    }

    #[test]
    fn resistance_quantity() {
        let r: ElectricalResistance =
            wire_property(Gauge::Awg12).resistance(Material::Copper) * Length::new::<foot>(1000.0);
        assert_relative_eq!(r.get::<ohm>(), 1.98, epsilon = 1e-12);
    }
}
