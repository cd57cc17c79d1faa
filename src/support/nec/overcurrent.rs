use uom::si::{electric_current::ampere, f64::ElectricCurrent};

use super::{Gauge, Material};

/// Maximum overcurrent protection for small conductors, NEC 240.4(D).
///
/// Returns `None` for sizes the rule does not cover, where protection follows
/// the conductor's ampacity.
#[must_use]
pub fn small_conductor_limit(gauge: Gauge, material: Material) -> Option<ElectricCurrent> {
    let amps = match (material, gauge) {
        (Material::Copper, Gauge::Awg14) => 15.0,
        (Material::Copper, Gauge::Awg12) => 20.0,
        (Material::Copper, Gauge::Awg10) => 30.0,
        (Material::Aluminum, Gauge::Awg12) => 15.0,
        (Material::Aluminum, Gauge::Awg10) => 25.0,
        _ => return None,
    };
    Some(ElectricCurrent::new::<ampere>(amps))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limit(gauge: Gauge, material: Material) -> Option<f64> {
        small_conductor_limit(gauge, material).map(|a| a.get::<ampere>())
    }

    #[test]
    fn copper_limits() {
        assert_eq!(limit(Gauge::Awg14, Material::Copper), Some(15.0));
        assert_eq!(limit(Gauge::Awg12, Material::Copper), Some(20.0));
        assert_eq!(limit(Gauge::Awg10, Material::Copper), Some(30.0));
        assert_eq!(limit(Gauge::Awg8, Material::Copper), None);
    }

    #[test]
    fn aluminum_limits() {
        assert_eq!(limit(Gauge::Awg12, Material::Aluminum), Some(15.0));
        assert_eq!(limit(Gauge::Awg10, Material::Aluminum), Some(25.0));
        assert_eq!(limit(Gauge::Awg14, Material::Aluminum), None);
        assert_eq!(limit(Gauge::Awg6, Material::Aluminum), None);
    }
}
