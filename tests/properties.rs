//! Property tests for conductor selection and grounding.

use electrical_models::{
    models::electrical::conductor::{
        InvalidInput, VoltageDropInput, Warning, WireSizeConfig, WireSizeError, WireSizeInput,
        WireSizer, voltage_drop,
    },
    support::{
        circuit::Phase,
        nec::{Material, TemperatureRating, ampacity, grounding_conductor, rated_conductors},
    },
};
use proptest::prelude::*;
use twine_core::Model;
use uom::si::{
    electric_current::ampere,
    electric_potential::volt,
    f64::{ElectricCurrent, ElectricPotential, Length},
    length::foot,
};

fn material() -> impl Strategy<Value = Material> {
    prop_oneof![Just(Material::Copper), Just(Material::Aluminum)]
}

fn phase() -> impl Strategy<Value = Phase> {
    prop_oneof![Just(Phase::Single), Just(Phase::Three)]
}

fn rating() -> impl Strategy<Value = TemperatureRating> {
    prop_oneof![
        Just(TemperatureRating::C60),
        Just(TemperatureRating::C75),
        Just(TemperatureRating::C90),
    ]
}

fn voltage() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(120.0),
        Just(208.0),
        Just(240.0),
        Just(277.0),
        Just(480.0)
    ]
}

fn largest_ampacity(material: Material, rating: TemperatureRating) -> f64 {
    rated_conductors(material, rating)
        .last()
        .map_or(0.0, |(_, amps)| amps.get::<ampere>())
}

fn input(
    amps: f64,
    feet: f64,
    volts: f64,
    material: Material,
    phase: Phase,
    rating: TemperatureRating,
) -> WireSizeInput {
    WireSizeInput::new(
        ElectricCurrent::new::<ampere>(amps),
        Length::new::<foot>(feet),
        ElectricPotential::new::<volt>(volts),
        material,
        phase,
        rating,
    )
    .expect("generated inputs are valid")
}

proptest! {
    #[test]
    fn selected_ampacity_covers_current(
        fraction in 0.001_f64..=1.0,
        feet in 0.0_f64..2000.0,
        volts in voltage(),
        material in material(),
        phase in phase(),
        rating in rating(),
    ) {
        let amps = fraction * largest_ampacity(material, rating);
        let input = input(amps, feet, volts, material, phase, rating);
        let result = WireSizer::default().call(&input).expect("current is within the table");

        let rated = ampacity(result.gauge, material, rating).expect("selected gauge is rated");
        prop_assert!(rated.get::<ampere>() >= amps);
        prop_assert_eq!(result.ampacity, rated);
        prop_assert!(result.ground <= result.gauge);
    }

    #[test]
    fn drop_within_limit_or_warned(
        fraction in 0.001_f64..=1.0,
        feet in 0.1_f64..5000.0,
        volts in voltage(),
        max_pct in 1.0_f64..6.0,
        material in material(),
        phase in phase(),
        rating in rating(),
    ) {
        let amps = fraction * largest_ampacity(material, rating);
        let input = input(amps, feet, volts, material, phase, rating);
        let config = WireSizeConfig::default().with_max_voltage_drop_percent(max_pct);
        let result = WireSizer::new(config).call(&input).expect("current is within the table");

        let within = result.voltage_drop.percent <= config.max_voltage_drop;
        let warned = result.has_warning(|w| matches!(w, Warning::VoltageDropLimitNotMet { .. }));
        prop_assert!(within != warned);
        prop_assert_eq!(result.compliant, within);
    }

    #[test]
    fn zero_distance_is_ampacity_only(
        fraction in 0.001_f64..=1.0,
        volts in voltage(),
        material in material(),
        phase in phase(),
        rating in rating(),
    ) {
        let amps = fraction * largest_ampacity(material, rating);
        let input = input(amps, 0.0, volts, material, phase, rating);
        let result = WireSizer::default().call(&input).expect("current is within the table");

        prop_assert_eq!(result.voltage_drop.percent_value(), 0.0);
        prop_assert_eq!(result.upsized, 0);
        prop_assert!(result.warnings.contains(&Warning::AmpacityOnly));
    }

    #[test]
    fn reported_drop_reproduces(
        fraction in 0.001_f64..=1.0,
        feet in 0.0_f64..3000.0,
        volts in voltage(),
        material in material(),
        phase in phase(),
        rating in rating(),
    ) {
        let amps = fraction * largest_ampacity(material, rating);
        let input = input(amps, feet, volts, material, phase, rating);
        let result = WireSizer::default().call(&input).expect("current is within the table");

        let independent = voltage_drop(
            &VoltageDropInput::new(
                result.gauge,
                input.distance(),
                input.current(),
                input.voltage(),
                material,
                phase,
            )
            .expect("inputs already validated"),
        );
        prop_assert_eq!(result.voltage_drop, independent);
    }

    #[test]
    fn invalid_drop_limit_is_rejected(
        fraction in 0.001_f64..=1.0,
        feet in 0.0_f64..2000.0,
        limit in prop_oneof![Just(f64::NAN), -100.0_f64..-0.001],
        material in material(),
    ) {
        let amps = fraction * largest_ampacity(material, TemperatureRating::C75);
        let input = input(amps, feet, 240.0, material, Phase::Single, TemperatureRating::C75);
        let config = WireSizeConfig::default().with_max_voltage_drop_percent(limit);
        let is_invalid = matches!(
            WireSizer::new(config).call(&input),
            Err(WireSizeError::InvalidInput(InvalidInput { field: "max_voltage_drop", .. }))
        );
        prop_assert!(is_invalid);
    }

    #[test]
    fn oversized_current_is_an_error(
        excess in 1.0_f64..10_000.0,
        material in material(),
        rating in rating(),
    ) {
        let amps = largest_ampacity(material, rating) + excess;
        let input = input(amps, 100.0, 480.0, material, Phase::Three, rating);
        let is_no_wire = matches!(
            WireSizer::default().call(&input),
            Err(WireSizeError::NoWireLargeEnough { .. })
        );
        prop_assert!(is_no_wire);
    }

    #[test]
    fn ground_size_is_monotonic(
        a in 0.0_f64..6000.0,
        b in 0.0_f64..6000.0,
        material in material(),
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low = grounding_conductor(ElectricCurrent::new::<ampere>(low), material);
        let high = grounding_conductor(ElectricCurrent::new::<ampere>(high), material);
        prop_assert!(low <= high);
    }
}
