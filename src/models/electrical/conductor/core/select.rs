//! Ampacity-first conductor selection with voltage drop upsizing.

use uom::{
    ConstZero,
    si::{
        f64::{ElectricCurrent, Length, Ratio},
        ratio::percent,
    },
};

use crate::support::{
    constraint::NonNegative,
    nec::{Gauge, Material, grounding_conductor, rated_conductors, small_conductor_limit},
};

use super::{
    InvalidInput, MIN_PRACTICAL_ALUMINUM, VoltageDropResult, Warning, WireSizeConfig,
    WireSizeError, WireSizeInput, WireSizeResult, voltage_drop,
};

/// Selects the smallest conductor that carries the load within the voltage drop limit.
///
/// Starts from the smallest gauge whose ampacity at the input's temperature
/// rating covers the current. While voltage drop exceeds
/// [`WireSizeConfig::max_voltage_drop`], steps to the next larger gauge, at
/// most [`WireSizeConfig::max_iters`] times. Running out of steps (or of
/// table) is not an error: the largest gauge tried is returned with a
/// [`Warning::VoltageDropLimitNotMet`].
///
/// A zero distance skips upsizing entirely and adds [`Warning::AmpacityOnly`].
///
/// The grounding conductor follows Table 250.122 for the load current but is
/// never larger than the selected circuit conductor (NEC 250.122(A)).
///
/// # Errors
///
/// Returns [`WireSizeError::InvalidInput`] if the configured voltage drop
/// limit is negative or NaN, and [`WireSizeError::NoWireLargeEnough`] if the
/// current exceeds every tabulated ampacity for the material and rating.
pub(crate) fn select_wire_size(
    input: &WireSizeInput,
    config: &WireSizeConfig,
) -> Result<WireSizeResult, WireSizeError> {
    let current = input.current();
    let max_drop = NonNegative::new(config.max_voltage_drop)
        .map_err(InvalidInput::on("max_voltage_drop"))?
        .into_inner();

    let mut candidates =
        rated_conductors(input.material, input.rating).skip_while(|&(_, amps)| amps < current);

    let Some((mut gauge, mut ampacity)) = candidates.next() else {
        return Err(no_wire_large_enough(input));
    };
    let mut drop = voltage_drop(&input.with_gauge(gauge));
    let mut upsized = 0;
    let mut warnings = Vec::new();

    if input.distance() == Length::ZERO {
        warnings.push(Warning::AmpacityOnly);
    } else {
        while drop.percent > max_drop && upsized < config.max_iters {
            let Some(next) = candidates.next() else {
                break;
            };
            (gauge, ampacity) = next;
            drop = voltage_drop(&input.with_gauge(gauge));
            upsized += 1;

            tracing::debug!(
                gauge = %gauge,
                drop_percent = drop.percent_value(),
                step = upsized,
                "upsized conductor for voltage drop"
            );
        }

        if drop.percent > max_drop {
            tracing::warn!(
                gauge = %gauge,
                drop_percent = drop.percent_value(),
                max_percent = max_drop.get::<percent>(),
                "voltage drop limit not met after upsizing"
            );
            warnings.push(Warning::VoltageDropLimitNotMet {
                achieved: drop.percent,
                max: max_drop,
            });
        }
    }

    warnings.extend(advisories(input, gauge, &drop));

    Ok(WireSizeResult {
        gauge,
        material: input.material,
        rating: input.rating,
        ampacity,
        voltage_drop: drop,
        max_voltage_drop: max_drop,
        compliant: ampacity >= current && drop.percent <= max_drop,
        ground: grounding_conductor(current, input.material).min(gauge),
        upsized,
        warnings,
    })
}

/// Warnings that depend only on the final selection.
fn advisories(input: &WireSizeInput, gauge: Gauge, drop: &VoltageDropResult) -> Vec<Warning> {
    let mut warnings = Vec::new();

    if input.material == Material::Aluminum && gauge < MIN_PRACTICAL_ALUMINUM {
        warnings.push(Warning::AluminumBelowMinimum { gauge });
    }

    if let Some(limit) =
        small_conductor_limit(gauge, input.material).filter(|limit| input.current() > *limit)
    {
        warnings.push(Warning::SmallConductorLimit {
            gauge,
            material: input.material,
            limit,
        });
    }

    if drop.percent > Ratio::new::<percent>(5.0) {
        warnings.push(Warning::ExceedsCombinedRecommendation {
            percent: drop.percent,
        });
    } else if drop.percent > Ratio::new::<percent>(3.0) {
        warnings.push(Warning::ExceedsBranchRecommendation {
            percent: drop.percent,
        });
    }

    warnings
}

fn no_wire_large_enough(input: &WireSizeInput) -> WireSizeError {
    let largest = rated_conductors(input.material, input.rating)
        .last()
        .map_or(ElectricCurrent::ZERO, |(_, amps)| amps);

    WireSizeError::NoWireLargeEnough {
        required: input.current(),
        largest,
        material: input.material,
        rating: input.rating,
    }
}
