use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Circuit currents and supply voltages use this bound. A zero supply voltage
/// would make percent voltage drop undefined.
///
/// # Examples
///
/// ```
/// use electrical_models::support::constraint::{Constrained, StrictlyPositive};
///
/// let x = Constrained::<_, StrictlyPositive>::new(1).unwrap();
/// assert_eq!(x.into_inner(), 1);
///
/// let y = StrictlyPositive::new(240.0).unwrap();
/// assert_eq!(y.into_inner(), 240.0);
///
/// assert!(StrictlyPositive::new(0).is_err());
/// assert!(StrictlyPositive::new(-1).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        electric_current::ampere, electric_potential::volt,
        f64::{ElectricCurrent, ElectricPotential},
    };

    #[test]
    fn integers() {
        let x = Constrained::<i32, StrictlyPositive>::new(1).unwrap();
        assert_eq!(x.into_inner(), 1);

        let y = StrictlyPositive::new(42).unwrap();
        assert_eq!(y.as_ref(), &42);

        assert_eq!(StrictlyPositive::new(0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-2), Err(ConstraintError::Negative));
    }

    #[test]
    fn currents() {
        assert!(StrictlyPositive::new(ElectricCurrent::new::<ampere>(20.0)).is_ok());
        assert!(StrictlyPositive::new(ElectricCurrent::new::<ampere>(0.0)).is_err());
        assert!(StrictlyPositive::new(ElectricCurrent::new::<ampere>(-5.0)).is_err());
    }

    #[test]
    fn voltages() {
        assert!(StrictlyPositive::new(ElectricPotential::new::<volt>(120.0)).is_ok());
        assert_eq!(
            StrictlyPositive::new(ElectricPotential::new::<volt>(f64::NAN)),
            Err(ConstraintError::NotANumber)
        );
    }
}
