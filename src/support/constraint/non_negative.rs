use std::{cmp::Ordering, marker::PhantomData};

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Conductor run lengths use this bound: a zero distance is meaningful
/// (size for ampacity only), a negative one is not.
///
/// # Examples
///
/// ```
/// use electrical_models::support::constraint::{Constrained, NonNegative};
///
/// let x = Constrained::<_, NonNegative>::new(0.0).unwrap();
/// assert_eq!(x.into_inner(), 0.0);
///
/// assert!(NonNegative::new(-100.0).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }

    /// Returns zero as a non-negative constrained value.
    #[must_use]
    pub fn zero<T: PartialOrd + Zero>() -> Constrained<T, NonNegative> {
        Constrained {
            value: T::zero(),
            _marker: PhantomData,
        }
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Length, length::foot};

    #[test]
    fn floats() {
        assert!(Constrained::<f64, NonNegative>::new(2.0).is_ok());
        assert!(NonNegative::new(0.0).is_ok());
        assert_eq!(NonNegative::new(-2.0), Err(ConstraintError::Negative));
        assert_eq!(NonNegative::new(f64::NAN), Err(ConstraintError::NotANumber));
    }

    #[test]
    fn zero_is_allowed() {
        let zero: Constrained<f64, NonNegative> = NonNegative::zero();
        assert_eq!(zero.into_inner(), 0.0);
    }

    #[test]
    fn run_lengths() {
        assert!(NonNegative::new(Length::new::<foot>(150.0)).is_ok());
        assert!(NonNegative::new(Length::new::<foot>(0.0)).is_ok());
        assert!(NonNegative::new(Length::new::<foot>(-1.0)).is_err());
    }
}
