use crate::error::WorkoutError;
use crate::workout::{Extra, NewWorkout};

/// Every value is a finite number (no NaN, no ±inf).
pub fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

/// Every value is strictly greater than zero.
pub fn all_positive(values: &[f64]) -> bool {
    values.iter().all(|&v| v > 0.0)
}

/// Form-level check run before construction.
///
/// Elevation is only required to be finite: descents are negative.
pub fn validate(input: &NewWorkout) -> Result<(), WorkoutError> {
    let NewWorkout {
        distance,
        duration,
        extra,
        ..
    } = *input;

    let ok = match extra {
        Extra::Cadence(cadence) => {
            all_finite(&[distance, duration, cadence])
                && all_positive(&[distance, duration, cadence])
        }
        Extra::ElevationGain(elevation) => {
            all_finite(&[distance, duration, elevation]) && all_positive(&[distance, duration])
        }
    };

    if ok {
        Ok(())
    } else {
        crate::dlog!("validation_rejected distance={distance} duration={duration} extra={extra:?}");
        Err(WorkoutError::Validation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Coords;

    fn input(distance: f64, duration: f64, extra: Extra) -> NewWorkout {
        NewWorkout {
            coords: Coords::new(10.0, 20.0),
            distance,
            duration,
            extra,
        }
    }

    #[test]
    fn finite_rejects_nan_and_infinities() {
        assert!(all_finite(&[1.0, 0.0, -3.5]));
        assert!(!all_finite(&[1.0, f64::NAN]));
        assert!(!all_finite(&[f64::INFINITY]));
        assert!(!all_finite(&[2.0, f64::NEG_INFINITY]));
    }

    #[test]
    fn positive_rejects_zero_and_negatives() {
        assert!(all_positive(&[0.1, 5.0, 1e9]));
        assert!(!all_positive(&[1.0, 0.0]));
        assert!(!all_positive(&[-1.0]));
        assert!(!all_positive(&[f64::NAN]));
    }

    #[test]
    fn empty_lists_pass() {
        assert!(all_finite(&[]));
        assert!(all_positive(&[]));
    }

    #[test]
    fn negative_distance_is_rejected() {
        let err = validate(&input(-1.0, 10.0, Extra::Cadence(5.0))).unwrap_err();
        assert_eq!(err, WorkoutError::Validation);
    }

    #[test]
    fn zero_duration_is_rejected() {
        assert!(validate(&input(5.0, 0.0, Extra::ElevationGain(10.0))).is_err());
    }

    #[test]
    fn running_needs_positive_cadence() {
        assert!(validate(&input(5.0, 25.0, Extra::Cadence(0.0))).is_err());
        assert!(validate(&input(5.0, 25.0, Extra::Cadence(150.0))).is_ok());
    }

    #[test]
    fn cycling_accepts_negative_elevation_but_not_nan() {
        assert!(validate(&input(20.0, 60.0, Extra::ElevationGain(-50.0))).is_ok());
        assert!(validate(&input(20.0, 60.0, Extra::ElevationGain(0.0))).is_ok());
        assert!(validate(&input(20.0, 60.0, Extra::ElevationGain(f64::NAN))).is_err());
    }
}
