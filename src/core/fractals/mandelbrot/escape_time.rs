use crate::core::data::complex::Complex;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Counts iterations of `z = z² + c`, starting from `z = c`, until `|z| >= 2`
/// or `iteration_cap` is reached.
///
/// A result equal to `iteration_cap` means the orbit stayed bounded and the
/// point is treated as inside the set.
#[must_use]
pub fn escape_time(c: Complex, iteration_cap: u32) -> u32 {
    let mut z = c;
    let mut iterations = 0;

    // NaN from a diverged orbit fails this comparison, so the loop stops there
    while iterations < iteration_cap && z.magnitude_squared() < ESCAPE_RADIUS_SQUARED {
        z = z * z + c;
        iterations += 1;
    }

    iterations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_never_escapes() {
        for cap in [1, 2, 100, 900, 10_000] {
            assert_eq!(escape_time(Complex::default(), cap), cap);
        }
    }

    #[test]
    fn test_points_outside_radius_two_escape_immediately() {
        let outside = [
            Complex::new(2.5, 0.0),
            Complex::new(-2.0, 0.1),
            Complex::new(0.0, -3.0),
            Complex::new(1.5, 1.5),
            Complex::new(-1e300, 1e300),
        ];

        for c in outside {
            assert_eq!(escape_time(c, 100), 0, "{:?}", c);
        }
    }

    #[test]
    fn test_minus_half_is_interior() {
        assert_eq!(escape_time(Complex::new(-0.5, 0.0), 100), 100);
    }

    #[test]
    fn test_minus_two_is_on_the_boundary_circle() {
        // |c| = 2 exactly, which already counts as escaped
        assert_eq!(escape_time(Complex::new(-2.0, 0.0), 50), 0);
    }

    #[test]
    fn test_one_escapes_after_two_iterations() {
        // 1 -> 2 -> escaped
        assert_eq!(escape_time(Complex::new(1.0, 0.0), 100), 1);
        // 0.5 -> 0.75 -> 1.0625 -> 1.62890625 -> 3.15...
        assert_eq!(escape_time(Complex::new(0.5, 0.0), 100), 4);
    }

    #[test]
    fn test_result_never_exceeds_cap() {
        let c = Complex::new(0.3, 0.5);
        for cap in 1..50 {
            assert!(escape_time(c, cap) <= cap);
        }
    }

    #[test]
    fn test_zero_cap_returns_zero() {
        assert_eq!(escape_time(Complex::default(), 0), 0);
    }

    #[test]
    fn test_nan_point_stops_immediately() {
        assert_eq!(escape_time(Complex::new(f64::NAN, 0.0), 100), 0);
        assert_eq!(escape_time(Complex::new(0.0, f64::INFINITY), 100), 0);
    }
}
