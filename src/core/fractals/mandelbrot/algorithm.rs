use crate::core::data::complex::Complex;

/// Escape-time membership test for a single point.
///
/// Iterates `z ← z² + c` from the origin at most `iteration_budget` times
/// and reports the point as outside the set as soon as `|z|²` exceeds
/// `escape_radius_squared`. Points that survive the whole budget are taken
/// to be members.
#[must_use]
pub fn evaluate(c: Complex, iteration_budget: u32, escape_radius_squared: f64) -> bool {
    let mut z = Complex::ZERO;

    for _ in 0..iteration_budget {
        z = z * z + c;
        if z.magnitude_squared() > escape_radius_squared {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_never_escapes() {
        for budget in [1, 2, 10, 1000] {
            for radius_squared in [1e-12, 0.5, 4.0, 1e9] {
                assert!(evaluate(Complex::ZERO, budget, radius_squared));
            }
        }
    }

    #[test]
    fn test_far_point_escapes_on_first_iteration() {
        assert!(!evaluate(Complex::new(3.0, 0.0), 1, 4.0));
    }

    #[test]
    fn test_known_members() {
        // -1 cycles 0, -1, 0, -1 ..; i cycles between -1+i and -i
        assert!(evaluate(Complex::new(-1.0, 0.0), 500, 4.0));
        assert!(evaluate(Complex::new(0.0, 1.0), 500, 4.0));
        assert!(evaluate(Complex::new(-2.0, 0.0), 500, 4.0));
        assert!(evaluate(Complex::new(0.25, 0.0), 500, 4.0));
    }

    #[test]
    fn test_known_non_members() {
        assert!(!evaluate(Complex::new(1.0, 0.0), 500, 4.0));
        assert!(!evaluate(Complex::new(0.5, 0.5), 500, 4.0));
        assert!(!evaluate(Complex::new(-2.1, 0.0), 500, 4.0));
    }

    #[test]
    fn test_small_budget_cannot_resolve_slow_escape() {
        // c = 0.3 escapes, but only after a dozen or so iterations
        let c = Complex::new(0.3, 0.0);

        assert!(evaluate(c, 3, 4.0));
        assert!(!evaluate(c, 200, 4.0));
    }

    #[test]
    fn test_verdict_only_flips_from_member_to_non_member() {
        let samples = [
            Complex::new(0.3, 0.0),
            Complex::new(-0.75, 0.1),
            Complex::new(0.26, 0.0),
            Complex::new(-1.25, 0.2),
            Complex::new(0.0, 0.65),
            Complex::new(-0.1, 0.9),
        ];

        for c in samples {
            let mut escaped = false;
            for budget in 1..300 {
                let member = evaluate(c, budget, 4.0);
                if escaped {
                    assert!(!member, "{:?} re-entered the set at budget {}", c, budget);
                }
                escaped = !member;
            }
        }
    }
}
