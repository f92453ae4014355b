//! Complete elliptic integrals of the first and second kind, K(m) and E(m).
//!
//! Chebyshev approximations due to W. J. Cody (1965), each good to a
//! relative error below 2e-8 on `0 <= m <= 1`, extended to `m < 0` via the
//! Landen-type identities used throughout the ring-kernel formulas.

use crate::error::CoreError;

const K_LOG_COEFF: [f64; 8] = [
    std::f64::consts::LN_2 * 2.0,
    9.65736020516771e-2,
    3.08909633861795e-2,
    1.52618320622534e-2,
    1.25565693543211e-2,
    1.68695685967517e-2,
    1.09423810688623e-2,
    1.40704915496101e-3,
];

const K_POLY_COEFF: [f64; 8] = [
    1.0 / 2.0,
    1.24999998585309e-1,
    7.03114105853296e-2,
    4.87379510945218e-2,
    3.57218443007327e-2,
    2.09857677336790e-2,
    5.81807961871996e-3,
    3.42805719229748e-4,
];

const E_LOG_COEFF: [f64; 8] = [
    1.0,
    4.43147193467733e-1,
    5.68115681053803e-2,
    2.21862206993846e-2,
    1.56847700239786e-2,
    1.92284389022977e-2,
    1.21819481486695e-2,
    1.55618744745296e-3,
];

const E_POLY_COEFF: [f64; 8] = [
    0.0,
    2.49999998448655e-1,
    9.37488062098189e-2,
    5.84950297066166e-2,
    4.09074821593164e-2,
    2.35091602564984e-2,
    6.45682247315060e-3,
    3.78886487349367e-4,
];

fn chebyshev_sum(m: f64, log_coeff: &[f64; 8], poly_coeff: &[f64; 8]) -> f64 {
    let eta = 1.0 - m;
    let l = (1.0 / eta).ln();
    let mut sum = 0.0;
    let mut eta_pow = 1.0;
    for i in 0..8 {
        sum += (log_coeff[i] + l * poly_coeff[i]) * eta_pow;
        eta_pow *= eta;
    }
    sum
}

fn ellipk_on_01(m: f64) -> f64 {
    chebyshev_sum(m, &K_LOG_COEFF, &K_POLY_COEFF)
}

fn ellipe_on_01(m: f64) -> f64 {
    chebyshev_sum(m, &E_LOG_COEFF, &E_POLY_COEFF)
}

/// Complete elliptic integral of the first kind, K(m), for `m < 1`.
pub fn ellipk(m: f64) -> Result<f64, CoreError> {
    if !m.is_finite() || m >= 1.0 {
        return Err(CoreError::EllipticDomain { m });
    }
    if m > -1.0 {
        Ok(ellipk_on_01(m))
    } else {
        Ok(ellipk_on_01(1.0 - 1.0 / (1.0 - m)) / (1.0 - m).sqrt())
    }
}

/// Complete elliptic integral of the second kind, E(m), for `m < 1`
/// (E is in fact defined for all real m, but this crate never needs that).
pub fn ellipe(m: f64) -> Result<f64, CoreError> {
    if !m.is_finite() || m >= 1.0 {
        return Err(CoreError::EllipticDomain { m });
    }
    if (0.0..=1.0).contains(&m) {
        Ok(ellipe_on_01(m))
    } else {
        Ok(ellipe_on_01(m / (m - 1.0)) * (1.0 - m).sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn at_zero_both_equal_half_pi() {
        assert_relative_eq!(ellipk(0.0).unwrap(), std::f64::consts::FRAC_PI_2, epsilon = 1e-10);
        assert_relative_eq!(ellipe(0.0).unwrap(), std::f64::consts::FRAC_PI_2, epsilon = 1e-10);
    }

    #[test]
    fn matches_known_values_at_one_half() {
        assert_relative_eq!(ellipk(0.5).unwrap(), 1.8540746773, epsilon = 1e-9);
        assert_relative_eq!(ellipe(0.5).unwrap(), 1.3506438810, epsilon = 1e-9);
    }

    #[test]
    fn rejects_domain_violation() {
        assert_eq!(ellipk(1.0), Err(CoreError::EllipticDomain { m: 1.0 }));
        assert_eq!(ellipk(2.0), Err(CoreError::EllipticDomain { m: 2.0 }));
        assert!(ellipk(f64::NAN).is_err());
    }

    #[test]
    fn k_diverges_as_m_approaches_one() {
        let near = ellipk(1.0 - 1e-12).unwrap();
        let far = ellipk(0.9).unwrap();
        assert!(near > far);
    }
}
