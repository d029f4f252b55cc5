//! Closed-form Black-Scholes pricing for a European call.

use qb_core::Real;
use qb_math::normal_cdf;

/// Black-Scholes price of a European call option.
///
/// $$C = S_0 \Phi(d_1) - K e^{-rT} \Phi(d_2)$$
///
/// with
/// $$d_1 = \frac{\ln(S_0/K) + (r + \sigma^2/2)T}{\sigma\sqrt{T}},
///   \qquad d_2 = d_1 - \sigma\sqrt{T}$$
///
/// Degenerate inputs (`T ≤ 0` or `σ√T ≈ 0`) collapse to the
/// discounted intrinsic value.
pub fn black_scholes_call(
    spot: Real,
    strike: Real,
    risk_free_rate: Real,
    volatility: Real,
    maturity_years: Real,
) -> Real {
    let t = maturity_years;
    if t <= 0.0 {
        return (spot - strike).max(0.0);
    }

    let df = (-risk_free_rate * t).exp();
    let std_dev = volatility * t.sqrt();
    if std_dev < 1e-15 {
        return (spot - strike * df).max(0.0);
    }

    let d1 = ((spot / strike).ln() + (risk_free_rate + 0.5 * volatility * volatility) * t)
        / std_dev;
    let d2 = d1 - std_dev;

    spot * normal_cdf(d1) - strike * df * normal_cdf(d2)
}
