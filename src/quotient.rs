use statrs::distribution::{Binomial, Discrete};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// estimates the expected false positive contribution of fingerprint
/// collisions in a quotient filter with `num_slots` slots, `num_elements`
/// inserted elements and fingerprints of `fingerprint_length` bits
///
/// Computes `sum(k = 0..=m) of Binom(n, 1/m).pmf(k) * (1 - (1 - 2^(-f))^k)`
/// with `m = num_slots`, `n = num_elements` and `f = fingerprint_length`.
/// The result is well approximated by `alpha * 2^(-f)` for
/// `alpha = num_elements / num_slots`, see [`qf_collision_estimate`].
pub fn qf_probability_sum(
    num_slots: u64,
    num_elements: u64,
    fingerprint_length: u64,
) -> Result<f64, Error> {
    if num_slots == 0 {
        return Err(Error::InvalidArgument(
            "num_slots must be greater than zero",
        ));
    }

    let p = 1.0 / num_slots as f64;
    let dist = Binomial::new(p, num_elements)
        .map_err(|_| Error::InvalidArgument("parameters do not form a valid distribution"))?;

    // probability a fingerprint comparison does not collide
    let q = 1.0 - f64::exp2(-(fingerprint_length as f64));

    // pmf is zero past n so the k sum can stop at min(m, n), the k = 0
    // term contributes nothing since its multiplier is 0
    let upper = num_slots.min(num_elements);
    let mut sum = 0.0;
    for k in 0..=upper {
        sum += dist.pmf(k) * (1.0 - f64::powf(q, k as f64));
    }
    Ok(sum)
}

/// closed form approximation `alpha * 2^(-f)` of [`qf_probability_sum`]
/// with `alpha = num_elements / num_slots`
#[inline(always)]
pub fn qf_collision_estimate(
    num_slots: u64,
    num_elements: u64,
    fingerprint_length: u64,
) -> Result<f64, Error> {
    if num_slots == 0 {
        return Err(Error::InvalidArgument(
            "num_slots must be greater than zero",
        ));
    }
    let alpha = num_elements as f64 / num_slots as f64;
    Ok(alpha * f64::exp2(-(fingerprint_length as f64)))
}

/// smallest fingerprint bit length whose estimated collision rate does not
/// exceed `target_rate`
#[inline(always)]
pub fn qf_fingerprint_length(
    num_slots: u64,
    num_elements: u64,
    target_rate: f64,
) -> Result<u64, Error> {
    if num_slots == 0 {
        return Err(Error::InvalidArgument(
            "num_slots must be greater than zero",
        ));
    }
    if !(target_rate > 0.0 && target_rate < 1.0) {
        return Err(Error::InvalidArgument("target_rate must be in (0, 1)"));
    }
    if num_elements == 0 {
        return Ok(0);
    }
    let alpha = num_elements as f64 / num_slots as f64;
    Ok(f64::ceil(f64::log2(alpha / target_rate)).max(0.0) as u64)
}
