//! Parameter analysis helpers for quotient filter style structures.
//!
//! # Example
//! ```
//! use qf_params::qf_probability_sum;
//!
//! // expected fingerprint collision rate of a fully loaded filter
//! // with 8 bit fingerprints
//! let s = qf_probability_sum(1000, 1000, 8).unwrap();
//! assert!(s < 0.004);
//! ```

mod quotient;

pub use quotient::*;
