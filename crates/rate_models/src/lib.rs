//! # Rate Models (Model Layer)
//!
//! Piecewise-linear interest rate curves for lending pools ("jump rate
//! models") and the evaluator that turns a utilisation into borrow and
//! supply rates.
//!
//! This crate provides:
//! - Parameter sets with up-front validation (`params`)
//! - The two-slope, three-slope and separated curves (`curves`)
//! - `RateCurveEvaluator`, sampled curves and cursor read-outs (`evaluator`)
//! - Built-in parameter sets for each model family (`presets`)
//!
//! ## Design Principles
//!
//! - **Enum-based models** for static dispatch (`RateModel`)
//! - **Validation at construction**: a built model never fails mid-curve
//! - **Pure evaluation**: no hidden state, repeated calls are bit-identical
//!
//! ## Example
//!
//! ```
//! use rate_models::curves::RateModel;
//! use rate_models::evaluator::RateCurveEvaluator;
//! use rate_models::params::{ReserveFactor, TwoSlopeParams};
//!
//! let params = TwoSlopeParams::<f64>::new(0.0, 2.5e-11, 2e-9, 80.0).unwrap();
//! let reserve = ReserveFactor::from_percent(5.0).unwrap();
//! let evaluator = RateCurveEvaluator::new(RateModel::two_slope(params, reserve)).unwrap();
//!
//! let result = evaluator.evaluate(90.0).unwrap();
//! assert!((result.borrow_rate - 2.2e-8).abs() < 1e-20);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod curves;
pub mod evaluator;
pub mod params;
pub mod presets;
