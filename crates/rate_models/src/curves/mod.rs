//! Rate curve implementations.
//!
//! This module provides:
//! - [`RateCurve`]: Trait mapping utilisation to borrow and supply rates
//! - [`TwoSlopeCurve`]: Jump rate curve with one kink, supply derived from borrow
//! - [`ThreeSlopeCurve`]: Curve with two kinks, supply derived from borrow
//! - [`SeparatedCurve`]: Independent borrow and supply two-slope curves
//! - [`RateModel`]: Static dispatch enum over the three curves
//! - [`ModelKind`]: Model selector

mod model_enum;
mod separated;
mod three_slope;
mod traits;
mod two_slope;

pub use model_enum::{ModelKind, ParseModelKindError, RateModel};
pub use separated::SeparatedCurve;
pub use three_slope::ThreeSlopeCurve;
pub use traits::{derive_supply_rate, RateCurve};
pub use two_slope::TwoSlopeCurve;
