mod design;
mod fastening;
mod rib_range;
mod static_parameters;

pub use design::Design;
pub use fastening::{FasteningError, FasteningStrips};
pub use rib_range::{Bounds, Dimension, RangeError, RibRange};
pub use static_parameters::StaticParameters;
