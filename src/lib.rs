//! # Twine Heatsink
//!
//! Steady-state thermal modeling and design optimization of finned heatsinks
//! for [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: The heatsink [`twine_core::Model`] and its design optimizer.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Units
//!
//! Public inputs and outputs use [`uom`] quantities. Internally the thermal
//! core works on SI `f64` values with temperatures in degrees Celsius, which
//! is the form its empirical correlations are stated in.
//!
//! ## Logging
//!
//! The crate emits diagnostics through the [`log`] facade and never installs
//! a logger itself.

pub mod models;
pub mod support;
