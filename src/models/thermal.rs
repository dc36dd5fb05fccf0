//! Thermal systems models.
//!
//! This module contains models for passive thermal hardware, currently
//! natural-convection finned heatsinks.

pub mod heatsink;
