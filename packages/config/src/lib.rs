// ABOUTME: Configuration constants for Bikelinks
// ABOUTME: Environment variable names and their defaults

pub mod constants;

pub use constants::*;
