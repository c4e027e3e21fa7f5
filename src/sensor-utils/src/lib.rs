//! Helpers shared by the sensor crates.

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]

pub mod env;
