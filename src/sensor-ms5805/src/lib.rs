//! Driver for the MS5805 digital pressure sensor, exposing it as generic sensor devices.
//!
//! The part measures barometric pressure and temperature in one conversion.
//! [`Ms5805`] registers one [`SensorDevice`](sensor_device::SensorDevice) per selected
//! [`Channel`]; every read of either device triggers a fresh measurement through the
//! sensor-access library, represented by the [`Ms5805Driver`] trait.
//!
//! | Channel | Category | Unit | Range | Min period (ms) |
//! |---|---|---|---|---|
//! | [`Channel::Baro`] | `Pressure` | Pa | 1000 ..= 200000 | 2 |
//! | [`Channel::Temp`] | `Temperature` | 0.1 °C | -40 ..= 85 | 2 |
//!
//! # Examples
//!
//! ```ignore
//! static MS5805: Ms5805<BoardMs5805> = Ms5805::new();
//!
//! let cfg = SensorConfig::new(SensorInterface::i2c("i2c1"));
//! MS5805.init("ms5805", &cfg, Channels::BOTH, registry)?;
//!
//! let mut buf = [SensorData::EMPTY];
//! registry.read("baro_ms5805", &mut buf)?;
//! ```
//!
//! # Cargo features
#![doc = document_features::document_features!(feature_label = r#"<span class="stab portability"><code>{feature}</code></span>"#)]
#![cfg_attr(not(test), no_std)]
#![deny(unused_must_use)]
#![deny(missing_docs)]

mod channel;
mod driver;
mod error;
mod ms5805;

pub use channel::{Channel, Channels};
pub use driver::{Ms5805Driver, Options, Osr};
pub use error::{InitError, RegistrationError};
pub use ms5805::{create, Ms5805};
