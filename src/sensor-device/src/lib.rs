//! Provides the generic sensor device abstraction of the host.
//!
//! Sensor drivers describe each physical quantity they measure with a [`SensorDevice`]
//! descriptor, implement the [`SensorOps`] callbacks, and register the descriptor through a
//! [`SensorHost`].
//! The host then polls the device for [`SensorData`] records.
//!
//! [`Registry`] is a fixed-capacity [`SensorHost`] keeping registered devices in memory.

#![cfg_attr(not(test), no_std)]
#![deny(unused_must_use)]
#![deny(missing_docs)]
#![deny(clippy::pedantic)]

mod category;
mod config;
mod device;
mod info;
mod measurement_unit;
pub mod registry;
mod sensor;
mod value;

pub use category::Category;
pub use config::{Mode, Power, SensorConfig, SensorInterface};
pub use device::{DeviceFlags, DeviceSlot, SensorDevice};
pub use info::{InterfaceKind, SensorInfo, Vendor};
pub use measurement_unit::MeasurementUnit;
pub use registry::{
    AllocError, DefaultRegistry, DeviceError, RegisterError, Registry, Rejected, SensorHost,
};
pub use sensor::{Command, ControlError, SensorData, SensorOps};
pub use value::Value;
