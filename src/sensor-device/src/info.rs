use crate::{Category, MeasurementUnit};

/// Vendor of a sensor part.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Vendor {
    /// Unknown or unlisted vendor.
    Unknown,
    /// STMicroelectronics.
    Stm,
    /// Bosch Sensortec.
    Bosch,
    /// InvenSense.
    Invensense,
    /// Semtech.
    Semtech,
    /// Goertek.
    Goertek,
    /// MiraMEMS.
    MiraMems,
    /// Dallas Semiconductor.
    Dallas,
    /// Aosong (Asair).
    Asair,
    /// Sensirion.
    Sensirion,
    /// Texas Instruments.
    Ti,
    /// Plantower.
    Plantower,
    /// ams AG.
    Ams,
    /// Maxim Integrated.
    Maxim,
    /// Melexis.
    Melexis,
}

/// Bus a sensor part is attached to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum InterfaceKind {
    /// No interface; the state of a zeroed descriptor.
    None,
    /// I2C.
    I2c,
    /// SPI.
    Spi,
    /// UART.
    Uart,
    /// 1-Wire.
    OneWire,
}

/// Static metadata of a registered sensor device.
///
/// Filled in once by the driver before registration and never modified afterwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorInfo {
    /// Physical quantity the device reports.
    pub category: Category,
    /// Vendor of the part.
    pub vendor: Vendor,
    /// Model name of the part.
    pub model: &'static str,
    /// Unit of every value the device reports.
    pub unit: MeasurementUnit,
    /// Bus the part is attached to.
    pub intf_type: InterfaceKind,
    /// Smallest representable value, in [`unit`](SensorInfo::unit).
    pub range_min: i32,
    /// Largest representable value, in [`unit`](SensorInfo::unit).
    pub range_max: i32,
    /// Minimum period between two readings, in milliseconds.
    pub period_min: u32,
}

impl SensorInfo {
    /// Metadata of a freshly allocated descriptor.
    pub const ZEROED: Self = Self {
        category: Category::Unknown,
        vendor: Vendor::Unknown,
        model: "",
        unit: MeasurementUnit::None,
        intf_type: InterfaceKind::None,
        range_min: 0,
        range_max: 0,
        period_min: 0,
    };
}
