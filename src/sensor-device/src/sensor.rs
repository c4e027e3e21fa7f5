use embassy_time::Instant;

use crate::{Category, Mode, Power, SensorInfo, Value};

/// Callbacks the host invokes on a registered sensor device.
///
/// One implementor may back several devices (e.g., a part measuring both pressure and
/// temperature); the [`SensorInfo`] passed to each callback identifies the device being
/// addressed.
///
/// The host calls these methods synchronously and must not call them concurrently for devices
/// sharing an implementor, unless the implementor documents otherwise.
pub trait SensorOps: Send + Sync {
    /// Writes fresh readings of the device described by `info` into `buf`.
    ///
    /// Returns the number of [`SensorData`] records written, which is `0` when the device cannot
    /// produce a reading right now or is of a category the implementor does not handle.
    fn fetch_data(&self, info: &SensorInfo, buf: &mut [SensorData]) -> usize;

    /// Applies a device command.
    ///
    /// # Errors
    ///
    /// Returns a [`ControlError`] when the command is not supported or its argument is invalid.
    fn control(&self, info: &SensorInfo, cmd: Command<'_>) -> Result<(), ControlError>;
}

/// A reading record produced by [`SensorOps::fetch_data()`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorData {
    /// Category of the device that produced this record.
    pub category: Category,
    /// Measured value, in the unit declared by the device.
    pub value: Value,
    /// Time at which the reading was taken.
    pub timestamp: Instant,
}

impl SensorData {
    /// An empty record, used to initialize reading buffers.
    pub const EMPTY: Self = Self {
        category: Category::Unknown,
        value: Value::new(0),
        timestamp: Instant::from_ticks(0),
    };
}

/// Commands the host can issue to a sensor device.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Command<'a> {
    /// Read the part identifier into the argument.
    GetId(&'a mut u8),
    /// Set the measurement range, in the device unit.
    SetRange(i32),
    /// Set the output data rate, in Hz.
    SetOdr(u16),
    /// Set the reporting mode.
    SetMode(Mode),
    /// Set the power mode.
    SetPower(Power),
    /// Run the part's self test, storing whether it passed into the argument.
    SelfTest(&'a mut bool),
}

impl Command<'_> {
    /// Returns the numeric command code, as used in host diagnostics.
    #[must_use]
    pub fn code(&self) -> u8 {
        match self {
            Self::GetId(_) => 0,
            Self::SetRange(_) => 2,
            Self::SetOdr(_) => 3,
            Self::SetMode(_) => 4,
            Self::SetPower(_) => 5,
            Self::SelfTest(_) => 6,
        }
    }
}

/// Error returned by [`SensorOps::control()`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum ControlError {
    /// The device does not support the command.
    Unsupported,
    /// The command argument is out of range for the device.
    InvalidArgument,
}

impl core::fmt::Display for ControlError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Unsupported => write!(f, "command not supported by the sensor device"),
            Self::InvalidArgument => write!(f, "invalid command argument"),
        }
    }
}

impl core::error::Error for ControlError {}
