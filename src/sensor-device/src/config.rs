use crate::InterfaceKind;

/// Physical interface binding of a sensor.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorInterface {
    /// Name of the bus device the part is attached to (e.g., `"i2c1"`).
    pub dev_name: &'static str,
    /// Kind of bus.
    pub intf_type: InterfaceKind,
    /// Bus address of the part, when the bus is addressed and the address is not fixed.
    pub address: Option<u8>,
}

impl SensorInterface {
    /// Creates an I2C binding on the named bus, using the part's default address.
    #[must_use]
    pub const fn i2c(dev_name: &'static str) -> Self {
        Self {
            dev_name,
            intf_type: InterfaceKind::I2c,
            address: None,
        }
    }
}

/// Reporting mode of a sensor.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Not configured.
    None,
    /// Readings are fetched on demand.
    Polling,
    /// The part signals available readings through an interrupt.
    Interrupt,
    /// The part buffers readings in a FIFO.
    Fifo,
}

/// Power mode of a sensor.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Power {
    /// Powered down.
    Down,
    /// Normal operation.
    Normal,
    /// Low power.
    Low,
    /// High performance.
    High,
}

/// Configuration bundle supplied by the code instantiating a sensor driver.
///
/// Drivers copy it verbatim into the descriptor of every device they register.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorConfig {
    /// Interface binding.
    pub intf: SensorInterface,
    /// Reporting mode.
    pub mode: Mode,
    /// Power mode.
    pub power: Power,
    /// Output data rate in Hz; `0` when unspecified.
    pub odr: u16,
    /// Measurement range in the device unit; `0` when unspecified.
    pub range: i32,
}

impl SensorConfig {
    /// Configuration of a freshly allocated descriptor.
    pub const ZEROED: Self = Self {
        intf: SensorInterface {
            dev_name: "",
            intf_type: InterfaceKind::None,
            address: None,
        },
        mode: Mode::None,
        power: Power::Down,
        odr: 0,
        range: 0,
    };

    /// Creates a polling configuration with normal power and unspecified rate and range.
    #[must_use]
    pub const fn new(intf: SensorInterface) -> Self {
        Self {
            intf,
            mode: Mode::Polling,
            power: Power::Normal,
            odr: 0,
            range: 0,
        }
    }
}
