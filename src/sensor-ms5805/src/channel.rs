use sensor_device::{Category, InterfaceKind, MeasurementUnit, SensorInfo, Value, Vendor};

use crate::Ms5805Driver;

/// A physical quantity measured by the MS5805, exposed as its own sensor device.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Barometric pressure.
    Baro,
    /// Temperature.
    Temp,
}

const MIN_PERIOD_MS: u32 = 2;

const BARO_INFO: SensorInfo = SensorInfo {
    category: Category::Pressure,
    vendor: Vendor::Unknown,
    model: "ms5805_baro",
    unit: MeasurementUnit::Pascal,
    intf_type: InterfaceKind::I2c,
    range_min: 1000,
    range_max: 200_000,
    period_min: MIN_PERIOD_MS,
};

const TEMP_INFO: SensorInfo = SensorInfo {
    category: Category::Temperature,
    vendor: Vendor::Unknown,
    model: "ms5805_temp",
    unit: MeasurementUnit::DeciCelsius,
    intf_type: InterfaceKind::I2c,
    range_min: -40,
    range_max: 85,
    period_min: MIN_PERIOD_MS,
};

impl Channel {
    /// All channels, in registration order.
    pub const ALL: [Self; 2] = [Self::Baro, Self::Temp];

    /// Returns the metadata of the device registered for this channel.
    #[must_use]
    pub const fn info(self) -> SensorInfo {
        match self {
            Self::Baro => BARO_INFO,
            Self::Temp => TEMP_INFO,
        }
    }

    /// Returns the device category of this channel.
    #[must_use]
    pub const fn category(self) -> Category {
        self.info().category
    }

    /// Returns the channel reporting the given category, if any.
    #[must_use]
    pub fn from_category(category: Category) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.category() == category)
    }

    /// Returns the short name used in log messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Baro => "baro",
            Self::Temp => "temp",
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Self::Baro => 0b01,
            Self::Temp => 0b10,
        }
    }

    // The temperature is cached in 0.01 °C and reported in 0.1 °C, truncating toward zero:
    // a cached 235 (2.35 °C) reads as 23 (2.3 °C).
    pub(crate) fn value<D: Ms5805Driver>(self, handle: &D) -> Value {
        match self {
            Self::Baro => Value::new(handle.baro()),
            Self::Temp => Value::new(handle.temp() / 10),
        }
    }
}

/// Set of channels to register.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Channels(u8);

impl Channels {
    /// No channel.
    pub const NONE: Self = Self(0);
    /// Pressure only.
    pub const BARO: Self = Self(Channel::Baro.bit());
    /// Temperature only.
    pub const TEMP: Self = Self(Channel::Temp.bit());
    /// Pressure and temperature.
    pub const BOTH: Self = Self(Channel::Baro.bit() | Channel::Temp.bit());

    /// Returns whether the set contains `channel`.
    #[must_use]
    pub const fn contains(self, channel: Channel) -> bool {
        self.0 & channel.bit() != 0
    }

    /// Adds `channel` to the set.
    pub fn insert(&mut self, channel: Channel) {
        self.0 |= channel.bit();
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the channels of the set, in registration order.
    pub fn iter(self) -> impl Iterator<Item = Channel> {
        Channel::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl Default for Channels {
    fn default() -> Self {
        Self::BOTH
    }
}

impl From<Channel> for Channels {
    fn from(channel: Channel) -> Self {
        Self(channel.bit())
    }
}

impl core::ops::BitOr for Channels {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}
