/// Categories a sensor device can be part of.
///
/// One registered device belongs to exactly one category; a driver exposing several physical
/// quantities registers one device per quantity.
///
/// # For sensor driver implementors
///
/// Missing variants can be added when required.
/// Please open an issue to discuss it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Category {
    /// No category; the state of a zeroed descriptor.
    Unknown,
    /// Accelerometer.
    Accelerometer,
    /// Gyroscope.
    Gyroscope,
    /// Magnetometer.
    Magnetometer,
    /// Temperature sensor.
    Temperature,
    /// Humidity sensor.
    Humidity,
    /// Pressure sensor (barometer).
    Pressure,
    /// Light sensor.
    Light,
    /// Proximity sensor.
    Proximity,
    /// Heart rate sensor.
    HeartRate,
    /// TVOC sensor.
    Tvoc,
    /// Noise level sensor.
    Noise,
    /// Step counter.
    Step,
    /// Force sensor.
    Force,
}

impl Category {
    /// Length in bytes of the longest [prefix](Category::name_prefix).
    pub const PREFIX_MAX: usize = 4;

    /// Returns the prefix the host prepends to the device name of a sensor of this category.
    ///
    /// Returns [`None`] for [`Category::Unknown`], which cannot be registered.
    #[must_use]
    pub const fn name_prefix(self) -> Option<&'static str> {
        match self {
            Self::Unknown => None,
            Self::Accelerometer => Some("acce"),
            Self::Gyroscope => Some("gyro"),
            Self::Magnetometer => Some("mag"),
            Self::Temperature => Some("temp"),
            Self::Humidity => Some("humi"),
            Self::Pressure => Some("baro"),
            Self::Light => Some("li"),
            Self::Proximity => Some("pr"),
            Self::HeartRate => Some("hr"),
            Self::Tvoc => Some("tvoc"),
            Self::Noise => Some("noi"),
            Self::Step => Some("step"),
            Self::Force => Some("forc"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_fit_prefix_max() {
        let categories = [
            Category::Accelerometer,
            Category::Gyroscope,
            Category::Magnetometer,
            Category::Temperature,
            Category::Humidity,
            Category::Pressure,
            Category::Light,
            Category::Proximity,
            Category::HeartRate,
            Category::Tvoc,
            Category::Noise,
            Category::Step,
            Category::Force,
        ];
        for category in categories {
            let prefix = category.name_prefix().unwrap();
            assert!(prefix.len() <= Category::PREFIX_MAX, "{prefix}");
        }
    }

    #[test]
    fn unknown_has_no_prefix() {
        assert_eq!(Category::Unknown.name_prefix(), None);
        assert_eq!(Category::Pressure.name_prefix(), Some("baro"));
        assert_eq!(Category::Temperature.name_prefix(), Some("temp"));
    }
}
