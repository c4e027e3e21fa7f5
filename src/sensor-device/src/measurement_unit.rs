/// Represents a unit of measurement.
///
/// The unit applies to the [`Value`](crate::Value) of every
/// [`SensorData`](crate::SensorData) produced by a device, and to the range bounds of its
/// [`SensorInfo`](crate::SensorInfo).
///
/// # For sensor driver implementors
///
/// Missing variants can be added when required.
/// Please open an issue to discuss it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum MeasurementUnit {
    /// No unit; the state of a zeroed descriptor.
    None,
    /// Thousandth of the [standard acceleration *g*](https://en.wikipedia.org/wiki/G-force).
    MilliG,
    /// Thousandth of a degree per second.
    MilliDegreesPerSecond,
    /// Milligauss (mG).
    MilliGauss,
    /// Lux (lx).
    Lux,
    /// Centimeter (cm).
    Centimeter,
    /// Millimeter (mm).
    Millimeter,
    /// Pascal (Pa).
    Pascal,
    /// Per mille (‰).
    Permille,
    /// Tenth of a degree Celsius.
    DeciCelsius,
    /// Hertz (Hz).
    Hertz,
    /// Dimensionless count (e.g., steps).
    One,
    /// Beats per minute.
    BeatsPerMinute,
    /// Millinewton (mN).
    MilliNewton,
}

impl core::fmt::Display for MeasurementUnit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        #[expect(clippy::match_same_arms)]
        match self {
            Self::None => write!(f, ""),
            Self::MilliG => write!(f, "mg"),
            Self::MilliDegreesPerSecond => write!(f, "mdps"),
            Self::MilliGauss => write!(f, "mG"),
            Self::Lux => write!(f, "lx"),
            Self::Centimeter => write!(f, "cm"),
            Self::Millimeter => write!(f, "mm"),
            Self::Pascal => write!(f, "Pa"),
            Self::Permille => write!(f, "‰"),
            Self::DeciCelsius => write!(f, "d°C"), // The Unicode Standard v15 recommends using U+00B0 + U+0043.
            Self::Hertz => write!(f, "Hz"),
            Self::One => write!(f, ""),
            Self::BeatsPerMinute => write!(f, "bpm"),
            Self::MilliNewton => write!(f, "mN"),
        }
    }
}
