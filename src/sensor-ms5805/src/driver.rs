//! Interface of the sensor-access library.

/// Oversampling ratio of the MS5805 ADC.
///
/// Higher ratios lower the noise at the cost of a longer conversion.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Osr {
    /// 256 samples.
    _256,
    /// 512 samples.
    _512,
    /// 1024 samples.
    _1024,
    /// 2048 samples.
    _2048,
    /// 4096 samples.
    #[default]
    _4096,
    /// 8192 samples.
    _8192,
}

/// Options passed to [`Ms5805Driver::init()`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Options {
    /// Oversampling ratio used for both conversions.
    pub osr: Osr,
}

/// A session with one MS5805 part, as provided by the sensor-access library.
///
/// The library owns the bus conversation, the calibration PROM and the compensation of raw
/// conversions; this crate only triggers measurements and reads the cached results.
pub trait Ms5805Driver: Sized + Send {
    /// Error reported by the library.
    type Error: core::fmt::Debug;

    /// Opens a session on the named bus.
    ///
    /// `None` selects the library defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when the bus cannot be opened or the part does not respond.
    fn init(bus_name: &str, options: Option<&Options>) -> Result<Self, Self::Error>;

    /// Runs one pressure and one temperature conversion and caches both results.
    ///
    /// # Errors
    ///
    /// Returns an error when the conversion fails; cached values are then unspecified.
    fn measure(&mut self) -> Result<(), Self::Error>;

    /// Returns the last measured pressure, in Pa.
    fn baro(&self) -> i32;

    /// Returns the last measured temperature, in hundredths of a degree Celsius.
    ///
    /// The temperature channel reports this value divided by ten, in
    /// [`MeasurementUnit::DeciCelsius`](sensor_device::MeasurementUnit::DeciCelsius).
    fn temp(&self) -> i32;

    /// Closes the session.
    fn deinit(self);
}
