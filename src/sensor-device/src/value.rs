/// Represents a value obtained from a sensor device.
///
/// Values are scaled integers: the [`MeasurementUnit`](crate::MeasurementUnit) declared in the
/// device's [`SensorInfo`](crate::SensorInfo) carries the scale.
/// For instance, a temperature sensor declaring [`DeciCelsius`](crate::MeasurementUnit::DeciCelsius)
/// reporting `235` measured 23.5 °C.
/// This is required to avoid handling floats.
// NOTE(derive): we do not implement `Eq` or `PartialOrd` on purpose: `Eq` would prevent us from
// possibly adding floats in the future and `PartialOrd` does not make sense because interpreting
// the value requires the unit associated with this `Value`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Value {
    value: i32,
}

impl Value {
    /// Creates a new value.
    ///
    /// This constructor is intended for sensor driver implementors only.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self { value }
    }

    /// Returns the value.
    #[must_use]
    pub fn get(&self) -> i32 {
        self.value
    }
}
