use core::ops::{Deref, DerefMut};

use crate::{SensorConfig, SensorInfo, SensorOps};

/// Descriptor of one sensor device, as handed to the host at registration.
#[derive(Copy, Clone)]
pub struct SensorDevice<'a> {
    /// Static metadata.
    pub info: SensorInfo,
    /// Configuration supplied when instantiating the driver.
    pub config: SensorConfig,
    /// Callbacks; [`None`] until the driver installs them.
    pub ops: Option<&'a dyn SensorOps>,
}

impl SensorDevice<'_> {
    /// Returns a zero-filled descriptor.
    #[must_use]
    pub const fn zeroed() -> Self {
        Self {
            info: SensorInfo::ZEROED,
            config: SensorConfig::ZEROED,
            ops: None,
        }
    }
}

impl core::fmt::Debug for SensorDevice<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SensorDevice")
            .field("info", &self.info)
            .field("config", &self.config)
            .field("ops", &self.ops.is_some())
            .finish()
    }
}

/// Access flags of a registered device.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceFlags(u16);

impl DeviceFlags {
    /// Read-only device.
    pub const RDONLY: Self = Self(0x001);
    /// Write-only device.
    pub const WRONLY: Self = Self(0x002);
    /// Read-write device.
    pub const RDWR: Self = Self(0x003);

    /// Returns whether the device can be read from.
    #[must_use]
    pub const fn is_readable(self) -> bool {
        self.0 & Self::RDONLY.0 != 0
    }
}

/// Storage for one descriptor, obtained from [`SensorHost::allocate()`](crate::SensorHost::allocate).
///
/// A slot is either consumed by a successful registration or handed back to the host with
/// [`SensorHost::release()`](crate::SensorHost::release).
/// As it cannot be copied, it cannot be released twice.
#[derive(Debug)]
#[must_use]
pub struct DeviceSlot<'a> {
    device: SensorDevice<'a>,
    // Counted in the reservations of the `Registry` that allocated it.
    allocated: bool,
}

impl<'a> DeviceSlot<'a> {
    /// Creates a slot holding a zeroed descriptor.
    ///
    /// This constructor is intended for [`SensorHost`](crate::SensorHost) implementors.
    /// Such a slot holds no [`Registry`](crate::Registry) reservation: registering it needs a
    /// free entry, and releasing it frees none.
    pub const fn new() -> Self {
        Self {
            device: SensorDevice::zeroed(),
            allocated: false,
        }
    }

    pub(crate) const fn allocated() -> Self {
        Self {
            device: SensorDevice::zeroed(),
            allocated: true,
        }
    }

    pub(crate) fn is_allocated(&self) -> bool {
        self.allocated
    }

    /// Consumes the slot, returning the descriptor it holds.
    #[must_use]
    pub fn into_device(self) -> SensorDevice<'a> {
        self.device
    }
}

impl Default for DeviceSlot<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Deref for DeviceSlot<'a> {
    type Target = SensorDevice<'a>;

    fn deref(&self) -> &Self::Target {
        &self.device
    }
}

impl DerefMut for DeviceSlot<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.device
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;

    #[test]
    fn zeroed_slot() {
        let slot = DeviceSlot::new();
        assert_eq!(slot.info.category, Category::Unknown);
        assert_eq!(slot.info.range_max, 0);
        assert!(slot.ops.is_none());
    }

    #[test]
    fn flags() {
        assert!(DeviceFlags::RDONLY.is_readable());
        assert!(!DeviceFlags::WRONLY.is_readable());
        assert!(DeviceFlags::RDWR.is_readable());
    }
}
