//! Registration of sensor devices with the host.

use heapless::{String, Vec};

use crate::{
    Category, Command, ControlError, DeviceFlags, DeviceSlot, SensorData, SensorDevice,
};

/// Maximum number of devices a [`DefaultRegistry`] holds.
///
/// Can be set with the `CONFIG_SENSOR_REGISTRY_MAX` environment variable at build time; must be
/// at least 1.
pub const REGISTRY_MAX: usize =
    sensor_utils::usize_from_env_or!("CONFIG_SENSOR_REGISTRY_MAX", 8, 1);

/// Maximum length in bytes of a device name, including its category prefix.
///
/// Longer names are truncated.
/// Can be set with the `CONFIG_SENSOR_NAME_MAX` environment variable at build time; must leave
/// room for the longest prefix, its separator and one character.
pub const NAME_MAX: usize = sensor_utils::usize_from_env_or!(
    "CONFIG_SENSOR_NAME_MAX",
    16,
    Category::PREFIX_MAX + 2
);

/// A device name, as stored by the [`Registry`].
pub type DeviceName = String<NAME_MAX>;

/// A [`Registry`] holding up to [`REGISTRY_MAX`] devices.
pub type DefaultRegistry<'a> = Registry<'a, REGISTRY_MAX>;

/// The registration side of the host sensor framework, as seen by sensor drivers.
pub trait SensorHost<'a> {
    /// Obtains storage for one zeroed descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] when no storage is left.
    fn allocate(&mut self) -> Result<DeviceSlot<'a>, AllocError>;

    /// Registers the descriptor held by `slot` under `name`.
    ///
    /// # Errors
    ///
    /// Returns the slot alongside the reason when the host rejects the descriptor; the caller
    /// then owns the slot again and must [`release()`](SensorHost::release) it.
    fn register(
        &mut self,
        slot: DeviceSlot<'a>,
        name: &str,
        flags: DeviceFlags,
    ) -> Result<(), Rejected<'a>>;

    /// Hands an unregistered slot back to the host.
    fn release(&mut self, slot: DeviceSlot<'a>);

    /// Removes the device of the given category registered under `name`.
    ///
    /// Returns whether such a device was registered.
    fn unregister(&mut self, name: &str, category: Category) -> bool;
}

/// No descriptor storage is left.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AllocError;

impl core::fmt::Display for AllocError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "no descriptor storage left")
    }
}

impl core::error::Error for AllocError {}

/// Reason for rejecting a registration.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum RegisterError {
    /// The descriptor has no callbacks installed.
    MissingOps,
    /// The descriptor category cannot be registered.
    InvalidCategory,
    /// A device with the same name is already registered.
    NameInUse,
    /// The slot holds no reservation and no room is left.
    NoSpace,
}

impl core::fmt::Display for RegisterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingOps => write!(f, "sensor device has no ops"),
            Self::InvalidCategory => write!(f, "sensor device has no valid category"),
            Self::NameInUse => write!(f, "device name already in use"),
            Self::NoSpace => write!(f, "no room left for the device"),
        }
    }
}

impl core::error::Error for RegisterError {}

/// A rejected registration, handing the slot back to its owner.
#[derive(Debug)]
pub struct Rejected<'a> {
    /// The slot passed to [`SensorHost::register()`].
    pub slot: DeviceSlot<'a>,
    /// Why the host rejected it.
    pub error: RegisterError,
}

/// Error when accessing a registered device.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum DeviceError {
    /// No device is registered under that name.
    NotFound,
    /// The device was registered without read access.
    NotReadable,
    /// The device rejected a command.
    Control(ControlError),
}

impl core::fmt::Display for DeviceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "no such sensor device"),
            Self::NotReadable => write!(f, "sensor device is not readable"),
            Self::Control(err) => write!(f, "control failed: {err}"),
        }
    }
}

impl core::error::Error for DeviceError {}

impl From<ControlError> for DeviceError {
    fn from(err: ControlError) -> Self {
        Self::Control(err)
    }
}

/// A device held by a [`Registry`].
#[derive(Debug)]
pub struct RegisteredDevice<'a> {
    name: DeviceName,
    flags: DeviceFlags,
    device: SensorDevice<'a>,
}

impl<'a> RegisteredDevice<'a> {
    /// Returns the full device name, including its category prefix.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the access flags given at registration.
    #[must_use]
    pub fn flags(&self) -> DeviceFlags {
        self.flags
    }

    /// Returns the descriptor.
    #[must_use]
    pub fn device(&self) -> &SensorDevice<'a> {
        &self.device
    }
}

/// Fixed-capacity store of registered sensor devices.
///
/// Devices are named `<prefix>_<name>`, the prefix being derived from their
/// [`Category`](Category::name_prefix), so that the channels of a multi-quantity part can be
/// registered under the same driver name.
pub struct Registry<'a, const N: usize> {
    devices: Vec<RegisteredDevice<'a>, N>,
    // Slots handed out by `allocate()` and neither registered nor released yet.
    reserved: usize,
}

impl<'a, const N: usize> Registry<'a, N> {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            devices: Vec::new(),
            reserved: 0,
        }
    }

    /// Returns the registered devices, in registration order.
    pub fn devices(&self) -> impl ExactSizeIterator<Item = &RegisteredDevice<'a>> {
        self.devices.iter()
    }

    /// Returns the number of registered devices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Returns whether no device is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Returns the number of slots allocated but neither registered nor released.
    #[must_use]
    pub fn reserved(&self) -> usize {
        self.reserved
    }

    /// Returns the device registered under the full `device_name`.
    #[must_use]
    pub fn find(&self, device_name: &str) -> Option<&RegisteredDevice<'a>> {
        self.devices.iter().find(|d| d.name == device_name)
    }

    /// Reads from the device registered under the full `device_name`.
    ///
    /// Returns the number of records written into `buf`.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::NotFound`] if no such device exists, and
    /// [`DeviceError::NotReadable`] if it was registered without read access.
    pub fn read(&self, device_name: &str, buf: &mut [SensorData]) -> Result<usize, DeviceError> {
        let registered = self.find(device_name).ok_or(DeviceError::NotFound)?;

        if !registered.flags.is_readable() {
            return Err(DeviceError::NotReadable);
        }

        let device = &registered.device;
        Ok(device.ops.map_or(0, |ops| ops.fetch_data(&device.info, buf)))
    }

    /// Issues a command to the device registered under the full `device_name`.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::NotFound`] if no such device exists, and
    /// [`DeviceError::Control`] if the device rejects the command.
    pub fn control(&self, device_name: &str, cmd: Command<'_>) -> Result<(), DeviceError> {
        let registered = self.find(device_name).ok_or(DeviceError::NotFound)?;
        let device = &registered.device;

        match device.ops {
            Some(ops) => ops.control(&device.info, cmd).map_err(DeviceError::from),
            None => Err(DeviceError::Control(ControlError::Unsupported)),
        }
    }
}

impl<const N: usize> Default for Registry<'_, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, const N: usize> SensorHost<'a> for Registry<'a, N> {
    fn allocate(&mut self) -> Result<DeviceSlot<'a>, AllocError> {
        if self.devices.len() + self.reserved >= N {
            return Err(AllocError);
        }

        self.reserved += 1;
        Ok(DeviceSlot::allocated())
    }

    fn register(
        &mut self,
        slot: DeviceSlot<'a>,
        name: &str,
        flags: DeviceFlags,
    ) -> Result<(), Rejected<'a>> {
        if slot.ops.is_none() {
            return Err(Rejected {
                slot,
                error: RegisterError::MissingOps,
            });
        }

        let Some(device_name) = device_name(slot.info.category, name) else {
            return Err(Rejected {
                slot,
                error: RegisterError::InvalidCategory,
            });
        };

        if self.find(&device_name).is_some() {
            return Err(Rejected {
                slot,
                error: RegisterError::NameInUse,
            });
        }

        let allocated = slot.is_allocated();
        if !allocated && self.devices.len() + self.reserved >= N {
            return Err(Rejected {
                slot,
                error: RegisterError::NoSpace,
            });
        }

        let registered = RegisteredDevice {
            name: device_name,
            flags,
            device: slot.into_device(),
        };

        if let Err(registered) = self.devices.push(registered) {
            let mut slot = if allocated {
                DeviceSlot::allocated()
            } else {
                DeviceSlot::new()
            };
            *slot = registered.device;
            return Err(Rejected {
                slot,
                error: RegisterError::NoSpace,
            });
        }

        if allocated {
            self.reserved = self.reserved.saturating_sub(1);
        }
        Ok(())
    }

    fn release(&mut self, slot: DeviceSlot<'a>) {
        if slot.is_allocated() {
            self.reserved = self.reserved.saturating_sub(1);
        }
    }

    fn unregister(&mut self, name: &str, category: Category) -> bool {
        let Some(device_name) = device_name(category, name) else {
            return false;
        };

        if let Some(pos) = self.devices.iter().position(|d| d.name == device_name) {
            self.devices.remove(pos);
            true
        } else {
            false
        }
    }
}

/// Builds the full name of a device of `category` registered under `name`.
///
/// The result is truncated to [`NAME_MAX`] bytes on a character boundary.
/// Returns [`None`] for categories without a [prefix](Category::name_prefix).
#[must_use]
pub fn device_name(category: Category, name: &str) -> Option<DeviceName> {
    let prefix = category.name_prefix()?;

    let mut full = DeviceName::new();
    for c in prefix.chars().chain(core::iter::once('_')).chain(name.chars()) {
        if full.push(c).is_err() {
            break;
        }
    }

    Some(full)
}
