use sensor_device::{AllocError, RegisterError};

/// Error returned when registering one channel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistrationError {
    /// No descriptor storage was left.
    OutOfMemory,
    /// The host rejected the descriptor.
    Rejected(RegisterError),
}

impl RegistrationError {
    /// Returns the integer status code of this error.
    #[must_use]
    pub fn code(&self) -> i32 {
        -1
    }
}

impl From<AllocError> for RegistrationError {
    fn from(_: AllocError) -> Self {
        Self::OutOfMemory
    }
}

impl core::fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfMemory => write!(f, "out of memory for the sensor device"),
            Self::Rejected(err) => write!(f, "device register error: {err}"),
        }
    }
}

impl core::error::Error for RegistrationError {}

/// Error returned by [`Ms5805::init()`](crate::Ms5805::init).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitError<E> {
    /// No channel was selected.
    NoChannels,
    /// The driver already holds a sensor session, or another initialization is in progress.
    AlreadyInitialized,
    /// The sensor-access library could not open a session.
    Create(E),
    /// At least one channel could not be registered; the session has been closed.
    Register {
        /// Number of channels that failed to register.
        failed: usize,
    },
}

impl<E> InitError<E> {
    /// Returns the integer status code of this error.
    #[must_use]
    pub fn code(&self) -> i32 {
        -1
    }
}

impl<E> core::fmt::Display for InitError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NoChannels => write!(f, "no sensor channel selected"),
            Self::AlreadyInitialized => write!(f, "sensor already initialized"),
            Self::Create(_) => write!(f, "failed to open a sensor session"),
            Self::Register { failed } => write!(f, "{failed} channel(s) failed to register"),
        }
    }
}

impl<E: core::fmt::Debug> core::error::Error for InitError<E> {}
