use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, mutex::Mutex};
use embassy_time::Instant;
use sensor_device::{
    Command, ControlError, DeviceFlags, Rejected, SensorConfig, SensorData, SensorHost,
    SensorInfo, SensorInterface, SensorOps,
};

use crate::{Channel, Channels, InitError, Ms5805Driver, RegistrationError};

/// Opens a session with the part bound to `intf`.
///
/// The sensor-access library is called once with its default options; its result is returned
/// unchanged.
///
/// # Errors
///
/// Returns the library error when the session cannot be opened.
pub fn create<D: Ms5805Driver>(intf: &SensorInterface) -> Result<D, D::Error> {
    D::init(intf.dev_name, None)
}

/// MS5805 sensor driver.
///
/// Holds the session with the part and backs the devices registered for its
/// [`Channel`]s: both devices share the session, so fetching either channel runs a full
/// measurement of both quantities.
///
/// The session is kept behind an [`embassy_sync`] mutex, which is only ever acquired with
/// `try_lock()` from the synchronous callbacks: bus transfers never run inside a critical
/// section, and a callback finding the session busy returns without touching the part.
pub struct Ms5805<D> {
    handle: Mutex<CriticalSectionRawMutex, Option<D>>,
}

impl<D> Ms5805<D> {
    /// Creates a driver without a session, suitable for a `static`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            handle: Mutex::new(None),
        }
    }
}

impl<D> Default for Ms5805<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Ms5805Driver> Ms5805<D> {
    /// Creates a driver using an already opened session.
    #[must_use]
    pub const fn with_handle(handle: D) -> Self {
        Self {
            handle: Mutex::new(Some(handle)),
        }
    }

    /// Returns whether the driver holds a session.
    ///
    /// A session currently in use counts as held.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        match self.handle.try_lock() {
            Ok(handle) => handle.is_some(),
            Err(_) => true,
        }
    }

    /// Runs `f` on the session.
    ///
    /// Returns [`None`] without running `f` when there is no session or it is in use.
    pub fn with_handle_mut<R>(&self, f: impl FnOnce(&mut D) -> R) -> Option<R> {
        self.handle.try_lock().ok()?.as_mut().map(f)
    }

    /// Opens a session on `cfg.intf` and registers a device for each of `channels` under
    /// `name`.
    ///
    /// All selected channels are attempted.
    /// If any of them fails, the channels that did register are unregistered again and the
    /// session is closed, so that no registered device outlives the session.
    ///
    /// The session stays locked until registration is decided; devices read in the meantime
    /// produce no readings.
    ///
    /// # Errors
    ///
    /// See [`InitError`].
    pub fn init<'a, H: SensorHost<'a>>(
        &'a self,
        name: &str,
        cfg: &SensorConfig,
        channels: Channels,
        host: &mut H,
    ) -> Result<(), InitError<D::Error>> {
        if channels.is_empty() {
            return Err(InitError::NoChannels);
        }

        // Held until registration is decided.
        let Ok(mut session) = self.handle.try_lock() else {
            return Err(InitError::AlreadyInitialized);
        };
        if session.is_some() {
            return Err(InitError::AlreadyInitialized);
        }

        let handle = create::<D>(&cfg.intf).map_err(|err| {
            sensor_log::error!("MS5805: failed to open a session on {}", cfg.intf.dev_name);
            InitError::Create(err)
        })?;

        let mut registered = Channels::NONE;
        let mut failed = 0;
        for channel in channels.iter() {
            match self.register_channel(channel, name, cfg, host) {
                Ok(()) => registered.insert(channel),
                Err(_) => failed += 1,
            }
        }

        if failed != 0 {
            for channel in registered.iter() {
                host.unregister(name, channel.category());
            }
            handle.deinit();
            return Err(InitError::Register { failed });
        }

        *session = Some(handle);
        Ok(())
    }

    /// Registers the pressure device under `name`.
    ///
    /// # Errors
    ///
    /// See [`RegistrationError`].
    pub fn register_baro<'a, H: SensorHost<'a>>(
        &'a self,
        name: &str,
        cfg: &SensorConfig,
        host: &mut H,
    ) -> Result<(), RegistrationError> {
        self.register_channel(Channel::Baro, name, cfg, host)
    }

    /// Registers the temperature device under `name`.
    ///
    /// # Errors
    ///
    /// See [`RegistrationError`].
    pub fn register_temp<'a, H: SensorHost<'a>>(
        &'a self,
        name: &str,
        cfg: &SensorConfig,
        host: &mut H,
    ) -> Result<(), RegistrationError> {
        self.register_channel(Channel::Temp, name, cfg, host)
    }

    /// Registers the device of `channel` under `name`, read-only.
    ///
    /// `cfg` is copied into the descriptor as is.
    /// A descriptor rejected by the host is released before returning.
    ///
    /// # Errors
    ///
    /// See [`RegistrationError`].
    pub fn register_channel<'a, H: SensorHost<'a>>(
        &'a self,
        channel: Channel,
        name: &str,
        cfg: &SensorConfig,
        host: &mut H,
    ) -> Result<(), RegistrationError> {
        let mut slot = host.allocate()?;

        slot.info = channel.info();
        slot.config = *cfg;
        slot.ops = Some(self);

        match host.register(slot, name, DeviceFlags::RDONLY) {
            Ok(()) => {
                sensor_log::info!("MS5805: {} sensor init success", channel.label());
                Ok(())
            }
            Err(Rejected { slot, error }) => {
                sensor_log::error!("MS5805: device register err: {}", error);
                host.release(slot);
                Err(RegistrationError::Rejected(error))
            }
        }
    }

    /// Closes the session, if any.
    ///
    /// Waits for a reading in progress to complete.
    /// Returns whether a session was open.
    /// Devices still registered afterwards produce no readings.
    pub fn deinit(&self) -> bool {
        let handle = embassy_futures::block_on(self.handle.lock()).take();
        match handle {
            Some(handle) => {
                handle.deinit();
                true
            }
            None => false,
        }
    }
}

impl<D: Ms5805Driver> SensorOps for Ms5805<D> {
    fn fetch_data(&self, info: &SensorInfo, buf: &mut [SensorData]) -> usize {
        let Some(channel) = Channel::from_category(info.category) else {
            return 0;
        };
        let Some(data) = buf.first_mut() else {
            return 0;
        };

        let Ok(mut session) = self.handle.try_lock() else {
            sensor_log::debug!("MS5805: {} read while busy", channel.label());
            return 0;
        };
        let Some(handle) = session.as_mut() else {
            return 0;
        };

        if handle.measure().is_err() {
            sensor_log::warn!("MS5805: {} measurement failed", channel.label());
            return 0;
        }
        let value = channel.value(handle);
        drop(session);

        sensor_log::trace!("MS5805: {} = {}", channel.label(), value.get());

        *data = SensorData {
            category: info.category,
            value,
            timestamp: Instant::now(),
        };

        1
    }

    fn control(&self, _info: &SensorInfo, cmd: Command<'_>) -> Result<(), ControlError> {
        sensor_log::debug!("MS5805: control command {}", cmd.code());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use sensor_device::{Category, Mode, Power, SensorDevice, Value};

    use super::*;

    std::thread_local! {
        static DEINITS: Cell<usize> = const { Cell::new(0) };
    }

    #[derive(Debug)]
    struct MockError;

    struct Mock {
        baro: i32,
        temp: i32,
        measures: usize,
        fail_measure: bool,
    }

    impl Ms5805Driver for Mock {
        type Error = MockError;

        fn init(bus_name: &str, _options: Option<&crate::Options>) -> Result<Self, MockError> {
            if bus_name == "missing" {
                return Err(MockError);
            }
            Ok(Self {
                baro: 101_325,
                temp: 235,
                measures: 0,
                fail_measure: false,
            })
        }

        fn measure(&mut self) -> Result<(), MockError> {
            self.measures += 1;
            if self.fail_measure {
                Err(MockError)
            } else {
                Ok(())
            }
        }

        fn baro(&self) -> i32 {
            self.baro
        }

        fn temp(&self) -> i32 {
            self.temp
        }

        fn deinit(self) {
            DEINITS.with(|d| d.set(d.get() + 1));
        }
    }

    fn mock() -> Mock {
        Mock::init("i2c1", None).unwrap()
    }

    fn fetch(sensor: &Ms5805<Mock>, channel: Channel) -> Option<SensorData> {
        let mut buf = [SensorData::EMPTY];
        match sensor.fetch_data(&channel.info(), &mut buf) {
            0 => None,
            1 => Some(buf[0]),
            n => panic!("unexpected record count {n}"),
        }
    }

    #[test]
    fn create_passes_through() {
        assert!(create::<Mock>(&SensorInterface::i2c("i2c1")).is_ok());
        assert!(create::<Mock>(&SensorInterface::i2c("missing")).is_err());
    }

    #[test]
    fn fetch_writes_requested_channel() {
        let sensor = Ms5805::with_handle(mock());

        let baro = fetch(&sensor, Channel::Baro).unwrap();
        assert_eq!(baro.category, Category::Pressure);
        assert_eq!(baro.value, Value::new(101_325));

        let temp = fetch(&sensor, Channel::Temp).unwrap();
        assert_eq!(temp.category, Category::Temperature);
        assert_eq!(temp.value, Value::new(23));
    }

    #[test]
    fn every_fetch_measures() {
        let sensor = Ms5805::with_handle(mock());
        fetch(&sensor, Channel::Baro).unwrap();
        fetch(&sensor, Channel::Temp).unwrap();
        fetch(&sensor, Channel::Temp).unwrap();
        assert_eq!(sensor.with_handle_mut(|h| h.measures), Some(3));
    }

    #[test]
    fn negative_temperature_truncates_toward_zero() {
        let sensor = Ms5805::with_handle(mock());
        sensor.with_handle_mut(|h| h.temp = -1_234);
        assert_eq!(fetch(&sensor, Channel::Temp).unwrap().value, Value::new(-123));
    }

    #[test]
    fn unknown_category_produces_nothing() {
        let sensor = Ms5805::with_handle(mock());
        let mut buf = [SensorData::EMPTY];

        assert_eq!(sensor.fetch_data(&SensorInfo::ZEROED, &mut buf), 0);
        let mut humidity = Channel::Baro.info();
        humidity.category = Category::Humidity;
        assert_eq!(sensor.fetch_data(&humidity, &mut buf), 0);

        assert_eq!(buf[0], SensorData::EMPTY);
        assert_eq!(sensor.with_handle_mut(|h| h.measures), Some(0));
    }

    #[test]
    fn empty_buffer_produces_nothing() {
        let sensor = Ms5805::with_handle(mock());
        assert_eq!(sensor.fetch_data(&Channel::Baro.info(), &mut []), 0);
        assert_eq!(sensor.with_handle_mut(|h| h.measures), Some(0));
    }

    #[test]
    fn failed_measurement_produces_nothing() {
        let sensor = Ms5805::with_handle(mock());
        sensor.with_handle_mut(|h| h.fail_measure = true);
        assert_eq!(fetch(&sensor, Channel::Baro), None);
    }

    #[test]
    fn timestamps_do_not_decrease() {
        let sensor = Ms5805::with_handle(mock());
        let mut last = Instant::from_ticks(0);
        for i in 0..64 {
            let channel = if i % 2 == 0 { Channel::Baro } else { Channel::Temp };
            let data = fetch(&sensor, channel).unwrap();
            assert!(data.timestamp >= last);
            last = data.timestamp;
        }
    }

    #[test]
    fn no_session_produces_nothing() {
        let sensor = Ms5805::<Mock>::new();
        assert!(!sensor.is_initialized());
        assert_eq!(fetch(&sensor, Channel::Baro), None);

        let deinits = DEINITS.with(Cell::get);
        let sensor = Ms5805::with_handle(mock());
        assert!(sensor.deinit());
        assert!(!sensor.deinit());
        assert_eq!(DEINITS.with(Cell::get), deinits + 1);
        assert_eq!(fetch(&sensor, Channel::Temp), None);
    }

    #[test]
    fn control_is_accepted() {
        let sensor = Ms5805::with_handle(mock());
        let info = Channel::Baro.info();
        let mut id = 0;
        let mut passed = false;

        assert_eq!(sensor.control(&info, Command::GetId(&mut id)), Ok(()));
        assert_eq!(sensor.control(&info, Command::SetRange(110_000)), Ok(()));
        assert_eq!(sensor.control(&info, Command::SetOdr(50)), Ok(()));
        assert_eq!(sensor.control(&info, Command::SetMode(Mode::Polling)), Ok(()));
        assert_eq!(sensor.control(&info, Command::SetPower(Power::Low)), Ok(()));
        assert_eq!(sensor.control(&SensorInfo::ZEROED, Command::SelfTest(&mut passed)), Ok(()));
        assert_eq!((id, passed), (0, false));
    }

    #[test]
    fn installs_itself_as_ops() {
        let sensor = Ms5805::with_handle(mock());
        let mut device = SensorDevice::zeroed();
        device.info = Channel::Temp.info();
        device.ops = Some(&sensor);

        let mut buf = [SensorData::EMPTY];
        let ops = device.ops.unwrap();
        assert_eq!(ops.fetch_data(&device.info, &mut buf), 1);
        assert_eq!(buf[0].category, Category::Temperature);
    }

    #[test]
    fn busy_session_produces_nothing() {
        let sensor = Ms5805::with_handle(mock());
        let guard = sensor.handle.try_lock().unwrap();

        assert_eq!(fetch(&sensor, Channel::Baro), None);
        assert!(sensor.is_initialized());

        drop(guard);
        assert_eq!(sensor.with_handle_mut(|h| h.measures), Some(0));
        assert_eq!(fetch(&sensor, Channel::Baro).unwrap().value, Value::new(101_325));
    }
}
