use std::{
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
    thread,
    time::{Duration, Instant},
};

use sensor_device::{Registry, SensorConfig, SensorData, SensorInterface, SensorOps};
use sensor_ms5805::{Channel, Channels, InitError, Ms5805, Ms5805Driver, Options};

const SETUP: Duration = Duration::from_millis(100);

static MEASURING: AtomicBool = AtomicBool::new(false);
static RELEASE: AtomicBool = AtomicBool::new(false);
static SESSIONS: AtomicUsize = AtomicUsize::new(0);

/// Driver whose conversions last until [`RELEASE`] is set.
struct Slow;

impl Ms5805Driver for Slow {
    type Error = ();

    fn init(_bus_name: &str, _options: Option<&Options>) -> Result<Self, ()> {
        SESSIONS.fetch_add(1, Ordering::SeqCst);
        thread::sleep(SETUP);
        Ok(Self)
    }

    fn measure(&mut self) -> Result<(), ()> {
        MEASURING.store(true, Ordering::SeqCst);
        while !RELEASE.load(Ordering::SeqCst) {
            thread::yield_now();
        }
        MEASURING.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn baro(&self) -> i32 {
        101_325
    }

    fn temp(&self) -> i32 {
        2_000
    }

    fn deinit(self) {
        SESSIONS.fetch_sub(1, Ordering::SeqCst);
    }
}

fn fetch(sensor: &Ms5805<Slow>, channel: Channel) -> usize {
    let mut buf = [SensorData::EMPTY];
    sensor.fetch_data(&channel.info(), &mut buf)
}

#[test]
fn measurement_runs_outside_critical_sections() {
    let sensor = Ms5805::with_handle(Slow);

    thread::scope(|s| {
        let reader = s.spawn(|| fetch(&sensor, Channel::Baro));
        while !MEASURING.load(Ordering::SeqCst) {
            thread::yield_now();
        }

        let start = Instant::now();
        critical_section::with(|_| ());
        let waited = start.elapsed();

        // The session is busy: the other channel returns at once.
        let busy = fetch(&sensor, Channel::Temp);

        RELEASE.store(true, Ordering::SeqCst);
        assert_eq!(reader.join().unwrap(), 1);
        assert!(waited < Duration::from_millis(50), "waited {waited:?}");
        assert_eq!(busy, 0);
    });

    assert_eq!(fetch(&sensor, Channel::Temp), 1);
}

#[test]
fn concurrent_init_opens_one_session() {
    let sensor = Ms5805::<Slow>::new();
    let cfg = SensorConfig::new(SensorInterface::i2c("i2c1"));

    let results: Vec<_> = thread::scope(|s| {
        let workers: Vec<_> = ["a", "b"]
            .into_iter()
            .map(|name| {
                let (sensor, cfg) = (&sensor, &cfg);
                s.spawn(move || {
                    let mut registry: Registry<'_, 4> = Registry::new();
                    sensor.init(name, cfg, Channels::BARO, &mut registry)
                })
            })
            .collect();
        workers.into_iter().map(|w| w.join().unwrap()).collect()
    });

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results
        .iter()
        .all(|r| matches!(r, Ok(()) | Err(InitError::AlreadyInitialized))));
    assert_eq!(SESSIONS.load(Ordering::SeqCst), 1);

    assert!(sensor.deinit());
    assert_eq!(SESSIONS.load(Ordering::SeqCst), 0);
}
