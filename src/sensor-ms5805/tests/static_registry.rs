use sensor_device::{
    Category, Command, DefaultRegistry, SensorConfig, SensorData, SensorInterface,
};
use sensor_ms5805::{Channels, Ms5805, Ms5805Driver, Options};
use static_cell::StaticCell;

struct Fixed;

impl Ms5805Driver for Fixed {
    type Error = ();

    fn init(_bus_name: &str, _options: Option<&Options>) -> Result<Self, ()> {
        Ok(Self)
    }

    fn measure(&mut self) -> Result<(), ()> {
        Ok(())
    }

    fn baro(&self) -> i32 {
        101_325
    }

    fn temp(&self) -> i32 {
        -512
    }

    fn deinit(self) {}
}

static MS5805: Ms5805<Fixed> = Ms5805::new();
static REGISTRY: StaticCell<DefaultRegistry<'static>> = StaticCell::new();

#[test]
fn static_driver_and_registry() {
    let registry = REGISTRY.init(DefaultRegistry::new());
    let cfg = SensorConfig::new(SensorInterface::i2c("i2c1"));

    MS5805
        .init("ms5805", &cfg, Channels::default(), registry)
        .unwrap();

    let mut buf = [SensorData::EMPTY; 2];
    assert_eq!(registry.read("baro_ms5805", &mut buf), Ok(1));
    assert_eq!(buf[0].category, Category::Pressure);
    assert_eq!(buf[0].value.get(), 101_325);
    assert_eq!(buf[1], SensorData::EMPTY);

    assert_eq!(registry.read("temp_ms5805", &mut buf), Ok(1));
    assert_eq!(buf[0].category, Category::Temperature);
    assert_eq!(buf[0].value.get(), -51);

    let mut id = 0xff;
    assert_eq!(registry.control("temp_ms5805", Command::GetId(&mut id)), Ok(()));
    assert_eq!(id, 0xff);
}
