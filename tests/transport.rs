use core::cell::RefCell;

use adxl34x::interface::Adxl34xInterface;
use adxl34x::interface::i2c::{ALT_ADDRESS, DEFAULT_ADDRESS, I2cInterface};
use adxl34x::interface::spi::SpiInterface;
use adxl34x::{Adxl34x, Range};
use embedded_hal_bus::i2c::RefCellDevice;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};
use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTrans};

#[test]
fn two_sensors_share_one_bus() {
    let bus = RefCell::new(I2cMock::new(&[
        I2cTrans::write(DEFAULT_ADDRESS, vec![0x2D, 0x08]),
        I2cTrans::write(ALT_ADDRESS, vec![0x2D, 0x08]),
        I2cTrans::write_read(DEFAULT_ADDRESS, vec![0x32], vec![1, 0, 2, 0, 3, 0]),
        I2cTrans::write_read(ALT_ADDRESS, vec![0x32], vec![4, 0, 5, 0, 6, 0]),
    ]));

    {
        let mut first = Adxl34x::new_i2c_default(RefCellDevice::new(&bus)).unwrap();
        let mut second = Adxl34x::new_i2c(RefCellDevice::new(&bus), ALT_ADDRESS).unwrap();

        assert_eq!(first.acceleration_raw().unwrap(), [1, 2, 3]);
        assert_eq!(second.acceleration_raw().unwrap(), [4, 5, 6]);
    }

    bus.into_inner().done();
}

#[test]
fn i2c_interface_frames_register_writes() {
    let mut i2c = I2cMock::new(&[I2cTrans::write(DEFAULT_ADDRESS, vec![0x31, 0x0B])]);

    let mut interface = I2cInterface::new(&mut i2c, DEFAULT_ADDRESS);
    interface.write_register(0x31, 0x0B).unwrap();

    i2c.done();
}

#[test]
fn spi_init_and_burst_read() {
    let mut spi = SpiMock::<u8>::new(&[
        SpiTrans::transaction_start(),
        SpiTrans::write_vec(vec![0x2D, 0x08]),
        SpiTrans::transaction_end(),
        SpiTrans::transaction_start(),
        SpiTrans::write_vec(vec![0xF2]),
        SpiTrans::read_vec(vec![0x00, 0x01, 0x00, 0x00, 0xFF, 0xFF]),
        SpiTrans::transaction_end(),
    ]);

    let mut device = Adxl34x::new_spi(&mut spi).unwrap();
    assert_eq!(device.acceleration_raw().unwrap(), [256, 0, -1]);
    drop(device);

    spi.done();
}

#[test]
fn spi_range_update_uses_single_byte_commands() {
    let mut spi = SpiMock::<u8>::new(&[
        SpiTrans::transaction_start(),
        SpiTrans::write_vec(vec![0x2D, 0x08]),
        SpiTrans::transaction_end(),
        SpiTrans::transaction_start(),
        SpiTrans::write_vec(vec![0xB1]),
        SpiTrans::read_vec(vec![0xA0]),
        SpiTrans::transaction_end(),
        SpiTrans::transaction_start(),
        SpiTrans::write_vec(vec![0x31, 0xAA]),
        SpiTrans::transaction_end(),
    ]);

    let mut device = Adxl34x::new_spi(&mut spi).unwrap();
    device.set_range(Range::G8).unwrap();
    drop(device);

    spi.done();
}

#[test]
fn spi_interface_skips_empty_reads() {
    let mut spi = SpiMock::<u8>::new(&[]);

    let mut interface = SpiInterface::new(&mut spi);
    interface.read_many(0x32, &mut []).unwrap();

    spi.done();
}
