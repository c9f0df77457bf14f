//! High-level ADXL34x device driver implementation.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::interface::Adxl34xInterface;
use crate::interface::i2c::{DEFAULT_ADDRESS, I2cInterface};
use crate::interface::spi::SpiInterface;
use crate::log::{debug, trace};
use crate::params::{DataRate, Range};
use crate::registers::{
    BwRate,
    DataFormat,
    EXPECTED_DEVID,
    MEASURE_ENABLE,
    REG_BW_RATE,
    REG_DATA_FORMAT,
    REG_DATAX0,
    REG_DEVID,
    REG_POWER_CTL,
};
use embedded_hal::i2c::I2c;
use embedded_hal::spi::SpiDevice;

/// Scale factor of one output LSB in full-resolution mode, in g.
pub const MG_PER_LSB: f32 = 0.004;
/// Standard gravity in m/s².
pub const STANDARD_GRAVITY: f32 = 9.80665;
// Number of consecutive bytes spanning X, Y, Z axis samples; also the
// largest single transfer the driver issues.
const RAW_AXIS_BYTES: usize = 6;

/// Converts a raw full-resolution axis sample to m/s².
#[inline]
pub fn raw_to_ms2(raw: i16) -> f32 {
    f32::from(raw) * MG_PER_LSB * STANDARD_GRAVITY
}

/// High-level synchronous driver for the ADXL343/ADXL345 accelerometers.
///
/// A handle only exists once measurement mode has been enabled, see [`Adxl34x::new`].
/// Calls on one handle are sequential by construction (`&mut self`); each
/// register operation maps to a single bus transaction.
pub struct Adxl34x<IFACE> {
    interface: IFACE,
    buffer: [u8; RAW_AXIS_BYTES],
}

impl<IFACE> Adxl34x<IFACE> {
    // ==================================================================
    // == Driver Ownership ==============================================
    // ==================================================================
    /// Consumes the driver and returns the owned interface.
    ///
    /// The sensor is left in measurement mode.
    pub fn release(self) -> IFACE {
        self.interface
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }
}

impl<I2C> Adxl34x<I2cInterface<I2C>>
where
    I2C: I2c,
{
    // ==================================================================
    // == I2C Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for I²C transports at an explicit 7-bit address.
    ///
    /// Pass `&mut bus` or a shared-bus device to keep the bus usable after a
    /// failed initialization.
    pub fn new_i2c(i2c: I2C, address: u8) -> Result<Self, I2C::Error> {
        Self::new(I2cInterface::new(i2c, address))
    }

    /// Convenience constructor for I²C transports at [`DEFAULT_ADDRESS`].
    pub fn new_i2c_default(i2c: I2C) -> Result<Self, I2C::Error> {
        Self::new_i2c(i2c, DEFAULT_ADDRESS)
    }

    /// Releases the driver, returning the I²C device.
    pub fn release_i2c(self) -> I2C {
        self.release().release()
    }
}

impl<SPI> Adxl34x<SpiInterface<SPI>>
where
    SPI: SpiDevice,
{
    // ==================================================================
    // == SPI Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for 4-wire SPI transports.
    pub fn new_spi(spi: SPI) -> Result<Self, SPI::Error> {
        Self::new(SpiInterface::new(spi))
    }

    /// Releases the driver, returning the SPI device.
    pub fn release_spi(self) -> SPI {
        self.release().release()
    }
}

impl<IFACE, CommE> Adxl34x<IFACE>
where
    IFACE: Adxl34xInterface<Error = CommE>,
{
    // ==================================================================
    // == Initialization & Global Configuration =========================
    // ==================================================================
    /// Binds the driver to `interface` and takes the sensor out of standby.
    ///
    /// Issues exactly one transaction, writing `0x08` (measure) to `POWER_CTL`.
    /// No handle is returned unless that write succeeded. There is no path
    /// back to standby through this driver.
    pub fn new(interface: IFACE) -> Result<Self, CommE> {
        let mut device = Self {
            interface,
            buffer: [0; RAW_AXIS_BYTES],
        };
        device.write_register(REG_POWER_CTL, MEASURE_ENABLE)?;
        debug!("adxl34x: measurement enabled");
        Ok(device)
    }

    /// Applies `config`: data rate first, then range.
    pub fn configure(&mut self, config: Config) -> Result<(), CommE> {
        self.set_data_rate(config.data_rate)?;
        self.set_range(config.range)
    }

    // ==================================================================
    // == Register Access ===============================================
    // ==================================================================
    /// Reads `length` consecutive registers starting at `register` in one
    /// write-then-read transaction.
    ///
    /// The returned slice borrows the driver's scratch buffer and is only
    /// valid until the next call.
    ///
    /// # Panics
    ///
    /// Panics when `length` exceeds the 6-byte scratch buffer.
    pub fn read_register(&mut self, register: u8, length: usize) -> Result<&[u8], CommE> {
        assert!(
            length <= RAW_AXIS_BYTES,
            "register read longer than the scratch buffer"
        );

        trace!("read reg {=u8:#x} len {=usize}", register, length);
        let buf = &mut self.buffer[..length];
        self
            .interface
            .read_many(register, buf)
            .map_err(Error::from)?;

        Ok(&self.buffer[..length])
    }

    /// Writes a single register in one 2-byte transaction.
    pub fn write_register(&mut self, register: u8, value: u8) -> Result<(), CommE> {
        trace!("write reg {=u8:#x} <- {=u8:#x}", register, value);
        self
            .interface
            .write_register(register, value)
            .map_err(Error::from)
    }

    // ==================================================================
    // == Identification ================================================
    // ==================================================================
    /// Reads the `DEVID` register.
    pub fn device_id(&mut self) -> Result<u8, CommE> {
        Ok(self.read_register(REG_DEVID, 1)?[0])
    }

    /// Verifies `DEVID` against the ADXL34x identifier `0xE5`.
    pub fn check_device_id(&mut self) -> Result<(), CommE> {
        let id = self.device_id()?;
        if id != EXPECTED_DEVID {
            debug!("adxl34x: unexpected DEVID {=u8:#x}", id);
            return Err(Error::DeviceIdMismatch(id));
        }

        Ok(())
    }

    // ==================================================================
    // == Data Acquisition ==============================================
    // ==================================================================
    /// Reads a raw acceleration triplet `[x, y, z]` in one 6-byte burst.
    pub fn acceleration_raw(&mut self) -> Result<[i16; 3], CommE> {
        let raw = self.read_register(REG_DATAX0, RAW_AXIS_BYTES)?;

        let x = i16::from_le_bytes([raw[0], raw[1]]);
        let y = i16::from_le_bytes([raw[2], raw[3]]);
        let z = i16::from_le_bytes([raw[4], raw[5]]);

        Ok([x, y, z])
    }

    /// Returns acceleration `(x, y, z)` in m/s².
    ///
    /// The scale factor is fixed at 4 mg/LSB, which holds for every range
    /// because [`Self::set_range`] always enables full resolution.
    pub fn acceleration(&mut self) -> Result<(f32, f32, f32), CommE> {
        let [x, y, z] = self.acceleration_raw()?;
        Ok((raw_to_ms2(x), raw_to_ms2(y), raw_to_ms2(z)))
    }

    // ==================================================================
    // == Data Rate & Range =============================================
    // ==================================================================
    /// Reads the output data rate from `BW_RATE[3:0]`.
    pub fn data_rate(&mut self) -> Result<DataRate, CommE> {
        let raw = self.read_register(REG_BW_RATE, 1)?[0];
        Ok(BwRate::from(raw).rate())
    }

    /// Sets the output data rate.
    ///
    /// `BW_RATE` is overwritten as a whole, so `LOW_POWER` (bit 4) is cleared.
    pub fn set_data_rate(&mut self, rate: DataRate) -> Result<(), CommE> {
        let value = u8::from(BwRate::new().with_rate(rate));
        debug!("adxl34x: data rate -> {}", rate);
        self.write_register(REG_BW_RATE, value)
    }

    /// Reads the measurement range from `DATA_FORMAT[1:0]`.
    pub fn range(&mut self) -> Result<Range, CommE> {
        let raw = self.read_register(REG_DATA_FORMAT, 1)?[0];
        Ok(DataFormat::from(raw).range())
    }

    /// Sets the measurement range.
    ///
    /// Bits 3:0 of `DATA_FORMAT` are replaced by the range code with
    /// `FULL_RES` set; bits 7:4 keep their current value.
    pub fn set_range(&mut self, range: Range) -> Result<(), CommE> {
        debug!("adxl34x: range -> {}", range);
        self.update_data_format(|format| format.with_range_update(range))
    }

    // ==================================================================
    // == Internal Configuration Helpers ================================
    // ==================================================================
    fn update_data_format<F>(&mut self, mutate: F) -> Result<(), CommE>
    where
        F: FnOnce(DataFormat) -> DataFormat,
    {
        let current = self.read_register(REG_DATA_FORMAT, 1)?[0];
        let updated = u8::from(mutate(DataFormat::from(current)));
        self.write_register(REG_DATA_FORMAT, updated)
    }
}
