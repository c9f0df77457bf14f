//! Bus interface abstraction for the ADXL34x driver.
//!
//! Every method performs exactly one bus transaction. Implementations built on
//! shared-bus wrappers (for example `embedded-hal-bus` devices) acquire the bus
//! for the duration of that single call, so no foreign transfer can interleave
//! with a register access.

pub mod i2c;
pub mod spi;

/// Abstraction over the low-level bus access required by the driver.
pub trait Adxl34xInterface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Writes a single register as one 2-byte frame.
    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error>;

    /// Reads consecutive registers starting at `register` into the provided buffer.
    ///
    /// The address write and the data read happen without releasing the bus.
    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error>;
}
