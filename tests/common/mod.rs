#![allow(dead_code)]

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};

pub use adxl34x::interface::i2c::DEFAULT_ADDRESS as DEV_ADDR;

const REGISTER_COUNT: usize = 0x40;

/// In-memory ADXL34x register file answering I²C transactions with
/// auto-incrementing register pointer semantics.
pub struct RegisterFile {
    pub address: u8,
    pub registers: [u8; REGISTER_COUNT],
    /// Every write frame seen, register address first.
    pub writes: Vec<Vec<u8>>,
    /// Number of bus transactions served.
    pub transactions: usize,
    pointer: usize,
}

impl RegisterFile {
    pub fn new() -> Self {
        Self {
            address: DEV_ADDR,
            registers: [0; REGISTER_COUNT],
            writes: Vec::new(),
            transactions: 0,
            pointer: 0,
        }
    }

    /// Register file pre-loaded with a recognisable non-zero pattern.
    pub fn patterned() -> Self {
        let mut file = Self::new();
        for (index, reg) in file.registers.iter_mut().enumerate() {
            *reg = (index as u8).wrapping_mul(37) ^ 0x5A;
        }
        file
    }

    fn advance(&mut self) {
        self.pointer = (self.pointer + 1) % REGISTER_COUNT;
    }
}

impl ErrorType for RegisterFile {
    type Error = ErrorKind;
}

impl I2c for RegisterFile {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if address != self.address {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        }
        self.transactions += 1;

        for operation in operations.iter_mut() {
            match operation {
                Operation::Write(data) => {
                    let Some((&register, payload)) = data.split_first() else {
                        continue;
                    };
                    self.pointer = register as usize % REGISTER_COUNT;
                    for &byte in payload {
                        self.registers[self.pointer] = byte;
                        self.advance();
                    }
                    self.writes.push(data.to_vec());
                }
                Operation::Read(buf) => {
                    for slot in buf.iter_mut() {
                        *slot = self.registers[self.pointer];
                        self.advance();
                    }
                }
            }
        }

        Ok(())
    }
}
