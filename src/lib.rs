#![no_std]

mod error;

pub mod config;
pub mod device;
pub mod interface;
mod log;
pub mod params;
pub mod registers;

pub use crate::config::Config;
pub use crate::device::Adxl34x;
pub use crate::error::{Error, Result};
pub use crate::params::{DataRate, Range};
