#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod data;
pub mod device;
pub mod fifo;
pub mod interface;
pub mod interrupt;
pub mod registers;

// Re-export main types
pub use config::{DataRate, I2cMode, I3cMode, LowPassBandwidth, PullUp, SpiMode};
pub use data::{pressure_from_bytes, pressure_to_hpa, temperature_from_bytes, temperature_to_celsius};
pub use device::{AllSources, Lps27hhwDriver};
pub use fifo::{FIFO_DEPTH, FifoMode, FifoSample, FifoStatus};
pub use interface::{I2cInterface, SpiInterface};
pub use interrupt::{
    DataStatus, InterruptLatch, InterruptPinConfig, InterruptRoute, InterruptSignal,
    InterruptSource, PinMode, PinPolarity, ThresholdEvent,
};

/// LPS27HHW 7-bit I2C address when the SA0 pin is high (default: 0x5D)
///
/// On the wire this frames as 0xBB (read) / 0xBA (write).
/// Use [`I2cInterface::sa0_high()`] for this configuration.
pub const I2C_ADDRESS_SA0_HIGH: u8 = 0x5D;

/// LPS27HHW 7-bit I2C address when the SA0 pin is low (alternative: 0x5C)
///
/// On the wire this frames as 0xB9 (read) / 0xB8 (write).
/// Use [`I2cInterface::sa0_low()`] for this configuration.
pub const I2C_ADDRESS_SA0_LOW: u8 = 0x5C;

/// 8-bit read framing of [`I2C_ADDRESS_SA0_HIGH`]
pub const I2C_ADD_H: u8 = 0xBB;

/// 8-bit read framing of [`I2C_ADDRESS_SA0_LOW`]
pub const I2C_ADD_L: u8 = 0xB9;

/// Expected value of `WHO_AM_I` register
pub const WHO_AM_I_VALUE: u8 = 0xB3;

/// Driver errors
///
/// The register layer has a single failure mode: the transport reported an
/// error. Out-of-range inputs are masked to the field width and unknown
/// register codes are returned as `Unknown(raw)`, so neither is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device (contains the transport error)
    Transport(E),
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Transport(error)
    }
}
