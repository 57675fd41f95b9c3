//! FIFO buffer types
//!
//! The LPS27HHW has a 128-slot FIFO; each slot holds one pressure sample
//! and one temperature sample (5 bytes). Samples are drained through the
//! output window at `FIFO_DATA_OUT_PRESS_XL` (0x78) .. `FIFO_DATA_OUT_TEMP_H`
//! (0x7C).
//!
//! # Example
//!
//! ```ignore
//! # use lps27hhw::{Lps27hhwDriver, DataRate, FifoMode};
//! # let mut sensor: Lps27hhwDriver<_> = todo!();
//! sensor.set_fifo_watermark(32)?;
//! sensor.set_fifo_mode(FifoMode::Stream)?;
//! sensor.set_data_rate(DataRate::Hz25)?;
//!
//! // Later, drain what is buffered
//! for _ in 0..sensor.fifo_data_level()? {
//!     let sample = sensor.read_fifo_sample()?;
//!     let hpa = sample.pressure_hpa();
//! }
//! # Ok::<(), lps27hhw::Error<()>>(())
//! ```

use crate::data::{pressure_from_bytes, pressure_to_hpa, temperature_from_bytes, temperature_to_celsius};

/// FIFO depth in samples
pub const FIFO_DEPTH: u8 = 128;

/// Bytes per FIFO slot (3 pressure + 2 temperature)
pub const FIFO_SAMPLE_SIZE: usize = 5;

/// Highest programmable watermark level (7-bit field)
pub const FIFO_WATERMARK_MAX: u8 = 0x7F;

/// FIFO operating mode (`FIFO_CTRL.TRIG_MODES` + `F_MODE`)
///
/// What happens to buffered samples on a mode change is defined by the
/// hardware; the driver only writes the selector.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FifoMode {
    /// FIFO disabled, output registers hold the latest sample
    #[default]
    Bypass,
    /// Fill until full, then stop
    Fifo,
    /// Continuous mode, oldest samples discarded when full
    Stream,
    /// Stream mode that keeps the watermark level available
    DynamicStream,
    /// Bypass until an interrupt event, then FIFO
    BypassToFifo,
    /// Bypass until an interrupt event, then stream
    BypassToStream,
    /// Stream until an interrupt event, then FIFO
    StreamToFifo,
    /// Reserved mode code
    Unknown(u8),
}

impl FifoMode {
    /// Get the 3-bit register code
    #[must_use]
    pub const fn bits(self) -> u8 {
        match self {
            Self::Bypass => 0,
            Self::Fifo => 1,
            Self::Stream => 2,
            Self::DynamicStream => 3,
            Self::BypassToFifo => 5,
            Self::BypassToStream => 6,
            Self::StreamToFifo => 7,
            Self::Unknown(raw) => raw & 0x07,
        }
    }

    /// Decode the 3-bit register code
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => Self::Bypass,
            1 => Self::Fifo,
            2 => Self::Stream,
            3 => Self::DynamicStream,
            5 => Self::BypassToFifo,
            6 => Self::BypassToStream,
            7 => Self::StreamToFifo,
            other => Self::Unknown(other),
        }
    }

    /// Check if this is one of the event-triggered modes
    #[must_use]
    pub const fn is_triggered(self) -> bool {
        matches!(
            self,
            Self::BypassToFifo | Self::BypassToStream | Self::StreamToFifo
        )
    }
}

/// FIFO flags (`FIFO_STATUS2`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FifoStatus {
    /// FIFO is completely filled
    pub full: bool,
    /// At least one sample was overwritten
    pub overrun: bool,
    /// Fill level is at or above the watermark
    pub watermark: bool,
}

impl FifoStatus {
    /// Check if any FIFO flag is set
    #[must_use]
    pub const fn any_set(&self) -> bool {
        self.full || self.overrun || self.watermark
    }
}

/// One raw sample drained from the FIFO output window
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FifoSample {
    /// 24-bit pressure, sign-extended
    pub pressure: i32,
    /// 16-bit temperature
    pub temperature: i16,
}

impl FifoSample {
    /// Decode one FIFO slot laid out as `[P_XL, P_L, P_H, T_L, T_H]`
    #[must_use]
    pub const fn from_bytes(bytes: [u8; FIFO_SAMPLE_SIZE]) -> Self {
        Self {
            pressure: pressure_from_bytes([bytes[0], bytes[1], bytes[2]]),
            temperature: temperature_from_bytes([bytes[3], bytes[4]]),
        }
    }

    /// Pressure in hPa
    #[must_use]
    pub fn pressure_hpa(&self) -> f32 {
        pressure_to_hpa(self.pressure)
    }

    /// Temperature in °C
    #[must_use]
    pub fn temperature_celsius(&self) -> f32 {
        temperature_to_celsius(self.temperature)
    }
}
