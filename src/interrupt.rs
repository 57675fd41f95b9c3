//! Interrupt configuration and status
//!
//! The LPS27HHW has a single interrupt pin (INT_DRDY) that can carry:
//! - Pressure data ready
//! - A differential-pressure event (above / below the programmed threshold)
//! - FIFO watermark, overrun and full flags
//!
//! # Example
//!
//! ```ignore
//! # use lps27hhw::{Lps27hhwDriver, InterruptPinConfig, InterruptRoute, PinMode};
//! # let mut sensor: Lps27hhwDriver<_> = todo!();
//! // Open-drain, active-low pin shared with other devices
//! let pin_config = InterruptPinConfig {
//!     mode: PinMode::OpenDrain,
//!     ..InterruptPinConfig::default()
//! };
//! sensor.configure_interrupt_pin(&pin_config)?;
//!
//! // Raise INT_DRDY on FIFO watermark only
//! sensor.set_interrupt_route(&InterruptRoute::fifo_batch())?;
//! # Ok::<(), lps27hhw::Error<()>>(())
//! ```

/// Interrupt pin output stage (`CTRL_REG2.PP_OD`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// Push-pull output
    #[default]
    PushPull = 0,
    /// Open-drain output
    OpenDrain = 1,
}

impl PinMode {
    /// Decode the register bit
    #[must_use]
    pub const fn from_bit(bit: bool) -> Self {
        if bit { Self::OpenDrain } else { Self::PushPull }
    }

    /// Register bit for this mode
    #[must_use]
    pub const fn bit(self) -> bool {
        matches!(self, Self::OpenDrain)
    }
}

/// Interrupt pin polarity (`CTRL_REG2.INT_H_L`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinPolarity {
    /// Active high
    #[default]
    ActiveHigh = 0,
    /// Active low
    ActiveLow = 1,
}

impl PinPolarity {
    /// Decode the register bit
    #[must_use]
    pub const fn from_bit(bit: bool) -> Self {
        if bit { Self::ActiveLow } else { Self::ActiveHigh }
    }

    /// Register bit for this polarity
    #[must_use]
    pub const fn bit(self) -> bool {
        matches!(self, Self::ActiveLow)
    }
}

/// Interrupt request notification (`INTERRUPT_CFG.LIR`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptLatch {
    /// Interrupt request is pulsed
    #[default]
    Pulsed = 0,
    /// Interrupt request is latched until `INT_SOURCE` is read
    Latched = 1,
}

impl InterruptLatch {
    /// Decode the register bit
    #[must_use]
    pub const fn from_bit(bit: bool) -> Self {
        if bit { Self::Latched } else { Self::Pulsed }
    }

    /// Register bit for this setting
    #[must_use]
    pub const fn bit(self) -> bool {
        matches!(self, Self::Latched)
    }
}

/// Differential pressure events that generate an interrupt (`INTERRUPT_CFG.PLE/PHE`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ThresholdEvent {
    /// Threshold interrupt disabled
    #[default]
    None = 0,
    /// Pressure above threshold
    PressureHigh = 1,
    /// Pressure below threshold
    PressureLow = 2,
    /// Pressure above or below threshold
    Both = 3,
}

impl ThresholdEvent {
    /// Decode the 2-bit register code
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => Self::None,
            1 => Self::PressureHigh,
            2 => Self::PressureLow,
            _ => Self::Both,
        }
    }

    /// Get the 2-bit register code
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// Signal driven on INT_DRDY by the data path (`CTRL_REG3.INT_S`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptSignal {
    /// Data signal (data ready / FIFO flags, as enabled)
    #[default]
    DataSignal = 0,
    /// Pressure high event
    PressureHigh = 1,
    /// Pressure low event
    PressureLow = 2,
    /// Pressure high or low event
    PressureHighOrLow = 3,
}

impl InterruptSignal {
    /// Decode the 2-bit register code
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => Self::DataSignal,
            1 => Self::PressureHigh,
            2 => Self::PressureLow,
            _ => Self::PressureHighOrLow,
        }
    }

    /// Get the 2-bit register code
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// Interrupt pin electrical configuration
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptPinConfig {
    /// Push-pull or open-drain
    pub mode: PinMode,
    /// Active high or active low
    pub polarity: PinPolarity,
    /// Pulsed or latched threshold interrupt requests
    pub latch: InterruptLatch,
}

impl InterruptPinConfig {
    /// Active-low, open-drain, latched: suitable for a wired-OR line
    #[must_use]
    pub const fn shared_line() -> Self {
        Self {
            mode: PinMode::OpenDrain,
            polarity: PinPolarity::ActiveLow,
            latch: InterruptLatch::Latched,
        }
    }
}

/// Events routed to the INT_DRDY pin (`CTRL_REG3`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct InterruptRoute {
    /// Data signal selection
    pub signal: InterruptSignal,
    /// Data-ready signal
    pub data_ready: bool,
    /// FIFO overrun
    pub fifo_overrun: bool,
    /// FIFO watermark
    pub fifo_watermark: bool,
    /// FIFO full
    pub fifo_full: bool,
}

impl InterruptRoute {
    /// Route only the data-ready signal
    #[must_use]
    pub const fn data_ready_only() -> Self {
        Self {
            signal: InterruptSignal::DataSignal,
            data_ready: true,
            fifo_overrun: false,
            fifo_watermark: false,
            fifo_full: false,
        }
    }

    /// Route the FIFO watermark and overrun flags for batch reading
    #[must_use]
    pub const fn fifo_batch() -> Self {
        Self {
            signal: InterruptSignal::DataSignal,
            data_ready: false,
            fifo_overrun: true,
            fifo_watermark: true,
            fifo_full: false,
        }
    }

    /// Check if any FIFO or data-ready event is routed
    #[must_use]
    pub const fn any_enabled(&self) -> bool {
        self.data_ready || self.fifo_overrun || self.fifo_watermark || self.fifo_full
    }
}

/// Interrupt source flags (`INT_SOURCE`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct InterruptSource {
    /// Differential pressure high event
    pub pressure_high: bool,
    /// Differential pressure low event
    pub pressure_low: bool,
    /// One or more interrupt events have been generated
    pub active: bool,
    /// Boot phase is running
    pub boot_on: bool,
}

impl InterruptSource {
    /// Check if a threshold event fired
    #[must_use]
    pub const fn any_threshold(&self) -> bool {
        self.pressure_high || self.pressure_low
    }
}

/// Data availability flags (`STATUS`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct DataStatus {
    /// New pressure sample available
    pub pressure_ready: bool,
    /// New temperature sample available
    pub temperature_ready: bool,
    /// Pressure sample overwritten before being read
    pub pressure_overrun: bool,
    /// Temperature sample overwritten before being read
    pub temperature_overrun: bool,
}

impl DataStatus {
    /// Check if any new sample is available
    #[must_use]
    pub const fn any_ready(&self) -> bool {
        self.pressure_ready || self.temperature_ready
    }

    /// Check if any sample was lost
    #[must_use]
    pub const fn any_overrun(&self) -> bool {
        self.pressure_overrun || self.temperature_overrun
    }
}
