//! Measurement and serial-interface configuration types
//!
//! Each type maps one-to-one onto a register field code. Codes that the
//! register map leaves reserved are not given a named variant; when the
//! hardware reports one, it is returned as `Unknown(raw)` instead of failing.

/// Output data rate and acquisition mode
///
/// The code spans two registers: bits 2:0 go to `CTRL_REG1.ODR`, bit 3 to
/// `CTRL_REG2.ONE_SHOT` and bit 4 to `CTRL_REG2.LOW_NOISE_EN`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataRate {
    /// Power-down, no acquisition
    #[default]
    PowerDown,
    /// Single acquisition, then back to power-down
    OneShot,
    /// 1 Hz continuous
    Hz1,
    /// 10 Hz continuous
    Hz10,
    /// 25 Hz continuous
    Hz25,
    /// 50 Hz continuous
    Hz50,
    /// 75 Hz continuous
    Hz75,
    /// 100 Hz continuous
    Hz100,
    /// 200 Hz continuous
    Hz200,
    /// 1 Hz continuous, low-noise mode
    Hz1LowNoise,
    /// 10 Hz continuous, low-noise mode
    Hz10LowNoise,
    /// 25 Hz continuous, low-noise mode
    Hz25LowNoise,
    /// 50 Hz continuous, low-noise mode
    Hz50LowNoise,
    /// 75 Hz continuous, low-noise mode
    Hz75LowNoise,
    /// Combination of ODR / one-shot / low-noise bits with no defined meaning
    Unknown(u8),
}

impl DataRate {
    /// Mask of the meaningful bits of a data rate code
    pub const MASK: u8 = 0x1F;

    /// Get the combined register code
    #[must_use]
    pub const fn bits(self) -> u8 {
        match self {
            Self::PowerDown => 0x00,
            Self::OneShot => 0x08,
            Self::Hz1 => 0x01,
            Self::Hz10 => 0x02,
            Self::Hz25 => 0x03,
            Self::Hz50 => 0x04,
            Self::Hz75 => 0x05,
            Self::Hz100 => 0x06,
            Self::Hz200 => 0x07,
            Self::Hz1LowNoise => 0x11,
            Self::Hz10LowNoise => 0x12,
            Self::Hz25LowNoise => 0x13,
            Self::Hz50LowNoise => 0x14,
            Self::Hz75LowNoise => 0x15,
            Self::Unknown(raw) => raw & Self::MASK,
        }
    }

    /// Decode a combined register code
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & Self::MASK {
            0x00 => Self::PowerDown,
            0x08 => Self::OneShot,
            0x01 => Self::Hz1,
            0x02 => Self::Hz10,
            0x03 => Self::Hz25,
            0x04 => Self::Hz50,
            0x05 => Self::Hz75,
            0x06 => Self::Hz100,
            0x07 => Self::Hz200,
            0x11 => Self::Hz1LowNoise,
            0x12 => Self::Hz10LowNoise,
            0x13 => Self::Hz25LowNoise,
            0x14 => Self::Hz50LowNoise,
            0x15 => Self::Hz75LowNoise,
            other => Self::Unknown(other),
        }
    }

    /// `CTRL_REG1.ODR` part of the code
    #[must_use]
    pub const fn odr(self) -> u8 {
        self.bits() & 0x07
    }

    /// `CTRL_REG2.ONE_SHOT` part of the code
    #[must_use]
    pub const fn one_shot(self) -> bool {
        self.bits() & 0x08 != 0
    }

    /// `CTRL_REG2.LOW_NOISE_EN` part of the code
    #[must_use]
    pub const fn low_noise(self) -> bool {
        self.bits() & 0x10 != 0
    }

    /// Rebuild the code from its three register parts
    #[must_use]
    pub const fn from_parts(odr: u8, one_shot: bool, low_noise: bool) -> Self {
        let mut bits = odr & 0x07;
        if one_shot {
            bits |= 0x08;
        }
        if low_noise {
            bits |= 0x10;
        }
        Self::from_bits(bits)
    }

    /// Continuous sampling frequency in Hz, `None` for power-down, one-shot and unknown codes
    #[must_use]
    pub const fn frequency_hz(self) -> Option<u8> {
        match self {
            Self::Hz1 | Self::Hz1LowNoise => Some(1),
            Self::Hz10 | Self::Hz10LowNoise => Some(10),
            Self::Hz25 | Self::Hz25LowNoise => Some(25),
            Self::Hz50 | Self::Hz50LowNoise => Some(50),
            Self::Hz75 | Self::Hz75LowNoise => Some(75),
            Self::Hz100 => Some(100),
            Self::Hz200 => Some(200),
            Self::PowerDown | Self::OneShot | Self::Unknown(_) => None,
        }
    }
}

/// Low-pass filter bandwidth on pressure data (`CTRL_REG1.EN_LPFP` + `LPFP_CFG`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LowPassBandwidth {
    /// Filter disabled, bandwidth ODR/2
    OdrDiv2,
    /// Filter enabled, bandwidth ODR/9
    OdrDiv9,
    /// Filter enabled, bandwidth ODR/20
    OdrDiv20,
    /// Reserved filter code
    Unknown(u8),
}

impl LowPassBandwidth {
    /// Get the 2-bit register code
    #[must_use]
    pub const fn bits(self) -> u8 {
        match self {
            Self::OdrDiv2 => 0,
            Self::OdrDiv9 => 2,
            Self::OdrDiv20 => 3,
            Self::Unknown(raw) => raw & 0x03,
        }
    }

    /// Decode the 2-bit register code
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => Self::OdrDiv2,
            2 => Self::OdrDiv9,
            3 => Self::OdrDiv20,
            other => Self::Unknown(other),
        }
    }

    /// Divider applied to the output data rate, `None` for reserved codes
    #[must_use]
    pub const fn divider(self) -> Option<u8> {
        match self {
            Self::OdrDiv2 => Some(2),
            Self::OdrDiv9 => Some(9),
            Self::OdrDiv20 => Some(20),
            Self::Unknown(_) => None,
        }
    }
}

/// I2C interface state (`IF_CTRL.I2C_DISABLE`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cMode {
    /// I2C interface enabled
    Enabled = 0,
    /// I2C interface disabled (SPI / I3C only)
    Disabled = 1,
}

impl I2cMode {
    /// Decode the register bit
    #[must_use]
    pub const fn from_bit(bit: bool) -> Self {
        if bit { Self::Disabled } else { Self::Enabled }
    }

    /// Register bit for this mode
    #[must_use]
    pub const fn bit(self) -> bool {
        matches!(self, Self::Disabled)
    }
}

/// MIPI I3C interface state (`IF_CTRL.I3C_DISABLE` + `IF_CTRL.INT_EN_I3C`)
///
/// Bit 0 of the code is `I3C_DISABLE`, bit 4 is `INT_EN_I3C`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I3cMode {
    /// I3C enabled, INT_DRDY not routed to in-band interrupt
    Enabled,
    /// I3C enabled, INT_DRDY routed to in-band interrupt
    EnabledWithIntPin,
    /// I3C disabled
    Disabled,
    /// Undefined combination of the two bits
    Unknown(u8),
}

impl I3cMode {
    /// Get the combined code
    #[must_use]
    pub const fn bits(self) -> u8 {
        match self {
            Self::Enabled => 0x00,
            Self::EnabledWithIntPin => 0x10,
            Self::Disabled => 0x11,
            Self::Unknown(raw) => raw & 0x11,
        }
    }

    /// Decode the combined code
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x11 {
            0x00 => Self::Enabled,
            0x10 => Self::EnabledWithIntPin,
            0x11 => Self::Disabled,
            other => Self::Unknown(other),
        }
    }

    /// Rebuild the code from the two register bits
    #[must_use]
    pub const fn from_parts(i3c_disable: bool, int_en_i3c: bool) -> Self {
        let mut bits = 0;
        if i3c_disable {
            bits |= 0x01;
        }
        if int_en_i3c {
            bits |= 0x10;
        }
        Self::from_bits(bits)
    }
}

/// Internal pull-up on an interface pin (`IF_CTRL.SDO_PU_EN` / `SDA_PU_EN`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PullUp {
    /// Pull-up disconnected
    Disconnected = 0,
    /// Pull-up connected
    Connected = 1,
}

impl PullUp {
    /// Decode the register bit
    #[must_use]
    pub const fn from_bit(bit: bool) -> Self {
        if bit { Self::Connected } else { Self::Disconnected }
    }

    /// Register bit for this setting
    #[must_use]
    pub const fn bit(self) -> bool {
        matches!(self, Self::Connected)
    }
}

/// SPI serial interface mode (`CTRL_REG1.SIM`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiMode {
    /// 4-wire SPI
    FourWire = 0,
    /// 3-wire SPI
    ThreeWire = 1,
}

impl SpiMode {
    /// Decode the register bit
    #[must_use]
    pub const fn from_bit(bit: bool) -> Self {
        if bit { Self::ThreeWire } else { Self::FourWire }
    }

    /// Register bit for this mode
    #[must_use]
    pub const fn bit(self) -> bool {
        matches!(self, Self::ThreeWire)
    }
}
