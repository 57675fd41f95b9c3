//! High-level driver API for the LPS27HHW
//!
//! This module provides typed access to every configuration field and data
//! channel of the sensor. Each setter is a read-modify-write of the owning
//! register, so bits that belong to other fields (reserved bits included)
//! are left untouched. Getters decode the field into the matching type from
//! [`crate::config`], [`crate::fifo`] or [`crate::interrupt`].
//!
//! The driver keeps no state of its own besides the bus interface: every
//! call goes straight to the device, and a failed call leaves nothing
//! behind that could affect the next one.

use crate::registers::{
    FIFO_DATA_OUT_PRESS_XL, FIFO_DATA_OUT_TEMP_L, Lps27hhw as RegisterDevice, PRESS_OUT_XL,
    TEMP_OUT_L,
};
use crate::{Error, data};

use crate::config::{DataRate, I2cMode, I3cMode, LowPassBandwidth, PullUp, SpiMode};
use crate::fifo::{FIFO_SAMPLE_SIZE, FIFO_WATERMARK_MAX, FifoMode, FifoSample, FifoStatus};
use crate::interrupt::{
    DataStatus, InterruptLatch, InterruptPinConfig, InterruptRoute, InterruptSignal,
    InterruptSource, PinMode, PinPolarity, ThresholdEvent,
};

use device_driver::RegisterInterface;

/// Largest value of the 15-bit pressure threshold
const THRESHOLD_MAX: u16 = 0x7FFF;

/// Snapshot of the three status registers
///
/// Read back-to-back by [`Lps27hhwDriver::read_all_sources`]. The hardware
/// gives no atomicity across the three reads.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AllSources {
    /// `INT_SOURCE` (0x24)
    pub interrupt_source: InterruptSource,
    /// `FIFO_STATUS2` (0x26)
    pub fifo_status: FifoStatus,
    /// `STATUS` (0x27)
    pub status: DataStatus,
}

/// Main driver for the LPS27HHW
pub struct Lps27hhwDriver<I> {
    device: RegisterDevice<I>,
}

impl<I> Lps27hhwDriver<I>
where
    I: RegisterInterface<AddressType = u8>,
{
    /// Create a new LPS27HHW driver instance
    ///
    /// No bus traffic happens here. Use [`read_who_am_i`](Self::read_who_am_i)
    /// and compare against [`WHO_AM_I_VALUE`](crate::WHO_AM_I_VALUE) to probe
    /// the device.
    pub fn new(interface: I) -> Self {
        Self {
            device: RegisterDevice::new(interface),
        }
    }

    /// Consume the driver and return the underlying interface
    pub fn release(self) -> I {
        self.device.interface
    }

    /// Get a mutable reference to the underlying register device (for advanced usage)
    pub fn device_mut(&mut self) -> &mut RegisterDevice<I> {
        &mut self.device
    }

    // ==================== RAW REGISTER ACCESS ====================

    /// Read `data.len()` consecutive registers starting at `address`
    ///
    /// Issues exactly one bus read; relies on `IF_ADD_INC` for bursts.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_register(&mut self, address: u8, data: &mut [u8]) -> Result<(), Error<I::Error>> {
        self.device
            .interface
            .read_register(address, size_bits(data.len()), data)?;
        Ok(())
    }

    /// Write `data` to consecutive registers starting at `address`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn write_register(&mut self, address: u8, data: &[u8]) -> Result<(), Error<I::Error>> {
        self.device
            .interface
            .write_register(address, size_bits(data.len()), data)?;
        Ok(())
    }

    /// Read the `WHO_AM_I` register
    ///
    /// Should return 0xB3 for a valid LPS27HHW. The byte is passed through
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_who_am_i(&mut self) -> Result<u8, Error<I::Error>> {
        let reg = self.device.who_am_i().read()?;
        Ok(reg.who_am_i())
    }

    // ==================== MEASUREMENT CONFIGURATION ====================

    /// Set the output data rate (power-down, one-shot or continuous)
    ///
    /// Writes `CTRL_REG1.ODR` first, then `ONE_SHOT` and `LOW_NOISE_EN` in
    /// `CTRL_REG2`.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_data_rate(&mut self, rate: DataRate) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_1().modify(|w| {
            w.set_odr(rate.odr());
        })?;
        self.device.ctrl_reg_2().modify(|w| {
            w.set_low_noise_en(rate.low_noise());
            w.set_one_shot(rate.one_shot());
        })?;

        #[cfg(feature = "defmt")]
        defmt::debug!("Data rate set to {}", rate);

        Ok(())
    }

    /// Get the output data rate
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn data_rate(&mut self) -> Result<DataRate, Error<I::Error>> {
        let ctrl_reg_1 = self.device.ctrl_reg_1().read()?;
        let ctrl_reg_2 = self.device.ctrl_reg_2().read()?;
        Ok(DataRate::from_parts(
            ctrl_reg_1.odr(),
            ctrl_reg_2.one_shot(),
            ctrl_reg_2.low_noise_en(),
        ))
    }

    /// Set the low-pass filter bandwidth on pressure data
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_low_pass_bandwidth(
        &mut self,
        bandwidth: LowPassBandwidth,
    ) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_1().modify(|w| {
            w.set_lpfp_cfg(bandwidth.bits());
        })?;
        Ok(())
    }

    /// Get the low-pass filter bandwidth
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn low_pass_bandwidth(&mut self) -> Result<LowPassBandwidth, Error<I::Error>> {
        let reg = self.device.ctrl_reg_1().read()?;
        Ok(LowPassBandwidth::from_bits(reg.lpfp_cfg()))
    }

    /// Enable/disable block data update
    ///
    /// When enabled, output registers are not updated until both the high and
    /// low bytes of the current sample have been read.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_block_data_update(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_1().modify(|w| {
            w.set_bdu(enable);
        })?;
        Ok(())
    }

    /// Check if block data update is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn block_data_update(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.ctrl_reg_1().read()?.bdu())
    }

    /// Reset the AUTOZERO reference (`INTERRUPT_CFG.RESET_AZ`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_autozero_reset(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.interrupt_cfg().modify(|w| {
            w.set_reset_az(enable);
        })?;
        Ok(())
    }

    /// Get `INTERRUPT_CFG.RESET_AZ`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn autozero_reset(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.interrupt_cfg().read()?.reset_az())
    }

    /// Enable/disable AUTOZERO
    ///
    /// The current pressure is latched into `REF_P` and subtracted from
    /// subsequent output samples.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_autozero(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.interrupt_cfg().modify(|w| {
            w.set_autozero(enable);
        })?;
        Ok(())
    }

    /// Check if AUTOZERO is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn autozero(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.interrupt_cfg().read()?.autozero())
    }

    /// Reset the AUTOREFP reference (`INTERRUPT_CFG.RESET_ARP`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_pressure_snap_reset(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.interrupt_cfg().modify(|w| {
            w.set_reset_arp(enable);
        })?;
        Ok(())
    }

    /// Get `INTERRUPT_CFG.RESET_ARP`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn pressure_snap_reset(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.interrupt_cfg().read()?.reset_arp())
    }

    /// Enable/disable AUTOREFP
    ///
    /// The current pressure is latched into `REF_P` and used as the base for
    /// threshold interrupts; output samples are not modified.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_pressure_snap(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.interrupt_cfg().modify(|w| {
            w.set_autorefp(enable);
        })?;
        Ok(())
    }

    /// Check if AUTOREFP is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn pressure_snap(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.interrupt_cfg().read()?.autorefp())
    }

    /// Write the reference pressure (`REF_P`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    #[allow(clippy::cast_sign_loss)]
    pub fn set_pressure_reference(&mut self, value: i16) -> Result<(), Error<I::Error>> {
        self.device.ref_p().modify(|w| {
            w.set_ref_p(value as u16);
        })?;
        Ok(())
    }

    /// Read the reference pressure (`REF_P`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    #[allow(clippy::cast_possible_wrap)]
    pub fn pressure_reference(&mut self) -> Result<i16, Error<I::Error>> {
        Ok(self.device.ref_p().read()?.ref_p() as i16)
    }

    /// Write the pressure offset used for one-point calibration (`RPDS`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    #[allow(clippy::cast_sign_loss)]
    pub fn set_pressure_offset(&mut self, value: i16) -> Result<(), Error<I::Error>> {
        self.device.rpds().modify(|w| {
            w.set_rpds(value as u16);
        })?;
        Ok(())
    }

    /// Read the pressure offset (`RPDS`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    #[allow(clippy::cast_possible_wrap)]
    pub fn pressure_offset(&mut self) -> Result<i16, Error<I::Error>> {
        Ok(self.device.rpds().read()?.rpds() as i16)
    }

    // ==================== DEVICE CONTROL ====================

    /// Trigger (or clear) a software reset
    ///
    /// The bit clears itself when the reset completes.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_reset(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_2().modify(|w| {
            w.set_swreset(enable);
        })?;

        #[cfg(feature = "defmt")]
        if enable {
            defmt::debug!("Software reset requested");
        }

        Ok(())
    }

    /// Check if a software reset is still in progress
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn reset(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.ctrl_reg_2().read()?.swreset())
    }

    /// Trigger (or clear) a reboot of the trimming parameters
    ///
    /// The bit clears itself when the boot completes; `INT_SOURCE.BOOT_ON`
    /// reports the boot phase.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_boot(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_2().modify(|w| {
            w.set_boot(enable);
        })?;

        #[cfg(feature = "defmt")]
        if enable {
            defmt::debug!("Memory reboot requested");
        }

        Ok(())
    }

    /// Check if a reboot is still in progress
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn boot(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.ctrl_reg_2().read()?.boot())
    }

    /// Enable/disable register address auto-increment on multi-byte access
    ///
    /// Burst reads such as [`read_pressure_raw`](Self::read_pressure_raw)
    /// require it enabled (the power-on default).
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_auto_increment(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_2().modify(|w| {
            w.set_if_add_inc(enable);
        })?;
        Ok(())
    }

    /// Check if register address auto-increment is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn auto_increment(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.ctrl_reg_2().read()?.if_add_inc())
    }

    // ==================== SERIAL INTERFACE ====================

    /// Select 3-wire or 4-wire SPI
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_spi_mode(&mut self, mode: SpiMode) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_1().modify(|w| {
            w.set_sim(mode.bit());
        })?;
        Ok(())
    }

    /// Get the SPI wiring mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn spi_mode(&mut self) -> Result<SpiMode, Error<I::Error>> {
        Ok(SpiMode::from_bit(self.device.ctrl_reg_1().read()?.sim()))
    }

    /// Enable/disable the I2C interface
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_i2c_interface(&mut self, mode: I2cMode) -> Result<(), Error<I::Error>> {
        self.device.if_ctrl().modify(|w| {
            w.set_i_2_c_disable(mode.bit());
        })?;
        Ok(())
    }

    /// Get the I2C interface state
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn i2c_interface(&mut self) -> Result<I2cMode, Error<I::Error>> {
        Ok(I2cMode::from_bit(self.device.if_ctrl().read()?.i_2_c_disable()))
    }

    /// Configure the MIPI I3C interface
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_i3c_interface(&mut self, mode: I3cMode) -> Result<(), Error<I::Error>> {
        let bits = mode.bits();
        self.device.if_ctrl().modify(|w| {
            w.set_i_3_c_disable(bits & 0x01 != 0);
            w.set_int_en_i_3_c(bits & 0x10 != 0);
        })?;
        Ok(())
    }

    /// Get the MIPI I3C interface configuration
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn i3c_interface(&mut self) -> Result<I3cMode, Error<I::Error>> {
        let reg = self.device.if_ctrl().read()?;
        Ok(I3cMode::from_parts(reg.i_3_c_disable(), reg.int_en_i_3_c()))
    }

    /// Connect/disconnect the internal pull-up on SDO/SA0
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_sdo_sa0_pull_up(&mut self, pull_up: PullUp) -> Result<(), Error<I::Error>> {
        self.device.if_ctrl().modify(|w| {
            w.set_sdo_pu_en(pull_up.bit());
        })?;
        Ok(())
    }

    /// Get the SDO/SA0 pull-up state
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn sdo_sa0_pull_up(&mut self) -> Result<PullUp, Error<I::Error>> {
        Ok(PullUp::from_bit(self.device.if_ctrl().read()?.sdo_pu_en()))
    }

    /// Connect/disconnect the internal pull-up on SDA
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_sda_pull_up(&mut self, pull_up: PullUp) -> Result<(), Error<I::Error>> {
        self.device.if_ctrl().modify(|w| {
            w.set_sda_pu_en(pull_up.bit());
        })?;
        Ok(())
    }

    /// Get the SDA pull-up state
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn sda_pull_up(&mut self) -> Result<PullUp, Error<I::Error>> {
        Ok(PullUp::from_bit(self.device.if_ctrl().read()?.sda_pu_en()))
    }

    /// Connect (`true`) or disconnect (`false`) the INT_DRDY pull-down
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_int1_pull_down(&mut self, connected: bool) -> Result<(), Error<I::Error>> {
        self.device.if_ctrl().modify(|w| {
            w.set_pd_dis_int_1(!connected);
        })?;
        Ok(())
    }

    /// Check if the INT_DRDY pull-down is connected
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn int1_pull_down(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(!self.device.if_ctrl().read()?.pd_dis_int_1())
    }

    // ==================== INTERRUPTS ====================

    /// Select push-pull or open-drain on the interrupt pin
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_pin_mode(&mut self, mode: PinMode) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_2().modify(|w| {
            w.set_pp_od(mode.bit());
        })?;
        Ok(())
    }

    /// Get the interrupt pin output stage
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn pin_mode(&mut self) -> Result<PinMode, Error<I::Error>> {
        Ok(PinMode::from_bit(self.device.ctrl_reg_2().read()?.pp_od()))
    }

    /// Select interrupt pin polarity
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_pin_polarity(&mut self, polarity: PinPolarity) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_2().modify(|w| {
            w.set_int_h_l(polarity.bit());
        })?;
        Ok(())
    }

    /// Get interrupt pin polarity
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn pin_polarity(&mut self) -> Result<PinPolarity, Error<I::Error>> {
        Ok(PinPolarity::from_bit(self.device.ctrl_reg_2().read()?.int_h_l()))
    }

    /// Select pulsed or latched interrupt requests
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_interrupt_latch(&mut self, latch: InterruptLatch) -> Result<(), Error<I::Error>> {
        self.device.interrupt_cfg().modify(|w| {
            w.set_lir(latch.bit());
        })?;
        Ok(())
    }

    /// Get the interrupt request notification mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn interrupt_latch(&mut self) -> Result<InterruptLatch, Error<I::Error>> {
        Ok(InterruptLatch::from_bit(
            self.device.interrupt_cfg().read()?.lir(),
        ))
    }

    /// Configure the interrupt pin electrical behavior in one go
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn configure_interrupt_pin(
        &mut self,
        config: &InterruptPinConfig,
    ) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_2().modify(|w| {
            w.set_pp_od(config.mode.bit());
            w.set_int_h_l(config.polarity.bit());
        })?;
        self.set_interrupt_latch(config.latch)
    }

    /// Read back the interrupt pin electrical configuration
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn interrupt_pin_config(&mut self) -> Result<InterruptPinConfig, Error<I::Error>> {
        let ctrl_reg_2 = self.device.ctrl_reg_2().read()?;
        let latch = self.interrupt_latch()?;
        Ok(InterruptPinConfig {
            mode: PinMode::from_bit(ctrl_reg_2.pp_od()),
            polarity: PinPolarity::from_bit(ctrl_reg_2.int_h_l()),
            latch,
        })
    }

    /// Route events to the INT_DRDY pin
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_interrupt_route(&mut self, route: &InterruptRoute) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_3().modify(|w| {
            w.set_int_s(route.signal.bits());
            w.set_drdy(route.data_ready);
            w.set_int_f_ovr(route.fifo_overrun);
            w.set_int_f_wtm(route.fifo_watermark);
            w.set_int_f_full(route.fifo_full);
        })?;
        Ok(())
    }

    /// Get the events routed to the INT_DRDY pin
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn interrupt_route(&mut self) -> Result<InterruptRoute, Error<I::Error>> {
        let reg = self.device.ctrl_reg_3().read()?;
        Ok(InterruptRoute {
            signal: InterruptSignal::from_bits(reg.int_s()),
            data_ready: reg.drdy(),
            fifo_overrun: reg.int_f_ovr(),
            fifo_watermark: reg.int_f_wtm(),
            fifo_full: reg.int_f_full(),
        })
    }

    /// Route/unroute the FIFO overrun flag to INT_DRDY
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_fifo_overrun_on_int(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_3().modify(|w| {
            w.set_int_f_ovr(enable);
        })?;
        Ok(())
    }

    /// Check if the FIFO overrun flag is routed to INT_DRDY
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_overrun_on_int(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.ctrl_reg_3().read()?.int_f_ovr())
    }

    /// Route/unroute the FIFO watermark flag to INT_DRDY
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_fifo_threshold_on_int(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_3().modify(|w| {
            w.set_int_f_wtm(enable);
        })?;
        Ok(())
    }

    /// Check if the FIFO watermark flag is routed to INT_DRDY
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_threshold_on_int(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.ctrl_reg_3().read()?.int_f_wtm())
    }

    /// Route/unroute the FIFO full flag to INT_DRDY
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_fifo_full_on_int(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_3().modify(|w| {
            w.set_int_f_full(enable);
        })?;
        Ok(())
    }

    /// Check if the FIFO full flag is routed to INT_DRDY
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_full_on_int(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.ctrl_reg_3().read()?.int_f_full())
    }

    /// Select which differential pressure events raise an interrupt
    ///
    /// `DIFF_EN` is set for every event other than [`ThresholdEvent::None`],
    /// and cleared for `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_threshold_event(&mut self, event: ThresholdEvent) -> Result<(), Error<I::Error>> {
        self.device.interrupt_cfg().modify(|w| {
            w.set_pe(event.bits());
            w.set_diff_en(event != ThresholdEvent::None);
        })?;
        Ok(())
    }

    /// Get the differential pressure events that raise an interrupt
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn threshold_event(&mut self) -> Result<ThresholdEvent, Error<I::Error>> {
        Ok(ThresholdEvent::from_bits(
            self.device.interrupt_cfg().read()?.pe(),
        ))
    }

    /// Set the differential pressure threshold (1 LSB = 1/16 hPa)
    ///
    /// Values above 15 bits are masked.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_pressure_threshold(&mut self, threshold: u16) -> Result<(), Error<I::Error>> {
        self.device.ths_p().modify(|w| {
            w.set_ths(threshold & THRESHOLD_MAX);
        })?;
        Ok(())
    }

    /// Get the differential pressure threshold
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn pressure_threshold(&mut self) -> Result<u16, Error<I::Error>> {
        Ok(self.device.ths_p().read()?.ths())
    }

    // ==================== FIFO ====================

    /// Set the FIFO mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_fifo_mode(&mut self, mode: FifoMode) -> Result<(), Error<I::Error>> {
        self.device.fifo_ctrl().modify(|w| {
            w.set_f_mode(mode.bits());
        })?;

        #[cfg(feature = "defmt")]
        defmt::debug!("FIFO mode set to {}", mode);

        Ok(())
    }

    /// Get the FIFO mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_mode(&mut self) -> Result<FifoMode, Error<I::Error>> {
        Ok(FifoMode::from_bits(self.device.fifo_ctrl().read()?.f_mode()))
    }

    /// Stop filling the FIFO once the watermark level is reached
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_fifo_stop_on_watermark(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.fifo_ctrl().modify(|w| {
            w.set_stop_on_wtm(enable);
        })?;
        Ok(())
    }

    /// Check if FIFO depth is limited to the watermark level
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_stop_on_watermark(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.fifo_ctrl().read()?.stop_on_wtm())
    }

    /// Set the FIFO watermark level in samples (0-127)
    ///
    /// Values above 7 bits are masked.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_fifo_watermark(&mut self, level: u8) -> Result<(), Error<I::Error>> {
        self.device.fifo_wtm().modify(|w| {
            w.set_wtm(level & FIFO_WATERMARK_MAX);
        })?;
        Ok(())
    }

    /// Get the FIFO watermark level
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_watermark(&mut self) -> Result<u8, Error<I::Error>> {
        Ok(self.device.fifo_wtm().read()?.wtm())
    }

    /// Number of unread samples in the FIFO (`FIFO_STATUS1`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_data_level(&mut self) -> Result<u8, Error<I::Error>> {
        Ok(self.device.fifo_status_1().read()?.fss())
    }

    /// Read the FIFO flags (`FIFO_STATUS2`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_fifo_status(&mut self) -> Result<FifoStatus, Error<I::Error>> {
        let reg = self.device.fifo_status_2().read()?;
        Ok(FifoStatus {
            full: reg.fifo_full_ia(),
            overrun: reg.fifo_ovr_ia(),
            watermark: reg.fifo_wtm_ia(),
        })
    }

    /// Check if the FIFO is full
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_full_flag(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.fifo_status_2().read()?.fifo_full_ia())
    }

    /// Check if the FIFO has overrun
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_overrun_flag(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.fifo_status_2().read()?.fifo_ovr_ia())
    }

    /// Check if the FIFO watermark level is reached
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_watermark_flag(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.fifo_status_2().read()?.fifo_wtm_ia())
    }

    // ==================== STATUS ====================

    /// Read `INT_SOURCE`, `FIFO_STATUS2` and `STATUS` in one call
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_all_sources(&mut self) -> Result<AllSources, Error<I::Error>> {
        let interrupt_source = self.read_interrupt_source()?;
        let fifo_status = self.read_fifo_status()?;
        let status = self.read_status()?;
        Ok(AllSources {
            interrupt_source,
            fifo_status,
            status,
        })
    }

    /// Read the interrupt source register (`INT_SOURCE`)
    ///
    /// With latched interrupts, reading this register clears the request.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_interrupt_source(&mut self) -> Result<InterruptSource, Error<I::Error>> {
        let reg = self.device.int_source().read()?;
        Ok(InterruptSource {
            pressure_high: reg.ph(),
            pressure_low: reg.pl(),
            active: reg.ia(),
            boot_on: reg.boot_on(),
        })
    }

    /// Read the data status register (`STATUS`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_status(&mut self) -> Result<DataStatus, Error<I::Error>> {
        let reg = self.device.status().read()?;
        Ok(DataStatus {
            pressure_ready: reg.p_da(),
            temperature_ready: reg.t_da(),
            pressure_overrun: reg.p_or(),
            temperature_overrun: reg.t_or(),
        })
    }

    /// Check if a new pressure sample is available
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn pressure_data_ready(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.status().read()?.p_da())
    }

    /// Check if a new temperature sample is available
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn temperature_data_ready(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.status().read()?.t_da())
    }

    // ==================== OUTPUT DATA ====================

    /// Read the raw pressure output bytes `[XL, L, H]`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_pressure_raw(&mut self) -> Result<[u8; 3], Error<I::Error>> {
        let mut buffer = [0u8; 3];
        self.read_register(PRESS_OUT_XL, &mut buffer)?;
        Ok(buffer)
    }

    /// Read the raw temperature output bytes `[L, H]`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_temperature_raw(&mut self) -> Result<[u8; 2], Error<I::Error>> {
        let mut buffer = [0u8; 2];
        self.read_register(TEMP_OUT_L, &mut buffer)?;
        Ok(buffer)
    }

    /// Read the raw FIFO pressure output bytes `[XL, L, H]`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_fifo_pressure_raw(&mut self) -> Result<[u8; 3], Error<I::Error>> {
        let mut buffer = [0u8; 3];
        self.read_register(FIFO_DATA_OUT_PRESS_XL, &mut buffer)?;
        Ok(buffer)
    }

    /// Read the raw FIFO temperature output bytes `[L, H]`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_fifo_temperature_raw(&mut self) -> Result<[u8; 2], Error<I::Error>> {
        let mut buffer = [0u8; 2];
        self.read_register(FIFO_DATA_OUT_TEMP_L, &mut buffer)?;
        Ok(buffer)
    }

    /// Read the pressure sample as a sign-extended 24-bit value
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_pressure(&mut self) -> Result<i32, Error<I::Error>> {
        Ok(data::pressure_from_bytes(self.read_pressure_raw()?))
    }

    /// Read the temperature sample
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_temperature(&mut self) -> Result<i16, Error<I::Error>> {
        Ok(data::temperature_from_bytes(self.read_temperature_raw()?))
    }

    /// Read pressure in hPa
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_pressure_hpa(&mut self) -> Result<f32, Error<I::Error>> {
        Ok(data::pressure_to_hpa(self.read_pressure()?))
    }

    /// Read temperature in °C
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_temperature_celsius(&mut self) -> Result<f32, Error<I::Error>> {
        Ok(data::temperature_to_celsius(self.read_temperature()?))
    }

    /// Pop one sample from the FIFO
    ///
    /// Reads the whole 5-byte output window in a single burst so pressure and
    /// temperature come from the same slot.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_fifo_sample(&mut self) -> Result<FifoSample, Error<I::Error>> {
        let mut buffer = [0u8; FIFO_SAMPLE_SIZE];
        self.read_register(FIFO_DATA_OUT_PRESS_XL, &mut buffer)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("FIFO slot: {:02x}", buffer);

        Ok(FifoSample::from_bytes(buffer))
    }
}

/// Transfer size in bits for a byte count
#[allow(clippy::cast_possible_truncation)]
const fn size_bits(len: usize) -> u32 {
    (len * 8) as u32
}
