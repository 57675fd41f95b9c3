//! Register definitions for the LPS27HHW
//!
//! The LPS27HHW exposes a flat 7-bit register space. Configuration registers
//! live at 0x0B-0x19, status and output registers at 0x24-0x2C, and the FIFO
//! output window is aliased at 0x78-0x7C.
//!
//! Every bitfield is declared with its explicit bit range, so field access
//! never depends on native struct packing. Bits that the datasheet marks as
//! "not used" are declared as `reserved_*` fields so that read-modify-write
//! cycles carry them through unchanged.
//!
//! Multi-byte registers (`THS_P`, `REF_P`, `RPDS`) are declared as a single
//! little-endian 16-bit register, matching the sensor's L/H address order.

device_driver::create_device!(
    device_name: Lps27hhw,
    dsl: {
        config {
            type RegisterAddressType = u8;
            type DefaultByteOrder = LE;
        }

        /// INTERRUPT_CFG - Interrupt and autozero configuration (0x0B)
        register InterruptCfg {
            const ADDRESS = 0x0B;
            const SIZE_BITS = 8;

            /// Pressure event enable: bit 0 = high event (PHE), bit 1 = low event (PLE)
            pe: uint = 0..2,
            /// Latch interrupt request to INT_SOURCE
            lir: bool = 2,
            /// Enable interrupt generation on differential pressure
            diff_en: bool = 3,
            /// Reset AUTOZERO function
            reset_az: bool = 4,
            /// Enable AUTOZERO function
            autozero: bool = 5,
            /// Reset AUTOREFP function
            reset_arp: bool = 6,
            /// Enable AUTOREFP function
            autorefp: bool = 7,
        },

        /// THS_P_L / THS_P_H - Pressure threshold (0x0C-0x0D)
        register ThsP {
            const ADDRESS = 0x0C;
            const SIZE_BITS = 16;

            /// Unsigned 15-bit threshold, 1 LSB = 1/16 hPa
            ths: uint = 0..15,
            reserved_15: uint = 15..16,
        },

        /// IF_CTRL - Serial interface control (0x0E)
        register IfCtrl {
            const ADDRESS = 0x0E;
            const SIZE_BITS = 8;

            /// Disable I2C interface
            i2c_disable: bool = 0,
            /// Disable MIPI I3C interface
            i3c_disable: bool = 1,
            /// Disconnect the INT_DRDY pull-down
            pd_dis_int1: bool = 2,
            /// Connect the SDO/SA0 pull-up
            sdo_pu_en: bool = 3,
            /// Connect the SDA pull-up
            sda_pu_en: bool = 4,
            reserved_6_5: uint = 5..7,
            /// Route INT_DRDY to the I3C in-band interrupt
            int_en_i3c: bool = 7,
        },

        /// WHO_AM_I - Device identification (0x0F)
        /// Expected value: 0xB3
        register WhoAmI {
            type Access = RO;
            const ADDRESS = 0x0F;
            const SIZE_BITS = 8;

            /// Device ID (should read 0xB3)
            who_am_i: uint = 0..8,
        },

        /// CTRL_REG1 - Data rate, filter and block data update (0x10)
        register CtrlReg1 {
            const ADDRESS = 0x10;
            const SIZE_BITS = 8;

            /// SPI serial interface mode (0 = 4-wire, 1 = 3-wire)
            sim: bool = 0,
            /// Block data update
            bdu: bool = 1,
            /// Low-pass filter: bit 2 = LPFP_CFG, bit 3 = EN_LPFP
            lpfp_cfg: uint = 2..4,
            /// Output data rate selection
            odr: uint = 4..7,
            reserved_7: uint = 7..8,
        },

        /// CTRL_REG2 - Control register 2 (0x11)
        register CtrlReg2 {
            const ADDRESS = 0x11;
            const SIZE_BITS = 8;

            /// Trigger a one-shot measurement (self-clearing)
            one_shot: bool = 0,
            /// Low-noise mode enable
            low_noise_en: bool = 1,
            /// Software reset (self-clearing)
            swreset: bool = 2,
            reserved_3: uint = 3..4,
            /// Register address auto-increment on multi-byte access
            if_add_inc: bool = 4,
            /// Push-pull (0) or open-drain (1) on interrupt pins
            pp_od: bool = 5,
            /// Interrupt active high (0) or active low (1)
            int_h_l: bool = 6,
            /// Reboot memory content (self-clearing)
            boot: bool = 7,
        },

        /// CTRL_REG3 - Interrupt routing on INT_DRDY (0x12)
        register CtrlReg3 {
            const ADDRESS = 0x12;
            const SIZE_BITS = 8;

            /// Data signal on INT_DRDY pin
            int_s: uint = 0..2,
            /// Data-ready signal on INT_DRDY pin
            drdy: bool = 2,
            /// FIFO overrun interrupt on INT_DRDY pin
            int_f_ovr: bool = 3,
            /// FIFO threshold (watermark) interrupt on INT_DRDY pin
            int_f_wtm: bool = 4,
            /// FIFO full interrupt on INT_DRDY pin
            int_f_full: bool = 5,
            reserved_7_6: uint = 6..8,
        },

        /// FIFO_CTRL - FIFO mode selection (0x13)
        register FifoCtrl {
            const ADDRESS = 0x13;
            const SIZE_BITS = 8;

            /// FIFO mode including trigger modes (TRIG_MODES + F_MODE)
            f_mode: uint = 0..3,
            /// Stop filling the FIFO at the watermark level
            stop_on_wtm: bool = 3,
            reserved_7_4: uint = 4..8,
        },

        /// FIFO_WTM - FIFO watermark level (0x14)
        register FifoWtm {
            const ADDRESS = 0x14;
            const SIZE_BITS = 8;

            /// Watermark level in samples
            wtm: uint = 0..7,
            reserved_7: uint = 7..8,
        },

        /// REF_P_L / REF_P_H - Reference pressure (0x15-0x16)
        register RefP {
            const ADDRESS = 0x15;
            const SIZE_BITS = 16;

            /// Two's complement reference pressure
            ref_p: uint = 0..16,
        },

        /// RPDS_L / RPDS_H - Pressure offset (0x18-0x19)
        register Rpds {
            const ADDRESS = 0x18;
            const SIZE_BITS = 16;

            /// Two's complement pressure offset
            rpds: uint = 0..16,
        },

        /// INT_SOURCE - Interrupt source (0x24)
        register IntSource {
            type Access = RO;
            const ADDRESS = 0x24;
            const SIZE_BITS = 8;

            /// Differential pressure high
            ph: bool = 0,
            /// Differential pressure low
            pl: bool = 1,
            /// Interrupt active
            ia: bool = 2,
            reserved_6_3: uint = 3..7,
            /// Boot phase running
            boot_on: bool = 7,
        },

        /// FIFO_STATUS1 - Number of unread FIFO samples (0x25)
        register FifoStatus1 {
            type Access = RO;
            const ADDRESS = 0x25;
            const SIZE_BITS = 8;

            /// FIFO stored data level
            fss: uint = 0..8,
        },

        /// FIFO_STATUS2 - FIFO flags (0x26)
        register FifoStatus2 {
            type Access = RO;
            const ADDRESS = 0x26;
            const SIZE_BITS = 8;

            reserved_4_0: uint = 0..5,
            /// FIFO completely filled
            fifo_full_ia: bool = 5,
            /// FIFO overrun
            fifo_ovr_ia: bool = 6,
            /// FIFO watermark reached
            fifo_wtm_ia: bool = 7,
        },

        /// STATUS - Data availability and overrun (0x27)
        register Status {
            type Access = RO;
            const ADDRESS = 0x27;
            const SIZE_BITS = 8;

            /// New pressure data available
            p_da: bool = 0,
            /// New temperature data available
            t_da: bool = 1,
            reserved_3_2: uint = 2..4,
            /// Pressure data overwritten before read
            p_or: bool = 4,
            /// Temperature data overwritten before read
            t_or: bool = 5,
            reserved_7_6: uint = 6..8,
        }
    }
);

pub use Lps27hhw as RegisterDevice;

/// PRESS_OUT_XL - first byte of the 24-bit pressure output (0x28-0x2A)
pub const PRESS_OUT_XL: u8 = 0x28;

/// TEMP_OUT_L - first byte of the 16-bit temperature output (0x2B-0x2C)
pub const TEMP_OUT_L: u8 = 0x2B;

/// FIFO_DATA_OUT_PRESS_XL - first byte of the FIFO pressure window (0x78-0x7A)
pub const FIFO_DATA_OUT_PRESS_XL: u8 = 0x78;

/// FIFO_DATA_OUT_TEMP_L - first byte of the FIFO temperature window (0x7B-0x7C)
pub const FIFO_DATA_OUT_TEMP_L: u8 = 0x7B;
