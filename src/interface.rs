//! Bus interface implementations for the LPS27HHW
//!
//! This module provides implementations of the `device-driver`
//! [`RegisterInterface`] trait for I2C and SPI communication with the
//! LPS27HHW. Any other transport can be plugged into the driver by
//! implementing the same trait.
//!
//! Multi-byte accesses rely on the sensor's register address auto-increment
//! (`IF_ADD_INC`, enabled after power-up).

use crate::I2C_ADDRESS_SA0_HIGH;

use device_driver::RegisterInterface;

/// I2C interface for the LPS27HHW
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Create a new I2C interface with the default address (0x5D, SA0 pin HIGH)
    ///
    /// # Arguments
    /// * `i2c` - The I2C peripheral
    ///
    /// # Example
    /// ```ignore
    /// let interface = I2cInterface::sa0_high(i2c);
    /// let mut sensor = Lps27hhwDriver::new(interface);
    /// ```
    pub const fn sa0_high(i2c: I2C) -> Self {
        Self {
            i2c,
            address: I2C_ADDRESS_SA0_HIGH,
        }
    }

    /// Create a new I2C interface with the alternative address (0x5C, SA0 pin LOW)
    ///
    /// Use this when the SDO/SA0 pin is tied to ground.
    pub const fn sa0_low(i2c: I2C) -> Self {
        Self {
            i2c,
            address: crate::I2C_ADDRESS_SA0_LOW,
        }
    }

    /// Create a new I2C interface with a custom 7-bit device address
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// The 7-bit address this interface talks to
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Consume the interface and return the I2C peripheral
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> RegisterInterface for I2cInterface<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in read_data.len() for I2C
        self.i2c.write_read(self.address, &[address], read_data)
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in write_data.len() for I2C
        // Adjacent writes go out as one continuous write, no repeated start
        let register = [address];
        let mut operations = [
            embedded_hal::i2c::Operation::Write(&register),
            embedded_hal::i2c::Operation::Write(write_data),
        ];

        self.i2c.transaction(self.address, &mut operations)
    }
}

/// SPI interface for the LPS27HHW
///
/// # Note on Chip Select
///
/// This interface uses the `SpiDevice` trait from `embedded-hal`, which manages
/// the chip select (CS) pin automatically.
///
/// If using `embedded-hal-bus`, you would typically create an `SpiDevice` like:
/// ```ignore
/// let spi_device = embedded_hal_bus::spi::ExclusiveDevice::new(spi_bus, cs_pin, delay);
/// let interface = SpiInterface::new(spi_device);
/// ```
///
/// The sensor samples on SPI mode 3 (CPOL = 1, CPHA = 1).
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Create a new SPI interface with the given SPI device
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Consume the interface and return the SPI device
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI, E> RegisterInterface for SpiInterface<SPI>
where
    SPI: embedded_hal::spi::SpiDevice<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in read_data.len() for SPI
        // RW bit (MSB) set for reads
        let read_address = [address | 0x80];

        let mut operations = [
            embedded_hal::spi::Operation::Write(&read_address),
            embedded_hal::spi::Operation::Read(read_data),
        ];

        self.spi.transaction(&mut operations)
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in write_data.len() for SPI
        let write_address = [address & 0x7F];

        let mut operations = [
            embedded_hal::spi::Operation::Write(&write_address),
            embedded_hal::spi::Operation::Write(write_data),
        ];

        self.spi.transaction(&mut operations)
    }
}
