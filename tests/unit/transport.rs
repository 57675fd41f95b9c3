//! Unit tests for I2C and SPI framing

use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};
use lps27hhw::{DataRate, I2cInterface, Lps27hhwDriver, SpiInterface};

#[test]
fn test_i2c_default_address() {
    let expectations = [I2cTransaction::write_read(0x5D, vec![0x0F], vec![0xB3])];
    let i2c = I2cMock::new(&expectations);

    let interface = I2cInterface::sa0_high(i2c);
    assert_eq!(interface.address(), lps27hhw::I2C_ADDRESS_SA0_HIGH);

    let mut driver = Lps27hhwDriver::new(interface);
    assert_eq!(driver.read_who_am_i().unwrap(), 0xB3);

    let mut i2c = driver.release().release();
    i2c.done();
}

#[test]
fn test_i2c_alternate_address() {
    let expectations = [I2cTransaction::write_read(0x5C, vec![0x0F], vec![0xB3])];
    let i2c = I2cMock::new(&expectations);

    let mut driver = Lps27hhwDriver::new(I2cInterface::sa0_low(i2c));
    assert_eq!(driver.read_who_am_i().unwrap(), 0xB3);

    let mut i2c = driver.release().release();
    i2c.done();
}

#[test]
fn test_i2c_8bit_address_constants() {
    assert_eq!(lps27hhw::I2C_ADD_H >> 1, lps27hhw::I2C_ADDRESS_SA0_HIGH);
    assert_eq!(lps27hhw::I2C_ADD_L >> 1, lps27hhw::I2C_ADDRESS_SA0_LOW);
}

#[test]
fn test_i2c_burst_read() {
    let expectations = [I2cTransaction::write_read(
        0x5D,
        vec![0x28],
        vec![0x00, 0x10, 0x00],
    )];
    let i2c = I2cMock::new(&expectations);

    let mut driver = Lps27hhwDriver::new(I2cInterface::sa0_high(i2c));
    assert_eq!(driver.read_pressure().unwrap(), 4096);

    let mut i2c = driver.release().release();
    i2c.done();
}

#[test]
fn test_i2c_read_modify_write() {
    let expectations = [
        I2cTransaction::write_read(0x5D, vec![0x10], vec![0x80]),
        I2cTransaction::transaction_start(0x5D),
        I2cTransaction::write(0x5D, vec![0x10]),
        I2cTransaction::write(0x5D, vec![0xB0]),
        I2cTransaction::transaction_end(0x5D),
        I2cTransaction::write_read(0x5D, vec![0x11], vec![0x10]),
        I2cTransaction::transaction_start(0x5D),
        I2cTransaction::write(0x5D, vec![0x11]),
        I2cTransaction::write(0x5D, vec![0x10]),
        I2cTransaction::transaction_end(0x5D),
    ];
    let i2c = I2cMock::new(&expectations);

    let mut driver = Lps27hhwDriver::new(I2cInterface::sa0_high(i2c));
    driver.set_data_rate(DataRate::Hz25).unwrap();

    let mut i2c = driver.release().release();
    i2c.done();
}

#[test]
fn test_spi_read_sets_rw_bit() {
    let expectations = [
        SpiTransaction::transaction_start(),
        SpiTransaction::write_vec(vec![0x8F]),
        SpiTransaction::read_vec(vec![0xB3]),
        SpiTransaction::transaction_end(),
    ];
    let spi = SpiMock::new(&expectations);

    let mut driver = Lps27hhwDriver::new(SpiInterface::new(spi));
    assert_eq!(driver.read_who_am_i().unwrap(), 0xB3);

    let mut spi = driver.release().release();
    spi.done();
}

#[test]
fn test_spi_write_clears_rw_bit() {
    let expectations = [
        SpiTransaction::transaction_start(),
        SpiTransaction::write_vec(vec![0x15]),
        SpiTransaction::write_vec(vec![0x34, 0x12]),
        SpiTransaction::transaction_end(),
    ];
    let spi = SpiMock::new(&expectations);

    let mut driver = Lps27hhwDriver::new(SpiInterface::new(spi));
    driver.write_register(0x95, &[0x34, 0x12]).unwrap();

    let mut spi = driver.release().release();
    spi.done();
}

#[test]
fn test_i2c_long_write_is_not_truncated() {
    let payload: Vec<u8> = (0..40).collect();
    let expectations = [
        I2cTransaction::transaction_start(0x5D),
        I2cTransaction::write(0x5D, vec![0x0B]),
        I2cTransaction::write(0x5D, payload.clone()),
        I2cTransaction::transaction_end(0x5D),
    ];
    let i2c = I2cMock::new(&expectations);

    let mut driver = Lps27hhwDriver::new(I2cInterface::sa0_high(i2c));
    driver.write_register(0x0B, &payload).unwrap();

    let mut i2c = driver.release().release();
    i2c.done();
}

#[test]
fn test_spi_long_write_is_not_truncated() {
    let payload = vec![0xAA; 40];
    let expectations = [
        SpiTransaction::transaction_start(),
        SpiTransaction::write_vec(vec![0x0B]),
        SpiTransaction::write_vec(payload.clone()),
        SpiTransaction::transaction_end(),
    ];
    let spi = SpiMock::new(&expectations);

    let mut driver = Lps27hhwDriver::new(SpiInterface::new(spi));
    driver.write_register(0x0B, &payload).unwrap();

    let mut spi = driver.release().release();
    spi.done();
}

#[test]
fn test_spi_fifo_burst() {
    let expectations = [
        SpiTransaction::transaction_start(),
        SpiTransaction::write_vec(vec![0xF8]),
        SpiTransaction::read_vec(vec![0x00, 0x20, 0x00, 0xC4, 0x09]),
        SpiTransaction::transaction_end(),
    ];
    let spi = SpiMock::new(&expectations);

    let mut driver = Lps27hhwDriver::new(SpiInterface::new(spi));
    let sample = driver.read_fifo_sample().unwrap();
    assert_eq!(sample.pressure, 8192);
    assert_eq!(sample.temperature, 2500);

    let mut spi = driver.release().release();
    spi.done();
}
