//! Unit tests for error handling and recovery

use crate::common::create_mock_driver;
use crate::common::mock_interface::MockError;
use lps27hhw::{DataRate, Error};

#[test]
fn test_read_failure_basic() {
    let (mut driver, interface) = create_mock_driver();

    interface.fail_next_read();

    let result = driver.read_pressure();
    assert_eq!(result, Err(Error::Transport(MockError::Communication)));
}

#[test]
fn test_read_failure_recovery() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_registers(0x28, &[0x00, 0x10, 0x00]);

    interface.fail_next_read();
    assert!(driver.read_pressure().is_err(), "First read should fail");

    // Driver holds no state, the next call goes straight through
    assert_eq!(driver.read_pressure().unwrap(), 4096);
}

#[test]
fn test_failed_read_skips_write() {
    let (mut driver, interface) = create_mock_driver();

    interface.fail_next_read();
    assert!(driver.set_fifo_watermark(10).is_err());

    // Read-modify-write never reached the write
    assert!(interface.written_addresses().is_empty());
    assert_eq!(interface.get_register(0x14), 0x00);
}

#[test]
fn test_write_failure_on_data_rate() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(0x11, 0x10);

    interface.fail_next_write();
    let result = driver.set_data_rate(DataRate::Hz10LowNoise);
    assert_eq!(result, Err(Error::Transport(MockError::Communication)));

    // CTRL_REG1 write failed, CTRL_REG2 was not touched
    assert_eq!(interface.get_register(0x10), 0x00);
    assert_eq!(interface.get_register(0x11), 0x10);

    driver.set_data_rate(DataRate::Hz10LowNoise).unwrap();
    assert_eq!(driver.data_rate().unwrap(), DataRate::Hz10LowNoise);
}

#[test]
fn test_multiple_read_failures() {
    let (mut driver, interface) = create_mock_driver();

    for _ in 0..3 {
        interface.fail_next_read();
        assert!(driver.read_who_am_i().is_err());
        assert!(driver.read_who_am_i().is_ok());
    }
}

#[test]
fn test_error_from_transport() {
    let error: Error<MockError> = MockError::Communication.into();
    assert_eq!(error, Error::Transport(MockError::Communication));
}
