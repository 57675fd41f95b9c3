//! Unit tests for pressure and temperature output reads

use crate::common::{Operation, create_mock_driver};

#[test]
fn test_pressure_raw_is_single_three_byte_read() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_registers(0x28, &[0x01, 0x02, 0x03]);

    assert_eq!(driver.read_pressure_raw().unwrap(), [0x01, 0x02, 0x03]);
    assert_eq!(
        interface.operations(),
        vec![Operation::Read {
            address: 0x28,
            len: 3
        }]
    );
}

#[test]
fn test_temperature_raw_is_single_two_byte_read() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_registers(0x2B, &[0xC4, 0x09]);

    assert_eq!(driver.read_temperature_raw().unwrap(), [0xC4, 0x09]);
    assert_eq!(
        interface.operations(),
        vec![Operation::Read {
            address: 0x2B,
            len: 2
        }]
    );
}

#[test]
fn test_pressure_sign_extension() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_registers(0x28, &[0x00, 0x00, 0x80]);
    assert_eq!(driver.read_pressure().unwrap(), -8_388_608);

    interface.set_registers(0x28, &[0xFF, 0xFF, 0x7F]);
    assert_eq!(driver.read_pressure().unwrap(), 8_388_607);

    interface.set_registers(0x28, &[0xFF, 0xFF, 0xFF]);
    assert_eq!(driver.read_pressure().unwrap(), -1);
}

#[test]
#[allow(clippy::float_cmp)]
fn test_pressure_hpa() {
    let (mut driver, interface) = create_mock_driver();

    // 1013.25 hPa
    interface.set_registers(0x28, &[0x00, 0x54, 0x3F]);
    assert_eq!(driver.read_pressure().unwrap(), 4_150_272);
    assert_eq!(driver.read_pressure_hpa().unwrap(), 1013.25);
}

#[test]
#[allow(clippy::float_cmp)]
fn test_temperature_celsius() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_registers(0x2B, &[0xC4, 0x09]);
    assert_eq!(driver.read_temperature().unwrap(), 2500);
    assert_eq!(driver.read_temperature_celsius().unwrap(), 25.0);

    interface.set_registers(0x2B, &[0x9C, 0xFF]);
    assert_eq!(driver.read_temperature().unwrap(), -100);
    assert_eq!(driver.read_temperature_celsius().unwrap(), -1.0);
}

#[test]
fn test_fifo_output_window_raw_reads() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_registers(0x78, &[0xAA, 0xBB, 0xCC, 0xDD, 0xEE]);

    assert_eq!(driver.read_fifo_pressure_raw().unwrap(), [0xAA, 0xBB, 0xCC]);
    assert_eq!(driver.read_fifo_temperature_raw().unwrap(), [0xDD, 0xEE]);
    assert_eq!(
        interface.operations(),
        vec![
            Operation::Read {
                address: 0x78,
                len: 3
            },
            Operation::Read {
                address: 0x7B,
                len: 2
            },
        ]
    );
}
