//! Unit tests for status and interrupt source reads

use crate::common::{Operation, create_mock_driver};

#[test]
fn test_read_all_sources_order() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(0x24, 0x85);
    interface.set_register(0x26, 0x40);
    interface.set_register(0x27, 0x21);

    let sources = driver.read_all_sources().unwrap();

    assert!(sources.interrupt_source.pressure_high);
    assert!(!sources.interrupt_source.pressure_low);
    assert!(sources.interrupt_source.active);
    assert!(sources.interrupt_source.boot_on);

    assert!(sources.fifo_status.overrun);
    assert!(!sources.fifo_status.full);
    assert!(!sources.fifo_status.watermark);

    assert!(sources.status.pressure_ready);
    assert!(!sources.status.temperature_ready);
    assert!(!sources.status.pressure_overrun);
    assert!(sources.status.temperature_overrun);

    let addresses: Vec<u8> = interface
        .operations()
        .iter()
        .map(|op| match op {
            Operation::Read { address, .. } | Operation::Write { address, .. } => *address,
        })
        .collect();
    assert_eq!(addresses, vec![0x24, 0x26, 0x27]);
}

#[test]
fn test_data_ready_flags() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_register(0x27, 0x02);
    assert!(!driver.pressure_data_ready().unwrap());
    assert!(driver.temperature_data_ready().unwrap());

    interface.set_register(0x27, 0x13);
    let status = driver.read_status().unwrap();
    assert!(status.any_ready());
    assert!(status.pressure_overrun);
    assert!(!status.temperature_overrun);
}

#[test]
fn test_interrupt_source_threshold() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_register(0x24, 0x06);
    let source = driver.read_interrupt_source().unwrap();
    assert!(source.pressure_low);
    assert!(source.active);
    assert!(source.any_threshold());
    assert!(!source.boot_on);
}

#[test]
fn test_status_reserved_bits_ignored() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_register(0x27, 0xCC);
    let status = driver.read_status().unwrap();
    assert!(!status.any_ready());
    assert!(!status.any_overrun());
}
