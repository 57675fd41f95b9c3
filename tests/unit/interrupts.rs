//! Unit tests for interrupt pin and event configuration

use crate::common::create_mock_driver;
use lps27hhw::{
    InterruptLatch, InterruptPinConfig, InterruptRoute, InterruptSignal, PinMode, PinPolarity,
    ThresholdEvent,
};

#[test]
fn test_threshold_event_drives_diff_en() {
    let (mut driver, interface) = create_mock_driver();

    driver
        .set_threshold_event(ThresholdEvent::PressureLow)
        .unwrap();
    // PLE plus DIFF_EN
    assert_eq!(interface.get_register(0x0B), 0x0A);
    assert_eq!(
        driver.threshold_event().unwrap(),
        ThresholdEvent::PressureLow
    );

    driver.set_threshold_event(ThresholdEvent::Both).unwrap();
    assert_eq!(interface.get_register(0x0B), 0x0B);

    driver.set_threshold_event(ThresholdEvent::None).unwrap();
    assert_eq!(interface.get_register(0x0B), 0x00);
    assert_eq!(driver.threshold_event().unwrap(), ThresholdEvent::None);
}

#[test]
fn test_threshold_event_keeps_autozero() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(0x0B, 0x20);

    driver
        .set_threshold_event(ThresholdEvent::PressureHigh)
        .unwrap();
    assert_eq!(interface.get_register(0x0B), 0x29);
    assert!(driver.autozero().unwrap());
}

#[test]
fn test_interrupt_latch() {
    let (mut driver, interface) = create_mock_driver();

    driver
        .set_interrupt_latch(InterruptLatch::Latched)
        .unwrap();
    assert_eq!(interface.get_register(0x0B), 0x04);
    assert_eq!(driver.interrupt_latch().unwrap(), InterruptLatch::Latched);
}

#[test]
fn test_pin_mode_and_polarity() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(0x11, 0x10);

    driver.set_pin_mode(PinMode::OpenDrain).unwrap();
    driver.set_pin_polarity(PinPolarity::ActiveLow).unwrap();
    assert_eq!(interface.get_register(0x11), 0x70);

    assert_eq!(driver.pin_mode().unwrap(), PinMode::OpenDrain);
    assert_eq!(driver.pin_polarity().unwrap(), PinPolarity::ActiveLow);
}

#[test]
fn test_configure_interrupt_pin() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(0x11, 0x10);

    let config = InterruptPinConfig::shared_line();
    driver.configure_interrupt_pin(&config).unwrap();

    assert_eq!(interface.get_register(0x11), 0x70);
    assert_eq!(interface.get_register(0x0B), 0x04);
    assert_eq!(driver.interrupt_pin_config().unwrap(), config);

    driver
        .configure_interrupt_pin(&InterruptPinConfig::default())
        .unwrap();
    assert_eq!(interface.get_register(0x11), 0x10);
    assert_eq!(interface.get_register(0x0B), 0x00);
}

#[test]
fn test_interrupt_route() {
    let (mut driver, interface) = create_mock_driver();
    // Reserved bits 7:6
    interface.set_register(0x12, 0xC0);

    let route = InterruptRoute {
        signal: InterruptSignal::PressureHighOrLow,
        data_ready: true,
        fifo_overrun: false,
        fifo_watermark: true,
        fifo_full: false,
    };
    driver.set_interrupt_route(&route).unwrap();

    assert_eq!(interface.get_register(0x12), 0xC0 | 0x10 | 0x04 | 0x03);
    assert_eq!(driver.interrupt_route().unwrap(), route);
}

#[test]
fn test_fifo_flags_on_int_pin() {
    let (mut driver, interface) = create_mock_driver();

    driver.set_fifo_overrun_on_int(true).unwrap();
    driver.set_fifo_threshold_on_int(true).unwrap();
    driver.set_fifo_full_on_int(true).unwrap();
    assert_eq!(interface.get_register(0x12), 0x38);

    assert!(driver.fifo_overrun_on_int().unwrap());
    assert!(driver.fifo_threshold_on_int().unwrap());
    assert!(driver.fifo_full_on_int().unwrap());

    driver.set_fifo_threshold_on_int(false).unwrap();
    assert_eq!(interface.get_register(0x12), 0x28);
    assert!(!driver.fifo_threshold_on_int().unwrap());
}
