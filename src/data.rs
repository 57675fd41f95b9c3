//! Raw sample decoding and unit conversion
//!
//! Pure functions, no bus access. Output registers are little-endian in
//! address order: pressure is XL, L, H (24-bit two's complement) and
//! temperature is L, H (16-bit two's complement).

/// Pressure sensitivity in LSB/hPa
pub const PRESSURE_SENSITIVITY: f32 = 4096.0;

/// Temperature sensitivity in LSB/°C
pub const TEMPERATURE_SENSITIVITY: f32 = 100.0;

/// Assemble a 24-bit pressure sample from `[XL, L, H]`, sign-extended to `i32`
///
/// ```
/// assert_eq!(lps27hhw::pressure_from_bytes([0x00, 0x00, 0x80]), -8_388_608);
/// assert_eq!(lps27hhw::pressure_from_bytes([0x00, 0x10, 0x00]), 4096);
/// ```
#[must_use]
pub const fn pressure_from_bytes(bytes: [u8; 3]) -> i32 {
    // Place the sample in the top three bytes, then shift back arithmetically
    i32::from_le_bytes([0, bytes[0], bytes[1], bytes[2]]) >> 8
}

/// Assemble a 16-bit temperature sample from `[L, H]`
#[must_use]
pub const fn temperature_from_bytes(bytes: [u8; 2]) -> i16 {
    i16::from_le_bytes(bytes)
}

/// Convert a raw pressure sample to hectopascals
#[must_use]
#[allow(clippy::cast_precision_loss)] // 24-bit samples fit the f32 mantissa
pub fn pressure_to_hpa(raw: i32) -> f32 {
    raw as f32 / PRESSURE_SENSITIVITY
}

/// Convert a raw temperature sample to degrees Celsius
#[must_use]
pub fn temperature_to_celsius(raw: i16) -> f32 {
    f32::from(raw) / TEMPERATURE_SENSITIVITY
}
