//! Value objects and the encoding rules for merchant-presented QR payloads.

pub mod amount;
pub mod crc16;
pub mod payload;
pub mod ports;
pub mod request;
pub mod target;
