//! USB identity and control-transfer setup constants
//!
//! Published for transport implementors; no USB I/O happens in this
//! workspace. Every packet travels as a single HID `SET_REPORT` class
//! request with a 640-byte payload.

use crate::page::PACKET_LEN;

/// USB vendor ID of the panel
pub const VENDOR_ID: u16 = 0x0b05;

/// USB product ID of the panel
pub const PRODUCT_ID: u16 = 0x193b;

/// Substring that identifies the panel in a Windows device instance path
pub const DEVICE_PATH_MATCH: &str = "VID_0B05&PID_193B";

/// `bmRequestType`: host-to-device, class request, interface recipient
pub const SETUP_REQUEST_TYPE: u8 = 0x21;

/// `bRequest`: HID `SET_REPORT`
pub const SETUP_REQUEST: u8 = 0x09;

/// `wValue`: feature report, report ID 0x5e
pub const SETUP_VALUE: u16 = 0x035e;

/// `wIndex`: interface 0
pub const SETUP_INDEX: u16 = 0x0000;

/// `wLength`: every transfer carries a full packet
pub const SETUP_LENGTH: u16 = PACKET_LEN as u16;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PAGE_SELECTOR;

    #[test]
    fn test_report_id_matches_page_selector() {
        // Low byte of wValue is the report ID, which doubles as byte 0 of
        // every packet
        assert_eq!((SETUP_VALUE & 0xff) as u8, PAGE_SELECTOR);
        assert_eq!(SETUP_VALUE >> 8, 0x03); // feature report
    }

    #[test]
    fn test_setup_length_is_full_packet() {
        assert_eq!(SETUP_LENGTH, 640);
    }
}
