//! Device packet layout
//!
//! Every transfer to the panel is exactly 640 bytes. Byte 0 always carries
//! the device page selector `0x5e`; the meaning of the rest depends on the
//! packet kind:
//!
//! ```text
//! ┌──────────┬───────────────────────────┬───────────────────────────────┐
//! │ page     │ 5e c0 02 01 00 73 02      │ row data at geometry offsets  │
//! │ (first)  │ header, 7 bytes           │ unused bytes zero             │
//! ├──────────┼───────────────────────────┼───────────────────────────────┤
//! │ page     │ 5e c0 02 74 02 73 02      │ row data at geometry offsets  │
//! │ (second) │ header, 7 bytes           │ unused bytes zero             │
//! ├──────────┼───────────────────────────┼───────────────────────────────┤
//! │ flush    │ 5e c0 03                  │ zeros; commits both pages     │
//! ├──────────┼───────────────────────────┼───────────────────────────────┤
//! │ init     │ 5e "ASUS Tech.Inc."       │ zeros; one-time handshake     │
//! └──────────┴───────────────────────────┴───────────────────────────────┘
//! ```

/// Length of every control-transfer packet, in bytes
pub const PACKET_LEN: usize = 640;

/// Device page selector, byte 0 of every packet
pub const PAGE_SELECTOR: u8 = 0x5e;

/// Length of the reserved header at the front of each page
pub const PAGE_HEADER_LEN: usize = 7;

/// Header of the first page
pub const FIRST_PAGE_HEADER: [u8; PAGE_HEADER_LEN] = [0x5e, 0xc0, 0x02, 0x01, 0x00, 0x73, 0x02];

/// Header of the second page; differs from the first only in bytes 3..=4
pub const SECOND_PAGE_HEADER: [u8; PAGE_HEADER_LEN] = [0x5e, 0xc0, 0x02, 0x74, 0x02, 0x73, 0x02];

/// Header of the flush packet
pub const FLUSH_HEADER: [u8; 3] = [0x5e, 0xc0, 0x03];

/// Vendor string carried by the init handshake packet, bytes 1..=14
pub const INIT_VENDOR_STRING: &[u8; 14] = b"ASUS Tech.Inc.";

/// Build the flush packet that commits both pages to the panel
pub fn flush_packet() -> [u8; PACKET_LEN] {
    let mut packet = [0u8; PACKET_LEN];
    packet[..FLUSH_HEADER.len()].copy_from_slice(&FLUSH_HEADER);
    packet
}

/// Build the one-time init handshake packet
pub fn init_packet() -> [u8; PACKET_LEN] {
    let mut packet = [0u8; PACKET_LEN];
    packet[0] = PAGE_SELECTOR;
    packet[1..1 + INIT_VENDOR_STRING.len()].copy_from_slice(INIT_VENDOR_STRING);
    packet
}
