//! Byte-field packer for the 32-byte identifier buffer.
//!
//! | Offset | Length | Field |
//! |---|---|---|
//! | 0 | 8 | machine fingerprint |
//! | 8 | 8 | Unix timestamp in ms, `i64` LE |
//! | 16 | 4 | process id, `u32` LE |
//! | 20 | 4 | counter, `u32` LE |
//! | 24 | 4 | public IPv4 octets |
//! | 28 | 4 | MAC-derived bytes |

use std::ops::Range;

/// Size of the identifier buffer.
pub const BUFFER_LEN: usize = 32;

pub const FINGERPRINT: Range<usize> = 0..8;
pub const TIMESTAMP: Range<usize> = 8..16;
pub const PROCESS_ID: Range<usize> = 16..20;
pub const COUNTER: Range<usize> = 20..24;
pub const PUBLIC_IP: Range<usize> = 24..28;
pub const MAC: Range<usize> = 28..32;

/// Inputs of one identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fields {
    pub fingerprint: [u8; 8],
    pub timestamp_ms: i64,
    pub process_id: u32,
    pub counter: u32,
    pub public_ip: [u8; 4],
    pub mac: [u8; 4],
}

/// Lays the fields out in buffer order.
pub fn pack(fields: &Fields) -> [u8; BUFFER_LEN] {
    let mut buf = [0u8; BUFFER_LEN];
    buf[FINGERPRINT].copy_from_slice(&fields.fingerprint);
    buf[TIMESTAMP].copy_from_slice(&fields.timestamp_ms.to_le_bytes());
    buf[PROCESS_ID].copy_from_slice(&fields.process_id.to_le_bytes());
    buf[COUNTER].copy_from_slice(&fields.counter.to_le_bytes());
    buf[PUBLIC_IP].copy_from_slice(&fields.public_ip);
    buf[MAC].copy_from_slice(&fields.mac);
    buf
}

/// Reads the fields back out of a buffer.
pub fn unpack(buf: &[u8; BUFFER_LEN]) -> Fields {
    let mut fields = Fields::default();
    fields.fingerprint.copy_from_slice(&buf[FINGERPRINT]);
    fields.public_ip.copy_from_slice(&buf[PUBLIC_IP]);
    fields.mac.copy_from_slice(&buf[MAC]);

    let mut ts = [0u8; 8];
    ts.copy_from_slice(&buf[TIMESTAMP]);
    fields.timestamp_ms = i64::from_le_bytes(ts);

    let mut word = [0u8; 4];
    word.copy_from_slice(&buf[PROCESS_ID]);
    fields.process_id = u32::from_le_bytes(word);
    word.copy_from_slice(&buf[COUNTER]);
    fields.counter = u32::from_le_bytes(word);

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Fields {
        Fields {
            fingerprint: *b"0f3c91aa",
            timestamp_ms: 0x0000_0192_3456_789A,
            process_id: 0x0000_1F40,
            counter: 7,
            public_ip: [203, 0, 113, 7],
            mac: [0; 4],
        }
    }

    #[test]
    fn fields_land_at_fixed_offsets() {
        let buf = pack(&sample());
        assert_eq!(&buf[0..8], b"0f3c91aa");
        assert_eq!(&buf[8..16], &[0x9A, 0x78, 0x56, 0x34, 0x92, 0x01, 0x00, 0x00]);
        assert_eq!(&buf[16..20], &[0x40, 0x1F, 0x00, 0x00]);
        assert_eq!(&buf[20..24], &[7, 0, 0, 0]);
        assert_eq!(&buf[24..28], &[203, 0, 113, 7]);
        assert_eq!(&buf[28..32], &[0, 0, 0, 0]);
    }

    #[test]
    fn default_fields_pack_to_zeros() {
        assert_eq!(pack(&Fields::default()), [0u8; BUFFER_LEN]);
    }

    #[test]
    fn unpack_recovers_fields() {
        let f = sample();
        assert_eq!(unpack(&pack(&f)), f);
    }

    #[test]
    fn ranges_tile_the_buffer() {
        let ranges = [FINGERPRINT, TIMESTAMP, PROCESS_ID, COUNTER, PUBLIC_IP, MAC];
        let mut next = 0;
        for r in ranges {
            assert_eq!(r.start, next);
            next = r.end;
        }
        assert_eq!(next, BUFFER_LEN);
    }
}
