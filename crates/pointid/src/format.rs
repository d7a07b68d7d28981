//! Display form of the identifier buffer.
//!
//! Five uppercase hex groups rendered from buffer slices `0..4`, `4..8`,
//! `8..12`, `9..13` and `16..22`. The third and fourth groups overlap and
//! bytes `12..16` and `22..32` are never rendered, so the public IP and MAC
//! fields do not show up in the text. Existing identifiers depend on this
//! layout; keep it.

use std::fmt::Write;
use std::ops::Range;

use crate::buffer::BUFFER_LEN;

const GROUPS: [Range<usize>; 5] = [0..4, 4..8, 8..12, 9..13, 16..22];

/// Length of a formatted identifier: 40 hex digits and 4 dashes.
pub const FORMATTED_LEN: usize = 44;

/// Formats a buffer as `XXXXXXXX-XXXXXXXX-XXXXXXXX-XXXXXXXX-XXXXXXXXXXXX`.
pub fn format_buffer(buf: &[u8; BUFFER_LEN]) -> String {
    let mut out = String::with_capacity(FORMATTED_LEN);
    for (i, range) in GROUPS.iter().enumerate() {
        if i > 0 {
            out.push('-');
        }
        for byte in &buf[range.clone()] {
            let _ = write!(out, "{byte:02X}");
        }
    }
    out
}

/// Checks the display form: groups of 8/8/8/8/12 uppercase hex digits.
pub fn is_well_formed(text: &str) -> bool {
    let groups: Vec<&str> = text.split('-').collect();
    groups.len() == GROUPS.len()
        && groups.iter().zip(GROUPS.iter()).all(|(g, r)| {
            g.len() == r.len() * 2
                && g.bytes().all(|c| c.is_ascii_digit() || (b'A'..=b'F').contains(&c))
        })
}
