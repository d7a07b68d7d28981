//! The PointId value type.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::buffer::{self, BUFFER_LEN, Fields};
use crate::format::format_buffer;

/// A generated identifier: the packed 32-byte buffer.
///
/// `Display` renders the dashed hex form; the full buffer, including the
/// fields the text does not show, stays available through [`as_bytes`].
///
/// [`as_bytes`]: PointId::as_bytes
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointId([u8; BUFFER_LEN]);

impl PointId {
    pub fn from_fields(fields: &Fields) -> Self {
        Self(buffer::pack(fields))
    }

    pub fn from_bytes(bytes: [u8; BUFFER_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; BUFFER_LEN] {
        &self.0
    }

    pub fn fields(&self) -> Fields {
        buffer::unpack(&self.0)
    }

    pub fn fingerprint(&self) -> [u8; 8] {
        self.fields().fingerprint
    }

    /// Milliseconds since the Unix epoch at generation time.
    pub fn timestamp_ms(&self) -> i64 {
        self.fields().timestamp_ms
    }

    /// Generation time, if the timestamp is representable.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp_ms())
    }

    pub fn process_id(&self) -> u32 {
        self.fields().process_id
    }

    pub fn counter(&self) -> u32 {
        self.fields().counter
    }

    pub fn public_ip(&self) -> [u8; 4] {
        self.fields().public_ip
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_buffer(&self.0))
    }
}

impl fmt::Debug for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PointId").field(&self.to_string()).finish()
    }
}

impl From<PointId> for String {
    fn from(id: PointId) -> Self {
        id.to_string()
    }
}
