use bytes::{BufMut, Bytes, BytesMut};

use crate::types::{ComponentSlotId, EntityId, MethodId};

/// An outbound message under construction.
///
/// The call layer writes the routing header, the method id and the argument
/// payload into a Bundle in that order, then hands it to the network layer's
/// send queue. Scalars are little-endian; strings and blobs are
/// length-prefixed with a u32.
#[derive(Debug, Default)]
pub struct Bundle {
    buf: BytesMut,
}

impl Bundle {
    pub fn new() -> Self {
        Self {
            buf: BytesMut::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    pub fn write_entity_id(&mut self, id: EntityId) {
        self.buf.put_i32_le(id);
    }

    pub fn write_method_id(&mut self, id: MethodId) {
        self.buf.put_u16_le(id);
    }

    pub fn write_component_slot_id(&mut self, id: ComponentSlotId) {
        self.buf.put_u16_le(id);
    }

    pub fn write_bool(&mut self, value: bool) {
        self.buf.put_u8(u8::from(value));
    }

    pub fn write_i32(&mut self, value: i32) {
        self.buf.put_i32_le(value);
    }

    pub fn write_u32(&mut self, value: u32) {
        self.buf.put_u32_le(value);
    }

    pub fn write_i64(&mut self, value: i64) {
        self.buf.put_i64_le(value);
    }

    pub fn write_u64(&mut self, value: u64) {
        self.buf.put_u64_le(value);
    }

    pub fn write_f32(&mut self, value: f32) {
        self.buf.put_f32_le(value);
    }

    pub fn write_f64(&mut self, value: f64) {
        self.buf.put_f64_le(value);
    }

    pub fn write_string(&mut self, value: &str) {
        self.buf.put_u32_le(value.len() as u32);
        self.buf.put_slice(value.as_bytes());
    }

    pub fn write_blob(&mut self, value: &[u8]) {
        self.buf.put_u32_le(value.len() as u32);
        self.buf.put_slice(value);
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    pub fn to_bytes(self) -> Bytes {
        self.buf.freeze()
    }
}
