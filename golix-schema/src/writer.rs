use crate::{ParseError, WireGuid};

/// An append-only byte buffer with the mirror-image writes of
/// [`crate::Reader`]. Every write here is infallible except the
/// length-prefixed ones — there is no panicking path, matching
/// [`crate::Reader`]'s own all-bounds-checked contract.
#[derive(Default)]
pub struct Writer {
    out: Vec<u8>,
}

impl Writer {
    pub fn new() -> Self {
        Self { out: Vec::new() }
    }

    pub fn push_u8(&mut self, b: u8) {
        self.out.push(b);
    }

    pub fn push_u16(&mut self, v: u16) {
        self.out.extend_from_slice(&v.to_be_bytes());
    }

    pub fn push_bytes(&mut self, b: &[u8]) {
        self.out.extend_from_slice(b);
    }

    /// Length-prefixed (u16 BE) blob. Fails rather than truncating or
    /// panicking if `b` exceeds `u16::MAX` bytes — callers (a GEOC
    /// payload, in particular) can carry ordinary content well past
    /// that size.
    pub fn push_tlv(&mut self, b: &[u8]) -> Result<(), ParseError> {
        let len = u16::try_from(b.len()).map_err(|_| ParseError::FieldTooLong)?;
        self.push_u16(len);
        self.push_bytes(b);
        Ok(())
    }

    pub fn push_guid(&mut self, guid: &WireGuid) -> Result<(), ParseError> {
        self.push_u8(guid.algo);
        self.push_tlv(&guid.address)
    }

    pub fn push_guid_list(&mut self, guids: &[WireGuid]) -> Result<(), ParseError> {
        let count = u16::try_from(guids.len()).map_err(|_| ParseError::FieldTooLong)?;
        self.push_u16(count);
        for g in guids {
            self.push_guid(g)?;
        }
        Ok(())
    }

    pub fn push_optional_guid(&mut self, guid: Option<&WireGuid>) -> Result<(), ParseError> {
        match guid {
            None => {
                self.push_u8(0);
                Ok(())
            }
            Some(g) => {
                self.push_u8(1);
                self.push_guid(g)
            }
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.out
    }
}
