use crate::{ParseError, WireGuid};

/// A cursor over a byte slice with the handful of primitive reads the
/// object schemas need. Every read is bounds-checked; there is no
/// panicking path.
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn read_u8(&mut self) -> Result<u8, ParseError> {
        let b = *self.buf.get(self.pos).ok_or(ParseError::UnexpectedEof)?;
        self.pos += 1;
        Ok(b)
    }

    pub fn read_u16(&mut self) -> Result<u16, ParseError> {
        let hi = self.read_u8()?;
        let lo = self.read_u8()?;
        Ok(u16::from_be_bytes([hi, lo]))
    }

    pub fn read_exact(&mut self, len: usize) -> Result<&'a [u8], ParseError> {
        let end = self.pos.checked_add(len).ok_or(ParseError::LengthMismatch)?;
        if end > self.buf.len() {
            return Err(ParseError::LengthMismatch);
        }
        let out = &self.buf[self.pos..end];
        self.pos = end;
        Ok(out)
    }

    /// Length-prefixed (u16 BE) blob.
    pub fn read_tlv(&mut self) -> Result<&'a [u8], ParseError> {
        let len = self.read_u16()? as usize;
        self.read_exact(len)
    }

    pub fn read_guid(&mut self) -> Result<WireGuid, ParseError> {
        let algo = self.read_u8()?;
        let address = self.read_tlv()?.to_vec();
        Ok(WireGuid::new(algo, address))
    }

    /// Length-prefixed (u16 BE count) list of GUIDs.
    pub fn read_guid_list(&mut self) -> Result<Vec<WireGuid>, ParseError> {
        let count = self.read_u16()? as usize;
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            out.push(self.read_guid()?);
        }
        Ok(out)
    }

    pub fn read_optional_guid(&mut self) -> Result<Option<WireGuid>, ParseError> {
        match self.read_u8()? {
            0 => Ok(None),
            1 => Ok(Some(self.read_guid()?)),
            _ => Err(ParseError::LengthMismatch),
        }
    }

    pub fn expect_kind(&mut self, expected: u8) -> Result<(), ParseError> {
        let found = self.read_u8()?;
        if found != expected {
            return Err(ParseError::WrongKind { expected, found });
        }
        Ok(())
    }

    pub fn expect_empty(&self) -> Result<(), ParseError> {
        if self.pos != self.buf.len() {
            return Err(ParseError::TrailingData);
        }
        Ok(())
    }
}
