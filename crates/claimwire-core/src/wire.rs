//! Protobuf wire framing.
//!
//! The envelope and the signature splitter work on field frames rather than
//! on schema types, so they behave the same across schema generations. Every
//! read is bounds-checked: running off the end of the buffer is
//! [`ClaimError::TruncatedInput`], framing that no encoder could produce is
//! [`ClaimError::MalformedEnvelope`]. Offsets are absolute within the buffer
//! handed to the reader.

use prost::encoding::encode_varint;

use crate::error::ClaimError;

/// Longest legal encoding of a 64-bit varint.
pub const MAX_VARINT_LEN: usize = 10;

/// Largest field number protobuf allows.
const MAX_FIELD_NUMBER: u64 = (1 << 29) - 1;

/// Wire types a claim may contain. Groups are not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireType {
    Varint,
    Fixed64,
    LengthDelimited,
    Fixed32,
}

impl WireType {
    fn from_bits(bits: u64) -> Option<Self> {
        match bits {
            0 => Some(WireType::Varint),
            1 => Some(WireType::Fixed64),
            2 => Some(WireType::LengthDelimited),
            5 => Some(WireType::Fixed32),
            _ => None,
        }
    }

    pub const fn bits(self) -> u64 {
        match self {
            WireType::Varint => 0,
            WireType::Fixed64 => 1,
            WireType::LengthDelimited => 2,
            WireType::Fixed32 => 5,
        }
    }
}

/// Value carried by a field frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Varint(u64),
    /// Body of a length-delimited field, without its length prefix.
    Bytes(&'a [u8]),
    Fixed(&'a [u8]),
}

/// One field frame: key, optional length prefix, body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a> {
    pub number: u32,
    pub wire_type: WireType,
    /// Offset of the field key.
    pub start: usize,
    /// Offset one past the last byte of the field.
    pub end: usize,
    pub value: FieldValue<'a>,
}

impl<'a> Field<'a> {
    pub fn as_varint(&self) -> Option<u64> {
        match self.value {
            FieldValue::Varint(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&'a [u8]> {
        match self.value {
            FieldValue::Bytes(b) => Some(b),
            _ => None,
        }
    }
}

/// Read a minimally-encoded varint at `pos`.
///
/// Returns the value and the number of bytes it occupied.
pub fn read_varint(buf: &[u8], pos: usize) -> Result<(u64, usize), ClaimError> {
    let mut value = 0u64;
    for i in 0..MAX_VARINT_LEN {
        let offset = pos + i;
        let Some(&byte) = buf.get(offset) else {
            return Err(ClaimError::TruncatedInput { offset, needed: 1 });
        };
        if i == MAX_VARINT_LEN - 1 && byte > 0x01 {
            return Err(ClaimError::MalformedEnvelope {
                offset: pos,
                reason: "varint overflows 64 bits",
            });
        }
        value |= u64::from(byte & 0x7f) << (7 * i);
        if byte & 0x80 == 0 {
            if i > 0 && byte == 0 {
                return Err(ClaimError::MalformedEnvelope {
                    offset: pos,
                    reason: "non-minimal varint",
                });
            }
            return Ok((value, i + 1));
        }
    }
    Err(ClaimError::MalformedEnvelope {
        offset: pos,
        reason: "varint longer than 10 bytes",
    })
}

/// Check that `len` bytes are available at `from`; returns the end offset.
fn take(buf: &[u8], from: usize, len: usize) -> Result<usize, ClaimError> {
    let available = buf.len().saturating_sub(from);
    if len > available {
        return Err(ClaimError::TruncatedInput {
            offset: buf.len(),
            needed: len - available,
        });
    }
    Ok(from + len)
}

/// Iterator over the top-level field frames of a buffer.
///
/// Stops after the first error.
pub struct FieldReader<'a> {
    buf: &'a [u8],
    pos: usize,
    failed: bool,
}

impl<'a> FieldReader<'a> {
    /// Walk `buf` starting at offset `start`.
    pub fn new(buf: &'a [u8], start: usize) -> Self {
        Self {
            buf,
            pos: start,
            failed: false,
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    fn read_field(&self) -> Result<Field<'a>, ClaimError> {
        let buf = self.buf;
        let start = self.pos;
        let (key, key_len) = read_varint(buf, start)?;

        let number = key >> 3;
        if number == 0 || number > MAX_FIELD_NUMBER {
            return Err(ClaimError::MalformedEnvelope {
                offset: start,
                reason: "invalid field number",
            });
        }
        let wire_type = WireType::from_bits(key & 0x07).ok_or(ClaimError::MalformedEnvelope {
            offset: start,
            reason: "unsupported wire type",
        })?;

        let body = start + key_len;
        let (value, end) = match wire_type {
            WireType::Varint => {
                let (v, n) = read_varint(buf, body)?;
                (FieldValue::Varint(v), body + n)
            }
            WireType::Fixed64 => {
                let end = take(buf, body, 8)?;
                (FieldValue::Fixed(&buf[body..end]), end)
            }
            WireType::Fixed32 => {
                let end = take(buf, body, 4)?;
                (FieldValue::Fixed(&buf[body..end]), end)
            }
            WireType::LengthDelimited => {
                let (len, n) = read_varint(buf, body)?;
                let data = body + n;
                let len = usize::try_from(len).map_err(|_| ClaimError::MalformedEnvelope {
                    offset: body,
                    reason: "length prefix exceeds address space",
                })?;
                let end = take(buf, data, len)?;
                (FieldValue::Bytes(&buf[data..end]), end)
            }
        };

        Ok(Field {
            // bounded by MAX_FIELD_NUMBER above
            number: number as u32,
            wire_type,
            start,
            end,
            value,
        })
    }
}

impl<'a> Iterator for FieldReader<'a> {
    type Item = Result<Field<'a>, ClaimError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.buf.len() {
            return None;
        }
        let result = self.read_field();
        match &result {
            Ok(field) => self.pos = field.end,
            Err(_) => self.failed = true,
        }
        Some(result)
    }
}

/// Walk every top-level frame from `start`, failing on the first bad one.
pub fn read_fields(buf: &[u8], start: usize) -> Result<Vec<Field<'_>>, ClaimError> {
    FieldReader::new(buf, start).collect()
}

// ============================================================================
// Writing
// ============================================================================

pub fn write_key(number: u32, wire_type: WireType, out: &mut Vec<u8>) {
    encode_varint((u64::from(number) << 3) | wire_type.bits(), out);
}

pub fn write_varint_field(number: u32, value: u64, out: &mut Vec<u8>) {
    write_key(number, WireType::Varint, out);
    encode_varint(value, out);
}

pub fn write_bytes_field(number: u32, bytes: &[u8], out: &mut Vec<u8>) {
    write_key(number, WireType::LengthDelimited, out);
    encode_varint(bytes.len() as u64, out);
    out.extend_from_slice(bytes);
}
