//! # Primitive Argument Codec
//!
//! Converts semantic values to and from their wire form in both dialects.
//!
//! ## Wire Forms
//!
//! | Type             | Script (tagged)                  | Script function (untagged)            |
//! |------------------|----------------------------------|---------------------------------------|
//! | `bool`           | `TransactionArgument::Bool`      | one byte, `0x00` or `0x01`            |
//! | `u64`            | `TransactionArgument::U64`       | 8 bytes, little-endian                |
//! | `AccountAddress` | `TransactionArgument::Address`   | `AccountAddress::LENGTH` raw bytes    |
//! | `Vec<u8>`        | `TransactionArgument::U8Vector`  | ULEB128 length, then the bytes        |
//!
//! Untagged decoders must consume the whole byte string; trailing bytes are a mismatch.

use crate::catalog::SemanticType;
use crate::types::AccountAddress;
use crate::types::TransactionArgument;

/// A value that can fill a value parameter slot.
pub trait Primitive: Sized {
    /// The slot type this value fills.
    const SEMANTIC: SemanticType;

    fn into_argument(self) -> TransactionArgument;

    /// Returns `None` if the argument's tag is not `SEMANTIC`.
    fn from_argument(arg: &TransactionArgument) -> Option<Self>;

    fn to_raw(&self) -> Vec<u8>;

    /// Returns `None` unless `bytes` holds exactly one encoded value.
    fn from_raw(bytes: &[u8]) -> Option<Self>;
}

impl Primitive for bool {
    const SEMANTIC: SemanticType = SemanticType::Bool;

    fn into_argument(self) -> TransactionArgument {
        TransactionArgument::Bool(self)
    }

    fn from_argument(arg: &TransactionArgument) -> Option<Self> {
        match arg {
            TransactionArgument::Bool(v) => Some(*v),
            _ => None,
        }
    }

    fn to_raw(&self) -> Vec<u8> {
        vec![u8::from(*self)]
    }

    fn from_raw(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [0] => Some(false),
            [1] => Some(true),
            _ => None,
        }
    }
}

impl Primitive for u64 {
    const SEMANTIC: SemanticType = SemanticType::U64;

    fn into_argument(self) -> TransactionArgument {
        TransactionArgument::U64(self)
    }

    fn from_argument(arg: &TransactionArgument) -> Option<Self> {
        match arg {
            TransactionArgument::U64(v) => Some(*v),
            _ => None,
        }
    }

    fn to_raw(&self) -> Vec<u8> {
        self.to_le_bytes().to_vec()
    }

    fn from_raw(bytes: &[u8]) -> Option<Self> {
        bytes.try_into().ok().map(u64::from_le_bytes)
    }
}

impl Primitive for AccountAddress {
    const SEMANTIC: SemanticType = SemanticType::Address;

    fn into_argument(self) -> TransactionArgument {
        TransactionArgument::Address(self)
    }

    fn from_argument(arg: &TransactionArgument) -> Option<Self> {
        match arg {
            TransactionArgument::Address(v) => Some(*v),
            _ => None,
        }
    }

    fn to_raw(&self) -> Vec<u8> {
        self.to_vec()
    }

    fn from_raw(bytes: &[u8]) -> Option<Self> {
        AccountAddress::from_bytes(bytes).ok()
    }
}

impl Primitive for Vec<u8> {
    const SEMANTIC: SemanticType = SemanticType::ByteSequence;

    fn into_argument(self) -> TransactionArgument {
        TransactionArgument::U8Vector(self)
    }

    fn from_argument(arg: &TransactionArgument) -> Option<Self> {
        match arg {
            TransactionArgument::U8Vector(v) => Some(v.clone()),
            _ => None,
        }
    }

    fn to_raw(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len() + 5);
        write_uleb128(&mut out, self.len() as u64);
        out.extend_from_slice(self);
        out
    }

    fn from_raw(bytes: &[u8]) -> Option<Self> {
        let (len, prefix) = read_uleb128(bytes)?;
        let body = &bytes[prefix..];
        (body.len() == len as usize).then(|| body.to_vec())
    }
}

impl TransactionArgument {
    /// The untagged form of this argument, as carried by a script function.
    pub fn to_raw(&self) -> Vec<u8> {
        match self {
            TransactionArgument::Bool(v) => v.to_raw(),
            TransactionArgument::U64(v) => v.to_raw(),
            TransactionArgument::Address(v) => v.to_raw(),
            TransactionArgument::U8Vector(v) => v.to_raw(),
        }
    }
}

fn write_uleb128(out: &mut Vec<u8>, mut value: u64) {
    while value >= 0x80 {
        out.push((value as u8 & 0x7f) | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
}

/// Reads a canonical ULEB128 length no larger than `u32::MAX`.
///
/// Returns the value and the number of prefix bytes consumed.
fn read_uleb128(bytes: &[u8]) -> Option<(u32, usize)> {
    let mut value: u64 = 0;
    for (i, &byte) in bytes.iter().take(5).enumerate() {
        value |= u64::from(byte & 0x7f) << (7 * i);
        if byte & 0x80 == 0 {
            // A zero continuation byte means the encoding was not minimal.
            if i > 0 && byte == 0 {
                return None;
            }
            return u32::try_from(value).ok().map(|v| (v, i + 1));
        }
    }
    None
}
