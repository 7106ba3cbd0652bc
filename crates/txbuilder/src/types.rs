//! # Wire Value Types
//!
//! The values an operation is parameterized over: account addresses, type
//! descriptors, and the self-tagged arguments carried by legacy scripts.
//!
//! Type descriptors are opaque to the codec. They are carried verbatim from a
//! call into its payload and back, and only ever inspected to frame them.

use std::fmt;

use crate::catalog::SemanticType;
use crate::error::Error;
use crate::error::Result;

/// A fixed-width account address.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountAddress([u8; AccountAddress::LENGTH]);

impl AccountAddress {
    pub const LENGTH: usize = txpack::ADDRESS_LEN;

    pub const ZERO: Self = Self([0; Self::LENGTH]);

    pub const fn new(bytes: [u8; Self::LENGTH]) -> Self {
        Self(bytes)
    }

    /// Builds an address from a slice that must be exactly `LENGTH` bytes.
    pub fn from_bytes(bytes: impl AsRef<[u8]>) -> Result<Self> {
        let bytes = bytes.as_ref();
        let array: [u8; Self::LENGTH] = bytes.try_into().map_err(|_| {
            Error::InvalidAddress(format!("expected {} bytes, found {}", Self::LENGTH, bytes.len()))
        })?;
        Ok(Self(array))
    }

    /// Parses `0x`-prefixed hex. Short forms such as `0x1` are left-padded with zeros.
    pub fn from_hex_literal(literal: &str) -> Result<Self> {
        let digits = literal
            .strip_prefix("0x")
            .ok_or_else(|| Error::InvalidAddress(format!("`{}` is missing the 0x prefix", literal)))?;
        if digits.is_empty() || digits.len() > Self::LENGTH * 2 {
            return Err(Error::InvalidAddress(format!("`{}` has {} hex digits", literal, digits.len())));
        }

        let padded = format!("{:0>width$}", digits, width = Self::LENGTH * 2);
        let bytes = hex::decode(&padded)
            .map_err(|e| Error::InvalidAddress(format!("`{}`: {}", literal, e)))?;
        Self::from_bytes(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; Self::LENGTH] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Hex without leading zeros, as addresses are written in Move source: `0x1`.
    pub fn to_short_hex(&self) -> String {
        let full = hex::encode(self.0);
        match full.trim_start_matches('0') {
            "" => "0x0".to_string(),
            digits => format!("0x{}", digits),
        }
    }
}

impl From<[u8; AccountAddress::LENGTH]> for AccountAddress {
    fn from(bytes: [u8; AccountAddress::LENGTH]) -> Self {
        Self(bytes)
    }
}

impl fmt::LowerHex for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self)
    }
}

impl fmt::Debug for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Address that publishes the core modules and currencies.
pub const CORE_CODE_ADDRESS: AccountAddress = AccountAddress::new([
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1,
]);

/// A type descriptor bound to a type parameter slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Bool,
    U8,
    U64,
    U128,
    Address,
    Signer,
    Vector(Box<TypeTag>),
    Struct(Box<StructTag>),
}

impl TypeTag {
    /// The struct tag of a currency published at the core address, e.g. `0x1::XUS::XUS`.
    pub fn currency(code: &str) -> Self {
        TypeTag::Struct(Box::new(StructTag::new(CORE_CODE_ADDRESS, code, code)))
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Bool => write!(f, "bool"),
            TypeTag::U8 => write!(f, "u8"),
            TypeTag::U64 => write!(f, "u64"),
            TypeTag::U128 => write!(f, "u128"),
            TypeTag::Address => write!(f, "address"),
            TypeTag::Signer => write!(f, "signer"),
            TypeTag::Vector(inner) => write!(f, "vector<{}>", inner),
            TypeTag::Struct(tag) => write!(f, "{}", tag),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StructTag {
    pub address: AccountAddress,
    pub module: String,
    pub name: String,
    pub type_params: Vec<TypeTag>,
}

impl StructTag {
    pub fn new(address: AccountAddress, module: &str, name: &str) -> Self {
        Self {
            address,
            module: module.to_string(),
            name: name.to_string(),
            type_params: Vec::new(),
        }
    }
}

impl fmt::Display for StructTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}::{}", self.address.to_short_hex(), self.module, self.name)?;
        if let Some((first, rest)) = self.type_params.split_first() {
            write!(f, "<{}", first)?;
            for param in rest {
                write!(f, ", {}", param)?;
            }
            write!(f, ">")?;
        }
        Ok(())
    }
}

/// A self-tagged value argument of a legacy script.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TransactionArgument {
    Bool(bool),
    U64(u64),
    Address(AccountAddress),
    U8Vector(Vec<u8>),
}

impl TransactionArgument {
    /// The semantic type announced by this argument's tag.
    pub fn semantic_type(&self) -> SemanticType {
        match self {
            TransactionArgument::Bool(_) => SemanticType::Bool,
            TransactionArgument::U64(_) => SemanticType::U64,
            TransactionArgument::Address(_) => SemanticType::Address,
            TransactionArgument::U8Vector(_) => SemanticType::ByteSequence,
        }
    }
}
