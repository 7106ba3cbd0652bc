//! # Operation Catalog
//!
//! The closed set of operations this crate can build and recognize.
//!
//! Each `CatalogEntry` pairs an operation name with its ordered argument slots
//! and its identity in both wire dialects. The table itself is generated from
//! the rows in `call.rs`; this module only describes and indexes it.
//!
//! ## Invariants
//! - **Slot Order**: Type parameter slots precede value parameter slots.
//! - **Unique Names**: No two entries share a name.
//! - **Unique Identities**: No two entries share a script code, or a `(module, function)` pair.
//! - **Frozen**: The process-wide catalog is built once and never mutated.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use tracing::debug;

use crate::call::ENTRIES;
use crate::error::CatalogError;
use crate::registry::DecodeFn;

/// The semantic type of an argument slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticType {
    Bool,
    U64,
    Address,
    ByteSequence,
    TypeDescriptor,
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticType::Bool => write!(f, "bool"),
            SemanticType::U64 => write!(f, "u64"),
            SemanticType::Address => write!(f, "address"),
            SemanticType::ByteSequence => write!(f, "byte sequence"),
            SemanticType::TypeDescriptor => write!(f, "type descriptor"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    TypeParameter,
    Value(SemanticType),
}

/// One declared argument of an operation. Its position is its index in `CatalogEntry::slots`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub name: &'static str,
    pub role: Role,
}

impl Slot {
    pub const fn type_param(name: &'static str) -> Self {
        Self { name, role: Role::TypeParameter }
    }

    pub const fn value(name: &'static str, ty: SemanticType) -> Self {
        Self { name, role: Role::Value(ty) }
    }

    pub fn semantic_type(&self) -> SemanticType {
        match self.role {
            Role::TypeParameter => SemanticType::TypeDescriptor,
            Role::Value(ty) => ty,
        }
    }
}

/// The two wire forms an operation can travel in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Constant program bytes plus self-tagged arguments.
    Script,
    /// Named module function plus untagged byte-string arguments.
    ScriptFunction,
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Script => write!(f, "script"),
            Dialect::ScriptFunction => write!(f, "script function"),
        }
    }
}

/// The binary identity a payload is recognized by.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identity {
    Script(Vec<u8>),
    Function { module: String, function: String },
}

impl Identity {
    pub fn dialect(&self) -> Dialect {
        match self {
            Identity::Script(_) => Dialect::Script,
            Identity::Function { .. } => Dialect::ScriptFunction,
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identity::Script(code) => {
                let head = &code[..code.len().min(8)];
                write!(f, "script 0x{}", hex::encode(head))?;
                if code.len() > head.len() {
                    write!(f, "..")?;
                }
                write!(f, " ({} bytes)", code.len())
            }
            Identity::Function { module, function } => write!(f, "{}::{}", module, function),
        }
    }
}

/// A single known operation.
#[derive(Clone, Copy)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub slots: &'static [Slot],
    /// Legacy dialect identity.
    pub script_code: &'static [u8],
    /// Invocation dialect identity, together with `function`.
    pub module: &'static str,
    pub function: &'static str,
    pub(crate) decode: DecodeFn,
}

impl CatalogEntry {
    /// Type parameter slots, in declared order.
    pub fn type_params(&self) -> impl Iterator<Item = &'static Slot> {
        self.slots.iter().filter(|s| s.role == Role::TypeParameter)
    }

    /// Value parameter slots, in declared order.
    pub fn value_params(&self) -> impl Iterator<Item = &'static Slot> {
        self.slots.iter().filter(|s| s.role != Role::TypeParameter)
    }

    pub fn type_arity(&self) -> usize {
        self.type_params().count()
    }

    pub fn value_arity(&self) -> usize {
        self.value_params().count()
    }

    pub fn identity(&self, dialect: Dialect) -> Identity {
        match dialect {
            Dialect::Script => Identity::Script(self.script_code.to_vec()),
            Dialect::ScriptFunction => Identity::Function {
                module: self.module.to_string(),
                function: self.function.to_string(),
            },
        }
    }
}

impl fmt::Debug for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogEntry")
            .field("name", &self.name)
            .field("slots", &self.slots)
            .field("script_code", &format_args!("{}", Identity::Script(self.script_code.to_vec())))
            .field("module", &self.module)
            .field("function", &self.function)
            .finish_non_exhaustive()
    }
}

/// A validated, name-indexed view of an operation table.
#[derive(Debug)]
pub struct Catalog {
    entries: &'static [CatalogEntry],
    by_name: HashMap<&'static str, &'static CatalogEntry>,
}

impl Catalog {
    /// Validates and indexes `entries`.
    ///
    /// # Errors
    /// Returns `CatalogError` for a type slot after a value slot, a duplicate
    /// name, or an identity shared by two entries within one dialect.
    pub fn new(entries: &'static [CatalogEntry]) -> Result<Self, CatalogError> {
        let mut by_name = HashMap::with_capacity(entries.len());
        let mut by_code: HashMap<&'static [u8], &'static CatalogEntry> = HashMap::new();
        let mut by_function: HashMap<(&'static str, &'static str), &'static CatalogEntry> =
            HashMap::new();

        for entry in entries {
            let mut seen_value = false;
            for slot in entry.slots {
                match slot.role {
                    Role::Value(_) => seen_value = true,
                    Role::TypeParameter if seen_value => {
                        return Err(CatalogError::SlotOrder { name: entry.name, slot: slot.name });
                    }
                    Role::TypeParameter => {}
                }
            }

            if by_name.insert(entry.name, entry).is_some() {
                return Err(CatalogError::DuplicateName(entry.name));
            }
            if let Some(first) = by_code.insert(entry.script_code, entry) {
                return Err(duplicate_identity(Dialect::Script, first, entry));
            }
            if let Some(first) = by_function.insert((entry.module, entry.function), entry) {
                return Err(duplicate_identity(Dialect::ScriptFunction, first, entry));
            }
        }

        Ok(Self { entries, by_name })
    }

    /// The process-wide catalog of every operation in `Call`.
    ///
    /// # Panics
    /// Panics on first use if the operation table is corrupt.
    pub fn global() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| {
            let catalog = Catalog::new(ENTRIES)
                .unwrap_or_else(|e| panic!("corrupt operation catalog: {}", e));
            debug!(entries = catalog.len(), "operation catalog loaded");
            catalog
        })
    }

    pub fn get(&self, name: &str) -> Option<&'static CatalogEntry> {
        self.by_name.get(name).copied()
    }

    pub fn entries(&self) -> &'static [CatalogEntry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn duplicate_identity(dialect: Dialect, first: &CatalogEntry, second: &CatalogEntry) -> CatalogError {
    CatalogError::DuplicateIdentity {
        dialect,
        identity: second.identity(dialect),
        first: first.name,
        second: second.name,
    }
}
