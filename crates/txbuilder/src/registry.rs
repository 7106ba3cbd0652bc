//! # Decoder Registry
//!
//! Recognizes an inbound payload by its identity and recovers the `Call`.
//!
//! ## Algorithm
//! 1. Look the identity up in the per-dialect index; unknown → `UnknownOperation`.
//! 2. Compare type and value argument counts with the entry; mismatch → `ArityMismatch`.
//!    No argument is decoded before both counts agree.
//! 3. Run the entry's decode function, which pulls type arguments verbatim and
//!    decodes each value argument in slot order. The first bad value →
//!    `ArgumentTypeMismatch` naming its position.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;
use tracing::trace;

use crate::call::Call;
use crate::catalog::Catalog;
use crate::catalog::CatalogEntry;
use crate::catalog::Dialect;
use crate::catalog::Identity;
use crate::error::ArgKind;
use crate::error::Error;
use crate::error::Result;
use crate::payload::Script;
use crate::payload::ScriptFunction;
use crate::payload::TransactionPayload;
use crate::primitive::Primitive;
use crate::types::TransactionArgument;
use crate::types::TypeTag;

/// Builds a `Call` from arguments whose counts have already been checked.
pub(crate) type DecodeFn = fn(&mut Arguments<'_>) -> Result<Call>;

enum Values<'a> {
    Tagged(&'a [TransactionArgument]),
    Raw(&'a [Vec<u8>]),
}

impl Values<'_> {
    fn len(&self) -> usize {
        match self {
            Values::Tagged(args) => args.len(),
            Values::Raw(args) => args.len(),
        }
    }
}

/// Positional cursor over a payload's type and value arguments.
pub(crate) struct Arguments<'a> {
    ty_args: &'a [TypeTag],
    values: Values<'a>,
    next_ty: usize,
    next_value: usize,
}

impl<'a> Arguments<'a> {
    fn new(ty_args: &'a [TypeTag], values: Values<'a>) -> Self {
        Self { ty_args, values, next_ty: 0, next_value: 0 }
    }

    pub(crate) fn type_arg(&mut self) -> Result<TypeTag> {
        let position = self.next_ty;
        let tag = self.ty_args.get(position).ok_or(Error::ArityMismatch {
            kind: ArgKind::Type,
            expected: position + 1,
            actual: self.ty_args.len(),
        })?;
        self.next_ty += 1;
        Ok(tag.clone())
    }

    pub(crate) fn value<T: Primitive>(&mut self) -> Result<T> {
        let position = self.next_value;
        let decoded = match &self.values {
            Values::Tagged(args) => args.get(position).map(T::from_argument),
            Values::Raw(args) => args.get(position).map(|raw| T::from_raw(raw)),
        };
        self.next_value += 1;
        match decoded {
            Some(Some(value)) => Ok(value),
            Some(None) => Err(Error::ArgumentTypeMismatch { position, expected: T::SEMANTIC }),
            None => Err(Error::ArityMismatch {
                kind: ArgKind::Value,
                expected: position + 1,
                actual: self.values.len(),
            }),
        }
    }
}

/// Identity-indexed decoders for both dialects.
#[derive(Debug)]
pub struct DecoderRegistry {
    scripts: HashMap<&'static [u8], &'static CatalogEntry>,
    functions: HashMap<&'static str, HashMap<&'static str, &'static CatalogEntry>>,
}

impl DecoderRegistry {
    /// Indexes every entry of `catalog` by its identity in each dialect.
    ///
    /// `Catalog::new` has already rejected shared identities, so every key is unique.
    pub fn new(catalog: &Catalog) -> Self {
        let mut scripts: HashMap<&'static [u8], &'static CatalogEntry> = HashMap::new();
        let mut functions: HashMap<&'static str, HashMap<&'static str, &'static CatalogEntry>> =
            HashMap::new();

        for entry in catalog.entries() {
            scripts.insert(entry.script_code, entry);
            functions.entry(entry.module).or_default().insert(entry.function, entry);
        }

        Self { scripts, functions }
    }

    /// The registry over `Catalog::global()`.
    ///
    /// # Panics
    /// Panics on first use if the operation table is corrupt.
    pub fn global() -> &'static DecoderRegistry {
        static REGISTRY: OnceLock<DecoderRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            let registry = DecoderRegistry::new(Catalog::global());
            debug!(
                scripts = registry.scripts.len(),
                modules = registry.functions.len(),
                "decoder registry built"
            );
            registry
        })
    }

    pub fn lookup_script(&self, code: &[u8]) -> Option<&'static CatalogEntry> {
        self.scripts.get(code).copied()
    }

    pub fn lookup_function(&self, module: &str, function: &str) -> Option<&'static CatalogEntry> {
        self.functions.get(module).and_then(|m| m.get(function)).copied()
    }

    /// Recovers the call carried by a legacy script.
    pub fn decode_script(&self, script: &Script) -> Result<Call> {
        let result = match self.lookup_script(&script.code) {
            Some(entry) => {
                let args = Arguments::new(&script.ty_args, Values::Tagged(&script.args));
                decode_entry(entry, args)
            }
            None => Err(Error::UnknownOperation(Identity::Script(script.code.clone()))),
        };
        log_outcome(Dialect::Script, result)
    }

    /// Recovers the call carried by a script function.
    pub fn decode_function(&self, function: &ScriptFunction) -> Result<Call> {
        let result = match self.lookup_function(&function.module, &function.function) {
            Some(entry) => {
                let args = Arguments::new(&function.ty_args, Values::Raw(&function.args));
                decode_entry(entry, args)
            }
            None => Err(Error::UnknownOperation(Identity::Function {
                module: function.module.clone(),
                function: function.function.clone(),
            })),
        };
        log_outcome(Dialect::ScriptFunction, result)
    }

    /// Recovers the call from either dialect, chosen by the payload's shape.
    pub fn decode_payload(&self, payload: &TransactionPayload) -> Result<Call> {
        match payload {
            TransactionPayload::Script(script) => self.decode_script(script),
            TransactionPayload::ScriptFunction(function) => self.decode_function(function),
        }
    }
}

fn decode_entry(entry: &CatalogEntry, mut args: Arguments<'_>) -> Result<Call> {
    check_arity(ArgKind::Type, entry.type_arity(), args.ty_args.len())?;
    check_arity(ArgKind::Value, entry.value_arity(), args.values.len())?;
    (entry.decode)(&mut args)
}

fn check_arity(kind: ArgKind, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(Error::ArityMismatch { kind, expected, actual });
    }
    Ok(())
}

fn log_outcome(dialect: Dialect, result: Result<Call>) -> Result<Call> {
    match &result {
        Ok(call) => trace!(%dialect, operation = call.name(), "decoded payload"),
        Err(e) => debug!(%dialect, error = %e, "rejected payload"),
    }
    result
}
