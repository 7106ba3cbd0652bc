//! # txbuilder
//!
//! Typed construction and recognition of transaction payloads.
//!
//! ## Architecture
//!
//! A caller names an operation by building a `Call` and turns it into a wire
//! payload in one of two dialects:
//!
//! - **Script**: a constant compiled program plus self-tagged arguments.
//! - **ScriptFunction**: a `module::function` name plus untagged byte-string arguments.
//!
//! Going the other way, the `DecoderRegistry` recognizes a payload by its
//! identity, checks its arity against the catalog, and decodes each argument
//! back into the matching `Call` variant.
//!
//! ```text
//! Call ──encode──▶ Script | ScriptFunction ──to_bytes──▶ txpack bytes
//!  ▲                         │
//!  └────────decode───────────┘
//! ```
//!
//! The catalog, the `Call` enum and the decoders come from one table in
//! `call.rs`, so they cannot drift apart.

#[macro_use]
mod macros;

pub mod call;
pub mod catalog;
pub mod encoder;
pub mod error;
pub mod payload;
pub mod primitive;
pub mod registry;
pub mod scripts;
pub mod types;

#[cfg(test)]
mod tests;

pub use call::Call;
pub use catalog::Catalog;
pub use catalog::CatalogEntry;
pub use catalog::Dialect;
pub use catalog::Identity;
pub use catalog::SemanticType;
pub use encoder::encode_function;
pub use encoder::encode_script;
pub use error::ArgKind;
pub use error::CatalogError;
pub use error::Error;
pub use error::Result;
pub use payload::Script;
pub use payload::ScriptFunction;
pub use payload::TransactionPayload;
pub use registry::DecoderRegistry;
pub use types::AccountAddress;
pub use types::CORE_CODE_ADDRESS;
pub use types::StructTag;
pub use types::TransactionArgument;
pub use types::TypeTag;

/// Recovers the call carried by a legacy script.
pub fn decode_script(script: &Script) -> Result<Call> {
    DecoderRegistry::global().decode_script(script)
}

/// Recovers the call carried by a script function.
pub fn decode_function(function: &ScriptFunction) -> Result<Call> {
    DecoderRegistry::global().decode_function(function)
}

/// Recovers the call carried by either dialect, chosen by the payload's variant.
pub fn decode_payload(payload: &TransactionPayload) -> Result<Call> {
    DecoderRegistry::global().decode_payload(payload)
}
