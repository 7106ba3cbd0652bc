//! # Encoder
//!
//! Turns a `Call` into a wire payload. Type arguments are copied verbatim and
//! value arguments go through the primitive codec, both in slot order.
//!
//! Encoding a well-typed call cannot fail. If the call disagrees with its
//! catalog entry the table is corrupt, and the encoder panics rather than
//! emit a payload no decoder would accept.

use tracing::trace;

use crate::call::Call;
use crate::catalog::CatalogEntry;
use crate::catalog::Dialect;
use crate::catalog::SemanticType;
use crate::payload::Script;
use crate::payload::ScriptFunction;
use crate::types::TransactionArgument;
use crate::types::TypeTag;

/// Builds the legacy script form of `call`.
pub fn encode_script(call: Call) -> Script {
    let (entry, ty_args, args) = checked_parts(call);
    trace!(operation = entry.name, dialect = %Dialect::Script, "encoded call");
    Script { code: entry.script_code.to_vec(), ty_args, args }
}

/// Builds the script function form of `call`.
pub fn encode_function(call: Call) -> ScriptFunction {
    let (entry, ty_args, args) = checked_parts(call);
    trace!(operation = entry.name, dialect = %Dialect::ScriptFunction, "encoded call");
    ScriptFunction {
        module: entry.module.to_string(),
        function: entry.function.to_string(),
        ty_args,
        args: args.iter().map(TransactionArgument::to_raw).collect(),
    }
}

fn checked_parts(call: Call) -> (&'static CatalogEntry, Vec<TypeTag>, Vec<TransactionArgument>) {
    let entry = call.entry();
    let (ty_args, args) = call.into_parts();

    assert_eq!(
        ty_args.len(),
        entry.type_arity(),
        "`{}` carries a different number of type arguments than its catalog entry",
        entry.name,
    );
    assert_eq!(
        args.len(),
        entry.value_arity(),
        "`{}` carries a different number of value arguments than its catalog entry",
        entry.name,
    );
    for (position, (arg, slot)) in args.iter().zip(entry.value_params()).enumerate() {
        let actual: SemanticType = arg.semantic_type();
        assert_eq!(
            actual,
            slot.semantic_type(),
            "`{}` value argument {} (`{}`) disagrees with its catalog slot",
            entry.name,
            position,
            slot.name,
        );
    }

    (entry, ty_args, args)
}
