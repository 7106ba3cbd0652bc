//! # Transaction Payloads
//!
//! The two wire dialects, and their framing as `txpack` bytes.
//!
//! ## Layout
//! ```text
//! Variant("Script")         Map { code: Bytes, ty_args: List<TypeTag>, args: List<tagged> }
//! Variant("ScriptFunction") Map { module: String, function: String,
//!                                 ty_args: List<TypeTag>, args: List<Bytes> }
//! ```
//! A legacy argument keeps its own tag on the wire (`BoolTrue`/`BoolFalse`,
//! `U64`, `Address`, `Bytes`). A script function argument is an opaque `Bytes`
//! blob holding the untagged primitive encoding.
//!
//! ## Invariants
//! - **Panic Safety**: Decoding returns `Result` on any input, never panics.
//! - **Forward Compatibility**: Unknown map keys are skipped.
//! - **Canonical Frames**: Every variant body holds exactly one item, and a known key appears at most once.
//! - **Recursion Safety**: Type tags nest at most `MAX_TYPE_TAG_DEPTH` levels.

use txpack::Decoder;
use txpack::Encoder;
use txpack::Tag;

use crate::call::Call;
use crate::catalog::Dialect;
use crate::error::Error;
use crate::error::Result;
use crate::types::AccountAddress;
use crate::types::StructTag;
use crate::types::TransactionArgument;
use crate::types::TypeTag;

/// The deepest type tag nesting accepted when framing.
pub const MAX_TYPE_TAG_DEPTH: usize = 64;

/// A legacy script: constant program bytes plus self-tagged arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Script {
    pub code: Vec<u8>,
    pub ty_args: Vec<TypeTag>,
    pub args: Vec<TransactionArgument>,
}

/// An invocation of a named module function with untagged arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptFunction {
    pub module: String,
    pub function: String,
    pub ty_args: Vec<TypeTag>,
    pub args: Vec<Vec<u8>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransactionPayload {
    Script(Script),
    ScriptFunction(ScriptFunction),
}

impl TransactionPayload {
    pub fn dialect(&self) -> Dialect {
        match self {
            TransactionPayload::Script(_) => Dialect::Script,
            TransactionPayload::ScriptFunction(_) => Dialect::ScriptFunction,
        }
    }

    /// Recovers the call this payload carries.
    pub fn decode(&self) -> Result<Call> {
        crate::decode_payload(self)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut enc = Encoder::new();
        self.encode(&mut enc)?;
        Ok(enc.into_bytes()?)
    }

    /// Parses a single framed payload; trailing bytes are rejected.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut dec = Decoder::new(bytes);
        let payload = Self::decode_frame(&mut dec)?;
        if !dec.is_empty() {
            return Err(Error::ProtocolViolation(format!(
                "{} trailing bytes after payload",
                dec.remaining()
            )));
        }
        Ok(payload)
    }

    pub fn encode(&self, enc: &mut Encoder) -> Result<()> {
        match self {
            TransactionPayload::Script(script) => {
                enc.variant_begin("Script")?;
                enc.map_begin()?;

                enc.variant_begin("code")?;
                enc.bytes(&script.code)?;
                enc.variant_end()?;

                write_ty_args(enc, &script.ty_args)?;

                enc.variant_begin("args")?;
                enc.list_begin()?;
                for arg in &script.args {
                    encode_argument(enc, arg)?;
                }
                enc.list_end()?;
                enc.variant_end()?;

                enc.map_end()?;
                enc.variant_end()?;
            }
            TransactionPayload::ScriptFunction(function) => {
                enc.variant_begin("ScriptFunction")?;
                enc.map_begin()?;

                write_map_str(enc, "module", &function.module)?;
                write_map_str(enc, "function", &function.function)?;
                write_ty_args(enc, &function.ty_args)?;

                enc.variant_begin("args")?;
                enc.list_begin()?;
                for arg in &function.args {
                    enc.bytes(arg)?;
                }
                enc.list_end()?;
                enc.variant_end()?;

                enc.map_end()?;
                enc.variant_end()?;
            }
        }
        Ok(())
    }

    pub fn decode_frame(dec: &mut Decoder<'_>) -> Result<Self> {
        let (kind, body) = dec.variant()?;
        match kind {
            "Script" => Ok(TransactionPayload::Script(decode_script_body(body)?)),
            "ScriptFunction" => Ok(TransactionPayload::ScriptFunction(decode_function_body(body)?)),
            _ => Err(Error::ProtocolViolation(format!("unknown payload kind `{}`", kind))),
        }
    }
}

impl From<Script> for TransactionPayload {
    fn from(script: Script) -> Self {
        TransactionPayload::Script(script)
    }
}

impl From<ScriptFunction> for TransactionPayload {
    fn from(function: ScriptFunction) -> Self {
        TransactionPayload::ScriptFunction(function)
    }
}

fn decode_script_body(mut body: Decoder<'_>) -> Result<Script> {
    let mut map = body.map()?;
    let mut code = None;
    let mut ty_args = None;
    let mut args = None;

    while let Some((key, mut val)) = map.next()? {
        match key {
            "code" => set_once(&mut code, key, val.bytes()?.to_vec())?,
            "ty_args" => set_once(&mut ty_args, key, read_ty_args(&mut val)?)?,
            "args" => set_once(&mut args, key, read_list(&mut val, decode_argument)?)?,
            _ => val.skip()?,
        }
        val.finish()?;
    }
    body.finish()?;

    Ok(Script {
        code: code.ok_or_else(|| missing("code"))?,
        ty_args: ty_args.ok_or_else(|| missing("ty_args"))?,
        args: args.ok_or_else(|| missing("args"))?,
    })
}

fn decode_function_body(mut body: Decoder<'_>) -> Result<ScriptFunction> {
    let mut map = body.map()?;
    let mut module = None;
    let mut function = None;
    let mut ty_args = None;
    let mut args = None;

    while let Some((key, mut val)) = map.next()? {
        match key {
            "module" => set_once(&mut module, key, val.str()?.to_string())?,
            "function" => set_once(&mut function, key, val.str()?.to_string())?,
            "ty_args" => set_once(&mut ty_args, key, read_ty_args(&mut val)?)?,
            "args" => {
                let decoded = read_list(&mut val, |item| Ok(item.bytes()?.to_vec()))?;
                set_once(&mut args, key, decoded)?;
            }
            _ => val.skip()?,
        }
        val.finish()?;
    }
    body.finish()?;

    Ok(ScriptFunction {
        module: module.ok_or_else(|| missing("module"))?,
        function: function.ok_or_else(|| missing("function"))?,
        ty_args: ty_args.ok_or_else(|| missing("ty_args"))?,
        args: args.ok_or_else(|| missing("args"))?,
    })
}

fn encode_argument(enc: &mut Encoder, arg: &TransactionArgument) -> Result<()> {
    match arg {
        TransactionArgument::Bool(v) => enc.bool(*v)?,
        TransactionArgument::U64(v) => enc.u64(*v)?,
        TransactionArgument::Address(v) => enc.address(v.as_bytes())?,
        TransactionArgument::U8Vector(v) => enc.bytes(v)?,
    }
    Ok(())
}

fn decode_argument(dec: &mut Decoder<'_>) -> Result<TransactionArgument> {
    let arg = match dec.peek_tag()? {
        Tag::BoolTrue | Tag::BoolFalse => TransactionArgument::Bool(dec.bool()?),
        Tag::U64 => TransactionArgument::U64(dec.u64()?),
        Tag::Address => TransactionArgument::Address(AccountAddress::new(dec.address()?)),
        Tag::Bytes => TransactionArgument::U8Vector(dec.bytes()?.to_vec()),
        tag => {
            return Err(Error::ProtocolViolation(format!(
                "{:?} is not a script argument",
                tag
            )));
        }
    };
    Ok(arg)
}

fn write_ty_args(enc: &mut Encoder, ty_args: &[TypeTag]) -> Result<()> {
    enc.variant_begin("ty_args")?;
    enc.list_begin()?;
    for tag in ty_args {
        encode_type_tag(enc, tag, 0)?;
    }
    enc.list_end()?;
    enc.variant_end()?;
    Ok(())
}

fn read_ty_args(dec: &mut Decoder<'_>) -> Result<Vec<TypeTag>> {
    read_list(dec, |item| decode_type_tag(item, 0))
}

fn encode_type_tag(enc: &mut Encoder, tag: &TypeTag, depth: usize) -> Result<()> {
    if depth >= MAX_TYPE_TAG_DEPTH {
        return Err(Error::RecursionLimitExceeded);
    }

    match tag {
        TypeTag::Bool => encode_unit_variant(enc, "bool")?,
        TypeTag::U8 => encode_unit_variant(enc, "u8")?,
        TypeTag::U64 => encode_unit_variant(enc, "u64")?,
        TypeTag::U128 => encode_unit_variant(enc, "u128")?,
        TypeTag::Address => encode_unit_variant(enc, "address")?,
        TypeTag::Signer => encode_unit_variant(enc, "signer")?,
        TypeTag::Vector(inner) => {
            enc.variant_begin("vector")?;
            encode_type_tag(enc, inner, depth + 1)?;
            enc.variant_end()?;
        }
        TypeTag::Struct(st) => {
            enc.variant_begin("struct")?;
            enc.map_begin()?;

            enc.variant_begin("address")?;
            enc.address(st.address.as_bytes())?;
            enc.variant_end()?;

            write_map_str(enc, "module", &st.module)?;
            write_map_str(enc, "name", &st.name)?;

            enc.variant_begin("type_params")?;
            enc.list_begin()?;
            for param in &st.type_params {
                encode_type_tag(enc, param, depth + 1)?;
            }
            enc.list_end()?;
            enc.variant_end()?;

            enc.map_end()?;
            enc.variant_end()?;
        }
    }
    Ok(())
}

fn decode_type_tag(dec: &mut Decoder<'_>, depth: usize) -> Result<TypeTag> {
    if depth >= MAX_TYPE_TAG_DEPTH {
        return Err(Error::RecursionLimitExceeded);
    }

    let (kind, mut body) = dec.variant()?;
    let tag = match kind {
        "vector" => TypeTag::Vector(Box::new(decode_type_tag(&mut body, depth + 1)?)),
        "struct" => TypeTag::Struct(Box::new(decode_struct_tag(&mut body, depth)?)),
        _ => {
            let tag = primitive_type_tag(kind)
                .ok_or_else(|| Error::ProtocolViolation(format!("unknown type tag `{}`", kind)))?;
            body.unit()?;
            tag
        }
    };
    body.finish()?;
    Ok(tag)
}

fn primitive_type_tag(kind: &str) -> Option<TypeTag> {
    let tag = match kind {
        "bool" => TypeTag::Bool,
        "u8" => TypeTag::U8,
        "u64" => TypeTag::U64,
        "u128" => TypeTag::U128,
        "address" => TypeTag::Address,
        "signer" => TypeTag::Signer,
        _ => return None,
    };
    Some(tag)
}

fn decode_struct_tag(dec: &mut Decoder<'_>, depth: usize) -> Result<StructTag> {
    let mut map = dec.map()?;
    let mut address = None;
    let mut module = None;
    let mut name = None;
    let mut type_params = None;

    while let Some((key, mut val)) = map.next()? {
        match key {
            "address" => set_once(&mut address, key, AccountAddress::new(val.address()?))?,
            "module" => set_once(&mut module, key, val.str()?.to_string())?,
            "name" => set_once(&mut name, key, val.str()?.to_string())?,
            "type_params" => {
                let params = read_list(&mut val, |item| decode_type_tag(item, depth + 1))?;
                set_once(&mut type_params, key, params)?;
            }
            _ => val.skip()?,
        }
        val.finish()?;
    }

    Ok(StructTag {
        address: address.ok_or_else(|| missing("struct address"))?,
        module: module.ok_or_else(|| missing("struct module"))?,
        name: name.ok_or_else(|| missing("struct name"))?,
        type_params: type_params.unwrap_or_default(),
    })
}

// Helper functions

fn write_map_str(enc: &mut Encoder, key: &str, val: &str) -> Result<()> {
    enc.variant_begin(key)?;
    enc.str(val)?;
    enc.variant_end()?;
    Ok(())
}

fn encode_unit_variant(enc: &mut Encoder, tag: &str) -> Result<()> {
    enc.variant_begin(tag)?;
    enc.unit()?;
    enc.variant_end()?;
    Ok(())
}

/// Reads a list whose items each hold exactly one value.
fn read_list<T>(
    dec: &mut Decoder<'_>,
    mut read: impl FnMut(&mut Decoder<'_>) -> Result<T>,
) -> Result<Vec<T>> {
    let mut list = dec.list()?;
    let mut items = Vec::new();
    while let Some(mut item) = list.next()? {
        items.push(read(&mut item)?);
        item.finish()?;
    }
    Ok(items)
}

fn set_once<T>(slot: &mut Option<T>, key: &str, value: T) -> Result<()> {
    if slot.replace(value).is_some() {
        return Err(Error::ProtocolViolation(format!("duplicate key `{}`", key)));
    }
    Ok(())
}

fn missing(field: &str) -> Error {
    Error::ProtocolViolation(format!("missing {}", field))
}
