use crate::*;
use crate::catalog::Slot;
use crate::registry::Arguments;

fn payee() -> AccountAddress {
    AccountAddress::new([0xAB; AccountAddress::LENGTH])
}

fn xus() -> TypeTag {
    TypeTag::currency("XUS")
}

fn transfer() -> Call {
    Call::PeerToPeerWithMetadata {
        currency: xus(),
        payee: payee(),
        amount: 1000,
        metadata: vec![],
        metadata_signature: vec![],
    }
}

// ============================================================================
//  ENCODING
// ============================================================================

#[test]
fn test_transfer_encodes_as_script() -> Result<()> {
    let script = encode_script(transfer());

    assert_eq!(script.code, scripts::PEER_TO_PEER_WITH_METADATA);
    assert_eq!(script.ty_args, vec![xus()]);
    assert_eq!(
        script.args,
        vec![
            TransactionArgument::Address(payee()),
            TransactionArgument::U64(1000),
            TransactionArgument::U8Vector(vec![]),
            TransactionArgument::U8Vector(vec![]),
        ]
    );

    assert_eq!(decode_script(&script)?, transfer());
    Ok(())
}

#[test]
fn test_transfer_encodes_as_script_function() -> Result<()> {
    let function = encode_function(transfer());

    assert_eq!(function.module, "PaymentScripts");
    assert_eq!(function.function, "peer_to_peer_with_metadata");
    assert_eq!(function.ty_args, vec![xus()]);
    assert_eq!(
        function.args,
        vec![
            vec![0xAB; AccountAddress::LENGTH],
            vec![0xE8, 0x03, 0, 0, 0, 0, 0, 0],
            vec![0],
            vec![0],
        ]
    );

    assert_eq!(decode_function(&function)?, transfer());
    Ok(())
}

#[test]
fn test_operation_without_arguments() -> Result<()> {
    let call = Call::CreateRecoveryAddress {};
    let script = encode_script(call.clone());
    assert!(script.ty_args.is_empty());
    assert!(script.args.is_empty());
    assert_eq!(decode_script(&script)?, call);

    let function = encode_function(call.clone());
    assert_eq!(function.module, "AccountAdministrationScripts");
    assert_eq!(decode_function(&function)?, call);
    Ok(())
}

#[test]
fn test_encode_by_dialect() -> Result<()> {
    let call = Call::UpdateMintingAbility { currency: xus(), allow_minting: true };

    let script = call.clone().encode(Dialect::Script);
    assert_eq!(script.dialect(), Dialect::Script);
    assert_eq!(script.decode()?, call);

    let function = call.clone().encode(Dialect::ScriptFunction);
    assert_eq!(function.dialect(), Dialect::ScriptFunction);
    assert_eq!(decode_payload(&function)?, call);
    Ok(())
}

#[test]
fn test_reencoding_a_decoded_payload_is_identity() -> Result<()> {
    let call = Call::TieredMint {
        coin_type: xus(),
        sliding_nonce: 7,
        designated_dealer_address: payee(),
        mint_amount: 5_000_000,
        tier_index: 2,
    };

    let script = encode_script(call.clone());
    assert_eq!(encode_script(decode_script(&script)?), script);

    let function = encode_function(call);
    assert_eq!(encode_function(decode_function(&function)?), function);
    Ok(())
}

// ============================================================================
//  DECODE FAILURES
// ============================================================================

#[test]
fn test_unknown_script_code() {
    let script = Script { code: vec![0xDE, 0xAD], ty_args: vec![], args: vec![] };
    assert_eq!(
        decode_script(&script),
        Err(Error::UnknownOperation(Identity::Script(vec![0xDE, 0xAD])))
    );
}

#[test]
fn test_unknown_function() {
    // Known function name under the wrong module.
    let mut function = encode_function(transfer());
    function.module = "AccountCreationScripts".to_string();

    assert_eq!(
        decode_function(&function),
        Err(Error::UnknownOperation(Identity::Function {
            module: "AccountCreationScripts".to_string(),
            function: "peer_to_peer_with_metadata".to_string(),
        }))
    );
}

#[test]
fn test_half_arity_is_rejected() {
    let mut script = encode_script(transfer());
    script.args.truncate(2);

    assert_eq!(
        decode_script(&script),
        Err(Error::ArityMismatch { kind: ArgKind::Value, expected: 4, actual: 2 })
    );

    let mut function = encode_function(transfer());
    function.args.truncate(2);

    assert_eq!(
        decode_function(&function),
        Err(Error::ArityMismatch { kind: ArgKind::Value, expected: 4, actual: 2 })
    );
}

#[test]
fn test_type_arity_is_checked_first() {
    let mut script = encode_script(transfer());
    script.ty_args.clear();
    script.args.clear();

    assert_eq!(
        decode_script(&script),
        Err(Error::ArityMismatch { kind: ArgKind::Type, expected: 1, actual: 0 })
    );
}

#[test]
fn test_arity_is_checked_before_any_argument() {
    // Every argument is wrong-shaped, but there are too many of them.
    let mut script = encode_script(transfer());
    script.args = vec![TransactionArgument::Bool(true); 5];

    assert_eq!(
        decode_script(&script),
        Err(Error::ArityMismatch { kind: ArgKind::Value, expected: 4, actual: 5 })
    );
}

#[test]
fn test_tagged_argument_mismatch_names_position() {
    let mut script = encode_script(transfer());
    script.args[1] = TransactionArgument::Bool(true);

    assert_eq!(
        decode_script(&script),
        Err(Error::ArgumentTypeMismatch { position: 1, expected: SemanticType::U64 })
    );
}

#[test]
fn test_first_mismatch_wins() {
    let mut script = encode_script(transfer());
    script.args[3] = TransactionArgument::U64(1);
    script.args[2] = TransactionArgument::U64(1);

    assert_eq!(
        decode_script(&script),
        Err(Error::ArgumentTypeMismatch { position: 2, expected: SemanticType::ByteSequence })
    );
}

#[test]
fn test_raw_argument_mismatch_names_position() {
    let call = Call::CreateChildVaspAccount {
        coin_type: xus(),
        child_address: payee(),
        auth_key_prefix: vec![1, 2, 3],
        add_all_currencies: false,
        child_initial_balance: 10,
    };
    let mut function = encode_function(call);

    function.args[2] = vec![2];
    assert_eq!(
        decode_function(&function),
        Err(Error::ArgumentTypeMismatch { position: 2, expected: SemanticType::Bool })
    );

    // An address one byte short.
    function.args[0].pop();
    assert_eq!(
        decode_function(&function),
        Err(Error::ArgumentTypeMismatch { position: 0, expected: SemanticType::Address })
    );
}

#[test]
fn test_raw_bytes_with_trailing_data_is_rejected() {
    let mut function = encode_function(Call::RotateAuthenticationKey { new_key: vec![9; 32] });
    function.args[0].push(0);

    assert_eq!(
        decode_function(&function),
        Err(Error::ArgumentTypeMismatch { position: 0, expected: SemanticType::ByteSequence })
    );
}

#[test]
fn test_error_messages() {
    let err = Error::UnknownOperation(Identity::Script(vec![0xA1, 0x1C, 0xEB, 0x0B, 1, 0, 0, 0, 9, 9]));
    assert_eq!(err.to_string(), "unknown operation: script 0xa11ceb0b01000000.. (10 bytes)");

    let err = Error::ArityMismatch { kind: ArgKind::Type, expected: 1, actual: 0 };
    assert_eq!(err.to_string(), "type argument count mismatch: expected 1, found 0");

    let err = Error::ArgumentTypeMismatch { position: 3, expected: SemanticType::ByteSequence };
    assert_eq!(err.to_string(), "value argument 3 is not a valid byte sequence");
}

// ============================================================================
//  CATALOG
// ============================================================================

#[test]
fn test_global_catalog_contents() {
    let catalog = Catalog::global();
    assert_eq!(catalog.len(), 24);

    let entry = catalog.get("peer_to_peer_with_metadata").expect("transfer is cataloged");
    assert_eq!(entry.type_arity(), 1);
    assert_eq!(entry.value_arity(), 4);
    assert_eq!(entry.module, "PaymentScripts");
    assert_eq!(entry.function, entry.name);

    let names: Vec<_> = entry.value_params().map(|s| s.name).collect();
    assert_eq!(names, ["payee", "amount", "metadata", "metadata_signature"]);

    let types: Vec<_> = entry.slots.iter().map(Slot::semantic_type).collect();
    assert_eq!(
        types,
        [
            SemanticType::TypeDescriptor,
            SemanticType::Address,
            SemanticType::U64,
            SemanticType::ByteSequence,
            SemanticType::ByteSequence,
        ]
    );

    assert!(catalog.get("transfer").is_none());
}

#[test]
fn test_every_entry_is_registered_in_both_dialects() {
    let registry = DecoderRegistry::global();
    for entry in Catalog::global().entries() {
        let by_code = registry.lookup_script(entry.script_code).map(|e| e.name);
        let by_function = registry.lookup_function(entry.module, entry.function).map(|e| e.name);
        assert_eq!(by_code, Some(entry.name));
        assert_eq!(by_function, Some(entry.name));
        assert!(entry.script_code.starts_with(&[0xA1, 0x1C, 0xEB, 0x0B]));
    }
}

#[test]
fn test_call_entry_matches_name() {
    let call = transfer();
    assert_eq!(call.entry().name, call.name());
    assert_eq!(call.name(), "peer_to_peer_with_metadata");
}

fn decode_nothing(_: &mut Arguments<'_>) -> Result<Call> {
    Ok(Call::CreateRecoveryAddress {})
}

const fn test_entry(
    name: &'static str,
    slots: &'static [Slot],
    script_code: &'static [u8],
    function: &'static str,
) -> CatalogEntry {
    CatalogEntry { name, slots, script_code, module: "Test", function, decode: decode_nothing }
}

static DUPLICATE_NAMES: &[CatalogEntry] = &[
    test_entry("twice", &[], &[1], "a"),
    test_entry("twice", &[], &[2], "b"),
];

static DUPLICATE_CODE: &[CatalogEntry] = &[
    test_entry("first", &[], &[7, 7], "first"),
    test_entry("second", &[], &[7, 7], "second"),
];

static DUPLICATE_FUNCTION: &[CatalogEntry] = &[
    test_entry("first", &[], &[1], "shared"),
    test_entry("second", &[], &[2], "shared"),
];

const BACKWARDS_SLOTS: &[Slot] = &[Slot::value("amount", SemanticType::U64), Slot::type_param("currency")];

static TYPE_AFTER_VALUE: &[CatalogEntry] = &[test_entry("backwards", BACKWARDS_SLOTS, &[1], "backwards")];

#[test]
fn test_catalog_rejects_duplicate_names() {
    assert_eq!(Catalog::new(DUPLICATE_NAMES).err(), Some(CatalogError::DuplicateName("twice")));
}

#[test]
fn test_catalog_rejects_type_slot_after_value_slot() {
    assert_eq!(
        Catalog::new(TYPE_AFTER_VALUE).err(),
        Some(CatalogError::SlotOrder { name: "backwards", slot: "currency" })
    );
}

#[test]
fn test_catalog_rejects_duplicate_script_code() {
    assert_eq!(
        Catalog::new(DUPLICATE_CODE).err(),
        Some(CatalogError::DuplicateIdentity {
            dialect: Dialect::Script,
            identity: Identity::Script(vec![7, 7]),
            first: "first",
            second: "second",
        })
    );
}

#[test]
fn test_catalog_rejects_duplicate_function() {
    assert_eq!(
        Catalog::new(DUPLICATE_FUNCTION).err(),
        Some(CatalogError::DuplicateIdentity {
            dialect: Dialect::ScriptFunction,
            identity: Identity::Function { module: "Test".to_string(), function: "shared".to_string() },
            first: "first",
            second: "second",
        })
    );
}

// ============================================================================
//  PAYLOAD FRAMING
// ============================================================================

#[test]
fn test_script_payload_bytes_roundtrip() -> Result<()> {
    let payload = TransactionPayload::from(encode_script(transfer()));
    let bytes = payload.to_bytes()?;
    let decoded = TransactionPayload::from_bytes(&bytes)?;

    assert_eq!(decoded, payload);
    assert_eq!(decoded.decode()?, transfer());
    Ok(())
}

#[test]
fn test_function_payload_with_nested_type_tags() -> Result<()> {
    let mut generic = StructTag::new(CORE_CODE_ADDRESS, "Diem", "Diem");
    generic.type_params.push(TypeTag::Vector(Box::new(TypeTag::U8)));
    let call = Call::Preburn { token: TypeTag::Struct(Box::new(generic)), amount: 42 };

    let payload = call.clone().encode(Dialect::ScriptFunction);
    let decoded = TransactionPayload::from_bytes(&payload.to_bytes()?)?;

    assert_eq!(decoded, payload);
    assert_eq!(decode_payload(&decoded)?, call);
    Ok(())
}

#[test]
fn test_payload_skips_unknown_keys() -> Result<()> {
    let mut enc = txpack::Encoder::new();
    enc.variant_begin("ScriptFunction")?;
    enc.map_begin()?;
    for (key, val) in [("module", "PaymentScripts"), ("function", "preburn")] {
        enc.variant_begin(key)?;
        enc.str(val)?;
        enc.variant_end()?;
    }
    enc.variant_begin("gas_hint")?;
    enc.u64(9)?;
    enc.variant_end()?;
    enc.variant_begin("ty_args")?;
    enc.list_begin()?;
    enc.list_end()?;
    enc.variant_end()?;
    enc.variant_begin("args")?;
    enc.list_begin()?;
    enc.bytes(&[1])?;
    enc.list_end()?;
    enc.variant_end()?;
    enc.map_end()?;
    enc.variant_end()?;

    let payload = TransactionPayload::from_bytes(&enc.into_bytes()?)?;
    assert_eq!(
        payload,
        TransactionPayload::ScriptFunction(ScriptFunction {
            module: "PaymentScripts".to_string(),
            function: "preburn".to_string(),
            ty_args: vec![],
            args: vec![vec![1]],
        })
    );
    Ok(())
}

#[test]
fn test_payload_missing_key() -> Result<()> {
    let mut enc = txpack::Encoder::new();
    enc.variant_begin("Script")?;
    enc.map_begin()?;
    enc.variant_begin("code")?;
    enc.bytes(&[1, 2])?;
    enc.variant_end()?;
    enc.map_end()?;
    enc.variant_end()?;

    let err = TransactionPayload::from_bytes(&enc.into_bytes()?).unwrap_err();
    assert_eq!(err, Error::ProtocolViolation("missing ty_args".to_string()));
    Ok(())
}

#[test]
fn test_payload_rejects_unknown_kind_and_trailing_bytes() -> Result<()> {
    let mut enc = txpack::Encoder::new();
    enc.variant_begin("Module")?;
    enc.unit()?;
    enc.variant_end()?;
    let err = TransactionPayload::from_bytes(&enc.into_bytes()?).unwrap_err();
    assert!(matches!(err, Error::ProtocolViolation(_)));

    let mut bytes = TransactionPayload::from(encode_script(transfer())).to_bytes()?;
    bytes.push(0x0E);
    let err = TransactionPayload::from_bytes(&bytes).unwrap_err();
    assert_eq!(err, Error::ProtocolViolation("1 trailing bytes after payload".to_string()));
    Ok(())
}

#[test]
fn test_payload_framing_errors_surface_as_wire() {
    assert_eq!(
        TransactionPayload::from_bytes(&[0xFF]),
        Err(Error::Wire(txpack::Error::InvalidTag(0xFF)))
    );
    assert_eq!(
        TransactionPayload::from_bytes(&[0x33, 0x10, 0x00]),
        Err(Error::Wire(txpack::Error::UnexpectedEnd))
    );
}

fn container(tag: txpack::Tag, body: &[u8]) -> Vec<u8> {
    let mut out = vec![tag as u8];
    out.extend_from_slice(&(body.len() as u32).to_le_bytes());
    out.extend_from_slice(body);
    out
}

/// A variant named `key` whose body holds every item in `items`, in order.
fn raw_variant(key: &str, items: &[Vec<u8>]) -> Vec<u8> {
    let mut body = container(txpack::Tag::String, key.as_bytes());
    for item in items {
        body.extend_from_slice(item);
    }
    container(txpack::Tag::Variant, &body)
}

fn raw_script(entries: &[Vec<u8>]) -> Vec<u8> {
    let map = container(txpack::Tag::Map, &entries.concat());
    raw_variant("Script", &[map])
}

fn empty_list() -> Vec<u8> {
    container(txpack::Tag::List, &[])
}

fn unit() -> Vec<u8> {
    vec![txpack::Tag::Unit as u8]
}

#[test]
fn test_handbuilt_frame_matches_encoder() -> Result<()> {
    let bytes = raw_script(&[
        raw_variant("code", &[container(txpack::Tag::Bytes, &[1, 2])]),
        raw_variant("ty_args", &[empty_list()]),
        raw_variant("args", &[empty_list()]),
    ]);
    let payload = TransactionPayload::Script(Script { code: vec![1, 2], ty_args: vec![], args: vec![] });
    assert_eq!(payload.to_bytes()?, bytes);
    assert_eq!(TransactionPayload::from_bytes(&bytes)?, payload);
    Ok(())
}

#[test]
fn test_payload_variant_with_extra_item() -> Result<()> {
    let mut bytes = TransactionPayload::from(encode_script(transfer())).to_bytes()?;

    // Append a Unit inside the outer variant body and grow its length to match.
    bytes.push(txpack::Tag::Unit as u8);
    let len = u32::from_le_bytes([bytes[1], bytes[2], bytes[3], bytes[4]]) + 1;
    bytes[1..5].copy_from_slice(&len.to_le_bytes());

    assert_eq!(
        TransactionPayload::from_bytes(&bytes),
        Err(Error::Wire(txpack::Error::TooManyItems))
    );
    Ok(())
}

#[test]
fn test_map_value_with_extra_item() {
    let bytes = raw_script(&[
        raw_variant("code", &[container(txpack::Tag::Bytes, &[1, 2]), unit()]),
        raw_variant("ty_args", &[empty_list()]),
        raw_variant("args", &[empty_list()]),
    ]);
    assert_eq!(
        TransactionPayload::from_bytes(&bytes),
        Err(Error::Wire(txpack::Error::TooManyItems))
    );
}

#[test]
fn test_type_tag_with_extra_item() {
    let u64_tag = raw_variant("u64", &[unit(), unit()]);
    let bytes = raw_script(&[
        raw_variant("code", &[container(txpack::Tag::Bytes, &[1])]),
        raw_variant("ty_args", &[container(txpack::Tag::List, &u64_tag)]),
        raw_variant("args", &[empty_list()]),
    ]);
    assert_eq!(
        TransactionPayload::from_bytes(&bytes),
        Err(Error::Wire(txpack::Error::TooManyItems))
    );
}

#[test]
fn test_duplicate_key_is_rejected() {
    let bytes = raw_script(&[
        raw_variant("code", &[container(txpack::Tag::Bytes, &[1])]),
        raw_variant("code", &[container(txpack::Tag::Bytes, &[2])]),
        raw_variant("ty_args", &[empty_list()]),
        raw_variant("args", &[empty_list()]),
    ]);
    assert_eq!(
        TransactionPayload::from_bytes(&bytes),
        Err(Error::ProtocolViolation("duplicate key `code`".to_string()))
    );
}

fn nested_vector(depth: usize) -> TypeTag {
    let mut tag = TypeTag::U8;
    for _ in 0..depth {
        tag = TypeTag::Vector(Box::new(tag));
    }
    tag
}

#[test]
fn test_type_tag_depth_limit_on_encode() {
    let payload = TransactionPayload::Script(Script {
        code: vec![1],
        ty_args: vec![nested_vector(payload::MAX_TYPE_TAG_DEPTH)],
        args: vec![],
    });
    assert_eq!(payload.to_bytes(), Err(Error::RecursionLimitExceeded));
}

#[test]
fn test_type_tag_depth_limit_on_decode() -> Result<()> {
    let mut enc = txpack::Encoder::new();
    enc.variant_begin("Script")?;
    enc.map_begin()?;
    enc.variant_begin("ty_args")?;
    enc.list_begin()?;
    for _ in 0..payload::MAX_TYPE_TAG_DEPTH + 1 {
        enc.variant_begin("vector")?;
    }
    enc.unit()?;
    for _ in 0..payload::MAX_TYPE_TAG_DEPTH + 1 {
        enc.variant_end()?;
    }
    enc.list_end()?;
    enc.variant_end()?;
    enc.map_end()?;
    enc.variant_end()?;

    let err = TransactionPayload::from_bytes(&enc.into_bytes()?).unwrap_err();
    assert_eq!(err, Error::RecursionLimitExceeded);
    Ok(())
}

#[test]
fn test_type_tag_just_under_depth_limit() -> Result<()> {
    let payload = TransactionPayload::Script(Script {
        code: vec![1],
        ty_args: vec![nested_vector(payload::MAX_TYPE_TAG_DEPTH - 1)],
        args: vec![],
    });
    assert_eq!(TransactionPayload::from_bytes(&payload.to_bytes()?)?, payload);
    Ok(())
}

// ============================================================================
//  ADDRESSES AND TYPE TAGS
// ============================================================================

#[test]
fn test_address_hex_literals() -> Result<()> {
    assert_eq!(AccountAddress::from_hex_literal("0x1")?, CORE_CODE_ADDRESS);
    assert_eq!(
        AccountAddress::from_hex_literal("0xabababababababababababababababab")?,
        payee()
    );
    assert_eq!(CORE_CODE_ADDRESS.to_string(), "0x00000000000000000000000000000001");
    assert_eq!(CORE_CODE_ADDRESS.to_short_hex(), "0x1");
    assert_eq!(AccountAddress::ZERO.to_short_hex(), "0x0");

    assert!(matches!(AccountAddress::from_hex_literal("1"), Err(Error::InvalidAddress(_))));
    assert!(matches!(AccountAddress::from_hex_literal("0x"), Err(Error::InvalidAddress(_))));
    assert!(matches!(AccountAddress::from_hex_literal("0xzz"), Err(Error::InvalidAddress(_))));
    assert!(matches!(
        AccountAddress::from_hex_literal(&format!("0x{}", "1".repeat(33))),
        Err(Error::InvalidAddress(_))
    ));
    Ok(())
}

#[test]
fn test_address_from_bytes_requires_exact_length() {
    assert!(AccountAddress::from_bytes([0u8; 16]).is_ok());
    assert!(matches!(AccountAddress::from_bytes([0u8; 20]), Err(Error::InvalidAddress(_))));
}

#[test]
fn test_type_tag_display() {
    assert_eq!(xus().to_string(), "0x1::XUS::XUS");
    assert_eq!(TypeTag::Vector(Box::new(TypeTag::U8)).to_string(), "vector<u8>");

    let mut tag = StructTag::new(CORE_CODE_ADDRESS, "Diem", "Diem");
    tag.type_params = vec![xus(), TypeTag::U64];
    assert_eq!(tag.to_string(), "0x1::Diem::Diem<0x1::XUS::XUS, u64>");
}
