//! # Structured Calls
//!
//! Every operation the crate knows, one row each. The `Call` enum, the catalog
//! table and the per-operation decoders are all generated from the rows below,
//! so adding an operation is a one-row change.
//!
//! Module names are published at `0x1`. The function name of each operation
//! is its catalog name.

use crate::catalog::CatalogEntry;
use crate::catalog::Dialect;
use crate::payload::TransactionPayload;
use crate::scripts;
use crate::types::AccountAddress;

operations! {
    /// Adds a zero `currency` balance to the sending account.
    AddCurrencyToAccount => "add_currency_to_account" {
        module: "AccountAdministrationScripts",
        code: scripts::ADD_CURRENCY_TO_ACCOUNT,
        type_params: [currency],
        params: [],
    }

    /// Stores the sender's key rotation capability with the recovery account at `recovery_address`.
    AddRecoveryRotationCapability => "add_recovery_rotation_capability" {
        module: "AccountAdministrationScripts",
        code: scripts::ADD_RECOVERY_ROTATION_CAPABILITY,
        type_params: [],
        params: [recovery_address: AccountAddress],
    }

    AddValidatorAndReconfigure => "add_validator_and_reconfigure" {
        module: "ValidatorAdministrationScripts",
        code: scripts::ADD_VALIDATOR_AND_RECONFIGURE,
        type_params: [],
        params: [sliding_nonce: u64, validator_name: Vec<u8>, validator_address: AccountAddress],
    }

    /// Destroys the oldest outstanding preburn request at `preburn_address`.
    Burn => "burn" {
        module: "TreasuryComplianceScripts",
        code: scripts::BURN,
        type_params: [token],
        params: [sliding_nonce: u64, preburn_address: AccountAddress],
    }

    BurnTxnFees => "burn_txn_fees" {
        module: "TreasuryComplianceScripts",
        code: scripts::BURN_TXN_FEES,
        type_params: [coin_type],
        params: [],
    }

    CancelBurn => "cancel_burn" {
        module: "TreasuryComplianceScripts",
        code: scripts::CANCEL_BURN,
        type_params: [token],
        params: [preburn_address: AccountAddress],
    }

    /// Creates a child VASP account under the sending parent VASP.
    CreateChildVaspAccount => "create_child_vasp_account" {
        module: "AccountCreationScripts",
        code: scripts::CREATE_CHILD_VASP_ACCOUNT,
        type_params: [coin_type],
        params: [
            child_address: AccountAddress,
            auth_key_prefix: Vec<u8>,
            add_all_currencies: bool,
            child_initial_balance: u64,
        ],
    }

    CreateDesignatedDealer => "create_designated_dealer" {
        module: "AccountCreationScripts",
        code: scripts::CREATE_DESIGNATED_DEALER,
        type_params: [currency],
        params: [
            sliding_nonce: u64,
            addr: AccountAddress,
            auth_key_prefix: Vec<u8>,
            human_name: Vec<u8>,
            add_all_currencies: bool,
        ],
    }

    CreateParentVaspAccount => "create_parent_vasp_account" {
        module: "AccountCreationScripts",
        code: scripts::CREATE_PARENT_VASP_ACCOUNT,
        type_params: [coin_type],
        params: [
            sliding_nonce: u64,
            new_account_address: AccountAddress,
            auth_key_prefix: Vec<u8>,
            human_name: Vec<u8>,
            add_all_currencies: bool,
        ],
    }

    CreateRecoveryAddress => "create_recovery_address" {
        module: "AccountAdministrationScripts",
        code: scripts::CREATE_RECOVERY_ADDRESS,
        type_params: [],
        params: [],
    }

    CreateValidatorAccount => "create_validator_account" {
        module: "AccountCreationScripts",
        code: scripts::CREATE_VALIDATOR_ACCOUNT,
        type_params: [],
        params: [
            sliding_nonce: u64,
            new_account_address: AccountAddress,
            auth_key_prefix: Vec<u8>,
            human_name: Vec<u8>,
        ],
    }

    FreezeAccount => "freeze_account" {
        module: "TreasuryComplianceScripts",
        code: scripts::FREEZE_ACCOUNT,
        type_params: [],
        params: [sliding_nonce: u64, to_freeze_account: AccountAddress],
    }

    /// Transfers `amount` of `currency` from the sender to `payee`.
    ///
    /// `metadata` and `metadata_signature` may be empty; a signature is only
    /// needed above the dual attestation limit.
    PeerToPeerWithMetadata => "peer_to_peer_with_metadata" {
        module: "PaymentScripts",
        code: scripts::PEER_TO_PEER_WITH_METADATA,
        type_params: [currency],
        params: [
            payee: AccountAddress,
            amount: u64,
            metadata: Vec<u8>,
            metadata_signature: Vec<u8>,
        ],
    }

    Preburn => "preburn" {
        module: "TreasuryComplianceScripts",
        code: scripts::PREBURN,
        type_params: [token],
        params: [amount: u64],
    }

    RemoveValidatorAndReconfigure => "remove_validator_and_reconfigure" {
        module: "ValidatorAdministrationScripts",
        code: scripts::REMOVE_VALIDATOR_AND_RECONFIGURE,
        type_params: [],
        params: [sliding_nonce: u64, validator_name: Vec<u8>, validator_address: AccountAddress],
    }

    RotateAuthenticationKey => "rotate_authentication_key" {
        module: "AccountAdministrationScripts",
        code: scripts::ROTATE_AUTHENTICATION_KEY,
        type_params: [],
        params: [new_key: Vec<u8>],
    }

    RotateAuthenticationKeyWithNonce => "rotate_authentication_key_with_nonce" {
        module: "AccountAdministrationScripts",
        code: scripts::ROTATE_AUTHENTICATION_KEY_WITH_NONCE,
        type_params: [],
        params: [sliding_nonce: u64, new_key: Vec<u8>],
    }

    RotateDualAttestationInfo => "rotate_dual_attestation_info" {
        module: "AccountAdministrationScripts",
        code: scripts::ROTATE_DUAL_ATTESTATION_INFO,
        type_params: [],
        params: [new_url: Vec<u8>, new_key: Vec<u8>],
    }

    SetValidatorConfigAndReconfigure => "set_validator_config_and_reconfigure" {
        module: "ValidatorAdministrationScripts",
        code: scripts::SET_VALIDATOR_CONFIG_AND_RECONFIGURE,
        type_params: [],
        params: [
            validator_account: AccountAddress,
            consensus_pubkey: Vec<u8>,
            validator_network_addresses: Vec<u8>,
            fullnode_network_addresses: Vec<u8>,
        ],
    }

    /// Mints `mint_amount` of `coin_type` to a designated dealer, within the limit of `tier_index`.
    TieredMint => "tiered_mint" {
        module: "TreasuryComplianceScripts",
        code: scripts::TIERED_MINT,
        type_params: [coin_type],
        params: [
            sliding_nonce: u64,
            designated_dealer_address: AccountAddress,
            mint_amount: u64,
            tier_index: u64,
        ],
    }

    UnfreezeAccount => "unfreeze_account" {
        module: "TreasuryComplianceScripts",
        code: scripts::UNFREEZE_ACCOUNT,
        type_params: [],
        params: [sliding_nonce: u64, to_unfreeze_account: AccountAddress],
    }

    UpdateDualAttestationLimit => "update_dual_attestation_limit" {
        module: "TreasuryComplianceScripts",
        code: scripts::UPDATE_DUAL_ATTESTATION_LIMIT,
        type_params: [],
        params: [sliding_nonce: u64, new_micro_xdx_limit: u64],
    }

    UpdateExchangeRate => "update_exchange_rate" {
        module: "TreasuryComplianceScripts",
        code: scripts::UPDATE_EXCHANGE_RATE,
        type_params: [currency],
        params: [
            dd_sliding_nonce: u64,
            new_exchange_rate_numerator: u64,
            new_exchange_rate_denominator: u64,
        ],
    }

    UpdateMintingAbility => "update_minting_ability" {
        module: "TreasuryComplianceScripts",
        code: scripts::UPDATE_MINTING_ABILITY,
        type_params: [currency],
        params: [allow_minting: bool],
    }
}

impl Call {
    /// The catalog entry describing this call.
    ///
    /// # Panics
    /// Panics if the operation is missing from the catalog, which the
    /// operation table rules out.
    pub fn entry(&self) -> &'static CatalogEntry {
        match crate::catalog::Catalog::global().get(self.name()) {
            Some(entry) => entry,
            None => panic!("operation `{}` missing from catalog", self.name()),
        }
    }

    /// Encodes the call in the requested dialect.
    pub fn encode(self, dialect: Dialect) -> TransactionPayload {
        match dialect {
            Dialect::Script => crate::encoder::encode_script(self).into(),
            Dialect::ScriptFunction => crate::encoder::encode_function(self).into(),
        }
    }
}
