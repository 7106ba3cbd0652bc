/// Declares the operation table.
///
/// One row per operation expands into a `Call` variant, a `CatalogEntry` in
/// `ENTRIES`, the matching decode function, and the arm of `Call::into_parts`
/// the encoder is driven by. Type parameters are listed before value
/// parameters, and fields are declared in wire order.
///
/// ```ignore
/// operations! {
///     /// Transfers `amount` of `currency` to `payee`.
///     PeerToPeerWithMetadata => "peer_to_peer_with_metadata" {
///         module: "PaymentScripts",
///         code: scripts::PEER_TO_PEER_WITH_METADATA,
///         type_params: [currency],
///         params: [payee: AccountAddress, amount: u64, metadata: Vec<u8>, metadata_signature: Vec<u8>],
///     }
/// }
/// ```
macro_rules! operations {
    ($(
        $(#[doc = $doc:literal])*
        $variant:ident => $name:literal {
            module: $module:literal,
            code: $code:path,
            type_params: [$($tparam:ident),* $(,)?],
            params: [$($param:ident: $pty:ty),* $(,)?] $(,)?
        }
    )*) => {
        /// A structured call to one catalog operation.
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub enum Call {
            $(
                $(#[doc = $doc])*
                $variant {
                    $($tparam: $crate::types::TypeTag,)*
                    $($param: $pty,)*
                },
            )*
        }

        impl Call {
            /// The catalog name of this call's operation.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Call::$variant { .. } => $name,)*
                }
            }

            /// Splits the call into type arguments and tagged value arguments, both in slot order.
            pub(crate) fn into_parts(
                self,
            ) -> (Vec<$crate::types::TypeTag>, Vec<$crate::types::TransactionArgument>) {
                match self {
                    $(
                        Call::$variant { $($tparam,)* $($param,)* } => (
                            vec![$($tparam),*],
                            vec![$($crate::primitive::Primitive::into_argument($param)),*],
                        ),
                    )*
                }
            }
        }

        #[allow(unused_variables)]
        pub(crate) static ENTRIES: &[$crate::catalog::CatalogEntry] = &[
            $(
                $crate::catalog::CatalogEntry {
                    name: $name,
                    slots: &[
                        $($crate::catalog::Slot::type_param(stringify!($tparam)),)*
                        $($crate::catalog::Slot::value(
                            stringify!($param),
                            <$pty as $crate::primitive::Primitive>::SEMANTIC,
                        ),)*
                    ],
                    script_code: $code,
                    module: $module,
                    function: $name,
                    decode: |args| {
                        Ok(Call::$variant {
                            $($tparam: args.type_arg()?,)*
                            $($param: args.value::<$pty>()?,)*
                        })
                    },
                },
            )*
        ];
    };
}
