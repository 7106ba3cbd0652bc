//! Program bytes identifying each legacy script.
//!
//! These are placeholder programs: a Move bytecode header followed by filler
//! bytes unique to each operation. They are only ever compared for equality,
//! never interpreted. Replace them with the real compiled scripts before
//! exchanging payloads with a chain.

pub const ADD_CURRENCY_TO_ACCOUNT: &[u8] = &[
    161, 28, 235, 11, 1, 0, 0, 0, 87, 132, 193, 217, 169, 213, 61, 131,
    142, 76, 202, 105, 41, 151, 167, 196, 74, 105, 122, 8, 192, 129, 158, 141,
    170, 235, 17, 117, 111, 240, 15, 211, 120, 20, 141, 203, 205, 116, 103, 78,
    26, 78, 219, 89, 31, 67, 10, 141, 79, 142, 212, 91, 44, 89, 210, 110,
    5, 249, 15, 133, 52, 92, 233, 29, 248, 113, 10, 23, 151, 228, 209, 97,
    22, 238, 227, 156,
];

pub const ADD_RECOVERY_ROTATION_CAPABILITY: &[u8] = &[
    161, 28, 235, 11, 1, 0, 0, 0, 238, 150, 238, 212, 123, 94, 228, 95,
    244, 90, 127, 185, 36, 40, 184, 194, 6, 103, 24, 58, 134, 92, 167, 254,
    99, 90, 26, 242, 95, 234, 87, 95, 253, 104, 239, 217, 4, 146, 123, 90,
    15, 60, 37, 246, 249, 250, 170, 163, 232, 190, 181, 10, 175, 88, 113, 86,
    63, 215, 142, 116, 174,
];

pub const ADD_VALIDATOR_AND_RECONFIGURE: &[u8] = &[
    161, 28, 235, 11, 1, 0, 0, 0, 214, 87, 152, 233, 66, 217, 111, 34,
    248, 18, 88, 5, 242, 130, 142, 206, 105, 29, 52, 250, 55, 182, 240, 82,
    42, 20, 19, 58, 111, 35, 20, 95, 159, 226, 65, 240, 222, 108, 79, 7,
    221, 99, 65, 52, 187, 39, 13, 102, 242, 77, 5, 110, 215, 220, 104, 118,
    172, 254, 214, 83, 123, 231, 236, 99, 158, 1, 39, 203, 90, 158, 172, 19,
    228, 130, 106,
];

pub const BURN: &[u8] = &[
    161, 28, 235, 11, 1, 0, 0, 0, 99, 75, 109, 73, 41, 34, 151, 134,
    96, 122, 82, 141, 113, 100, 157, 191, 242, 79, 215, 30, 156, 139, 173, 90,
    28, 85, 65, 165, 211, 88, 235, 43, 121, 123, 216, 113, 255, 192, 91, 253,
    144, 62, 225, 179, 102, 138, 124, 27, 67, 7, 173, 150, 252, 196, 222, 57,
    143, 250, 29, 56, 241, 248, 111, 116, 222, 150, 100, 113, 47, 114, 83, 209,
    103, 32, 35, 60, 143, 6, 104, 75, 195, 31, 98, 69, 14,
];

pub const BURN_TXN_FEES: &[u8] = &[
    161, 28, 235, 11, 1, 0, 0, 0, 180, 208, 99, 19, 43, 14, 213, 179,
    231, 252, 224, 160, 234, 75, 64, 142, 180, 119, 121, 3, 21, 20, 195, 0,
    57, 179, 223, 26, 71, 183, 197, 241, 163, 69, 153, 113, 243, 95, 146, 49,
    2, 224, 88, 70, 111, 179, 120, 115, 14, 60, 113, 185, 171, 30, 148, 196,
    34, 74, 9, 203, 24, 77, 132, 52, 80, 94, 226, 79, 93, 223, 109, 60,
    68, 19, 170, 239, 251, 73, 34,
];

pub const CANCEL_BURN: &[u8] = &[
    161, 28, 235, 11, 1, 0, 0, 0, 70, 223, 110, 14, 112, 103, 67, 141,
    132, 82, 0, 72, 132, 148, 221, 12, 192, 252, 1, 222, 215, 145, 207, 23,
    9, 191, 153, 68, 75, 197, 120, 81, 211, 37, 249, 166, 33, 254, 217, 42,
    203, 107, 76, 26, 175, 189, 198, 61, 217, 255, 68, 159, 242, 90, 110, 244,
    75, 239, 84, 19, 138, 146,
];

pub const CREATE_CHILD_VASP_ACCOUNT: &[u8] = &[
    161, 28, 235, 11, 1, 0, 0, 0, 187, 42, 229, 214, 41, 162, 174, 50,
    131, 254, 116, 251, 195, 130, 181, 212, 30, 43, 67, 227, 115, 82, 153, 166,
    123, 10, 4, 33, 225, 255, 102, 103, 217, 93, 206, 146, 8, 52, 170, 6,
    150, 248, 247, 101, 73, 17, 142, 219, 88, 204, 76, 82,
];

pub const CREATE_DESIGNATED_DEALER: &[u8] = &[
    161, 28, 235, 11, 1, 0, 0, 0, 51, 7, 211, 184, 169, 167, 200, 91,
    52, 236, 33, 76, 66, 118, 37, 79, 141, 223, 74, 19, 250, 176, 28, 30,
    194, 253, 138, 254, 219, 166, 82, 123, 199, 137, 244, 49, 194, 140, 197, 38,
    4, 109, 180, 234, 47, 200, 235, 15, 45, 86, 249, 151, 81, 52, 74, 114,
    1,
];

pub const CREATE_PARENT_VASP_ACCOUNT: &[u8] = &[
    161, 28, 235, 11, 1, 0, 0, 0, 117, 167, 59, 195, 73, 153, 31, 36,
    244, 86, 241, 192, 61, 142, 19, 105, 200, 217, 244, 92, 72, 41, 178, 247,
    195, 45, 202, 251, 116, 95, 194, 225, 253, 34, 196, 143, 248, 141, 103, 89,
    229, 56, 231, 211, 239, 47, 190, 162, 84, 46,
];

pub const CREATE_RECOVERY_ADDRESS: &[u8] = &[
    161, 28, 235, 11, 1, 0, 0, 0, 64, 240, 152, 70, 235, 27, 191, 247,
    244, 243, 69, 23, 225, 61, 14, 92, 43, 119, 208, 173, 145, 186, 65, 197,
    66, 162, 218, 167, 60, 98, 41, 133, 24, 53, 36, 8, 114, 54, 114, 153,
    137, 49, 201, 230, 239, 82, 60, 49, 55, 20, 30, 76, 33, 66, 124, 91,
    245, 163,
];

pub const CREATE_VALIDATOR_ACCOUNT: &[u8] = &[
    161, 28, 235, 11, 1, 0, 0, 0, 84, 183, 37, 226, 204, 27, 226, 222,
    123, 180, 110, 172, 25, 117, 44, 235, 218, 105, 101, 88, 2, 163, 177, 213,
    74, 211, 183, 13, 103, 0, 60, 244, 117, 247, 80, 108, 227, 78, 159, 13,
    204, 238, 106, 20, 241, 192, 152, 101, 47, 50, 220, 250, 221, 62, 233, 143,
    212, 5, 156, 56, 209, 73, 222, 234, 234, 206, 53, 78, 104, 29, 94, 228,
    142, 246, 64, 96, 103,
];

pub const FREEZE_ACCOUNT: &[u8] = &[
    161, 28, 235, 11, 1, 0, 0, 0, 220, 122, 187, 226, 152, 59, 234, 102,
    99, 101, 11, 63, 127, 190, 133, 9, 14, 146, 26, 23, 227, 105, 59, 41,
    199, 66, 119, 18, 231, 181, 9, 226, 5, 20, 142, 144, 207, 76, 46, 187,
    217, 141, 221, 169, 212, 180, 36, 8, 95, 97, 199, 228, 249, 132, 68, 177,
    29, 104, 150, 138, 253, 188, 89,
];

pub const PEER_TO_PEER_WITH_METADATA: &[u8] = &[
    161, 28, 235, 11, 1, 0, 0, 0, 136, 184, 218, 165, 113, 161, 158, 174,
    175, 156, 27, 238, 225, 112, 165, 11, 109, 0, 121, 100, 168, 49, 27, 74,
    9, 239, 248, 237, 77, 0, 118, 202, 147, 94, 71, 120, 185, 160, 47, 99,
    215, 226, 78, 136, 40, 184, 153, 6, 137, 132, 168, 254, 188, 109, 125, 54,
    19, 253, 101, 174, 208, 242, 181, 145, 159, 184, 93, 51, 63, 57, 169,
];

pub const PREBURN: &[u8] = &[
    161, 28, 235, 11, 1, 0, 0, 0, 27, 119, 90, 90, 151, 128, 96, 41,
    102, 120, 198, 221, 14, 226, 27, 183, 91, 169, 205, 150, 139, 166, 169, 226,
    185, 122, 151, 93, 6, 143, 17, 83, 29, 11, 92, 61, 215, 73, 153, 96,
    175, 28, 134, 25, 126, 137, 66, 248, 87, 86, 139, 15, 204, 202, 74,
];

pub const REMOVE_VALIDATOR_AND_RECONFIGURE: &[u8] = &[
    161, 28, 235, 11, 1, 0, 0, 0, 84, 191, 124, 90, 155, 23, 8, 3,
    69, 90, 1, 176, 171, 34, 20, 85, 92, 66, 149, 189, 187, 54, 12, 221,
    8, 60, 12, 82, 134, 197, 219, 200, 244, 42, 226, 113, 212, 104, 131, 194,
    151, 53, 189, 234, 203, 119, 237, 10, 43, 195, 97, 202, 211, 227, 29, 29,
    57, 77, 47, 78, 22, 15, 239, 219, 27, 117, 116, 145, 0, 252, 120, 210,
    86, 114, 114, 18, 85, 228, 101,
];

pub const ROTATE_AUTHENTICATION_KEY: &[u8] = &[
    161, 28, 235, 11, 1, 0, 0, 0, 211, 2, 138, 165, 21, 51, 10, 70,
    230, 125, 155, 78, 85, 109, 243, 114, 162, 4, 9, 52, 174, 66, 227, 71,
    158, 56, 54, 101, 236, 173, 21, 12, 65, 142, 187, 186, 24, 120, 13, 162,
    225, 161, 26, 23, 174, 85, 147, 111, 37, 182, 180, 157, 179, 164, 188, 255,
    65, 129, 225, 115, 198, 93, 131, 4, 254, 214, 84, 125, 164, 86, 93, 219,
    75, 207, 54, 46, 110, 186, 93, 13, 205, 55, 131, 228,
];

pub const ROTATE_AUTHENTICATION_KEY_WITH_NONCE: &[u8] = &[
    161, 28, 235, 11, 1, 0, 0, 0, 200, 31, 73, 133, 202, 160, 239, 212,
    7, 212, 109, 5, 171, 0, 127, 5, 218, 88, 151, 116, 252, 159, 148, 100,
    139, 47, 153, 208, 143, 96, 12, 98, 103, 197, 28, 31, 85, 30, 152, 5,
    186, 165, 210, 97, 178, 135, 79, 42, 96, 72, 65, 102,
];

pub const ROTATE_DUAL_ATTESTATION_INFO: &[u8] = &[
    161, 28, 235, 11, 1, 0, 0, 0, 246, 242, 66, 85, 197, 61, 133, 246,
    26, 96, 108, 12, 151, 174, 110, 103, 95, 45, 38, 5, 4, 26, 157, 243,
    153, 123, 217, 135, 141, 142, 186, 229, 239, 101, 251, 142, 241, 62, 71, 126,
    131, 65, 78, 30, 199, 159, 233, 2, 76, 165, 71, 223, 1, 50, 145, 39,
    178, 197, 150, 23, 195, 237, 23, 98, 82, 138, 154, 94, 127, 200, 102, 105,
    134, 212, 54, 58, 153, 210, 191, 93, 205, 255, 249, 22, 78, 240, 166, 187,
    23, 164,
];

pub const SET_VALIDATOR_CONFIG_AND_RECONFIGURE: &[u8] = &[
    161, 28, 235, 11, 1, 0, 0, 0, 34, 205, 92, 37, 49, 83, 218, 30,
    65, 235, 25, 36, 59, 110, 21, 192, 57, 165, 52, 23, 245, 153, 26, 154,
    128, 92, 55, 81, 30, 147, 77, 137, 155, 200, 180, 235, 127, 152, 191, 243,
    73, 219, 183, 205, 142, 188, 17, 192, 142, 60, 17, 23, 170, 226, 34, 1,
    191, 139, 179,
];

pub const TIERED_MINT: &[u8] = &[
    161, 28, 235, 11, 1, 0, 0, 0, 201, 89, 236, 128, 5, 1, 41, 78,
    0, 134, 178, 189, 149, 233, 7, 26, 153, 76, 187, 224, 253, 79, 96, 50,
    9, 167, 200, 54, 221, 131, 80, 34, 233, 36, 152, 134, 33, 173, 240, 220,
    87, 188, 83, 218, 205, 73, 138, 175, 194, 137, 155,
];

pub const UNFREEZE_ACCOUNT: &[u8] = &[
    161, 28, 235, 11, 1, 0, 0, 0, 119, 82, 218, 109, 3, 250, 152, 0,
    112, 46, 169, 81, 101, 83, 185, 72, 152, 23, 51, 102, 105, 151, 165, 242,
    236, 32, 62, 83, 228, 122, 75, 90, 88, 115, 184, 86, 48, 28, 208, 88,
    204, 113, 51, 73, 121, 203, 10, 175, 132, 242, 68, 134, 15, 165, 166, 77,
    153, 25, 181, 39, 84, 41, 69, 45, 246, 232, 176, 224, 229, 136, 202, 36,
    196, 142, 229, 129, 216, 253, 127, 226, 250, 224,
];

pub const UPDATE_DUAL_ATTESTATION_LIMIT: &[u8] = &[
    161, 28, 235, 11, 1, 0, 0, 0, 15, 82, 18, 231, 76, 239, 205, 111,
    188, 45, 106, 54, 60, 154, 31, 18, 3, 61, 84, 123, 213, 49, 168, 95,
    131, 87, 166, 217, 197, 249, 35, 82, 241, 57, 19, 45, 110, 22, 111, 47,
    210, 39, 105, 89, 137, 78, 103, 78, 114, 175, 90, 147, 216, 50, 105, 190,
    135, 72, 225, 230, 45, 58, 243, 171, 117, 119, 99, 123, 192, 243, 133, 78,
    158,
];

pub const UPDATE_EXCHANGE_RATE: &[u8] = &[
    161, 28, 235, 11, 1, 0, 0, 0, 5, 54, 152, 171, 25, 102, 84, 203,
    96, 71, 32, 253, 219, 147, 42, 92, 64, 0, 184, 233, 103, 253, 118, 44,
    193, 59, 224, 231, 240, 34, 147, 77, 27, 150, 56, 155, 91, 224, 33, 221,
    157, 254, 112, 31, 117, 98, 80, 66, 123, 233, 128, 206, 132, 55, 62, 18,
    83,
];

pub const UPDATE_MINTING_ABILITY: &[u8] = &[
    161, 28, 235, 11, 1, 0, 0, 0, 135, 0, 204, 200, 244, 248, 49, 254,
    46, 40, 7, 152, 137, 119, 144, 201, 95, 234, 116, 177, 140, 251, 139, 49,
    48, 222, 158, 238, 100, 204, 2, 11, 89, 179, 43, 182, 219, 11, 25, 110,
    120, 127, 33, 20, 75, 202, 171, 220, 97, 113, 90, 240, 72, 48, 153, 220,
    83, 20, 100, 64, 190, 17, 151, 85, 119, 52, 142, 236, 0, 216, 2, 240,
    170,
];
