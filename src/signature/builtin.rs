// Wed Jan 14 2026 - Alex

use crate::signature::{ElementWidth, SignatureKind};
use crate::signature::SignatureKind::{Dense, Sparse};

pub(crate) enum Values {
    Numbers(ElementWidth, &'static [u64]),
    Text(&'static str),
}

pub(crate) struct BuiltinEntry {
    pub name: &'static str,
    pub algorithm: &'static str,
    pub kind: SignatureKind,
    pub values: Values,
}

const fn dword(name: &'static str, algorithm: &'static str, kind: SignatureKind, values: &'static [u64]) -> BuiltinEntry {
    BuiltinEntry { name, algorithm, kind, values: Values::Numbers(ElementWidth::W4, values) }
}

const fn qword(name: &'static str, algorithm: &'static str, kind: SignatureKind, values: &'static [u64]) -> BuiltinEntry {
    BuiltinEntry { name, algorithm, kind, values: Values::Numbers(ElementWidth::W8, values) }
}

const fn bytes(name: &'static str, algorithm: &'static str, values: &'static [u64]) -> BuiltinEntry {
    BuiltinEntry { name, algorithm, kind: SignatureKind::Dense, values: Values::Numbers(ElementWidth::W1, values) }
}

const fn text(name: &'static str, algorithm: &'static str, value: &'static str) -> BuiltinEntry {
    BuiltinEntry { name, algorithm, kind: SignatureKind::Dense, values: Values::Text(value) }
}

// Hash initial states and round tables

const SHA1_H0: &[u64] = &[0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

const SHA224_H0: &[u64] = &[
    0xC1059ED8, 0x367CD507, 0x3070DD17, 0xF70E5939,
    0xFFC00B31, 0x68581511, 0x64F98FA7, 0xBEFA4FA4,
];

const SHA256_H0: &[u64] = &[
    0x6A09E667, 0xBB67AE85, 0x3C6EF372, 0xA54FF53A,
    0x510E527F, 0x9B05688C, 0x1F83D9AB, 0x5BE0CD19,
];

const SHA256_K: &[u64] = &[
    0x428A2F98, 0x71374491, 0xB5C0FBCF, 0xE9B5DBA5, 0x3956C25B, 0x59F111F1, 0x923F82A4, 0xAB1C5ED5,
    0xD807AA98, 0x12835B01, 0x243185BE, 0x550C7DC3, 0x72BE5D74, 0x80DEB1FE, 0x9BDC06A7, 0xC19BF174,
    0xE49B69C1, 0xEFBE4786, 0x0FC19DC6, 0x240CA1CC, 0x2DE92C6F, 0x4A7484AA, 0x5CB0A9DC, 0x76F988DA,
    0x983E5152, 0xA831C66D, 0xB00327C8, 0xBF597FC7, 0xC6E00BF3, 0xD5A79147, 0x06CA6351, 0x14292967,
    0x27B70A85, 0x2E1B2138, 0x4D2C6DFC, 0x53380D13, 0x650A7354, 0x766A0ABB, 0x81C2C92E, 0x92722C85,
    0xA2BFE8A1, 0xA81A664B, 0xC24B8B70, 0xC76C51A3, 0xD192E819, 0xD6990624, 0xF40E3585, 0x106AA070,
    0x19A4C116, 0x1E376C08, 0x2748774C, 0x34B0BCB5, 0x391C0CB3, 0x4ED8AA4A, 0x5B9CCA4F, 0x682E6FF3,
    0x748F82EE, 0x78A5636F, 0x84C87814, 0x8CC70208, 0x90BEFFFA, 0xA4506CEB, 0xBEF9A3F7, 0xC67178F2,
];

const SHA384_H0: &[u64] = &[
    0xCBBB9D5DC1059ED8, 0x629A292A367CD507, 0x9159015A3070DD17, 0x152FECD8F70E5939,
    0x67332667FFC00B31, 0x8EB44A8768581511, 0xDB0C2E0D64F98FA7, 0x47B5481DBEFA4FA4,
];

const SHA512_H0: &[u64] = &[
    0x6A09E667F3BCC908, 0xBB67AE8584CAA73B, 0x3C6EF372FE94F82B, 0xA54FF53A5F1D36F1,
    0x510E527FADE682D1, 0x9B05688C2B3E6C1F, 0x1F83D9ABFB41BD6B, 0x5BE0CD19137E2179,
];

const SHA512_224_H0: &[u64] = &[
    0x8C3D37C819544DA2, 0x73E1996689DCD4D6, 0x1DFAB7AE32FF9C82, 0x679DD514582F9FCF,
    0x0F6D2B697BD44DA8, 0x77E36F7304C48942, 0x3F9D85A86A1D36C8, 0x1112E6AD91D692A1,
];

const SHA512_256_H0: &[u64] = &[
    0x22312194FC2BF72C, 0x9F555FA3C84C64C2, 0x2393B86B6F53B151, 0x963877195940EABD,
    0x96283EE2A88EFFE3, 0xBE5E1E2553863992, 0x2B0199FC2C85B8AA, 0x0EB72DDC81C52CA2,
];

const MD5_T: &[u64] = &[
    0xD76AA478, 0xE8C7B756, 0x242070DB, 0xC1BDCEEE, 0xF57C0FAF, 0x4787C62A, 0xA8304613, 0xFD469501,
    0x698098D8, 0x8B44F7AF, 0xFFFF5BB1, 0x895CD7BE, 0x6B901122, 0xFD987193, 0xA679438E, 0x49B40821,
    0xF61E2562, 0xC040B340, 0x265E5A51, 0xE9B6C7AA, 0xD62F105D, 0x02441453, 0xD8A1E681, 0xE7D3FBC8,
    0x21E1CDE6, 0xC33707D6, 0xF4D50D87, 0x455A14ED, 0xA9E3E905, 0xFCEFA3F8, 0x676F02D9, 0x8D2A4C8A,
    0xFFFA3942, 0x8771F681, 0x6D9D6122, 0xFDE5380C, 0xA4BEEA44, 0x4BDECFA9, 0xF6BB4B60, 0xBEBFBC70,
    0x289B7EC6, 0xEAA127FA, 0xD4EF3085, 0x04881D05, 0xD9D4D039, 0xE6DB99E5, 0x1FA27CF8, 0xC4AC5665,
    0xF4292244, 0x432AFF97, 0xAB9423A7, 0xFC93A039, 0x655B59C3, 0x8F0CCC92, 0xFFEFF47D, 0x85845DD1,
    0x6FA87E4F, 0xFE2CE6E0, 0xA3014314, 0x4E0811A1, 0xF7537E82, 0xBD3AF235, 0x2AD7D2BB, 0xEB86D391,
];

const MD5_INIT: &[u64] = &[0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476];

const SM3_T: &[u64] = &[
    0x79CC4519, 0xF3988A32, 0xE7311465, 0xCE6228CB, 0x9CC45197, 0x3988A32F, 0x7311465E, 0xE6228CBC,
    0xCC451979, 0x988A32F3, 0x311465E7, 0x6228CBCE, 0xC451979C, 0x88A32F39, 0x11465E73, 0x228CBCE6,
    0x9D8A7A87, 0x3B14F50F, 0x7629EA1E, 0xEC53D43C, 0xD8A7A879, 0xB14F50F3, 0x629EA1E7, 0xC53D43CE,
    0x8A7A879D, 0x14F50F3B, 0x29EA1E76, 0x53D43CEC, 0xA7A879D8, 0x4F50F3B1, 0x9EA1E762, 0x3D43CEC5,
    0x7A879D8A, 0xF50F3B14, 0xEA1E7629, 0xD43CEC53, 0xA879D8A7, 0x50F3B14F, 0xA1E7629E, 0x43CEC53D,
    0x879D8A7A, 0x0F3B14F5, 0x1E7629EA, 0x3CEC53D4, 0x79D8A7A8, 0xF3B14F50, 0xE7629EA1, 0xCEC53D43,
];

// Block cipher tables

const BLOWFISH_P: &[u64] = &[
    0x243F6A88, 0x85A308D3, 0x13198A2E, 0x03707344, 0xA4093822, 0x299F31D0,
    0x082EFA98, 0xEC4E6C89, 0x452821E6, 0x38D01377, 0xBE5466CF, 0x34E90C6C,
    0xC0AC29B7, 0xC97C50DD, 0x3F84D5B5, 0xB5470917, 0x9216D5D9, 0x8979FB1B,
];

const AES_SBOX: &[u64] = &[
    0x63, 0x7C, 0x77, 0x7B, 0xF2, 0x6B, 0x6F, 0xC5, 0x30, 0x01, 0x67, 0x2B, 0xFE, 0xD7, 0xAB, 0x76,
    0xCA, 0x82, 0xC9, 0x7D, 0xFA, 0x59, 0x47, 0xF0, 0xAD, 0xD4, 0xA2, 0xAF, 0x9C, 0xA4, 0x72, 0xC0,
    0xB7, 0xFD, 0x93, 0x26, 0x36, 0x3F, 0xF7, 0xCC, 0x34, 0xA5, 0xE5, 0xF1, 0x71, 0xD8, 0x31, 0x15,
    0x04, 0xC7, 0x23, 0xC3, 0x18, 0x96, 0x05, 0x9A, 0x07, 0x12, 0x80, 0xE2, 0xEB, 0x27, 0xB2, 0x75,
    0x09, 0x83, 0x2C, 0x1A, 0x1B, 0x6E, 0x5A, 0xA0, 0x52, 0x3B, 0xD6, 0xB3, 0x29, 0xE3, 0x2F, 0x84,
    0x53, 0xD1, 0x00, 0xED, 0x20, 0xFC, 0xB1, 0x5B, 0x6A, 0xCB, 0xBE, 0x39, 0x4A, 0x4C, 0x58, 0xCF,
    0xD0, 0xEF, 0xAA, 0xFB, 0x43, 0x4D, 0x33, 0x85, 0x45, 0xF9, 0x02, 0x7F, 0x50, 0x3C, 0x9F, 0xA8,
    0x51, 0xA3, 0x40, 0x8F, 0x92, 0x9D, 0x38, 0xF5, 0xBC, 0xB6, 0xDA, 0x21, 0x10, 0xFF, 0xF3, 0xD2,
    0xCD, 0x0C, 0x13, 0xEC, 0x5F, 0x97, 0x44, 0x17, 0xC4, 0xA7, 0x7E, 0x3D, 0x64, 0x5D, 0x19, 0x73,
    0x60, 0x81, 0x4F, 0xDC, 0x22, 0x2A, 0x90, 0x88, 0x46, 0xEE, 0xB8, 0x14, 0xDE, 0x5E, 0x0B, 0xDB,
    0xE0, 0x32, 0x3A, 0x0A, 0x49, 0x06, 0x24, 0x5C, 0xC2, 0xD3, 0xAC, 0x62, 0x91, 0x95, 0xE4, 0x79,
    0xE7, 0xC8, 0x37, 0x6D, 0x8D, 0xD5, 0x4E, 0xA9, 0x6C, 0x56, 0xF4, 0xEA, 0x65, 0x7A, 0xAE, 0x08,
    0xBA, 0x78, 0x25, 0x2E, 0x1C, 0xA6, 0xB4, 0xC6, 0xE8, 0xDD, 0x74, 0x1F, 0x4B, 0xBD, 0x8B, 0x8A,
    0x70, 0x3E, 0xB5, 0x66, 0x48, 0x03, 0xF6, 0x0E, 0x61, 0x35, 0x57, 0xB9, 0x86, 0xC1, 0x1D, 0x9E,
    0xE1, 0xF8, 0x98, 0x11, 0x69, 0xD9, 0x8E, 0x94, 0x9B, 0x1E, 0x87, 0xE9, 0xCE, 0x55, 0x28, 0xDF,
    0x8C, 0xA1, 0x89, 0x0D, 0xBF, 0xE6, 0x42, 0x68, 0x41, 0x99, 0x2D, 0x0F, 0xB0, 0x54, 0xBB, 0x16,
];

/// Contiguous tables and single operand constants.
pub(crate) static DENSE: &[BuiltinEntry] = &[
    dword("SHA1_H0", "SHA1", Dense, SHA1_H0),
    dword("SHA224_H0", "SHA224", Dense, SHA224_H0),
    dword("SHA256_H0", "SHA256", Dense, SHA256_H0),
    dword("SHA256_K", "SHA256", Dense, SHA256_K),
    qword("SHA384_H0", "SHA384", Dense, SHA384_H0),
    qword("SHA512_H0", "SHA512", Dense, SHA512_H0),
    dword("MD5_T", "MD5", Dense, MD5_T),
    dword("BLOWFISH_P", "Blowfish", Dense, BLOWFISH_P),
    bytes("AES_SBOX", "AES", AES_SBOX),
    text("BASE64_ALPHABET", "Base64", "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/"),
    text("SALSA20_SIGMA", "Salsa20/ChaCha", "expand 32-byte k"),
    text("SALSA20_TAU", "Salsa20/ChaCha", "expand 16-byte k"),
    dword("TEA_DELTA", "TEA", Dense, &[0x9E3779B9]),
    dword("TEA_ALTERNATIVE_DELTA", "TEA", Dense, &[0x61C88647]),
    dword("CRC32_Normal", "CRC32", Dense, &[0x04C11DB7]),
    dword("CRC32_Reversed", "CRC32", Dense, &[0xEDB88320]),
    dword("CRC32_Reciprocal", "CRC32", Dense, &[0xDB710641]),
    dword("CRC32_Reversed_Reciprocal", "CRC32", Dense, &[0x82608EDB]),
    dword("CRC32_C_Normal", "CRC32_C", Dense, &[0x1EDC6F41]),
    dword("CRC32_C_Reversed", "CRC32_C", Dense, &[0x82F63B78]),
    dword("CRC32_C_Reciprocal", "CRC32_C", Dense, &[0x05EC76F1]),
    dword("CRC32_C_Reversed_Reciprocal", "CRC32_C", Dense, &[0x8F6E37A0]),
    dword("CRC32_K_Normal", "CRC32_K", Dense, &[0x741B8CD7]),
    dword("CRC32_K_Reversed", "CRC32_K", Dense, &[0xEB31D82E]),
    dword("CRC32_K_Reciprocal", "CRC32_K", Dense, &[0xD663B05D]),
    dword("CRC32_K_Reversed_Reciprocal", "CRC32_K", Dense, &[0xBA0DC66B]),
    dword("CRC32_K2_Normal", "CRC32_K2", Dense, &[0x32583499]),
    dword("CRC32_K2_Reversed", "CRC32_K2", Dense, &[0x992C1A4C]),
    dword("CRC32_Q_Normal", "CRC32_Q", Dense, &[0x814141AB]),
    dword("CRC32_Q_Reversed", "CRC32_Q", Dense, &[0xD5828281]),
    dword("CRC32_Q_Reciprocal", "CRC32_Q", Dense, &[0xAB050503]),
    dword("CRC32_Q_Reversed_Reciprocal", "CRC32_Q", Dense, &[0xC0A0A0D5]),
    qword("CRC64_ECMA_Normal", "CRC64-ECMA", Dense, &[0x42F0E1EBA9EA3693]),
    qword("CRC64_ECMA_Reversed", "CRC64-ECMA", Dense, &[0xC96C5795D7870F42]),
    qword("CRC64_ECMA_Reciprocal", "CRC64-ECMA", Dense, &[0x92D8AF2BAF0E1E85]),
    qword("CRC64_ECMA_Reversed_Reciprocal", "CRC64-ECMA", Dense, &[0xA17870F5D4F51B49]),
    dword("MurmurHash_1", "MurmurHash", Dense, &[0xC6A4A793]),
    dword("MurmurHash_2", "MurmurHash", Dense, &[0x5BD1E995]),
    qword("MurmurHash64A_2", "MurmurHash", Dense, &[0xC6A4A7935BD1E995]),
    dword("ZipCrypto_PRNG", "ZipCrypto/Delphi_PRNG", Dense, &[0x08088405]),
    dword("MT19937_coefficient_a", "Mersenne Twister", Dense, &[0x9908B0DF]),
    qword("MT19937_64_coefficient_a", "Mersenne Twister", Dense, &[0xB5026F5AA96619E9]),
    dword("XXH_PRIME32_1", "xxHash32", Dense, &[0x9E3779B1]),
    dword("XXH_PRIME32_2", "xxHash32", Dense, &[0x85EBCA77]),
    dword("XXH_PRIME32_3", "xxHash32", Dense, &[0xC2B2AE3D]),
    dword("XXH_PRIME32_4", "xxHash32", Dense, &[0x27D4EB2F]),
    dword("XXH_PRIME32_5", "xxHash32", Dense, &[0x165667B1]),
    qword("XXH_PRIME64_1", "xxHash64", Dense, &[0x9E3779B185EBCA87]),
    qword("XXH_PRIME64_2", "xxHash64", Dense, &[0xC2B2AE3D27D4EB4F]),
    qword("XXH_PRIME64_3", "xxHash64", Dense, &[0x165667B19E3779F9]),
    qword("XXH_PRIME64_4", "xxHash64", Dense, &[0x85EBCA77C2B2AE63]),
    qword("XXH_PRIME64_5", "xxHash64", Dense, &[0x27D4EB2F165667C5]),
    qword("XXH3_avalanche", "XXH3", Dense, &[0x165667919E3779F9]),
    qword("XXH3_rrmxmx", "XXH3", Dense, &[0x9FB21C651E98DF25]),
    qword("MD6_S_Init", "MD6", Dense, &[0x0123456789ABCDEF]),
    qword("MD6_S_Recur", "MD6", Dense, &[0x7311C2812425CFA0]),
    qword("SIMON64_3W_SIMON128_2W", "SIMON64/128", Dense, &[0x7369F885192C0EF5]),
    qword("SIMON64_4W_SIMON128_3W", "SIMON64/128", Dense, &[0xFC2CE51207A635DB]),
    qword("SIMON128_4W", "SIMON64/128", Dense, &[0xFDC94C3A046D678B]),
    dword("Sosemanuk_state10", "Sosemanuk", Dense, &[0x54655307]),
    qword("Threefish_rkey", "Threefish", Dense, &[0x1BD11BDAA9FC1A22]),
];

/// Element sets that compilers rarely keep adjacent: immediates spread over a
/// function body, or initial states written field by field.
pub(crate) static SPARSE: &[BuiltinEntry] = &[
    dword("SHA1_H0", "SHA1/RMD160", Sparse, SHA1_H0),
    dword("SHA224_H0", "SHA224", Sparse, SHA224_H0),
    dword("SHA256_H0", "SHA256/BLAKE2s_IV", Sparse, SHA256_H0),
    qword("SHA384_H0", "SHA384", Sparse, SHA384_H0),
    qword("SHA512_H0", "SHA512/BLAKE2b_IV", Sparse, SHA512_H0),
    dword("RC5_RC6_PQ", "RC5/RC6", Sparse, &[0xB7E15163, 0x9E3779B9]),
    qword("RC5_RC6_64_PQ", "RC5/RC6", Sparse, &[0xB7E151628AED2A6B, 0x9E3779B97F4A7C15]),
    dword("MD5_Transform", "MD5", Sparse, MD5_T),
    dword("MD5_initState", "MD4/MD5/RMD128", Sparse, MD5_INIT),
    dword("aPLib_magic", "aPLib", Sparse, &[0x32335041]),
    dword("MurmurHash_3_fmix32", "MurmurHash", Sparse, &[0x85EBCA6B, 0xC2B2AE35]),
    qword("MurmurHash_3_fmix64", "MurmurHash", Sparse, &[0xFF51AFD7ED558CCD, 0xC4CEB9FE1A85EC53]),
    dword("MurmurHash3_x86_32", "MurmurHash", Sparse, &[0xCC9E2D51, 0x1B873593, 0xE6546B64]),
    dword("MurmurHash3_x86_128", "MurmurHash", Sparse, &[
        0x239B961B, 0xAB0E9789, 0x38B34AE5, 0xA1E38B93,
        0x561CCD1B, 0x0BCAA747, 0x96CD1C35, 0x32AC3B17,
    ]),
    // 64-bit constants split into low/high dwords
    dword("MurmurHash3_x64_128", "MurmurHash", Sparse, &[
        0x114253D5, 0x87C37B91, 0x2745937F, 0x4CF5AD43, 0x52DCE729, 0x38495AB5,
    ]),
    dword("ZipCrypto_Init", "ZipCrypto", Sparse, &[0x12345678, 0x23456789, 0x34567890]),
    dword("RandomGen_Constant_32", "RandomGenerator", Sparse, &[0x0019660D, 0x3C6EF35F]),
    qword("RandomGen_Constant_64", "RandomGenerator", Sparse, &[0x27BB2EE6087B0B0F, 0xB504F32D]),
    dword("MT19937_coefficient_dbc", "Mersenne Twister", Sparse, &[0xFFFFFFFF, 0x9D2C5680, 0xEFC60000]),
    qword("MT19937_64_coefficient_dbc", "Mersenne Twister", Sparse, &[
        0x5555555555555555, 0x71D67FFFEDA60000, 0xFFF7EEE000000000,
    ]),
    qword("NumberOfBit1_64", "Number of bits is 1", Sparse, &[
        0x5555555555555555, 0x3333333333333333, 0x0F0F0F0F0F0F0F0F,
    ]),
    dword("BLAKE3_IV", "BLAKE3", Sparse, &[0x6A09E667, 0xBB67AE85, 0x3C6EF372, 0xA54FF53A]),
    dword("THREEWAY_SwapBits", "3-Way", Sparse, &[0x55555555, 0x33333333, 0x0F0F0F0F]),
    dword("RC4_Key_Init", "RC4", Sparse, &[0xFFFEFDFC, 0xFBFAF9F8, 0xF7F6F5F4, 0xF3F2F1F0]),
    dword("HavalDigest_Init", "Haval", Sparse, &[
        0x243F6A88, 0x85A308D3, 0x13198A2E, 0x03707344,
        0xA4093822, 0x299F31D0, 0x082EFA98, 0xEC4E6C89,
    ]),
    dword("MD4_Transform", "MD4", Sparse, &[0x5A827999, 0x6ED9EBA1]),
    dword("RMD128_Transform", "RMD128", Sparse, &[
        0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0x50A28BE6, 0x5C4DD124, 0x6D703EF3,
    ]),
    dword("RMD160_Transform", "RMD160/RMD320", Sparse, &[
        0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xA953FD4E,
        0x50A28BE6, 0x5C4DD124, 0x6D703EF3, 0x7A6D76E9,
    ]),
    dword("RMD256_Init", "RMD256", Sparse, &[
        0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476,
        0x76543210, 0xFEDCBA98, 0x89ABCDEF, 0x01234567,
    ]),
    dword("RMD256_Transform", "RMD256", Sparse, &[
        0x50A28BE6, 0x5A827999, 0x5C4DD124, 0x6ED9EBA1, 0x6D703EF3, 0x8F1BBCDC,
    ]),
    dword("RMD320_Init", "RMD320", Sparse, &[
        0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0,
        0x76543210, 0xFEDCBA98, 0x89ABCDEF, 0x01234567, 0x3C2D1E0F,
    ]),
    dword("SHA1_Transform", "SHA1", Sparse, &[0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xCA62C1D6]),
    dword("Tiger_Key_Schedule", "Tiger", Sparse, &[0xA5A5A5A5, 0xA5A5A5A5, 0x89ABCDEF, 0x01234567]),
    qword("SHA512_224_initState", "SHA512_224", Sparse, SHA512_224_H0),
    qword("SHA512_256_initState", "SHA512_256", Sparse, SHA512_256_H0),
    dword("LC_RNG", "LC_RNG", Sparse, &[2147483647, 44488, 48271, 3399]),
    dword("LC_RNG_ORG_NUM", "LC_RNG", Sparse, &[2147483647, 127773, 16807, 2836]),
    qword("SipHash_initState", "SipHash", Sparse, &[
        0x736F6D6570736575, 0x646F72616E646F6D, 0x6C7967656E657261, 0x7465646279746573,
    ]),
    dword("Rabbit_NextState", "Rabbit", Sparse, &[0x4D34D34D, 0xD34D34D3, 0x34D34D34]),
    dword("SIMECK32_consts", "SIMECK32", Sparse, &[0xFFFC, 0x9A42BB1F]),
    dword("SM3_CXX", "SM3", Sparse, SM3_T),
    dword("SM4_wspace", "SM4", Sparse, &[0xA3B1BAC6, 0x56AA3350, 0x677D9197, 0xB27022DC]),
    qword("Tiger_initState", "Tiger", Sparse, &[0x0123456789ABCDEF, 0xFEDCBA9876543210, 0xF096A5B4C3B2E187]),
];
