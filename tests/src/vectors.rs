//! Known-answer vectors for secp256k1 encodings and ECDSA.
//!
//! Secrets and digests are hex integers; encodings are hex byte strings.

use bitecc_params::{Network, SecFormat};

/// `secret·G` in SEC form
pub struct SecVector {
    pub secret: &'static str,
    pub format: SecFormat,
    pub sec: &'static str,
}

pub const SEC_VECTORS: &[SecVector] = &[
    SecVector {
        secret: "1388", // 5000
        format: SecFormat::Uncompressed,
        sec: "04ffe558e388852f0120e46af2d1b370f85854a8eb0841811ece0e3e03d282d57c\
              315dc72890a4f10a1481c031b03b351b0dc79901ca18a00cf009dbdb157a1d10",
    },
    SecVector {
        secret: "76e54a40efb620", // 2018^5
        format: SecFormat::Uncompressed,
        sec: "04027f3da1918455e03c46f659266a1bb5204e959db7364d2f473bdf8f0a13cc9d\
              ff87647fd023c13b4a4994f17691895806e1b40b57f4fd22581a4f46851f3b06",
    },
    SecVector {
        secret: "1389", // 5001
        format: SecFormat::Compressed,
        sec: "0357a4f368868a8a6d572991e484e664810ff14c05c0fa023275251151fe0e53d1",
    },
    SecVector {
        secret: "7730c781f7ae53", // 2019^5
        format: SecFormat::Compressed,
        sec: "02933ec2d2b111b92737ec12f1c5d20f3233a0ad21cd8b36d0bca7a0cfa5cb8701",
    },
    SecVector {
        secret: "1",
        format: SecFormat::Compressed,
        sec: "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
    },
];

/// `secret·G` as a Base58Check address
pub struct AddressVector {
    pub secret: &'static str,
    pub format: SecFormat,
    pub network: Network,
    pub address: &'static str,
}

pub const ADDRESS_VECTORS: &[AddressVector] = &[
    AddressVector {
        secret: "138a", // 5002
        format: SecFormat::Uncompressed,
        network: Network::Testnet,
        address: "mmTPbXQFxboEtNRkwfh6K51jvdtHLxGeMA",
    },
    AddressVector {
        secret: "777c6b16216400", // 2020^5
        format: SecFormat::Compressed,
        network: Network::Testnet,
        address: "mopVkxp8UhXqRYbCYJsbeE1h1fiF64jcoH",
    },
    AddressVector {
        secret: "12345deadbeef",
        format: SecFormat::Compressed,
        network: Network::Mainnet,
        address: "1F1Pn2y6pDb68E5nYJJeba4TLg2U7B6KF1",
    },
    AddressVector {
        secret: "1",
        format: SecFormat::Uncompressed,
        network: Network::Mainnet,
        address: "1EHNa6Q4Jz2uvNExL497mE43ikXhwF6kZm",
    },
];

/// A secret exported as WIF
pub struct WifVector {
    pub secret: &'static str,
    pub format: SecFormat,
    pub network: Network,
    pub wif: &'static str,
}

pub const WIF_VECTORS: &[WifVector] = &[
    WifVector {
        secret: "138b", // 5003
        format: SecFormat::Compressed,
        network: Network::Testnet,
        wif: "cMahea7zqjxrtgAbB7LSGbcQUr1uX1ojuat9jZodMN8rFTv2sfUK",
    },
    WifVector {
        secret: "77c8350c02b595", // 2021^5
        format: SecFormat::Uncompressed,
        network: Network::Testnet,
        wif: "91avARGdfge8E4tZfYLoxeJ5sGBdNJQH4kvjpWAxgzczjbCwxic",
    },
    WifVector {
        secret: "54321deadbeef",
        format: SecFormat::Compressed,
        network: Network::Mainnet,
        wif: "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgiuQJv1h8Ytr2S53a",
    },
    WifVector {
        secret: "1",
        format: SecFormat::Uncompressed,
        network: Network::Mainnet,
        wif: "5HpHagT65TZzG1PH3CSu63k8DbpvD8s5ip4nEB3kEsreAnchuDf",
    },
];

/// A signature that must verify under the given public point
pub struct VerifyVector {
    pub px: &'static str,
    pub py: &'static str,
    pub z: &'static str,
    pub r: &'static str,
    pub s: &'static str,
}

pub const VERIFY_VECTORS: &[VerifyVector] = &[VerifyVector {
    px: "04519fac3d910ca7e7138f7013706f619fa8f033e6ec6e09370ea38cee6a7574",
    py: "82b51eab8c27c66e26c858a079bcdf4f1ada34cec420cafc7eac1a42216fb6c4",
    z: "bc62d4b80d9e36da29c16c5d4d9f11731f36052c72401a76c23c0fb5a9b74423",
    r: "37206a0610995c58074999cb9767b87af4c4978db68c06e8e6e81d282047a7c6",
    s: "8ca63759c1157ebeaec0d03cecca119fc9a75bf8e6d0fa65c841c8e2738cdaec",
}];

/// Signing with a fixed nonce, and the resulting DER
pub struct SignVector {
    pub secret: &'static str,
    pub nonce: &'static str,
    pub z: &'static str,
    pub der: &'static str,
}

pub const SIGN_VECTORS: &[SignVector] = &[SignVector {
    secret: "3039", // 12345
    nonce: "499602d2", // 1234567890
    z: "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
    der: "304402202b698a0f0a4041b77e63488ad48c23e8e8838dd1fb7520408b121697b782ef22\
          022034501ed1fa6e443097a4c798aef91939dc6387e6283396bdaa15a17ba571396e",
}];

/// DER encodings that must be rejected with a signature-format error
pub const MALFORMED_DER: &[(&str, &str)] = &[
    ("empty", ""),
    ("wrong marker", "3106020101020101"),
    ("declared length too long", "3007020101020101"),
    ("declared length too short", "3005020101020101"),
    ("missing integer marker", "3006030101020101"),
    ("integer overruns", "3006020501020101"),
    ("empty integer", "30050200020101"),
    ("negative integer", "3006020181020101"),
    ("non-minimal padding", "300702020001020101"),
    ("trailing bytes", "300602010102010100"),
    ("zero r", "3006020100020101"),
    (
        "unpadded 33-byte integer",
        "30260221011111111111111111111111111111111111111111111111111111111111111111020101",
    ),
];
