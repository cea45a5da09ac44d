//! Prefixes and options for Bitcoin-style string encodings

/// Address version byte for mainnet P2PKH addresses
pub const ADDRESS_VERSION_MAINNET: u8 = 0x00;

/// Address version byte for testnet P2PKH addresses
pub const ADDRESS_VERSION_TESTNET: u8 = 0x6f;

/// WIF prefix byte for mainnet private keys
pub const WIF_PREFIX_MAINNET: u8 = 0x80;

/// WIF prefix byte for testnet private keys
pub const WIF_PREFIX_TESTNET: u8 = 0xef;

/// Trailing WIF byte marking a key whose public point is SEC-compressed
pub const WIF_COMPRESSED_FLAG: u8 = 0x01;

/// The network an address or WIF string is meant for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Network {
    /// Bitcoin main network
    #[default]
    Mainnet,
    /// Bitcoin test network
    Testnet,
}

impl Network {
    /// Select a network from a `testnet` flag
    pub const fn from_testnet(testnet: bool) -> Self {
        if testnet {
            Network::Testnet
        } else {
            Network::Mainnet
        }
    }

    /// Version byte prepended to hash160 when deriving an address
    pub const fn address_version(self) -> u8 {
        match self {
            Network::Mainnet => ADDRESS_VERSION_MAINNET,
            Network::Testnet => ADDRESS_VERSION_TESTNET,
        }
    }

    /// Prefix byte of a WIF-encoded private key
    pub const fn wif_prefix(self) -> u8 {
        match self {
            Network::Mainnet => WIF_PREFIX_MAINNET,
            Network::Testnet => WIF_PREFIX_TESTNET,
        }
    }

    /// Inverse of [`Network::wif_prefix`]
    pub const fn from_wif_prefix(prefix: u8) -> Option<Self> {
        match prefix {
            WIF_PREFIX_MAINNET => Some(Network::Mainnet),
            WIF_PREFIX_TESTNET => Some(Network::Testnet),
            _ => None,
        }
    }
}

/// SEC serialization format of a public point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SecFormat {
    /// 33 bytes: parity prefix + x
    #[default]
    Compressed,
    /// 65 bytes: 0x04 + x + y
    Uncompressed,
}

impl SecFormat {
    /// Select a format from a `compressed` flag
    pub const fn from_compressed(compressed: bool) -> Self {
        if compressed {
            SecFormat::Compressed
        } else {
            SecFormat::Uncompressed
        }
    }

    /// True for [`SecFormat::Compressed`]
    pub const fn is_compressed(self) -> bool {
        matches!(self, SecFormat::Compressed)
    }
}
