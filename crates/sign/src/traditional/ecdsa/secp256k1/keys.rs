//! secp256k1 private keys, key pairs and the WIF encoding

use core::fmt;

use bitecc_algorithms::ec::k256::constants::{K256_SCALAR_SIZE, N};
use bitecc_algorithms::ec::k256::{self as ec, scalar_mult_base_g, Scalar, Secp256k1Point, MAX_RANDOM_DRAWS};
use bitecc_algorithms::encoding::base58;
use bitecc_algorithms::U256;
use bitecc_common::{EphemeralSecret, SecretBuffer};
use bitecc_params::utils::encoding::WIF_COMPRESSED_FLAG;
use bitecc_params::{Network, SecFormat};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::{debug, trace_span};
use zeroize::Zeroizing;

use super::Message;
use crate::error::{Error, Result, ResultExt};
use crate::traditional::ecdsa::common::Signature;

/// WIF payload without the compression flag: prefix byte and 32-byte secret
const WIF_PAYLOAD_SIZE: usize = 1 + K256_SCALAR_SIZE;

/// secp256k1 private key
///
/// Holds the secret d in `[1, n-1]` and the public point d·G. The secret
/// lives in a zeroizing buffer and leaves it only through [`hex`](Self::hex)
/// and [`wif`](Self::wif).
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    secret: SecretBuffer<K256_SCALAR_SIZE>,
    point: Secp256k1Point,
}

impl PrivateKey {
    /// Create a key from its secret; a secret outside `[1, n-1]` is a range error
    pub fn new(secret: U256) -> Result<Self> {
        if secret.is_zero() || secret >= N {
            return Err(Error::range("PrivateKey", "secret must lie in [1, n-1]"));
        }
        let point = Secp256k1Point::generator().mul(&secret);
        Ok(Self {
            secret: SecretBuffer::new(secret.to_be_bytes()),
            point,
        })
    }

    /// Create a key from a 32-byte big-endian secret
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let buffer = SecretBuffer::<K256_SCALAR_SIZE>::from_slice(bytes)?;
        let secret = Zeroizing::new(U256::from_be_slice(buffer.as_ref())?);
        Self::new(*secret)
    }

    /// The public point d·G
    pub fn public_point(&self) -> &Secp256k1Point {
        &self.point
    }

    fn secret_scalar(&self) -> EphemeralSecret<Scalar> {
        let mut bytes = Zeroizing::new([0u8; K256_SCALAR_SIZE]);
        bytes.copy_from_slice(self.secret.as_ref());
        EphemeralSecret::new(Scalar::reduce(&U256::from_be_bytes(*bytes)))
    }

    /// Sign with a nonce drawn from `rng`.
    ///
    /// Nonces that give k ≡ 0, r = 0 or s = 0 are discarded and redrawn.
    /// Fails only if the source keeps producing unusable nonces.
    pub fn sign<'a, R: CryptoRng + RngCore>(
        &self,
        message: impl Into<Message<'a>>,
        rng: &mut R,
    ) -> Result<Signature> {
        let _span = trace_span!("ecdsa_sign").entered();
        let z = message.into().to_scalar();
        for attempt in 0..MAX_RANDOM_DRAWS {
            let k = EphemeralSecret::new(U256::random(rng));
            match self.sign_digest(&z, &k) {
                Ok(signature) => return Ok(signature),
                Err(e) => debug!(attempt, reason = %e, "discarding nonce"),
            }
        }
        Err(Error::domain(
            "PrivateKey::sign",
            "random source never produced a usable nonce",
        ))
    }

    /// Sign with a nonce from the operating system's CSPRNG
    pub fn sign_os<'a>(&self, message: impl Into<Message<'a>>) -> Result<Signature> {
        self.sign(message, &mut OsRng)
    }

    /// Sign with a caller-chosen nonce.
    ///
    /// Reusing a nonce across messages reveals the secret. A nonce that
    /// gives k ≡ 0, r = 0 or s = 0 is a domain error.
    pub fn sign_with_nonce<'a>(&self, message: impl Into<Message<'a>>, k: &U256) -> Result<Signature> {
        self.sign_digest(&message.into().to_scalar(), k)
    }

    fn sign_digest(&self, z: &Scalar, k: &U256) -> Result<Signature> {
        let k = EphemeralSecret::new(Scalar::reduce(k));
        let k_inv = EphemeralSecret::new(k.invert()?);

        let r = match scalar_mult_base_g(&k).x() {
            Some(x) => Scalar::reduce(&x.to_u256()),
            None => return Err(Error::domain("ECDSA sign", "nonce point is at infinity")),
        };
        if r.is_zero() {
            return Err(Error::domain("ECDSA sign", "nonce gives r = 0"));
        }

        let d = self.secret_scalar();
        let mut s = (*z + r * *d) * *k_inv;
        if s.is_zero() {
            return Err(Error::domain("ECDSA sign", "nonce gives s = 0"));
        }
        if s.is_high() {
            s = -s;
        }
        Ok(Signature::from_scalars(r, s))
    }

    /// The secret as 64 lowercase hex digits
    pub fn hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(self.secret.as_ref()))
    }

    /// Wallet Import Format: Base58Check of prefix, secret and, for keys
    /// whose public point is SEC-compressed, a trailing `0x01`
    pub fn wif(&self, format: SecFormat, network: Network) -> Zeroizing<String> {
        let mut payload = Zeroizing::new(Vec::with_capacity(WIF_PAYLOAD_SIZE + 1));
        payload.push(network.wif_prefix());
        payload.extend_from_slice(self.secret.as_ref());
        if format.is_compressed() {
            payload.push(WIF_COMPRESSED_FLAG);
        }
        Zeroizing::new(base58::encode_with_checksum(&payload))
    }

    /// Decode a WIF string into the key, its SEC format and its network.
    ///
    /// All failures are reported as malformed input.
    pub fn from_wif(wif: &str) -> Result<(Self, SecFormat, Network)> {
        Self::decode_wif(wif).malformed("PrivateKey::from_wif")
    }

    fn decode_wif(wif: &str) -> Result<(Self, SecFormat, Network)> {
        let payload = Zeroizing::new(base58::decode_with_checksum(wif)?);
        let (format, body) = match payload.len() {
            WIF_PAYLOAD_SIZE => (SecFormat::Uncompressed, &payload[..]),
            n if n == WIF_PAYLOAD_SIZE + 1 => {
                if payload[WIF_PAYLOAD_SIZE] != WIF_COMPRESSED_FLAG {
                    return Err(Error::encoding("WIF", "bad compression flag"));
                }
                (SecFormat::Compressed, &payload[..WIF_PAYLOAD_SIZE])
            }
            n => {
                return Err(Error::InvalidLength {
                    context: "WIF",
                    expected: WIF_PAYLOAD_SIZE + 1,
                    actual: n,
                })
            }
        };
        let network = Network::from_wif_prefix(body[0]).ok_or_else(|| {
            Error::encoding("WIF", format!("unknown prefix 0x{:02x}", body[0]))
        })?;
        Ok((Self::from_bytes(&body[1..])?, format, network))
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("secret", &"[REDACTED]")
            .field("point", &self.point)
            .finish()
    }
}

/// A private key generated together with its public point
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPair {
    private: PrivateKey,
    public: Secp256k1Point,
}

impl KeyPair {
    /// Generate a key pair; the secret is drawn uniformly from `[0, 2^256)`
    /// and redrawn until it lies in `[1, n-1]`
    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self> {
        let _span = trace_span!("ecdsa_keygen").entered();
        let (secret, public) = ec::generate_keypair(rng)?;
        let secret = EphemeralSecret::new(secret);
        let private = PrivateKey {
            secret: SecretBuffer::new(secret.to_bytes()),
            point: public.clone(),
        };
        Ok(Self { private, public })
    }

    /// Generate a key pair with the operating system's CSPRNG
    pub fn generate_os() -> Result<Self> {
        Self::generate(&mut OsRng)
    }

    /// The private half
    pub fn private_key(&self) -> &PrivateKey {
        &self.private
    }

    /// The public half
    pub fn public_key(&self) -> &Secp256k1Point {
        &self.public
    }
}

impl From<PrivateKey> for KeyPair {
    fn from(private: PrivateKey) -> Self {
        let public = private.point.clone();
        Self { private, public }
    }
}

impl fmt::Display for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let private = self.private.hex();
        let public = match self.public.sec_compressed() {
            Ok(sec) => hex::encode(sec),
            Err(_) => String::from("infinity"),
        };
        write!(
            f,
            "privkey: 0x{}..., pubkey: 0x{}...",
            &private[..7],
            &public[..7]
        )
    }
}
