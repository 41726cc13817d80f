// RSA Errors
// Error kinds reported by key generation, encryption and decryption

use thiserror::Error;

use super::bigint::RsaBigInt;

/// Result type for RSA operations
pub type Result<T> = std::result::Result<T, RsaError>;

/// Errors that can occur during RSA operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsaError {
    /// The primes are equal, or at least one of them is not prime.
    #[error("invalid key material: {p} and {q} are not distinct primes")]
    InvalidKeyMaterial { p: RsaBigInt, q: RsaBigInt },

    /// A public key with the wrong shape, e.g. the wrong number of components.
    #[error("malformed public key: {reason}")]
    MalformedKey { reason: String },

    /// An argument that is not the expected integer or pair.
    #[error("invalid argument type: {reason}")]
    InvalidArgumentType { reason: String },

    #[error("no private exponent d in [2, {phi}) satisfies d * {e} mod {phi} = 1")]
    NoPrivateExponentFound { e: RsaBigInt, phi: RsaBigInt },
}

impl RsaError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        RsaError::MalformedKey {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_type(reason: impl Into<String>) -> Self {
        RsaError::InvalidArgumentType {
            reason: reason.into(),
        }
    }
}
