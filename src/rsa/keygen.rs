// RSA Key Generation
// Derives the modulus, totient and smallest public exponent from two primes

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use num_traits::One;

use super::bigint::{gcd, RsaBigInt};
use super::error::{Result, RsaError};
use super::validate::validate_primes;

/// RSA Public Key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RsaPublicKey {
    pub e: RsaBigInt, // Public exponent
    pub n: RsaBigInt, // Modulus
}

/// Everything derived from a prime pair.
/// `phi` is never part of the public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyComponents {
    pub e: RsaBigInt,   // Smallest public exponent
    pub n: RsaBigInt,   // Modulus
    pub phi: RsaBigInt, // Totient (p-1)(q-1)
}

impl RsaPublicKey {
    pub fn new(e: RsaBigInt, n: RsaBigInt) -> Self {
        Self { e, n }
    }
}

impl KeyComponents {
    /// Drop the totient, keeping only (e, n)
    pub fn public_key(&self) -> RsaPublicKey {
        RsaPublicKey::new(self.e.clone(), self.n.clone())
    }
}

impl fmt::Display for RsaPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.e, self.n)
    }
}

impl From<RsaPublicKey> for (RsaBigInt, RsaBigInt) {
    fn from(key: RsaPublicKey) -> Self {
        (key.e, key.n)
    }
}

impl From<(RsaBigInt, RsaBigInt)> for RsaPublicKey {
    fn from((e, n): (RsaBigInt, RsaBigInt)) -> Self {
        RsaPublicKey::new(e, n)
    }
}

impl TryFrom<&[RsaBigInt]> for RsaPublicKey {
    type Error = RsaError;

    fn try_from(parts: &[RsaBigInt]) -> Result<Self> {
        match parts {
            [e, n] => Ok(RsaPublicKey::new(e.clone(), n.clone())),
            _ => Err(RsaError::malformed(format!(
                "expected 2 components (e, n), got {}",
                parts.len()
            ))),
        }
    }
}

/// Parses `e,n` or `(e, n)`.
impl FromStr for RsaPublicKey {
    type Err = RsaError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let inner = match s.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
            Some(inner) => inner,
            None if s.contains(',') => s,
            None => {
                return Err(RsaError::invalid_type(format!(
                    "`{}` is not an (e, n) pair",
                    s
                )))
            }
        };

        let mut fields: Vec<&str> = inner.split(',').map(str::trim).collect();
        // A single trailing comma is allowed, as in "(3,)"
        if fields.len() > 1 && fields.last().is_some_and(|f| f.is_empty()) {
            fields.pop();
        }
        if fields.len() == 1 && fields[0].is_empty() {
            fields.clear();
        }

        let parts = fields
            .iter()
            .map(|field| {
                field.parse::<RsaBigInt>().map_err(|_| {
                    RsaError::invalid_type(format!("`{}` is not a non-negative integer", field))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        RsaPublicKey::try_from(parts.as_slice())
    }
}

/// Compute n, phi and the smallest e >= 2 coprime with phi.
///
/// `p` and `q` must already be validated as distinct primes. The scan always
/// terminates because gcd(phi + 1, phi) = 1.
pub fn derive_key_components(p: &RsaBigInt, q: &RsaBigInt) -> KeyComponents {
    let one = RsaBigInt::one();

    // Step 1: n = p * q
    let n = p * q;

    // Step 2: φ(n) = (p-1)(q-1)
    let phi = (p - &one) * (q - &one);

    // Step 3: smallest exponent with no common factor with φ(n)
    let mut e = RsaBigInt::from(2u8);
    while !gcd(&e, &phi).is_one() {
        e += 1u8;
    }

    trace!("derived components for ({}, {}): e={} n={} phi={}", p, q, e, n, phi);

    KeyComponents { e, n, phi }
}

/// Validate the primes and derive the components, failing with
/// `InvalidKeyMaterial` when they are not distinct primes.
pub(crate) fn checked_key_components(p: &RsaBigInt, q: &RsaBigInt) -> Result<KeyComponents> {
    if !validate_primes(p, q) {
        return Err(RsaError::InvalidKeyMaterial {
            p: p.clone(),
            q: q.clone(),
        });
    }
    Ok(derive_key_components(p, q))
}

/// Generate the RSA public key (e, n) for two distinct primes
pub fn generate_public_key(p: &RsaBigInt, q: &RsaBigInt) -> Result<RsaPublicKey> {
    let components = checked_key_components(p, q)?;
    let public_key = components.public_key();
    debug!("generated public key {}", public_key);
    Ok(public_key)
}
