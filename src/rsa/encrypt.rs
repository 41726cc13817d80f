// RSA Encryption Implementation
// Textbook RSA: c = m^e mod n, no padding

use log::{debug, trace};
use num_traits::Zero;

use super::bigint::{mod_pow, RsaBigInt};
use super::error::{Result, RsaError};
use super::keygen::RsaPublicKey;

/// Encrypt an integer message with the public key.
///
/// The message is expected to lie in [0, n). This is not checked: larger
/// messages still encrypt, but will not decrypt back to the same value.
pub fn encrypt(message: &RsaBigInt, public_key: &RsaPublicKey) -> Result<RsaBigInt> {
    if public_key.n.is_zero() {
        return Err(RsaError::malformed("modulus must be non-zero"));
    }

    if message >= &public_key.n {
        debug!(
            "message {} is not below modulus {}; it will not round-trip",
            message, public_key.n
        );
    }

    let ciphertext = mod_pow(message, &public_key.e, &public_key.n);
    trace!("encrypted {} with {} -> {}", message, public_key, ciphertext);

    Ok(ciphertext)
}

/// Encrypt a u64 message
pub fn encrypt_u64(message: u64, public_key: &RsaPublicKey) -> Result<RsaBigInt> {
    encrypt(&RsaBigInt::from(message), public_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::bigint::from_u64;
    use crate::rsa::keygen::generate_public_key;

    #[test]
    fn test_encrypt_default_message() {
        let key = RsaPublicKey::new(from_u64(5), from_u64(7663));
        let ciphertext = encrypt(&from_u64(77), &key).unwrap();
        assert_eq!(ciphertext, from_u64(5656));
    }

    #[test]
    fn test_encrypt_with_generated_key() {
        let key = generate_public_key(&from_u64(61), &from_u64(53)).unwrap();
        assert_eq!(key, RsaPublicKey::new(from_u64(7), from_u64(3233)));
        assert_eq!(encrypt_u64(42, &key).unwrap(), from_u64(240));
    }

    #[test]
    fn test_encrypt_fixed_points() {
        let key = RsaPublicKey::new(from_u64(5), from_u64(7663));
        assert_eq!(encrypt_u64(0, &key).unwrap(), from_u64(0));
        assert_eq!(encrypt_u64(1, &key).unwrap(), from_u64(1));
    }

    #[test]
    fn test_ciphertext_below_modulus() {
        let key = RsaPublicKey::new(from_u64(5), from_u64(7663));
        for m in [2u64, 77, 1000, 7662, 10_000] {
            assert!(encrypt_u64(m, &key).unwrap() < key.n);
        }
    }

    #[test]
    fn test_encrypt_out_of_range_message() {
        // m and m + n encrypt identically
        let key = RsaPublicKey::new(from_u64(5), from_u64(7663));
        assert_eq!(
            encrypt_u64(77 + 7663, &key).unwrap(),
            encrypt_u64(77, &key).unwrap()
        );
    }

    #[test]
    fn test_encrypt_malformed_key() {
        let parts = [from_u64(3)];
        let result = RsaPublicKey::try_from(&parts[..])
            .and_then(|key| encrypt_u64(5, &key));
        assert!(matches!(result, Err(RsaError::MalformedKey { .. })));

        let result = "not-a-pair"
            .parse::<RsaPublicKey>()
            .and_then(|key| encrypt_u64(5, &key));
        assert!(matches!(result, Err(RsaError::InvalidArgumentType { .. })));
    }

    #[test]
    fn test_encrypt_zero_modulus() {
        let key = RsaPublicKey::new(from_u64(5), from_u64(0));
        assert!(matches!(
            encrypt_u64(5, &key),
            Err(RsaError::MalformedKey { .. })
        ));
    }
}
