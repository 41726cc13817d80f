// RSA Decryption Implementation
// Recovers the private exponent by brute force and computes m = c^d mod n

use log::{debug, trace};
use num_traits::One;

use super::bigint::{mod_pow, RsaBigInt};
use super::error::{Result, RsaError};
use super::keygen::checked_key_components;

/// Scan every candidate in [2, phi) and keep the last d with d * e mod phi = 1.
///
/// The scan never stops early. When e and phi are coprime only one candidate
/// matches, but the result is defined as the last match regardless.
pub(crate) fn find_private_exponent(e: &RsaBigInt, phi: &RsaBigInt) -> Result<RsaBigInt> {
    let one = RsaBigInt::one();
    let mut d = None;
    let mut matches = 0usize;

    let mut i = RsaBigInt::from(2u8);
    while &i < phi {
        if (&i * e) % phi == one {
            d = Some(i.clone());
            matches += 1;
        }
        i += 1u8;
    }

    trace!("private exponent scan over [2, {}): {} match(es)", phi, matches);

    d.ok_or_else(|| RsaError::NoPrivateExponentFound {
        e: e.clone(),
        phi: phi.clone(),
    })
}

/// Decrypt a ciphertext using the two primes the key was generated from.
///
/// The key components and the private exponent are recomputed on every call.
pub fn decrypt(ciphertext: &RsaBigInt, p: &RsaBigInt, q: &RsaBigInt) -> Result<RsaBigInt> {
    let components = checked_key_components(p, q)?;

    // Private exponent: (d * e) mod φ(n) = 1
    let d = find_private_exponent(&components.e, &components.phi)?;
    debug!("recovered private exponent for modulus {}", components.n);

    // m = c^d mod n
    Ok(mod_pow(ciphertext, &d, &components.n))
}

/// Decrypt to a u64, failing if the plaintext does not fit
pub fn decrypt_to_u64(ciphertext: &RsaBigInt, p: &RsaBigInt, q: &RsaBigInt) -> Result<u64> {
    let plaintext = decrypt(ciphertext, p, q)?;
    u64::try_from(&plaintext).map_err(|_| {
        RsaError::invalid_type(format!("plaintext {} does not fit in a u64", plaintext))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::bigint::from_u64;
    use crate::rsa::encrypt::encrypt_u64;
    use crate::rsa::keygen::{derive_key_components, generate_public_key};

    #[test]
    fn test_default_private_exponent() {
        let d = find_private_exponent(&from_u64(5), &from_u64(7488)).unwrap();
        assert_eq!(d, from_u64(4493));
        assert_eq!((&d * from_u64(5)) % from_u64(7488), from_u64(1));
    }

    #[test]
    fn test_private_exponent_satisfies_congruence() {
        let pairs = [(61u64, 53u64), (3, 11), (2, 5), (5, 11), (11, 13), (79, 97)];
        for (p, q) in pairs {
            let components = derive_key_components(&from_u64(p), &from_u64(q));
            let d = find_private_exponent(&components.e, &components.phi).unwrap();
            assert!(((&d * &components.e) % &components.phi).is_one());
        }
    }

    #[test]
    fn test_exponent_larger_than_phi() {
        // 7 = 3 mod 4, and 3 * 3 mod 4 = 1
        let d = find_private_exponent(&from_u64(7), &from_u64(4)).unwrap();
        assert_eq!(d, from_u64(3));
    }

    #[test]
    fn test_no_inverse_for_shared_factor() {
        let result = find_private_exponent(&from_u64(2), &from_u64(4));
        assert!(matches!(result, Err(RsaError::NoPrivateExponentFound { .. })));
    }

    #[test]
    fn test_no_private_exponent() {
        // p=2, q=3 gives phi = 2, so [2, phi) is empty
        let result = decrypt(&from_u64(1), &from_u64(2), &from_u64(3));
        assert_eq!(
            result,
            Err(RsaError::NoPrivateExponentFound {
                e: from_u64(3),
                phi: from_u64(2),
            })
        );
    }

    #[test]
    fn test_decrypt_default_ciphertext() {
        let plaintext = decrypt(&from_u64(5656), &from_u64(79), &from_u64(97)).unwrap();
        assert_eq!(plaintext, from_u64(77));
    }

    #[test]
    fn test_decrypt_primes_in_either_order() {
        let plaintext = decrypt(&from_u64(5656), &from_u64(97), &from_u64(79)).unwrap();
        assert_eq!(plaintext, from_u64(77));
    }

    #[test]
    fn test_decrypt_rejects_invalid_primes() {
        let result = decrypt(&from_u64(5656), &from_u64(79), &from_u64(79));
        assert!(matches!(result, Err(RsaError::InvalidKeyMaterial { .. })));

        let result = decrypt(&from_u64(5656), &from_u64(10), &from_u64(15));
        assert!(matches!(result, Err(RsaError::InvalidKeyMaterial { .. })));
    }

    #[test]
    fn test_roundtrip_small_keys() {
        let (p, q) = (from_u64(11), from_u64(13));
        let key = generate_public_key(&p, &q).unwrap();

        for m in 0u64..143 {
            let ciphertext = encrypt_u64(m, &key).unwrap();
            assert_eq!(decrypt_to_u64(&ciphertext, &p, &q).unwrap(), m);
        }
    }
}
