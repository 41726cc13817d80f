//! Textbook RSA over small primes.
//!
//! Keys are derived deterministically from two distinct primes: the public
//! exponent is the smallest integer coprime with the totient, and decryption
//! recovers the private exponent by scanning every candidate. No padding is
//! applied and nothing here is suitable for protecting real data.
//!
//! ```
//! use rsa_demo::rsa::{decrypt, encrypt, from_u64, generate_public_key};
//!
//! let (p, q) = (from_u64(79), from_u64(97));
//! let key = generate_public_key(&p, &q)?;
//! let ciphertext = encrypt(&from_u64(77), &key)?;
//! assert_eq!(decrypt(&ciphertext, &p, &q)?, from_u64(77));
//! # Ok::<(), rsa_demo::rsa::RsaError>(())
//! ```

pub mod rsa;
pub mod ui;
pub mod util;
