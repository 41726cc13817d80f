// RSA Module - Main module file
// Exports all RSA-related functionality

pub mod bigint;
pub mod decrypt;
pub mod encrypt;
pub mod error;
pub mod keygen;
pub mod validate;

pub use bigint::{from_u64, RsaBigInt};
pub use decrypt::{decrypt, decrypt_to_u64};
pub use encrypt::{encrypt, encrypt_u64};
pub use error::{Result, RsaError};
pub use keygen::{derive_key_components, generate_public_key, KeyComponents, RsaPublicKey};
pub use validate::{is_prime, next_prime, validate_primes};
