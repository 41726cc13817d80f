// Demo Configuration
// Inputs for one run of the demo and their defaults

use crate::rsa::{from_u64, RsaBigInt};

/// Configuration for a demo run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoConfig {
    pub message: RsaBigInt,
    pub prime1: RsaBigInt,
    pub prime2: RsaBigInt,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            message: from_u64(77),
            prime1: from_u64(79),
            prime2: from_u64(97),
        }
    }
}

impl DemoConfig {
    pub fn new(message: RsaBigInt, prime1: RsaBigInt, prime2: RsaBigInt) -> Self {
        Self {
            message,
            prime1,
            prime2,
        }
    }

    pub fn with_message(mut self, message: RsaBigInt) -> Self {
        self.message = message;
        self
    }

    pub fn with_primes(mut self, prime1: RsaBigInt, prime2: RsaBigInt) -> Self {
        self.prime1 = prime1;
        self.prime2 = prime2;
        self
    }
}
