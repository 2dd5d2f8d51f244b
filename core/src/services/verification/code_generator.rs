//! Numeric code generation without modulo bias

use rand::{rngs::OsRng, RngCore};

use super::traits::RandomSource;

/// Largest multiple of 10 not above 256; bytes at or above it are redrawn
const DIGIT_LIMIT: u16 = 256 - 256 % 10;

/// Operating system CSPRNG
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandomSource;

impl RandomSource for OsRandomSource {
    fn fill_bytes(&self, dest: &mut [u8]) {
        OsRng.fill_bytes(dest);
    }
}

/// Draw a code of exactly `length` decimal digits from `source`
///
/// Each byte below 250 yields `byte % 10`; bytes 250..=255 are discarded and
/// redrawn so every digit is equally likely.
pub fn generate_code<R: RandomSource + ?Sized>(source: &R, length: usize) -> String {
    let mut code = String::with_capacity(length);
    let mut buffer = vec![0u8; length];

    while code.len() < length {
        let batch = &mut buffer[..length - code.len()];
        source.fill_bytes(batch);

        for &byte in batch.iter() {
            if u16::from(byte) < DIGIT_LIMIT {
                code.push(char::from(b'0' + byte % 10));
            }
        }
    }

    code
}
