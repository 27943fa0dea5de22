/**
 * Email Verification Codes
 *
 * Codes are 32 bytes from the OS RNG, URL-safe base64 without padding
 * (43 characters), so they can travel in a query string unescaped.
 */

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::{rngs::OsRng, RngCore};

const CODE_BYTES: usize = 32;

/// Generate a fresh one-time verification code
pub fn generate_verification_code() -> String {
    let mut bytes = [0u8; CODE_BYTES];
    OsRng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_code_shape() {
        let code = generate_verification_code();
        assert_eq!(code.len(), 43);
        assert!(code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_codes_are_unique() {
        let codes: HashSet<String> = (0..1000).map(|_| generate_verification_code()).collect();
        assert_eq!(codes.len(), 1000);
    }
}
