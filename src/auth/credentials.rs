//! Password hashing
//!
//! Credentials are stored as the lowercase hex SHA-256 digest of the UTF-8
//! password. There is no salt and no key stretching, so equal passwords give
//! equal hashes and the digests are cheap to brute-force. Files written by
//! earlier versions depend on this exact format.

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of `password`.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digest() {
        assert_eq!(
            hash_password("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_empty_password_digest() {
        assert_eq!(
            hash_password(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_digest_is_lowercase_hex() {
        let digest = hash_password("Grüße");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}
