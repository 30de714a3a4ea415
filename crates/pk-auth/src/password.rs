use argon2::Argon2;
use argon2::PasswordHash;
use argon2::PasswordHasher;
use argon2::PasswordVerifier;
use argon2::password_hash::SaltString;

fn salt() -> SaltString {
    use rand::Rng;
    let ref mut bytes = [0u8; 16];
    rand::rng().fill(bytes);
    SaltString::encode_b64(bytes).expect("salt")
}

/// Hashes a plaintext password with a fresh random salt. The engine never
/// retains the plaintext past this call.
pub fn hash(password: &str) -> Result<String, argon2::password_hash::Error> {
    Argon2::default()
        .hash_password(password.as_bytes(), &salt())
        .map(|h| h.to_string())
}

/// Verifies a plaintext password against a stored hash. Any malformed hash
/// is treated as a verification failure rather than propagated as an error.
pub fn verify(password: &str, hashword: &str) -> bool {
    PasswordHash::new(hashword)
        .ok()
        .as_ref()
        .map(|hash| {
            Argon2::default()
                .verify_password(password.as_bytes(), hash)
                .is_ok()
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trips() {
        let hashword = hash("correct horse battery staple").unwrap();
        assert!(verify("correct horse battery staple", &hashword));
        assert!(!verify("wrong password", &hashword));
    }

    #[test]
    fn two_hashes_of_the_same_password_differ_by_salt() {
        let a = hash("hunter2").unwrap();
        let b = hash("hunter2").unwrap();
        assert_ne!(a, b);
        assert!(verify("hunter2", &a));
        assert!(verify("hunter2", &b));
    }

    #[test]
    fn verify_rejects_malformed_hash_without_panicking() {
        assert!(!verify("anything", "not-a-valid-phc-string"));
    }
}
