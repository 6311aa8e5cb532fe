use bcrypt::{hash, verify, BcryptError};

/// Work factor for stored password hashes.
pub const PWD_HASH_COST: u32 = 10;

/// Well-formed cost-10 hash compared against when no account matches.
pub const DUMMY_HASH: &str = "$2a$10$k1wbIrmNyFAPwPVPSVa/zecw2BCEnBwVS2GbrmgzxFUOqW9dk4TCW";

pub fn hash_password(password: &str) -> Result<String, BcryptError> {
   hash(password, PWD_HASH_COST)
}

pub fn verify_password(password: &str, pwd_hash: &str) -> Result<bool, BcryptError> {
   verify(password, pwd_hash)
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn hash_is_salted_and_verifiable() {
      let first = hash_password("hunter2").unwrap();
      let second = hash_password("hunter2").unwrap();
      assert_ne!(first, second);
      assert_ne!(first, "hunter2");
      assert!(first.starts_with("$2b$10$"));
      assert!(verify_password("hunter2", &first).unwrap());
      assert!(verify_password("hunter2", &second).unwrap());
   }

   #[test]
   fn wrong_password_does_not_verify() {
      let pwd_hash = hash_password("correct horse").unwrap();
      assert!(!verify_password("battery staple", &pwd_hash).unwrap());
   }

   #[test]
   fn dummy_hash_verifies_to_false_at_full_cost() {
      assert!(DUMMY_HASH.starts_with(&format!("$2a${}$", PWD_HASH_COST)));
      assert!(!verify_password("hunter2", DUMMY_HASH).unwrap());
   }

   #[test]
   fn garbage_hash_is_an_error() {
      assert!(verify_password("pw", "not-a-bcrypt-hash").is_err());
   }
}
