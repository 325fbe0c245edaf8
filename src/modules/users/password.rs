//! Admin credential selection.

use anyhow::{anyhow, Context};
use travel_kernel::settings::{Environment, SeedSettings};

/// Bcrypt hash seeded for the admin account when no password is configured.
/// Development and test only. It is labelled upstream as the hash of
/// `password`, but it does not verify against that plaintext, so it is not a
/// usable login; configure `seed.admin_password` for one.
pub const FIXTURE_ADMIN_HASH: &str = "$2a$10$KOt5c1kcKU3Xx6YAkgKV8eZkKMwqBBCv9D/NIvs37aWjTvTCp6oo.";

const BCRYPT_PREFIXES: &[&str] = &["$2a$", "$2b$", "$2y$"];
const BCRYPT_LEN: usize = 60;

/// Whether `value` has the shape of a modular-crypt bcrypt hash.
pub fn is_bcrypt_hash(value: &str) -> bool {
    let bytes = value.as_bytes();
    value.len() == BCRYPT_LEN
        && BCRYPT_PREFIXES.iter().any(|p| value.starts_with(p))
        && bytes[4].is_ascii_digit()
        && bytes[5].is_ascii_digit()
        && bytes[6] == b'$'
}

/// Production must not run on the fixture credential.
pub fn check_credential_policy(environment: Environment, seed: &SeedSettings) -> anyhow::Result<()> {
    if environment == Environment::Production && seed.admin_password.is_none() {
        return Err(anyhow!(
            "refusing to seed the fixture admin credential in production; set seed.admin_password"
        ));
    }
    Ok(())
}

/// The hash to store for the admin account.
///
/// A configured password is hashed at the configured cost. Without one the
/// fixture is used, except in production where that is refused.
pub fn admin_password_hash(environment: Environment, seed: &SeedSettings) -> anyhow::Result<String> {
    check_credential_policy(environment, seed)?;

    match seed.admin_password.as_deref() {
        Some(plaintext) => bcrypt::hash(plaintext, seed.bcrypt_cost)
            .with_context(|| format!("failed to hash admin password at cost {}", seed.bcrypt_cost)),
        None => {
            tracing::warn!(
                environment = ?environment,
                "seeding fixture admin credential"
            );
            Ok(FIXTURE_ADMIN_HASH.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_password(password: &str) -> SeedSettings {
        SeedSettings {
            admin_password: Some(password.to_string()),
            bcrypt_cost: SeedSettings::MIN_BCRYPT_COST,
        }
    }

    #[test]
    fn fixture_is_a_bcrypt_hash() {
        assert!(is_bcrypt_hash(FIXTURE_ADMIN_HASH));
        assert_ne!(FIXTURE_ADMIN_HASH, "password");
    }

    #[test]
    fn fixture_does_not_verify_as_password() {
        assert!(!bcrypt::verify("password", FIXTURE_ADMIN_HASH).unwrap());
    }

    #[test]
    fn plaintext_is_not_a_bcrypt_hash() {
        assert!(!is_bcrypt_hash("password"));
        assert!(!is_bcrypt_hash(""));
        assert!(!is_bcrypt_hash(&format!("$2a$xx${}", "a".repeat(53))));
    }

    #[test]
    fn local_without_password_uses_fixture() {
        let hash = admin_password_hash(Environment::Local, &SeedSettings::default()).unwrap();
        assert_eq!(hash, FIXTURE_ADMIN_HASH);
    }

    #[test]
    fn production_without_password_is_refused() {
        let err = admin_password_hash(Environment::Production, &SeedSettings::default())
            .unwrap_err();
        assert!(err.to_string().contains("production"));
    }

    #[test]
    fn configured_password_is_hashed_and_verifiable() {
        let hash = admin_password_hash(Environment::Production, &with_password("opensesame"))
            .unwrap();

        assert!(is_bcrypt_hash(&hash));
        assert!(!hash.contains("opensesame"));
        assert!(bcrypt::verify("opensesame", &hash).unwrap());
        assert!(!bcrypt::verify("password", &hash).unwrap());
    }

    #[test]
    fn hashing_is_salted() {
        let settings = with_password("opensesame");
        let a = admin_password_hash(Environment::Local, &settings).unwrap();
        let b = admin_password_hash(Environment::Local, &settings).unwrap();
        assert_ne!(a, b);
    }
}
