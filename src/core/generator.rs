//! Random password generation that satisfies the registry's rules.

use crate::constants;
use crate::core::clock::Clock;
use crate::core::registry::CredentialRegistry;
use crate::error::{RegistryError, Result};
use crate::models::policy::PasswordPolicy;
use rand::{distributions::Alphanumeric, rngs::OsRng, seq::SliceRandom, Rng};
use zeroize::Zeroizing;

/// Generate a password that passes `registry`'s policy and is not stored yet.
///
/// `length` is raised to the policy minimum and capped at
/// [`constants::MAX_GENERATED_LENGTH`].
pub fn generate_password<C: Clock>(
    registry: &CredentialRegistry<C>,
    length: usize,
) -> Result<Zeroizing<String>> {
    let policy = registry.policy();
    for _ in 0..constants::MAX_GENERATOR_ATTEMPTS {
        let candidate = generate_candidate(policy, length);
        if registry.is_password_valid(&candidate) && registry.is_password_unique(&candidate) {
            return Ok(candidate);
        }
    }
    Err(RegistryError::GeneratorExhausted {
        attempts: constants::MAX_GENERATOR_ATTEMPTS,
    })
}

fn effective_length(policy: &PasswordPolicy, length: usize) -> usize {
    length
        .max(policy.min_length)
        .max(1)
        .min(constants::MAX_GENERATED_LENGTH.max(policy.min_length))
}

fn generate_candidate(policy: &PasswordPolicy, length: usize) -> Zeroizing<String> {
    let length = effective_length(policy, length);
    let mut chars: Vec<char> = OsRng
        .sample_iter(&Alphanumeric)
        .take(length - 1)
        .map(char::from)
        .collect();

    let specials: Vec<char> = policy.special_chars.chars().collect();
    if let Some(special) = specials.choose(&mut OsRng) {
        let pos = OsRng.gen_range(0..=chars.len());
        chars.insert(pos, *special);
    }
    Zeroizing::new(chars.into_iter().collect())
}
