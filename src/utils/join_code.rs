//! Join code generation for games.
//!
//! Join codes are 8-character strings using Crockford's Base32 alphabet.

use rand::Rng;

const CROCKFORD: &[u8] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ"; // no I, L, O, U
const CODE_LEN: usize = 8;

/// Generate a join code by randomly selecting characters from Crockford's
/// Base32 alphabet using a securely seeded RNG.
pub fn generate_join_code() -> String {
    let mut rng = rand::rng();
    let mut s = String::with_capacity(CODE_LEN);
    for _ in 0..CODE_LEN {
        let idx = rng.random_range(0..CROCKFORD.len());
        s.push(CROCKFORD[idx] as char);
    }
    s
}
