//! UUID v4 generator.

use rand::Rng;
use uuid::Builder;

/// Generate a random UUID v4 from the provided RNG, in canonical
/// hyphenated lowercase form.
pub fn generate_uuid_v4<R: Rng>(rng: &mut R) -> String {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);

    // Sets the version (4) and RFC 4122 variant bits
    Builder::from_random_bytes(bytes)
        .into_uuid()
        .hyphenated()
        .to_string()
}
