//! Monotonic ULID generator.

use crate::generator::GeneratorError;
use ulid::Generator;

/// Wraps a monotonic `ulid::Generator`: within the same millisecond the
/// 80-bit random part is incremented instead of redrawn.
pub struct UlidGenerator {
    inner: Generator,
}

impl UlidGenerator {
    pub fn new() -> Self {
        Self {
            inner: Generator::new(),
        }
    }

    /// Generate the next ULID in its 26-character string form.
    pub fn next_ulid(&mut self) -> Result<String, GeneratorError> {
        self.inner
            .generate()
            .map(|ulid| ulid.to_string())
            .map_err(|_| GeneratorError::UlidOverflow)
    }
}

impl Default for UlidGenerator {
    fn default() -> Self {
        Self::new()
    }
}
