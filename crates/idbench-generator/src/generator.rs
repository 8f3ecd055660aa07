//! Per-run row generator.

use crate::generators::snowflake::{SnowflakeGenerator, MAX_NODE};
use crate::generators::ulid::UlidGenerator;
use crate::generators::uuid::generate_uuid_v4;
use crate::kind::IdKind;
use crate::row::{user_name, GeneratedId, UserRow};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Identifier kind name not recognized
    #[error("Unknown identifier kind '{0}' (expected one of: uuid, snowflake, ulid)")]
    UnknownKind(String),

    /// Snowflake node id does not fit in 10 bits
    #[error("Snowflake node id {0} out of range (0..={max})", max = MAX_NODE)]
    InvalidNode(u16),

    /// System clock reads earlier than the Snowflake epoch
    #[error("System clock is before the Snowflake epoch")]
    ClockBeforeEpoch,

    /// Monotonic ULID random part exhausted within one millisecond
    #[error("ULID random component overflowed within one millisecond")]
    UlidOverflow,
}

enum IdSource {
    Uuid,
    Snowflake(SnowflakeGenerator),
    Ulid(UlidGenerator),
}

/// Generates the rows of a single run.
///
/// The snowflake node id is drawn once, when the generator is built, so every
/// row of the run shares it.
pub struct IdGenerator {
    kind: IdKind,
    rng: StdRng,
    source: IdSource,
    index: u64,
}

impl IdGenerator {
    /// Create a generator for `kind`.
    ///
    /// With a `seed`, UUIDs and the snowflake node choice are reproducible;
    /// without one the RNG is seeded from the operating system.
    pub fn new(kind: IdKind, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let source = match kind {
            IdKind::Uuid => IdSource::Uuid,
            IdKind::Snowflake => {
                let node = rng.random_range(0..MAX_NODE);
                debug!("Selected snowflake node {}", node);
                IdSource::Snowflake(SnowflakeGenerator::for_valid_node(node))
            }
            IdKind::Ulid => IdSource::Ulid(UlidGenerator::new()),
        };

        Self {
            kind,
            rng,
            source,
            index: 0,
        }
    }

    /// Pin the snowflake node id instead of drawing it.
    ///
    /// Has no effect on other kinds, but the node id is still validated.
    pub fn with_snowflake_node(mut self, node: u16) -> Result<Self, GeneratorError> {
        let generator = SnowflakeGenerator::new(node)?;
        if let IdSource::Snowflake(_) = self.source {
            self.source = IdSource::Snowflake(generator);
        }
        Ok(self)
    }

    pub fn kind(&self) -> IdKind {
        self.kind
    }

    /// Node id of the snowflake generator, if this run generates snowflakes.
    pub fn snowflake_node(&self) -> Option<u16> {
        match &self.source {
            IdSource::Snowflake(generator) => Some(generator.node()),
            _ => None,
        }
    }

    /// Index the next row will carry.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Generate the next row.
    pub fn next_row(&mut self) -> Result<UserRow, GeneratorError> {
        let id = match &mut self.source {
            IdSource::Uuid => GeneratedId::Uuid(generate_uuid_v4(&mut self.rng)),
            IdSource::Snowflake(generator) => GeneratedId::Snowflake(generator.next_id()?),
            IdSource::Ulid(generator) => GeneratedId::Ulid(generator.next_ulid()?),
        };

        let index = self.index;
        self.index += 1;

        Ok(UserRow {
            index,
            id,
            name: user_name(index),
        })
    }
}
