//! Snowflake ID generator.
//!
//! 64-bit layout, high to low: `[timestamp:41][node:10][sequence:12]`.
//! The timestamp counts milliseconds since [`EPOCH_MILLIS`], which allows
//! 1024 nodes and 4096 IDs per millisecond per node.

use crate::generator::GeneratorError;
use std::time::{SystemTime, UNIX_EPOCH};

/// Custom epoch, 2010-11-04T01:42:54.657Z, in Unix milliseconds.
pub const EPOCH_MILLIS: u64 = 1_288_834_974_657;

pub const NODE_BITS: u32 = 10;
pub const SEQUENCE_BITS: u32 = 12;

/// Largest valid node id.
pub const MAX_NODE: u16 = (1 << NODE_BITS) - 1;
const MAX_SEQUENCE: u16 = (1 << SEQUENCE_BITS) - 1;

const NODE_SHIFT: u32 = SEQUENCE_BITS;
const TIMESTAMP_SHIFT: u32 = NODE_BITS + SEQUENCE_BITS;

/// Single-node Snowflake generator.
///
/// IDs from one generator never decrease: the sequence counter advances
/// within a millisecond, and a clock that steps backwards is treated as if
/// it were still at the last observed millisecond.
#[derive(Debug, Clone)]
pub struct SnowflakeGenerator {
    node: u16,
    last_millis: Option<u64>,
    sequence: u16,
}

impl SnowflakeGenerator {
    /// Create a generator bound to `node`.
    pub fn new(node: u16) -> Result<Self, GeneratorError> {
        if node > MAX_NODE {
            return Err(GeneratorError::InvalidNode(node));
        }
        Ok(Self::for_valid_node(node))
    }

    pub(crate) fn for_valid_node(node: u16) -> Self {
        debug_assert!(node <= MAX_NODE);
        Self {
            node,
            last_millis: None,
            sequence: 0,
        }
    }

    pub fn node(&self) -> u16 {
        self.node
    }

    /// Generate the next ID from the system clock.
    ///
    /// Spins until the next millisecond when the sequence is exhausted.
    pub fn next_id(&mut self) -> Result<u64, GeneratorError> {
        loop {
            let now = millis_since_epoch()?;
            if let Some(id) = self.next_id_at(now) {
                return Ok(id);
            }
            std::hint::spin_loop();
        }
    }

    /// Generate an ID as of `now` (milliseconds since [`EPOCH_MILLIS`]).
    ///
    /// Returns `None` when all 4096 sequence values of the current
    /// millisecond are used up.
    pub fn next_id_at(&mut self, now: u64) -> Option<u64> {
        match self.last_millis {
            Some(last) if now <= last => {
                if self.sequence == MAX_SEQUENCE {
                    return None;
                }
                self.sequence += 1;
                Some(self.compose(last))
            }
            _ => {
                self.last_millis = Some(now);
                self.sequence = 0;
                Some(self.compose(now))
            }
        }
    }

    fn compose(&self, millis: u64) -> u64 {
        (millis << TIMESTAMP_SHIFT) | ((self.node as u64) << NODE_SHIFT) | self.sequence as u64
    }
}

/// Unix milliseconds at which `id` was generated.
pub fn timestamp_millis(id: u64) -> u64 {
    (id >> TIMESTAMP_SHIFT) + EPOCH_MILLIS
}

/// Node id embedded in `id`.
pub fn node_of(id: u64) -> u16 {
    ((id >> NODE_SHIFT) & MAX_NODE as u64) as u16
}

/// Sequence number embedded in `id`.
pub fn sequence_of(id: u64) -> u16 {
    (id & MAX_SEQUENCE as u64) as u16
}

fn millis_since_epoch() -> Result<u64, GeneratorError> {
    let unix_millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| GeneratorError::ClockBeforeEpoch)?
        .as_millis() as u64;
    unix_millis
        .checked_sub(EPOCH_MILLIS)
        .ok_or(GeneratorError::ClockBeforeEpoch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_within_millisecond() {
        let mut gen = SnowflakeGenerator::new(123).unwrap();

        let id1 = gen.next_id_at(1_000).unwrap();
        let id2 = gen.next_id_at(1_000).unwrap();
        let id3 = gen.next_id_at(1_000).unwrap();

        assert_eq!(sequence_of(id1), 0);
        assert_eq!(sequence_of(id2), 1);
        assert_eq!(sequence_of(id3), 2);
        assert!(id1 < id2 && id2 < id3);

        for id in [id1, id2, id3] {
            assert_eq!(node_of(id), 123);
            assert_eq!(timestamp_millis(id), EPOCH_MILLIS + 1_000);
        }
    }

    #[test]
    fn test_sequence_resets_on_new_millisecond() {
        let mut gen = SnowflakeGenerator::new(5).unwrap();
        gen.next_id_at(10).unwrap();
        gen.next_id_at(10).unwrap();

        let id = gen.next_id_at(11).unwrap();
        assert_eq!(sequence_of(id), 0);
        assert_eq!(timestamp_millis(id), EPOCH_MILLIS + 11);
    }

    #[test]
    fn test_clock_step_back_stays_monotonic() {
        let mut gen = SnowflakeGenerator::new(1).unwrap();
        let before = gen.next_id_at(500).unwrap();
        let after = gen.next_id_at(400).unwrap();

        assert!(after > before);
        assert_eq!(timestamp_millis(after), EPOCH_MILLIS + 500);
    }

    #[test]
    fn test_sequence_exhaustion() {
        let mut gen = SnowflakeGenerator::new(0).unwrap();
        for _ in 0..=MAX_SEQUENCE {
            assert!(gen.next_id_at(7).is_some());
        }
        assert!(gen.next_id_at(7).is_none());

        let id = gen.next_id_at(8).unwrap();
        assert_eq!(sequence_of(id), 0);
    }

    #[test]
    fn test_invalid_node() {
        assert!(SnowflakeGenerator::new(MAX_NODE).is_ok());
        assert!(matches!(
            SnowflakeGenerator::new(1024),
            Err(GeneratorError::InvalidNode(1024))
        ));
    }

    #[test]
    fn test_next_id_from_clock_non_decreasing() {
        let mut gen = SnowflakeGenerator::new(77).unwrap();
        let mut previous = 0u64;
        for _ in 0..10_000 {
            let id = gen.next_id().unwrap();
            assert!(id > previous);
            assert_eq!(node_of(id), 77);
            previous = id;
        }
    }
}
