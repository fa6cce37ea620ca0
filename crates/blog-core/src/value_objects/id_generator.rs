//! Application-side id generation
//!
//! Layout of a generated id:
//! - Bits 63-22: Milliseconds since [`IdGenerator::EPOCH`]
//! - Bits 21-12: Worker ID (0-1023)
//! - Bits 11-0:  Per-millisecond sequence (0-4095)

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

const WORKER_BITS: u32 = 10;
const SEQUENCE_BITS: u32 = 12;
const SEQUENCE_MASK: i64 = (1 << SEQUENCE_BITS) - 1;

/// Lock-free generator of unique, increasing 64-bit ids
///
/// The last issued `(millisecond, sequence)` pair is packed into a single
/// atomic. When the sequence of a millisecond is exhausted it rolls into
/// the next millisecond instead of spinning, so ids stay unique and
/// strictly increasing per generator.
#[derive(Debug)]
pub struct IdGenerator {
    worker_id: u16,
    last_tick: AtomicI64,
}

/// Error returned for an out-of-range worker id
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("worker id {0} out of range (max 1023)")]
pub struct InvalidWorkerId(pub u16);

impl IdGenerator {
    /// Custom epoch: 2024-01-01 00:00:00 UTC (milliseconds)
    pub const EPOCH: i64 = 1_704_067_200_000;

    /// Create a generator for the given worker
    pub fn new(worker_id: u16) -> Result<Self, InvalidWorkerId> {
        if worker_id >= 1 << WORKER_BITS {
            return Err(InvalidWorkerId(worker_id));
        }
        Ok(Self {
            worker_id,
            last_tick: AtomicI64::new(0),
        })
    }

    pub fn worker_id(&self) -> u16 {
        self.worker_id
    }

    /// Generate the next id as a raw i64
    pub fn next_raw(&self) -> i64 {
        let now_tick = Self::now_millis() << SEQUENCE_BITS;
        let previous = self
            .last_tick
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                Some(now_tick.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        let tick = now_tick.max(previous + 1);

        let millis = (tick >> SEQUENCE_BITS) - Self::EPOCH;
        let sequence = tick & SEQUENCE_MASK;
        (millis << (WORKER_BITS + SEQUENCE_BITS))
            | (i64::from(self.worker_id) << SEQUENCE_BITS)
            | sequence
    }

    /// Generate the next id converted into a typed id
    pub fn next_id<T: From<i64>>(&self) -> T {
        T::from(self.next_raw())
    }

    /// Milliseconds since Unix epoch encoded in a generated id
    pub fn timestamp_of(id: i64) -> i64 {
        (id >> (WORKER_BITS + SEQUENCE_BITS)) + Self::EPOCH
    }

    /// Worker id encoded in a generated id
    pub fn worker_of(id: i64) -> u16 {
        ((id >> SEQUENCE_BITS) & ((1 << WORKER_BITS) - 1)) as u16
    }

    fn now_millis() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(Self::EPOCH)
    }
}
