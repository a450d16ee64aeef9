// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! 12-byte document identifiers rendered as 24 hex characters.
//!
//! Layout: 4-byte big-endian Unix seconds, 5 bytes of per-process
//! randomness, 3-byte big-endian counter. Ids generated by one process
//! sort by creation second.

use crate::error::AppError;
use ring::rand::{SecureRandom, SystemRandom};
use std::sync::atomic::{AtomicU32, Ordering};

const COUNTER_MASK: u32 = 0x00ff_ffff;

/// Generator for document identifiers.
#[derive(Debug)]
pub struct ObjectIdGenerator {
    process_unique: [u8; 5],
    counter: AtomicU32,
}

impl ObjectIdGenerator {
    /// Create a generator seeded from the system RNG.
    pub fn new() -> Result<Self, AppError> {
        let rng = SystemRandom::new();
        let mut process_unique = [0u8; 5];
        let mut seed = [0u8; 4];
        rng.fill(&mut process_unique)
            .and_then(|_| rng.fill(&mut seed))
            .map_err(|_| AppError::Internal(anyhow::anyhow!("System RNG unavailable")))?;

        Ok(Self {
            process_unique,
            counter: AtomicU32::new(u32::from_be_bytes(seed) & COUNTER_MASK),
        })
    }

    /// Generate the next identifier.
    pub fn next_id(&self) -> String {
        let seconds = chrono::Utc::now().timestamp() as u32;
        let count = self.counter.fetch_add(1, Ordering::Relaxed) & COUNTER_MASK;

        let mut bytes = [0u8; 12];
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        bytes[4..9].copy_from_slice(&self.process_unique);
        bytes[9..].copy_from_slice(&count.to_be_bytes()[1..]);
        hex::encode(bytes)
    }
}
