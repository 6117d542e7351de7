use std::hash::{Hash, Hasher};

use crate::entities::{Ball, Paddle};
use crate::types::{Arena, GameStatus};

/// Copyable view of the game consumed by the renderer and the input adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub arena: Arena,
    pub ball: Ball,
    pub paddle: Paddle,
    pub score: u32,
    pub status: GameStatus,
    pub show_reset_prompt: bool,
    pub show_quit_prompt: bool,
    pub episode_id: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.status.is_over()
    }

    /// Stable hash of everything drawn on screen.
    ///
    /// Used to skip redundant frames while the picture is static.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1aHasher::new();
        self.hash(&mut h);
        h.finish()
    }
}

/// 64-bit FNV-1a; `DefaultHasher` output is not guaranteed stable.
#[derive(Debug, Clone)]
struct Fnv1aHasher {
    state: u64,
}

impl Fnv1aHasher {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    fn new() -> Self {
        Self {
            state: Self::OFFSET_BASIS,
        }
    }
}

impl Hasher for Fnv1aHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }
}
