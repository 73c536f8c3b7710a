//! RNG module - piece selection
//!
//! Every piece is drawn uniformly and independently from the seven kinds. There
//! is no bag, so repeats and droughts are possible.
//!
//! A scripted mode replays a fixed sequence, which keeps tests and demos
//! deterministic without depending on a particular seed.

use arrayvec::ArrayVec;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::pieces::Piece;
use crate::types::PieceKind;

/// Longest sequence a scripted source can replay.
pub const MAX_SCRIPT_LEN: usize = 64;

#[derive(Debug, Clone)]
enum Source {
    Uniform(StdRng),
    Scripted {
        sequence: ArrayVec<PieceKind, MAX_SCRIPT_LEN>,
        position: usize,
    },
}

/// Piece generator
#[derive(Debug, Clone)]
pub struct PieceRng {
    source: Source,
}

impl PieceRng {
    /// Uniform selection from a seeded generator (same seed, same sequence).
    pub fn new(seed: u64) -> Self {
        Self {
            source: Source::Uniform(StdRng::seed_from_u64(seed)),
        }
    }

    /// Uniform selection seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            source: Source::Uniform(StdRng::from_entropy()),
        }
    }

    /// Replay `sequence` in order, cycling when it runs out.
    ///
    /// Only the first [`MAX_SCRIPT_LEN`] kinds are kept. An empty sequence
    /// falls back to uniform selection with seed 0.
    pub fn scripted(sequence: &[PieceKind]) -> Self {
        if sequence.is_empty() {
            return Self::new(0);
        }
        let sequence = sequence.iter().copied().take(MAX_SCRIPT_LEN).collect();
        Self {
            source: Source::Scripted {
                sequence,
                position: 0,
            },
        }
    }

    /// Draw the next piece kind
    pub fn next_kind(&mut self) -> PieceKind {
        match &mut self.source {
            Source::Uniform(rng) => PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())],
            Source::Scripted { sequence, position } => {
                let kind = sequence[*position % sequence.len()];
                *position = (*position + 1) % sequence.len();
                kind
            }
        }
    }

    /// Draw a piece descriptor: canonical shape, color and material.
    pub fn random_piece(&mut self) -> Piece {
        Piece::new(self.next_kind())
    }
}

impl Default for PieceRng {
    fn default() -> Self {
        Self::new(1)
    }
}
