//! RNG module - deterministic next-piece selection
//!
//! Two randomizers over the configured piece set:
//!
//! - **Uniform**: every draw picks any kind with equal odds
//! - **Bag**: kinds are shuffled into a bag and dealt out; a new bag is
//!   shuffled when the old one is empty
//!
//! Both run on a small seeded LCG so a seed always replays the same sequence.

use arrayvec::ArrayVec;

use crate::config::Randomizer;
use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits: the low bits of a power-of-two LCG cycle with a short period.
        (self.next_u32() >> 16) % max.max(1)
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

type KindSet = ArrayVec<PieceKind, 7>;

/// Source of the next piece kind
#[derive(Debug, Clone)]
pub struct PieceQueue {
    kinds: KindSet,
    randomizer: Randomizer,
    /// Remaining kinds of the current bag, dealt from the back
    bag: KindSet,
    /// Kind chosen for the next draw, so it can be previewed
    next: PieceKind,
    rng: SimpleRng,
}

impl PieceQueue {
    /// `kinds` must be non-empty; extra entries past seven are ignored.
    pub fn new(kinds: &[PieceKind], randomizer: Randomizer, seed: u32) -> Self {
        let kinds: KindSet = kinds.iter().copied().take(7).collect();
        let mut queue = Self {
            next: kinds.first().copied().unwrap_or(PieceKind::O),
            kinds,
            randomizer,
            bag: KindSet::new(),
            rng: SimpleRng::new(seed),
        };
        queue.next = queue.pick();
        queue
    }

    /// Kind the next [`draw`](Self::draw) will return
    pub fn peek(&self) -> PieceKind {
        self.next
    }

    /// Take the next kind
    pub fn draw(&mut self) -> PieceKind {
        let kind = self.next;
        self.next = self.pick();
        kind
    }

    fn pick(&mut self) -> PieceKind {
        if self.kinds.is_empty() {
            return self.next;
        }
        match self.randomizer {
            Randomizer::Uniform => {
                let i = self.rng.next_range(self.kinds.len() as u32) as usize;
                self.kinds[i]
            }
            Randomizer::Bag => {
                if self.bag.is_empty() {
                    self.bag = self.kinds.clone();
                    self.rng.shuffle(&mut self.bag);
                }
                self.bag.pop().unwrap_or(self.next)
            }
        }
    }
}
