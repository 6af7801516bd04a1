pub mod scripted;

use rand::{
    rngs::{StdRng, ThreadRng},
    Rng, SeedableRng,
};
use types::{HistoryLog, Move, Opponent};

pub use crate::scripted::ScriptedOpponent;

/// Picks uniformly from the three moves and ignores the history.
#[derive(Debug, Default)]
pub struct RandomOpponent<R = ThreadRng> {
    rng: R,
}

impl RandomOpponent<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng + std::fmt::Debug> Opponent for RandomOpponent<R> {
    fn select_move(&mut self, _history: &HistoryLog) -> Move {
        Move::ALL[self.rng.gen_range(0..Move::ALL.len())]
    }
}

/// Boxed opponent for the given optional seed.
pub fn random_opponent(seed: Option<u64>) -> Box<dyn Opponent> {
    match seed {
        Some(seed) => {
            log::info!("Using seeded opponent: {seed}");
            Box::new(RandomOpponent::seeded(seed))
        }
        None => Box::new(RandomOpponent::<ThreadRng>::default()),
    }
}
