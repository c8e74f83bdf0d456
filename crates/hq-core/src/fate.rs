//! Zodiac and ascendant draws.
//!
//! Each quiz session gets one zodiac and one ascendant, drawn uniformly and
//! independently. Draws happen on every load and every restart.

use rand::Rng;
use rand::rngs::StdRng;

use crate::content::Sign;

/// The zodiac/ascendant pairing of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fate {
    /// Drawn zodiac, absent when the pool was empty.
    pub zodiac: Option<Sign>,
    /// Drawn ascendant, absent when the pool was empty.
    pub ascendant: Option<Sign>,
}

/// Pick one element of `pool` uniformly, or `None` if it is empty.
fn pick<'a, T>(pool: &'a [T], rng: &mut StdRng) -> Option<&'a T> {
    if pool.is_empty() {
        None
    } else {
        Some(&pool[rng.random_range(0..pool.len())])
    }
}

/// Draw a fresh zodiac/ascendant pairing.
pub fn roll_fate(rng: &mut StdRng, zodiacs: &[Sign], ascendants: &[Sign]) -> Fate {
    Fate {
        zodiac: pick(zodiacs, rng).cloned(),
        ascendant: pick(ascendants, rng).cloned(),
    }
}
