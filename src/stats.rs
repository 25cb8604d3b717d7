//! Monte Carlo draw statistics over the resolved main deck
//!
//! Two estimators, 10,000 trials each. Both are approximate by design;
//! the sample sizes and two-decimal rounding are fixed so results stay
//! comparable across implementations. The RNG is injectable so tests can
//! seed it for deterministic assertions.

use crate::brigade::Brigade;
use crate::card::CardType;
use crate::resolver::ResolvedDeck;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashSet;

/// Number of Monte Carlo trials per estimator.
pub const TRIALS: u32 = 10_000;

/// Sample size for the M-count draw.
const M_COUNT_DRAW: usize = 8;

/// AoD-count window sizes: opening hand and top-of-deck.
const AOD_OPENING: usize = 3;
const AOD_TOP: usize = 9;

/// Card excluded from the AoD-count pool.
const AOD_CARD: &str = "The Ancient of Days";

/// Substring that marks a qualifying scripture reference.
const AOD_REFERENCE: &str = "Daniel";

/// Monte Carlo analyzer with an injectable random source.
pub struct DeckAnalyzer {
    rng: Box<dyn RngCore>,
}

impl DeckAnalyzer {
    /// Create an analyzer with a fresh thread-local RNG.
    pub fn new() -> Self {
        DeckAnalyzer {
            rng: Box::new(rand::thread_rng()),
        }
    }

    /// Create an analyzer with a seeded RNG (for deterministic testing).
    pub fn with_seed(seed: u64) -> Self {
        DeckAnalyzer {
            rng: Box::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Expected distinct-brigade coverage of a random 8-card draw.
    ///
    /// The pool holds one brigade list per physical copy of every main
    /// deck card that is not a Lost Soul. Each trial draws
    /// `min(8, pool)` cards without replacement and counts the distinct
    /// brigades in the union. Returns the mean over all trials, rounded
    /// to two decimals; an empty pool returns 0.0.
    pub fn m_count(&mut self, deck: &ResolvedDeck) -> f64 {
        let pool: Vec<&[Brigade]> = deck
            .main
            .values()
            .filter(|e| e.card_type != CardType::LostSoul)
            .flat_map(|e| std::iter::repeat(e.brigades.as_slice()).take(e.quantity as usize))
            .collect();
        if pool.is_empty() {
            return 0.0;
        }

        let draw = M_COUNT_DRAW.min(pool.len());
        let mut total = 0usize;
        for _ in 0..TRIALS {
            let mut seen: FxHashSet<Brigade> = FxHashSet::default();
            for idx in rand::seq::index::sample(&mut self.rng, pool.len(), draw) {
                seen.extend(pool[idx].iter().copied());
            }
            total += seen.len();
        }

        round2(total as f64 / f64::from(TRIALS))
    }

    /// Expected count of "Daniel" scripture references in the top 9 cards
    /// of a shuffled deck, conditioned on one appearing in the first 3.
    ///
    /// The pool holds one reference text per physical copy of every main
    /// deck card except The Ancient of Days itself. Trials where no
    /// qualifying reference appears in the first 3 cards score zero.
    /// Returns the mean over all trials, rounded to two decimals; a pool
    /// smaller than 9 returns 0.0.
    pub fn aod_count(&mut self, deck: &ResolvedDeck) -> f64 {
        let mut pool: Vec<&str> = deck
            .main
            .values()
            .filter(|e| e.name != AOD_CARD)
            .flat_map(|e| std::iter::repeat(e.reference.as_str()).take(e.quantity as usize))
            .collect();
        if pool.len() < AOD_TOP {
            return 0.0;
        }

        let mut total = 0usize;
        for _ in 0..TRIALS {
            pool.shuffle(&mut self.rng);
            let opening = pool[..AOD_OPENING]
                .iter()
                .filter(|r| r.contains(AOD_REFERENCE))
                .count();
            if opening == 0 {
                continue;
            }
            total += pool[..AOD_TOP]
                .iter()
                .filter(|r| r.contains(AOD_REFERENCE))
                .count();
        }

        round2(total as f64 / f64::from(TRIALS))
    }
}

impl Default for DeckAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brigade::BrigadeList;
    use crate::card::Alignment;
    use crate::resolver::ResolvedCardEntry;
    use smallvec::smallvec;

    fn entry(
        name: &str,
        quantity: u32,
        card_type: CardType,
        brigades: BrigadeList,
        reference: &str,
    ) -> ResolvedCardEntry {
        ResolvedCardEntry {
            name: name.to_string(),
            quantity,
            card_type,
            alignment: Alignment::Good,
            brigades,
            raw_brigade: String::new(),
            reference: reference.to_string(),
            image_file: String::new(),
        }
    }

    fn deck_with(entries: Vec<ResolvedCardEntry>) -> ResolvedDeck {
        let mut deck = ResolvedDeck::default();
        for e in entries {
            deck.main.insert(e.name.clone(), e);
        }
        deck
    }

    #[test]
    fn test_m_count_single_brigade_is_exactly_one() {
        // Every non-Lost-Soul card shares one brigade, so the union is a
        // single-element set in every trial regardless of sample size.
        let deck = deck_with(vec![
            entry("A", 20, CardType::Hero, smallvec![Brigade::Red], ""),
            entry("B", 20, CardType::GoodEnhancement, smallvec![Brigade::Red], ""),
            entry("Soul", 10, CardType::LostSoul, smallvec![Brigade::Teal], ""),
        ]);
        assert_eq!(DeckAnalyzer::with_seed(1).m_count(&deck), 1.0);
    }

    #[test]
    fn test_m_count_empty_pool_is_zero() {
        let deck = deck_with(vec![entry(
            "Soul",
            10,
            CardType::LostSoul,
            smallvec![Brigade::Teal],
            "",
        )]);
        assert_eq!(DeckAnalyzer::with_seed(1).m_count(&deck), 0.0);
        assert_eq!(DeckAnalyzer::with_seed(1).m_count(&ResolvedDeck::default()), 0.0);
    }

    #[test]
    fn test_m_count_small_pool_draws_whole_pool() {
        // Pool of 3 cards with 3 distinct brigades: every trial draws all
        // of them, so the mean is exactly 3.
        let deck = deck_with(vec![
            entry("A", 1, CardType::Hero, smallvec![Brigade::Red], ""),
            entry("B", 1, CardType::Hero, smallvec![Brigade::Blue], ""),
            entry("C", 1, CardType::Hero, smallvec![Brigade::Green], ""),
        ]);
        assert_eq!(DeckAnalyzer::with_seed(3).m_count(&deck), 3.0);
    }

    #[test]
    fn test_aod_count_small_pool_is_zero() {
        let deck = deck_with(vec![entry(
            "A",
            8,
            CardType::Hero,
            BrigadeList::new(),
            "Daniel 7:9",
        )]);
        assert_eq!(DeckAnalyzer::with_seed(1).aod_count(&deck), 0.0);
    }

    #[test]
    fn test_aod_count_excludes_the_ancient_of_days() {
        // Only the Ancient itself carries enough copies to reach the
        // 9-card minimum; excluding it empties the pool below that.
        let deck = deck_with(vec![
            entry(
                "The Ancient of Days",
                9,
                CardType::Dominant,
                BrigadeList::new(),
                "Daniel 7:9",
            ),
            entry("A", 3, CardType::Hero, BrigadeList::new(), "Daniel 3:25"),
        ]);
        assert_eq!(DeckAnalyzer::with_seed(1).aod_count(&deck), 0.0);
    }

    #[test]
    fn test_aod_count_no_daniel_references_is_zero() {
        let deck = deck_with(vec![entry(
            "A",
            20,
            CardType::Hero,
            BrigadeList::new(),
            "Genesis 1:1",
        )]);
        assert_eq!(DeckAnalyzer::with_seed(1).aod_count(&deck), 0.0);
    }

    #[test]
    fn test_aod_count_all_daniel_references_is_nine() {
        // Every reference qualifies, so every trial sees a hit in the
        // opening 3 and counts all 9 top cards.
        let deck = deck_with(vec![entry(
            "A",
            20,
            CardType::Hero,
            BrigadeList::new(),
            "Daniel 2:21",
        )]);
        assert_eq!(DeckAnalyzer::with_seed(1).aod_count(&deck), 9.0);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let deck = deck_with(vec![
            entry("A", 10, CardType::Hero, smallvec![Brigade::Red], "Daniel 6:22"),
            entry("B", 10, CardType::Hero, smallvec![Brigade::Blue], "Genesis 1:1"),
            entry("C", 10, CardType::Hero, smallvec![Brigade::Green, Brigade::Teal], ""),
        ]);

        let m1 = DeckAnalyzer::with_seed(42).m_count(&deck);
        let m2 = DeckAnalyzer::with_seed(42).m_count(&deck);
        assert_eq!(m1, m2);

        let a1 = DeckAnalyzer::with_seed(42).aod_count(&deck);
        let a2 = DeckAnalyzer::with_seed(42).aod_count(&deck);
        assert_eq!(a1, a2);

        // Sanity bounds: between 1 and 4 distinct brigades are reachable.
        assert!(m1 >= 1.0 && m1 <= 4.0);
    }
}
