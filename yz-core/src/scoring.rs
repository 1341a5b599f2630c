//! Category scoring for a single hand.
//!
//! Every score is a pure function of the stored hand (and the point values in
//! `ScoringConfig`). The occurrence table is rebuilt on each call that needs it.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::category::{Category, Face, Kind, NUM_CATS};
use crate::config::ScoringConfig;
use crate::hand::{DiceOccurrences, Hand, HandError, NUM_DICE};

const SMALL_STRAIGHT: [Face; 5] = [Face::One, Face::Two, Face::Three, Face::Four, Face::Five];
const LARGE_STRAIGHT: [Face; 5] = [Face::Two, Face::Three, Face::Four, Face::Five, Face::Six];

/// Scores one fixed hand in every category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreCalculator {
    hand: Hand,
    config: ScoringConfig,
}

impl ScoreCalculator {
    /// Calculator with the standard point values.
    pub fn new(hand: Hand) -> Self {
        Self::with_config(hand, ScoringConfig::default())
    }

    pub fn with_config(hand: Hand, config: ScoringConfig) -> Self {
        Self { hand, config }
    }

    pub fn hand(&self) -> Hand {
        self.hand
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Sum of all dice.
    pub fn chance(&self) -> u32 {
        self.hand.sum()
    }

    /// Yatzy points if all five dice match, else 0.
    pub fn yatzy_bonus(&self) -> u32 {
        let dice = self.hand.dice();
        if dice.iter().all(|&d| d == dice[0]) {
            self.config.yatzy_points
        } else {
            0
        }
    }

    /// Sum of the dice showing `face`.
    pub fn score_face(&self, face: Face) -> u32 {
        face_score(&self.hand.occurrences(), face)
    }

    pub fn ones(&self) -> u32 {
        self.score_face(Face::One)
    }

    pub fn twos(&self) -> u32 {
        self.score_face(Face::Two)
    }

    pub fn threes(&self) -> u32 {
        self.score_face(Face::Three)
    }

    pub fn fours(&self) -> u32 {
        self.score_face(Face::Four)
    }

    pub fn fives(&self) -> u32 {
        self.score_face(Face::Five)
    }

    pub fn sixes(&self) -> u32 {
        self.score_face(Face::Six)
    }

    /// Highest repeated face, doubled. 0 if nothing repeats.
    pub fn pair(&self) -> u32 {
        pair_score(&self.hand.occurrences())
    }

    /// Doubled sum of the two repeated faces.
    ///
    /// With fewer than two repeated faces the un-doubled partial sum is
    /// returned instead of 0: `[3, 3, 1, 2, 4]` scores 3.
    pub fn two_pair(&self) -> u32 {
        let (pairs, sum) = self
            .hand
            .occurrences()
            .faces_with_at_least(2)
            .fold((0u32, 0u32), |(n, s), f| (n + 1, s + u32::from(f.value())));
        if pairs == 2 {
            sum * 2
        } else {
            sum
        }
    }

    /// Highest face appearing at least `kind.count()` times, times that count.
    pub fn of_a_kind(&self, kind: Kind) -> u32 {
        of_a_kind_score(&self.hand.occurrences(), kind)
    }

    pub fn three_of_a_kind(&self) -> u32 {
        self.of_a_kind(Kind::Three)
    }

    pub fn four_of_a_kind(&self) -> u32 {
        self.of_a_kind(Kind::Four)
    }

    /// Points for exactly 1-2-3-4-5 in any order.
    pub fn small_straight(&self) -> u32 {
        if self.hand.occurrences().each_exactly_once(&SMALL_STRAIGHT) {
            self.config.small_straight_points
        } else {
            0
        }
    }

    /// Points for exactly 2-3-4-5-6 in any order.
    pub fn large_straight(&self) -> u32 {
        if self.hand.occurrences().each_exactly_once(&LARGE_STRAIGHT) {
            self.config.large_straight_points
        } else {
            0
        }
    }

    /// `pair() + three_of_a_kind()` when both are nonzero, else 0.
    ///
    /// The two reads are independent, so five of a kind also scores here
    /// (`[5, 5, 5, 5, 5]` gives 10 + 15).
    pub fn full_house(&self) -> u32 {
        let occ = self.hand.occurrences();
        let pair = pair_score(&occ);
        let three = of_a_kind_score(&occ, Kind::Three);
        if pair != 0 && three != 0 {
            pair + three
        } else {
            0
        }
    }

    /// Score a single category.
    pub fn score(&self, category: Category) -> u32 {
        if let Some(face) = category.face() {
            return self.score_face(face);
        }
        if let Some(kind) = category.kind() {
            return self.of_a_kind(kind);
        }
        match category {
            Category::Pair => self.pair(),
            Category::TwoPair => self.two_pair(),
            Category::SmallStraight => self.small_straight(),
            Category::LargeStraight => self.large_straight(),
            Category::FullHouse => self.full_house(),
            Category::Chance => self.chance(),
            Category::Yatzy => self.yatzy_bonus(),
            // Covered by the face/kind lookups above.
            Category::Ones
            | Category::Twos
            | Category::Threes
            | Category::Fours
            | Category::Fives
            | Category::Sixes
            | Category::ThreeOfAKind
            | Category::FourOfAKind => 0,
        }
    }

    /// Scores for every category.
    pub fn score_card(&self) -> ScoreCard {
        let card = ScoreCard {
            scores: Category::ALL.map(|c| self.score(c)),
        };
        tracing::trace!(hand = %self.hand, total = card.total(), "scored hand");
        card
    }

    /// Highest-scoring category; ties go to the earliest in scorecard order.
    pub fn best_category(&self) -> (Category, u32) {
        self.score_card().best()
    }
}

fn face_score(occ: &DiceOccurrences, face: Face) -> u32 {
    u32::from(face.value()) * u32::from(occ.count(face))
}

fn pair_score(occ: &DiceOccurrences) -> u32 {
    occ.faces_with_at_least(2)
        .next()
        .map_or(0, |f| 2 * u32::from(f.value()))
}

fn of_a_kind_score(occ: &DiceOccurrences, kind: Kind) -> u32 {
    occ.faces_with_at_least(kind.count())
        .next()
        .map_or(0, |f| u32::from(kind.count()) * u32::from(f.value()))
}

/// All category scores for one hand, indexed in `Category::ALL` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreCard {
    scores: [u32; NUM_CATS],
}

impl ScoreCard {
    pub fn get(&self, category: Category) -> u32 {
        self.scores[category.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL.into_iter().zip(self.scores.iter().copied())
    }

    /// Sum over all categories.
    pub fn total(&self) -> u32 {
        self.scores.iter().sum()
    }

    pub fn as_array(&self) -> [u32; NUM_CATS] {
        self.scores
    }

    /// Highest-scoring category; ties go to the earliest in scorecard order.
    pub fn best(&self) -> (Category, u32) {
        self.iter()
            .fold((Category::ALL[0], self.scores[0]), |best, (cat, score)| {
                if score > best.1 {
                    (cat, score)
                } else {
                    best
                }
            })
    }
}

/// Serialized as a map from category name to score, in scorecard order.
impl Serialize for ScoreCard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(NUM_CATS))?;
        for (cat, score) in self.iter() {
            map.serialize_entry(cat.name(), &score)?;
        }
        map.end()
    }
}

/// One-shot scoring of a raw dice array.
pub fn scores_for_dice(dice: [u8; NUM_DICE]) -> Result<ScoreCard, HandError> {
    let hand = Hand::try_from(dice)?;
    Ok(ScoreCalculator::new(hand).score_card())
}
