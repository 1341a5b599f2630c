//! Validated five-dice hand and its per-face occurrence table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::category::{Face, InvalidFace, NUM_FACES};

pub const NUM_DICE: usize = 5;

/// Hand construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    #[error("invalid hand length: expected 5 dice, got {actual}")]
    InvalidLength { actual: usize },
    #[error("die {index} has face {face}, expected 1..=6")]
    FaceOutOfRange { index: usize, face: u8 },
    #[error("invalid die token {token:?}")]
    Parse { token: String },
}

/// Exactly five dice, each in 1..=6. Order is preserved as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "[u8; 5]")]
pub struct Hand([u8; NUM_DICE]);

impl Hand {
    /// Validate a die sequence.
    ///
    /// Fails if the length is not 5 or any die lies outside 1..=6.
    pub fn new(dice: &[u8]) -> Result<Self, HandError> {
        let arr = <[u8; NUM_DICE]>::try_from(dice).map_err(|_| {
            tracing::debug!(len = dice.len(), "rejecting hand of wrong length");
            HandError::InvalidLength { actual: dice.len() }
        })?;
        Self::from_array(arr)
    }

    fn from_array(dice: [u8; NUM_DICE]) -> Result<Self, HandError> {
        for (index, face) in dice.into_iter().enumerate() {
            if let Err(InvalidFace(face)) = Face::try_from(face) {
                tracing::debug!(index, face, "rejecting hand with out-of-range die");
                return Err(HandError::FaceOutOfRange { index, face });
            }
        }
        Ok(Self(dice))
    }

    /// Dice in the order they were given.
    pub fn dice(&self) -> [u8; NUM_DICE] {
        self.0
    }

    /// Sum of all five dice.
    pub fn sum(&self) -> u32 {
        self.0.iter().map(|&d| u32::from(d)).sum()
    }

    pub fn occurrences(&self) -> DiceOccurrences {
        DiceOccurrences::of(self)
    }
}

impl TryFrom<&[u8]> for Hand {
    type Error = HandError;

    fn try_from(dice: &[u8]) -> Result<Self, Self::Error> {
        Hand::new(dice)
    }
}

impl TryFrom<Vec<u8>> for Hand {
    type Error = HandError;

    fn try_from(dice: Vec<u8>) -> Result<Self, Self::Error> {
        Hand::new(&dice)
    }
}

impl TryFrom<[u8; NUM_DICE]> for Hand {
    type Error = HandError;

    fn try_from(dice: [u8; NUM_DICE]) -> Result<Self, Self::Error> {
        Hand::from_array(dice)
    }
}

impl From<Hand> for [u8; NUM_DICE] {
    fn from(hand: Hand) -> Self {
        hand.0
    }
}

/// Parses `"1,2,3,4,5"`, `"1 2 3 4 5"`, or any mix of commas and whitespace.
impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let dice = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(|t| {
                t.parse::<u8>().map_err(|_| HandError::Parse {
                    token: t.to_string(),
                })
            })
            .collect::<Result<Vec<u8>, _>>()?;
        Hand::new(&dice)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e] = self.0;
        write!(f, "{a},{b},{c},{d},{e}")
    }
}

/// Count of each face within a hand. Derived per scoring call, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceOccurrences([u8; NUM_FACES]);

impl DiceOccurrences {
    pub fn of(hand: &Hand) -> Self {
        let mut counts = [0u8; NUM_FACES];
        for &d in &hand.0 {
            // Hand construction guarantees 1..=6.
            counts[usize::from(d) - 1] += 1;
        }
        Self(counts)
    }

    pub fn count(&self, face: Face) -> u8 {
        self.0[face.index()]
    }

    /// Faces appearing at least `n` times, highest face first.
    pub fn faces_with_at_least(&self, n: u8) -> impl Iterator<Item = Face> {
        let counts = *self;
        Face::ALL
            .into_iter()
            .rev()
            .filter(move |&f| counts.count(f) >= n)
    }

    /// True if each of `faces` appears exactly once.
    pub fn each_exactly_once(&self, faces: &[Face]) -> bool {
        faces.iter().all(|&f| self.count(f) == 1)
    }

    pub fn as_array(&self) -> [u8; NUM_FACES] {
        self.0
    }
}
