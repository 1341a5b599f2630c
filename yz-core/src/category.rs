//! Scoring categories, die faces, and of-a-kind thresholds.
//!
//! Face lookups (ones..sixes) and repetition thresholds (three/four of a kind)
//! are separate types: a `Face` is a pip value, a `Kind` is a required count.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const NUM_FACES: usize = 6;
pub const NUM_CATS: usize = 15;

/// A die face, 1..=6. The discriminant is the pip value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Face {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
}

impl Face {
    /// All faces, lowest first.
    pub const ALL: [Face; NUM_FACES] = [
        Face::One,
        Face::Two,
        Face::Three,
        Face::Four,
        Face::Five,
        Face::Six,
    ];

    /// Pip value (1..=6).
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Map a raw die value to a face. `None` outside 1..=6.
    pub const fn from_pip(pip: u8) -> Option<Face> {
        match pip {
            1 => Some(Face::One),
            2 => Some(Face::Two),
            3 => Some(Face::Three),
            4 => Some(Face::Four),
            5 => Some(Face::Five),
            6 => Some(Face::Six),
            _ => None,
        }
    }

    /// Slot in a 6-entry occurrence table.
    pub(crate) const fn index(self) -> usize {
        self as usize - 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid die face {0}, expected 1..=6")]
pub struct InvalidFace(pub u8);

impl TryFrom<u8> for Face {
    type Error = InvalidFace;

    fn try_from(pip: u8) -> Result<Self, Self::Error> {
        Face::from_pip(pip).ok_or(InvalidFace(pip))
    }
}

/// Of-a-kind threshold. The discriminant is the number of matching dice required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Kind {
    Three = 3,
    Four = 4,
}

impl Kind {
    pub const fn count(self) -> u8 {
        self as u8
    }
}

/// One named scoring rule. Declaration order is scorecard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    Pair,
    TwoPair,
    ThreeOfAKind,
    FourOfAKind,
    SmallStraight,
    LargeStraight,
    FullHouse,
    Chance,
    Yatzy,
}

impl Category {
    /// Categories in scorecard order (index 0..=14).
    pub const ALL: [Category; NUM_CATS] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::FullHouse,
        Category::Chance,
        Category::Yatzy,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable snake_case name; matches the serde representation.
    pub const fn name(self) -> &'static str {
        match self {
            Category::Ones => "ones",
            Category::Twos => "twos",
            Category::Threes => "threes",
            Category::Fours => "fours",
            Category::Fives => "fives",
            Category::Sixes => "sixes",
            Category::Pair => "pair",
            Category::TwoPair => "two_pair",
            Category::ThreeOfAKind => "three_of_a_kind",
            Category::FourOfAKind => "four_of_a_kind",
            Category::SmallStraight => "small_straight",
            Category::LargeStraight => "large_straight",
            Category::FullHouse => "full_house",
            Category::Chance => "chance",
            Category::Yatzy => "yatzy",
        }
    }

    /// The face summed by an upper-section category.
    pub const fn face(self) -> Option<Face> {
        match self {
            Category::Ones => Some(Face::One),
            Category::Twos => Some(Face::Two),
            Category::Threes => Some(Face::Three),
            Category::Fours => Some(Face::Four),
            Category::Fives => Some(Face::Five),
            Category::Sixes => Some(Face::Six),
            _ => None,
        }
    }

    /// The count threshold of an of-a-kind category.
    pub const fn kind(self) -> Option<Kind> {
        match self {
            Category::ThreeOfAKind => Some(Kind::Three),
            Category::FourOfAKind => Some(Kind::Four),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0:?}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
