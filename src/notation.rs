//! Text notation for quarter turns.
//!
//! A move is a section letter, an index and a direction:
//! `L` (layer), `H` (horizontal cross) or `V` (vertical cross), then the
//! index digits, then `+` (forward) or `-` (backward). For example `L0+`
//! turns the bottom layer forward and `V2-` turns the last column backward.

use std::fmt;
use std::str::FromStr;

use crate::error::PuzzleError;
use crate::section::SectionType;

/// A quarter turn of one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub section: SectionType,
    pub index: usize,
    pub forward: bool,
}

impl Move {
    pub const fn new(section: SectionType, index: usize, forward: bool) -> Self {
        Self {
            section,
            index,
            forward,
        }
    }

    /// The move that undoes this one.
    pub const fn inverse(self) -> Self {
        Self {
            forward: !self.forward,
            ..self
        }
    }
}

fn section_letter(section: SectionType) -> char {
    match section {
        SectionType::Layer => 'L',
        SectionType::HorizontalCross => 'H',
        SectionType::VerticalCross => 'V',
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.forward { '+' } else { '-' };
        write!(f, "{}{}{}", section_letter(self.section), self.index, sign)
    }
}

impl FromStr for Move {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PuzzleError::InvalidMove(s.to_string());

        let mut chars = s.chars();
        let section = match chars.next().map(|c| c.to_ascii_uppercase()) {
            Some('L') => SectionType::Layer,
            Some('H') => SectionType::HorizontalCross,
            Some('V') => SectionType::VerticalCross,
            _ => return Err(invalid()),
        };
        let rest = chars.as_str();
        let forward = match rest.chars().next_back() {
            Some('+') => true,
            Some('-') => false,
            _ => return Err(invalid()),
        };

        let digits = &rest[..rest.len() - 1];
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let index = digits.parse().map_err(|_| invalid())?;

        Ok(Self::new(section, index, forward))
    }
}

/// Parses a whitespace separated list of moves.
pub fn parse_moves(s: &str) -> Result<Vec<Move>, PuzzleError> {
    s.split_whitespace().map(str::parse).collect()
}
