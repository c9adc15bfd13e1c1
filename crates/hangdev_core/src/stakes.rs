//! The elimination ladder: what is at stake with each wrong guess.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// An sRGB color, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, new)]
#[display("#{:02x}{:02x}{:02x}", r, g, b)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    const fn hex(value: u32) -> Self {
        Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }
}

/// Ladder misconfiguration.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum StakesError {
    /// A ladder needs at least the final "total loss" entry.
    #[display("Stakes ladder is empty")]
    EmptyStakesLadder,
    /// A color string is not `#rrggbb`.
    #[display("Invalid color {:?}: expected #rrggbb", _0)]
    InvalidColor(#[error(not(source))] String),
}

impl FromStr for Rgb {
    type Err = StakesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StakesError::InvalidColor(s.to_string());
        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        Ok(Self::hex(value))
    }
}

impl TryFrom<String> for Rgb {
    type Error = StakesError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

/// One rung of the ladder.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct StakesEntry {
    /// Display label, also the narrator lookup key.
    #[new(into)]
    label: String,
    /// Chip background.
    background: Rgb,
    /// Chip text.
    foreground: Rgb,
}

/// Ordered stakes; index 0 is eliminated first.
///
/// The final entry is what remains when the game is lost, so a ladder of N
/// entries tolerates N−1 wrong guesses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StakesLadder {
    entries: Vec<StakesEntry>,
}

const LIGHT: Rgb = Rgb::hex(0xF9F4DA);
const DARK: Rgb = Rgb::hex(0x1E1E1E);

/// Labels, backgrounds and foregrounds of the built-in ladder.
const DEFAULT_LADDER: [(&str, Rgb, Rgb); 9] = [
    ("HTML", Rgb::hex(0xE2680F), LIGHT),
    ("CSS", Rgb::hex(0x328AF1), LIGHT),
    ("JavaScript", Rgb::hex(0xF4EB13), DARK),
    ("React", Rgb::hex(0x2ED3E9), DARK),
    ("TypeScript", Rgb::hex(0x298EC6), LIGHT),
    ("Node.js", Rgb::hex(0x599137), LIGHT),
    ("Python", Rgb::hex(0xFFD742), DARK),
    ("Ruby", Rgb::hex(0xD02B2B), LIGHT),
    ("Assembly", Rgb::hex(0x2D519F), LIGHT),
];

impl StakesLadder {
    /// Builds a ladder from entries in elimination order.
    ///
    /// # Errors
    ///
    /// [`StakesError::EmptyStakesLadder`] if there are no entries.
    #[instrument(skip(entries))]
    pub fn new(entries: Vec<StakesEntry>) -> Result<Self, StakesError> {
        if entries.is_empty() {
            return Err(StakesError::EmptyStakesLadder);
        }
        Ok(Self { entries })
    }

    /// Nine programming languages, Assembly last.
    pub fn builtin() -> Self {
        Self {
            entries: DEFAULT_LADDER
                .iter()
                .map(|(label, bg, fg)| StakesEntry::new(*label, *bg, *fg))
                .collect(),
        }
    }

    /// Maximum wrong guesses tolerated before the game is lost.
    pub fn attempts_allowed(&self) -> usize {
        self.entries.len() - 1
    }

    /// Entry at a 0-based elimination index.
    pub fn get(&self, index: usize) -> Option<&StakesEntry> {
        self.entries.get(index)
    }

    /// Entries in elimination order.
    pub fn entries(&self) -> &[StakesEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: construction rejects an empty ladder.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for StakesLadder {
    fn default() -> Self {
        Self::builtin()
    }
}
