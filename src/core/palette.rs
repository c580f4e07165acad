use std::collections::BTreeSet;

use rand::distr::Distribution;
use rand::Rng;

use crate::core::error::BoardError;
use crate::core::models::TileTag;

impl TileTag {
    pub const COLORS: [TileTag; 6] = [
        TileTag::Fire,
        TileTag::Water,
        TileTag::Wood,
        TileTag::Dark,
        TileTag::Light,
        TileTag::Heal,
    ];

    pub const ALL: [TileTag; 7] = [
        TileTag::Fire,
        TileTag::Water,
        TileTag::Wood,
        TileTag::Dark,
        TileTag::Light,
        TileTag::Heal,
        TileTag::Empty,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TileTag::Fire => "火",
            TileTag::Water => "水",
            TileTag::Wood => "木",
            TileTag::Dark => "闇",
            TileTag::Light => "光",
            TileTag::Heal => "回復",
            TileTag::Empty => "消す",
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            TileTag::Fire => 'R',
            TileTag::Water => 'B',
            TileTag::Wood => 'G',
            TileTag::Dark => 'D',
            TileTag::Light => 'L',
            TileTag::Heal => 'H',
            TileTag::Empty => '.',
        }
    }

    pub fn from_symbol(ch: char) -> Option<TileTag> {
        TileTag::ALL.into_iter().find(|tag| tag.symbol() == ch)
    }

    /// Display colour as 0xRRGGBB.
    pub fn rgb(&self) -> u32 {
        match self {
            TileTag::Fire => 0xff4b2b,
            TileTag::Water => 0x2a7fff,
            TileTag::Wood => 0x3ac55b,
            TileTag::Dark => 0x7c3aed,
            TileTag::Light => 0xf6c92b,
            TileTag::Heal => 0xff5fa2,
            TileTag::Empty => 0x2a2f3a,
        }
    }

    pub fn next(&self) -> TileTag {
        TileTag::ALL[(*self as usize + 1) % TileTag::ALL.len()]
    }

    pub fn previous(&self) -> TileTag {
        TileTag::ALL[(*self as usize + TileTag::ALL.len() - 1) % TileTag::ALL.len()]
    }
}

/// A non-empty set of tags to draw random cells from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    tags: Vec<TileTag>,
}

impl Palette {
    pub fn new(tags: &BTreeSet<TileTag>) -> Result<Palette, BoardError> {
        if tags.is_empty() {
            return Err(BoardError::EmptyPalette);
        }
        Ok(Palette {
            tags: tags.iter().copied().collect(),
        })
    }

    pub fn tags(&self) -> &[TileTag] {
        &self.tags
    }
}

impl Distribution<TileTag> for Palette {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> TileTag {
        self.tags[rng.random_range(0..self.tags.len())]
    }
}
