use crate::api::models::{ChampionSummaryDto, InfoDto};

use super::tags::display_label;

pub const MAX_STAT: u8 = 10;

/// One playable champion as loaded from the roster feed.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: String,
    pub name: String,
    pub title: String,
    pub blurb: String,
    pub tags: Vec<String>,
    pub stats: StatsVector,
}

impl Entry {
    pub fn tag_labels(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(|raw| display_label(raw))
    }
}

impl From<ChampionSummaryDto> for Entry {
    fn from(dto: ChampionSummaryDto) -> Self {
        Entry {
            id: dto.id,
            name: dto.name,
            title: dto.title,
            blurb: dto.blurb,
            tags: dto.tags,
            stats: StatsVector::from(dto.info),
        }
    }
}

/// Power ratings handed to the chart surface, each clamped to `0..=MAX_STAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsVector {
    pub attack: u8,
    pub defense: u8,
    pub magic: u8,
    pub difficulty: u8,
}

impl StatsVector {
    pub const LABELS: [&'static str; 4] = ["Attack", "Defense", "Magic", "Difficulty"];

    pub fn new(attack: u8, defense: u8, magic: u8, difficulty: u8) -> Self {
        StatsVector {
            attack: attack.min(MAX_STAT),
            defense: defense.min(MAX_STAT),
            magic: magic.min(MAX_STAT),
            difficulty: difficulty.min(MAX_STAT),
        }
    }

    /// A chart is only worth drawing when some dimension is non-zero.
    pub fn has_stats(&self) -> bool {
        self.values().iter().any(|v| *v > 0)
    }

    pub fn values(&self) -> [u8; 4] {
        [self.attack, self.defense, self.magic, self.difficulty]
    }
}

impl From<InfoDto> for StatsVector {
    fn from(info: InfoDto) -> Self {
        StatsVector::new(info.attack, info.defense, info.magic, info.difficulty)
    }
}
