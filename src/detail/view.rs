use crate::api::endpoints;
use crate::catalog::{Entry, StatsVector};
use crate::error::AppError;

use super::record::{Ability, BuildLinks, DetailRecord, SkinVariant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbilitySection {
    Loaded(Vec<Ability>),
    Unavailable,
}

/// Everything the detail panel shows for one champion.
///
/// Built from the catalog entry plus whatever the detail fetch produced; a
/// failed fetch still yields a view, with the blurb standing in for the lore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: String,
    pub name: String,
    pub title: String,
    pub splash_url: String,
    pub description: String,
    pub stats: StatsVector,
    pub abilities: AbilitySection,
    pub ally_tips: Vec<String>,
    pub enemy_tips: Vec<String>,
    pub build_links: BuildLinks,
    pub notice: Option<String>,
}

impl DetailView {
    pub fn resolve(entry: &Entry, fetched: Result<DetailRecord, AppError>) -> Self {
        match fetched {
            Ok(record) => {
                let abilities = record.abilities().cloned().collect();
                DetailView {
                    id: entry.id.clone(),
                    name: entry.name.clone(),
                    title: entry.title.clone(),
                    splash_url: record.splash_url,
                    description: record.lore,
                    stats: entry.stats,
                    abilities: AbilitySection::Loaded(abilities),
                    ally_tips: record.ally_tips,
                    enemy_tips: record.enemy_tips,
                    build_links: record.build_links,
                    notice: None,
                }
            }
            Err(e) => DetailView {
                id: entry.id.clone(),
                name: entry.name.clone(),
                title: entry.title.clone(),
                splash_url: endpoints::splash_art_url(&entry.id, 0),
                description: entry.blurb.clone(),
                stats: entry.stats,
                abilities: AbilitySection::Unavailable,
                ally_tips: vec![],
                enemy_tips: vec![],
                build_links: BuildLinks::for_champion(&entry.id),
                notice: Some(format!("Details unavailable: {}", e)),
            },
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.notice.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkinGallery {
    pub id: String,
    pub name: String,
    pub backdrop_url: String,
    pub variants: Vec<SkinVariant>,
    pub notice: Option<String>,
}

impl SkinGallery {
    /// On failure the gallery still offers the base look, with the error shown inline.
    pub fn resolve(entry: &Entry, fetched: Result<Vec<SkinVariant>, AppError>) -> Self {
        let (variants, notice) = match fetched {
            Ok(variants) if !variants.is_empty() => (variants, None),
            Ok(_) => (vec![SkinVariant::base(&entry.id)], None),
            Err(e) => (
                vec![SkinVariant::base(&entry.id)],
                Some(format!("Failed to load skins: {}", e)),
            ),
        };
        SkinGallery {
            id: entry.id.clone(),
            name: entry.name.clone(),
            backdrop_url: endpoints::splash_art_url(&entry.id, 0),
            variants,
            notice,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.notice.is_some()
    }
}
