#![allow(dead_code)]

use champ_catalog::api::models::{AbilityDto, ChampionDetailDto, ChampionSummaryDto, ImageDto, InfoDto, SkinDto};
use champ_catalog::api::ChampionFeed;
use champ_catalog::AppError;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

pub const VERSION: &str = "14.1.1";

/// In-memory feed with the same shape as Data Dragon, plus failure switches.
#[derive(Default)]
pub struct StubFeed {
    pub fail_roster: AtomicBool,
    pub fail_detail: AtomicBool,
    pub detail_calls: AtomicUsize,
}

impl StubFeed {
    pub fn new() -> Self {
        StubFeed::default()
    }

    pub fn failing_details() -> Self {
        let feed = StubFeed::default();
        feed.fail_detail.store(true, Ordering::SeqCst);
        feed
    }
}

impl ChampionFeed for StubFeed {
    fn latest_version(&self) -> Result<String, AppError> {
        Ok(VERSION.to_string())
    }

    fn roster(&self, version: &str) -> Result<Vec<ChampionSummaryDto>, AppError> {
        assert_eq!(version, VERSION);
        if self.fail_roster.load(Ordering::SeqCst) {
            return Err(AppError::HttpError("status 503".to_string()));
        }
        Ok(roster())
    }

    fn champion_detail(&self, version: &str, id: &str) -> Result<ChampionDetailDto, AppError> {
        assert_eq!(version, VERSION);
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_detail.load(Ordering::SeqCst) {
            return Err(AppError::Timeout(10));
        }
        roster()
            .into_iter()
            .find(|c| c.id == id)
            .map(|c| detail(&c))
            .ok_or_else(|| AppError::UnknownChampion(id.to_string()))
    }
}

pub fn summary(id: &str, name: &str, title: &str, tags: &[&str], info: [u8; 4]) -> ChampionSummaryDto {
    ChampionSummaryDto {
        id: id.to_string(),
        name: name.to_string(),
        title: title.to_string(),
        blurb: format!("{} blurb", name),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        info: InfoDto {
            attack: info[0],
            defense: info[1],
            magic: info[2],
            difficulty: info[3],
        },
    }
}

pub fn roster() -> Vec<ChampionSummaryDto> {
    vec![
        summary("Aatrox", "Aatrox", "a Espada Darkin", &["Fighter", "Tank"], [8, 4, 3, 4]),
        summary("Ahri", "Ahri", "a Raposa de Nove Caudas", &["Mage", "Assassin"], [3, 4, 8, 5]),
        summary("KSante", "K'Sante", "o Orgulho de Nazumah", &["Tank", "Fighter"], [8, 8, 7, 9]),
        summary("Lux", "Lux", "a Dama da Luz", &["Mage", "Support"], [2, 4, 9, 5]),
        summary("Zed", "Zed", "o Mestre das Sombras", &["Assassin"], [9, 2, 1, 7]),
    ]
}

fn ability(name: &str) -> AbilityDto {
    AbilityDto {
        name: name.to_string(),
        description: format!("{} does things.<br>Twice.", name),
        image: ImageDto {
            full: format!("{}.png", name.replace(' ', "")),
        },
    }
}

pub fn detail(summary: &ChampionSummaryDto) -> ChampionDetailDto {
    ChampionDetailDto {
        id: summary.id.clone(),
        name: summary.name.clone(),
        title: summary.title.clone(),
        lore: format!("{} lore", summary.name),
        passive: Some(ability(&format!("{} Passive", summary.id))),
        spells: ["Q", "W", "E", "R"]
            .iter()
            .map(|key| ability(&format!("{} {}", summary.id, key)))
            .collect(),
        allytips: vec![format!("Play {} well.", summary.name)],
        enemytips: vec![],
        skins: vec![
            SkinDto {
                num: 0,
                name: "default".to_string(),
            },
            SkinDto {
                num: 1,
                name: format!("Justicar {}", summary.name),
            },
        ],
    }
}
