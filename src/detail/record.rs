use crate::api::endpoints;
use crate::api::models::{AbilityDto, ChampionDetailDto, SkinDto};
use std::fmt;
use tracing::warn;

pub const ACTIVE_KEYS: [AbilityKey; 4] = [AbilityKey::Q, AbilityKey::W, AbilityKey::E, AbilityKey::R];

/// Label shown on an ability icon. The passive is always `P`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbilityKey {
    P,
    Q,
    W,
    E,
    R,
}

impl fmt::Display for AbilityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = match self {
            AbilityKey::P => "P",
            AbilityKey::Q => "Q",
            AbilityKey::W => "W",
            AbilityKey::E => "E",
            AbilityKey::R => "R",
        };
        f.write_str(glyph)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ability {
    pub key: AbilityKey,
    pub name: String,
    pub description: String,
    pub icon_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkinVariant {
    pub num: u32,
    pub name: String,
    pub image_url: String,
}

impl SkinVariant {
    pub const DEFAULT_NAME: &'static str = "Padrão";

    pub fn new(champion_id: &str, num: u32, raw_name: &str) -> Self {
        let name = if raw_name == "default" {
            Self::DEFAULT_NAME.to_string()
        } else {
            raw_name.to_string()
        };
        SkinVariant {
            num,
            name,
            image_url: endpoints::loading_art_url(champion_id, num),
        }
    }

    /// The base look every champion ships with.
    pub fn base(champion_id: &str) -> Self {
        SkinVariant::new(champion_id, 0, "default")
    }

    fn from_dto(champion_id: &str, dto: &SkinDto) -> Self {
        SkinVariant::new(champion_id, dto.num, &dto.name)
    }
}

/// Long-form data for one champion, assembled from a detail payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRecord {
    pub id: String,
    pub lore: String,
    pub passive: Option<Ability>,
    pub actives: Vec<Ability>,
    pub ally_tips: Vec<String>,
    pub enemy_tips: Vec<String>,
    pub splash_url: String,
    pub build_links: BuildLinks,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildLinks {
    pub ugg: String,
    pub opgg: String,
}

impl BuildLinks {
    pub fn for_champion(champion_id: &str) -> Self {
        BuildLinks {
            ugg: endpoints::ugg_build_url(champion_id),
            opgg: endpoints::opgg_build_url(champion_id),
        }
    }
}

impl DetailRecord {
    pub fn assemble(version: &str, dto: &ChampionDetailDto) -> Self {
        DetailRecord {
            id: dto.id.clone(),
            lore: dto.lore.clone(),
            passive: dto.passive.as_ref().map(|p| ability(AbilityKey::P, p, version)),
            actives: assemble_actives(&dto.id, version, &dto.spells),
            ally_tips: dto.allytips.clone(),
            enemy_tips: dto.enemytips.clone(),
            splash_url: endpoints::splash_art_url(&dto.id, 0),
            build_links: BuildLinks::for_champion(&dto.id),
        }
    }

    /// Passive first, then the keyed actives.
    pub fn abilities(&self) -> impl Iterator<Item = &Ability> {
        self.passive.iter().chain(self.actives.iter())
    }

    pub fn has_full_kit(&self) -> bool {
        self.passive.is_some() && self.actives.len() == ACTIVE_KEYS.len()
    }
}

pub fn assemble_skins(champion_id: &str, dto: &ChampionDetailDto) -> Vec<SkinVariant> {
    dto.skins
        .iter()
        .map(|skin| SkinVariant::from_dto(champion_id, skin))
        .collect()
}

// Pairs spells with Q/W/E/R in feed order. Short kits are truncated, extras dropped.
fn assemble_actives(champion_id: &str, version: &str, spells: &[AbilityDto]) -> Vec<Ability> {
    if spells.len() != ACTIVE_KEYS.len() {
        warn!(
            champion = champion_id,
            spells = spells.len(),
            "unexpected number of active abilities"
        );
    }
    ACTIVE_KEYS
        .iter()
        .zip(spells)
        .map(|(key, spell)| ability(*key, spell, version))
        .collect()
}

fn ability(key: AbilityKey, dto: &AbilityDto, version: &str) -> Ability {
    let icon_url = match key {
        AbilityKey::P => endpoints::passive_icon_url(version, &dto.image.full),
        _ => endpoints::spell_icon_url(version, &dto.image.full),
    };
    Ability {
        key,
        name: dto.name.clone(),
        description: dto.description.clone(),
        icon_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::ImageDto;

    fn spell(name: &str) -> AbilityDto {
        AbilityDto {
            name: name.to_string(),
            description: format!("{} does things", name),
            image: ImageDto {
                full: format!("{}.png", name),
            },
        }
    }

    fn detail(spells: Vec<AbilityDto>) -> ChampionDetailDto {
        ChampionDetailDto {
            id: "Kaisa".to_string(),
            name: "Kai'Sa".to_string(),
            title: "Daughter of the Void".to_string(),
            lore: "lore".to_string(),
            passive: Some(spell("SecondSkin")),
            spells,
            allytips: vec!["ally".to_string()],
            enemytips: vec![],
            skins: vec![
                SkinDto { num: 0, name: "default".to_string() },
                SkinDto { num: 1, name: "Bullet Angel Kai'Sa".to_string() },
            ],
        }
    }

    #[test]
    fn full_kit_is_keyed_in_order() {
        let dto = detail(vec![spell("Icathian"), spell("Void"), spell("Supercharge"), spell("Killer")]);
        let record = DetailRecord::assemble("14.1.1", &dto);

        assert!(record.has_full_kit());
        let keys: Vec<String> = record.abilities().map(|a| a.key.to_string()).collect();
        assert_eq!(keys, vec!["P", "Q", "W", "E", "R"]);
        assert_eq!(record.actives[3].name, "Killer");
        assert_eq!(
            record.passive.as_ref().unwrap().icon_url,
            "https://ddragon.leagueoflegends.com/cdn/14.1.1/img/passive/SecondSkin.png"
        );
        assert_eq!(
            record.actives[0].icon_url,
            "https://ddragon.leagueoflegends.com/cdn/14.1.1/img/spell/Icathian.png"
        );
    }

    #[test]
    fn short_kit_is_truncated() {
        let dto = detail(vec![spell("One"), spell("Two")]);
        let record = DetailRecord::assemble("14.1.1", &dto);
        assert!(!record.has_full_kit());
        let keys: Vec<AbilityKey> = record.actives.iter().map(|a| a.key).collect();
        assert_eq!(keys, vec![AbilityKey::Q, AbilityKey::W]);
    }

    #[test]
    fn extra_spells_are_dropped() {
        let dto = detail((0..6).map(|i| spell(&format!("S{}", i))).collect());
        let record = DetailRecord::assemble("14.1.1", &dto);
        assert_eq!(record.actives.len(), 4);
        assert_eq!(record.actives[3].name, "S3");
    }

    #[test]
    fn links_and_splash_use_champion_id() {
        let record = DetailRecord::assemble("14.1.1", &detail(vec![]));
        assert_eq!(record.build_links.ugg, "https://u.gg/lol/champions/kaisa/build");
        assert_eq!(
            record.splash_url,
            "https://ddragon.leagueoflegends.com/cdn/img/champion/splash/Kaisa_0.jpg"
        );
    }

    #[test]
    fn default_skin_is_renamed() {
        let skins = assemble_skins("Kaisa", &detail(vec![]));
        assert_eq!(skins[0].name, SkinVariant::DEFAULT_NAME);
        assert_eq!(skins[1].name, "Bullet Angel Kai'Sa");
        assert_eq!(
            skins[1].image_url,
            "https://ddragon.leagueoflegends.com/cdn/img/champion/loading/Kaisa_1.jpg"
        );
    }
}
