use crate::error::AppError;
use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

// versions.json: newest release first
pub fn decode_latest_version(body: &str) -> Result<String, AppError> {
    let versions: Vec<String> =
        serde_json::from_str(body).map_err(|e| AppError::JsonError(e.to_string()))?;
    versions
        .into_iter()
        .next()
        .ok_or_else(|| AppError::EmptyFeed("version list is empty".to_string()))
}

// champion.json response
#[derive(Debug, Deserialize)]
pub struct RosterResponse {
    #[serde(deserialize_with = "ordered_values")]
    pub data: Vec<ChampionSummaryDto>,
}

impl RosterResponse {
    pub fn decode(body: &str) -> Result<Vec<ChampionSummaryDto>, AppError> {
        let roster: RosterResponse =
            serde_json::from_str(body).map_err(|e| AppError::JsonError(e.to_string()))?;
        if roster.data.is_empty() {
            return Err(AppError::EmptyFeed("roster contains no champions".to_string()));
        }
        Ok(roster.data)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ChampionSummaryDto {
    pub id: String,
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub blurb: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub info: InfoDto,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct InfoDto {
    #[serde(default)]
    pub attack: u8,
    #[serde(default)]
    pub defense: u8,
    #[serde(default)]
    pub magic: u8,
    #[serde(default)]
    pub difficulty: u8,
}

// champion/{id}.json response
#[derive(Debug, Deserialize)]
pub struct DetailResponse {
    pub data: HashMap<String, ChampionDetailDto>,
}

impl DetailResponse {
    pub fn decode(body: &str, champion_id: &str) -> Result<ChampionDetailDto, AppError> {
        let mut detail: DetailResponse =
            serde_json::from_str(body).map_err(|e| AppError::JsonError(e.to_string()))?;
        detail
            .data
            .remove(champion_id)
            .ok_or_else(|| AppError::UnknownChampion(champion_id.to_string()))
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ChampionDetailDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub lore: String,
    #[serde(default)]
    pub passive: Option<AbilityDto>,
    #[serde(default)]
    pub spells: Vec<AbilityDto>,
    #[serde(default)]
    pub allytips: Vec<String>,
    #[serde(default)]
    pub enemytips: Vec<String>,
    #[serde(default)]
    pub skins: Vec<SkinDto>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AbilityDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub image: ImageDto,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ImageDto {
    pub full: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SkinDto {
    pub num: u32,
    pub name: String,
}

/// Collects the values of a JSON object in document order, dropping the keys.
fn ordered_values<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct ValuesVisitor<T>(PhantomData<T>);

    impl<'de, T> Visitor<'de> for ValuesVisitor<T>
    where
        T: Deserialize<'de>,
    {
        type Value = Vec<T>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an object keyed by champion id")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut values = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((IgnoredAny, value)) = map.next_entry::<IgnoredAny, T>()? {
                values.push(value);
            }
            Ok(values)
        }
    }

    deserializer.deserialize_map(ValuesVisitor(PhantomData))
}
