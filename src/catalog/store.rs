use crate::api::ChampionFeed;
use crate::error::AppError;
use tracing::{error, info};

use super::entry::Entry;

/// The roster for one session, pinned to the release it was loaded from.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    version: String,
    entries: Vec<Entry>,
}

impl Catalog {
    /// Fetches the current version tag and then the full roster for it.
    ///
    /// Either the whole roster loads or the call fails; nothing is retried.
    pub fn load(feed: &dyn ChampionFeed) -> Result<Self, AppError> {
        let result = feed.latest_version().and_then(|version| {
            let roster = feed.roster(&version)?;
            Ok(Catalog::new(version, roster.into_iter().map(Entry::from).collect()))
        });

        match &result {
            Ok(catalog) => info!(
                version = %catalog.version,
                champions = catalog.entries.len(),
                "catalog loaded"
            ),
            Err(e) => error!(error = %e, "catalog load failed"),
        }
        result
    }

    pub fn new(version: impl Into<String>, entries: Vec<Entry>) -> Self {
        Catalog {
            version: version.into(),
            entries,
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Case-insensitive lookup by id, for ids typed by hand.
    pub fn find(&self, id: &str) -> Option<&Entry> {
        self.get(id)
            .or_else(|| self.entries.iter().find(|e| e.id.eq_ignore_ascii_case(id)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{ChampionDetailDto, ChampionSummaryDto, InfoDto};

    struct FixedFeed {
        version: Result<String, AppError>,
        roster: Result<Vec<ChampionSummaryDto>, AppError>,
    }

    impl ChampionFeed for FixedFeed {
        fn latest_version(&self) -> Result<String, AppError> {
            self.version.clone()
        }

        fn roster(&self, version: &str) -> Result<Vec<ChampionSummaryDto>, AppError> {
            assert_eq!(version, "14.1.1");
            self.roster.clone()
        }

        fn champion_detail(&self, _: &str, id: &str) -> Result<ChampionDetailDto, AppError> {
            Err(AppError::UnknownChampion(id.to_string()))
        }
    }

    fn summary(id: &str) -> ChampionSummaryDto {
        ChampionSummaryDto {
            id: id.to_string(),
            name: id.to_string(),
            title: String::new(),
            blurb: String::new(),
            tags: vec![],
            info: InfoDto::default(),
        }
    }

    #[test]
    fn load_pins_version_and_keeps_order() {
        let feed = FixedFeed {
            version: Ok("14.1.1".to_string()),
            roster: Ok(vec![summary("Zed"), summary("Ahri")]),
        };
        let catalog = Catalog::load(&feed).unwrap();
        assert_eq!(catalog.version(), "14.1.1");
        let ids: Vec<&str> = catalog.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["Zed", "Ahri"]);
    }

    #[test]
    fn version_failure_fails_load() {
        let feed = FixedFeed {
            version: Err(AppError::HttpError("offline".to_string())),
            roster: Ok(vec![summary("Zed")]),
        };
        assert_eq!(
            Catalog::load(&feed),
            Err(AppError::HttpError("offline".to_string()))
        );
    }

    #[test]
    fn roster_failure_fails_load() {
        let feed = FixedFeed {
            version: Ok("14.1.1".to_string()),
            roster: Err(AppError::JsonError("bad".to_string())),
        };
        assert!(Catalog::load(&feed).is_err());
    }

    #[test]
    fn find_ignores_case() {
        let catalog = Catalog::new("1", vec![Entry::from(summary("MonkeyKing"))]);
        assert!(catalog.get("monkeyking").is_none());
        assert_eq!(catalog.find("monkeyking").map(|e| e.id.as_str()), Some("MonkeyKing"));
    }
}
