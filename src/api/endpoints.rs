// Data Dragon endpoint definitions and URL builders

pub const VERSIONS_URL: &str = "https://ddragon.leagueoflegends.com/api/versions.json";
pub const CDN_BASE: &str = "https://ddragon.leagueoflegends.com/cdn";
pub const LOADING_ART_BASE: &str = "https://ddragon.leagueoflegends.com/cdn/img/champion/loading";
pub const SPLASH_ART_BASE: &str = "https://ddragon.leagueoflegends.com/cdn/img/champion/splash";
pub const UGG_BUILD_BASE: &str = "https://u.gg/lol/champions";
pub const OPGG_BUILD_BASE: &str = "https://www.op.gg/champions";

pub const DEFAULT_LOCALE: &str = "pt_BR";

pub fn roster_url(version: &str, locale: &str) -> String {
    format!("{}/{}/data/{}/champion.json", CDN_BASE, version, locale)
}

pub fn detail_url(version: &str, locale: &str, champion_id: &str) -> String {
    format!(
        "{}/{}/data/{}/champion/{}.json",
        CDN_BASE, version, locale, champion_id
    )
}

pub fn loading_art_url(champion_id: &str, variant: u32) -> String {
    format!("{}/{}_{}.jpg", LOADING_ART_BASE, champion_id, variant)
}

pub fn splash_art_url(champion_id: &str, variant: u32) -> String {
    format!("{}/{}_{}.jpg", SPLASH_ART_BASE, champion_id, variant)
}

pub fn passive_icon_url(version: &str, file: &str) -> String {
    format!("{}/{}/img/passive/{}", CDN_BASE, version, file)
}

pub fn spell_icon_url(version: &str, file: &str) -> String {
    format!("{}/{}/img/spell/{}", CDN_BASE, version, file)
}

/// Build sites key champions by a lowercase id without quotes, dots or spaces.
pub fn build_guide_slug(champion_id: &str) -> String {
    champion_id
        .chars()
        .filter(|c| !(*c == '\'' || *c == '.' || c.is_whitespace()))
        .flat_map(char::to_lowercase)
        .collect()
}

pub fn ugg_build_url(champion_id: &str) -> String {
    format!("{}/{}/build", UGG_BUILD_BASE, build_guide_slug(champion_id))
}

pub fn opgg_build_url(champion_id: &str) -> String {
    format!("{}/{}/build", OPGG_BUILD_BASE, build_guide_slug(champion_id))
}
