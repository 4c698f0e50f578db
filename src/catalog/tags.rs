use std::fmt;
use std::str::FromStr;

/// Champion class as published by the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Assassin,
    Fighter,
    Mage,
    Marksman,
    Support,
    Tank,
}

impl Tag {
    pub const ALL: [Tag; 6] = [
        Tag::Assassin,
        Tag::Fighter,
        Tag::Mage,
        Tag::Marksman,
        Tag::Support,
        Tag::Tank,
    ];

    /// Name used in the feed's `tags` arrays.
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Assassin => "Assassin",
            Tag::Fighter => "Fighter",
            Tag::Mage => "Mage",
            Tag::Marksman => "Marksman",
            Tag::Support => "Support",
            Tag::Tank => "Tank",
        }
    }

    /// Display-language (pt_BR) label.
    pub fn label(self) -> &'static str {
        match self {
            Tag::Assassin => "Assassino",
            Tag::Fighter => "Lutador",
            Tag::Mage => "Mago",
            Tag::Marksman => "Atirador",
            Tag::Support => "Suporte",
            Tag::Tank => "Tanque",
        }
    }

    /// Accepts the feed name or the display label, ignoring case.
    pub fn parse(input: &str) -> Option<Tag> {
        let needle = input.trim();
        Tag::ALL.into_iter().find(|tag| {
            tag.as_str().eq_ignore_ascii_case(needle) || tag.label().eq_ignore_ascii_case(needle)
        })
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Display label for a raw feed tag. Tags missing from the table are shown as-is.
pub fn display_label(raw: &str) -> &str {
    match Tag::ALL.into_iter().find(|tag| tag.as_str() == raw) {
        Some(tag) => tag.label(),
        None => raw,
    }
}

/// Active category restriction; `All` is the no-restriction sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagFilter {
    #[default]
    All,
    Only(Tag),
}

impl TagFilter {
    pub fn admits(self, raw_tags: &[String]) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Only(tag) => raw_tags.iter().any(|raw| raw == tag.as_str()),
        }
    }
}

impl FromStr for TagFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") || trimmed.eq_ignore_ascii_case("todos") {
            return Ok(TagFilter::All);
        }
        Tag::parse(trimmed)
            .map(TagFilter::Only)
            .ok_or_else(|| format!("unknown class '{}'", trimmed))
    }
}

impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagFilter::All => f.write_str("Todos"),
            TagFilter::Only(tag) => write!(f, "{}", tag),
        }
    }
}
