use super::entry::Entry;
use super::tags::TagFilter;

/// Free-text term plus category restriction. Both apply together (AND).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub term: String,
    pub tag: TagFilter,
}

impl Query {
    pub fn new(term: impl Into<String>, tag: TagFilter) -> Self {
        Query {
            term: term.into(),
            tag,
        }
    }

    pub fn text(term: impl Into<String>) -> Self {
        Query::new(term, TagFilter::All)
    }

    pub fn tag(tag: TagFilter) -> Self {
        Query::new("", tag)
    }

    pub fn normalized_term(&self) -> String {
        self.term.trim().to_lowercase()
    }

    pub fn is_unrestricted(&self) -> bool {
        self.tag == TagFilter::All && self.normalized_term().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutcome<'a> {
    Matches(Vec<&'a Entry>),
    NoMatches,
}

impl<'a> FilterOutcome<'a> {
    pub fn entries(&self) -> &[&'a Entry] {
        match self {
            FilterOutcome::Matches(entries) => entries,
            FilterOutcome::NoMatches => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FilterOutcome::NoMatches)
    }
}

/// Keeps the entries admitted by `query`, in their original order.
pub fn filter<'a, I>(entries: I, query: &Query) -> FilterOutcome<'a>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let term = query.normalized_term();
    let matched: Vec<&Entry> = entries
        .into_iter()
        .filter(|entry| query.tag.admits(&entry.tags))
        .filter(|entry| term.is_empty() || matches_term(entry, &term))
        .collect();

    if matched.is_empty() {
        FilterOutcome::NoMatches
    } else {
        FilterOutcome::Matches(matched)
    }
}

// `term` must already be trimmed and lowercased
fn matches_term(entry: &Entry, term: &str) -> bool {
    entry.name.to_lowercase().contains(term)
        || entry.title.to_lowercase().contains(term)
        || entry
            .tag_labels()
            .any(|label| label.to_lowercase().contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::entry::StatsVector;
    use crate::catalog::tags::Tag;

    fn entry(id: &str, title: &str, tags: &[&str]) -> Entry {
        Entry {
            id: id.to_string(),
            name: id.to_string(),
            title: title.to_string(),
            blurb: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            stats: StatsVector::default(),
        }
    }

    fn roster() -> Vec<Entry> {
        vec![
            entry("Aatrox", "the Darkin Blade", &["Fighter", "Tank"]),
            entry("Ahri", "the Nine-Tailed Fox", &["Mage", "Assassin"]),
            entry("Zed", "the Master of Shadows", &["Assassin"]),
            entry("Janna", "the Storm's Fury", &["Support", "Mage"]),
        ]
    }

    fn ids<'a>(outcome: &FilterOutcome<'a>) -> Vec<&'a str> {
        outcome.entries().iter().copied().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn title_substring_matches() {
        let catalog = vec![entry("Aatrox", "the Darkin Blade", &["Fighter", "Tank"])];
        let outcome = filter(&catalog, &Query::text("darkin"));
        assert_eq!(ids(&outcome), vec!["Aatrox"]);
    }

    #[test]
    fn translated_tag_matches() {
        let catalog = roster();
        let outcome = filter(&catalog, &Query::text("assassino"));
        assert_eq!(ids(&outcome), vec!["Ahri", "Zed"]);
    }

    #[test]
    fn raw_tag_name_is_not_searched() {
        let catalog = roster();
        // "Support" only exists untranslated; the label is "Suporte"
        assert!(filter(&catalog, &Query::text("support")).is_empty());
    }

    #[test]
    fn no_match_is_distinct_outcome() {
        let catalog = roster();
        let outcome = filter(&catalog, &Query::text("zzz_no_such_champ"));
        assert_eq!(outcome, FilterOutcome::NoMatches);
        assert_eq!(outcome.len(), 0);
    }

    #[test]
    fn term_is_trimmed_and_case_folded() {
        let catalog = roster();
        assert_eq!(ids(&filter(&catalog, &Query::text("  ZED "))), vec!["Zed"]);
    }

    #[test]
    fn blank_term_is_identity() {
        let catalog = roster();
        let outcome = filter(&catalog, &Query::text("   "));
        assert_eq!(ids(&outcome), vec!["Aatrox", "Ahri", "Zed", "Janna"]);
    }

    #[test]
    fn tag_only_keeps_order() {
        let catalog = roster();
        let outcome = filter(&catalog, &Query::tag(TagFilter::Only(Tag::Mage)));
        assert_eq!(ids(&outcome), vec!["Ahri", "Janna"]);
    }

    #[test]
    fn text_and_tag_compose() {
        let catalog = roster();
        let query = Query::new("the", TagFilter::Only(Tag::Assassin));
        assert_eq!(ids(&filter(&catalog, &query)), vec!["Ahri", "Zed"]);

        let query = Query::new("fox", TagFilter::Only(Tag::Support));
        assert!(filter(&catalog, &query).is_empty());
    }

    #[test]
    fn empty_catalog_yields_no_matches() {
        let catalog: Vec<Entry> = vec![];
        assert!(filter(&catalog, &Query::default()).is_empty());
    }
}
