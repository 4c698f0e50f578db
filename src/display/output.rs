use crate::catalog::{Entry, Query, TagFilter};
use crate::controller::Renderer;
use crate::detail::{AbilitySection, DetailView, SkinGallery};
use colored::*;
use std::io::{self, Write};
use tabled::{settings::Style, Table, Tabled};
use tracing::error;

const BLURB_WIDTH: usize = 60;
const ABILITY_WIDTH: usize = 90;

#[derive(Tabled)]
struct CardRow {
    #[tabled(rename = "ID")]
    id: String,
    name: String,
    title: String,
    classes: String,
    blurb: String,
}

#[derive(Tabled)]
struct AbilityRow {
    key: String,
    name: String,
    description: String,
}

#[derive(Tabled)]
struct SkinRow {
    #[tabled(rename = "#")]
    num: String,
    name: String,
    image: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Renders controller output as text on any writer (stdout in the binary).
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        TerminalRenderer { out: io::stdout() }
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        TerminalRenderer { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, lines: Vec<String>) {
        let mut text = lines.join("\n");
        text.push('\n');
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            error!(error = %e, "failed to write output");
        }
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn cards(&mut self, entries: &[&Entry], query: &Query) {
        let rows: Vec<CardRow> = entries
            .iter()
            .map(|entry| CardRow {
                id: entry.id.clone(),
                name: entry.name.clone(),
                title: entry.title.clone(),
                classes: entry.tag_labels().collect::<Vec<_>>().join(", "),
                blurb: truncate(&strip_markup(&entry.blurb), BLURB_WIDTH),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::rounded());

        self.emit(vec![
            format!(
                "\n{} {}",
                format!("🏆 {} champions", entries.len()).bold().cyan(),
                describe_query(query).dimmed()
            ),
            table.to_string(),
        ]);
    }

    fn empty_state(&mut self, query: &Query) {
        let message = match (query.normalized_term().is_empty(), query.tag) {
            (true, TagFilter::Only(tag)) => format!("No champions found in class {}.", tag),
            _ => "Oops! No champion found.".to_string(),
        };
        self.emit(vec![
            format!("\n{} {}", "☹".yellow(), message.yellow()),
            describe_query(query).dimmed().to_string(),
        ]);
    }

    fn detail_loading(&mut self, entry: &Entry) {
        self.emit(vec![
            format!("\n{} — {}", entry.name.bold().cyan(), entry.title.italic()),
            "Fetching records...".dimmed().to_string(),
        ]);
    }

    fn detail(&mut self, view: &DetailView) {
        let mut lines = vec![
            format!("\n{} — {}", view.name.bold().cyan(), view.title.italic()),
            "=".repeat(60).cyan().to_string(),
        ];
        if let Some(notice) = &view.notice {
            lines.push(format!("{} {}", "⚠️".yellow(), notice.yellow()));
        }
        lines.push(strip_markup(&view.description));

        lines.push(format!("\n{}", "Abilities".bold().yellow()));
        match &view.abilities {
            AbilitySection::Loaded(abilities) if !abilities.is_empty() => {
                let rows: Vec<AbilityRow> = abilities
                    .iter()
                    .map(|ability| AbilityRow {
                        key: ability.key.to_string(),
                        name: ability.name.clone(),
                        description: truncate(&strip_markup(&ability.description), ABILITY_WIDTH),
                    })
                    .collect();
                let mut table = Table::new(rows);
                table.with(Style::rounded());
                lines.push(table.to_string());
            }
            AbilitySection::Loaded(_) => lines.push("No abilities listed.".dimmed().to_string()),
            AbilitySection::Unavailable => lines.push("Info unavailable.".red().to_string()),
        }

        lines.push(format!("\n{}", "Playing as".bold().green()));
        lines.extend(tip_lines(&view.ally_tips));
        lines.push(format!("\n{}", "Playing against".bold().red()));
        lines.extend(tip_lines(&view.enemy_tips));

        lines.push(format!("\n{}", "Builds".bold().yellow()));
        lines.push(format!("  u.gg:  {}", view.build_links.ugg));
        lines.push(format!("  op.gg: {}", view.build_links.opgg));
        lines.push(format!("  splash: {}", view.splash_url.dimmed()));

        self.emit(lines);
    }

    fn skins_loading(&mut self, entry: &Entry) {
        self.emit(vec![
            format!("\n{} {}", "🎨".cyan(), entry.name.bold().cyan()),
            "Loading visuals...".dimmed().to_string(),
        ]);
    }

    fn skins(&mut self, gallery: &SkinGallery) {
        let mut lines = vec![format!(
            "\n{} {} ({} skins)",
            "🎨".cyan(),
            gallery.name.bold().cyan(),
            gallery.variants.len()
        )];
        if let Some(notice) = &gallery.notice {
            lines.push(notice.red().to_string());
        }

        let rows: Vec<SkinRow> = gallery
            .variants
            .iter()
            .map(|skin| SkinRow {
                num: skin.num.to_string(),
                name: skin.name.clone(),
                image: skin.image_url.clone(),
            })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        lines.push(table.to_string());
        lines.push(format!("backdrop: {}", gallery.backdrop_url.dimmed()));

        self.emit(lines);
    }

    fn view_closed(&mut self) {
        self.emit(vec!["View closed.".dimmed().to_string()]);
    }

    fn notice(&mut self, message: &str) {
        self.emit(vec![format!("{} {}", "⚠️".yellow(), message.yellow())]);
    }
}

fn describe_query(query: &Query) -> String {
    let term = query.term.trim();
    match (term.is_empty(), query.tag) {
        (true, TagFilter::All) => "(all classes)".to_string(),
        (true, tag) => format!("(class: {})", tag),
        (false, TagFilter::All) => format!("(search: \"{}\")", term),
        (false, tag) => format!("(search: \"{}\", class: {})", term, tag),
    }
}

fn tip_lines(tips: &[String]) -> Vec<String> {
    if tips.is_empty() {
        return vec!["  No tips available.".dimmed().to_string()];
    }
    tips.iter().map(|tip| format!("  • {}", strip_markup(tip))).collect()
}

/// Drops inline markup the feed embeds in text (`<br>`, `<physicalDamage>`, ...).
pub fn strip_markup(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    let mut tag = String::new();
    let mut in_tag = false;

    for c in text.chars() {
        match (in_tag, c) {
            (false, '<') => {
                in_tag = true;
                tag.clear();
            }
            (true, '>') => {
                in_tag = false;
                if tag.trim_end_matches('/').trim().eq_ignore_ascii_case("br") {
                    plain.push(' ');
                }
            }
            (true, c) => tag.push(c),
            (false, c) => plain.push(c),
        }
    }
    if in_tag {
        // unterminated '<' was literal text
        plain.push('<');
        plain.push_str(&tag);
    }
    plain.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}
