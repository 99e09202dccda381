// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result tables and index summaries for the searchit CLI.
//!
//! Two screens: `search` draws a boxed result list with a stats footer, and
//! `inspect` draws a summary of the index and cache. Colors come from one of
//! two 24-bit palettes (OneDark, One Light) and are dropped entirely when
//! stdout is piped or `NO_COLOR` is set.
//!
//! The palette is picked once per process: `SEARCHIT_THEME=light|dark` wins,
//! then the background half of `COLORFGBG`, then dark.

use searchit::{EngineMetrics, IndexStats, SearchItem, SearchResult};
use std::sync::OnceLock;

/// Inner width of every box, borders excluded.
pub const BOX_WIDTH: usize = 80;

/// Room for text inside a row after the two-space indent.
const TEXT_WIDTH: usize = BOX_WIDTH - 6;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

// ───────────────────────────────────────────────────────────────────────────
// PALETTES
// ───────────────────────────────────────────────────────────────────────────

type Rgb = (u8, u8, u8);

/// One color per role on the two screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Palette {
    /// Slow timings
    red: Rgb,
    /// Result titles, fast timings
    green: Rgb,
    /// "no matches", medium timings
    yellow: Rgb,
    /// Urls and the inspect banner
    blue: Rgb,
    /// Section labels
    cyan: Rgb,
    /// Box borders and stat labels
    gray: Rgb,
    /// Inspect title
    accent: Rgb,
}

const ONE_DARK: Palette = Palette {
    red: (224, 108, 117),
    green: (152, 195, 121),
    yellow: (229, 192, 123),
    blue: (97, 175, 239),
    cyan: (86, 182, 194),
    gray: (92, 99, 112),
    accent: (102, 217, 239),
};

const ONE_LIGHT: Palette = Palette {
    red: (228, 86, 73),
    green: (80, 161, 79),
    yellow: (193, 132, 1),
    blue: (64, 120, 242),
    cyan: (1, 132, 188),
    gray: (160, 161, 167),
    accent: (1, 112, 158),
};

fn palette_from_env(theme: Option<&str>, colorfgbg: Option<&str>) -> Palette {
    match theme.map(str::to_ascii_lowercase).as_deref() {
        Some("light" | "l") => return ONE_LIGHT,
        Some("dark" | "d") => return ONE_DARK,
        _ => {}
    }

    // "fg;bg" (sometimes "fg;default;bg"); bg 7 and 9..=15 are light
    let light_background = colorfgbg
        .and_then(|value| value.rsplit(';').next())
        .and_then(|bg| bg.parse::<u8>().ok())
        .is_some_and(|bg| bg >= 7 && bg != 8);
    if light_background {
        ONE_LIGHT
    } else {
        ONE_DARK
    }
}

fn palette() -> &'static Palette {
    static PALETTE: OnceLock<Palette> = OnceLock::new();
    PALETTE.get_or_init(|| {
        palette_from_env(
            std::env::var("SEARCHIT_THEME").ok().as_deref(),
            std::env::var("COLORFGBG").ok().as_deref(),
        )
    })
}

/// A palette role, resolved to an escape sequence at print time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Cyan,
    Gray,
    Accent,
}

impl Color {
    fn rgb(self, palette: &Palette) -> Rgb {
        match self {
            Color::Red => palette.red,
            Color::Green => palette.green,
            Color::Yellow => palette.yellow,
            Color::Blue => palette.blue,
            Color::Cyan => palette.cyan,
            Color::Gray => palette.gray,
            Color::Accent => palette.accent,
        }
    }

    fn escape(self) -> String {
        let (r, g, b) = self.rgb(palette());
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }
}

// ───────────────────────────────────────────────────────────────────────────
// TEXT HELPERS
// ───────────────────────────────────────────────────────────────────────────

pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

/// `text` in `color` plus any extra SGR modifiers.
pub fn themed(color: Color, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color.escape(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Border color, or nothing when colors are off.
fn border(color: Color) -> (String, &'static str) {
    if use_colors() {
        (color.escape(), RESET)
    } else {
        (String::new(), "")
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Cut `text` to `max` chars, marking the cut with an ellipsis.
pub fn ellipsize(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}

// ───────────────────────────────────────────────────────────────────────────
// BOXES
// ───────────────────────────────────────────────────────────────────────────

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let (color, reset) = border(Color::Gray);
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{color}│{reset}{content}{}{color}│{reset}", " ".repeat(pad));
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let (color, reset) = border(Color::Gray);
    let label_part = format!("─ {} ", themed(Color::Cyan, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{color}┌{reset}{label_part}{color}{}┐{reset}", "─".repeat(remaining));
}

/// Print section divider: ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let (color, reset) = border(Color::Gray);
    let label_part = format!("─ {} ", themed(Color::Cyan, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{color}├{reset}{label_part}{color}{}┤{reset}", "─".repeat(remaining));
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    let (color, reset) = border(Color::Gray);
    println!("{color}└{}┘{reset}", "─".repeat(BOX_WIDTH));
}

/// Double-line banner with `text` centered:
///
/// ```text
/// ╔════════════════╗
/// ║     title      ║
/// ╚════════════════╝
/// ```
pub fn banner(text: &str) {
    let (color, reset) = border(Color::Blue);
    let colored = themed(Color::Accent, &[BOLD], text);
    let total_pad = BOX_WIDTH.saturating_sub(visible_len(&colored));
    let left_pad = total_pad / 2;

    println!("{color}╔{}╗{reset}", "═".repeat(BOX_WIDTH));
    println!(
        "{color}║{reset}{}{colored}{}{color}║{reset}",
        " ".repeat(left_pad),
        " ".repeat(total_pad - left_pad)
    );
    println!("{color}╚{}╝{reset}", "═".repeat(BOX_WIDTH));
}

// ───────────────────────────────────────────────────────────────────────────
// RESULT ROWS
// ───────────────────────────────────────────────────────────────────────────

/// Color-coded timing value in ms (green=fast, yellow=medium, red=slow)
pub fn timing_ms(value: u64) -> String {
    let text = format!("{} ms", value);
    let color = if value < 5 {
        Color::Green
    } else if value < 50 {
        Color::Yellow
    } else {
        Color::Red
    };
    themed(color, &[], &text)
}

/// Right-aligned label plus value, for stats rows.
pub fn stat_line(label: &str, value: &str) -> String {
    format!("  {:<20}{}", themed(Color::Gray, &[], label), value)
}

fn item_rows(rank: usize, item: &SearchItem) {
    let heading = if item.title.is_empty() { "(untitled)" } else { item.title.as_str() };
    row(&format!("  {:>2}. {}", rank, themed(Color::Green, &[BOLD], &ellipsize(heading, TEXT_WIDTH - 2))));
    row(&format!("      {}", themed(Color::Blue, &[], &ellipsize(&item.url, TEXT_WIDTH - 2))));
    if !item.description.is_empty() {
        row(&format!("      {}", ellipsize(&item.description, TEXT_WIDTH - 2)));
    }
}

// ───────────────────────────────────────────────────────────────────────────
// SEARCH AND INSPECT SCREENS
// ───────────────────────────────────────────────────────────────────────────

/// Render a result table, showing at most `limit` items.
pub fn print_results(query: &str, result: &SearchResult, limit: usize) {
    section_top(&format!("RESULTS for \"{}\"", ellipsize(query, 40)));
    if result.items.is_empty() {
        row(&format!("  {}", themed(Color::Yellow, &[], "no matches")));
    }
    for (rank, item) in result.items.iter().take(limit).enumerate() {
        item_rows(rank + 1, item);
    }

    section_mid("STATS");
    let shown = result.items.len().min(limit);
    row(&stat_line("results", &format!("{} (showing {})", result.stats.result_count, shown)));
    row(&stat_line("duration", &timing_ms(result.stats.duration_ms)));
    section_bot();
}

/// Render index statistics and engine counters.
pub fn print_inspect(corpus: &str, stats: &IndexStats, metrics: &EngineMetrics) {
    banner(&format!("searchit index: {}", ellipsize(corpus, 50)));

    section_top("DOCUMENTS");
    row(&stat_line("documents", &stats.documents.to_string()));
    row(&stat_line("postings", &stats.total_postings.to_string()));
    section_mid("VOCABULARY");
    row(&stat_line("title tokens", &stats.title_tokens.to_string()));
    row(&stat_line("body tokens", &stats.body_tokens.to_string()));
    row(&stat_line("catalogue", &stats.catalogue_len.to_string()));
    section_mid("CACHE");
    row(&stat_line("queries", &metrics.queries.to_string()));
    row(&stat_line("cached entries", &metrics.cached_entries.to_string()));
    section_bot();
}
