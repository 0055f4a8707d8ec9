// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the edusearch CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The theme comes from
//! `EDUSEARCH_THEME` if set, then `COLORFGBG`, then defaults to dark. Colors
//! are dropped when stdout is not a TTY or `NO_COLOR` is set, so piped output
//! stays plain.

use std::sync::OnceLock;

use edusearch::{Dropdown, DropdownGroup, EntityKind};

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("EDUSEARCH_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(u8, u8, u8);

impl Rgb {
    fn fg(self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.0, self.1, self.2)
    }
}

/// Colors by the role they play in a result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub video: Rgb,
    pub course: Rgb,
    pub teacher: Rgb,
    pub community: Rgb,
    /// Borders, subtitles, misses.
    pub muted: Rgb,
    /// Scores by closeness: verbatim, near, within threshold.
    pub exact: Rgb,
    pub close: Rgb,
    pub fair: Rgb,
    pub heading: Rgb,
    pub stat_label: Rgb,
}

// One Dark
const DARK: Palette = Palette {
    video: Rgb(97, 175, 239),
    course: Rgb(152, 195, 121),
    teacher: Rgb(198, 120, 221),
    community: Rgb(229, 192, 123),
    muted: Rgb(92, 99, 112),
    exact: Rgb(166, 226, 46),
    close: Rgb(152, 195, 121),
    fair: Rgb(229, 192, 123),
    heading: Rgb(86, 182, 194),
    stat_label: Rgb(102, 217, 239),
};

// One Light
const LIGHT: Palette = Palette {
    video: Rgb(64, 120, 242),
    course: Rgb(80, 161, 79),
    teacher: Rgb(166, 38, 164),
    community: Rgb(193, 132, 1),
    muted: Rgb(160, 161, 167),
    exact: Rgb(68, 140, 39),
    close: Rgb(80, 161, 79),
    fair: Rgb(193, 132, 1),
    heading: Rgb(1, 132, 188),
    stat_label: Rgb(1, 112, 158),
};

pub fn palette() -> &'static Palette {
    match theme() {
        Theme::Dark => &DARK,
        Theme::Light => &LIGHT,
    }
}

impl Palette {
    fn kind(&self, kind: EntityKind) -> Rgb {
        match kind {
            EntityKind::Video => self.video,
            EntityKind::Course => self.course,
            EntityKind::Teacher => self.teacher,
            EntityKind::Community => self.community,
            EntityKind::Note => self.muted,
        }
    }

    fn score(&self, score: f64) -> Rgb {
        if score < 0.05 {
            self.exact
        } else if score < 0.2 {
            self.close
        } else if score < 0.4 {
            self.fair
        } else {
            self.muted
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply a palette color with optional modifiers, if colors are on.
pub fn themed(color: Rgb, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color.fg(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Length as rendered (ANSI escapes excluded).
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

/// Cut plain text to `max` visible chars, ending in `…` when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let border = border();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}│{}{}{}{}│{}", border, reset(), content, " ".repeat(pad), border, reset());
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    section_line('┌', '┐', label);
}

/// ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    section_line('├', '┤', label);
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset());
}

fn section_line(left: char, right: char, label: &str) {
    let colored_label = themed(palette().heading, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}{}{}{}{}{}",
        border(),
        left,
        reset(),
        label_part,
        border(),
        "─".repeat(remaining),
        right,
        reset()
    );
}

fn border() -> String {
    if use_colors() {
        palette().muted.fg()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Score colored by closeness (lower is better).
pub fn score_value(score: f64) -> String {
    themed(palette().score(score), &[], &format!("{:>5.3}", score))
}

/// Short colored tag for an entity kind.
pub fn kind_badge(kind: EntityKind) -> String {
    let tag = match kind {
        EntityKind::Video => "VID",
        EntityKind::Course => "CRS",
        EntityKind::Teacher => "TCH",
        EntityKind::Community => "GRP",
        EntityKind::Note => "NTE",
    };
    themed(palette().kind(kind), &[], &format!("[{}]", tag))
}

/// Microseconds, colored green under 1ms and yellow above.
pub fn timing_us(value: u128) -> String {
    let color = if value < 1_000 { palette().close } else { palette().fair };
    themed(color, &[], &format!("{}µs", value))
}

// ═══════════════════════════════════════════════════════════════════════════
// RESULT RENDERING
// ═══════════════════════════════════════════════════════════════════════════

fn render_group(group: &DropdownGroup) {
    for item in &group.items {
        let title = truncate(&item.title, 44);
        let subtitle = item
            .subtitle
            .as_deref()
            .map(|s| themed(palette().muted, &[DIM], &truncate(s, 20)))
            .unwrap_or_default();
        row(&format!(
            " {} {} {} {}",
            kind_badge(group.kind),
            score_value(item.score),
            pad_right(&title, 44),
            subtitle
        ));
    }
    if group.has_more {
        let more = format!("+{} more", group.total - group.items.len());
        row(&format!(" {}", themed(palette().muted, &[DIM], &more)));
    }
}

/// Boxed, grouped result list.
pub fn render_results(dropdown: &Dropdown, elapsed_us: u128) {
    let header = format!("\"{}\"  {}", dropdown.query, timing_us(elapsed_us));
    if dropdown.is_empty() {
        section_top(&header);
        row(&format!(" {}", themed(palette().muted, &[DIM], "no matches")));
        section_bot();
        return;
    }

    section_top(&header);
    for group in &dropdown.groups {
        section_mid(&format!("{} ({})", group.label, group.total));
        render_group(group);
    }
    section_bot();
}

/// One `label  value` line inside a box.
pub fn stat_row(label: &str, value: &str) {
    row(&format!(" {} {}", pad_right(&themed(palette().stat_label, &[], label), 18), value));
}
