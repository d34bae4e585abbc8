// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the scour CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The theme comes from
//! `SCOUR_THEME` when set, then `COLORFGBG`, then defaults to dark. Marked
//! keywords are shown bold yellow; without colors (`NO_COLOR`, or output that
//! is not a TTY) they are bracketed instead so pipelines still see them.

use std::sync::OnceLock;

use scour::Fragment;

/// Width between │ and │ (excluding border chars).
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
    if let Ok(theme) = std::env::var("SCOUR_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg", colors 7+ (except 8) are light backgrounds
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
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(RED);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, excluding ANSI codes
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

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Cut `text` to at most `max_chars` characters, ending in `...` when cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = GRAY();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}│{}{}{}{}│{}", border, RESET, content, " ".repeat(pad), border, RESET);
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = GRAY();
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        RESET,
        label_part,
        border,
        "─".repeat(remaining),
        RESET
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", GRAY(), "─".repeat(BOX_WIDTH), RESET);
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

fn style_piece(text: &str, marked: bool, colors: bool) -> String {
    match (marked, colors) {
        (false, _) => text.to_string(),
        (true, true) => format!("{}{}{}{}", BOLD, YELLOW(), text, RESET),
        (true, false) => format!("[{}]", text),
    }
}

/// Fragments on one line, marks styled.
pub fn fragments_inline(fragments: &[Fragment]) -> String {
    let colors = use_colors();
    fragments
        .iter()
        .map(|f| style_piece(f.text(), f.is_marked(), colors))
        .collect()
}

/// Fragments wrapped to lines of at most `width` visible characters.
///
/// Newlines in the text start a new line. Brackets added without colors count
/// towards the width.
pub fn fragments_wrapped(fragments: &[Fragment], width: usize) -> Vec<String> {
    let colors = use_colors();
    let width = width.max(4);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut used = 0;

    for fragment in fragments {
        let marked = fragment.is_marked();
        let extra = if marked && !colors { 2 } else { 0 };
        let mut piece = String::new();

        for c in fragment.text().chars() {
            if c == '\n' || used + extra + 1 > width {
                if !piece.is_empty() {
                    line.push_str(&style_piece(&piece, marked, colors));
                    piece.clear();
                }
                lines.push(std::mem::take(&mut line));
                used = 0;
                if c == '\n' {
                    continue;
                }
            }
            piece.push(if c.is_control() { ' ' } else { c });
            used += 1;
        }
        if !piece.is_empty() {
            line.push_str(&style_piece(&piece, marked, colors));
            used += extra;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// "2/3 keywords, 5 hits" with coverage colored.
pub fn coverage_label(included: usize, keywords: usize, hits: usize) -> String {
    let coverage = format!("{}/{} keywords", included, keywords);
    let coverage = if included == keywords {
        themed(GREEN, &[BOLD], &coverage)
    } else {
        themed(YELLOW, &[], &coverage)
    };
    format!("{}, {}", coverage, themed(GRAY, &[], &format!("{} hits", hits)))
}

/// Format bytes as human-readable size
pub fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    if use_colors() {
        eprintln!("{}{}error:{} {}", BOLD, RED(), RESET, message);
    } else {
        eprintln!("error: {}", message);
    }
}
