//! Terminal output utilities.
//!
//! Box drawing, the strength bar, ANSI helpers.

use std::io::{self, Write};

use crossterm::style::{Color, Stylize, style};

use crate::pass::{StrengthReport, Tier};

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// Box text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// Horizontal rule between two corners, with an optional inline title:
/// `┌─ Title ──────┐`
fn rule(left: char, title: &str, right: char) -> String {
    let label = if title.is_empty() {
        String::new()
    } else {
        format!("─ {title} ")
    };
    let rest = (BOX_WIDTH - 2).saturating_sub(console_width(&label));
    format!("{left}{label}{}{right}", "─".repeat(rest))
}

/// `│ content │`, padded to the box width. Overlong content is not clipped.
fn boxed(content: &str, align: Align) -> String {
    let slack = (BOX_WIDTH - 4).saturating_sub(console_width(content));
    let left = match align {
        Align::Left => 0,
        Align::Center => slack / 2,
    };
    format!(
        "│ {}{}{} │",
        " ".repeat(left),
        content,
        " ".repeat(slack - left)
    )
}

pub fn box_top(title: &str) {
    println!("{}", rule('┌', title, '┐'));
}

pub fn box_line(content: &str) {
    println!("{}", boxed(content, Align::Left));
}

pub fn box_line_center(content: &str) {
    println!("{}", boxed(content, Align::Center));
}

pub fn box_bottom() {
    println!("{}", rule('└', "", '┘'));
}

/// Print a help option with flag and description, auto-wrapping if needed.
pub fn box_opt(flag: &str, desc: &str) {
    let inner_width = BOX_WIDTH - 4;
    let flag_col = 27;
    let desc_col = inner_width - flag_col;

    let flag_padded = format!("{:<width$.width$}", flag, width = flag_col);
    let lines = wrap(desc, desc_col);

    match lines.first() {
        Some(first) => {
            let padding = desc_col.saturating_sub(first.len());
            println!("│ {}{}{} │", flag_padded, first, " ".repeat(padding));
        }
        None => println!("│ {}{} │", flag_padded, " ".repeat(desc_col)),
    }

    let indent = " ".repeat(flag_col);
    for line in lines.iter().skip(1) {
        let padding = desc_col.saturating_sub(line.len());
        println!("│ {}{}{} │", indent, line, " ".repeat(padding));
    }
}

/// Greedy word wrap.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }
    lines
}

/// Display width, skipping ANSI SGR sequences.
fn console_width(s: &str) -> usize {
    let mut chars = s.chars();
    let mut width = 0;
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Strength Display
// ============================================================================

pub fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::VeryWeak => Color::Red,
        Tier::Weak => Color::DarkYellow,
        Tier::Medium => Color::Yellow,
        Tier::Strong => Color::Green,
        Tier::VeryStrong => Color::Cyan,
    }
}

/// Entropy summary box followed by the tier bar.
pub fn strength_box(report: &StrengthReport, charset_size: usize, source: &str) {
    let tier = style(report.tier.label()).with(tier_color(report.tier)).bold();
    box_top("Strength");
    box_line(&format!("{:.1} bits ({})", report.entropy_bits, tier));
    box_line(&format!("Source: {} • Charset: {} chars", source, charset_size));
    box_bottom();
    progress_bar_box(
        report.tier.weight() as f32,
        &format!("{} • {}%", report.tier, report.tier.weight()),
    );
}

/// Print the tier bar: a 3-line box filled left to right up to `percent`.
pub fn progress_bar_box(percent: f32, stats: &str) {
    for row in bar_rows(percent, stats) {
        println!("{row}");
    }
    flush();
}

/// Top, middle and bottom rows of the bar. The filled part uses half-block
/// edges and inverse video for the text behind it.
fn bar_rows(percent: f32, stats: &str) -> [String; 3] {
    let width = BOX_WIDTH - 2;
    let filled = filled_cells(percent, width);
    let content = centered_cells(stats, width);
    let (head, tail) = content.split_at(filled);
    let head: String = head.iter().collect();
    let tail: String = tail.iter().collect();

    let open = |full, empty| if filled > 0 { full } else { empty };
    let close = |full, empty| if filled == width { full } else { empty };

    let middle = if filled > 0 {
        format!("{}\x1b[7m{head}\x1b[0m{tail}{}", open('▐', '│'), close('▌', '│'))
    } else {
        format!("│{tail}│")
    };

    [
        bar_edge(filled, width, open('▗', '┌'), '▄', close('▖', '┐')),
        middle,
        bar_edge(filled, width, open('▝', '└'), '▀', close('▘', '┘')),
    ]
}

fn bar_edge(filled: usize, width: usize, open: char, fill: char, close: char) -> String {
    let mut row = String::with_capacity((width + 2) * 3);
    row.push(open);
    row.extend(std::iter::repeat_n(fill, filled));
    row.extend(std::iter::repeat_n('─', width - filled));
    row.push(close);
    row
}

fn filled_cells(percent: f32, width: usize) -> usize {
    if percent >= 100.0 {
        width
    } else if percent <= 0.0 {
        0
    } else {
        ((percent / 100.0) * width as f32) as usize
    }
}

fn centered_cells(text: &str, width: usize) -> Vec<char> {
    let text_chars: Vec<char> = text.chars().collect();
    let padding = width.saturating_sub(text_chars.len()) / 2;

    let mut content: Vec<char> = vec![' '; width];
    for (i, ch) in text_chars.iter().enumerate() {
        if padding + i < width {
            content[padding + i] = *ch;
        }
    }
    content
}
