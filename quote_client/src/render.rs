//! Text rendering of the trigger button and the quote box.
use std::io::{self, Write};

use quote_common::pointer::Rect;
use quote_common::{Layout, Quote};

/// Label on the trigger button.
pub const TRIGGER_LABEL: &str = "Debug Your Mind";

/// Screen regions of the client.
pub fn default_layout() -> Layout {
    Layout {
        trigger: Rect::new(0, 0, 22, 1),
        quote_box: Rect::new(0, 2, 72, 4),
    }
}

/// Text columns inside a quote box `width` cells wide.
fn inner_width(width: u16) -> usize {
    usize::from(width).saturating_sub(4).max(1)
}

/// Rows the quote box takes for `quote` when drawn `width` cells wide:
/// both borders, the wrapped text and the author line if there is one.
pub fn box_height(quote: &Quote, width: u16) -> u16 {
    let text_rows = wrap(quote.text(), inner_width(width)).len();
    let author_rows = usize::from(!quote.author().is_empty());
    u16::try_from(text_rows + author_rows + 2).unwrap_or(u16::MAX)
}

/// Greedy word wrap; words longer than `width` get a line of their own.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Draw the button, and the quote box when a quote is shown.
pub fn render<W: Write>(
    out: &mut W,
    layout: &Layout,
    quote: Option<&Quote>,
    loading: bool,
) -> io::Result<()> {
    let icon = if loading { "⌛" } else { "💭" };
    writeln!(out, "[{} {}]", icon, TRIGGER_LABEL)?;
    writeln!(out)?;

    if let Some(quote) = quote {
        let inner = inner_width(layout.quote_box.width);
        let border = "─".repeat(inner + 2);

        writeln!(out, "╭{}╮", border)?;
        for line in wrap(quote.text(), inner) {
            writeln!(out, "│ {:<inner$} │", line, inner = inner)?;
        }
        if !quote.author().is_empty() {
            let author = format!("~ {}", quote.author());
            writeln!(out, "│ {:>inner$} │", author, inner = inner)?;
        }
        writeln!(out, "╰{}╯", border)?;
    }
    out.flush()
}
