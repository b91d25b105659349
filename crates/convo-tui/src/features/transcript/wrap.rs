//! Display-width-aware line wrapping for transcript cells.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::style::{Style, StyledLine, StyledSpan};

/// Wraps text to fit within the given display width.
///
/// Word-wraps on whitespace; words wider than the full width fall back to a
/// character-level break. Uses unicode display width so CJK and emoji count
/// as two columns.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    // Starts a fresh line with `word`, hard-breaking it when it cannot fit
    // any line on its own.
    fn start_line(
        word: &str,
        width: usize,
        lines: &mut Vec<String>,
        current: &mut String,
        current_width: &mut usize,
    ) {
        let word_width = word.width();
        if word_width > width {
            let mut parts = wrap_chars(word, width);
            let last = parts.pop().unwrap_or_default();
            lines.extend(parts);
            *current_width = last.width();
            *current = last;
        } else {
            *current = word.to_string();
            *current_width = word_width;
        }
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if current.is_empty() {
            start_line(word, width, &mut lines, &mut current, &mut current_width);
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
            start_line(word, width, &mut lines, &mut current, &mut current_width);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Breaks a string at character boundaries so each part fits `width` columns.
///
/// Zero-width characters stay attached to the current part. Callers should
/// expand tabs beforehand; their terminal width is not knowable here.
pub fn wrap_chars(text: &str, width: usize) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if ch_width == 0 {
            current.push(ch);
            continue;
        }
        if current_width + ch_width > width && !current.is_empty() {
            parts.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(ch);
        current_width += ch_width;
    }

    if !current.is_empty() {
        parts.push(current);
    }
    if parts.is_empty() {
        parts.push(String::new());
    }

    parts
}

/// Renders message content behind a repeated gutter prefix.
///
/// Paragraphs (hard newlines) are preserved; blank paragraphs keep their own
/// prefixed line so multi-line messages read back the way they were typed.
pub fn prefixed_lines(
    prefix: &str,
    content: &str,
    width: usize,
    prefix_style: Style,
    content_style: Style,
) -> Vec<StyledLine> {
    let prefix_width = prefix.width();
    let content_width = width.saturating_sub(prefix_width).max(10);

    let mut lines = Vec::new();
    for paragraph in content.split('\n') {
        if paragraph.is_empty() {
            lines.push(StyledLine::from_spans(vec![StyledSpan::new(
                prefix,
                prefix_style,
            )]));
            continue;
        }

        for wrapped in wrap_text(paragraph, content_width) {
            lines.push(StyledLine::from_spans(vec![
                StyledSpan::new(prefix, prefix_style),
                StyledSpan::new(wrapped, content_style),
            ]));
        }
    }

    if lines.is_empty() {
        lines.push(StyledLine::from_spans(vec![StyledSpan::new(
            prefix,
            prefix_style,
        )]));
    }

    lines
}
