//! Markdown stripping stage: Markdown syntax in, plain-text lines out.
//!
//! ## Line model
//!
//! Each logical block — heading, paragraph, list item, blockquote child,
//! table row — flattens to one entry in the returned sequence. Inline
//! markers (emphasis, strong, strikethrough, code-span backticks, link and
//! image syntax) are removed while their text stays inline. Lines that do
//! not already end in sentence-final punctuation get a trailing period, so
//! `# Heading` reads as the sentence "Heading." in the output.
//!
//! Two kinds of content pass through verbatim:
//!
//! - **Code blocks** (fenced or indented): code is not prose, so it keeps
//!   its internal newlines and gets no terminator.
//! - **Raw HTML blocks**: tags stay intact here. When the caller also
//!   enables HTML stripping, that later stage owns tag removal; stripping
//!   them twice with different rules would make the two stages' composition
//!   order observable in ways the contract does not allow. Inline HTML
//!   *tags*, by contrast, are markup inside a text line and are dropped
//!   (their inner text arrives as ordinary text events and survives).

use crate::error::NomarkError;
use once_cell::sync::Lazy;
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use regex::Regex;

/// Lines ending in sentence-final punctuation keep their ending;
/// everything else gets a period appended.
static RE_SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?:;]$").unwrap());

/// Strip Markdown syntax from `text`, returning one entry per logical line.
///
/// GFM extensions in effect: tables, strikethrough, task lists.
///
/// # Errors
/// None today — the parser accepts arbitrary input. The `Result` is the
/// collaborator contract: callers must be prepared for
/// [`NomarkError::MarkdownStrip`] from any conforming implementation.
pub fn strip_markdown(text: &str) -> Result<Vec<String>, NomarkError> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut lines: Vec<String> = Vec::new();
    // Inline text of the block currently being flattened (or, inside a
    // table, of the current cell).
    let mut inline = String::new();
    // Finished cells of the current table row.
    let mut cells: Vec<String> = Vec::new();
    // Verbatim content: code block or raw HTML block.
    let mut raw = String::new();
    let mut in_raw = false;

    for event in Parser::new_ext(text, options) {
        match event {
            Event::Start(tag) => match tag {
                // A new block boundary: whatever inline text is pending
                // belongs to the enclosing block (e.g. a list item's own
                // text before its nested sub-list begins).
                Tag::Paragraph | Tag::Heading { .. } | Tag::Item | Tag::List(_) => {
                    flush_sentence(&mut lines, &mut inline);
                }
                Tag::CodeBlock(_) | Tag::HtmlBlock => {
                    flush_sentence(&mut lines, &mut inline);
                    in_raw = true;
                }
                Tag::TableHead | Tag::TableRow => cells.clear(),
                Tag::TableCell => inline.clear(),
                _ => {}
            },
            Event::End(tag) => match tag {
                TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item => {
                    flush_sentence(&mut lines, &mut inline);
                }
                TagEnd::CodeBlock | TagEnd::HtmlBlock => {
                    in_raw = false;
                    let chunk = raw.trim_end_matches('\n');
                    if !chunk.is_empty() {
                        lines.push(chunk.to_string());
                    }
                    raw.clear();
                }
                TagEnd::TableCell => {
                    cells.push(std::mem::take(&mut inline).trim().to_string());
                }
                // TableHead wraps the header cells directly, so it ends a
                // row just like TableRow does.
                TagEnd::TableHead | TagEnd::TableRow => {
                    let row = cells.join(", ");
                    if !row.trim().is_empty() {
                        lines.push(terminate(row.trim()));
                    }
                    cells.clear();
                }
                _ => {}
            },
            Event::Text(t) => {
                if in_raw {
                    raw.push_str(&t);
                } else {
                    inline.push_str(&t);
                }
            }
            // Code span: keep the text, lose the backticks.
            Event::Code(t) => inline.push_str(&t),
            // Block-level raw HTML passes through untouched.
            Event::Html(t) => raw.push_str(&t),
            // Inline tag markup is dropped; its inner text flows as Text.
            Event::InlineHtml(_) => {}
            // A paragraph is one logical line; soft line breaks join with a
            // space, hard breaks start a new line.
            Event::SoftBreak => inline.push(' '),
            Event::HardBreak => flush_sentence(&mut lines, &mut inline),
            Event::Rule | Event::TaskListMarker(_) | Event::FootnoteReference(_) => {}
            _ => {}
        }
    }
    flush_sentence(&mut lines, &mut inline);

    Ok(lines)
}

/// Push the pending inline text as a finished line, applying the sentence
/// terminator rule. Whitespace-only buffers produce nothing.
fn flush_sentence(lines: &mut Vec<String>, buf: &mut String) {
    let line = std::mem::take(buf);
    let line = line.trim();
    if !line.is_empty() {
        lines.push(terminate(line));
    }
}

fn terminate(line: &str) -> String {
    if RE_SENTENCE_END.is_match(line) {
        line.to_string()
    } else {
        format!("{line}.")
    }
}
