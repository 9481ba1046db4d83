//! HTML stripping stage: tag markup in, plain-text runs out.
//!
//! ## Run model
//!
//! A single pass over the bytes splits the input at tag boundaries. Every
//! run of text between tags becomes one entry in the returned sequence, so
//! tags act as line breaks regardless of whether the element was block or
//! inline — `<p>Hello, <em>world</em>!</p>` yields `["Hello, ", "world",
//! "!"]`. Runs keep their interior whitespace (the trailing space in
//! `"Hello, "` above survives); only newlines at run edges are trimmed, and
//! runs that are whitespace-only disappear entirely. Basic character
//! references in text are decoded.
//!
//! A `<` opens markup only when followed by an ASCII letter, `/`, `!`, or
//! `?`; a bare `<` (as in `1 < 2`) is ordinary text. `<script>` and
//! `<style>` elements are removed together with their raw content — their
//! text is source code, not prose.
//!
//! Markup the tokenizer cannot bound — a tag, comment, or raw-text element
//! still open at end of input — is an error, not a guess: the caller gets
//! [`NomarkError::HtmlStrip`] naming the offending byte offset.

use crate::error::NomarkError;
use memchr::memchr;

/// Tag names whose content is raw text, dropped along with the element.
const RAW_TEXT_TAGS: [&str; 2] = ["script", "style"];

/// Strip HTML markup from `text`, returning one entry per text run.
///
/// # Errors
/// [`NomarkError::HtmlStrip`] when the input contains markup with no
/// closing delimiter before end of input.
pub fn strip_html(text: &str) -> Result<Vec<String>, NomarkError> {
    let bytes = text.as_bytes();
    let mut runs: Vec<String> = Vec::new();
    let mut buf = String::new();
    let mut pos = 0;

    while pos < bytes.len() {
        match memchr(b'<', &bytes[pos..]) {
            None => {
                buf.push_str(&text[pos..]);
                pos = bytes.len();
            }
            Some(off) => {
                let lt = pos + off;
                buf.push_str(&text[pos..lt]);
                if opens_markup(bytes, lt) {
                    flush_run(&mut runs, &mut buf);
                    pos = skip_markup(text, lt)?;
                } else {
                    buf.push('<');
                    pos = lt + 1;
                }
            }
        }
    }
    flush_run(&mut runs, &mut buf);

    Ok(runs)
}

/// Whether the `<` at `lt` starts markup rather than literal text.
fn opens_markup(bytes: &[u8], lt: usize) -> bool {
    match bytes.get(lt + 1) {
        Some(b) => b.is_ascii_alphabetic() || matches!(b, b'/' | b'!' | b'?'),
        None => false,
    }
}

/// Consume the markup starting at `lt`, returning the byte offset just
/// past it (past the whole element for raw-text tags).
fn skip_markup(text: &str, lt: usize) -> Result<usize, NomarkError> {
    let bytes = text.as_bytes();

    // Comment: runs to the matching "-->".
    if text[lt..].starts_with("<!--") {
        return match text[lt + 4..].find("-->") {
            Some(i) => Ok(lt + 4 + i + 3),
            None => Err(NomarkError::HtmlStrip {
                detail: format!("unterminated comment at byte {lt}"),
            }),
        };
    }

    // Declaration (<!doctype …>) or processing instruction (<?…>): runs to
    // the next '>' with no attribute-quoting rules.
    if matches!(bytes[lt + 1], b'!' | b'?') {
        return match memchr(b'>', &bytes[lt..]) {
            Some(i) => Ok(lt + i + 1),
            None => Err(NomarkError::HtmlStrip {
                detail: format!("unterminated declaration at byte {lt}"),
            }),
        };
    }

    // Ordinary tag: scan for '>' outside quoted attribute values.
    let mut i = lt + 1;
    let mut quote: Option<u8> = None;
    while i < bytes.len() {
        let b = bytes[i];
        match quote {
            Some(q) => {
                if b == q {
                    quote = None;
                }
            }
            None => match b {
                b'"' | b'\'' => quote = Some(b),
                b'>' => {
                    let end = i + 1;
                    if let Some(name) = raw_text_open(text, lt, end) {
                        return skip_raw_text(text, end, name);
                    }
                    return Ok(end);
                }
                _ => {}
            },
        }
        i += 1;
    }
    Err(NomarkError::HtmlStrip {
        detail: format!("unterminated tag at byte {lt}"),
    })
}

/// If the tag spanning `lt..end` opens a raw-text element, return its name.
fn raw_text_open(text: &str, lt: usize, end: usize) -> Option<&'static str> {
    let tag = &text[lt..end];
    if tag.starts_with("</") || tag.ends_with("/>") {
        return None;
    }
    let name: String = tag[1..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect();
    RAW_TEXT_TAGS
        .iter()
        .find(|t| name.eq_ignore_ascii_case(t))
        .copied()
}

/// Consume raw-text content from `start` through the matching `</name…>`.
fn skip_raw_text(text: &str, start: usize, name: &str) -> Result<usize, NomarkError> {
    let bytes = text.as_bytes();
    let mut pos = start;
    while let Some(off) = memchr(b'<', &bytes[pos..]) {
        let lt = pos + off;
        let rest = &bytes[lt..];
        if rest.len() > name.len() + 2
            && rest.starts_with(b"</")
            && rest[2..2 + name.len()].eq_ignore_ascii_case(name.as_bytes())
        {
            if let Some(i) = memchr(b'>', &bytes[lt..]) {
                return Ok(lt + i + 1);
            }
            break;
        }
        pos = lt + 1;
    }
    Err(NomarkError::HtmlStrip {
        detail: format!("unterminated <{name}> element at byte {start}"),
    })
}

/// Finish the pending text run: drop it if whitespace-only, otherwise trim
/// edge newlines, decode character references, and keep it.
fn flush_run(runs: &mut Vec<String>, buf: &mut String) {
    let run = std::mem::take(buf);
    if run.trim().is_empty() {
        return;
    }
    let run = run.trim_matches(['\n', '\r']);
    runs.push(decode_entities(run));
}

/// Decode the five named character references and numeric references.
/// Anything unrecognised stays literal.
fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        match decode_entity(tail) {
            Some((ch, len)) => {
                out.push(ch);
                rest = &tail[len..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Decode one reference at the start of `s` (which begins with `&`),
/// returning the character and the byte length consumed.
fn decode_entity(s: &str) -> Option<(char, usize)> {
    let semi = s[1..].find(';')? + 1;
    let body = &s[1..semi];
    if body.is_empty() || body.len() > 8 {
        return None;
    }
    let ch = match body {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        _ => {
            let num = body.strip_prefix('#')?;
            let cp = if let Some(hex) = num.strip_prefix(['x', 'X']) {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                num.parse::<u32>().ok()?
            };
            char::from_u32(cp)?
        }
    };
    Some((ch, semi + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(text: &str) -> Vec<String> {
        strip_html(text).unwrap()
    }

    #[test]
    fn tags_split_text_into_runs() {
        assert_eq!(
            strip("<p>Hello, <em>world</em>!</p>"),
            ["Hello, ", "world", "!"]
        );
    }

    #[test]
    fn plain_text_is_one_run() {
        assert_eq!(strip("no markup here\nat all"), ["no markup here\nat all"]);
    }

    #[test]
    fn whitespace_only_runs_dropped() {
        assert_eq!(
            strip("<ul>\n  <li>One</li>\n  <li>Two</li>\n</ul>"),
            ["One", "Two"]
        );
    }

    #[test]
    fn edge_newlines_trimmed_but_spaces_kept() {
        assert_eq!(strip("line one\n<br>\nline two"), ["line one", "line two"]);
        // Interior and trailing spaces survive.
        assert_eq!(strip("a  b <i>c</i>"), ["a  b ", "c"]);
    }

    #[test]
    fn bare_less_than_is_text() {
        assert_eq!(strip("1 < 2 and 3 > 1"), ["1 < 2 and 3 > 1"]);
        assert_eq!(strip("ends with <"), ["ends with <"]);
    }

    #[test]
    fn attributes_with_quoted_gt() {
        assert_eq!(
            strip("<a href=\"x?a>b\" title='>'>link</a>"),
            ["link"]
        );
    }

    #[test]
    fn void_and_self_closing_tags() {
        assert_eq!(
            strip("<img src=\"https://example.com/image.jpg\" alt=\"Example Image\">"),
            Vec::<String>::new()
        );
        assert_eq!(strip("a<br/>b"), ["a", "b"]);
    }

    #[test]
    fn comments_and_doctype_removed() {
        assert_eq!(strip("<!-- note -->text<!doctype html>"), ["text"]);
        assert_eq!(strip("a<!-- multi\nline -->b"), ["a", "b"]);
    }

    #[test]
    fn script_and_style_content_dropped() {
        assert_eq!(
            strip("before<script>let x = '<not a tag>';</script>after"),
            ["before", "after"]
        );
        assert_eq!(strip("<style>p { color: red }</style>body"), ["body"]);
        assert_eq!(strip("<SCRIPT>x</SCRIPT>y"), ["y"]);
    }

    #[test]
    fn named_and_numeric_entities_decoded() {
        assert_eq!(strip("a &amp; b &lt;c&gt;"), ["a & b <c>"]);
        assert_eq!(strip("caf&#233; / caf&#xE9;"), ["café / café"]);
        assert_eq!(strip("&unknown; stays"), ["&unknown; stays"]);
        assert_eq!(strip("lone & ampersand"), ["lone & ampersand"]);
    }

    #[test]
    fn unterminated_tag_is_an_error() {
        let err = strip_html("text <em unfinished").unwrap_err();
        assert!(matches!(err, NomarkError::HtmlStrip { .. }));
        assert!(err.to_string().contains("byte 5"), "got: {err}");
    }

    #[test]
    fn unterminated_comment_is_an_error() {
        assert!(strip_html("a <!-- never closed").is_err());
    }

    #[test]
    fn unterminated_script_is_an_error() {
        assert!(strip_html("<script>while(true){}").is_err());
    }

    #[test]
    fn empty_input_yields_no_runs() {
        assert!(strip("").is_empty());
        assert!(strip("<p></p>").is_empty());
    }
}
