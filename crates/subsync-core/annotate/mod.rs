//! Word annotation for clickable subtitle lines
//!
//! Splits block text into words, whitespace and markup, and renders each
//! word as a clickable span carrying its lookup key. Tokens borrow from the
//! input text.
//!
//! # Example
//!
//! ```rust
//! use subsync_core::annotate::annotate;
//!
//! assert_eq!(
//!     annotate("Hi,<br>you!"),
//!     "<span class=\"clickable-word\" data-word=\"Hi\">Hi,</span>\
//!      <br>\
//!      <span class=\"clickable-word\" data-word=\"you\">you!</span>"
//! );
//! ```

use crate::{align::LineKind, parser::LINE_BREAK};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// CSS class marking clickable word spans
pub const WORD_CLASS: &str = "clickable-word";

/// Piece of a subtitle line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordToken<'a> {
    /// Clickable word
    Word {
        /// Token as it appears in the line
        text: &'a str,
        /// Token without surrounding `.,!?`
        key: &'a str,
        /// Position among the line's words, from 0
        index: usize,
    },
    /// Run of whitespace, kept verbatim
    Space(&'a str),
    /// Line-break marker
    Break,
    /// Other markup tag, passed through
    Markup(&'a str),
}

/// Split a line into tokens
///
/// Separators are whitespace runs and [`LINE_BREAK`]. Concatenating the
/// tokens' source text gives back the input.
#[must_use]
pub fn tokenize(text: &str) -> Vec<WordToken<'_>> {
    let mut tokens = Vec::new();
    let mut rest = text;
    let mut index = 0;

    while let Some(first) = rest.chars().next() {
        if let Some(after) = rest.strip_prefix(LINE_BREAK) {
            tokens.push(WordToken::Break);
            rest = after;
        } else if first.is_whitespace() {
            let len = rest
                .find(|c: char| !c.is_whitespace())
                .unwrap_or(rest.len());
            tokens.push(WordToken::Space(&rest[..len]));
            rest = &rest[len..];
        } else {
            let len = word_end(rest);
            let token = &rest[..len];
            if token.starts_with('<') {
                tokens.push(WordToken::Markup(token));
            } else {
                tokens.push(WordToken::Word {
                    text: token,
                    key: lookup_key(token),
                    index,
                });
                index += 1;
            }
            rest = &rest[len..];
        }
    }

    tokens
}

fn word_end(text: &str) -> usize {
    // a break marker may follow a word without whitespace
    let space = text.find(char::is_whitespace).unwrap_or(text.len());
    let brk = text.find(LINE_BREAK).unwrap_or(text.len());
    space.min(brk)
}

/// Lookup key for a token: surrounding `.`, `,`, `!` and `?` removed
///
/// Inner punctuation and other symbols (quotes, dashes) are kept.
#[must_use]
pub fn lookup_key(token: &str) -> &str {
    token.trim_matches(|c: char| matches!(c, '.' | ',' | '!' | '?'))
}

/// Escape text for use inside a double-quoted HTML attribute
#[must_use]
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a line with every word wrapped in a clickable span
#[must_use]
pub fn annotate(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    for token in tokenize(text) {
        match token {
            WordToken::Word { text, key, .. } => {
                out.push_str(&format!(
                    "<span class=\"{WORD_CLASS}\" data-word=\"{}\">{text}</span>",
                    escape_attr(key)
                ));
            }
            WordToken::Space(space) => out.push_str(space),
            WordToken::Break => out.push_str(LINE_BREAK),
            WordToken::Markup(tag) => out.push_str(tag),
        }
    }
    out
}

/// Plain text of a line: breaks become spaces, tags are removed, trimmed
#[must_use]
pub fn plain_text(text: &str) -> String {
    strip_tags(&text.replace(LINE_BREAK, " ")).trim().to_string()
}

fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Plain text of a line with one word wrapped in `<mark>`
///
/// Returns `None` if the line has no word at `word_index`.
#[must_use]
pub fn mark_word(text: &str, word_index: usize) -> Option<String> {
    let mut out = String::with_capacity(text.len() + 13);
    let mut found = false;
    for token in tokenize(text) {
        match token {
            WordToken::Word { text, index, .. } if index == word_index => {
                found = true;
                out.push_str(&format!("<mark>{text}</mark>"));
            }
            WordToken::Word { text, .. } | WordToken::Space(text) => out.push_str(text),
            WordToken::Break => out.push(' '),
            WordToken::Markup(tag) => out.push_str(&strip_tags(tag)),
        }
    }
    found.then(|| out.trim().to_string())
}

/// Word click resolved against its line
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordLookup {
    /// Lookup key of the clicked word
    pub word: String,
    /// Plain text of the whole line
    pub sentence: String,
    /// Language tag of the track the line belongs to
    pub lang_code: String,
}

/// Resolve a click on the `word_index`-th word of a line
///
/// Returns `None` if the index is past the last word.
#[must_use]
pub fn resolve_click(text: &str, word_index: usize, lang_code: &str) -> Option<WordLookup> {
    let word = tokenize(text).into_iter().find_map(|token| match token {
        WordToken::Word { key, index, .. } if index == word_index => Some(key),
        _ => None,
    })?;

    Some(WordLookup {
        word: word.to_string(),
        sentence: plain_text(text),
        lang_code: lang_code.to_string(),
    })
}

/// Position of a word within a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordRef {
    /// Line within the block
    pub line: LineKind,
    /// Word position within the line
    pub word_index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_cover_input() {
        let text = "  Oh,  no!<br><i>really</i>?";
        let rebuilt: String = tokenize(text)
            .into_iter()
            .map(|token| match token {
                WordToken::Word { text, .. } | WordToken::Space(text) | WordToken::Markup(text) => {
                    text
                }
                WordToken::Break => LINE_BREAK,
            })
            .collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn word_indices_skip_markup() {
        let tokens = tokenize("<i>x</i> a b");
        let words: Vec<_> = tokens
            .iter()
            .filter_map(|t| match t {
                WordToken::Word { key, index, .. } => Some((*key, *index)),
                _ => None,
            })
            .collect();
        assert_eq!(words, [("a", 0), ("b", 1)]);
    }

    #[test]
    fn keys_strip_edge_punctuation_only() {
        assert_eq!(lookup_key("Hello,"), "Hello");
        assert_eq!(lookup_key("...why?!"), "why");
        assert_eq!(lookup_key("don't."), "don't");
        assert_eq!(lookup_key("e.g."), "e.g");
        assert_eq!(lookup_key("?!"), "");
    }

    #[test]
    fn attribute_values_are_escaped() {
        assert_eq!(escape_attr(r#"say "hi" & <go>"#), "say &quot;hi&quot; &amp; &lt;go&gt;");
        assert!(annotate("l'eau").contains("data-word=\"l&#39;eau\">l'eau<"));
    }

    #[test]
    fn plain_text_drops_tags() {
        assert_eq!(plain_text(" <i>Hello</i><br>world "), "Hello world");
    }

    #[test]
    fn mark_wraps_selected_word() {
        assert_eq!(
            mark_word("Hello<br>big world", 1).as_deref(),
            Some("Hello <mark>big</mark> world")
        );
        assert_eq!(mark_word("Hello", 4), None);
    }
}
