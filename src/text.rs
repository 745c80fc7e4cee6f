//! Text extraction for the two TEXT levels.
//!
//! One walker, two break styles: block boundaries become `\n` at
//! `TEXT_WITH_BREAK_LINE` and collapse into the surrounding whitespace at
//! `TEXT`. Inline whitespace collapses the way HTML rendering does, and the
//! final string re-escapes markup delimiters so no tag syntax can leak.

use crate::dom::{DomNode, DomNodeType};
use crate::policy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BreakStyle {
  /// Block boundaries and `<br>` produce `\n`.
  Newline,
  /// Block boundaries produce a single space; no `\n` is ever inserted.
  Space,
}

/// Extracts the text content of `body` with the given break style.
pub(crate) fn extract_text(body: &DomNode, style: BreakStyle) -> String {
  let mut out = String::new();
  for child in &body.children {
    walk(&mut out, child, style);
  }

  let trimmed = out.trim_matches(|c| c == ' ' || c == '\n');
  escape_text_output(trimmed)
}

fn walk(out: &mut String, node: &DomNode, style: BreakStyle) {
  match &node.node_type {
    DomNodeType::Text { content } => push_collapsed(out, content),
    DomNodeType::Element { tag_name, .. } => {
      if policy::is_skipped_text_tag(tag_name) {
        return;
      }
      if tag_name == "br" {
        push_forced_break(out, style);
        return;
      }

      let block = policy::is_block_break_tag(tag_name);
      if block {
        push_break(out, style);
      }
      for child in &node.children {
        walk(out, child, style);
      }
      if block {
        push_break(out, style);
      }
    }
    DomNodeType::Document => {
      for child in &node.children {
        walk(out, child, style);
      }
    }
  }
}

fn push_collapsed(out: &mut String, text: &str) {
  for ch in text.chars() {
    if ch.is_whitespace() {
      if !out.is_empty() && !out.ends_with([' ', '\n']) {
        out.push(' ');
      }
    } else {
      out.push(ch);
    }
  }
}

/// A block boundary: at most one break between runs of text.
fn push_break(out: &mut String, style: BreakStyle) {
  match style {
    BreakStyle::Newline => {
      while out.ends_with(' ') {
        out.pop();
      }
      if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
      }
    }
    BreakStyle::Space => {
      if !out.is_empty() && !out.ends_with(' ') {
        out.push(' ');
      }
    }
  }
}

/// `<br>`: explicit breaks stack, so consecutive ones each count.
fn push_forced_break(out: &mut String, style: BreakStyle) {
  match style {
    BreakStyle::Newline => {
      while out.ends_with(' ') {
        out.pop();
      }
      out.push('\n');
    }
    BreakStyle::Space => push_break(out, style),
  }
}

fn escape_text_output(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  for ch in text.chars() {
    match ch {
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&apos;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      _ => out.push(ch),
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::dom::parse_html;

  fn text_of(html: &str, style: BreakStyle) -> String {
    extract_text(parse_html(html).body().expect("body"), style)
  }

  #[test]
  fn paragraph_boundaries_become_newlines() {
    assert_eq!(
      text_of("<p>A</p><p>B</p>", BreakStyle::Newline),
      "A\nB"
    );
  }

  #[test]
  fn paragraph_boundaries_flatten_to_spaces() {
    assert_eq!(text_of("<p>A</p><p>B</p>", BreakStyle::Space), "A B");
  }

  #[test]
  fn nested_blocks_produce_a_single_break() {
    assert_eq!(
      text_of("<div><p>A</p></div><p>B</p>", BreakStyle::Newline),
      "A\nB"
    );
  }

  #[test]
  fn inline_elements_produce_no_break() {
    assert_eq!(
      text_of("<p>A<b>B</b><span>C</span></p>", BreakStyle::Newline),
      "ABC"
    );
  }

  #[test]
  fn consecutive_brs_each_break() {
    assert_eq!(text_of("A<br><br>B", BreakStyle::Newline), "A\n\nB");
    assert_eq!(text_of("A<br><br>B", BreakStyle::Space), "A B");
  }

  #[test]
  fn inline_whitespace_collapses() {
    assert_eq!(
      text_of("<p>A   B\n\tC</p>", BreakStyle::Newline),
      "A B C"
    );
  }

  #[test]
  fn script_and_style_contribute_no_text() {
    assert_eq!(
      text_of("<p>A<script>var x = 1;</script>B</p><style>p{}</style>", BreakStyle::Newline),
      "AB"
    );
  }

  #[test]
  fn markup_delimiters_in_text_are_escaped() {
    assert_eq!(
      text_of("<p>a &lt;b&gt; \"c\"</p>", BreakStyle::Space),
      "a &lt;b&gt; &quot;c&quot;"
    );
  }

  #[test]
  fn list_items_break_per_item() {
    assert_eq!(
      text_of("<ul><li>one</li><li>two</li></ul>", BreakStyle::Newline),
      "one\ntwo"
    );
  }

  #[test]
  fn table_rows_break_per_row() {
    assert_eq!(
      text_of(
        "<table><tr><td>a</td><td>b</td></tr><tr><td>c</td></tr></table>",
        BreakStyle::Newline
      ),
      "ab\nc"
    );
  }
}
