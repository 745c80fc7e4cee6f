//! Compact HTML serialization of the owned DOM.
//!
//! Output is deterministic and unformatted: attribute order is preserved
//! from the parse, no indentation or line breaks are introduced, text and
//! attribute values are re-escaped, and void elements get no end tag.

use crate::dom::{DomNode, DomNodeType};

const VOID_ELEMENTS: &[&str] = &[
  "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
  "track", "wbr",
];

fn is_void(tag: &str) -> bool {
  VOID_ELEMENTS.contains(&tag)
}

/// Serializes the children of `node` (not `node` itself) to HTML.
pub(crate) fn serialize_children(node: &DomNode) -> String {
  let mut out = String::new();
  for child in &node.children {
    write_node(&mut out, child);
  }
  out
}

fn write_node(out: &mut String, node: &DomNode) {
  match &node.node_type {
    DomNodeType::Document => {
      for child in &node.children {
        write_node(out, child);
      }
    }
    DomNodeType::Text { content } => escape_text_into(out, content),
    DomNodeType::Element {
      tag_name,
      attributes,
    } => {
      out.push('<');
      out.push_str(tag_name);
      for (name, value) in attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        escape_attr_into(out, value);
        out.push('"');
      }
      out.push('>');
      if is_void(tag_name) {
        return;
      }
      for child in &node.children {
        write_node(out, child);
      }
      out.push_str("</");
      out.push_str(tag_name);
      out.push('>');
    }
  }
}

fn escape_text_into(out: &mut String, text: &str) {
  for ch in text.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      _ => out.push(ch),
    }
  }
}

fn escape_attr_into(out: &mut String, value: &str) {
  for ch in value.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '"' => out.push_str("&quot;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      _ => out.push(ch),
    }
  }
}
