//! DOM parsing for the tailor engine.
//!
//! Wraps html5ever's document parser and converts the reference-counted
//! `RcDom` into an owned tree the sanitize and text passes can walk and
//! mutate without `Rc` plumbing. Comments, doctypes and processing
//! instructions carry nothing any tailoring level keeps, so they are
//! discarded during conversion.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::ParseOpts;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// An owned DOM node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomNode {
  pub node_type: DomNodeType,
  pub children: Vec<DomNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomNodeType {
  Document,
  Element {
    tag_name: String,
    attributes: Vec<(String, String)>,
  },
  Text {
    content: String,
  },
}

impl DomNode {
  pub fn is_element(&self) -> bool {
    matches!(self.node_type, DomNodeType::Element { .. })
  }

  /// The element's lowercase tag name, or `None` for non-element nodes.
  pub fn tag_name(&self) -> Option<&str> {
    match &self.node_type {
      DomNodeType::Element { tag_name, .. } => Some(tag_name),
      _ => None,
    }
  }

  pub fn attr(&self, name: &str) -> Option<&str> {
    match &self.node_type {
      DomNodeType::Element { attributes, .. } => attributes
        .iter()
        .find(|(attr_name, _)| attr_name == name)
        .map(|(_, value)| value.as_str()),
      _ => None,
    }
  }

  /// The `<body>` element of a parsed document, if present.
  ///
  /// The tree builder synthesizes `<html>` and `<body>` even for empty
  /// input, so this only returns `None` on trees that did not come from
  /// [`parse_html`].
  pub fn body(&self) -> Option<&DomNode> {
    let html = self
      .children
      .iter()
      .find(|child| child.tag_name() == Some("html"))?;
    html
      .children
      .iter()
      .find(|child| child.tag_name() == Some("body"))
  }

  pub(crate) fn body_mut(&mut self) -> Option<&mut DomNode> {
    let html = self
      .children
      .iter_mut()
      .find(|child| child.tag_name() == Some("html"))?;
    html
      .children
      .iter_mut()
      .find(|child| child.tag_name() == Some("body"))
  }
}

/// Parse HTML into an owned DOM tree.
///
/// Never fails: the HTML5 tree builder repairs unbalanced and missing
/// elements as part of parsing, which is exactly the repair step the `SAFE`
/// level relies on. Scripting is disabled so `<noscript>` content is parsed
/// as regular markup.
pub fn parse_html(html: &str) -> DomNode {
  let opts = ParseOpts {
    tree_builder: TreeBuilderOpts {
      scripting_enabled: false,
      ..Default::default()
    },
    ..Default::default()
  };

  let dom = parse_document(RcDom::default(), opts).one(html);
  convert_handle(&dom.document).expect("document root always converts")
}

fn convert_handle(handle: &Handle) -> Option<DomNode> {
  let node_type = match handle.data {
    NodeData::Document => DomNodeType::Document,
    NodeData::Element {
      ref name,
      ref attrs,
      ..
    } => DomNodeType::Element {
      tag_name: name.local.to_string(),
      attributes: attrs
        .borrow()
        .iter()
        .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
        .collect(),
    },
    NodeData::Text { ref contents } => DomNodeType::Text {
      content: contents.borrow().to_string(),
    },
    // Comments, doctypes and processing instructions are dropped. Template
    // contents live outside `children` in rcdom and are intentionally not
    // descended into; templates render nothing.
    _ => return None,
  };

  let children = handle
    .children
    .borrow()
    .iter()
    .filter_map(convert_handle)
    .collect();

  Some(DomNode {
    node_type,
    children,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn body_of(html: &str) -> DomNode {
    parse_html(html).body().expect("body").clone()
  }

  #[test]
  fn parse_synthesizes_html_and_body() {
    let root = parse_html("");
    assert!(root.body().is_some());
    assert!(root.body().unwrap().children.is_empty());
  }

  #[test]
  fn parse_repairs_unbalanced_elements() {
    let body = body_of("<b>bold");
    assert_eq!(body.children.len(), 1);
    assert_eq!(body.children[0].tag_name(), Some("b"));
    assert_eq!(
      body.children[0].children[0].node_type,
      DomNodeType::Text {
        content: "bold".to_string()
      }
    );
  }

  #[test]
  fn parse_lowercases_tags_and_attribute_names() {
    let body = body_of("<P CLASS='x'>hi</P>");
    assert_eq!(body.children[0].tag_name(), Some("p"));
    assert_eq!(body.children[0].attr("class"), Some("x"));
  }

  #[test]
  fn parse_decodes_entities_in_text() {
    let body = body_of("<p>a &amp; b</p>");
    assert_eq!(
      body.children[0].children[0].node_type,
      DomNodeType::Text {
        content: "a & b".to_string()
      }
    );
  }

  #[test]
  fn parse_discards_comments_and_doctype() {
    let body = body_of("<!DOCTYPE html><p>x</p><!-- hidden -->");
    assert_eq!(body.children.len(), 1);
    assert_eq!(body.children[0].tag_name(), Some("p"));
  }

  #[test]
  fn leading_script_is_hoisted_out_of_body() {
    // The tree builder places head-eligible leading content in <head>.
    let body = body_of("<script>var x;</script><p>ok</p>");
    assert_eq!(body.children.len(), 1);
    assert_eq!(body.children[0].tag_name(), Some("p"));
  }
}
