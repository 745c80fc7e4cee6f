//! Per-tag sanitize rules ("design drafts").
//!
//! A draft tells the `SAFE` pass what to do with one tag: keep it, rename
//! it, or remove it with its subtree, and which attributes, class names,
//! inline-style properties and URL prefixes may survive on it. Elements
//! matching no draft at all are removed; the first matching draft wins.

use crate::dom::{DomNode, DomNodeType};
use serde::{Deserialize, Serialize};

/// What a draft does with a matching element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftOperation {
  /// Keep the element, filtered by the draft's allowlists.
  Keep,
  /// Rename the element, then treat it as [`DraftOperation::Keep`].
  Replace { with: String },
  /// Drop the element and its subtree.
  Remove,
}

/// What the sanitize pass discarded, aggregated over the whole document.
///
/// Useful for deciding whether the input was merely untidy or actively
/// hostile (e.g. flag a submission for review when `removed_tag` is set).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TailorReport {
  /// An element was dropped, either by a `Remove` draft or for matching no
  /// draft at all.
  pub removed_tag: bool,
  /// An attribute outside a draft's allowlist was dropped.
  pub removed_attribute: bool,
  /// An inline-style declaration outside a draft's allowlist was dropped.
  pub removed_style: bool,
  /// A `src`/`href` value or `url(...)` payload failed the URL prefix
  /// allowlist and was dropped.
  pub blocked_url: bool,
}

/// A sanitize rule for one tag.
///
/// Allowlists default to empty: a bare `DesignDraft::keep("p")` keeps the
/// element but strips every attribute.
///
/// # Examples
///
/// ```
/// use html_tailor::DesignDraft;
///
/// let link = DesignDraft::keep("a")
///   .allow_attributes(["href", "title"])
///   .allow_urls(["https://example.com/"]);
/// let legacy = DesignDraft::replace("font", "span");
/// let danger = DesignDraft::remove("object");
/// # let _ = (link, legacy, danger);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignDraft {
  tag_name: String,
  operation: DraftOperation,
  allow_attributes: Option<Vec<String>>,
  allow_classes: Option<Vec<String>>,
  allow_styles: Option<Vec<String>>,
  allow_urls: Option<Vec<String>>,
}

impl DesignDraft {
  /// A draft keeping `tag` with no attributes allowed.
  pub fn keep(tag: impl Into<String>) -> Self {
    Self::with_operation(tag, DraftOperation::Keep)
  }

  /// A draft renaming `tag` to `with`.
  pub fn replace(tag: impl Into<String>, with: impl Into<String>) -> Self {
    Self::with_operation(
      tag,
      DraftOperation::Replace {
        with: with.into(),
      },
    )
  }

  /// A draft dropping `tag` and its subtree.
  pub fn remove(tag: impl Into<String>) -> Self {
    Self::with_operation(tag, DraftOperation::Remove)
  }

  fn with_operation(tag: impl Into<String>, operation: DraftOperation) -> Self {
    Self {
      tag_name: tag.into(),
      operation,
      allow_attributes: None,
      allow_classes: None,
      allow_styles: None,
      allow_urls: None,
    }
  }

  /// Attributes that survive on matching elements.
  pub fn allow_attributes<I, S>(mut self, attributes: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.allow_attributes = Some(attributes.into_iter().map(Into::into).collect());
    self
  }

  /// Class names that survive in a kept `class` attribute.
  pub fn allow_classes<I, S>(mut self, classes: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.allow_classes = Some(classes.into_iter().map(Into::into).collect());
    self
  }

  /// Inline-style property names that survive in a kept `style` attribute.
  pub fn allow_styles<I, S>(mut self, styles: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.allow_styles = Some(styles.into_iter().map(Into::into).collect());
    self
  }

  /// URL prefixes that `src`/`href` values and `url(...)` style payloads
  /// must start with.
  pub fn allow_urls<I, S>(mut self, urls: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.allow_urls = Some(urls.into_iter().map(Into::into).collect());
    self
  }

  pub fn tag_name(&self) -> &str {
    &self.tag_name
  }

  pub fn operation(&self) -> &DraftOperation {
    &self.operation
  }

  pub(crate) fn matches(&self, tag: &str) -> bool {
    self.tag_name == tag
  }

  /// Applies this draft to a matching element.
  ///
  /// Returns `false` when the element must be dropped with its subtree.
  pub(crate) fn apply(&self, node: &mut DomNode, report: &mut TailorReport) -> bool {
    match &self.operation {
      DraftOperation::Remove => {
        report.removed_tag = true;
        return false;
      }
      DraftOperation::Replace { with } => {
        if let DomNodeType::Element { tag_name, .. } = &mut node.node_type {
          *tag_name = with.clone();
        }
      }
      DraftOperation::Keep => {}
    }

    self.filter_attributes(node, report);
    self.filter_style(node, report);
    true
  }

  fn allows_attribute(&self, name: &str) -> bool {
    self
      .allow_attributes
      .as_ref()
      .is_some_and(|allowed| allowed.iter().any(|a| a == name))
  }

  fn url_has_allowed_prefix(&self, url: &str) -> bool {
    self
      .allow_urls
      .as_ref()
      .is_some_and(|prefixes| prefixes.iter().any(|p| url.starts_with(p.as_str())))
  }

  fn filter_attributes(&self, node: &mut DomNode, report: &mut TailorReport) {
    let DomNodeType::Element { attributes, .. } = &mut node.node_type else {
      return;
    };

    let before = attributes.len();
    attributes.retain(|(name, _)| self.allows_attribute(name));
    if attributes.len() != before {
      report.removed_attribute = true;
    }

    if let Some(allowed_classes) = &self.allow_classes {
      if let Some(idx) = attributes.iter().position(|(name, _)| name == "class") {
        let kept = attributes[idx]
          .1
          .split_ascii_whitespace()
          .filter(|class| allowed_classes.iter().any(|a| a == class))
          .collect::<Vec<_>>()
          .join(" ");
        if kept.is_empty() {
          attributes.remove(idx);
        } else {
          attributes[idx].1 = kept;
        }
      }
    }

    // URL-bearing attributes survive only with an allowed prefix; a draft
    // without allowed prefixes never keeps them.
    for name in ["src", "href"] {
      let Some(idx) = attributes.iter().position(|(attr, _)| attr == name) else {
        continue;
      };
      if !self.url_has_allowed_prefix(&attributes[idx].1) {
        attributes.remove(idx);
        report.blocked_url = true;
      }
    }
  }

  fn filter_style(&self, node: &mut DomNode, report: &mut TailorReport) {
    let DomNodeType::Element { attributes, .. } = &mut node.node_type else {
      return;
    };
    let Some(idx) = attributes.iter().position(|(name, _)| name == "style") else {
      return;
    };

    let mut kept = String::new();
    let mut dropped = false;
    for declaration in attributes[idx].1.split(';') {
      if declaration.trim().is_empty() {
        continue;
      }
      let Some((key, value)) = declaration.split_once(':') else {
        dropped = true;
        continue;
      };
      let key = key.trim().replace(' ', "");
      let value = value.trim();

      if !self.style_allowed(&key) || !self.style_url_allowed(value) {
        dropped = true;
        continue;
      }
      if !kept.is_empty() {
        kept.push(';');
      }
      kept.push_str(&key);
      kept.push(':');
      kept.push_str(value);
    }

    if dropped {
      report.removed_style = true;
    }
    if kept.is_empty() {
      attributes.remove(idx);
    } else {
      attributes[idx].1 = kept;
    }
  }

  fn style_allowed(&self, key: &str) -> bool {
    self
      .allow_styles
      .as_ref()
      .is_some_and(|allowed| allowed.iter().any(|a| a == key))
  }

  /// Style values may smuggle URLs (`background: url(...)`); check any
  /// `url(` payload against the prefix allowlist.
  fn style_url_allowed(&self, value: &str) -> bool {
    let normalized = value
      .to_ascii_lowercase()
      .replace([' ', '\r', '\n'], "");
    let Some(pos) = normalized.find("url(") else {
      return true;
    };
    // Without configured prefixes a url() payload passes untouched; the
    // style key allowlist is the only gate then.
    if self.allow_urls.as_ref().map_or(true, |urls| urls.is_empty()) {
      return true;
    }
    let payload = normalized[pos + 4..].replace(['"', '\''], "");
    self.url_has_allowed_prefix(&payload)
  }
}
