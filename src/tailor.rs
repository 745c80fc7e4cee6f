//! The tailor engine.
//!
//! [`Tailor`] takes possibly malformed HTML plus one [`TailorLevel`] and
//! produces output conforming to that level's fidelity guarantee:
//!
//! ```text
//! NONE ─ passthrough ─ SAFE ─ sanitize ─ TEXT_WITH_BREAK_LINE ─ strip ─ TEXT
//! ```
//!
//! Every call is a pure function of the input, the level and the engine's
//! configuration: no caching, no globals, no clock. Identical arguments
//! always produce byte-identical output.
//!
//! # Example
//!
//! ```
//! use html_tailor::{Tailor, TailorLevel};
//!
//! let tailor = Tailor::new();
//! let dirty = r#"<p onclick="pwn()">Hello <b>world"#;
//!
//! assert_eq!(tailor.tailor(dirty, TailorLevel::None)?, dirty);
//! assert_eq!(
//!   tailor.tailor(dirty, TailorLevel::Safe)?,
//!   "<p>Hello <b>world</b></p>"
//! );
//! assert_eq!(
//!   tailor.tailor(dirty, TailorLevel::Text)?,
//!   "Hello world"
//! );
//! # Ok::<(), html_tailor::Error>(())
//! ```

use crate::blockword::BlockWordFilter;
use crate::dom::{self, DomNode};
use crate::draft::{DesignDraft, TailorReport};
use crate::encoding::decode_html_bytes;
use crate::error::{ResourceError, Result};
use crate::level::TailorLevel;
use crate::policy;
use crate::serialize::serialize_children;
use crate::text::{extract_text, BreakStyle};

/// Per-call switches independent of the engine configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TailorOptions {
  /// Replace configured block words with the patch string in the output.
  ///
  /// Off by default so that `NONE` stays a byte-identical passthrough.
  pub censor_block_words: bool,
}

impl TailorOptions {
  /// Options with block-word censoring enabled.
  pub fn censored() -> Self {
    Self {
      censor_block_words: true,
    }
  }
}

/// Tailored text plus what the sanitize pass discarded to produce it.
///
/// The report only reflects the `SAFE` pass; at other levels it stays at
/// its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TailorOutput {
  pub text: String,
  pub report: TailorReport,
}

/// The repair engine.
///
/// Holds the draft policy, the block-word filter and resource limits. All
/// tailoring methods take `&self`; an engine can be shared freely across
/// threads and concurrent calls.
#[derive(Debug, Clone)]
pub struct Tailor {
  drafts: Vec<DesignDraft>,
  block_words: BlockWordFilter,
  max_input_len: Option<usize>,
}

impl Default for Tailor {
  fn default() -> Self {
    Self::new()
  }
}

impl Tailor {
  /// An engine with the built-in draft policy (see [`policy::default_drafts`]).
  pub fn new() -> Self {
    Self::with_drafts(policy::default_drafts())
  }

  /// An engine with no drafts at all: `SAFE` keeps nothing but bare text
  /// outside any element. Add drafts before use.
  pub fn empty() -> Self {
    Self::with_drafts(Vec::new())
  }

  /// An engine with an explicit draft set.
  pub fn with_drafts(drafts: Vec<DesignDraft>) -> Self {
    Self {
      drafts,
      block_words: BlockWordFilter::new(),
      max_input_len: None,
    }
  }

  /// Adds a draft, replacing any existing draft for the same tag.
  pub fn add_draft(&mut self, draft: DesignDraft) {
    self.drafts.retain(|d| d.tag_name() != draft.tag_name());
    self.drafts.push(draft);
  }

  pub fn add_drafts(&mut self, drafts: impl IntoIterator<Item = DesignDraft>) {
    for draft in drafts {
      self.add_draft(draft);
    }
  }

  /// Adds drafts for the MathML tag set.
  pub fn enable_math_drafts(&mut self) {
    self.add_drafts(policy::math_drafts());
  }

  pub fn block_words(&self) -> &BlockWordFilter {
    &self.block_words
  }

  /// The block-word filter, for adding words or changing the patch string.
  pub fn block_words_mut(&mut self) -> &mut BlockWordFilter {
    &mut self.block_words
  }

  /// Rejects inputs larger than `limit` bytes with
  /// [`ResourceError::InputTooLarge`]. `None` disables the guard.
  pub fn set_max_input_len(&mut self, limit: Option<usize>) {
    self.max_input_len = limit;
  }

  /// Tailors `input` to `level` with default options.
  pub fn tailor(&self, input: &str, level: TailorLevel) -> Result<String> {
    Ok(
      self
        .tailor_with_options(input, level, TailorOptions::default())?
        .text,
    )
  }

  /// Decodes `bytes` (BOM-aware, otherwise strict UTF-8) and tailors the
  /// result. Decoding failures are reported as [`EncodingError`]s, a
  /// distinct kind from anything markup-related.
  ///
  /// [`EncodingError`]: crate::error::EncodingError
  pub fn tailor_bytes(&self, bytes: &[u8], level: TailorLevel) -> Result<String> {
    if let Some(limit) = self.max_input_len {
      if bytes.len() > limit {
        return Err(
          ResourceError::InputTooLarge {
            len: bytes.len(),
            limit,
          }
          .into(),
        );
      }
    }
    let text = decode_html_bytes(bytes)?;
    self.tailor(&text, level)
  }

  /// Tailors `input` to `level`, returning the output together with a
  /// [`TailorReport`] of what the sanitize pass discarded.
  pub fn tailor_with_options(
    &self,
    input: &str,
    level: TailorLevel,
    options: TailorOptions,
  ) -> Result<TailorOutput> {
    if let Some(limit) = self.max_input_len {
      if input.len() > limit {
        return Err(
          ResourceError::InputTooLarge {
            len: input.len(),
            limit,
          }
          .into(),
        );
      }
    }

    let mut report = TailorReport::default();
    let text = match level {
      TailorLevel::None => input.to_owned(),
      TailorLevel::Safe => {
        let mut root = dom::parse_html(input);
        match root.body_mut() {
          Some(body) => {
            sanitize_children(body, &self.drafts, &mut report);
            serialize_children(body)
          }
          None => String::new(),
        }
      }
      TailorLevel::TextWithBreakLine | TailorLevel::Text => {
        let style = match level {
          TailorLevel::Text => BreakStyle::Space,
          _ => BreakStyle::Newline,
        };
        let root = dom::parse_html(input);
        root
          .body()
          .map(|body| extract_text(body, style))
          .unwrap_or_default()
      }
    };

    let text = if options.censor_block_words {
      self.block_words.censor(&text)
    } else {
      text
    };

    Ok(TailorOutput { text, report })
  }
}

/// Prunes and rewrites `node`'s subtree in place: text nodes survive,
/// elements go through the first matching draft, unmatched elements are
/// dropped with their subtree.
fn sanitize_children(node: &mut DomNode, drafts: &[DesignDraft], report: &mut TailorReport) {
  node.children.retain_mut(|child| {
    let Some(tag) = child.tag_name().map(str::to_owned) else {
      return true;
    };
    match drafts.iter().find(|draft| draft.matches(&tag)) {
      None => {
        report.removed_tag = true;
        false
      }
      Some(draft) => {
        if !draft.apply(child, report) {
          return false;
        }
        sanitize_children(child, drafts, report);
        true
      }
    }
  });
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::draft::DesignDraft;

  #[test]
  fn none_is_byte_identical_even_for_garbage() {
    let tailor = Tailor::new();
    let input = "<<p>>not <em>html&&& \u{1f600}";
    assert_eq!(tailor.tailor(input, TailorLevel::None).unwrap(), input);
  }

  #[test]
  fn safe_repairs_and_keeps_allowlisted_markup() {
    let tailor = Tailor::new();
    assert_eq!(
      tailor.tailor("<p>one<p>two", TailorLevel::Safe).unwrap(),
      "<p>one</p><p>two</p>"
    );
  }

  #[test]
  fn safe_drops_unmatched_elements_with_their_subtree() {
    let tailor = Tailor::new();
    let out = tailor
      .tailor_with_options(
        "<p>keep</p><iframe><p>gone</p></iframe>",
        TailorLevel::Safe,
        TailorOptions::default(),
      )
      .unwrap();
    assert_eq!(out.text, "<p>keep</p>");
    assert!(out.report.removed_tag);
  }

  #[test]
  fn safe_reports_are_default_free_on_clean_input() {
    let tailor = Tailor::new();
    let out = tailor
      .tailor_with_options("<p>clean</p>", TailorLevel::Safe, TailorOptions::default())
      .unwrap();
    assert_eq!(out.report, TailorReport::default());
  }

  #[test]
  fn replace_draft_rewrites_tags_in_place() {
    let mut tailor = Tailor::empty();
    tailor.add_draft(DesignDraft::replace("div", "p"));
    assert_eq!(
      tailor.tailor("<div>x</div>", TailorLevel::Safe).unwrap(),
      "<p>x</p>"
    );
  }

  #[test]
  fn add_draft_replaces_existing_rule_for_the_tag() {
    let mut tailor = Tailor::empty();
    tailor.add_draft(DesignDraft::keep("p"));
    tailor.add_draft(DesignDraft::remove("p"));
    assert_eq!(tailor.tailor("<p>x</p>", TailorLevel::Safe).unwrap(), "");
  }

  #[test]
  fn math_drafts_keep_mathml_tags() {
    let mut tailor = Tailor::new();
    assert_eq!(
      tailor
        .tailor("<math><mi>x</mi></math>", TailorLevel::Safe)
        .unwrap(),
      ""
    );
    tailor.enable_math_drafts();
    assert_eq!(
      tailor
        .tailor("<math><mi>x</mi></math>", TailorLevel::Safe)
        .unwrap(),
      "<math><mi>x</mi></math>"
    );
  }

  #[test]
  fn censoring_is_opt_in() {
    let mut tailor = Tailor::new();
    tailor.block_words_mut().add_word("secret");

    assert_eq!(
      tailor.tailor("a secret plan", TailorLevel::None).unwrap(),
      "a secret plan"
    );
    let censored = tailor
      .tailor_with_options("a Secret plan", TailorLevel::None, TailorOptions::censored())
      .unwrap();
    assert_eq!(censored.text, "a ** plan");
  }

  #[test]
  fn input_size_limit_is_a_resource_error() {
    let mut tailor = Tailor::new();
    tailor.set_max_input_len(Some(8));
    let err = tailor.tailor("<p>too long</p>", TailorLevel::Safe).unwrap_err();
    assert!(matches!(
      err,
      crate::Error::Resource(ResourceError::InputTooLarge { len: 15, limit: 8 })
    ));
  }

  #[test]
  fn engine_is_deterministic_per_input_and_level() {
    let tailor = Tailor::new();
    let input = "<div><p style='color:red;bogus:1'>A</p><script>x</script></div>";
    for level in TailorLevel::ALL {
      let first = tailor.tailor(input, level).unwrap();
      let second = tailor.tailor(input, level).unwrap();
      assert_eq!(first, second);
    }
  }
}
