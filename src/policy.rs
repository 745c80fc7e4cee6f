//! Built-in tailoring policy.
//!
//! The default draft set follows the HTML5 element list (sectioning,
//! grouping, text-level semantics, edits, tables), deliberately excluding
//! scripting, forms, embeds other than `<img>`, and interactive elements.
//! Attribute and style allowlists exclude everything that can execute code,
//! navigate, or hide content (`href`, event handlers, `float`,
//! `visibility`, ...).

use crate::draft::DesignDraft;

/// Attributes allowed on every default draft.
pub const COMMON_ATTRIBUTES: &[&str] = &[
  "action",
  "align",
  "alt",
  "axis",
  "bgcolor",
  "border",
  "cellpadding",
  "cellspacing",
  "cite",
  "clear",
  "color",
  "cols",
  "colspan",
  "datetime",
  "dir",
  "disabled",
  "headers",
  "height",
  "high",
  "hspace",
  "label",
  "lang",
  "list",
  "longdesc",
  "low",
  "max",
  "maxlength",
  "min",
  "name",
  "nohref",
  "noshade",
  "novalidate",
  "nowrap",
  "optimum",
  "pubdate",
  "readonly",
  "reversed",
  "rows",
  "rowspan",
  "rules",
  "scope",
  "size",
  "span",
  "src",
  "start",
  "style",
  "summary",
  "tabindex",
  "title",
  "valign",
  "vspace",
  "width",
  "wrap",
];

/// Inline-style properties allowed on every default draft.
pub const COMMON_STYLES: &[&str] = &[
  "background",
  "background-attachment",
  "background-clip",
  "background-color",
  "background-image",
  "background-origin",
  "background-position",
  "background-repeat",
  "background-size",
  "border",
  "border-bottom",
  "border-bottom-color",
  "border-bottom-left-radius",
  "border-bottom-right-radius",
  "border-bottom-style",
  "border-bottom-width",
  "border-collapse",
  "border-color",
  "border-image",
  "border-image-outset",
  "border-image-repeat",
  "border-image-slice",
  "border-image-source",
  "border-image-width",
  "border-left",
  "border-left-color",
  "border-left-style",
  "border-left-width",
  "border-radius",
  "border-right",
  "border-right-color",
  "border-right-style",
  "border-right-width",
  "border-spacing",
  "border-style",
  "border-top",
  "border-top-color",
  "border-top-left-radius",
  "border-top-right-radius",
  "border-top-style",
  "border-top-width",
  "border-width",
  "bottom",
  "caption-side",
  "clear",
  "clip",
  "color",
  "content",
  "counter-increment",
  "counter-reset",
  "cursor",
  "direction",
  "display",
  "empty-cells",
  "font",
  "font-family",
  "font-feature-settings",
  "font-kerning",
  "font-language-override",
  "font-size",
  "font-size-adjust",
  "font-stretch",
  "font-style",
  "font-synthesis",
  "font-variant",
  "font-variant-alternates",
  "font-variant-caps",
  "font-variant-east-asian",
  "font-variant-ligatures",
  "font-variant-numeric",
  "font-variant-position",
  "font-weight",
  "height",
  "left",
  "letter-spacing",
  "line-height",
  "list-style",
  "list-style-image",
  "list-style-position",
  "list-style-type",
  "margin",
  "margin-bottom",
  "margin-left",
  "margin-right",
  "margin-top",
  "max-height",
  "max-width",
  "min-height",
  "min-width",
  "opacity",
  "orphans",
  "outline",
  "outline-color",
  "outline-offset",
  "outline-style",
  "outline-width",
  "overflow",
  "overflow-wrap",
  "overflow-x",
  "overflow-y",
  "padding",
  "padding-bottom",
  "padding-left",
  "padding-right",
  "padding-top",
  "page-break-after",
  "page-break-before",
  "page-break-inside",
  "quotes",
  "right",
  "table-layout",
  "text-align",
  "text-decoration",
  "text-decoration-color",
  "text-decoration-line",
  "text-decoration-skip",
  "text-decoration-style",
  "text-indent",
  "text-transform",
  "top",
  "unicode-bidi",
  "vertical-align",
  "white-space",
  "widows",
  "width",
  "word-spacing",
  "z-index",
];

// Sectioning, grouping, text-level, edit and table tags kept by the default
// policy. `img` is handled separately for its URL restrictions.
const DEFAULT_KEEP_TAGS: &[&str] = &[
  // Sectioning
  "section",
  "article",
  "aside",
  "h1",
  "h2",
  "h3",
  "h4",
  "h5",
  "h6",
  "header",
  "footer",
  "address",
  "main",
  // Grouping content
  "p",
  "hr",
  "pre",
  "blockquote",
  "ol",
  "ul",
  "li",
  "dl",
  "dt",
  "dd",
  "figure",
  "figcaption",
  "div",
  // Text-level semantics
  "a",
  "em",
  "strong",
  "small",
  "s",
  "cite",
  "q",
  "dfn",
  "abbr",
  "time",
  "code",
  "var",
  "samp",
  "kbd",
  "sub",
  "sup",
  "i",
  "b",
  "u",
  "mark",
  "ruby",
  "rt",
  "rp",
  "bdi",
  "bdo",
  "span",
  "br",
  "wbr",
  // Edits
  "ins",
  "del",
  // Tables
  "table",
  "caption",
  "colgroup",
  "col",
  "tbody",
  "thead",
  "tfoot",
  "tr",
  "td",
  "th",
];

const MATH_TAGS: &[&str] = &[
  "math",
  "maction",
  "menclose",
  "merror",
  "mfenced",
  "mfrac",
  "mglyph",
  "mi",
  "mlabeledtr",
  "mmultiscripts",
  "mn",
  "mo",
  "mover",
  "mpadded",
  "mphantom",
  "mroot",
  "mrow",
  "ms",
  "mspace",
  "msqrt",
  "mstyle",
  "msub",
  "msubsup",
  "msup",
  "mtable",
  "mtd",
  "mtext",
  "mtr",
  "munder",
  "munderover",
  "semantics",
];

/// The draft set used by [`Tailor::new`](crate::Tailor::new).
pub fn default_drafts() -> Vec<DesignDraft> {
  let mut drafts: Vec<DesignDraft> = DEFAULT_KEEP_TAGS
    .iter()
    .map(|tag| {
      DesignDraft::keep(*tag)
        .allow_attributes(COMMON_ATTRIBUTES.iter().copied())
        .allow_styles(COMMON_STYLES.iter().copied())
    })
    .collect();

  drafts.push(
    DesignDraft::keep("img")
      .allow_attributes(COMMON_ATTRIBUTES.iter().copied())
      .allow_styles(COMMON_STYLES.iter().copied())
      .allow_urls(["//", "data:image/"]),
  );

  drafts
}

/// Drafts for the MathML tag set, enabled via
/// [`Tailor::enable_math_drafts`](crate::Tailor::enable_math_drafts).
pub fn math_drafts() -> Vec<DesignDraft> {
  MATH_TAGS.iter().map(|tag| DesignDraft::keep(*tag)).collect()
}

/// Tags whose boundaries produce a structural break at the text levels.
pub(crate) fn is_block_break_tag(tag: &str) -> bool {
  matches!(
    tag,
    "address"
      | "article"
      | "aside"
      | "blockquote"
      | "caption"
      | "dd"
      | "div"
      | "dl"
      | "dt"
      | "figcaption"
      | "figure"
      | "footer"
      | "h1"
      | "h2"
      | "h3"
      | "h4"
      | "h5"
      | "h6"
      | "header"
      | "hr"
      | "li"
      | "main"
      | "ol"
      | "p"
      | "pre"
      | "section"
      | "table"
      | "tr"
      | "ul"
  )
}

/// Tags whose subtree contributes no text at the text levels.
pub(crate) fn is_skipped_text_tag(tag: &str) -> bool {
  matches!(tag, "script" | "style" | "template")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_drafts_cover_each_tag_once() {
    let drafts = default_drafts();
    let mut tags: Vec<&str> = drafts.iter().map(|d| d.tag_name()).collect();
    let before = tags.len();
    tags.sort_unstable();
    tags.dedup();
    assert_eq!(tags.len(), before);
    assert!(tags.contains(&"p"));
    assert!(tags.contains(&"img"));
  }

  #[test]
  fn default_policy_has_no_scripting_or_form_tags() {
    let drafts = default_drafts();
    for forbidden in ["script", "iframe", "form", "input", "object", "embed"] {
      assert!(
        !drafts.iter().any(|d| d.tag_name() == forbidden),
        "{forbidden} must not be in the default policy"
      );
    }
  }

  #[test]
  fn allowlists_exclude_code_execution_vectors() {
    assert!(!COMMON_ATTRIBUTES.contains(&"href"));
    assert!(!COMMON_ATTRIBUTES.contains(&"onclick"));
    assert!(!COMMON_STYLES.contains(&"float"));
    assert!(!COMMON_STYLES.contains(&"visibility"));
  }
}
