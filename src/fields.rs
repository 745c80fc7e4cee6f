//! In-place tailoring of struct fields.
//!
//! User-submitted payloads rarely arrive as one HTML string; they come as
//! structs with several string fields of differing sensitivity. [`Tailorable`]
//! lets a type describe which of its fields carry markup and at what level
//! each should be tailored, then the whole value is cleaned with one call.

use crate::error::Result;
use crate::level::TailorLevel;
use crate::tailor::{Tailor, TailorOptions};
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// A value whose string fields can be tailored in place.
///
/// Implementations may override the requested level per field; the
/// container impls below just forward it.
///
/// # Example
///
/// ```
/// use html_tailor::{Tailor, TailorLevel, TailorOptions, Tailorable};
///
/// struct Comment {
///   author: String,
///   body: String,
/// }
///
/// impl Tailorable for Comment {
///   fn tailor_fields(
///     &mut self,
///     tailor: &Tailor,
///     level: TailorLevel,
///     options: TailorOptions,
///   ) -> html_tailor::Result<()> {
///     // Author names never carry markup worth keeping.
///     self.author.tailor_fields(tailor, TailorLevel::Text, options)?;
///     self.body.tailor_fields(tailor, level, options)
///   }
/// }
///
/// let tailor = Tailor::new();
/// let mut comment = Comment {
///   author: "<b>Eve</b>".into(),
///   body: "<p onclick=\"x()\">hi</p>".into(),
/// };
/// comment
///   .tailor_fields(&tailor, TailorLevel::Safe, TailorOptions::default())
///   .unwrap();
/// assert_eq!(comment.author, "Eve");
/// assert_eq!(comment.body, "<p>hi</p>");
/// ```
pub trait Tailorable {
  fn tailor_fields(
    &mut self,
    tailor: &Tailor,
    level: TailorLevel,
    options: TailorOptions,
  ) -> Result<()>;
}

impl Tailorable for String {
  fn tailor_fields(
    &mut self,
    tailor: &Tailor,
    level: TailorLevel,
    options: TailorOptions,
  ) -> Result<()> {
    let tailored = tailor.tailor_with_options(self.as_str(), level, options)?.text;
    *self = tailored;
    Ok(())
  }
}

impl<T: Tailorable> Tailorable for Option<T> {
  fn tailor_fields(
    &mut self,
    tailor: &Tailor,
    level: TailorLevel,
    options: TailorOptions,
  ) -> Result<()> {
    if let Some(value) = self {
      value.tailor_fields(tailor, level, options)?;
    }
    Ok(())
  }
}

impl<T: Tailorable> Tailorable for Vec<T> {
  fn tailor_fields(
    &mut self,
    tailor: &Tailor,
    level: TailorLevel,
    options: TailorOptions,
  ) -> Result<()> {
    for value in self {
      value.tailor_fields(tailor, level, options)?;
    }
    Ok(())
  }
}

impl<T: Tailorable> Tailorable for Box<T> {
  fn tailor_fields(
    &mut self,
    tailor: &Tailor,
    level: TailorLevel,
    options: TailorOptions,
  ) -> Result<()> {
    self.as_mut().tailor_fields(tailor, level, options)
  }
}

impl<K: Eq + Hash, V: Tailorable> Tailorable for HashMap<K, V> {
  fn tailor_fields(
    &mut self,
    tailor: &Tailor,
    level: TailorLevel,
    options: TailorOptions,
  ) -> Result<()> {
    for value in self.values_mut() {
      value.tailor_fields(tailor, level, options)?;
    }
    Ok(())
  }
}

impl<K: Ord, V: Tailorable> Tailorable for BTreeMap<K, V> {
  fn tailor_fields(
    &mut self,
    tailor: &Tailor,
    level: TailorLevel,
    options: TailorOptions,
  ) -> Result<()> {
    for value in self.values_mut() {
      value.tailor_fields(tailor, level, options)?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn string_is_tailored_in_place() {
    let tailor = Tailor::new();
    let mut text = String::from("<p>one</p><p>two</p>");
    text
      .tailor_fields(&tailor, TailorLevel::TextWithBreakLine, TailorOptions::default())
      .unwrap();
    assert_eq!(text, "one\ntwo");
  }

  #[test]
  fn containers_forward_to_every_string() {
    let tailor = Tailor::new();
    let mut values = vec![
      Some(String::from("<b>a</b>")),
      None,
      Some(String::from("<i>b</i>")),
    ];
    values
      .tailor_fields(&tailor, TailorLevel::Text, TailorOptions::default())
      .unwrap();
    assert_eq!(
      values,
      vec![Some(String::from("a")), None, Some(String::from("b"))]
    );
  }

  #[test]
  fn map_values_are_tailored() {
    let tailor = Tailor::new();
    let mut map = BTreeMap::new();
    map.insert("k", String::from("x <script>y</script>z"));
    map
      .tailor_fields(&tailor, TailorLevel::Text, TailorOptions::default())
      .unwrap();
    assert_eq!(map["k"], "x z");
  }

  #[test]
  fn censoring_applies_through_fields() {
    let mut tailor = Tailor::new();
    tailor.block_words_mut().add_word("spam");
    let mut text = String::from("<p>buy spam today</p>");
    text
      .tailor_fields(&tailor, TailorLevel::Text, TailorOptions::censored())
      .unwrap();
    assert_eq!(text, "buy ** today");
  }
}
