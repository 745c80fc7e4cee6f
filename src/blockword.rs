//! Block-word censoring.
//!
//! Replaces configured words with a patch string, matching ASCII
//! case-insensitively (non-ASCII characters must match exactly, so pass
//! lowercase spellings for Western words to catch every casing).

use memchr::memchr;
use serde::{Deserialize, Serialize};

/// A word list plus the patch string that replaces each occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockWordFilter {
  words: Vec<String>,
  patch: String,
}

impl Default for BlockWordFilter {
  fn default() -> Self {
    Self {
      words: Vec::new(),
      patch: "**".to_string(),
    }
  }
}

impl BlockWordFilter {
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds a word to the filter. Empty words are ignored.
  pub fn add_word(&mut self, word: impl Into<String>) {
    let word = word.into();
    if !word.is_empty() {
      self.words.push(word);
    }
  }

  /// Replaces the placeholder written over censored words. An empty patch
  /// deletes matches outright, which makes censoring harder to notice.
  pub fn set_patch(&mut self, patch: impl Into<String>) {
    self.patch = patch.into();
  }

  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }

  /// Censors every configured word in `text`.
  pub fn censor(&self, text: &str) -> String {
    let mut current = text.to_string();
    for word in &self.words {
      current = censor_word(&current, word, &self.patch);
    }
    current
  }
}

fn censor_word(text: &str, word: &str, patch: &str) -> String {
  if word.is_empty() {
    return text.to_string();
  }
  let needle = word.as_bytes();
  let bytes = text.as_bytes();
  let lower = needle[0].to_ascii_lowercase();
  let upper = needle[0].to_ascii_uppercase();

  let mut out = String::with_capacity(text.len());
  let mut last = 0usize;
  let mut i = 0usize;
  while i + needle.len() <= bytes.len() {
    // Jump to the next candidate first byte in either case.
    let next = match (memchr(lower, &bytes[i..]), memchr(upper, &bytes[i..])) {
      (Some(a), Some(b)) => a.min(b),
      (Some(a), None) => a,
      (None, Some(b)) => b,
      (None, None) => break,
    };
    i += next;
    if i + needle.len() > bytes.len() {
      break;
    }
    if bytes[i..i + needle.len()].eq_ignore_ascii_case(needle) {
      out.push_str(&text[last..i]);
      out.push_str(patch);
      i += needle.len();
      last = i;
    } else {
      i += 1;
    }
  }

  out.push_str(&text[last..]);
  out
}
