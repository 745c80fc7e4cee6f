//! Tailoring levels.
//!
//! The four levels form a closed set ordered by how much fidelity each one
//! discards. Every level discards a superset of what the previous level
//! discards; none of them ever invents content.

use crate::error::LevelParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How aggressively [`Tailor`](crate::Tailor) normalizes input markup.
///
/// | Level | Output guarantee |
/// |---|---|
/// | `NONE` | byte-identical to the input |
/// | `SAFE` | well-formed markup, sanitized against the engine's drafts |
/// | `TEXT_WITH_BREAK_LINE` | no markup; block boundaries and `<br>` become `\n` |
/// | `TEXT` | no markup and no inserted line breaks |
///
/// The SCREAMING_SNAKE symbols above are the canonical spellings at every
/// serialized boundary ([`FromStr`], [`fmt::Display`], serde); anything else
/// is rejected with [`LevelParseError::Unrecognized`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TailorLevel {
  /// No transformation; the input passes through unchanged.
  #[default]
  None,

  /// Missing or unbalanced elements are repaired and the engine's design
  /// drafts decide which tags, attributes and styles survive.
  Safe,

  /// Only text survives; line-break-producing elements become literal `\n`.
  TextWithBreakLine,

  /// Only text survives, flattened into a single stream with no `\n`
  /// inserted beyond what raw text nodes already carried.
  Text,
}

impl TailorLevel {
  /// All four levels, in order of increasing information loss.
  pub const ALL: [TailorLevel; 4] = [
    TailorLevel::None,
    TailorLevel::Safe,
    TailorLevel::TextWithBreakLine,
    TailorLevel::Text,
  ];

  /// The level's canonical symbol.
  pub fn as_str(self) -> &'static str {
    match self {
      TailorLevel::None => "NONE",
      TailorLevel::Safe => "SAFE",
      TailorLevel::TextWithBreakLine => "TEXT_WITH_BREAK_LINE",
      TailorLevel::Text => "TEXT",
    }
  }
}

impl fmt::Display for TailorLevel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for TailorLevel {
  type Err = LevelParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "NONE" => Ok(TailorLevel::None),
      "SAFE" => Ok(TailorLevel::Safe),
      "TEXT_WITH_BREAK_LINE" => Ok(TailorLevel::TextWithBreakLine),
      "TEXT" => Ok(TailorLevel::Text),
      other => Err(LevelParseError::Unrecognized {
        value: other.to_string(),
      }),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_exactly_the_four_canonical_symbols() {
    for level in TailorLevel::ALL {
      assert_eq!(level.as_str().parse::<TailorLevel>(), Ok(level));
    }
  }

  #[test]
  fn rejects_anything_outside_the_closed_set() {
    for symbol in ["", "Safe", "safe", "TEXT_WITH_BREAKLINE", "ALL", "NONE "] {
      let err = symbol.parse::<TailorLevel>().unwrap_err();
      assert_eq!(
        err,
        LevelParseError::Unrecognized {
          value: symbol.to_string()
        }
      );
    }
  }

  #[test]
  fn display_round_trips_through_from_str() {
    for level in TailorLevel::ALL {
      assert_eq!(level.to_string().parse::<TailorLevel>(), Ok(level));
    }
  }

  #[test]
  fn serde_uses_the_verbatim_wire_symbols() {
    assert_eq!(
      serde_json::to_string(&TailorLevel::TextWithBreakLine).unwrap(),
      "\"TEXT_WITH_BREAK_LINE\""
    );
    let level: TailorLevel = serde_json::from_str("\"SAFE\"").unwrap();
    assert_eq!(level, TailorLevel::Safe);
    assert!(serde_json::from_str::<TailorLevel>("\"LOOSE\"").is_err());
  }

  #[test]
  fn default_level_is_none() {
    assert_eq!(TailorLevel::default(), TailorLevel::None);
  }
}
