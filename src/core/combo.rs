//! Unordered two-type combination

use crate::core::types::TypeTag;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Separator used in the canonical `"Type1+Type2"` key
pub const COMBO_SEPARATOR: char = '+';

/// A sorted pair of two distinct type tags
///
/// The pair is canonicalised on construction, so `(Shield, Poison)` and
/// `(Poison, Shield)` are the same value. Ordering matches the ordering of
/// the canonical key strings because `TypeTag` variants are declared
/// alphabetically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeCombo {
    first: TypeTag,
    second: TypeTag,
}

impl TypeCombo {
    /// Build the canonical pair, or `None` when both tags are the same
    pub fn new(a: TypeTag, b: TypeTag) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { first: a, second: b }),
            std::cmp::Ordering::Greater => Some(Self { first: b, second: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn first(&self) -> TypeTag {
        self.first
    }

    pub fn second(&self) -> TypeTag {
        self.second
    }

    pub fn contains(&self, tag: TypeTag) -> bool {
        self.first == tag || self.second == tag
    }

    /// Canonical `"Type1+Type2"` string
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TypeCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.first, COMBO_SEPARATOR, self.second)
    }
}

impl FromStr for TypeCombo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (a, b) = s
            .split_once(COMBO_SEPARATOR)
            .ok_or_else(|| format!("Invalid type combination: {}", s))?;
        let a: TypeTag = a.trim().parse()?;
        let b: TypeTag = b.trim().parse()?;
        TypeCombo::new(a, b).ok_or_else(|| format!("Type combination repeats {}: {}", a, s))
    }
}

impl Serialize for TypeCombo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TypeCombo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combo_is_order_independent() {
        let a = TypeCombo::new(TypeTag::Shield, TypeTag::Poison).unwrap();
        let b = TypeCombo::new(TypeTag::Poison, TypeTag::Shield).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.first(), TypeTag::Poison);
        assert_eq!(a.key(), "Poison+Shield");
    }

    #[test]
    fn test_same_tag_is_not_a_combo() {
        assert!(TypeCombo::new(TypeTag::Tank, TypeTag::Tank).is_none());
    }

    #[test]
    fn test_parse_canonicalises() {
        let combo: TypeCombo = "Terror+Age".parse().unwrap();
        assert_eq!(combo.key(), "Age+Terror");
        assert!("Terror".parse::<TypeCombo>().is_err());
        assert!("Terror+Terror".parse::<TypeCombo>().is_err());
        assert!("Terror+Bogus".parse::<TypeCombo>().is_err());
    }

    #[test]
    fn test_ordering_matches_key_ordering() {
        let mut combos = Vec::new();
        for (i, a) in TypeTag::ALL.iter().enumerate() {
            for b in &TypeTag::ALL[i + 1..] {
                combos.push(TypeCombo::new(*a, *b).unwrap());
            }
        }
        let mut by_value = combos.clone();
        by_value.sort();
        let mut by_key = combos;
        by_key.sort_by_key(|c| c.key());
        assert_eq!(by_value, by_key);
    }

    #[test]
    fn test_serializes_as_key() {
        let combo = TypeCombo::new(TypeTag::Burn, TypeTag::Aether).unwrap();
        assert_eq!(serde_json::to_string(&combo).unwrap(), "\"Aether+Burn\"");
        let back: TypeCombo = serde_json::from_str("\"Burn+Aether\"").unwrap();
        assert_eq!(back, combo);
    }
}
