//! Identity and mass types shared by the world graph, the item catalog and
//! the inventory.

use std::borrow::Borrow;
use std::fmt;
use std::iter::Sum;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }
    };
}

string_id!(
    /// Stable key of a room. Exits and item placements refer to rooms by id only.
    RoomId
);

string_id!(
    /// Stable key of an item, unique across the whole world. Players type it
    /// in lowercase after `take`/`drop`.
    ItemId
);

/// A mass stored as whole grams so capacity checks are exact.
///
/// Serialized as kilograms (`2.6`), the unit players see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Mass(u32);

impl Mass {
    pub const ZERO: Mass = Mass(0);

    pub const fn from_grams(grams: u32) -> Self {
        Mass(grams)
    }

    /// Convert kilograms, rounding to the nearest gram. Negative, non-finite
    /// or absurdly large values are rejected.
    pub fn from_kg(kg: f64) -> Option<Self> {
        if !kg.is_finite() || kg < 0.0 {
            return None;
        }
        let grams = (kg * 1000.0).round();
        if grams > f64::from(u32::MAX) {
            return None;
        }
        Some(Mass(grams as u32))
    }

    pub const fn grams(self) -> u32 {
        self.0
    }

    pub fn kg(self) -> f64 {
        f64::from(self.0) / 1000.0
    }

    pub fn checked_add(self, other: Mass) -> Option<Mass> {
        self.0.checked_add(other.0).map(Mass)
    }

    pub fn saturating_add(self, other: Mass) -> Mass {
        Mass(self.0.saturating_add(other.0))
    }
}

impl Sum for Mass {
    fn sum<I: Iterator<Item = Mass>>(iter: I) -> Self {
        iter.fold(Mass::ZERO, Mass::saturating_add)
    }
}

impl fmt::Display for Mass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} kg", self.kg())
    }
}

impl Serialize for Mass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.kg())
    }
}

impl<'de> Deserialize<'de> for Mass {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let kg = f64::deserialize(deserializer)?;
        Mass::from_kg(kg)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid mass {kg}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kg_conversion_rounds_to_grams() {
        assert_eq!(Mass::from_kg(2.6), Some(Mass::from_grams(2600)));
        assert_eq!(Mass::from_kg(0.1), Some(Mass::from_grams(100)));
        assert_eq!(Mass::from_kg(0.0), Some(Mass::ZERO));
    }

    #[test]
    fn kg_conversion_rejects_bad_values() {
        assert_eq!(Mass::from_kg(-0.5), None);
        assert_eq!(Mass::from_kg(f64::NAN), None);
        assert_eq!(Mass::from_kg(f64::INFINITY), None);
    }

    #[test]
    fn decimal_sums_are_exact() {
        // 0.1 + 0.2 in floating point is not 0.3; in grams it is.
        let total: Mass = [0.1, 0.2]
            .iter()
            .filter_map(|kg| Mass::from_kg(*kg))
            .sum();
        assert_eq!(Some(total), Mass::from_kg(0.3));
    }

    #[test]
    fn display_uses_one_decimal() {
        assert_eq!(Mass::from_grams(2600).to_string(), "2.6 kg");
        assert_eq!(Mass::ZERO.to_string(), "0.0 kg");
    }

    #[test]
    fn ids_borrow_as_str() {
        let mut rooms = std::collections::BTreeMap::new();
        rooms.insert(RoomId::new("Reception"), 1);
        assert_eq!(rooms.get("Reception"), Some(&1));
    }

    #[test]
    fn mass_serializes_as_kilograms() {
        let json = serde_json::to_string(&Mass::from_grams(1500)).unwrap();
        assert_eq!(json, "1.5");
        let back: Mass = serde_json::from_str("0.25").unwrap();
        assert_eq!(back, Mass::from_grams(250));
        assert!(serde_json::from_str::<Mass>("-1.0").is_err());
    }
}
