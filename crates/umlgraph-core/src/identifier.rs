//! Interned identifiers for declared types.
//!
//! The front end names every declared type with a fully-qualified id such as
//! `"src/model/shape".Shape`. These ids are compared and hashed constantly
//! while the relationship graph is built, so they are interned once and
//! passed around as the `Copy` handle [`Id`].

use std::{
    fmt,
    sync::{Mutex, MutexGuard, OnceLock},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> MutexGuard<'static, DefaultStringInterner> {
    INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .expect("Failed to acquire interner lock")
}

/// Interned, fully-qualified type identifier.
///
/// Two ids are equal exactly when their strings are equal, and equality
/// and hashing never touch the string itself.
///
/// # Examples
///
/// ```
/// use umlgraph_core::identifier::Id;
///
/// let shape = Id::new("\"src/shape\".Shape");
/// let again: Id = "\"src/shape\".Shape".into();
///
/// assert_eq!(shape, again);
/// assert_eq!(shape, "\"src/shape\".Shape");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from &str, interning it on first use.
    pub fn new(name: &str) -> Self {
        Self(interner().get_or_intern(name))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = interner()
            .resolve(self.0)
            .expect("Symbol should exist in interner")
            .to_owned();
        f.write_str(&value)
    }
}

impl std::str::FromStr for Id {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`
    fn eq(&self, other: &str) -> bool {
        interner()
            .resolve(self.0)
            .expect("Symbol should exist in interner")
            == other
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl Serialize for Id {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::new(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let id1 = Id::new("\"a\".Shape");
        let id2 = Id::new("\"a\".Shape");
        let id3 = Id::new("\"b\".Shape");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_eq!(id1, "\"a\".Shape");
    }

    #[test]
    fn test_display_trait() {
        let id = Id::new("\"lib/geometry\".Point");
        assert_eq!(format!("{id}"), "\"lib/geometry\".Point");
    }

    #[test]
    fn test_underscore_ids_stay_distinct() {
        // Pair keys built by joining with '_' would collide here.
        let left = Id::new("a_b");
        let right = Id::new("a");

        assert_ne!(left, right);
        assert_ne!((left, Id::new("c")), (right, Id::new("b_c")));
    }

    #[test]
    fn test_partial_eq_str() {
        let id = Id::new("Rectangle");

        assert!(id == "Rectangle");
        assert!(id != "Oval");

        let empty = Id::new("");
        assert!(empty == "");
    }

    #[test]
    fn test_serde_as_plain_string() {
        let id = Id::new("\"src/zoo\".Animal");

        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""\"src/zoo\".Animal""#);

        let back: Id = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_hash_and_eq() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(Id::new("key1"), "value1");
        map.insert(Id::new("key2"), "value2");

        assert_eq!(map.get(&Id::new("key1")), Some(&"value1"));
        assert_eq!(map.len(), 2);
    }
}
