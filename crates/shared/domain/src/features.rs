use crate::constants::{CACHING, LOGGING, METRICS};
use bitflags::bitflags;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

bitflags! {
    /// Represents a set of enabled feature flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct FeatureSet: u32 {
        const CACHING = 1 << 0;
        const LOGGING = 1 << 1;
        const METRICS = 1 << 2;
    }
}

/// Every known flag paired with its name, in serialization order.
pub const KNOWN_FEATURES: [(&str, FeatureSet); 3] =
    [(CACHING, FeatureSet::CACHING), (LOGGING, FeatureSet::LOGGING), (METRICS, FeatureSet::METRICS)];

impl FeatureSet {
    /// Returns `true` when `name` is a known flag and it is part of this set.
    ///
    /// Unknown names (including the empty string) are never enabled.
    #[must_use]
    pub fn is_enabled(&self, name: &str) -> bool {
        let flag = Self::from(name);
        !flag.is_empty() && self.contains(flag)
    }
}

impl From<&str> for FeatureSet {
    fn from(s: &str) -> Self {
        KNOWN_FEATURES
            .iter()
            .find_map(|(name, flag)| (*name == s).then_some(*flag))
            .unwrap_or_else(Self::empty)
    }
}

/// Serialized as a `name -> bool` mapping covering every known flag.
impl Serialize for FeatureSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(KNOWN_FEATURES.len()))?;
        for (name, flag) in KNOWN_FEATURES {
            map.serialize_entry(name, &self.contains(flag))?;
        }
        map.end()
    }
}

/// Unknown names in the mapping are ignored; missing names are disabled.
impl<'de> Deserialize<'de> for FeatureSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let flags = BTreeMap::<String, bool>::deserialize(deserializer)?;
        Ok(flags
            .iter()
            .filter(|(_, enabled)| **enabled)
            .fold(Self::empty(), |set, (name, _)| set | Self::from(name.as_str())))
    }
}
