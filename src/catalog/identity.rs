use std::fmt;

/// Case-insensitive lookup key for a species name.
///
/// Names are trimmed and lowercased so `"Baboon"`, `" baboon "` and
/// `"BABOON"` all resolve to the same entry. Blank input has no key.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SpeciesKey(String);

impl SpeciesKey {
    pub fn new(name: &str) -> Option<Self> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpeciesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
