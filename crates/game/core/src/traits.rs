//! Trait vocabulary shared by creatures and elixirs.
//!
//! Trait names are open-ended strings: content may introduce names that no
//! lookup table knows about, and such names simply contribute nothing to
//! derived stats. The closed vocabularies (catalyst flavor, gender) are enums.

use std::fmt;

use arrayvec::ArrayVec;

/// Name of a primary, secondary or nurture trait.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TraitName(String);

impl TraitName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TraitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TraitName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for TraitName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TraitName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Fruit family a catalyst was brewed from.
///
/// Flavor keys the bonus-trait list used by the compatibility check and
/// groups the secondary-trait stat table.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Flavor {
    Sweet,
    Sour,
    Bitter,
    Savory,
    Exotic,
}

/// Binary creature gender. Breeding requires opposite genders.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Gender {
    Male,
    Female,
}

/// Errors raised when assembling a trait bundle.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TraitError {
    #[error("secondary trait '{0}' appears more than once")]
    DuplicateSecondary(TraitName),
}

/// Exactly three distinct secondary traits of a creature.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "[TraitName; 3]", into = "[TraitName; 3]")
)]
pub struct SecondaryTraits([TraitName; 3]);

impl SecondaryTraits {
    pub fn new(traits: [TraitName; 3]) -> Result<Self, TraitError> {
        for (i, name) in traits.iter().enumerate() {
            if traits[..i].contains(name) {
                return Err(TraitError::DuplicateSecondary(name.clone()));
            }
        }
        Ok(Self(traits))
    }

    pub fn iter(&self) -> impl Iterator<Item = &TraitName> {
        self.0.iter()
    }

    pub fn contains(&self, name: &TraitName) -> bool {
        self.0.contains(name)
    }

    pub fn as_array(&self) -> &[TraitName; 3] {
        &self.0
    }

    /// Number of these traits that also appear in `other`.
    pub fn shared_with<'a>(&self, other: impl IntoIterator<Item = &'a TraitName>) -> usize {
        let other: ArrayVec<&TraitName, 3> = other.into_iter().take(3).collect();
        self.0.iter().filter(|name| other.contains(name)).count()
    }
}

impl TryFrom<[TraitName; 3]> for SecondaryTraits {
    type Error = TraitError;

    fn try_from(traits: [TraitName; 3]) -> Result<Self, Self::Error> {
        Self::new(traits)
    }
}

impl From<SecondaryTraits> for [TraitName; 3] {
    fn from(traits: SecondaryTraits) -> Self {
        traits.0
    }
}

/// Traits a creature brings to a compatibility check:
/// primary, three secondaries and at most one catalyst bonus.
pub type TraitSet<'a> = ArrayVec<&'a TraitName, 5>;
