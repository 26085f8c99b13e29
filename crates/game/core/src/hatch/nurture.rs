//! Nurture selection offered while an egg incubates.

use arrayvec::ArrayVec;

use crate::env::RngOracle;
use crate::traits::TraitName;

use super::HatchError;

/// Maximum number of options shown to the player.
pub const OFFERED_OPTIONS: usize = 4;

/// Fixed activity labels that all lead to one nurture trait.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NurturePool {
    pub nurture: TraitName,
    pub labels: Vec<String>,
}

impl NurturePool {
    pub fn new(
        nurture: impl Into<TraitName>,
        labels: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            nurture: nurture.into(),
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }
}

/// One offered activity and the nurture trait it selects.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NurtureOption {
    pub label: String,
    pub nurture: TraitName,
}

/// Options offered for one egg.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NurtureOffer {
    options: ArrayVec<NurtureOption, OFFERED_OPTIONS>,
}

impl NurtureOffer {
    /// Draws one label from each pool, independently, for the first
    /// [`OFFERED_OPTIONS`] non-empty pools.
    pub fn draw(pools: &[NurturePool], rng: &mut (impl RngOracle + ?Sized)) -> Self {
        let options = pools
            .iter()
            .filter(|pool| !pool.labels.is_empty())
            .take(OFFERED_OPTIONS)
            .map(|pool| NurtureOption {
                label: pool.labels[rng.index(pool.labels.len())].clone(),
                nurture: pool.nurture.clone(),
            })
            .collect();
        Self { options }
    }

    pub fn options(&self) -> &[NurtureOption] {
        &self.options
    }

    /// Nurture for the player's pick, or `default` when the countdown ran out
    /// without one.
    pub fn resolve(
        &self,
        choice: Option<usize>,
        default: &TraitName,
    ) -> Result<TraitName, HatchError> {
        match choice {
            None => Ok(default.clone()),
            Some(index) => self
                .options
                .get(index)
                .map(|option| option.nurture.clone())
                .ok_or(HatchError::ChoiceOutOfRange {
                    index,
                    offered: self.options.len(),
                }),
        }
    }
}
