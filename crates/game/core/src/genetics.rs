//! Allele dominance and genotype → phenotype mapping.
//!
//! Dominance order, most to least dominant: `B > W > R > M`. A phenotype is
//! the most dominant allele present in a genotype, so the two positions of a
//! genotype are interchangeable.

use std::fmt;

/// Atomic unit of a genotype.
///
/// Variants are declared in dominance order; the derived `Ord` therefore
/// sorts the most dominant allele first.
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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Allele {
    B,
    W,
    R,
    M,
}

impl Allele {
    /// All alleles, most dominant first.
    pub const DOMINANCE: [Allele; 4] = [Allele::B, Allele::W, Allele::R, Allele::M];

    /// Phenotype expressed by a genotype whose dominant allele is `self`.
    pub const fn phenotype(self) -> Phenotype {
        match self {
            Allele::B => Phenotype::Black,
            Allele::W => Phenotype::White,
            Allele::R => Phenotype::Rainbow,
            Allele::M => Phenotype::Metallic,
        }
    }

    /// True if `self` is at least as dominant as `other`.
    pub fn dominates_or_equals(self, other: Allele) -> bool {
        self <= other
    }
}

/// Visible category of a creature or egg.
///
/// Gold, Silver and Metal are cosmetic metallic finishes and parse as
/// [`Phenotype::Metallic`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Phenotype {
    Black,
    White,
    Rainbow,
    #[strum(to_string = "Metallic", serialize = "Gold", serialize = "Silver", serialize = "Metal")]
    Metallic,
}

impl Phenotype {
    /// Allele whose dominance produces this phenotype.
    pub const fn allele(self) -> Allele {
        match self {
            Phenotype::Black => Allele::B,
            Phenotype::White => Allele::W,
            Phenotype::Rainbow => Allele::R,
            Phenotype::Metallic => Allele::M,
        }
    }
}

/// Unordered pair of alleles.
///
/// Stored normalized (dominant allele first) so `(B, M)` and `(M, B)` are the
/// same value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "(Allele, Allele)", into = "(Allele, Allele)"))]
pub struct Genotype {
    dominant: Allele,
    recessive: Allele,
}

impl Genotype {
    pub fn new(a: Allele, b: Allele) -> Self {
        let (dominant, recessive) = if a <= b { (a, b) } else { (b, a) };
        Self {
            dominant,
            recessive,
        }
    }

    pub fn alleles(&self) -> [Allele; 2] {
        [self.dominant, self.recessive]
    }

    pub fn contains(&self, allele: Allele) -> bool {
        self.dominant == allele || self.recessive == allele
    }

    /// Expressed phenotype: the first allele in dominance order present in
    /// either position.
    pub fn phenotype(&self) -> Phenotype {
        Allele::DOMINANCE
            .into_iter()
            .find(|allele| self.contains(*allele))
            .map(Allele::phenotype)
            .unwrap_or(Phenotype::Metallic)
    }
}

impl From<(Allele, Allele)> for Genotype {
    fn from((a, b): (Allele, Allele)) -> Self {
        Self::new(a, b)
    }
}

impl From<Genotype> for (Allele, Allele) {
    fn from(genotype: Genotype) -> Self {
        (genotype.dominant, genotype.recessive)
    }
}

impl fmt::Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.dominant, self.recessive)
    }
}

/// Shorthand for [`Genotype::phenotype`].
pub fn phenotype_of(genotype: Genotype) -> Phenotype {
    genotype.phenotype()
}

/// Every genotype expressing `phenotype`: the phenotype's allele paired with
/// any allele of equal or lower dominance.
pub fn valid_genotypes_for(phenotype: Phenotype) -> Vec<Genotype> {
    let dominant = phenotype.allele();
    Allele::DOMINANCE
        .into_iter()
        .filter(|other| dominant.dominates_or_equals(*other))
        .map(|other| Genotype::new(dominant, other))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phenotype_is_position_independent() {
        let bm = Genotype::new(Allele::B, Allele::M);
        let mb = Genotype::new(Allele::M, Allele::B);
        assert_eq!(bm, mb);
        assert_eq!(phenotype_of(bm), Phenotype::Black);
        assert_eq!(phenotype_of(mb), Phenotype::Black);
    }

    #[test]
    fn phenotype_follows_dominance_for_every_pair() {
        for a in Allele::DOMINANCE {
            for b in Allele::DOMINANCE {
                let expected = if a <= b { a } else { b };
                assert_eq!(
                    Genotype::new(a, b).phenotype(),
                    expected.phenotype(),
                    "({a},{b})"
                );
            }
        }
    }

    #[test]
    fn valid_genotypes_cover_lower_dominance() {
        let black = valid_genotypes_for(Phenotype::Black);
        assert_eq!(black.len(), 4);
        assert!(black.iter().all(|g| g.phenotype() == Phenotype::Black));

        let rainbow = valid_genotypes_for(Phenotype::Rainbow);
        assert_eq!(
            rainbow,
            vec![
                Genotype::new(Allele::R, Allele::R),
                Genotype::new(Allele::R, Allele::M)
            ]
        );

        assert_eq!(
            valid_genotypes_for(Phenotype::Metallic),
            vec![Genotype::new(Allele::M, Allele::M)]
        );
    }

    #[test]
    fn metallic_finishes_parse_as_metallic() {
        for label in ["Gold", "silver", "METAL", "Metallic"] {
            assert_eq!(label.parse::<Phenotype>().unwrap(), Phenotype::Metallic);
        }
        assert_eq!(Phenotype::Metallic.to_string(), "Metallic");
        assert!("Plaid".parse::<Phenotype>().is_err());
    }
}
