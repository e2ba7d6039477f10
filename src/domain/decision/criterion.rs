//! Criteria - the ordered set of named decision criteria.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Criterion names (lowercased) whose raw values count against an alternative.
static COST_CRITERIA: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "price",
        "harga",
        "cost",
        "biaya",
        "delivery",
        "delivery time",
        "delivery-time",
        "pengiriman",
    ]
    .into_iter()
    .collect()
});

/// Whether a higher raw value makes an alternative more or less desirable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionDirection {
    /// Lower raw value is better (price, delivery time).
    Cost,
    /// Higher raw value is better (quality, flexibility, service).
    Benefit,
}

impl CriterionDirection {
    /// Classifies a criterion by its name. Matching is case-insensitive.
    pub fn classify(name: &str) -> Self {
        let key = name.trim().to_lowercase();
        if COST_CRITERIA.contains(key.as_str()) {
            CriterionDirection::Cost
        } else {
            CriterionDirection::Benefit
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            CriterionDirection::Cost => "cost",
            CriterionDirection::Benefit => "benefit",
        }
    }
}

impl fmt::Display for CriterionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A named criterion with its direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Criterion {
    name: String,
    direction: CriterionDirection,
}

impl Criterion {
    /// Creates a criterion, classifying its direction from the name.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("kriteria"));
        }
        let direction = CriterionDirection::classify(&name);
        Ok(Self { name, direction })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn direction(&self) -> CriterionDirection {
        self.direction
    }
}

/// Ordered, name-unique set of criteria. Order defines matrix indices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaSet {
    criteria: Vec<Criterion>,
}

impl CriteriaSet {
    /// Creates an empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a set from names, rejecting empty and duplicate names.
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Result<Self, ValidationError> {
        let mut criteria: Vec<Criterion> = Vec::new();
        for name in names {
            let criterion = Criterion::new(name)?;
            if criteria.iter().any(|c| c.name == criterion.name) {
                return Err(ValidationError::duplicate("kriteria", criterion.name));
            }
            criteria.push(criterion);
        }
        Ok(Self { criteria })
    }

    /// Number of criteria.
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Criterion> {
        self.criteria.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Criterion> {
        self.criteria.get(index)
    }

    /// Position of the named criterion.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.criteria.iter().position(|c| c.name == name)
    }

    /// Criterion names in order.
    pub fn names(&self) -> Vec<&str> {
        self.criteria.iter().map(|c| c.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_recognises_cost_names_in_both_languages() {
        assert_eq!(CriterionDirection::classify("Price"), CriterionDirection::Cost);
        assert_eq!(CriterionDirection::classify("Harga"), CriterionDirection::Cost);
        assert_eq!(CriterionDirection::classify("Delivery-time"), CriterionDirection::Cost);
        assert_eq!(CriterionDirection::classify(" pengiriman "), CriterionDirection::Cost);
    }

    #[test]
    fn classify_defaults_to_benefit() {
        assert_eq!(CriterionDirection::classify("Quality"), CriterionDirection::Benefit);
        assert_eq!(CriterionDirection::classify("Kualitas"), CriterionDirection::Benefit);
        assert_eq!(CriterionDirection::classify("Service"), CriterionDirection::Benefit);
    }

    #[test]
    fn criterion_trims_and_rejects_empty_name() {
        assert_eq!(Criterion::new("  Quality ").unwrap().name(), "Quality");
        assert!(matches!(
            Criterion::new("   "),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn criteria_set_preserves_order() {
        let set = CriteriaSet::new(["Price", "Quality", "Delivery"]).unwrap();
        assert_eq!(set.names(), vec!["Price", "Quality", "Delivery"]);
        assert_eq!(set.index_of("Delivery"), Some(2));
        assert_eq!(set.index_of("Service"), None);
    }

    #[test]
    fn criteria_set_rejects_duplicates() {
        let result = CriteriaSet::new(["Price", "Quality", "Price"]);
        assert!(matches!(result, Err(ValidationError::Duplicate { .. })));
    }

    #[test]
    fn empty_set_has_no_criteria() {
        let set = CriteriaSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }
}
