//! Alternative score table - raw per-criterion ratings of each alternative.

use serde::{Deserialize, Serialize};

use super::rating_generator::{RatingGenerator, RatingKind};
use super::CriteriaSet;
use crate::domain::foundation::ValidationError;

/// A candidate being ranked (a supplier, in the default data set).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Alternative(String);

impl Alternative {
    /// Creates an alternative, rejecting blank names.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("Alternatif"));
        }
        Ok(Self(name))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Raw ratings of one alternative, one value per criterion in table order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingRow {
    pub alternative: Alternative,
    pub values: Vec<f64>,
}

/// Ratings of every alternative against a fixed criteria set.
///
/// Row order is alternative order. Names are not required to be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeScoreTable {
    criteria: CriteriaSet,
    rows: Vec<RatingRow>,
}

impl AlternativeScoreTable {
    /// Creates an empty table over the given criteria.
    pub fn new(criteria: CriteriaSet) -> Self {
        Self {
            criteria,
            rows: Vec::new(),
        }
    }

    pub fn criteria(&self) -> &CriteriaSet {
        &self.criteria
    }

    pub fn rows(&self) -> &[RatingRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Alternative names in row order.
    pub fn alternatives(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.alternative.name()).collect()
    }

    /// Appends a row. Values must be finite and match the criteria count.
    pub fn add_row(&mut self, alternative: impl Into<String>, values: Vec<f64>) -> Result<(), ValidationError> {
        let alternative = Alternative::new(alternative)?;
        if values.len() != self.criteria.len() {
            return Err(ValidationError::out_of_range(
                "ratings",
                self.criteria.len() as i32,
                self.criteria.len() as i32,
                values.len() as i32,
            ));
        }
        if let Some(pos) = values.iter().position(|v| !v.is_finite()) {
            let name = self.criteria.get(pos).map(|c| c.name()).unwrap_or("rating");
            return Err(ValidationError::invalid_format(name, "rating must be a finite number"));
        }

        self.rows.push(RatingRow { alternative, values });
        Ok(())
    }

    /// Builder-style variant of [`add_row`](Self::add_row).
    pub fn with_row(mut self, alternative: impl Into<String>, values: Vec<f64>) -> Result<Self, ValidationError> {
        self.add_row(alternative, values)?;
        Ok(self)
    }

    /// Updates one rating, addressing the column by criterion name.
    pub fn set_rating(&mut self, row: usize, criterion: &str, value: f64) -> Result<(), ValidationError> {
        let col = self
            .criteria
            .index_of(criterion)
            .ok_or_else(|| ValidationError::invalid_format("kriteria", format!("unknown criterion '{}'", criterion)))?;
        if !value.is_finite() {
            return Err(ValidationError::invalid_format(criterion, "rating must be a finite number"));
        }
        let len = self.rows.len();
        let target = self
            .rows
            .get_mut(row)
            .ok_or_else(|| ValidationError::out_of_range("row", 0, len as i32 - 1, row as i32))?;
        target.values[col] = value;
        Ok(())
    }

    /// Renames the alternative at `row`.
    pub fn rename_alternative(&mut self, row: usize, name: impl Into<String>) -> Result<(), ValidationError> {
        let alternative = Alternative::new(name)?;
        let len = self.rows.len();
        let target = self
            .rows
            .get_mut(row)
            .ok_or_else(|| ValidationError::out_of_range("row", 0, len as i32 - 1, row as i32))?;
        target.alternative = alternative;
        Ok(())
    }

    /// Removes and returns the row at `row`, if any.
    pub fn remove_row(&mut self, row: usize) -> Option<RatingRow> {
        if row < self.rows.len() {
            Some(self.rows.remove(row))
        } else {
            None
        }
    }

    /// All raw values of one criterion column.
    pub fn column(&self, index: usize) -> Vec<f64> {
        self.rows.iter().filter_map(|r| r.values.get(index).copied()).collect()
    }

    /// Redraws the price and delivery columns. Likert columns are kept.
    pub fn reroll_price_and_delivery(&mut self, generator: &mut RatingGenerator) {
        self.reroll(generator, |kind| kind != RatingKind::Likert);
    }

    /// Redraws every Likert column. Price and delivery are kept.
    pub fn reroll_likert(&mut self, generator: &mut RatingGenerator) {
        self.reroll(generator, |kind| kind == RatingKind::Likert);
    }

    fn reroll(&mut self, generator: &mut RatingGenerator, selected: impl Fn(RatingKind) -> bool) {
        let kinds: Vec<RatingKind> = self.criteria.iter().map(RatingKind::of).collect();
        for (col, kind) in kinds.into_iter().enumerate() {
            if !selected(kind) {
                continue;
            }
            for row in self.rows.iter_mut() {
                row.values[col] = generator.draw(kind);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> AlternativeScoreTable {
        AlternativeScoreTable::new(CriteriaSet::new(["Price", "Quality"]).unwrap())
    }

    #[test]
    fn add_row_appends_in_order() {
        let t = table()
            .with_row("Beska", vec![200.0, 5.0])
            .unwrap()
            .with_row("Fow", vec![240.0, 3.0])
            .unwrap();

        assert_eq!(t.alternatives(), vec!["Beska", "Fow"]);
        assert_eq!(t.column(0), vec![200.0, 240.0]);
        assert_eq!(t.column(1), vec![5.0, 3.0]);
    }

    #[test]
    fn add_row_rejects_wrong_width() {
        let mut t = table();
        assert!(matches!(
            t.add_row("Beska", vec![200.0]),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(t.is_empty());
    }

    #[test]
    fn add_row_rejects_non_finite_values() {
        let mut t = table();
        let err = t.add_row("Beska", vec![f64::NAN, 1.0]).unwrap_err();
        assert!(err.to_string().contains("Price"));
    }

    #[test]
    fn add_row_rejects_blank_names() {
        let mut t = table();
        assert!(t.add_row("  ", vec![1.0, 1.0]).is_err());
    }

    #[test]
    fn duplicate_alternative_names_are_allowed() {
        let t = table()
            .with_row("Koloni", vec![1.0, 1.0])
            .unwrap()
            .with_row("Koloni", vec![2.0, 2.0])
            .unwrap();
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn set_rating_addresses_column_by_name() {
        let mut t = table().with_row("Beska", vec![200.0, 5.0]).unwrap();
        t.set_rating(0, "Quality", 1.0).unwrap();
        assert_eq!(t.rows()[0].values, vec![200.0, 1.0]);

        assert!(t.set_rating(0, "Service", 1.0).is_err());
        assert!(t.set_rating(3, "Quality", 1.0).is_err());
    }

    #[test]
    fn rename_and_remove_rows() {
        let mut t = table()
            .with_row("Beska", vec![200.0, 5.0])
            .unwrap()
            .with_row("Fow", vec![210.0, 3.0])
            .unwrap();

        t.rename_alternative(1, "Diego").unwrap();
        assert_eq!(t.alternatives(), vec!["Beska", "Diego"]);

        let removed = t.remove_row(0).unwrap();
        assert_eq!(removed.alternative.name(), "Beska");
        assert!(t.remove_row(5).is_none());
        assert_eq!(t.len(), 1);
    }

    fn rated() -> AlternativeScoreTable {
        let criteria = CriteriaSet::new(["Price", "Quality", "Delivery", "Flexibility", "Service"]).unwrap();
        AlternativeScoreTable::new(criteria)
            .with_row("Beska", vec![0.0, 0.0, 0.0, 0.0, 0.0])
            .unwrap()
            .with_row("Fow", vec![0.0, 0.0, 0.0, 0.0, 0.0])
            .unwrap()
    }

    #[test]
    fn reroll_price_and_delivery_keeps_likert_columns() {
        let mut t = rated();
        t.reroll_price_and_delivery(&mut RatingGenerator::seeded(1));

        assert!(t.column(0).iter().all(|v| (190.0..=250.0).contains(v)));
        assert!(t.column(2).iter().all(|v| (1.0..=3.0).contains(v)));
        for col in [1, 3, 4] {
            assert_eq!(t.column(col), vec![0.0, 0.0]);
        }
    }

    #[test]
    fn reroll_likert_keeps_price_and_delivery() {
        let mut t = rated();
        t.reroll_likert(&mut RatingGenerator::seeded(1));

        assert_eq!(t.column(0), vec![0.0, 0.0]);
        assert_eq!(t.column(2), vec![0.0, 0.0]);
        for col in [1, 3, 4] {
            assert!(t.column(col).iter().all(|v| [5.0, 3.0, 1.0].contains(v)));
        }
        assert_eq!(t.alternatives(), vec!["Beska", "Fow"]);
    }
}
