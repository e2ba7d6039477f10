//! Seeded random ratings for a list of alternatives.
//!
//! Price is drawn in thousands per kilogram, delivery in days and every
//! other criterion on the 5/3/1 Likert scale. The same seed always yields
//! the same table.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::records::rating_column;
use super::{AlternativeScoreTable, CriteriaSet, Criterion};
use crate::domain::foundation::ValidationError;

/// Seed used for the default data set.
pub const DEFAULT_SEED: u64 = 42;

/// Price range, inclusive.
pub const PRICE_RANGE: RangeInclusive<u32> = 190..=250;

/// Delivery time range in days, inclusive.
pub const DELIVERY_RANGE: RangeInclusive<u32> = 1..=3;

/// Allowed Likert ratings.
pub const LIKERT_SCALE: [f64; 3] = [5.0, 3.0, 1.0];

/// How values for a criterion column are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingKind {
    Price,
    Delivery,
    Likert,
}

impl RatingKind {
    /// Kind of a criterion, from its rating column. Unknown criteria are Likert.
    pub fn of(criterion: &Criterion) -> Self {
        match rating_column(criterion.name()) {
            Some(0) => RatingKind::Price,
            Some(2) => RatingKind::Delivery,
            _ => RatingKind::Likert,
        }
    }

    /// Whether `value` can be produced for this kind.
    pub fn admits(&self, value: f64) -> bool {
        match self {
            RatingKind::Price => in_range(&PRICE_RANGE, value),
            RatingKind::Delivery => in_range(&DELIVERY_RANGE, value),
            RatingKind::Likert => LIKERT_SCALE.contains(&value),
        }
    }
}

fn in_range(range: &RangeInclusive<u32>, value: f64) -> bool {
    value.fract() == 0.0 && value >= f64::from(*range.start()) && value <= f64::from(*range.end())
}

/// Random rating source backed by a seeded [`StdRng`].
#[derive(Debug, Clone)]
pub struct RatingGenerator {
    rng: StdRng,
}

impl Default for RatingGenerator {
    fn default() -> Self {
        Self::seeded(DEFAULT_SEED)
    }
}

impl RatingGenerator {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws one value of the given kind.
    pub fn draw(&mut self, kind: RatingKind) -> f64 {
        match kind {
            RatingKind::Price => f64::from(self.rng.gen_range(PRICE_RANGE)),
            RatingKind::Delivery => f64::from(self.rng.gen_range(DELIVERY_RANGE)),
            RatingKind::Likert => LIKERT_SCALE[self.rng.gen_range(0..LIKERT_SCALE.len())],
        }
    }

    /// Rates every alternative against `criteria`.
    ///
    /// Values are drawn column by column, so a column's draws do not depend
    /// on how many criteria follow it.
    pub fn generate<S: AsRef<str>>(
        &mut self,
        criteria: CriteriaSet,
        alternatives: &[S],
    ) -> Result<AlternativeScoreTable, ValidationError> {
        let mut values = vec![Vec::with_capacity(criteria.len()); alternatives.len()];
        for criterion in criteria.iter() {
            let kind = RatingKind::of(criterion);
            for row in values.iter_mut() {
                row.push(self.draw(kind));
            }
        }

        let mut table = AlternativeScoreTable::new(criteria);
        for (name, row) in alternatives.iter().zip(values) {
            table.add_row(name.as_ref(), row)?;
        }
        Ok(table)
    }
}
