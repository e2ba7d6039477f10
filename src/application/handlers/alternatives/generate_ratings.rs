//! GenerateRatingsHandler - Fills the rating table with seeded random values.

use tracing::info;

use crate::domain::decision::{DecisionWorkspace, RatingGenerator, DEFAULT_SEED};
use crate::domain::foundation::DomainError;

/// What to (re)generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateRatingsCommand {
    /// Rates the given alternatives from scratch against the workspace criteria.
    Generate { alternatives: Vec<String> },
    /// Redraws price and delivery only.
    RerollPriceAndDelivery,
    /// Redraws the Likert-scale criteria only.
    RerollLikert,
}

impl GenerateRatingsCommand {
    fn label(&self) -> &'static str {
        match self {
            GenerateRatingsCommand::Generate { .. } => "generate",
            GenerateRatingsCommand::RerollPriceAndDelivery => "reroll_price_and_delivery",
            GenerateRatingsCommand::RerollLikert => "reroll_likert",
        }
    }
}

/// Handler for generated ratings. Pure: no ports.
///
/// Successive calls continue the same random sequence.
#[derive(Debug, Clone)]
pub struct GenerateRatingsHandler {
    generator: RatingGenerator,
}

impl Default for GenerateRatingsHandler {
    fn default() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }
}

impl GenerateRatingsHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            generator: RatingGenerator::seeded(seed),
        }
    }

    /// Returns the number of rated alternatives.
    pub fn handle(
        &mut self,
        workspace: &mut DecisionWorkspace,
        cmd: GenerateRatingsCommand,
    ) -> Result<usize, DomainError> {
        let action = cmd.label();
        match cmd {
            GenerateRatingsCommand::Generate { alternatives } => {
                let table = self.generator.generate(workspace.criteria().clone(), &alternatives)?;
                workspace.set_ratings(table);
            }
            GenerateRatingsCommand::RerollPriceAndDelivery => {
                workspace.reroll_price_and_delivery(&mut self.generator)?;
            }
            GenerateRatingsCommand::RerollLikert => {
                workspace.reroll_likert(&mut self.generator)?;
            }
        }

        let count = workspace.alternative_count();
        info!(action, alternatives = count, "Ratings generated");
        Ok(count)
    }
}
