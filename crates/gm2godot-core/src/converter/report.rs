//! Per-category results of a run

use super::settings::Category;

/// What happened to one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryOutcome {
    /// Ran to completion
    Completed,
    /// Ran and failed; the message was also logged
    Failed(String),
    /// Switched off in the settings
    Skipped,
    /// Not started because the run was cancelled
    Cancelled,
}

/// Outcomes of every category, in execution order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    /// One entry per category that was considered
    pub outcomes: Vec<(Category, CategoryOutcome)>,
}

impl ConversionReport {
    pub(crate) fn record(&mut self, category: Category, outcome: CategoryOutcome) {
        self.outcomes.push((category, outcome));
    }

    /// Outcome of a category
    pub fn outcome(&self, category: Category) -> Option<&CategoryOutcome> {
        self.outcomes
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, o)| o)
    }

    /// Categories that failed, with their error messages
    pub fn failures(&self) -> impl Iterator<Item = (Category, &str)> {
        self.outcomes.iter().filter_map(|(c, o)| match o {
            CategoryOutcome::Failed(msg) => Some((*c, msg.as_str())),
            _ => None,
        })
    }

    /// Whether the run stopped early
    pub fn was_cancelled(&self) -> bool {
        self.outcomes
            .iter()
            .any(|(_, o)| *o == CategoryOutcome::Cancelled)
    }
}
