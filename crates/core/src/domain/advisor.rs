use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::CoreError;

/// One advisory persona: identity plus the system instructions it is
/// invoked with. Defined at process start and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Advisor {
    /// Unique identifier, e.g. "ada"
    pub id: String,
    /// Display name, e.g. "Ada"
    pub name: String,
    /// Short role title, e.g. "CTO"
    pub title: String,
    /// Display glyph shown next to the name
    pub emoji: String,
    /// System prompt sent with every completion call for this advisor
    pub instructions: String,
}

impl Advisor {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        title: impl Into<String>,
        emoji: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            title: title.into(),
            emoji: emoji.into(),
            instructions: instructions.into(),
        }
    }
}

/// Read-only advisor table plus the explicit execution order.
///
/// The order is load-bearing: cumulative context for advisor N is built
/// from the outputs of advisors 1..N-1 in exactly this order, so two
/// registries with the same advisors but different orders produce
/// different pipelines.
#[derive(Debug, Clone)]
pub struct AdvisorRegistry {
    advisors: HashMap<String, Advisor>,
    order: Vec<String>,
}

impl AdvisorRegistry {
    /// Build a registry from advisor descriptors and an execution order.
    ///
    /// Every advisor must appear in the order exactly once.
    pub fn new(advisors: Vec<Advisor>, order: Vec<String>) -> Result<Self, CoreError> {
        let mut table = HashMap::with_capacity(advisors.len());
        for advisor in advisors {
            if table.insert(advisor.id.clone(), advisor).is_some() {
                return Err(CoreError::Validation(
                    "duplicate advisor id in registry".to_string(),
                ));
            }
        }

        if order.len() != table.len() {
            return Err(CoreError::Validation(format!(
                "execution order lists {} advisors, registry has {}",
                order.len(),
                table.len()
            )));
        }

        let mut seen = HashSet::with_capacity(order.len());
        for id in &order {
            if !table.contains_key(id) {
                return Err(CoreError::Validation(format!(
                    "execution order references unknown advisor: {}",
                    id
                )));
            }
            if !seen.insert(id.as_str()) {
                return Err(CoreError::Validation(format!(
                    "execution order lists advisor twice: {}",
                    id
                )));
            }
        }

        Ok(Self {
            advisors: table,
            order,
        })
    }

    pub fn get(&self, id: &str) -> Option<&Advisor> {
        self.advisors.get(id)
    }

    pub fn execution_order(&self) -> &[String] {
        &self.order
    }

    /// Enumerate advisors in execution order.
    pub fn iter_ordered(&self) -> impl Iterator<Item = &Advisor> {
        self.order.iter().filter_map(|id| self.advisors.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
