//! Prompt-assembly seam.
//!
//! The engine treats each advisor's instructions as an opaque string and
//! resolves it through this trait immediately before every completion
//! call. Whether the string is the registry's built-in template or was
//! assembled from stored workspace files is the source's business.

use std::collections::HashMap;

/// Synchronous instruction lookup by advisor id. Returning `None` tells
/// the engine to use the registry's built-in template.
pub trait InstructionSource: Send + Sync {
    fn instruction_template(&self, advisor_id: &str) -> Option<String>;
}

/// Fixed per-advisor overrides. Used by tests and by callers that
/// assemble all prompts ahead of a run.
#[derive(Debug, Clone, Default)]
pub struct StaticInstructions {
    templates: HashMap<String, String>,
}

impl StaticInstructions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(
        mut self,
        advisor_id: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        self.templates.insert(advisor_id.into(), template.into());
        self
    }
}

impl InstructionSource for StaticInstructions {
    fn instruction_template(&self, advisor_id: &str) -> Option<String> {
        self.templates.get(advisor_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_instructions_lookup() {
        let source = StaticInstructions::new()
            .with_template("ada", "You are a test double.")
            .with_template("val", "Count beans.");

        assert_eq!(
            source.instruction_template("ada").as_deref(),
            Some("You are a test double.")
        );
        assert_eq!(source.instruction_template("grace"), None);
    }
}
