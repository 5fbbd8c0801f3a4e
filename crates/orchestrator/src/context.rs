//! Cumulative context construction.
//!
//! Advisor N sees the original idea plus a labeled rendering of every
//! prior advisor's output, in execution order. This is the single source
//! of "what has been said so far" within a run; later advisors reference
//! earlier positions through this text alone.

use boardroom_core::{AdvisorRegistry, AdvisorResult};

const IDEA_LABEL: &str = "Startup idea: ";
const SECTION_SEPARATOR: &str = "\n\n---\n\n";
const CONTEXT_HEADER: &str = "Context from other executives:\n";

/// Build the user message for the next advisor. Pure text construction;
/// byte-identical output for identical inputs.
pub fn build_message(idea: &str, registry: &AdvisorRegistry, prior: &[AdvisorResult]) -> String {
    let mut message = format!("{IDEA_LABEL}{idea}");

    if prior.is_empty() {
        return message;
    }

    message.push_str(SECTION_SEPARATOR);
    message.push_str(CONTEXT_HEADER);

    let sections: Vec<String> = prior
        .iter()
        .map(|result| render_section(registry, result))
        .collect();
    message.push_str(&sections.join(SECTION_SEPARATOR));

    message
}

fn render_section(registry: &AdvisorRegistry, result: &AdvisorResult) -> String {
    match registry.get(&result.advisor_id) {
        Some(advisor) => format!(
            "## {} {} ({})\n{}",
            advisor.emoji, advisor.name, advisor.title, result.output
        ),
        // Results always come from registry advisors; keep rendering
        // total anyway rather than panicking on a stray id.
        None => format!("## {}\n{}", result.advisor_id, result.output),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boardroom_core::{Advisor, Verdict};

    fn registry() -> AdvisorRegistry {
        AdvisorRegistry::new(
            vec![
                Advisor::new("ada", "Ada", "CTO", "✦", "sys-a"),
                Advisor::new("grace", "Grace", "CPO", "🚀", "sys-g"),
            ],
            vec!["ada".to_string(), "grace".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn test_first_advisor_sees_only_the_labeled_idea() {
        let message = build_message("A meal-planning app for busy parents", &registry(), &[]);
        assert_eq!(message, "Startup idea: A meal-planning app for busy parents");
    }

    #[test]
    fn test_later_advisor_sees_prior_outputs_in_order() {
        let prior = vec![
            AdvisorResult::new("ada", "**Stack:** Next.js", Verdict::Green, 800),
            AdvisorResult::new("grace", "**Problem:** meal fatigue", Verdict::Yellow, 900),
        ];

        let message = build_message("An app", &registry(), &prior);

        assert_eq!(
            message,
            "Startup idea: An app\n\n---\n\nContext from other executives:\n\
             ## ✦ Ada (CTO)\n**Stack:** Next.js\n\n---\n\n\
             ## 🚀 Grace (CPO)\n**Problem:** meal fatigue"
        );
    }

    #[test]
    fn test_failed_entries_still_appear_in_context() {
        let prior = vec![AdvisorResult::new(
            "ada",
            "completion request timed out after 60000ms",
            Verdict::Unknown,
            60000,
        )];

        let message = build_message("An app", &registry(), &prior);
        assert!(message.contains("## ✦ Ada (CTO)"));
        assert!(message.contains("timed out"));
    }

    #[test]
    fn test_unknown_advisor_id_renders_with_bare_id() {
        let prior = vec![AdvisorResult::new("ghost", "out", Verdict::Green, 1)];
        let message = build_message("An app", &registry(), &prior);
        assert!(message.contains("## ghost\nout"));
    }

    #[test]
    fn test_deterministic_for_identical_inputs() {
        let prior = vec![
            AdvisorResult::new("ada", "first answer", Verdict::Green, 800),
            AdvisorResult::new("grace", "second answer", Verdict::Red, 900),
        ];
        let registry = registry();

        let a = build_message("An app", &registry, &prior);
        let b = build_message("An app", &registry, &prior);
        assert_eq!(a.as_bytes(), b.as_bytes());
    }
}
