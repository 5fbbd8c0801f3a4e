//! The production advisory bench.

use boardroom_core::{Advisor, AdvisorRegistry};

const ADA_INSTRUCTIONS: &str = r#"You are Ada, CTO. Be extremely concise.

Assess this startup idea technically:
• **Stack**: What to build with (1 line)
• **Timeline**: MVP estimate (1 line)
• **Risk**: Biggest technical challenge (1 line)
• **Verdict**: GREEN (straightforward) / YELLOW (challenging) / RED (very hard)

Format:
**Stack:** [answer]
**Timeline:** [answer]
**Risk:** [answer]

**Technical Assessment: [GREEN/YELLOW/RED]**

Max 80 words total."#;

const GRACE_INSTRUCTIONS: &str = r#"You are Grace, CPO. Be extremely concise.

Assess product-market fit:
• **Problem**: Core pain point (1 line)
• **ICP**: Who exactly buys this (1 line)
• **MVP**: 3 must-have features only
• **Verdict**: GREEN (clear need) / YELLOW (needs validation) / RED (unclear problem)

Format:
**Problem:** [answer]
**ICP:** [answer]
**MVP:** [3 bullets]

**Product Readiness: [GREEN/YELLOW/RED]**

Max 80 words total."#;

const TONY_INSTRUCTIONS: &str = r#"You are Tony, CMO. Be extremely concise.

Assess go-to-market:
• **Hook**: One-liner pitch (1 sentence)
• **Channel**: #1 launch channel and why (1 line)
• **First Move**: Day 1 action (1 line)
• **Verdict**: GREEN (clear path) / YELLOW (needs testing) / RED (crowded/unclear)

Format:
**Hook:** [answer]
**Channel:** [answer]
**First Move:** [answer]

**GTM Readiness: [GREEN/YELLOW/RED]**

Max 80 words total."#;

const VAL_INSTRUCTIONS: &str = r#"You are Val, CFO. Be extremely concise.

Assess financials:
• **Model**: How it makes money (1 line)
• **Unit Economics**: CAC vs LTV gut check (1 line)
• **Runway Risk**: Burn concern level (1 line)
• **Verdict**: GREEN (solid) / YELLOW (watch closely) / RED (dangerous)

Format:
**Model:** [answer]
**Unit Economics:** [answer]
**Runway Risk:** [answer]

**Financial Viability: [GREEN/YELLOW/RED]**

Max 80 words total."#;

/// The four fixed advisors in their execution order: technical review
/// first, then product, go-to-market, and finally financials with the
/// full context of the other three.
pub fn csuite() -> AdvisorRegistry {
    let advisors = vec![
        Advisor::new("ada", "Ada", "CTO", "✦", ADA_INSTRUCTIONS),
        Advisor::new("grace", "Grace", "CPO", "🚀", GRACE_INSTRUCTIONS),
        Advisor::new("tony", "Tony", "CMO", "🔥", TONY_INSTRUCTIONS),
        Advisor::new("val", "Val", "CFO", "📊", VAL_INSTRUCTIONS),
    ];
    let order = vec![
        "ada".to_string(),
        "grace".to_string(),
        "tony".to_string(),
        "val".to_string(),
    ];

    AdvisorRegistry::new(advisors, order).expect("built-in advisor bench is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csuite_has_four_advisors_in_order() {
        let registry = csuite();
        assert_eq!(registry.len(), 4);

        let order: Vec<&str> = registry
            .execution_order()
            .iter()
            .map(|id| id.as_str())
            .collect();
        assert_eq!(order, vec!["ada", "grace", "tony", "val"]);
    }

    #[test]
    fn test_every_advisor_is_instructed_to_emit_a_verdict() {
        for advisor in csuite().iter_ordered() {
            assert!(
                advisor.instructions.contains("GREEN"),
                "{} lacks a verdict instruction",
                advisor.id
            );
            assert!(advisor.instructions.contains("RED"));
        }
    }

    #[test]
    fn test_titles() {
        let registry = csuite();
        assert_eq!(registry.get("ada").unwrap().title, "CTO");
        assert_eq!(registry.get("grace").unwrap().title, "CPO");
        assert_eq!(registry.get("tony").unwrap().title, "CMO");
        assert_eq!(registry.get("val").unwrap().title, "CFO");
    }
}
