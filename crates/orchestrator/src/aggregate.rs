//! Reduction of per-advisor verdicts to one recommendation.

use boardroom_core::{OverallVerdict, Recommendation, Verdict};
use tracing::warn;

const GO_LABEL: &str = "Build it!";
const CAUTION_LABEL: &str = "Address the yellow flags first";
const NO_GO_LABEL: &str = "Major concerns need addressing";

/// Pure reduction, evaluated in fixed priority order: any `RED` is a
/// NO-GO; otherwise two or more `YELLOW`s advise caution; otherwise GO.
///
/// `Unknown` counts as neither red nor yellow, so a run whose calls all
/// failed still aggregates to GO. That is intentional product behavior;
/// the warning below keeps it visible in logs.
pub fn aggregate(verdicts: &[Verdict]) -> OverallVerdict {
    let reds = count(verdicts, Verdict::Red);
    let yellows = count(verdicts, Verdict::Yellow);
    let unknowns = count(verdicts, Verdict::Unknown);

    if unknowns > 0 {
        warn!(
            unknowns,
            total = verdicts.len(),
            "Aggregating with unknown verdicts; they neither block nor caution"
        );
    }

    if reds > 0 {
        OverallVerdict::new(Recommendation::NoGo, NO_GO_LABEL)
    } else if yellows >= 2 {
        OverallVerdict::new(Recommendation::ProceedWithCaution, CAUTION_LABEL)
    } else {
        OverallVerdict::new(Recommendation::Go, GO_LABEL)
    }
}

fn count(verdicts: &[Verdict], wanted: Verdict) -> usize {
    verdicts.iter().filter(|v| **v == wanted).count()
}
