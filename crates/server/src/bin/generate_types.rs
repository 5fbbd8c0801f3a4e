//! Run with: cargo run --package server --bin generate-types --features typescript

use std::fs;
use std::path::Path;

fn main() {
    println!("Generating TypeScript types...");

    let out_dir = Path::new("frontend/src/types/generated");

    if let Err(e) = fs::create_dir_all(out_dir) {
        eprintln!("Failed to create output directory: {}", e);
        std::process::exit(1);
    }

    #[cfg(feature = "typescript")]
    {
        use ts_rs::TS;

        boardroom_core::Advisor::export_all_to(out_dir).expect("Failed to export Advisor");
        boardroom_core::Verdict::export_all_to(out_dir).expect("Failed to export Verdict");
        boardroom_core::Recommendation::export_all_to(out_dir)
            .expect("Failed to export Recommendation");
        boardroom_core::OverallVerdict::export_all_to(out_dir)
            .expect("Failed to export OverallVerdict");
        boardroom_core::AdvisorResult::export_all_to(out_dir)
            .expect("Failed to export AdvisorResult");

        events::AdvisorRef::export_all_to(out_dir).expect("Failed to export AdvisorRef");
        events::ProgressEvent::export_all_to(out_dir).expect("Failed to export ProgressEvent");

        orchestrator::ArtifactKind::export_all_to(out_dir)
            .expect("Failed to export ArtifactKind");
        orchestrator::JobState::export_all_to(out_dir).expect("Failed to export JobState");
        orchestrator::StartedJob::export_all_to(out_dir).expect("Failed to export StartedJob");
        orchestrator::JobOutcome::export_all_to(out_dir).expect("Failed to export JobOutcome");

        server::routes::orchestrate::OrchestrateRequest::export_all_to(out_dir)
            .expect("Failed to export OrchestrateRequest");
        server::routes::orchestrate::OrchestrateResponse::export_all_to(out_dir)
            .expect("Failed to export OrchestrateResponse");
        server::routes::forge::ForgeRequest::export_all_to(out_dir)
            .expect("Failed to export ForgeRequest");
        server::routes::forge::ForgeStartResponse::export_all_to(out_dir)
            .expect("Failed to export ForgeStartResponse");
    }

    println!("TypeScript types generated in {}", out_dir.display());
}
