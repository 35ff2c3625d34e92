use crate::output::print_json;
use anyhow::Context;
use ralph_core::prd::{self as prd_ops, Verdict};
use std::path::Path;

/// Set the `passes` marker of one task and save.
pub fn run(prd_path: &Path, verdict: Verdict, id: &str, json: bool) -> anyhow::Result<()> {
    let mut store = super::prd::load(prd_path)?;
    prd_ops::set_verdict(&mut store.tasks, id, verdict)
        .with_context(|| format!("cannot mark '{id}' as {verdict}"))?;
    store
        .save()
        .with_context(|| format!("failed to save {}", prd_path.display()))?;
    tracing::info!(id, verdict = %verdict, "task status updated");

    if json {
        print_json(&serde_json::json!({
            "id": id,
            "status": verdict.as_str(),
            "passes": verdict.passes(),
        }))?;
    } else {
        println!("Task {id} marked {verdict}");
    }
    Ok(())
}
