use crate::output::{print_json, print_rule, print_table};
use crate::prompt::StdinPrompt;
use anyhow::Context;
use clap::Subcommand;
use ralph_core::prd::{self as prd_ops, PrdStore, Task};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Subcommand)]
pub enum PrdSubcommand {
    /// List tasks as one-line summaries
    List {
        /// Show only the first N tasks (10 when given without a value, 0 for all)
        #[arg(long, num_args = 0..=1, default_missing_value = "10")]
        limit: Option<usize>,
    },
    /// Show full details for a single task
    Search { id: String },
    /// Add a batch of tasks from a JSON array (stdin unless --file is given)
    Add {
        /// Read the JSON array from this file
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Delete a task after confirmation
    Delete { id: String },
    /// Interactively edit story, priority and status
    Update { id: String },
    /// Counts by priority and status
    Stats,
}

pub fn run(prd_path: &Path, subcmd: PrdSubcommand, json: bool) -> anyhow::Result<()> {
    let store = load(prd_path)?;
    match subcmd {
        PrdSubcommand::List { limit } => list(&store, limit, json),
        PrdSubcommand::Search { id } => search(&store, &id, json),
        PrdSubcommand::Add { file } => {
            let input = read_batch_input(file.as_deref())?;
            add(store, &input, json)
        }
        PrdSubcommand::Delete { id } => delete(store, &id),
        PrdSubcommand::Update { id } => update(store, &id),
        PrdSubcommand::Stats => stats(&store, json),
    }
}

pub fn load(prd_path: &Path) -> anyhow::Result<PrdStore> {
    PrdStore::load(prd_path).with_context(|| format!("failed to load {}", prd_path.display()))
}

fn save(store: &PrdStore) -> anyhow::Result<()> {
    store
        .save()
        .with_context(|| format!("failed to save {}", store.path().display()))
}

// ---------------------------------------------------------------------------
// list / search
// ---------------------------------------------------------------------------

fn list(store: &PrdStore, limit: Option<usize>, json: bool) -> anyhow::Result<()> {
    // A limit of 0 means no limit.
    let limit = limit.filter(|&n| n > 0);
    let shown = match limit {
        Some(n) => &store.tasks[..n.min(store.tasks.len())],
        None => &store.tasks[..],
    };

    if json {
        return print_json(&shown);
    }

    println!();
    print_rule();
    println!("Total Tasks: {}", store.tasks.len());
    if limit.is_some() {
        println!("Showing: {}", shown.len());
    }
    print_rule();
    println!();

    for task in shown {
        print_summary(task);
        println!();
    }
    Ok(())
}

fn search(store: &PrdStore, id: &str, json: bool) -> anyhow::Result<()> {
    let task = store
        .find(id)
        .with_context(|| format!("task not found: {id}"))?;

    if json {
        return print_json(task);
    }

    println!();
    print_rule();
    print_full(task);
    print_rule();
    Ok(())
}

pub fn print_summary(task: &Task) {
    println!("[{}] {}", task.id().unwrap_or("N/A"), task.short_story());
    println!(
        "  Priority: {} | Status: {}",
        task.priority().unwrap_or("N/A"),
        task.status().unwrap_or("N/A")
    );
}

pub fn print_full(task: &Task) {
    println!("ID: {}", task.id().unwrap_or("N/A"));
    println!("Story: {}", task.story().unwrap_or("N/A"));
    println!("Priority: {}", task.priority().unwrap_or("N/A"));
    println!("Status: {}", task.status().unwrap_or("N/A"));
    let passes = match task.passes() {
        Some(true) => "pass",
        Some(false) => "fail",
        None => "pending",
    };
    println!("Passes: {passes}");

    let requirements = task.requirements();
    if !requirements.is_empty() {
        println!("\nRequirements ({}):", requirements.len());
        for req in requirements {
            println!("  - {req}");
        }
    }
    let criteria = task.acceptance_criteria();
    if !criteria.is_empty() {
        println!("\nAcceptance Criteria ({}):", criteria.len());
        for criterion in criteria {
            println!("  - {criterion}");
        }
    }
}

// ---------------------------------------------------------------------------
// add
// ---------------------------------------------------------------------------

fn read_batch_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}

fn add(mut store: PrdStore, input: &str, json: bool) -> anyhow::Result<()> {
    let records = prd_ops::parse_batch(input).context("could not parse task batch")?;
    if records.is_empty() {
        if json {
            return print_json(&prd_ops::BatchReport::default());
        }
        println!("No tasks provided");
        return Ok(());
    }

    let report = prd_ops::add_batch(&mut store.tasks, records);
    if !report.added.is_empty() {
        save(&store)?;
    }
    tracing::info!(
        added = report.added.len(),
        skipped = report.skipped.len(),
        errors = report.errors.len(),
        "batch add finished"
    );

    if json {
        return print_json(&report);
    }

    println!();
    print_rule();
    println!("Batch Add Summary");
    print_rule();
    println!("Added: {}", report.added.len());
    for id in &report.added {
        println!("  - {id}");
    }
    if !report.skipped.is_empty() {
        println!("\nSkipped (already exists): {}", report.skipped.len());
        for id in &report.skipped {
            println!("  - {id}");
        }
    }
    if !report.errors.is_empty() {
        println!("\nErrors: {}", report.errors.len());
        for err in &report.errors {
            println!("  - {err}");
        }
    }
    print_rule();
    Ok(())
}

// ---------------------------------------------------------------------------
// delete / update
// ---------------------------------------------------------------------------

fn delete(mut store: PrdStore, id: &str) -> anyhow::Result<()> {
    let task = store
        .find(id)
        .with_context(|| format!("task not found: {id}"))?;

    println!("\n=== Task to Delete ===");
    print_summary(task);
    println!();

    let deleted = prd_ops::delete_task(&mut store.tasks, id, &mut StdinPrompt)?;
    if deleted {
        save(&store)?;
        println!("Task deleted: {id}");
    } else {
        println!("Cancelled");
    }
    Ok(())
}

fn update(mut store: PrdStore, id: &str) -> anyhow::Result<()> {
    let task = store
        .find(id)
        .with_context(|| format!("task not found: {id}"))?;

    println!("\n=== Current Task ===");
    print_full(task);
    println!("\n=== Update Task ===");
    println!("Leave blank to keep current value\n");

    let changed = prd_ops::update_task(&mut store.tasks, id, &mut StdinPrompt)?;
    save(&store)?;
    tracing::debug!(id, changed, "task updated");
    println!("Task updated: {id}");
    Ok(())
}

// ---------------------------------------------------------------------------
// stats
// ---------------------------------------------------------------------------

fn stats(store: &PrdStore, json: bool) -> anyhow::Result<()> {
    let s = prd_ops::stats(&store.tasks);

    if json {
        return print_json(&s);
    }

    println!();
    print_rule();
    println!("PRD Statistics");
    print_rule();
    println!("\nTotal Tasks: {}", s.total);

    for (title, counts) in [("Priority", &s.by_priority), ("Status", &s.by_status)] {
        println!("\nBy {title}:");
        let rows = counts
            .iter()
            .map(|(key, &count)| {
                vec![
                    key.clone(),
                    count.to_string(),
                    format!("{:.1}%", s.percent(count)),
                ]
            })
            .collect();
        print_table(&[title, "Count", "Share"], rows);
    }
    println!();
    print_rule();
    Ok(())
}
