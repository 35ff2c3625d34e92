use crate::error::{RalphError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const DEFAULT_PRIORITY: &str = "medium";
pub const DEFAULT_STATUS: &str = "pending";

/// Longest story shown in one-line summaries.
pub const SUMMARY_STORY_LEN: usize = 60;

// ---------------------------------------------------------------------------
// Task
// ---------------------------------------------------------------------------

/// One requirement entry of the PRD file.
///
/// The record is held as the JSON object it was loaded from, so saving the
/// file rewrites only the keys an operation actually touched. Defaults are
/// applied when adding and when reading through the accessors, never on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Task {
    fields: Map<String, Value>,
}

impl Task {
    /// A fresh record with every known key present, in file order.
    pub fn new(id: impl Into<String>, story: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("id".into(), Value::String(id.into()));
        fields.insert("story".into(), Value::String(story.into()));
        fields.insert("priority".into(), DEFAULT_PRIORITY.into());
        fields.insert("requirements".into(), Value::Array(Vec::new()));
        fields.insert("acceptance_criteria".into(), Value::Array(Vec::new()));
        fields.insert("status".into(), DEFAULT_STATUS.into());
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// String value of `key`; `None` when missing or not a string.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn set_str(&mut self, key: &str, value: impl Into<String>) {
        self.fields.insert(key.to_string(), Value::String(value.into()));
    }

    pub fn id(&self) -> Option<&str> {
        self.str_field("id")
    }

    pub fn story(&self) -> Option<&str> {
        self.str_field("story")
    }

    pub fn priority(&self) -> Option<&str> {
        self.str_field("priority")
    }

    pub fn status(&self) -> Option<&str> {
        self.str_field("status")
    }

    pub fn requirements(&self) -> Vec<&str> {
        self.str_list("requirements")
    }

    pub fn acceptance_criteria(&self) -> Vec<&str> {
        self.str_list("acceptance_criteria")
    }

    fn str_list(&self, key: &str) -> Vec<&str> {
        match self.fields.get(key) {
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// `Some` only for a boolean `passes`; missing or null is pending.
    pub fn passes(&self) -> Option<bool> {
        self.fields.get("passes").and_then(Value::as_bool)
    }

    /// Write `passes`, removing the key for `None`.
    pub fn set_passes(&mut self, passes: Option<bool>) {
        match passes {
            Some(flag) => {
                self.fields.insert("passes".into(), Value::Bool(flag));
            }
            None => {
                self.fields.remove("passes");
            }
        }
    }

    /// Story cut down to [`SUMMARY_STORY_LEN`] characters for list output.
    pub fn short_story(&self) -> String {
        truncate_story(self.story().unwrap_or("N/A"), SUMMARY_STORY_LEN)
    }
}

impl From<Map<String, Value>> for Task {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

pub fn truncate_story(story: &str, max: usize) -> String {
    if story.chars().count() <= max {
        return story.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut out: String = story.chars().take(keep).collect();
    out.push_str("...");
    out
}

// ---------------------------------------------------------------------------
// PrdStore
// ---------------------------------------------------------------------------

/// The whole PRD array, loaded from and saved back to a single JSON file.
#[derive(Debug, Clone)]
pub struct PrdStore {
    path: PathBuf,
    pub tasks: Vec<Task>,
}

impl PrdStore {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let data = match std::fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(RalphError::PrdNotFound(path));
            }
            Err(e) => return Err(e.into()),
        };
        let tasks: Vec<Task> = serde_json::from_str(&data)?;
        tracing::debug!(path = %path.display(), count = tasks.len(), "loaded PRD");
        Ok(Self { path, tasks })
    }

    pub fn save(&self) -> Result<()> {
        let data = serde_json::to_string_pretty(&self.tasks)?;
        crate::io::atomic_write(&self.path, data.as_bytes())?;
        tracing::debug!(path = %self.path.display(), count = self.tasks.len(), "saved PRD");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn find(&self, id: &str) -> Option<&Task> {
        find(&self.tasks, id)
    }
}

/// Read the PRD file as raw JSON, exactly as stored.
pub fn load_raw(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(RalphError::PrdNotFound(path.to_path_buf()));
    }
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

// ---------------------------------------------------------------------------
// Prompt — injected source of interactive answers
// ---------------------------------------------------------------------------

/// Supplies answers to interactive questions (a terminal in the CLI, a script
/// in tests).
pub trait Prompt {
    /// Show `question` and return the answer with surrounding whitespace trimmed.
    fn ask(&mut self, question: &str) -> std::io::Result<String>;
}

// ---------------------------------------------------------------------------
// Task list operations (operate on a mutable Vec<Task>)
// ---------------------------------------------------------------------------

pub fn find<'a>(tasks: &'a [Task], id: &str) -> Option<&'a Task> {
    tasks.iter().find(|t| t.id() == Some(id))
}

fn find_mut<'a>(tasks: &'a mut [Task], id: &str) -> Result<&'a mut Task> {
    tasks
        .iter_mut()
        .find(|t| t.id() == Some(id))
        .ok_or_else(|| RalphError::TaskNotFound(id.to_string()))
}

/// Outcome of [`add_batch`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchReport {
    pub added: Vec<String>,
    pub skipped: Vec<String>,
    pub errors: Vec<String>,
}

/// Shape an incoming batch record must have; only used for validation.
#[derive(Deserialize)]
struct NewTask {
    id: String,
    story: String,
    priority: Option<String>,
    requirements: Option<Vec<String>>,
    acceptance_criteria: Option<Vec<String>>,
    status: Option<String>,
    passes: Option<bool>,
}

impl NewTask {
    fn into_task(self, passes_present: bool) -> Task {
        let mut fields = Map::new();
        fields.insert("id".into(), self.id.into());
        fields.insert("story".into(), self.story.into());
        fields.insert(
            "priority".into(),
            self.priority.unwrap_or_else(|| DEFAULT_PRIORITY.to_string()).into(),
        );
        fields.insert("requirements".into(), self.requirements.unwrap_or_default().into());
        fields.insert(
            "acceptance_criteria".into(),
            self.acceptance_criteria.unwrap_or_default().into(),
        );
        fields.insert(
            "status".into(),
            self.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()).into(),
        );
        if passes_present {
            fields.insert("passes".into(), self.passes.map_or(Value::Null, Value::Bool));
        }
        Task::from(fields)
    }
}

/// Parse batch input text; it must be a JSON array.
pub fn parse_batch(input: &str) -> Result<Vec<Value>> {
    match serde_json::from_str::<Value>(input)? {
        Value::Array(records) => Ok(records),
        _ => Err(RalphError::InvalidBatch(
            "input must be a JSON array of tasks".to_string(),
        )),
    }
}

/// Append every acceptable record to `tasks`.
///
/// Records missing `id` or `story` are reported as errors, ids already
/// present (including ones added earlier in the same batch) are skipped.
/// Nothing is rolled back; the caller persists once afterwards.
pub fn add_batch(tasks: &mut Vec<Task>, records: Vec<Value>) -> BatchReport {
    let mut report = BatchReport::default();

    for record in records {
        let Some(obj) = record.as_object() else {
            report.errors.push(format!("Missing 'id' field in task: {record}"));
            continue;
        };
        let Some(id_value) = obj.get("id") else {
            report.errors.push(format!("Missing 'id' field in task: {record}"));
            continue;
        };
        let label = id_value
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| id_value.to_string());
        if !obj.contains_key("story") {
            report.errors.push(format!("Missing 'story' field in task: {label}"));
            continue;
        }

        let passes_present = obj.contains_key("passes");
        let new_task: NewTask = match serde_json::from_value(record) {
            Ok(t) => t,
            Err(e) => {
                report.errors.push(format!("Invalid task {label}: {e}"));
                continue;
            }
        };

        if find(tasks, &new_task.id).is_some() {
            report.skipped.push(new_task.id);
            continue;
        }

        report.added.push(new_task.id.clone());
        tasks.push(new_task.into_task(passes_present));
    }

    report
}

/// Remove the task with `id`, returning it.
pub fn remove_task(tasks: &mut Vec<Task>, id: &str) -> Result<Task> {
    let idx = tasks
        .iter()
        .position(|t| t.id() == Some(id))
        .ok_or_else(|| RalphError::TaskNotFound(id.to_string()))?;
    Ok(tasks.remove(idx))
}

/// Ask for confirmation, then delete. Returns `true` when the task was removed.
pub fn delete_task(tasks: &mut Vec<Task>, id: &str, prompt: &mut dyn Prompt) -> Result<bool> {
    if find(tasks, id).is_none() {
        return Err(RalphError::TaskNotFound(id.to_string()));
    }
    let answer = prompt.ask(&format!("Delete task {id}? (y/n): "))?;
    if !answer.eq_ignore_ascii_case("y") {
        return Ok(false);
    }
    remove_task(tasks, id)?;
    Ok(true)
}

/// Prompt for a new story, priority and status. Empty answers keep the
/// current value. Returns `true` when any field changed.
pub fn update_task(tasks: &mut [Task], id: &str, prompt: &mut dyn Prompt) -> Result<bool> {
    let task = find_mut(tasks, id)?;
    let mut changed = false;

    for (label, key, fallback) in [
        ("Story", "story", ""),
        ("Priority", "priority", DEFAULT_PRIORITY),
        ("Status", "status", DEFAULT_STATUS),
    ] {
        let current = task.str_field(key).unwrap_or(fallback).to_string();
        let answer = prompt.ask(&format!("{label} [{current}]: "))?;
        if answer.is_empty() {
            continue;
        }
        if task.str_field(key) != Some(answer.as_str()) {
            changed = true;
        }
        task.set_str(key, answer);
    }

    Ok(changed)
}

// ---------------------------------------------------------------------------
// Verdict — the pass / fail / pending marker
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
    Pending,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Pass => "pass",
            Verdict::Fail => "fail",
            Verdict::Pending => "pending",
        }
    }

    /// Value stored in `passes`; pending is the absence of the key.
    pub fn passes(self) -> Option<bool> {
        match self {
            Verdict::Pass => Some(true),
            Verdict::Fail => Some(false),
            Verdict::Pending => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verdict {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pass" => Ok(Verdict::Pass),
            "fail" => Ok(Verdict::Fail),
            "pending" => Ok(Verdict::Pending),
            other => Err(format!(
                "unknown status '{other}' (expected pass, fail or pending)"
            )),
        }
    }
}

pub fn set_verdict(tasks: &mut [Task], id: &str, verdict: Verdict) -> Result<()> {
    let task = find_mut(tasks, id)?;
    task.set_passes(verdict.passes());
    Ok(())
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub by_priority: BTreeMap<String, usize>,
    pub by_status: BTreeMap<String, usize>,
}

impl Stats {
    pub fn percent(&self, count: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        count as f64 / self.total as f64 * 100.0
    }
}

pub fn stats(tasks: &[Task]) -> Stats {
    let mut s = Stats {
        total: tasks.len(),
        ..Stats::default()
    };
    for task in tasks {
        let priority = task.priority().unwrap_or("unknown").to_string();
        let status = task.status().unwrap_or("unknown").to_string();
        *s.by_priority.entry(priority).or_default() += 1;
        *s.by_status.entry(status).or_default() += 1;
    }
    s
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::VecDeque;
    use tempfile::TempDir;

    struct Scripted(VecDeque<&'static str>);

    impl Scripted {
        fn new(answers: &[&'static str]) -> Self {
            Self(answers.iter().copied().collect())
        }
    }

    impl Prompt for Scripted {
        fn ask(&mut self, _question: &str) -> std::io::Result<String> {
            Ok(self.0.pop_front().unwrap_or_default().trim().to_string())
        }
    }

    fn sample() -> Vec<Task> {
        vec![Task::new("bug-001", "Fix login"), Task::new("feat-001", "Add search")]
    }

    fn write_prd(dir: &TempDir, value: &Value) -> PathBuf {
        let path = dir.path().join("prd.json");
        std::fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
        path
    }

    #[test]
    fn save_load_round_trip_is_identity() {
        let dir = TempDir::new().unwrap();
        let original = json!([
            {
                "id": "bug-001",
                "story": "Fix login issue",
                "priority": "high",
                "requirements": ["handle expired tokens"],
                "acceptance_criteria": ["user stays signed in"],
                "status": "pending",
                "passes": false,
                "owner": "web-team"
            },
            {
                "id": "feat-001",
                "story": "支持搜索",
                "priority": "low",
                "requirements": [],
                "acceptance_criteria": [],
                "status": "done"
            }
        ]);
        let path = write_prd(&dir, &original);

        let store = PrdStore::load(&path).unwrap();
        store.save().unwrap();

        let reread: Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(reread, original);
        assert!(std::fs::read_to_string(&path).unwrap().contains("支持搜索"));
    }

    #[test]
    fn verdict_leaves_neighbouring_records_byte_for_byte() {
        let dir = TempDir::new().unwrap();
        let path = write_prd(
            &dir,
            &json!([
                {"id": "a", "story": "s"},
                {"story": "t", "id": "b", "passes": null, "owner": "web"},
                {"id": "c", "story": "u", "priority": "low", "requirements": ["r"]}
            ]),
        );
        let before: Vec<String> = load_raw(&path)
            .unwrap()
            .as_array()
            .unwrap()
            .iter()
            .map(|v| serde_json::to_string(v).unwrap())
            .collect();

        let mut store = PrdStore::load(&path).unwrap();
        set_verdict(&mut store.tasks, "a", Verdict::Pass).unwrap();
        store.save().unwrap();

        let after = load_raw(&path).unwrap();
        assert_eq!(after[0], json!({"id": "a", "story": "s", "passes": true}));
        assert_eq!(serde_json::to_string(&after[1]).unwrap(), before[1]);
        assert_eq!(serde_json::to_string(&after[2]).unwrap(), before[2]);
    }

    #[test]
    fn record_without_id_still_loads() {
        let dir = TempDir::new().unwrap();
        let path = write_prd(&dir, &json!([{"id": "a", "story": "s"}, {"story": "draft"}]));

        let mut store = PrdStore::load(&path).unwrap();
        assert_eq!(store.tasks.len(), 2);
        assert_eq!(store.tasks[1].id(), None);
        assert!(store.find("a").is_some());

        set_verdict(&mut store.tasks, "a", Verdict::Fail).unwrap();
        store.save().unwrap();
        assert_eq!(load_raw(&path).unwrap()[1], json!({"story": "draft"}));
    }

    #[test]
    fn load_missing_file_is_prd_not_found() {
        let dir = TempDir::new().unwrap();
        let err = PrdStore::load(dir.path().join("prd.json")).unwrap_err();
        assert!(matches!(err, RalphError::PrdNotFound(_)));
    }

    #[test]
    fn load_invalid_json_is_json_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prd.json");
        std::fs::write(&path, "[{").unwrap();
        assert!(matches!(PrdStore::load(&path), Err(RalphError::Json(_))));
    }

    #[test]
    fn add_batch_fills_defaults() {
        let mut tasks = Vec::new();
        let report = add_batch(&mut tasks, vec![json!({"id": "t1", "story": "Do it"})]);
        assert_eq!(report.added, vec!["t1"]);
        let t = &tasks[0];
        assert_eq!(t.priority(), Some("medium"));
        assert_eq!(t.status(), Some("pending"));
        assert!(t.requirements().is_empty());
        assert!(t.acceptance_criteria().is_empty());
        assert_eq!(t.get("passes"), None);
        let value = serde_json::to_value(t).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(
            keys,
            ["id", "story", "priority", "requirements", "acceptance_criteria", "status"]
        );
    }

    #[test]
    fn add_batch_skips_existing_id() {
        let mut tasks = sample();
        let before = tasks[0].clone();
        let report = add_batch(
            &mut tasks,
            vec![json!({"id": "bug-001", "story": "Something else", "priority": "low"})],
        );
        assert_eq!(report.skipped, vec!["bug-001"]);
        assert!(report.added.is_empty());
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0], before);
    }

    #[test]
    fn add_batch_skips_duplicates_within_batch() {
        let mut tasks = Vec::new();
        let report = add_batch(
            &mut tasks,
            vec![
                json!({"id": "t1", "story": "first"}),
                json!({"id": "t1", "story": "second"}),
            ],
        );
        assert_eq!(report.added, vec!["t1"]);
        assert_eq!(report.skipped, vec!["t1"]);
        assert_eq!(tasks[0].story(), Some("first"));
    }

    #[test]
    fn add_batch_reports_missing_fields_and_keeps_valid_records() {
        let mut tasks = Vec::new();
        let report = add_batch(
            &mut tasks,
            vec![
                json!({"story": "no id"}),
                json!({"id": "t2"}),
                json!({"id": "t3", "story": "ok", "passes": true}),
            ],
        );
        assert_eq!(report.added, vec!["t3"]);
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors[0].contains("Missing 'id'"));
        assert!(report.errors[1].contains("Missing 'story'"));
        assert!(report.errors[1].contains("t2"));
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].passes(), Some(true));
    }

    #[test]
    fn add_batch_reports_wrongly_typed_fields() {
        let mut tasks = Vec::new();
        let report = add_batch(&mut tasks, vec![json!({"id": "t1", "story": 42})]);
        assert!(report.added.is_empty());
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].starts_with("Invalid task t1"));
    }

    #[test]
    fn parse_batch_requires_array() {
        assert_eq!(parse_batch(r#"[{"id":"a"}]"#).unwrap().len(), 1);
        assert!(matches!(
            parse_batch(r#"{"id":"a"}"#),
            Err(RalphError::InvalidBatch(_))
        ));
        assert!(matches!(parse_batch("nope"), Err(RalphError::Json(_))));
    }

    #[test]
    fn verdicts_set_and_clear_passes() {
        let dir = TempDir::new().unwrap();
        let path = write_prd(&dir, &serde_json::to_value(sample()).unwrap());

        let mut store = PrdStore::load(&path).unwrap();
        set_verdict(&mut store.tasks, "bug-001", Verdict::Pass).unwrap();
        store.save().unwrap();
        let raw = load_raw(&path).unwrap();
        assert_eq!(raw[0]["passes"], json!(true));

        let mut store = PrdStore::load(&path).unwrap();
        set_verdict(&mut store.tasks, "bug-001", Verdict::Pending).unwrap();
        store.save().unwrap();
        let raw = load_raw(&path).unwrap();
        assert!(raw[0].as_object().unwrap().get("passes").is_none());
    }

    #[test]
    fn verdict_fail_and_unknown_id() {
        let mut tasks = sample();
        set_verdict(&mut tasks, "feat-001", Verdict::Fail).unwrap();
        assert_eq!(tasks[1].passes(), Some(false));
        assert!(matches!(
            set_verdict(&mut tasks, "nope", Verdict::Pass),
            Err(RalphError::TaskNotFound(_))
        ));
    }

    #[test]
    fn verdict_parses_known_verbs_only() {
        assert_eq!("pass".parse::<Verdict>().unwrap(), Verdict::Pass);
        assert_eq!("pending".parse::<Verdict>().unwrap(), Verdict::Pending);
        assert!("done".parse::<Verdict>().is_err());
    }

    #[test]
    fn delete_requires_y() {
        let mut tasks = sample();
        assert!(!delete_task(&mut tasks, "bug-001", &mut Scripted::new(&["n"])).unwrap());
        assert_eq!(tasks.len(), 2);

        assert!(delete_task(&mut tasks, "bug-001", &mut Scripted::new(&[" Y "])).unwrap());
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id(), Some("feat-001"));
    }

    #[test]
    fn delete_unknown_id_does_not_prompt() {
        let mut tasks = sample();
        let mut prompt = Scripted::new(&["y"]);
        assert!(matches!(
            delete_task(&mut tasks, "nope", &mut prompt),
            Err(RalphError::TaskNotFound(_))
        ));
        assert_eq!(prompt.0.len(), 1);
        assert_eq!(tasks.len(), 2);
    }

    #[test]
    fn update_keeps_fields_on_empty_answer() {
        let mut tasks = sample();
        let changed = update_task(
            &mut tasks,
            "feat-001",
            &mut Scripted::new(&["", "high", ""]),
        )
        .unwrap();
        assert!(changed);
        assert_eq!(tasks[1].story(), Some("Add search"));
        assert_eq!(tasks[1].priority(), Some("high"));
        assert_eq!(tasks[1].status(), Some("pending"));

        let changed =
            update_task(&mut tasks, "feat-001", &mut Scripted::new(&["", "", ""])).unwrap();
        assert!(!changed);
    }

    #[test]
    fn stats_group_by_priority_and_status() {
        let mut tasks = sample();
        tasks[0].set_str("priority", "high");
        tasks.push(Task::new("feat-002", "More"));
        tasks[2].set_str("status", "done");
        tasks.push(Task::from(
            json!({"id": "bare", "story": "no labels"})
                .as_object()
                .unwrap()
                .clone(),
        ));

        let s = stats(&tasks);
        assert_eq!(s.total, 4);
        assert_eq!(s.by_priority["high"], 1);
        assert_eq!(s.by_priority["medium"], 2);
        assert_eq!(s.by_priority["unknown"], 1);
        assert_eq!(s.by_status["pending"], 2);
        assert_eq!(s.by_status["done"], 1);
        assert_eq!(s.by_status["unknown"], 1);
        assert!((s.percent(1) - 25.0).abs() < 0.01);
        assert_eq!(Stats::default().percent(0), 0.0);
    }

    #[test]
    fn truncate_story_counts_chars() {
        assert_eq!(truncate_story("short", 60), "short");
        let long = "x".repeat(61);
        let cut = truncate_story(&long, 60);
        assert_eq!(cut.chars().count(), 60);
        assert!(cut.ends_with("..."));
        let wide = "需".repeat(70);
        assert_eq!(truncate_story(&wide, 60).chars().count(), 60);
    }
}
