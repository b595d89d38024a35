// src/config/processed.rs
use std::collections::HashMap;

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::config::raw::{DocumentRaw, StalePolicyRaw};
use crate::error::{Error, Result, ValidationReport};
use crate::model::StalePolicy;
use crate::template::CommentTemplate;

/// The canonical document shipped with the crate.
const BUILTIN_YAML: &str = include_str!("../../stale_policies.yaml");

static BUILTIN: Lazy<PolicySet> = Lazy::new(|| {
  let raw: DocumentRaw =
    serde_yaml::from_str(BUILTIN_YAML).expect("Embedded stale_policies.yaml should parse");
  process_raw_document(raw).expect("Embedded stale_policies.yaml should validate")
});

/// A validated, immutable set of staleness policies, keyed by name.
///
/// Loaded once at process start and never mutated afterwards; consumers hold
/// it for the duration of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicySet {
  policies: IndexMap<String, StalePolicy>,
}

impl PolicySet {
  /// The policy set embedded in the crate (`stale_policies.yaml`).
  pub fn builtin() -> &'static PolicySet {
    &BUILTIN
  }

  pub fn get(&self, name: &str) -> Option<&StalePolicy> {
    self.policies.get(name)
  }

  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.policies.keys().map(String::as_str)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &StalePolicy)> {
    self.policies.iter().map(|(name, policy)| (name.as_str(), policy))
  }

  pub fn len(&self) -> usize {
    self.policies.len()
  }

  pub fn is_empty(&self) -> bool {
    self.policies.is_empty()
  }

  /// Serializes the set back to YAML, in document order.
  ///
  /// Re-parsing the output yields a set equal to this one, field for field.
  pub fn to_yaml(&self) -> Result<String> {
    let raw: DocumentRaw = self
      .policies
      .iter()
      .map(|(name, policy)| (name.clone(), StalePolicyRaw::from(policy)))
      .collect();
    serde_yaml::to_string(&raw).map_err(|e| Error::ConfigSerialize(e.to_string()))
  }
}

/// Validates the raw, deserialized document into a [`PolicySet`].
///
/// All violations are collected before returning, so one pass over the error
/// report shows everything wrong with a document.
pub fn process_raw_document(raw_document: DocumentRaw) -> Result<PolicySet> {
  let mut report = ValidationReport::new();
  let mut policies = IndexMap::with_capacity(raw_document.len());

  // Label uniqueness is checked across policies: these map a label to the
  // first policy that claimed it.
  let mut seen_warning_labels: HashMap<&str, &str> = HashMap::new();
  let mut seen_done_labels: HashMap<&str, &str> = HashMap::new();

  for (name, raw_policy) in &raw_document {
    let stale_days = process_day_count(&mut report, name, "stale_days", raw_policy.stale_days);
    let warning_days =
      process_day_count(&mut report, name, "warning_days", raw_policy.warning_days);

    for (field, label) in [
      ("warning_label", &raw_policy.warning_label),
      ("done_label", &raw_policy.done_label),
    ] {
      if label.is_empty() {
        report.push(name, field, "label must not be empty");
      }
    }

    if raw_policy.warning_label == raw_policy.done_label {
      report.push(
        name,
        "done_label",
        format!(
          "must differ from warning_label (both are '{}')",
          raw_policy.warning_label
        ),
      );
    }

    if let Some(previous) = seen_warning_labels.insert(&raw_policy.warning_label, name) {
      report.push(
        name,
        "warning_label",
        format!(
          "label '{}' is already used by policy '{}'",
          raw_policy.warning_label, previous
        ),
      );
    }
    if let Some(previous) = seen_done_labels.insert(&raw_policy.done_label, name) {
      report.push(
        name,
        "done_label",
        format!(
          "label '{}' is already used by policy '{}'",
          raw_policy.done_label, previous
        ),
      );
    }

    let warning_comment =
      process_template(&mut report, name, "warning_comment", &raw_policy.warning_comment);
    let done_comment = process_template(&mut report, name, "done_comment", &raw_policy.done_comment);

    if let (Some(stale_days), Some(warning_days), Some(warning_comment), Some(done_comment)) =
      (stale_days, warning_days, warning_comment, done_comment)
    {
      policies.insert(
        name.clone(),
        StalePolicy {
          stale_days,
          warning_days,
          warning_label: raw_policy.warning_label.clone(),
          warning_comment,
          done_label: raw_policy.done_label.clone(),
          done_comment,
        },
      );
    }
  }

  report.into_result()?;
  Ok(PolicySet { policies })
}

fn process_day_count(
  report: &mut ValidationReport,
  policy: &str,
  field: &str,
  value: i64,
) -> Option<u32> {
  match u32::try_from(value) {
    Ok(days) => Some(days),
    Err(_) if value < 0 => {
      report.push(policy, field, format!("must not be negative (got {})", value));
      None
    }
    Err(_) => {
      report.push(
        policy,
        field,
        format!("is too large for a day count (got {})", value),
      );
      None
    }
  }
}

fn process_template(
  report: &mut ValidationReport,
  policy: &str,
  field: &str,
  source: &str,
) -> Option<CommentTemplate> {
  match CommentTemplate::parse(source) {
    Ok(template) => Some(template),
    Err(e) => {
      report.push(policy, field, e.to_string());
      None
    }
  }
}
