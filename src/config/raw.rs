use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::StalePolicy;

/// The raw document: a mapping from policy name to record, in document order.
///
/// `IndexMap` keeps the key order of the source file so that serializing the
/// set back out reproduces the document as written.
pub type DocumentRaw = IndexMap<String, StalePolicyRaw>;

/// One policy record exactly as it appears in the YAML document.
///
/// The day counts are deserialized as `i64` so that a negative value reaches
/// validation (and is reported against its policy and field) instead of
/// failing deep inside serde.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StalePolicyRaw {
  pub stale_days: i64,
  pub warning_days: i64,
  pub warning_label: String,
  pub warning_comment: String,
  pub done_label: String,
  pub done_comment: String,
}

impl From<&StalePolicy> for StalePolicyRaw {
  fn from(policy: &StalePolicy) -> Self {
    StalePolicyRaw {
      stale_days: i64::from(policy.stale_days),
      warning_days: i64::from(policy.warning_days),
      warning_label: policy.warning_label.clone(),
      warning_comment: policy.warning_comment.source().to_string(),
      done_label: policy.done_label.clone(),
      done_comment: policy.done_comment.source().to_string(),
    }
  }
}
