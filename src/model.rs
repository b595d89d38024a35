use crate::template::CommentTemplate;

/// One named set of staleness thresholds, labels, and comment templates.
///
/// Instances are produced by validating a raw document
/// (see [`crate::config::processed`]) and are immutable for the lifetime of a
/// bot run.
#[derive(Debug, Clone, PartialEq)]
pub struct StalePolicy {
  /// Days of inactivity after which the warning phase triggers.
  pub stale_days: u32,
  /// Additional days of inactivity after the warning label is applied,
  /// before the terminal action triggers.
  pub warning_days: u32,
  /// Label applied when the warning phase triggers.
  pub warning_label: String,
  /// Comment posted when entering the warning phase.
  pub warning_comment: CommentTemplate,
  /// Label applied when the terminal action triggers.
  pub done_label: String,
  /// Comment posted at the terminal action.
  pub done_comment: CommentTemplate,
}

/// The scalar fields of a [`StalePolicy`] that comment templates may
/// reference via `{field_name}` placeholders.
///
/// The two comment fields themselves are deliberately not substitutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyField {
  StaleDays,
  WarningDays,
  WarningLabel,
  DoneLabel,
}

impl PolicyField {
  pub const ALL: [PolicyField; 4] = [
    PolicyField::StaleDays,
    PolicyField::WarningDays,
    PolicyField::WarningLabel,
    PolicyField::DoneLabel,
  ];

  /// Resolves a placeholder name as written in a template.
  pub fn from_name(name: &str) -> Option<Self> {
    match name {
      "stale_days" => Some(PolicyField::StaleDays),
      "warning_days" => Some(PolicyField::WarningDays),
      "warning_label" => Some(PolicyField::WarningLabel),
      "done_label" => Some(PolicyField::DoneLabel),
      _ => None,
    }
  }

  /// The placeholder name as written in a template.
  pub fn name(&self) -> &'static str {
    match self {
      PolicyField::StaleDays => "stale_days",
      PolicyField::WarningDays => "warning_days",
      PolicyField::WarningLabel => "warning_label",
      PolicyField::DoneLabel => "done_label",
    }
  }

  /// The field's value on `policy`, rendered as a string.
  pub fn value_of(&self, policy: &StalePolicy) -> String {
    match self {
      PolicyField::StaleDays => policy.stale_days.to_string(),
      PolicyField::WarningDays => policy.warning_days.to_string(),
      PolicyField::WarningLabel => policy.warning_label.clone(),
      PolicyField::DoneLabel => policy.done_label.clone(),
    }
  }
}
