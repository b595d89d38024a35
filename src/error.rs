use std::fmt;

use thiserror::Error;

/// The main error type for the `stale_policy` library.
#[derive(Debug, Error)]
pub enum Error {
  #[error("Configuration file not found: {0}")]
  ConfigNotFound(String),

  #[error("Failed to read configuration file: {0}")]
  ConfigRead(#[from] std::io::Error), // Allows easy conversion from io::Error

  #[error("Failed to parse configuration: {0}")]
  ConfigParse(String), // Specific parsing errors might come from serde_yaml, etc.

  #[error("Failed to serialize configuration: {0}")]
  ConfigSerialize(String),

  #[error("{0}")]
  Invalid(ValidationReport),
}

/// A specialized `Result` type for `stale_policy` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// One validation failure, attributed to a policy and a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
  /// Name of the offending policy (the top-level key in the document).
  pub policy: String,
  /// Name of the offending field on that policy.
  pub field: String,
  /// Human-readable description of what is wrong.
  pub message: String,
}

impl fmt::Display for Violation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}.{}: {}", self.policy, self.field, self.message)
  }
}

/// Every violation found in a document, reported as a single error.
///
/// Validation does not stop at the first problem; a bad document produces one
/// report naming each offending policy and field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
  violations: Vec<Violation>,
}

impl ValidationReport {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn push(&mut self, policy: &str, field: &str, message: impl Into<String>) {
    self.violations.push(Violation {
      policy: policy.to_string(),
      field: field.to_string(),
      message: message.into(),
    });
  }

  pub fn is_empty(&self) -> bool {
    self.violations.is_empty()
  }

  pub fn violations(&self) -> &[Violation] {
    &self.violations
  }

  /// Converts the report into `Err(Error::Invalid)` if any violation was
  /// recorded, `Ok(())` otherwise.
  pub fn into_result(self) -> Result<()> {
    if self.is_empty() {
      Ok(())
    } else {
      Err(Error::Invalid(self))
    }
  }
}

impl fmt::Display for ValidationReport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(
      f,
      "Configuration failed validation with {} error(s):",
      self.violations.len()
    )?;
    for violation in &self.violations {
      writeln!(f, "  - {}", violation)?;
    }
    Ok(())
  }
}
