// src/template.rs
use std::collections::BTreeSet;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::model::{PolicyField, StalePolicy};

// Escaped braces are listed before the placeholder alternative so that `{{`
// never begins a placeholder match.
static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"(?P<open>\{\{)|(?P<close>\}\})|\{(?P<field>[a-zA-Z_][a-zA-Z0-9_]*)\}")
    .expect("Placeholder regex should be valid")
});

/// Errors produced while parsing a comment template string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
  #[error("references undefined placeholder '{{{0}}}'")]
  UnknownPlaceholder(String),

  #[error("contains a stray '{0}' (use '{0}{0}' for a literal brace)")]
  StrayBrace(char),
}

/// Represents a single piece of a parsed comment template.
#[derive(Debug, Clone, PartialEq)]
enum Segment {
  Literal(String),
  Field(PolicyField),
}

/// A comment template with `{field_name}` placeholders.
///
/// Placeholders follow the substitution rules of the bot's comment formatter:
/// `{stale_days}` expands to the owning policy's `stale_days` value, `{{` and
/// `}}` escape to literal braces. A template may only reference the scalar
/// fields of its own policy record; anything else fails at parse time.
#[derive(Debug, Clone)]
pub struct CommentTemplate {
  source: String,
  segments: Vec<Segment>,
}

impl CommentTemplate {
  pub fn parse(source: &str) -> Result<Self, TemplateError> {
    let segments = Self::parse_segments(source)?;
    Ok(Self {
      source: source.to_string(),
      segments,
    })
  }

  /// The template text exactly as it appeared in the document.
  pub fn source(&self) -> &str {
    &self.source
  }

  /// The set of policy fields this template references.
  pub fn referenced_fields(&self) -> BTreeSet<&'static str> {
    self
      .segments
      .iter()
      .filter_map(|segment| match segment {
        Segment::Field(field) => Some(field.name()),
        Segment::Literal(_) => None,
      })
      .collect()
  }

  /// Renders the template against `policy`, substituting every placeholder
  /// with the corresponding field value.
  pub fn render(&self, policy: &StalePolicy) -> String {
    let mut output = String::with_capacity(self.source.len());
    for segment in &self.segments {
      match segment {
        Segment::Literal(text) => output.push_str(text),
        Segment::Field(field) => output.push_str(&field.value_of(policy)),
      }
    }
    output
  }

  fn parse_segments(source: &str) -> Result<Vec<Segment>, TemplateError> {
    let mut segments = Vec::new();
    let mut last_end = 0;

    for caps in PLACEHOLDER_REGEX.captures_iter(source) {
      let mat = caps.get(0).unwrap();

      // Literal text between the last match and this one. A brace that the
      // regex did not consume is neither a placeholder nor an escape.
      if mat.start() > last_end {
        Self::push_literal(&mut segments, &source[last_end..mat.start()])?;
      }

      if caps.name("open").is_some() {
        segments.push(Segment::Literal("{".to_string()));
      } else if caps.name("close").is_some() {
        segments.push(Segment::Literal("}".to_string()));
      } else {
        let name = caps.name("field").unwrap().as_str();
        let field = PolicyField::from_name(name)
          .ok_or_else(|| TemplateError::UnknownPlaceholder(name.to_string()))?;
        segments.push(Segment::Field(field));
      }

      last_end = mat.end();
    }

    if last_end < source.len() {
      Self::push_literal(&mut segments, &source[last_end..])?;
    }

    Ok(segments)
  }

  fn push_literal(segments: &mut Vec<Segment>, text: &str) -> Result<(), TemplateError> {
    for brace in ['{', '}'] {
      if text.contains(brace) {
        return Err(TemplateError::StrayBrace(brace));
      }
    }
    segments.push(Segment::Literal(text.to_string()));
    Ok(())
  }
}

// Equality is over the source text; the segments are derived from it.
impl PartialEq for CommentTemplate {
  fn eq(&self, other: &Self) -> bool {
    self.source == other.source
  }
}

impl fmt::Display for CommentTemplate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.source)
  }
}
