//! Integration tests over the document shipped with the crate.

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use stale_policy::PolicySet;

const POLICY_NAMES: [&str; 5] = [
  "stale_assigned",
  "stale_minor",
  "stale_blocker",
  "stale_critical",
  "stale_major",
];

#[test]
fn builtin_document_has_exactly_the_five_policies() {
  let set = PolicySet::builtin();
  assert_eq!(set.len(), 5);
  let names: Vec<_> = set.names().collect();
  assert_eq!(names, POLICY_NAMES);
}

#[test]
fn blocker_policy_has_the_tightest_thresholds() {
  let blocker = PolicySet::builtin().get("stale_blocker").unwrap();
  assert_eq!(blocker.stale_days, 1);
  assert_eq!(blocker.warning_days, 7);
}

#[test]
fn critical_policy_is_deprioritized_not_closed() {
  let critical = PolicySet::builtin().get("stale_critical").unwrap();
  assert_eq!(critical.done_label, "auto-deprioritized-critical");
}

#[test]
fn labels_differ_within_each_policy() {
  for (name, policy) in PolicySet::builtin().iter() {
    assert_ne!(
      policy.warning_label, policy.done_label,
      "policy {name} reuses its warning label as done label"
    );
  }
}

#[test]
fn labels_are_distinct_across_policies() {
  let set = PolicySet::builtin();
  let warning_labels: HashSet<_> = set.iter().map(|(_, p)| p.warning_label.as_str()).collect();
  let done_labels: HashSet<_> = set.iter().map(|(_, p)| p.done_label.as_str()).collect();
  assert_eq!(warning_labels.len(), set.len());
  assert_eq!(done_labels.len(), set.len());
}

#[test]
fn serializing_and_reparsing_preserves_every_policy() {
  let set = PolicySet::builtin();
  let yaml = set.to_yaml().unwrap();
  let reparsed = stale_policy::load_from_str(&yaml).unwrap();
  assert_eq!(&reparsed, set);
}

#[test]
fn assigned_warning_comment_renders_without_leftover_placeholders() {
  let assigned = PolicySet::builtin().get("stale_assigned").unwrap();
  assert_eq!(assigned.stale_days, 14);

  let rendered = assigned.warning_comment.render(assigned);
  assert!(rendered.contains("14 days"), "rendered: {rendered}");
  assert!(rendered.contains("\"stale-assigned\""), "rendered: {rendered}");
  assert!(!rendered.contains('{'), "unsubstituted placeholder in: {rendered}");
  assert!(!rendered.contains('}'), "unsubstituted placeholder in: {rendered}");
}

#[test]
fn every_done_comment_names_the_warning_label_and_delay() {
  for (name, policy) in PolicySet::builtin().iter() {
    let fields = policy.done_comment.referenced_fields();
    assert!(
      fields.contains("warning_label") && fields.contains("warning_days"),
      "policy {name} done_comment references {fields:?}"
    );

    let rendered = policy.done_comment.render(policy);
    assert!(rendered.contains(&policy.warning_label), "policy {name}: {rendered}");
    assert!(!rendered.contains('{'), "policy {name}: {rendered}");
  }
}

#[test]
fn day_counts_are_validated_non_negative() {
  // The processed type makes negative day counts unrepresentable; this checks
  // the shipped values are sane, not just representable.
  for (name, policy) in PolicySet::builtin().iter() {
    assert!(policy.warning_days > 0, "policy {name} would fire its terminal action immediately");
    if name != "stale_blocker" {
      assert!(policy.stale_days >= 7, "policy {name} is unexpectedly aggressive");
    }
  }
}
