//! Behavioural tests for clause compilation and evaluation.

#![expect(clippy::expect_used, reason = "test asserts compilation path")]

use std::collections::{BTreeSet, HashSet};

use rstest::rstest;

use permission_clause::{
    ClauseError, Operator, PermissionClause, RoleSet, RpnToken, compile, evaluate,
};

fn roles(names: &[&str]) -> RoleSet {
    names.iter().copied().collect()
}

#[rstest]
#[case(&[])]
#[case(&["A"])]
#[case(&["A", "B", "C"])]
fn absent_and_empty_clauses_always_permit(#[case] held: &[&str]) {
    let held = roles(held);
    assert!(evaluate(None, &held).is_permitted());
    assert!(evaluate(Some(""), &held).is_permitted());
}

#[rstest]
#[case("Admin", &["Admin"], true)]
#[case("Admin", &["Guest"], false)]
#[case("NOT Admin", &["Admin"], false)]
#[case("NOT Admin", &[], true)]
fn single_roles_test_membership(#[case] clause: &str, #[case] held: &[&str], #[case] expected: bool) {
    assert_eq!(evaluate(Some(clause), &roles(held)).permitted, expected);
}

#[rstest]
fn binary_operators_follow_truth_tables(
    #[values(false, true)] has_a: bool,
    #[values(false, true)] has_b: bool,
) {
    let mut held = RoleSet::new();
    if has_a {
        held.insert("A");
    }
    if has_b {
        held.insert("B");
    }
    assert_eq!(evaluate(Some("A AND B"), &held).permitted, has_a && has_b);
    assert_eq!(evaluate(Some("A OR B"), &held).permitted, has_a || has_b);
    assert_eq!(evaluate(Some("A XOR B"), &held).permitted, has_a != has_b);
}

#[test]
fn parentheses_override_precedence() {
    assert!(evaluate(Some("NOT (A AND B)"), &roles(&["A"])).permitted);
    assert!(!evaluate(Some("NOT A AND B"), &roles(&["A"])).permitted);
}

#[rstest]
#[case(&["A"])]
#[case(&["A", "B"])]
#[case(&["A", "C"])]
fn and_binds_tighter_than_or(#[case] held: &[&str]) {
    assert!(evaluate(Some("A OR B AND C"), &roles(held)).permitted);
}

#[test]
fn unmatched_close_phrase_denies_with_diagnostic() {
    let verdict = evaluate(Some("A)"), &roles(&["A"]));
    assert!(!verdict.permitted);
    let err = verdict.error.expect("unmatched ')' should be reported");
    assert!(err.to_string().contains("no matching '('"));
}

#[test]
fn documented_prose_example_is_denied() {
    let verdict = evaluate(
        Some("RoleA AND RoleB NOT RoleC"),
        &roles(&["RoleA", "RoleB"]),
    );
    assert!(!verdict.permitted);
    assert_eq!(verdict.error, Some(ClauseError::Reduction { remaining: 2 }));
}

#[test]
fn repeated_evaluation_is_stable() {
    let held = roles(&["A"]);
    let first = evaluate(Some("A AND (B OR"), &held);
    for _ in 0..3 {
        assert_eq!(evaluate(Some("A AND (B OR"), &held), first);
    }
}

#[rstest]
#[case(&[])]
#[case(&["A"])]
#[case(&["B"])]
#[case(&["A", "B"])]
fn whitespace_is_insignificant(#[case] held: &[&str]) {
    let held = roles(held);
    let baseline = evaluate(Some("A AND B"), &held);
    assert_eq!(evaluate(Some("A  AND   B"), &held), baseline);
    assert_eq!(evaluate(Some("\tA AND B \n"), &held), baseline);
    assert_eq!(evaluate(Some("(A)AND(B)"), &held), baseline);
}

#[test]
fn accepts_standard_collections() {
    let hashed: HashSet<String> = HashSet::from(["Admin".to_string()]);
    let ordered: BTreeSet<&str> = BTreeSet::from(["Admin"]);
    let clause = PermissionClause::from("Admin OR Auditor");
    assert!(clause.evaluate(&hashed));
    assert!(clause.evaluate(&ordered));
    assert!(clause.evaluate(&vec!["Auditor".to_string()]));
}

#[test]
fn compiled_queue_exposes_operators() {
    let rpn = compile("A XOR NOT B").expect("clause should compile");
    let operators: Vec<Operator> = rpn
        .iter()
        .filter_map(|token| match token {
            RpnToken::Operator(op) => Some(*op),
            RpnToken::Role(_) => None,
        })
        .collect();
    assert_eq!(operators, vec![Operator::Not, Operator::Xor]);
}
