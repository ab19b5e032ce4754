mod common;

use common::{party, proposal, real_descriptor};
use conflux_registry::{Constraints, Proposal};
use conflux_resolve::{AcceptedProposal, resolve, tie_break};
use conflux_types::{Priority, Property, Value};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn winner_of(outcome: &conflux_resolve::ResolutionOutcome) -> &str {
    outcome.winner.as_ref().unwrap().contributor.as_str()
}

// ── Tie-break law ────────────────────────────────────────────────

#[test]
fn lowest_priority_number_wins() {
    let d = real_descriptor(Constraints::new());
    let proposals = vec![
        proposal("A", 50, Value::Real(1.0)),
        proposal("B", 50, Value::Real(2.0)),
        proposal("C", 10, Value::Real(3.0)),
    ];
    let outcome = resolve(&d, &proposals);
    assert_eq!(winner_of(&outcome), "C");
    assert_eq!(outcome.winner.unwrap().value, Value::Real(3.0));
}

/// Sequentially applying the sorted list and keeping the last write would
/// pick the wrong proposal here; the winner must be selected directly.
#[test]
fn alphabetically_greater_contributor_wins_ties() {
    let d = real_descriptor(Constraints::new());
    let proposals = vec![
        proposal("mod-b", 50, Value::Real(1.0)),
        proposal("mod-c", 50, Value::Real(2.0)),
    ];
    assert_eq!(winner_of(&resolve(&d, &proposals)), "mod-c");

    let reversed: Vec<Proposal> = proposals.into_iter().rev().collect();
    assert_eq!(winner_of(&resolve(&d, &reversed)), "mod-c");
}

#[test]
fn tie_break_survives_a_less_favored_trailing_proposal() {
    let d = real_descriptor(Constraints::new());
    let proposals = vec![
        proposal("mod-c", 50, Value::Real(2.0)),
        proposal("mod-a", 90, Value::Real(9.0)),
        proposal("mod-b", 50, Value::Real(1.0)),
    ];
    let outcome = resolve(&d, &proposals);
    assert_eq!(winner_of(&outcome), "mod-c");
    let order: Vec<&str> = outcome.accepted.iter().map(|a| a.contributor.as_str()).collect();
    assert_eq!(order, vec!["mod-b", "mod-c", "mod-a"]);
}

#[test]
fn accepted_list_is_in_ascending_tie_break_order() {
    let d = real_descriptor(Constraints::new());
    let proposals = vec![
        proposal("Z", 100, Value::Real(1.0)),
        proposal("A", 100, Value::Real(1.0)),
        proposal("M", 5, Value::Real(1.0)),
    ];
    let outcome = resolve(&d, &proposals);
    let order: Vec<(&str, i64)> = outcome
        .accepted
        .iter()
        .map(|a| (a.contributor.as_str(), a.priority.get()))
        .collect();
    assert_eq!(order, vec![("M", 5), ("A", 100), ("Z", 100)]);
}

#[test]
fn tie_break_ignores_insertion_order_for_same_contributor() {
    let a = proposal("Q", 10, Value::Real(1.0));
    let b = proposal("Q", 10, Value::Real(2.0));
    assert_eq!(tie_break(&a, &b), std::cmp::Ordering::Less);
    let d = real_descriptor(Constraints::new());
    let forward = resolve(&d, &[a.clone(), b.clone()]);
    let backward = resolve(&d, &[b, a]);
    assert_eq!(forward, backward);
}

// ── Validation inside resolution ─────────────────────────────────

#[test]
fn rejected_proposals_never_win() {
    let d = real_descriptor(Constraints::new().with_range(Some(0.1), Some(10.0)));
    let proposals = vec![
        proposal("A", 1, Value::Real(50.0)),
        proposal("B", 20, Value::Real(5.0)),
    ];
    let outcome = resolve(&d, &proposals);
    assert_eq!(winner_of(&outcome), "B");
    assert_eq!(outcome.rejected.len(), 1);
    assert_eq!(outcome.rejected[0].contributor, party("A"));
    assert_eq!(outcome.rejected[0].reason, "value 50 above maximum 10");
}

#[test]
fn all_rejected_means_no_winner() {
    let d = real_descriptor(Constraints::new().with_range(Some(0.1), Some(10.0)));
    let proposals = vec![
        proposal("A", 1, Value::Real(0.0)),
        proposal("B", 2, Value::from("fast")),
    ];
    let outcome = resolve(&d, &proposals);
    assert!(outcome.winner.is_none());
    assert!(outcome.accepted.is_empty());
    assert_eq!(outcome.rejected.len(), 2);
}

#[test]
fn no_proposals_means_empty_outcome() {
    let d = real_descriptor(Constraints::new());
    let outcome = resolve(&d, &[]);
    assert_eq!(outcome, conflux_resolve::ResolutionOutcome::default());
}

#[test]
fn winner_value_is_normalized() {
    let d = real_descriptor(Constraints::new());
    let outcome = resolve(&d, &[proposal("A", 1, Value::Integer(2))]);
    assert_eq!(
        outcome.winner,
        Some(AcceptedProposal {
            contributor: party("A"),
            property: Property::Value,
            value: Value::Real(2.0),
            priority: Priority::new(1),
        })
    );
}

#[test]
fn non_value_property_can_win() {
    let d = real_descriptor(Constraints::new().with_range(Some(0.0), Some(1.0)));
    let mut hide = proposal("A", 1, Value::Boolean(true));
    hide.property = Property::Hidden;
    let outcome = resolve(&d, &[hide, proposal("B", 5, Value::Real(0.5))]);
    let winner = outcome.winner.unwrap();
    assert_eq!(winner.property, Property::Hidden);
    assert_eq!(outcome.accepted.len(), 2);
}

// ── Determinism ──────────────────────────────────────────────────

fn proposals_strategy() -> impl Strategy<Value = Vec<Proposal>> {
    prop::collection::vec(
        (
            prop::sample::select(vec!["mod-a", "mod-b", "mod-c", "mod-d"]),
            prop::sample::select(vec![10i64, 50, 100]),
            -5.0f64..20.0,
        ),
        0..12,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .map(|(c, p, v)| proposal(c, p, Value::Real(v)))
            .collect()
    })
}

proptest! {
    #[test]
    fn resolve_is_deterministic(proposals in proposals_strategy()) {
        let d = real_descriptor(Constraints::new().with_range(Some(0.0), Some(10.0)));
        prop_assert_eq!(resolve(&d, &proposals), resolve(&d, &proposals));
    }

    #[test]
    fn resolve_ignores_insertion_order(
        (proposals, shuffled) in proposals_strategy()
            .prop_flat_map(|p| (Just(p.clone()), Just(p).prop_shuffle()))
    ) {
        let d = real_descriptor(Constraints::new().with_range(Some(0.0), Some(10.0)));
        prop_assert_eq!(resolve(&d, &proposals), resolve(&d, &shuffled));
    }

    #[test]
    fn winner_has_lowest_priority_and_greatest_contributor(proposals in proposals_strategy()) {
        let d = real_descriptor(Constraints::new().with_range(Some(0.0), Some(10.0)));
        let outcome = resolve(&d, &proposals);
        match &outcome.winner {
            None => prop_assert!(outcome.accepted.is_empty()),
            Some(w) => {
                for a in &outcome.accepted {
                    prop_assert!(w.priority <= a.priority);
                    if a.priority == w.priority {
                        prop_assert!(w.contributor >= a.contributor);
                    }
                }
            }
        }
    }
}
