use crate::{AcceptedProposal, Rejection, ResolutionOutcome};
use conflux_registry::{ItemDescriptor, Proposal, Verdict, validate};
use std::cmp::Ordering;

/// Tie-break order: priority ascending, then contributor ascending.
///
/// Property and value follow as the last keys so that repeated proposals
/// from one contributor at one priority still order reproducibly.
/// Insertion order never takes part.
#[must_use]
pub fn tie_break(a: &Proposal, b: &Proposal) -> Ordering {
    a.priority
        .cmp(&b.priority)
        .then_with(|| a.contributor.cmp(&b.contributor))
        .then_with(|| a.property.cmp(&b.property))
        .then_with(|| a.value.total_cmp(&b.value))
}

/// Resolves one item's proposals into at most one winner.
#[must_use]
pub fn resolve(descriptor: &ItemDescriptor, proposals: &[Proposal]) -> ResolutionOutcome {
    let mut ordered: Vec<&Proposal> = proposals.iter().collect();
    ordered.sort_by(|a, b| tie_break(a, b));

    let mut outcome = ResolutionOutcome::default();
    for proposal in ordered {
        let verdict = if descriptor.is_read_only() {
            Verdict::Rejected("item is read-only".to_string())
        } else {
            validate(descriptor, &proposal.property, &proposal.value)
        };

        match verdict {
            Verdict::Accepted(value) => outcome.accepted.push(AcceptedProposal {
                contributor: proposal.contributor.clone(),
                property: proposal.property.clone(),
                value,
                priority: proposal.priority,
            }),
            Verdict::Rejected(reason) => outcome.rejected.push(Rejection {
                contributor: proposal.contributor.clone(),
                property: proposal.property.clone(),
                value: proposal.value.clone(),
                priority: proposal.priority,
                reason,
            }),
        }
    }

    outcome.winner = select_winner(&outcome.accepted).cloned();
    outcome
}

/// Picks the last entry of the lowest-priority run of `accepted`, which is
/// already in tie-break order.
fn select_winner(accepted: &[AcceptedProposal]) -> Option<&AcceptedProposal> {
    let best = accepted.first()?.priority;
    accepted.iter().take_while(|c| c.priority == best).last()
}
