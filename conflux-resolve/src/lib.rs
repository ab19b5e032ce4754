//! Proposal resolution for conflux.
//!
//! - [`resolve`] orders one item's proposals, validates each of them and
//!   picks at most one winner.
//! - [`ApplyEngine`] runs resolution over every item of one owner, writes
//!   winners back to the host and updates descriptor bookkeeping.
//!
//! # Winner rule
//!
//! Proposals are ordered by priority ascending, then contributor ascending.
//! The winner is the accepted proposal with the lowest priority number;
//! among several at that priority, the contributor that sorts last wins.
//! The winner is selected directly from the ordered list, never by
//! applying proposals one after another and keeping the last write.

mod apply;
mod outcome;
mod resolver;

pub use apply::ApplyEngine;
pub use outcome::{AcceptedProposal, ApplyReport, ItemOutcome, ItemState, Rejection, ResolutionOutcome};
pub use resolver::{resolve, tie_break};
