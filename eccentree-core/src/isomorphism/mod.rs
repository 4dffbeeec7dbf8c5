//! Isomorphism testing and first-seen deduplication.
//!
//! [`find_isomorphism`] rejects on cheap invariants (vertex count, edge
//! count, degree sequence), then on differing colour histograms after joint
//! colour refinement, and only then backtracks over colour-preserving
//! bijections. The search is exponential in the worst case and intended for
//! the small or highly structured graphs the generators produce.

mod dedup;
mod refine;
mod search;

pub use self::{
    dedup::{Deduplicator, Insertion, remove_isomorphic_duplicates},
    search::{are_isomorphic, find_isomorphism},
};
