//! Pure view derivation: filtering, sorting, and facet extraction.
//!
//! Every screen's visible collection is a pure function of its base
//! collection and the active criteria. The functions here never mutate their
//! input and are idempotent, which is what lets a screen store recompute the
//! view on every state change without bookkeeping.

pub mod contragents;
pub mod products;
