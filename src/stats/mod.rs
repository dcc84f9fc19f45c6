// src/stats/mod.rs
//! # Statistics engine
//!
//! Pure aggregation over a chamber's member list: party counts, party
//! averages of a percentage metric, missed-vote averages, and top/bottom
//! percentile selection by a metric.
//!
//! ## Conventions & invariants
//! - Every function takes an explicit `&[MemberRecord]` and returns freshly
//!   built values. No caching, no ambient state, no logging.
//! - A record missing a metric (absent, null, wrong type, NaN) is left out of
//!   that metric's aggregate only; it still counts everywhere else.
//! - Unknown party codes never fall into a bucket. They show up in
//!   [`DataQuality`] instead of failing the call.
//! - Percentage averages fall back to `0.0` for an empty bucket; missed-vote
//!   averages keep `None` so callers can tell "no data" from "zero".
//!
//! ## Typical call chain
//! ```text
//! source::fetch → Vec<MemberRecord> → stats::* → report::* tables → GUI / CLI
//! ```

mod engine;
mod quality;
mod types;

pub use engine::{
    average_missed_votes_by_party, average_percentage_by_party, count_by_party,
    members_from_json, rank, select_by_metric_percentile,
};
pub use quality::{data_quality, DataQuality};
pub use types::{
    Fraction, Metric, MissedVotes, MissedVotesByParty, PartyTally, RankedSubset, Ranking,
    SortOrder,
};
