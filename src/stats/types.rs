// src/stats/types.rs
use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::consts::{DISPLAY_LIMIT, PERCENTILE_FRACTION};
use crate::error::{Error, Result};
use crate::model::{MemberRecord, Party};

/// Numeric member fields the engine can aggregate or rank by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    VotesWithPartyPct,
    VotesAgainstPartyPct,
    MissedVotes,
    MissedVotesPct,
    TotalVotes,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::VotesWithPartyPct,
        Metric::VotesAgainstPartyPct,
        Metric::MissedVotes,
        Metric::MissedVotesPct,
        Metric::TotalVotes,
    ];

    /// API field name.
    pub fn field(self) -> &'static str {
        match self {
            Metric::VotesWithPartyPct => "votes_with_party_pct",
            Metric::VotesAgainstPartyPct => "votes_against_party_pct",
            Metric::MissedVotes => "missed_votes",
            Metric::MissedVotesPct => "missed_votes_pct",
            Metric::TotalVotes => "total_votes",
        }
    }

    /// The member's value for this metric, if present and not NaN.
    pub fn value(self, member: &MemberRecord) -> Option<f64> {
        let v = match self {
            Metric::VotesWithPartyPct => member.votes_with_party_pct,
            Metric::VotesAgainstPartyPct => member.votes_against_party_pct,
            Metric::MissedVotes => member.missed_votes.map(f64::from),
            Metric::MissedVotesPct => member.missed_votes_pct,
            Metric::TotalVotes => member.total_votes.map(f64::from),
        };
        v.filter(|v| !v.is_nan())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Share of the ranked list to keep, in `(0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Fraction(f64);

impl Fraction {
    pub const DECILE: Fraction = Fraction(PERCENTILE_FRACTION);
    pub const WHOLE: Fraction = Fraction(1.0);

    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value > 0.0 && value <= 1.0 {
            Ok(Self(value))
        } else {
            Err(Error::InvalidInput(format!("fraction must be within (0, 1], got {value}")))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// `ceil(n * fraction)`, taken on the exact product: `30 * 0.1` is 3,
    /// not 4 from the binary rounding of `0.1`.
    pub fn take_count(self, n: usize) -> usize {
        let scaled = n as f64 * self.0;
        let nearest = scaled.round();
        let k = if (scaled - nearest).abs() <= 1e-9 * scaled.max(1.0) {
            nearest
        } else {
            scaled.ceil()
        };
        (k as usize).min(n)
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::DECILE
    }
}

/// One value per canonical party, iterated D, R, I.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PartyTally<T> {
    #[serde(rename = "D")]
    pub democratic: T,
    #[serde(rename = "R")]
    pub republican: T,
    #[serde(rename = "I")]
    pub independent: T,
}

impl<T> PartyTally<T> {
    pub fn get(&self, party: Party) -> &T {
        match party {
            Party::Democratic => &self.democratic,
            Party::Republican => &self.republican,
            Party::Independent => &self.independent,
        }
    }

    pub fn get_mut(&mut self, party: Party) -> &mut T {
        match party {
            Party::Democratic => &mut self.democratic,
            Party::Republican => &mut self.republican,
            Party::Independent => &mut self.independent,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Party, &T)> {
        Party::ALL.into_iter().map(move |p| (p, self.get(p)))
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> PartyTally<U> {
        PartyTally {
            democratic: f(self.democratic),
            republican: f(self.republican),
            independent: f(self.independent),
        }
    }
}

impl PartyTally<usize> {
    pub fn total(&self) -> usize {
        self.democratic + self.republican + self.independent
    }
}

/// Missed-vote totals for one party.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct MissedVotes {
    pub total_missed_votes: u64,
    pub member_count: usize,
    /// `None` when no member of the party reported missed votes.
    pub average_missed_votes: Option<f64>,
}

impl MissedVotes {
    /// The average with NaN standing in for "no contributing members".
    pub fn average_or_nan(&self) -> f64 {
        self.average_missed_votes.unwrap_or(f64::NAN)
    }
}

/// Buckets exist only for parties that occur in the input.
pub type MissedVotesByParty = BTreeMap<Party, MissedVotes>;

/// The four rankings the attendance and loyalty pages show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Ranking {
    MostEngaged,
    LeastEngaged,
    MostLoyal,
    LeastLoyal,
}

impl Ranking {
    pub fn metric(self) -> Metric {
        match self {
            Ranking::MostEngaged | Ranking::LeastEngaged => Metric::MissedVotes,
            Ranking::MostLoyal | Ranking::LeastLoyal => Metric::VotesWithPartyPct,
        }
    }

    /// Fewer missed votes is more engaged; a higher party share is more loyal.
    pub fn order(self) -> SortOrder {
        match self {
            Ranking::MostEngaged | Ranking::LeastLoyal => SortOrder::Ascending,
            Ranking::LeastEngaged | Ranking::MostLoyal => SortOrder::Descending,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Ranking::MostEngaged => "Most Engaged (Top 10% Attendance)",
            Ranking::LeastEngaged => "Least Engaged (Bottom 10% Attendance)",
            Ranking::MostLoyal => "Most Loyal (Top 10% Party)",
            Ranking::LeastLoyal => "Least Loyal (Bottom 10% Party)",
        }
    }
}

/// Members ranked by a metric, already cut to the requested fraction.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedSubset<'a> {
    pub metric: Metric,
    pub order: SortOrder,
    pub members: Vec<&'a MemberRecord>,
}

impl<'a> RankedSubset<'a> {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// At most the first `DISPLAY_LIMIT` entries, for on-screen tables.
    pub fn display(&self) -> &[&'a MemberRecord] {
        &self.members[..self.members.len().min(DISPLAY_LIMIT)]
    }
}
