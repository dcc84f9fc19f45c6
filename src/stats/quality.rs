// src/stats/quality.rs
use std::collections::BTreeMap;

use serde::Serialize;

use super::types::Metric;
use crate::model::MemberRecord;

/// Soft data problems in a member list. Nothing here stops a computation;
/// it only makes the exclusions visible.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DataQuality {
    pub total_records: usize,
    /// Raw party code → records carrying it, for codes with no bucket.
    pub unknown_party: BTreeMap<String, usize>,
    /// Metric → records where it is absent, null, mistyped or NaN.
    pub missing: BTreeMap<Metric, usize>,
}

impl DataQuality {
    pub fn unknown_party_total(&self) -> usize {
        self.unknown_party.values().sum()
    }

    pub fn missing(&self, metric: Metric) -> usize {
        self.missing.get(&metric).copied().unwrap_or(0)
    }

    pub fn is_clean(&self) -> bool {
        self.unknown_party.is_empty() && self.missing.is_empty()
    }
}

pub fn data_quality(members: &[MemberRecord]) -> DataQuality {
    let mut report = DataQuality { total_records: members.len(), ..Default::default() };
    for m in members {
        if m.party().is_none() {
            *report.unknown_party.entry(m.party.trim().to_string()).or_insert(0) += 1;
        }
        for metric in Metric::ALL {
            if metric.value(m).is_none() {
                *report.missing.entry(metric).or_insert(0) += 1;
            }
        }
    }
    report
}
