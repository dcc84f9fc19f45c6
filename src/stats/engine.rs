// src/stats/engine.rs
use serde::Deserialize;
use serde_json::Value;

use super::types::*;
use crate::error::{Error, Result};
use crate::model::MemberRecord;

/// Decode a JSON member list. Anything but an array is rejected; array
/// entries that are not member objects are skipped.
pub fn members_from_json(value: &Value) -> Result<Vec<MemberRecord>> {
    let items = value.as_array().ok_or_else(|| {
        Error::InvalidInput(format!("expected a list of members, got {}", json_kind(value)))
    })?;
    Ok(items
        .iter()
        .filter(|v| v.is_object())
        .filter_map(|v| MemberRecord::deserialize(v).ok())
        .collect())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Members per canonical party. Unknown codes are not counted.
pub fn count_by_party(members: &[MemberRecord]) -> PartyTally<usize> {
    let mut counts = PartyTally::default();
    for party in members.iter().filter_map(MemberRecord::party) {
        *counts.get_mut(party) += 1;
    }
    counts
}

/// Mean of `metric` per party over members that report it; `0.0` for a
/// party with no contributing members.
pub fn average_percentage_by_party(members: &[MemberRecord], metric: Metric) -> PartyTally<f64> {
    let mut sums: PartyTally<(f64, usize)> = PartyTally::default();
    for m in members {
        let (Some(party), Some(v)) = (m.party(), metric.value(m)) else { continue };
        let slot = sums.get_mut(party);
        slot.0 += v;
        slot.1 += 1;
    }
    sums.map(|(total, count)| if count > 0 { total / count as f64 } else { 0.0 })
}

/// Missed-vote total, contributing member count and mean per party present
/// in the input.
pub fn average_missed_votes_by_party(members: &[MemberRecord]) -> MissedVotesByParty {
    let mut out = MissedVotesByParty::new();
    for m in members {
        let Some(party) = m.party() else { continue };
        let agg = out.entry(party).or_default();
        if let Some(missed) = m.missed_votes {
            agg.total_missed_votes += u64::from(missed);
            agg.member_count += 1;
        }
    }
    for agg in out.values_mut() {
        agg.average_missed_votes = (agg.member_count > 0)
            .then(|| agg.total_missed_votes as f64 / agg.member_count as f64);
    }
    out
}

/// Members reporting `metric`, stably sorted by it, cut to
/// `ceil(N * fraction)` entries.
pub fn select_by_metric_percentile(
    members: &[MemberRecord],
    metric: Metric,
    order: SortOrder,
    fraction: Fraction,
) -> RankedSubset<'_> {
    let mut ranked: Vec<(&MemberRecord, f64)> = members
        .iter()
        .filter_map(|m| metric.value(m).map(|v| (m, v)))
        .collect();

    // `sort_by` is stable: equal keys keep input order in both directions.
    ranked.sort_by(|(_, a), (_, b)| match order {
        SortOrder::Ascending => a.total_cmp(b),
        SortOrder::Descending => b.total_cmp(a),
    });

    let keep = fraction.take_count(ranked.len());
    RankedSubset {
        metric,
        order,
        members: ranked.into_iter().take(keep).map(|(m, _)| m).collect(),
    }
}

/// One of the page rankings at the default 10% cut.
pub fn rank(members: &[MemberRecord], ranking: Ranking) -> RankedSubset<'_> {
    select_by_metric_percentile(members, ranking.metric(), ranking.order(), Fraction::DECILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Party;
    use serde_json::json;

    fn member(id: &str, party: &str, missed: Option<u32>, loyal: Option<f64>) -> MemberRecord {
        MemberRecord {
            id: Some(s!(id)),
            party: s!(party),
            missed_votes: missed,
            votes_with_party_pct: loyal,
            ..Default::default()
        }
    }

    fn ids(subset: &RankedSubset<'_>) -> Vec<String> {
        subset.members.iter().map(|m| m.id.clone().unwrap_or_default()).collect()
    }

    #[test]
    fn counts_skip_unknown_codes() {
        let members = vec![
            member("1", "D", None, None),
            member("2", "R", None, None),
            member("3", "ID", None, None),
            member("4", "L", None, None),
        ];
        let counts = count_by_party(&members);
        assert_eq!((counts.democratic, counts.republican, counts.independent), (1, 1, 1));
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn percentage_average_ignores_nan_and_absent() {
        let members = vec![
            member("1", "D", None, Some(90.0)),
            member("2", "D", None, Some(f64::NAN)),
            member("3", "D", None, None),
            member("4", "D", None, Some(80.0)),
        ];
        let avg = average_percentage_by_party(&members, Metric::VotesWithPartyPct);
        assert_eq!(avg.democratic, 85.0);
        assert_eq!(avg.republican, 0.0);
    }

    #[test]
    fn missed_votes_buckets_only_for_seen_parties() {
        let members = vec![member("1", "R", Some(3), None), member("2", "X", Some(100), None)];
        let out = average_missed_votes_by_party(&members);
        assert_eq!(out.len(), 1);
        assert_eq!(out[&Party::Republican].average_missed_votes, Some(3.0));
    }

    #[test]
    fn descending_ties_keep_input_order() {
        let members = vec![
            member("1", "D", Some(5), None),
            member("2", "D", Some(9), None),
            member("3", "D", Some(5), None),
        ];
        let out = select_by_metric_percentile(&members, Metric::MissedVotes, SortOrder::Descending, Fraction::WHOLE);
        assert_eq!(ids(&out), vec!["2", "1", "3"]);
    }

    #[test]
    fn rankings_pick_the_right_end() {
        let members: Vec<MemberRecord> = (0..20)
            .map(|i| member(&i.to_string(), "D", Some(i), Some(50.0 + i as f64)))
            .collect();
        assert_eq!(ids(&rank(&members, Ranking::MostEngaged)), vec!["0", "1"]);
        assert_eq!(ids(&rank(&members, Ranking::LeastEngaged)), vec!["19", "18"]);
        assert_eq!(ids(&rank(&members, Ranking::MostLoyal)), vec!["19", "18"]);
        assert_eq!(ids(&rank(&members, Ranking::LeastLoyal)), vec!["0", "1"]);
    }

    #[test]
    fn non_list_input_fails_fast() {
        let err = members_from_json(&json!({"members": []})).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(members_from_json(&json!(null)).is_err());
    }

    #[test]
    fn non_object_entries_are_skipped() {
        let members = members_from_json(&json!([{"party": "D"}, 7, "x", {"party": "R"}])).unwrap();
        assert_eq!(members.len(), 2);
    }
}
