// src/roster.rs
//
// Members page: which members pass the party/state selection, and the table
// they render as.

use std::collections::BTreeSet;

use crate::model::{MemberRecord, Party};
use crate::store::DataSet;

pub const MEMBERS_HEADERS: [&str; 5] = ["Name", "Party", "State", "Years in Office", "% Votes with Party"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterFilter {
    pub parties: BTreeSet<Party>,
    /// Two-letter code, upper-case. `None` means any state.
    pub state: Option<String>,
}

impl Default for RosterFilter {
    fn default() -> Self {
        Self {
            parties: Party::ALL.into_iter().collect(),
            state: None,
        }
    }
}

impl RosterFilter {
    pub fn set_state(&mut self, code: &str) {
        let code = code.trim();
        self.state = if code.is_empty() { None } else { Some(code.to_ascii_uppercase()) };
    }

    pub fn toggle_party(&mut self, party: Party, on: bool) {
        if on {
            self.parties.insert(party);
        } else {
            self.parties.remove(&party);
        }
    }

    /// Unknown party codes never pass.
    pub fn matches(&self, member: &MemberRecord) -> bool {
        let party_ok = member.party().is_some_and(|p| self.parties.contains(&p));
        let state_ok = match &self.state {
            Some(code) => member.state.trim().eq_ignore_ascii_case(code),
            None => true,
        };
        party_ok && state_ok
    }
}

pub fn filter_members<'a>(members: &'a [MemberRecord], filter: &RosterFilter) -> Vec<&'a MemberRecord> {
    members.iter().filter(|m| filter.matches(m)).collect()
}

pub fn members_table(members: &[MemberRecord], filter: &RosterFilter) -> DataSet {
    let rows = filter_members(members, filter)
        .into_iter()
        .map(|m| {
            vec![
                m.full_name(),
                m.party().map(Party::member_label).map(|l| s!(l)).unwrap_or_else(|| s!(m.party.trim())),
                s!(m.state.trim()),
                m.seniority.clone().unwrap_or_default(),
                match m.votes_with_party_pct {
                    Some(v) => format!("{v}%"),
                    None => s!("N/A"),
                },
            ]
        })
        .collect();
    DataSet::new(&MEMBERS_HEADERS, rows)
}

/// Sorted distinct state codes present in `members`.
pub fn states_in(members: &[MemberRecord]) -> Vec<String> {
    members
        .iter()
        .map(|m| m.state.trim().to_ascii_uppercase())
        .filter(|s| !s.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(first: &str, party: &str, state: &str, pct: Option<f64>) -> MemberRecord {
        MemberRecord {
            first_name: s!(first),
            last_name: s!("Doe"),
            party: s!(party),
            state: s!(state),
            seniority: Some(s!("4")),
            votes_with_party_pct: pct,
            ..MemberRecord::default()
        }
    }

    #[test]
    fn default_filter_passes_known_parties_only() {
        let members = vec![
            member("A", "D", "NY", Some(90.0)),
            member("B", "ID", "VT", None),
            member("C", "L", "CA", None),
        ];
        let shown = filter_members(&members, &RosterFilter::default());
        assert_eq!(shown.len(), 2);
    }

    #[test]
    fn state_and_party_filters_combine() {
        let members = vec![
            member("A", "D", "NY", None),
            member("B", "R", "NY", None),
            member("C", "D", "ca", None),
        ];
        let mut filter = RosterFilter::default();
        filter.toggle_party(Party::Republican, false);
        filter.set_state(" ny ");
        let shown = filter_members(&members, &filter);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].first_name, "A");

        filter.set_state("CA");
        assert_eq!(filter_members(&members, &filter).len(), 1);
        filter.set_state("");
        assert_eq!(filter.state, None);
    }

    #[test]
    fn table_formats_party_label_and_pct() {
        let members = vec![member("Ann", "D", "NY", Some(95.5)), member("Bo", "R", "TX", None)];
        let ds = members_table(&members, &RosterFilter::default());
        assert_eq!(ds.header_count(), 5);
        assert_eq!(ds.rows[0], vec!["Ann Doe", "Democrat", "NY", "4", "95.5%"]);
        assert_eq!(ds.rows[1][1], "Republican");
        assert_eq!(ds.rows[1][4], "N/A");
    }

    #[test]
    fn states_are_sorted_and_distinct() {
        let members = vec![member("A", "D", "ny", None), member("B", "R", "CA", None), member("C", "D", "NY", None)];
        assert_eq!(states_in(&members), vec!["CA", "NY"]);
    }
}
