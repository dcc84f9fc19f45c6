// src/report.rs
//
// Attendance and loyalty page tables, built from engine output as plain
// `DataSet`s so the GUI table, the CLI printer and the exporter share them.

use crate::config::options::PageKind;
use crate::model::{Chamber, MemberRecord, Party};
use crate::roster::{self, RosterFilter};
use crate::stats::{self, DataQuality, Metric, RankedSubset, Ranking};
use crate::store::DataSet;

/// One titled table on a page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub data: DataSet,
}

impl Section {
    fn new(title: impl Into<String>, data: DataSet) -> Self {
        Self { title: title.into(), data }
    }
}

pub fn chamber_heading(chamber: Chamber) -> String {
    chamber.heading()
}

/// Party | No. of Members | % Voted w/ Party, one row per canonical party.
pub fn glance_table(members: &[MemberRecord]) -> DataSet {
    let counts = stats::count_by_party(members);
    let pct = stats::average_percentage_by_party(members, Metric::VotesWithPartyPct);
    let rows = Party::ALL
        .into_iter()
        .map(|p| vec![s!(p.label()), counts.get(p).to_string(), format!("{:.2}%", pct.get(p))])
        .collect();
    DataSet::new(&["Party", "No. of Members", "% Voted w/ Party"], rows)
}

/// Party | Avg. Missed Votes, for parties present in the list.
pub fn missed_votes_table(members: &[MemberRecord]) -> DataSet {
    let rows = stats::average_missed_votes_by_party(members)
        .into_iter()
        .map(|(party, mv)| vec![s!(party.label()), format!("{:.2}", mv.average_missed_votes.unwrap_or(0.0))])
        .collect();
    DataSet::new(&["Party", "Avg. Missed Votes"], rows)
}

/// Name | No. Missed Votes | % Missed Votes for the first entries of `subset`.
pub fn engagement_table(subset: &RankedSubset<'_>) -> DataSet {
    let rows = subset
        .display()
        .iter()
        .map(|m| {
            vec![
                display_name(m),
                m.missed_votes.map(|v| v.to_string()).unwrap_or_default(),
                pct_cell(m.missed_votes_pct),
            ]
        })
        .collect();
    DataSet::new(&["Name", "No. Missed Votes", "% Missed Votes"], rows)
}

/// Name | No. Party Votes | % Party Votes for the first entries of `subset`.
pub fn loyalty_table(subset: &RankedSubset<'_>) -> DataSet {
    let rows = subset
        .display()
        .iter()
        .map(|m| {
            vec![
                display_name(m),
                party_votes(m).map(|v| v.to_string()).unwrap_or_default(),
                pct_cell(m.votes_with_party_pct),
            ]
        })
        .collect();
    DataSet::new(&["Name", "No. Party Votes", "% Party Votes"], rows)
}

/// Votes cast with the party: `round(total_votes * votes_with_party_pct / 100)`.
pub fn party_votes(member: &MemberRecord) -> Option<u64> {
    let total = member.total_votes?;
    let pct = member.votes_with_party_pct.filter(|p| !p.is_nan())?;
    Some((f64::from(total) * pct / 100.0).round().max(0.0) as u64)
}

/// Metric | Records without it, plus one row per unknown party code.
pub fn quality_table(quality: &DataQuality) -> DataSet {
    let mut rows = vec![vec![s!("records"), quality.total_records.to_string()]];
    rows.extend(Metric::ALL.into_iter().map(|m| vec![join!("missing ", m.field()), quality.missing(m).to_string()]));
    rows.extend(
        quality
            .unknown_party
            .iter()
            .map(|(code, n)| vec![format!("unknown party {code:?}"), n.to_string()]),
    );
    DataSet::new(&["Check", "Count"], rows)
}

/// Every table a page shows, top to bottom.
pub fn page_sections(page: PageKind, members: &[MemberRecord], filter: &RosterFilter) -> Vec<Section> {
    match page {
        PageKind::Members => vec![Section::new("Members", roster::members_table(members, filter))],
        PageKind::Attendance => vec![
            Section::new("At a Glance", glance_table(members)),
            Section::new("Average Missed Votes", missed_votes_table(members)),
            ranked_section(members, Ranking::LeastEngaged),
            ranked_section(members, Ranking::MostEngaged),
        ],
        PageKind::Loyalty => vec![
            Section::new("At a Glance", glance_table(members)),
            ranked_section(members, Ranking::LeastLoyal),
            ranked_section(members, Ranking::MostLoyal),
        ],
    }
}

fn ranked_section(members: &[MemberRecord], ranking: Ranking) -> Section {
    let subset = stats::rank(members, ranking);
    let data = match ranking {
        Ranking::MostEngaged | Ranking::LeastEngaged => engagement_table(&subset),
        Ranking::MostLoyal | Ranking::LeastLoyal => loyalty_table(&subset),
    };
    Section::new(ranking.title(), data)
}

fn display_name(m: &MemberRecord) -> String {
    join!(m.first_name.trim(), " ", m.last_name.trim())
}

fn pct_cell(v: Option<f64>) -> String {
    v.filter(|v| !v.is_nan()).map(|v| format!("{v:.2}%")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(first: &str, party: &str, missed: Option<u32>, pct: Option<f64>) -> MemberRecord {
        MemberRecord {
            first_name: s!(first),
            last_name: s!("Roe"),
            party: s!(party),
            missed_votes: missed,
            missed_votes_pct: missed.map(|m| f64::from(m) / 10.0),
            votes_with_party_pct: pct,
            total_votes: Some(500),
            ..MemberRecord::default()
        }
    }

    #[test]
    fn glance_lists_every_party_with_two_decimals() {
        let members = vec![member("A", "D", None, Some(90.0)), member("B", "D", None, Some(95.0))];
        let ds = glance_table(&members);
        assert_eq!(ds.rows.len(), 3);
        assert_eq!(ds.rows[0], vec!["Democratic", "2", "92.50%"]);
        assert_eq!(ds.rows[2], vec!["Independent", "0", "0.00%"]);
    }

    #[test]
    fn missed_votes_table_shows_absent_average_as_zero() {
        let members = vec![member("A", "D", Some(3), None), member("B", "R", None, None)];
        let ds = missed_votes_table(&members);
        assert_eq!(ds.rows, vec![vec![s!("Democratic"), s!("3.00")], vec![s!("Republican"), s!("0.00")]]);
    }

    #[test]
    fn loyalty_table_derives_party_votes() {
        let members = vec![member("A", "D", None, Some(97.3))];
        let subset = stats::select_by_metric_percentile(
            &members,
            Metric::VotesWithPartyPct,
            stats::SortOrder::Descending,
            stats::Fraction::WHOLE,
        );
        let ds = loyalty_table(&subset);
        assert_eq!(ds.rows[0], vec!["A Roe", "487", "97.30%"]);
    }

    #[test]
    fn engagement_table_is_capped_for_display() {
        let members: Vec<_> = (0..200).map(|i| member("M", "R", Some(i), None)).collect();
        let subset = stats::rank(&members, Ranking::LeastEngaged);
        assert_eq!(subset.len(), 20);
        let ds = engagement_table(&subset);
        assert_eq!(ds.rows.len(), 10);
        assert_eq!(ds.rows[0][1], "199");
        assert_eq!(ds.rows[0][2], "19.90%");
    }

    #[test]
    fn pages_have_expected_sections() {
        let members = vec![member("A", "D", Some(1), Some(90.0))];
        let filter = RosterFilter::default();
        assert_eq!(page_sections(PageKind::Members, &members, &filter).len(), 1);
        assert_eq!(page_sections(PageKind::Attendance, &members, &filter).len(), 4);
        let loyalty = page_sections(PageKind::Loyalty, &members, &filter);
        assert_eq!(loyalty[1].title, Ranking::LeastLoyal.title());
    }

    #[test]
    fn heading_names_the_chamber() {
        assert_eq!(chamber_heading(Chamber::House), "House at a Glance");
    }
}
