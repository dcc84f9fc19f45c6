// tests/report_tables.rs
use std::path::PathBuf;

use congress_stats::config::options::PageKind;
use congress_stats::model::{Chamber, Party};
use congress_stats::report::{self, page_sections};
use congress_stats::roster::{members_table, RosterFilter};
use congress_stats::source::{FileSource, MemberDataSource};

fn members() -> Vec<congress_stats::model::MemberRecord> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/senate_sample.json");
    FileSource::new(path).fetch(Chamber::Senate).unwrap()
}

#[test]
fn glance_table_from_sample() {
    let ds = report::glance_table(&members());
    assert_eq!(ds.rows[0], vec!["Democratic", "1", "97.16%"]);
    assert_eq!(ds.rows[1], vec!["Republican", "2", "79.65%"]);
    assert_eq!(ds.rows[2], vec!["Independent", "2", "91.00%"]);
}

#[test]
fn missed_votes_table_from_sample() {
    let ds = report::missed_votes_table(&members());
    assert_eq!(
        ds.rows,
        vec![
            vec!["Democratic".to_string(), "4.00".to_string()],
            vec!["Republican".to_string(), "6.00".to_string()],
            vec!["Independent".to_string(), "30.00".to_string()],
        ]
    );
}

#[test]
fn attendance_rankings_pick_the_extremes() {
    let sections = page_sections(PageKind::Attendance, &members(), &RosterFilter::default());
    // 4 members report missed votes: ceil(0.4) = 1 each way.
    let least = &sections[2];
    assert_eq!(least.data.rows, vec![vec!["Bernard Sanders", "30", "5.00%"]]);
    let most = &sections[3];
    assert_eq!(most.data.rows, vec![vec!["Susan Collins", "0", "0.00%"]]);
}

#[test]
fn loyalty_rankings_show_party_votes() {
    let sections = page_sections(PageKind::Loyalty, &members(), &RosterFilter::default());
    assert_eq!(sections[1].data.rows, vec![vec!["Susan Collins", "393", "65.50%"]]);
    assert_eq!(sections[2].data.rows, vec![vec!["Tammy Baldwin", "583", "97.16%"]]);
}

#[test]
fn members_table_filters_by_party_and_state() {
    let all = members();
    let mut filter = RosterFilter::default();
    filter.set_state("me");
    let ds = members_table(&all, &filter);
    assert_eq!(ds.rows.len(), 2);
    assert_eq!(ds.rows[0], vec!["Susan M. Collins", "Republican", "ME", "25", "65.5%"]);
    assert_eq!(ds.rows[1][4], "N/A");

    filter.toggle_party(Party::Independent, false);
    assert_eq!(members_table(&all, &filter).rows.len(), 1);
}
