// tests/config_file.rs
use congress_stats::config::file::apply_text;
use congress_stats::config::options::{AppOptions, ExportFormat, PageKind};
use congress_stats::model::{Chamber, Party};

#[test]
fn config_text_overrides_defaults() {
    let mut opts = AppOptions::default();
    apply_text(
        &mut opts,
        "# saved settings\n\
         chamber = house\n\
         congress=116\n\
         page=attendance\n\
         parties=D,I\n\
         state=vt\n\
         format=tsv\n\
         include_headers=false\n\
         unknown_key=1\n",
    );

    assert_eq!(opts.source.chamber, Chamber::House);
    assert_eq!(opts.source.congress, 116);
    assert_eq!(opts.view.page, PageKind::Attendance);
    assert!(!opts.view.filter.parties.contains(&Party::Republican));
    assert_eq!(opts.view.filter.state.as_deref(), Some("VT"));
    assert_eq!(opts.export.format, ExportFormat::Tsv);
    assert!(!opts.export.include_headers);
}

#[test]
fn bad_values_keep_previous_settings() {
    let mut opts = AppOptions::default();
    apply_text(&mut opts, "chamber=lords\ncongress=abc\nparties=D,X\n");
    assert_eq!(opts, AppOptions::default());
}
