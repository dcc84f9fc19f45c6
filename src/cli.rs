// src/cli.rs
use std::env;

use crate::config::options::{AppOptions, ExportFormat, PageKind};
use crate::csv::to_export_string;
use crate::error::{Error, Result};
use crate::file;
use crate::model::{Chamber, Party};
use crate::progress::StderrProgress;
use crate::report::{self, Section};
use crate::source;
use crate::stats;

/// What the command line asked for, on top of the loaded options.
#[derive(Clone, Debug, PartialEq)]
pub struct Command {
    pub options: AppOptions,
    /// Write to the export path instead of stdout.
    pub write_file: bool,
    pub quality: bool,
    pub verbose: bool,
    pub help: bool,
}

pub fn run() -> Result<()> {
    let cmd = parse_args(env::args().skip(1), AppOptions::load())?;
    if cmd.help {
        eprintln!("{}", include_str!("cli_help.txt"));
        return Ok(());
    }
    if cmd.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }
    execute(&cmd)
}

pub fn execute(cmd: &Command) -> Result<()> {
    let opts = &cmd.options;
    let chamber = opts.source.chamber;
    let page = opts.view.page;
    logf!("CLI: {} page for {} (congress {})", page.slug(), chamber.slug(), opts.source.congress);

    let src = source::build_source(&opts.source)?;
    let mut progress = StderrProgress;
    let members = source::load_chamber(src.as_ref(), chamber, Some(&mut progress))?;

    if cmd.quality {
        let quality = stats::data_quality(&members);
        eprint!("{}", to_export_string(&report::quality_table(&quality), true, '\t'));
    }

    let sections = report::page_sections(page, &members, &opts.view.filter);

    if cmd.write_file {
        let path = file::write_export_sections(&opts.export, chamber, page, &sections)?;
        eprintln!("Wrote {}", path.display());
    } else {
        print!("{}", render(chamber, page, &sections, opts.export.include_headers, opts.export.format.delim()));
    }
    Ok(())
}

/// Plain-text page for stdout: heading, then each titled table.
pub fn render(chamber: Chamber, page: PageKind, sections: &[Section], include_headers: bool, sep: char) -> String {
    let mut out = s!();
    if page != PageKind::Members {
        out.push_str(&report::chamber_heading(chamber));
        out.push('\n');
    }
    for section in sections {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&join!("# ", &section.title, "\n"));
        out.push_str(&to_export_string(&section.data, include_headers, sep));
    }
    out
}

pub fn parse_args<I>(args: I, mut options: AppOptions) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut cmd = Command { options: AppOptions::default(), write_file: false, quality: false, verbose: false, help: false };
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        let mut value = |flag: &str| {
            args.next().ok_or_else(|| Error::InvalidInput(format!("Missing value for {flag}")))
        };
        match a.as_str() {
            "--chamber" => options.source.chamber = value("--chamber")?.parse()?,
            "--congress" => {
                let v = value("--congress")?;
                options.source.congress = v
                    .trim()
                    .parse()
                    .map_err(|_| Error::InvalidInput(format!("Invalid congress number: {v}")))?;
            }
            "--page" => options.view.page = value("--page")?.parse()?,
            "--party" => options.view.filter.parties = Party::parse_list(&value("--party")?)?,
            "--state" => options.view.filter.set_state(&value("--state")?),
            "--input" => options.source.input = Some(value("--input")?.into()),
            "--refresh" => options.source.refresh = true,
            "--format" => options.export.format = value("--format")?.parse::<ExportFormat>()?,
            "-o" | "--out" => {
                options.export.set_path(&value("-o")?);
                cmd.write_file = true;
            }
            "--include-headers" => options.export.include_headers = true,
            "--no-headers" => options.export.include_headers = false,
            "--quality" => cmd.quality = true,
            "-v" | "--verbose" => cmd.verbose = true,
            "-h" | "--help" => cmd.help = true,
            _ => return Err(Error::InvalidInput(format!("Unknown arg: {a}"))),
        }
    }

    cmd.options = options;
    Ok(cmd)
}
