// src/cli.rs
use std::io::{self, Write};
use std::time::Duration;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config::{
        consts::{BASE_URL, MAX_PAGES, REQUEST_TIMEOUT_SECS, USER_AGENT},
        options::{AppOptions, NetOptions, ScrapeOptions, Specialization},
    },
    csv::{self, Delim},
    log::{self, LogTarget},
    progress::Progress,
    scrape::{self, Listing},
};

#[derive(Parser, Debug)]
#[command(name = "cli", about = "Scrape Practo doctor listings for a city and specialization")]
pub struct Args {
    /// City or area, e.g. "Bangalore"
    #[arg(short, long)]
    pub location: String,

    /// General-Physician, Dentist, Gynecologist, Pediatrician or Orthopedic
    #[arg(short, long, default_value_t = Specialization::GeneralPhysician)]
    pub specialization: Specialization,

    /// Stop with an error if the site still links onward after this many pages
    #[arg(long, default_value_t = MAX_PAGES)]
    pub max_pages: u32,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Emit a header row (csv/tsv only)
    #[arg(long)]
    pub headers: bool,

    #[arg(long, default_value = BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Csv,
    Tsv,
}

impl Args {
    pub fn to_options(&self) -> AppOptions {
        AppOptions {
            scrape: ScrapeOptions {
                max_pages: self.max_pages,
                ..ScrapeOptions::new(&self.location, self.specialization)
            },
            net: NetOptions {
                base_url: self.base_url.clone(),
                user_agent: s!(USER_AGENT),
                timeout_secs: self.timeout,
            },
        }
    }
}

pub fn run() -> Result<()> {
    log::init(LogTarget::Stderr);
    let args = Args::parse();
    let stdout = io::stdout();
    run_with(&args, stdout.lock())
}

pub fn run_with<W: Write>(args: &Args, mut out: W) -> Result<()> {
    let opts = args.to_options();
    let mut prog = CliProgress::new();

    match scrape::run_scrape_with(&opts, Some(&mut prog), None) {
        Ok(listing) => {
            write_listing(&mut out, &listing, args.format, args.headers)
                .wrap_err("writing results")?;
            Ok(())
        }
        Err(failure) => {
            if failure.is_partial() {
                eprintln!(
                    "Scrape incomplete; writing {} record(s) gathered before the failure.",
                    failure.partial.records.len()
                );
                write_listing(&mut out, &failure.partial, args.format, args.headers)
                    .wrap_err("writing partial results")?;
            }
            Err(failure.into())
        }
    }
}

pub fn write_listing<W: Write>(
    mut out: W,
    listing: &Listing,
    format: OutputFormat,
    headers: bool,
) -> io::Result<()> {
    match format {
        OutputFormat::Csv => csv::write_records(&mut out, &listing.records, headers, Delim::Csv),
        OutputFormat::Tsv => csv::write_records(&mut out, &listing.records, headers, Delim::Tsv),
        OutputFormat::Text => {
            writeln!(out, "Total number of doctors available: {}", listing.total_count_label)?;
            if listing.records.is_empty() {
                writeln!(out, "No doctor details found. Please check the location and specialization and try again.")?;
            }
            for (i, r) in listing.records.iter().enumerate() {
                writeln!(out)?;
                writeln!(out, "Profile {} of {}", i + 1, listing.records.len())?;
                writeln!(out, "  Name:      {}", r.name)?;
                writeln!(out, "  Specialty: {}", r.specialty)?;
                writeln!(out, "  Rating:    {}", r.rating)?;
            }
            Ok(())
        }
    }
}

/// Spinner on stderr.
struct CliProgress {
    bar: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        Self { bar }
    }
}

impl Progress for CliProgress {
    fn begin(&mut self, max_pages: u32) {
        self.bar.enable_steady_tick(Duration::from_millis(100));
        self.bar.set_message(format!("Scraping (up to {max_pages} pages)…"));
    }
    fn log(&mut self, msg: &str) {
        self.bar.set_message(s!(msg));
    }
    fn page_done(&mut self, page: u32, on_page: usize, so_far: usize) {
        self.bar.set_message(format!("Page {page}: {on_page} doctor(s), {so_far} so far"));
    }
    fn finish(&mut self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::listing::Record;

    #[test]
    fn args_map_onto_options() {
        let args = Args::parse_from([
            "cli", "-l", "New Delhi", "-s", "dentist", "--max-pages", "3", "--timeout", "5",
        ]);
        let opts = args.to_options();
        assert_eq!(opts.scrape.location, "New Delhi");
        assert_eq!(opts.scrape.specialization, Specialization::Dentist);
        assert_eq!(opts.scrape.max_pages, 3);
        assert_eq!(opts.net.timeout_secs, 5);
        assert_eq!(opts.net.base_url, BASE_URL);
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn unknown_specialization_is_rejected() {
        assert!(Args::try_parse_from(["cli", "-l", "Pune", "-s", "Cardiologist"]).is_err());
    }

    #[test]
    fn text_output_lists_profiles() {
        let listing = Listing {
            total_count_label: s!("2 doctors"),
            records: vec![Record::new("Dr. A", "Dentist", "96%"), Record::new("Dr. B", "N/A", "N/A")],
            pages_fetched: 1,
        };
        let mut buf = Vec::new();
        write_listing(&mut buf, &listing, OutputFormat::Text, false).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert!(s.starts_with("Total number of doctors available: 2 doctors\n"));
        assert!(s.contains("Profile 2 of 2"));
        assert!(s.contains("  Name:      Dr. B"));
    }
}
