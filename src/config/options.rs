// src/config/options.rs
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use super::consts::*;
use super::selectors::SelectorTable;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub net: NetOptions,
}

/// The specialties the directory can be searched by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Specialization {
    #[default]
    GeneralPhysician,
    Dentist,
    Gynecologist,
    Pediatrician,
    Orthopedic,
}

impl Specialization {
    pub const ALL: [Specialization; 5] = [
        Specialization::GeneralPhysician,
        Specialization::Dentist,
        Specialization::Gynecologist,
        Specialization::Pediatrician,
        Specialization::Orthopedic,
    ];

    /// Path segment the site expects.
    pub fn slug(&self) -> &'static str {
        match self {
            Specialization::GeneralPhysician => "General-Physician",
            Specialization::Dentist          => "Dentist",
            Specialization::Gynecologist     => "Gynecologist",
            Specialization::Pediatrician     => "Pediatrician",
            Specialization::Orthopedic       => "Orthopedic",
        }
    }
}

impl fmt::Display for Specialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Specialization {
    type Err = String;

    /// Accepts the slug case-insensitively; spaces and underscores count as '-'.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .map(|c| if c == ' ' || c == '_' { '-' } else { c.to_ascii_lowercase() })
            .collect();

        Specialization::ALL
            .into_iter()
            .find(|sp| sp.slug().to_ascii_lowercase() == wanted)
            .ok_or_else(|| {
                let valid: Vec<&str> = Specialization::ALL.iter().map(|sp| sp.slug()).collect();
                format!("unknown specialization `{}` (expected one of: {})", s, valid.join(", "))
            })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub location: String,
    pub specialization: Specialization,
    /// Hard stop for runaway pagination.
    pub max_pages: u32,
    pub selectors: SelectorTable,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            location: s!(),
            specialization: Specialization::default(),
            max_pages: MAX_PAGES,
            selectors: SelectorTable::default(),
        }
    }
}

impl ScrapeOptions {
    pub fn new(location: &str, specialization: Specialization) -> Self {
        Self {
            location: s!(location),
            specialization,
            ..Self::default()
        }
    }

    /// Never less than one page.
    pub fn page_limit(&self) -> u32 {
        self.max_pages.max(FIRST_PAGE)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetOptions {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for NetOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            user_agent: s!(USER_AGENT),
            timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

impl NetOptions {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specialization_parses_loosely() {
        assert_eq!("dentist".parse::<Specialization>(), Ok(Specialization::Dentist));
        assert_eq!("General Physician".parse::<Specialization>(), Ok(Specialization::GeneralPhysician));
        assert_eq!("general_physician".parse::<Specialization>(), Ok(Specialization::GeneralPhysician));
        assert!("Cardiologist".parse::<Specialization>().is_err());
    }

    #[test]
    fn page_limit_is_at_least_one() {
        let mut opts = ScrapeOptions::new("Bangalore", Specialization::Dentist);
        opts.max_pages = 0;
        assert_eq!(opts.page_limit(), 1);
    }
}
