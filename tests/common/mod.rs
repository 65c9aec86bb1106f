// tests/common/mod.rs
//
// Synthetic listing pages shaped like the directory's markup.
#![allow(dead_code)]

use std::cell::RefCell;

use practo_scrape::core::net::Fetch;
use practo_scrape::TransportError;

pub struct Card<'a> {
    pub name: Option<&'a str>,
    pub specialty: Option<&'a str>,
    pub rating: Option<&'a str>,
}

pub fn card<'a>(name: &'a str, specialty: &'a str, rating: &'a str) -> Card<'a> {
    Card { name: Some(name), specialty: Some(specialty), rating: Some(rating) }
}

pub fn page(total: Option<&str>, cards: &[Card], next: bool) -> String {
    let mut html = String::from("<html><body>\n");
    if let Some(t) = total {
        html.push_str(&format!(
            r#"<div class="u-d-flex flex-ai-center u-spacer--top-md"><h1>{t}</h1></div>"#
        ));
        html.push('\n');
    }
    for c in cards {
        html.push_str(r#"<div class="listing-doctor-card"><div class="info-section">"#);
        if let Some(n) = c.name {
            html.push_str(&format!(r#"<a href="/doctor/x"><h2 class="doctor-name">{n}</h2></a>"#));
        }
        if let Some(s) = c.specialty {
            html.push_str(&format!(r#"<div class="u-grey_3-text"><span>{s}</span></div>"#));
        }
        if let Some(r) = c.rating {
            html.push_str(&format!(
                r#"<a class="uv2-spacer--md-right" href="/reviews"><span>{r}</span></a>"#
            ));
        }
        html.push_str("</div></div>\n");
    }
    if next {
        html.push_str(r#"<ul class="pagination"><li><a class="c-next-btn" href="?page=next">Next</a></li></ul>"#);
    }
    html.push_str("</body></html>");
    html
}

/// Serves pre-baked responses in order and records every request.
pub struct ScriptedFetcher {
    responses: RefCell<Vec<Result<String, TransportError>>>,
    pub calls: RefCell<Vec<(String, String, u32)>>,
}

impl ScriptedFetcher {
    pub fn new(mut responses: Vec<Result<String, TransportError>>) -> Self {
        responses.reverse();
        Self { responses: RefCell::new(responses), calls: RefCell::new(Vec::new()) }
    }

    pub fn pages_requested(&self) -> Vec<u32> {
        self.calls.borrow().iter().map(|(_, _, p)| *p).collect()
    }
}

impl Fetch for ScriptedFetcher {
    fn fetch(&self, location: &str, specialization: &str, page: u32) -> Result<String, TransportError> {
        self.calls.borrow_mut().push((location.to_string(), specialization.to_string(), page));
        self.responses
            .borrow_mut()
            .pop()
            .unwrap_or_else(|| panic!("no scripted response for page {page}"))
    }
}

/// Always links to another page.
pub struct EndlessFetcher;

impl Fetch for EndlessFetcher {
    fn fetch(&self, _location: &str, _specialization: &str, page: u32) -> Result<String, TransportError> {
        let name = format!("Dr. Page{page}");
        Ok(page_html_one(&name))
    }
}

fn page_html_one(name: &str) -> String {
    page(Some("Endless"), &[card(name, "Dentist", "90%")], true)
}

pub fn status_error(status: u16) -> TransportError {
    TransportError::Status { url: "https://www.practo.com/x/Dentist?page=1".into(), status }
}
