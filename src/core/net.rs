// src/core/net.rs
//
// One blocking HTTPS GET per listing page. No retries, no cache.

use reqwest::blocking::Client;
use url::Url;

use crate::config::options::NetOptions;
use crate::error::TransportError;

/// Source of raw listing markup for one results page.
pub trait Fetch {
    fn fetch(&self, location: &str, specialization: &str, page: u32) -> Result<String, TransportError>;
}

/// `<base>/<location>/<specialization>?page=<n>`, with both path segments
/// percent-encoded (so "New Delhi" becomes `New%20Delhi`, '/' can't escape the segment).
pub fn build_url(base: &Url, location: &str, specialization: &str, page: u32) -> Result<Url, TransportError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| TransportError::Url(format!("{base} cannot carry path segments")))?
        .pop_if_empty()
        .push(location)
        .push(specialization);
    url.query_pairs_mut()
        .clear()
        .append_pair("page", &page.to_string());
    Ok(url)
}

pub struct HttpFetcher {
    client: Client,
    base: Url,
}

impl HttpFetcher {
    pub fn new(opts: &NetOptions) -> Result<Self, TransportError> {
        let base = Url::parse(&opts.base_url)
            .map_err(|e| TransportError::Url(format!("{}: {e}", opts.base_url)))?;

        let client = Client::builder()
            .user_agent(opts.user_agent.as_str())
            .timeout(opts.timeout())
            .build()
            .map_err(|source| TransportError::Request { url: opts.base_url.clone(), source })?;

        Ok(Self { client, base })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, location: &str, specialization: &str, page: u32) -> Result<String, TransportError> {
        let url = build_url(&self.base, location, specialization, page)?;
        logd!("Net: GET {}", url);

        let resp = self
            .client
            .get(url.clone())
            .send()
            .map_err(|source| TransportError::Request { url: url.to_string(), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TransportError::Status { url: url.to_string(), status: status.as_u16() });
        }

        resp.text()
            .map_err(|source| TransportError::Request { url: url.to_string(), source })
    }
}
