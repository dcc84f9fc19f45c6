// src/source/api.rs
use std::time::Duration;

use reqwest::blocking::Client;

use super::MemberDataSource;
use crate::config::consts::{API_KEY_HEADER, USER_AGENT};
use crate::config::options::SourceOptions;
use crate::error::{Error, Result};
use crate::model::Chamber;

/// Congress members REST API (`{base}/{congress}/{chamber}/members.json`).
pub struct ApiSource {
    base: String,
    congress: u32,
    api_key: String,
    client: Client,
}

impl ApiSource {
    pub fn new(opts: &SourceOptions) -> Result<Self> {
        let api_key = opts.api_key.clone().ok_or(Error::MissingApiKey)?;
        Ok(Self {
            base: s!(opts.api_base.trim_end_matches('/')),
            congress: opts.congress,
            api_key,
            client: http_client(opts.timeout_secs)?,
        })
    }

    pub fn url(&self, chamber: Chamber) -> String {
        format!("{}/{}/{}/members.json", self.base, self.congress, chamber.slug())
    }
}

impl MemberDataSource for ApiSource {
    fn describe(&self) -> String {
        format!("API ({}th congress)", self.congress)
    }

    fn fetch_raw(&self, chamber: Chamber) -> Result<String> {
        let url = self.url(chamber);
        logd!("HTTP: GET {url}");
        get_text(&self.client, &url, Some((API_KEY_HEADER, &self.api_key)))
    }
}

pub(super) fn http_client(timeout_secs: u64) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(USER_AGENT)
        .gzip(true)
        .build()
        .map_err(Error::from)
}

/// GET `url` and return the body; any non-2xx status is an error.
pub(super) fn get_text(client: &Client, url: &str, header: Option<(&str, &str)>) -> Result<String> {
    let mut req = client.get(url);
    if let Some((name, value)) = header {
        req = req.header(name, value);
    }
    let resp = req.send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Http { status: status.as_u16(), url: s!(url) });
    }
    Ok(resp.text()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_uses_congress_and_chamber() {
        let opts = SourceOptions {
            api_key: Some(s!("k")),
            api_base: s!("https://example.test/congress/v1/"),
            ..SourceOptions::default()
        };
        let api = ApiSource::new(&opts).unwrap();
        assert_eq!(api.url(Chamber::House), "https://example.test/congress/v1/117/house/members.json");
    }

    #[test]
    fn missing_key_is_reported() {
        let opts = SourceOptions { api_key: None, ..SourceOptions::default() };
        assert!(matches!(ApiSource::new(&opts), Err(Error::MissingApiKey)));
    }
}
