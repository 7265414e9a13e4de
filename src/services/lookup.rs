use crate::domain::models::LookupRecord;
use crate::services::config::Settings;
use crate::services::{scrape, validate};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, COOKIE, ORIGIN, REFERER};

const FORM_TOKEN: &str = "8080";
const FORM_CAPTCHA: &str = "TELP";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

// The upstream form only answers requests that look like its own page.
const PAGE_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const PAGE_LANGUAGE: &str = "zh-CN,zh;q=0.9,en;q=0.8";
const PAGE_COOKIE: &str = "_ga=GA1.1.1490931985.1749299309; \
    _ga_8PSJV35D6D=GS2.1.s1749299309$o1$g1$t1749299370$j60$l0$h0; \
    PHPSESSID=pd0ch7hgjf5oua22hgqo45eci6";

#[derive(thiserror::Error, Debug)]
pub enum LookupError {
    #[error("request timed out")]
    Timeout,
    #[error("upstream returned status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(reqwest::Error),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LookupError::Timeout
        } else {
            LookupError::Network(err)
        }
    }
}

/// Upstream lookup client. One blocking form POST per queried address.
pub struct LookupClient {
    http: Client,
    url: String,
}

impl LookupClient {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ORIGIN, HeaderValue::from_str(origin_of(&settings.lookup_url))?);
        headers.insert(REFERER, HeaderValue::from_str(&settings.lookup_url)?);
        headers.insert(ACCEPT, HeaderValue::from_static(PAGE_ACCEPT));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(PAGE_LANGUAGE));
        headers.insert(COOKIE, HeaderValue::from_static(PAGE_COOKIE));

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(settings.timeout)
            .build()?;
        Ok(Self {
            http,
            url: settings.lookup_url.clone(),
        })
    }

    /// Looks up a single address. Failures are folded into the record;
    /// this never aborts a batch.
    pub fn query(&self, ip: &str) -> LookupRecord {
        if !validate::is_ipv4(ip) {
            return LookupRecord::failure(ip, format!("invalid IPv4 address: {ip}"));
        }
        let html = match self.fetch(ip) {
            Ok(html) => html,
            Err(err) => return LookupRecord::failure(ip, err.to_string()),
        };
        match scrape::parse_result_box(&html) {
            Ok(Some(parsed)) => LookupRecord::success(ip, parsed.fields, parsed.raw),
            Ok(None) => LookupRecord::failure(ip, "result block not found in response"),
            Err(err) => LookupRecord::failure(ip, err.to_string()),
        }
    }

    fn fetch(&self, ip: &str) -> Result<String, LookupError> {
        let params = [("ip", ip), ("token", FORM_TOKEN), ("captcha", FORM_CAPTCHA)];
        let resp = self.http.post(&self.url).form(&params).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }
        Ok(resp.text()?)
    }
}

/// `http://host:port/path` -> `http://host:port` for the Origin header.
fn origin_of(url: &str) -> &str {
    if let Some(scheme_end) = url.find("://") {
        let rest = &url[scheme_end + 3..];
        if let Some(slash) = rest.find('/') {
            return &url[..scheme_end + 3 + slash];
        }
    }
    url
}
