extern crate log;
extern crate reqwest;

use crate::{
    config::session::{CSRF_COOKIE, FIREFOX_UA, SESSION_COOKIE, VERBOSE},
    credentials::Credentials,
    error::{network_error, Error, Kind, Result},
    site::Endpoints,
};
use log::debug;
use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    redirect::Policy,
    Client, Response, Url,
};

/// Authenticated client. The loaded cookies and the csrf header are attached
/// unchanged to every request, `Set-Cookie` answers are ignored and redirects
/// are never followed.
pub struct Session {
    pub(super) client: Client,
    pub(super) endpoints: Endpoints,
}
impl Session {
    pub fn new(credentials: &Credentials, endpoints: Endpoints) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!(
                "{}={}; {}={}",
                SESSION_COOKIE, credentials.session, CSRF_COOKIE, credentials.csrf_token
            ))?,
        );
        headers.insert(
            "X-Requested-With",
            HeaderValue::from_static("XMLHttpRequest"),
        );
        headers.insert(
            "X-CSRFToken",
            HeaderValue::from_str(&credentials.csrf_token)?,
        );
        headers.insert(
            header::REFERER,
            HeaderValue::from_str(endpoints.base().as_str())?,
        );

        Ok(Session {
            client: Client::builder()
                .user_agent(FIREFOX_UA)
                .default_headers(headers)
                .redirect(Policy::none())
                .connection_verbose(VERBOSE)
                .build()
                .map_err(|e| Error::with_kind(Kind::Builder(e)))?,
            endpoints,
        })
    }

    pub(super) async fn get_text(&self, url: Url) -> Result<String> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await.map_err(network_error)?;
        check_status(response)?.text().await.map_err(network_error)
    }
}

/// A redirect means the session cookie was not accepted.
pub(super) fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_redirection() {
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        Err(Error::with_kind(Kind::Redirect(status, location)))
    } else if !status.is_success() {
        Err(Error::with_description(
            Kind::Status(status),
            response.url().as_str(),
        ))
    } else {
        Ok(response)
    }
}
