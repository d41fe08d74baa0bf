extern crate log;
extern crate reqwest;
extern crate serde;
extern crate serde_json;

use super::{session::check_status, Session};
use crate::error::{network_error, Error, Kind, Result};
use log::debug;
use reqwest::{
    header::{HeaderValue, ORIGIN},
    StatusCode,
};
use serde::{
    de::{DeserializeOwned, IgnoredAny},
    Deserialize, Serialize,
};

#[derive(Serialize)]
struct Request<'a, V> {
    query: &'a str,
    variables: V,
}
#[derive(Deserialize)]
struct Response<T> {
    data: Option<T>,
    errors: Option<Vec<Message>>,
}
#[derive(Deserialize)]
struct Message {
    message: String,
}

pub(super) fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    let response: Response<T> = serde_json::from_str(body)?;
    match (response.data, response.errors) {
        (_, Some(errors)) if !errors.is_empty() => Err(Error::with_kind(Kind::GraphQL(
            errors.into_iter().map(|m| m.message).collect(),
        ))),
        (Some(data), _) => Ok(data),
        (None, _) => Err(Error::with_description(
            Kind::GraphQL(Vec::new()),
            "response carries no data",
        )),
    }
}

/// Error for a non-success answer. Messages in the body take precedence over
/// the bare status.
pub(super) fn rejected(status: StatusCode, url: &str, body: &str) -> Error {
    match serde_json::from_str::<Response<IgnoredAny>>(body) {
        Ok(Response {
            errors: Some(errors),
            ..
        }) if !errors.is_empty() => Error::with_description(
            Kind::GraphQL(errors.into_iter().map(|m| m.message).collect()),
            format!("{} {}", status, url),
        ),
        _ => Error::with_description(Kind::Status(status), url),
    }
}

impl Session {
    pub(super) async fn graphql<V, T>(&self, query: &str, variables: V) -> Result<T>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let url = self.endpoints.graphql()?;
        debug!("POST {}", url);
        let origin = self.endpoints.base().origin().ascii_serialization();
        let response = self
            .client
            .post(url)
            .header(ORIGIN, HeaderValue::from_str(&origin)?)
            .json(&Request { query, variables })
            .send()
            .await
            .map_err(network_error)?;
        let status = response.status();
        if status.is_success() || status.is_redirection() {
            return decode(&check_status(response)?.text().await.map_err(network_error)?);
        }
        let url = response.url().to_string();
        let body = response.text().await.map_err(network_error)?;
        Err(rejected(status, &url, &body))
    }
}
