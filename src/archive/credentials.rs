extern crate serde;
extern crate serde_json;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::{fs::File, io::Read, path::Path};

/// Session cookie and csrf token copied out of a logged in browser.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Credentials {
    pub session: String,
    #[serde(rename = "csrfToken")]
    pub csrf_token: String,
}

pub fn from_reader<R: Read>(rdr: R) -> Result<Credentials> {
    Ok(serde_json::from_reader(rdr)?)
}
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Credentials> {
    from_reader(File::open(path)?)
}
