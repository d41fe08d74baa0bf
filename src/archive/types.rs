extern crate serde;

use crate::{
    config::layout::DIFFICULTY_FOLDERS,
    error::{Error, Kind},
};
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt};

/// Identifier that the api sends either as a number or as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawId")]
pub struct Id(pub String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}
impl From<RawId> for Id {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Number(n) => Id(n.to_string()),
            RawId::Text(s) => Id(s),
        }
    }
}
impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}
impl Difficulty {
    pub fn folder(self) -> &'static str {
        DIFFICULTY_FOLDERS[self as usize]
    }
    pub fn all() -> [Difficulty; 3] {
        [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }
}
impl TryFrom<u8> for Difficulty {
    type Error = Error;

    fn try_from(level: u8) -> Result<Self, Error> {
        match level {
            1 => Ok(Difficulty::Easy),
            2 => Ok(Difficulty::Medium),
            3 => Ok(Difficulty::Hard),
            _ => Err(Error::with_kind(Kind::Difficulty(level))),
        }
    }
}
impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.folder())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Accepted,
    Attempted,
    Unattempted,
}
impl From<Option<&str>> for Status {
    fn from(raw: Option<&str>) -> Self {
        match raw {
            Some("ac") => Status::Accepted,
            Some("notac") => Status::Attempted,
            _ => Status::Unattempted,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProblemRecord {
    pub id: Id,
    pub slug: String,
    pub title: Option<String>,
    pub difficulty: Difficulty,
    pub status: Status,
    pub paid_only: bool,
}
impl ProblemRecord {
    pub fn is_solved(&self) -> bool {
        self.status == Status::Accepted
    }
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.slug)
    }
}
impl fmt::Display for ProblemRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.id, self.slug)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubmissionRef {
    pub id: Id,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSnippet {
    pub lang_slug: String,
    pub code: String,
}
