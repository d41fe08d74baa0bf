extern crate reqwest;

use crate::{
    config::site::{CN_BASE, US_BASE},
    error::{Error, Kind, Result},
    types::Id,
};
use reqwest::Url;
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    Us,
    Cn,
}
impl Site {
    pub fn base(self) -> &'static str {
        match self {
            Site::Us => US_BASE,
            Site::Cn => CN_BASE,
        }
    }
}
impl FromStr for Site {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, String> {
        match s {
            "us" => Ok(Site::Us),
            "cn" => Ok(Site::Cn),
            _ => Err(format!("unknown site {}, expected us or cn", s)),
        }
    }
}

/// Problem set listed by the rest api.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    All,
    Algorithms,
    Database,
    Shell,
    Concurrency,
}
impl Category {
    pub fn key(self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Algorithms => "algorithms",
            Category::Database => "database",
            Category::Shell => "shell",
            Category::Concurrency => "concurrency",
        }
    }
}
impl Default for Category {
    fn default() -> Self {
        Category::Algorithms
    }
}
impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, String> {
        match s {
            "all" => Ok(Category::All),
            "algorithms" => Ok(Category::Algorithms),
            "database" => Ok(Category::Database),
            "shell" => Ok(Category::Shell),
            "concurrency" => Ok(Category::Concurrency),
            _ => Err(format!("unknown category {}", s)),
        }
    }
}
impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone)]
pub struct Endpoints {
    base: Url,
}
impl Endpoints {
    pub fn new(site: Site) -> Result<Self> {
        Self::with_base(site.base())
    }
    pub fn with_base(base: &str) -> Result<Self> {
        let base = Url::parse(base)
            .map_err(|e| Error::with_description(Kind::Url(base.to_string()), e.to_string()))?;
        Ok(Endpoints { base })
    }
    fn join(&self, path: &str) -> Result<Url> {
        self.base.join(path).map_err(|e| {
            Error::with_description(Kind::Url(format!("{}{}", self.base, path)), e.to_string())
        })
    }
    pub fn base(&self) -> &Url {
        &self.base
    }
    pub fn graphql(&self) -> Result<Url> {
        self.join("graphql")
    }
    pub fn problems(&self, category: Category) -> Result<Url> {
        self.join(&format!("api/problems/{}/", category.key()))
    }
    pub fn submission(&self, id: &Id) -> Result<Url> {
        self.join(&format!("submissions/detail/{}/", id))
    }
}
