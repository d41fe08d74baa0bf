extern crate log;
extern crate serde;
extern crate serde_json;

use super::Session;
use crate::{
    error::Result,
    site::Category,
    types::{Difficulty, Id, ProblemRecord, Status},
};
use log::info;
use serde::Deserialize;
use std::convert::TryFrom;

#[derive(Deserialize)]
struct Listing {
    stat_status_pairs: Vec<Pair>,
}
#[derive(Deserialize)]
struct Pair {
    stat: Stat,
    status: Option<String>,
    difficulty: Level,
    #[serde(default)]
    paid_only: bool,
}
#[derive(Deserialize)]
struct Stat {
    frontend_question_id: Id,
    #[serde(rename = "question__title_slug")]
    slug: String,
    #[serde(rename = "question__title", default)]
    title: Option<String>,
}
#[derive(Deserialize)]
struct Level {
    level: u8,
}

fn into_record(pair: Pair) -> Result<ProblemRecord> {
    Ok(ProblemRecord {
        id: pair.stat.frontend_question_id,
        slug: pair.stat.slug,
        title: pair.stat.title,
        difficulty: Difficulty::try_from(pair.difficulty.level)?,
        status: Status::from(pair.status.as_deref()),
        paid_only: pair.paid_only,
    })
}

pub fn parse_listing(body: &str) -> Result<Vec<ProblemRecord>> {
    let listing: Listing = serde_json::from_str(body)?;
    listing
        .stat_status_pairs
        .into_iter()
        .map(into_record)
        .collect()
}

impl Session {
    pub async fn list_problems(&self, category: Category) -> Result<Vec<ProblemRecord>> {
        let problems = parse_listing(&self.get_text(self.endpoints.problems(category)?).await?)?;
        info!("Listed {} {} problems", problems.len(), category);
        Ok(problems)
    }
}
