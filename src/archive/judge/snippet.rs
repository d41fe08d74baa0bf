extern crate log;
extern crate serde;

use super::Session;
use crate::{error::Result, language::Language, types::CodeSnippet};
use log::warn;
use serde::{Deserialize, Serialize};

const QUESTION_QUERY: &str = r#"
query getQuestionDetail($titleSlug: String!) {
    question(titleSlug: $titleSlug) {
        codeSnippets {
            langSlug
            code
        }
    }
}
"#;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QuestionVariables<'a> {
    title_slug: &'a str,
}
#[derive(Deserialize)]
struct QuestionData {
    question: Option<Question>,
}
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Question {
    code_snippets: Option<Vec<CodeSnippet>>,
}

/// Code of the first snippet in `language`, empty when there is none.
pub fn select_snippet(snippets: Option<Vec<CodeSnippet>>, language: &Language) -> String {
    snippets
        .unwrap_or_default()
        .into_iter()
        .find(|s| s.lang_slug == language.slug)
        .map(|s| s.code)
        .unwrap_or_default()
}

impl Session {
    pub async fn snippet(&self, slug: &str, language: &Language) -> Result<String> {
        let data: QuestionData = self
            .graphql(QUESTION_QUERY, QuestionVariables { title_slug: slug })
            .await?;
        let snippets = match data.question {
            Some(q) => q.code_snippets,
            None => {
                warn!("{}: question not found, using empty snippet", slug);
                None
            }
        };
        Ok(select_snippet(snippets, language))
    }
}
