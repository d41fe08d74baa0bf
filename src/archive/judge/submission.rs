extern crate log;
extern crate serde;

use super::{extract::CodeExtractor, Session};
use crate::{
    config::submission::PAGE_SIZE,
    error::{Error, Kind, Result},
    types::SubmissionRef,
};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

const SUBMISSIONS_QUERY: &str = r#"
query Submissions($offset: Int!, $limit: Int!, $questionSlug: String!) {
    submissionList(offset: $offset, limit: $limit, questionSlug: $questionSlug) {
        lastKey
        hasNext
        submissions {
            id
        }
    }
}
"#;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageVariables<'a> {
    offset: usize,
    limit: usize,
    question_slug: &'a str,
}
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageData {
    submission_list: Page,
}
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Page {
    has_next: bool,
    submissions: Vec<SubmissionRef>,
}

/// The api lists submissions newest first, so the head of the list is the
/// latest one. No local sorting happens.
pub fn latest(submissions: Vec<SubmissionRef>, slug: &str) -> Result<SubmissionRef> {
    submissions
        .into_iter()
        .next()
        .ok_or_else(|| Error::with_kind(Kind::NoSubmission(slug.to_string())))
}

impl Session {
    /// Every submission of the problem in server order.
    pub async fn submissions(&self, slug: &str) -> Result<Vec<SubmissionRef>> {
        let mut ret = Vec::new();
        let mut offset = 0;
        loop {
            let page: PageData = self
                .graphql(
                    SUBMISSIONS_QUERY,
                    PageVariables {
                        offset,
                        limit: PAGE_SIZE,
                        question_slug: slug,
                    },
                )
                .await?;
            let Page {
                has_next,
                submissions,
            } = page.submission_list;
            debug!(
                "{}: {} submissions at offset {}",
                slug,
                submissions.len(),
                offset
            );
            if submissions.is_empty() {
                if has_next {
                    warn!("{}: empty page at offset {} claims more", slug, offset);
                }
                break;
            }
            offset += submissions.len();
            ret.extend(submissions);
            if !has_next {
                break;
            }
        }
        Ok(ret)
    }
    pub async fn latest_submission(&self, slug: &str) -> Result<SubmissionRef> {
        latest(self.submissions(slug).await?, slug)
    }
    pub async fn submission_page(&self, submission: &SubmissionRef) -> Result<String> {
        self.get_text(self.endpoints.submission(&submission.id)?)
            .await
    }
    /// Source of the latest submission of the problem.
    pub async fn submission_code(
        &self,
        slug: &str,
        extractor: &dyn CodeExtractor,
    ) -> Result<String> {
        let submission = self.latest_submission(slug).await?;
        let page = self.submission_page(&submission).await?;
        debug!("{}: extracting code of submission {}", slug, submission.id);
        extractor.extract(&page)
    }
}
