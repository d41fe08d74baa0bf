extern crate log;

use crate::{
    error::Result,
    judge::{CodeExtractor, PatternExtractor, Session},
    layout::Layout,
    site::Category,
    template::Renderer,
    types::ProblemRecord,
};
use log::{debug, info};
use std::path::PathBuf;

#[derive(Debug, PartialEq)]
pub enum Outcome {
    Skipped,
    Written(PathBuf),
}

#[derive(Debug, Default, PartialEq)]
pub struct Summary {
    pub written: usize,
    pub skipped: usize,
}

pub struct Generator<'a> {
    session: &'a Session,
    layout: &'a Layout,
    renderer: Renderer,
    extractor: Box<dyn CodeExtractor>,
}

impl<'a> Generator<'a> {
    pub fn new(session: &'a Session, layout: &'a Layout, renderer: Renderer) -> Self {
        Self::with_extractor(session, layout, renderer, Box::new(PatternExtractor::new()))
    }
    pub fn with_extractor(
        session: &'a Session,
        layout: &'a Layout,
        renderer: Renderer,
        extractor: Box<dyn CodeExtractor>,
    ) -> Self {
        Generator {
            session,
            layout,
            renderer,
            extractor,
        }
    }

    /// Code that goes into the problem's file, `None` for paid problems.
    pub async fn resolve(&self, problem: &ProblemRecord) -> Result<Option<String>> {
        if problem.paid_only {
            return Ok(None);
        }
        let code = if problem.is_solved() {
            debug!("{}: fetching last accepted submission", problem);
            self.session
                .submission_code(&problem.slug, self.extractor.as_ref())
                .await?
        } else {
            debug!("{}: fetching starter code", problem);
            self.session
                .snippet(&problem.slug, self.renderer.language())
                .await?
        };
        Ok(Some(code))
    }

    pub async fn generate(&self, problem: &ProblemRecord) -> Result<Outcome> {
        match self.resolve(problem).await? {
            None => Ok(Outcome::Skipped),
            Some(code) => Ok(Outcome::Written(self.layout.write(
                problem,
                self.renderer.language().extension,
                &self.renderer.render(problem, &code)?,
            )?)),
        }
    }

    /// Generates every problem in order and stops at the first failure.
    /// Files written before the failure are kept.
    pub async fn run<F>(&self, problems: &[ProblemRecord], mut call: F) -> Result<Summary>
    where
        F: FnMut(usize, &ProblemRecord, &Outcome),
    {
        let mut summary = Summary::default();
        for (index, problem) in problems.iter().enumerate() {
            let outcome = self.generate(problem).await?;
            match outcome {
                Outcome::Skipped => summary.skipped += 1,
                Outcome::Written(_) => summary.written += 1,
            }
            call(index, problem, &outcome);
        }
        Ok(summary)
    }

    /// Whole archive of a category. `Ok(None)` when the difficulty folders
    /// already exist, in which case nothing is requested or written.
    pub async fn archive<F>(&self, category: Category, call: F) -> Result<Option<Summary>>
    where
        F: FnMut(usize, &ProblemRecord, &Outcome),
    {
        if !self.layout.prepare()? {
            info!("{} already holds an archive", self.layout.root().display());
            return Ok(None);
        }
        let problems = self.session.list_problems(category).await?;
        self.run(&problems, call).await.map(Some)
    }
}
