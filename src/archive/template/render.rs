extern crate handlebars;
extern crate serde;

use super::Template;
use crate::{
    error::{Error, Kind, Result},
    language::Language,
    types::ProblemRecord,
};
use handlebars::{no_escape, Handlebars};
use serde::Serialize;

const NAME: &str = "solution";

#[derive(Serialize)]
struct Param<'a> {
    id: &'a str,
    slug: &'a str,
    title: &'a str,
    difficulty: &'a str,
    lang: &'a str,
    code: &'a str,
    block_open: &'a str,
    block_line: &'a str,
    block_close: &'a str,
    comment: &'a str,
}

pub struct Renderer {
    language: Language,
    engine: Handlebars<'static>,
}
impl Renderer {
    pub fn new(template: &Template, language: Language) -> Result<Self> {
        let mut engine = Handlebars::new();
        engine.register_escape_fn(no_escape);
        engine
            .register_template_string(NAME, template.content.as_str())
            .map_err(|e| Error::with_kind(Kind::Template(e)))?;
        Ok(Renderer { language, engine })
    }
    pub fn language(&self) -> &Language {
        &self.language
    }
    pub fn render(&self, problem: &ProblemRecord, code: &str) -> Result<String> {
        let (block_open, block_line, block_close) = self.language.comment.block();
        self.engine
            .render(
                NAME,
                &Param {
                    id: &problem.id.0,
                    slug: &problem.slug,
                    title: problem.display_title(),
                    difficulty: problem.difficulty.folder(),
                    lang: self.language.slug,
                    code,
                    block_open,
                    block_line,
                    block_close,
                    comment: self.language.comment.line(),
                },
            )
            .map_err(|e| Error::with_kind(Kind::Render(e)))
    }
}
