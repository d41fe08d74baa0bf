extern crate clap;
extern crate termcolor;

use crate::write::write_result;
use clap::ArgMatches;
use leetcode_archive::{
    credentials,
    error::Result,
    generator::{Generator, Outcome, Summary},
    judge::Session,
    language::Language,
    layout::Layout,
    site::{Category, Endpoints, Site},
    template::{Renderer, Template},
};
use std::{io::Write, path::PathBuf};
use termcolor::{Color, StandardStream};

pub struct Options {
    pub cookies: PathBuf,
    pub output: PathBuf,
    pub site: Site,
    pub category: Category,
    pub language: Language,
    pub template: Option<PathBuf>,
}
impl Options {
    pub fn from_matches(matches: &ArgMatches) -> std::result::Result<Self, String> {
        let value = |name: &str| matches.value_of(name).unwrap_or_default().to_string();
        Ok(Options {
            cookies: PathBuf::from(value("cookies")),
            output: PathBuf::from(value("output")),
            site: value("site").parse()?,
            category: value("category").parse()?,
            language: value("language").parse().map_err(|e| format!("{}", e))?,
            template: matches.value_of("template").map(PathBuf::from),
        })
    }
}

#[allow(unused_must_use)]
async fn run(
    stdout: &mut StandardStream,
    options: &Options,
    layout: &Layout,
) -> Result<Option<Summary>> {
    let credentials = credentials::from_path(&options.cookies)?;
    let template = match &options.template {
        Some(path) => Template::from_path(path)?,
        None => Template::default(),
    };
    let renderer = Renderer::new(&template, options.language)?;
    let session = Session::new(&credentials, Endpoints::new(options.site)?)?;

    let generator = Generator::new(&session, layout, renderer);
    let summary = generator
        .archive(options.category, |index, problem, outcome| match outcome {
            Outcome::Written(path) => write_progress!(
                stdout,
                "Written",
                "[{}] {}",
                index + 1,
                path.display()
            ),
            Outcome::Skipped => write_skip!(
                stdout,
                "Skipped",
                "[{}] {} is paid only",
                index + 1,
                problem
            ),
        })
        .await?;
    if summary.is_none() {
        write_info!(
            stdout,
            "Info",
            "you already have the folders, please manually delete them to create new ones"
        );
        for path in layout.existing() {
            write_info!(stdout, "Exists", "{}", path.display());
        }
    }
    Ok(summary)
}

/// Returns false when the run failed part way.
#[allow(unused_must_use)]
pub async fn generate(stdout: &mut StandardStream, options: &Options) -> bool {
    let layout = Layout::new(&options.output);
    let result = run(stdout, options, &layout).await;
    write_result(stdout, result, |s| match s {
        Some(s) => format!(
            "Written {} files into {}, skipped {} paid problems",
            s.written,
            layout.root().display(),
            s.skipped
        ),
        None => String::from("Nothing written"),
    })
}
