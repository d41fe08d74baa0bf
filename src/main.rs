extern crate clap;
extern crate pretty_env_logger;
extern crate termcolor;
extern crate tokio;

use clap::{crate_description, crate_name, Arg, Command};
use leetcode_archive::config::language::DEFAULT_LANGUAGE;
use pretty_env_logger::init_timed;
use std::{io::Write, process};
use termcolor::{Color, ColorChoice, StandardStream, WriteColor};

#[macro_use]
mod color;
mod command {
    pub mod generate;
}
mod write;

use command::generate::{generate, Options};

#[allow(unused_must_use)]
#[tokio::main]
async fn main() {
    init_timed();
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let app = Command::new(crate_name!())
        .about(crate_description!())
        .version(get_version!("version"))
        .long_version(get_version!("long_version"))
        .arg(
            Arg::new("cookies")
                .long("cookies")
                .takes_value(true)
                .default_value("cookies.json")
                .help("Json file holding the session and csrfToken cookies"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .takes_value(true)
                .default_value(".")
                .help("Directory receiving the difficulty folders"),
        )
        .arg(
            Arg::new("site")
                .long("site")
                .takes_value(true)
                .default_value("us")
                .help("leetcode.com (us) or leetcode-cn.com (cn)"),
        )
        .arg(
            Arg::new("category")
                .long("category")
                .takes_value(true)
                .default_value("algorithms")
                .help("Problem set: all, algorithms, database, shell or concurrency"),
        )
        .arg(
            Arg::new("language")
                .long("language")
                .short('l')
                .takes_value(true)
                .default_value(DEFAULT_LANGUAGE)
                .help("Language slug of starter code and generated files"),
        )
        .arg(
            Arg::new("template")
                .long("template")
                .takes_value(true)
                .help("Handlebars template replacing the built-in file layout"),
        )
        .get_matches();

    let options = match Options::from_matches(&app) {
        Ok(v) => v,
        Err(e) => {
            write_error!(&mut stdout, "Error", "{}", e);
            stdout.reset();
            process::exit(2);
        }
    };
    let ok = generate(&mut stdout, &options).await;
    stdout.reset();
    if !ok {
        process::exit(1);
    }
}
