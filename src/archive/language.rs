use crate::error::{Error, Kind, Result};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    CLike,
    Hash,
    Percent,
    Semicolon,
}
impl CommentStyle {
    /// Opening, continuation and closing line of the header comment.
    pub fn block(self) -> (&'static str, &'static str, &'static str) {
        match self {
            CommentStyle::CLike => ("/*", " *", " */"),
            CommentStyle::Hash => ("#", "#", "#"),
            CommentStyle::Percent => ("%", "%", "%"),
            CommentStyle::Semicolon => (";", ";", ";"),
        }
    }
    pub fn line(self) -> &'static str {
        match self {
            CommentStyle::CLike => "//",
            CommentStyle::Hash => "#",
            CommentStyle::Percent => "%",
            CommentStyle::Semicolon => ";",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub slug: &'static str,
    pub extension: &'static str,
    pub comment: CommentStyle,
}

const LANGUAGES: &[Language] = &[
    lang("cpp", "cpp", CommentStyle::CLike),
    lang("java", "java", CommentStyle::CLike),
    lang("python", "py", CommentStyle::Hash),
    lang("python3", "py", CommentStyle::Hash),
    lang("c", "c", CommentStyle::CLike),
    lang("csharp", "cs", CommentStyle::CLike),
    lang("javascript", "js", CommentStyle::CLike),
    lang("typescript", "ts", CommentStyle::CLike),
    lang("php", "php", CommentStyle::CLike),
    lang("swift", "swift", CommentStyle::CLike),
    lang("kotlin", "kt", CommentStyle::CLike),
    lang("dart", "dart", CommentStyle::CLike),
    lang("golang", "go", CommentStyle::CLike),
    lang("ruby", "rb", CommentStyle::Hash),
    lang("scala", "scala", CommentStyle::CLike),
    lang("rust", "rs", CommentStyle::CLike),
    lang("racket", "rkt", CommentStyle::Semicolon),
    lang("erlang", "erl", CommentStyle::Percent),
    lang("elixir", "ex", CommentStyle::Hash),
];

const fn lang(slug: &'static str, extension: &'static str, comment: CommentStyle) -> Language {
    Language {
        slug,
        extension,
        comment,
    }
}

impl Language {
    pub fn find(slug: &str) -> Option<Language> {
        LANGUAGES.iter().find(|l| l.slug == slug).copied()
    }
}
impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Language::find(s).ok_or_else(|| Error::with_kind(Kind::Language(s.to_string())))
    }
}
impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug)
    }
}
