extern crate log;

use crate::{
    config::layout::SOLVED_FOLDER,
    error::Result,
    types::{Difficulty, ProblemRecord},
};
use log::info;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// `<id>.<slug>.<ext>`, with only the first hyphen of the slug turned into
/// an underscore.
pub fn file_name(problem: &ProblemRecord, extension: &str) -> String {
    format!(
        "{}.{}.{}",
        problem.id,
        problem.slug.replacen('-', "_", 1),
        extension
    )
}

/// Output tree: one folder per difficulty, each with a `solved` child.
pub struct Layout {
    root: PathBuf,
}
impl Layout {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Layout { root: root.into() }
    }
    pub fn root(&self) -> &Path {
        &self.root
    }
    pub fn folder(&self, difficulty: Difficulty, solved: bool) -> PathBuf {
        let dir = self.root.join(difficulty.folder());
        if solved {
            dir.join(SOLVED_FOLDER)
        } else {
            dir
        }
    }
    pub fn path_for(&self, problem: &ProblemRecord, extension: &str) -> PathBuf {
        self.folder(problem.difficulty, problem.is_solved())
            .join(file_name(problem, extension))
    }

    /// Folders left over from an earlier run.
    pub fn existing(&self) -> Vec<PathBuf> {
        Difficulty::all()
            .iter()
            .map(|d| self.folder(*d, false))
            .filter(|p| p.exists())
            .collect()
    }
    /// Creates the tree unless an earlier run left folders behind, in which
    /// case nothing is touched and `false` is returned.
    pub fn prepare(&self) -> Result<bool> {
        if !self.existing().is_empty() {
            return Ok(false);
        }
        self.create()?;
        Ok(true)
    }
    pub fn create(&self) -> Result<()> {
        for d in Difficulty::all().iter() {
            fs::create_dir(self.folder(*d, false))?;
            fs::create_dir(self.folder(*d, true))?;
        }
        Ok(())
    }
    pub fn write(&self, problem: &ProblemRecord, extension: &str, content: &str) -> Result<PathBuf> {
        let path = self.path_for(problem, extension);
        fs::write(&path, content)?;
        info!("Written {}", path.display());
        Ok(path)
    }
}
