use crate::{Error, Result};
use std::future::Future;
use std::path::PathBuf;

pub trait KeySource {
    fn load_keys(&self) -> impl Future<Output = Result<Vec<String>>>;
}

pub struct FileKeySource {
    path: PathBuf,
}

impl FileKeySource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl KeySource for FileKeySource {
    async fn load_keys(&self) -> Result<Vec<String>> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| Error::ReadKeyFile(self.path.clone(), e))?;

        Ok(parse_keys(&contents))
    }
}

/// One key per line. Surrounding whitespace is trimmed and blank lines are
/// dropped. Order and duplicates are kept.
pub fn parse_keys(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}
