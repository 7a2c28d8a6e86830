use anyhow::Context;
use clap::Parser;
use std::{fs, io::Write, path::PathBuf};

#[derive(Debug, Parser)]
#[command(name = "line-grep", version, about = "Print lines of FILE that contain PATTERN")]
pub struct Cli {
    /// File to search.
    pub file: PathBuf,

    /// Substring to look for. Matching is case-sensitive.
    pub pattern: String,
}

impl Cli {
    pub fn run(self, out: &mut dyn Write) -> anyhow::Result<()> {
        let contents = fs::read_to_string(&self.file)
            .with_context(|| format!("Failed to read {}", self.file.display()))?;

        for line in matching_lines(&contents, &self.pattern) {
            writeln!(out, "{line}").context("Failed to write to stdout")?;
        }

        Ok(())
    }
}

/// Lines of `contents` (split on `\n`) that contain `pattern`, in file order.
pub fn matching_lines<'a>(contents: &'a str, pattern: &'a str) -> impl Iterator<Item = &'a str> {
    contents.split('\n').filter(move |line| line.contains(pattern))
}
