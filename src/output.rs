//! CI output emission
//!
//! A new tag is printed for humans and published as the `new-version`
//! step output. Nothing is written when no release is needed.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::release::Decision;

/// Step output key carrying the new tag
pub const OUTPUT_KEY: &str = "new-version";

pub struct OutputEmitter {
    github_output: Option<PathBuf>,
}

impl OutputEmitter {
    /// `github_output` is the file named by `GITHUB_OUTPUT`, if any
    pub fn new(github_output: Option<PathBuf>) -> Self {
        Self { github_output }
    }

    /// Publish the decision
    ///
    /// Without an output file the legacy `::set-output` workflow command is
    /// printed instead.
    pub fn emit<W: Write>(&self, decision: &Decision, stdout: &mut W) -> io::Result<()> {
        let Some(tag) = decision.new_tag() else {
            return Ok(());
        };

        match &self.github_output {
            Some(path) => {
                debug!("Appending {} to {}", OUTPUT_KEY, path.display());
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                writeln!(file, "{}={}", OUTPUT_KEY, tag)?;
            }
            None => writeln!(stdout, "::set-output name={}::{}", OUTPUT_KEY, tag)?,
        }

        writeln!(stdout, "NEW RELEASE! {}", tag)?;
        stdout.flush()
    }
}
