use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};

const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

/// Reads option maps from a file or stdin.
pub struct InputReader;

impl InputReader {
    pub fn read(file_path: Option<&str>) -> Result<String> {
        file_path.map_or_else(Self::read_stdin, Self::read_file)
    }

    fn read_file(path: &str) -> Result<String> {
        let metadata =
            fs::metadata(path).with_context(|| format!("Failed to access file: {path}"))?;

        let size = metadata.len() as usize;
        if size > MAX_INPUT_SIZE {
            bail!(
                "Input size ({:.1} MB) exceeds maximum allowed size (1 MB)",
                size as f64 / 1024.0 / 1024.0
            );
        }

        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
    }

    fn read_stdin() -> Result<String> {
        let mut buffer = Vec::new();
        io::stdin()
            .lock()
            .take(MAX_INPUT_SIZE as u64 + 1)
            .read_to_end(&mut buffer)
            .context("Failed to read from stdin")?;

        if buffer.len() > MAX_INPUT_SIZE {
            bail!("Input exceeds maximum allowed size (1 MB)");
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}
