use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// Environment variable that overrides the default row count.
pub const ROWS_ENV: &str = "ROWMAP_ROWS";

/// Settings for a command-line run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// JSON file holding an array of item records
    pub input: PathBuf,
    /// Number of rows to pack into
    pub rows: usize,
    /// Pretty-print the output JSON
    pub pretty: bool,
    /// Viewport used by the diagnostic geometry pass (px)
    pub viewport_width: f32,
    pub viewport_height: f32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            rows: 3,
            pretty: true,
            viewport_width: 1280.0,
            viewport_height: 800.0,
        }
    }
}

impl RunConfig {
    /// Parse `<input> [rows] [--compact]` (program name already stripped).
    /// `rows_env` is the value of [`ROWS_ENV`], used when no count is given.
    pub fn from_args<I>(args: I, rows_env: Option<String>) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = RunConfig::default();
        let mut positional = Vec::new();

        for arg in args {
            if arg == "--compact" {
                config.pretty = false;
            } else if arg.starts_with("--") {
                bail!("unknown flag: {}", arg);
            } else {
                positional.push(arg);
            }
        }

        let mut positional = positional.into_iter();
        let Some(input) = positional.next() else {
            bail!("usage: rowmap <items.json> [rows] [--compact]");
        };
        config.input = PathBuf::from(input);

        if let Some(n) = positional.next().or(rows_env) {
            config.rows = n
                .trim()
                .parse()
                .with_context(|| format!("invalid row count: {:?}", n))?;
        }

        if let Some(extra) = positional.next() {
            bail!("unexpected argument: {}", extra);
        }

        Ok(config)
    }

    /// Build from the process arguments and environment.
    pub fn from_env() -> Result<Self> {
        Self::from_args(std::env::args().skip(1), std::env::var(ROWS_ENV).ok())
    }
}
