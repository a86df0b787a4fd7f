//! Driver shared by the `knight-moves` binary.
//!
//! Reads query pairs from the command line (or uses the built-in cases),
//! runs them through [`knight_paths::find_path_components`] and prints each
//! result as text or JSON.

use std::fmt;
use std::io::{self, Write};

use knight_core::{ParsePointError, Point, parse_components};
use knight_paths::{PathError, find_path_components};
use serde::Serialize;

pub const USAGE: &str = "\
Usage: knight-moves [--json] [X,Y X,Y ...]

With no coordinates, runs the built-in test cases.
Coordinates are given in pairs (from, to), each as X,Y with 0 <= X,Y <= 7.

Options:
    --json    print one JSON object per query
    -h, --help
              show this message

Set RUST_LOG=debug for diagnostics.";

/// Built-in queries run when no coordinates are given.
pub const FIXED_CASES: [([i32; 2], [i32; 2]); 5] = [
    ([0, 0], [1, 2]),
    ([0, 0], [3, 3]),
    ([3, 3], [0, 0]),
    ([0, 0], [7, 7]),
    ([3, 3], [4, 3]),
];

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// A single from/to query, as raw components so malformed input reaches the
/// search and is reported there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub from: Vec<i32>,
    pub to: Vec<i32>,
}

impl Query {
    pub fn new(from: impl Into<Vec<i32>>, to: impl Into<Vec<i32>>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

fn write_components(f: &mut fmt::Formatter<'_>, c: &[i32]) -> fmt::Result {
    write!(f, "[")?;
    for (i, v) in c.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write!(f, "{v}")?;
    }
    write!(f, "]")
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(f, &self.from)?;
        write!(f, " to ")?;
        write_components(f, &self.to)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Everything the driver needs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    pub queries: Vec<Query>,
    pub format: OutputFormat,
    /// Prefix text output with `Test N:` headers.
    pub numbered: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            queries: FIXED_CASES
                .iter()
                .map(|(from, to)| Query::new(*from, *to))
                .collect(),
            format: OutputFormat::Text,
            numbered: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(DriverConfig),
    Help,
}

/// Errors that can occur when reading the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    /// An unpaired coordinate was left over.
    OddCoordinates(usize),
    /// A coordinate argument contained a non-integer component.
    BadCoordinate { arg: String, source: ParsePointError },
    UnknownFlag(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OddCoordinates(n) => {
                write!(f, "coordinates come in from/to pairs, got {n}")
            }
            Self::BadCoordinate { arg, source } => write!(f, "bad coordinate {arg:?}: {source}"),
            Self::UnknownFlag(s) => write!(f, "unknown option {s:?}"),
        }
    }
}

impl std::error::Error for ArgsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::BadCoordinate { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Parse command-line arguments (without the program name).
pub fn parse_args<I, S>(args: I) -> Result<Command, ArgsError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut format = OutputFormat::Text;
    let mut coords = Vec::new();

    for arg in args {
        let arg = arg.into();
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--json" => format = OutputFormat::Json,
            // Negative components such as "-5" or "-1,3" are coordinates, not flags.
            s if s.starts_with('-') && !s[1..].starts_with(|c: char| c.is_ascii_digit()) => {
                return Err(ArgsError::UnknownFlag(s.to_string()));
            }
            _ => match parse_components(&arg) {
                Ok(c) => coords.push(c),
                Err(source) => return Err(ArgsError::BadCoordinate { arg, source }),
            },
        }
    }

    if coords.len() % 2 != 0 {
        return Err(ArgsError::OddCoordinates(coords.len()));
    }

    let mut config = DriverConfig {
        format,
        ..DriverConfig::default()
    };
    if !coords.is_empty() {
        let mut it = coords.into_iter();
        config.queries =
            std::iter::from_fn(|| Some(Query::new(it.next()?, it.next()?))).collect();
        config.numbered = false;
    }
    Ok(Command::Run(config))
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Human-readable result of one query.
pub fn render_text(result: &Result<Vec<Point>, PathError>) -> String {
    match result {
        Ok(path) => {
            let mut s = format!("You made it in {} moves! Here's your path:", path.len() - 1);
            for p in path {
                s.push('\n');
                s.push_str(&p.to_string());
            }
            s
        }
        Err(PathError::InvalidPosition) => {
            "Invalid position! Coordinates must be between 0 and 7.".to_string()
        }
        Err(PathError::NoPathFound) => "No path found!".to_string(),
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum Report<'a> {
    Found {
        from: &'a [i32],
        to: &'a [i32],
        moves: usize,
        path: &'a [Point],
    },
    Failed {
        from: &'a [i32],
        to: &'a [i32],
        error: String,
    },
}

/// One-line JSON result of one query.
pub fn render_json(
    query: &Query,
    result: &Result<Vec<Point>, PathError>,
) -> Result<String, serde_json::Error> {
    let report = match result {
        Ok(path) => Report::Found {
            from: &query.from,
            to: &query.to,
            moves: path.len() - 1,
            path,
        },
        Err(e) => Report::Failed {
            from: &query.from,
            to: &query.to,
            error: e.to_string(),
        },
    };
    serde_json::to_string(&report)
}

/// Run every query in `config`, writing results to `out`.
///
/// Failed queries are reported and the run continues.
pub fn run<W: Write>(config: &DriverConfig, out: &mut W) -> io::Result<()> {
    log::debug!(
        "running {} queries ({:?} output)",
        config.queries.len(),
        config.format
    );

    for (i, query) in config.queries.iter().enumerate() {
        let result = find_path_components(&query.from, &query.to);
        match &result {
            Ok(path) => log::debug!("{query}: {} moves", path.len() - 1),
            Err(e) => log::warn!("{query}: {e}"),
        }

        match config.format {
            OutputFormat::Text => {
                if i > 0 {
                    writeln!(out)?;
                }
                if config.numbered {
                    writeln!(out, "Test {}: {query}", i + 1)?;
                }
                writeln!(out, "{}", render_text(&result))?;
            }
            OutputFormat::Json => {
                let line = render_json(query, &result).map_err(io::Error::other)?;
                writeln!(out, "{line}")?;
            }
        }
    }
    Ok(())
}
