//! Signal file parsing.
//!
//! One sample per line with either an `x` column or `x px` columns,
//! separated by whitespace or commas. Everything after `#` is a comment and
//! blank lines are skipped.

use anyhow::Context;
use naff_core::Signal;
use std::path::Path;

/// Error type for signal file contents.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum InputError {
    #[error("line {line}: invalid number '{token}'")]
    InvalidNumber { line: usize, token: String },

    #[error("line {line}: expected {expected} columns, found {found}")]
    ColumnCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: at most 2 columns (x px) are supported, found {found}")]
    TooManyColumns { line: usize, found: usize },

    #[error("no samples")]
    Empty,

    #[error(transparent)]
    Signal(#[from] naff_core::NaffError),
}

/// Parse signal text. Two columns give the complex signal `x − i·px`
/// unless `x_only` is set, in which case only the first column is used.
pub fn parse_signal(text: &str, x_only: bool) -> Result<Signal, InputError> {
    let mut x = Vec::new();
    let mut px = Vec::new();
    let mut columns = None;

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let data = raw.split('#').next().unwrap_or_default();
        let tokens: Vec<&str> = data
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.is_empty() {
            continue;
        }

        let expected = *columns.get_or_insert(tokens.len());
        if tokens.len() > 2 {
            return Err(InputError::TooManyColumns {
                line,
                found: tokens.len(),
            });
        }
        if tokens.len() != expected {
            return Err(InputError::ColumnCount {
                line,
                expected,
                found: tokens.len(),
            });
        }

        let mut values = tokens.iter().map(|token| {
            token.parse::<f64>().map_err(|_| InputError::InvalidNumber {
                line,
                token: (*token).to_string(),
            })
        });
        if let Some(value) = values.next() {
            x.push(value?);
        }
        if let Some(value) = values.next() {
            px.push(value?);
        }
    }

    if x.is_empty() {
        return Err(InputError::Empty);
    }
    if x_only || px.is_empty() {
        Ok(Signal::real(x))
    } else {
        Ok(Signal::from_phase_space(&x, &px)?)
    }
}

/// Read and parse a signal file.
pub fn read_signal(path: &Path, x_only: bool) -> anyhow::Result<Signal> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;
    let signal = parse_signal(&text, x_only)
        .with_context(|| format!("invalid signal file '{}'", path.display()))?;

    tracing::info!(
        path = %path.display(),
        samples = signal.len(),
        real = signal.is_real(),
        "signal loaded"
    );
    Ok(signal)
}
