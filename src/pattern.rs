use thiserror::Error;

use crate::board::Board;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern has no rows")]
    Empty,
    #[error("row {row} is {found} cells wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Reads a text pattern into an unfrozen board.
///
/// Every non-empty line is a row. `'0'`, `' '` and `'.'` are dead cells,
/// anything else is alive.
pub fn parse(s: &str) -> Result<Board, PatternError> {
    let mut data: Vec<Vec<bool>> = vec![];

    for line in s.lines() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        let r: Vec<bool> = line
            .chars()
            .map(|ch| !matches!(ch, '0' | ' ' | '.'))
            .collect();

        if let Some(first) = data.first() {
            if first.len() != r.len() {
                return Err(PatternError::RaggedRow {
                    row: data.len(),
                    expected: first.len(),
                    found: r.len(),
                });
            }
        }
        data.push(r);
    }

    if data.is_empty() {
        return Err(PatternError::Empty);
    }
    Ok(Board::from_rows(data))
}
