//! CLI to Config conversion utilities

use crate::config;
use crate::config::cli;
use crate::error::EnsembleError;
use crate::game::board::CELLS;
use anyhow::{Context, Result};

/// Parse an integer positional argument
///
/// The whole argument must be a base-10 `i64` with an optional sign;
/// whitespace or anything else is a [`EnsembleError::Parse`].
pub fn parse_integer(arg: &str) -> Result<i64, EnsembleError> {
    arg.parse().map_err(|_| EnsembleError::Parse {
        argument: arg.to_string(),
    })
}

/// Parse a comma-separated list of board cells or ranges
///
/// Order is preserved because scripted moves are played in sequence.
/// Accepts single cells and ascending ranges, e.g. `"4,0-2"` is
/// `[4, 0, 1, 2]`.
///
/// # Errors
///
/// Returns an error for non-numeric entries, cells outside `0-8`, inverted
/// ranges, duplicates, or an empty list.
///
/// # Example
///
/// ```
/// use ensemble::config::cli_convert::parse_cell_list;
///
/// let cells = parse_cell_list("4, 0-2").unwrap();
/// assert_eq!(cells, vec![4, 0, 1, 2]);
/// ```
pub fn parse_cell_list(list: &str) -> Result<Vec<usize>> {
    let mut cells = Vec::new();

    for part in list.split(',') {
        let part = part.trim();

        if part.contains('-') {
            // Range: "0-2"
            let range_parts: Vec<&str> = part.split('-').collect();
            if range_parts.len() != 2 {
                anyhow::bail!("Invalid cell range format: {}", part);
            }

            let start: usize = range_parts[0]
                .trim()
                .parse()
                .with_context(|| format!("Invalid cell number: {}", range_parts[0]))?;
            let end: usize = range_parts[1]
                .trim()
                .parse()
                .with_context(|| format!("Invalid cell number: {}", range_parts[1]))?;

            if start > end {
                anyhow::bail!("Invalid cell range: start ({}) > end ({})", start, end);
            }
            if end >= CELLS {
                anyhow::bail!("Cell {} is outside the board (0-{})", end, CELLS - 1);
            }

            cells.extend(start..=end);
        } else {
            let cell: usize = part
                .parse()
                .with_context(|| format!("Invalid cell number: {}", part))?;
            cells.push(cell);
        }
    }

    if let Some(&cell) = cells.iter().find(|&&cell| cell >= CELLS) {
        anyhow::bail!("Cell {} is outside the board (0-{})", cell, CELLS - 1);
    }

    for (i, cell) in cells.iter().enumerate() {
        if cells[..i].contains(cell) {
            anyhow::bail!("Cell {} is listed more than once", cell);
        }
    }

    Ok(cells)
}

/// Convert CLI SinkMode to config SinkMode
pub fn convert_sink_mode(cli_mode: cli::SinkMode) -> config::SinkMode {
    match cli_mode {
        cli::SinkMode::Shared => config::SinkMode::Shared,
        cli::SinkMode::PerWorker => config::SinkMode::PerWorker,
    }
}

/// Convert CLI MoveStrategy to config MoveStrategy
pub fn convert_move_strategy(cli_strategy: cli::MoveStrategy) -> config::MoveStrategy {
    match cli_strategy {
        cli::MoveStrategy::Rejection => config::MoveStrategy::Rejection,
        cli::MoveStrategy::Enumerate => config::MoveStrategy::Enumerate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("42"), Ok(42));
        assert_eq!(parse_integer("-7"), Ok(-7));
        assert_eq!(parse_integer("+3"), Ok(3));
        assert!(parse_integer(" 5").is_err());
        assert!(parse_integer("5 ").is_err());
        assert_eq!(parse_integer("3000000000"), Ok(3_000_000_000));
        assert_eq!(
            parse_integer("abc"),
            Err(EnsembleError::Parse { argument: "abc".into() })
        );
        assert!(parse_integer("1.5").is_err());
        assert!(parse_integer("").is_err());
        assert!(parse_integer("99999999999999999999").is_err());
    }

    #[test]
    fn test_parse_cell_list_single() {
        assert_eq!(parse_cell_list("4").unwrap(), vec![4]);
    }

    #[test]
    fn test_parse_cell_list_keeps_order() {
        assert_eq!(parse_cell_list("8,0,4").unwrap(), vec![8, 0, 4]);
    }

    #[test]
    fn test_parse_cell_list_range() {
        assert_eq!(parse_cell_list("0-2").unwrap(), vec![0, 1, 2]);
        assert_eq!(parse_cell_list("6, 0 - 1").unwrap(), vec![6, 0, 1]);
    }

    #[test]
    fn test_parse_cell_list_out_of_bounds() {
        assert!(parse_cell_list("9").is_err());
        assert!(parse_cell_list("7-9").is_err());
    }

    #[test]
    fn test_parse_cell_list_duplicates() {
        assert!(parse_cell_list("0,1,0").is_err());
        assert!(parse_cell_list("0-2,2").is_err());
    }

    #[test]
    fn test_parse_cell_list_invalid() {
        assert!(parse_cell_list("").is_err());
        assert!(parse_cell_list("a").is_err());
        assert!(parse_cell_list("2-1").is_err());
        assert!(parse_cell_list("0-1-2").is_err());
    }

    #[test]
    fn test_convert_enums() {
        assert_eq!(convert_sink_mode(cli::SinkMode::PerWorker), config::SinkMode::PerWorker);
        assert_eq!(convert_sink_mode(cli::SinkMode::Shared), config::SinkMode::Shared);
        assert_eq!(
            convert_move_strategy(cli::MoveStrategy::Enumerate),
            config::MoveStrategy::Enumerate
        );
        assert_eq!(
            convert_move_strategy(cli::MoveStrategy::Rejection),
            config::MoveStrategy::Rejection
        );
    }
}
