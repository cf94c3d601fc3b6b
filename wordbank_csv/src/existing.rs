//! Reading level values back out of a previously written CSV.

use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};
use wordbank_core::{Error, Result, TextEncoding};

/// Level values from an existing output file, keyed by rank.
pub type ExistingLevels = HashMap<usize, String>;

/// Load `rank -> level` from a CSV written by an earlier run.
///
/// Returns `None` when the file does not exist. A file without `rank` and
/// `level` columns yields an empty map, and rows whose rank is not an
/// integer are skipped. The file is read as UTF-8 with an optional BOM.
pub fn load_existing_levels_by_rank(path: &Path) -> Result<Option<ExistingLevels>> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(Error::io(path, e)),
    };
    let text = TextEncoding::utf8().decode(&bytes);

    let levels = parse_existing_levels(&text);
    info!(
        "Loaded {} existing levels from {}",
        levels.len(),
        path.display()
    );
    Ok(Some(levels))
}

/// Parse `rank -> level` from CSV text. Never fails.
#[must_use]
pub fn parse_existing_levels(text: &str) -> ExistingLevels {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let Ok(headers) = reader.headers() else {
        return ExistingLevels::new();
    };
    let column = |name: &str| headers.iter().position(|h| h == name);
    let (Some(rank_col), Some(level_col)) = (column("rank"), column("level")) else {
        warn!("Existing output has no rank/level columns, using fresh levels");
        return ExistingLevels::new();
    };

    let mut levels = ExistingLevels::new();
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                debug!("Skipping unreadable row: {e}");
                continue;
            }
        };

        let Ok(rank) = record.get(rank_col).unwrap_or("").trim().parse::<usize>() else {
            continue;
        };
        let level = record.get(level_col).unwrap_or("").trim().to_string();
        levels.insert(rank, level);
    }
    levels
}
