use crate::error::ScrapeError;

/// One device line of query output: name, index, then metric cells in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    cells: Vec<String>,
}

impl RawRow {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    pub fn name(&self) -> &str {
        self.cells.first().map_or("", String::as_str)
    }

    pub fn index(&self) -> &str {
        self.cells.get(1).map_or("", String::as_str)
    }

    /// Metric cells, i.e. everything after the two identity cells.
    pub fn values(&self) -> &[String] {
        self.cells.get(2..).unwrap_or(&[])
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }
}

impl<S: Into<String>> FromIterator<S> for RawRow {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Parse `--format=csv,noheader,nounits` output into rows.
///
/// Leading whitespace after each delimiter is dropped. Every row must have the
/// same number of cells as the first one. A quoted field is only accepted when
/// its quote directly follows a delimiter or line start and it closes on the
/// same line; any other quote is malformed.
pub fn parse(raw: &[u8]) -> Result<Vec<RawRow>, ScrapeError> {
    // The csv reader runs an unclosed quote to end of input without complaint.
    if raw.iter().filter(|&&b| b == b'"').count() % 2 == 1 {
        return Err(ScrapeError::Malformed {
            line: 0,
            reason: "unterminated quote",
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::None)
        .from_reader(raw);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, csv::Position::line);
        for cell in record.iter() {
            if cell.contains('"') {
                return Err(ScrapeError::Malformed {
                    line,
                    reason: "stray quote",
                });
            }
            if cell.contains(['\n', '\r']) {
                return Err(ScrapeError::Malformed {
                    line,
                    reason: "quoted field spans lines",
                });
            }
        }
        rows.push(record.iter().map(str::trim_start).collect());
    }
    Ok(rows)
}
