//! Tabular artifacts: CSV with a header row, cell types inferred from content.

use std::fmt;

use csv::ReaderBuilder;

use super::error::ArtifactError;
use super::format::format_shape;

/// Strings treated as missing values (the pandas `read_csv` defaults the
/// upstream pipeline writes).
const NA_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    pub fn infer(raw: &str) -> Self {
        let trimmed = raw.trim();
        if NA_MARKERS.contains(&trimmed) {
            return Self::Empty;
        }
        if let Ok(value) = trimmed.parse::<i64>() {
            return Self::Integer(value);
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_nan() => Self::Empty,
            Ok(value) => Self::Float(value),
            Err(_) => Self::Text(raw.to_string()),
        }
    }

    pub fn column_type(&self) -> ColumnType {
        match self {
            Self::Empty => ColumnType::Empty,
            Self::Integer(_) => ColumnType::Integer,
            Self::Float(_) => ColumnType::Float,
            Self::Text(_) => ColumnType::Text,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Integer(value) => write!(f, "{value}"),
            // Whole floats keep a decimal point so they read apart from integers.
            Self::Float(value) if value.fract() == 0.0 => write!(f, "{value:.1}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// Column type, ordered from narrowest to widest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ColumnType {
    Empty,
    Integer,
    Float,
    Text,
}

impl ColumnType {
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Parse comma-separated bytes. `label` names the source in error messages.
    ///
    /// Every record must have as many fields as the header.
    pub fn from_csv(label: &str, bytes: &[u8]) -> Result<Self, ArtifactError> {
        let parse_error = |reason: String| ArtifactError::Parse {
            path: label.to_string(),
            reason,
        };

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .from_reader(bytes);

        let columns: Vec<String> = reader
            .headers()
            .map_err(|err| parse_error(err.to_string()))?
            .iter()
            .map(|name| name.trim().to_string())
            .collect();

        if columns.is_empty() {
            return Err(parse_error("no columns to parse".to_string()));
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|err| parse_error(err.to_string()))?;
            rows.push(record.iter().map(Cell::infer).collect());
        }

        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Widest cell type seen in each column; empty cells do not widen.
    pub fn column_types(&self) -> Vec<ColumnType> {
        let mut types = vec![ColumnType::Empty; self.columns.len()];
        for row in &self.rows {
            for (slot, cell) in types.iter_mut().zip(row) {
                *slot = (*slot).max(cell.column_type());
            }
        }
        types
    }

    /// Shape line shown under the data grid.
    pub fn summary(&self) -> String {
        format_shape(self.row_count(), self.column_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_and_two_rows() {
        let table = Table::from_csv("t.csv", b"a,b,c\n1,2,3\n4,5,6\n").unwrap();
        assert_eq!(table.columns(), ["a", "b", "c"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.summary(), "Rows: 2  |  Columns: 3");
    }

    #[test]
    fn infers_cell_types() {
        let table = Table::from_csv(
            "t.csv",
            b"account,trades,win_rate,sentiment\n0xabc,12,0.58,Fear\n0xdef,,NaN,Greed\n",
        )
        .unwrap();

        assert_eq!(
            table.rows()[0],
            vec![
                Cell::Text("0xabc".into()),
                Cell::Integer(12),
                Cell::Float(0.58),
                Cell::Text("Fear".into()),
            ]
        );
        assert_eq!(table.rows()[1][1], Cell::Empty);
        assert_eq!(table.rows()[1][2], Cell::Empty);
        assert_eq!(
            table.column_types(),
            vec![
                ColumnType::Text,
                ColumnType::Integer,
                ColumnType::Float,
                ColumnType::Text,
            ]
        );
    }

    #[test]
    fn mixed_integer_and_float_widens_to_float() {
        let table = Table::from_csv("t.csv", b"pnl\n10\n-2.5\n").unwrap();
        assert_eq!(table.column_types(), vec![ColumnType::Float]);
        assert!(table.column_types()[0].is_numeric());
    }

    #[test]
    fn quoted_fields_keep_commas() {
        let table = Table::from_csv("t.csv", b"name,note\nx,\"a, b\"\n").unwrap();
        assert_eq!(table.rows()[0][1], Cell::Text("a, b".into()));
        assert_eq!(table.rows()[0][1].to_string(), "a, b");
    }

    #[test]
    fn whole_floats_print_a_decimal_point() {
        assert_eq!(Cell::Float(1.0).to_string(), "1.0");
        assert_eq!(Cell::Float(-250.0).to_string(), "-250.0");
        assert_eq!(Cell::Float(0.58).to_string(), "0.58");
        assert_eq!(Cell::Integer(1).to_string(), "1");

        let table = Table::from_csv("t.csv", b"pnl\n1.0\n2.5\n").unwrap();
        assert_eq!(table.rows()[0][0].to_string(), "1.0");
    }

    #[test]
    fn ragged_rows_are_a_parse_error() {
        let err = Table::from_csv("bad.csv", b"a,b,c\n1,2\n").unwrap_err();
        assert!(matches!(err, ArtifactError::Parse { ref path, .. } if path == "bad.csv"));
    }

    #[test]
    fn empty_input_is_a_parse_error() {
        let err = Table::from_csv("empty.csv", b"").unwrap_err();
        assert!(matches!(err, ArtifactError::Parse { .. }));
    }

    #[test]
    fn header_only_has_zero_rows() {
        let table = Table::from_csv("t.csv", b"a,b\n").unwrap();
        assert_eq!(table.summary(), "Rows: 0  |  Columns: 2");
        assert_eq!(table.column_types(), vec![ColumnType::Empty; 2]);
    }
}
