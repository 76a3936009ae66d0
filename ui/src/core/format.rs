//! Formatting helpers for presenting artifacts.

/// Shape line shown under a data grid.
pub fn format_shape(rows: usize, columns: usize) -> String {
    format!("Rows: {rows}  |  Columns: {columns}")
}

pub fn format_dimensions(width: u32, height: u32) -> String {
    format!("{width} × {height} px")
}
