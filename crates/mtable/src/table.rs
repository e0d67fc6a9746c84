// File: src/table.rs
// Purpose: Grid generation for a multiplication table

use serde::Serialize;

use crate::range::RangeInput;

/// A single table cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Cell {
    /// Top-left cell, rendered empty
    CornerLabel,
    ColumnLabel(i64),
    RowLabel(i64),
    /// Product of a row and column with the same index
    DiagonalProduct(i64),
    Product(i64),
}

impl Cell {
    pub fn value(&self) -> Option<i64> {
        match *self {
            Cell::CornerLabel => None,
            Cell::ColumnLabel(v)
            | Cell::RowLabel(v)
            | Cell::DiagonalProduct(v)
            | Cell::Product(v) => Some(v),
        }
    }
}

/// A generated table: title plus rows of cells. The first row holds the
/// column labels and the first cell of every other row holds its row label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableResult {
    pub title: String,
    pub rows: Vec<Vec<Cell>>,
}

impl TableResult {
    /// (rows, columns), counting the label row and column
    pub fn dimensions(&self) -> (usize, usize) {
        let cols = self.rows.first().map_or(0, Vec::len);
        (self.rows.len(), cols)
    }

    pub fn row_labels(&self) -> Vec<i64> {
        self.rows
            .iter()
            .filter_map(|row| match row.first() {
                Some(Cell::RowLabel(v)) => Some(*v),
                _ => None,
            })
            .collect()
    }

    pub fn column_labels(&self) -> Vec<i64> {
        self.rows
            .first()
            .map(|header| {
                header
                    .iter()
                    .filter_map(|cell| match cell {
                        Cell::ColumnLabel(v) => Some(*v),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Cell at the given row label and column label
    pub fn cell_at(&self, row: i64, col: i64) -> Option<Cell> {
        let r = self.row_labels().iter().position(|&v| v == row)? + 1;
        let c = self.column_labels().iter().position(|&v| v == col)? + 1;
        self.rows.get(r)?.get(c).copied()
    }
}

/// `"[colStart, colEnd] * [rowStart, rowEnd]"`, columns first
pub fn title(input: &RangeInput) -> String {
    format!(
        "[{}, {}] * [{}, {}]",
        input.col_start, input.col_end, input.row_start, input.row_end
    )
}

/// Generate the grid for an input that already passed validation.
///
/// Rows run from one below `row_start` to `row_end`, columns from one below
/// `col_start` to `col_end`; the extra leading row and column carry labels.
/// Reversed bounds produce an empty or label-only grid.
pub fn generate(input: &RangeInput) -> TableResult {
    let label_row = input.row_start.saturating_sub(1);
    let label_col = input.col_start.saturating_sub(1);

    let rows = (label_row..=input.row_end)
        .map(|i| {
            (label_col..=input.col_end)
                .map(|j| classify(i, j, label_row, label_col))
                .collect()
        })
        .collect();

    TableResult {
        title: title(input),
        rows,
    }
}

fn classify(i: i64, j: i64, label_row: i64, label_col: i64) -> Cell {
    if i == label_row {
        if j == label_col {
            Cell::CornerLabel
        } else {
            Cell::ColumnLabel(j)
        }
    } else if j == label_col {
        Cell::RowLabel(i)
    } else if i == j {
        Cell::DiagonalProduct(i.saturating_mul(j))
    } else {
        Cell::Product(i.saturating_mul(j))
    }
}
