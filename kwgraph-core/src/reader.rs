//! Workbook reading via calamine.
//!
//! The first row of the sheet is the header; columns are located by header
//! name, so column order in the file does not matter. Every cell is
//! normalized on the way in.

use crate::error::{GraphError, Result};
use crate::types::Row;
use calamine::{open_workbook_auto, Data, Range, Reader};
use serde::Deserialize;
use std::path::Path;

/// Header names of the five input columns.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub primary: String,
    pub related: String,
    pub keywords: String,
    pub topic: String,
    pub topic_text: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            primary: "Categoría Principal".to_string(),
            related: "Categorías Relacionadas".to_string(),
            keywords: "Palabras Clave".to_string(),
            topic: "Tema".to_string(),
            topic_text: "Texto del Tema".to_string(),
        }
    }
}

/// Resolved column positions within a sheet.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    primary: usize,
    related: usize,
    keywords: usize,
    topic: usize,
    topic_text: usize,
}

impl ColumnIndex {
    fn resolve(header: &[Data], names: &ColumnNames) -> Result<Self> {
        let find = |name: &str| {
            header
                .iter()
                .position(|cell| matches!(cell, Data::String(s) if s.trim() == name.trim()))
                .ok_or_else(|| GraphError::MissingColumn {
                    column: name.to_string(),
                })
        };
        Ok(Self {
            primary: find(&names.primary)?,
            related: find(&names.related)?,
            keywords: find(&names.keywords)?,
            topic: find(&names.topic)?,
            topic_text: find(&names.topic_text)?,
        })
    }
}

/// Open `path` and read every data row of `sheet` (first sheet if `None`).
pub fn read_rows(path: &Path, sheet: Option<&str>, columns: &ColumnNames) -> Result<Vec<Row>> {
    let workbook_error = |e: calamine::Error| GraphError::Workbook {
        path: path.display().to_string(),
        message: e.to_string(),
    };

    let mut workbook = open_workbook_auto(path).map_err(workbook_error)?;
    let sheet_name = match sheet {
        Some(name) => {
            if !workbook.sheet_names().iter().any(|s| s == name) {
                return Err(GraphError::SheetNotFound {
                    sheet: name.to_string(),
                });
            }
            name.to_string()
        }
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or(GraphError::EmptyWorkbook)?,
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(workbook_error)?;
    let rows = rows_from_range(&range, columns)?;
    tracing::info!(
        path = %path.display(),
        sheet = %sheet_name,
        rows = rows.len(),
        "loaded workbook"
    );
    Ok(rows)
}

/// Convert a sheet range (header row first) into normalized rows.
///
/// Rows with no content at all are skipped. The primary-category and
/// keyword cells must hold text; the other three may be empty.
pub fn rows_from_range(range: &Range<Data>, columns: &ColumnNames) -> Result<Vec<Row>> {
    let mut sheet_rows = range.rows();
    let header = sheet_rows.next().ok_or(GraphError::EmptyWorkbook)?;
    let index = ColumnIndex::resolve(header, columns)?;
    let first_row = range.start().map(|(r, _)| r as usize).unwrap_or(0);

    let mut rows = Vec::new();
    for (offset, cells) in sheet_rows.enumerate() {
        if cells.iter().all(|c| matches!(c, Data::Empty)) {
            continue;
        }
        // 1-based spreadsheet row; the header sits at first_row + 1
        let line = first_row + offset + 2;
        let text = |col: usize, name: &str, required: bool| -> Result<String> {
            match cells.get(col) {
                Some(Data::String(s)) => Ok(s.clone()),
                Some(Data::Empty) | None if !required => Ok(String::new()),
                _ => Err(GraphError::NonTextCell {
                    row: line,
                    column: name.to_string(),
                }),
            }
        };

        rows.push(Row::new(
            &text(index.primary, &columns.primary, true)?,
            &text(index.related, &columns.related, false)?,
            &text(index.keywords, &columns.keywords, true)?,
            &text(index.topic, &columns.topic, false)?,
            &text(index.topic_text, &columns.topic_text, false)?,
        ));
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(cells: &[&[Option<&str>]]) -> Range<Data> {
        let height = cells.len() as u32;
        let width = cells.iter().map(|r| r.len()).max().unwrap_or(1) as u32;
        let mut range = Range::new((0, 0), (height - 1, width - 1));
        for (r, row) in cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if let Some(text) = cell {
                    range.set_value((r as u32, c as u32), Data::String(text.to_string()));
                }
            }
        }
        range
    }

    const HEADER: &[Option<&str>] = &[
        Some("Categoría Principal"),
        Some("Categorías Relacionadas"),
        Some("Palabras Clave"),
        Some("Tema"),
        Some("Texto del Tema"),
    ];

    #[test]
    fn test_reads_and_normalizes_rows() {
        let range = sheet(&[
            HEADER,
            &[Some("Música"), Some("Arte, Música"), Some("Jazz, Blues"), Some("T1"), Some("X1")],
        ]);
        let rows = rows_from_range(&range, &ColumnNames::default()).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0],
            Row::new("musica", "arte, musica", "jazz, blues", "t1", "x1")
        );
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let range = sheet(&[
            &[
                Some("Tema"),
                Some("Palabras Clave"),
                Some("Texto del Tema"),
                Some("Categoría Principal"),
                Some("Categorías Relacionadas"),
            ],
            &[Some("T1"), Some("Jazz"), Some("X1"), Some("Música"), Some("Arte")],
        ]);
        let rows = rows_from_range(&range, &ColumnNames::default()).unwrap();
        assert_eq!(rows[0].primary_category, "musica");
        assert_eq!(rows[0].keywords, "jazz");
        assert_eq!(rows[0].related_categories, "arte");
    }

    #[test]
    fn test_optional_cells_may_be_empty() {
        let range = sheet(&[HEADER, &[Some("Música"), None, Some("Jazz"), None, None]]);
        let rows = rows_from_range(&range, &ColumnNames::default()).unwrap();
        assert_eq!(rows[0].related_categories, "");
        assert_eq!(rows[0].topic, "");
        assert_eq!(rows[0].topic_text, "");
    }

    #[test]
    fn test_blank_rows_are_skipped() {
        let range = sheet(&[
            HEADER,
            &[None, None, None, None, None],
            &[Some("Arte"), None, Some("Pintura"), None, None],
        ]);
        let rows = rows_from_range(&range, &ColumnNames::default()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].primary_category, "arte");
    }

    #[test]
    fn test_missing_column() {
        let range = sheet(&[
            &[Some("Categoría Principal"), Some("Palabras Clave")],
            &[Some("Música"), Some("Jazz")],
        ]);
        let err = rows_from_range(&range, &ColumnNames::default()).unwrap_err();
        assert!(matches!(err, GraphError::MissingColumn { ref column } if column == "Categorías Relacionadas"));
    }

    #[test]
    fn test_required_cell_must_be_text() {
        let range = sheet(&[HEADER, &[Some("Música"), None, None, Some("T1"), Some("X1")]]);
        let err = rows_from_range(&range, &ColumnNames::default()).unwrap_err();
        assert!(matches!(err, GraphError::NonTextCell { row: 2, ref column } if column == "Palabras Clave"));
    }

    #[test]
    fn test_numeric_cell_is_rejected() {
        let mut range = sheet(&[HEADER, &[None, None, Some("Jazz"), None, None]]);
        range.set_value((1, 0), Data::Float(3.0));
        let err = rows_from_range(&range, &ColumnNames::default()).unwrap_err();
        assert!(matches!(err, GraphError::NonTextCell { row: 2, .. }));
    }

    #[test]
    fn test_custom_column_names() {
        let columns = ColumnNames {
            primary: "Category".to_string(),
            related: "Related".to_string(),
            keywords: "Keywords".to_string(),
            topic: "Topic".to_string(),
            topic_text: "Topic Text".to_string(),
        };
        let range = sheet(&[
            &[Some("Category"), Some("Related"), Some("Keywords"), Some("Topic"), Some(" Topic Text ")],
            &[Some("Cinéma"), None, Some("Drame"), Some("T"), Some("X")],
        ]);
        let rows = rows_from_range(&range, &columns).unwrap();
        assert_eq!(rows[0].primary_category, "cinema");
        assert_eq!(rows[0].topic_text, "x");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_rows(&dir.path().join("nope.xlsx"), None, &ColumnNames::default())
            .unwrap_err();
        assert!(matches!(err, GraphError::Workbook { .. }));
    }
}
