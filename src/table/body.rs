use crate::labels;
use crate::models::Log;

use super::columns::Column;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    pub outstanding: bool,
    pub cells: Vec<String>,
}

/// What the grid's `tbody` holds for the current page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableBody {
    /// One row spanning every column with the "no records" text.
    Empty { colspan: usize, message: &'static str },
    Rows(Vec<TableRow>),
}

impl TableBody {
    pub fn for_page(logs: &[Log]) -> Self {
        if logs.is_empty() {
            return TableBody::Empty {
                colspan: Column::ALL.len(),
                message: labels::NO_RECORDS,
            };
        }
        TableBody::Rows(
            logs.iter()
                .map(|log| TableRow {
                    outstanding: log.is_outstanding(),
                    cells: Column::ALL.iter().map(|column| column.cell(log)).collect(),
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::PLACEHOLDER;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_page_is_a_single_spanning_row() {
        assert_eq!(
            TableBody::for_page(&[]),
            TableBody::Empty {
                colspan: 8,
                message: "لا يوجد سجلات",
            }
        );
    }

    #[test]
    fn one_log_is_one_row_of_eight_cells() {
        let log = Log {
            id: 3,
            taken_date: "2024-03-03".into(),
            taken_time: "18:20".into(),
            ..Log::default()
        };

        let TableBody::Rows(rows) = TableBody::for_page(std::slice::from_ref(&log)) else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 1);
        assert!(rows[0].outstanding);
        assert_eq!(rows[0].cells.len(), Column::ALL.len());
        assert_eq!(rows[0].cells[3], "2024-03-03");
        assert_eq!(rows[0].cells[4], "6:20 PM");
        assert_eq!(rows[0].cells[5], PLACEHOLDER);
    }
}
