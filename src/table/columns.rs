use crate::labels;
use crate::models::Log;

use super::clock::to_twelve_hour;

/// Shown in place of values the log does not carry yet.
pub const PLACEHOLDER: &str = "-";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    CarNumber,
    EmployeeNumber,
    EmployeeName,
    TakenDate,
    TakenTime,
    ReturnDate,
    ReturnTime,
    Note,
}

impl Column {
    pub const ALL: [Column; 8] = [
        Column::CarNumber,
        Column::EmployeeNumber,
        Column::EmployeeName,
        Column::TakenDate,
        Column::TakenTime,
        Column::ReturnDate,
        Column::ReturnTime,
        Column::Note,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Column::CarNumber => "car_number",
            Column::EmployeeNumber => "employee_id",
            Column::EmployeeName => "employee_name",
            Column::TakenDate => "taken_date",
            Column::TakenTime => "taken_time",
            Column::ReturnDate => "return_date",
            Column::ReturnTime => "return_time",
            Column::Note => "car_note",
        }
    }

    pub fn header(self) -> &'static str {
        match self {
            Column::CarNumber => labels::COLUMN_CAR_NUMBER,
            Column::EmployeeNumber => labels::COLUMN_EMPLOYEE_NUMBER,
            Column::EmployeeName => labels::COLUMN_EMPLOYEE_NAME,
            Column::TakenDate => labels::COLUMN_TAKEN_DATE,
            Column::TakenTime => labels::COLUMN_TAKEN_TIME,
            Column::ReturnDate => labels::COLUMN_RETURN_DATE,
            Column::ReturnTime => labels::COLUMN_RETURN_TIME,
            Column::Note => labels::COLUMN_NOTE,
        }
    }

    pub fn cell(self, log: &Log) -> String {
        match self {
            Column::CarNumber => log.car.car_number.clone(),
            Column::EmployeeNumber => log.employee.ceo_number.clone(),
            Column::EmployeeName => log.employee.ceo_name.clone(),
            Column::TakenDate => log.taken_date.clone(),
            Column::TakenTime => time_cell(Some(&log.taken_time)),
            Column::ReturnDate => text_cell(log.return_date.as_deref()),
            Column::ReturnTime => time_cell(log.return_time.as_deref()),
            Column::Note => text_cell(log.note.as_deref()),
        }
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|raw| !raw.trim().is_empty())
}

fn text_cell(value: Option<&str>) -> String {
    present(value).unwrap_or(PLACEHOLDER).to_string()
}

fn time_cell(value: Option<&str>) -> String {
    present(value).map_or_else(|| PLACEHOLDER.to_string(), to_twelve_hour)
}
