use super::log::Log;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterField {
    EmployeeNumber,
    CarNumber,
    TakenDate,
}

impl FilterField {
    pub const ALL: [FilterField; 3] = [
        FilterField::EmployeeNumber,
        FilterField::CarNumber,
        FilterField::TakenDate,
    ];
}

/// Exact-match criteria typed into the filter form. A blank criterion
/// matches every log; the rest are ANDed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub employee_number: String,
    pub car_number: String,
    pub taken_date: String,
}

impl FilterCriteria {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::EmployeeNumber => &self.employee_number,
            FilterField::CarNumber => &self.car_number,
            FilterField::TakenDate => &self.taken_date,
        }
    }

    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FilterField::EmployeeNumber => self.employee_number = value,
            FilterField::CarNumber => self.car_number = value,
            FilterField::TakenDate => self.taken_date = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        FilterField::ALL
            .iter()
            .all(|field| criterion(self.get(*field)).is_none())
    }

    pub fn matches(&self, log: &Log) -> bool {
        FilterField::ALL.iter().all(|field| {
            criterion(self.get(*field)).is_none_or(|wanted| field_value(log, *field) == wanted)
        })
    }

    /// The subset of `logs` this filter keeps, in input order.
    pub fn select(&self, logs: &[Log]) -> Vec<Log> {
        logs.iter().filter(|log| self.matches(log)).cloned().collect()
    }
}

fn criterion(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn field_value(log: &Log, field: FilterField) -> &str {
    match field {
        FilterField::EmployeeNumber => &log.employee.ceo_number,
        FilterField::CarNumber => &log.car.car_number,
        FilterField::TakenDate => &log.taken_date,
    }
}
