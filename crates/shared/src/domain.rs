use std::fmt;

use serde::{Deserialize, Serialize};

/// One entry of the fetched record list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    /// Any JSON number; fractional and negative ages are kept as sent.
    pub age: f64,
    pub occupation: String,
}

impl Record {
    pub fn new(name: impl Into<String>, age: f64, occupation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            occupation: occupation.into(),
        }
    }

    /// Whole ages render without a fraction, so `30.0` reads as "30".
    pub fn display_age(&self) -> String {
        if self.age == 0.0 {
            // folds -0
            return "0".to_string();
        }
        self.age.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    Name,
    Age,
}

impl SortColumn {
    pub fn label(self) -> &'static str {
        match self {
            SortColumn::Name => "Name",
            SortColumn::Age => "Age",
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortColumn::Name => "name",
            SortColumn::Age => "age",
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortOrder::Asc => "▲",
            SortOrder::Desc => "▼",
        }
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
