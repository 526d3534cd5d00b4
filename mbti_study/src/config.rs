// ********* Reference data structures ***********

use std::error::Error;
use std::fmt::Display;
use std::str::FromStr;

/// The text shown by selectors when no type has been picked yet.
pub const PLACEHOLDER: &str = "선택하세요";

/// One of the 16 personality types.
///
/// The set is closed: parsing any other string fails with
/// [`LookupError::UnknownCategory`].
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd)]
pub enum CategoryCode {
    INTJ,
    INTP,
    ENTJ,
    ENTP,
    INFJ,
    INFP,
    ENFJ,
    ENFP,
    ISTJ,
    ISFJ,
    ESTJ,
    ESFJ,
    ISTP,
    ISFP,
    ESTP,
    ESFP,
}

impl CategoryCode {
    /// All the codes, in the order used by selectors and reference tables.
    pub const ALL: [CategoryCode; 16] = [
        CategoryCode::INTJ,
        CategoryCode::INTP,
        CategoryCode::ENTJ,
        CategoryCode::ENTP,
        CategoryCode::INFJ,
        CategoryCode::INFP,
        CategoryCode::ENFJ,
        CategoryCode::ENFP,
        CategoryCode::ISTJ,
        CategoryCode::ISFJ,
        CategoryCode::ESTJ,
        CategoryCode::ESFJ,
        CategoryCode::ISTP,
        CategoryCode::ISFP,
        CategoryCode::ESTP,
        CategoryCode::ESFP,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryCode::INTJ => "INTJ",
            CategoryCode::INTP => "INTP",
            CategoryCode::ENTJ => "ENTJ",
            CategoryCode::ENTP => "ENTP",
            CategoryCode::INFJ => "INFJ",
            CategoryCode::INFP => "INFP",
            CategoryCode::ENFJ => "ENFJ",
            CategoryCode::ENFP => "ENFP",
            CategoryCode::ISTJ => "ISTJ",
            CategoryCode::ISFJ => "ISFJ",
            CategoryCode::ESTJ => "ESTJ",
            CategoryCode::ESFJ => "ESFJ",
            CategoryCode::ISTP => "ISTP",
            CategoryCode::ISFP => "ISFP",
            CategoryCode::ESTP => "ESTP",
            CategoryCode::ESFP => "ESFP",
        }
    }

    /// Position in [`CategoryCode::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    fn letter(&self, pos: usize) -> u8 {
        self.as_str().as_bytes()[pos]
    }

    pub fn is_extraverted(&self) -> bool {
        self.letter(0) == b'E'
    }

    pub fn is_intuitive(&self) -> bool {
        self.letter(1) == b'N'
    }

    pub fn is_thinking(&self) -> bool {
        self.letter(2) == b'T'
    }

    pub fn is_judging(&self) -> bool {
        self.letter(3) == b'J'
    }
}

impl Display for CategoryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryCode {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryCode::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| LookupError::UnknownCategory(s.to_string()))
    }
}

/// The static record associated with each type.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct CategoryProfile {
    pub title: &'static str,
    pub tips: [&'static str; 3],
    pub image: &'static str,
}

// ********* Input data structures ***********

/// A cell, as produced by the readers.
///
/// Readers do not interpret the content beyond what the file format tells them.
#[derive(PartialEq, Debug, Clone)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
}

impl Cell {
    /// Interprets some text from a file: blanks are empty, numbers are numbers.
    pub fn parse(s: &str) -> Cell {
        match s.trim() {
            "" => Cell::Empty,
            t => t
                .parse::<f64>()
                .map(Cell::Number)
                .unwrap_or_else(|_| Cell::Text(s.to_string())),
        }
    }

    /// The text of the cell, as it would be displayed.
    pub fn to_text(&self) -> String {
        match self {
            Cell::Empty => "".to_string(),
            Cell::Text(s) => s.clone(),
            Cell::Number(x) => x.to_string(),
        }
    }
}

/// A table with one header row. Every row has exactly as many cells as the header.
#[derive(PartialEq, Debug, Clone)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

// ******** Output data structures *********

#[derive(PartialEq, Debug, Clone)]
pub struct RankingEntry {
    pub country: String,
    /// The value in the selected column
    pub raw_value: f64,
    /// The sum over all the type columns of the row
    pub total: f64,
    pub ratio: f64,
}

#[derive(PartialEq, Debug, Clone)]
pub struct RankingResult {
    pub code: CategoryCode,
    /// Sorted by decreasing ratio. Equal ratios keep the order of the input.
    pub entries: Vec<RankingEntry>,
    /// Number of rows that had a positive total.
    pub rows_considered: usize,
    /// Countries whose total over the type columns is zero. They are not ranked.
    pub degenerate: Vec<String>,
}

/// Errors when selecting a type.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum LookupError {
    /// Nothing was selected (informational).
    NotSelected,
    UnknownCategory(String),
}

impl Error for LookupError {}

impl Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupError::NotSelected => write!(f, "no personality type selected"),
            LookupError::UnknownCategory(s) => write!(f, "unknown personality type {:?}", s),
        }
    }
}

/// Errors that prevent the ranking from being computed.
#[derive(PartialEq, Debug, Clone)]
pub enum RankingError {
    UnknownCategory(String),
    MissingCountryColumn {
        headers: Vec<String>,
    },
    MissingCategoryColumn {
        code: CategoryCode,
    },
    DuplicateCategoryColumn {
        code: CategoryCode,
    },
    /// A type column contains something that is not a non-negative number.
    /// Rows are numbered from 1, not counting the header.
    InvalidValue {
        row: usize,
        column: String,
        content: String,
    },
    /// The values of a row are too large to be summed.
    InvalidTotal {
        row: usize,
        country: String,
    },
    /// The table has a header but no data.
    NoRows,
    /// Every row has a zero total. The countries are listed.
    NoValidRows {
        excluded: Vec<String>,
    },
    InvalidTopK,
}

impl Error for RankingError {}

impl Display for RankingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RankingError::UnknownCategory(s) => write!(f, "unknown personality type {:?}", s),
            RankingError::MissingCountryColumn { headers } => write!(
                f,
                "no country column found (expected one of {:?}), got columns {:?}",
                crate::COUNTRY_HEADERS,
                headers
            ),
            RankingError::MissingCategoryColumn { code } => {
                write!(f, "column {} is not present in the data", code)
            }
            RankingError::DuplicateCategoryColumn { code } => {
                write!(f, "column {} appears more than once", code)
            }
            RankingError::InvalidValue {
                row,
                column,
                content,
            } => write!(
                f,
                "row {}, column {}: expected a non-negative number, got {:?}",
                row, column, content
            ),
            RankingError::InvalidTotal { row, country } => write!(
                f,
                "row {} ({}): the sum of the type columns is too large",
                row, country
            ),
            RankingError::NoRows => write!(f, "the data has no rows"),
            RankingError::NoValidRows { excluded } => write!(
                f,
                "no country has data for any type (all zero: {})",
                excluded.join(", ")
            ),
            RankingError::InvalidTopK => write!(f, "the number of countries to show must be at least 1"),
        }
    }
}

impl From<LookupError> for RankingError {
    fn from(e: LookupError) -> Self {
        match e {
            LookupError::NotSelected => RankingError::UnknownCategory("".to_string()),
            LookupError::UnknownCategory(s) => RankingError::UnknownCategory(s),
        }
    }
}

// ********* Configuration **********

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "쉬움",
            Difficulty::Normal => "보통",
            Difficulty::Hard => "어려움",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Normal
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "쉬움" | "easy" => Ok(Difficulty::Easy),
            "보통" | "normal" => Ok(Difficulty::Normal),
            "어려움" | "hard" => Ok(Difficulty::Hard),
            x => Err(format!("unknown difficulty {:?}", x)),
        }
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct RankingRules {
    /// How many countries to keep.
    pub top_k: usize,
}

impl RankingRules {
    pub const DEFAULT_RULES: RankingRules = RankingRules { top_k: 10 };
}
