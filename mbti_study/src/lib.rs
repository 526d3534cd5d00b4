mod config;
pub mod builder;
pub mod manual;
pub mod plan;
pub mod profiles;

use log::{debug, info, warn};

use std::collections::HashMap;

pub use crate::config::*;
pub use crate::plan::{make_plan, PlanGroup, PlanStep, StudyPlan};
pub use crate::profiles::{gallery, lookup, profile};

/// The accepted names for the column holding the country names.
/// They are compared without regard to case.
pub const COUNTRY_HEADERS: [&str; 5] = ["country", "countries", "국가", "국가명", "country_name"];

// **** Private structures ****

// A type column: its position in the table and its code.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
struct CategoryColumn {
    index: usize,
    code: CategoryCode,
}

// A row that passed the checks. Invariant: the total is finite and non-negative.
#[derive(PartialEq, Debug, Clone)]
struct RowInternal {
    country: String,
    value: f64,
    total: f64,
}

/// Finds the column that holds the names of the countries.
///
/// The first header that matches one of [`COUNTRY_HEADERS`] wins.
pub fn find_country_column(headers: &[String]) -> Result<usize, RankingError> {
    headers
        .iter()
        .position(|h| {
            let h = h.trim().to_lowercase();
            COUNTRY_HEADERS.iter().any(|c| *c == h)
        })
        .ok_or_else(|| RankingError::MissingCountryColumn {
            headers: headers.to_vec(),
        })
}

/// The columns named after a type, in the order of the table.
fn category_columns(headers: &[String]) -> Result<Vec<CategoryColumn>, RankingError> {
    let mut seen: HashMap<CategoryCode, usize> = HashMap::new();
    let mut res: Vec<CategoryColumn> = Vec::new();
    for (index, h) in headers.iter().enumerate() {
        if let Ok(code) = h.trim().parse::<CategoryCode>() {
            if seen.insert(code, index).is_some() {
                return Err(RankingError::DuplicateCategoryColumn { code });
            }
            res.push(CategoryColumn { index, code });
        }
    }
    Ok(res)
}

fn read_value(cell: &Cell, row: usize, column: &str) -> Result<f64, RankingError> {
    let x = match cell {
        Cell::Empty => Some(0.0),
        Cell::Number(x) => Some(*x),
        Cell::Text(s) => s.trim().parse::<f64>().ok(),
    };
    match x {
        Some(x) if x.is_finite() && x >= 0.0 => Ok(x),
        _ => Err(RankingError::InvalidValue {
            row,
            column: column.to_string(),
            content: cell.to_text(),
        }),
    }
}

/// Ranks the countries of a table by the share of the given type.
///
/// For every row, the ratio is the value in the column of the selected type divided
/// by the sum over all the type columns present in the table. Rows whose sum is zero
/// have no ratio: they are left out of the ranking and reported in
/// [`RankingResult::degenerate`].
///
/// Arguments:
/// * `table` the data, with one row per country
/// * `code` the selected type. It must be one of the columns of the table.
/// * `rules` how many countries to keep
pub fn rank_countries(
    table: &Table,
    code: CategoryCode,
    rules: &RankingRules,
) -> Result<RankingResult, RankingError> {
    info!(
        "rank_countries: {} rows, type {}, rules: {:?}",
        table.rows.len(),
        code,
        rules
    );
    if rules.top_k == 0 {
        return Err(RankingError::InvalidTopK);
    }

    let country_idx = find_country_column(&table.headers)?;
    let columns = category_columns(&table.headers)?;
    debug!(
        "rank_countries: country column {:?}, type columns {:?}",
        country_idx, columns
    );
    let selected = columns
        .iter()
        .find(|c| c.code == code)
        .ok_or(RankingError::MissingCategoryColumn { code })?;
    if table.rows.is_empty() {
        return Err(RankingError::NoRows);
    }

    let mut rows: Vec<RowInternal> = Vec::new();
    let mut degenerate: Vec<String> = Vec::new();
    for (idx, cells) in table.rows.iter().enumerate() {
        let lineno = idx + 1;
        let country = cells
            .get(country_idx)
            .map(|c| c.to_text().trim().to_string())
            .unwrap_or_default();
        let mut total = 0.0;
        let mut value = 0.0;
        for col in columns.iter() {
            let x = read_value(
                cells.get(col.index).unwrap_or(&Cell::Empty),
                lineno,
                col.code.as_str(),
            )?;
            total += x;
            if col.index == selected.index {
                value = x;
            }
        }
        if !total.is_finite() {
            return Err(RankingError::InvalidTotal {
                row: lineno,
                country,
            });
        }
        if total > 0.0 {
            rows.push(RowInternal {
                country,
                value,
                total,
            });
        } else {
            warn!(
                "rank_countries: row {} ({:?}): all the type columns are zero, skipping",
                lineno, country
            );
            degenerate.push(country);
        }
    }

    let rows_considered = rows.len();
    if rows_considered == 0 {
        return Err(RankingError::NoValidRows {
            excluded: degenerate,
        });
    }
    let mut entries: Vec<RankingEntry> = rows
        .into_iter()
        .map(|r| RankingEntry {
            ratio: r.value / r.total,
            country: r.country,
            raw_value: r.value,
            total: r.total,
        })
        .collect();
    // Stable: equal ratios keep the order of the table.
    entries.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));
    entries.truncate(rules.top_k);

    for (idx, e) in entries.iter().enumerate() {
        info!(
            "{:>3}. {:<24} {:>10} / {:<10} {:.4}",
            idx + 1,
            e.country,
            e.raw_value,
            e.total,
            e.ratio
        );
    }

    Ok(RankingResult {
        code,
        entries,
        rows_considered,
        degenerate,
    })
}

/// Same as [`rank_countries`], with the type given as text (for example a column header
/// or a user selection).
pub fn rank_countries_by_name(
    table: &Table,
    code: &str,
    rules: &RankingRules,
) -> Result<RankingResult, RankingError> {
    let code: CategoryCode = code.parse()?;
    rank_countries(table, code, rules)
}
