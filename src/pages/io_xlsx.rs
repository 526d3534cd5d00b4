// Reading Excel workbooks.

use calamine::{open_workbook, DataType, Range, Reader, Xlsx};
use log::debug;
use snafu::prelude::*;

use std::path::Path;

use mbti_study::builder::TableBuilder;
use mbti_study::{Cell, Table};

use crate::pages::io_common::clean_headers;
use crate::pages::*;

/// Reads a worksheet into a table. The first row holds the headers.
///
/// Without a worksheet name, the first worksheet of the workbook is used.
pub fn read_xlsx_table(path: &Path, worksheet_name: Option<&str>) -> BAppResult<Table> {
    let wrange = get_range(path, worksheet_name)?;

    let mut iter = wrange.rows();
    let header = iter.next().context(EmptyExcelSnafu {
        path: path.display().to_string(),
    })?;
    let headers = clean_headers(header.iter().map(|c| to_cell(c).to_text()));
    debug!("read_xlsx_table: headers: {:?}", headers);

    let mut builder = TableBuilder::new(&headers);
    for (idx, row) in iter.enumerate() {
        debug!("read_xlsx_table: idx: {:?} row: {:?}", idx, row);
        builder.add_row(row.iter().map(to_cell).collect());
    }
    Ok(builder.build())
}

fn get_range(path: &Path, worksheet_name: Option<&str>) -> BAppResult<Range<DataType>> {
    debug!(
        "read_xlsx_table: path: {:?} worksheet: {:?}",
        path, worksheet_name
    );
    let path_s = path.display().to_string();
    let mut workbook: Xlsx<_> =
        open_workbook(path).context(OpeningExcelSnafu { path: path_s.clone() })?;

    let wrange = match worksheet_name {
        // A worksheet name was provided, use it.
        Some(name) => workbook
            .worksheet_range(name)
            .context(MissingWorksheetSnafu {
                path: path_s.clone(),
                name,
            })?
            .context(OpeningExcelSnafu { path: path_s })?,
        None => workbook
            .worksheet_range_at(0)
            .context(EmptyExcelSnafu {
                path: path_s.clone(),
            })?
            .context(OpeningExcelSnafu { path: path_s })?,
    };
    Ok(wrange)
}

fn to_cell(cell: &DataType) -> Cell {
    match cell {
        DataType::Empty => Cell::Empty,
        DataType::Int(i) => Cell::Number(*i as f64),
        DataType::Float(f) => Cell::Number(*f),
        // Numbers are sometimes stored as text.
        DataType::String(s) => Cell::parse(s),
        x => Cell::Text(format!("{:?}", x)),
    }
}
