// Primitives for reading CSV files.

use log::debug;
use snafu::prelude::*;

use std::io::Read;
use std::path::Path;

use mbti_study::builder::TableBuilder;
use mbti_study::{Cell, Table};

use crate::pages::io_common::clean_headers;
use crate::pages::*;

pub fn read_csv_table(path: &Path) -> BAppResult<Table> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .context(CsvOpenSnafu {
            path: path.display().to_string(),
        })?;
    read_csv_records(rdr)
}

fn read_csv_records<R: Read>(mut rdr: csv::Reader<R>) -> BAppResult<Table> {
    let headers = clean_headers(rdr.headers().context(CsvLineParseSnafu { lineno: 1usize })?);
    debug!("read_csv_records: headers: {:?}", headers);
    let mut builder = TableBuilder::new(&headers);
    for (idx, line_r) in rdr.records().enumerate() {
        // The header is line 1
        let lineno = idx + 2;
        let line = line_r.context(CsvLineParseSnafu { lineno })?;
        debug!("read_csv_records: lineno: {:?} row: {:?}", lineno, line);
        builder.add_row(line.iter().map(Cell::parse).collect());
    }
    debug!("read_csv_records: {} rows", builder.num_rows());
    Ok(builder.build())
}
