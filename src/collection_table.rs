use std::{fs, io, path::Path};

use csv::{ReaderBuilder, Writer};

use crate::error::DeckError;
use crate::utilities::constants::NAME_COLUMN;

/// A collection export kept as plain text cells so unknown columns survive the round-trip
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CollectionTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, DeckError> {
        if !headers.iter().any(|header| header == NAME_COLUMN) {
            return Err(DeckError::MissingColumn(NAME_COLUMN.to_string()));
        }
        let width = headers.len();
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(index, mut row)| {
                if row.len() > width {
                    return Err(DeckError::RowTooLong {
                        row: index + 1,
                        fields: row.len(),
                        columns: width,
                    });
                }
                row.resize(width, String::new());
                Ok(row)
            })
            .collect::<Result<Vec<Vec<String>>, DeckError>>()?;
        Ok(CollectionTable { headers, rows })
    }

    pub fn read_from_path(path: &Path) -> Result<Self, DeckError> {
        let file = fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, DeckError> {
        let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);

        let headers = rdr
            .headers()?
            .iter()
            .map(|header| header.trim_start_matches('\u{feff}').trim().to_string())
            .collect::<Vec<String>>();

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Self::new(headers, rows)
    }

    pub fn write_to_path(&self, path: &Path) -> Result<(), DeckError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut writer = Writer::from_path(path)?;
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == column)
    }

    /// Appends `column` with a blank cell in every row unless it already exists
    pub fn ensure_column(&mut self, column: &str) -> usize {
        if let Some(index) = self.column_index(column) {
            return index;
        }
        self.headers.push(column.to_string());
        for row in &mut self.rows {
            row.push(String::new());
        }
        self.headers.len() - 1
    }

    /// Cell value for `column`, blank when the column does not exist
    pub fn value<'a>(&self, row: &'a [String], column: &str) -> &'a str {
        self.column_index(column)
            .and_then(|index| row.get(index))
            .map_or("", String::as_str)
    }

    /// Stable ascending sort on the card name
    pub fn sort_by_name(&mut self) {
        if let Some(index) = self.column_index(NAME_COLUMN) {
            self.rows.sort_by(|a, b| a[index].cmp(&b[index]));
        }
    }

    pub fn with_rows(&self, rows: Vec<Vec<String>>) -> Result<Self, DeckError> {
        Self::new(self.headers().to_vec(), rows)
    }
}
