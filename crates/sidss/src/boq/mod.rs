//! Bill-of-quantities import from spreadsheet CSV exports.

mod parser;

use std::io::Read;
use std::path::Path;

use crate::evaluation::BillOfQuantitiesItem;

#[derive(Debug, thiserror::Error)]
pub enum BoqImportError {
    #[error("failed to read bill of quantities: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid bill of quantities CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("bill of quantities CSV has no '{0}' column")]
    MissingColumn(&'static str),
}

/// Reads `name,quantity,unitCost,carbonFactor` rows. Blank or non-numeric cells become 0.
pub struct BoqImporter;

impl BoqImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<BillOfQuantitiesItem>, BoqImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<BillOfQuantitiesItem>, BoqImportError> {
        parser::parse_items(reader)
    }
}
