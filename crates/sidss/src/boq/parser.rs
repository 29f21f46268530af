use std::io::Read;

use csv::StringRecord;

use super::BoqImportError;
use crate::evaluation::intake::coerce_number;
use crate::evaluation::BillOfQuantitiesItem;

/// Column positions resolved from the header row.
#[derive(Debug, Default)]
struct BoqColumns {
    name: Option<usize>,
    quantity: Option<usize>,
    unit_cost: Option<usize>,
    carbon_factor: Option<usize>,
}

impl BoqColumns {
    fn from_headers(headers: &StringRecord) -> Result<Self, BoqImportError> {
        let mut columns = BoqColumns::default();
        for (index, header) in headers.iter().enumerate() {
            let slot = match normalize_header(header).as_str() {
                "name" | "material" | "item" => &mut columns.name,
                "quantity" | "qty" => &mut columns.quantity,
                "unitcost" => &mut columns.unit_cost,
                "carbonfactor" => &mut columns.carbon_factor,
                _ => continue,
            };
            slot.get_or_insert(index);
        }

        if columns.quantity.is_none() {
            return Err(BoqImportError::MissingColumn("quantity"));
        }
        Ok(columns)
    }
}

pub(crate) fn parse_items<R: Read>(
    reader: R,
) -> Result<Vec<BillOfQuantitiesItem>, BoqImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let columns = BoqColumns::from_headers(csv_reader.headers()?)?;
    let mut items = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        if record.iter().all(|cell| cell.is_empty()) {
            continue;
        }

        let cell = |column: Option<usize>| {
            column
                .and_then(|index| record.get(index))
                .unwrap_or("")
        };
        items.push(BillOfQuantitiesItem {
            name: cell(columns.name).to_string(),
            quantity: coerce_number(cell(columns.quantity)),
            unit_cost: coerce_number(cell(columns.unit_cost)),
            carbon_factor: coerce_number(cell(columns.carbon_factor)),
        });
    }

    Ok(items)
}

/// Lowercase with BOM, whitespace, `_` and `-` removed, so `Unit Cost` matches `unitCost`.
fn normalize_header(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '_' | '-' | '\u{feff}'))
        .collect::<String>()
        .to_ascii_lowercase()
}
