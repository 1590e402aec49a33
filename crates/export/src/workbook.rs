//! Workbook model and rendering.

use chrono::NaiveDateTime;
use thiserror::Error;

use ombor_inventory::record::CSV_COLUMNS;
use ombor_inventory::variants::encode;
use ombor_inventory::ProductRecord;

/// Sheet holding every record with the full column set.
pub const ALL_PRODUCTS_SHEET: &str = "Barcha_Mahsulotlar";

/// Sheet mapping product ids to names and image paths.
pub const ID_IMAGES_SHEET: &str = "Mahsulot_ID_Rasmlar";

/// Category sheet names are cut to this many characters, a leftover of the
/// spreadsheet tab-name limit the historic exports were built against.
pub const SHEET_NAME_LIMIT: usize = 30;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to render sheet: {0}")]
    Render(#[from] csv::Error),
}

/// One tabular sheet of the export.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    fn new(name: impl Into<String>, header: &[&str]) -> Self {
        Self {
            name: name.into(),
            header: header.iter().map(|column| column.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Render this sheet to CSV bytes.
    pub fn to_csv_bytes(&self) -> Result<Vec<u8>, ExportError> {
        let mut buf = Vec::new();
        {
            let mut writer = csv::Writer::from_writer(&mut buf);
            writer.write_record(&self.header)?;
            for row in &self.rows {
                writer.write_record(row)?;
            }
            writer.flush().map_err(csv::Error::from)?;
        }
        Ok(buf)
    }
}

/// The assembled export: sheets in the order they are offered.
#[derive(Debug, Clone, PartialEq)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }
}

/// Build the export workbook for a record collection.
///
/// Sheets: [`ALL_PRODUCTS_SHEET`] first, then one sheet per category in
/// encounter order, then [`ID_IMAGES_SHEET`]. Category names are cut to
/// [`SHEET_NAME_LIMIT`] characters; categories that collide after the cut
/// share the first sheet rather than producing a duplicate name.
pub fn build_workbook(records: &[ProductRecord]) -> Workbook {
    let mut all = Sheet::new(ALL_PRODUCTS_SHEET, &CSV_COLUMNS);
    for record in records {
        all.rows.push(full_row(record));
    }

    let mut category_sheets: Vec<Sheet> = Vec::new();
    for record in records {
        let name: String = record.category.chars().take(SHEET_NAME_LIMIT).collect();
        let index = match category_sheets.iter().position(|sheet| sheet.name == name) {
            Some(index) => index,
            None => {
                category_sheets.push(Sheet::new(name, &CSV_COLUMNS));
                category_sheets.len() - 1
            }
        };
        category_sheets[index].rows.push(full_row(record));
    }

    let mut id_images = Sheet::new(ID_IMAGES_SHEET, &["product_id", "product_name", "image_path"]);
    for record in records {
        id_images.rows.push(vec![
            record.product_id.to_string(),
            record.name.clone(),
            record.image_ref.clone().unwrap_or_default(),
        ]);
    }

    let mut sheets = Vec::with_capacity(category_sheets.len() + 2);
    sheets.push(all);
    sheets.extend(category_sheets);
    sheets.push(id_images);
    Workbook { sheets }
}

/// Stem of the download filename, timestamped like the historic exports.
pub fn download_file_name(now: NaiveDateTime) -> String {
    format!("ombor_malumotlari_{}", now.format("%Y-%m-%d_%H-%M-%S"))
}

fn full_row(record: &ProductRecord) -> Vec<String> {
    vec![
        record.product_id.to_string(),
        record.name.clone(),
        record.category.clone(),
        record.country_of_origin.clone(),
        record.store_id.clone(),
        record.manager.clone(),
        record.image_ref.clone().unwrap_or_default(),
        encode(&record.variants),
        format_price(record.unit_price),
    ]
}

/// Whole prices print without a fractional part, matching how they were
/// entered; anything else keeps its digits.
fn format_price(price: f64) -> String {
    if price.fract() == 0.0 && price.abs() < 1e15 {
        format!("{}", price as i64)
    } else {
        price.to_string()
    }
}
