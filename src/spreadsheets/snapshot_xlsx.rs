use crate::domain::{DeliveryRecord, Summary};
use crate::errors::ServerError;
use chrono::{DateTime, Utc};
use rust_xlsxwriter::{Format, Workbook};

pub const SNAPSHOT_HEADERS: [&str; 7] = [
    "Driver",
    "Zone",
    "Substitute",
    "Locations",
    "System pkgs",
    "Off-system pkgs",
    "Total",
];

/// `worksheet-DD-MM-YYYY.xlsx`, dated by the view being exported.
pub fn snapshot_filename(date: DateTime<Utc>) -> String {
    format!("worksheet-{}.xlsx", date.format("%d-%m-%Y"))
}

fn xlsx_err(what: &str) -> impl Fn(rust_xlsxwriter::XlsxError) -> ServerError + '_ {
    move |e| ServerError::XlsxError(format!("Failed to write {what}: {e}"))
}

/// One sheet: title, summary block, then one row per record.
pub fn export_snapshot_xlsx(
    records: &[DeliveryRecord],
    summary: &Summary,
    title: &str,
) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, title, &bold)
        .map_err(xlsx_err("title"))?;

    let totals = [
        ("Drivers", summary.driver_count as f64),
        ("Substitutes", summary.substitute_count as f64),
        ("System pkgs", summary.system_package_total as f64),
        ("Off-system pkgs", summary.off_system_package_total as f64),
        ("Total pkgs", summary.total_package_count as f64),
    ];
    for (i, (label, value)) in totals.iter().enumerate() {
        let r = (i + 2) as u32;
        sheet.write_string(r, 0, *label).map_err(xlsx_err("summary label"))?;
        sheet.write_number(r, 1, *value).map_err(xlsx_err("summary value"))?;
    }

    let header_row = (totals.len() + 3) as u32;
    for (col, header) in SNAPSHOT_HEADERS.iter().enumerate() {
        sheet
            .write_string_with_format(header_row, col as u16, *header, &bold)
            .map_err(xlsx_err("header"))?;
    }

    for (i, record) in records.iter().enumerate() {
        let r = header_row + 1 + i as u32;

        sheet
            .write_string(r, 0, &record.driver_name)
            .map_err(xlsx_err("driver"))?;
        sheet
            .write_string(r, 1, &record.zone)
            .map_err(xlsx_err("zone"))?;
        sheet
            .write_string(r, 2, if record.is_substitute { "Yes" } else { "No" })
            .map_err(xlsx_err("substitute"))?;
        sheet
            .write_string(r, 3, record.locations.join(", "))
            .map_err(xlsx_err("locations"))?;
        sheet
            .write_number(r, 4, f64::from(record.system_packages))
            .map_err(xlsx_err("system packages"))?;
        sheet
            .write_number(r, 5, f64::from(record.off_system_packages))
            .map_err(xlsx_err("off-system packages"))?;
        sheet
            .write_number(r, 6, record.total_packages() as f64)
            .map_err(xlsx_err("total"))?;
    }

    sheet.set_column_width(0, 24).map_err(xlsx_err("column width"))?;
    sheet.set_column_width(3, 40).map_err(xlsx_err("column width"))?;

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))
}
