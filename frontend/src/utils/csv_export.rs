/// Serializes table rows (header row included) as CSV text.
pub fn rows_to_csv<R, C>(rows: R) -> Result<String, csv::Error>
where
    R: IntoIterator<Item = C>,
    C: IntoIterator,
    C::Item: AsRef<[u8]>,
{
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for row in rows {
        writer.write_record(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;
    let mut text = String::from_utf8_lossy(&bytes).into_owned();
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// Scrapes `selector tr` rows (`td, th` cells) from the page and downloads
/// them as `filename`.
#[cfg(target_arch = "wasm32")]
pub fn export_table_to_csv(selector: &str, filename: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document")?;
    let rows = document
        .query_selector_all(&format!("{} tr", selector))
        .map_err(|_| format!("Invalid table selector {}", selector))?;

    let mut table = Vec::with_capacity(rows.length() as usize);
    for i in 0..rows.length() {
        let Some(row) = rows.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
            continue;
        };
        let cells = row
            .query_selector_all("td, th")
            .map_err(|_| "Failed to read table cells".to_string())?;
        let mut values = Vec::with_capacity(cells.length() as usize);
        for j in 0..cells.length() {
            let text = cells
                .item(j)
                .and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok())
                .map(|cell| cell.inner_text())
                .unwrap_or_default();
            values.push(text);
        }
        table.push(values);
    }

    let csv = rows_to_csv(table).map_err(|e| format!("Failed to build CSV: {}", e))?;
    log::info!("Exporting {} rows from {} to {}", rows.length(), selector, filename);
    crate::utils::trigger_csv_download(filename, &csv)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn export_table_to_csv(selector: &str, _filename: &str) -> Result<(), String> {
    Err(format!("Cannot export {} outside the browser", selector))
}
