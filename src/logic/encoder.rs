use crate::{
    error::{GardenError, Section},
    logic::{
        codes::{encode_row, CodeTable},
        decoder::ACTIVE_PLOT,
        version::{
            CROP_PREFIX, CURRENT_VERSION, FERTILIZER_PREFIX, PLOT_PREFIX, ROW_DELIMITER,
            SECTION_DELIMITER,
        },
    },
    models::{
        crop::{Crop, Fertilizer},
        garden::{GridTile, ParsedGardenData},
        MAX_TILES, PLOT_SIZE,
    },
};

/// Encodes one code per tile row, dropping trailing empty cells and trailing empty rows.
fn encode_rows<T: CodeTable>(
    data: &ParsedGardenData,
    pick: impl Fn(&GridTile) -> Option<T>,
) -> String {
    let mut rows: Vec<String> = data
        .tiles
        .iter()
        .map(|row| {
            let mut cells: Vec<Option<T>> = row
                .iter()
                .map(|tile| if tile.is_active { pick(tile) } else { None })
                .collect();
            while cells.last() == Some(&None) {
                cells.pop();
            }
            encode_row(cells)
        })
        .collect();
    while rows.last().is_some_and(String::is_empty) {
        rows.pop();
    }
    rows.join(&ROW_DELIMITER.to_string())
}

/// Encodes a garden into a canonical current-format save code.
///
/// Inactive tiles and empty tiles are written as `N`, trailing empties are
/// dropped, and the fertilizer section is omitted when no tile is fertilized.
/// Watering state is not part of the format.
pub fn encode(data: &ParsedGardenData) -> Result<String, GardenError> {
    let plots = &data.active_plots;
    if plots.is_empty() || plots.len() > PLOT_SIZE {
        return Err(GardenError::malformed(
            Section::PlotMask,
            format!("{} plot rows, expected 1 to {PLOT_SIZE}", plots.len()),
        ));
    }
    let plot_columns = plots.iter().map(Vec::len).max().unwrap_or(0);
    if plot_columns == 0 || plot_columns > PLOT_SIZE {
        return Err(GardenError::malformed(
            Section::PlotMask,
            format!("{plot_columns} plot columns, expected 1 to {PLOT_SIZE}"),
        ));
    }
    if data.tiles.len() > MAX_TILES || data.tiles.iter().any(|row| row.len() > MAX_TILES) {
        return Err(GardenError::malformed(
            Section::Crops,
            format!("tile grid exceeds {MAX_TILES}x{MAX_TILES}"),
        ));
    }

    let mask = plots
        .iter()
        .map(|row| {
            let mut flags: String = row
                .iter()
                .map(|active| if *active { ACTIVE_PLOT } else { '0' })
                .collect();
            // Keep the mask rectangular so the decoded grid keeps its width.
            while flags.len() < plot_columns {
                flags.push('0');
            }
            flags
        })
        .collect::<Vec<_>>()
        .join(&ROW_DELIMITER.to_string());

    let crop_rows = encode_rows::<Crop>(data, |tile| tile.crop_type);
    let mut code = format!(
        "{CURRENT_VERSION}{SECTION_DELIMITER}{PLOT_PREFIX}{mask}{SECTION_DELIMITER}{CROP_PREFIX}{crop_rows}"
    );

    let fertilized = data
        .tiles_iter()
        .any(|t| t.is_active && t.fertilizer_type.is_some());
    if fertilized {
        code.push(SECTION_DELIMITER);
        code.push_str(FERTILIZER_PREFIX);
        code.push_str(&encode_rows::<Fertilizer>(data, |tile| tile.fertilizer_type));
    }
    Ok(code)
}
