use log::debug;

use crate::{
    error::{GardenError, Section},
    logic::{
        aggregate::{dimensions, summarize},
        codes::{scan_row, CodeTable},
        encoder::encode,
        version::{
            CROP_PREFIX, CURRENT_VERSION, FERTILIZER_PREFIX, LEGACY_CROP_PREFIX, PLOT_PREFIX,
            ROW_DELIMITER, SECTION_DELIMITER,
        },
    },
    models::{
        crop::{Crop, Fertilizer},
        garden::{GridTile, ParsedGardenData},
        version::SaveVersion,
        Matrix, PLOT_SIZE,
    },
};

/// Character marking an active plot in the `D-` section.
pub const ACTIVE_PLOT: char = '1';

/// Raw sections of a current-format save code, before interpretation.
#[derive(Debug, Default)]
struct Sections<'a> {
    plots: Option<&'a str>,
    crops: Option<&'a str>,
    fertilizers: Option<&'a str>,
}

fn split_sections(body: &str) -> Result<Sections<'_>, GardenError> {
    let mut sections = Sections::default();
    if body.is_empty() {
        return Ok(sections);
    }
    for section in body.split(SECTION_DELIMITER) {
        if section.is_empty() {
            return Err(GardenError::malformed(Section::Unknown, "empty section"));
        }
        let (slot, rows, which) = if let Some(rows) = section.strip_prefix(PLOT_PREFIX) {
            (&mut sections.plots, rows, Section::PlotMask)
        } else if let Some(rows) = section.strip_prefix(CROP_PREFIX) {
            (&mut sections.crops, rows, Section::Crops)
        } else if let Some(rows) = section.strip_prefix(FERTILIZER_PREFIX) {
            (&mut sections.fertilizers, rows, Section::Fertilizers)
        } else if section.starts_with(LEGACY_CROP_PREFIX) {
            return Err(GardenError::malformed(
                Section::Crops,
                format!("legacy prefix {LEGACY_CROP_PREFIX} found; upgrade the code first"),
            ));
        } else {
            return Err(GardenError::malformed(
                Section::Unknown,
                format!("unexpected section '{section}'"),
            ));
        };
        if slot.replace(rows).is_some() {
            return Err(GardenError::malformed(which, "section appears twice"));
        }
    }
    Ok(sections)
}

/// Parses the `D-` rows into the plot-level activity matrix, padded to a rectangle.
pub fn parse_plot_mask(rows: &str) -> Result<Matrix<bool>, GardenError> {
    if rows.is_empty() {
        return Err(GardenError::malformed(Section::PlotMask, "no plot rows"));
    }
    let rows: Vec<&str> = rows.split(ROW_DELIMITER).collect();
    if rows.len() > PLOT_SIZE {
        return Err(GardenError::malformed(
            Section::PlotMask,
            format!("{} plot rows exceed the maximum of {PLOT_SIZE}", rows.len()),
        ));
    }
    let columns = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
    if columns == 0 {
        return Err(GardenError::malformed(Section::PlotMask, "no plot columns"));
    }
    if columns > PLOT_SIZE {
        return Err(GardenError::malformed(
            Section::PlotMask,
            format!("{columns} plot columns exceed the maximum of {PLOT_SIZE}"),
        ));
    }
    Ok(rows
        .iter()
        .map(|row| {
            let mut flags: Vec<bool> = row.chars().map(|c| c == ACTIVE_PLOT).collect();
            flags.resize(columns, false);
            flags
        })
        .collect())
}

/// Expands each plot into a `PLOT_SIZE`×`PLOT_SIZE` block of tile flags.
pub fn expand_plot_mask(plots: &Matrix<bool>) -> Matrix<bool> {
    plots
        .iter()
        .flat_map(|plot_row| {
            let tile_row: Vec<bool> = plot_row
                .iter()
                .flat_map(|active| std::iter::repeat(*active).take(PLOT_SIZE))
                .collect();
            std::iter::repeat(tile_row).take(PLOT_SIZE)
        })
        .collect()
}

/// Scans a crop or fertilizer section into a grid of `rows`×`columns` cells.
/// Missing rows and missing trailing cells are empty.
fn parse_code_rows<T: CodeTable>(
    rows: &str,
    section: Section,
    tile_rows: usize,
    tile_columns: usize,
) -> Result<Matrix<Option<T>>, GardenError> {
    let mut grid: Matrix<Option<T>> = vec![vec![None; tile_columns]; tile_rows];
    if rows.is_empty() {
        return Ok(grid);
    }
    let rows: Vec<&str> = rows.split(ROW_DELIMITER).collect();
    if rows.len() > tile_rows {
        return Err(GardenError::malformed(
            section,
            format!("{} rows exceed the {tile_rows} tile rows of the plot mask", rows.len()),
        ));
    }
    for (r, row) in rows.iter().enumerate() {
        let cells = scan_row::<T>(row)
            .map_err(|e| GardenError::malformed(section, format!("row {}: {e}", r + 1)))?;
        if cells.len() > tile_columns {
            return Err(GardenError::malformed(
                section,
                format!(
                    "row {} '{row}' holds {} tiles but the grid is {tile_columns} wide",
                    r + 1,
                    cells.len()
                ),
            ));
        }
        for (c, cell) in cells.into_iter().enumerate() {
            grid[r][c] = cell;
        }
    }
    Ok(grid)
}

/// Decodes a current-format save code into a tile grid with its crop summary.
pub fn decode(code: &str) -> Result<ParsedGardenData, GardenError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(GardenError::malformed(Section::Version, "save code is empty"));
    }
    let (tag, body) = code.split_once(SECTION_DELIMITER).unwrap_or((code, ""));
    let version: SaveVersion = tag.parse()?;
    if version != CURRENT_VERSION {
        return Err(GardenError::malformed(
            Section::Version,
            format!("expected {CURRENT_VERSION}, found {version}; upgrade the code first"),
        ));
    }

    let sections = split_sections(body)?;
    let plot_rows = sections.plots.ok_or_else(|| {
        GardenError::malformed(Section::PlotMask, format!("missing {PLOT_PREFIX} section"))
    })?;
    let crop_rows = sections.crops.ok_or_else(|| {
        GardenError::malformed(Section::Crops, format!("missing {CROP_PREFIX} section"))
    })?;

    let active_plots = parse_plot_mask(plot_rows)?;
    let tile_mask = expand_plot_mask(&active_plots);
    let tile_rows = tile_mask.len();
    let tile_columns = tile_mask.first().map_or(0, Vec::len);
    debug!("plot mask {plot_rows} expands to {tile_rows}x{tile_columns} tiles");

    let crops = parse_code_rows::<Crop>(crop_rows, Section::Crops, tile_rows, tile_columns)?;
    let fertilizers = match sections.fertilizers {
        Some(rows) => {
            parse_code_rows::<Fertilizer>(rows, Section::Fertilizers, tile_rows, tile_columns)?
        }
        None => vec![vec![None; tile_columns]; tile_rows],
    };

    let tiles: Matrix<GridTile> = tile_mask
        .iter()
        .enumerate()
        .map(|(r, mask_row)| {
            mask_row
                .iter()
                .enumerate()
                .map(|(c, active)| {
                    let crop = crops[r][c];
                    let fertilizer = fertilizers[r][c];
                    if *active {
                        GridTile::planted(r, c, crop, fertilizer)
                    } else {
                        if crop.is_some() || fertilizer.is_some() {
                            debug!("ignoring codes on inactive tile ({r}, {c})");
                        }
                        GridTile::inactive(r, c)
                    }
                })
                .collect()
        })
        .collect();

    let crop_summary = summarize(&tiles);
    let mut data = ParsedGardenData {
        dimensions: dimensions(&tiles),
        tiles,
        active_plots,
        crop_summary,
        version,
        save_code: String::new(),
    };
    // Stored in canonical form so that re-encoding reproduces it exactly.
    data.save_code = encode(&data)?;
    if data.save_code != code {
        debug!("save code {code} normalised to {}", data.save_code);
    }
    Ok(data)
}
