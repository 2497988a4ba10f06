//! Example: bulk-fill a report sheet with a RowBuilder

use rowforge::prelude::*;

fn main() -> Result<()> {
    let mut workbook = Workbook::new();

    // Header plus data rows, three columns wide
    let mut builder = RowBuilder::for_sheet(&mut workbook, "Report", 1, 3)?;
    builder.add_row(&["region".into(), "units".into(), "audited".into()], &[1, 1, 1])?;
    builder.add_row(&["north".into(), 1250.into(), true.into()], &[0, 0, 0])?;
    builder.add_row(&["south".into(), 940.into(), false.into()], &[0, 0, 0])?;
    let rows_written = builder.rows_written();

    // Patch a single cell afterwards through the direct setters
    let grid = workbook.grid_mut("Report")?;
    grid.set_cell_str(2, 0, "south-east", &mut KeepStyle)?;

    for row in grid.rows() {
        for cell in row.cells() {
            print!("{}={:?} ({})\t", cell.reference(), cell.value(), cell.cell_type());
        }
        println!();
    }
    println!("{} rows written", rows_written);

    Ok(())
}
