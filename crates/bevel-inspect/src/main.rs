//! Inspector entry point.
//!
//! Usage: `bevel-inspect [SETTINGS.json] [--json]`

use bevel_core::palette_store;
use bevel_inspect::{InspectError, InspectResult, Inspection, load_settings, palette_summary, render_sheet};
use bevel_render::RecordingSurface;
use std::path::Path;

fn run() -> InspectResult<()> {
    let mut json = false;
    let mut path = None;
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else if arg.starts_with("--") {
            return Err(InspectError::Argument(arg));
        } else {
            path = Some(arg);
        }
    }

    let settings = load_settings(path.as_deref().map(Path::new))?;

    let store = palette_store();
    let palettes = store.reload(&settings.colors, &settings.palette_options(), &settings.policy);
    let mut surface = RecordingSurface::new();
    let sheet = render_sheet(&mut surface, &settings, &palettes);
    let inspection = Inspection { generation: store.generation(), ramps: palette_summary(&palettes), sheet };

    if json {
        println!("{}", inspection.to_json()?);
    } else {
        for ramp in &inspection.ramps {
            println!("{:<22} {}", ramp.name, ramp.shades.join(" "));
        }
        for panel in &inspection.sheet.panels {
            println!("{:<22} {:<10} rounding={:04b} primitives={}", panel.label, panel.border, panel.rounding, panel.primitives);
        }
    }
    log::info!(
        "Rendered {} panels: {} primitives, {} paints, {} skipped",
        inspection.sheet.panels.len(),
        inspection.sheet.primitives,
        inspection.sheet.paints,
        inspection.sheet.skipped
    );
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Starting bevel-inspect");

    if let Err(e) = run() {
        log::error!("{}", e);
        eprintln!("bevel-inspect: {}", e);
        std::process::exit(1);
    }
}
