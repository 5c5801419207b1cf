use pcblayout_rs::{parts, Pcb, Route, DEFAULT_TRACE_WIDTH};

fn main() {
    // A minimal ATtiny45 board: microcontroller, ISP header, and a
    // pull-up resistor on reset.
    let mut pcb = Pcb::new(0.0, 0.0, 1.6, 1.0);

    let mcu = pcb.add_component(parts::attiny45_soic(0.5, 0.5, 0.0, "IC1"));
    let isp = pcb.add_component(parts::header_isp(1.2, 0.5, 90.0, "J1"));
    let pullup = pcb.add_component(parts::resistor_1206(0.5, 0.85, 0.0, "R1"));

    let result = (|| {
        pcb.connect(
            pcb.pad_named(mcu, "GND")?,
            pcb.pad_named(isp, "GND")?,
            DEFAULT_TRACE_WIDTH,
            Route::horizontal_first(),
        )?;
        pcb.connect(
            pcb.pad_named(mcu, "PB1")?,
            pcb.pad_named(isp, "MISO")?,
            DEFAULT_TRACE_WIDTH,
            Route::direct(),
        )?;
        pcb.connect(
            pcb.pad_named(mcu, "RST")?,
            pcb.pad_at(pullup, 0)?,
            DEFAULT_TRACE_WIDTH,
            Route::vertical_first(),
        )?;
        pcb.traces()
    })();

    match result {
        Ok(copper) => {
            let (min, max) = copper.bounding_box().expect("board has geometry");
            println!(
                "Flattened {} copper polygons, extents ({:.3}, {:.3}) .. ({:.3}, {:.3})",
                copper.polygons.len(),
                min.x,
                min.y,
                max.x,
                max.y
            );
            println!(
                "{}",
                serde_json::to_string_pretty(&copper).expect("geometry serializes")
            );
        }
        Err(e) => eprintln!("Error building board: {}", e),
    }
}
