use std::fs::File;
use std::io::{self, Read};

use labeltext::{LabelLayout, SplitConfig, TextAlign};
use simplelog::{Config, LevelFilter, WriteLogger};

const BOX_WIDTH: usize = 40;

fn main() -> io::Result<()> {
    // Set up file logging
    let log_file = File::create("label.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;

    let layout = match LabelLayout::new(&text, TextAlign::Center, SplitConfig::default()) {
        Ok(layout) => layout,
        Err(err) => {
            // Nothing to render
            log::warn!("[label] {}", err);
            eprintln!("label: {err}");
            return Ok(());
        }
    };

    println!("+{}+", "-".repeat(BOX_WIDTH));
    for (idx, line) in layout.lines().iter().enumerate() {
        let offset = layout.offset(idx, BOX_WIDTH).unwrap_or(0);
        let pad = BOX_WIDTH.saturating_sub(offset + line.width);
        println!("|{}{}{}|", " ".repeat(offset), line.text, " ".repeat(pad));
    }
    println!("+{}+", "-".repeat(BOX_WIDTH));

    Ok(())
}
