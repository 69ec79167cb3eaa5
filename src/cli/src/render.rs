use std::io::Write;

use cube_core::{Face, Palette, RenderSink, StepLog};
use log::warn;
use owo_colors::OwoColorize;

/// Color one sticker symbol by the face it belongs to. Symbols outside the
/// palette are left plain.
pub fn colorize(symbol: char, palette: &Palette) -> String {
    let Some(face) = Face::ALL.into_iter().find(|&face| palette[face] == symbol) else {
        return symbol.to_string();
    };

    match face {
        Face::U => symbol.white().to_string(),
        Face::D => symbol.yellow().to_string(),
        Face::F => symbol.green().to_string(),
        Face::B => symbol.blue().to_string(),
        Face::L => symbol.truecolor(255, 165, 0).to_string(),
        Face::R => symbol.red().to_string(),
    }
}

pub fn colorize_all(text: &str, palette: &Palette) -> String {
    text.chars().map(|c| colorize(c, palette)).collect()
}

/// Prints each status line once, as it appears.
pub struct TerminalSink<W: Write> {
    out: W,
    printed: usize,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        TerminalSink { out, printed: 0 }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSink for TerminalSink<W> {
    fn render(&mut self, steps: &StepLog, _cube: &str) {
        for step in steps.iter().skip(self.printed) {
            if let Err(e) = writeln!(self.out, "{step}") {
                warn!("Could not print a step: {e}");
            }
        }
        self.printed = steps.len();
    }
}
