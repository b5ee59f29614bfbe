use crate::domain::models::{JsonOut, RunReport};
use std::io::{self, Write};

pub const RULE_WIDTH: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Pass,
    Fail,
    Emphasis,
}

/// ANSI decoration. The plain palette yields the exact same text without
/// escape codes, so colour never changes what the report says.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Colour unless `--no-color` was given or `NO_COLOR` is set.
    pub fn detect(no_color_flag: bool) -> Self {
        let env_off = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self::new(!no_color_flag && !env_off)
    }

    pub fn paint(&self, tone: Tone, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        let code = match tone {
            Tone::Pass => "\x1b[32m",
            Tone::Fail => "\x1b[31m",
            Tone::Emphasis => "\x1b[97m",
        };
        format!("{code}{text}\x1b[0m")
    }
}

/// Line-oriented text report writer. Write failures are returned so a
/// closed stdout ends the run instead of driving checks nobody sees.
pub struct Console {
    out: Box<dyn Write>,
    palette: Palette,
}

impl Console {
    pub fn new(out: Box<dyn Write>, palette: Palette) -> Self {
        Self { out, palette }
    }

    pub fn stdout(palette: Palette) -> Self {
        Self::new(Box::new(std::io::stdout()), palette)
    }

    /// Swallows all text; used when only the JSON report is wanted.
    pub fn sink() -> Self {
        Self::new(Box::new(std::io::sink()), Palette::new(false))
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    pub fn toned(&mut self, tone: Tone, text: &str) -> io::Result<()> {
        let painted = self.palette.paint(tone, text);
        self.line(&painted)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        self.line("")
    }

    pub fn rule(&mut self) -> io::Result<()> {
        self.line(&"_".repeat(RULE_WIDTH))
    }

    /// Raw captured output, written as-is with a trailing newline.
    pub fn block(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        if !text.ends_with('\n') {
            self.out.write_all(b"\n")?;
        }
        self.out.flush()
    }
}

pub fn print_report(report: &RunReport) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut {
            ok: report.ok(),
            data: report
        })?
    );
    Ok(())
}
