//! Runtime-adjustable reader configuration.

use core::fmt;

use heapless::Vec as HeaplessVec;
use log::warn;

pub const DISPLAY_WIDTH: usize = 80;
pub const MIN_WORDS: u8 = 1;
pub const MAX_WORDS: u8 = 4;
pub const MIN_LINES: u8 = 1;
pub const MAX_LINES: u8 = 3;
pub const MIN_WIDTH: u16 = 1;
pub const MAX_CONFIG_WARNINGS: usize = 6;

/// Budgets bounding the shape of every frame.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Budgets {
    /// Tokens per line.
    pub words: u8,
    /// Lines per frame.
    pub lines: u8,
    /// Characters per line.
    pub width: u16,
}

impl Default for Budgets {
    fn default() -> Self {
        Self {
            words: 2,
            lines: 1,
            width: 30,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReaderConfig {
    pub wpm: u16,
    pub min_wpm: u16,
    pub max_wpm: u16,
    pub wpm_step: u16,
    pub budgets: Budgets,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            wpm: 250,
            min_wpm: 100,
            max_wpm: 1_000,
            wpm_step: 50,
            budgets: Budgets::default(),
        }
    }
}

/// A configuration value that had to be clamped into range.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigWarning {
    WpmBoundsSwapped,
    WpmOutOfRange { requested: u16, applied: u16 },
    WordsOutOfRange { requested: u8, applied: u8 },
    LinesOutOfRange { requested: u8, applied: u8 },
    WidthOutOfRange { requested: u16, applied: u16 },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::WpmBoundsSwapped => write!(f, "minimum wpm above maximum; bounds swapped"),
            Self::WpmOutOfRange { requested, applied } => {
                write!(f, "wpm {requested} out of range; using {applied}")
            }
            Self::WordsOutOfRange { requested, applied } => {
                write!(f, "words per line {requested} out of range; using {applied}")
            }
            Self::LinesOutOfRange { requested, applied } => {
                write!(f, "lines per frame {requested} out of range; using {applied}")
            }
            Self::WidthOutOfRange { requested, applied } => {
                write!(f, "characters per line {requested} exceed the display; using {applied}")
            }
        }
    }
}

pub type ConfigWarnings = HeaplessVec<ConfigWarning, MAX_CONFIG_WARNINGS>;

/// Largest width budget a display of `display_width` columns can show.
///
/// One column on each side is reserved for the frame border.
pub const fn max_width_for(display_width: usize) -> u16 {
    let usable = display_width.saturating_sub(2);
    if usable > u16::MAX as usize {
        u16::MAX
    } else if usable < MIN_WIDTH as usize {
        MIN_WIDTH
    } else {
        usable as u16
    }
}

impl ReaderConfig {
    /// Clamp every value into its valid range, reporting each clamp.
    pub fn sanitize(mut self, display_width: usize) -> (Self, ConfigWarnings) {
        let mut warnings = ConfigWarnings::new();

        if self.max_wpm < self.min_wpm {
            core::mem::swap(&mut self.max_wpm, &mut self.min_wpm);
            let _ = warnings.push(ConfigWarning::WpmBoundsSwapped);
        }
        self.wpm_step = self.wpm_step.max(1);
        self.min_wpm = self.min_wpm.max(1);
        self.max_wpm = self.max_wpm.max(self.min_wpm);

        let wpm = self.wpm.clamp(self.min_wpm, self.max_wpm);
        if wpm != self.wpm {
            let _ = warnings.push(ConfigWarning::WpmOutOfRange {
                requested: self.wpm,
                applied: wpm,
            });
            self.wpm = wpm;
        }

        let words = self.budgets.words.clamp(MIN_WORDS, MAX_WORDS);
        if words != self.budgets.words {
            let _ = warnings.push(ConfigWarning::WordsOutOfRange {
                requested: self.budgets.words,
                applied: words,
            });
            self.budgets.words = words;
        }

        let lines = self.budgets.lines.clamp(MIN_LINES, MAX_LINES);
        if lines != self.budgets.lines {
            let _ = warnings.push(ConfigWarning::LinesOutOfRange {
                requested: self.budgets.lines,
                applied: lines,
            });
            self.budgets.lines = lines;
        }

        let width = self
            .budgets
            .width
            .clamp(MIN_WIDTH, max_width_for(display_width));
        if width != self.budgets.width {
            let _ = warnings.push(ConfigWarning::WidthOutOfRange {
                requested: self.budgets.width,
                applied: width,
            });
            self.budgets.width = width;
        }

        for warning in &warnings {
            warn!("config: {}", warning);
        }

        (self, warnings)
    }

    /// Step `wpm` up or down, returning whether it changed.
    pub fn step_wpm(&mut self, increase: bool) -> bool {
        let next = if increase {
            self.wpm.saturating_add(self.wpm_step).min(self.max_wpm)
        } else {
            self.wpm.saturating_sub(self.wpm_step).max(self.min_wpm)
        };

        if next != self.wpm {
            self.wpm = next;
            true
        } else {
            false
        }
    }
}

impl Budgets {
    pub fn step_words(&mut self, increase: bool) -> bool {
        step_bounded(&mut self.words, increase, MIN_WORDS, MAX_WORDS)
    }

    pub fn step_lines(&mut self, increase: bool) -> bool {
        step_bounded(&mut self.lines, increase, MIN_LINES, MAX_LINES)
    }

    pub fn step_width(&mut self, increase: bool, display_width: usize) -> bool {
        let max = max_width_for(display_width);
        let next = if increase {
            self.width.saturating_add(1).min(max)
        } else {
            self.width.saturating_sub(1).max(MIN_WIDTH)
        };
        let changed = next != self.width;
        self.width = next;
        changed
    }
}

fn step_bounded(value: &mut u8, increase: bool, min: u8, max: u8) -> bool {
    let next = if increase {
        value.saturating_add(1).min(max)
    } else {
        value.saturating_sub(1).max(min)
    };
    let changed = next != *value;
    *value = next;
    changed
}
