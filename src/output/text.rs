//! Text output formatter
//!
//! `TextFormatter` writes each line as the `TextWalker` produces it. Names can
//! be colored, but the indentation and `/`/`*` suffixes are always plain.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{EntryMarker, TextOutput};

pub struct TextFormatter<W: WriteColor> {
    out: W,
}

impl TextFormatter<StandardStream> {
    pub fn stdout(use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn marker_color(marker: EntryMarker) -> Option<ColorSpec> {
    match marker {
        EntryMarker::Directory => {
            let mut spec = ColorSpec::new();
            spec.set_fg(Some(Color::Blue)).set_bold(true);
            Some(spec)
        }
        EntryMarker::Link => {
            let mut spec = ColorSpec::new();
            spec.set_fg(Some(Color::Cyan));
            Some(spec)
        }
        EntryMarker::Plain => None,
    }
}

impl<W: WriteColor> TextOutput for TextFormatter<W> {
    fn output_entry(&mut self, indent: &str, name: &str, marker: EntryMarker) -> io::Result<()> {
        write!(self.out, "{}", indent)?;
        match marker_color(marker) {
            Some(spec) => {
                self.out.set_color(&spec)?;
                write!(self.out, "{}", name)?;
                self.out.reset()?;
            }
            None => write!(self.out, "{}", name)?,
        }
        writeln!(self.out, "{}", marker.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::{Ansi, NoColor};

    #[test]
    fn test_plain_lines() {
        let mut formatter = TextFormatter::new(NoColor::new(Vec::new()));
        formatter.output_entry("\t", "b", EntryMarker::Directory).unwrap();
        formatter.output_entry("\t\t", "c.txt", EntryMarker::Plain).unwrap();
        formatter.output_entry("\t", "link", EntryMarker::Link).unwrap();

        let text = String::from_utf8(formatter.into_inner().into_inner()).unwrap();
        assert_eq!(text, "\tb/\n\t\tc.txt\n\tlink*\n");
    }

    #[test]
    fn test_colored_directory_keeps_suffix_plain() {
        let mut formatter = TextFormatter::new(Ansi::new(Vec::new()));
        formatter.output_entry("\t", "b", EntryMarker::Directory).unwrap();

        let text = String::from_utf8(formatter.into_inner().into_inner()).unwrap();
        assert!(text.starts_with("\t\x1b["), "got: {:?}", text);
        assert!(text.ends_with("\x1b[0m/\n"), "got: {:?}", text);
        assert!(text.contains('b'));
    }
}
