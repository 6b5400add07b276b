//! The help text, read from `help.txt` and laid out to fit the terminal
use crate::styles::{paint, ITEM, NAME, TITLE};
use bstr::ByteSlice;
use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::io::{self, Write as _};
use terminal_size::{terminal_size, Height, Width};
use textwrap::{self, wrap};

enum HelpItem<'a> {
    Usage(&'a str),
    Paragraph(&'a str),
    Section(Section<'a>),
}
struct Section<'a> {
    title: &'a str,
    entries: Vec<Entry<'a>>,
}
struct Entry<'a> {
    item: &'a str,
    caption: &'a str,
}

fn name() -> String {
    paint(NAME, "sop")
}

/// The program name and version, as printed by `sop --version`
pub(crate) fn version() -> String {
    let version = std::env!("CARGO_PKG_VERSION");
    format!("{} {version}", name())
}

/// Write the help text to `out`. A `choice` of `Never` strips the styling.
pub(crate) fn write_to(out: &mut dyn io::Write, choice: anstream::ColorChoice) -> io::Result<()> {
    let text = render();
    match choice {
        anstream::ColorChoice::Never => write!(out, "{}", anstream::adapter::strip_str(&text)),
        _ => out.write_all(text.as_bytes()),
    }
}

fn render() -> String {
    let input = include_str!("help.txt");
    let mut lines: Vec<Cow<str>> = vec![Cow::from(version())];
    for help_item in parse(input) {
        match help_item {
            HelpItem::Paragraph(text) if text.is_empty() => lines.push(Cow::from("")),
            HelpItem::Paragraph(text) => lines.extend(wrap(text, &C.wrap_options)),
            HelpItem::Usage(args) => {
                lines.push(Cow::from(format!("{}{}{args}", paint(TITLE, "Usage: "), name())));
            }
            HelpItem::Section(s) => {
                lines.push(Cow::from(paint(TITLE, s.title)));
                lines.extend(s.entry_lines());
            }
        };
    }
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn parse(text: &str) -> Vec<HelpItem> {
    const USAGE: &str = "Usage: ";
    let mut help = Vec::new();
    let mut lines = text.lines().fuse();
    while let Some(line) = lines.next() {
        if let Some(rest) = line.strip_prefix(USAGE) {
            let (_, args) = rest.split_at(rest.find(' ').unwrap_or(rest.len()));
            help.push(HelpItem::Usage(args));
        } else if line.ends_with(':') {
            let title = line;
            let mut entries = Vec::new();
            let result = loop {
                let Some(entry) = lines.next() else { break None };
                let entry = entry.trim_end();
                if entry.is_empty() {
                    break Some(HelpItem::Paragraph(""));
                }
                // The caption follows the last double space; an entry without
                // one is all item.
                let (item, caption) = match entry.rfind("  ") {
                    Some(sp_sp) if sp_sp > 0 => entry.split_at(sp_sp + 2),
                    _ => (entry, ""),
                };
                entries.push(Entry { item, caption });
            };
            help.push(HelpItem::Section(Section { title, entries }));
            if let Some(part) = result {
                help.push(part);
            }
        } else {
            help.push(HelpItem::Paragraph(line));
        }
    }
    help
}

impl<'a> Section<'a> {
    /// Each entry on one line if they all fit; otherwise each caption goes on
    /// the lines after its item, indented past the deepest item.
    fn entry_lines(&self) -> Vec<Cow<'a, str>> {
        if self.entries.iter().all(Entry::fits_in_line) {
            return self.entries.iter().map(|e| Cow::from(format!("{}{}", paint(ITEM, e.item), e.caption))).collect();
        }
        let indent = self.next_line_help_indent();
        let mut result = Vec::new();
        for entry in &self.entries {
            result.push(Cow::from(paint(ITEM, entry.item.trim_end())));
            if !entry.caption.is_empty() {
                result.extend(entry.next_line_caption(indent));
            }
        }
        result
    }
    fn next_line_help_indent(&self) -> &'static str {
        let max_indent =
            self.entries.iter().map(Entry::indented_by).fold(0, std::cmp::Ord::max);
        let indent_len = (max_indent + 4).min(BLANKS.len());
        &BLANKS[..indent_len]
    }
}

const BLANKS: &str = "                                                        ";
impl<'a> Entry<'a> {
    fn indented_by(&self) -> usize {
        self.item.as_bytes().find_not_byteset(b" ").unwrap_or(self.item.len())
    }
    fn fits_in_line(&self) -> bool {
        self.item.len() + self.caption.len() <= C.line_width
    }
    fn next_line_caption(&self, indent: &'a str) -> Vec<Cow<'a, str>> {
        wrap(self.caption, C.wrap_options.clone().initial_indent(indent).subsequent_indent(indent))
    }
}

struct Constants<'a> {
    line_width: usize,
    wrap_options: textwrap::Options<'a>,
}
static C: Lazy<Constants> = Lazy::new(|| {
    fn from_env() -> Option<usize> {
        std::env::var_os("COLUMNS")?.to_str()?.parse::<usize>().ok()
    }
    let line_width = if let Some((Width(width), Height(_))) = terminal_size() {
        width as usize
    } else {
        from_env().unwrap_or(100)
    };
    let wrap_options = textwrap::Options::new(line_width);

    Constants { line_width, wrap_options }
});

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;

    fn plain_help() -> String {
        let mut out = Vec::new();
        write_to(&mut out, anstream::ColorChoice::Never).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn help_starts_with_the_version() {
        let help = plain_help();
        let first = help.lines().next().unwrap();
        assert_eq!(first, format!("sop {}", env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn help_names_every_operation_and_option() {
        let help = plain_help();
        assert!(help.contains("Usage: sop [options] <operation> <file A> <file B>"));
        for word in ["union", "intersection", "difference", "--separator", "--color", "--help", "--version"] {
            assert!(help.contains(word), "{word} missing from\n{help}");
        }
        assert!(help.contains(r#"sop -s "," union fileA.csv fileB.csv"#));
    }

    #[test]
    fn uncolored_help_has_no_escape_sequences() {
        assert!(!plain_help().contains('\x1B'));
        let mut colored = Vec::new();
        write_to(&mut colored, anstream::ColorChoice::Always).unwrap();
        assert!(colored.contains(&b'\x1B'));
    }

    #[test]
    fn sections_are_parsed_into_entries() {
        let help = parse("Things:\n  one  The first\n  two\n\nAfter");
        assert_eq!(help.len(), 3);
        let HelpItem::Section(section) = &help[0] else { panic!("not a section") };
        assert_eq!(section.title, "Things:");
        assert_eq!(section.entries.len(), 2);
        assert_eq!(section.entries[0].caption, "The first");
        assert_eq!(section.entries[1].caption, "");
        assert!(matches!(help[1], HelpItem::Paragraph("")));
        assert!(matches!(help[2], HelpItem::Paragraph("After")));
    }

    #[test]
    fn items_lose_their_padding_when_captions_move_to_the_next_line() {
        let caption = "word ".repeat(2000);
        let section = Section { title: "Things:", entries: vec![Entry { item: "  union   ", caption: caption.trim_end() }] };
        let lines = section.entry_lines();
        assert_eq!(lines[0].as_ref(), paint(ITEM, "  union").as_str());
        assert!(lines.len() > 1);
        assert!(lines[1].starts_with("      word"), "{:?}", lines[1]);
    }

    #[test]
    fn the_usage_line_keeps_the_arguments() {
        let help = parse("Usage: sop <x> <y>");
        assert!(matches!(help[0], HelpItem::Usage(" <x> <y>")));
    }
}
