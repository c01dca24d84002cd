//! Plain-text tables for CLI listings.
//!
//! Column widths grow to the widest cell; ANSI color codes inside a cell do
//! not count towards its width.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub min_width: usize,
    pub align: Align,
}

impl Column {
    pub fn new(header: &str, min_width: usize) -> Self {
        Self {
            header: header.to_string(),
            min_width,
            align: Align::Left,
        }
    }

    /// Right-aligned column, for numbers.
    pub fn numeric(header: &str, min_width: usize) -> Self {
        Self {
            align: Align::Right,
            ..Self::new(header, min_width)
        }
    }
}

pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
    separator: char,
}

/// Printable width of `s`, skipping `ESC [ ... m` sequences.
pub fn visible_width(s: &str) -> usize {
    let mut width = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            width += 1;
        }
    }
    width
}

fn pad(cell: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(visible_width(cell)));
    match align {
        Align::Left => format!("{cell}{fill}"),
        Align::Right => format!("{fill}{cell}"),
    }
}

impl Table {
    pub fn new(columns: Vec<Column>, separator: char) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator,
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| visible_width(c))
                    .chain([col.min_width, col.header.chars().count()])
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let line = |cells: Vec<String>| cells.join(" ").trim_end().to_string() + "\n";

        let mut out = line(
            self.columns
                .iter()
                .zip(&widths)
                .map(|(c, w)| pad(&c.header, *w, c.align))
                .collect(),
        );

        let total = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);
        out.push_str(&self.separator.to_string().repeat(total));
        out.push('\n');

        for row in &self.rows {
            out.push_str(&line(
                self.columns
                    .iter()
                    .zip(&widths)
                    .enumerate()
                    .map(|(i, (c, w))| pad(row.get(i).map(String::as_str).unwrap_or(""), *w, c.align))
                    .collect(),
            ));
        }

        out
    }
}
