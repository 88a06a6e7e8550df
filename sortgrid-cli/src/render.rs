//! Plain-text grid renderer.

use std::io::Write;

use sortgrid::column::ColumnWidth;
use sortgrid::{HeaderCell, Projection, Renderer};
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

const SEPARATOR: &str = " | ";

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }

    if max_width == 0 {
        return String::new();
    }

    let ellipsis = "…";
    let target_width = max_width.saturating_sub(1);

    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push_str(ellipsis);
    result
}

/// Pad `s` with spaces to exactly `width` display columns, truncating if needed.
pub fn fit(s: &str, width: usize) -> String {
    let mut out = truncate_to_width(s, width);
    let pad = width.saturating_sub(display_width(&out));
    out.extend(std::iter::repeat_n(' ', pad));
    out
}

fn header_text(cell: &HeaderCell) -> String {
    match cell.direction {
        Some(direction) => format!("{} {}", cell.label, direction.arrow()),
        None => cell.label.clone(),
    }
}

/// Paints projections as aligned text rows, CJK-width aware.
///
/// ```text
/// 名前 | 年齢 ▲
/// -----+-------
/// hoge | 12歳
/// fuga | 23歳
/// ```
#[derive(Debug)]
pub struct TextRenderer<W> {
    out: W,
    frames: usize,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, frames: 0 }
    }

    /// Number of projections painted so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Column widths: fixed hints win, auto columns size to their widest cell.
    fn widths(projection: &Projection) -> Vec<usize> {
        projection
            .header
            .iter()
            .enumerate()
            .map(|(i, cell)| match cell.width {
                ColumnWidth::Fixed(n) => usize::from(n),
                ColumnWidth::Auto => projection
                    .rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|text| display_width(text))
                    .chain(std::iter::once(display_width(&header_text(cell))))
                    .max()
                    .unwrap_or(0),
            })
            .collect()
    }

    fn line(cells: impl Iterator<Item = String>) -> String {
        cells.collect::<Vec<_>>().join(SEPARATOR).trim_end().to_string()
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    type Error = std::io::Error;

    fn paint(&mut self, projection: &Projection) -> Result<(), Self::Error> {
        let widths = Self::widths(projection);

        if self.frames > 0 {
            writeln!(self.out)?;
        }

        let header = Self::line(
            projection
                .header
                .iter()
                .zip(&widths)
                .map(|(cell, &w)| fit(&header_text(cell), w)),
        );
        writeln!(self.out, "{}", header)?;

        let rule = widths
            .iter()
            .map(|&w| "-".repeat(w))
            .collect::<Vec<_>>()
            .join("-+-");
        writeln!(self.out, "{}", rule)?;

        for row in &projection.rows {
            let line = Self::line(row.iter().zip(&widths).map(|(text, &w)| fit(text, w)));
            writeln!(self.out, "{}", line)?;
        }

        self.out.flush()?;
        self.frames += 1;
        log::debug!("[render] Painted frame {}", self.frames);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortgrid::Table;
    use sortgrid::column::{ColumnRegistry, ColumnSpec};
    use sortgrid::model::Record;

    fn table(width: ColumnWidth) -> Table<Record> {
        let registry = ColumnRegistry::new()
            .column("name", ColumnSpec::new("名前").width(width))
            .column("age", ColumnSpec::new("年齢").formatter(|v| format!("{}歳", v)));
        let data = vec![
            Record::new().set("name", "hoge").set("age", 12),
            Record::new().set("name", "fuga").set("age", 23),
        ];
        Table::new(&registry, data).unwrap()
    }

    fn paint(projection: &Projection) -> String {
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.paint(projection).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 4), "hel…");
        assert_eq!(truncate_to_width("名前です", 5), "名前…");
        assert_eq!(truncate_to_width("hello", 0), "");
    }

    #[test]
    fn test_fit_pads_wide_chars() {
        assert_eq!(fit("名前", 6), "名前  ");
        assert_eq!(display_width(&fit("歳", 3)), 3);
    }

    #[test]
    fn test_paint_unsorted() {
        let text = paint(&table(ColumnWidth::Auto).projection());
        assert_eq!(text, "名前 | 年齢\n-----+-----\nhoge | 12歳\nfuga | 23歳\n");
    }

    #[test]
    fn test_paint_marks_active_column() {
        let mut table = table(ColumnWidth::Auto);
        table.activate_header("age").unwrap();
        let text = paint(&table.activate_header("age").unwrap());
        assert_eq!(
            text,
            "名前 | 年齢 ▼\n-----+-------\nfuga | 23歳\nhoge | 12歳\n"
        );
    }

    #[test]
    fn test_paint_fixed_width_truncates() {
        let text = paint(&table(ColumnWidth::Fixed(3)).projection());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2], "ho… | 12歳");
    }

    #[test]
    fn test_frames_are_separated() {
        let table = table(ColumnWidth::Auto);
        let mut renderer = TextRenderer::new(Vec::new());
        table.render(&mut renderer).unwrap();
        table.render(&mut renderer).unwrap();
        assert_eq!(renderer.frames(), 2);
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(text.matches("\n\n").count(), 1);
    }
}
