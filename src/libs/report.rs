//! Printable employee list.
//!
//! Pagination is computed by [`ReportLayout::paginate`] as plain data, then
//! [`ReportGenerator`] emits the pages as an A4 PDF with `printpdf`.

use crate::libs::employee::{Employee, COLUMNS};
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

pub const DEFAULT_REPORT_FILE: &str = "employee_list.pdf";

const TITLE_FONT_SIZE: f32 = 16.0;
const HEADER_FONT_SIZE: f32 = 10.0;
const ROW_FONT_SIZE: f32 = 9.0;
const LAYER_NAME: &str = "Layer 1";

/// Page geometry in millimetres.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLayout {
    pub page_width: f32,
    pub page_height: f32,
    pub margin_left: f32,
    /// Distance from the top edge to the title baseline.
    pub title_offset: f32,
    /// Distance from the top edge to the header baseline.
    pub table_offset: f32,
    pub row_height: f32,
    /// No row is placed below this baseline.
    pub bottom_margin: f32,
    pub column_widths: [f32; 6],
}

impl Default for ReportLayout {
    fn default() -> Self {
        ReportLayout {
            page_width: 210.0,
            page_height: 297.0,
            margin_left: 20.0,
            title_offset: 20.0,
            table_offset: 30.0,
            row_height: 8.0,
            bottom_margin: 20.0,
            column_widths: [15.0, 40.0, 30.0, 25.0, 30.0, 30.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub y: f32,
    pub cells: [String; 6],
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportPage {
    pub title: String,
    pub title_y: f32,
    pub header_y: f32,
    pub rows: Vec<ReportRow>,
}

impl ReportLayout {
    /// Left edge of every column.
    pub fn column_x(&self) -> [f32; 6] {
        let mut xs = [0.0; 6];
        let mut x = self.margin_left;
        for (i, width) in self.column_widths.iter().enumerate() {
            xs[i] = x;
            x += width;
        }
        xs
    }

    /// Lays rows out top to bottom, starting a new page (title and header
    /// repeated) whenever the cursor has dropped below the bottom margin.
    /// There is always at least one page.
    pub fn paginate(&self, title: &str, employees: &[Employee]) -> Vec<ReportPage> {
        let continued = Message::ReportTitleContinued(title.to_string()).to_string();
        let first_row_y = self.header_y() - self.row_height;

        let mut pages = vec![self.page(title)];
        let mut y = first_row_y;
        for employee in employees {
            if y < self.bottom_margin {
                pages.push(self.page(&continued));
                y = first_row_y;
            }
            if let Some(page) = pages.last_mut() {
                page.rows.push(ReportRow { y, cells: employee.cells() });
            }
            y -= self.row_height;
        }
        pages
    }

    fn header_y(&self) -> f32 {
        self.page_height - self.table_offset
    }

    fn page(&self, title: &str) -> ReportPage {
        ReportPage {
            title: title.to_string(),
            title_y: self.page_height - self.title_offset,
            header_y: self.header_y(),
            rows: Vec::new(),
        }
    }
}

pub struct ReportGenerator {
    layout: ReportLayout,
    title: String,
    output_path: PathBuf,
}

impl ReportGenerator {
    pub fn new(output_path: Option<PathBuf>) -> Self {
        ReportGenerator {
            layout: ReportLayout::default(),
            title: Message::ReportTitle.to_string(),
            output_path: output_path.unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_FILE)),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes the whole snapshot to the output file. Returns the page count.
    pub fn generate(&self, employees: &[Employee]) -> Result<usize> {
        let pages = self.layout.paginate(&self.title, employees);
        let layout = &self.layout;

        let (doc, first_page, first_layer) = PdfDocument::new(&self.title, Mm(layout.page_width), Mm(layout.page_height), LAYER_NAME);
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| msg_error_anyhow!(Message::ReportWriteFailed(e.to_string())))?;
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| msg_error_anyhow!(Message::ReportWriteFailed(e.to_string())))?;

        for (index, page) in pages.iter().enumerate() {
            let layer = if index == 0 {
                doc.get_page(first_page).get_layer(first_layer)
            } else {
                let (page_index, layer_index) = doc.add_page(Mm(layout.page_width), Mm(layout.page_height), LAYER_NAME);
                doc.get_page(page_index).get_layer(layer_index)
            };
            self.draw_page(&layer, page, &bold, &regular);
        }

        let file = File::create(&self.output_path)?;
        doc.save(&mut BufWriter::new(file))
            .map_err(|e| msg_error_anyhow!(Message::ReportWriteFailed(e.to_string())))?;

        tracing::debug!(path = %self.output_path.display(), pages = pages.len(), rows = employees.len(), "report written");
        Ok(pages.len())
    }

    fn draw_page(&self, layer: &PdfLayerReference, page: &ReportPage, bold: &IndirectFontRef, regular: &IndirectFontRef) {
        let xs = self.layout.column_x();

        layer.use_text(page.title.as_str(), TITLE_FONT_SIZE, Mm(self.layout.margin_left), Mm(page.title_y), bold);
        for (x, caption) in xs.iter().zip(COLUMNS.iter()) {
            layer.use_text(*caption, HEADER_FONT_SIZE, Mm(*x), Mm(page.header_y), bold);
        }
        for row in &page.rows {
            for (x, cell) in xs.iter().zip(row.cells.iter()) {
                layer.use_text(cell.as_str(), ROW_FONT_SIZE, Mm(*x), Mm(row.y), regular);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employees(count: usize) -> Vec<Employee> {
        (1..=count)
            .map(|i| {
                let mut employee = Employee::new(&format!("Employee {}", i), "Clerk", "1000", "Ops", "");
                employee.id = Some(i as i64);
                employee
            })
            .collect()
    }

    #[test]
    fn test_empty_table_still_has_header_page() {
        let pages = ReportLayout::default().paginate("Employee List", &[]);
        assert_eq!(pages.len(), 1);
        assert!(pages[0].rows.is_empty());
        assert_eq!(pages[0].header_y, 267.0);
        assert_eq!(pages[0].title_y, 277.0);
    }

    #[test]
    fn test_thirty_rows_fit_one_page() {
        let pages = ReportLayout::default().paginate("Employee List", &employees(30));
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].rows.len(), 30);
        assert_eq!(pages[0].rows[0].y, 259.0);
        assert!(pages[0].rows.iter().all(|row| row.y >= 20.0));
    }

    #[test]
    fn test_overflow_starts_continued_page() {
        let pages = ReportLayout::default().paginate("Employee List", &employees(31));
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].title, "Employee List (continued)");
        assert_eq!(pages[1].rows.len(), 1);
        assert_eq!(pages[1].rows[0].y, 259.0);
        assert_eq!(pages[1].rows[0].cells[1], "Employee 31");
    }

    #[test]
    fn test_exact_fill_has_no_trailing_page() {
        let pages = ReportLayout::default().paginate("Employee List", &employees(60));
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].rows.len(), 30);
    }

    #[test]
    fn test_column_positions() {
        let xs = ReportLayout::default().column_x();
        assert_eq!(xs, [20.0, 35.0, 75.0, 105.0, 130.0, 160.0]);
    }
}
