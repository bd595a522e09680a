//! Department statistics chart.
//!
//! [`DepartmentChart`] aggregates a record set into department counts and
//! [`ChartSurface`] draws it as a vertical bar chart in text cells. The surface
//! is reused between refreshes: every [`ChartSurface::render`] call replaces
//! whatever was drawn before.

use crate::libs::employee::Employee;
use crate::libs::messages::Message;
use std::fmt::{Display, Formatter};

const BAR: &str = "███";
const BAR_WIDTH: usize = 3;
const MAX_LABEL_WIDTH: usize = 12;
const COLUMN_GAP: &str = "  ";

/// Department → employee count, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentChart {
    bars: Vec<(String, usize)>,
}

impl DepartmentChart {
    /// Counts employees per department, keyed by the exact stored value
    /// the department filter matches on. Empty departments are not counted.
    pub fn aggregate(employees: &[Employee]) -> Self {
        let mut bars: Vec<(String, usize)> = Vec::new();
        for employee in employees {
            let department = employee.department.as_str();
            if department.is_empty() {
                continue;
            }
            match bars.iter_mut().find(|(name, _)| name == department) {
                Some((_, count)) => *count += 1,
                None => bars.push((department.to_string(), 1)),
            }
        }
        DepartmentChart { bars }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bars(&self) -> &[(String, usize)] {
        &self.bars
    }

    pub fn count(&self, department: &str) -> Option<usize> {
        self.bars.iter().find(|(name, _)| name == department).map(|(_, count)| *count)
    }

    fn max(&self) -> usize {
        self.bars.iter().map(|(_, count)| *count).max().unwrap_or(0)
    }
}

/// Reusable text canvas the chart is drawn into.
#[derive(Debug, Clone)]
pub struct ChartSurface {
    max_rows: usize,
    lines: Vec<String>,
    placeholder: bool,
}

impl ChartSurface {
    pub const DEFAULT_ROWS: usize = 10;

    pub fn new(max_rows: usize) -> Self {
        ChartSurface {
            max_rows: max_rows.max(1),
            lines: Vec::new(),
            placeholder: false,
        }
    }

    /// `true` when the last render had nothing to show.
    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&mut self, chart: &DepartmentChart) {
        self.lines.clear();
        self.lines.push(Message::ChartTitle.to_string());
        self.lines.push(String::new());

        if chart.is_empty() {
            self.placeholder = true;
            self.lines.push(format!("  {}", Message::ChartNoData));
            return;
        }
        self.placeholder = false;

        let max = chart.max();
        let rows = max.min(self.max_rows);
        let gutter = max.to_string().len();

        let columns: Vec<(String, usize, usize)> = chart
            .bars()
            .iter()
            .map(|(name, count)| {
                let label: String = name.chars().take(MAX_LABEL_WIDTH).collect();
                let width = label.chars().count().max(count.to_string().len()).max(BAR_WIDTH);
                (label, *count, width)
            })
            .collect();

        for level in (1..=rows).rev() {
            let scale = (level * max).div_ceil(rows);
            let mut line = format!("{:>gutter$} |", scale, gutter = gutter);
            for (_, count, width) in &columns {
                line.push_str(COLUMN_GAP);
                if bar_height(*count, max, rows) >= level {
                    let left = (width - BAR_WIDTH) / 2;
                    line.push_str(&" ".repeat(left));
                    line.push_str(BAR);
                    line.push_str(&" ".repeat(width - BAR_WIDTH - left));
                } else {
                    line.push_str(&" ".repeat(*width));
                }
            }
            self.lines.push(line.trim_end().to_string());
        }

        let plot_width: usize = columns.iter().map(|(_, _, width)| width + COLUMN_GAP.len()).sum();
        self.lines.push(format!("{} +{}", " ".repeat(gutter), "-".repeat(plot_width)));

        let mut labels = format!("{}  ", " ".repeat(gutter));
        let mut counts = format!("{}  ", " ".repeat(gutter));
        for (label, count, width) in &columns {
            labels.push_str(COLUMN_GAP);
            labels.push_str(&format!("{:^width$}", label, width = width));
            counts.push_str(COLUMN_GAP);
            counts.push_str(&format!("{:^width$}", count, width = width));
        }
        self.lines.push(labels.trim_end().to_string());
        self.lines.push(counts.trim_end().to_string());
    }
}

impl Default for ChartSurface {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ROWS)
    }
}

impl Display for ChartSurface {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

/// Cells filled for `count`; any non-zero count keeps at least one cell.
fn bar_height(count: usize, max: usize, rows: usize) -> usize {
    if count == 0 || max == 0 {
        return 0;
    }
    ((count * rows + max / 2) / max).max(1)
}
