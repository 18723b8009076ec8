//! Text renderers. Every view is a pure function of its state (plus the
//! render-time clock where expiry is shown).

pub mod business;
pub mod generate;
pub mod history;
pub mod my_reports;
pub mod report;
pub mod search;
pub mod spinner;
pub mod users;

pub use business::render_business_detail;
pub use generate::render_generate;
pub use history::render_role_history;
pub use my_reports::render_my_reports;
pub use report::{render_component_scores, render_credit_report, render_report_view, render_score_chart};
pub use search::render_search;
pub use spinner::loading_spinner;
pub use users::render_users;

use crate::present::{Badge, Pager};

/// Error banner line, shown above the view's content.
pub fn banner(error: Option<&str>) -> Option<String> {
    error.map(|e| format!("! {}  (dismiss: view/dismiss-error)", e))
}

pub fn badge(b: &Badge) -> String {
    format!("[{}]", b.label)
}

/// `[Previous]  Page 2 of 3  [Next]`; a disabled control is shown in
/// parentheses.
pub fn pagination(pager: &Pager) -> String {
    let control = |label: &str, enabled: bool| {
        if enabled {
            format!("[{}]", label)
        } else {
            format!("({})", label)
        }
    };
    format!(
        "{}  {}  {}",
        control("Previous", pager.has_previous()),
        pager.label(),
        control("Next", pager.has_next())
    )
}

/// Left-aligned plain-text table.
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let w = cell.chars().count();
                match widths.get_mut(i) {
                    Some(max) => *max = (*max).max(w),
                    None => widths.push(w),
                }
            }
        }

        let line = |cells: &[String]| {
            cells
                .iter()
                .enumerate()
                .map(|(i, c)| {
                    let pad = widths[i].saturating_sub(c.chars().count());
                    format!("{}{}", c, " ".repeat(pad))
                })
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let mut out = vec![line(self.headers.as_slice())];
        out.push(
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("  "),
        );
        out.extend(self.rows.iter().map(|r| line(r.as_slice())));
        out.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_pads_columns() {
        let mut t = Table::new(["Name", "Limit"]);
        t.row(vec!["Asha".into(), "₹2.50 L".into()]);
        t.row(vec!["Vikram Iyer".into(), "₹999".into()]);
        assert_eq!(
            t.render(),
            "Name         Limit\n-----------  -------\nAsha         ₹2.50 L\nVikram Iyer  ₹999"
        );
    }

    #[test]
    fn pagination_marks_disabled_controls() {
        assert_eq!(pagination(&Pager::new(0, 3)), "(Previous)  Page 1 of 3  [Next]");
        assert_eq!(pagination(&Pager::new(2, 3)), "[Previous]  Page 3 of 3  (Next)");
        assert_eq!(pagination(&Pager::new(0, 0)), "(Previous)  Page 1 of 1  (Next)");
    }
}
