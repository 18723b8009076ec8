//! Business search results.

use crate::present::format::format_optional_currency;
use crate::present::labels::{active_badge, humanize};
use crate::state::SearchState;

use super::{badge, banner, loading_spinner, pagination, Table};

pub fn render_search(state: &SearchState) -> String {
    let mut out = vec![if state.query.is_empty() {
        "Business Search".to_string()
    } else {
        format!("Business Search: \"{}\"", state.query)
    }];
    if let Some(b) = banner(state.error.as_deref()) {
        out.push(b);
    }
    if state.loading {
        out.push(loading_spinner(Some("Searching...")));
        return out.join("\n");
    }
    if state.query.is_empty() {
        out.push("Enter a name, GSTIN or PAN to search.".to_string());
        return out.join("\n");
    }
    if state.results.content.is_empty() {
        out.push("No businesses match your search.".to_string());
        return out.join("\n");
    }

    let mut table = Table::new(["ID", "Name", "GSTIN", "Industry", "City", "Turnover", "Status"]);
    for b in &state.results.content {
        table.row(vec![
            b.id.clone(),
            b.display_name().to_string(),
            b.gstin.clone().unwrap_or_else(|| "-".to_string()),
            b.industry_category.as_deref().map(humanize).unwrap_or_else(|| "-".to_string()),
            b.city.clone().unwrap_or_else(|| "-".to_string()),
            format_optional_currency(b.annual_turnover),
            badge(&active_badge(b.active)),
        ]);
    }
    out.push(table.render());
    out.push(format!(
        "{} results  {}",
        state.results.total_elements,
        pagination(&state.pager())
    ));
    out.join("\n")
}
