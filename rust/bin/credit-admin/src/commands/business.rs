//! `business`, `search`.

use anyhow::Result;

use credit_admin::request::*;
use credit_admin::state::*;
use credit_admin::view::{render_business_detail, render_search};
use credit_flux::Location;

use super::{now, Console};

/// Parse a `--tab` value.
pub fn parse_tab(raw: &str) -> Result<BusinessTab> {
    BusinessTab::parse(raw.trim()).ok_or_else(|| {
        let known: Vec<&str> = BusinessTab::ALL.iter().map(|t| t.as_str()).collect();
        anyhow::anyhow!("Unknown tab \"{}\" (expected one of {})", raw, known.join(", "))
    })
}

/// Open `/business/{id}` on `tab`, the way the detail route does.
pub async fn show(console: &Console, business_id: &str, tab: BusinessTab) -> Result<()> {
    let location = tab.apply(Location::new(format!("/business/{}", business_id)));
    console
        .emit(NavigateReq::PATH, NavigateReq { url: location.to_string() })
        .await;

    let detail = console.loaded::<BusinessDetail>(&BusinessDetail::path(business_id))?;
    if console.json() {
        return match tab {
            BusinessTab::CreditHistory => console.print(&detail.history.reports, String::new),
            _ => console.print(&detail.business, String::new),
        };
    }
    println!("{}", render_business_detail(Some(&detail), &location, now()));
    Ok(())
}

/// Search by name, GSTIN or PAN. `page` is 1-based as typed.
pub async fn search(console: &Console, query: &str, page: u32) -> Result<()> {
    console
        .emit(
            SearchBusinessReq::PATH,
            SearchBusinessReq {
                query: query.to_string(),
                page: page.saturating_sub(1),
            },
        )
        .await;
    let state = console.loaded::<SearchState>(SearchState::PATH)?;
    console.print(&state.results, || render_search(&state))
}
