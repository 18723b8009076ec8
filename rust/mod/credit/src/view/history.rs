//! Role audit log.

use crate::present::format::format_datetime;
use crate::present::labels::role_label;
use crate::state::RoleHistoryState;

use super::{banner, loading_spinner, Table};

pub fn render_role_history(state: &RoleHistoryState) -> String {
    let mut out = vec![match &state.user_id {
        Some(id) => format!("Role History: user {}", id),
        None => "Role History".to_string(),
    }];
    if let Some(b) = banner(state.error.as_deref()) {
        out.push(b);
    }
    if state.loading && state.records.is_empty() {
        out.push(loading_spinner(Some("Loading history...")));
        return out.join("\n");
    }
    if state.records.is_empty() {
        out.push("No role changes recorded.".to_string());
        return out.join("\n");
    }

    let mut table = Table::new(["When", "User", "Change", "Changed By", "Reason"]);
    for rec in &state.records {
        let old = rec
            .old_role
            .as_ref()
            .map(role_label)
            .unwrap_or_else(|| "None".to_string());
        table.row(vec![
            format_datetime(&rec.changed_at),
            rec.user_name.clone(),
            format!("{} → {}", old, role_label(&rec.new_role)),
            rec.changed_by_name.clone(),
            rec.reason.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }
    out.push(table.render());
    out.join("\n")
}
