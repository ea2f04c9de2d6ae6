pub fn root_container_style(theme_vars: &str) -> String {
    format!(
        "{theme_vars} display: flex; flex-direction: column; gap: 12px; background: var(--background); color: var(--text); border-radius: 8px; padding: 16px; font-family: sans-serif;"
    )
}

pub fn table_container_style() -> &'static str {
    "flex: 1; overflow: auto; min-height: 0;"
}

pub fn table_header_cell_style(sortable: bool) -> String {
    let cursor = if sortable { "pointer" } else { "default" };
    format!(
        "position: sticky; top: 0; z-index: 1; background: var(--secondary); border-bottom: 1px solid #bbb; padding: 8px; text-align: left; font-size: 14px; cursor: {cursor}; user-select: none;"
    )
}

pub fn table_cell_style() -> &'static str {
    "border-bottom: 1px solid #e5e7eb; padding: 8px;"
}

pub fn grid_container_style() -> &'static str {
    "display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 12px;"
}

pub fn grid_card_style() -> &'static str {
    "border: 1px solid var(--secondary); border-radius: 8px; padding: 12px; background: var(--background); box-shadow: 0 1px 3px rgba(0,0,0,0.08);"
}

pub fn toggle_button_style(active: bool) -> String {
    let (background, color) = if active {
        ("var(--primary)", "#fff")
    } else {
        ("transparent", "var(--text)")
    };
    format!(
        "border: 1px solid var(--primary); background: {background}; color: {color}; padding: 4px 10px; border-radius: 6px; cursor: pointer;"
    )
}

pub fn page_button_style(active: bool) -> String {
    toggle_button_style(active)
}

pub fn disabled_action_style() -> &'static str {
    "opacity: 0.5; cursor: not-allowed; margin-right: 5px;"
}
