use std::sync::Arc;

use dioxus::prelude::*;
use tracing::debug;

use crate::config::AppConfig;
use crate::domain::entities::record::{display_value, lookup_path, Record};
use crate::infra::http::client::HttpListSource;
use crate::ui::columns::{
    format_date, resolve_columns, row_key, CellRenderer, ColumnDescriptor, GridFields,
};
use crate::ui::pagination::{can_go_next, can_go_previous, page_items, range_summary, PageItem};
use crate::ui::state::app_state::{ViewMode, ViewState};
use crate::ui::styles::{
    disabled_action_style, grid_card_style, grid_container_style, page_button_style,
    root_container_style, table_cell_style, table_container_style, table_header_cell_style,
    toggle_button_style,
};
use crate::ui::theme::Theme;
use crate::usecase::services::fetch_controller::{FetchController, FetchTicket};
use crate::usecase::services::query_service::QueryService;

pub const DEFAULT_PAGE_SIZE_OPTIONS: [u32; 4] = [10, 25, 50, 100];

/// Construction-time settings for one `DataViewX`.
#[derive(Clone)]
pub struct DataViewXConfig {
    pub service: Arc<QueryService>,
    pub display: ViewMode,
    pub initial_page_size: u32,
    pub page_size_options: Vec<u32>,
    pub columns: Vec<ColumnDescriptor>,
    pub grid_fields: Option<GridFields>,
    pub theme: Theme,
}

impl DataViewXConfig {
    pub fn new(service: Arc<QueryService>) -> Self {
        Self {
            service,
            display: ViewMode::List,
            initial_page_size: DEFAULT_PAGE_SIZE_OPTIONS[0],
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            columns: Vec::new(),
            grid_fields: None,
            theme: Theme::default(),
        }
    }

    /// Options offered in the page-size menu, always including the initial size.
    pub fn page_size_choices(&self) -> Vec<u32> {
        let mut choices: Vec<u32> = self
            .page_size_options
            .iter()
            .copied()
            .filter(|size| *size > 0)
            .collect();
        if !choices.contains(&self.initial_page_size) {
            choices.push(self.initial_page_size);
        }
        choices.sort_unstable();
        choices.dedup();
        choices
    }
}

impl PartialEq for DataViewXConfig {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.service, &other.service)
            && self.display == other.display
            && self.initial_page_size == other.initial_page_size
            && self.page_size_options == other.page_size_options
            && self.columns == other.columns
            && self.grid_fields == other.grid_fields
            && self.theme == other.theme
    }
}

/// Runs a ticket in the background and hands the outcome back to the controller.
fn dispatch(
    mut controller: Signal<FetchController>,
    service: Arc<QueryService>,
    ticket: Option<FetchTicket>,
) {
    let Some(ticket) = ticket else {
        return;
    };
    spawn(async move {
        let outcome = service.fetch_page(&ticket.request).await;
        controller.write().complete(&ticket, outcome);
    });
}

#[component]
pub fn DataViewX(config: DataViewXConfig, empty_state: Option<Element>) -> Element {
    let ViewState {
        mut controller,
        mut search,
        mut view_mode,
    } = ViewState::new(config.display, config.initial_page_size.max(1));

    let service_for_mount = config.service.clone();
    use_effect(move || {
        let ticket = controller.write().refresh();
        dispatch(controller, service_for_mount.clone(), Some(ticket));
    });

    let snapshot = controller.read();
    let query = snapshot.query().clone();
    let result = snapshot.result().clone();
    drop(snapshot);

    let columns = resolve_columns(&config.columns, &result.rows);
    let theme_vars = config.theme.resolve().css_vars();
    let loading = result.loading;
    let current_view = view_mode();
    let draft = search.read().draft().to_string();
    let has_error = result.error.is_some();
    let error_message = result.error.clone().unwrap_or_default();
    let show_footer = !loading && !has_error && result.total_items > 0;

    let empty_view = match &empty_state {
        Some(content) => content.clone(),
        None => rsx! {
            div { style: "text-align: center; padding: 40px; color: #888;", "No data available." }
        },
    };

    let root_style = root_container_style(&theme_vars);
    let list_toggle_style = toggle_button_style(current_view == ViewMode::List);
    let grid_toggle_style = toggle_button_style(current_view == ViewMode::Grid);
    let service_for_input = config.service.clone();
    let service_for_submit = config.service.clone();

    rsx! {
        div { style: "{root_style}",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; gap: 12px;",
                div { style: "display: flex; align-items: center; gap: 6px; flex: 1;",
                    span { "🔍" }
                    input {
                        r#type: "text",
                        placeholder: "Search...",
                        aria_label: "Search data",
                        style: "flex: 1; padding: 6px 10px; border: 1px solid #bbb; border-radius: 6px;",
                        value: "{draft}",
                        oninput: move |event| {
                            let commit = search.write().edit(event.value());
                            if let Some(term) = commit {
                                let ticket = controller.write().set_search(term);
                                dispatch(controller, service_for_input.clone(), ticket);
                            }
                        },
                        onkeydown: move |event| {
                            if event.key() == Key::Enter {
                                let term = search.write().submit();
                                let ticket = controller.write().set_search(term);
                                dispatch(controller, service_for_submit.clone(), ticket);
                            }
                        },
                    }
                }
                div { style: "display: flex; gap: 6px;",
                    button {
                        style: "{list_toggle_style}",
                        disabled: loading,
                        aria_label: "Switch to list view",
                        aria_pressed: current_view == ViewMode::List,
                        onclick: move |_| {
                            debug!("switching to list view");
                            view_mode.set(ViewMode::List);
                        },
                        "☰"
                    }
                    button {
                        style: "{grid_toggle_style}",
                        disabled: loading,
                        aria_label: "Switch to grid view",
                        aria_pressed: current_view == ViewMode::Grid,
                        onclick: move |_| {
                            debug!("switching to grid view");
                            view_mode.set(ViewMode::Grid);
                        },
                        "▦"
                    }
                }
            }

            div { style: "{table_container_style()}",
                if loading {
                    div { style: "display: flex; align-items: center; justify-content: center; min-height: 200px;",
                        role: "status",
                        aria_label: "Loading",
                        "Loading..."
                    }
                } else if has_error {
                    div { style: "color: #d24; padding: 12px;", "Error: {error_message}" }
                } else if result.rows.is_empty() {
                    {empty_view}
                } else if current_view == ViewMode::List {
                    ListView {
                        config: config.clone(),
                        controller,
                        columns: columns.clone(),
                        rows: result.rows.clone(),
                    }
                } else {
                    GridView {
                        grid_fields: config.grid_fields.clone(),
                        columns: columns.clone(),
                        rows: result.rows.clone(),
                    }
                }
            }

            if show_footer {
                PaginationBar {
                    config: config.clone(),
                    controller,
                    page: query.page,
                    page_size: query.page_size,
                    total_pages: result.total_pages,
                    total_items: result.total_items,
                    loading,
                }
            }
        }
    }
}

#[component]
fn RowActions() -> Element {
    rsx! {
        button { style: "{disabled_action_style()}", disabled: true, title: "Not implemented", "📄" }
        button { style: "{disabled_action_style()}", disabled: true, title: "Not implemented", "⋮" }
    }
}

#[component]
fn ListView(
    config: DataViewXConfig,
    mut controller: Signal<FetchController>,
    columns: Vec<ColumnDescriptor>,
    rows: Vec<Record>,
) -> Element {
    let sort = controller.read().query().sort.clone();
    let actions_header_style = table_header_cell_style(false);

    rsx! {
        table { style: "width: 100%; border-collapse: collapse;",
            thead {
                tr {
                    {columns.iter().map(|column| {
                        let target = column.sort_target().map(str::to_string);
                        let indicator = column.sort_indicator(&sort);
                        let service = config.service.clone();
                        let header_style = table_header_cell_style(column.sortable);
                        rsx!(
                            th {
                                key: "{column.key}",
                                style: "{header_style}",
                                onclick: move |_| {
                                    let Some(key) = target.as_deref() else {
                                        return;
                                    };
                                    let ticket = controller.write().toggle_sort(key);
                                    dispatch(controller, service.clone(), ticket);
                                },
                                span { style: "display: inline-flex; align-items: center; gap: 4px;",
                                    "{column.header}"
                                    span { style: "font-size: 11px; opacity: 0.7;", "{indicator}" }
                                }
                            }
                        )
                    })}
                    th { style: "{actions_header_style}" }
                }
            }
            tbody {
                {rows.iter().enumerate().map(|(index, row)| {
                    let row_id = row_key(row, index);
                    rsx!(
                        tr { key: "{row_id}",
                            {columns.iter().map(|column| {
                                let text = column.cell_text(row);
                                rsx!(td { key: "{column.key}", style: "{table_cell_style()}", "{text}" })
                            })}
                            td { style: "{table_cell_style()}", RowActions {} }
                        }
                    )
                })}
            }
        }
    }
}

#[component]
fn GridView(
    grid_fields: Option<GridFields>,
    columns: Vec<ColumnDescriptor>,
    rows: Vec<Record>,
) -> Element {
    rsx! {
        div { style: "{grid_container_style()}",
            {rows.iter().enumerate().map(|(index, row)| {
                let row_id = row_key(row, index);
                match &grid_fields {
                    Some(fields) => {
                        let card = fields.card(row);
                        rsx!(
                            div { key: "{row_id}", style: "{grid_card_style()}",
                                div { style: "font-weight: 600; font-size: 16px;", "{card.title}" }
                                if !card.subtitle.is_empty() {
                                    div { style: "color: var(--primary); font-size: 13px;", "{card.subtitle}" }
                                }
                                if !card.body.is_empty() {
                                    p { style: "margin: 8px 0;", "{card.body}" }
                                }
                                div { style: "display: flex; justify-content: space-between; font-size: 12px; color: #666;",
                                    span { "{card.date}" }
                                    span { "{card.date_info}" }
                                }
                                div { style: "margin-top: 10px; text-align: right;", RowActions {} }
                            }
                        )
                    }
                    None => rsx!(
                        div { key: "{row_id}", style: "{grid_card_style()}",
                            {columns.iter().map(|column| {
                                let text = column.cell_text(row);
                                rsx!(
                                    div { key: "{column.key}",
                                        strong { "{column.header}:" }
                                        " {text}"
                                    }
                                )
                            })}
                            div { style: "margin-top: 10px; text-align: right;", RowActions {} }
                        }
                    ),
                }
            })}
        }
    }
}

#[component]
fn PaginationBar(
    config: DataViewXConfig,
    mut controller: Signal<FetchController>,
    page: u32,
    page_size: u32,
    total_pages: u32,
    total_items: u64,
    loading: bool,
) -> Element {
    let choices = config.page_size_choices();
    let summary = range_summary(page, page_size, total_items);
    let items = page_items(page, total_pages);
    let service_for_size = config.service.clone();
    let service_for_previous = config.service.clone();
    let service_for_next = config.service.clone();
    let nav_style = page_button_style(false);

    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: center; gap: 12px; flex-wrap: wrap;",
            div { style: "font-size: 13px; color: #666;", "{summary}" }
            div { style: "display: flex; align-items: center; gap: 6px;",
                select {
                    aria_label: "Items per page",
                    value: "{page_size}",
                    onchange: move |event| {
                        let Ok(size) = event.value().parse::<u32>() else {
                            return;
                        };
                        let ticket = controller.write().set_page_size(size);
                        dispatch(controller, service_for_size.clone(), ticket);
                    },
                    for choice in choices.iter().copied() {
                        option { key: "{choice}", value: "{choice}", selected: choice == page_size, "{choice}" }
                    }
                }
                button {
                    style: "{nav_style}",
                    aria_label: "Previous page",
                    disabled: !can_go_previous(page, loading),
                    onclick: move |_| {
                        let ticket = controller.write().set_page(page.saturating_sub(1));
                        dispatch(controller, service_for_previous.clone(), ticket);
                    },
                    "‹"
                }
                {items.iter().enumerate().map(|(index, item)| match *item {
                    PageItem::Page(number) => {
                        let service = config.service.clone();
                        let button_style = page_button_style(number == page);
                        let current_marker = if number == page { "page" } else { "false" };
                        rsx!(
                            button {
                                key: "page-{number}",
                                style: "{button_style}",
                                disabled: loading,
                                aria_label: "Go to page {number}",
                                aria_current: current_marker,
                                onclick: move |_| {
                                    let ticket = controller.write().set_page(number);
                                    dispatch(controller, service.clone(), ticket);
                                },
                                "{number}"
                            }
                        )
                    }
                    PageItem::Ellipsis => rsx!(
                        span { key: "ellipsis-{index}", style: "padding: 6px 10px; display: inline-block;", "..." }
                    ),
                })}
                button {
                    style: "{nav_style}",
                    aria_label: "Next page",
                    disabled: !can_go_next(page, total_pages, loading),
                    onclick: move |_| {
                        let ticket = controller.write().set_page(page + 1);
                        dispatch(controller, service_for_next.clone(), ticket);
                    },
                    "›"
                }
            }
        }
    }
}

/// Demo window: one `DataViewX` against the configured endpoint.
#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let view_config = use_hook(|| {
        let source = HttpListSource::new(config.api_url.clone())
            .with_token(config.api_token.clone())
            .with_param_keys(config.param_keys.clone());
        let paths = config.field_paths.clone();
        let service = QueryService::new(Arc::new(source))
            .with_mapper(Arc::new(config.field_paths.clone()))
            .with_transform(move |body| paths.wrap_bare_list(body));
        let mut view_config = DataViewXConfig::new(Arc::new(service));
        view_config.display = config.display;
        view_config.initial_page_size = config.page_size;
        view_config.columns = demo_columns();
        view_config.grid_fields = Some(demo_grid_fields());
        view_config.theme = Theme {
            primary: Some("#47A7F4".to_string()),
            accent: Some("#ff9800".to_string()),
            ..Theme::default()
        };
        view_config
    });

    rsx! {
        div { style: "padding: 20px; display: flex; flex-direction: column; height: 100vh; box-sizing: border-box; background: #f1f5f9;",
            h1 { "DataViewX" }
            DataViewX {
                config: view_config,
                empty_state: rsx! {
                    div { style: "text-align: center; padding: 50px; color: #999;",
                        h2 { "No Data Found" }
                        p { "Try adjusting your search or filters." }
                    }
                },
            }
        }
    }
}

fn demo_columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("id", "ID"),
        ColumnDescriptor::new("title", "Title"),
        ColumnDescriptor::new("experience", "Experience"),
        ColumnDescriptor::new("location", "Location").unsortable(),
        ColumnDescriptor::new("createdBy", "Created By"),
        ColumnDescriptor::new("createdAt", "Created At").with_render(CellRenderer::new(|row| {
            format_date(&display_value(lookup_path(row, "createdAt")))
        })),
    ]
}

fn demo_grid_fields() -> GridFields {
    GridFields {
        id: "id".to_string(),
        title: "title".to_string(),
        subtitle: Some("jobDetails".to_string()),
        body: Some("description".to_string()),
        date: Some("createdAt".to_string()),
        date_info: Some("createdBy".to_string()),
    }
}
