use dioxus::prelude::{use_signal, Signal};

use crate::ui::search::SearchBuffer;
use crate::usecase::services::fetch_controller::FetchController;

/// Table or card layout. Purely visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    Grid,
}

pub struct ViewState {
    pub controller: Signal<FetchController>,
    pub search: Signal<SearchBuffer>,
    pub view_mode: Signal<ViewMode>,
}

impl ViewState {
    pub fn new(initial_view: ViewMode, initial_page_size: u32) -> Self {
        Self {
            controller: use_signal(move || FetchController::new(initial_page_size)),
            search: use_signal(SearchBuffer::default),
            view_mode: use_signal(move || initial_view),
        }
    }
}
