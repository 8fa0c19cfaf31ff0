//! # ResultView Component
//!
//! Scrollable container stacking the [`ResultPanel`] and, when there are
//! citations, the [`SourceList`] one blank row below it.
//!
//! `ResultView` is a transient component (created each frame) that wraps
//! `&'a mut ResultViewState` (persistent scroll state) and the answer props.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::inference::Citation;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::result_panel::ResultPanel;
use crate::tui::components::source_list::SourceList;
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

const SECTION_GAP: u16 = 1;

/// Scroll state for the result view. Must be persisted in the parent TuiState.
#[derive(Default)]
pub struct ResultViewState {
    pub scroll_state: ScrollViewState,
    /// Last rendered canvas height (for scroll clamping between frames)
    pub content_height: u16,
    /// Last known viewport height
    pub viewport_height: u16,
}

impl ResultViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the top, e.g. when a new answer arrives.
    pub fn reset(&mut self) {
        self.scroll_state = ScrollViewState::default();
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

impl EventHandler for ResultViewState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => return None,
        }
        self.clamp_scroll();
        None
    }
}

pub struct ResultView<'a> {
    pub state: &'a mut ResultViewState,
    pub text: &'a str,
    pub citations: &'a [Citation],
    pub copied: bool,
    pub palette: Palette,
}

impl<'a> ResultView<'a> {
    pub fn new(
        state: &'a mut ResultViewState,
        text: &'a str,
        citations: &'a [Citation],
        copied: bool,
        palette: Palette,
    ) -> Self {
        Self {
            state,
            text,
            citations,
            copied,
            palette,
        }
    }
}

/// Panel, gap and sources stacked; the gap only exists when there are sources.
fn stacked_height(panel_height: u16, sources_height: u16) -> u16 {
    if sources_height == 0 {
        return panel_height;
    }
    panel_height
        .saturating_add(SECTION_GAP)
        .saturating_add(sources_height)
}

impl Component for ResultView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar

        let panel = ResultPanel::new(self.text, self.copied, self.palette);
        let sources = SourceList::new(self.citations, self.palette);
        let panel_height = panel.calculate_height(content_width);
        let sources_height = sources.calculate_height(content_width);

        let sources_top = panel_height.saturating_add(SECTION_GAP);
        let total_height = stacked_height(panel_height, sources_height);

        self.state.content_height = total_height;
        self.state.viewport_height = area.height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        scroll_view.render_widget(panel, Rect::new(0, 0, content_width, panel_height));
        if sources_height > 0 {
            scroll_view.render_widget(
                sources,
                Rect::new(0, sources_top, content_width, sources_height),
            );
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
