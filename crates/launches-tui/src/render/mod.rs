//! Main render/view function (View in TEA pattern)


use launches_app::{AppState, ModalRegion, Region, Screen, TileRegion};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::layout::{modal_close_rect, tile_action_rect};
use crate::theme::palette;

fn region(rect: Rect) -> Region {
    Region::new(rect.x, rect.y, rect.width, rect.height)
}

/// Render the complete UI (View function in TEA)
///
/// Apart from drawing, this records the grid geometry and the clickable
/// regions of this frame in `state`.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    state.hit_map.clear();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let screen = state.screen();

    let title = state.title();
    let count = (screen == Screen::Grid).then_some(state.launches.len());
    frame.render_widget(widgets::MainHeader::new(&title, count), areas.header);

    match screen {
        Screen::Loading => frame.render_widget(
            widgets::StatusMessage::Loading {
                frame: state.loading_frame,
            },
            areas.body,
        ),
        Screen::Error => {
            let message = state.error.as_deref().unwrap_or_default();
            frame.render_widget(widgets::StatusMessage::Error { message }, areas.body);
        }
        Screen::Grid => render_grid(frame, areas.body, state),
    }

    frame.render_widget(
        widgets::KeyHints::new(screen, state.is_modal_visible()),
        areas.footer,
    );

    if state.is_modal_visible() {
        render_modal(frame, area, state);
    }
}

fn render_grid(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let columns = layout::effective_columns(area.width, state.settings.ui.columns);
    let rows = layout::rows_visible(area.height);
    state.set_grid_geometry(usize::from(columns), usize::from(rows));

    let tiles = widgets::visible_tiles(area, &state.launches, columns, state.grid_scroll);
    for (launch, rect) in &tiles {
        // Tiles too short to draw the action control are not clickable
        if layout::tile_shows_action(*rect) {
            state.hit_map.push_tile(TileRegion {
                flight_number: launch.flight_number,
                tile: region(*rect),
                action: region(tile_action_rect(*rect)),
            });
        }
    }

    let grid = widgets::LaunchGrid::new(&state.launches, columns)
        .scroll(state.grid_scroll)
        .focused(state.focused);
    frame.render_widget(grid, area);
}

fn render_modal(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let limit = widgets::LaunchModal::new(state.selected(), &state.settings.ui.date_format)
        .scroll_limit(area);
    state.set_modal_scroll_limit(limit);

    let modal = widgets::LaunchModal::new(state.selected(), &state.settings.ui.date_format)
        .scroll(state.modal_scroll());
    let Some(content) = modal.rect(area) else {
        return;
    };
    let close = modal_close_rect(content);
    frame.render_widget(modal, area);

    state.hit_map.set_modal(ModalRegion {
        overlay: region(area),
        content: region(content),
        close: region(close),
    });
}
