//! Screen layout and drawing
//!
//! Layout is computed fresh every frame from the window size and measured
//! text, so a resize needs no bookkeeping beyond the seek track.

use crate::{
    assets::Assets,
    input::WindowSize,
    render::{Canvas, Color, Font, Rect},
    session::{AppState, Session},
};
use reloop_playback::{Icon, Overlay, Vec2};

/// Shown until the first track loads
pub const WAITING_MESSAGE: &str = "Drag & Drop Music Here";

/// Gap between the status icons and the window edge
const ICON_MARGIN: f32 = 10.0;

/// Padding around the notification text background
const POPUP_PADDING: f32 = 12.0;

/// Backdrop behind notification text
const POPUP_BACKGROUND: Color = Color {
    r: 0,
    g: 0,
    b: 0,
    a: 160,
};

/// Position that centres a box of `size` in the window
pub fn centered(window: WindowSize, size: Vec2) -> Vec2 {
    Vec2::new(
        (window.width as f32 - size.x) / 2.0,
        (window.height as f32 - size.y) / 2.0,
    )
}

/// Song name line, near the top-left corner
pub fn song_name_position(window: WindowSize, size: Vec2) -> Vec2 {
    let height = window.height as f32;
    Vec2::new(centered(window, size).x / 25.0, height - height / 1.01)
}

/// Time readout, just below the song name
pub fn song_time_position(window: WindowSize, size: Vec2) -> Vec2 {
    let height = window.height as f32;
    Vec2::new(centered(window, size).x / 24.0, height - height / 1.1)
}

pub fn song_name_text(title: &str) -> String {
    format!("Song name: {}", title)
}

pub fn song_time_text(time_played: f32, length: f32) -> String {
    format!("Time played: {:.1} / {:.1} seconds", time_played, length)
}

/// Top-left corner of the status icon in `slot`, counted from the right edge
pub fn status_icon_position(window: WindowSize, icon_size: f32, slot: usize) -> Vec2 {
    let x = window.width as f32 - (icon_size + ICON_MARGIN) * (slot as f32 + 1.0);
    Vec2::new(x, ICON_MARGIN)
}

pub(crate) fn draw(session: &Session, assets: &Assets, canvas: &mut dyn Canvas, now: f64) {
    match session.app_state() {
        AppState::WaitingForInput => draw_waiting(session, assets.font(), canvas),
        AppState::Active => draw_main(session, assets, canvas, now),
    }
}

fn draw_waiting(session: &Session, font: &dyn Font, canvas: &mut dyn Canvas) {
    let ui = &session.config().ui;
    let size = font.measure(WAITING_MESSAGE, ui.font_size, ui.font_spacing);
    let position = centered(session.window(), size);
    canvas.draw_text(
        font,
        WAITING_MESSAGE,
        position,
        ui.font_size,
        ui.font_spacing,
        ui.text_color,
    );
}

fn draw_main(session: &Session, assets: &Assets, canvas: &mut dyn Canvas, now: f64) {
    let ui = &session.config().ui;
    let window = session.window();
    let font = assets.font();
    let controller = session.controller();

    if let Some(track) = session.playlist().current() {
        let name = song_name_text(&track.title());
        let size = font.measure(&name, ui.font_size, ui.font_spacing);
        canvas.draw_text(
            font,
            &name,
            song_name_position(window, size),
            ui.font_size,
            ui.font_spacing,
            ui.text_color,
        );
    }

    let time = song_time_text(controller.time_played(), controller.length());
    let size = font.measure(&time, ui.font_size, ui.font_spacing);
    canvas.draw_text(
        font,
        &time,
        song_time_position(window, size),
        ui.font_size,
        ui.font_spacing,
        ui.text_color,
    );

    draw_status_icons(session, assets, canvas);

    if let Some(notification) = session.notifier().live(now) {
        draw_overlay(session, assets, canvas, notification.kind.overlay());
    }

    let track = session.seek_track();
    canvas.draw_line(track.start(), track.end(), track.thickness(), ui.track_color);
    canvas.draw_rounded_rect(
        Rect::around(track.cursor(), track.cursor_radius()),
        1.0,
        ui.cursor_color,
    );
}

fn draw_status_icons(session: &Session, assets: &Assets, canvas: &mut dyn Canvas) {
    let ui = &session.config().ui;
    let mute = if session.controller().is_muted() {
        Icon::Muted
    } else {
        Icon::Unmuted
    };
    let shuffle = if session.playlist().is_shuffle() {
        Icon::Shuffle
    } else {
        Icon::CrossedShuffle
    };

    for (slot, icon) in [mute, shuffle].into_iter().enumerate() {
        let texture = assets.icon(icon);
        let scale = ui.icon_size / texture.width().max(1) as f32;
        let position = status_icon_position(session.window(), ui.icon_size, slot);
        canvas.draw_texture(texture, position, scale, Color::WHITE);
    }
}

fn draw_overlay(session: &Session, assets: &Assets, canvas: &mut dyn Canvas, overlay: Overlay) {
    let ui = &session.config().ui;
    let window = session.window();

    match overlay {
        Overlay::Text(text) => {
            let font = assets.font();
            let size = font.measure(&text, ui.font_size, ui.font_spacing);
            let position = centered(window, size);
            let backdrop = Rect {
                x: position.x,
                y: position.y,
                width: size.x,
                height: size.y,
            }
            .padded(POPUP_PADDING);

            canvas.draw_rounded_rect(backdrop, 0.3, POPUP_BACKGROUND);
            canvas.draw_text(
                font,
                &text,
                position,
                ui.font_size,
                ui.font_spacing,
                ui.text_color,
            );
        }
        Overlay::Icon(icon) => {
            let texture = assets.icon(icon);
            let scale = ui.icon_size * 2.0 / texture.width().max(1) as f32;
            let size = Vec2::new(
                texture.width() as f32 * scale,
                texture.height() as f32 * scale,
            );
            canvas.draw_texture(texture, centered(window, size), scale, Color::WHITE);
        }
    }
}
