//! The Nebula Odyssey page.
//!
//! `NebulaPage` is the only stateful view in the application. It owns the
//! loading flag and the splash timer; every section below it is a pure
//! function of compiled-in copy.

use std::time::Instant;

use gpui::{prelude::*, *};
use ui_common::{Palette, v_flex};

pub mod copy;
pub mod roster;
pub mod sections;
pub mod state;

use sections::Section;
use state::{PageState, SPLASH_DWELL, Stage};

pub struct NebulaPage {
    state: PageState,
    mounted_at: Instant,
    focus_handle: FocusHandle,
    // Owned, never detached: dropping the page cancels a pending timer,
    // so the callback cannot run against a torn-down view.
    _splash_timer: Task<()>,
}

impl NebulaPage {
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        let mounted_at = Instant::now();

        let splash_timer = cx.spawn(async move |this, mut cx| {
            cx.background_executor().timer(SPLASH_DWELL).await;
            let _ = cx.update(|cx| {
                this.update(cx, |page, cx| {
                    if page.state.tick(page.mounted_at.elapsed()) {
                        tracing::debug!("[Page] splash dwell elapsed, revealing content");
                        cx.notify();
                    }
                })
            });
        });

        Self {
            state: PageState::new(),
            mounted_at,
            focus_handle: cx.focus_handle(),
            _splash_timer: splash_timer,
        }
    }

    pub fn open(cx: &mut App) -> anyhow::Result<WindowHandle<Self>> {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds {
                origin: point(px(120.0), px(80.0)),
                size: size(px(1280.0), px(860.0)),
            })),
            titlebar: Some(TitlebarOptions {
                title: Some("Nebula Odyssey".into()),
                appears_transparent: false,
                traffic_light_position: None,
            }),
            window_background: WindowBackgroundAppearance::Opaque,
            focus: true,
            show: true,
            kind: WindowKind::Normal,
            is_movable: true,
            is_minimizable: true,
            is_resizable: true,
            window_decorations: None,
            display_id: None,
            window_min_size: Some(size(px(480.0), px(360.0))),
            tabbing_identifier: None,
            app_id: None,
        };

        cx.open_window(options, |window, cx| cx.new(|cx| Self::new(window, cx)))
    }

    fn render_content(&self, window: &Window) -> impl IntoElement {
        v_flex()
            .id("content-scroll")
            .size_full()
            .overflow_y_scroll()
            .children(
                Section::ORDER
                    .iter()
                    .map(|section| sections::render_section(*section, window)),
            )
            .child(sections::footer())
    }
}

impl Focusable for NebulaPage {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for NebulaPage {
    fn render(&mut self, window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let palette = Palette::nebula();
        let root = div()
            .track_focus(&self.focus_handle)
            .size_full()
            .bg(palette.page_bg)
            .text_color(palette.text)
            .font_family("monospace");

        match self.state.stage() {
            Stage::Loading => root.child(ui_splash::splash_screen()),
            Stage::Content => root.child(self.render_content(window)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PageState, Stage, copy};
    use std::time::Duration;

    // Drives the lifecycle on a simulated clock: splash until the dwell
    // elapses, content with the expected copy afterwards.
    #[test]
    fn test_splash_hands_off_to_content_after_dwell() {
        let mut state = PageState::new();
        assert_eq!(state.stage(), Stage::Loading);

        assert!(!state.tick(Duration::from_millis(1999)));
        assert_eq!(state.stage(), Stage::Loading);

        assert!(state.tick(Duration::from_millis(2000)));
        assert_eq!(state.stage(), Stage::Content);

        assert!(copy::TITLE.contains("NEBULA ODYSSEY"));
        assert!(copy::FOOTER_LINE.contains("2185 Nebula Odyssey"));
    }
}
