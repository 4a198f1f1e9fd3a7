//! Application - Preview Window
//!
//! Opens a native window that paints one About section.

use gpui::{
    App, AppContext, Application, Bounds, Context, InteractiveElement, IntoElement, KeyBinding,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, TitlebarOptions,
    Window, WindowBounds, WindowOptions, actions, div, px,
};

use crate::components::AboutSection;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::domain::SectionConfig;
use crate::i18n::{Locale, t};
use crate::theme::colors::AboutColors;

actions!(about, [Quit]);

/// Root view holding the section being previewed
pub struct AboutWindow {
    config: SectionConfig,
    locale: Locale,
}

impl AboutWindow {
    pub fn new(config: SectionConfig, locale: Locale) -> Self {
        Self { config, locale }
    }
}

impl Render for AboutWindow {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("about-scroll")
            .size_full()
            .overflow_y_scroll()
            .bg(AboutColors::section_default_bg())
            .child(AboutSection::new(self.config.clone()).locale(self.locale))
    }
}

/// Run the preview application
pub fn run_app(config: SectionConfig, locale: Locale) {
    Application::new().run(move |cx: &mut App| {
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());
        cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let title = format!("{} - {}", t(locale, "window-title"), config.identity.name);
        let bounds = Bounds::centered(
            None,
            gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(title)),
                ..Default::default()
            }),
            ..Default::default()
        };

        if let Err(err) = cx.open_window(window_options, move |_window, cx| {
            cx.new(|_| AboutWindow::new(config, locale))
        }) {
            tracing::error!(%err, "failed to open window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
