//! Hoverboard host - opens a gpui window and runs one tick per frame.

use anyhow::Result;
use gpui::*;
use hoverboard::app::HoverApp;
use hoverboard::perf::FrameMonitor;
use hoverboard::render::DisplayList;
use hoverboard::render::canvas::render_canvas;
use hoverboard::settings::Settings;
use tracing_subscriber::EnvFilter;

struct HoverboardView {
    app: HoverApp,
    /// Last mouse position seen by the window, in canvas pixels
    mouse: (f32, f32),
    frames: FrameMonitor,
}

impl HoverboardView {
    fn new(settings: &Settings) -> Self {
        Self {
            app: HoverApp::new(settings),
            mouse: (0.0, 0.0),
            frames: FrameMonitor::new(),
        }
    }

    fn handle_mouse_move(&mut self, event: &MouseMoveEvent, _window: &mut Window, _cx: &mut Context<Self>) {
        self.mouse = (f32::from(event.position.x), f32::from(event.position.y));
    }
}

impl Render for HoverboardView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        self.frames.begin_frame();

        let mut list = DisplayList::with_capacity(5);
        if let Err(e) = self.app.tick(self.mouse, &mut list) {
            tracing::error!("State machine failed: {}", e);
            cx.quit();
        }

        self.frames.end_frame();
        self.frames.log_summary_periodically();

        // Keep ticking while the window is open.
        window.request_animation_frame();

        div()
            .size_full()
            .relative()
            .on_mouse_move(cx.listener(Self::handle_mouse_move))
            .child(render_canvas(list))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::load();
    let (width, height) = settings.canvas_size();

    Application::new().run(move |cx: &mut App| {
        let bounds = Bounds::centered(None, size(px(width), px(height)), cx);

        let window = cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some("Hoverboard".into()),
                    ..Default::default()
                }),
                focus: true,
                show: true,
                ..Default::default()
            },
            |_window, cx| cx.new(|_cx| HoverboardView::new(&settings)),
        );

        if let Err(e) = window {
            tracing::error!("Failed to open window: {}", e);
            cx.quit();
            return;
        }

        cx.on_window_closed(|cx| cx.quit()).detach();
        cx.activate(true);
    });

    Ok(())
}
