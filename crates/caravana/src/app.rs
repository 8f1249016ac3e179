use std::path::PathBuf;
use std::time::{Duration, Instant};

use eframe::egui::{self, FontId, Pos2, Stroke};

use crate::deck::{self, SLIDE_COUNT, SlideIndex};
use crate::input::{self, Command, Intent, SwipeTracker};
use crate::landing::LandingGate;
use crate::media::{AMBIENT_START, MediaBus};
use crate::nav::{Direction, NavEvent, Navigator};
use crate::pagination;
use crate::render::{self, image_cache::ImageCache, layouts::world_tour::TourLayout};
use crate::render::transition::SandTransition;
use crate::slides::{SceneState, SlideContext, SlideRuntime, SlideSignal};
use crate::theme::Theme;

/// How long the outgoing slide takes to fade out under the incoming one.
const CROSSFADE: Duration = Duration::from_millis(1_000);
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const TOAST_DURATION: f32 = 1.5;
const TOAST_FADE_START: f32 = 1.0;
const CONTROL_SIZE: f32 = 56.0;
const CONTROL_MARGIN: f32 = 32.0;
/// Lease holder used to start the ambient track from the landing gate.
const LANDING_HOLDER: &str = "landing";

/// Everything the window needs to know at launch.
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub windowed: bool,
    /// Zero-based slide to open on.
    pub start_slide: SlideIndex,
    pub start_paused: bool,
    pub start_muted: bool,
    pub auto_advance: bool,
    pub assets: PathBuf,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            windowed: false,
            start_slide: 0,
            start_paused: false,
            start_muted: true,
            auto_advance: true,
            assets: PathBuf::from("public"),
        }
    }
}

struct Toast {
    message: String,
    start: Instant,
}

impl Toast {
    fn new(message: impl Into<String>, now: Instant) -> Self {
        Self {
            message: message.into(),
            start: now,
        }
    }

    fn opacity(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start).as_secs_f32();
        if elapsed < TOAST_FADE_START {
            1.0
        } else if elapsed < TOAST_DURATION {
            1.0 - (elapsed - TOAST_FADE_START) / (TOAST_DURATION - TOAST_FADE_START)
        } else {
            0.0
        }
    }

    fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start).as_secs_f32() >= TOAST_DURATION
    }
}

/// A slide that has been deactivated and is fading out.
struct Outgoing {
    runtime: SlideRuntime,
    since: Instant,
}

pub struct CaravanaApp {
    nav: Navigator,
    current: Option<SlideRuntime>,
    current_since: Instant,
    outgoing: Option<Outgoing>,
    media: MediaBus,
    gate: LandingGate,
    sand: SandTransition,
    swipe: SwipeTracker,
    theme: Theme,
    images: ImageCache,
    /// Completion that arrived while paused, replayed on resume.
    pending_completion: Option<SlideIndex>,
    start_slide: SlideIndex,
    start_paused: bool,
    launched: Instant,
    toast: Option<Toast>,
    show_hud: bool,
}

impl CaravanaApp {
    pub fn new(options: &AppOptions, now: Instant) -> Self {
        Self {
            nav: Navigator::new(options.auto_advance),
            current: None,
            current_since: now,
            outgoing: None,
            media: MediaBus::new(options.start_muted),
            gate: LandingGate::new(),
            sand: SandTransition::default(),
            swipe: SwipeTracker::default(),
            theme: Theme::desert(),
            images: ImageCache::new(options.assets.clone()),
            pending_completion: None,
            start_slide: options.start_slide.min(deck::last_index()),
            start_paused: options.start_paused,
            launched: now,
            toast: None,
            show_hud: false,
        }
    }

    /// Leave the landing gate: unlock playback, start the ambient track
    /// and show the first slide.
    fn enter(&mut self, now: Instant) {
        if !self.gate.dismiss() {
            return;
        }
        self.media.unlock();
        match self.media.acquire_shared(LANDING_HOLDER) {
            Ok(lease) => {
                self.media.seek_shared(&lease, AMBIENT_START, now);
                self.media.try_play_shared(&lease, now);
                self.media.release_shared(lease);
            }
            Err(err) => tracing::warn!("{err}"),
        }

        if self.start_paused {
            self.nav.set_paused(true, now);
        }
        self.nav.start(self.start_slide, now);
        let mut ctx = SlideContext {
            media: &mut self.media,
            paused: self.nav.is_paused(),
            now,
        };
        self.current = SlideRuntime::activate(self.nav.current(), &mut ctx);
        self.current_since = now;
    }

    fn handle_command(&mut self, command: Command, now: Instant) {
        match command {
            Command::Confirm => self.enter(now),
            Command::Navigate(Intent::Next) => {
                self.nav.next(now);
            }
            Command::Navigate(Intent::Previous) => {
                self.nav.previous(now);
            }
            Command::First => {
                self.nav.go_to(0, None, false, now);
            }
            Command::Last => {
                self.nav.go_to(deck::last_index(), None, false, now);
            }
            Command::ToggleMute => self.toggle_mute(now),
            Command::TogglePause => self.toggle_pause(now),
            Command::ToggleHud => self.show_hud = !self.show_hud,
            // Window-level commands are handled by `update`.
            Command::Fullscreen | Command::Quit => {}
        }
    }

    fn toggle_mute(&mut self, now: Instant) {
        let muted = self.media.toggle_mute();
        let message = if muted { "Sound off" } else { "Sound on" };
        self.toast = Some(Toast::new(message, now));
    }

    fn toggle_pause(&mut self, now: Instant) {
        if !self.nav.is_started() {
            return;
        }
        let paused = self.nav.toggle_pause(now);
        if let Some(slide) = self.current.as_mut() {
            let mut ctx = SlideContext {
                media: &mut self.media,
                paused,
                now,
            };
            slide.set_paused(&mut ctx);
        }
        let message = if paused { "Paused" } else { "Playing" };
        self.toast = Some(Toast::new(message, now));

        if !paused {
            if let Some(index) = self.pending_completion.take() {
                self.on_completed(index, now);
            }
        }
    }

    fn on_completed(&mut self, index: SlideIndex, now: Instant) {
        if self.nav.current() != index {
            tracing::debug!(slide = index, "completion from a slide that is no longer shown");
            return;
        }
        if self.nav.has_pending_commit() {
            tracing::debug!(slide = index, "completion ignored while leaving the slide");
            return;
        }
        if self.nav.is_paused() {
            tracing::debug!(slide = index, "completion deferred until resume");
            self.pending_completion = Some(index);
            return;
        }
        self.nav.go_to(index + 1, Some(Direction::Down), true, now);
    }

    fn on_nav_event(&mut self, event: NavEvent, now: Instant) {
        match event {
            NavEvent::Started { direction, .. } => {
                self.sand.trigger(direction, now, &mut rand::rng());
            }
            NavEvent::Committed { to, .. } => {
                let mut ctx = SlideContext {
                    media: &mut self.media,
                    paused: self.nav.is_paused(),
                    now,
                };
                if let Some(mut old) = self.current.take() {
                    old.deactivate(&mut ctx);
                    self.outgoing = Some(Outgoing {
                        runtime: old,
                        since: now,
                    });
                }
                self.current = SlideRuntime::activate(to, &mut ctx);
                self.current_since = now;
                self.pending_completion = None;
            }
            NavEvent::Settled => tracing::trace!("transition settled"),
        }
    }

    /// Advance every timer to `now`: navigation, slide runtimes, media and
    /// the effects layered on top.
    fn step(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
        }
        if self.gate.is_open() {
            return;
        }

        self.nav.advance(now);
        for event in self.nav.take_events() {
            self.on_nav_event(event, now);
        }

        let mut signals = Vec::new();
        let paused = self.nav.is_paused();
        match self.current.as_mut() {
            Some(slide) => {
                let mut ctx = SlideContext {
                    media: &mut self.media,
                    paused,
                    now,
                };
                signals.extend(slide.tick(&mut ctx).map(|s| (slide.index(), s)));
                let ended = ctx.media.poll(now);
                for media in ended {
                    let signal = slide.on_media_ended(media, &mut ctx);
                    signals.extend(signal.map(|s| (slide.index(), s)));
                }
            }
            None => {
                self.media.poll(now);
            }
        }
        for (index, signal) in signals {
            match signal {
                SlideSignal::Completed => self.on_completed(index, now),
            }
        }

        if self.sand.tick(now) {
            tracing::trace!("sand transition finished");
        }
        if self
            .outgoing
            .as_ref()
            .is_some_and(|o| now.saturating_duration_since(o.since) >= CROSSFADE)
        {
            self.outgoing = None;
        }
    }

    fn click(&mut self, pos: Pos2, screen: egui::Rect, scale: f32, now: Instant) {
        if self.gate.is_open() {
            if LandingGate::button_rect(screen, scale).contains(pos) {
                self.enter(now);
            }
            return;
        }

        let (mute, pause) = control_rects(screen, scale);
        if mute.contains(pos) {
            self.toggle_mute(now);
            return;
        }
        if pause.contains(pos) {
            self.toggle_pause(now);
            return;
        }

        let keys = pagination::key_rects(screen, SLIDE_COUNT, self.nav.current(), scale);
        if let Some(index) = pagination::hit_test(&keys, pos) {
            self.nav.go_to(index, None, false, now);
            return;
        }

        if let Some(slide) = self.current.as_mut() {
            if matches!(slide.scene(), SceneState::WorldTour { .. }) {
                if let Some(region) = TourLayout::new(screen, scale).hit(pos) {
                    slide.select_region(region, now);
                }
            }
        }
    }

    /// Live state shown under the shortcut list.
    fn status_lines(&self, now: Instant) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(slide) = &self.current {
            lines.push(format!(
                "Slide {}/{}: {}",
                slide.index() + 1,
                SLIDE_COUNT,
                slide.definition().title
            ));
            let reveal = slide.reveal();
            if reveal.stage_count() > 0 {
                lines.push(format!(
                    "Reveal {}/{}",
                    reveal.shown(now),
                    reveal.stage_count()
                ));
            }
        }
        let timer = match self.nav.auto_advance_deadline() {
            Some(at) => format!(
                "Auto-advance in {:.1}s",
                at.saturating_duration_since(now).as_secs_f32()
            ),
            None if self.nav.is_paused() => "Auto-advance paused".to_string(),
            None => "Auto-advance off".to_string(),
        };
        lines.push(timer);
        if self.nav.is_transitioning() {
            lines.push("Transitioning".to_string());
        }
        let ambient = match self.media.shared_holder() {
            Some(holder) if self.media.is_shared_held() => {
                format!("Ambient: {holder} (held muted)")
            }
            Some(holder) => format!("Ambient: {holder}"),
            None => "Ambient: free".to_string(),
        };
        lines.push(ambient);
        if !self.media.is_unlocked() {
            lines.push("Playback locked".to_string());
        }
        lines
    }

    fn fade(since: Instant, now: Instant) -> f32 {
        (now.saturating_duration_since(since).as_secs_f32() / CROSSFADE.as_secs_f32()).min(1.0)
    }

    fn draw(&self, ui: &egui::Ui, rect: egui::Rect, scale: f32, hover: Option<Pos2>, now: Instant) {
        if self.gate.is_open() {
            self.gate
                .draw(ui, &self.theme, rect, hover, scale, now, self.launched);
            return;
        }

        if let Some(outgoing) = &self.outgoing {
            let opacity = 1.0 - Self::fade(outgoing.since, now);
            render::render_slide(
                ui,
                &outgoing.runtime,
                &self.theme,
                rect,
                opacity,
                &self.images,
                scale,
                now,
            );
        }
        if let Some(slide) = &self.current {
            let opacity = if self.outgoing.is_some() {
                Self::fade(self.current_since, now)
            } else {
                1.0
            };
            render::render_slide(ui, slide, &self.theme, rect, opacity, &self.images, scale, now);
        }

        self.sand.draw(ui.painter(), rect, scale, now);

        let keys = pagination::key_rects(rect, SLIDE_COUNT, self.nav.current(), scale);
        pagination::draw(ui.painter(), &self.theme, &keys, self.nav.current(), hover, scale);
        draw_controls(
            ui,
            &self.theme,
            rect,
            scale,
            self.media.is_muted(),
            self.nav.is_paused(),
            hover,
        );

        if let Some(toast) = &self.toast {
            draw_toast(ui, &self.theme, toast, rect, scale, now);
        }
        if self.show_hud {
            draw_hud(ui, &self.theme, rect, scale, &self.status_lines(now));
        }
    }
}

impl eframe::App for CaravanaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        // Viewport commands are sent after input has been read; sending them
        // from inside an input closure deadlocks.
        let mut viewport_cmds: Vec<egui::ViewportCommand> = Vec::new();
        let commands = input::collect(ctx, &mut self.swipe, self.gate.is_open());
        for command in commands {
            match command {
                Command::Quit => viewport_cmds.push(egui::ViewportCommand::Close),
                Command::Fullscreen => {
                    let fullscreen = ctx.input(|i| i.viewport().fullscreen.unwrap_or(false));
                    viewport_cmds.push(egui::ViewportCommand::Fullscreen(!fullscreen));
                }
                other => self.handle_command(other, now),
            }
        }
        for cmd in viewport_cmds {
            ctx.send_viewport_cmd(cmd);
        }

        let (clicked, hover) = ctx.input(|i| {
            let clicked = if i.pointer.primary_clicked() {
                i.pointer.interact_pos()
            } else {
                None
            };
            (clicked, i.pointer.hover_pos())
        });

        let bg = self.theme.background;
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let scale = render::compute_scale(rect);
                if let Some(pos) = clicked {
                    self.click(pos, rect, scale, now);
                }
                self.step(now);
                ui.painter().rect_filled(rect, 0.0, bg);
                self.draw(ui, rect, scale, hover, now);
            });

        ctx.request_repaint_after(FRAME_INTERVAL);
    }
}

/// Mute button bottom-left, pause button bottom-right.
fn control_rects(screen: egui::Rect, scale: f32) -> (egui::Rect, egui::Rect) {
    let size = egui::vec2(CONTROL_SIZE, CONTROL_SIZE) * scale;
    let margin = CONTROL_MARGIN * scale;
    let mute = egui::Rect::from_min_size(
        Pos2::new(screen.left() + margin, screen.bottom() - margin - size.y),
        size,
    );
    let pause = egui::Rect::from_min_size(
        Pos2::new(
            screen.right() - margin - size.x,
            screen.bottom() - margin - size.y,
        ),
        size,
    );
    (mute, pause)
}

fn draw_controls(
    ui: &egui::Ui,
    theme: &Theme,
    screen: egui::Rect,
    scale: f32,
    muted: bool,
    paused: bool,
    hover: Option<Pos2>,
) {
    let painter = ui.painter();
    let (mute, pause) = control_rects(screen, scale);
    for button in [mute, pause] {
        let hovered = hover.is_some_and(|p| button.contains(p));
        painter.circle_filled(
            button.center(),
            button.width() / 2.0,
            Theme::with_opacity(theme.background, if hovered { 0.8 } else { 0.5 }),
        );
        painter.circle_stroke(
            button.center(),
            button.width() / 2.0,
            Stroke::new(1.0, Theme::with_opacity(theme.primary, 0.5)),
        );
    }

    let glyph = Theme::with_opacity(theme.foreground, 0.9);
    let c = mute.center();
    let u = 4.0 * scale;
    let speaker = vec![
        c + egui::vec2(-4.0 * u, -1.5 * u),
        c + egui::vec2(-2.0 * u, -1.5 * u),
        c + egui::vec2(1.0 * u, -4.0 * u),
        c + egui::vec2(1.0 * u, 4.0 * u),
        c + egui::vec2(-2.0 * u, 1.5 * u),
        c + egui::vec2(-4.0 * u, 1.5 * u),
    ];
    painter.add(egui::Shape::convex_polygon(speaker, glyph, Stroke::NONE));
    if muted {
        let stroke = Stroke::new(2.0 * scale, glyph);
        painter.line_segment(
            [c + egui::vec2(2.5 * u, -2.0 * u), c + egui::vec2(5.0 * u, 2.0 * u)],
            stroke,
        );
        painter.line_segment(
            [c + egui::vec2(2.5 * u, 2.0 * u), c + egui::vec2(5.0 * u, -2.0 * u)],
            stroke,
        );
    } else {
        // Sound wave.
        painter.circle_stroke(
            c + egui::vec2(1.0 * u, 0.0),
            3.0 * u,
            Stroke::new(1.5 * scale, glyph),
        );
    }

    let c = pause.center();
    if paused {
        let play = vec![
            c + egui::vec2(-2.5 * u, -3.5 * u),
            c + egui::vec2(3.5 * u, 0.0),
            c + egui::vec2(-2.5 * u, 3.5 * u),
        ];
        painter.add(egui::Shape::convex_polygon(play, glyph, Stroke::NONE));
    } else {
        for dx in [-1.75 * u, 1.75 * u] {
            let bar = egui::Rect::from_center_size(
                c + egui::vec2(dx, 0.0),
                egui::vec2(1.5 * u, 7.0 * u),
            );
            painter.rect_filled(bar, 1.0, glyph);
        }
    }
}

fn draw_toast(
    ui: &egui::Ui,
    theme: &Theme,
    toast: &Toast,
    rect: egui::Rect,
    scale: f32,
    now: Instant,
) {
    let opacity = toast.opacity(now);
    if opacity <= 0.0 {
        return;
    }
    let toast_color = Theme::with_opacity(theme.foreground, opacity * 0.9);
    let toast_bg = Theme::with_opacity(theme.surface, opacity * 0.9);
    let galley = ui.painter().layout_no_wrap(
        toast.message.clone(),
        FontId::proportional(20.0 * scale),
        toast_color,
    );
    let padding = 16.0 * scale;
    let toast_rect = egui::Rect::from_min_size(
        egui::pos2(
            rect.center().x - galley.rect.width() / 2.0 - padding,
            rect.top() + 40.0 * scale,
        ),
        egui::vec2(
            galley.rect.width() + padding * 2.0,
            galley.rect.height() + padding * 2.0,
        ),
    );
    ui.painter().rect_filled(toast_rect, 8.0 * scale, toast_bg);
    let text_pos = egui::pos2(toast_rect.left() + padding, toast_rect.top() + padding);
    ui.painter().galley(text_pos, galley, toast_color);
}

fn draw_hud(ui: &egui::Ui, theme: &Theme, rect: egui::Rect, scale: f32, status: &[String]) {
    let shortcuts = [
        ("\u{2193} / PgDn / Space", "Next slide"),
        ("\u{2191} / PgUp", "Previous slide"),
        ("Wheel / Swipe", "Next or previous slide"),
        ("Home / End", "First / last slide"),
        ("Click a key", "Jump to slide"),
        ("M", "Toggle sound"),
        ("P", "Pause / resume"),
        ("F", "Toggle fullscreen"),
        ("H", "Toggle this HUD"),
        ("Q", "Quit"),
    ];

    let bg = Theme::with_opacity(theme.surface, 0.9);
    let text_color = Theme::with_opacity(theme.foreground, 0.9);
    let key_color = Theme::with_opacity(theme.primary, 0.9);

    let padding = 24.0 * scale;
    let line_height = 32.0 * scale;
    let rows = shortcuts.len() + status.len();
    let hud_height = rows as f32 * line_height + padding * 2.0 + 56.0 * scale;
    let hud_width = 420.0 * scale;
    let hud_rect = egui::Rect::from_center_size(rect.center(), egui::vec2(hud_width, hud_height));
    ui.painter().rect_filled(hud_rect, 12.0 * scale, bg);

    let title_galley = ui.painter().layout_no_wrap(
        "Keyboard Shortcuts".to_string(),
        FontId::proportional(20.0 * scale),
        theme.sand_light,
    );
    let title_pos = egui::pos2(hud_rect.left() + padding, hud_rect.top() + padding);
    ui.painter().galley(title_pos, title_galley, text_color);

    let mut y = hud_rect.top() + padding + 40.0 * scale;
    for (key, desc) in &shortcuts {
        let key_galley =
            ui.painter()
                .layout_no_wrap(key.to_string(), FontId::monospace(15.0 * scale), key_color);
        ui.painter()
            .galley(egui::pos2(hud_rect.left() + padding, y), key_galley, key_color);

        let desc_galley = ui.painter().layout_no_wrap(
            desc.to_string(),
            FontId::proportional(15.0 * scale),
            text_color,
        );
        ui.painter().galley(
            egui::pos2(hud_rect.left() + padding + 200.0 * scale, y),
            desc_galley,
            text_color,
        );
        y += line_height;
    }

    y += 16.0 * scale;
    let status_color = Theme::with_opacity(theme.muted, 0.9);
    for line in status {
        let galley = ui.painter().layout_no_wrap(
            line.clone(),
            FontId::proportional(14.0 * scale),
            status_color,
        );
        ui.painter()
            .galley(egui::pos2(hud_rect.left() + padding, y), galley, status_color);
        y += line_height;
    }
}

/// Window icon: a low sun over a dune, drawn at startup.
fn app_icon() -> egui::IconData {
    const SIZE: u32 = 64;
    let theme = Theme::desert();
    let sky = theme.background;
    let sun = theme.primary;
    let sand = theme.sand_dark;
    let image = image::RgbaImage::from_fn(SIZE, SIZE, |x, y| {
        let (fx, fy) = (x as f32, y as f32);
        let crest = 44.0 + 6.0 * (fx / 10.0).sin();
        let color = if fy > crest {
            sand
        } else if (fx - 32.0).hypot(fy - 28.0) < 13.0 {
            sun
        } else {
            sky
        };
        image::Rgba([color.r(), color.g(), color.b(), 255])
    });
    egui::IconData {
        rgba: image.into_raw(),
        width: SIZE,
        height: SIZE,
    }
}

pub fn run(options: AppOptions) -> anyhow::Result<()> {
    let title = deck::content::TITLE;
    if !options.assets.is_dir() {
        tracing::warn!(
            assets = %options.assets.display(),
            "asset directory not found, images will use the dune backdrop"
        );
    }

    let viewport = if options.windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title(title)
    } else {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(title)
    };
    let viewport = viewport.with_icon(std::sync::Arc::new(app_icon()));

    let native = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    tracing::info!(slide = options.start_slide, windowed = options.windowed, "launching");
    eframe::run_native(
        title,
        native,
        Box::new(move |_cc| Ok(Box::new(CaravanaApp::new(&options, Instant::now())))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{LocalMedia, MediaId};
    use crate::nav::{COMMIT_DELAY, DEBOUNCE};

    fn options() -> AppOptions {
        AppOptions {
            assets: PathBuf::from("does-not-exist"),
            ..AppOptions::default()
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn started(options: &AppOptions, t0: Instant) -> CaravanaApp {
        let mut app = CaravanaApp::new(options, t0);
        app.handle_command(Command::Confirm, t0);
        app
    }

    #[test]
    fn test_nothing_runs_before_landing() {
        let t0 = Instant::now();
        let mut app = CaravanaApp::new(&options(), t0);
        app.handle_command(Command::Navigate(Intent::Next), t0);
        app.step(t0 + ms(20_000));
        assert!(!app.nav.is_started());
        assert!(app.current.is_none());
        assert!(app.media.track(MediaId::Shared).is_paused());
    }

    #[test]
    fn test_landing_starts_ambient_track() {
        let t0 = Instant::now();
        let app = started(&options(), t0);
        assert!(!app.gate.is_open());
        assert!(app.media.is_unlocked());
        let shared = app.media.track(MediaId::Shared);
        assert!(!shared.is_paused());
        assert_eq!(shared.position(t0), AMBIENT_START);
        assert_eq!(app.current.as_ref().map(|s| s.index()), Some(0));
    }

    #[test]
    fn test_start_slide_is_clamped() {
        let t0 = Instant::now();
        let options = AppOptions {
            start_slide: 99,
            ..options()
        };
        let app = started(&options, t0);
        assert_eq!(app.nav.current(), deck::last_index());
    }

    #[test]
    fn test_commit_swaps_runtimes() {
        let t0 = Instant::now();
        let mut app = started(&options(), t0);
        app.handle_command(Command::Navigate(Intent::Next), t0);
        assert!(app.sand.is_active());
        app.step(t0 + COMMIT_DELAY);
        assert_eq!(app.current.as_ref().map(|s| s.index()), Some(1));
        assert_eq!(app.outgoing.as_ref().map(|o| o.runtime.index()), Some(0));
        assert_eq!(app.media.shared_holder(), Some(deck::DECK[1].id));

        app.step(t0 + COMMIT_DELAY + CROSSFADE);
        assert!(app.outgoing.is_none());
    }

    #[test]
    fn test_film_end_moves_on() {
        let t0 = Instant::now();
        let options = AppOptions {
            start_slide: 5,
            ..options()
        };
        let mut app = started(&options, t0);
        assert!(app.media.is_shared_held());
        let length = app.media.track(MediaId::Local(LocalMedia::Film)).length;

        let end = t0 + length + ms(10);
        app.step(end);
        assert!(!app.media.is_shared_held());
        app.step(end + COMMIT_DELAY);
        assert_eq!(app.nav.current(), 6);
    }

    #[test]
    fn test_completion_waits_for_resume() {
        let t0 = Instant::now();
        let options = AppOptions {
            start_slide: 8,
            auto_advance: false,
            ..options()
        };
        let mut app = started(&options, t0);
        app.handle_command(Command::TogglePause, t0);
        assert!(app.nav.is_paused());

        let done = t0 + Duration::from_secs(60);
        app.step(done);
        assert_eq!(app.pending_completion, Some(8));
        app.step(done + COMMIT_DELAY);
        assert_eq!(app.nav.current(), 8);

        let resume = done + ms(1_000);
        app.handle_command(Command::TogglePause, resume);
        assert!(app.pending_completion.is_none());
        app.step(resume + COMMIT_DELAY);
        assert_eq!(app.nav.current(), 9);
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let t0 = Instant::now();
        let options = AppOptions {
            start_slide: 3,
            ..options()
        };
        let mut app = started(&options, t0);
        app.on_completed(8, t0);
        app.step(t0 + COMMIT_DELAY);
        assert_eq!(app.nav.current(), 3);
    }

    #[test]
    fn test_jump_before_auto_advance_deadline_wins() {
        let t0 = Instant::now();
        let mut app = started(&options(), t0);
        let screen = egui::Rect::from_min_size(Pos2::ZERO, render::REFERENCE_SIZE);
        let keys = pagination::key_rects(screen, SLIDE_COUNT, 0, 1.0);
        let at = t0 + ms(12_900);
        app.click(keys[8].center(), screen, 1.0, at);
        app.step(t0 + ms(13_000));
        app.step(t0 + ms(14_500));
        assert_eq!(app.nav.current(), 8);
        assert_eq!(app.current.as_ref().map(|s| s.index()), Some(8));
    }

    #[test]
    fn test_completion_during_pending_commit_is_ignored() {
        let t0 = Instant::now();
        let mut app = started(&options(), t0);
        let at = t0 + DEBOUNCE;
        app.handle_command(Command::Last, at);
        app.on_completed(0, at + ms(100));
        assert!(app.pending_completion.is_none());
        app.step(at + COMMIT_DELAY);
        assert_eq!(app.nav.current(), deck::last_index());
    }

    #[test]
    fn test_pagination_click_navigates() {
        let t0 = Instant::now();
        let mut app = started(&options(), t0);
        let screen = egui::Rect::from_min_size(Pos2::ZERO, render::REFERENCE_SIZE);
        let keys = pagination::key_rects(screen, SLIDE_COUNT, 0, 1.0);
        let at = t0 + DEBOUNCE;
        app.click(keys[4].center(), screen, 1.0, at);
        app.step(at + COMMIT_DELAY);
        assert_eq!(app.nav.current(), 4);
    }

    #[test]
    fn test_control_buttons() {
        let t0 = Instant::now();
        let mut app = started(&options(), t0);
        let screen = egui::Rect::from_min_size(Pos2::ZERO, render::REFERENCE_SIZE);
        let (mute, pause) = control_rects(screen, 1.0);
        assert!(app.media.is_muted());
        app.click(mute.center(), screen, 1.0, t0);
        assert!(!app.media.is_muted());
        app.click(pause.center(), screen, 1.0, t0);
        assert!(app.nav.is_paused());
        assert!(app.toast.is_some());
    }

    #[test]
    fn test_status_lines() {
        let t0 = Instant::now();
        let app = CaravanaApp::new(&options(), t0);
        assert!(app.status_lines(t0).contains(&"Playback locked".to_string()));

        let app = started(&options(), t0);
        let lines = app.status_lines(t0 + ms(1_500));
        assert_eq!(lines[0], format!("Slide 1/{SLIDE_COUNT}: {}", deck::DECK[0].title));
        assert_eq!(lines[1], "Reveal 1/3");
        assert!(lines[2].starts_with("Auto-advance in"));
        assert!(lines.contains(&"Ambient: opening".to_string()));
    }

    #[test]
    fn test_toast_fades() {
        let t0 = Instant::now();
        let toast = Toast::new("Paused", t0);
        assert_eq!(toast.opacity(t0), 1.0);
        assert!(toast.opacity(t0 + ms(1_250)) < 1.0);
        assert!(toast.is_expired(t0 + ms(1_500)));
    }

    #[test]
    fn test_icon_dimensions() {
        let icon = app_icon();
        assert_eq!(icon.rgba.len(), (icon.width * icon.height * 4) as usize);
    }
}
