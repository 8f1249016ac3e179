//! Maps wheel, touch and keyboard input to presentation commands.

use eframe::egui;

/// Wheel deltas at or below this are ignored.
pub const WHEEL_THRESHOLD: f32 = 30.0;
/// Vertical swipe distance needed to navigate.
pub const SWIPE_THRESHOLD: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Next,
    Previous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Navigate(Intent),
    First,
    Last,
    ToggleMute,
    TogglePause,
    ToggleHud,
    Fullscreen,
    Quit,
    /// Enter the presentation from the landing gate.
    Confirm,
}

const NAV_KEYS: [(egui::Key, Intent); 5] = [
    (egui::Key::ArrowDown, Intent::Next),
    (egui::Key::PageDown, Intent::Next),
    (egui::Key::Space, Intent::Next),
    (egui::Key::ArrowUp, Intent::Previous),
    (egui::Key::PageUp, Intent::Previous),
];

/// `delta_y` uses the browser convention: positive scrolls down.
pub fn wheel_intent(delta_y: f32) -> Option<Intent> {
    if delta_y.abs() <= WHEEL_THRESHOLD {
        None
    } else if delta_y > 0.0 {
        Some(Intent::Next)
    } else {
        Some(Intent::Previous)
    }
}

pub fn key_intent(key: egui::Key) -> Option<Intent> {
    NAV_KEYS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|&(_, intent)| intent)
}

/// Remembers where a touch started so its release can be judged.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    start_y: Option<f32>,
}

impl SwipeTracker {
    pub fn begin(&mut self, y: f32) {
        self.start_y = Some(y);
    }

    pub fn cancel(&mut self) {
        self.start_y = None;
    }

    /// Swiping up (finger moves towards the top) goes to the next slide.
    pub fn end(&mut self, y: f32) -> Option<Intent> {
        let start = self.start_y.take()?;
        let delta = start - y;
        if delta.abs() <= SWIPE_THRESHOLD {
            None
        } else if delta > 0.0 {
            Some(Intent::Next)
        } else {
            Some(Intent::Previous)
        }
    }
}

/// Drain this frame's input into commands. While the landing gate is up
/// only confirmation, fullscreen and quit are recognised.
pub fn collect(ctx: &egui::Context, swipe: &mut SwipeTracker, landing: bool) -> Vec<Command> {
    let mut commands = Vec::new();
    ctx.input_mut(|i| {
        if i.consume_key(egui::Modifiers::NONE, egui::Key::Q) {
            commands.push(Command::Quit);
        }
        if i.consume_key(egui::Modifiers::NONE, egui::Key::F) {
            commands.push(Command::Fullscreen);
        }

        if landing {
            if i.consume_key(egui::Modifiers::NONE, egui::Key::Enter)
                || i.consume_key(egui::Modifiers::NONE, egui::Key::Space)
            {
                commands.push(Command::Confirm);
            }
            return;
        }

        let pressed: Vec<egui::Key> = i
            .events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    ..
                } => Some(*key),
                _ => None,
            })
            .collect();
        for key in pressed {
            if let Some(intent) = key_intent(key) {
                if i.consume_key(egui::Modifiers::NONE, key) {
                    commands.push(Command::Navigate(intent));
                }
            }
        }
        if i.consume_key(egui::Modifiers::NONE, egui::Key::Home) {
            commands.push(Command::First);
        }
        if i.consume_key(egui::Modifiers::NONE, egui::Key::End) {
            commands.push(Command::Last);
        }
        if i.consume_key(egui::Modifiers::NONE, egui::Key::M) {
            commands.push(Command::ToggleMute);
        }
        if i.consume_key(egui::Modifiers::NONE, egui::Key::P) {
            commands.push(Command::TogglePause);
        }
        if i.consume_key(egui::Modifiers::NONE, egui::Key::H) {
            commands.push(Command::ToggleHud);
        }

        if let Some(intent) = wheel_intent(-i.raw_scroll_delta.y) {
            commands.push(Command::Navigate(intent));
        }

        for event in &i.events {
            if let egui::Event::Touch { phase, pos, .. } = event {
                match phase {
                    egui::TouchPhase::Start => swipe.begin(pos.y),
                    egui::TouchPhase::End => {
                        if let Some(intent) = swipe.end(pos.y) {
                            commands.push(Command::Navigate(intent));
                        }
                    }
                    egui::TouchPhase::Cancel => swipe.cancel(),
                    egui::TouchPhase::Move => {}
                }
            }
        }
    });
    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_threshold() {
        assert_eq!(wheel_intent(0.0), None);
        assert_eq!(wheel_intent(30.0), None);
        assert_eq!(wheel_intent(-30.0), None);
        assert_eq!(wheel_intent(30.5), Some(Intent::Next));
        assert_eq!(wheel_intent(-120.0), Some(Intent::Previous));
    }

    #[test]
    fn test_swipe_threshold_and_direction() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(500.0);
        assert_eq!(swipe.end(450.0), None);

        swipe.begin(500.0);
        assert_eq!(swipe.end(420.0), Some(Intent::Next));

        swipe.begin(300.0);
        assert_eq!(swipe.end(380.0), Some(Intent::Previous));
    }

    #[test]
    fn test_swipe_needs_a_start() {
        let mut swipe = SwipeTracker::default();
        assert_eq!(swipe.end(10.0), None);
        swipe.begin(400.0);
        swipe.cancel();
        assert_eq!(swipe.end(100.0), None);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(key_intent(egui::Key::ArrowDown), Some(Intent::Next));
        assert_eq!(key_intent(egui::Key::PageDown), Some(Intent::Next));
        assert_eq!(key_intent(egui::Key::Space), Some(Intent::Next));
        assert_eq!(key_intent(egui::Key::ArrowUp), Some(Intent::Previous));
        assert_eq!(key_intent(egui::Key::PageUp), Some(Intent::Previous));
        assert_eq!(key_intent(egui::Key::ArrowLeft), None);
        assert_eq!(key_intent(egui::Key::Enter), None);
    }
}
