//! # Input Protocol
//!
//! Typed, already-normalized input events plus the trackers that derive
//! them from raw device notifications. The host owns the device listeners;
//! it feeds raw press/move/release/wheel notifications into a tracker and
//! hands the resulting events to the consumer in the same event-loop turn.
//! Delivery is synchronous and FIFO per device.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// State of keyboard modifiers (Shift, Ctrl, Alt, Meta).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// A pointer event with normalized payload. Positions are screen pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Move {
        pos: Vec2,
        modifiers: Modifiers,
        /// Whether a drag is in progress while the pointer moves.
        dragging: bool,
    },
    Enter {
        pos: Vec2,
        modifiers: Modifiers,
    },
    Leave {
        pos: Vec2,
        modifiers: Modifiers,
    },
    Click {
        pos: Vec2,
        button: u8,
        /// Same button pressed twice within the double-click window and
        /// movement threshold.
        double: bool,
        modifiers: Modifiers,
    },
    Release {
        pos: Vec2,
        button: u8,
        /// Where the matching press happened.
        click_pos: Vec2,
        modifiers: Modifiers,
    },
    DragStart {
        pos: Vec2,
        button: u8,
        click_pos: Vec2,
        /// Accumulated delta since the press.
        drag: Vec2,
        modifiers: Modifiers,
    },
    DragMove {
        pos: Vec2,
        button: u8,
        click_pos: Vec2,
        drag: Vec2,
        modifiers: Modifiers,
    },
    DragEnd {
        pos: Vec2,
        button: u8,
        click_pos: Vec2,
        drag: Vec2,
        modifiers: Modifiers,
    },
    Wheel {
        pos: Vec2,
        /// Scroll delta on all three wheel axes, one unit per notch on
        /// most devices. `z` is non-zero only on devices that report it.
        delta: Vec3,
        modifiers: Modifiers,
    },
}

/// Tuning knobs for [`PointerTracker`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PointerTrackerOptions {
    /// Number of buttons to track; presses on higher buttons are ignored.
    pub n_buttons: u8,
    /// Movement (per axis, pixels) before a press becomes a drag.
    pub move_threshold: f32,
    /// Max time between presses of the same button to count as a double
    /// click.
    pub double_click_max_ms: u64,
    /// Buttons that may start a drag.
    pub track_dragging: Vec<u8>,
}

impl Default for PointerTrackerOptions {
    fn default() -> Self {
        Self {
            n_buttons: 2,
            move_threshold: 3.0,
            double_click_max_ms: 500,
            track_dragging: vec![0],
        }
    }
}

/// Turns raw pointer notifications into [`PointerEvent`]s.
///
/// A press inside the movement threshold stays a click; once movement from
/// the press point reaches the threshold on either axis, the gesture
/// becomes a drag and every further motion reports the accumulated delta
/// since the press. Time is supplied by the caller so the tracker stays
/// deterministic.
#[derive(Clone, Debug)]
pub struct PointerTracker {
    options: PointerTrackerOptions,
    pos: Vec2,
    click_pos: Vec2,
    buttons: Vec<bool>,
    dragging_button: Option<u8>,
    drag: Vec2,
    last_click_ms: u64,
    last_click_button: Option<u8>,
    outside: bool,
}

impl PointerTracker {
    pub fn new(options: PointerTrackerOptions) -> Self {
        let buttons = vec![false; options.n_buttons as usize];
        Self {
            options,
            pos: Vec2::new(-1.0, -1.0),
            click_pos: Vec2::new(-1.0, -1.0),
            buttons,
            dragging_button: None,
            drag: Vec2::ZERO,
            last_click_ms: 0,
            last_click_button: None,
            outside: true,
        }
    }

    /// Last reported pointer position.
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// The button currently being dragged, if any.
    pub fn dragging_button(&self) -> Option<u8> {
        self.dragging_button
    }

    /// Whether the pointer has left the surface.
    pub fn is_outside(&self) -> bool {
        self.outside
    }

    /// Raw button press. `now_ms` is the host clock, used for double-click
    /// detection only.
    pub fn press(
        &mut self,
        pos: Vec2,
        button: u8,
        modifiers: Modifiers,
        now_ms: u64,
        out: &mut Vec<PointerEvent>,
    ) {
        if button >= self.options.n_buttons {
            return;
        }

        let double = now_ms.saturating_sub(self.last_click_ms) < self.options.double_click_max_ms
            && Some(button) == self.last_click_button
            && (pos.x - self.click_pos.x).abs() < self.options.move_threshold
            && (pos.y - self.click_pos.y).abs() < self.options.move_threshold;

        self.pos = pos;
        self.click_pos = pos;
        self.outside = false;
        self.buttons[button as usize] = true;
        self.last_click_button = Some(button);
        self.last_click_ms = now_ms;

        out.push(PointerEvent::Click {
            pos,
            button,
            double,
            modifiers,
        });
    }

    /// Raw button release. Ends the drag when the released button was the
    /// one being dragged.
    pub fn release(
        &mut self,
        pos: Vec2,
        button: u8,
        modifiers: Modifiers,
        out: &mut Vec<PointerEvent>,
    ) {
        if button >= self.options.n_buttons {
            return;
        }

        self.pos = pos;
        self.outside = false;
        self.buttons[button as usize] = false;

        out.push(PointerEvent::Release {
            pos,
            button,
            click_pos: self.click_pos,
            modifiers,
        });

        if self.dragging_button != Some(button) {
            return;
        }
        self.dragging_button = None;

        out.push(PointerEvent::DragEnd {
            pos,
            button,
            click_pos: self.click_pos,
            drag: self.drag,
            modifiers,
        });
    }

    /// Raw pointer motion. Emits `Move`, plus `DragStart`/`DragMove` when a
    /// tracked button is held.
    pub fn motion(&mut self, pos: Vec2, modifiers: Modifiers, out: &mut Vec<PointerEvent>) {
        self.pos = pos;

        out.push(PointerEvent::Move {
            pos,
            modifiers,
            dragging: self.dragging_button.is_some(),
        });

        let Some(held) = self.buttons.iter().position(|&down| down) else {
            return;
        };
        let held = held as u8;
        if !self.options.track_dragging.contains(&held) {
            return;
        }

        let was_dragging = self.dragging_button.is_some();
        let drag = pos - self.click_pos;

        if !was_dragging
            && (drag.x.abs() >= self.options.move_threshold
                || drag.y.abs() >= self.options.move_threshold)
        {
            self.dragging_button = Some(held);
            out.push(PointerEvent::DragStart {
                pos,
                button: held,
                click_pos: self.click_pos,
                drag,
                modifiers,
            });
        }

        if !was_dragging {
            return;
        }

        self.drag = drag;
        out.push(PointerEvent::DragMove {
            pos,
            button: held,
            click_pos: self.click_pos,
            drag,
            modifiers,
        });
    }

    /// Pointer entered the surface.
    pub fn enter(&mut self, pos: Vec2, modifiers: Modifiers, out: &mut Vec<PointerEvent>) {
        self.pos = pos;
        self.outside = false;
        out.push(PointerEvent::Enter { pos, modifiers });
    }

    /// Pointer left the surface.
    pub fn leave(&mut self, pos: Vec2, modifiers: Modifiers, out: &mut Vec<PointerEvent>) {
        self.pos = pos;
        self.outside = true;
        out.push(PointerEvent::Leave { pos, modifiers });
    }

    /// Raw wheel notification, passed through with the tracked position.
    pub fn wheel(&mut self, pos: Vec2, delta: Vec3, modifiers: Modifiers, out: &mut Vec<PointerEvent>) {
        self.pos = pos;
        out.push(PointerEvent::Wheel {
            pos,
            delta,
            modifiers,
        });
    }
}

/// Keys the demo wiring cares about. Hosts with richer keyboards map the
/// rest to `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    R,
    W,
    A,
    S,
    D,
    Q,
    E,
    Z,
    X,
    Num1,
    Num2,
    Other,
}

/// What happened to a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEventKind {
    /// Physical press, reported once per press regardless of OS repeat.
    Press,
    Release,
    /// Fixed-interval repeat signal for a held key, driven by the host's
    /// event loop via [`KeyTracker::tick`].
    Held {
        /// Time since the previous `Press`/`Held` for this key.
        elapsed_ms: u64,
    },
}

/// A keyboard event with normalized payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: Key,
    pub kind: KeyEventKind,
    pub modifiers: Modifiers,
}

/// Tracks held keys, de-duplicates OS auto-repeat, and emits `Held` events
/// when the host ticks it.
#[derive(Clone, Debug, Default)]
pub struct KeyTracker {
    pressed: Vec<(Key, u64)>,
    modifiers: Modifiers,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `key` is currently held.
    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.iter().any(|&(pressed, _)| pressed == key)
    }

    /// Raw key-down. Repeated downs for an already-held key are swallowed.
    pub fn press(&mut self, key: Key, modifiers: Modifiers, now_ms: u64, out: &mut Vec<KeyEvent>) {
        self.modifiers = modifiers;
        if self.is_pressed(key) {
            return;
        }
        self.pressed.push((key, now_ms));
        out.push(KeyEvent {
            key,
            kind: KeyEventKind::Press,
            modifiers,
        });
    }

    /// Raw key-up.
    pub fn release(&mut self, key: Key, modifiers: Modifiers, out: &mut Vec<KeyEvent>) {
        self.modifiers = modifiers;
        self.pressed.retain(|&(pressed, _)| pressed != key);
        out.push(KeyEvent {
            key,
            kind: KeyEventKind::Release,
            modifiers,
        });
    }

    /// Emits a `Held` event for every pressed key. Call at a fixed interval
    /// while any key is down.
    pub fn tick(&mut self, now_ms: u64, out: &mut Vec<KeyEvent>) {
        for (key, last_ms) in &mut self.pressed {
            out.push(KeyEvent {
                key: *key,
                kind: KeyEventKind::Held {
                    elapsed_ms: now_ms.saturating_sub(*last_ms),
                },
                modifiers: self.modifiers,
            });
            *last_ms = now_ms;
        }
    }
}
