// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};
use understory_event_state::momentum::{MomentumConfig, MomentumError, MomentumTracker};
use understory_event_state::pinch::{PinchEvent, PinchState};
use understory_event_state::wheel::{WheelConfig, WheelSmoother};
use understory_view2d::PanZoomDelta;

use crate::input::{InputEvent, PointerButtons, PointerInput, TouchInput, WheelDelta, WheelInput};

/// Configuration for [`GestureNormalizer`].
#[derive(Clone, Debug, PartialEq)]
pub struct GestureConfig {
    /// Drag tracking and coasting.
    pub momentum: MomentumConfig,
    /// Wheel smoothing and unit conversion.
    pub wheel: WheelConfig,
    /// Zoom impulse per pixel of finger distance change.
    pub pinch_multiplier: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            momentum: MomentumConfig::default(),
            wheel: WheelConfig::default(),
            pinch_multiplier: 2.0,
        }
    }
}

/// Turns pointer, wheel and touch input into one [`PanZoomDelta`] per frame.
///
/// Events are fed through [`handle`](Self::handle) as they arrive; the
/// resulting motion is accumulated and handed out, coalesced, by
/// [`on_frame`](Self::on_frame). Coasting and wheel smoothing advance only
/// inside `on_frame`, so a host that stops calling it (or calls
/// [`cancel`](Self::cancel)) never sees a stale delta.
#[derive(Clone, Debug)]
pub struct GestureNormalizer {
    config: GestureConfig,
    momentum: MomentumTracker,
    wheel: WheelSmoother,
    pinch: PinchState,
    viewport_size: Size,
    pending: Option<PanZoomDelta>,
    drag_anchor: Point,
    wheel_anchor: Point,
    secondary: bool,
    drag_touch: Option<u64>,
}

impl GestureNormalizer {
    /// Creates a normalizer, validating the momentum configuration.
    pub fn new(config: GestureConfig) -> Result<Self, MomentumError> {
        let momentum = MomentumTracker::new(config.momentum.clone())?;
        Ok(Self {
            wheel: WheelSmoother::new(config.wheel),
            config,
            momentum,
            pinch: PinchState::default(),
            viewport_size: Size::ZERO,
            pending: None,
            drag_anchor: Point::ZERO,
            wheel_anchor: Point::ZERO,
            secondary: false,
            drag_touch: None,
        })
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Sets the viewport size used to resolve page-based wheel deltas.
    pub fn set_viewport_size(&mut self, size: Size) {
        self.viewport_size = size;
    }

    /// Returns `true` while coasting, wheel smoothing or a pending delta
    /// needs another frame.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.momentum.is_decelerating() || self.wheel.is_moving() || self.pending.is_some()
    }

    /// Returns `true` while two fingers are pinching.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch.is_pinching()
    }

    /// Feeds one input event. Returns `true` if a frame should be scheduled.
    pub fn handle(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::PointerDown(input) => self.pointer_down(input),
            InputEvent::PointerMove(input) => self.pointer_move(input),
            InputEvent::PointerUp(input) => {
                self.pointer_move(input);
                self.release(input.pointer_id, input.time_ms);
            }
            InputEvent::PointerCancel(input) => self.pointer_cancel(input),
            InputEvent::Wheel(input) => self.wheel(input),
            InputEvent::TouchStart(input) => self.touch_start(input),
            InputEvent::TouchMove(input) => self.touch_move(input),
            InputEvent::TouchEnd(input) => self.touch_end(input, false),
            InputEvent::TouchCancel(input) => self.touch_end(input, true),
        }
        self.is_animating()
    }

    /// Advances coasting and wheel smoothing by one frame and returns the
    /// coalesced delta, if anything happened since the last frame.
    pub fn on_frame(&mut self) -> Option<PanZoomDelta> {
        if let Some(event) = self.momentum.tick() {
            let delta = event.delta();
            self.push_pan(delta);
        }
        if let Some(dz) = self.wheel.tick() {
            self.push(PanZoomDelta::zoom(dz, self.wheel_anchor));
        }
        let delta = self.pending.take();
        if let Some(delta) = &delta {
            tracing::trace!(?delta, "coalesced frame delta");
        }
        delta
    }

    /// Drops all in-flight motion: coasting, wheel smoothing, pinch state
    /// and any delta not yet handed out.
    pub fn cancel(&mut self) {
        self.momentum.cancel();
        self.momentum.resume();
        self.wheel.cancel();
        self.pinch.reset();
        self.pending = None;
        self.drag_touch = None;
        self.secondary = false;
    }

    fn pointer_down(&mut self, input: &PointerInput) {
        self.drag_anchor = input.position;
        self.secondary = input.buttons.contains(PointerButtons::SECONDARY);
        self.momentum
            .on_down(input.pointer_id, input.position, input.time_ms);
    }

    fn pointer_move(&mut self, input: &PointerInput) {
        self.drag_anchor = input.position;
        if let Some(event) = self
            .momentum
            .on_move(input.pointer_id, input.position, input.time_ms)
        {
            self.push_pan(event.delta());
        }
    }

    fn pointer_cancel(&mut self, input: &PointerInput) {
        if !self.momentum.is_tracking(input.pointer_id) {
            tracing::trace!(pointer_id = input.pointer_id, "cancel for untracked pointer ignored");
            return;
        }
        self.momentum.cancel();
        self.secondary = false;
    }

    fn release(&mut self, id: u64, time_ms: i64) {
        // `None` means coasting started; `on_frame` takes it from here.
        if let Some(event) = self.momentum.on_up(id, time_ms) {
            self.push_pan(event.delta());
        }
    }

    fn wheel(&mut self, input: &WheelInput) {
        let wheel = *self.wheel.config();
        let pixels = match input.delta {
            WheelDelta::Pixels(v) => v.y,
            WheelDelta::Lines(v) => v.y * wheel.line_height,
            WheelDelta::Pages(v) => v.y * self.viewport_size.height,
        };
        let notches = pixels / wheel.pixels_per_notch;
        self.wheel_anchor = input.position;
        self.wheel.push(notches);
    }

    fn touch_start(&mut self, input: &TouchInput) {
        match self.pinch.touch_start(input.touch_id, input.position) {
            Some(PinchEvent::Start { midpoint, .. }) => {
                self.drag_anchor = midpoint;
                self.drag_touch = None;
                self.momentum.pause();
            }
            _ if self.pinch.active_count() == 1 => {
                self.drag_anchor = input.position;
                self.secondary = false;
                self.drag_touch = Some(input.touch_id);
                self.momentum
                    .on_down(input.touch_id, input.position, input.time_ms);
            }
            _ => {}
        }
    }

    fn touch_move(&mut self, input: &TouchInput) {
        let change = self.pinch.touch_move(input.touch_id, input.position);
        if let Some(PinchEvent::Change { current, previous }) = change {
            let anchor = self.pinch.midpoint().unwrap_or(input.position);
            let dz = -(current - previous) * self.config.pinch_multiplier;
            self.push(PanZoomDelta::zoom(dz, anchor));
            return;
        }
        if self.drag_touch == Some(input.touch_id) {
            self.drag_anchor = input.position;
            if let Some(event) = self
                .momentum
                .on_move(input.touch_id, input.position, input.time_ms)
            {
                self.push_pan(event.delta());
            }
        }
    }

    fn touch_end(&mut self, input: &TouchInput, cancelled: bool) {
        if self.pinch.touch_end(input.touch_id) == Some(PinchEvent::End) {
            self.momentum.resume();
            return;
        }
        if self.drag_touch != Some(input.touch_id) {
            return;
        }
        self.drag_touch = None;
        if cancelled {
            self.momentum.cancel();
            return;
        }
        self.drag_anchor = input.position;
        if let Some(event) = self
            .momentum
            .on_move(input.touch_id, input.position, input.time_ms)
        {
            self.push_pan(event.delta());
        }
        self.release(input.touch_id, input.time_ms);
    }

    fn push_pan(&mut self, delta: Vec2) {
        self.push(PanZoomDelta {
            dx: delta.x,
            dy: delta.y,
            anchor_x: self.drag_anchor.x,
            anchor_y: self.drag_anchor.y,
            is_secondary_button: self.secondary,
            ..PanZoomDelta::default()
        });
    }

    fn push(&mut self, delta: PanZoomDelta) {
        match &mut self.pending {
            Some(pending) => pending.merge(&delta),
            None => self.pending = Some(delta),
        }
    }
}
