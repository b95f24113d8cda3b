// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};
use smallvec::SmallVec;

use crate::modes::{PinCorner, ResizeAnchor, ZoomAnchor};
use crate::state::{
    PanZoomDelta, PinConfig, ViewConfig, ViewError, ViewEvent, ViewState, Viewport,
    validate_zoom_bounds,
};

/// Owner of the plane's view state.
///
/// `ViewController` applies pan/zoom deltas, resizes and configuration
/// changes synchronously: after every call the [`ViewState`] and the
/// world/screen transforms are consistent. Changes are reported as
/// [`ViewEvent`]s, queued until [`ViewController::drain_events`].
///
/// Screen space is y-down with the origin at the top-left of the viewport;
/// world space is y-up.
#[derive(Clone, Debug)]
pub struct ViewController {
    state: ViewState,
    committed: ViewState,
    viewport: Viewport,
    config: ViewConfig,
    world_to_screen: Affine,
    screen_to_world: Affine,
    revision: u64,
    events: SmallVec<[ViewEvent; 4]>,
}

impl ViewController {
    /// Creates a controller with the default configuration.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        let mut vc = Self {
            state: ViewState::default(),
            committed: ViewState::default(),
            viewport: clamp_viewport(viewport),
            config: ViewConfig::default(),
            world_to_screen: Affine::IDENTITY,
            screen_to_world: Affine::IDENTITY,
            revision: 0,
            events: SmallVec::new(),
        };
        vc.rebuild_transforms();
        vc
    }

    /// Creates a controller, rejecting invalid zoom bounds.
    pub fn with_config(viewport: Viewport, config: ViewConfig) -> Result<Self, ViewError> {
        validate_zoom_bounds(config.min_zoom, config.max_zoom)?;
        let mut vc = Self::new(viewport);
        vc.config = config;
        vc.state.zoom = vc.state.zoom.clamp(config.min_zoom, config.max_zoom);
        vc.apply_pin();
        vc.committed = vc.state;
        vc.rebuild_transforms();
        Ok(vc)
    }

    /// Current view state.
    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Number of committed state changes so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Current zoom in pixels per world unit.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.state.zoom
    }

    /// World-space center.
    #[must_use]
    pub fn center(&self) -> Point {
        self.state.center()
    }

    /// `(min, max)` zoom.
    #[must_use]
    pub fn zoom_limits(&self) -> (f64, f64) {
        (self.config.min_zoom, self.config.max_zoom)
    }

    /// Pin configuration.
    #[must_use]
    pub fn pin(&self) -> PinConfig {
        self.config.pin
    }

    /// Scale for layers that should keep their screen size under zoom.
    #[must_use]
    pub fn layer_scale(&self) -> f64 {
        1.0 / self.state.zoom
    }

    /// World to screen transform.
    #[must_use]
    pub fn world_to_screen(&self) -> Affine {
        self.world_to_screen
    }

    /// Screen to world transform.
    #[must_use]
    pub fn screen_to_world(&self) -> Affine {
        self.screen_to_world
    }

    /// Maps a world point to screen pixels.
    #[must_use]
    pub fn world_to_screen_point(&self, world: Point) -> Point {
        self.world_to_screen * world
    }

    /// Maps a screen pixel to world space.
    #[must_use]
    pub fn screen_to_world_point(&self, screen: Point) -> Point {
        self.screen_to_world * screen
    }

    /// World rectangle currently covered by the viewport.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        let size = self.viewport.size();
        let half_w = size.width * 0.5 / self.state.zoom;
        let half_h = size.height * 0.5 / self.state.zoom;
        Rect::new(
            self.state.center_x - half_w,
            self.state.center_y - half_h,
            self.state.center_x + half_w,
            self.state.center_y + half_h,
        )
    }

    /// Removes and returns the queued events, oldest first.
    pub fn drain_events(&mut self) -> impl Iterator<Item = ViewEvent> + '_ {
        self.events.drain(..)
    }

    /// Returns `true` if events are waiting to be drained.
    #[must_use]
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Applies a pan/zoom impulse.
    ///
    /// Panning is scaled by the current world units per pixel so it feels
    /// the same at every zoom. Zooming is exponential in `dz` and keeps the
    /// world point under the anchor fixed (or the center, per
    /// [`ZoomAnchor`]). A delta with non-finite components is dropped.
    pub fn apply_delta(&mut self, delta: &PanZoomDelta) {
        if !delta.is_finite() {
            tracing::debug!(?delta, "non-finite pan/zoom delta dropped");
            return;
        }
        let prev_scale = 1.0 / self.state.zoom;

        let pans = (self.config.pan_enabled || delta.is_secondary_button)
            && (delta.dx != 0.0 || delta.dy != 0.0);
        if pans {
            self.state.center_x -= prev_scale * delta.dx;
            self.state.center_y += prev_scale * delta.dy;
        }

        if self.config.zoom_enabled && delta.dz != 0.0 {
            let size = self.viewport.size();
            let factor = libm::exp(-delta.dz / size.height);
            let (tx, ty) = match self.config.zoom_anchor {
                ZoomAnchor::Pointer => (
                    delta.anchor_x / size.width - 0.5,
                    0.5 - delta.anchor_y / size.height,
                ),
                ZoomAnchor::Center => (0.0, 0.0),
            };
            self.zoom_to(self.state.zoom * factor, tx, ty);
        }

        self.apply_pin();
        // A pinned corner overrides the pan.
        if pans && self.config.pin.corner == PinCorner::None {
            self.events.push(ViewEvent::Panning);
        }
        self.commit();
    }

    /// Pans by a screen-space distance, as a drag would.
    pub fn pan_by_pixels(&mut self, delta: Vec2) {
        self.apply_delta(&PanZoomDelta::pan(delta.x, delta.y));
    }

    /// Sets the zoom, clamped, keeping the center fixed.
    pub fn set_zoom(&mut self, zoom: f64) {
        if !zoom.is_finite() {
            tracing::debug!(zoom, "non-finite zoom ignored");
            return;
        }
        self.zoom_to(zoom, 0.0, 0.0);
        self.apply_pin();
        self.commit();
    }

    /// Multiplies the zoom by `factor`, keeping `anchor` (screen pixels) fixed.
    pub fn zoom_about(&mut self, anchor: Point, factor: f64) {
        if !(factor.is_finite() && factor > 0.0 && anchor.is_finite()) {
            tracing::debug!(factor, "invalid zoom factor ignored");
            return;
        }
        let size = self.viewport.size();
        let tx = anchor.x / size.width - 0.5;
        let ty = 0.5 - anchor.y / size.height;
        self.zoom_to(self.state.zoom * factor, tx, ty);
        self.apply_pin();
        self.commit();
    }

    /// Sets the world-space center.
    pub fn set_center(&mut self, center: Point) {
        if !center.is_finite() {
            return;
        }
        self.state.center_x = center.x;
        self.state.center_y = center.y;
        self.apply_pin();
        self.commit();
    }

    /// Sets center and zoom together; zoom is clamped.
    pub fn set_view(&mut self, view: ViewState) {
        if !(view.center_x.is_finite() && view.center_y.is_finite() && view.zoom.is_finite()) {
            tracing::debug!(?view, "non-finite view ignored");
            return;
        }
        self.state = ViewState {
            zoom: view.zoom.clamp(self.config.min_zoom, self.config.max_zoom),
            ..view
        };
        self.apply_pin();
        self.commit();
    }

    /// Returns to the origin at zoom 1 (clamped).
    pub fn reset(&mut self) {
        self.set_view(ViewState::default());
    }

    /// Fits `content` plus `padding_px` into the viewport.
    ///
    /// `content` is in y-down content coordinates, so the resulting center
    /// is `(mid_x, -mid_y)`. Content whose padded extent is not positive is
    /// ignored.
    pub fn fit_bounds(&mut self, content: Rect, padding_px: f64) {
        let padded_w = content.width() + padding_px;
        let padded_h = content.height() + padding_px;
        if !(padded_w > 0.0 && padded_h > 0.0 && padded_w.is_finite() && padded_h.is_finite()) {
            return;
        }
        let size = self.viewport.size();
        let zoom = (size.width / padded_w).min(size.height / padded_h);
        let mid = content.center();
        self.set_view(ViewState::new(mid.x, -mid.y, zoom));
    }

    /// Adopts a new viewport size; each dimension is raised to at least 1px.
    pub fn on_resize(&mut self, viewport: Viewport) {
        let viewport = clamp_viewport(viewport);
        if viewport == self.viewport {
            return;
        }
        if self.config.resize_anchor == ResizeAnchor::TopLeft {
            let scale = 1.0 / self.state.zoom;
            let old = self.viewport.size();
            let new = viewport.size();
            self.state.center_x += (new.width - old.width) * 0.5 * scale;
            self.state.center_y -= (new.height - old.height) * 0.5 * scale;
        }
        self.viewport = viewport;
        self.apply_pin();
        // The transform depends on the viewport even if the state did not move.
        self.rebuild_transforms();
        self.commit();
    }

    /// Replaces the zoom limits, clamping the current zoom into them.
    ///
    /// Invalid limits are rejected and the previous ones kept.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) -> Result<(), ViewError> {
        if let Err(err) = validate_zoom_bounds(min_zoom, max_zoom) {
            tracing::debug!(min_zoom, max_zoom, "zoom limits rejected");
            return Err(err);
        }
        self.config.min_zoom = min_zoom;
        self.config.max_zoom = max_zoom;
        self.zoom_to(self.state.zoom, 0.0, 0.0);
        self.apply_pin();
        self.commit();
        Ok(())
    }

    /// Pins the origin to `corner`, or frees it with [`PinCorner::None`].
    pub fn set_pin_corner(&mut self, corner: PinCorner) {
        if self.config.pin.corner == corner {
            return;
        }
        self.config.pin.corner = corner;
        self.events.push(ViewEvent::OriginPinChanged(corner));
        self.apply_pin();
        self.commit();
    }

    /// Sets the pin margin in pixels. Non-finite values are ignored.
    pub fn set_pin_margin(&mut self, margin_px: f64) {
        if self.config.pin.margin_px == margin_px || !margin_px.is_finite() {
            return;
        }
        self.config.pin.margin_px = margin_px;
        self.events.push(ViewEvent::PinMarginChanged(margin_px));
        self.apply_pin();
        self.commit();
    }

    /// Sets the zoom anchor mode.
    pub fn set_zoom_anchor(&mut self, anchor: ZoomAnchor) {
        if self.config.zoom_anchor == anchor {
            return;
        }
        self.config.zoom_anchor = anchor;
        self.events.push(ViewEvent::ZoomAnchorChanged(anchor));
    }

    /// Sets the resize anchor mode.
    pub fn set_resize_anchor(&mut self, anchor: ResizeAnchor) {
        self.config.resize_anchor = anchor;
    }

    /// Enables or disables primary-button panning.
    pub fn set_pan_enabled(&mut self, enabled: bool) {
        self.config.pan_enabled = enabled;
    }

    /// Enables or disables zooming.
    pub fn set_zoom_enabled(&mut self, enabled: bool) {
        self.config.zoom_enabled = enabled;
    }

    /// Snapshot of the controller for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewDebugInfo {
        ViewDebugInfo {
            state: self.state,
            viewport: self.viewport,
            min_zoom: self.config.min_zoom,
            max_zoom: self.config.max_zoom,
            pin: self.config.pin,
            zoom_anchor: self.config.zoom_anchor,
            resize_anchor: self.config.resize_anchor,
            visible_world_rect: self.visible_world_rect(),
            revision: self.revision,
        }
    }

    // `tx`/`ty` locate the anchor relative to the center as fractions of the
    // viewport, y-up; the world point there is kept fixed.
    fn zoom_to(&mut self, zoom: f64, tx: f64, ty: f64) {
        let new_zoom = zoom.clamp(self.config.min_zoom, self.config.max_zoom);
        if new_zoom == self.state.zoom {
            return;
        }
        let size = self.viewport.size();
        let shift = 1.0 / new_zoom - 1.0 / self.state.zoom;
        self.state.center_x -= size.width * shift * tx;
        self.state.center_y -= size.height * shift * ty;
        self.state.zoom = new_zoom;
    }

    fn apply_pin(&mut self) {
        let PinConfig { corner, margin_px } = self.config.pin;
        if corner == PinCorner::None {
            return;
        }
        let size = self.viewport.size();
        let zoom = self.state.zoom;
        let x = (size.width * 0.5 - margin_px) / zoom;
        let y = (size.height * 0.5 - margin_px) / zoom;
        self.state.center_x = if corner.is_left() { x } else { -x };
        self.state.center_y = if corner.is_top() { -y } else { y };
    }

    fn commit(&mut self) {
        if self.state == self.committed {
            return;
        }
        self.committed = self.state;
        self.rebuild_transforms();
        self.revision += 1;
        self.events.push(ViewEvent::Updated(self.state));
    }

    fn rebuild_transforms(&mut self) {
        let size = self.viewport.size();
        let ViewState {
            center_x,
            center_y,
            zoom,
        } = self.state;
        self.world_to_screen = Affine::new([
            zoom,
            0.0,
            0.0,
            -zoom,
            size.width * 0.5 - center_x * zoom,
            size.height * 0.5 + center_y * zoom,
        ]);
        self.screen_to_world = self.world_to_screen.inverse();
    }
}

fn clamp_viewport(viewport: Viewport) -> Viewport {
    let clamped = viewport.at_least_one_px();
    if clamped != viewport {
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            "viewport dimension clamped to 1px"
        );
    }
    clamped
}

/// Debug snapshot of a [`ViewController`].
#[derive(Clone, Copy, Debug)]
pub struct ViewDebugInfo {
    /// Current view state.
    pub state: ViewState,
    /// Current viewport.
    pub viewport: Viewport,
    /// Minimum zoom.
    pub min_zoom: f64,
    /// Maximum zoom.
    pub max_zoom: f64,
    /// Pin configuration.
    pub pin: PinConfig,
    /// Zoom anchor mode.
    pub zoom_anchor: ZoomAnchor,
    /// Resize anchor mode.
    pub resize_anchor: ResizeAnchor,
    /// World rectangle covered by the viewport.
    pub visible_world_rect: Rect,
    /// Committed change count.
    pub revision: u64,
}
