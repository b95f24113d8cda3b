// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Affine;
use understory_axis::{Axis, Orientation};
use understory_gesture::{GestureConfig, GestureNormalizer, InputEvent};
use understory_guide::{GridCalculator, GridLineSet, GridStyle};
use understory_timing::Debouncer;
use understory_view2d::{ViewConfig, ViewController, ViewEvent, ViewState, Viewport};

use crate::error::PlaneError;

/// Configuration for [`Plane`].
#[derive(Clone, Debug, PartialEq)]
pub struct PlaneConfig {
    /// View limits, pinning and anchoring.
    pub view: ViewConfig,
    /// Drag, wheel and pinch handling.
    pub gestures: GestureConfig,
    /// Vertical grid lines (the X axis).
    pub x_style: GridStyle,
    /// Horizontal grid lines (the Y axis).
    pub y_style: GridStyle,
    /// Quiet period before [`PlaneEvent::Moved`] fires.
    pub moved_quiet_period_ms: u64,
}

impl Default for PlaneConfig {
    fn default() -> Self {
        Self {
            view: ViewConfig::default(),
            gestures: GestureConfig::default(),
            x_style: GridStyle::default(),
            y_style: GridStyle::default(),
            moved_quiet_period_ms: 100,
        }
    }
}

/// Identifies a layer registered with [`Plane::add_layer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LayerId(u64);

/// Per-frame scale for one layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerTransform {
    /// The layer.
    pub id: LayerId,
    /// Extra scale to apply on top of the world transform: `1 / zoom` for
    /// layers that keep their screen size, `1` otherwise.
    pub scale: f64,
}

/// Notifications produced by [`Plane::frame`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlaneEvent {
    /// Forwarded from the view controller.
    View(ViewEvent),
    /// The view has been still for the quiet period after moving.
    Moved(ViewState),
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaneFrame {
    /// View state after this frame's input.
    pub view: ViewState,
    /// Viewport size.
    pub viewport: Viewport,
    /// World (y-up) to screen (y-down) transform.
    pub world_to_screen: Affine,
    /// Vertical lines, one per visible X value.
    pub x_lines: GridLineSet,
    /// Horizontal lines, one per visible Y value.
    pub y_lines: GridLineSet,
    /// Scale for every registered layer, in registration order.
    pub layers: Vec<LayerTransform>,
    /// Events since the previous frame, oldest first.
    pub events: Vec<PlaneEvent>,
}

#[derive(Clone, Copy, Debug)]
struct Layer {
    id: LayerId,
    keep_on_zoom: bool,
}

/// A pannable, zoomable plane with adaptive grids.
///
/// Input flows one way: [`InputEvent`]s go to the gesture normalizer, whose
/// per-frame delta updates the [`ViewController`]; the grids then read the
/// resulting [`ViewState`]. Nothing downstream refers back upstream.
#[derive(Clone, Debug)]
pub struct Plane {
    view: ViewController,
    gestures: GestureNormalizer,
    x_grid: GridCalculator,
    y_grid: GridCalculator,
    moved: Debouncer,
    layers: Vec<Layer>,
    next_layer: u64,
}

impl Plane {
    /// Creates a plane, validating the view and gesture configuration.
    pub fn new(viewport: Viewport, config: PlaneConfig) -> Result<Self, PlaneError> {
        let view = ViewController::with_config(viewport, config.view)?;
        let mut gestures = GestureNormalizer::new(config.gestures)?;
        gestures.set_viewport_size(view.viewport().size());
        Ok(Self {
            view,
            gestures,
            x_grid: GridCalculator::new(config.x_style),
            y_grid: GridCalculator::new(config.y_style),
            moved: Debouncer::new(config.moved_quiet_period_ms),
            layers: Vec::new(),
            next_layer: 0,
        })
    }

    /// The view controller.
    #[must_use]
    pub fn view(&self) -> &ViewController {
        &self.view
    }

    /// Mutable access to the view controller, for programmatic changes.
    ///
    /// Changes made here are picked up by the next [`frame`](Self::frame).
    pub fn view_mut(&mut self) -> &mut ViewController {
        &mut self.view
    }

    /// Feeds one input event. Returns `true` if a frame should be scheduled.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        self.gestures.handle(event)
    }

    /// Adopts a new viewport size.
    pub fn resize(&mut self, viewport: Viewport) {
        self.view.on_resize(viewport);
        self.gestures.set_viewport_size(self.view.viewport().size());
    }

    /// Registers a layer. `keep_on_zoom` layers keep their screen size as
    /// the view zooms.
    pub fn add_layer(&mut self, keep_on_zoom: bool) -> LayerId {
        let id = LayerId(self.next_layer);
        self.next_layer += 1;
        self.layers.push(Layer { id, keep_on_zoom });
        id
    }

    /// Unregisters a layer. Returns `false` if it was not registered.
    pub fn remove_layer(&mut self, id: LayerId) -> bool {
        let before = self.layers.len();
        self.layers.retain(|layer| layer.id != id);
        self.layers.len() != before
    }

    /// Returns `true` while gestures animate, view events are queued or a
    /// [`PlaneEvent::Moved`] is waiting for its quiet period.
    #[must_use]
    pub fn needs_frame(&self) -> bool {
        self.gestures.is_animating() || self.view.has_events() || self.moved.is_pending()
    }

    /// Time at which a pending [`PlaneEvent::Moved`] becomes due.
    #[must_use]
    pub fn moved_deadline(&self) -> Option<u64> {
        self.moved.deadline()
    }

    /// Runs one frame at `now_ms`.
    pub fn frame(&mut self, now_ms: u64) -> PlaneFrame {
        if let Some(delta) = self.gestures.on_frame() {
            self.view.apply_delta(&delta);
        }

        let view = self.view.state();
        let viewport = self.view.viewport();
        let size = viewport.size();
        let units_per_px = view.units_per_px();
        let x_axis = Axis::new(Orientation::X, view.center_x, size.width, units_per_px);
        let y_axis = Axis::new(Orientation::Y, view.center_y, size.height, units_per_px);
        let x_lines = self.x_grid.compute(&x_axis, &y_axis);
        let y_lines = self.y_grid.compute(&y_axis, &x_axis);

        let mut events: Vec<PlaneEvent> = self.view.drain_events().map(PlaneEvent::View).collect();
        if events
            .iter()
            .any(|event| matches!(event, PlaneEvent::View(ViewEvent::Updated(_))))
        {
            self.moved.notify(now_ms);
        }
        if self.moved.poll(now_ms) {
            events.push(PlaneEvent::Moved(view));
        }

        let layer_scale = self.view.layer_scale();
        let layers = self
            .layers
            .iter()
            .map(|layer| LayerTransform {
                id: layer.id,
                scale: if layer.keep_on_zoom { layer_scale } else { 1.0 },
            })
            .collect();

        PlaneFrame {
            view,
            viewport,
            world_to_screen: self.view.world_to_screen(),
            x_lines,
            y_lines,
            layers,
            events,
        }
    }

    /// Stops all in-flight work: gesture animation, queued view events and
    /// the pending [`PlaneEvent::Moved`]. Call before dropping the host
    /// surface.
    pub fn teardown(&mut self) {
        self.gestures.cancel();
        self.moved.cancel();
        self.view.drain_events().for_each(drop);
        tracing::debug!("plane torn down");
    }
}
