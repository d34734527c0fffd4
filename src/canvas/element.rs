//! Canvas element state, attributes, and surface lifecycle.

use super::CanvasError;
use crate::config::{ActionMap, KeybindingsConfig};
use crate::draw::{BLACK, CanvasSurface, Color, Point, WHITE};
use crate::history::{History, HistoryEvent, HistorySnapshot, ListenerId, Listeners};
use log::{debug, info};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Attribute names a canvas observes.
pub const OBSERVED_ATTRIBUTES: [&str; 5] = ["height", "width", "color", "size", "bgcolor"];

/// Largest width/height accepted for the raster surface.
pub const MAX_DIMENSION: u32 = 32_767;

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one canvas instance; input events carry the id of the
/// element they were dispatched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(u64);

impl ElementId {
    fn next() -> Self {
        Self(NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "draw-canvas#{}", self.0)
    }
}

/// Tool and surface settings a canvas is created with.
///
/// The defaults match a freshly created element before any attribute is
/// set: black strokes of width 10 on white, 300 x 150 pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasSettings {
    pub color: Color,
    pub bgcolor: Color,
    pub size: f64,
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            color: BLACK,
            bgcolor: WHITE,
            size: 10.0,
            width: 300,
            height: 150,
        }
    }
}

/// Live tool settings and gesture tracking.
#[derive(Debug)]
pub(crate) struct RenderState {
    pub(crate) drawing: bool,
    pub(crate) color: Color,
    pub(crate) bgcolor: Color,
    pub(crate) size: f64,
    pub(crate) width: u32,
    pub(crate) height: u32,
    /// Last pointer position of the active gesture (None between gestures)
    pub(crate) last_position: Option<Point>,
    /// Element origin in page coordinates, subtracted from touch positions
    pub(crate) page_offset: Point,
}

/// The drawing surface controller.
///
/// Owns the raster surface, the replayable history, and the gesture state
/// machine. Every public operation is synchronous and leaves the surface
/// fully painted for the current history step before it returns.
pub struct DrawCanvas {
    pub(crate) id: ElementId,
    pub(crate) state: RenderState,
    pub(crate) history: History,
    pub(crate) surface: CanvasSurface,
    pub(crate) listeners: Listeners,
    pub(crate) action_map: ActionMap,
}

impl DrawCanvas {
    /// Creates a canvas with [`CanvasSettings::default`].
    pub fn new() -> Result<Self, CanvasError> {
        Self::with_settings(CanvasSettings::default())
    }

    /// Creates a canvas and paints its background.
    pub fn with_settings(settings: CanvasSettings) -> Result<Self, CanvasError> {
        validate_dimension("width", settings.width)?;
        validate_dimension("height", settings.height)?;
        validate_size(settings.size)?;

        let action_map = KeybindingsConfig::default()
            .build_action_map()
            .map_err(|err| CanvasError::InvalidAttribute {
                name: "keybindings".to_string(),
                value: err,
            })?;

        let mut canvas = Self {
            id: ElementId::next(),
            state: RenderState {
                drawing: false,
                color: settings.color,
                bgcolor: settings.bgcolor,
                size: settings.size,
                width: settings.width,
                height: settings.height,
                last_position: None,
                page_offset: Point::new(0.0, 0.0),
            },
            history: History::new(),
            surface: CanvasSurface::new(settings.width, settings.height)?,
            listeners: Listeners::new(),
            action_map,
        };
        canvas.clear()?;
        debug!("Created {} ({}x{})", canvas.id, settings.width, settings.height);
        Ok(canvas)
    }

    /// Replaces the undo/redo accelerators.
    pub fn set_action_map(&mut self, action_map: ActionMap) {
        self.action_map = action_map;
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    /// The raster surface strokes are painted onto.
    pub fn surface(&self) -> &CanvasSurface {
        &self.surface
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_snapshot(&self) -> HistorySnapshot {
        self.history.snapshot()
    }

    /// Registers a listener for history notifications.
    ///
    /// Listeners run synchronously inside the operation that triggered them,
    /// in registration order.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&HistoryEvent) + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    pub(crate) fn emit(&mut self, event: HistoryEvent) {
        self.listeners.emit(&event);
    }

    /// Fails with [`CanvasError::UnexpectedTarget`] unless `target` is this canvas.
    pub(crate) fn check_target(&self, target: ElementId) -> Result<(), CanvasError> {
        if target != self.id {
            return Err(CanvasError::UnexpectedTarget {
                expected: self.id,
                actual: target,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Attributes
    // ========================================================================

    /// Whether a gesture is in progress. Read-only; reflected as the
    /// `drawing` attribute.
    pub fn is_drawing(&self) -> bool {
        self.state.drawing
    }

    pub fn width(&self) -> u32 {
        self.state.width
    }

    pub fn height(&self) -> u32 {
        self.state.height
    }

    pub fn color(&self) -> Color {
        self.state.color
    }

    pub fn bgcolor(&self) -> Color {
        self.state.bgcolor
    }

    pub fn size(&self) -> f64 {
        self.state.size
    }

    pub fn settings(&self) -> CanvasSettings {
        CanvasSettings {
            color: self.state.color,
            bgcolor: self.state.bgcolor,
            size: self.state.size,
            width: self.state.width,
            height: self.state.height,
        }
    }

    /// Changes the surface width. The surface is recreated and the history
    /// replayed up to the current step.
    pub fn set_width(&mut self, width: u32) -> Result<(), CanvasError> {
        validate_dimension("width", width)?;
        self.state.width = width;
        self.redraw_current()
    }

    /// Changes the surface height; see [`DrawCanvas::set_width`].
    pub fn set_height(&mut self, height: u32) -> Result<(), CanvasError> {
        validate_dimension("height", height)?;
        self.state.height = height;
        self.redraw_current()
    }

    /// Sets the color of subsequent segments. Painted pixels are unaffected.
    pub fn set_color(&mut self, color: Color) {
        self.state.color = color;
    }

    /// Sets the stroke width of subsequent segments.
    pub fn set_size(&mut self, size: f64) -> Result<(), CanvasError> {
        validate_size(size)?;
        self.state.size = size;
        Ok(())
    }

    /// Changes the background color and rebuilds the surface from history.
    pub fn set_bgcolor(&mut self, bgcolor: Color) -> Result<(), CanvasError> {
        self.state.bgcolor = bgcolor;
        self.redraw_current()
    }

    /// Element origin in page coordinates (used to localize touch input).
    pub fn page_offset(&self) -> Point {
        self.state.page_offset
    }

    pub fn set_page_offset(&mut self, offset: Point) {
        self.state.page_offset = offset;
    }

    /// Reads an attribute as a string, like `getAttribute`.
    ///
    /// `drawing` is present (as an empty string) only while a gesture is in
    /// progress. Unknown names return `None`.
    pub fn attribute(&self, name: &str) -> Option<String> {
        match name {
            "width" => Some(self.state.width.to_string()),
            "height" => Some(self.state.height.to_string()),
            "color" => Some(self.state.color.to_hex()),
            "bgcolor" => Some(self.state.bgcolor.to_hex()),
            "size" => Some(self.state.size.to_string()),
            "drawing" => self.state.drawing.then(String::new),
            _ => None,
        }
    }

    /// Sets an attribute from its string form, like `setAttribute`.
    ///
    /// The value is fully parsed before any state changes, so a rejected
    /// value leaves the canvas untouched. An empty width or height means 0.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), CanvasError> {
        match name {
            "width" => self.set_width(parse_dimension(name, value)?),
            "height" => self.set_height(parse_dimension(name, value)?),
            "color" => {
                self.set_color(value.parse()?);
                Ok(())
            }
            "size" => self.set_size(parse_number(name, value)?),
            "bgcolor" => self.set_bgcolor(value.parse()?),
            _ => Err(CanvasError::InvalidAttribute {
                name: name.to_string(),
                value: value.to_string(),
            }),
        }
    }

    // ========================================================================
    // Surface lifecycle
    // ========================================================================

    /// Resizes the surface to the configured dimensions and fills it with
    /// the background color. History is untouched.
    pub fn clear(&mut self) -> Result<(), CanvasError> {
        self.surface.resize(self.state.width, self.state.height)?;
        self.surface.fill(self.state.bgcolor)
    }

    /// Clears the surface and discards the entire history. Irreversible.
    ///
    /// A gesture in progress loses its recorded segments; if the pointer is
    /// still down, the next move starts a fresh stroke where it lands.
    pub fn reset(&mut self) -> Result<(), CanvasError> {
        self.clear()?;
        let previous = self.history.current_step();
        let discarded = self.history.len();
        self.history.clear();
        self.state.last_position = None;
        info!("Reset {} (discarded {} history entries)", self.id, discarded);
        if previous != 0 {
            self.emit(HistoryEvent::Step(self.history.snapshot()));
        }
        Ok(())
    }
}

impl fmt::Debug for DrawCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawCanvas")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("history", &self.history)
            .field("surface", &self.surface)
            .field("listeners", &self.listeners)
            .finish()
    }
}

fn validate_dimension(name: &str, value: u32) -> Result<(), CanvasError> {
    if value > MAX_DIMENSION {
        return Err(CanvasError::InvalidAttribute {
            name: name.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

fn validate_size(size: f64) -> Result<(), CanvasError> {
    if !size.is_finite() || size < 0.0 {
        return Err(CanvasError::InvalidAttribute {
            name: "size".to_string(),
            value: size.to_string(),
        });
    }
    Ok(())
}

fn parse_number(name: &str, value: &str) -> Result<f64, CanvasError> {
    let invalid = || CanvasError::InvalidAttribute {
        name: name.to_string(),
        value: value.to_string(),
    };
    let parsed: f64 = value.trim().parse().map_err(|_| invalid())?;
    if !parsed.is_finite() || parsed < 0.0 {
        return Err(invalid());
    }
    Ok(parsed)
}

/// Parses a pixel dimension; fractional values are truncated.
fn parse_dimension(name: &str, value: &str) -> Result<u32, CanvasError> {
    if value.trim().is_empty() {
        return Ok(0);
    }
    let parsed = parse_number(name, value)?;
    if parsed > MAX_DIMENSION as f64 {
        return Err(CanvasError::InvalidAttribute {
            name: name.to_string(),
            value: value.to_string(),
        });
    }
    Ok(parsed.trunc() as u32)
}
