//! Editor panel hosting a canvas inside a comment form.
//!
//! Opening the panel hides the form and shows a canvas with the configured
//! defaults. The panel inputs map to [`PanelAction`]s. Cancel and Upload
//! both close the panel and show the form again; Upload also hands the
//! drawing to the form as a PNG attachment.

use crate::canvas::{CanvasError, CanvasSettings, DrawCanvas};
use crate::config::Config;
use crate::export::{export_png, generate_filename};
use crate::import::{ImportedImage, import_image};
use crate::input::{EventKind, EventResponse, InputEvent};
use crate::util::color_to_name;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The comment form a drawing panel is attached to.
pub trait CommentForm {
    /// Rendered width of the form in pixels, `None` when it cannot be
    /// measured (for example because the form element is missing).
    fn width(&self) -> Option<u32>;

    /// Shows or hides the form while the panel is open.
    fn set_hidden(&mut self, hidden: bool);

    /// Receives an uploaded file.
    fn attach(&mut self, filename: &str, png: &[u8]) -> Result<(), CanvasError>;
}

/// One interaction with the panel controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PanelAction {
    Reset,
    LoadImage { path: PathBuf },
    SetColor { value: String },
    SetBgColor { value: String },
    SetSize { value: String },
    SetWidth { value: String },
    SetHeight { value: String },
    Undo,
    Redo,
    Cancel,
    Upload,
}

/// Whether the panel is still shown after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Open,
    Closed,
}

/// A canvas shown in place of a comment form.
pub struct DrawPanel<F: CommentForm> {
    form: F,
    canvas: DrawCanvas,
    state: PanelState,
    dpi: u32,
    filename_template: String,
}

impl<F: CommentForm> DrawPanel<F> {
    /// Opens a panel over `form` with the canvas defaults from `config`.
    ///
    /// # Errors
    /// [`CanvasError::MissingCollaborator`] when the form cannot report its
    /// width. The form is left untouched in that case.
    pub fn open(mut form: F, config: &Config) -> Result<Self, CanvasError> {
        let form_width = form.width().ok_or_else(|| {
            CanvasError::MissingCollaborator("comment form did not report a width".to_string())
        })?;

        let defaults = &config.canvas;
        let settings = CanvasSettings {
            color: defaults.default_color.to_color().ok_or_else(|| {
                CanvasError::InvalidColor(format!("{:?}", defaults.default_color))
            })?,
            bgcolor: defaults.default_bgcolor.to_color().ok_or_else(|| {
                CanvasError::InvalidColor(format!("{:?}", defaults.default_bgcolor))
            })?,
            size: defaults.default_size,
            width: form_width.min(defaults.max_default_width),
            height: defaults.default_height,
        };
        let mut canvas = DrawCanvas::with_settings(settings)?;
        canvas.set_action_map(config.action_map().map_err(|err| {
            CanvasError::InvalidAttribute {
                name: "keybindings".to_string(),
                value: err.to_string(),
            }
        })?);

        form.set_hidden(true);
        info!(
            "Opened drawing panel with {} ({}x{}, {} on {})",
            canvas.id(),
            canvas.width(),
            canvas.height(),
            color_to_name(&canvas.color()),
            color_to_name(&canvas.bgcolor())
        );

        Ok(Self {
            form,
            canvas,
            state: PanelState::Open,
            dpi: config.export.dpi,
            filename_template: config.export.filename_template.clone(),
        })
    }

    pub fn canvas(&self) -> &DrawCanvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut DrawCanvas {
        &mut self.canvas
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == PanelState::Open
    }

    /// Closes the panel and hands the form back.
    pub fn into_form(self) -> F {
        self.form
    }

    /// Forwards a pointer, touch, or key event to the canvas.
    pub fn dispatch(&mut self, kind: EventKind) -> Result<EventResponse, CanvasError> {
        let event = InputEvent::new(self.canvas.id(), kind);
        self.canvas.handle_event(&event)
    }

    /// Applies one panel control.
    ///
    /// Actions arriving after the panel closed are ignored.
    pub fn apply(&mut self, action: &PanelAction) -> Result<PanelState, CanvasError> {
        if !self.is_open() {
            warn!("Ignoring {:?}: drawing panel is closed", action);
            return Ok(self.state);
        }
        debug!("Panel action {:?}", action);

        match action {
            PanelAction::Reset => self.canvas.reset()?,
            PanelAction::LoadImage { path } => {
                let image = ImportedImage::from_path(path)?;
                import_image(&mut self.canvas, &image)?;
            }
            PanelAction::SetColor { value } => self.canvas.set_attribute("color", value)?,
            PanelAction::SetBgColor { value } => self.canvas.set_attribute("bgcolor", value)?,
            PanelAction::SetSize { value } => self.canvas.set_attribute("size", value)?,
            PanelAction::SetWidth { value } => self.canvas.set_attribute("width", value)?,
            PanelAction::SetHeight { value } => self.canvas.set_attribute("height", value)?,
            PanelAction::Undo => self.canvas.undo()?,
            PanelAction::Redo => self.canvas.redo()?,
            PanelAction::Cancel => self.close(),
            PanelAction::Upload => self.upload()?,
        }
        Ok(self.state)
    }

    fn upload(&mut self) -> Result<(), CanvasError> {
        let png = export_png(&self.canvas, self.dpi)?;
        let filename = generate_filename(&self.filename_template, "png");
        self.form.set_hidden(false);
        self.form.attach(&filename, &png)?;
        info!("Uploaded {} ({} bytes)", filename, png.len());
        self.state = PanelState::Closed;
        Ok(())
    }

    fn close(&mut self) {
        self.form.set_hidden(false);
        self.state = PanelState::Closed;
        info!("Closed drawing panel");
    }
}
