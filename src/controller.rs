//! Sidebar and zoom state machine for the layout shell.
//!
//! [`UiStateController`] is the single owner of [`SidebarState`] and
//! [`ZoomState`]. Components call its named operations from their event
//! handlers; every operation mutates state first and then projects it onto
//! the page through the injected [`StyleHost`]. Nothing is ever read back
//! from the page except the sidebar's rendered width.

use crate::config::Config;
use crate::events::{self, ZoomCommand, ZoomModifiers};
use crate::host::{
    ElementHandle, LayoutElements, StyleHost, ZoomDirection, COLLAPSED_CLASS, COLLAPSED_GLYPH,
    CONTENT_FONT_SIZE_PROPERTY, CONTENT_SCALE_PROPERTY, EXPANDED_GLYPH, RESIZING_CLASS,
    SIDEBAR_WIDTH_PROPERTY,
};
use crate::state::{
    clamp_width, KeyValueStore, ResizeSession, SidebarState, ZoomState, ZOOM_LEVEL_KEY,
};

pub struct UiStateController<H, S> {
    host: H,
    store: S,
    elements: LayoutElements,
    config: Config,
    sidebar: SidebarState,
    zoom: ZoomState,
    resize: Option<ResizeSession>,
}

impl<H: StyleHost, S: KeyValueStore> UiStateController<H, S> {
    /// Build the controller and apply the initial state to the page.
    ///
    /// The zoom level is restored from `store` before anything is drawn.
    pub fn new(host: H, store: S, elements: LayoutElements, config: Config) -> Self {
        let persisted = store.get(ZOOM_LEVEL_KEY);
        let zoom = ZoomState::from_persisted(persisted.as_deref(), &config.zoom);
        let sidebar = SidebarState::new(&config.sidebar);

        tracing::debug!(
            zoom_level = zoom.level(),
            collapsed = sidebar.collapsed,
            has_toggle = elements.toggle.is_some(),
            has_divider = elements.divider.is_some(),
            has_sidebar = elements.sidebar.is_some(),
            zoom_buttons = elements.zoom_buttons.len(),
            has_zoom_label = elements.zoom_label.is_some(),
            "Initializing layout controller"
        );

        let mut controller = Self {
            host,
            store,
            elements,
            config,
            sidebar,
            zoom,
            resize: None,
        };
        controller.reapply();
        controller
    }

    /// Project the complete state onto the page again.
    ///
    /// Needed once the page elements are mounted, since writes addressed to
    /// elements are dropped while they do not exist yet.
    pub fn reapply(&mut self) {
        if let Some(width) = self.sidebar.width_px {
            self.apply_sidebar_width(width);
        }
        self.apply_sidebar_visibility();
        self.host.set_body_class(RESIZING_CLASS, self.resize.is_some());
        self.apply_zoom();
    }

    pub fn sidebar(&self) -> &SidebarState {
        &self.sidebar
    }

    pub fn zoom_level(&self) -> f64 {
        self.zoom.level()
    }

    pub fn is_resizing(&self) -> bool {
        self.resize.is_some()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    // ------------------------------------------------------------------
    // Sidebar toggle
    // ------------------------------------------------------------------

    /// Collapse an expanded sidebar or expand a collapsed one.
    pub fn toggle_sidebar(&mut self) {
        if self.elements.toggle.is_none() {
            tracing::trace!("No sidebar toggle element, ignoring toggle");
            return;
        }

        if self.sidebar.collapsed {
            self.expand_sidebar();
        } else {
            let rendered = self
                .elements
                .sidebar
                .as_ref()
                .and_then(|el| self.host.rendered_width(el));
            self.sidebar.collapse(rendered, &self.config.sidebar);
            self.apply_sidebar_visibility();
        }

        tracing::debug!(
            collapsed = self.sidebar.collapsed,
            width_px = ?self.sidebar.width_px,
            "Toggled sidebar"
        );
    }

    fn expand_sidebar(&mut self) {
        if let Some(width) = self.sidebar.expand() {
            self.apply_sidebar_width(width);
        }
        self.apply_sidebar_visibility();
    }

    // ------------------------------------------------------------------
    // Sidebar resize
    // ------------------------------------------------------------------

    /// Start a divider drag at `pointer_x`.
    ///
    /// A collapsed sidebar is expanded first so the drag starts from its last
    /// width. Ignored while another drag is in progress.
    pub fn begin_resize(&mut self, pointer_x: f64) {
        let Some(sidebar_el) = self.resize_target() else {
            tracing::trace!("No divider or sidebar element, ignoring resize");
            return;
        };
        if self.resize.is_some() {
            tracing::trace!("Resize already in progress, ignoring begin");
            return;
        }
        if !pointer_x.is_finite() {
            return;
        }

        if self.sidebar.collapsed {
            self.expand_sidebar();
        }

        let start_width = self
            .sidebar
            .width_px
            .or_else(|| self.host.rendered_width(&sidebar_el))
            .unwrap_or(self.config.sidebar.default_width);
        let start_width = clamp_width(start_width, &self.config.sidebar);

        self.resize = Some(ResizeSession {
            start_x: pointer_x,
            start_width,
        });
        self.host.set_body_class(RESIZING_CLASS, true);

        tracing::debug!(pointer_x, start_width, "Began sidebar resize");
    }

    /// Follow the pointer during a drag. Ignored when no drag is in progress.
    pub fn update_resize(&mut self, pointer_x: f64) {
        let Some(session) = self.resize else {
            return;
        };
        if !pointer_x.is_finite() {
            return;
        }
        let width = self
            .sidebar
            .set_width(session.candidate_width(pointer_x), &self.config.sidebar);
        self.apply_sidebar_width(width);
    }

    /// Finish a drag. No-op when no drag is in progress.
    pub fn end_resize(&mut self) {
        if self.resize.take().is_none() {
            return;
        }
        self.host.set_body_class(RESIZING_CLASS, false);
        tracing::debug!(width_px = ?self.sidebar.width_px, "Ended sidebar resize");
    }

    fn resize_target(&self) -> Option<ElementHandle> {
        self.elements.divider.as_ref()?;
        self.elements.sidebar.clone()
    }

    // ------------------------------------------------------------------
    // Zoom
    // ------------------------------------------------------------------

    /// Shift the zoom level by `delta`, apply it and persist it.
    pub fn change_zoom(&mut self, delta: f64) {
        if !delta.is_finite() {
            return;
        }
        let level = self.zoom.change(delta, &self.config.zoom);
        tracing::debug!(delta, level, "Changed zoom level");
        self.apply_zoom();
        self.persist_zoom();
    }

    /// Return to 100%, apply it and persist it.
    pub fn reset_zoom(&mut self) {
        self.zoom.reset();
        tracing::debug!("Reset zoom level");
        self.apply_zoom();
        self.persist_zoom();
    }

    /// Handle a click on one of the zoom buttons.
    pub fn activate_zoom_button(&mut self, button: &ElementHandle) {
        let direction = self
            .elements
            .zoom_buttons
            .iter()
            .find(|b| &b.handle == button)
            .map(|b| b.direction);
        match direction {
            Some(ZoomDirection::In) => self.change_zoom(self.config.zoom.zoom_step),
            Some(ZoomDirection::Out) => self.change_zoom(-self.config.zoom.zoom_step),
            None => tracing::trace!(%button, "Unknown zoom button, ignoring"),
        }
    }

    pub fn apply_zoom_command(&mut self, command: ZoomCommand) {
        let step = self.config.zoom.zoom_step;
        match command {
            ZoomCommand::In => self.change_zoom(step),
            ZoomCommand::Out => self.change_zoom(-step),
            ZoomCommand::Reset => self.reset_zoom(),
        }
    }

    /// Handle a key press. Returns `true` when the key was a zoom shortcut
    /// and native handling must be suppressed.
    pub fn handle_key(&mut self, key: &str, modifiers: ZoomModifiers) -> bool {
        match events::zoom_command_for_key(key, modifiers) {
            Some(command) => {
                self.apply_zoom_command(command);
                true
            }
            None => false,
        }
    }

    /// Handle a wheel event. Returns `true` when it was a zoom gesture and
    /// native scrolling or page zoom must be suppressed.
    pub fn handle_wheel(&mut self, delta_y: f64, modifiers: ZoomModifiers) -> bool {
        match events::zoom_command_for_wheel(delta_y, modifiers) {
            Some(command) => {
                self.apply_zoom_command(command);
                true
            }
            None => false,
        }
    }

    fn persist_zoom(&mut self) {
        let value = self.zoom.to_persisted();
        if let Err(e) = self.store.set(ZOOM_LEVEL_KEY, &value) {
            tracing::warn!(%e, value = %value, "Failed to persist zoom level");
        }
    }

    // ------------------------------------------------------------------
    // Projection
    // ------------------------------------------------------------------

    fn apply_sidebar_visibility(&mut self) {
        let collapsed = self.sidebar.collapsed;
        self.host.set_body_class(COLLAPSED_CLASS, collapsed);
        if let Some(toggle) = &self.elements.toggle {
            let glyph = if collapsed {
                COLLAPSED_GLYPH
            } else {
                EXPANDED_GLYPH
            };
            self.host.set_text(toggle, glyph);
        }
    }

    fn apply_sidebar_width(&mut self, width: f64) {
        self.host
            .set_root_property(SIDEBAR_WIDTH_PROPERTY, &format!("{width}px"));
    }

    fn apply_zoom(&mut self) {
        let level = self.zoom.level();
        let font_size = self.zoom.font_size(self.config.zoom.base_font_size);
        self.host
            .set_root_property(CONTENT_SCALE_PROPERTY, &level.to_string());
        self.host
            .set_root_property(CONTENT_FONT_SIZE_PROPERTY, &format!("{font_size}px"));
        if let Some(label) = &self.elements.zoom_label {
            self.host.set_text(label, &self.zoom.label());
        }
    }
}
