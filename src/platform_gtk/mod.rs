//! GTK4 host widget for the chart.
//!
//! The adapter owns a `Stack` that switches between a placeholder label and
//! a `DrawingArea`. Drawing, resize and pointer hover are routed into the
//! shared [`ChartPanel`]; everything runs on the GTK main thread.

use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::{
    ChartEngine, ChartPanel, ChartPanelContent, HistoryRequest, StatusEvent, Theme,
};
use crate::core::{PriceHistory, Viewport};
use crate::error::ChartResult;
use crate::interaction::HoverUpdate;
use crate::render::{CairoContextRenderer, Renderer};

const CHART_PAGE: &str = "chart";
const PLACEHOLDER_PAGE: &str = "placeholder";

pub struct GtkChartAdapter<R: Renderer + CairoContextRenderer + 'static> {
    root: gtk::Stack,
    drawing_area: gtk::DrawingArea,
    placeholder: gtk::Label,
    panel: Rc<RefCell<ChartPanel<R>>>,
}

impl<R: Renderer + CairoContextRenderer + 'static> GtkChartAdapter<R> {
    #[must_use]
    pub fn new(engine: ChartEngine<R>) -> Rc<Self> {
        let viewport = engine.viewport();
        let panel = Rc::new(RefCell::new(ChartPanel::new(engine)));

        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_content_width(viewport.width as i32);
        drawing_area.set_content_height(viewport.height as i32);
        drawing_area.set_hexpand(true);
        drawing_area.set_vexpand(true);

        let placeholder = gtk::Label::new(None);
        placeholder.set_justify(gtk::Justification::Center);
        placeholder.set_wrap(true);

        let root = gtk::Stack::new();
        root.add_named(&drawing_area, Some(CHART_PAGE));
        root.add_named(&placeholder, Some(PLACEHOLDER_PAGE));

        let adapter = Rc::new(Self {
            root,
            drawing_area,
            placeholder,
            panel,
        });
        adapter.install_draw_func();
        adapter.install_hover_controller();
        adapter.sync_content();
        adapter
    }

    /// Top-level widget to pack into the host window.
    #[must_use]
    pub fn widget(&self) -> &gtk::Stack {
        &self.root
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    #[must_use]
    pub fn panel(&self) -> Rc<RefCell<ChartPanel<R>>> {
        Rc::clone(&self.panel)
    }

    /// Runs `f` against the engine and schedules a redraw when state changed.
    pub fn update_engine<F>(&self, f: F) -> ChartResult<()>
    where
        F: FnOnce(&mut ChartEngine<R>) -> ChartResult<()>,
    {
        let needs_redraw = {
            let mut panel = self.panel.borrow_mut();
            let engine = panel.engine_mut();
            f(engine)?;
            engine.needs_redraw()
        };
        if needs_redraw {
            self.drawing_area.queue_draw();
        }
        Ok(())
    }

    /// Applies a finished history fetch; call from the main thread.
    pub fn begin_loading(&self, coin_name: &str) -> (HistoryRequest, StatusEvent) {
        self.panel.borrow_mut().begin_loading(coin_name)
    }

    pub fn apply_history(&self, coin_name: &str, history: Option<PriceHistory>) -> StatusEvent {
        let status = self.panel.borrow_mut().apply_history(coin_name, history);
        self.refresh_after_history();
        status
    }

    /// Like [`Self::apply_history`], but ignores results of superseded
    /// requests.
    pub fn apply_requested_history(
        &self,
        request: HistoryRequest,
        coin_name: &str,
        history: Option<PriceHistory>,
    ) -> Option<StatusEvent> {
        let status = self
            .panel
            .borrow_mut()
            .apply_requested_history(request, coin_name, history)?;
        self.refresh_after_history();
        Some(status)
    }

    fn refresh_after_history(&self) {
        self.drawing_area.set_tooltip_text(None);
        self.sync_content();
        self.drawing_area.queue_draw();
    }

    pub fn set_theme(&self, theme: Theme) {
        self.panel.borrow_mut().set_theme(theme);
        self.drawing_area.queue_draw();
    }

    pub fn toggle_theme(&self) -> StatusEvent {
        let status = self.panel.borrow_mut().toggle_theme();
        self.drawing_area.queue_draw();
        status
    }

    fn sync_content(&self) {
        let panel = self.panel.borrow();
        match panel.content() {
            ChartPanelContent::Placeholder(text) => {
                self.placeholder.set_text(text);
                self.root.set_visible_child_name(PLACEHOLDER_PAGE);
            }
            ChartPanelContent::Chart => self.root.set_visible_child_name(CHART_PAGE),
        }
    }

    fn install_draw_func(&self) {
        let panel = Rc::clone(&self.panel);
        self.drawing_area
            .set_draw_func(move |_, context, width, height| {
                if width <= 0 || height <= 0 {
                    return;
                }
                let Ok(mut panel) = panel.try_borrow_mut() else {
                    return;
                };
                let engine = panel.engine_mut();
                let viewport = Viewport::new(width as u32, height as u32);
                if let Err(err) = engine.resize(viewport) {
                    warn!(error = %err, "chart resize failed");
                    return;
                }
                if let Err(err) = engine.render_on_cairo_context(context) {
                    warn!(error = %err, "chart draw failed");
                }
            });
    }

    fn install_hover_controller(&self) {
        let motion = gtk::EventControllerMotion::new();
        {
            let panel = Rc::clone(&self.panel);
            let area = self.drawing_area.downgrade();
            motion.connect_motion(move |_, x, y| {
                let Ok(mut panel) = panel.try_borrow_mut() else {
                    return;
                };
                let update = panel.engine_mut().pointer_move(x, y);
                drop(panel);
                if let Some(area) = area.upgrade() {
                    apply_hover_update(&area, &update);
                }
            });
        }
        {
            let panel = Rc::clone(&self.panel);
            let area = self.drawing_area.downgrade();
            motion.connect_leave(move |_| {
                let Ok(mut panel) = panel.try_borrow_mut() else {
                    return;
                };
                let update = panel.engine_mut().pointer_leave();
                drop(panel);
                if let Some(area) = area.upgrade() {
                    apply_hover_update(&area, &update);
                }
            });
        }
        self.drawing_area.add_controller(motion);
    }
}

fn apply_hover_update(area: &gtk::DrawingArea, update: &HoverUpdate) {
    if !update.changed {
        return;
    }
    area.set_tooltip_text(update.tooltip.as_deref());
    area.queue_draw();
}
