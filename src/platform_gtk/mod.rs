//! GTK4 embedding for [`BarChart`].
//!
//! The adapter owns a `DrawingArea`, renders through cairo on every draw,
//! forwards taps and horizontal scrolling, and drives animations from the
//! widget frame clock.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::BarChart;
use crate::core::Viewport;
use crate::render::CairoRenderer;

pub type SharedBarChart = Rc<RefCell<BarChart<CairoRenderer>>>;

/// Pixels scrolled per wheel/touchpad scroll unit.
const SCROLL_STEP_PX: f64 = 40.0;

pub struct GtkBarChartAdapter {
    chart: SharedBarChart,
    drawing_area: gtk::DrawingArea,
}

impl GtkBarChartAdapter {
    #[must_use]
    pub fn new(chart: BarChart<CairoRenderer>) -> Self {
        let viewport = chart.viewport();
        let chart = Rc::new(RefCell::new(chart));
        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_content_width(i32::try_from(viewport.width).unwrap_or(i32::MAX));
        drawing_area.set_content_height(i32::try_from(viewport.height).unwrap_or(i32::MAX));

        install_draw_func(&drawing_area, &chart);
        install_tap_gesture(&drawing_area, &chart);
        install_scroll_controller(&drawing_area, &chart);
        install_animation_tick(&drawing_area, &chart);

        Self {
            chart,
            drawing_area,
        }
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    /// Shared handle for hosts that update data after construction. Call
    /// `queue_draw` on the widget after mutating it.
    #[must_use]
    pub fn chart(&self) -> SharedBarChart {
        Rc::clone(&self.chart)
    }

    pub fn queue_draw(&self) {
        self.drawing_area.queue_draw();
    }
}

fn install_draw_func(drawing_area: &gtk::DrawingArea, chart: &SharedBarChart) {
    let chart = Rc::clone(chart);
    drawing_area.set_draw_func(move |_widget, context, width, height| {
        if width <= 0 || height <= 0 {
            return;
        }
        let Ok(mut chart) = chart.try_borrow_mut() else {
            return;
        };

        let viewport = Viewport::new(width.unsigned_abs(), height.unsigned_abs());
        if chart.viewport() != viewport {
            if let Err(err) = chart.set_viewport(viewport) {
                warn!(error = %err, width, height, "skipping draw for unusable allocation");
                return;
            }
        }
        if let Err(err) = chart.render_on_cairo_context(context) {
            warn!(error = %err, "bar chart render failed");
        }
    });
}

fn install_tap_gesture(drawing_area: &gtk::DrawingArea, chart: &SharedBarChart) {
    let click = gtk::GestureClick::new();
    let chart = Rc::clone(chart);
    let area = drawing_area.clone();
    click.connect_pressed(move |_, _n_press, x, y| {
        if let Ok(mut chart) = chart.try_borrow_mut() {
            if let Err(err) = chart.tap(x, y) {
                warn!(error = %err, x, y, "tap rejected");
            }
        }
        area.queue_draw();
    });
    drawing_area.add_controller(click);
}

fn install_scroll_controller(drawing_area: &gtk::DrawingArea, chart: &SharedBarChart) {
    let scroll = gtk::EventControllerScroll::new(gtk::EventControllerScrollFlags::BOTH_AXES);
    let chart = Rc::clone(chart);
    let area = drawing_area.clone();
    scroll.connect_scroll(move |_, dx, dy| {
        let delta = if dx.abs() > f64::EPSILON { dx } else { dy };
        let moved = chart
            .try_borrow_mut()
            .map(|mut chart| chart.scroll_by(delta * SCROLL_STEP_PX))
            .unwrap_or(false);
        if moved {
            area.queue_draw();
            gtk::glib::Propagation::Stop
        } else {
            gtk::glib::Propagation::Proceed
        }
    });
    drawing_area.add_controller(scroll);
}

fn install_animation_tick(drawing_area: &gtk::DrawingArea, chart: &SharedBarChart) {
    let chart = Rc::clone(chart);
    let last_frame_us = Rc::new(Cell::new(None::<i64>));
    drawing_area.add_tick_callback(move |widget, clock| {
        let now_us = clock.frame_time();
        let dt_us = last_frame_us
            .replace(Some(now_us))
            .map_or(0, |previous| (now_us - previous).max(0));
        if let Ok(mut chart) = chart.try_borrow_mut() {
            if chart.is_animating() {
                chart.advance(Duration::from_micros(dt_us.unsigned_abs()));
                widget.queue_draw();
            }
        }
        gtk::glib::ControlFlow::Continue
    });
}
