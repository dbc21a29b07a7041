use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::dom::{self, Listener};
use crate::config::ParticleConfig;
use crate::geometry::Viewport;
use crate::particles::ParticleField;

const FILL: &str = "hsla(217, 91%, 60%, 0.3)";
const GLOW: &str = "hsla(217, 91%, 60%, 0.4)";

/// The animated backdrop: owns the population, the tick interval and the resize listener.
pub struct ParticleBackdrop {
    window: Window,
    field: Rc<RefCell<ParticleField>>,
    ticks: Rc<Cell<u64>>,
    interval: Option<i32>,
    _tick: Closure<dyn FnMut()>,
    _resize: Listener,
}

impl ParticleBackdrop {
    /// Start ticking every `config.interval_ms`.
    pub fn start(window: &Window, canvas: HtmlCanvasElement, config: &ParticleConfig) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("2d canvas not supported")?
            .dyn_into()?;

        let vp = dom::viewport(window);
        fit(&canvas, vp);

        // Unseeded in practice: Math.random differs per page load.
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        let mut rng = fastrand::Rng::with_seed(seed);
        let field = Rc::new(RefCell::new(ParticleField::generate(config, vp, &mut rng)));

        // Keep the canvas covering the window; particles re-wrap on their next tick.
        let resize = {
            let win = window.clone();
            let canvas = canvas.clone();
            Listener::new(window, "resize", move |_| fit(&canvas, dom::viewport(&win)))?
        };

        let ticks = Rc::new(Cell::new(0));
        let tick = {
            let win = window.clone();
            let field = field.clone();
            let ticks = ticks.clone();
            Closure::wrap(Box::new(move || {
                ticks.set(ticks.get() + 1);
                let vp = dom::viewport(&win);
                let mut field = field.borrow_mut();
                field.tick(vp);
                if let Err(e) = draw(&ctx, &field, vp) {
                    log::warn!("particle draw failed: {e:?}");
                }
            }) as Box<dyn FnMut()>)
        };
        let interval = window.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            config.interval_ms,
        )?;

        log::debug!("particle backdrop started: {} particles every {}ms", config.count, config.interval_ms);
        Ok(Self {
            window: window.clone(),
            field,
            ticks,
            interval: Some(interval),
            _tick: tick,
            _resize: resize,
        })
    }

    pub fn len(&self) -> usize {
        self.field.borrow().len()
    }

    /// Current particle positions, in id order.
    pub fn positions(&self) -> Vec<(f64, f64)> {
        self.field.borrow().particles().iter().map(|p| (p.x, p.y)).collect()
    }

    /// Ticks run since `start`.
    pub fn ticks(&self) -> u64 {
        self.ticks.get()
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    /// Cancel the timer and discard the population.
    pub fn stop(&mut self) {
        if let Some(handle) = self.interval.take() {
            self.window.clear_interval_with_handle(handle);
            *self.field.borrow_mut() = ParticleField::default();
            log::debug!("particle backdrop stopped");
        }
    }
}

impl Drop for ParticleBackdrop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn fit(canvas: &HtmlCanvasElement, vp: Viewport) {
    canvas.set_width(vp.width as u32);
    canvas.set_height(vp.height as u32);
}

fn draw(ctx: &CanvasRenderingContext2d, field: &ParticleField, vp: Viewport) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, vp.width, vp.height);
    ctx.set_fill_style_str(FILL);
    ctx.set_shadow_color(GLOW);
    for p in field.particles() {
        ctx.set_global_alpha(p.opacity);
        ctx.set_shadow_blur(p.size * 2.0);
        ctx.begin_path();
        ctx.arc(p.x, p.y, p.size / 2.0, 0.0, TAU)?;
        ctx.fill();
    }
    ctx.set_global_alpha(1.0);
    Ok(())
}
