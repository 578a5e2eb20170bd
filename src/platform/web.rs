//! Browser host
//!
//! Sizes the canvas to the window, wires keyboard events through the
//! `InputMapper`, and drives `Session::on_frame` from requestAnimationFrame.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

use crate::input::{Action, InputMapper};
use crate::renderer::{CanvasRenderer, Renderer};
use crate::session::Session;
use crate::settings::Settings;
use crate::sim::WorldBounds;

use super::run_seed;

/// Game instance holding everything the callbacks share
struct App {
    session: Session,
    renderer: CanvasRenderer,
    input: InputMapper,
    settings: Settings,
}

impl App {
    fn handle_key_down(&mut self, code: &str) {
        match self.input.press(code) {
            Some(Action::Command(command)) => {
                self.session.push_command(command);
            }
            Some(Action::Restart) => {
                let seed = run_seed(self.settings.seed);
                if self.session.restart(seed, js_sys::Date::now()) {
                    log::info!("Restarted with seed: {}", seed);
                }
            }
            None => {}
        }
    }

    fn frame(&mut self) {
        if self.session.on_frame(js_sys::Date::now()).is_some() {
            if let Some(frame) = self.session.frame_view() {
                self.renderer.render(&frame);
            }
        }
    }
}

#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
    log::info!("Snowboarder starting...");

    if let Err(e) = run() {
        log::error!("Startup failed: {:?}", e);
    }
}

fn run() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id("canvas")
        .ok_or("missing #canvas element")?
        .dyn_into()?;

    let width = window.inner_width()?.as_f64().unwrap_or(800.0);
    let height = window.inner_height()?.as_f64().unwrap_or(600.0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or("2d context unavailable")?
        .dyn_into()?;

    let settings = Settings::load();
    let bounds = WorldBounds::new(width as f32, height as f32);
    let renderer = CanvasRenderer::new(
        ctx,
        "",
        settings.show_instructions,
        settings.debug_hitboxes,
    );

    let mut session = Session::new(bounds, &settings);
    let seed = run_seed(settings.seed);
    session.start(seed, js_sys::Date::now());

    let app = Rc::new(RefCell::new(App {
        session,
        renderer,
        input: InputMapper::new(),
        settings,
    }));

    // Draw the opening frame before the first tick
    {
        let mut app = app.borrow_mut();
        if let Some(frame) = app.session.frame_view() {
            app.renderer.render(&frame);
        }
    }

    setup_input_handlers(&document, app.clone())?;
    request_animation_frame(app);

    log::info!("Snowboarder running!");
    Ok(())
}

fn setup_input_handlers(document: &web_sys::Document, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
    {
        let app = app.clone();
        let on_key_down = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            app.borrow_mut().handle_key_down(&event.code());
        });
        document.add_event_listener_with_callback("keydown", on_key_down.as_ref().unchecked_ref())?;
        on_key_down.forget();
    }

    {
        let app = app.clone();
        let on_key_up = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            app.borrow_mut().input.release(&event.code());
        });
        document.add_event_listener_with_callback("keyup", on_key_up.as_ref().unchecked_ref())?;
        on_key_up.forget();
    }

    // Keyups are lost while the page is unfocused
    if let Some(window) = web_sys::window() {
        let on_blur = Closure::<dyn FnMut()>::new(move || {
            app.borrow_mut().input.clear();
        });
        window.add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref())?;
        on_blur.forget();
    }

    Ok(())
}

fn request_animation_frame(app: Rc<RefCell<App>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |_time: f64| {
        game_loop(app);
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}

fn game_loop(app: Rc<RefCell<App>>) {
    app.borrow_mut().frame();
    request_animation_frame(app);
}
