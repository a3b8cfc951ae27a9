//! Bouncing Ball entry point
//!
//! On the web: hosts the widget in a canvas and drives it from
//! requestAnimationFrame. Natively: runs a headless scripted session and logs
//! the ball's motion.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_host {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, PointerEvent};

    use bouncing_ball::input::{PointerAction, command_for_key, command_for_pointer};
    use bouncing_ball::renderer::RenderState;
    use bouncing_ball::sim::Surface;
    use bouncing_ball::{BouncingBall, Settings};

    /// Host instance holding the widget and its renderer
    struct Host {
        widget: BouncingBall,
        render_state: Option<RenderState>,
        last_time: f64,
    }

    impl Host {
        fn new(widget: BouncingBall) -> Self {
            Self {
                widget,
                render_state: None,
                last_time: 0.0,
            }
        }

        fn frame(&mut self, time: f64) {
            let elapsed = if self.last_time > 0.0 {
                ((time - self.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            self.last_time = time;

            self.widget.advance(elapsed);

            if let Some(ref mut render_state) = self.render_state {
                match render_state.render_widget(&self.widget) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        let pane = render_state.pane;
                        render_state.resize(render_state.size.0, render_state.size.1, pane);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }
    }

    fn set_rate_label(rate: f32) {
        let document = web_sys::window().and_then(|w| w.document());
        if let Some(el) = document.and_then(|d| d.get_element_by_id("rate-value")) {
            el.set_text_content(Some(&format!("{:.1}x", rate)));
        }
    }

    /// Canvas layout size and backing-store size for the current device pixel ratio
    fn canvas_sizes(canvas: &HtmlCanvasElement, dpr: f64) -> ((f32, f32), (u32, u32)) {
        let client_w = canvas.client_width();
        let client_h = canvas.client_height();
        let pane = (client_w as f32, client_h as f32);
        let physical = ((client_w as f64 * dpr) as u32, (client_h as f64 * dpr) as u32);
        (pane, physical)
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Bouncing Ball starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let dpr = window.device_pixel_ratio();
        let (pane, (width, height)) = canvas_sizes(&canvas, dpr);
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        let mut widget = BouncingBall::new(&settings, Surface::new(pane.0, pane.1));
        set_rate_label(widget.rate());
        {
            // Remember the last speed for the next visit
            let mut saved = settings.clone();
            widget.on_rate_changed(move |rate| {
                set_rate_label(rate);
                saved.initial_rate = rate;
                saved.save();
            });
        }

        let host = Rc::new(RefCell::new(Host::new(widget)));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, width, height, pane).await {
            Ok(mut render_state) => {
                render_state.background = settings.background_color;
                host.borrow_mut().render_state = Some(render_state);
            }
            Err(e) => log::error!("Failed to create device: {}", e),
        }

        setup_buttons(host.clone());
        setup_input_handlers(&canvas, host.clone());
        setup_resize(canvas.clone(), host.clone());
        setup_auto_pause(host.clone());

        request_animation_frame(host);

        log::info!("Bouncing Ball running!");
    }

    fn on_click(id: &str, host: Rc<RefCell<Host>>, action: fn(&mut BouncingBall)) {
        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(btn) = document.get_element_by_id(id) {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                action(&mut host.borrow_mut().widget);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(host: Rc<RefCell<Host>>) {
        on_click("play-btn", host.clone(), BouncingBall::play);
        on_click("pause-btn", host.clone(), BouncingBall::pause);
        on_click("faster-btn", host.clone(), BouncingBall::increase_speed);
        on_click("slower-btn", host, BouncingBall::decrease_speed);
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, host: Rc<RefCell<Host>>) {
        // Hold to pause, release to resume
        for (event, action) in [
            ("pointerdown", PointerAction::Pressed),
            ("pointerup", PointerAction::Released),
        ] {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                host.borrow_mut().widget.apply(command_for_pointer(action));
            });
            let _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(command) = command_for_key(event.key().as_str()) {
                    event.prevent_default();
                    host.borrow_mut().widget.apply(command);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize(canvas: HtmlCanvasElement, host: Rc<RefCell<Host>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let dpr = web_sys::window()
                .map(|w| w.device_pixel_ratio())
                .unwrap_or(1.0);
            let (pane, (width, height)) = canvas_sizes(&canvas, dpr);
            canvas.set_width(width);
            canvas.set_height(height);

            let mut h = host.borrow_mut();
            h.widget.resize(pane.0, pane.1);
            if let Some(ref mut render_state) = h.render_state {
                render_state.resize(width, height, pane);
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_auto_pause(host: Rc<RefCell<Host>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                let mut h = host.borrow_mut();
                if h.widget.is_running() {
                    h.widget.pause();
                    log::info!("Auto-paused (tab hidden)");
                }
            } else {
                // Don't count the hidden time as one huge frame
                host.borrow_mut().last_time = 0.0;
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(host: Rc<RefCell<Host>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            host.borrow_mut().frame(time);
            request_animation_frame(host);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_host::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Bouncing Ball (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    let settings = match std::env::args().nth(1) {
        Some(path) => {
            let path = std::path::Path::new(&path);
            if path.exists() {
                bouncing_ball::Settings::load_from(path)
            } else {
                // Write a template the user can edit for the next run
                let settings = bouncing_ball::Settings::default();
                if let Err(e) = settings.save_to(path) {
                    log::warn!("Cannot write settings {}: {}", path.display(), e);
                }
                settings
            }
        }
        None => bouncing_ball::Settings::default(),
    };

    run_headless(&settings);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scripted session: 60 Hz frames with speed changes and a pause in the middle
#[cfg(not(target_arch = "wasm32"))]
fn run_headless(settings: &bouncing_ball::Settings) {
    use bouncing_ball::BouncingBall;
    use bouncing_ball::sim::Surface;

    const FRAME_DT: f32 = 1.0 / 60.0;
    const FRAMES: u32 = 60 * 12;

    let mut widget = BouncingBall::new(settings, Surface::new(300.0, 200.0));
    widget.on_rate_changed(|rate| log::info!("rate now {:.1}x", rate));

    let mut ticks = 0;
    for frame in 0..FRAMES {
        let second = frame / 60;
        if frame % 60 == 0 {
            match second {
                2 | 3 => widget.increase_speed(),
                5 => widget.pause(),
                7 => widget.play(),
                9 => {
                    for _ in 0..3 {
                        widget.decrease_speed();
                    }
                }
                _ => {}
            }
            let ball = widget.ball();
            log::info!(
                "t={:>2}s {:?} pos=({:.1}, {:.1}) vel=({}, {})",
                second,
                widget.status(),
                ball.pos.x,
                ball.pos.y,
                ball.vel.x,
                ball.vel.y
            );
        }
        ticks += widget.advance(FRAME_DT);
    }

    log::info!("{} ticks in {} frames", ticks, FRAMES);
    match serde_json::to_string(widget.ball()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Cannot serialize ball: {}", e),
    }
}
