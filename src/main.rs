//! Arc Chimes entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use arc_chimes::Settings;
    use arc_chimes::audio::KeyBank;
    use arc_chimes::consts::ARC_COUNT;
    use arc_chimes::renderer::CanvasRenderer;
    use arc_chimes::sim::{self, ImpactScheduler, Layout, SoundGate};

    /// App instance holding all state
    struct App {
        renderer: CanvasRenderer,
        keys: KeyBank,
        gate: SoundGate,
        impacts: ImpactScheduler,
        start_ms: f64,
        running: bool,
    }

    impl App {
        fn new(renderer: CanvasRenderer, keys: KeyBank, start_ms: f64) -> Self {
            Self {
                renderer,
                keys,
                gate: SoundGate::new(),
                impacts: ImpactScheduler::new(start_ms),
                start_ms,
                running: true,
            }
        }

        /// Paint one frame and fire any due key strikes
        fn frame(&mut self, now_ms: f64) {
            let elapsed_secs = ((now_ms - self.start_ms) / 1000.0) as f32;

            let (width, height) = self.renderer.begin_frame();
            let layout = Layout::compute(width, height);

            self.renderer.draw_baseline(&layout, sim::BASELINE_COLOR);

            for index in 0..ARC_COUNT {
                let radius = layout.arc_radius(index);
                self.renderer
                    .draw_arc(layout.center, radius, sim::ARC_COLORS[index]);

                let velocity = sim::angular_velocity(index);
                let angle = sim::dot_angle(elapsed_secs, velocity);
                let pos = sim::dot_position(layout.center, radius, angle);
                self.renderer.draw_dot(pos, layout.dot_radius, sim::DOT_COLOR);

                // The schedule advances whether or not the gate is open
                if self.impacts.check(index, now_ms) && self.gate.is_open() {
                    self.keys.strike(index);
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Arc Chimes starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let settings = Settings::load();
        let renderer = CanvasRenderer::new(canvas).expect("no 2d context");
        let keys = KeyBank::load(ARC_COUNT, settings.effective_volume());

        let start_ms = js_sys::Date::now();
        let app = Rc::new(RefCell::new(App::new(renderer, keys, start_ms)));

        setup_sound_toggle(&document, app.clone());
        setup_visibility_mute(&document, app.clone());
        setup_teardown(&window, app.clone());

        request_animation_frame(app);

        log::info!("Arc Chimes running");
    }

    /// A click anywhere toggles the sound gate
    fn setup_sound_toggle(document: &web_sys::Document, app: Rc<RefCell<App>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let on = app.borrow_mut().gate.toggle();
            log::info!("Sound {}", if on { "on" } else { "off" });
        });
        let _ =
            document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Losing visibility always forces the gate shut
    fn setup_visibility_mute(document: &web_sys::Document, app: Rc<RefCell<App>>) {
        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                app.borrow_mut().gate.force_off();
                log::info!("Sound off (tab hidden)");
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Stop re-arming the loop when the page is going away
    fn setup_teardown(window: &web_sys::Window, app: Rc<RefCell<App>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            app.borrow_mut().running = false;
        });
        let _ =
            window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            frame_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>) {
        {
            let mut a = app.borrow_mut();
            if !a.running {
                return;
            }
            // The scheduling callback passes no usable timestamp for the
            // impact schedule; sample the wall clock so visuals and audio
            // share one timeline
            a.frame(js_sys::Date::now());
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Arc Chimes (native) starting...");
    log::info!("Rendering needs a browser canvas - run with `trunk serve` for the web version");

    println!("\nRunning headless sweep...");
    headless_sweep();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn headless_sweep() {
    use arc_chimes::consts::ARC_COUNT;
    use arc_chimes::sim::{self, ImpactScheduler, Layout};
    use std::f32::consts::{PI, TAU};

    let layout = Layout::compute(1280.0, 720.0);
    assert!(layout.arc_radius(ARC_COUNT - 1) < layout.segment_len / 2.0);

    let mut impacts = ImpactScheduler::new(0.0);
    let mut strikes = [0u32; ARC_COUNT];

    // One full 60-second cycle at 60 fps
    let mut now_ms = 0.0;
    while now_ms <= 60_000.0 {
        for index in 0..ARC_COUNT {
            let angle = sim::dot_angle((now_ms / 1000.0) as f32, sim::angular_velocity(index));
            assert!(
                (PI..=TAU + 1e-4).contains(&angle),
                "dot {index} left the lower half-plane"
            );
            if impacts.check(index, now_ms) {
                strikes[index] += 1;
            }
        }
        now_ms += 1000.0 / 60.0;
    }

    // Arc i crosses the baseline 2(i + 10) times per cycle
    for (index, &count) in strikes.iter().enumerate() {
        let expected = 2 * (index as u32 + 10);
        assert!(
            count.abs_diff(expected) <= 1,
            "arc {index}: {count} strikes, expected ~{expected}"
        );
    }

    println!("✓ {ARC_COUNT} arcs swept one full cycle");
}
