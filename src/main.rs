//! Gap Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, TouchEvent};

    use gap_runner::platform::Action;
    use gap_runner::renderer::{DrawCommand, Renderer};
    use gap_runner::{GameLoop, LoopControl, Tuning};

    /// Executes draw commands on a Canvas 2D context
    struct CanvasRenderer {
        ctx: CanvasRenderingContext2d,
    }

    impl Renderer for CanvasRenderer {
        fn draw(&mut self, command: &DrawCommand) {
            let ctx = &self.ctx;
            match command {
                DrawCommand::Clear { width, height } => {
                    ctx.clear_rect(0.0, 0.0, *width as f64, *height as f64);
                }
                DrawCommand::FillRect { rect, color } => {
                    ctx.set_fill_style_str(color);
                    ctx.fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
                }
                DrawCommand::Text {
                    text,
                    x,
                    y,
                    color,
                    font,
                } => {
                    ctx.set_fill_style_str(color);
                    ctx.set_font(font);
                    if let Err(e) = ctx.fill_text(text, *x as f64, *y as f64) {
                        log::warn!("fill_text failed: {:?}", e);
                    }
                }
            }
        }
    }

    /// Game instance holding all state
    struct Game {
        game_loop: GameLoop,
        renderer: CanvasRenderer,
    }

    type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

    fn request_animation_frame(callback: &FrameCallback) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(closure) = callback.borrow().as_ref() {
            if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
                log::error!("requestAnimationFrame failed: {:?}", e);
            }
        }
    }

    /// Tuning from `?tuning=<json>`, falling back to defaults
    fn load_tuning() -> Tuning {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let Some(raw) = search
            .trim_start_matches('?')
            .split('&')
            .find_map(|pair| pair.strip_prefix("tuning="))
        else {
            return Tuning::default();
        };
        let json = js_sys::decode_uri_component(raw)
            .map(String::from)
            .unwrap_or_else(|_| raw.to_string());
        match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from URL");
                tuning
            }
            Err(e) => {
                log::warn!("{}; using default tuning", e);
                Tuning::default()
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas1")
            .expect("canvas1 missing")
            .dyn_into()
            .expect("canvas1 is not a canvas");

        let tuning = load_tuning();
        canvas.set_width(tuning.canvas_width as u32);
        canvas.set_height(tuning.canvas_height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("2d context unavailable")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        log::info!("Gap Runner starting with seed {}", seed);

        let game = Rc::new(RefCell::new(Game {
            game_loop: GameLoop::new(tuning, seed),
            renderer: CanvasRenderer { ctx },
        }));

        let callback: FrameCallback = Rc::new(RefCell::new(None));
        {
            let game = game.clone();
            let next = callback.clone();
            *callback.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
                let control = {
                    let mut g = game.borrow_mut();
                    let Game {
                        game_loop,
                        renderer,
                    } = &mut *g;
                    game_loop.frame(timestamp, renderer).0
                };
                if control == LoopControl::Continue {
                    request_animation_frame(&next);
                }
            }));
        }

        setup_input(game, callback.clone());
        request_animation_frame(&callback);
    }

    /// Restart if one is pending, re-entering the frame loop
    fn try_restart(game: &Rc<RefCell<Game>>, callback: &FrameCallback) {
        let restarted = game.borrow_mut().game_loop.poll_restart();
        if restarted {
            request_animation_frame(callback);
        }
    }

    fn setup_input(game: Rc<RefCell<Game>>, callback: FrameCallback) {
        let window = web_sys::window().expect("no window");

        {
            let game = game.clone();
            let callback = callback.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(action) = Action::from_key(&event.key()) {
                    game.borrow_mut().game_loop.press(action);
                    if action == Action::Restart {
                        try_restart(&game, &callback);
                    }
                }
            });
            let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(action) = Action::from_key(&event.key()) {
                    game.borrow_mut().game_loop.release(action);
                }
            });
            let _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let game = game.clone();
            let callback = callback.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                game.borrow_mut().game_loop.touch_start();
                try_restart(&game, &callback);
            });
            let _ = window.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                game.borrow_mut().game_loop.touch_end();
            });
            let _ = window.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use gap_runner::consts::FRAME_MS;
    use gap_runner::platform::Action;
    use gap_runner::renderer::RecordingRenderer;
    use gap_runner::sim::{GameEvent, autopilot};
    use gap_runner::{GameLoop, LoopControl, Tuning};

    env_logger::init();
    log::info!("Gap Runner (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - run with `trunk serve` for web version");

    let tuning = match std::env::var("GAP_RUNNER_TUNING") {
        Ok(json) => Tuning::from_json(&json).unwrap_or_else(|e| {
            log::warn!("{}; using default tuning", e);
            Tuning::default()
        }),
        Err(_) => Tuning::default(),
    };
    let seed = std::env::var("GAP_RUNNER_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    let mut game = GameLoop::new(tuning, seed);
    let mut renderer = RecordingRenderer::new();
    let runs = 3;
    // Cap each run at ten simulated minutes
    let max_frames = 36_000;

    for run in 1..=runs {
        let mut t = 0.0_f64;
        for _ in 0..max_frames {
            if autopilot(&game.session).jump {
                game.press(Action::Jump);
            }
            renderer.clear();
            let (control, events) = game.frame(t, &mut renderer);
            game.release(Action::Jump);
            for event in events {
                if let GameEvent::Scored { score } = event {
                    log::debug!("Run {} scored {}", run, score);
                }
            }
            if control == LoopControl::Stop {
                break;
            }
            t += FRAME_MS as f64;
        }
        println!(
            "Run {}: score {} (high score {})",
            run,
            game.session.score,
            game.session.high_score.best()
        );

        game.press(Action::Restart);
        if !game.poll_restart() {
            log::info!("Run {} hit the frame cap; stopping", run);
            break;
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
