//! Chrono Dodge entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlInputElement};

    use chrono_dodge::consts::SIM_DT;
    use chrono_dodge::engine::GameEngine;
    use chrono_dodge::render::draw_frame;
    use chrono_dodge::scores::{Leaderboard, NewScore};

    /// Game instance holding all state
    struct Game {
        engine: GameEngine,
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
        last_time: f64,
        /// Set when the terminal event fires; cleared on restart
        final_score: Option<u32>,
        scores: Leaderboard,
        score_submitted: bool,
    }

    impl Game {
        fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d, seed: u64) -> Self {
            Self {
                engine: GameEngine::new(seed),
                canvas,
                ctx,
                last_time: 0.0,
                final_score: None,
                scores: Leaderboard::load(),
                score_submitted: false,
            }
        }

        /// Size the canvas to its parent and tell the engine
        fn fit_canvas(&mut self) {
            if let Some(parent) = self.canvas.parent_element() {
                let w = parent.client_width().max(1) as u32;
                let h = parent.client_height().max(1) as u32;
                self.canvas.set_width(w);
                self.canvas.set_height(h);
                self.engine.resize(w as f32, h as f32);
            }
        }

        fn surface_size(&self) -> (f32, f32) {
            (self.canvas.width() as f32, self.canvas.height() as f32)
        }

        /// Begin a fresh run
        fn restart(&mut self, seed: u64) {
            self.engine.reseed(seed);
            let (w, h) = self.surface_size();
            self.engine.start(w, h);
            self.final_score = None;
            self.score_submitted = false;
            self.last_time = 0.0;
            log::info!("run restarted with seed {seed}");
        }

        fn render(&self) {
            if let Some(state) = self.engine.state() {
                if let Err(e) = draw_frame(&self.ctx, state) {
                    log::warn!("render error: {e:?}");
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let Some(state) = self.engine.state() else {
                return;
            };

            if let Some(el) = document.get_element_by_id("hud-score") {
                el.set_text_content(Some(&format!("{:06}", state.score)));
            }
            if let Some(el) = document.get_element_by_id("battery-fill") {
                let low = state.battery.charge < 20.0;
                let _ = el.set_attribute(
                    "class",
                    if low { "battery-fill low" } else { "battery-fill" },
                );
                let _ = el.set_attribute("style", &format!("width:{}%", state.battery.charge));
            }
        }

        /// Show the game-over overlay with the final score
        fn show_game_over(&mut self, score: u32) {
            self.final_score = Some(score);
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(el) = document.get_element_by_id("final-score") {
                el.set_text_content(Some(&score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("game-over") {
                let _ = el.set_attribute("class", "");
            }
            if let Some(el) = document.get_element_by_id("submit-error") {
                el.set_text_content(None);
            }
            self.refresh_score_list();
        }

        fn hide_game_over(&self) {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                if let Some(el) = document.get_element_by_id("game-over") {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }

        /// Re-render the ranked leaderboard lines
        fn refresh_score_list(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(el) = document.get_element_by_id("score-list") {
                let lines: Vec<String> = self
                    .scores
                    .top_scores()
                    .iter()
                    .enumerate()
                    .map(|(i, e)| format!("{}. {} - {}", i + 1, e.username, e.score))
                    .collect();
                el.set_text_content(Some(&lines.join("\n")));
            }
        }

        /// Submit the finished run's score. Validation failures surface in
        /// the form and can be retried without replaying.
        fn submit_score(&mut self, username: &str) {
            let Some(score) = self.final_score else {
                return;
            };
            if self.score_submitted {
                return;
            }

            let result = self.scores.create(NewScore {
                username: username.to_owned(),
                score,
            });

            let document = web_sys::window().and_then(|w| w.document());
            match result {
                Ok(entry) => {
                    self.scores.save();
                    self.score_submitted = true;
                    log::info!("score {} saved for {} (id {})", entry.score, entry.username, entry.id);
                    if let Some(doc) = document {
                        if let Some(el) = doc.get_element_by_id("submit-error") {
                            el.set_text_content(None);
                        }
                        if let Some(el) = doc.get_element_by_id("submit-form") {
                            let _ = el.set_attribute("class", "hidden");
                        }
                    }
                    self.refresh_score_list();
                }
                Err(err) => {
                    log::warn!("score rejected: {} ({})", err.message, err.field);
                    if let Some(doc) = document {
                        if let Some(el) = doc.get_element_by_id("submit-error") {
                            el.set_text_content(Some(&err.message));
                        }
                    }
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Chrono Dodge starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("context error")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(canvas, ctx, seed)));

        {
            let mut g = game.borrow_mut();
            g.fit_canvas();
            let (w, h) = g.surface_size();
            g.engine.start(w, h);
        }

        setup_input_handlers(game.clone());
        setup_resize_handler(game.clone());
        setup_restart_button(game.clone());
        setup_submit_button(game.clone());

        request_animation_frame(game);

        log::info!("Chrono Dodge running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if game.borrow_mut().engine.key_event(&event.code(), true) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if game.borrow_mut().engine.key_event(&event.code(), false) {
                    event.prevent_default();
                }
            });
            let _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().fit_canvas();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let seed = js_sys::Date::now() as u64;
                {
                    let mut g = game.borrow_mut();
                    g.restart(seed);
                    g.hide_game_over();
                }
                // The loop stopped scheduling when the run ended; resume it
                request_animation_frame(game.clone());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_submit_button(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(btn) = document.get_element_by_id("submit-score-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let document = web_sys::window().unwrap().document().unwrap();
                let username = document
                    .get_element_by_id("username-input")
                    .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
                    .map(|input| input.value())
                    .unwrap_or_default();
                game.borrow_mut().submit_score(username.trim());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let game_over = {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            let event = g.engine.frame(dt);
            g.render();
            g.update_hud();

            if let Some(over) = event {
                g.show_game_over(over.score);
            }
            event.is_some()
        };

        // Release the scheduler on game over; restart re-enters the loop.
        // No further ticks can land on the finished run.
        if !game_over {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use chrono_dodge::consts::SIM_DT;
    use chrono_dodge::engine::GameEngine;
    use chrono_dodge::Action;

    env_logger::init();
    log::info!("Chrono Dodge (native) starting...");
    log::info!("Native mode is a headless smoke run - use `trunk serve` for the web version");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut engine = GameEngine::new(seed);
    engine.start(600.0, 800.0);

    // Hold slow-time in bursts and drift back and forth so the run exercises
    // the battery and both clamps before an obstacle lands on the ship.
    let mut frames: u64 = 0;
    let final_score = loop {
        frames += 1;
        engine.set_input(Action::SlowTime, frames % 400 < 120);
        engine.set_input(Action::MoveLeft, frames % 240 < 100);
        engine.set_input(Action::MoveRight, frames % 240 >= 140);

        if let Some(over) = engine.frame(SIM_DT) {
            break over.score;
        }
        if frames > 60_000 {
            engine.stop();
            break engine.state().map(|s| s.score).unwrap_or(0);
        }
    };

    println!("Run over after {frames} frames, final score {final_score}");
}
