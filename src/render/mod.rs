//! Canvas2D rendering module
//!
//! Draws the post-tick snapshot and nothing else: the renderer holds no
//! simulation state and never mutates `GameState`. Geometry and color
//! decisions live in `shapes` so they stay testable off the browser.

pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::draw_frame;

#[cfg(target_arch = "wasm32")]
mod canvas {
    use wasm_bindgen::JsValue;
    use web_sys::CanvasRenderingContext2d;

    use super::shapes::*;
    use crate::sim::GameState;

    /// Paint one frame of the given snapshot onto a 2D context.
    pub fn draw_frame(ctx: &CanvasRenderingContext2d, state: &GameState) -> Result<(), JsValue> {
        let w = state.surface_width as f64;
        let h = state.surface_height as f64;
        let speed = state.base_speed * state.battery.speed_multiplier();

        // Background
        ctx.set_shadow_blur(0.0);
        ctx.set_fill_style_str(BG_COLOR);
        ctx.fill_rect(0.0, 0.0, w, h);

        // Scrolling retro grid
        ctx.set_stroke_style_str(GRID_COLOR);
        ctx.set_line_width(1.0);
        let offset = grid_offset(state.tick_count, speed) as f64;
        let grid = GRID_SIZE as f64;
        let mut y = offset;
        while y < h {
            ctx.begin_path();
            ctx.move_to(0.0, y);
            ctx.line_to(w, y);
            ctx.stroke();
            y += grid;
        }
        let mut x = 0.0;
        while x < w {
            ctx.begin_path();
            ctx.move_to(x, 0.0);
            ctx.line_to(x, h);
            ctx.stroke();
            x += grid;
        }

        // Ship
        let color = player_color(state.battery.slowing);
        ctx.set_fill_style_str(color);
        ctx.set_shadow_blur(20.0);
        ctx.set_shadow_color(color);
        let outline = ship_outline(&state.player);
        ctx.begin_path();
        ctx.move_to(outline[0].x as f64, outline[0].y as f64);
        for p in &outline[1..] {
            ctx.line_to(p.x as f64, p.y as f64);
        }
        ctx.close_path();
        ctx.fill();

        // Obstacles
        for obstacle in &state.obstacles {
            let color = obstacle_color(obstacle.hue);
            ctx.set_fill_style_str(&color);
            ctx.set_shadow_blur(10.0);
            ctx.set_shadow_color(&color);
            ctx.fill_rect(
                obstacle.rect.pos.x as f64,
                obstacle.rect.pos.y as f64,
                obstacle.rect.size.x as f64,
                obstacle.rect.size.y as f64,
            );
        }

        // Time-warp vignette
        if state.battery.slowing {
            ctx.set_shadow_blur(0.0);
            let gradient =
                ctx.create_radial_gradient(w / 2.0, h / 2.0, h / 3.0, w / 2.0, h / 2.0, h)?;
            gradient.add_color_stop(0.0, "transparent")?;
            gradient.add_color_stop(1.0, VIGNETTE_COLOR)?;
            ctx.set_fill_style_canvas_gradient(&gradient);
            ctx.fill_rect(0.0, 0.0, w, h);
        }

        Ok(())
    }
}
