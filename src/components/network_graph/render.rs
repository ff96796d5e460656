use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::pipeline::DrawCommand;
use super::state::ChartState;

pub fn render(state: &ChartState, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	for command in state.frame().commands() {
		paint(ctx, &command);
	}
	ctx.restore();
}

fn paint(ctx: &CanvasRenderingContext2d, command: &DrawCommand) {
	match command {
		DrawCommand::Line {
			from,
			to,
			color,
			width,
			alpha,
		} => {
			ctx.set_global_alpha(*alpha);
			ctx.begin_path();
			ctx.move_to(from.x, from.y);
			ctx.line_to(to.x, to.y);
			ctx.set_line_width(*width);
			ctx.set_stroke_style_str(color);
			ctx.stroke();
		}
		DrawCommand::Circle {
			center,
			radius,
			fill,
			stroke,
			stroke_width,
			alpha,
		} => {
			ctx.set_global_alpha(*alpha);
			ctx.begin_path();
			ctx.move_to(center.x + radius, center.y);
			let _ = ctx.arc(center.x, center.y, *radius, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(stroke);
			ctx.set_line_width(*stroke_width);
			ctx.stroke();
			ctx.set_fill_style_str(fill);
			ctx.fill();
		}
	}
	ctx.set_global_alpha(1.0);
}
