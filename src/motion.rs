pub const MAGNETIC_PULL: f64 = 0.15;

const STACK_KEYS: [f64; 4] = [0.0, 0.2, 0.8, 1.0];
const LAYER_KEYS: [f64; 3] = [0.0, 0.8, 1.0];

pub const CURSOR_DOT: Follower = Follower {
    size_px: 12.0,
    engaged_scale: 1.5,
};
pub const CURSOR_RING: Follower = Follower {
    size_px: 32.0,
    engaged_scale: 1.2,
};

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Transform2D {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Transform2D {
    pub fn css(self) -> String {
        format!("translate({:.2}px, {:.2}px) scale({})", self.x, self.y, self.scale)
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Follower {
    pub size_px: f64,
    pub engaged_scale: f64,
}

impl Follower {
    pub fn transform(self, x: f64, y: f64, engaged: bool) -> Transform2D {
        let half = self.size_px / 2.0;
        let scale = if engaged { self.engaged_scale } else { 1.0 };
        Transform2D {
            x: x - half,
            y: y - half,
            scale,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct StackParams {
    pub offset_px: f64,
    pub scale: f64,
    pub opacity: f64,
    pub layer: i32,
}

pub fn interpolate(p: f64, keys: &[f64], values: &[f64]) -> f64 {
    if keys.is_empty() || keys.len() != values.len() {
        return 0.0;
    }
    if p <= keys[0] {
        return values[0];
    }

    for segment in 0..keys.len() - 1 {
        let (lo, hi) = (keys[segment], keys[segment + 1]);
        if p <= hi {
            let span = hi - lo;
            if span <= f64::EPSILON {
                return values[segment + 1];
            }
            let t = (p - lo) / span;
            return values[segment] + (values[segment + 1] - values[segment]) * t;
        }
    }

    values[values.len() - 1]
}

pub fn scroll_progress(slot_top: f64, slot_height: f64, viewport_height: f64) -> f64 {
    let travel = viewport_height + slot_height;
    if travel <= 0.0 {
        return 0.0;
    }
    ((viewport_height - slot_top) / travel).clamp(0.0, 1.0)
}

pub fn stack_params(p: f64, index: usize, total: usize) -> StackParams {
    let depth = index as f64;
    let offset_px = interpolate(p, &STACK_KEYS, &[100.0, 0.0, 0.0, -15.0 * depth]);
    let scale = interpolate(p, &STACK_KEYS, &[0.9, 1.0, 1.0, 0.95 - 0.02 * depth]);
    let opacity = interpolate(p, &STACK_KEYS, &[0.0, 1.0, 1.0, 0.8]);
    let layer = interpolate(
        p,
        &LAYER_KEYS,
        &[depth + 1.0, depth + 1.0, (total + index) as f64],
    )
    .round() as i32;

    StackParams {
        offset_px,
        scale,
        opacity,
        layer,
    }
}

pub fn magnetic_shift(dx: f64, dy: f64) -> (f64, f64) {
    (dx * MAGNETIC_PULL, dy * MAGNETIC_PULL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn interpolate_clamps_below_the_first_key() {
        assert!(close(interpolate(-0.5, &STACK_KEYS, &[100.0, 0.0, 0.0, -15.0]), 100.0));
        assert!(close(interpolate(-100.0, &[0.0, 1.0], &[3.0, 7.0]), 3.0));
    }

    #[test]
    fn interpolate_clamps_above_the_last_key() {
        assert!(close(interpolate(1.5, &STACK_KEYS, &[100.0, 0.0, 0.0, -15.0]), -15.0));
        assert!(close(interpolate(42.0, &[0.0, 1.0], &[3.0, 7.0]), 7.0));
    }

    #[test]
    fn interpolate_is_linear_between_keys() {
        assert!(close(interpolate(0.1, &STACK_KEYS, &[100.0, 0.0, 0.0, 0.0]), 50.0));
        assert!(close(interpolate(0.9, &STACK_KEYS, &[0.0, 0.0, 0.0, -15.0]), -7.5));
        assert!(close(interpolate(0.5, &[0.0, 1.0], &[0.0, 10.0]), 5.0));
    }

    #[test]
    fn interpolate_holds_plateau_values() {
        for p in [0.2, 0.4, 0.6, 0.8] {
            assert!(close(interpolate(p, &STACK_KEYS, &[0.9, 1.0, 1.0, 0.93]), 1.0));
        }
    }

    #[test]
    fn interpolate_rejects_mismatched_tables() {
        assert!(close(interpolate(0.5, &[0.0, 1.0], &[1.0]), 0.0));
        assert!(close(interpolate(0.5, &[], &[]), 0.0));
    }

    #[test]
    fn stack_params_at_entry() {
        let params = stack_params(0.0, 0, 4);
        assert!(close(params.offset_px, 100.0));
        assert!(close(params.scale, 0.9));
        assert!(close(params.opacity, 0.0));
        assert_eq!(params.layer, 1);
    }

    #[test]
    fn stack_params_on_the_plateau() {
        let params = stack_params(0.5, 2, 4);
        assert!(close(params.offset_px, 0.0));
        assert!(close(params.scale, 1.0));
        assert!(close(params.opacity, 1.0));
        assert_eq!(params.layer, 3);
    }

    #[test]
    fn stack_params_at_exit_sink_by_index() {
        let params = stack_params(1.0, 2, 4);
        assert!(close(params.offset_px, -30.0));
        assert!(close(params.scale, 0.91));
        assert!(close(params.opacity, 0.8));
        assert_eq!(params.layer, 6);
    }

    #[test]
    fn stack_params_clamp_outside_the_unit_range() {
        assert_eq!(stack_params(-3.0, 1, 4), stack_params(0.0, 1, 4));
        assert_eq!(stack_params(9.0, 1, 4), stack_params(1.0, 1, 4));
    }

    #[test]
    fn scroll_progress_spans_enter_to_exit() {
        assert!(close(scroll_progress(800.0, 600.0, 800.0), 0.0));
        assert!(close(scroll_progress(-600.0, 600.0, 800.0), 1.0));
        assert!(close(scroll_progress(100.0, 600.0, 800.0), 0.5));
    }

    #[test]
    fn scroll_progress_clamps_beyond_the_travel() {
        assert!(close(scroll_progress(2000.0, 600.0, 800.0), 0.0));
        assert!(close(scroll_progress(-2000.0, 600.0, 800.0), 1.0));
        assert!(close(scroll_progress(0.0, 0.0, 0.0), 0.0));
    }

    #[test]
    fn magnetic_shift_damps_both_axes() {
        let (x, y) = magnetic_shift(40.0, -20.0);
        assert!(close(x, 6.0));
        assert!(close(y, -3.0));
        assert_eq!(magnetic_shift(0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn followers_center_on_the_pointer() {
        let dot = CURSOR_DOT.transform(100.0, 60.0, false);
        assert!(close(dot.x, 94.0));
        assert!(close(dot.y, 54.0));
        assert!(close(dot.scale, 1.0));

        let ring = CURSOR_RING.transform(100.0, 60.0, true);
        assert!(close(ring.x, 84.0));
        assert!(close(ring.y, 44.0));
        assert!(close(ring.scale, 1.2));

        assert!(close(CURSOR_DOT.transform(0.0, 0.0, true).scale, 1.5));
    }

    #[test]
    fn transform_css_renders_translate_then_scale() {
        let css = Transform2D { x: 94.0, y: 54.0, scale: 1.5 }.css();
        assert_eq!(css, "translate(94.00px, 54.00px) scale(1.5)");
        let resting = Transform2D { x: -6.0, y: -6.0, scale: 1.0 }.css();
        assert_eq!(resting, "translate(-6.00px, -6.00px) scale(1)");
    }
}
