use wasm_bindgen::prelude::*;
use web_sys::js_sys;

use crate::geometry::{BodyDimensions, ShapePlacement};
use crate::playback::CartPendulumAnimation;
use crate::types::Float;
use crate::util::status_log;

/// WebAssembly interface to the CartPendulumAnimation struct.
///
/// The JS host owns the animation loop: it registers shapes from
/// `initialize()`, then calls `advance(i)` once per frame for
/// `i in 0..sampleCount()`, mapping the returned coordinates onto its own
/// canvas primitives.
#[wasm_bindgen]
pub struct InterfaceCartPendulumAnimation(pub(crate) CartPendulumAnimation);

/// Flatten a placement into the layout the JS side expects:
/// [rect_x, rect_y, bob_x, bob_y, rod_x0, rod_y0, rod_x1, rod_y1]
fn placement_to_js(placement: &ShapePlacement) -> js_sys::Float32Array {
    let coords = [
        placement.rect_origin.x,
        placement.rect_origin.y,
        placement.bob_center.x,
        placement.bob_center.y,
        placement.rod_start.x,
        placement.rod_start.y,
        placement.rod_end.x,
        placement.rod_end.y,
    ];

    let out = js_sys::Float32Array::new_with_length(coords.len() as u32);
    for (i, v) in coords.iter().enumerate() {
        out.set_index(i as u32, *v);
    }

    out
}

#[wasm_bindgen]
impl InterfaceCartPendulumAnimation {
    #[wasm_bindgen]
    pub fn initialize(&mut self) -> js_sys::Float32Array {
        placement_to_js(&self.0.initialize())
    }

    #[wasm_bindgen]
    pub fn advance(&self, frame_index: usize) -> js_sys::Float32Array {
        placement_to_js(&self.0.advance(frame_index))
    }

    #[wasm_bindgen]
    pub fn sampleCount(&self) -> usize {
        self.0.sample_count()
    }

    #[wasm_bindgen]
    pub fn bobRadius(&self) -> Float {
        self.0.dims().bob_radius
    }

    #[wasm_bindgen]
    pub fn rodStrokeWidth(&self) -> Float {
        self.0.dims().rod_stroke_width
    }
}

#[wasm_bindgen]
pub fn createCartPendulumAnimation(
    cart_positions: &js_sys::Float32Array,
    pendulum_angles: &js_sys::Float32Array,
    bob_radius: Float,
    cart_width: Float,
    cart_height: Float,
    rod_length: Float,
    rod_stroke_width: Float,
) -> InterfaceCartPendulumAnimation {
    console_error_panic_hook::set_once();

    let dims = BodyDimensions {
        bob_radius,
        cart_width,
        cart_height,
        rod_length,
        rod_stroke_width,
    };
    let animation = CartPendulumAnimation::new(
        cart_positions.to_vec(),
        pendulum_angles.to_vec(),
        dims,
    );
    status_log(&format!(
        "cart-pendulum animation ready, {} frames",
        animation.sample_count()
    ));

    InterfaceCartPendulumAnimation(animation)
}
