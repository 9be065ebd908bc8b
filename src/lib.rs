#![allow(non_snake_case)]

use types::Float;
pub extern crate nalgebra as na;

pub mod geometry;
pub mod playback;
pub mod plot;
pub mod trajectory;
pub mod types;
pub mod util;

// Wasm bindings
pub mod interface;

pub const PI: Float = std::f32::consts::PI;
