use itertools::izip;

use crate::geometry::{compute_placements, BodyDimensions, ShapePlacement};
use crate::types::Float;

/// Playback of a precomputed cart-pendulum run.
///
/// Owns the two state trajectories and maps frame indices to shape
/// placements. The host animation loop drives it: call [`initialize`] once to
/// register the shapes, then [`advance`] for each frame index in
/// `0..sample_count()`. Stopping or looping at the end of the range is the
/// host's job; this struct holds no frame-to-frame state.
///
/// [`initialize`]: CartPendulumAnimation::initialize
/// [`advance`]: CartPendulumAnimation::advance
pub struct CartPendulumAnimation {
    cart_positions: Vec<Float>,
    pendulum_angles: Vec<Float>,
    dims: BodyDimensions,
    samples: usize,
    initialized: bool,
}

impl CartPendulumAnimation {
    /// `cart_positions` in the same length unit as `dims`, `pendulum_angles`
    /// in radians from the upward vertical. Series of different lengths are
    /// fine; playback ends with the shorter one.
    pub fn new(
        cart_positions: Vec<Float>,
        pendulum_angles: Vec<Float>,
        dims: BodyDimensions,
    ) -> Self {
        let samples = cart_positions.len().min(pendulum_angles.len());
        CartPendulumAnimation {
            cart_positions,
            pendulum_angles,
            dims,
            samples,
            initialized: false,
        }
    }

    /// Number of synchronized frames available for playback.
    pub fn sample_count(&self) -> usize {
        self.samples
    }

    /// Body dimensions, including the pass-through drawing attributes
    /// (`bob_radius`, `rod_stroke_width`) the renderer needs.
    pub fn dims(&self) -> &BodyDimensions {
        &self.dims
    }

    /// One-time setup before the first frame. Returns the pre-animation
    /// placement telling the host which shapes to register for drawing.
    pub fn initialize(&mut self) -> ShapePlacement {
        self.initialized = true;
        ShapePlacement::zeroed()
    }

    /// Placements for the frame at `frame_index`.
    ///
    /// Requires a prior [`initialize`](Self::initialize) and
    /// `frame_index < sample_count()`; both are contract violations that
    /// panic rather than producing garbage.
    pub fn advance(&self, frame_index: usize) -> ShapePlacement {
        assert!(self.initialized, "advance called before initialize");
        assert!(
            frame_index < self.samples,
            "frame index {} out of range, only {} samples",
            frame_index,
            self.samples
        );
        compute_placements(
            self.cart_positions[frame_index],
            self.pendulum_angles[frame_index],
            &self.dims,
        )
    }

    /// Placements for the whole synchronized run, in frame order.
    pub fn placements(&self) -> Vec<ShapePlacement> {
        izip!(&self.cart_positions, &self.pendulum_angles)
            .map(|(cart_position, pendulum_angle)| {
                compute_placements(*cart_position, *pendulum_angle, &self.dims)
            })
            .collect()
    }
}
