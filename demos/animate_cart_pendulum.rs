use std::fs;

use cart_pendulum_viz::geometry::BodyDimensions;
use cart_pendulum_viz::playback::CartPendulumAnimation;
use cart_pendulum_viz::plot::draw_frame;
use cart_pendulum_viz::trajectory::read_trajectories;
use log::info;
use ordered_float::OrderedFloat;

/// Play back a recorded cart-pendulum run and write scene snapshots.
///
/// Reads `data.txt` from the working directory if present, otherwise the
/// bundled sample run.
pub fn main() {
    env_logger::init();

    let content = fs::read_to_string("data.txt")
        .unwrap_or_else(|_| include_str!("../data/sample_trajectory.txt").to_string());
    let (cart_positions, pendulum_angles) = read_trajectories(&content);

    let mut animation =
        CartPendulumAnimation::new(cart_positions, pendulum_angles, BodyDimensions::default());
    let _ = animation.initialize();
    info!("playing back {} frames", animation.sample_count());

    // Fixed square viewport over the whole run, widened if the motion leaves
    // the default window
    let dims = *animation.dims();
    let farthest = animation
        .placements()
        .iter()
        .flat_map(|placement| {
            [
                placement.rect_origin.x.abs(),
                (placement.rect_origin.x + dims.cart_width).abs(),
                placement.bob_center.x.abs(),
                placement.bob_center.y.abs(),
            ]
        })
        .map(OrderedFloat)
        .max()
        .map(|v| v.0)
        .unwrap_or(0.0);
    let extent = farthest.max(2.0);

    let snapshot_every = (animation.sample_count() / 8).max(1);
    for frame_index in (0..animation.sample_count()).step_by(snapshot_every) {
        let placement = animation.advance(frame_index);
        draw_frame(
            &placement,
            animation.dims(),
            extent,
            &format!("cart_pendulum_frame_{:04}", frame_index),
        );
    }
}
