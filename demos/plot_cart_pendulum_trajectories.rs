use std::fs;

use cart_pendulum_viz::plot::plot2;
use cart_pendulum_viz::trajectory::read_trajectories;
use log::info;

/// Plot the two input series of a recorded cart-pendulum run against frame
/// index.
pub fn main() {
    env_logger::init();

    let content = fs::read_to_string("data.txt")
        .unwrap_or_else(|_| include_str!("../data/sample_trajectory.txt").to_string());
    let (cart_positions, pendulum_angles) = read_trajectories(&content);
    info!(
        "{} cart samples, {} angle samples",
        cart_positions.len(),
        pendulum_angles.len()
    );

    plot2(&cart_positions, &pendulum_angles, "cart_pendulum_trajectories");
}
