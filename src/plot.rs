use log::info;
use na::vector;
use ordered_float::OrderedFloat;
use plotters::prelude::*;

use crate::geometry::{BodyDimensions, ShapePlacement};
use crate::types::Float;

/// y-axis limits based on the minimum and maximum values in the data
fn series_bounds(data: &[Float]) -> (Float, Float) {
    let min = data.iter().copied().map(OrderedFloat).min();
    let max = data.iter().copied().map(OrderedFloat).max();
    (
        min.map(|v| v.0).unwrap_or(0.0),
        max.map(|v| v.0).unwrap_or(1.0),
    )
}

fn draw_series_on<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    data: &[Float],
    caption: &str,
) {
    let (min_y, max_y) = series_bounds(data);

    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", 20))
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(0.0..data.len() as Float, min_y..max_y)
        .unwrap();

    let _ = chart.configure_mesh().draw();

    let _ = chart.draw_series(LineSeries::new(
        data.iter().enumerate().map(|(i, y)| (i as Float, *y)),
        &BLUE,
    ));
}

/// Plot a single series against frame index, into `<name>.png`.
pub fn plot(data: &[Float], name: &str) {
    let filename = format!("{}.png", name);
    let root = BitMapBackend::new(&filename, (640, 480)).into_drawing_area();
    let _ = root.fill(&WHITE);

    draw_series_on(&root, data, &format!("{} vs. frame", name));

    info!("wrote {}", filename);
}

/// Plot the cart position and pendulum angle series stacked in one image,
/// into `<name>.png`.
pub fn plot2(cart_positions: &[Float], pendulum_angles: &[Float], name: &str) {
    let filename = format!("{}.png", name);
    let root = BitMapBackend::new(&filename, (640, 720)).into_drawing_area();
    let _ = root.fill(&WHITE);

    let areas = root.split_evenly((2, 1));
    draw_series_on(&areas[0], cart_positions, "cart position vs. frame");
    draw_series_on(&areas[1], pendulum_angles, "pendulum angle vs. frame");

    info!("wrote {}", filename);
}

const FRAME_SIZE_PX: u32 = 600;

/// Draw one frame of the animation into `<name>.png`: the cart rectangle,
/// the bob circle and the rod segment, on a square viewport spanning
/// (-extent, extent) on both axes so the geometry keeps its aspect ratio.
pub fn draw_frame(placement: &ShapePlacement, dims: &BodyDimensions, extent: Float, name: &str) {
    let filename = format!("{}.png", name);
    let root = BitMapBackend::new(&filename, (FRAME_SIZE_PX, FRAME_SIZE_PX)).into_drawing_area();
    let _ = root.fill(&WHITE);

    let mut chart = ChartBuilder::on(&root)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(-extent..extent, -extent..extent)
        .unwrap();

    let _ = chart.configure_mesh().draw();

    let rect_corner = placement.rect_origin + vector![dims.cart_width, dims.cart_height];
    let _ = chart.draw_series(std::iter::once(Rectangle::new(
        [
            (placement.rect_origin.x, placement.rect_origin.y),
            (rect_corner.x, rect_corner.y),
        ],
        GREEN.filled(),
    )));

    let _ = chart.draw_series(std::iter::once(PathElement::new(
        vec![
            (placement.rod_start.x, placement.rod_start.y),
            (placement.rod_end.x, placement.rod_end.y),
        ],
        BLUE.stroke_width(dims.rod_stroke_width.round() as u32),
    )));

    // Circle glyphs are sized in pixels, so convert the bob radius from
    // world units at the current viewport scale
    let bob_radius_px =
        ((dims.bob_radius / (2.0 * extent)) * FRAME_SIZE_PX as Float).max(2.0) as i32;
    let _ = chart.draw_series(std::iter::once(Circle::new(
        (placement.bob_center.x, placement.bob_center.y),
        bob_radius_px,
        BLUE.filled(),
    )));

    info!("wrote {}", filename);
}
