use na::{vector, Vector2};

use crate::types::Float;

/// Fixed body dimensions of the cart-pendulum assembly.
///
/// `bob_radius` and `rod_stroke_width` are drawing attributes passed through
/// to the renderer; they never enter the placement math.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyDimensions {
    pub bob_radius: Float,
    pub cart_width: Float,
    pub cart_height: Float,
    pub rod_length: Float,
    pub rod_stroke_width: Float,
}

impl Default for BodyDimensions {
    fn default() -> Self {
        BodyDimensions {
            bob_radius: 0.025,
            cart_width: 0.3,
            cart_height: 0.1,
            rod_length: 0.3,
            rod_stroke_width: 2.5,
        }
    }
}

/// Placements of the three shapes making up one frame: cart rectangle
/// origin (lower-left corner), bob circle center, and the rod segment from
/// pivot to bob.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapePlacement {
    pub rect_origin: Vector2<Float>,
    pub bob_center: Vector2<Float>,
    pub rod_start: Vector2<Float>,
    pub rod_end: Vector2<Float>,
}

impl ShapePlacement {
    /// Pre-animation placement with every shape at the origin.
    pub fn zeroed() -> Self {
        ShapePlacement {
            rect_origin: Vector2::zeros(),
            bob_center: Vector2::zeros(),
            rod_start: Vector2::zeros(),
            rod_end: Vector2::zeros(),
        }
    }

    /// Attachment point of the rod on top of the cart.
    pub fn pivot(&self) -> Vector2<Float> {
        self.rod_start
    }
}

/// Map one state sample to shape placements.
///
/// ```text
///               o   bob
///              /
///             /    rod, angle measured from the upward vertical
///         ___/___
///        |_______|  cart
///     -------+---------> x   (pivot line at y = 0)
/// ```
///
/// The cart rectangle is centered on `cart_position` and hangs below the
/// pivot line. The bob sits `rod_length` away from the pivot; a positive
/// angle displaces it toward -x. This sign convention matches the upstream
/// trajectory source and must not be flipped.
pub fn compute_placements(
    cart_position: Float,
    pendulum_angle: Float,
    dims: &BodyDimensions,
) -> ShapePlacement {
    let x_rect = cart_position - dims.cart_width / 2.0;
    let y_rect = 0.0 - dims.cart_height;

    let pivot = vector![x_rect + dims.cart_width / 2.0, y_rect + dims.cart_height];

    let x_bob = pivot.x - pendulum_angle.sin() * dims.rod_length;
    let y_bob = pendulum_angle.cos() * dims.rod_length;
    let bob_center = vector![x_bob, y_bob];

    ShapePlacement {
        rect_origin: vector![x_rect, y_rect],
        bob_center,
        rod_start: pivot,
        rod_end: bob_center,
    }
}

#[cfg(test)]
mod geometry_tests {
    use super::*;
    use crate::assert_close;
    use crate::assert_vec_close;
    use crate::util::test_utils::random_angle;
    use crate::PI;
    use na::vector;

    #[test]
    fn rect_centered_on_cart_position() {
        let dims = BodyDimensions::default();

        for cart_position in [-1.5, -0.2, 0.0, 0.7, 3.0] {
            let placement = compute_placements(cart_position, 0.3, &dims);

            assert_close!(
                placement.rect_origin.x + dims.cart_width / 2.0,
                cart_position,
                1e-6
            );
            assert_close!(placement.rect_origin.y, -dims.cart_height, 1e-6);
        }
    }

    #[test]
    fn bob_above_pivot_at_zero_angle() {
        let dims = BodyDimensions::default();

        let placement = compute_placements(0.4, 0.0, &dims);

        assert_vec_close!(placement.pivot(), vector![0.4, 0.0], 1e-6);
        assert_vec_close!(placement.bob_center, vector![0.4, dims.rod_length], 1e-6);
    }

    #[test]
    fn quarter_turn_swings_bob_to_negative_x() {
        let dims = BodyDimensions::default();

        let placement = compute_placements(0.0, PI / 2.0, &dims);

        assert_vec_close!(placement.bob_center, vector![-dims.rod_length, 0.0], 1e-6);
    }

    #[test]
    fn rod_length_invariant_under_angle() {
        let dims = BodyDimensions::default();
        let mut rng = rand::rng();

        for _ in 0..100 {
            let angle = random_angle(&mut rng, 4.0 * PI);

            let placement = compute_placements(0.3, angle, &dims);

            let rod = placement.bob_center - placement.pivot();
            assert_close!(rod.norm(), dims.rod_length, 1e-5);
        }
    }

    #[test]
    fn rod_connects_pivot_to_bob() {
        let dims = BodyDimensions::default();

        let placement = compute_placements(-0.8, 0.9, &dims);

        assert_eq!(placement.rod_start, placement.pivot());
        assert_eq!(placement.rod_end, placement.bob_center);
    }

    #[test]
    fn non_finite_inputs_flow_through() {
        let dims = BodyDimensions::default();

        let placement = compute_placements(Float::NAN, 0.0, &dims);
        assert!(placement.rect_origin.x.is_nan());
        assert!(placement.bob_center.x.is_nan());

        let placement = compute_placements(0.0, Float::INFINITY, &dims);
        assert!(placement.bob_center.x.is_nan());
        assert!(placement.bob_center.y.is_nan());
        assert_close!(placement.rect_origin.x, -dims.cart_width / 2.0, 1e-6);
    }
}
