/// Scalar type used for all positions, angles and dimensions.
pub type Float = f32;
