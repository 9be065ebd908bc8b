use crate::types::Float;

cfg_if::cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        /// Report a status message to the browser console
        pub fn status_log(message: &str) {
            web_sys::console::log_1(&message.into());
        }
    } else {
        /// Report a status message through the log facade
        pub fn status_log(message: &str) {
            log::info!("{}", message);
        }
    }
}

pub fn assert_close(a: Float, b: Float, tol: Float) {
    assert!((a - b).abs() < tol, "{} != {}", a, b);
}

#[macro_export]
macro_rules! assert_close {
    ($left:expr, $right:expr, $tolerance:expr) => {
        let left = $left;
        let right = $right;
        let tol = $tolerance;
        let diff = (left - right).abs();
        if diff > tol {
            panic!(
                "assertion failed: {} ~= {} \
                (tolerance: {}, difference: {})",
                left, right, tol, diff
            );
        }
    };
}

#[macro_export]
macro_rules! assert_vec_close {
    ($left:expr, $right:expr, $tolerance:expr) => {
        let left = $left;
        let right = $right;
        let tol = $tolerance;
        for (a, b) in left.iter().zip(right.iter()) {
            crate::assert_close!(a, b, tol);
        }
    };
}

#[cfg(test)]
pub mod test_utils {
    use rand::{rngs::ThreadRng, Rng};

    use crate::types::Float;

    /// Random angle in (-range, range) radians
    pub fn random_angle(rng: &mut ThreadRng, range: Float) -> Float {
        rng.random_range(-range..range)
    }
}
