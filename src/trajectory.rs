use crate::types::Float;

/// Read a recorded run from trajectory file content: line 1 holds the cart
/// positions, line 2 the pendulum angles in radians, both as `", "`-separated
/// reals. Lines past the second are ignored. Callers do the file I/O.
pub fn read_trajectories(file: &str) -> (Vec<Float>, Vec<Float>) {
    let mut lines = file.lines();

    let cart_line = lines
        .next()
        .expect("trajectory file must contain a cart position line");
    let angle_line = lines
        .next()
        .expect("trajectory file must contain a pendulum angle line");

    (parse_series(cart_line), parse_series(angle_line))
}

fn parse_series(line: &str) -> Vec<Float> {
    line.trim()
        .split(", ")
        .map(|sample| {
            sample
                .parse()
                .unwrap_or_else(|_| panic!("trajectory sample {:?} is not a real number", sample))
        })
        .collect()
}

#[cfg(test)]
mod trajectory_tests {
    use super::*;

    #[test]
    fn reads_both_series() {
        let content = "0.0, 1.0, 2.5\n0.0, -0.1, 0.3\n";

        let (cart_positions, pendulum_angles) = read_trajectories(content);

        assert_eq!(cart_positions, vec![0.0, 1.0, 2.5]);
        assert_eq!(pendulum_angles, vec![0.0, -0.1, 0.3]);
    }

    #[test]
    fn ignores_trailing_lines() {
        let content = "1.0, 2.0\n0.5, 0.6\n9.0, 9.0\n";

        let (cart_positions, pendulum_angles) = read_trajectories(content);

        assert_eq!(cart_positions, vec![1.0, 2.0]);
        assert_eq!(pendulum_angles, vec![0.5, 0.6]);
    }

    #[test]
    fn series_lengths_may_differ() {
        let content = "0.0, 1.0, 2.0, 3.0, 4.0\n0.0, 0.1, 0.2\n";

        let (cart_positions, pendulum_angles) = read_trajectories(content);

        assert_eq!(cart_positions.len(), 5);
        assert_eq!(pendulum_angles.len(), 3);
    }

    #[test]
    #[should_panic(expected = "pendulum angle line")]
    fn missing_angle_line_panics() {
        read_trajectories("0.0, 1.0");
    }

    #[test]
    #[should_panic(expected = "is not a real number")]
    fn non_numeric_sample_panics() {
        read_trajectories("0.0, abc\n0.0, 0.0\n");
    }
}
