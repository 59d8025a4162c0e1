use std::f64::consts::PI;

/// Places `n` vertices evenly on a circle of the given radius.
///
/// Vertex 0 sits at the top of the circle (angle `-pi/2`) and subsequent
/// vertices follow at increasing angle, spaced `2*pi/n` apart. Once the y
/// axis is flipped into image coordinates this reads clockwise from 12
/// o'clock. Pure function of `(n, radius)`, so identical inputs always
/// produce bit-identical positions.
pub fn circular_layout(n: usize, radius: f64) -> Vec<(f64, f64)> {
    if n == 0 {
        return Vec::new();
    }

    let angle_step = 2.0 * PI / n as f64;

    (0..n)
        .map(|i| {
            let angle = i as f64 * angle_step - PI / 2.0;
            (radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}
