use std::f32::consts::PI;

const INNER_RATIO: f32 = 0.4;

/// Vertex ring of a five-pointed star: outer and inner vertices interleaved,
/// starting with the outer vertex pointing straight up (angle -90 degrees).
/// The ring is closed (last vertex connects back to the first) and usable
/// directly by a polygon-fill renderer.
pub fn star_polygon(center: (f32, f32), outer_radius: f32) -> [(f32, f32); 10] {
    let (cx, cy) = center;
    let inner_radius = outer_radius * INNER_RATIO;
    let mut points = [(0.0, 0.0); 10];
    for i in 0..5 {
        let outer_angle = 2.0 * PI * i as f32 / 5.0 - PI / 2.0;
        let inner_angle = outer_angle + PI / 5.0;
        points[2 * i] = (
            cx + outer_radius * outer_angle.cos(),
            cy + outer_radius * outer_angle.sin(),
        );
        points[2 * i + 1] = (
            cx + inner_radius * inner_angle.cos(),
            cy + inner_radius * inner_angle.sin(),
        );
    }
    points
}
