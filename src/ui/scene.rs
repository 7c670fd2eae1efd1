//! The decorative backdrop — particle field and node constellation.
//!
//! Both scenes are projected orthographically into terminal cells; depth
//! only picks the glyph and brightness.  Cells are roughly twice as tall as
//! they are wide, so the vertical axis is compressed to keep the cloud from
//! looking stretched.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::core::{
    constellation::Constellation,
    particles::{FieldPose, ParticleField},
};

use super::theme::Theme;

/// Terminal cell aspect correction for the vertical axis.
const Y_SQUASH: f64 = 0.55;

pub struct SceneView<'a> {
    particles: Option<&'a ParticleField>,
    constellation: &'a Constellation,
    /// Seconds since startup — the only input to the motion.
    elapsed: f64,
}

impl<'a> SceneView<'a> {
    pub fn new(
        particles: Option<&'a ParticleField>,
        constellation: &'a Constellation,
        elapsed: f64,
    ) -> Self {
        Self {
            particles,
            constellation,
            elapsed,
        }
    }

    fn render_particles(&self, field: &ParticleField, area: Rect, buf: &mut Buffer) {
        let pose = FieldPose::at(self.elapsed);
        // Margin for the scale pulse (±10%) and the vertical float.
        let half = field.half_extent() * 1.25;

        for particle in field.particles() {
            let [x, y, z] = pose.apply(particle.pos);
            let Some((sx, sy)) = project(x, y, half, area) else {
                continue;
            };
            let near = z > 0.0;
            let glyph = if near { "•" } else { "·" };
            buf.set_string(sx, sy, glyph, Theme::particle_style(particle.accent, near));
        }
    }

    fn render_constellation(&self, area: Rect, buf: &mut Buffer) {
        let (yaw, pitch) = Constellation::pose(self.elapsed);
        let half = crate::core::constellation::RADIUS * 1.1;

        let projected: Vec<Option<(u16, u16)>> = self
            .constellation
            .nodes()
            .iter()
            .map(|&n| {
                let [x, y, _] = Constellation::apply(n, yaw, pitch);
                project(x, y, half, area)
            })
            .collect();

        // Edges first so nodes draw over them.
        for &(i, j) in self.constellation.edges() {
            if let (Some(a), Some(b)) = (projected[i], projected[j]) {
                draw_dotted_line(a, b, buf);
            }
        }
        for (i, point) in projected.iter().enumerate() {
            if let Some((sx, sy)) = point {
                let accent = Constellation::is_accent(i);
                let glyph = if accent { "●" } else { "○" };
                buf.set_string(*sx, *sy, glyph, Theme::node_style(accent));
            }
        }
    }
}

impl Widget for SceneView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 8 || area.height == 0 {
            return;
        }
        if let Some(field) = self.particles {
            self.render_particles(field, area, buf);
        }
        // Constellation sits in the right quarter of the header.
        let mesh_area = Rect {
            x: area.x + area.width * 3 / 4,
            y: area.y,
            width: area.width / 4,
            height: area.height,
        };
        self.render_constellation(mesh_area, buf);
    }
}

/// Orthographic projection of scene coordinates into `area` cells.
/// Returns `None` for points outside the area.
fn project(x: f64, y: f64, half: f64, area: Rect) -> Option<(u16, u16)> {
    if half <= 0.0 || area.width == 0 || area.height == 0 {
        return None;
    }
    let cx = area.x as f64 + area.width as f64 / 2.0;
    let cy = area.y as f64 + area.height as f64 / 2.0;
    let sx = cx + (x / half) * (area.width as f64 / 2.0 - 1.0);
    let sy = cy - (y / half) * (area.height as f64 / 2.0) * 2.0 * Y_SQUASH;
    if sx < area.x as f64
        || sx >= (area.x + area.width) as f64
        || sy < area.y as f64
        || sy >= (area.y + area.height) as f64
    {
        return None;
    }
    Some((sx as u16, sy as u16))
}

/// Sparse dotted line between two cells.
fn draw_dotted_line(a: (u16, u16), b: (u16, u16), buf: &mut Buffer) {
    let (ax, ay) = (a.0 as i32, a.1 as i32);
    let (bx, by) = (b.0 as i32, b.1 as i32);
    let steps = (bx - ax).abs().max((by - ay).abs());
    if steps <= 1 {
        return;
    }
    // Skip the endpoints; every other step keeps the line airy.
    for s in (1..steps).step_by(2) {
        let t = s as f64 / steps as f64;
        let x = ax as f64 + (bx - ax) as f64 * t;
        let y = ay as f64 + (by - ay) as f64 * t;
        buf.set_string(x.round() as u16, y.round() as u16, "·", Theme::edge_style());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_keeps_points_inside_area() {
        let area = Rect::new(3, 2, 40, 6);
        for &(x, y) in &[(0.0, 0.0), (9.0, 9.0), (-9.0, -9.0), (11.0, 0.0)] {
            if let Some((sx, sy)) = project(x, y, 11.0, area) {
                assert!(sx >= area.x && sx < area.x + area.width);
                assert!(sy >= area.y && sy < area.y + area.height);
            }
        }
    }

    #[test]
    fn out_of_bounds_points_are_culled() {
        let area = Rect::new(0, 0, 20, 4);
        assert!(project(100.0, 0.0, 10.0, area).is_none());
    }
}
