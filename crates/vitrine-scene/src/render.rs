//! Projection of the scene tree into terminal cells.
//!
//! World points go through the orbit camera into view space, then through
//! a perspective divide into the cell grid, depth-tested against a
//! per-cell z-buffer. Glyph and color carry the depth and shading cues a
//! pixel renderer would express with size and material.

use ratatui::{buffer::Buffer, layout::Rect, style::Color};
use vitrine_core::{Palette, Vec3};

use crate::camera::OrbitCamera;
use crate::graph::{Scene, SceneNode};
use crate::labels::PlacedLabel;
use crate::lighting::{LightRig, scale_color};
use crate::starfield;

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f32 = 2.0;

/// Points closer than this to the eye plane are culled.
const NEAR: f32 = 0.1;

/// Glyphs for mesh surface points, dimmest first.
const SHADE_CHARS: [char; 4] = ['░', '▒', '▓', '█'];

/// Project a view-space point into the cell grid.
///
/// Returns `(col, row, depth)`, or `None` when the point is behind the
/// eye or lands outside `area`.
fn project(view: Vec3, area: Rect, fov_y: f32) -> Option<(u16, u16, f32)> {
    let depth = -view.z;
    if depth < NEAR {
        return None;
    }
    let focal = area.height as f32 / (2.0 * (fov_y / 2.0).tan());
    let col = area.x as f32 + area.width as f32 / 2.0 + view.x * focal * CELL_ASPECT / depth;
    let row = area.y as f32 + area.height as f32 / 2.0 - view.y * focal / depth;
    if col < area.x as f32
        || row < area.y as f32
        || col >= (area.x + area.width) as f32
        || row >= (area.y + area.height) as f32
    {
        return None;
    }
    Some((col as u16, row as u16, depth))
}

/// Project a world point into a cell of `area`, if visible.
///
/// Used by the overlay layer to anchor flat panels at 3D points.
pub fn project_world(world: Vec3, area: Rect, camera: &OrbitCamera) -> Option<(u16, u16)> {
    project(camera.to_view(world), area, camera.fov_y()).map(|(col, row, _)| (col, row))
}

/// Per-cell depth buffer for one rendered frame.
struct DepthGrid {
    area: Rect,
    depth: Vec<f32>,
}

impl DepthGrid {
    fn new(area: Rect) -> Self {
        Self {
            area,
            depth: vec![f32::INFINITY; area.width as usize * area.height as usize],
        }
    }

    /// Write a glyph at `(col, row)` if nothing closer is already there.
    fn plot(&mut self, buf: &mut Buffer, col: u16, row: u16, depth: f32, ch: char, fg: Color) {
        let idx =
            (row - self.area.y) as usize * self.area.width as usize + (col - self.area.x) as usize;
        if depth < self.depth[idx] {
            self.depth[idx] = depth;
            if let Some(cell) = buf.cell_mut((col, row)) {
                cell.set_char(ch);
                cell.set_fg(fg);
            }
        }
    }
}

/// Render the full scene into `area` of the frame buffer.
///
/// Takes the scene mutably to consume the particle buffer's re-upload
/// flag; the flag is set again on every update, so the plot always runs.
pub fn render_scene(
    buf: &mut Buffer,
    area: Rect,
    scene: &mut Scene,
    camera: &OrbitCamera,
    t: f32,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let palette = scene.preset.palette();

    fill_backdrop(buf, area, t, &palette);

    let mut grid = DepthGrid::new(area);
    let lights = scene.lights.clone();
    let mut walk = vec![&mut scene.root];
    while let Some(node) = walk.pop() {
        match node {
            SceneNode::Group(children) => walk.extend(children.iter_mut()),
            SceneNode::Particles(field) => {
                // Re-upload happens unconditionally each frame.
                field.take_dirty();
                for world in field.world_positions() {
                    draw_particle(buf, area, &mut grid, camera, world, &palette);
                }
            }
            SceneNode::Mesh(mesh) => {
                let color = match mesh.kind() {
                    crate::meshes::MeshKind::Box => palette.box_mesh,
                    crate::meshes::MeshKind::Torus => palette.torus_mesh,
                    crate::meshes::MeshKind::Sphere => palette.sphere_mesh,
                };
                for (world, normal) in mesh.world_points() {
                    draw_surface_point(buf, area, &mut grid, camera, &lights, world, normal, color);
                }
            }
            SceneNode::Labels(ring) => {
                for label in ring.placed() {
                    draw_label(buf, area, &mut grid, camera, &label, &palette);
                }
            }
        }
    }
}

/// Clear the canvas and scatter the twinkling starfield.
fn fill_backdrop(buf: &mut Buffer, area: Rect, t: f32, palette: &Palette) {
    for row in area.y..area.y + area.height {
        for col in area.x..area.x + area.width {
            if let Some(cell) = buf.cell_mut((col, row)) {
                cell.set_char(' ');
                cell.set_bg(palette.background);
                if let Some((ch, color)) = starfield::star_cell(col, row, t, palette) {
                    cell.set_char(ch);
                    cell.set_fg(color);
                }
            }
        }
    }
}

fn draw_particle(
    buf: &mut Buffer,
    area: Rect,
    grid: &mut DepthGrid,
    camera: &OrbitCamera,
    world: Vec3,
    palette: &Palette,
) {
    if let Some((col, row, depth)) = project(camera.to_view(world), area, camera.fov_y()) {
        let ch = if depth < 14.0 {
            '●'
        } else if depth < 24.0 {
            '•'
        } else {
            '·'
        };
        let fade = (1.0 - depth / 60.0).clamp(0.35, 1.0);
        grid.plot(buf, col, row, depth, ch, scale_color(palette.particles, fade));
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_surface_point(
    buf: &mut Buffer,
    area: Rect,
    grid: &mut DepthGrid,
    camera: &OrbitCamera,
    lights: &LightRig,
    world: Vec3,
    normal: Vec3,
    color: Color,
) {
    if let Some((col, row, depth)) = project(camera.to_view(world), area, camera.fov_y()) {
        let shade = lights.shade(world, normal);
        let ch = SHADE_CHARS[((shade * SHADE_CHARS.len() as f32) as usize).min(SHADE_CHARS.len() - 1)];
        grid.plot(buf, col, row, depth, ch, scale_color(color, 0.3 + 0.7 * shade));
    }
}

fn draw_label(
    buf: &mut Buffer,
    area: Rect,
    grid: &mut DepthGrid,
    camera: &OrbitCamera,
    label: &PlacedLabel,
    palette: &Palette,
) {
    let Some((col, row, depth)) = project(camera.to_view(label.position), area, camera.fov_y())
    else {
        return;
    };

    // Labels face outward from the ring; the back side renders dimmed.
    let outward = Vec3::new(label.facing.cos(), 0.0, label.facing.sin());
    let to_eye = (camera.eye() - label.position).normalized();
    let fg = if outward.dot(to_eye) >= 0.0 {
        palette.labels
    } else {
        palette.labels_back
    };

    let chars: Vec<char> = label.text.chars().collect();
    let start = col as i32 - chars.len() as i32 / 2;
    for (i, ch) in chars.into_iter().enumerate() {
        let c = start + i as i32;
        if c >= area.x as i32 && c < (area.x + area.width) as i32 {
            grid.plot(buf, c as u16, row, depth, ch, fg);
        }
    }
}
