//! The projection pipeline
//!
//! Once per frame this turns a world-space triangle list plus a camera pose
//! into a screen-space vertex list ready for rasterization. Per triangle:
//!
//! 1. Build the view matrix from the camera pose: compose yaw and pitch
//!    rotations (pitch first, then yaw), transpose the result to invert it
//!    (valid because rotations are orthogonal), and multiply by the negated
//!    camera translation.
//! 2. Transform each vertex (w = 1) into camera space, where "in front of
//!    the camera" is negative z.
//! 3. Near-plane cull: any vertex with camera-space z >= 0 drops the whole
//!    triangle. Partially visible triangles are not clipped against the near
//!    plane, they disappear wholesale; this is a known limitation carried
//!    over deliberately, since emitting a partial triangle would rasterize
//!    as garbage.
//! 4. Perspective-divide by -z with the focal scale from the horizontal
//!    field of view, then map normalized device coordinates to pixels
//!    (Y flipped, since screen Y grows downward).
//!
//! Output ordering follows input ordering; culled triangles simply do not
//! appear. The pipeline borrows the scene and retains nothing across frames.

use bytemuck::{Pod, Zeroable};
use craftview_math::{Mat4, Vec4};
use craftview_scene::Triangle;

use crate::Camera;

/// Fixed per-run projection parameters: viewport size in pixels and the
/// horizontal field of view in degrees.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub fov_degrees: f32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32, fov_degrees: f32) -> Self {
        Self {
            width,
            height,
            fov_degrees,
        }
    }

    /// Perspective scale factor `1 / tan(fov / 2)`.
    ///
    /// Exactly 1.0 at a 90 degree field of view.
    pub fn focal_scale(&self) -> f32 {
        1.0 / (self.fov_degrees.to_radians() * 0.5).tan()
    }
}

/// A projected vertex: pixel position plus RGBA color.
///
/// Pod so a `Vec<ScreenVertex>` uploads directly as a GPU vertex buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ScreenVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

/// Build the world-to-camera matrix for a camera pose.
///
/// `rotation = rotation_y(yaw) * rotation_x(pitch)` (pitch applied first,
/// then yaw; angles converted from degrees before matrix construction), and
/// the view matrix is `rotation.transpose() * translation(-position)`.
pub fn view_matrix(camera: &Camera) -> Mat4 {
    let rotation =
        Mat4::rotation_y(camera.yaw.to_radians()) * Mat4::rotation_x(camera.pitch.to_radians());

    let mut translation = Mat4::identity();
    *translation.at_mut(0, 3) = -camera.position.x;
    *translation.at_mut(1, 3) = -camera.position.y;
    *translation.at_mut(2, 3) = -camera.position.z;

    rotation.transpose() * translation
}

/// Project one triangle through a prebuilt view matrix.
///
/// Returns None when any vertex lands at or behind the camera plane.
pub fn project_triangle(
    view: &Mat4,
    triangle: &Triangle,
    viewport: &Viewport,
) -> Option<[ScreenVertex; 3]> {
    let f = viewport.focal_scale();
    let half_width = viewport.width as f32 * 0.5;
    let half_height = viewport.height as f32 * 0.5;
    let color = triangle.color.rgba();

    let mut out = [ScreenVertex::default(); 3];

    for (slot, &[x, y, z]) in out.iter_mut().zip(&triangle.vertices) {
        let camera_space = *view * Vec4::point(x, y, z);

        if camera_space.z >= 0.0 {
            return None;
        }

        let sx = camera_space.x * f / -camera_space.z;
        let sy = camera_space.y * f / -camera_space.z;

        *slot = ScreenVertex {
            position: [
                sx * half_width + half_width,
                -sy * half_height + half_height,
            ],
            color,
        };
    }

    Some(out)
}

/// Project a whole scene for one frame.
///
/// Builds the view matrix once, then projects every triangle through it.
/// The output preserves input order; triangles touching the near plane are
/// absent, with no placeholder emitted.
pub fn project_triangles(
    camera: &Camera,
    triangles: &[Triangle],
    viewport: &Viewport,
) -> Vec<ScreenVertex> {
    let view = view_matrix(camera);
    let mut vertices = Vec::with_capacity(triangles.len() * 3);

    for triangle in triangles {
        if let Some(projected) = project_triangle(&view, triangle, viewport) {
            vertices.extend_from_slice(&projected);
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use craftview_scene::Color;

    const EPSILON: f32 = 0.001;

    fn viewport_800x600_90deg() -> Viewport {
        Viewport::new(800, 600, 90.0)
    }

    fn camera_at(x: f32, y: f32, z: f32) -> Camera {
        Camera::new(Vec4::new(x, y, z, 0.0))
    }

    fn single_vertex_scene(v: [f32; 3]) -> Vec<Triangle> {
        // Degenerate on purpose: all three vertices identical, so the one
        // projected position can be asserted directly.
        vec![Triangle::new(v, v, v, Color::white())]
    }

    #[test]
    fn test_focal_scale_is_one_at_90_degrees() {
        assert!((viewport_800x600_90deg().focal_scale() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_view_matrix_is_translation_only_at_zero_angles() {
        let view = view_matrix(&camera_at(1.0, 2.0, 3.0));
        let p = view * Vec4::point(1.0, 2.0, 3.0);
        assert!((p.x).abs() < EPSILON);
        assert!((p.y).abs() < EPSILON);
        assert!((p.z).abs() < EPSILON);
    }

    #[test]
    fn test_vertex_ahead_projects_to_center() {
        // Camera at (0,0,10) looking down -Z; vertex 5 units in front
        let camera = camera_at(0.0, 0.0, 10.0);
        let scene = single_vertex_scene([0.0, 0.0, 5.0]);
        let out = project_triangles(&camera, &scene, &viewport_800x600_90deg());

        assert_eq!(out.len(), 3);
        assert!((out[0].position[0] - 400.0).abs() < EPSILON);
        assert!((out[0].position[1] - 300.0).abs() < EPSILON);
    }

    #[test]
    fn test_world_origin_camera_center_pixel() {
        // f = 1 at 90 degree FOV, so (0,0,-10) maps exactly to the center
        let camera = camera_at(0.0, 0.0, 0.0);
        let scene = single_vertex_scene([0.0, 0.0, -10.0]);
        let out = project_triangles(&camera, &scene, &viewport_800x600_90deg());

        assert_eq!(out[0].position, [400.0, 300.0]);
    }

    #[test]
    fn test_right_edge_pixel() {
        // (1,0,-1) with f = 1: sx = 1, pixel x = 1 * 400 + 400 = 800
        let camera = camera_at(0.0, 0.0, 0.0);
        let scene = single_vertex_scene([1.0, 0.0, -1.0]);
        let out = project_triangles(&camera, &scene, &viewport_800x600_90deg());

        assert!((out[0].position[0] - 800.0).abs() < EPSILON);
        assert!((out[0].position[1] - 300.0).abs() < EPSILON);
    }

    #[test]
    fn test_screen_y_is_flipped() {
        // +Y in the world is up; on screen it must move toward y = 0
        let camera = camera_at(0.0, 0.0, 0.0);
        let scene = single_vertex_scene([0.0, 1.0, -2.0]);
        let out = project_triangles(&camera, &scene, &viewport_800x600_90deg());

        assert!(out[0].position[1] < 300.0);
    }

    #[test]
    fn test_behind_camera_culls_whole_triangle() {
        let camera = camera_at(0.0, 0.0, 0.0);
        // Two vertices well in front, one behind (camera-space z = +1)
        let scene = vec![Triangle::new(
            [0.0, 0.0, -5.0],
            [1.0, 0.0, -5.0],
            [0.0, 0.0, 1.0],
            Color::cyan(),
        )];
        let out = project_triangles(&camera, &scene, &viewport_800x600_90deg());

        assert!(out.is_empty());
    }

    #[test]
    fn test_vertex_on_camera_plane_culls() {
        let camera = camera_at(0.0, 0.0, 0.0);
        let scene = single_vertex_scene([0.0, 0.0, 0.0]);
        let out = project_triangles(&camera, &scene, &viewport_800x600_90deg());

        assert!(out.is_empty());
    }

    #[test]
    fn test_output_preserves_input_order() {
        let camera = camera_at(0.0, 0.0, 0.0);
        let visible = |x: f32, color: Color| Triangle::new(
            [x, 0.0, -5.0],
            [x + 1.0, 0.0, -5.0],
            [x, 1.0, -5.0],
            color,
        );
        let culled = Triangle::new(
            [0.0, 0.0, 5.0],
            [1.0, 0.0, 5.0],
            [0.0, 1.0, 5.0],
            Color::white(),
        );
        let scene = vec![
            visible(-1.0, Color::magenta()),
            culled,
            visible(1.0, Color::yellow()),
        ];
        let out = project_triangles(&camera, &scene, &viewport_800x600_90deg());

        // Culled triangle leaves no placeholder; order of the rest holds
        assert_eq!(out.len(), 6);
        assert_eq!(out[0].color, Color::magenta().rgba());
        assert_eq!(out[3].color, Color::yellow().rgba());
    }

    #[test]
    fn test_full_yaw_turn_matches_identity_pose() {
        let mut camera = camera_at(3.0, -1.0, 7.0);
        let reference = view_matrix(&camera);
        camera.yaw = 360.0;
        let turned = view_matrix(&camera);

        for i in 0..16 {
            assert!((reference[i] - turned[i]).abs() < EPSILON);
        }
    }

    #[test]
    fn test_yaw_rotates_view() {
        // Looking 90 degrees left (positive yaw) puts -X in front
        let mut camera = camera_at(0.0, 0.0, 0.0);
        camera.yaw = 90.0;
        let scene = single_vertex_scene([-5.0, 0.0, 0.0]);
        let out = project_triangles(&camera, &scene, &viewport_800x600_90deg());

        assert_eq!(out.len(), 3);
        assert!((out[0].position[0] - 400.0).abs() < 0.01);
        assert!((out[0].position[1] - 300.0).abs() < 0.01);
    }

    #[test]
    fn test_pitch_rotates_view() {
        // Looking straight up puts +Y in front
        let mut camera = camera_at(0.0, 0.0, 0.0);
        camera.pitch = 90.0;
        let scene = single_vertex_scene([0.0, 5.0, 0.0]);
        let out = project_triangles(&camera, &scene, &viewport_800x600_90deg());

        assert_eq!(out.len(), 3);
        assert!((out[0].position[0] - 400.0).abs() < 0.01);
        assert!((out[0].position[1] - 300.0).abs() < 0.01);
    }

    #[test]
    fn test_flat_color_attached_at_full_opacity() {
        let camera = camera_at(0.0, 0.0, 10.0);
        let scene = vec![Triangle::new(
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            Color::magenta(),
        )];
        let out = project_triangles(&camera, &scene, &viewport_800x600_90deg());

        for v in &out {
            assert_eq!(v.color, [1.0, 0.0, 1.0, 1.0]);
        }
    }

    #[test]
    fn test_screen_vertex_layout() {
        // position + color, tightly packed for the GPU vertex buffer
        assert_eq!(std::mem::size_of::<ScreenVertex>(), 24);
        assert_eq!(std::mem::align_of::<ScreenVertex>(), 4);
    }
}
