use glam::{Mat3, Mat4};

use super::core::Viewpoint;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform block holding the per-frame view transform.
///
/// Laid out for std140: the normal matrix is stored as three vec4 columns
/// and each vec3 is followed by a padding float.
pub struct ViewUniform {
    /// World-to-eye view matrix.
    pub view: [[f32; 4]; 4],
    /// Inverse transpose of the upper 3x3 of `view * model`.
    pub normal_matrix: [[f32; 4]; 3],
    /// Eye position in world space.
    pub position: [f32; 3],
    pub(crate) _pad0: f32,
    /// Unit view direction, for specular and fog terms.
    pub forward: [f32; 3],
    pub(crate) _pad1: f32,
}

impl Default for ViewUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewUniform {
    /// Identity view looking down -Z from the origin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            normal_matrix: pad_mat3(Mat3::IDENTITY),
            position: [0.0; 3],
            _pad0: 0.0,
            forward: [0.0, 0.0, -1.0],
            _pad1: 0.0,
        }
    }

    /// Refresh every field from `viewpoint`, with `model` as the object
    /// transform the normal matrix is built for.
    pub fn update(&mut self, viewpoint: &Viewpoint, model: Mat4) {
        let view = viewpoint.view_matrix();
        self.view = view.to_cols_array_2d();
        self.normal_matrix =
            pad_mat3(Mat3::from_mat4(view * model).inverse().transpose());
        self.position = viewpoint.position().to_array();
        self.forward = viewpoint.front().to_array();
    }

    /// Raw bytes for a uniform buffer write.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

fn pad_mat3(m: Mat3) -> [[f32; 4]; 3] {
    [
        m.x_axis.extend(0.0).to_array(),
        m.y_axis.extend(0.0).to_array(),
        m.z_axis.extend(0.0).to_array(),
    ]
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn uniform_is_std140_sized() {
        assert_eq!(size_of::<ViewUniform>(), 144);
        assert_eq!(ViewUniform::new().as_bytes().len(), 144);
    }

    #[test]
    fn update_copies_view_and_eye() {
        let mut viewpoint =
            Viewpoint::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, Vec3::Y);
        viewpoint.rotate(-90.0, 10.0);
        let mut uniform = ViewUniform::new();
        uniform.update(&viewpoint, Mat4::IDENTITY);

        assert_eq!(uniform.view, viewpoint.view_matrix().to_cols_array_2d());
        assert_eq!(uniform.position, [1.0, 2.0, 3.0]);
        assert_eq!(uniform.forward, viewpoint.front().to_array());
    }

    #[test]
    fn normal_matrix_of_rigid_view_is_its_rotation() {
        let mut viewpoint = Viewpoint::new(Vec3::Z, Vec3::ZERO, Vec3::Y);
        viewpoint.rotate(40.0, -20.0);
        let mut uniform = ViewUniform::new();
        uniform.update(&viewpoint, Mat4::IDENTITY);

        let rotation = Mat3::from_mat4(viewpoint.view_matrix());
        let expected = pad_mat3(rotation);
        for (column, want) in uniform.normal_matrix.iter().zip(expected) {
            for (a, b) in column.iter().zip(want) {
                assert!((a - b).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn normal_matrix_undoes_non_uniform_scale() {
        let viewpoint = Viewpoint::new(Vec3::Z, Vec3::ZERO, Vec3::Y);
        let mut uniform = ViewUniform::new();
        uniform.update(&viewpoint, Mat4::from_scale(Vec3::new(2.0, 1.0, 1.0)));

        let rotation = Mat3::from_mat4(viewpoint.view_matrix());
        let normal = Mat3::from_cols(
            Vec3::from_slice(&uniform.normal_matrix[0][..3]),
            Vec3::from_slice(&uniform.normal_matrix[1][..3]),
            Vec3::from_slice(&uniform.normal_matrix[2][..3]),
        );
        // A scale of 2 on x shrinks the x component of transformed normals.
        let transformed = normal * Vec3::X;
        assert!(transformed.abs_diff_eq(rotation * Vec3::X * 0.5, 1e-5));
    }
}
