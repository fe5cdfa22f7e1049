//! Principal axes of a set of points.
use glam::DVec3;
use nalgebra::{Matrix3, Vector3};

use crate::{Error, Result};

/// The principal axes of a set of points, ordered from the direction of largest variance to the
/// direction of smallest variance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrincipalAxes {
    /// Unit vectors. The sign of each axis is arbitrary.
    pub axes: [DVec3; 3],
    /// The variance of the points along each of the `axes`.
    pub variances: [f64; 3],
}

impl PrincipalAxes {
    /// The axis along which the points are spread out the most.
    pub fn dominant(&self) -> DVec3 {
        self.axes[0]
    }
}

/// Determine the [`PrincipalAxes`] of `points` from the eigen-decomposition of their covariance
/// matrix.
///
/// # Errors
///
/// At least two points are required, otherwise [`Error::TooFewPoints`] is returned.
pub fn principal_axes(points: &[DVec3]) -> Result<PrincipalAxes> {
    if points.len() < 2 {
        return Err(Error::TooFewPoints(points.len()));
    }

    let n = points.len() as f64;
    let centroid = points.iter().sum::<DVec3>() / n;
    let mut covariance = Matrix3::<f64>::zeros();
    for p in points {
        let d = Vector3::from((*p - centroid).to_array());
        covariance += d * d.transpose();
    }
    covariance /= n;

    let eigen = covariance.symmetric_eigen();
    let mut order = [0usize, 1, 2];
    order.sort_by(|&a, &b| eigen.eigenvalues[b].total_cmp(&eigen.eigenvalues[a]));

    let axis = |col: usize| {
        let v = eigen.eigenvectors.column(col);
        DVec3::new(v[0], v[1], v[2]).normalize_or_zero()
    };
    Ok(PrincipalAxes {
        axes: order.map(axis),
        variances: order.map(|col| eigen.eigenvalues[col]),
    })
}
