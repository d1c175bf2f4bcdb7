use std::f32::consts::PI;

use crate::matrix::Matrix;
use crate::spacepoint::SpacePoint;

/// Number of features per spacepoint: (r, φ, z).
pub const FEATURE_DIM: usize = 3;

/// Length normalization for r and z (mm -> m).
pub const LENGTH_SCALE: f32 = 1000.0;

/// Maps spacepoints to normalized cylindrical features.
///
/// Row i is `[sqrt(x²+y²) / 1000, atan2(y, x) / π, z / 1000]`.
pub fn extract_features<P: SpacePoint>(points: &[P]) -> Matrix {
    let mut features = Matrix::zeros(points.len(), FEATURE_DIM);
    for (i, sp) in points.iter().enumerate() {
        let [x, y, z] = sp.position();
        let row = features.row_mut(i);
        row[0] = x.hypot(y) / LENGTH_SCALE;
        row[1] = y.atan2(x) / PI;
        row[2] = z / LENGTH_SCALE;
    }
    features
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spacepoint::RawSpacePoint;

    fn sp(x: f32, y: f32, z: f32) -> RawSpacePoint {
        RawSpacePoint { id: 0, x, y, z }
    }

    #[test]
    fn features_on_axes() {
        let points = [sp(300.0, 0.0, 150.0), sp(0.0, 400.0, -200.0), sp(-500.0, 0.0, 0.0)];
        let f = extract_features(&points);
        assert_eq!(f.rows(), 3);
        assert_eq!(f.cols(), FEATURE_DIM);

        assert!((f.row(0)[0] - 0.3).abs() < 1e-6);
        assert!(f.row(0)[1].abs() < 1e-6);
        assert!((f.row(0)[2] - 0.15).abs() < 1e-6);

        assert!((f.row(1)[0] - 0.4).abs() < 1e-6);
        assert!((f.row(1)[1] - 0.5).abs() < 1e-6, "phi/pi at +y should be 0.5");
        assert!((f.row(1)[2] + 0.2).abs() < 1e-6);

        assert!((f.row(2)[0] - 0.5).abs() < 1e-6);
        assert!((f.row(2)[1] - 1.0).abs() < 1e-6, "phi/pi at -x should be 1");
    }

    #[test]
    fn features_diagonal() {
        let f = extract_features(&[sp(30.0, 40.0, 0.0)]);
        assert!((f.row(0)[0] - 0.05).abs() < 1e-6);
        let expected_phi = (40.0f32).atan2(30.0) / PI;
        assert!((f.row(0)[1] - expected_phi).abs() < 1e-6);
    }

    #[test]
    fn features_empty() {
        let f = extract_features::<RawSpacePoint>(&[]);
        assert!(f.is_empty());
        assert_eq!(f.cols(), FEATURE_DIM);
    }
}
