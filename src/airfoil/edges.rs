use super::Airfoil;
use crate::errors::{AirfoilError, Result};
use crate::geometry::distances2::farthest_index;
use ncollide2d::na::Point2;

impl Airfoil {
    /// The trailing edge is the first stored point
    pub fn trailing_edge(&self) -> Point2<f64> {
        self.points[0]
    }

    /// Index of the point farthest from the trailing edge, with the first occurrence winning
    /// ties. Fails if every point coincides with the trailing edge.
    pub fn leading_edge_index(&self) -> Result<usize> {
        farthest_index(&self.points, &self.trailing_edge()).ok_or(
            AirfoilError::DegenerateGeometry("all points coincide with the trailing edge"),
        )
    }

    pub fn leading_edge(&self) -> Result<Point2<f64>> {
        Ok(self.points[self.leading_edge_index()?])
    }

    /// Splits the airfoil into its upper surface, running from the trailing edge up to and
    /// including the leading edge, and its lower surface, which is every remaining point.
    pub fn upper_lower(&self) -> Result<(Vec<Point2<f64>>, Vec<Point2<f64>>)> {
        let le = self.leading_edge()?;
        let i_le = self
            .points
            .iter()
            .position(|p| *p == le)
            .ok_or(AirfoilError::GeometryInconsistency)?;
        log::debug!("{:?}: leading edge at index {}", self.name, i_le);

        let (upper, lower) = self.points.split_at(i_le + 1);
        Ok((upper.to_vec(), lower.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airfoil::tests::{diamond, lens};
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test]
    fn test_diamond_edges() {
        let af = diamond();
        assert_eq!(Point2::new(1.0, 0.0), af.trailing_edge());
        assert_eq!(Point2::new(-1.0, 0.0), af.leading_edge().unwrap());
        assert_eq!(2, af.leading_edge_index().unwrap());
    }

    #[test]
    fn test_diamond_split() {
        let (upper, lower) = diamond().upper_lower().unwrap();
        assert_eq!(
            vec![
                Point2::new(1.0, 0.0),
                Point2::new(0.0, 0.1),
                Point2::new(-1.0, 0.0)
            ],
            upper
        );
        assert_eq!(vec![Point2::new(0.0, -0.1)], lower);
    }

    #[test]
    fn test_leading_edge_tie_first_wins() {
        let af = Airfoil::from_xy("tie", &[0.0, -1.0, 1.0, 0.0], &[0.0, 1.0, 1.0, -1.0]).unwrap();
        assert_eq!(1, af.leading_edge_index().unwrap());

        let af = Airfoil::from_xy("tie", &[0.0, 0.5, -1.0, 1.0], &[0.0, 0.0, 0.0, 0.0]).unwrap();
        assert_eq!(2, af.leading_edge_index().unwrap());
    }

    #[test]
    fn test_coincident_points_fail() {
        let af = Airfoil::from_xy("dot", &[0.5, 0.5, 0.5], &[0.1, 0.1, 0.1]).unwrap();
        assert!(matches!(
            af.leading_edge(),
            Err(AirfoilError::DegenerateGeometry(_))
        ));
        assert!(af.upper_lower().is_err());
    }

    #[test_case(1)]
    #[test_case(4)]
    #[test_case(25)]
    fn test_split_sizes_sum_to_count(k: usize) {
        let af = lens(k);
        let (upper, lower) = af.upper_lower().unwrap();
        assert_eq!(af.len(), upper.len() + lower.len());
        assert_eq!(k + 2, upper.len());
        assert_eq!(af.trailing_edge(), upper[0]);
        let le = upper.last().unwrap();
        assert_relative_eq!(0.0, le.x);
        assert_relative_eq!(0.0, le.y);
    }
}
