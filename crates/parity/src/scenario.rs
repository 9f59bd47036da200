//! Fixed uniform grids that each exercise one branch of the heat index.

use ndarray::Array3;

/// A named `(temp, rh)` pair broadcast over a small uniform grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    /// Short identifier used in logs.
    pub name: &'static str,
    /// Temperature (°F) at every grid point.
    pub temp: f64,
    /// Humidity fraction at every grid point.
    pub rh: f64,
}

impl Scenario {
    /// Side length of the cubic scenario grid.
    pub const EDGE: usize = 2;

    /// Builds the uniform temperature and humidity grids.
    pub fn grid(&self) -> (Array3<f64>, Array3<f64>) {
        let shape = (Self::EDGE, Self::EDGE, Self::EDGE);
        (
            Array3::from_elem(shape, self.temp),
            Array3::from_elem(shape, self.rh),
        )
    }
}

/// Scenarios covering the dry adjustment, the humid adjustment, and the
/// unadjusted full regression.
pub fn reference_scenarios() -> [Scenario; 3] {
    [
        Scenario {
            name: "dry_heat",
            temp: 95.0,
            rh: 0.10,
        },
        Scenario {
            name: "humid",
            temp: 85.0,
            rh: 0.90,
        },
        Scenario {
            name: "no_adjustment",
            temp: 90.0,
            rh: 0.65,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grids_are_uniform_cubes() {
        for scenario in reference_scenarios() {
            let (temp, rh) = scenario.grid();
            assert_eq!(temp.shape(), &[2, 2, 2]);
            assert!(temp.iter().all(|&t| t == scenario.temp));
            assert!(rh.iter().all(|&r| r == scenario.rh));
        }
    }

    #[test]
    fn names_are_unique() {
        let [a, b, c] = reference_scenarios();
        assert_ne!(a.name, b.name);
        assert_ne!(b.name, c.name);
        assert_ne!(a.name, c.name);
    }
}
