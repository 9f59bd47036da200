use serde::Deserialize;

/// Parity run settings read from TOML.
///
/// Every field is optional; missing fields fall back to the library defaults.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParityToml {
    /// RNG seed; OS-seeded when absent.
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default = "default_shape")]
    pub shape: Vec<usize>,

    /// Temperature sampling range `[lo, hi)` in °F.
    #[serde(default = "default_temp_range")]
    pub temp_range: [f64; 2],

    /// Humidity-fraction sampling range `[lo, hi)`.
    #[serde(default = "default_rh_range")]
    pub rh_range: [f64; 2],

    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Strategy names, e.g. `["masked", "parallel"]`.
    #[serde(default = "default_strategies")]
    pub strategies: Vec<String>,
}

impl Default for ParityToml {
    fn default() -> Self {
        Self {
            seed: None,
            shape: default_shape(),
            temp_range: default_temp_range(),
            rh_range: default_rh_range(),
            tolerance: default_tolerance(),
            strategies: default_strategies(),
        }
    }
}

fn default_shape() -> Vec<usize> {
    vec![4, 100, 300]
}
fn default_temp_range() -> [f64; 2] {
    [50.0, 100.0]
}
fn default_rh_range() -> [f64; 2] {
    [0.05, 0.95]
}
fn default_tolerance() -> f64 {
    1e-9
}
fn default_strategies() -> Vec<String> {
    ["elementwise", "masked", "parallel"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
