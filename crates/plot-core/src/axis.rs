// File: crates/plot-core/src/axis.rs
// Summary: Axis descriptors: label, scale kind and optional one-/two-sided bounds.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
    #[default]
    Linear,
    Log,
    Symlog,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Axis {
    pub label: Option<String>,
    pub kind: ScaleKind,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Axis {
    pub fn new(label: Option<String>, kind: ScaleKind, min: Option<f64>, max: Option<f64>) -> Self {
        Self { label, kind, min, max }
    }

    /// Apply the explicit bounds to an automatically computed range; each side
    /// is overridden independently.
    pub fn bound(&self, auto_min: f64, auto_max: f64) -> (f64, f64) {
        (self.min.unwrap_or(auto_min), self.max.unwrap_or(auto_max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_apply_per_side() {
        let a = Axis::new(None, ScaleKind::Linear, Some(-1.0), None);
        assert_eq!(a.bound(0.0, 10.0), (-1.0, 10.0));
        let b = Axis::new(None, ScaleKind::Linear, None, Some(4.0));
        assert_eq!(b.bound(0.0, 10.0), (0.0, 4.0));
        assert_eq!(Axis::default().bound(2.0, 3.0), (2.0, 3.0));
    }

    #[test]
    fn scale_kind_parses_lowercase_names() {
        let k: ScaleKind = serde_json::from_str("\"symlog\"").unwrap();
        assert_eq!(k, ScaleKind::Symlog);
        assert!(serde_json::from_str::<ScaleKind>("\"cubic\"").is_err());
    }
}
