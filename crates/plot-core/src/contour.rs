// File: crates/plot-core/src/contour.rs
// Summary: Marching-squares iso-lines over a rectilinear grid, joined into polylines.

use std::collections::{HashMap, VecDeque};

use crate::grid::{linear_ticks, linspace};

/// A crossing point is identified by the grid edge it lies on, so the two
/// cells sharing an edge agree on it exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum EdgeKey {
    /// Edge from `(i, j)` to `(i + 1, j)`.
    H(usize, usize),
    /// Edge from `(i, j)` to `(i, j + 1)`.
    V(usize, usize),
}

#[derive(Clone, Debug, PartialEq)]
pub struct IsoLine {
    pub level: f64,
    pub points: Vec<(f64, f64)>,
    pub closed: bool,
}

/// Pick contour levels strictly inside `(zmin, zmax)`: nice values targeting
/// `count`, or `count` evenly spaced values when no nice value fits.
pub fn contour_levels(zmin: f64, zmax: f64, count: usize) -> Vec<f64> {
    if !(zmin.is_finite() && zmax.is_finite()) || zmax <= zmin || count == 0 {
        return Vec::new();
    }
    let nice: Vec<f64> = linear_ticks(zmin, zmax, count)
        .into_iter()
        .filter(|&v| v > zmin && v < zmax)
        .collect();
    if !nice.is_empty() {
        return nice;
    }
    let mut even = linspace(zmin, zmax, count + 2);
    even.pop();
    even.remove(0);
    even
}

/// Trace the iso-lines of `z` at `level`. `z` is indexed `z[j][i]` for the
/// point `(x[i], y[j])`.
pub fn iso_lines(x: &[f64], y: &[f64], z: &[Vec<f64>], level: f64) -> Vec<IsoLine> {
    let (nx, ny) = (x.len(), y.len());
    if nx < 2 || ny < 2 || z.len() < ny {
        return Vec::new();
    }
    let at = |i: usize, j: usize| z[j].get(i).copied().unwrap_or(f64::NAN);

    let mut points: HashMap<EdgeKey, (f64, f64)> = HashMap::new();
    let mut segments: Vec<(EdgeKey, EdgeKey)> = Vec::new();

    let mut crossing = |key: EdgeKey| -> EdgeKey {
        points.entry(key).or_insert_with(|| {
            let ((i0, j0), (i1, j1)) = match key {
                EdgeKey::H(i, j) => ((i, j), (i + 1, j)),
                EdgeKey::V(i, j) => ((i, j), (i, j + 1)),
            };
            let (va, vb) = (at(i0, j0), at(i1, j1));
            let t = if (vb - va).abs() < f64::EPSILON { 0.5 } else { ((level - va) / (vb - va)).clamp(0.0, 1.0) };
            (x[i0] + (x[i1] - x[i0]) * t, y[j0] + (y[j1] - y[j0]) * t)
        });
        key
    };

    for j in 0..ny - 1 {
        for i in 0..nx - 1 {
            let v = [at(i, j), at(i + 1, j), at(i + 1, j + 1), at(i, j + 1)];
            if v.iter().any(|c| !c.is_finite()) {
                continue;
            }
            let above = v.map(|c| c > level);
            // Cell edges in order: bottom, right, top, left.
            let edges = [EdgeKey::H(i, j), EdgeKey::V(i + 1, j), EdgeKey::H(i, j + 1), EdgeKey::V(i, j)];
            let crossed: Vec<usize> = (0..4).filter(|&e| above[e] != above[(e + 1) % 4]).collect();
            match crossed.len() {
                2 => {
                    let a = crossing(edges[crossed[0]]);
                    let b = crossing(edges[crossed[1]]);
                    segments.push((a, b));
                }
                4 => {
                    // Saddle: resolve with the cell average.
                    let center_above = v.iter().sum::<f64>() / 4.0 > level;
                    let pairs = if above[0] == center_above { [(0, 1), (2, 3)] } else { [(1, 2), (3, 0)] };
                    for (ea, eb) in pairs {
                        let a = crossing(edges[ea]);
                        let b = crossing(edges[eb]);
                        segments.push((a, b));
                    }
                }
                _ => {}
            }
        }
    }

    join_segments(&segments, &points, level)
}

fn join_segments(
    segments: &[(EdgeKey, EdgeKey)],
    points: &HashMap<EdgeKey, (f64, f64)>,
    level: f64,
) -> Vec<IsoLine> {
    let mut touching: HashMap<EdgeKey, Vec<usize>> = HashMap::new();
    for (s, (a, b)) in segments.iter().enumerate() {
        touching.entry(*a).or_default().push(s);
        touching.entry(*b).or_default().push(s);
    }
    let mut used = vec![false; segments.len()];

    let next_from = |key: EdgeKey, used: &mut Vec<bool>| -> Option<EdgeKey> {
        let s = touching.get(&key)?.iter().copied().find(|&s| !used[s])?;
        used[s] = true;
        let (a, b) = segments[s];
        Some(if a == key { b } else { a })
    };

    let mut lines = Vec::new();
    for s in 0..segments.len() {
        if used[s] {
            continue;
        }
        used[s] = true;
        let (a, b) = segments[s];
        let mut chain: VecDeque<EdgeKey> = VecDeque::from([a, b]);
        while let Some(k) = next_from(*chain.back().unwrap_or(&b), &mut used) {
            chain.push_back(k);
        }
        while let Some(k) = next_from(*chain.front().unwrap_or(&a), &mut used) {
            chain.push_front(k);
        }
        let closed = chain.len() > 2 && chain.front() == chain.back();
        let pts = chain.iter().filter_map(|k| points.get(k).copied()).collect();
        lines.push(IsoLine { level, points: pts, closed });
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cone(n: usize) -> (Vec<f64>, Vec<f64>, Vec<Vec<f64>>) {
        let axis: Vec<f64> = (0..n).map(|i| -1.0 + 2.0 * i as f64 / (n - 1) as f64).collect();
        let z = axis
            .iter()
            .map(|&y| axis.iter().map(|&x| (x * x + y * y).sqrt()).collect())
            .collect();
        (axis.clone(), axis, z)
    }

    #[test]
    fn circle_level_is_one_closed_loop() {
        let (x, y, z) = cone(21);
        let lines = iso_lines(&x, &y, &z, 0.5);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].closed);
        for &(px, py) in &lines[0].points {
            let r = (px * px + py * py).sqrt();
            assert!((r - 0.5).abs() < 0.05, "radius {r}");
        }
    }

    #[test]
    fn plane_gives_open_straight_line() {
        let x = vec![0.0, 1.0, 2.0];
        let y = vec![0.0, 1.0];
        let z = vec![vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 2.0]];
        let lines = iso_lines(&x, &y, &z, 1.5);
        assert_eq!(lines.len(), 1);
        assert!(!lines[0].closed);
        assert!(lines[0].points.iter().all(|&(px, _)| (px - 1.5).abs() < 1e-12));
    }

    #[test]
    fn level_outside_field_yields_nothing() {
        let (x, y, z) = cone(5);
        assert!(iso_lines(&x, &y, &z, 10.0).is_empty());
    }

    #[test]
    fn levels_lie_strictly_inside_range() {
        let l = contour_levels(0.0, 1.0, 10);
        assert!(!l.is_empty());
        assert!(l.iter().all(|&v| v > 0.0 && v < 1.0));
        assert!(contour_levels(2.0, 2.0, 5).is_empty());
        // The only nice values for one level are the bounds themselves.
        assert_eq!(contour_levels(0.0, 1.0, 1), vec![0.5]);
    }
}
