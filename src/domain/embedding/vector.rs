//! Vector math used for matching queries

/// Euclidean (L2) norm of a vector
pub fn l2_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Scale a vector to unit length.
///
/// A zero vector has no direction, so it is returned unchanged instead of
/// producing NaNs. Against unit vectors it always sits at squared distance 1.0,
/// and it only matches another zero vector exactly.
pub fn normalize(mut v: Vec<f32>) -> Vec<f32> {
    let norm = l2_norm(&v);

    if norm == 0.0 {
        return v;
    }

    v.iter_mut().for_each(|x| *x /= norm);
    v
}

/// Sum of squared per-component differences.
///
/// Callers must pass vectors of equal length; extra components of the
/// longer vector are ignored.
pub fn squared_l2_distance(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());

    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}
