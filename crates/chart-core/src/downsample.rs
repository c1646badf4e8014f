// File: crates/chart-core/src/downsample.rs
// Summary: LTTB downsampling for long XY series.

/// Largest-Triangle-Three-Buckets downsampling for XY series.
/// Returns up to `threshold` points preserving overall shape.
pub fn lttb(points: &[(f64, f64)], threshold: usize) -> Vec<(f64, f64)> {
    let n = points.len();
    if threshold == 0 || n == 0 { return Vec::new(); }
    if threshold >= n || n <= 2 { return points.to_vec(); }
    if threshold == 1 { return vec![points[0]]; }
    if threshold == 2 { return vec![points[0], points[n - 1]]; }

    let bucket_size = (n - 2) as f64 / (threshold - 2) as f64;
    let mut sampled = Vec::with_capacity(threshold);
    sampled.push(points[0]);

    let mut a = 0usize; // index of the point picked in the previous bucket

    for i in 0..(threshold - 2) {
        let start = (1.0 + (i as f64) * bucket_size).floor() as usize;
        let end = ((1.0 + ((i + 1) as f64) * bucket_size).floor() as usize).min(n - 1);

        // Average of the next bucket; the last bucket looks at the final point.
        let next_end = ((1.0 + ((i + 2) as f64) * bucket_size).floor() as usize).min(n);
        let next = &points[end..next_end.max(end + 1).min(n)];
        let (sum_x, sum_y) = next.iter().fold((0.0, 0.0), |(sx, sy), p| (sx + p.0, sy + p.1));
        let avg_x = sum_x / next.len() as f64;
        let avg_y = sum_y / next.len() as f64;

        let (a_x, a_y) = points[a];
        let mut max_area = -1.0f64;
        let mut max_idx = start;
        for k in start..end.max(start + 1) {
            let area = ((a_x - avg_x) * (points[k].1 - a_y) - (a_x - points[k].0) * (avg_y - a_y)).abs();
            if area > max_area {
                max_area = area;
                max_idx = k;
            }
        }
        sampled.push(points[max_idx]);
        a = max_idx;
    }

    sampled.push(points[n - 1]);
    sampled
}
