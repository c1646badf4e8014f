// File: crates/chart-core/src/grid.rs
// Summary: Tick layout helpers (1-2-5 "nice" steps and their labels).

/// Step of the form {1, 2, 5} x 10^k closest to `span / target`.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span.abs() / target.max(1) as f64;
    if !raw.is_finite() || raw <= 0.0 { return 1.0; }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm < 1.5 { 1.0 } else if norm < 3.0 { 2.0 } else if norm < 7.0 { 5.0 } else { 10.0 };
    nice * mag
}

/// Multiples of a nice step falling inside `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(min.is_finite() && max.is_finite()) || max <= min { return Vec::new(); }
    let step = nice_step(max - min, target);
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

/// Label for a tick value; decimals follow the step so 0.1 steps show one digit.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 { 0 } else { (-step.log10().floor()) as usize };
    // avoid "-0"
    let v = if value.abs() < step * 1e-9 { 0.0 } else { value };
    format!("{:.*}", decimals, v)
}
