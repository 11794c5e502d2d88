//! Rolling-window math shared by the indicators

/// Mean of a slice. `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Rolling mean over `window` values, aligned to the input.
///
/// Entry `i` is `None` until `window` values ending at `i` exist. Each window is
/// summed from scratch so long series do not accumulate drift from a running sum.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if window == 0 || values.len() < window {
        return out;
    }

    for (offset, slice) in values.windows(window).enumerate() {
        out[offset + window - 1] = mean(slice);
    }
    out
}

/// Split consecutive differences into gains and losses.
///
/// Returns one entry per delta, so the output is one shorter than the input.
pub fn gains_and_losses(values: &[f64]) -> (Vec<f64>, Vec<f64>) {
    values
        .windows(2)
        .map(|pair| {
            let change = pair[1] - pair[0];
            if change > 0.0 {
                (change, 0.0)
            } else {
                (0.0, change.abs())
            }
        })
        .unzip()
}
