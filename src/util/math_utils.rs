/**
Calculates the arithmetic mean of a slice of f64 values.

## Returns
The mean, or `f64::NAN` if the slice is empty.
 */
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/**
Calculates the median of a slice of f64 values.

## Arguments
- `values`: A slice of f64 values.

## Returns
The median of the values, or `f64::NAN` if the slice is empty.
 */
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }

    let mut sorted_values = values.to_vec();
    sorted_values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mid = sorted_values.len() / 2;
    if sorted_values.len() % 2 == 0 {
        (sorted_values[mid - 1] + sorted_values[mid]) / 2.0
    } else {
        sorted_values[mid]
    }
}

/**
Calculates the sample standard deviation (n - 1 denominator) of a slice of f64 values.

## Arguments
- `values`: A slice of f64 values.

## Returns
The standard deviation, or `None` if calculation is not possible (fewer than two values, or
any value is not finite).
 */
pub fn std_deviation(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }

    if values.iter().any(|v| !v.is_finite()) {
        return None;
    }

    let mean = mean(values);

    let variance = values
        .iter()
        .map(|value| {
            let diff = mean - value;
            diff * diff
        })
        .sum::<f64>()
        / ((n - 1) as f64);

    Some(variance.sqrt())
}
