use chart_core::{ChartError, SeriesPoint};

/// Round to two decimals, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert absolute values to percentage returns relative to the first record.
///
/// Only the named key is rewritten; every other key and the label pass through
/// untouched. The first record's value is always exactly `0.0` rather than
/// computed, so it never carries `-0` or float noise. The input is not
/// mutated.
///
/// A zero or non-finite baseline fails with `InvalidBaseline` instead of
/// propagating `inf`/`NaN` into the output. A record without the key fails
/// the whole call with `MissingField` so the result is never jagged.
pub fn normalize_returns(
    points: &[SeriesPoint],
    key: &str,
) -> Result<Vec<SeriesPoint>, ChartError> {
    if points.is_empty() {
        return Ok(Vec::new());
    }

    let baseline = points[0].value(key).ok_or_else(|| ChartError::MissingField {
        key: key.to_string(),
        index: 0,
    })?;

    if baseline == 0.0 || !baseline.is_finite() {
        return Err(ChartError::InvalidBaseline {
            key: key.to_string(),
            value: baseline,
        });
    }

    let mut result = Vec::with_capacity(points.len());
    for (index, point) in points.iter().enumerate() {
        let value = point.value(key).ok_or_else(|| ChartError::MissingField {
            key: key.to_string(),
            index,
        })?;

        let percent = if index == 0 {
            0.0
        } else {
            round2((value - baseline) / baseline * 100.0)
        };

        let mut normalized = point.clone();
        normalized.values.insert(key.to_string(), percent);
        result.push(normalized);
    }

    Ok(result)
}

/// Normalize several series keys over the same record set, each against its
/// own first-value baseline. Keys never share a baseline.
pub fn normalize_keys(
    points: &[SeriesPoint],
    keys: &[&str],
) -> Result<Vec<SeriesPoint>, ChartError> {
    let mut result = points.to_vec();
    for key in keys {
        result = normalize_returns(&result, key)?;
    }
    Ok(result)
}
