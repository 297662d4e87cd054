/// Centered moving average over `window` samples.
///
/// Inputs shorter than the window come back unchanged. Otherwise positions
/// whose window would run past either end of the data are `None`, the same
/// edge behaviour as a centered rolling mean.
pub fn centered_moving_average(data: &[i64], window: usize) -> Vec<Option<f64>> {
    if window == 0 || data.len() < window {
        return data.iter().map(|&v| Some(v as f64)).collect();
    }

    let half = window / 2;
    (0..data.len())
        .map(|i| {
            let lo = i.checked_sub(half)?;
            let hi = lo + window;
            if hi > data.len() {
                return None;
            }
            let sum: f64 = data[lo..hi].iter().map(|&v| v as f64).sum();
            Some(sum / window as f64)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_short_input_unchanged() {
        assert_eq!(
            centered_moving_average(&[0, 81], 5),
            vec![Some(0.0), Some(81.0)]
        );
        assert!(centered_moving_average(&[], 5).is_empty());
    }

    #[test]
    fn test_edges_are_undefined() {
        let smoothed = centered_moving_average(&[0, 81, 81, 181, 81, 0], 5);
        assert_eq!(smoothed.len(), 6);
        assert_eq!(smoothed[0], None);
        assert_eq!(smoothed[1], None);
        assert_relative_eq!(smoothed[2].unwrap(), 84.8);
        assert_relative_eq!(smoothed[3].unwrap(), 84.8);
        assert_eq!(smoothed[4], None);
        assert_eq!(smoothed[5], None);
    }

    #[test]
    fn test_exact_window_has_single_value() {
        let smoothed = centered_moving_average(&[0, 10, 20, 30, 40], 5);
        assert_eq!(smoothed, vec![None, None, Some(20.0), None, None]);
    }

    #[test]
    fn test_even_window_leans_left() {
        // window 4 centered on i covers i-2..=i+1
        let smoothed = centered_moving_average(&[0, 4, 8, 12, 16], 4);
        assert_eq!(smoothed, vec![None, None, Some(6.0), Some(10.0), None]);
    }
}
