pub(crate) fn normalize_l2(values: &mut [f64]) {
    let norm: f64 = values.iter().map(|&x| x * x).sum::<f64>().sqrt();
    scale(values, norm);
}

pub(crate) fn normalize_l1(values: &mut [f64]) {
    let norm: f64 = values.iter().map(|x| x.abs()).sum();
    scale(values, norm);
}

fn scale(values: &mut [f64], norm: f64) {
    // An all-zero row has nothing to normalize and stays all-zero.
    if norm > 1e-10 {
        values.iter_mut().for_each(|v| *v /= norm);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_l2_unit_length() {
        let mut values = vec![3.0, 4.0];
        normalize_l2(&mut values);
        assert!((values[0] - 0.6).abs() < 1e-6);
        assert!((values[1] - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_l1_sums_to_one() {
        let mut values = vec![1.0, 3.0];
        normalize_l1(&mut values);
        assert!((values.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_stays_zero() {
        let mut values = vec![0.0, 0.0];
        normalize_l2(&mut values);
        assert_eq!(values, vec![0.0, 0.0]);
    }
}
