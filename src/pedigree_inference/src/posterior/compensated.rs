use std::ops::AddAssign;

/// Running sum with Neumaier (improved Kahan-Babuska) compensation.
/// The compensation term carries the low-order bits lost by each addition.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CompensatedSum {
    sum         : f64,
    compensation: f64,
}

impl CompensatedSum {
    #[inline]
    pub fn add(&mut self, value: f64) {
        let t = self.sum + value;
        if self.sum.abs() >= value.abs() {
            self.compensation += (self.sum - t) + value;
        } else {
            self.compensation += (value - t) + self.sum;
        }
        self.sum = t;
    }

    /// Combine two partial sums. Both running sums and both compensations are added.
    #[must_use]
    pub fn merge(mut self, other: CompensatedSum) -> Self {
        self.add(other.sum);
        self.compensation += other.compensation;
        self
    }

    #[inline]
    #[must_use]
    pub fn value(&self) -> f64 {
        self.sum + self.compensation
    }
}

impl AddAssign<f64> for CompensatedSum {
    fn add_assign(&mut self, value: f64) {
        self.add(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn recovers_lost_bits() {
        // Naive summation yields 0.0 here.
        let mut sum = CompensatedSum::default();
        for value in [1.0, 1e100, 1.0, -1e100] {
            sum += value;
        }
        assert_eq!(sum.value(), 2.0);
    }

    #[test]
    fn many_small_terms() {
        let mut sum = CompensatedSum::default();
        (0..1_000_000).for_each(|_| sum.add(0.1));
        assert!(approx_eq!(f64, sum.value(), 100_000.0, ulps = 1));
    }

    #[test]
    fn merge() {
        let values: Vec<f64> = (1..=1000).map(|i| 1.0 / f64::from(i)).collect();
        let (left, right) = values.split_at(337);

        let mut whole = CompensatedSum::default();
        values.iter().for_each(|&v| whole.add(v));

        let mut a = CompensatedSum::default();
        let mut b = CompensatedSum::default();
        left.iter().for_each(|&v| a.add(v));
        right.iter().for_each(|&v| b.add(v));

        assert!(approx_eq!(f64, a.merge(b).value(), whole.value(), ulps = 2));
    }
}
