//! Collapse a series of timestamps into time ranges.
//!
//! Results are sampled every second or so.  Two consecutive timestamps more than `GAP` apart
//! mean that the alert stopped and started again later on.
//!

use serde::{Deserialize, Serialize};

/// Largest gap (in seconds) between two timestamps of the same range.
///
pub const GAP: f64 = 1.0;

/// A closed time range `[start, end]`, serialised as a two-element array.
///
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    pub fn new(start: f64, end: f64) -> Self {
        Interval { start, end }
    }

    #[inline]
    pub fn contains(&self, t: f64) -> bool {
        self.start <= t && t <= self.end
    }
}

impl From<(f64, f64)> for Interval {
    fn from((start, end): (f64, f64)) -> Self {
        Interval { start, end }
    }
}

impl From<Interval> for (f64, f64) {
    fn from(value: Interval) -> Self {
        (value.start, value.end)
    }
}

/// Is there a break between two consecutive timestamps?
///
#[inline]
fn is_break(a: f64, b: f64) -> bool {
    a + GAP < b
}

/// Turn an ascending series of timestamps into the minimal list of ranges covering all of them,
/// merging neighbours at most `GAP` apart.
///
/// Unsorted input gives meaningless ranges.
///
/// ```
/// use tv_formats::{collapse, Interval};
///
/// let r = collapse(&[1.0, 1.9, 5.0, 5.5]);
/// assert_eq!(vec![Interval::new(1.0, 1.9), Interval::new(5.0, 5.5)], r);
/// ```
///
pub fn collapse(nums: &[f64]) -> Vec<Interval> {
    let (Some(&first), Some(&last)) = (nums.first(), nums.last()) else {
        return vec![];
    };

    // Every break gives the end of one range and the start of the next one.
    //
    let mut edges = vec![first];
    for w in nums.windows(2) {
        if is_break(w[0], w[1]) {
            edges.push(w[0]);
            edges.push(w[1]);
        }
    }
    edges.push(last);

    edges
        .chunks_exact(2)
        .map(|e| Interval::new(e[0], e[1]))
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![5.0], vec![(5.0, 5.0)])]
    #[case(vec![1.0, 1.5, 2.0], vec![(1.0, 2.0)])]
    #[case(vec![1.0, 2.0], vec![(1.0, 2.0)])]
    #[case(vec![1.0, 3.0], vec![(1.0, 1.0), (3.0, 3.0)])]
    #[case(vec![1.0, 1.9, 5.0, 5.5], vec![(1.0, 1.9), (5.0, 5.5)])]
    #[case(vec![0.0, 0.0, 0.0], vec![(0.0, 0.0)])]
    #[case(vec![0.0, 1.0, 2.0, 4.0, 6.0, 7.0], vec![(0.0, 2.0), (4.0, 4.0), (6.0, 7.0)])]
    fn test_collapse(#[case] nums: Vec<f64>, #[case] res: Vec<(f64, f64)>) {
        let res: Vec<Interval> = res.into_iter().map(Interval::from).collect();
        assert_eq!(res, collapse(&nums));
    }

    #[test]
    fn test_interval_json() {
        let r = collapse(&[1.0, 3.0]);
        let s = serde_json::to_string(&r).unwrap();
        assert_eq!("[[1.0,1.0],[3.0,3.0]]", s);

        let back: Vec<Interval> = serde_json::from_str(&s).unwrap();
        assert_eq!(r, back);
    }

    /// Ascending series, steps by 0.1s from 0 to 3s so that exact 1s gaps happen.
    ///
    fn ascending() -> impl Strategy<Value = Vec<f64>> {
        (0u32..100, prop::collection::vec(0u32..30, 0..60)).prop_map(|(start, steps)| {
            let mut t = start as f64;
            steps
                .into_iter()
                .map(|s| {
                    t += s as f64 * 0.1;
                    t
                })
                .collect()
        })
    }

    fn which(r: &[Interval], t: f64) -> Vec<usize> {
        r.iter()
            .enumerate()
            .filter(|(_, i)| i.contains(t))
            .map(|(n, _)| n)
            .collect()
    }

    proptest! {
        #[test]
        fn prop_every_point_in_one_range(nums in ascending()) {
            let r = collapse(&nums);
            for t in &nums {
                prop_assert_eq!(1, which(&r, *t).len());
            }
        }

        #[test]
        fn prop_neighbours(nums in ascending()) {
            let r = collapse(&nums);
            for w in nums.windows(2) {
                let (a, b) = (which(&r, w[0]), which(&r, w[1]));
                if is_break(w[0], w[1]) {
                    prop_assert_ne!(a, b);
                } else {
                    prop_assert_eq!(a, b);
                }
            }
        }

        #[test]
        fn prop_sorted_disjoint(nums in ascending()) {
            let r = collapse(&nums);
            prop_assert_eq!(nums.is_empty(), r.is_empty());
            for i in &r {
                prop_assert!(i.start <= i.end);
            }
            for w in r.windows(2) {
                prop_assert!(w[0].end < w[1].start);
            }
        }
    }
}
