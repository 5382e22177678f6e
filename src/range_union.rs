use crate::interval::{Interval, RangeError};

/// Accumulates ranges and collapses them into the fewest ranges covering the
/// same ZIP codes.
#[derive(Default, Debug, Clone)]
pub struct RangeCollapser {
    ranges: Vec<Interval>,
}

impl RangeCollapser {
    /// Parses every spec (`"#####,#####"`), stopping at the first bad one.
    pub fn from_specs<I, S>(specs: I) -> Result<Self, RangeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ranges = specs
            .into_iter()
            .map(|spec| Interval::parse(spec.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { ranges })
    }

    pub fn push(&mut self, range: Interval) {
        self.ranges.push(range);
    }

    pub fn extend(&mut self, ranges: impl IntoIterator<Item = Interval>) {
        for range in ranges {
            self.push(range);
        }
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Sorts, then folds each range into its predecessor whenever it starts
    /// inside it. Output is sorted by lower bound and pairwise disjoint;
    /// ranges separated by a gap of even one ZIP code stay separate.
    ///
    /// Fails with `InvalidArgument` if no ranges were added.
    pub fn collapse(mut self) -> Result<Vec<Interval>, RangeError> {
        if self.is_empty() {
            return Err(RangeError::InvalidArgument("no ranges given"));
        }
        self.ranges.sort_unstable();
        let mut collapsed: Vec<Interval> = Vec::with_capacity(self.ranges.len());
        for current in self.ranges {
            match collapsed.last_mut() {
                // sorted by lower bound, so starting inside `previous` means overlapping it
                Some(previous) if previous.is_overlapping_lower(&current) => {
                    previous.merge_upper(&current)?;
                }
                _ => collapsed.push(current),
            }
        }
        Ok(collapsed)
    }
}

impl FromIterator<Interval> for RangeCollapser {
    fn from_iter<T: IntoIterator<Item = Interval>>(iter: T) -> Self {
        let mut collapser = Self::default();
        collapser.extend(iter);
        collapser
    }
}

/// Parses `specs` and collapses them. Fails on an empty input or on the first
/// spec that doesn't parse; there are no partial results.
pub fn collapse<I, S>(specs: I) -> Result<Vec<Interval>, RangeError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    RangeCollapser::from_specs(specs)?.collapse()
}
