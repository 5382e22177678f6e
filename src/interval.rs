/// Smallest bound a range may have (first 5-digit ZIP code).
pub const MIN_BOUND: u32 = 10000;
/// Largest bound a range may have.
pub const MAX_BOUND: u32 = 99999;

/// A closed range of ZIP codes, `[lower, upper]`, both ends included.
///
/// Every `Interval` in existence satisfies
/// `MIN_BOUND <= lower <= upper <= MAX_BOUND`. Operations that would break
/// that return an error and leave the value untouched.
///
/// Ordering is by `lower`, then by `upper`, and two intervals are equal
/// exactly when both bounds are.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    lower: u32,
    upper: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundsViolation {
    NotANumber(String),
    LowerTooSmall(u32),
    UpperTooLarge(u32),
    Inverted { lower: u32, upper: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// The text isn't shaped like `#####,#####`.
    InvalidFormat(String),
    /// The bounds are unparseable or fall outside the valid domain.
    InvalidRange(BoundsViolation),
    /// Nothing to work on.
    InvalidArgument(&'static str),
}

#[rustfmt::skip]
impl std::fmt::Display for BoundsViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotANumber(token)
                => write!(f, "ZIP codes must be positive integers, got {:?}", token),
            Self::LowerTooSmall(lower)
                => write!(f, "lower bound is less than {}: {}", MIN_BOUND, lower),
            Self::UpperTooLarge(upper)
                => write!(f, "upper bound is greater than {}: {}", MAX_BOUND, upper),
            Self::Inverted { lower, upper }
                => write!(f, "lower bound is greater than upper bound for range: [{},{}]", lower, upper),
        }
    }
}

#[rustfmt::skip]
impl std::fmt::Display for RangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(text)
                => write!(f, "wrong format for argument {:?}; correct format is #####,#####", text),
            Self::InvalidRange(violation)
                => write!(f, "{}", violation),
            Self::InvalidArgument(message)
                => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for RangeError {}

impl From<BoundsViolation> for RangeError {
    fn from(value: BoundsViolation) -> Self {
        Self::InvalidRange(value)
    }
}

fn check_bounds(lower: u32, upper: u32) -> Result<(), BoundsViolation> {
    if lower < MIN_BOUND {
        return Err(BoundsViolation::LowerTooSmall(lower));
    }
    if upper > MAX_BOUND {
        return Err(BoundsViolation::UpperTooLarge(upper));
    }
    if lower > upper {
        return Err(BoundsViolation::Inverted { lower, upper });
    }
    Ok(())
}

fn parse_bound(token: &str) -> Result<u32, BoundsViolation> {
    token
        .parse::<u32>()
        .map_err(|_| BoundsViolation::NotANumber(token.to_owned()))
}

impl Interval {
    pub fn new(lower: u32, upper: u32) -> Result<Self, RangeError> {
        check_bounds(lower, upper)?;
        Ok(Self { lower, upper })
    }

    /// Parses `"lower,upper"`, e.g. `"94200,94299"`.
    pub fn parse(text: &str) -> Result<Self, RangeError> {
        let mut tokens: Vec<&str> = text.split(',').collect();
        // trailing empty tokens don't count, so "90000," is missing its upper bound
        while tokens.last().is_some_and(|t| t.is_empty()) {
            tokens.pop();
        }
        let &[lower, upper] = tokens.as_slice() else {
            return Err(RangeError::InvalidFormat(text.to_owned()));
        };
        Self::new(parse_bound(lower)?, parse_bound(upper)?)
    }

    pub fn lower(&self) -> u32 {
        self.lower
    }

    pub fn upper(&self) -> u32 {
        self.upper
    }

    pub fn set_lower(&mut self, lower: u32) -> Result<(), RangeError> {
        check_bounds(lower, self.upper)?;
        self.lower = lower;
        Ok(())
    }

    pub fn set_upper(&mut self, upper: u32) -> Result<(), RangeError> {
        check_bounds(self.lower, upper)?;
        self.upper = upper;
        Ok(())
    }

    /// Extends the upper bound to cover `other`'s upper bound.
    pub fn merge_upper(&mut self, other: &Interval) -> Result<(), RangeError> {
        self.set_upper(self.upper.max(other.upper))
    }

    /// Extends the lower bound to cover `other`'s lower bound.
    pub fn merge_lower(&mut self, other: &Interval) -> Result<(), RangeError> {
        self.set_lower(self.lower.min(other.lower))
    }

    pub fn contains(&self, value: u32) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// Whether `other` starts somewhere inside `self`.
    pub fn is_overlapping_lower(&self, other: &Interval) -> bool {
        self.contains(other.lower)
    }

    /// Whether `other` ends somewhere inside `self`.
    pub fn is_overlapping_upper(&self, other: &Interval) -> bool {
        self.contains(other.upper)
    }

    /// Only looks at `other`'s endpoints, so `a.is_overlapping(b)` can be false
    /// while `b.is_overlapping(a)` is true when `b` strictly contains `a`.
    pub fn is_overlapping(&self, other: &Interval) -> bool {
        self.is_overlapping_lower(other) || self.is_overlapping_upper(other)
    }
}

impl std::str::FromStr for Interval {
    type Err = RangeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{}]", self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(lower: u32, upper: u32) -> Interval {
        Interval::new(lower, upper).unwrap()
    }

    #[test]
    fn accessors_return_constructed_bounds() {
        for (lower, upper) in [(10000, 10000), (10000, 99999), (94133, 94133), (99999, 99999)] {
            let interval = range(lower, upper);
            assert_eq!(interval.lower(), lower);
            assert_eq!(interval.upper(), upper);
        }
    }

    #[test]
    fn out_of_domain_bounds_are_rejected() {
        assert_eq!(
            Interval::new(9999, 20000),
            Err(RangeError::InvalidRange(BoundsViolation::LowerTooSmall(9999)))
        );
        assert_eq!(
            Interval::new(20000, 100000),
            Err(RangeError::InvalidRange(BoundsViolation::UpperTooLarge(100000)))
        );
        assert_eq!(
            Interval::new(90000, 89999),
            Err(RangeError::InvalidRange(BoundsViolation::Inverted {
                lower: 90000,
                upper: 89999
            }))
        );
    }

    #[test]
    fn parse_good() {
        assert_eq!(Interval::parse("94200,94299"), Ok(range(94200, 94299)));
        assert_eq!("94133,94133".parse::<Interval>(), Ok(range(94133, 94133)));
    }

    #[test]
    fn parse_bad_format() {
        for text in ["", "90001", "90000,", "90000,90001,90002", "90000 90001"] {
            assert!(
                matches!(Interval::parse(text), Err(RangeError::InvalidFormat(_))),
                "{:?} should be a format error",
                text
            );
        }
    }

    #[test]
    fn parse_bad_range() {
        for text in ["a0000,90000", "-90000,90000", "90000,900000", "90000,89999", ",90000", " 90000,90001"] {
            assert!(
                matches!(Interval::parse(text), Err(RangeError::InvalidRange(_))),
                "{:?} should be a range error",
                text
            );
        }
    }

    #[test]
    fn failed_setter_keeps_old_bounds() {
        let mut interval = range(90000, 90000);
        assert!(interval.set_upper(89999).is_err());
        assert_eq!(interval, range(90000, 90000));
        assert!(interval.set_lower(5).is_err());
        assert_eq!(interval, range(90000, 90000));
        interval.set_upper(90500).unwrap();
        interval.set_lower(90100).unwrap();
        assert_eq!(interval, range(90100, 90500));
    }

    #[test]
    fn merge_upper() {
        let mut first = range(90000, 95000);
        first.merge_upper(&range(91000, 96000)).unwrap();
        assert_eq!(first, range(90000, 96000));
    }

    #[test]
    fn merge_lower() {
        let mut first = range(91000, 96000);
        first.merge_lower(&range(90000, 95000)).unwrap();
        assert_eq!(first, range(90000, 96000));
    }

    #[test]
    fn merge_with_self_is_idempotent() {
        let original = range(94200, 94299);
        let mut merged = original;
        merged.merge_upper(&original).unwrap();
        merged.merge_lower(&original).unwrap();
        assert_eq!(merged, original);
    }

    #[test]
    fn overlap_checks_include_endpoints() {
        let base = range(94200, 94299);
        assert!(base.is_overlapping_lower(&range(94299, 94400)));
        assert!(!base.is_overlapping_lower(&range(94300, 94400)));
        assert!(base.is_overlapping_upper(&range(94100, 94200)));
        assert!(!base.is_overlapping_upper(&range(94100, 94199)));
        assert!(base.is_overlapping(&range(94250, 94260)));
        // endpoints of the outer range both sit outside the inner one
        assert!(!range(94250, 94260).is_overlapping(&base));
    }

    #[test]
    fn ordering_is_lower_then_upper() {
        let mut ranges = vec![range(94200, 94399), range(94133, 94133), range(94200, 94299)];
        ranges.sort();
        assert_eq!(ranges, vec![range(94133, 94133), range(94200, 94299), range(94200, 94399)]);
        assert_eq!(range(94200, 94299).cmp(&range(94200, 94299)), std::cmp::Ordering::Equal);
    }

    #[test]
    fn display() {
        assert_eq!(range(94133, 94133).to_string(), "[94133,94133]");
        assert_eq!(
            RangeError::InvalidFormat("90001".to_owned()).to_string(),
            "wrong format for argument \"90001\"; correct format is #####,#####"
        );
    }
}
