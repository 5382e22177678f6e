use zipranges::{Interval, RangeError};

pub struct Case {
    pub line: usize,
    pub specs: Vec<String>,
    pub expected: String,
}

/// Reads `test_cases/<name>`: a line of specs, then a `=>` line with the
/// expected rendering. Blank lines and `#` comments are skipped.
pub fn load_cases(name: &str) -> Vec<Case> {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_cases")
        .join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("couldn't read {:?}: {}", path, e));
    let mut cases = vec![];
    let mut pending: Option<(usize, Vec<String>)> = None;
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match (line.strip_prefix("=>"), pending.take()) {
            (Some(expected), Some((line, specs))) => cases.push(Case {
                line,
                specs,
                expected: expected.trim().to_string(),
            }),
            (Some(_), None) => panic!("{:?} line {}: expectation without input", path, index + 1),
            (None, _) => {
                let specs = line.split_ascii_whitespace().map(str::to_owned).collect();
                pending = Some((index + 1, specs));
            }
        }
    }
    assert!(pending.is_none(), "{:?} ends with an input that has no expectation", path);
    cases
}

pub fn render(ranges: &[Interval]) -> String {
    ranges
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn error_kind(error: &RangeError) -> &'static str {
    match error {
        RangeError::InvalidFormat(_) => "InvalidFormat",
        RangeError::InvalidRange(_) => "InvalidRange",
        RangeError::InvalidArgument(_) => "InvalidArgument",
    }
}
