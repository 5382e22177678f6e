use zipranges::Interval;

pub struct OutputOptions {
    pub separator: String,
    pub use_color: bool,
}

fn render_one(range: &Interval, use_color: bool) -> String {
    let lower = console::style(range.lower()).cyan().force_styling(use_color);
    let upper = console::style(range.upper()).cyan().force_styling(use_color);
    format!("[{},{}]", lower, upper)
}

pub fn render(ranges: &[Interval], options: &OutputOptions) -> String {
    ranges
        .iter()
        .map(|range| render_one(range, options.use_color))
        .collect::<Vec<_>>()
        .join(&options.separator)
}

pub fn write_ranges(
    out: &mut impl std::io::Write,
    ranges: &[Interval],
    options: &OutputOptions,
) -> std::io::Result<()> {
    writeln!(out, "{}", render(ranges, options))?;
    out.flush()
}

pub fn is_broken_pipe<T>(result: &std::io::Result<T>) -> bool {
    match result {
        Err(e) => e.kind() == std::io::ErrorKind::BrokenPipe,
        Ok(_) => false,
    }
}
