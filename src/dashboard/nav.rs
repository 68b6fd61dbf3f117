/// Route for the breadcrumb entry at `index`.
///
/// Joins segments `0..=index` with `/` and prefixes a leading `/`, so for
/// `["experiments", "mnist", "1"]` the entry at index 1 maps to
/// `/experiments/mnist`. The first segment is the root of the trail and not
/// navigable on its own; index 0 and out-of-range indices have no route.
pub fn breadcrumb_path<S: AsRef<str>>(segments: &[S], index: usize) -> Option<String> {
    if index == 0 || index >= segments.len() {
        return None;
    }
    let mut path = String::new();
    for segment in &segments[..=index] {
        path.push('/');
        path.push_str(segment.as_ref());
    }
    Some(path)
}

/// The history stack routes are pushed onto.
///
/// The dashboard only ever appends; it never reads the stack back. Invalid
/// routes are the router's problem to report.
pub trait Navigator {
    fn push(&mut self, path: &str);
}

/// Side channel for navigation diagnostics.
pub trait DiagnosticSink {
    fn record(&mut self, path: &str);
}

/// Default sink: forwards the target route to the `log` facade, which stays
/// silent unless the host application installs a logger.
pub struct LogDiagnostics;

impl DiagnosticSink for LogDiagnostics {
    fn record(&mut self, path: &str) {
        log::debug!("{}", path);
    }
}
