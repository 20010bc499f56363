use crate::scoring::domain::Gav;

/// Parses one manifest line into a GAV coordinate.
///
/// A dependencies manifest holds one `group:artifact:version` coordinate
/// per line. Blank lines, `#` comment lines, and lines that do not yield
/// a valid three-part coordinate return `None`; the orchestrator skips
/// them rather than aborting the batch.
pub fn parse_gav(line: &str) -> Option<Gav> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let mut fields = line.splitn(3, ':');
    let group = fields.next()?;
    let artifact = fields.next()?;
    let version = fields.next()?;

    Gav::new(group.to_string(), artifact.to_string(), version.to_string()).ok()
}
