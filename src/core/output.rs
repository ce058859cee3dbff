use crate::domain::model::{OutputFormat, SearchReport};
use crate::utils::error::Result;

/// Renders one report per line. JSON is emitted as JSON Lines unless `pretty`.
pub fn render(reports: &[SearchReport], format: OutputFormat, pretty: bool) -> Result<String> {
    let mut out = String::new();

    for report in reports {
        let line = match format {
            OutputFormat::Text => report.found.text.clone(),
            OutputFormat::Json if pretty => serde_json::to_string_pretty(report)?,
            OutputFormat::Json => serde_json::to_string(report)?,
        };
        out.push_str(&line);
        out.push('\n');
    }

    Ok(out)
}
