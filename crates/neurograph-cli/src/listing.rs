//! Plain-text rendering of the anatomy table.

use neurograph::anatomy::AnatomyRecord;

/// Formats every record as its name followed by indented function and
/// analogy lines, with a blank line between records.
pub fn render_listing(records: &[AnatomyRecord]) -> String {
    records
        .iter()
        .map(|record| {
            format!(
                "{}\n  {}\n  {}\n",
                record.name(),
                record.function(),
                record.analogy()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use neurograph::anatomy::anatomy_records;

    use super::*;

    #[test]
    fn test_listing_keeps_record_order() {
        let listing = render_listing(anatomy_records());
        let headers: Vec<&str> = listing
            .lines()
            .filter(|line| !line.is_empty() && !line.starts_with(' '))
            .collect();
        let names: Vec<&str> = anatomy_records().iter().map(|r| r.name()).collect();
        assert_eq!(headers, names);
    }

    #[test]
    fn test_listing_layout() {
        let records = &anatomy_records()[..2];
        let listing = render_listing(records);
        let lines: Vec<&str> = listing.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], records[0].name());
        assert_eq!(lines[1], format!("  {}", records[0].function()));
        assert_eq!(lines[2], format!("  {}", records[0].analogy()));
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], records[1].name());
    }

    #[test]
    fn test_empty_listing() {
        assert!(render_listing(&[]).is_empty());
    }
}
