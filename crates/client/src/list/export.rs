use contracts::shared::export::ExportFormat;
use contracts::shared::list_filter::ListFilter;

/// File name for an export: the stem followed by every active filter value
/// in key order, or `_all` when nothing is filtered.
///
/// `payments` + {month: 2024-05, recipientType: driver} + Excel
/// -> `payments_2024-05_driver.xlsx`
pub fn export_filename(stem: &str, filter: &ListFilter, format: ExportFormat) -> String {
    let mut name = stem.to_string();
    if filter.is_empty() {
        name.push_str("_all");
    } else {
        for value in filter.values() {
            name.push('_');
            name.push_str(&sanitize(value));
        }
    }
    format!("{}.{}", name, format.extension())
}

fn sanitize(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list_filter::keys;

    #[test]
    fn test_filename_from_filters() {
        let filter = ListFilter::new()
            .with(keys::RECIPIENT_TYPE, "driver")
            .with(keys::RECIPIENT_ID, "12")
            .with(keys::MONTH, "2024-05");
        assert_eq!(
            export_filename("payments", &filter, ExportFormat::Excel),
            "payments_2024-05_12_driver.xlsx"
        );
    }

    #[test]
    fn test_filename_without_filters() {
        assert_eq!(
            export_filename("fuel", &ListFilter::new(), ExportFormat::Pdf),
            "fuel_all.pdf"
        );
    }

    #[test]
    fn test_unsafe_characters_replaced() {
        let filter = ListFilter::new().with(keys::STATUS, "on hold/x");
        assert_eq!(
            export_filename("invoices", &filter, ExportFormat::Pdf),
            "invoices_on_hold_x.pdf"
        );
    }
}
