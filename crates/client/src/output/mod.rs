//! Output formatting functions.

pub mod pretty;

use crate::cli::OutputFormat;

/// Renders `value` as compact JSON or with its human-readable formatter.
pub fn render<T: serde::Serialize>(
    value: &T,
    format: OutputFormat,
    pretty: impl FnOnce(&T) -> String,
) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(value).unwrap_or_default(),
        OutputFormat::Pretty => pretty(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ruffnote_core::item::ItemResponse;

    #[test]
    fn test_render_json_is_compact() {
        let item = ItemResponse {
            id: "id".to_string(),
            name: "alpha".to_string(),
        };
        assert_eq!(
            render(&item, OutputFormat::Json, pretty::format_item),
            r#"{"id":"id","name":"alpha"}"#
        );
        assert_eq!(
            render(&item, OutputFormat::Pretty, pretty::format_item),
            "alpha\n  ID: id"
        );
    }
}
