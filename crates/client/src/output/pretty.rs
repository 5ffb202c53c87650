//! Pretty output formatting.

use ruffnote_core::item::{AvailabilityResponse, ItemResponse, ItemsResponse};
use ruffnote_core::service::ServiceDescriptor;

/// Format an item for display.
pub fn format_item(item: &ItemResponse) -> String {
    format!("{}\n  ID: {}", item.name, item.id)
}

/// Format items for display.
pub fn format_items(items: &ItemsResponse) -> String {
    if items.items.is_empty() {
        return "No items found.".to_string();
    }
    let mut output = format!("ITEMS ({})\n", items.items.len());
    output.push_str(&"-".repeat(40));
    for item in &items.items {
        output.push_str(&format!("\n{}", format_item(item)));
        output.push('\n');
    }
    output
}

pub fn format_availability(availability: &AvailabilityResponse) -> String {
    if availability.available {
        format!("'{}' is available", availability.name)
    } else {
        format!("'{}' is taken", availability.name)
    }
}

/// Format the service metadata for display.
pub fn format_service(service: &ServiceDescriptor) -> String {
    let mut output = format!(
        "{} {} ({})\n",
        service.name, service.version, service.description
    );
    output.push_str(&"-".repeat(40));
    for method in &service.methods {
        output.push_str(&format!(
            "\n{:<16} {:<6} {}/{}",
            method.name,
            method.http_method.as_str(),
            service.root_path(),
            method.path
        ));
    }
    output
}
