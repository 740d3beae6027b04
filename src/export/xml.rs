//! XML export functionality
//!
//! Produces a `<vehicles>` document with two spaces of indentation per level.
//! Text content is inserted as-is unless escaping is switched on.

use super::ExportOptions;
use crate::filter::FilteredView;
use crate::models::VehicleRecord;

const DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Encode a view as an XML document (no trailing newline)
pub fn encode_xml(view: &FilteredView, options: &ExportOptions) -> Vec<u8> {
    let mut xml = String::from(DECLARATION);
    xml.push_str("<vehicles>\n");

    for vehicle in view {
        push_vehicle(&mut xml, vehicle, options);
    }

    xml.push_str("</vehicles>");
    xml.into_bytes()
}

fn push_vehicle(xml: &mut String, vehicle: &VehicleRecord, options: &ExportOptions) {
    let text = |s: &str| {
        if options.escape_special_chars {
            escape_xml(s)
        } else {
            s.to_string()
        }
    };

    xml.push_str("  <vehicle>\n");
    xml.push_str(&format!("    <id>{}</id>\n", vehicle.id));
    xml.push_str(&format!("    <customerId>{}</customerId>\n", vehicle.customer_id));
    xml.push_str(&format!("    <make>{}</make>\n", text(&vehicle.make)));
    xml.push_str(&format!("    <model>{}</model>\n", text(&vehicle.model)));
    xml.push_str(&format!(
        "    <initialRegistration>{}</initialRegistration>\n",
        text(vehicle.initial_registration_or_empty())
    ));
    xml.push_str(&format!("    <color>{}</color>\n", text(vehicle.color_or_empty())));
    xml.push_str(&format!("    <status>{}</status>\n", vehicle.status.label()));
    xml.push_str("    <equipmentFeatures>\n");
    for feature in &vehicle.equipment_features {
        xml.push_str(&format!("      <feature>{}</feature>\n", text(feature)));
    }
    xml.push_str("    </equipmentFeatures>\n");
    xml.push_str("  </vehicle>\n");
}

/// Escape the five predefined XML entities
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
