//! Interface table formatting using tabled

use std::collections::BTreeMap;

use tabled::{
    builder::Builder,
    settings::{Color, Style, object::Rows},
};

use crate::store::InterfaceConfig;

const HEADERS: [&str; 3] = ["Interface", "Address", "MAC"];

/// Render interfaces as a table, one row per interface in name order
///
/// # Arguments
/// * `interfaces` - Interfaces keyed by name
/// * `use_colors` - Color the header row
pub fn interfaces_table(interfaces: &BTreeMap<String, InterfaceConfig>, use_colors: bool) -> String {
    let mut builder = Builder::default();
    builder.push_record(HEADERS);
    for (name, iface) in interfaces {
        builder.push_record([
            name.as_str(),
            or_dash(&iface.address),
            or_dash(&iface.mac),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern());
    if use_colors {
        table.modify(Rows::first(), Color::FG_CYAN | Color::BOLD);
    }
    table.to_string()
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
