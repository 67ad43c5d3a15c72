//! Column-name labeling helpers.
//!
//! Column names are usually `snake_case` database identifiers. These helpers
//! derive display labels and type-style names from them.

/// Turn a column name into a human-readable label.
///
/// The input is lower-cased first, then every underscore becomes a blank
/// and the first letter of each segment is capitalized:
/// `"ORDER_TOTAL"` becomes `"Order Total"`.
pub fn labelize(name: &str) -> String {
    camelize_with(&name.to_lowercase(), " ")
}

/// Turn a column name into a single capitalized token.
///
/// Underscores are dropped and the following letter is capitalized:
/// `"order_total"` becomes `"OrderTotal"`. Unlike [`labelize`] the rest of
/// each segment keeps its original case.
pub fn camelize(name: &str) -> String {
    camelize_with(name, "")
}

fn camelize_with(name: &str, underscore_replacement: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut next_upper = true;

    for c in name.chars() {
        if c == '_' {
            out.push_str(underscore_replacement);
            next_upper = true;
        } else if next_upper {
            out.extend(c.to_uppercase());
            next_upper = false;
        } else {
            out.push(c);
        }
    }

    out
}
