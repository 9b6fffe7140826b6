use libgql_ast::ast::SourceLocation;
use libgql_registry::RegistryError;
use libgql_syntax::SyntaxError;

pub(crate) const GREEN_CHECK: &str = "\u{2705}";
pub(crate) const RED_X: &str = "\u{274C}";

pub(crate) fn format_syntax_error(error: &SyntaxError) -> String {
    format!("  * {}: {}", error.position, error.message)
}

pub(crate) fn format_registry_error(error: &RegistryError) -> String {
    let mut line = format!("  * {error}");
    let locations = error.locations();
    if !locations.is_empty() {
        line.push_str(&format!(" ({})", join_locations(&locations)));
    }
    line
}

fn join_locations(locations: &[&SourceLocation]) -> String {
    locations
        .iter()
        .map(|location| location.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
