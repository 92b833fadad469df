//! Custom Widgets

pub mod feature_grid;
pub mod pricing_table;
pub mod testimonial_list;
pub mod typewriter_line;

pub use feature_grid::FeatureGrid;
pub use pricing_table::PricingTable;
pub use testimonial_list::TestimonialList;
pub use typewriter_line::TypewriterLine;

/// Wrap `text` to `width` columns, hanging continuation lines under `indent`
pub(crate) fn wrap(text: &str, width: usize, indent: &str) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let options = textwrap::Options::new(width).subsequent_indent(indent);
    textwrap::wrap(text, options)
        .into_iter()
        .map(std::borrow::Cow::into_owned)
        .collect()
}
