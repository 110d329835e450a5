#[path = "io/path_data.rs"]
mod path_data;
#[path = "io/serialization.rs"]
mod serialization;
#[path = "io/svg_elements.rs"]
mod svg_elements;
