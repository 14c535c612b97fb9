//! Default value functions for serde deserialization.

pub fn grid_size() -> usize {
    32
}

pub fn scale() -> f64 {
    2.0
}

pub fn margin_cells() -> usize {
    1
}

pub fn map_out() -> String {
    "map-out.txt".to_string()
}

pub fn plan_out() -> String {
    "plan-out.txt".to_string()
}
