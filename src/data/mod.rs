pub mod crops;
pub mod fertilizers;

/// Code written for an empty (or inactive) tile in both crop and fertilizer rows.
pub const EMPTY_CODE: &str = "N";
