pub mod aggregate;
pub mod pipeline;

pub use aggregate::{count_by_area_code, group_by_area_code, CountReport, REPORT_SEPARATOR};
pub use pipeline::{
    check_initial_chars, check_length, check_only_digits, normalize, remove_blank_spaces,
    remove_leading_zeros, remove_plus_sign, Stage, PIPELINE, VALID_LENGTHS,
};
