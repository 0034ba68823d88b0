pub mod area_code;
pub mod candidate;
pub mod classified;

pub use area_code::{normalize_area_code, AreaCodeSet, MAX_AREA_CODE_LEN};
pub use candidate::Candidate;
pub use classified::{classify, ClassifiedNumber, SHORT_CODE_LEN};
