//! Purpose: Define the stable public Rust API boundary for utilkit.
//! Exports: Helper operations, the `Utility` facade, and the error model.
//! Role: Public, additive-only surface over the `core` modules.
//! Invariants: Free functions and `Utility` methods share one implementation.

mod utility;

pub use crate::core::collections::{
    find_all_index, find_all_index_value, object_values, strict_eq,
};
#[doc(hidden)]
pub use crate::core::error::to_status;
pub use crate::core::error::{Error, ErrorKind, normalize_error};
pub use crate::core::is;
pub use crate::core::phone::{
    DEFAULT_REGION, PhoneFormatter, reformat_phone_number, reformat_phone_numbers,
};
pub use crate::core::response::{
    Deferred, reject_if_exist, reject_if_response_is_none, simple_error_handler,
};
pub use crate::core::text::{
    has_alphabet, strip_leading_char, strip_leading_char_value, strip_leading_zeros,
    strip_leading_zeros_value,
};
pub use utility::{Utility, UtilityOptions};
