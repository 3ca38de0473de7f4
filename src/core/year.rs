use crate::core::dom;
use crate::utils::error::Result;
use chrono::{Datelike, Local};

/// Four-digit calendar year from the system clock, local time.
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Sets the text of the element carrying `element_id` to the current year.
/// The lookup fault propagates when the id does not resolve; callers decide
/// whether that aborts anything.
pub fn set_current_year(html: &str, element_id: &str) -> Result<String> {
    dom::set_text_by_id(html, element_id, &current_year().to_string())
}
