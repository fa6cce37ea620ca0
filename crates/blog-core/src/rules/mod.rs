//! Business rules over entries
//!
//! - [`mood`]: emoji and wording must agree with the blog's sentiment
//! - [`keywords`]: AND-keyword matching for bulk purges

pub mod keywords;
pub mod mood;

pub use keywords::KeywordFilter;
pub use mood::{check_content, check_emoji, check_entry, NEGATIVE_PHRASES, POSITIVE_PHRASES};
