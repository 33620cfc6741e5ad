//! Tag domain - mapping validated pools into registry tags

mod tag_builder;

pub use tag_builder::{build_tag, format_fee_percentage, PROJECT_NAME, WEBSITE_LINK};
