#[macro_use]
extern crate lazy_static;

mod classes;
mod codepoint;
mod normalization;
mod scan;

pub use classes::classify;
pub use classes::is_identifier_continue;
pub use classes::is_identifier_start;
pub use classes::IdentifierClass;

pub use codepoint::character_name;
pub use codepoint::Codepoint;

pub use normalization::nfkc;
pub use normalization::normalization_note;
pub use normalization::NormalizationNote;

pub use scan::characters;
pub use scan::scalar_values;

pub use scan::CONTINUE_ONLY_CHARACTERS;
pub use scan::START_CHARACTERS;

/// версия Unicode, по которой классифицируются кодпоинты
pub fn unicode_version() -> String
{
    let (major, minor, micro) = unicode_xid::UNICODE_VERSION;

    format!("{}.{}.{}", major, minor, micro)
}
