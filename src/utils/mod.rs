pub mod nickname;
pub mod string_utils;
