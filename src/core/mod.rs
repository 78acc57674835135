// Core helper modules: predicates, guards, text, phone, and error shaping.
pub mod collections;
pub mod error;
pub mod is;
pub mod phone;
pub mod response;
pub mod text;
