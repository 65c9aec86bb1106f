// src/gui/components/mod.rs
pub mod profile_card;
pub mod search_bar;
