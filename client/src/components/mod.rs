//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write the catalog view-model from Leptos context; only
//! `product_card` is context-free and takes its product as a prop.

pub mod flash_message;
pub mod product_card;
pub mod product_entry_form;
pub mod product_list;
