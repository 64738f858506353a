pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod details_view_model;
pub mod dialogs;
pub mod icons;
pub mod list_utils;
pub mod modal_frame;
pub mod modal_stack;
pub mod number_format;
pub mod state_cell;
