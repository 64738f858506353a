pub mod api;
pub mod dialogs;
pub mod form;
pub mod list_controller;
pub mod list_state;
pub mod modal_phase;
pub mod navigation;
pub mod query;
pub mod state_cell;
