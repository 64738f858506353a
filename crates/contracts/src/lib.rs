//! Shared contracts of the ClassicModels CMS: backend records, form models,
//! the HTTP access layer and the view state that the frontend drives.

pub mod domain;
pub mod enums;
pub mod shared;
