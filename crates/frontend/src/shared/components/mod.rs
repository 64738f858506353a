pub mod details_form;
pub mod form_field;
pub mod list_page;
pub mod page_header;
pub mod pagination_controls;
