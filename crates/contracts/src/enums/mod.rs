pub mod order_status;
pub mod section;
