pub mod a001_product_line;
pub mod a002_product;
pub mod a003_customer;
pub mod a004_order;
pub mod a005_employee;
