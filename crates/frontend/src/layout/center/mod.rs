pub mod center;
pub mod placeholder;

pub use center::Center;
pub use placeholder::Placeholder;
