pub mod compare;
pub mod price;
pub mod setup;
pub mod ui;
