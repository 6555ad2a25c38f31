pub mod add;
pub mod calendar;
pub mod delete;
pub mod edit;
pub mod list;
pub mod ui;
