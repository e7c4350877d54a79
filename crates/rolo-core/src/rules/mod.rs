pub mod birthdays;

pub use birthdays::{birthdays_this_day, birthdays_this_week, next_occurrence, week_window};
