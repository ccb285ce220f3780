pub mod export;
pub mod holidays;
pub mod month;
pub mod note;
pub mod week;
pub mod year;
