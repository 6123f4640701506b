pub mod garden;
pub mod plants;
pub mod schedule;
pub mod ui;

pub use garden::{create_garden, post_optimize, post_score};
pub use plants::list_plants;
pub use schedule::{get_schedule, list_zones};
pub use ui::index;
