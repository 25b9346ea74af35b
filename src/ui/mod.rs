pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{header, info, section, success};
pub use table::{choices_table, stats_table, TableBuilder};
pub use theme::{theme, Theme};
