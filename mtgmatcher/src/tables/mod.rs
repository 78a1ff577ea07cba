//! Static override data consulted by the adjuster and the filters

pub mod editions;
pub mod reskins;
pub mod variants;
pub mod years;

pub use editions::{commander_edition, edition_alias};
pub use reskins::{find_reskin, Reskin};
pub use variants::variant_number;
pub use years::{arena_year_in_text, world_champion_prefix, world_champion_years};
