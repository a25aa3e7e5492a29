// Data Models
pub mod file_entry;
pub mod listing;
pub mod nav_state;
pub mod places;
pub mod sort;

pub use file_entry::{DirectoryEntry, EntryKind, ListingRow};
pub use listing::{Snapshot, StatusSummary};
pub use nav_state::NavigationState;
pub use places::{Place, PlaceName, PlaceTable};
pub use sort::{SortBy, SortOrder};
