pub mod listing;
pub mod property;
pub mod sorting;
pub mod stats;
pub mod ticket;

pub use listing::{view, FilterForm, FilterSpec, ListingView};
pub use property::{ListingStatus, Location, Property, PropertyCategory};
pub use sorting::{sort_properties, SortKey};
pub use stats::{stats, TicketStats};
pub use ticket::{
    Comment, CommentId, Ticket, TicketDraft, TicketId, TicketPriority, TicketStatus, TicketUpdate,
};
