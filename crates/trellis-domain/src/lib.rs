pub mod action;
pub mod board;
pub mod card;
pub mod drag;
pub mod label;
pub mod list;
pub mod projection;
pub mod reducer;
pub mod status;

pub use action::Action;
pub use board::Board;
pub use card::{Card, CardId};
pub use drag::{resolve_drag, DragIntent};
pub use label::{Label, LabelColor, LabelId};
pub use list::{List, ListId};
pub use projection::{project, BoardView};
pub use reducer::reduce;
pub use status::{
    compute_status, compute_status_on, default_status_catalog, refresh_map, StatusDefinition,
    TaskStatus,
};
