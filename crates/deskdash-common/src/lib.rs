pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ConfigError, ContentError, DeskdashError, RelayError};
pub use events::{Event, EventBus};
pub use id::{new_correlation_id, short_id};
pub use types::{
    PushEvent, RequestRecord, RequestStatus, WindowAction, WindowId, WindowSource,
};

pub type Result<T> = std::result::Result<T, DeskdashError>;
