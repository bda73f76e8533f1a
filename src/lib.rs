// Host bridge modules
pub mod bridge;
pub mod event;
pub mod progress;
pub mod rom;
pub mod runtime;
pub mod update;


// Re-exports
pub use bridge::{Bridge, LifecycleState};
pub use event::{UiEvent, UiEventSource};
pub use progress::{ProgressEvent, ProgressTranslator};
pub use rom::{CatalogEntry, CatalogError, CatalogSelection, RomSelection};
pub use runtime::{Runtime, RuntimeEvent};
pub use update::{RunLabel, UiUpdate};
