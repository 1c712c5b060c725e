pub mod config;
pub mod controller;
pub mod counter;
pub mod error;
pub mod event;
pub mod fetch;
pub mod geometry;
pub mod locator;
pub mod logging;
pub mod scheduler;
pub mod traits;

// Export collaborator capabilities
pub use traits::{ElementHandle, ElementLocator, Scheduler, XmlFetcher};

// Export the state machine
pub use controller::{TooltipController, TooltipState};
pub use counter::{InteractionCounter, Tick};
pub use event::{Key, PointerEvent, TargetRef};
pub use scheduler::{TimerAction, TimerQueue};

// Export fetching
pub use fetch::{
    extract_fragment, FetchCompletion, FetchRequest, HttpXmlFetcher, RequestGeneration,
    VirtualFetcher,
};

// Export page model and geometry
pub use geometry::{Point, Rect};
pub use locator::{PageElement, PageModel};

// Export configuration and errors
pub use config::{ContentKind, FetchPolicy, TooltipConfig};
pub use error::{ConfigError, FetchError};
pub use logging::init_logging;
