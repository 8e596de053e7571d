pub mod animation;
pub mod detail;
pub mod effect;
pub mod fetch_state;
pub mod mount;

pub use animation::{AnimationTrigger, DEFAULT_ARM_DELAY};
pub use detail::{DetailOutcome, DetailView};
pub use effect::FetchEffect;
pub use fetch_state::{FetchState, FetchStatus};
pub use mount::MountHandle;
