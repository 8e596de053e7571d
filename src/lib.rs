pub mod modules;

pub use modules::contact;
pub use modules::content;
pub use modules::gateway;
pub use modules::profile;
pub use modules::rotator;
pub use modules::view;
