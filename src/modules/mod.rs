pub mod contact;
pub mod content;
pub mod gateway;
pub mod profile;
pub mod rotator;
pub mod view;
