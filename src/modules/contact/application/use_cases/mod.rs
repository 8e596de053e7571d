pub mod submit_contact;

pub use submit_contact::{
    ISubmitContactUseCase, SubmitContactError, SubmitContactUseCase, GENERIC_SUBMIT_ERROR,
};
