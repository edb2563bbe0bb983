mod list_contacts;
mod submit_contact;

pub use list_contacts::ListContactsUseCase;
pub use submit_contact::SubmitContactUseCase;
