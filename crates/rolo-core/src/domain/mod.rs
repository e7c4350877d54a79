pub mod address;
pub mod birthday;
pub mod book;
pub mod contact;
pub mod email;
pub mod ids;
pub mod name;
pub mod note;
pub mod phone;

pub use address::Address;
pub use birthday::{occurrence_in_year, Birthday, BIRTHDAY_FORMAT};
pub use book::AddressBook;
pub use contact::Contact;
pub use email::{normalize_email, Email};
pub use ids::ContactId;
pub use name::Name;
pub use note::{Note, CREATED_AT_FORMAT};
pub use phone::{normalize_phone, Phone};
