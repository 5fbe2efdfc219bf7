pub use super::star_message::Entity as StarMessage;
