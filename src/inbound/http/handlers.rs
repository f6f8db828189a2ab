pub mod contact;
pub mod contact_seller;
pub mod health_check;

pub use contact::contact;
pub use contact_seller::contact_seller;
pub use health_check::health_check;
