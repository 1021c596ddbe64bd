//! Admin forms
//!
//! Each form holds raw user input (strings, as typed) and validates it into
//! the payload the API expects. Validation failures are [`FormError`]s and no
//! request is made.
//!
//! [`FormError`]: crate::validation::FormError

mod catalog;
mod coupon;
mod people;
mod settings;

pub use catalog::{CategoryForm, ProductForm, SubcategoryForm};
pub use coupon::CouponForm;
pub use people::{CustomerForm, LoginForm, ReplyForm};
pub use settings::DeliveryCostForm;
