//! Data models
//!
//! Records exchanged with the storefront REST API. The backend is the source
//! of truth; these types only carry what the admin reads or writes.
//! Ids may arrive as strings or numbers and under `id` or `_id`; they are
//! always normalized to `String` (see [`id`]).

pub mod category;
pub mod coupon;
pub mod customer;
pub mod id;
pub mod message;
pub mod order;
pub mod payment;
pub mod product;
pub mod refund;
pub mod settings;
pub mod user;

// Re-exports
pub use category::*;
pub use coupon::*;
pub use customer::*;
pub use message::*;
pub use order::*;
pub use payment::*;
pub use product::*;
pub use refund::*;
pub use settings::*;
pub use user::*;

use thiserror::Error;

/// Unknown value for one of the lowercase status enums
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseStatusError {
    pub kind: &'static str,
    pub value: String,
}

/// Implements `as_str`, `ALL`, `Display` and `FromStr` for a lowercase
/// wire enum. Serde naming is declared on the enum itself.
macro_rules! wire_enum {
    ($name:ident, $kind:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::models::ParseStatusError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($text => Ok($name::$variant),)+
                    _ => Err($crate::models::ParseStatusError {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

pub(crate) use wire_enum;
