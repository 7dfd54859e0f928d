//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — the closed enumeration sets for the resource
//! - `request.rs` / `request/` — validated request-body builders
//! - `endpoints.rs` — endpoint structs pairing method + v3 path + body
//! - `client.rs` — sub-client with HTTP methods (behind the `http` feature)
//! - `wire.rs` — raw serde structs matching backend responses, where the
//!   response schema is stable enough to type

pub mod account;
pub mod instrument;
pub mod order;
pub mod position;
pub mod pricing;
pub mod trade;

/// A finalized request body.
///
/// Implemented by every request builder's frozen output. The projection
/// writes only fields that were actually set — an unset optional field is
/// absent from the body, not `null`. Explicit `null` appears only where the
/// API gives it "clear this value" semantics (see trade dependent orders).
pub trait RequestBody: serde::Serialize {
    /// Envelope key wrapping the field mapping on the wire, e.g. `"order"`.
    /// `None` for bodies sent bare.
    const ENVELOPE: Option<&'static str>;

    /// The wire body, ready to hand to an endpoint.
    ///
    /// Pure projection of the frozen fields: reading it twice yields
    /// identical values.
    fn data(&self) -> serde_json::Value {
        let fields = serde_json::json!(self);
        match Self::ENVELOPE {
            Some(key) => {
                let mut envelope = serde_json::Map::with_capacity(1);
                envelope.insert(key.to_string(), fields);
                serde_json::Value::Object(envelope)
            }
            None => fields,
        }
    }
}

/// Declares a closed set of wire constants as an enum.
///
/// Generates serde renames to the exact wire spelling, `as_str`, `Display`,
/// an `ALL` table, and a `FromStr` that rejects anything outside the set.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident [$allowed:literal] { $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $wire)] $variant,)+
        }

        impl $name {
            /// Every member of the closed set.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The allowed wire constants, for error messages.
            pub const ALLOWED: &'static str = $allowed;

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::error::ValueError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err(crate::error::ValueError::new(format!(
                        "`{other}` is not one of [{}]",
                        $name::ALLOWED
                    ))),
                }
            }
        }
    };
}
pub(crate) use wire_enum;
