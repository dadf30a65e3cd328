// Entity shapes persisted by the API, plus the payload types they are validated from

use serde::{de::DeserializeOwned, Deserialize, Deserializer};

use crate::errors::ValidationError;

pub mod appointment;
pub mod product;
pub mod responses;
pub mod user;

pub use appointment::*;
pub use product::*;
pub use responses::*;
pub use user::*;

/// Conversion from a raw, loosely typed payload into a checked entity.
///
/// Implementations collect every offending field before failing so the
/// client sees the whole list at once.
pub trait Validate: Sized {
    type Payload: DeserializeOwned + Send;

    fn validate(payload: Self::Payload) -> Result<Self, ValidationError>;
}

/// A required text field with a minimum length in characters.
pub(crate) fn required_text(
    errors: &mut ValidationError,
    field: &str,
    value: Option<String>,
    min_chars: usize,
) -> Option<String> {
    match value {
        None => {
            errors.add(field, "field required");
            None
        }
        Some(v) if v.chars().count() < min_chars => {
            errors.add(field, format!("must be at least {} characters", min_chars));
            None
        }
        Some(v) => Some(v),
    }
}

/// Keeps an explicit `null` apart from a missing field: used with
/// `#[serde(default)]`, a missing field stays `None` and `null` becomes `Some(None)`.
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// An optional enum field received as text. A missing field falls back to the
/// default; `null` or an unknown label is rejected.
pub(crate) fn choice<T>(
    errors: &mut ValidationError,
    field: &str,
    value: Option<Option<String>>,
    allowed: &[T],
) -> Option<T>
where
    T: Copy + Default + AsRef<str>,
{
    match value {
        None => Some(T::default()),
        Some(v) => {
            let found = v.as_deref().and_then(|v| {
                allowed
                    .iter()
                    .find(|c| AsRef::<str>::as_ref(*c) == v)
                    .copied()
            });
            if found.is_none() {
                let names: Vec<&str> = allowed.iter().map(AsRef::<str>::as_ref).collect();
                errors.add(field, format!("must be one of: {}", names.join(", ")));
            }
            found
        }
    }
}
