//! Numeric id newtypes for native objects referenced by events.
//!
//! Keeps a window id from being passed where a keyboard id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! native_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            /// The raw native id.
            #[must_use]
            pub const fn raw(self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

native_id!(
    /// Native window id. `0` means "no window".
    WindowId
);

native_id!(
    /// Native keyboard instance id.
    KeyboardId
);
