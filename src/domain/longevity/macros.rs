//! Macros for categorical health factors.
//!
//! - **`categorical_factor!`** - Generates a fieldless enum with a neutral
//!   default, `all()`, `as_str()`, `Display` and a `FromStr` that rejects
//!   unknown labels with `EstimationError::InvalidProfile`.
//!
//! # Usage
//!
//! ```ignore
//! categorical_factor! {
//!     /// How heavily the person smokes.
//!     SmokingIntensity, "smoking intensity", default = Moderate,
//!     { Light => "light", Moderate => "moderate", Heavy => "heavy" }
//! }
//! ```

#[macro_export]
macro_rules! categorical_factor {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal, default = $default:ident,
        { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Returns every level in ascending order.
            pub fn all() -> &'static [$name] {
                &[$($name::$variant),+]
            }

            /// Returns the lowercase label used by the front ends.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::domain::longevity::EstimationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_ascii_lowercase();
                $name::all()
                    .iter()
                    .copied()
                    .find(|level| level.as_str() == normalized)
                    .ok_or_else(|| {
                        $crate::domain::longevity::EstimationError::invalid_profile(format!(
                            "unknown {} '{}' (expected one of: {})",
                            $label,
                            s.trim(),
                            $name::all()
                                .iter()
                                .map(|level| level.as_str())
                                .collect::<Vec<_>>()
                                .join(", ")
                        ))
                    })
            }
        }
    };
}
