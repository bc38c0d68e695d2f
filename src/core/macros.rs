//! Macros for declaring state and trigger enums.

/// Generate a fieldless enum implementing [`State`](crate::core::State).
///
/// The enum derives `Clone, Copy, PartialEq, Eq, Hash, Debug` and serde's
/// `Serialize`/`Deserialize`, displays as its variant name and gets an
/// `ALL` constant listing its variants in declaration order.
///
/// # Example
///
/// ```
/// use bugflow::core::State;
/// use bugflow::state_enum;
///
/// state_enum! {
///     pub enum Phase {
///         Draft,
///         Published,
///     }
/// }
///
/// assert_eq!(Phase::Draft.name(), "Draft");
/// assert_eq!(Phase::Published.to_string(), "Published");
/// assert_eq!(Phase::ALL, &[Phase::Draft, Phase::Published]);
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $crate::__named_enum! {
            State;
            $(#[$meta])*
            $vis enum $name {
                $(
                    $(#[$variant_meta])*
                    $variant
                ),*
            }
        }
    };
}

/// Generate a fieldless enum implementing [`Trigger`](crate::core::Trigger).
///
/// Same shape as [`state_enum!`].
///
/// ```
/// use bugflow::core::Trigger;
/// use bugflow::trigger_enum;
///
/// trigger_enum! {
///     enum Signal {
///         Go,
///         Halt,
///     }
/// }
///
/// assert_eq!(Signal::Halt.name(), "Halt");
/// ```
#[macro_export]
macro_rules! trigger_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $crate::__named_enum! {
            Trigger;
            $(#[$meta])*
            $vis enum $name {
                $(
                    $(#[$variant_meta])*
                    $variant
                ),*
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __named_enum {
    (
        $kind:ident;
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),*
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            pub const ALL: &'static [$name] = &[$($name::$variant),*];
        }

        impl $crate::core::$kind for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::$kind::name(self))
            }
        }
    };
}
