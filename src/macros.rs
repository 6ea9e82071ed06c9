//! Macros for ergonomic state enum declaration.

/// Declare a state enum and generate its `State`, `Display` and `FromStr`
/// implementations plus a `VARIANTS` constant.
///
/// Variants may carry a human label (`LoggedOut => "Logged Out"`); without
/// one the variant identifier is used.
///
/// # Example
///
/// ```
/// use gatekeep::core::State;
/// use gatekeep::state_enum;
///
/// state_enum! {
///     pub enum LiftState {
///         Idle,
///         MovingUp => "Moving Up",
///         OutOfService => "Out of Service",
///     }
///     final: [OutOfService]
///     error: [OutOfService]
/// }
///
/// assert_eq!(LiftState::MovingUp.name(), "Moving Up");
/// assert_eq!("Idle".parse::<LiftState>(), Ok(LiftState::Idle));
/// assert!(LiftState::OutOfService.is_final());
/// assert_eq!(LiftState::VARIANTS.len(), 3);
/// ```
#[macro_export]
macro_rules! state_enum {
    (@label $variant:ident $label:literal) => {
        $label
    };
    (@label $variant:ident) => {
        stringify!($variant)
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(=> $label:literal)?
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every state, in declaration order.
            pub const VARIANTS: &'static [$name] = &[$($name::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::state_enum!(@label $variant $($label)?)),*
                }
            }

            #[allow(unreachable_patterns)]
            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            #[allow(unreachable_patterns)]
            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::core::ParseStateError;

            fn from_str(label: &str) -> Result<Self, Self::Err> {
                $name::VARIANTS
                    .iter()
                    .copied()
                    .find(|state| $crate::core::State::name(state) == label)
                    .ok_or_else(|| $crate::core::ParseStateError {
                        label: label.to_string(),
                        machine: stringify!($name),
                    })
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{ParseStateError, State};

    state_enum! {
        enum Valve {
            Closed,
            HalfOpen => "Half Open",
            Open,
            Stuck,
        }
        final: [Stuck]
        error: [Stuck]
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(Valve::Closed.name(), "Closed");
        assert_eq!(Valve::HalfOpen.name(), "Half Open");
        assert!(!Valve::Open.is_final());
        assert!(!Valve::Open.is_error());
        assert!(Valve::Stuck.is_final());
        assert!(Valve::Stuck.is_error());
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Valve::HalfOpen.to_string(), "Half Open");
        assert_eq!(format!("{}", Valve::Open), "Open");
    }

    #[test]
    fn from_str_round_trips_labels() {
        for state in Valve::VARIANTS {
            assert_eq!(state.name().parse::<Valve>(), Ok(*state));
        }
    }

    #[test]
    fn from_str_rejects_unknown_label() {
        assert_eq!(
            "HalfOpen".parse::<Valve>(),
            Err(ParseStateError {
                label: "HalfOpen".to_string(),
                machine: "Valve",
            })
        );
    }

    #[test]
    fn variants_lists_declaration_order() {
        assert_eq!(
            Valve::VARIANTS,
            &[Valve::Closed, Valve::HalfOpen, Valve::Open, Valve::Stuck]
        );
    }

    #[test]
    fn state_enum_works_without_final_error() {
        state_enum! {
            enum MinimalState {
                One,
                Two,
            }
        }

        let state = MinimalState::One;
        assert!(!state.is_final());
        assert!(!state.is_error());
        assert_eq!(MinimalState::Two.name(), "Two");
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
            final: [B]
        }

        assert!(PublicState::B.is_final());
    }
}
