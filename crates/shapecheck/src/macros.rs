//! Macros for creating validators with minimal boilerplate.
//!
//! # Examples
//!
//! ```rust,ignore
//! validator! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub MinLength { min: usize } for Value;
//!     rule(self, input) { length_of(input) >= self.min }
//!     error(self, input) { ViolationKind::LengthTooShort }
//!     fn min_length(min: usize);
//! }
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a complete validator: struct definition, `Validate` implementation,
/// constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
///
/// # Variants
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// validator! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub MinLength { min: usize } for Value;
///     rule(self, input) { length_of(input) >= self.min }
///     error(self, input) { ViolationKind::LengthTooShort }
///     fn min_length(min: usize);
/// }
/// ```
///
/// **Fallible constructor** (the type after `->` is the constructor error):
/// ```rust,ignore
/// validator! {
///     pub MatchesPattern { pattern: regex::Regex } for Value;
///     rule(self, input) { self.pattern.is_match(&string_form(input)) }
///     error(self, input) { ViolationKind::PatternMismatch }
///     new(pattern: &str) -> regex::Error {
///         Ok(Self { pattern: regex::Regex::new(pattern)? })
///     }
///     fn matches_pattern(pattern: &str) -> regex::Error;
/// }
/// ```
macro_rules! validator {
    // ── Shared `Validate` impl ───────────────────────────────────────────
    (@impl $name:ident, $input:ty, $self_:ident, $inp:ident, $rule:block, $einp:ident, $err:block) => {
        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(
                &$self_,
                $inp: &Self::Input,
            ) -> ::std::result::Result<(), $crate::foundation::ViolationKind> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Struct with fields + fallible new + fallible factory ─────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) -> $ety:ty $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) -> $efty:ty;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            /// Creates the validator, failing if the arguments are unusable.
            pub fn new($($narg: $naty),*) -> ::std::result::Result<Self, $ety> $new_body
        }

        $crate::macros::validator!(@impl $name, $input, $self_, $inp, $rule, $einp, $err);

        /// Factory shorthand for the validator's fallible `new`.
        $vis fn $factory($($farg: $faty),*) -> ::std::result::Result<$name, $efty> {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + auto new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            /// Creates the validator.
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        $crate::macros::validator!(@impl $name, $input, $self_, $inp, $rule, $einp, $err);

        /// Factory shorthand for the validator's `new`.
        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };
}

pub(crate) use validator;
