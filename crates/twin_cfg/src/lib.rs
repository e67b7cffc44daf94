//! Compile-time configuration aliases.
//!
//! Each crate of the workspace declares a `cfg` module through
//! [`define_alias!`], turning a `#[cfg(...)]` predicate into a macro that
//! either keeps or drops the tokens passed to it.
//!
//! ```
//! mod cfg {
//!     twin_cfg::define_alias! {
//!         #[cfg(all())] => always,
//!         #[cfg(any())] => never,
//!     }
//! }
//!
//! cfg::always! { const A: u32 = 1; }
//! cfg::never! { const A: u32 = 2; }
//!
//! assert_eq!(A, 1);
//! assert!(cfg::always!());
//! assert!(!cfg::never!());
//!
//! let label = cfg::never! { if { "on" } else { "off" } };
//! assert_eq!(label, "off");
//! ```
#![no_std]

/// Keeps the given tokens.
///
/// - `enabled!()` expands to `true`.
/// - `enabled!(if { A } else { B })` expands to `A`.
/// - `enabled!(tokens)` expands to `tokens`.
#[doc(hidden)]
#[macro_export]
macro_rules! enabled {
    () => { true };
    (if { $($p:tt)* } else { $($n:tt)* }) => { $($p)* };
    ($($p:tt)*) => { $($p)* };
}

/// Drops the given tokens.
///
/// - `disabled!()` expands to `false`.
/// - `disabled!(if { A } else { B })` expands to `B`.
/// - `disabled!(tokens)` expands to nothing.
#[doc(hidden)]
#[macro_export]
macro_rules! disabled {
    () => { false };
    (if { $($p:tt)* } else { $($n:tt)* }) => { $($n)* };
    ($($p:tt)*) => {};
}

/// Defines one alias macro per `cfg` predicate.
///
/// The alias re-exports [`enabled!`] when the predicate holds and
/// [`disabled!`] otherwise.
#[macro_export]
macro_rules! define_alias {
    ($(#[cfg($meta:meta)] => $alias:ident),+ $(,)?) => {
        $(
            #[cfg($meta)]
            #[doc = concat!("Keeps its input, `cfg(", stringify!($meta), ")` is active.")]
            #[allow(unused_imports)]
            pub use $crate::enabled as $alias;

            #[cfg(not($meta))]
            #[doc = concat!("Drops its input, `cfg(", stringify!($meta), ")` is inactive.")]
            #[allow(unused_imports)]
            pub use $crate::disabled as $alias;
        )+
    };
}
