//! The Neighbor-Aware Hilbert Codec (NAHC).
//!
//! This library converts between 2D grid coordinates and their position along
//! a Hilbert curve, in both directions.
//!
//! It is tuned for long ordered streams of nearby points (scanning a grid,
//! walking an index, replaying a trajectory): consecutive points share the
//! high-order part of their walk down the curve, and this part is computed
//! once instead of once per point.
//!
//! # Example
//!
//! ```
//! use nahc::Point;
//!
//! let path = [(0, 0), (0, 1), (1, 1), (1, 0)].map(Point::from);
//!
//! let codes = nahc::encode(1, path).collect::<Result<Vec<_>, _>>()?;
//! assert_eq!(codes, vec![0, 1, 2, 3]);
//!
//! let points = nahc::decode(1, codes).collect::<Result<Vec<_>, _>>()?;
//! assert_eq!(points, path);
//! # Ok::<(), nahc::Error>(())
//! ```

// Lints {{{

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility,
    future_incompatible,
    rustdoc::all,
    rustdoc::missing_crate_level_docs,
    missing_docs,
    unsafe_code,
    unused,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications,
    variant_size_differences,
    warnings,
    clippy::all,
    clippy::cargo,
    clippy::pedantic,
    clippy::allow_attributes_without_reason,
    clippy::as_underscore,
    clippy::branches_sharing_code,
    clippy::clone_on_ref_ptr,
    clippy::cognitive_complexity,
    clippy::create_dir,
    clippy::dbg_macro,
    clippy::debug_assert_with_mut_call,
    clippy::decimal_literal_representation,
    clippy::default_union_representation,
    clippy::derive_partial_eq_without_eq,
    clippy::empty_drop,
    clippy::empty_line_after_outer_attr,
    clippy::empty_structs_with_brackets,
    clippy::equatable_if_let,
    clippy::exhaustive_enums,
    clippy::exit,
    clippy::filetype_is_file,
    clippy::float_cmp_const,
    clippy::fn_to_numeric_cast_any,
    clippy::format_push_string,
    clippy::future_not_send,
    clippy::get_unwrap,
    clippy::if_then_some_else_none,
    clippy::imprecise_flops,
    clippy::iter_on_empty_collections,
    clippy::iter_on_single_items,
    clippy::iter_with_drain,
    clippy::large_include_file,
    clippy::let_underscore_must_use,
    clippy::lossy_float_literal,
    clippy::mem_forget,
    clippy::missing_const_for_fn,
    clippy::mixed_read_write_in_expression,
    clippy::multiple_inherent_impl,
    clippy::mutex_atomic,
    clippy::mutex_integer,
    clippy::needless_collect,
    clippy::non_send_fields_in_send_ty,
    clippy::nonstandard_macro_braces,
    clippy::option_if_let_else,
    clippy::or_fun_call,
    clippy::panic,
    clippy::path_buf_push_overwrite,
    clippy::pattern_type_mismatch,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::rc_buffer,
    clippy::rc_mutex,
    clippy::redundant_pub_crate,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::same_name_method,
    clippy::self_named_module_files,
    clippy::significant_drop_in_scrutinee,
    clippy::str_to_string,
    clippy::string_add,
    clippy::string_lit_as_bytes,
    clippy::string_slice,
    clippy::string_to_string,
    clippy::suboptimal_flops,
    clippy::suspicious_operation_groupings,
    clippy::todo,
    clippy::trailing_empty_array,
    clippy::trait_duplication_in_bounds,
    clippy::transmute_undefined_repr,
    clippy::trivial_regex,
    clippy::try_err,
    clippy::type_repetition_in_bounds,
    clippy::undocumented_unsafe_blocks,
    clippy::unimplemented,
    clippy::unnecessary_self_imports,
    clippy::unneeded_field_pattern,
    clippy::unseparated_literal_suffix,
    clippy::unused_peekable,
    clippy::unused_rounding,
    clippy::unwrap_used,
    clippy::use_debug,
    clippy::use_self,
    clippy::useless_let_if_seq,
    clippy::verbose_file_reads
)]
#![allow(
    // "It requires the user to type the module name twice."
    // => not true here since internal modules are hidden from the users.
    clippy::module_name_repetitions,
    // Usually yes, but not really applicable for most literals in this crate.
    clippy::unreadable_literal,
)]

// }}}

mod automaton;
mod bits;
mod cache;
mod decoder;
mod encoder;
mod error;
mod iter;
mod order;
mod point;
mod reference;
mod stats;

use either::Either;
use std::iter::once;

pub use bits::{highest_set_bit_u32, highest_set_bit_u64};
pub use cache::OrientationCache;
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::{Error, InvalidCurveOrder};
pub use iter::{DecodeIter, EncodeIter};
pub use order::CurveOrder;
pub use point::Point;
pub use reference::{decode_point, encode_point};
pub use stats::Stats;

/// Encodes an ordered stream of points into Hilbert codes.
///
/// Each point is encoded with a peek at the following one, reusing as much
/// of the previous work as the two have in common.
///
/// # Errors
///
/// Yields a single [`Error::InvalidCurveOrder`] if `order` is not in `1..=32`,
/// or an [`Error::CoordinateOutOfRange`] for each point outside of the grid.
///
/// # Examples
///
/// ```
/// use nahc::Point;
///
/// let row = (0..4).map(|x| Point::new(x, 0));
///
/// let codes = nahc::encode(2, row).collect::<Result<Vec<_>, _>>()?;
/// assert_eq!(codes, vec![0, 1, 14, 15]);
/// # Ok::<(), nahc::Error>(())
/// ```
pub fn encode(
    order: u8,
    points: impl IntoIterator<Item = Point>,
) -> impl Iterator<Item = Result<u64, Error>> {
    CurveOrder::new(order).map_or_else(
        |err| Either::Left(once(Err(err.into()))),
        |order| Either::Right(EncodeIter::new(order, points)),
    )
}

/// Decodes an ordered stream of Hilbert codes into points.
///
/// # Errors
///
/// Yields a single [`Error::InvalidCurveOrder`] if `order` is not in `1..=32`,
/// or an [`Error::CodeOutOfRange`] for each code past the end of the curve.
///
/// # Examples
///
/// ```
/// use nahc::Point;
///
/// let points = nahc::decode(2, 4..8).collect::<Result<Vec<_>, _>>()?;
/// assert_eq!(points, [(0, 2), (0, 3), (1, 3), (1, 2)].map(Point::from));
///
/// let error = nahc::decode(0, 0..4)
///     .collect::<Result<Vec<_>, _>>()
///     .expect_err("invalid order");
/// assert!(matches!(error, nahc::Error::InvalidCurveOrder(_)));
/// # Ok::<(), nahc::Error>(())
/// ```
pub fn decode(
    order: u8,
    codes: impl IntoIterator<Item = u64>,
) -> impl Iterator<Item = Result<Point, Error>> {
    CurveOrder::new(order).map_or_else(
        |err| Either::Left(once(Err(err.into()))),
        |order| Either::Right(DecodeIter::new(order, codes)),
    )
}

// -----------------------------------------------------------------------------
