//! Centralized limits and thresholds for the translator.
//!
//! Both the parser and the emitter are recursive over the syntax tree. These
//! limits bound that recursion so that pathological input fails with an error
//! instead of overflowing the stack.

// =============================================================================
// Recursion Depth Limits
// =============================================================================

/// Maximum nesting depth the parser accepts for expressions and blocks.
///
/// Each nested parenthesis, call argument, array literal or closure body
/// adds a level, and so does each link of a left-nested chain
/// (`$a->b->c()`, `$a . $b . $c`), since every link deepens the tree.
///
/// # PHP example
///
/// ```php
/// // Deeply nested calls:
/// f(f(f(f(f(f(f(f(f(f(f(f(/* ... */))))))))))));
///
/// // Deeply nested arrays:
/// $x = [[[[[[[[[[/* ... */]]]]]]]]]];
/// ```
pub const MAX_PARSE_DEPTH: u32 = 256;

/// Maximum node depth the emitter translates before bailing out.
///
/// Trees built by the bundled parser never exceed `MAX_PARSE_DEPTH` levels of
/// syntactic nesting, but a single syntactic level can produce several node
/// levels (statement -> expression -> argument -> value), so this is larger.
/// Trees read from a JSON dump are only bounded by this limit.
pub const MAX_EMIT_DEPTH: u32 = 512;

// =============================================================================
// Stack
// =============================================================================

/// Stack size the depth limits above are calibrated for.
///
/// Parsing, emitting and dropping a tree at the limits recurses a few
/// thousand frames deep. Unoptimized builds need several megabytes for
/// that, more than the 2 MiB rayon and `std::thread` give by default, so
/// threads that convert untrusted input are spawned with this much stack.
pub const CONVERT_STACK_SIZE: usize = 32 * 1024 * 1024;
