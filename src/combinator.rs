//! Backtracking parser combinators
//!
//! A parser is any value implementing [`Parser`]: a function from a mutable
//! [`Cursor`] to `Option<Output>`. Success advances the cursor past the
//! matched span; failure returns `None` and leaves the cursor where it was.
//!
//! The rollback guarantee is enforced structurally rather than per call
//! site: every sequencing combinator ([`zip`], [`ParserExt::skip`],
//! [`ParserExt::take`]) saves a checkpoint before running its first
//! sub-parser and restores it when any later sub-parser fails. As long as
//! composite parsers are built from these, a failure anywhere inside is
//! invisible to the caller.
//!
//! # Example
//!
//! ```rust
//! use famix_mse::combinator::{int, prefix, ParserExt};
//!
//! let version = prefix("v").take(int()).map(|(_, n)| n);
//! let (matched, rest) = version.run("v42-beta");
//! assert_eq!(matched, Some(42));
//! assert_eq!(rest, "-beta");
//! ```

use memchr::memmem;

use crate::cursor::Cursor;

/// A backtracking parser over input with lifetime `'i`.
///
/// Failure is a local, silent signal: `None` means "no match at the current
/// position", never an abnormal condition, and nothing is reported below the
/// granularity of a whole parser invocation.
pub trait Parser<'i> {
    /// Value produced by a successful match.
    type Output;

    /// Attempt a match at the cursor's current position.
    fn parse(&self, cursor: &mut Cursor<'i>) -> Option<Self::Output>;
}

impl<'i, P: Parser<'i> + ?Sized> Parser<'i> for Box<P> {
    type Output = P::Output;

    #[inline]
    fn parse(&self, cursor: &mut Cursor<'i>) -> Option<Self::Output> {
        (**self).parse(cursor)
    }
}

/// A type-erased parser, for heterogeneous alternation via [`one_of`].
pub type BoxedParser<'i, T> = Box<dyn Parser<'i, Output = T> + 'i>;

/// Erase a parser's concrete type so differently-shaped alternatives can
/// share a `Vec`.
pub fn boxed<'i, P>(parser: P) -> BoxedParser<'i, P::Output>
where
    P: Parser<'i> + 'i,
{
    Box::new(parser)
}

// ============================================================================
// Primitives
// ============================================================================

/// See [`prefix`].
#[derive(Clone, Copy)]
pub struct Literal(&'static str);

impl<'i> Parser<'i> for Literal {
    type Output = ();

    fn parse(&self, cursor: &mut Cursor<'i>) -> Option<()> {
        if cursor.rest().starts_with(self.0) {
            cursor.advance(self.0.len());
            Some(())
        } else {
            None
        }
    }
}

/// Match a literal string at the cursor, consuming it.
pub fn prefix(literal: &'static str) -> Literal {
    Literal(literal)
}

/// See [`prefix_while`].
#[derive(Clone, Copy)]
pub struct PrefixWhile<F>(F);

impl<'i, F: Fn(char) -> bool> Parser<'i> for PrefixWhile<F> {
    type Output = &'i str;

    fn parse(&self, cursor: &mut Cursor<'i>) -> Option<&'i str> {
        let rest = cursor.rest();
        let end = rest
            .char_indices()
            .find(|&(_, c)| !(self.0)(c))
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        cursor.advance(end);
        Some(&rest[..end])
    }
}

/// Greedily consume the maximal leading run of characters satisfying
/// `predicate`. Always succeeds; the matched span may be empty.
pub fn prefix_while<F: Fn(char) -> bool>(predicate: F) -> PrefixWhile<F> {
    PrefixWhile(predicate)
}

/// See [`prefix_through`].
#[derive(Clone, Copy)]
pub struct PrefixThrough(&'static str);

impl<'i> Parser<'i> for PrefixThrough {
    type Output = &'i str;

    fn parse(&self, cursor: &mut Cursor<'i>) -> Option<&'i str> {
        let rest = cursor.rest();
        let start = memmem::find(rest.as_bytes(), self.0.as_bytes())?;
        let end = start + self.0.len();
        cursor.advance(end);
        Some(&rest[..end])
    }
}

/// Scan forward for the first occurrence of `delimiter` and consume up to
/// and including it, returning the full consumed span. Fails without moving
/// the cursor when the delimiter does not occur in the remainder.
pub fn prefix_through(delimiter: &'static str) -> PrefixThrough {
    PrefixThrough(delimiter)
}

/// See [`int`].
#[derive(Clone, Copy)]
pub struct Int;

impl<'i> Parser<'i> for Int {
    type Output = i64;

    fn parse(&self, cursor: &mut Cursor<'i>) -> Option<i64> {
        let rest = cursor.rest();
        let digits = rest
            .as_bytes()
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits == 0 {
            return None;
        }
        // Overflowing digit runs fail like any other non-match.
        let value = rest[..digits].parse().ok()?;
        cursor.advance(digits);
        Some(value)
    }
}

/// Match a maximal leading run of decimal digits as an integer. Fails on
/// zero digits or a run that does not fit in an `i64`.
pub fn int() -> Int {
    Int
}

// ============================================================================
// Sequencing
// ============================================================================

/// Sequence of two parsers. See [`zip`].
#[derive(Clone, Copy)]
pub struct Zip2<A, B> {
    a: A,
    b: B,
}

impl<'i, A: Parser<'i>, B: Parser<'i>> Parser<'i> for Zip2<A, B> {
    type Output = (A::Output, B::Output);

    fn parse(&self, cursor: &mut Cursor<'i>) -> Option<Self::Output> {
        let saved = cursor.checkpoint();
        let Some(a) = self.a.parse(cursor) else {
            cursor.restore(saved);
            return None;
        };
        let Some(b) = self.b.parse(cursor) else {
            cursor.restore(saved);
            return None;
        };
        Some((a, b))
    }
}

/// Run two parsers in order against the same cursor, pairing their results.
///
/// If either sub-parser fails, the cursor is restored to the position it had
/// before the whole sequence began, undoing any partial consumption.
pub fn zip<A, B>(a: A, b: B) -> Zip2<A, B> {
    Zip2 { a, b }
}

/// Sequence of three parsers. See [`zip3`].
#[derive(Clone, Copy)]
pub struct Zip3<A, B, C> {
    a: A,
    b: B,
    c: C,
}

impl<'i, A: Parser<'i>, B: Parser<'i>, C: Parser<'i>> Parser<'i> for Zip3<A, B, C> {
    type Output = (A::Output, B::Output, C::Output);

    fn parse(&self, cursor: &mut Cursor<'i>) -> Option<Self::Output> {
        let saved = cursor.checkpoint();
        match (|| {
            let a = self.a.parse(cursor)?;
            let b = self.b.parse(cursor)?;
            let c = self.c.parse(cursor)?;
            Some((a, b, c))
        })() {
            Some(out) => Some(out),
            None => {
                cursor.restore(saved);
                None
            }
        }
    }
}

/// Three-parser [`zip`], with the same whole-sequence rollback contract.
pub fn zip3<A, B, C>(a: A, b: B, c: C) -> Zip3<A, B, C> {
    Zip3 { a, b, c }
}

/// Sequence of four parsers. See [`zip4`].
#[derive(Clone, Copy)]
pub struct Zip4<A, B, C, D> {
    a: A,
    b: B,
    c: C,
    d: D,
}

impl<'i, A, B, C, D> Parser<'i> for Zip4<A, B, C, D>
where
    A: Parser<'i>,
    B: Parser<'i>,
    C: Parser<'i>,
    D: Parser<'i>,
{
    type Output = (A::Output, B::Output, C::Output, D::Output);

    fn parse(&self, cursor: &mut Cursor<'i>) -> Option<Self::Output> {
        let saved = cursor.checkpoint();
        match (|| {
            let a = self.a.parse(cursor)?;
            let b = self.b.parse(cursor)?;
            let c = self.c.parse(cursor)?;
            let d = self.d.parse(cursor)?;
            Some((a, b, c, d))
        })() {
            Some(out) => Some(out),
            None => {
                cursor.restore(saved);
                None
            }
        }
    }
}

/// Four-parser [`zip`], with the same whole-sequence rollback contract.
pub fn zip4<A, B, C, D>(a: A, b: B, c: C, d: D) -> Zip4<A, B, C, D> {
    Zip4 { a, b, c, d }
}

/// Sequence of five parsers. See [`zip5`].
#[derive(Clone, Copy)]
pub struct Zip5<A, B, C, D, E> {
    a: A,
    b: B,
    c: C,
    d: D,
    e: E,
}

impl<'i, A, B, C, D, E> Parser<'i> for Zip5<A, B, C, D, E>
where
    A: Parser<'i>,
    B: Parser<'i>,
    C: Parser<'i>,
    D: Parser<'i>,
    E: Parser<'i>,
{
    type Output = (A::Output, B::Output, C::Output, D::Output, E::Output);

    fn parse(&self, cursor: &mut Cursor<'i>) -> Option<Self::Output> {
        let saved = cursor.checkpoint();
        match (|| {
            let a = self.a.parse(cursor)?;
            let b = self.b.parse(cursor)?;
            let c = self.c.parse(cursor)?;
            let d = self.d.parse(cursor)?;
            let e = self.e.parse(cursor)?;
            Some((a, b, c, d, e))
        })() {
            Some(out) => Some(out),
            None => {
                cursor.restore(saved);
                None
            }
        }
    }
}

/// Five-parser [`zip`], with the same whole-sequence rollback contract.
pub fn zip5<A, B, C, D, E>(a: A, b: B, c: C, d: D, e: E) -> Zip5<A, B, C, D, E> {
    Zip5 { a, b, c, d, e }
}

// ============================================================================
// Transformation and discarding
// ============================================================================

/// See [`ParserExt::map`].
#[derive(Clone, Copy)]
pub struct Map<P, F> {
    parser: P,
    f: F,
}

impl<'i, P, F, T> Parser<'i> for Map<P, F>
where
    P: Parser<'i>,
    F: Fn(P::Output) -> T,
{
    type Output = T;

    #[inline]
    fn parse(&self, cursor: &mut Cursor<'i>) -> Option<T> {
        self.parser.parse(cursor).map(&self.f)
    }
}

/// See [`ParserExt::skip`].
#[derive(Clone, Copy)]
pub struct SkipRight<A, B> {
    a: A,
    b: B,
}

impl<'i, A: Parser<'i>, B: Parser<'i>> Parser<'i> for SkipRight<A, B> {
    type Output = A::Output;

    fn parse(&self, cursor: &mut Cursor<'i>) -> Option<A::Output> {
        let saved = cursor.checkpoint();
        let Some(a) = self.a.parse(cursor) else {
            cursor.restore(saved);
            return None;
        };
        if self.b.parse(cursor).is_none() {
            cursor.restore(saved);
            return None;
        }
        Some(a)
    }
}

/// See [`ParserExt::ignore`].
#[derive(Clone, Copy)]
pub struct Ignore<P> {
    parser: P,
}

impl<'i, P: Parser<'i>> Parser<'i> for Ignore<P> {
    type Output = ();

    #[inline]
    fn parse(&self, cursor: &mut Cursor<'i>) -> Option<()> {
        self.parser.parse(cursor).map(|_| ())
    }
}

// ============================================================================
// Optional, alternation, repetition
// ============================================================================

/// See [`optional`].
#[derive(Clone, Copy)]
pub struct Optional<P> {
    parser: P,
}

impl<'i, P: Parser<'i>> Parser<'i> for Optional<P> {
    type Output = Option<P::Output>;

    #[inline]
    fn parse(&self, cursor: &mut Cursor<'i>) -> Option<Self::Output> {
        Some(self.parser.parse(cursor))
    }
}

/// Always succeed, yielding `Some(value)` when `parser` matched and `None`
/// when it did not.
///
/// `optional` performs no rollback of its own: the "no cursor change on a
/// missing match" property holds only when `parser` is itself self-restoring
/// (i.e. zip-composed). A bare primitive that can partially consume before
/// failing must be embedded in a [`zip`] before being wrapped here.
pub fn optional<P>(parser: P) -> Optional<P> {
    Optional { parser }
}

/// See [`one_of`].
pub struct OneOf<P>(Vec<P>);

impl<'i, P: Parser<'i>> Parser<'i> for OneOf<P> {
    type Output = P::Output;

    fn parse(&self, cursor: &mut Cursor<'i>) -> Option<P::Output> {
        self.0.iter().find_map(|parser| parser.parse(cursor))
    }
}

/// Try each alternative in listed order, returning the first success.
///
/// A failed alternative never affects the next attempt, provided its own
/// combinators respect the rollback contract. Order only matters for
/// ambiguous prefixes.
pub fn one_of<P>(parsers: Vec<P>) -> OneOf<P> {
    OneOf(parsers)
}

/// See [`ParserExt::zero_or_more`].
pub struct ZeroOrMore<P, S> {
    element: P,
    separator: S,
}

impl<'i, P: Parser<'i>, S: Parser<'i>> Parser<'i> for ZeroOrMore<P, S> {
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: &mut Cursor<'i>) -> Option<Self::Output> {
        // `committed` marks the position after the most recent fully
        // accepted element. A failed element attempt rolls back to it,
        // which also un-consumes a trailing separator that turned out not
        // to be followed by another element.
        let mut committed = cursor.checkpoint();
        let mut matches = Vec::new();
        while let Some(value) = self.element.parse(cursor) {
            committed = cursor.checkpoint();
            matches.push(value);
            if self.separator.parse(cursor).is_none() {
                return Some(matches);
            }
        }
        cursor.restore(committed);
        Some(matches)
    }
}

// ============================================================================
// Extension trait
// ============================================================================

/// Builder-style combinators available on every parser.
pub trait ParserExt<'i>: Parser<'i> + Sized {
    /// Transform a successful result; propagate failure unchanged.
    fn map<T, F>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> T,
    {
        Map { parser: self, f }
    }

    /// Sequence with `other`, discarding its result. Inherits the
    /// whole-sequence rollback contract of [`zip`].
    fn skip<B: Parser<'i>>(self, other: B) -> SkipRight<Self, B> {
        SkipRight { a: self, b: other }
    }

    /// Sequence with `other`, pairing both results. Equivalent to
    /// [`zip`]`(self, other)`.
    fn take<B: Parser<'i>>(self, other: B) -> Zip2<Self, B> {
        zip(self, other)
    }

    /// Discard the result, keeping only the consumption.
    fn ignore(self) -> Ignore<Self> {
        Ignore { parser: self }
    }

    /// Greedy separator-delimited repetition.
    ///
    /// Elements must be separated by `separator`; a trailing separator with
    /// no following element is never part of the consumed input. Always
    /// succeeds, possibly with an empty list.
    fn zero_or_more<S: Parser<'i>>(self, separator: S) -> ZeroOrMore<Self, S> {
        ZeroOrMore {
            element: self,
            separator,
        }
    }

    /// Run this parser over `input` from the start, returning the match (if
    /// any) and the unconsumed remainder.
    fn run(&self, input: &'i str) -> (Option<Self::Output>, &'i str) {
        let mut cursor = Cursor::new(input);
        let matched = self.parse(&mut cursor);
        (matched, cursor.rest())
    }
}

impl<'i, P: Parser<'i>> ParserExt<'i> for P {}
