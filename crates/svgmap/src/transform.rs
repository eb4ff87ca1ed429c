//! SVG `transform` attribute parsing.
//!
//! Only the two function forms interactive map exports actually use are
//! recognized: `matrix(a,b,c,d,e,f)` and `translate(x[,y])`. At most one of
//! each is honored; the result applies the matrix first, then the translation.

use crate::geom::Transform;
use crate::scan::scan_number_list;
use regex::Regex;
use std::sync::OnceLock;

fn re_matrix() -> &'static Regex {
    static ONCE: OnceLock<Regex> = OnceLock::new();
    ONCE.get_or_init(|| Regex::new(r"(?i)matrix\((.*)\)").unwrap())
}

fn re_translate() -> &'static Regex {
    static ONCE: OnceLock<Regex> = OnceLock::new();
    ONCE.get_or_init(|| Regex::new(r"(?i)translate\((.*)\)").unwrap())
}

/// Parses a transform attribute value into a single affine transform.
/// An empty string (or one with no recognized function) yields identity.
pub fn parse_transform(s: &str) -> Transform {
    let mut transform = Transform::identity();
    if !s.is_empty() {
        transform = transform.then(&parse_matrix(s));
        transform = transform.then(&parse_translate(s));
    }
    transform
}

/// Extracts the first `matrix(...)` call. Anything other than exactly six
/// numbers contributes identity.
///
/// The capture is greedy, so with several function calls in one attribute it
/// may span past the closing parenthesis; the number scanner stops at the
/// first `)` regardless, which keeps the decoded arity correct.
fn parse_matrix(s: &str) -> Transform {
    let Some(captures) = re_matrix().captures(s) else {
        return Transform::identity();
    };
    let coordinates = scan_number_list(&captures[1]);
    if coordinates.len() == 6 {
        Transform::new(
            coordinates[0],
            coordinates[1],
            coordinates[2],
            coordinates[3],
            coordinates[4],
            coordinates[5],
        )
    } else {
        Transform::identity()
    }
}

/// Extracts the first `translate(...)` call. One number translates along x
/// only; two translate both axes; any other count contributes identity.
fn parse_translate(s: &str) -> Transform {
    let Some(captures) = re_translate().captures(s) else {
        return Transform::identity();
    };
    let coordinates = scan_number_list(&captures[1]);
    match coordinates.len() {
        1 => Transform::translation(coordinates[0], 0.0),
        2 => Transform::translation(coordinates[0], coordinates[1]),
        _ => Transform::identity(),
    }
}
