//! Presentation styles and explicit configuration for collections.

use std::fmt;
use std::str::FromStr;

use ripple_core::layout::{Axis, LayoutDirection};

/// How a collection presents its items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CollectionStyle {
    /// A vertical list, one item per row.
    #[default]
    List,
    /// A vertical grid of adaptive columns.
    Grid,
    /// A horizontal rail of fixed-width tiles.
    Horizontal,
}

impl CollectionStyle {
    /// The canonical name of this style.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Grid => "grid",
            Self::Horizontal => "horizontal",
        }
    }
}

impl fmt::Display for CollectionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`CollectionStyle`] fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized collection style `{0}`")]
pub struct ParseStyleError(String);

impl FromStr for CollectionStyle {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(Self::List),
            "grid" => Ok(Self::Grid),
            "horizontal" => Ok(Self::Horizontal),
            other => Err(ParseStyleError(other.into())),
        }
    }
}

/// Coarse size of one screen dimension, as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SizeClass {
    /// The dimension is tight (phone in the corresponding orientation).
    Compact,
    /// The dimension has room to spare.
    #[default]
    Regular,
}

/// Explicit configuration threaded through collection constructors.
///
/// Replaces ancestor-scoped configuration: the caller decides the axis,
/// layout direction, and style, and passes the context down. Use
/// [`from_size_classes`](Self::from_size_classes) to derive the conventional
/// adaptive behavior from the host's size classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollectionContext {
    /// The scroll axis.
    pub axis: Axis,
    /// The layout direction in effect.
    pub direction: LayoutDirection,
    /// The presentation style.
    pub style: CollectionStyle,
}

impl CollectionContext {
    /// Creates a context from explicit parts.
    #[must_use]
    pub const fn new(axis: Axis, direction: LayoutDirection, style: CollectionStyle) -> Self {
        Self {
            axis,
            direction,
            style,
        }
    }

    /// Derives the conventional adaptive context from the host size classes.
    ///
    /// A compact vertical class (landscape phone) scrolls horizontally; a
    /// horizontal scroller uses the horizontal style; otherwise a regular
    /// horizontal class gets a grid and a compact one a list.
    #[must_use]
    pub fn from_size_classes(
        horizontal: SizeClass,
        vertical: SizeClass,
        direction: LayoutDirection,
    ) -> Self {
        let axis = if vertical == SizeClass::Compact {
            Axis::Horizontal
        } else {
            Axis::Vertical
        };
        let style = if axis.is_horizontal() {
            CollectionStyle::Horizontal
        } else if horizontal == SizeClass::Regular {
            CollectionStyle::Grid
        } else {
            CollectionStyle::List
        };
        Self {
            axis,
            direction,
            style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_style() {
        for style in [
            CollectionStyle::List,
            CollectionStyle::Grid,
            CollectionStyle::Horizontal,
        ] {
            assert_eq!(style.as_str().parse::<CollectionStyle>(), Ok(style));
        }
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let error = "mosaic".parse::<CollectionStyle>().unwrap_err();
        assert_eq!(error.to_string(), "unrecognized collection style `mosaic`");
    }

    #[test]
    fn size_class_derivation_table() {
        use LayoutDirection::LeftToRight as Ltr;
        use SizeClass::{Compact, Regular};

        let ctx = CollectionContext::from_size_classes(Regular, Regular, Ltr);
        assert_eq!(ctx.axis, Axis::Vertical);
        assert_eq!(ctx.style, CollectionStyle::Grid);

        let ctx = CollectionContext::from_size_classes(Compact, Regular, Ltr);
        assert_eq!(ctx.axis, Axis::Vertical);
        assert_eq!(ctx.style, CollectionStyle::List);

        for horizontal in [Compact, Regular] {
            let ctx = CollectionContext::from_size_classes(horizontal, Compact, Ltr);
            assert_eq!(ctx.axis, Axis::Horizontal);
            assert_eq!(ctx.style, CollectionStyle::Horizontal);
        }
    }

    #[test]
    fn direction_is_carried_through() {
        let ctx = CollectionContext::from_size_classes(
            SizeClass::Regular,
            SizeClass::Regular,
            LayoutDirection::RightToLeft,
        );
        assert!(ctx.direction.is_right_to_left());
    }
}
