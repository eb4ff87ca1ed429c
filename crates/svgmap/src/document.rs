//! Document walking: streams start/end element events over the markup,
//! maintains the group transform stack, and assembles the immutable
//! [`Document`] snapshot handed to the view layer.

use crate::error::{Error, Result};
use crate::geom::{BoundsAccumulator, Rect, Transform};
use crate::path::PathElement;
use crate::transform::parse_transform;
use std::path::Path;

/// The attributes this system reads off a markup element. Everything else in
/// the document (styles, gradients, other element types) is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementAttributes<'a> {
    pub id: Option<&'a str>,
    pub title: Option<&'a str>,
    pub class_name: Option<&'a str>,
    pub transform: Option<&'a str>,
    pub d: Option<&'a str>,
}

impl<'a> ElementAttributes<'a> {
    fn from_node(node: &roxmltree::Node<'a, '_>) -> Self {
        Self {
            id: node.attribute("id"),
            title: node.attribute("title"),
            class_name: node.attribute("className"),
            transform: node.attribute("transform"),
            d: node.attribute("d"),
        }
    }
}

/// Ordered list of extracted path elements plus their aggregate bounding box.
/// Built once per load and immutable afterward; a changed source file means a
/// wholesale rebuild.
#[derive(Debug, Clone)]
pub struct Document {
    pub elements: Vec<PathElement>,
    /// Union of all element bounds; the zero rect when no element has
    /// geometry.
    pub bounds: Rect,
}

impl Document {
    /// Parses SVG markup into a document. Malformed markup fails the whole
    /// construction; per-element decode anomalies degrade locally instead.
    pub fn parse(markup: &str) -> Result<Document> {
        let doc = roxmltree::Document::parse(markup)?;
        let mut walker = DocumentWalker::new();
        walk_children(&mut walker, doc.root());
        Ok(walker.finish())
    }

    /// Reads and parses an SVG file.
    pub fn load(path: impl AsRef<Path>) -> Result<Document> {
        let path = path.as_ref();
        let markup = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&markup)
    }
}

fn walk_children(walker: &mut DocumentWalker, node: roxmltree::Node<'_, '_>) {
    for child in node.children() {
        if !child.is_element() {
            continue;
        }
        let name = child.tag_name().name();
        walker.start_element(name, &ElementAttributes::from_node(&child));
        walk_children(walker, child);
        walker.end_element(name);
    }
}

/// Single-pass state machine over start/end element events.
///
/// The stack holds one composed transform per open group: the group's own
/// transform already combined with whatever was in effect when it opened.
/// The transform in effect for a path is the top of stack, or identity when
/// no group is open.
#[derive(Debug, Default)]
pub struct DocumentWalker {
    transforms: Vec<Transform>,
    elements: Vec<PathElement>,
    bounds: BoundsAccumulator,
}

impl DocumentWalker {
    pub fn new() -> Self {
        Self::default()
    }

    fn current_transform(&self) -> Transform {
        self.transforms
            .last()
            .copied()
            .unwrap_or_else(Transform::identity)
    }

    pub fn start_element(&mut self, name: &str, attrs: &ElementAttributes<'_>) {
        match name {
            "path" => {
                let mut element = PathElement::from_attrs(attrs);
                let transform = match element.transform {
                    Some(own) => own.then(&self.current_transform()),
                    None => self.current_transform(),
                };
                let element_bounds = element.apply_transform(&transform);
                if !element_bounds.is_empty() {
                    self.bounds.merge(&element_bounds);
                }
                self.elements.push(element);
            }
            "g" => {
                let own = attrs
                    .transform
                    .map(parse_transform)
                    .unwrap_or_else(Transform::identity);
                self.transforms.push(own.then(&self.current_transform()));
            }
            _ => {}
        }
    }

    pub fn end_element(&mut self, name: &str) {
        if name == "g" && self.transforms.pop().is_none() {
            tracing::warn!("ignoring group close with no matching open");
        }
    }

    /// Consumes the walker and publishes the finished document. Taking `self`
    /// by value is what makes "document ready" fire exactly once.
    pub fn finish(self) -> Document {
        tracing::debug!(elements = self.elements.len(), "svg document ready");
        Document {
            elements: self.elements,
            bounds: self.bounds.to_rect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{Size, point};
    use crate::path::PathSegment;

    #[test]
    fn group_transform_applies_to_path() {
        let doc = Document::parse(r#"<svg><g transform="translate(10,0)"><path d="M0,0 L1,0"/></g></svg>"#)
            .unwrap();
        assert_eq!(doc.elements.len(), 1);
        assert_eq!(doc.elements[0].segments, vec![
            PathSegment::MoveTo(point(10.0, 0.0)),
            PathSegment::LineTo(point(11.0, 0.0)),
        ]);
    }

    #[test]
    fn nested_group_transforms_compose() {
        let doc = Document::parse(
            r#"<svg>
                 <g transform="translate(10,0)">
                   <g transform="translate(10,0)">
                     <path d="M0,0 L1,0"/>
                   </g>
                 </g>
               </svg>"#,
        )
        .unwrap();
        assert_eq!(doc.elements[0].segments, vec![
            PathSegment::MoveTo(point(20.0, 0.0)),
            PathSegment::LineTo(point(21.0, 0.0)),
        ]);
    }

    #[test]
    fn sibling_after_group_close_loses_the_transform() {
        let doc = Document::parse(
            r#"<svg>
                 <g transform="translate(10,0)"><path d="M0,0"/></g>
                 <path d="M0,0"/>
               </svg>"#,
        )
        .unwrap();
        assert_eq!(doc.elements[0].segments[0], PathSegment::MoveTo(point(10.0, 0.0)));
        assert_eq!(doc.elements[1].segments[0], PathSegment::MoveTo(point(0.0, 0.0)));
    }

    #[test]
    fn group_without_transform_keeps_current() {
        let doc = Document::parse(
            r#"<svg><g transform="translate(5,5)"><g><path d="M0,0"/></g></g></svg>"#,
        )
        .unwrap();
        assert_eq!(doc.elements[0].segments[0], PathSegment::MoveTo(point(5.0, 5.0)));
    }

    #[test]
    fn path_own_transform_composes_with_group() {
        let doc = Document::parse(
            r#"<svg><g transform="translate(10,0)"><path transform="translate(0,10)" d="M0,0"/></g></svg>"#,
        )
        .unwrap();
        let element = &doc.elements[0];
        assert!(element.transform.is_some());
        assert_eq!(element.segments[0], PathSegment::MoveTo(point(10.0, 10.0)));
    }

    #[test]
    fn empty_document_has_zero_bounds() {
        let doc = Document::parse("<svg></svg>").unwrap();
        assert!(doc.elements.is_empty());
        assert_eq!(doc.bounds, Rect::zero());
    }

    #[test]
    fn paths_without_geometry_do_not_affect_bounds() {
        let doc = Document::parse(r#"<svg><path id="empty"/><path d="M1,1 L2,3"/></svg>"#).unwrap();
        assert_eq!(doc.elements.len(), 2);
        assert_eq!(doc.bounds.origin, point(1.0, 1.0));
        assert_eq!(doc.bounds.size, Size::new(1.0, 2.0));
    }

    #[test]
    fn document_bounds_union_elements() {
        let doc = Document::parse(
            r#"<svg>
                 <path d="M0,0 L10,10"/>
                 <path d="M-5,2 L-1,3"/>
               </svg>"#,
        )
        .unwrap();
        assert_eq!(doc.bounds.origin, point(-5.0, 0.0));
        assert_eq!(doc.bounds.size, Size::new(15.0, 10.0));
    }

    #[test]
    fn identifier_attributes_are_captured() {
        let doc = Document::parse(
            r#"<svg><path id="cz" title="Czechia" className="region" d="M0,0"/></svg>"#,
        )
        .unwrap();
        let element = &doc.elements[0];
        assert_eq!(element.id.as_deref(), Some("cz"));
        assert_eq!(element.title.as_deref(), Some("Czechia"));
        assert_eq!(element.class_name.as_deref(), Some("region"));
    }

    #[test]
    fn non_path_elements_are_ignored() {
        let doc = Document::parse(
            r#"<svg><rect width="5" height="5"/><text>hi</text><path d="M1,1"/></svg>"#,
        )
        .unwrap();
        assert_eq!(doc.elements.len(), 1);
    }

    #[test]
    fn stray_group_close_is_ignored() {
        let mut walker = DocumentWalker::new();
        walker.end_element("g");
        walker.start_element("path", &ElementAttributes {
            d: Some("M1,2"),
            ..ElementAttributes::default()
        });
        let doc = walker.finish();
        assert_eq!(doc.elements[0].segments[0], PathSegment::MoveTo(point(1.0, 2.0)));
    }

    #[test]
    fn malformed_markup_fails_the_load() {
        assert!(matches!(
            Document::parse("<svg><path d='M0,0'"),
            Err(Error::Xml(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            Document::load("/nonexistent/map.svg"),
            Err(Error::Io { .. })
        ));
    }

    #[test]
    fn mid_point_is_bounds_center() {
        let doc = Document::parse(r#"<svg><path d="M0,0 L10,20"/></svg>"#).unwrap();
        assert_eq!(doc.elements[0].mid_point(), point(5.0, 10.0));
    }
}
