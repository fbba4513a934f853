//! Sample object model: a navigation menu.
//!
//! Shows how a host application wires factories into a materializer. Two
//! differently-named elements (`InternalLink`, `ExternalLink`) share one
//! `Link` constructor via the binding registry. `Category` demonstrates the
//! container channel: it passes its phrase down, and `Link` records it.
//!
//! Used by the CLI and by the integration tests; nothing in the core
//! depends on this module.

use std::any::Any;

use serde::Serialize;

use crate::error::Result;
use crate::registry::{Construction, ElementFactory, Materializer, MissingPolicy, Object};
use crate::view::ElementView;

/// Root menu: an ordered list of items.
#[derive(Debug, Serialize, PartialEq)]
pub struct Menu {
    pub items: Vec<MenuItem>,
}

/// A named category holding nested items.
#[derive(Debug, Serialize, PartialEq)]
pub struct Category {
    pub phrase: String,
    pub items: Vec<MenuItem>,
}

/// A link target. `category_phrase` is read from the container reference
/// passed down by the enclosing [`Category`], if any.
#[derive(Debug, Serialize, PartialEq)]
pub struct Link {
    pub target: String,
    pub category_phrase: Option<String>,
}

/// One entry in a menu or category.
#[derive(Debug, Serialize, PartialEq)]
pub enum MenuItem {
    Category(Category),
    Link(Link),
}

impl MenuItem {
    /// Downcast a materialized object into a menu item, if it is one of the
    /// known shapes.
    #[must_use]
    pub fn from_object(object: Object) -> Option<Self> {
        let object = match object.downcast::<Category>() {
            Ok(category) => return Some(Self::Category(*category)),
            Err(object) => object,
        };
        object.downcast::<Link>().ok().map(|link| Self::Link(*link))
    }
}

/// Materialize all child elements into menu items.
///
/// Children suppressed by the missing-constructor policy (`None`) and
/// objects of unknown shape are skipped; errors propagate.
fn materialize_items(
    element: &ElementView<'_, '_, '_>,
    container: Option<&dyn Any>,
) -> Result<Vec<MenuItem>> {
    let mut items = Vec::new();
    for child in element.children() {
        if let Some(object) = child.materialize(None, container)? {
            if let Some(item) = MenuItem::from_object(object) {
                items.push(item);
            }
        }
    }
    Ok(items)
}

/// Factory for `<Menu>` elements.
pub struct MenuFactory;

impl ElementFactory for MenuFactory {
    fn construct(
        &self,
        element: &ElementView<'_, '_, '_>,
        _container: Option<&dyn Any>,
    ) -> Result<Construction> {
        let items = materialize_items(element, None)?;
        Ok(Construction::object(Menu { items }))
    }
}

/// Factory for `<Category>` elements.
pub struct CategoryFactory;

impl ElementFactory for CategoryFactory {
    fn construct(
        &self,
        element: &ElementView<'_, '_, '_>,
        _container: Option<&dyn Any>,
    ) -> Result<Construction> {
        let phrase = element.attribute("phrase").unwrap_or_default().to_string();
        let items = materialize_items(element, Some(&phrase as &dyn Any))?;
        Ok(Construction::object(Category { phrase, items }))
    }
}

/// Factory for `Link`-constructed elements (`InternalLink`, `ExternalLink`).
pub struct LinkFactory;

impl ElementFactory for LinkFactory {
    fn construct(
        &self,
        element: &ElementView<'_, '_, '_>,
        container: Option<&dyn Any>,
    ) -> Result<Construction> {
        let target = element.attribute("target").unwrap_or_default().to_string();
        let category_phrase = container
            .and_then(|c| c.downcast_ref::<String>())
            .cloned();
        Ok(Construction::object(Link {
            target,
            category_phrase,
        }))
    }
}

/// Build a materializer for the menu object model.
///
/// Binds both `InternalLink` and `ExternalLink` to the shared `Link`
/// constructor; `Menu` and `Category` resolve by identity fallback.
#[must_use]
pub fn materializer(policy: MissingPolicy) -> Materializer {
    Materializer::builder()
        .bind("InternalLink", "Link")
        .bind("ExternalLink", "Link")
        .missing(policy)
        .factory("Menu", MenuFactory)
        .factory("Category", CategoryFactory)
        .factory("Link", LinkFactory)
        .build()
}

/// Render a materialized object as YAML, if it has one of the demo shapes.
///
/// # Errors
/// Returns a YAML serialization error from the underlying writer.
pub fn render_yaml(object: &dyn Any) -> Result<Option<String>> {
    if let Some(menu) = object.downcast_ref::<Menu>() {
        return Ok(Some(serde_yaml_ng::to_string(menu)?));
    }
    if let Some(category) = object.downcast_ref::<Category>() {
        return Ok(Some(serde_yaml_ng::to_string(category)?));
    }
    if let Some(link) = object.downcast_ref::<Link>() {
        return Ok(Some(serde_yaml_ng::to_string(link)?));
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MENU_XML: &str = r#"<Menu>
        <Category phrase="A">
            <InternalLink target="x"/>
            <ExternalLink target="http://example.com"/>
        </Category>
    </Menu>"#;

    fn materialize_menu(xml: &str) -> Menu {
        let materializer = materializer(MissingPolicy::Fail);
        let object = materializer.materialize_document(xml).unwrap().unwrap();
        *object.downcast::<Menu>().unwrap()
    }

    #[test]
    fn test_menu_shape() {
        let menu = materialize_menu(MENU_XML);

        assert_eq!(menu.items.len(), 1);
        let MenuItem::Category(category) = &menu.items[0] else {
            panic!("expected a category");
        };
        assert_eq!(category.phrase, "A");
        assert_eq!(category.items.len(), 2);
    }

    #[test]
    fn test_both_link_elements_share_constructor() {
        let menu = materialize_menu(MENU_XML);
        let MenuItem::Category(category) = &menu.items[0] else {
            panic!("expected a category");
        };

        let targets: Vec<_> = category
            .items
            .iter()
            .map(|item| match item {
                MenuItem::Link(link) => link.target.as_str(),
                MenuItem::Category(_) => panic!("expected links"),
            })
            .collect();
        assert_eq!(targets, vec!["x", "http://example.com"]);
    }

    #[test]
    fn test_container_carries_category_phrase() {
        let menu = materialize_menu(MENU_XML);
        let MenuItem::Category(category) = &menu.items[0] else {
            panic!("expected a category");
        };
        let MenuItem::Link(link) = &category.items[0] else {
            panic!("expected a link");
        };

        assert_eq!(link.category_phrase.as_deref(), Some("A"));
    }

    #[test]
    fn test_unknown_child_skipped_under_ignore() {
        let xml = r#"<Menu><Mystery/><Category phrase="B"/></Menu>"#;
        let materializer = materializer(MissingPolicy::Ignore);
        let object = materializer.materialize_document(xml).unwrap().unwrap();
        let menu = *object.downcast::<Menu>().unwrap();

        assert_eq!(menu.items.len(), 1);
    }

    #[test]
    fn test_render_yaml() {
        let link = Link {
            target: "x".to_string(),
            category_phrase: None,
        };
        let yaml = render_yaml(&link).unwrap().unwrap();
        assert!(yaml.contains("target: x"));

        assert!(render_yaml(&42_u8).unwrap().is_none());
    }
}
