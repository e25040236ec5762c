//! Alphabetical member ordering for presentation.
//!
//! Only the page's own `functions`, `properties` and `built_ins` are
//! sorted. Constructors and inherited members keep declaration order.

use crate::{content::Pages, page::Page};

/// Stable sort by name: entries with equal names keep their relative order.
pub fn order_page(page: &mut Page) {
    page.functions.sort_by(|a, b| a.name.cmp(&b.name));
    page.properties.sort_by(|a, b| a.name.cmp(&b.name));
    page.built_ins.sort_by(|a, b| a.name.cmp(&b.name));
}

pub fn order_pages(pages: &mut Pages) {
    pages.values_mut().for_each(order_page);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{Function, Property};

    fn function(name: &str, description: &str) -> Function {
        Function {
            name: name.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    fn property(name: &str) -> Property {
        Property {
            name: name.into(),
            ..Default::default()
        }
    }

    fn described(name: &str, description: &str) -> Property {
        Property {
            description: description.into(),
            ..property(name)
        }
    }

    fn order(properties: &[Property]) -> Vec<(&str, &str)> {
        properties
            .iter()
            .map(|p| (p.name.as_str(), p.description.as_str()))
            .collect()
    }

    #[test]
    fn test_byte_order_is_case_sensitive_and_stable() {
        let mut page = Page {
            functions: vec![
                function("Beta", "first"),
                function("alpha", ""),
                function("Beta", "second"),
            ],
            ..Default::default()
        };
        order_page(&mut page);

        let order: Vec<_> = page
            .functions
            .iter()
            .map(|f| (f.name.as_str(), f.description.as_str()))
            .collect();
        assert_eq!(order, [("Beta", "first"), ("Beta", "second"), ("alpha", "")]);
    }

    #[test]
    fn test_properties_and_built_ins_stable() {
        let members = || {
            vec![
                described("Beta", "first"),
                described("alpha", ""),
                described("Beta", "second"),
            ]
        };
        let mut page = Page {
            properties: members(),
            built_ins: members(),
            ..Default::default()
        };
        order_page(&mut page);

        let expected = [("Beta", "first"), ("Beta", "second"), ("alpha", "")];
        assert_eq!(order(&page.properties), expected);
        assert_eq!(order(&page.built_ins), expected);
    }

    #[test]
    fn test_properties_and_built_ins_sorted() {
        let mut page = Page {
            properties: vec![property("z"), property("a")],
            built_ins: vec![property("Y"), property("X")],
            constructors: vec![function("New", ""), function("Clone", "")],
            ..Default::default()
        };
        order_page(&mut page);

        assert_eq!(page.properties[0].name, "a");
        assert_eq!(page.built_ins[0].name, "X");
        // constructors untouched
        assert_eq!(page.constructors[0].name, "New");
    }
}
