//! Text sanitizer: free-form descriptor text → render-ready markup.
//!
//! Each textual field goes through, in order:
//!
//! | Step | Input            | Output                                        |
//! |------|------------------|-----------------------------------------------|
//! | 1    | surrounding ws   | trimmed                                       |
//! | 2    | newline          | `<br>`                                        |
//! | 3    | `` `code` ``     | `<span class="code">code</span>`              |
//! | 4    | `[label](url)`   | `<a href="url">label</a>`                     |
//! | 5    | `[Type]`         | `<a class="type" href="/route">Type</a>`, or plain `Type` when unregistered |
//!
//! `[This]` stands for the type of the page being sanitized, passed in
//! through [`TypeContext`]. Every rewrite removes the syntax it matches,
//! so sanitizing already-sanitized text changes nothing.

use crate::{content::Pages, page::Page, registry::TypeRegistry};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("valid inline code regex"));

static RE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link regex"));

static RE_TYPE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([A-Za-z0-9]+)\]").expect("valid type link regex"));

const INLINE_CODE_MARKUP: &str = r#"<span class="code">$1</span>"#;
const LINK_MARKUP: &str = r#"<a href="$2">$1</a>"#;
const LINE_BREAK: &str = "<br>";

/// The token replaced by the current page's type.
const THIS: &str = "This";

/// Per-page cross-reference context.
#[derive(Debug, Clone, Copy)]
pub struct TypeContext<'a> {
    /// Type declared by the page being sanitized (may be empty).
    pub current_type: &'a str,
    pub registry: &'a TypeRegistry,
}

impl<'a> TypeContext<'a> {
    pub fn new(current_type: &'a str, registry: &'a TypeRegistry) -> Self {
        Self {
            current_type,
            registry,
        }
    }

    /// Type name a `[name]` token refers to.
    fn resolve_name<'n>(&self, name: &'n str) -> &'n str
    where
        'a: 'n,
    {
        if name == THIS && !self.current_type.is_empty() {
            self.current_type
        } else {
            name
        }
    }

    fn type_link(&self, name: &str) -> String {
        let name = self.resolve_name(name);
        match self.registry.lookup(name) {
            Some(route) => format!(r#"<a class="type" href="{route}">{name}</a>"#),
            None => name.to_owned(),
        }
    }
}

// ============================================================================
// Text
// ============================================================================

/// Rewrite one field into markup.
pub fn sanitize_text(text: &str, ctx: &TypeContext) -> String {
    let text = normalize_newlines(text.trim()).replace('\n', LINE_BREAK);
    let text = RE_INLINE_CODE.replace_all(&text, INLINE_CODE_MARKUP);
    let text = RE_LINK.replace_all(&text, LINK_MARKUP);
    RE_TYPE_LINK
        .replace_all(&text, |caps: &Captures| ctx.type_link(&caps[1]))
        .into_owned()
}

/// Plain-text summary for `<meta>` tags: newlines become spaces, links and
/// code spans are reduced to their label.
pub fn meta_description(text: &str, ctx: &TypeContext) -> String {
    let text = normalize_newlines(text.trim()).replace('\n', " ");
    let text = RE_INLINE_CODE.replace_all(&text, "$1");
    let text = RE_LINK.replace_all(&text, "$1");
    RE_TYPE_LINK
        .replace_all(&text, |caps: &Captures| ctx.resolve_name(&caps[1]).to_owned())
        .into_owned()
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n")
}

fn rewrite(field: &mut String, ctx: &TypeContext) {
    if !field.is_empty() {
        *field = sanitize_text(field, ctx);
    }
}

// ============================================================================
// Pages
// ============================================================================

/// Sanitize every textual field of a page, own and inherited.
pub fn sanitize_page(page: &mut Page, registry: &TypeRegistry) {
    let current_type = page.type_name.clone();
    let ctx = TypeContext::new(&current_type, registry);

    if !page.description.is_empty() {
        page.meta_description = meta_description(&page.description, &ctx);
    }
    rewrite(&mut page.description, &ctx);

    for text in page.blocks.iter_mut().filter_map(|b| b.text_mut()) {
        rewrite(text, &ctx);
    }

    let functions = page
        .constructors
        .iter_mut()
        .chain(page.functions.iter_mut())
        .chain(page.base_functions.values_mut().flatten());
    for function in functions {
        rewrite(&mut function.description, &ctx);
    }

    let properties = page
        .properties
        .iter_mut()
        .chain(page.base_properties.values_mut().flatten())
        .chain(page.built_ins.iter_mut());
    for property in properties {
        rewrite(&mut property.description, &ctx);
    }
}

pub fn sanitize_pages(pages: &mut Pages, registry: &TypeRegistry) {
    for page in pages.values_mut() {
        sanitize_page(page, registry);
    }
}
