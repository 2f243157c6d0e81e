use std::rc::Rc;

use arukoto_core::SiteConfig;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlScriptElement};
use yew::prelude::*;
use yew::suspense::Suspense;

use crate::reveal_view::RevealView;
use crate::site_runtime;

const ANALYTICS_SCRIPT_ID: &str = "arukoto-analytics";

#[function_component(PageShell)]
pub(crate) fn page_shell() -> Html {
    let config = use_memo((), |_| site_runtime::site_config());
    let config: Rc<SiteConfig> = (*config).clone();

    {
        let config = config.clone();
        use_effect_with((), move |_| {
            if let Some(document) = web_sys::window().and_then(|window| window.document()) {
                apply_document_metadata(&document, &config);
                load_fonts(&document, &config.fonts.stylesheets);
                if let Some(src) = config.analytics.script_src() {
                    mount_analytics(&document, src);
                }
            }
            || ()
        });
    }

    html! {
        <Suspense fallback={html! {}}>
            <RevealView {config} />
        </Suspense>
    }
}

pub(crate) fn apply_document_metadata(document: &Document, config: &SiteConfig) {
    let meta = &config.meta;
    document.set_title(&meta.title);
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("lang", &meta.lang);
    }
    upsert_meta(document, "name", "description", &meta.description);
    if !meta.generator.is_empty() {
        upsert_meta(document, "name", "generator", &meta.generator);
    }
    upsert_meta(document, "property", "og:title", &meta.title);
    upsert_meta(document, "property", "og:description", &meta.description);
    upsert_meta(document, "property", "og:type", "website");
    upsert_meta(document, "name", "twitter:card", "summary_large_image");
    upsert_meta(document, "name", "twitter:title", &meta.title);
    upsert_meta(document, "name", "twitter:description", &meta.description);
    if !meta.favicon.is_empty() {
        upsert_link(document, "icon", &meta.favicon);
    }
}

fn load_fonts(document: &Document, stylesheets: &[String]) {
    for href in stylesheets {
        let href = href.trim();
        if !href.is_empty() {
            upsert_link(document, "stylesheet", href);
        }
    }
}

fn mount_analytics(document: &Document, src: &str) {
    if document.get_element_by_id(ANALYTICS_SCRIPT_ID).is_some() {
        return;
    }
    let Some(head) = document.head() else {
        return;
    };
    let Ok(script) = document
        .create_element("script")
        .map(|element| element.unchecked_into::<HtmlScriptElement>())
    else {
        return;
    };
    script.set_id(ANALYTICS_SCRIPT_ID);
    script.set_defer(true);
    script.set_src(src);
    if head.append_child(&script).is_err() {
        gloo::console::warn!("analytics script not mounted", src.to_string());
    }
}

fn upsert_meta(document: &Document, key_attr: &str, key: &str, content: &str) {
    let selector = format!("meta[{key_attr}=\"{key}\"]");
    let Some(element) = find_or_create(document, &selector, "meta", |element| {
        let _ = element.set_attribute(key_attr, key);
    }) else {
        return;
    };
    let _ = element.set_attribute("content", content);
}

fn upsert_link(document: &Document, rel: &str, href: &str) {
    let selector = if rel == "stylesheet" {
        format!("link[rel=\"stylesheet\"][href=\"{href}\"]")
    } else {
        format!("link[rel=\"{rel}\"]")
    };
    let Some(element) = find_or_create(document, &selector, "link", |element| {
        let _ = element.set_attribute("rel", rel);
    }) else {
        return;
    };
    let _ = element.set_attribute("href", href);
}

fn find_or_create(
    document: &Document,
    selector: &str,
    tag: &str,
    init: impl FnOnce(&Element),
) -> Option<Element> {
    if let Ok(Some(existing)) = document.query_selector(selector) {
        return Some(existing);
    }
    let head = document.head()?;
    let element = document.create_element(tag).ok()?;
    init(&element);
    head.append_child(&element).ok()?;
    Some(element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::document;
    use arukoto_core::site::SiteMeta;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn meta_content(document: &Document, selector: &str) -> Option<String> {
        document
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|element| element.get_attribute("content"))
    }

    #[wasm_bindgen_test]
    fn metadata_is_written_once_and_updated_in_place() {
        let document = document();
        let mut config = SiteConfig::default();
        config.meta = SiteMeta {
            title: "first".to_string(),
            description: "first description".to_string(),
            ..SiteMeta::default()
        };
        apply_document_metadata(&document, &config);
        assert_eq!(document.title(), "first");
        assert_eq!(
            meta_content(&document, "meta[property=\"og:title\"]").as_deref(),
            Some("first")
        );

        config.meta.description = "second description".to_string();
        apply_document_metadata(&document, &config);
        assert_eq!(
            meta_content(&document, "meta[name=\"description\"]").as_deref(),
            Some("second description")
        );
        let count = document
            .query_selector_all("meta[name=\"description\"]")
            .expect("query")
            .length();
        assert_eq!(count, 1);
    }

    #[wasm_bindgen_test]
    fn analytics_script_is_mounted_once() {
        let document = document();
        mount_analytics(&document, "/insights/script.js");
        mount_analytics(&document, "/insights/script.js");
        let count = document
            .query_selector_all(&format!("#{ANALYTICS_SCRIPT_ID}"))
            .expect("query")
            .length();
        assert_eq!(count, 1);
    }
}
