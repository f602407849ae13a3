//! Writes resolved page metadata into the document head. Each `Seo` render
//! sweeps out the previously written tags (marked with a data attribute so
//! nothing hand-authored in `index.html` is touched) and appends the fresh
//! set, so route transitions swap metadata cleanly.

use serde_json::{json, Value};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlHeadElement};
use yew::prelude::*;

use crate::config::SITE;
use crate::seo::meta::{ArticleFacts, HeadTag, MetaResolver, PageMeta, PageType, ResolvedMeta};

const MANAGED_ATTR: &str = "data-hs-seo";

#[derive(Properties, PartialEq)]
pub struct SeoProps {
    #[prop_or_default]
    pub title: Option<String>,
    #[prop_or_default]
    pub description: Option<String>,
    #[prop_or_default]
    pub keywords: Option<String>,
    #[prop_or_default]
    pub image: Option<String>,
    #[prop_or_default]
    pub url: Option<String>,
    #[prop_or_default]
    pub canonical_url: Option<String>,
    #[prop_or_default]
    pub page_type: PageType,
    #[prop_or_default]
    pub article: Option<ArticleFacts>,
    #[prop_or_default]
    pub noindex: bool,
    #[prop_or_default]
    pub schema: Option<Value>,
}

#[function_component(Seo)]
pub fn seo(props: &SeoProps) -> Html {
    let page = PageMeta {
        title: props.title.clone(),
        description: props.description.clone(),
        keywords: props.keywords.clone(),
        image: props.image.clone(),
        url: props.url.clone(),
        canonical_url: props.canonical_url.clone(),
        page_type: props.page_type,
        article: props.article.clone(),
        noindex: props.noindex,
        custom_schema: props.schema.clone(),
    };

    use_effect_with_deps(
        move |page: &PageMeta| {
            let resolved = MetaResolver::site().resolve(page);
            sync_document_head(&resolved);
            || ()
        },
        page,
    );

    html! {}
}

fn sync_document_head(resolved: &ResolvedMeta) {
    let document = match web_sys::window().and_then(|window| window.document()) {
        Some(document) => document,
        None => return,
    };
    let head = match document.head() {
        Some(head) => head,
        None => return,
    };

    // Sweep tags left behind by the previous page.
    if let Ok(stale) = document.query_selector_all(&format!("[{MANAGED_ATTR}]")) {
        for index in 0..stale.length() {
            if let Some(node) = stale.item(index) {
                if let Some(element) = node.dyn_ref::<Element>() {
                    element.remove();
                }
            }
        }
    }

    for tag in resolved.head_tags() {
        match tag {
            HeadTag::Title(title) => document.set_title(&title),
            HeadTag::Meta { name, content } => {
                append_meta(&document, &head, "name", name, &content)
            }
            HeadTag::Property { property, content } => {
                append_meta(&document, &head, "property", property, &content)
            }
            HeadTag::Canonical(href) => {
                if let Ok(link) = document.create_element("link") {
                    let _ = link.set_attribute("rel", "canonical");
                    let _ = link.set_attribute("href", &href);
                    let _ = link.set_attribute(MANAGED_ATTR, "");
                    let _ = head.append_child(&link);
                }
            }
            HeadTag::JsonLd(doc) => {
                if let Ok(serialized) = serde_json::to_string(&doc) {
                    if let Ok(script) = document.create_element("script") {
                        let _ = script.set_attribute("type", "application/ld+json");
                        let _ = script.set_attribute(MANAGED_ATTR, "");
                        script.set_text_content(Some(&serialized));
                        let _ = head.append_child(&script);
                    }
                }
            }
        }
    }
}

fn append_meta(document: &Document, head: &HtmlHeadElement, attr: &str, key: &str, content: &str) {
    if let Ok(element) = document.create_element("meta") {
        let _ = element.set_attribute(attr, key);
        let _ = element.set_attribute("content", content);
        let _ = element.set_attribute(MANAGED_ATTR, "");
        let _ = head.append_child(&element);
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceSeoProps {
    pub service_name: String,
    pub service_description: String,
}

/// Metadata for a single-service page, with a Service document in place of
/// the generated WebPage schema.
#[function_component(ServiceSeo)]
pub fn service_seo(props: &ServiceSeoProps) -> Html {
    let schema = json!({
        "@context": "https://schema.org",
        "@type": "Service",
        "name": props.service_name,
        "description": props.service_description,
        "provider": {
            "@type": "Organization",
            "name": SITE.brand_name
        },
        "areaServed": "Worldwide"
    });
    html! {
        <Seo
            title={format!("{} | AI Services | {}", props.service_name, SITE.brand_name)}
            description={props.service_description.clone()}
            keywords={format!(
                "{}, AI Services, Business Automation, {}",
                props.service_name, SITE.brand_name
            )}
            url={"/services".to_string()}
            page_type={PageType::Service}
            schema={schema}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct AgentSeoProps {
    pub agent_name: String,
    pub industry: String,
}

/// Metadata for an industry demo page.
#[function_component(AgentSeo)]
pub fn agent_seo(props: &AgentSeoProps) -> Html {
    html! {
        <Seo
            title={format!(
                "{} AI Agent | {} Industry | {}",
                props.agent_name, props.industry, SITE.brand_name
            )}
            description={format!(
                "Specialized AI agent for {} businesses. Automate customer interactions, \
                 bookings, and inquiries with our {}.",
                props.industry.to_lowercase(),
                props.agent_name
            )}
            keywords={format!(
                "{industry} AI, {agent}, AI Agent, {industry} Automation, Business Chatbot",
                industry = props.industry,
                agent = props.agent_name
            )}
            url={format!("/demos/{}", industry_slug(&props.industry))}
        />
    }
}

fn industry_slug(industry: &str) -> String {
    industry
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
