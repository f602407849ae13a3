//! Page metadata derivation: normalized titles, canonical URLs, robots
//! directives, JSON-LD documents and the flat head-tag list each page
//! injects into the document head.
//!
//! This module is DOM-free on purpose: everything here is a deterministic
//! function of its inputs, so it can be exercised off-wasm. The browser
//! side lives in `seo::head`.

use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::config::{SiteConfig, SITE};

const ROBOTS_NOINDEX: &str = "noindex, nofollow";
const ROBOTS_INDEX: &str =
    "index, follow, max-image-preview:large, max-snippet:-1, max-video-preview:-1";
const GOOGLEBOT_INDEX: &str =
    "index, follow, max-snippet:-1, max-image-preview:large, max-video-preview:-1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageType {
    #[default]
    Website,
    Article,
    Service,
}

impl PageType {
    pub fn as_str(self) -> &'static str {
        match self {
            PageType::Website => "website",
            PageType::Article => "article",
            PageType::Service => "service",
        }
    }
}

/// Publication facts for article-type pages.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArticleFacts {
    pub published_time: Option<String>,
    pub modified_time: Option<String>,
    pub author: Option<String>,
    pub section: Option<String>,
    pub tags: Vec<String>,
}

/// Caller-supplied description of one page. Every field is optional;
/// absent fields fall back to the site defaults in `SiteConfig`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    /// Path or absolute URL of the social-preview image.
    pub image: Option<String>,
    /// Path or absolute URL of the page itself.
    pub url: Option<String>,
    /// Overrides the canonical link; taken verbatim when present.
    pub canonical_url: Option<String>,
    pub page_type: PageType,
    pub article: Option<ArticleFacts>,
    pub noindex: bool,
    /// Replaces the generated WebPage/Article document in the first
    /// structured-data slot.
    pub custom_schema: Option<Value>,
}

/// Fully derived metadata for one page render. Recomputed on every call,
/// never cached or shared between pages.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMeta {
    config: &'static SiteConfig,
    pub site_title: String,
    pub description: String,
    pub keywords: String,
    pub page_url: String,
    pub canonical_url: String,
    pub image_url: String,
    pub page_type: PageType,
    pub robots: &'static str,
    pub googlebot: &'static str,
    pub article: Option<ArticleFacts>,
    pub structured_data: Vec<Value>,
}

/// One instruction for the document head.
#[derive(Debug, Clone, PartialEq)]
pub enum HeadTag {
    Title(String),
    Meta { name: &'static str, content: String },
    Property { property: &'static str, content: String },
    Canonical(String),
    JsonLd(Value),
}

pub struct MetaResolver {
    config: &'static SiteConfig,
}

impl MetaResolver {
    pub const fn new(config: &'static SiteConfig) -> Self {
        Self { config }
    }

    pub const fn site() -> Self {
        Self::new(&SITE)
    }

    /// Resolves against today's date (used for the `dateModified` stamp on
    /// WebPage documents).
    pub fn resolve(&self, page: &PageMeta) -> ResolvedMeta {
        self.resolve_on(page, chrono::Utc::now().date_naive())
    }

    pub fn resolve_on(&self, page: &PageMeta, modified: NaiveDate) -> ResolvedMeta {
        let config = self.config;

        let title = page.title.as_deref().unwrap_or(config.default_title);
        let site_title = if title.contains(config.brand_keyword) {
            title.to_string()
        } else {
            format!("{} | {}", title, config.brand_name)
        };

        let description = page
            .description
            .as_deref()
            .unwrap_or(config.default_description)
            .to_string();
        let keywords = page
            .keywords
            .as_deref()
            .unwrap_or(config.default_keywords)
            .to_string();

        let page_url = self.absolutize(page.url.as_deref(), "/");
        let canonical_url = match &page.canonical_url {
            Some(canonical) => canonical.clone(),
            None => page_url.clone(),
        };
        let image_url = self.absolutize(page.image.as_deref(), config.default_image);

        let (robots, googlebot) = if page.noindex {
            (ROBOTS_NOINDEX, ROBOTS_NOINDEX)
        } else {
            (ROBOTS_INDEX, GOOGLEBOT_INDEX)
        };

        let organization = self.organization_schema(&description);
        let breadcrumbs = self.breadcrumb_schema(&canonical_url);
        // A caller-supplied schema takes the first slot and replaces the
        // generated WebPage/Article document entirely.
        let structured_data = match &page.custom_schema {
            Some(custom) => vec![custom.clone(), organization, breadcrumbs],
            None => {
                let page_doc =
                    self.page_schema(page, &site_title, &page_url, &description, modified);
                vec![organization, page_doc, breadcrumbs]
            }
        };

        ResolvedMeta {
            config,
            site_title,
            description,
            keywords,
            page_url,
            canonical_url,
            image_url,
            page_type: page.page_type,
            robots,
            googlebot,
            article: page.article.clone(),
            structured_data,
        }
    }

    /// Returns `value` untouched when it is already absolute, otherwise
    /// prefixes the site base URL. Absent values absolutize the fallback.
    pub fn absolutize(&self, value: Option<&str>, fallback: &str) -> String {
        let value = value.unwrap_or(fallback);
        if value.starts_with("http") {
            value.to_string()
        } else {
            format!("{}{}", self.config.base_url, value)
        }
    }

    fn organization_schema(&self, description: &str) -> Value {
        let config = self.config;
        json!({
            "@context": "https://schema.org",
            "@type": "Organization",
            "@id": format!("{}/#organization", config.base_url),
            "name": config.brand_name,
            "alternateName": config.alternate_name,
            "url": config.base_url,
            "logo": {
                "@type": "ImageObject",
                "url": format!("{}{}", config.base_url, config.logo_path),
                "width": 512,
                "height": 512
            },
            "image": format!("{}{}", config.base_url, config.default_image),
            "description": description,
            "email": config.contact_email,
            "telephone": config.contact_phone,
            "sameAs": config.social_profiles,
            "contactPoint": {
                "@type": "ContactPoint",
                "telephone": config.contact_phone,
                "contactType": "customer service",
                "email": config.contact_email,
                "availableLanguage": ["English"]
            },
            "areaServed": "Worldwide",
            "knowsAbout": config.knows_about
        })
    }

    fn page_schema(
        &self,
        page: &PageMeta,
        site_title: &str,
        page_url: &str,
        description: &str,
        modified: NaiveDate,
    ) -> Value {
        let config = self.config;
        let schema_type = if page.page_type == PageType::Article {
            "Article"
        } else {
            "WebPage"
        };
        let mut doc = json!({
            "@context": "https://schema.org",
            "@type": schema_type,
            "@id": format!("{page_url}#webpage"),
            "url": page_url,
            "name": site_title,
            "description": description,
            "isPartOf": { "@id": format!("{}/#website", config.base_url) },
            "publisher": { "@id": format!("{}/#organization", config.base_url) },
            "inLanguage": "en-US",
            "dateModified": modified.format("%Y-%m-%d").to_string(),
        });
        if let Some(article) = &page.article {
            if let Some(fields) = doc.as_object_mut() {
                if let Some(published) = &article.published_time {
                    fields.insert("datePublished".to_string(), json!(published));
                    fields.insert(
                        "dateModified".to_string(),
                        json!(article.modified_time.as_ref().unwrap_or(published)),
                    );
                }
                let author = article.author.as_deref().unwrap_or(config.brand_name);
                fields.insert(
                    "author".to_string(),
                    json!({ "@type": "Person", "name": author }),
                );
                if let Some(section) = &article.section {
                    fields.insert("articleSection".to_string(), json!(section));
                }
                if !article.tags.is_empty() {
                    fields.insert("keywords".to_string(), json!(article.tags.join(", ")));
                }
            }
        }
        doc
    }

    fn breadcrumb_schema(&self, canonical_url: &str) -> Value {
        let config = self.config;
        let path = canonical_url
            .strip_prefix(config.base_url)
            .unwrap_or(canonical_url);
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let mut items = vec![json!({
            "@type": "ListItem",
            "position": 1,
            "name": "Home",
            "item": config.base_url
        })];
        for (index, segment) in segments.iter().enumerate() {
            items.push(json!({
                "@type": "ListItem",
                "position": index + 2,
                "name": segment_title(segment),
                "item": format!("{}/{}", config.base_url, segments[..=index].join("/"))
            }));
        }
        json!({
            "@context": "https://schema.org",
            "@type": "BreadcrumbList",
            "itemListElement": items
        })
    }
}

/// Display name of a breadcrumb segment: first character uppercased,
/// remaining dashes become spaces. No per-word casing.
pub fn segment_title(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => {
            let rest: String = chars.collect();
            format!("{}{}", first.to_uppercase(), rest.replace('-', " "))
        }
        None => String::new(),
    }
}

impl ResolvedMeta {
    /// Flat head-tag emission. Absent optional inputs omit their tags;
    /// nothing is emitted with an empty substituted value.
    pub fn head_tags(&self) -> Vec<HeadTag> {
        let config = self.config;
        let mut tags = vec![
            HeadTag::Title(self.site_title.clone()),
            HeadTag::Meta {
                name: "title",
                content: self.site_title.clone(),
            },
            HeadTag::Meta {
                name: "description",
                content: self.description.clone(),
            },
            HeadTag::Meta {
                name: "keywords",
                content: self.keywords.clone(),
            },
            HeadTag::Canonical(self.canonical_url.clone()),
            HeadTag::Meta {
                name: "robots",
                content: self.robots.to_string(),
            },
            HeadTag::Meta {
                name: "googlebot",
                content: self.googlebot.to_string(),
            },
            HeadTag::Meta {
                name: "ai-content-description",
                content: self.description.clone(),
            },
            HeadTag::Meta {
                name: "ai-business-info",
                content: format!(
                    "Company: {} | Services: {} | Contact: {} | Phone: {}",
                    config.brand_name,
                    config.services_summary,
                    config.contact_email,
                    config.contact_phone_display
                ),
            },
            HeadTag::Property {
                property: "og:type",
                content: self.page_type.as_str().to_string(),
            },
            HeadTag::Property {
                property: "og:url",
                content: self.page_url.clone(),
            },
            HeadTag::Property {
                property: "og:title",
                content: self.site_title.clone(),
            },
            HeadTag::Property {
                property: "og:description",
                content: self.description.clone(),
            },
            HeadTag::Property {
                property: "og:image",
                content: self.image_url.clone(),
            },
            HeadTag::Property {
                property: "og:image:width",
                content: "1200".to_string(),
            },
            HeadTag::Property {
                property: "og:image:height",
                content: "630".to_string(),
            },
            HeadTag::Property {
                property: "og:image:alt",
                content: self.site_title.clone(),
            },
            HeadTag::Property {
                property: "og:site_name",
                content: config.brand_name.to_string(),
            },
            HeadTag::Property {
                property: "og:locale",
                content: "en_US".to_string(),
            },
            HeadTag::Meta {
                name: "twitter:card",
                content: "summary_large_image".to_string(),
            },
            HeadTag::Meta {
                name: "twitter:url",
                content: self.page_url.clone(),
            },
            HeadTag::Meta {
                name: "twitter:title",
                content: self.site_title.clone(),
            },
            HeadTag::Meta {
                name: "twitter:description",
                content: self.description.clone(),
            },
            HeadTag::Meta {
                name: "twitter:image",
                content: self.image_url.clone(),
            },
            HeadTag::Meta {
                name: "twitter:site",
                content: config.twitter_handle.to_string(),
            },
            HeadTag::Meta {
                name: "twitter:creator",
                content: config.twitter_handle.to_string(),
            },
        ];

        if let Some(article) = &self.article {
            if let Some(published) = &article.published_time {
                tags.push(HeadTag::Property {
                    property: "article:published_time",
                    content: published.clone(),
                });
            }
            if let Some(modified) = article
                .modified_time
                .as_ref()
                .or(article.published_time.as_ref())
            {
                tags.push(HeadTag::Property {
                    property: "article:modified_time",
                    content: modified.clone(),
                });
            }
            tags.push(HeadTag::Property {
                property: "article:author",
                content: article
                    .author
                    .clone()
                    .unwrap_or_else(|| config.brand_name.to_string()),
            });
            if let Some(section) = &article.section {
                tags.push(HeadTag::Property {
                    property: "article:section",
                    content: section.clone(),
                });
            }
            for tag in &article.tags {
                tags.push(HeadTag::Property {
                    property: "article:tag",
                    content: tag.clone(),
                });
            }
        }

        for doc in &self.structured_data {
            tags.push(HeadTag::JsonLd(doc.clone()));
        }

        tags.push(HeadTag::Meta {
            name: "format-detection",
            content: "telephone=no".to_string(),
        });
        tags.push(HeadTag::Meta {
            name: "theme-color",
            content: config.theme_color.to_string(),
        });
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> MetaResolver {
        MetaResolver::site()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn schema_type(doc: &Value) -> &str {
        doc["@type"].as_str().unwrap_or_default()
    }

    #[test]
    fn resolution_is_deterministic() {
        let page = PageMeta {
            title: Some("Voice AI".to_string()),
            url: Some("/services/voice-ai".to_string()),
            page_type: PageType::Service,
            ..PageMeta::default()
        };
        let first = resolver().resolve_on(&page, date());
        let second = resolver().resolve_on(&page, date());
        assert_eq!(first, second);
        assert_eq!(first.head_tags(), second.head_tags());
    }

    #[test]
    fn absolutize_is_idempotent() {
        let r = resolver();
        for input in ["/contact", "https://cdn.x.com/a.png", "http://example.com", "/a/b-c"] {
            let once = r.absolutize(Some(input), "/");
            let twice = r.absolutize(Some(&once), "/");
            assert_eq!(once, twice, "absolutize must be idempotent for {input:?}");
        }
        assert_eq!(r.absolutize(None, "/"), "https://highshiftmedia.com/");
    }

    #[test]
    fn title_gains_brand_suffix_unless_already_branded() {
        let r = resolver();
        let plain = r.resolve_on(
            &PageMeta {
                title: Some("Contact".to_string()),
                ..PageMeta::default()
            },
            date(),
        );
        assert_eq!(plain.site_title, "Contact | Highshift Media");

        let branded = r.resolve_on(
            &PageMeta {
                title: Some("About Highshift Media".to_string()),
                ..PageMeta::default()
            },
            date(),
        );
        assert_eq!(branded.site_title, "About Highshift Media");

        let defaulted = r.resolve_on(&PageMeta::default(), date());
        assert_eq!(defaulted.site_title, SITE.default_title);
    }

    #[test]
    fn default_canonical_is_the_site_root() {
        let resolved = resolver().resolve_on(
            &PageMeta {
                title: Some("Contact".to_string()),
                ..PageMeta::default()
            },
            date(),
        );
        assert_eq!(resolved.canonical_url, "https://highshiftmedia.com/");
    }

    #[test]
    fn canonical_resolution_order() {
        let r = resolver();
        let explicit = r.resolve_on(
            &PageMeta {
                url: Some("/services".to_string()),
                canonical_url: Some("https://highshiftmedia.com/preferred".to_string()),
                ..PageMeta::default()
            },
            date(),
        );
        assert_eq!(explicit.canonical_url, "https://highshiftmedia.com/preferred");
        // og:url keeps pointing at the page itself.
        assert_eq!(explicit.page_url, "https://highshiftmedia.com/services");

        let from_url = r.resolve_on(
            &PageMeta {
                url: Some("/services".to_string()),
                ..PageMeta::default()
            },
            date(),
        );
        assert_eq!(from_url.canonical_url, "https://highshiftmedia.com/services");
    }

    #[test]
    fn image_paths_absolutize_and_absolute_images_pass_through() {
        let r = resolver();
        let local = r.resolve_on(
            &PageMeta {
                image: Some("/custom.png".to_string()),
                ..PageMeta::default()
            },
            date(),
        );
        assert_eq!(local.image_url, "https://highshiftmedia.com/custom.png");

        let remote = r.resolve_on(
            &PageMeta {
                image: Some("https://cdn.x.com/a.png".to_string()),
                ..PageMeta::default()
            },
            date(),
        );
        assert_eq!(remote.image_url, "https://cdn.x.com/a.png");

        let fallback = r.resolve_on(&PageMeta::default(), date());
        assert_eq!(fallback.image_url, "https://highshiftmedia.com/og-image.png");
    }

    #[test]
    fn noindex_selects_the_blocking_directive_for_both_crawlers() {
        let blocked = resolver().resolve_on(
            &PageMeta {
                noindex: true,
                ..PageMeta::default()
            },
            date(),
        );
        assert_eq!(blocked.robots, "noindex, nofollow");
        assert_eq!(blocked.googlebot, "noindex, nofollow");

        let open = resolver().resolve_on(&PageMeta::default(), date());
        assert!(open.robots.starts_with("index, follow"));
        assert!(open.googlebot.starts_with("index, follow"));
        assert!(open.robots.contains("max-image-preview:large"));
        assert!(open.robots.contains("max-snippet:-1"));
    }

    #[test]
    fn breadcrumbs_cover_every_segment_in_order() {
        let resolved = resolver().resolve_on(
            &PageMeta {
                url: Some("/services/chatbots".to_string()),
                page_type: PageType::Service,
                ..PageMeta::default()
            },
            date(),
        );
        let crumbs = &resolved.structured_data[2];
        assert_eq!(schema_type(crumbs), "BreadcrumbList");
        let items = crumbs["itemListElement"].as_array().unwrap();
        assert_eq!(items.len(), 3);

        assert_eq!(items[0]["position"], 1);
        assert_eq!(items[0]["name"], "Home");
        assert_eq!(items[0]["item"], "https://highshiftmedia.com");

        assert_eq!(items[1]["position"], 2);
        assert_eq!(items[1]["name"], "Services");
        assert_eq!(items[1]["item"], "https://highshiftmedia.com/services");

        assert_eq!(items[2]["position"], 3);
        assert_eq!(items[2]["name"], "Chatbots");
        assert_eq!(items[2]["item"], "https://highshiftmedia.com/services/chatbots");
    }

    #[test]
    fn breadcrumb_count_tracks_segment_count() {
        let r = resolver();
        for (url, segments) in [
            ("/", 0usize),
            ("/contact", 1),
            ("/services/chatbots", 2),
            ("/demos/restaurant/booking", 3),
        ] {
            let resolved = r.resolve_on(
                &PageMeta {
                    url: Some(url.to_string()),
                    ..PageMeta::default()
                },
                date(),
            );
            let items = resolved.structured_data[2]["itemListElement"]
                .as_array()
                .unwrap()
                .clone();
            assert_eq!(items.len(), segments + 1, "for {url}");
            for (i, item) in items.iter().enumerate() {
                assert_eq!(item["position"], i as u64 + 1, "for {url}");
            }
        }
    }

    #[test]
    fn segment_titles_capitalize_and_replace_dashes() {
        assert_eq!(segment_title("chatbots"), "Chatbots");
        assert_eq!(segment_title("voice-ai"), "Voice ai");
        assert_eq!(segment_title("ai-marketing-automation"), "Ai marketing automation");
        assert_eq!(segment_title(""), "");
    }

    #[test]
    fn custom_schema_replaces_the_page_document() {
        let custom = json!({ "@type": "Service", "name": "Chatbots" });
        let resolved = resolver().resolve_on(
            &PageMeta {
                custom_schema: Some(custom.clone()),
                ..PageMeta::default()
            },
            date(),
        );
        assert_eq!(resolved.structured_data.len(), 3);
        assert_eq!(resolved.structured_data[0], custom);
        assert_eq!(schema_type(&resolved.structured_data[1]), "Organization");
        assert_eq!(schema_type(&resolved.structured_data[2]), "BreadcrumbList");
        assert!(resolved
            .structured_data
            .iter()
            .all(|doc| schema_type(doc) != "WebPage" && schema_type(doc) != "Article"));
    }

    #[test]
    fn default_documents_are_organization_page_breadcrumbs() {
        let resolved = resolver().resolve_on(&PageMeta::default(), date());
        assert_eq!(resolved.structured_data.len(), 3);
        assert_eq!(schema_type(&resolved.structured_data[0]), "Organization");
        assert_eq!(schema_type(&resolved.structured_data[1]), "WebPage");
        assert_eq!(schema_type(&resolved.structured_data[2]), "BreadcrumbList");
        assert_eq!(resolved.structured_data[1]["dateModified"], "2025-06-01");
    }

    #[test]
    fn organization_document_carries_the_business_facts() {
        let resolved = resolver().resolve_on(&PageMeta::default(), date());
        let org = &resolved.structured_data[0];
        assert_eq!(org["name"], "Highshift Media");
        assert_eq!(org["url"], "https://highshiftmedia.com");
        assert_eq!(org["email"], "info@highshiftmedia.com");
        assert_eq!(org["description"], SITE.default_description);
        assert_eq!(org["sameAs"].as_array().unwrap().len(), 3);
        assert_eq!(org["contactPoint"]["contactType"], "customer service");
    }

    #[test]
    fn article_facts_merge_into_the_page_document() {
        let resolved = resolver().resolve_on(
            &PageMeta {
                title: Some("Scaling Support With AI".to_string()),
                url: Some("/blog/scaling-support".to_string()),
                page_type: PageType::Article,
                article: Some(ArticleFacts {
                    published_time: Some("2025-03-10".to_string()),
                    modified_time: None,
                    author: None,
                    section: Some("Automation".to_string()),
                    tags: vec!["AI".to_string(), "Support".to_string()],
                }),
                ..PageMeta::default()
            },
            date(),
        );
        let doc = &resolved.structured_data[1];
        assert_eq!(schema_type(doc), "Article");
        assert_eq!(doc["datePublished"], "2025-03-10");
        // Missing modified time falls back to the published time.
        assert_eq!(doc["dateModified"], "2025-03-10");
        assert_eq!(doc["author"]["name"], "Highshift Media");
        assert_eq!(doc["articleSection"], "Automation");
        assert_eq!(doc["keywords"], "AI, Support");
    }

    #[test]
    fn head_tags_cover_the_fixed_sets() {
        let resolved = resolver().resolve_on(
            &PageMeta {
                title: Some("Contact".to_string()),
                url: Some("/contact".to_string()),
                ..PageMeta::default()
            },
            date(),
        );
        let tags = resolved.head_tags();

        let properties: Vec<&str> = tags
            .iter()
            .filter_map(|tag| match tag {
                HeadTag::Property { property, .. } => Some(*property),
                _ => None,
            })
            .collect();
        for expected in [
            "og:type",
            "og:url",
            "og:title",
            "og:description",
            "og:image",
            "og:site_name",
            "og:locale",
        ] {
            assert!(properties.contains(&expected), "missing {expected}");
        }

        let names: Vec<&str> = tags
            .iter()
            .filter_map(|tag| match tag {
                HeadTag::Meta { name, .. } => Some(*name),
                _ => None,
            })
            .collect();
        for expected in [
            "title",
            "description",
            "keywords",
            "robots",
            "googlebot",
            "twitter:card",
            "twitter:image",
            "format-detection",
            "theme-color",
        ] {
            assert!(names.contains(&expected), "missing {expected}");
        }

        assert_eq!(
            tags.iter()
                .filter(|tag| matches!(tag, HeadTag::JsonLd(_)))
                .count(),
            3
        );
        assert!(tags
            .iter()
            .any(|tag| matches!(tag, HeadTag::Canonical(href) if href == "https://highshiftmedia.com/contact")));
    }

    #[test]
    fn head_tags_never_emit_empty_values() {
        let pages = [
            PageMeta::default(),
            PageMeta {
                title: Some("Demos".to_string()),
                url: Some("/demos".to_string()),
                noindex: true,
                ..PageMeta::default()
            },
            PageMeta {
                page_type: PageType::Article,
                article: Some(ArticleFacts::default()),
                ..PageMeta::default()
            },
        ];
        for page in pages {
            for tag in resolver().resolve_on(&page, date()).head_tags() {
                match tag {
                    HeadTag::Title(content)
                    | HeadTag::Canonical(content)
                    | HeadTag::Meta { content, .. }
                    | HeadTag::Property { content, .. } => {
                        assert!(!content.is_empty())
                    }
                    HeadTag::JsonLd(doc) => assert!(doc.is_object()),
                }
            }
        }
    }

    #[test]
    fn article_tags_emit_one_property_per_fact_and_tag() {
        let resolved = resolver().resolve_on(
            &PageMeta {
                page_type: PageType::Article,
                article: Some(ArticleFacts {
                    published_time: Some("2025-03-10".to_string()),
                    modified_time: Some("2025-04-01".to_string()),
                    author: Some("J. Rivera".to_string()),
                    section: Some("Automation".to_string()),
                    tags: vec!["AI".to_string(), "Voice".to_string(), "Support".to_string()],
                }),
                ..PageMeta::default()
            },
            date(),
        );
        let tags = resolved.head_tags();
        let article_tags: Vec<(&str, &str)> = tags
            .iter()
            .filter_map(|tag| match tag {
                HeadTag::Property { property, content } if property.starts_with("article:") => {
                    Some((*property, content.as_str()))
                }
                _ => None,
            })
            .collect();
        assert_eq!(
            article_tags
                .iter()
                .filter(|(property, _)| *property == "article:tag")
                .count(),
            3
        );
        assert!(article_tags.contains(&("article:published_time", "2025-03-10")));
        assert!(article_tags.contains(&("article:modified_time", "2025-04-01")));
        assert!(article_tags.contains(&("article:author", "J. Rivera")));
        assert!(article_tags.contains(&("article:section", "Automation")));
    }
}
