//! Site-wide business facts. Everything here is static configuration,
//! not derived data; the SEO resolver and the footer both read from it.

#[derive(Debug, PartialEq)]
pub struct SiteConfig {
    pub brand_name: &'static str,
    /// Substring used to detect whether a page title already carries the brand.
    pub brand_keyword: &'static str,
    pub alternate_name: &'static str,
    pub base_url: &'static str,
    pub default_title: &'static str,
    pub default_description: &'static str,
    pub default_keywords: &'static str,
    pub default_image: &'static str,
    pub logo_path: &'static str,
    pub services_summary: &'static str,
    pub contact_email: &'static str,
    pub contact_phone: &'static str,
    pub contact_phone_display: &'static str,
    pub twitter_handle: &'static str,
    pub social_profiles: &'static [&'static str],
    pub knows_about: &'static [&'static str],
    pub theme_color: &'static str,
}

pub const SITE: SiteConfig = SiteConfig {
    brand_name: "Highshift Media",
    brand_keyword: "Highshift",
    alternate_name: "Highshift AI Agency",
    base_url: "https://highshiftmedia.com",
    default_title: "Highshift Media | Premier AI Automation & Development Agency",
    default_description: "Transform your business with Highshift Media. We specialize in custom AI agents, chatbots, marketing automation, and enterprise LLM integration. Trusted by 500+ businesses worldwide.",
    default_keywords: "AI Agency, Artificial Intelligence, Automation, Chatbots, LLM, Machine Learning, Business Automation, Marketing AI, Highshift Media, AI Agents, Voice AI, WhatsApp Bot",
    default_image: "/og-image.png",
    logo_path: "/highshift-icon.svg",
    services_summary: "AI Agents, Chatbots, Marketing Automation, Voice AI",
    contact_email: "info@highshiftmedia.com",
    contact_phone: "+1-630-703-3569",
    contact_phone_display: "+1 (630) 703-3569",
    twitter_handle: "@highshiftmedia",
    social_profiles: &[
        "https://twitter.com/highshiftmedia",
        "https://linkedin.com/company/highshiftmedia",
        "https://wa.me/+16307033569",
    ],
    knows_about: &[
        "Artificial Intelligence",
        "Machine Learning",
        "Chatbots",
        "Business Automation",
        "Marketing Automation",
        "Voice AI",
        "LLM Integration",
    ],
    theme_color: "#0a0a0f",
};

pub const CALENDLY_URL: &str = "https://calendly.com/d/cxff-b85-5pd/schedule-ai-consultation";
