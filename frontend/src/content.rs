//! Marketing copy, embedded at build time and parsed once at startup.

use serde::Deserialize;
use thiserror::Error;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("plan message template is missing the {{price}} placeholder")]
    PlanTemplate,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct SiteContent {
    pub title: String,
    pub description: String,
    pub messages: Messages,
    pub hero: Hero,
    pub trust: Vec<TrustItem>,
    pub audiences: Vec<Audience>,
    pub steps: Vec<Step>,
    pub deliverables: Vec<String>,
    pub testimonials: Vec<Testimonial>,
    pub team: Vec<TeamMember>,
    pub plans: Vec<Plan>,
    pub faq: Vec<FaqEntry>,
}

/// Pre-filled WhatsApp messages.
#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Messages {
    pub interest: String,
    pub doubt: String,
    /// Template with a `{price}` placeholder.
    pub plan: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Hero {
    pub badge: String,
    pub headline: Vec<String>,
    pub tagline: String,
    pub portrait: String,
    pub students: Vec<String>,
    pub students_caption: String,
    pub cta_heading: String,
    pub cta_note: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct TrustItem {
    pub icon: String,
    pub text: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Audience {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Step {
    pub step: String,
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Testimonial {
    pub name: String,
    pub result: String,
    #[serde(default)]
    pub src: Option<String>,
    #[serde(default)]
    pub poster: Option<String>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub image: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Plan {
    pub price: String,
    pub label: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl Messages {
    pub fn for_plan(&self, plan: &Plan) -> String {
        self.plan.replace("{price}", &plan.price)
    }
}

impl SiteContent {
    pub fn load() -> Result<Self, ContentError> {
        Self::parse(SITE_JSON)
    }

    pub fn parse(json: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(json)?;
        if !content.messages.plan.contains("{price}") {
            return Err(ContentError::PlanTemplate);
        }
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        let content = SiteContent::load().unwrap();
        assert_eq!(content.steps.len(), 3);
        assert_eq!(content.deliverables.len(), 6);
        assert_eq!(content.plans.len(), 3);
        assert_eq!(content.faq.len(), 5);
        assert!(content.testimonials.iter().all(|t| t.src.is_some()));
    }

    #[test]
    fn testimonial_source_is_optional() {
        let t: Testimonial = serde_json::from_str(r#"{"name":"A","result":"B"}"#).unwrap();
        assert_eq!(t.src, None);
        assert_eq!(t.poster, None);
    }

    #[test]
    fn plan_message_fills_in_price() {
        let content = SiteContent::load().unwrap();
        let message = content.messages.for_plan(&content.plans[1]);
        assert_eq!(message, "Olá Sérgio, tenho interesse na consultoria de R$397");
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(SiteContent::parse("{"), Err(ContentError::Malformed(_))));
    }

    #[test]
    fn plan_template_without_placeholder_is_rejected() {
        let broken = SITE_JSON.replace("consultoria de {price}", "consultoria");
        assert!(matches!(SiteContent::parse(&broken), Err(ContentError::PlanTemplate)));
    }
}
