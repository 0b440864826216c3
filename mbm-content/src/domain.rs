use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Categories of static marketing content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentDomain {
    Services,
    Portfolio,
    Testimonials,
    Blog,
    Pricing,
}

impl ContentDomain {
    pub const ALL: [Self; 5] = [
        Self::Services,
        Self::Portfolio,
        Self::Testimonials,
        Self::Blog,
        Self::Pricing,
    ];

    /// Name used both for the document file and the string-table group.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Services => "services",
            Self::Portfolio => "portfolio",
            Self::Testimonials => "testimonials",
            Self::Blog => "blog",
            Self::Pricing => "pricing",
        }
    }

    /// Site-relative path of the domain's document.
    #[must_use]
    pub fn document_path(self) -> String {
        format!("data/{}.json", self.key())
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.key() == key)
    }
}

impl fmt::Display for ContentDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Translation key for one field of one record: `<domain>.<id>_<suffix>`.
#[must_use]
pub fn record_key(domain: ContentDomain, id: &str, suffix: &str) -> String {
    format!("{}.{id}_{suffix}", domain.key())
}

/// A field that may be replaced by a keyed translation.
pub struct TranslatableField<'a> {
    pub key: String,
    pub value: &'a mut String,
}

impl<'a> TranslatableField<'a> {
    fn new(domain: ContentDomain, id: &str, suffix: &str, value: &'a mut String) -> Self {
        Self {
            key: record_key(domain, id, suffix),
            value,
        }
    }

    /// Field translated through a key shared by every record carrying the
    /// same label: `<domain>.<stem>_<label>`.
    fn shared(domain: ContentDomain, stem: &str, label: &str, value: &'a mut String) -> Self {
        Self {
            key: format!("{}.{stem}_{label}", domain.key()),
            value,
        }
    }
}

/// One entity of a content domain, identified by a stable `id`.
pub trait ContentRecord: DeserializeOwned + Clone {
    const DOMAIN: ContentDomain;

    fn id(&self) -> &str;

    /// Category used by filtering; `None` for domains without categories.
    fn category(&self) -> Option<&str> {
        None
    }

    fn translatable_fields(&mut self) -> Vec<TranslatableField<'_>>;
}

fn positional<'a>(
    domain: ContentDomain,
    id: &str,
    stem: &str,
    values: impl Iterator<Item = &'a mut String>,
) -> impl Iterator<Item = TranslatableField<'a>> {
    let id = id.to_string();
    let stem = stem.to_string();
    values.enumerate().map(move |(idx, value)| {
        TranslatableField::new(domain, &id, &format!("{stem}{}", idx + 1), value)
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub icon: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub image: String,
}

impl ContentRecord for Service {
    const DOMAIN: ContentDomain = ContentDomain::Services;

    fn id(&self) -> &str {
        &self.id
    }

    fn translatable_fields(&mut self) -> Vec<TranslatableField<'_>> {
        let d = Self::DOMAIN;
        let mut fields = vec![
            TranslatableField::new(d, &self.id, "title", &mut self.title),
            TranslatableField::new(d, &self.id, "description", &mut self.description),
        ];
        fields.extend(positional(d, &self.id, "feature", self.features.iter_mut()));
        fields
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Impact {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub image: String,
    pub short_description: String,
    #[serde(default)]
    pub full_description: String,
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub impact: Impact,
    #[serde(default)]
    pub testimonial: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl ContentRecord for PortfolioItem {
    const DOMAIN: ContentDomain = ContentDomain::Portfolio;

    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn translatable_fields(&mut self) -> Vec<TranslatableField<'_>> {
        let d = Self::DOMAIN;
        vec![
            TranslatableField::new(d, &self.id, "title", &mut self.title),
            TranslatableField::new(
                d,
                &self.id,
                "short_description",
                &mut self.short_description,
            ),
            TranslatableField::new(
                d,
                &self.id,
                "full_description",
                &mut self.full_description,
            ),
            TranslatableField::new(d, &self.id, "testimonial", &mut self.testimonial),
            TranslatableField::new(d, &self.id, "impact_label", &mut self.impact.label),
            TranslatableField::shared(d, "category", &self.category, &mut self.category_name),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub image: String,
    pub text: String,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub project_name: Option<String>,
}

impl ContentRecord for Testimonial {
    const DOMAIN: ContentDomain = ContentDomain::Testimonials;

    fn id(&self) -> &str {
        &self.id
    }

    fn translatable_fields(&mut self) -> Vec<TranslatableField<'_>> {
        let d = Self::DOMAIN;
        vec![
            TranslatableField::new(d, &self.id, "name", &mut self.name),
            TranslatableField::new(d, &self.id, "role", &mut self.role),
            TranslatableField::new(d, &self.id, "text", &mut self.text),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub category: String,
    /// Display label for `category`; filled from `category` when not authored.
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub author_role: String,
    #[serde(default)]
    pub author_image: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub image: String,
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ContentRecord for BlogPost {
    const DOMAIN: ContentDomain = ContentDomain::Blog;

    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn translatable_fields(&mut self) -> Vec<TranslatableField<'_>> {
        let d = Self::DOMAIN;
        if self.category_name.is_empty() {
            self.category_name.clone_from(&self.category);
        }
        let mut fields = vec![
            TranslatableField::new(d, &self.id, "title", &mut self.title),
            TranslatableField::new(d, &self.id, "excerpt", &mut self.excerpt),
            TranslatableField::new(d, &self.id, "content", &mut self.content),
            TranslatableField::new(d, &self.id, "author_role", &mut self.author_role),
            TranslatableField::shared(d, "category", &self.category, &mut self.category_name),
        ];
        fields.extend(self.tags.iter_mut().map(|tag| TranslatableField {
            key: format!("{}.tag_{tag}", d.key()),
            value: tag,
        }));
        fields
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanFeature {
    pub text: String,
    #[serde(default)]
    pub included: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingPlan {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub popular: bool,
    pub description: String,
    #[serde(default)]
    pub features: Vec<PlanFeature>,
}

impl ContentRecord for PricingPlan {
    const DOMAIN: ContentDomain = ContentDomain::Pricing;

    fn id(&self) -> &str {
        &self.id
    }

    fn translatable_fields(&mut self) -> Vec<TranslatableField<'_>> {
        let d = Self::DOMAIN;
        let mut fields = vec![
            TranslatableField::new(d, &self.id, "name", &mut self.name),
            TranslatableField::new(d, &self.id, "description", &mut self.description),
        ];
        fields.extend(positional(
            d,
            &self.id,
            "feature",
            self.features.iter_mut().map(|f| &mut f.text),
        ));
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_keys_follow_convention() {
        assert_eq!(
            record_key(ContentDomain::Blog, "seo-basics", "title"),
            "blog.seo-basics_title"
        );
    }

    #[test]
    fn list_fields_use_positional_suffixes() {
        let mut plan = PricingPlan {
            id: "starter".into(),
            name: "Starter".into(),
            price: 499.0,
            popular: false,
            description: "For small teams".into(),
            features: vec![
                PlanFeature {
                    text: "Landing page".into(),
                    included: true,
                },
                PlanFeature {
                    text: "SEO audit".into(),
                    included: false,
                },
            ],
        };
        let keys: Vec<String> = plan.translatable_fields().into_iter().map(|f| f.key).collect();
        assert_eq!(
            keys,
            vec![
                "pricing.starter_name",
                "pricing.starter_description",
                "pricing.starter_feature1",
                "pricing.starter_feature2",
            ]
        );
    }

    #[test]
    fn blog_labels_use_shared_keys() {
        let mut post: BlogPost = serde_json::from_value(serde_json::json!({
            "id": "rtl",
            "title": "RTL",
            "category": "Design",
            "excerpt": "e",
            "tags": ["UX", "Arabic"]
        }))
        .unwrap();
        let keys: Vec<String> = post.translatable_fields().into_iter().map(|f| f.key).collect();
        assert!(keys.contains(&"blog.category_Design".to_string()));
        assert!(keys.ends_with(&["blog.tag_UX".to_string(), "blog.tag_Arabic".to_string()]));
        assert_eq!(post.category_name, "Design");
    }

    #[test]
    fn testimonial_author_name_is_translatable() {
        let mut t: Testimonial = serde_json::from_value(serde_json::json!({
            "id": "sara-k", "name": "Sara", "role": "CEO", "text": "Great"
        }))
        .unwrap();
        let keys: Vec<String> = t.translatable_fields().into_iter().map(|f| f.key).collect();
        assert_eq!(
            keys,
            vec![
                "testimonials.sara-k_name",
                "testimonials.sara-k_role",
                "testimonials.sara-k_text",
            ]
        );
    }

    #[test]
    fn domain_keys_round_trip() {
        for domain in ContentDomain::ALL {
            assert_eq!(ContentDomain::from_key(domain.key()), Some(domain));
        }
        assert_eq!(ContentDomain::Pricing.document_path(), "data/pricing.json");
    }
}
