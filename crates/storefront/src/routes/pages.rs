//! Static content pages: brand story and bespoke services.

use askama::Template;
use askama_web::WebTemplate;
use tracing::instrument;

use crate::filters;
use crate::middleware::CspNonce;

/// One bespoke service with the pieces it covers.
pub struct Service {
    pub name: &'static str,
    pub description: &'static str,
    pub offerings: &'static [&'static str],
}

/// A group of services shown under one heading.
pub struct ServiceGroup {
    pub title: &'static str,
    pub intro: &'static str,
    pub services: &'static [Service],
}

const SERVICE_GROUPS: &[ServiceGroup] = &[
    ServiceGroup {
        title: "Personal Celebrations",
        intro: "Mark life's most precious moments with arrangements designed to last as long as \
                the memories they represent.",
        services: &[
            Service {
                name: "Weddings",
                description: "Bridal bouquets, ceremony arrangements, and reception centerpieces \
                              that keep the beauty of your day.",
                offerings: &[
                    "Bridal & bridesmaids bouquets",
                    "Ceremony arches & aisle arrangements",
                    "Reception centerpieces",
                    "Boutonnières & corsages",
                ],
            },
            Service {
                name: "Anniversaries & Milestones",
                description: "Arrangements that honour the significance of an achievement or \
                              celebration.",
                offerings: &[
                    "Anniversary arrangements",
                    "Graduation celebrations",
                    "Birthday commemoratives",
                    "Achievement honors",
                ],
            },
            Service {
                name: "Memorial & Sympathy",
                description: "Gentle arrangements that offer comfort and stand as lasting \
                              tributes.",
                offerings: &[
                    "Sympathy arrangements",
                    "Memorial services",
                    "Remembrance pieces",
                    "Condolence expressions",
                ],
            },
        ],
    },
    ServiceGroup {
        title: "Corporate & Commercial",
        intro: "Arrangements for professional spaces that reflect your brand's commitment to \
                quality.",
        services: &[
            Service {
                name: "Office & Corporate Spaces",
                description: "Low-maintenance arrangements that stay beautiful year-round, without \
                              the ongoing cost and upkeep of fresh flowers.",
                offerings: &[
                    "Reception & lobby displays",
                    "Conference room centerpieces",
                    "Executive office arrangements",
                    "Corporate event styling",
                    "Seasonal installations",
                ],
            },
            Service {
                name: "Hospitality & Retail",
                description: "Elegant arrangements for guest spaces, free of the operational \
                              work of traditional florals.",
                offerings: &[
                    "Hotel lobby installations",
                    "Restaurant table arrangements",
                    "Retail space displays",
                    "Boutique styling",
                    "Event venue partnerships",
                ],
            },
        ],
    },
];

/// Our Story page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/our_story.html")]
pub struct OurStoryTemplate {
    pub nonce: String,
}

/// Services page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/services.html")]
pub struct ServicesTemplate {
    pub groups: &'static [ServiceGroup],
    pub nonce: String,
}

#[instrument(skip(nonce))]
pub async fn our_story(CspNonce(nonce): CspNonce) -> OurStoryTemplate {
    OurStoryTemplate { nonce }
}

#[instrument(skip(nonce))]
pub async fn services(CspNonce(nonce): CspNonce) -> ServicesTemplate {
    ServicesTemplate {
        groups: SERVICE_GROUPS,
        nonce,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_service_lists_offerings() {
        assert_eq!(SERVICE_GROUPS.len(), 2);
        for group in SERVICE_GROUPS {
            assert!(!group.services.is_empty());
            for service in group.services {
                assert!(!service.offerings.is_empty(), "{} has no offerings", service.name);
            }
        }
    }
}
