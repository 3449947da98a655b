//! Keyword responder: answers from a fixed rule table without any network call.

use folio_core::{ChatResponder, RequestContext, ResponderError};

const RESPONDER_NAME: &str = "keyword";

/// Reply when no rule matches.
pub const FALLBACK_REPLY: &str =
    "I don't have that detail on hand—please fill out this form and I'll get back to you once I confirm.";

/// One entry of the rule table: any of `keywords` contained in the lower-cased message selects `reply`.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub topic: &'static str,
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
}

impl KeywordRule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// Rules in priority order. First match wins, so order is part of the contract.
pub const KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule {
        topic: "contact",
        keywords: &["phone", "contact"],
        reply: "You can reach Mallikarjun at (945) 209-2606.",
    },
    KeywordRule {
        topic: "email",
        keywords: &["email"],
        reply: "Mallikarjun's email is Mallikarjun.Gudum@gmail.com.",
    },
    KeywordRule {
        topic: "linkedin",
        keywords: &["linkedin"],
        reply: "Connect on LinkedIn at www.linkedin.com/in/mallikarjungn/.",
    },
    KeywordRule {
        topic: "location",
        keywords: &["location"],
        reply: "Mallikarjun is based in Dallas, TX and willing to relocate anywhere in the US.",
    },
    KeywordRule {
        topic: "visa",
        keywords: &["visa", "authorization"],
        reply: "He holds an F-1 VISA with OPT valid through June 2028 and may need sponsorship after.",
    },
    KeywordRule {
        topic: "skills",
        keywords: &["skill"],
        reply: "Key skills include Python, R, SQL, Power BI, Tableau, Spark, AWS, Azure and ML libraries such as scikit-learn and PyTorch.",
    },
    KeywordRule {
        topic: "experience",
        keywords: &["experience"],
        reply: "Mallikarjun worked as a Research Analyst at UT Dallas and as an Associate Analyst at Innover Digital.",
    },
    KeywordRule {
        topic: "education",
        keywords: &["education"],
        reply: "He earned an MS in Business Analytics & AI from UT Dallas and a BS in Electronics & Communications Engineering from REVA University.",
    },
    KeywordRule {
        topic: "certification",
        keywords: &["certification"],
        reply: "Certifications include AWS Certified Developer – Associate and Microsoft Certified: Azure Fundamentals.",
    },
    KeywordRule {
        topic: "projects",
        keywords: &["project"],
        reply: "Projects span airline pricing optimization, emotion detection in tweets, SDG energy access forecasting, and A/B testing of e‑shop clickstream data.",
    },
    KeywordRule {
        topic: "interests",
        keywords: &["interest", "hobby"],
        reply: "Interests include applying analytics in aviation, visiting all US national parks, and professional sports.",
    },
];

/// Matches messages against [`KEYWORD_RULES`].
#[derive(Debug, Clone, Copy)]
pub struct KeywordResponder {
    rules: &'static [KeywordRule],
}

impl KeywordResponder {
    pub fn new() -> Self {
        Self::with_rules(KEYWORD_RULES)
    }

    pub fn with_rules(rules: &'static [KeywordRule]) -> Self {
        Self { rules }
    }

    /// The first matching rule, if any.
    pub fn matching_rule(&self, message: &str) -> Option<&'static KeywordRule> {
        let lowered = message.to_lowercase();
        self.rules.iter().find(|rule| rule.matches(&lowered))
    }

    /// Reply for `message`; never fails.
    pub fn reply(&self, message: &str) -> &'static str {
        self.matching_rule(message)
            .map(|rule| rule.reply)
            .unwrap_or(FALLBACK_REPLY)
    }
}

impl Default for KeywordResponder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ChatResponder for KeywordResponder {
    fn name(&self) -> &str {
        RESPONDER_NAME
    }

    async fn respond(&self, ctx: &RequestContext, message: &str) -> Result<String, ResponderError> {
        let topic = self.matching_rule(message).map(|r| r.topic).unwrap_or("fallback");
        tracing::debug!(
            target: "folio::chat",
            correlation_id = %ctx.correlation_id,
            topic,
            "keyword rule selected"
        );
        Ok(self.reply(message).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_question_returns_phone_number() {
        let reply = KeywordResponder::new().reply("What's your phone number?");
        assert!(reply.contains("(945) 209-2606"));
    }

    #[test]
    fn email_question_returns_address() {
        let reply = KeywordResponder::new().reply("Tell me about your email");
        assert!(reply.contains("Mallikarjun.Gudum@gmail.com"));
    }

    #[test]
    fn unknown_topic_gets_fallback_verbatim() {
        assert_eq!(KeywordResponder::new().reply("banana"), FALLBACK_REPLY);
        assert_eq!(
            FALLBACK_REPLY,
            "I don't have that detail on hand—please fill out this form and I'll get back to you once I confirm."
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        let responder = KeywordResponder::new();
        assert_eq!(responder.matching_rule("LINKEDIN?").unwrap().topic, "linkedin");
        assert_eq!(responder.matching_rule("Your Hobby").unwrap().topic, "interests");
        assert_eq!(responder.matching_rule("work AUTHORIZATION").unwrap().topic, "visa");
    }

    #[test]
    fn earlier_rule_wins_on_overlap() {
        let responder = KeywordResponder::new();
        for _ in 0..3 {
            let rule = responder.matching_rule("Is there an email for the project?").unwrap();
            assert_eq!(rule.topic, "email");
        }
        // "contact" outranks everything else.
        assert_eq!(
            responder.matching_rule("contact me about skills and education").unwrap().topic,
            "contact"
        );
        assert_eq!(
            responder.matching_rule("education and certification").unwrap().topic,
            "education"
        );
    }

    #[test]
    fn rule_order_is_fixed() {
        let topics: Vec<&str> = KEYWORD_RULES.iter().map(|r| r.topic).collect();
        assert_eq!(
            topics,
            [
                "contact",
                "email",
                "linkedin",
                "location",
                "visa",
                "skills",
                "experience",
                "education",
                "certification",
                "projects",
                "interests",
            ]
        );
    }

    #[test]
    fn substring_matching_catches_plurals() {
        let responder = KeywordResponder::new();
        assert_eq!(responder.matching_rule("what projects?").unwrap().topic, "projects");
        assert_eq!(responder.matching_rule("top skills").unwrap().topic, "skills");
    }

    #[tokio::test]
    async fn respond_never_fails() {
        let responder = KeywordResponder::new();
        let ctx = RequestContext::new();
        let reply = responder.respond(&ctx, "education").await.unwrap();
        assert!(reply.contains("UT Dallas"));
        let reply = responder.respond(&ctx, "🙂").await.unwrap();
        assert_eq!(reply, FALLBACK_REPLY);
    }
}
