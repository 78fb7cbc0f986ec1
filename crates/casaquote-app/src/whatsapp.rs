// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Page the visitor is on when opening the chat menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageContext {
    Home,
    Estimator,
    Services,
    Portfolio,
    Contact,
}

impl PageContext {
    /// First matching path segment wins; anything else is treated as home.
    pub fn from_path(path: &str) -> Self {
        let path = path.to_ascii_lowercase();
        [
            ("estimator", Self::Estimator),
            ("services", Self::Services),
            ("portfolio", Self::Portfolio),
            ("contact", Self::Contact),
        ]
        .into_iter()
        .find(|(needle, _)| path.contains(needle))
        .map_or(Self::Home, |(_, context)| context)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Estimator => "estimator",
            Self::Services => "services",
            Self::Portfolio => "portfolio",
            Self::Contact => "contact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BhkSize {
    One,
    Two,
    Three,
}

impl BhkSize {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::One => "1BHK",
            Self::Two => "2BHK",
            Self::Three => "3BHK",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    FreeConsultation,
    GetQuote,
    PropertyEstimate(BhkSize),
    TalkToDesigner,
    VisitShowroom,
}

impl MessageKind {
    pub const ALL: [Self; 7] = [
        Self::FreeConsultation,
        Self::GetQuote,
        Self::PropertyEstimate(BhkSize::One),
        Self::PropertyEstimate(BhkSize::Two),
        Self::PropertyEstimate(BhkSize::Three),
        Self::TalkToDesigner,
        Self::VisitShowroom,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FreeConsultation => "consultation",
            Self::GetQuote => "quote",
            Self::PropertyEstimate(BhkSize::One) => "1bhk",
            Self::PropertyEstimate(BhkSize::Two) => "2bhk",
            Self::PropertyEstimate(BhkSize::Three) => "3bhk",
            Self::TalkToDesigner => "designer",
            Self::VisitShowroom => "showroom",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FreeConsultation => "Free Consultation",
            Self::GetQuote => "Get Instant Quote",
            Self::PropertyEstimate(BhkSize::One) => "1 BHK Package",
            Self::PropertyEstimate(BhkSize::Two) => "2 BHK Package",
            Self::PropertyEstimate(BhkSize::Three) => "3 BHK Package",
            Self::TalkToDesigner => "Talk to Designer",
            Self::VisitShowroom => "Visit Showroom",
        }
    }
}

pub fn message_text(kind: MessageKind, context: PageContext, business_name: &str) -> String {
    match kind {
        MessageKind::FreeConsultation => match context {
            PageContext::Home => format!(
                "Hi {business_name}! I would like to schedule a free consultation for my interior design project."
            ),
            PageContext::Estimator => "Hi! I just used your cost estimator. I'd like to discuss my project and get a detailed quote.".to_owned(),
            PageContext::Services => "Hi! I'm interested in your interior design services. Can we schedule a consultation?".to_owned(),
            PageContext::Portfolio => "Hi! I saw your portfolio and I'm impressed. I'd like to discuss my project.".to_owned(),
            PageContext::Contact => {
                format!("Hi {business_name}! I would like to schedule a free consultation.")
            }
        },
        MessageKind::GetQuote => match context {
            PageContext::Home => "Hi! I need a detailed quote for my interior design project.",
            PageContext::Estimator => "Hi! I need a detailed quote based on my requirements.",
            PageContext::Services => "Hi! I need a quote for interior design services.",
            PageContext::Portfolio => {
                "Hi! I liked your work. Can I get a quote for a similar project?"
            }
            PageContext::Contact => "Hi! I need a detailed quote for my project.",
        }
        .to_owned(),
        MessageKind::PropertyEstimate(size) => format!(
            "Hi {business_name}! I am interested in {} interior design. Please share the details.",
            size.as_str()
        ),
        MessageKind::TalkToDesigner => {
            "Hi! I'd like to speak with a designer about my project.".to_owned()
        }
        MessageKind::VisitShowroom => {
            "Hi! I'd like to visit your showroom. When are you available?".to_owned()
        }
    }
}

/// Builds a `wa.me` link. Non-digit characters in the phone number are
/// dropped so `+91 98765 43210` and `919876543210` produce the same link.
pub fn deep_link(phone: &str, text: &str) -> String {
    let digits = phone
        .chars()
        .filter(char::is_ascii_digit)
        .collect::<String>();
    format!(
        "{WHATSAPP_BASE_URL}/{digits}?text={}",
        urlencoding::encode(text)
    )
}
