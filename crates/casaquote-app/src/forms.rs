// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, bail};
use serde::Serialize;

use crate::validation::{
    AreaBounds, check_area_bounds, validate_email, validate_message, validate_name,
    validate_optional_email, validate_phone,
};
use crate::{BudgetBand, FormKind, PropertyType, RoomSelection, ServiceKind};

pub const ESTIMATOR_SOURCE: &str = "estimator";
pub const CONTACT_SOURCE: &str = "contact";

/// Quote request raised from the estimator page, carrying the selection the
/// visitor priced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimateEnquiryInput {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub location: String,
    pub property_size: String,
    pub package: String,
    pub rooms: RoomSelection,
    pub area: Option<i64>,
    pub estimated_budget: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneralEnquiryInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub property_type: Option<PropertyType>,
    pub budget: Option<BudgetBand>,
    pub service: Option<ServiceKind>,
    pub message: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsletterInput {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateEnquiryPayload {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub location: String,
    pub bhk_type: String,
    pub package_type: String,
    pub selected_rooms: String,
    pub area: Option<i64>,
    pub estimated_budget: Option<i64>,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralEnquiryPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub property_type: Option<PropertyType>,
    pub budget: Option<BudgetBand>,
    pub service: Option<ServiceKind>,
    pub message: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsletterPayload {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPayload {
    EstimateEnquiry(EstimateEnquiryInput),
    GeneralEnquiry(GeneralEnquiryInput),
    Newsletter(NewsletterInput),
}

impl FormPayload {
    pub fn kind(&self) -> FormKind {
        match self {
            Self::EstimateEnquiry(_) => FormKind::EstimateEnquiry,
            Self::GeneralEnquiry(_) => FormKind::GeneralEnquiry,
            Self::Newsletter(_) => FormKind::Newsletter,
        }
    }

    pub fn validate(&self, bounds: AreaBounds) -> Result<()> {
        match self {
            Self::EstimateEnquiry(enquiry) => enquiry.validate(bounds),
            Self::GeneralEnquiry(enquiry) => enquiry.validate(),
            Self::Newsletter(newsletter) => newsletter.validate(),
        }
    }

    /// Validates and renders the JSON body for the form's submission path.
    pub fn to_body(&self, bounds: AreaBounds) -> Result<serde_json::Value> {
        self.validate(bounds)?;
        let body = match self {
            Self::EstimateEnquiry(enquiry) => serde_json::to_value(enquiry.to_payload()),
            Self::GeneralEnquiry(enquiry) => serde_json::to_value(enquiry.to_payload()),
            Self::Newsletter(newsletter) => serde_json::to_value(newsletter.to_payload()),
        };
        body.with_context(|| format!("encode {} payload", self.kind().as_str()))
    }
}

impl EstimateEnquiryInput {
    pub fn validate(&self, bounds: AreaBounds) -> Result<()> {
        if let Err(error) = validate_name(&self.name) {
            bail!("{error} -- enter your name and retry");
        }
        if let Err(error) = validate_phone(&self.phone) {
            bail!("{error} -- enter a phone number with at least 10 digits and retry");
        }
        if let Err(error) = validate_optional_email(&self.email) {
            bail!("{error} -- fix the email address or leave it blank");
        }
        if let Some(area) = self.area
            && let Err(error) = check_area_bounds(area, bounds)
        {
            bail!("{error}");
        }
        if let Some(budget) = self.estimated_budget
            && budget < 0
        {
            bail!("estimated budget cannot be negative");
        }
        if self.property_size.trim().is_empty() {
            bail!("property size is required -- pick 1bhk, 2bhk or 3bhk and retry");
        }
        if self.package.trim().is_empty() {
            bail!("package is required -- pick a package and retry");
        }
        Ok(())
    }

    pub fn to_payload(&self) -> EstimateEnquiryPayload {
        EstimateEnquiryPayload {
            name: self.name.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            email: self.email.trim().to_owned(),
            location: self.location.trim().to_owned(),
            bhk_type: self.property_size.clone(),
            package_type: self.package.clone(),
            selected_rooms: self.rooms.joined(", "),
            area: self.area,
            estimated_budget: self.estimated_budget,
            source: ESTIMATOR_SOURCE.to_owned(),
        }
    }
}

impl GeneralEnquiryInput {
    pub fn validate(&self) -> Result<()> {
        if let Err(error) = validate_name(&self.name) {
            bail!("{error} -- enter your name and retry");
        }
        if let Err(error) = validate_email(&self.email) {
            bail!("{error} -- enter an address like name@example.com");
        }
        if let Err(error) = validate_phone(&self.phone) {
            bail!("{error} -- enter a phone number with at least 10 digits and retry");
        }
        if let Err(error) = validate_message(&self.message) {
            bail!("{error} -- describe the project in a sentence or two");
        }
        Ok(())
    }

    pub fn to_payload(&self) -> GeneralEnquiryPayload {
        let source = if self.source.trim().is_empty() {
            CONTACT_SOURCE.to_owned()
        } else {
            self.source.trim().to_owned()
        };
        GeneralEnquiryPayload {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            property_type: self.property_type,
            budget: self.budget,
            service: self.service,
            message: self.message.trim().to_owned(),
            source,
        }
    }
}

impl NewsletterInput {
    pub fn validate(&self) -> Result<()> {
        if let Err(error) = validate_email(&self.email) {
            bail!("{error} -- enter a valid email to receive the discount code");
        }
        Ok(())
    }

    pub fn to_payload(&self) -> NewsletterPayload {
        NewsletterPayload {
            email: self.email.trim().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        EstimateEnquiryInput, FormPayload, GeneralEnquiryInput, NewsletterInput,
    };
    use crate::validation::AreaBounds;
    use crate::{BudgetBand, FormKind, PropertyType, RoomSelection, ServiceKind};

    fn estimate_enquiry() -> EstimateEnquiryInput {
        EstimateEnquiryInput {
            name: "Asha Rao".to_owned(),
            phone: "+91 98765 43210".to_owned(),
            email: "asha@example.in".to_owned(),
            location: "Kondapur".to_owned(),
            property_size: "2bhk".to_owned(),
            package: "premium".to_owned(),
            rooms: ["Living Room", "Kitchen", "Balcony"]
                .into_iter()
                .collect::<RoomSelection>(),
            area: Some(1100),
            estimated_budget: Some(3_025_000),
        }
    }

    fn general_enquiry() -> GeneralEnquiryInput {
        GeneralEnquiryInput {
            name: "Vikram".to_owned(),
            email: "vikram@example.com".to_owned(),
            phone: "9876543210".to_owned(),
            property_type: Some(PropertyType::Villa),
            budget: Some(BudgetBand::TenToTwenty),
            service: Some(ServiceKind::Complete),
            message: "Full villa interior with a modular kitchen".to_owned(),
            source: String::new(),
        }
    }

    #[test]
    fn estimate_enquiry_accepts_valid_input() {
        assert!(estimate_enquiry().validate(AreaBounds::default()).is_ok());
    }

    #[test]
    fn estimate_enquiry_rejects_blank_name() {
        let enquiry = EstimateEnquiryInput {
            name: "  ".to_owned(),
            ..estimate_enquiry()
        };
        let error = enquiry
            .validate(AreaBounds::default())
            .expect_err("blank name should fail");
        assert!(error.to_string().contains("name is required"));
    }

    #[test]
    fn estimate_enquiry_rejects_short_phone() {
        let enquiry = EstimateEnquiryInput {
            phone: "12345".to_owned(),
            ..estimate_enquiry()
        };
        let error = enquiry
            .validate(AreaBounds::default())
            .expect_err("short phone should fail");
        assert!(error.to_string().contains("10 digits"));
    }

    #[test]
    fn general_enquiry_rejects_phone_without_digits() {
        let enquiry = GeneralEnquiryInput {
            phone: "(((( ))))+".to_owned(),
            ..general_enquiry()
        };
        let error = enquiry.validate().expect_err("digitless phone should fail");
        assert!(error.to_string().contains("invalid phone"));
    }

    #[test]
    fn estimate_enquiry_email_is_optional_but_checked() {
        let blank = EstimateEnquiryInput {
            email: String::new(),
            ..estimate_enquiry()
        };
        assert!(blank.validate(AreaBounds::default()).is_ok());

        let malformed = EstimateEnquiryInput {
            email: "asha@".to_owned(),
            ..estimate_enquiry()
        };
        assert!(malformed.validate(AreaBounds::default()).is_err());
    }

    #[test]
    fn estimate_enquiry_rejects_area_outside_bounds() {
        for area in [299, 5001] {
            let enquiry = EstimateEnquiryInput {
                area: Some(area),
                ..estimate_enquiry()
            };
            let error = enquiry
                .validate(AreaBounds::default())
                .expect_err("out-of-range area should fail");
            assert!(error.to_string().contains("300-5000"), "area {area}");
        }
    }

    #[test]
    fn estimate_enquiry_payload_matches_submission_shape() {
        let body = FormPayload::EstimateEnquiry(estimate_enquiry())
            .to_body(AreaBounds::default())
            .expect("payload should encode");
        assert_eq!(body["bhkType"], "2bhk");
        assert_eq!(body["packageType"], "premium");
        assert_eq!(body["selectedRooms"], "Living Room, Kitchen, Balcony");
        assert_eq!(body["area"], 1100);
        assert_eq!(body["estimatedBudget"], 3_025_000);
        assert_eq!(body["source"], "estimator");
    }

    #[test]
    fn general_enquiry_requires_message_length() {
        let enquiry = GeneralEnquiryInput {
            message: "kitchen".to_owned(),
            ..general_enquiry()
        };
        let error = enquiry.validate().expect_err("short message should fail");
        assert!(error.to_string().contains("at least 10 characters"));
    }

    #[test]
    fn general_enquiry_requires_email() {
        let enquiry = GeneralEnquiryInput {
            email: String::new(),
            ..general_enquiry()
        };
        assert!(enquiry.validate().is_err());
    }

    #[test]
    fn general_enquiry_defaults_source_to_contact() {
        let body = FormPayload::GeneralEnquiry(general_enquiry())
            .to_body(AreaBounds::default())
            .expect("payload should encode");
        assert_eq!(body["source"], "contact");
        assert_eq!(body["propertyType"], "villa");
        assert_eq!(body["budget"], "10-20");
        assert_eq!(body["service"], "complete");
    }

    #[test]
    fn newsletter_rejects_missing_at_sign() {
        let payload = FormPayload::Newsletter(NewsletterInput {
            email: "subscriber.example.com".to_owned(),
        });
        assert_eq!(payload.kind(), FormKind::Newsletter);
        assert!(payload.to_body(AreaBounds::default()).is_err());
    }

    #[test]
    fn form_kinds_map_to_submission_paths() {
        assert_eq!(
            FormPayload::EstimateEnquiry(estimate_enquiry())
                .kind()
                .submission_path(),
            "/estimations/enquiry"
        );
        assert_eq!(FormKind::GeneralEnquiry.submission_path(), "/enquiries");
        assert_eq!(FormKind::Newsletter.submission_path(), "/newsletter/subscribe");
    }
}
