use serde::{Deserialize, Serialize};

pub mod matching;

/// A donor record as the backend returns it. Ids are assigned server-side;
/// `total_gifts`/`total_gift_count` are derived aggregates and never editable
/// through the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donor {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Backend-computed display name; may be absent on older records
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub company: Option<String>,
    /// Free-form status string, e.g. "active" or "lapsed"
    pub donor_status: String,
    pub donor_type: String,
    pub total_gifts: f64,
    pub total_gift_count: i64,
    /// RFC 3339 timestamp
    pub created_at: String,
}

impl Donor {
    /// Display name, falling back to "first last" when the backend has not
    /// computed one.
    pub fn display_name(&self) -> String {
        match &self.full_name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => format!("{} {}", self.first_name, self.last_name),
        }
    }

    /// "City, ST" when both parts are present, otherwise whichever exists.
    pub fn location(&self) -> Option<String> {
        match (self.city.as_deref(), self.state.as_deref()) {
            (Some(city), Some(state)) if !city.is_empty() && !state.is_empty() => {
                Some(format!("{}, {}", city, state))
            }
            (Some(city), _) if !city.is_empty() => Some(city.to_string()),
            (_, Some(state)) if !state.is_empty() => Some(state.to_string()),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.donor_status == "active"
    }
}

/// Payload for creating a donor. First and last name are the only required
/// fields; everything else passes through as entered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DonorCreate {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub mobile_phone: Option<String>,
    pub work_phone: Option<String>,
    pub address_line_1: Option<String>,
    pub address_line_2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub company: Option<String>,
    pub job_title: Option<String>,
    pub preferred_contact_method: Option<String>,
    /// Opt-out flags are independent and not mutually exclusive
    pub do_not_email: bool,
    pub do_not_call: bool,
    pub do_not_mail: bool,
    pub donor_type: Option<String>,
    pub notes: Option<String>,
    pub source: Option<String>,
}

impl DonorCreate {
    /// Required-field check run before any network call is issued.
    pub fn validate(&self) -> DonorFormValidation {
        let mut errors = Vec::new();

        if self.first_name.trim().is_empty() {
            errors.push(DonorValidationError::MissingFirstName);
        }
        if self.last_name.trim().is_empty() {
            errors.push(DonorValidationError::MissingLastName);
        }

        DonorFormValidation {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Payload for updating a donor. Every field is optional; absent fields are
/// left out of the request body entirely so the backend only touches what
/// the form sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DonorUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_contact_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub do_not_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub do_not_call: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub do_not_mail: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub donor_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub donor_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wealth_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl From<DonorCreate> for DonorUpdate {
    /// The editor submits the same form payload for create and update; this
    /// maps the create shape onto the update shape.
    fn from(form: DonorCreate) -> Self {
        Self {
            first_name: Some(form.first_name),
            last_name: Some(form.last_name),
            email: form.email,
            phone: form.phone,
            mobile_phone: form.mobile_phone,
            work_phone: form.work_phone,
            address_line_1: form.address_line_1,
            address_line_2: form.address_line_2,
            city: form.city,
            state: form.state,
            postal_code: form.postal_code,
            country: form.country,
            company: form.company,
            job_title: form.job_title,
            preferred_contact_method: form.preferred_contact_method,
            do_not_email: Some(form.do_not_email),
            do_not_call: Some(form.do_not_call),
            do_not_mail: Some(form.do_not_mail),
            donor_type: form.donor_type,
            notes: form.notes,
            source: form.source,
            ..Self::default()
        }
    }
}

/// Request body for merging two donor records. Merging is irreversible and
/// happens entirely server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeDonorsRequest {
    pub primary_donor_id: i64,
    pub duplicate_donor_id: i64,
}

/// Request body for tagging a donor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddTagRequest {
    pub tag_name: String,
}

/// Validation result for the donor form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonorFormValidation {
    pub is_valid: bool,
    pub errors: Vec<DonorValidationError>,
}

/// Specific validation errors for the donor form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DonorValidationError {
    MissingFirstName,
    MissingLastName,
}

impl DonorValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            DonorValidationError::MissingFirstName => "First name is required",
            DonorValidationError::MissingLastName => "Last name is required",
        }
    }
}

/// A signed-in staff member. Sessions come from an `AuthProvider`
/// implementation, never from component-level globals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Staff,
    Volunteer,
}

impl UserRole {
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Staff => "staff",
            UserRole::Volunteer => "volunteer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_donor() -> Donor {
        Donor {
            id: 7,
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            full_name: Some("Jane Doe".to_string()),
            email: Some("jane@example.org".to_string()),
            phone: Some("555-1234".to_string()),
            city: Some("Portland".to_string()),
            state: Some("OR".to_string()),
            company: None,
            donor_status: "active".to_string(),
            donor_type: "individual".to_string(),
            total_gifts: 250.0,
            total_gift_count: 3,
            created_at: "2025-03-14T09:30:00Z".to_string(),
        }
    }

    #[test]
    fn test_display_name_prefers_full_name() {
        let donor = sample_donor();
        assert_eq!(donor.display_name(), "Jane Doe");
    }

    #[test]
    fn test_display_name_falls_back_to_parts() {
        let mut donor = sample_donor();
        donor.full_name = None;
        assert_eq!(donor.display_name(), "Jane Doe");

        donor.full_name = Some(String::new());
        assert_eq!(donor.display_name(), "Jane Doe");
    }

    #[test]
    fn test_location_combinations() {
        let mut donor = sample_donor();
        assert_eq!(donor.location(), Some("Portland, OR".to_string()));

        donor.state = None;
        assert_eq!(donor.location(), Some("Portland".to_string()));

        donor.city = None;
        donor.state = Some("OR".to_string());
        assert_eq!(donor.location(), Some("OR".to_string()));

        donor.state = None;
        assert_eq!(donor.location(), None);
    }

    #[test]
    fn test_validate_requires_first_and_last_name() {
        let form = DonorCreate {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            ..DonorCreate::default()
        };
        assert!(form.validate().is_valid);

        let missing_first = DonorCreate {
            first_name: "   ".to_string(),
            last_name: "Doe".to_string(),
            ..DonorCreate::default()
        };
        let validation = missing_first.validate();
        assert!(!validation.is_valid);
        assert_eq!(
            validation.errors,
            vec![DonorValidationError::MissingFirstName]
        );

        let missing_both = DonorCreate::default();
        let validation = missing_both.validate();
        assert!(!validation.is_valid);
        assert_eq!(
            validation.errors,
            vec![
                DonorValidationError::MissingFirstName,
                DonorValidationError::MissingLastName,
            ]
        );
    }

    #[test]
    fn test_update_from_create_carries_fields() {
        let form = DonorCreate {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: Some("jane@example.org".to_string()),
            do_not_call: true,
            ..DonorCreate::default()
        };

        let update = DonorUpdate::from(form);
        assert_eq!(update.first_name.as_deref(), Some("Jane"));
        assert_eq!(update.last_name.as_deref(), Some("Doe"));
        assert_eq!(update.email.as_deref(), Some("jane@example.org"));
        assert_eq!(update.do_not_call, Some(true));
        assert_eq!(update.do_not_email, Some(false));
        // Update-only fields stay unset
        assert_eq!(update.donor_status, None);
        assert_eq!(update.wealth_rating, None);
    }

    #[test]
    fn test_update_serialization_skips_unset_fields() {
        let update = DonorUpdate {
            email: Some("jane@example.org".to_string()),
            ..DonorUpdate::default()
        };

        let json = serde_json::to_value(&update).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["email"], "jane@example.org");
    }

    #[test]
    fn test_donor_deserializes_from_backend_shape() {
        let json = r#"{
            "id": 42,
            "first_name": "Sam",
            "last_name": "Lee",
            "full_name": "Sam Lee",
            "email": null,
            "phone": "555-0000",
            "city": null,
            "state": null,
            "company": "Acme",
            "donor_status": "active",
            "donor_type": "organization",
            "total_gifts": 1200.5,
            "total_gift_count": 8,
            "created_at": "2024-11-02T16:45:00Z"
        }"#;

        let donor: Donor = serde_json::from_str(json).unwrap();
        assert_eq!(donor.id, 42);
        assert_eq!(donor.email, None);
        assert_eq!(donor.company.as_deref(), Some("Acme"));
        assert_eq!(donor.total_gift_count, 8);
    }

    #[test]
    fn test_merge_request_wire_shape() {
        let request = MergeDonorsRequest {
            primary_donor_id: 1,
            duplicate_donor_id: 2,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["primary_donor_id"], 1);
        assert_eq!(json["duplicate_donor_id"], 2);
    }

    #[test]
    fn test_user_role_serializes_lowercase() {
        let json = serde_json::to_value(UserRole::Admin).unwrap();
        assert_eq!(json, "admin");
        assert_eq!(UserRole::Volunteer.label(), "volunteer");
    }
}
