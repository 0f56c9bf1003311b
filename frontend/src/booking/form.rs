use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TalentType {
    Development,
    Cloud,
    Data,
    Security,
    Other,
}

impl TalentType {
    pub const ALL: [TalentType; 5] = [
        TalentType::Development,
        TalentType::Cloud,
        TalentType::Data,
        TalentType::Security,
        TalentType::Other,
    ];

    /// Key sent to the email template and used as the option value.
    pub fn key(self) -> &'static str {
        match self {
            TalentType::Development => "development",
            TalentType::Cloud => "cloud",
            TalentType::Data => "data",
            TalentType::Security => "security",
            TalentType::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TalentType::Development => "Software Development",
            TalentType::Cloud => "Cloud Architecture",
            TalentType::Data => "Data Engineering",
            TalentType::Security => "Security",
            TalentType::Other => "Other",
        }
    }

    /// Parses an option key. The empty key means "nothing selected".
    pub fn from_key(key: &str) -> Result<Option<Self>, FormError> {
        if key.is_empty() {
            return Ok(None);
        }
        Self::ALL
            .into_iter()
            .find(|talent| talent.key() == key)
            .map(Some)
            .ok_or_else(|| FormError::UnknownTalentType(key.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FullName,
    WorkEmail,
    Company,
    TalentType,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown talent type: {0:?}")]
    UnknownTalentType(String),
}

/// The consultation request as typed by the visitor. Nothing here is
/// validated; empty fields are sent as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub full_name: String,
    pub work_email: String,
    pub company: String,
    pub talent_type: Option<TalentType>,
}

impl BookingForm {
    pub fn set_field(&mut self, field: FormField, value: &str) -> Result<(), FormError> {
        match field {
            FormField::FullName => self.full_name = value.to_string(),
            FormField::WorkEmail => self.work_email = value.to_string(),
            FormField::Company => self.company = value.to_string(),
            FormField::TalentType => self.talent_type = TalentType::from_key(value)?,
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> BookingForm {
        BookingForm {
            full_name: "Ada Lovelace".into(),
            work_email: "ada@analytical.io".into(),
            company: "Analytical Engines".into(),
            talent_type: Some(TalentType::Data),
        }
    }

    #[test]
    fn company_change_leaves_other_fields_alone() {
        let mut form = filled();
        form.set_field(FormField::Company, "Acme").unwrap();

        assert_eq!(form.company, "Acme");
        assert_eq!(form.full_name, "Ada Lovelace");
        assert_eq!(form.work_email, "ada@analytical.io");
        assert_eq!(form.talent_type, Some(TalentType::Data));
    }

    #[test]
    fn text_fields_accept_anything() {
        let mut form = BookingForm::default();
        form.set_field(FormField::WorkEmail, "not an email").unwrap();
        form.set_field(FormField::FullName, "").unwrap();
        assert_eq!(form.work_email, "not an email");
        assert_eq!(form.full_name, "");
    }

    #[test]
    fn talent_type_takes_option_keys() {
        let mut form = BookingForm::default();
        for talent in TalentType::ALL {
            form.set_field(FormField::TalentType, talent.key()).unwrap();
            assert_eq!(form.talent_type, Some(talent));
        }
    }

    #[test]
    fn empty_talent_key_clears_selection() {
        let mut form = filled();
        form.set_field(FormField::TalentType, "").unwrap();
        assert_eq!(form.talent_type, None);
    }

    #[test]
    fn unknown_talent_key_is_rejected_without_change() {
        let mut form = filled();
        let err = form.set_field(FormField::TalentType, "marketing").unwrap_err();

        assert_eq!(err, FormError::UnknownTalentType("marketing".into()));
        assert_eq!(form, filled());
    }

    #[test]
    fn default_form_is_empty() {
        assert!(BookingForm::default().is_empty());
        assert!(!filled().is_empty());
    }
}
