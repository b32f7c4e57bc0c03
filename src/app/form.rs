use crate::config::AppConfig;

/// The recognized field set is fixed; unknown field names are
/// unrepresentable by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    RecipientAddress,
    ImageReference,
    Name,
    Description,
    TargetPackage,
    TargetModule,
    TargetFunction,
}

impl FormField {
    /// Edit/navigation order in the form view.
    pub const ALL: [FormField; 7] = [
        FormField::RecipientAddress,
        FormField::ImageReference,
        FormField::Name,
        FormField::Description,
        FormField::TargetPackage,
        FormField::TargetModule,
        FormField::TargetFunction,
    ];

    /// The user-entered fields cleared by `reset`; target identifiers
    /// persist across mints.
    pub const USER_FIELDS: [FormField; 4] = [
        FormField::RecipientAddress,
        FormField::ImageReference,
        FormField::Name,
        FormField::Description,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::RecipientAddress => "Recipient Address",
            FormField::ImageReference => "Image URL / File",
            FormField::Name => "Card Name",
            FormField::Description => "Description",
            FormField::TargetPackage => "Package ID",
            FormField::TargetModule => "Module",
            FormField::TargetFunction => "Function",
        }
    }
}

/// Trimmed snapshot of a submittable form, handed to the mint submitter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MintRequest {
    pub recipient_address: String,
    pub image_reference: String,
    pub name: String,
    pub description: String,
    pub target_package: String,
    pub target_module: String,
    pub target_function: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MintForm {
    pub recipient_address: String,
    pub image_reference: String,
    pub name: String,
    pub description: String,
    pub target_package: String,
    pub target_module: String,
    pub target_function: String,
}

impl MintForm {
    pub fn new(config: &AppConfig) -> Self {
        MintForm {
            recipient_address: String::new(),
            image_reference: String::new(),
            name: String::new(),
            description: String::new(),
            target_package: config.target_package.clone().unwrap_or_default(),
            target_module: config.target_module.clone(),
            target_function: config.target_function.clone(),
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::RecipientAddress => &self.recipient_address,
            FormField::ImageReference => &self.image_reference,
            FormField::Name => &self.name,
            FormField::Description => &self.description,
            FormField::TargetPackage => &self.target_package,
            FormField::TargetModule => &self.target_module,
            FormField::TargetFunction => &self.target_function,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::RecipientAddress => &mut self.recipient_address,
            FormField::ImageReference => &mut self.image_reference,
            FormField::Name => &mut self.name,
            FormField::Description => &mut self.description,
            FormField::TargetPackage => &mut self.target_package,
            FormField::TargetModule => &mut self.target_module,
            FormField::TargetFunction => &mut self.target_function,
        }
    }

    /// Update one field, preserving the others. Never fails.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// Clear the user-entered fields; target identifiers are kept so the
    /// next mint can reuse them.
    pub fn reset(&mut self) {
        for field in FormField::USER_FIELDS {
            self.field_mut(field).clear();
        }
    }

    /// True iff every user field is non-blank after trimming and a target
    /// package is set.
    pub fn is_submittable(&self) -> bool {
        FormField::USER_FIELDS
            .iter()
            .all(|field| !self.field(*field).trim().is_empty())
            && !self.target_package.trim().is_empty()
    }

    /// Trimmed request snapshot, or None when the form is not submittable.
    /// Blank module/function fall back to the canonical contract names.
    pub fn to_request(&self) -> Option<MintRequest> {
        if !self.is_submittable() {
            return None;
        }
        let fallback = |value: &str, default: &str| {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                default.to_string()
            } else {
                trimmed.to_string()
            }
        };
        Some(MintRequest {
            recipient_address: self.recipient_address.trim().to_string(),
            image_reference: self.image_reference.trim().to_string(),
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            target_package: self.target_package.trim().to_string(),
            target_module: fallback(&self.target_module, crate::constants::DEFAULT_TARGET_MODULE),
            target_function: fallback(
                &self.target_function,
                crate::constants::DEFAULT_TARGET_FUNCTION,
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> MintForm {
        let mut form = MintForm::new(&AppConfig::default());
        form.set_field(FormField::RecipientAddress, "0xabc");
        form.set_field(FormField::ImageReference, "https://x/y.png");
        form.set_field(FormField::Name, "Card");
        form.set_field(FormField::Description, "Demo");
        form.set_field(FormField::TargetPackage, "0x1");
        form
    }

    #[test]
    fn full_form_is_submittable() {
        assert!(filled_form().is_submittable());
    }

    #[test]
    fn any_blank_user_field_blocks_submission() {
        for field in FormField::USER_FIELDS {
            let mut form = filled_form();
            form.set_field(field, "");
            assert!(!form.is_submittable(), "{:?} blank", field);

            form.set_field(field, "   \t");
            assert!(!form.is_submittable(), "{:?} whitespace", field);
        }
    }

    #[test]
    fn missing_package_blocks_submission() {
        let mut form = filled_form();
        form.set_field(FormField::TargetPackage, "  ");
        assert!(!form.is_submittable());
        assert!(form.to_request().is_none());
    }

    #[test]
    fn set_field_preserves_other_fields() {
        let mut form = filled_form();
        form.set_field(FormField::Name, "Other");
        assert_eq!(form.recipient_address, "0xabc");
        assert_eq!(form.image_reference, "https://x/y.png");
        assert_eq!(form.name, "Other");
        assert_eq!(form.description, "Demo");
        assert_eq!(form.target_package, "0x1");
    }

    #[test]
    fn reset_clears_user_fields_and_keeps_targets() {
        let mut form = filled_form();
        form.reset();
        for field in FormField::USER_FIELDS {
            assert_eq!(form.field(field), "");
        }
        assert_eq!(form.target_package, "0x1");
        assert_eq!(form.target_module, "loyalty_card");
        assert_eq!(form.target_function, "mint_loyalty");
    }

    #[test]
    fn request_is_trimmed_and_defaults_apply() {
        let mut form = filled_form();
        form.set_field(FormField::Name, "  Card  ");
        form.set_field(FormField::TargetModule, "");
        form.set_field(FormField::TargetFunction, "  ");
        let request = form.to_request().unwrap();
        assert_eq!(request.name, "Card");
        assert_eq!(request.target_module, "loyalty_card");
        assert_eq!(request.target_function, "mint_loyalty");
    }
}
