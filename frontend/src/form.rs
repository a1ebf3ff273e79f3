use payloads::BusinessQuery;

pub const NAME_REQUIRED: &str = "Business name is required";
pub const LOCATION_REQUIRED: &str = "Location is required";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Location,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusinessForm {
    pub name: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub location: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.location.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name => self.name,
            Field::Location => self.location,
        }
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Location => self.location = None,
        }
    }
}

impl BusinessForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Location => self.location = value,
        }
    }

    /// Blank after trimming is missing. The query keeps the text as typed.
    pub fn validate(&self) -> Result<BusinessQuery, FieldErrors> {
        let errors = FieldErrors {
            name: self.name.trim().is_empty().then_some(NAME_REQUIRED),
            location: self.location.trim().is_empty().then_some(LOCATION_REQUIRED),
        };

        if errors.is_empty() {
            Ok(self.query())
        } else {
            Err(errors)
        }
    }

    pub fn query(&self) -> BusinessQuery {
        BusinessQuery::new(self.name.clone(), self.location.clone())
    }
}
